//! Render command.
//!
//! Responsibilities:
//! - Resolve the provider config against the process environment.
//! - Write the rendered cloud-config to stdout or a file.
//!
//! Invariants:
//! - Output files end up with owner-only permissions on Unix, whether
//!   created or overwritten, since they contain credentials.

use anyhow::{Context, Result};
use osm_config::{ProcessEnv, render_cloud_config};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::info;

use super::read_provider_config;

pub fn run(
    provider_config: &Path,
    kubelet_version: &str,
    output_file: Option<&Path>,
) -> Result<()> {
    let provider =
        read_provider_config(provider_config).context("failed to load provider config")?;

    let rendered = render_cloud_config(&provider, kubelet_version, ProcessEnv)
        .context("failed to generate cloud-config")?;

    match output_file {
        Some(path) => {
            write_private(path, rendered.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote cloud-config");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    // `mode` only applies on creation.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(contents)?;
    file.flush()
}
