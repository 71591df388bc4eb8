//! Shared entry point for the per-preset generator binaries.
//!
//! Each binary renders exactly one hardcoded preset into the working
//! directory and prints a confirmation line naming the file.

use logo_core::DesignVariant;
use logo_render::{Result, create_logo_variant};
use std::path::Path;

/// Install the `env_logger` backend; `RUST_LOG` overrides the `info` default.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Render `variant` into the current directory and announce it on stdout.
pub fn generate(variant: &DesignVariant) -> Result<()> {
    let path = create_logo_variant(Path::new("."), variant)?;
    let name = path.file_name().unwrap_or(path.as_os_str());
    println!("Created {}", name.to_string_lossy());
    Ok(())
}
