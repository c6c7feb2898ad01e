//! Configuration sources: config files and FSPLAN_* environment overlay

use super::CONFIG_FILE_NAME;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use std::path::Path;

/// Add `<dir>/fsplan.toml` when it exists.
pub fn add_directory_file(
    builder: ConfigBuilder<DefaultState>,
    dir: &Path,
) -> ConfigBuilder<DefaultState> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() {
        add_file(builder, &path)
    } else {
        builder
    }
}

/// Add an explicit TOML file.
pub fn add_file(builder: ConfigBuilder<DefaultState>, path: &Path) -> ConfigBuilder<DefaultState> {
    builder.add_source(File::from(path).format(FileFormat::Toml).required(true))
}

/// Add environment variable overlay.
/// Uses FSPLAN prefix and __ as separator for nested keys.
pub fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("FSPLAN")
            .separator("__")
            .try_parsing(true),
    )
}
