//! Reading config layers from disk.

use super::{
    ConfigLayer, ConfigLayerSource, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILE, LoadedLayer, schema,
};
use crate::ConfigError;
use directories::UserDirs;
use log::debug;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Load a discovered layer; a file that does not exist is skipped.
pub(super) fn load_optional_layer(
    source: ConfigLayerSource,
    path: &Path,
) -> Result<Option<LoadedLayer>, ConfigError> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_layer(source, path, &contents).map(Some),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(
                "no {} layer at {}",
                source.name(),
                path.display()
            );
            Ok(None)
        }
        Err(err) => Err(ConfigError::read(path, err)),
    }
}

/// Load a layer named explicitly by the caller; it must exist.
pub(super) fn load_required_layer(
    source: ConfigLayerSource,
    path: &Path,
) -> Result<LoadedLayer, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|err| ConfigError::read(path, err))?;
    parse_layer(source, path, &contents)
}

fn parse_layer(
    source: ConfigLayerSource,
    path: &Path,
    contents: &str,
) -> Result<LoadedLayer, ConfigError> {
    debug!(
        "parsing {} layer (path={}, len={})",
        source.name(),
        path.display(),
        contents.len()
    );
    let value: Value = json5::from_str(contents)?;
    schema::validate_layer_schema(&value, &layer_label(source, path))?;
    Ok(LoadedLayer {
        meta: ConfigLayer {
            source,
            path: path.to_path_buf(),
        },
        value,
    })
}

/// Label naming the layer and its file, e.g. `cwd(/work/netrec.json5)`.
fn layer_label(source: ConfigLayerSource, path: &Path) -> String {
    format!("{}({})", source.name(), path.display())
}

/// `~/.netrec/netrec.json5`, when a home directory is known.
pub(super) fn default_user_config_path() -> Option<PathBuf> {
    let dirs = UserDirs::new()?;
    Some(
        dirs.home_dir()
            .join(DEFAULT_CONFIG_DIR)
            .join(DEFAULT_CONFIG_FILE),
    )
}
