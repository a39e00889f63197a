use crate::LoadError;
use log::*;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "/usr/local/etc/xray/config.json";

pub fn load_config(path: &Path) -> Result<Value, LoadError> {
    debug!("Loading Xray config from {}", path.display());

    if !path.is_file() {
        return Err(LoadError::NotFound {
            path: path.to_owned(),
        });
    }

    let file = File::open(path).map_err(|source| LoadError::Read {
        path: path.to_owned(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| LoadError::Parse {
        path: path.to_owned(),
        source,
    })
}
