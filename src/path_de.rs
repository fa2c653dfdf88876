//! Loading TSL documents from JSON or YAML, with the path of the failing node
//! in every syntax error.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::LoadError;
use crate::model::TslDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// `.yaml` / `.yml` → YAML, anything else → JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => Format::Yaml,
            _ => Format::Json,
        }
    }
}

/// Deserialize with JSON-path context in error messages.
pub fn from_json_str<T: DeserializeOwned>(src: &str) -> Result<T, LoadError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| {
        let path = err.path().to_string();
        LoadError::Syntax(format!("at JSON path {path} → {}", err.into_inner()))
    })
}

pub fn from_yaml_str<T: DeserializeOwned>(src: &str) -> Result<T, LoadError> {
    let de = serde_yaml::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| {
        let path = err.path().to_string();
        LoadError::Syntax(format!("at YAML path {path} → {}", err.into_inner()))
    })
}

pub fn from_value(value: serde_json::Value) -> Result<TslDocument, LoadError> {
    serde_path_to_error::deserialize::<_, TslDocument>(value).map_err(|err| {
        let path = err.path().to_string();
        LoadError::Syntax(format!("at JSON path {path} → {}", err.into_inner()))
    })
}

pub fn parse_document(src: &str, format: Format) -> Result<TslDocument, LoadError> {
    match format {
        Format::Json => from_json_str(src),
        Format::Yaml => from_yaml_str(src),
    }
}

pub fn read_source(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })
}

/// Read and parse one document; `format` falls back to the file extension.
pub fn load_document(path: &Path, format: Option<Format>) -> Result<TslDocument, LoadError> {
    let src = read_source(path)?;
    parse_document(&src, format.unwrap_or_else(|| Format::from_path(path)))
}
