use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charset::Charset;
use crate::error::{Error, Result};

/// Allow-list configuration.
///
/// ```json
/// { "preset": "alphanumeric" }
/// { "bytes": "ABCxyz" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharsetConfig {
    /// Named allow-list.
    Preset(String),
    /// Explicit allowed bytes, given as an ASCII string.
    Bytes(String),
}

impl Default for CharsetConfig {
    fn default() -> Self {
        CharsetConfig::Preset("alphanumeric".into())
    }
}

impl CharsetConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let cfg = Self::from_json(&text)?;
        debug!(path = %path.display(), ?cfg, "loaded charset config");
        Ok(cfg)
    }

    pub fn build(&self) -> Result<Charset> {
        match self {
            CharsetConfig::Preset(name) => match name.as_str() {
                "alphanumeric" => Ok(Charset::alphanumeric()),
                other => Err(Error::Config(format!("unknown charset preset '{other}'"))),
            },
            CharsetConfig::Bytes(bytes) => {
                if bytes.is_empty() {
                    return Err(Error::Config("charset byte list is empty".into()));
                }
                if !bytes.is_ascii() {
                    return Err(Error::Config("charset bytes must be ASCII".into()));
                }
                Ok(Charset::from_bytes(bytes.as_bytes()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_alphanumeric() {
        let cs = CharsetConfig::default().build().unwrap();
        assert_eq!(cs, Charset::alphanumeric());
    }

    #[test]
    fn parses_both_forms() {
        let preset = CharsetConfig::from_json(r#"{"preset":"alphanumeric"}"#).unwrap();
        assert_eq!(preset, CharsetConfig::default());

        let bytes = CharsetConfig::from_json(r#"{"bytes":"xy"}"#).unwrap();
        assert_eq!(bytes.build().unwrap().combinations(), &[0x7878, 0x7879, 0x7978, 0x7979]);
    }

    #[test]
    fn rejects_bad_configs() {
        let unknown = CharsetConfig::Preset("klingon".into()).build();
        assert!(matches!(unknown, Err(Error::Config(_))));
        assert!(CharsetConfig::Bytes(String::new()).build().is_err());
        assert!(CharsetConfig::Bytes("é".into()).build().is_err());
        assert!(matches!(
            CharsetConfig::from_json("{\"nope\": 1}"),
            Err(Error::Json(_))
        ));
    }
}
