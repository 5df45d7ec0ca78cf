use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use cardqr_core::{EncodeOptions, PayloadFormat};
use cardqr_render::{Color, ErrorCorrection, QrStyle};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "cardqr";
const CONFIG_FILENAME: &str = "config.toml";

pub const MAX_MODULE_SIZE: u32 = 64;
pub const MAX_QUIET_ZONE: u32 = 32;

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub format: PayloadFormat,
    pub encode: EncodeOptions,
    pub qr: QrStyle,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid module_size value: {0} (expected 1..=64)")]
    InvalidModuleSize(u32),
    #[error("invalid quiet_zone value: {0} (expected 0..=32)")]
    InvalidQuietZone(u32),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    format: Option<PayloadFormat>,
    vcard: Option<VcardFile>,
    qr: Option<QrFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct VcardFile {
    escape_values: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct QrFile {
    fill: Option<Color>,
    background: Option<Color>,
    module_size: Option<u32>,
    quiet_zone: Option<u32>,
    error_correction: Option<ErrorCorrection>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

pub fn validate_module_size(value: u32) -> Result<u32> {
    if value == 0 || value > MAX_MODULE_SIZE {
        return Err(ConfigError::InvalidModuleSize(value));
    }
    Ok(value)
}

pub fn validate_quiet_zone(value: u32) -> Result<u32> {
    if value > MAX_QUIET_ZONE {
        return Err(ConfigError::InvalidQuietZone(value));
    }
    Ok(value)
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(format) = parsed.format {
        config.format = format;
    }

    if let Some(vcard) = parsed.vcard {
        if let Some(escape) = vcard.escape_values {
            config.encode.escape_vcard = escape;
        }
    }

    if let Some(qr) = parsed.qr {
        if let Some(fill) = qr.fill {
            config.qr.fill = fill;
        }
        if let Some(background) = qr.background {
            config.qr.background = background;
        }
        if let Some(module_size) = qr.module_size {
            config.qr.module_size = validate_module_size(module_size)?;
        }
        if let Some(quiet_zone) = qr.quiet_zone {
            config.qr.quiet_zone = validate_quiet_zone(quiet_zone)?;
        }
        if let Some(level) = qr.error_correction {
            config.qr.error_correction = level;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, ConfigFile, QrFile, VcardFile};
    use cardqr_core::PayloadFormat;
    use cardqr_render::{Color, ErrorCorrection};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            format: Some(PayloadFormat::Text),
            vcard: Some(VcardFile {
                escape_values: Some(false),
            }),
            qr: Some(QrFile {
                fill: Some(Color::rgb(0x11, 0x22, 0x33)),
                background: Some(Color::WHITE),
                module_size: Some(8),
                quiet_zone: Some(2),
                error_correction: Some(ErrorCorrection::H),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.format, PayloadFormat::Text);
        assert!(!merged.encode.escape_vcard);
        assert_eq!(merged.qr.fill, Color::rgb(0x11, 0x22, 0x33));
        assert_eq!(merged.qr.background, Color::WHITE);
        assert_eq!(merged.qr.module_size, 8);
        assert_eq!(merged.qr.quiet_zone, 2);
        assert_eq!(merged.qr.error_correction, ErrorCorrection::H);
    }

    #[test]
    fn merge_config_keeps_defaults() {
        let parsed = ConfigFile {
            format: None,
            vcard: None,
            qr: None,
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.format, PayloadFormat::Vcard);
        assert!(merged.encode.escape_vcard);
        assert_eq!(merged.qr.fill, Color::BLACK);
        assert_eq!(merged.qr.background, Color::rgb(0xf0, 0xf0, 0xf0));
        assert_eq!(merged.qr.module_size, 10);
        assert_eq!(merged.qr.quiet_zone, 4);
    }

    #[test]
    fn merge_config_rejects_zero_module_size() {
        let parsed = ConfigFile {
            format: None,
            vcard: None,
            qr: Some(QrFile {
                fill: None,
                background: None,
                module_size: Some(0),
                quiet_zone: None,
                error_correction: None,
            }),
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(err.to_string().contains("module_size"));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
    }

    #[test]
    fn load_at_path_skips_missing_optional_file() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        assert!(load_at_path(&missing, false).expect("load").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "format = \"text\"\n[vcard]\nescape_values = false\n[qr]\nfill = \"#336699\"\nerror_correction = \"q\"\n",
        )
        .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.format, PayloadFormat::Text);
        assert!(!config.encode.escape_vcard);
        assert_eq!(config.qr.fill, Color::rgb(0x33, 0x66, 0x99));
        assert_eq!(config.qr.error_correction, ErrorCorrection::Q);
    }

    #[test]
    fn load_at_path_rejects_bad_color() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "[qr]\nfill = \"blue\"\n").expect("write config");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "colour = \"red\"\n").expect("write config");

        assert!(load_at_path(&path, true).is_err());
    }
}
