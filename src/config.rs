use eyre::{Error, WrapErr};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub data_file: PathBuf,
    pub confirm_overwrite: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from("subjects.csv"),
            confirm_overwrite: true,
        }
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config, Error> {
        let content = std::fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot load configuration file {}", file_name.display()))?;
        Config::parse(&content)
            .wrap_err_with(|| format!("cannot parse configuration file {}", file_name.display()))
    }

    /// Load `file_name` if given, or the default configuration file if it
    /// exists, or fall back to defaults.
    pub fn load_or_default(file_name: Option<&Path>) -> Result<Config, Error> {
        match file_name {
            Some(file_name) => Config::load(file_name),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Config::load(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Config::default()),
        }
    }

    pub fn parse(content: &str) -> Result<Config, Error> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
        assert_eq!(Config::default().data_file, PathBuf::from("subjects.csv"));
        assert!(Config::default().confirm_overwrite);
    }

    #[test]
    fn test_parse() {
        let config = Config::parse("data_file = \"catalog.csv\"\nconfirm_overwrite = false\n").unwrap();
        assert_eq!(config.data_file, PathBuf::from("catalog.csv"));
        assert!(!config.confirm_overwrite);
        let config = Config::parse("confirm_overwrite = false").unwrap();
        assert_eq!(config.data_file, PathBuf::from("subjects.csv"));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(Config::parse("data_fiel = \"x.csv\"").is_err());
        assert!(Config::parse("confirm_overwrite = \"maybe\"").is_err());
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(Config::load_or_default(Some(missing.as_path())).is_err());
        let present = dir.path().join("dashboard.toml");
        std::fs::write(&present, "data_file = \"other.csv\"\n").unwrap();
        assert_eq!(
            Config::load_or_default(Some(present.as_path())).unwrap().data_file,
            PathBuf::from("other.csv")
        );
    }
}
