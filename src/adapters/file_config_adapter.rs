//! INI file configuration adapter.

use crate::domain::error::ChartscanError;
use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ChartscanError> {
        let mut config = Ini::new();
        config
            .load(path.as_ref())
            .map_err(|e| ChartscanError::ConfigParse {
                file: path.as_ref().display().to_string(),
                reason: e,
            })?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, ChartscanError> {
        let mut config = Ini::new();
        config
            .read(content.to_string())
            .map_err(|reason| ChartscanError::ConfigParse {
                file: "<inline>".into(),
                reason,
            })?;
        Ok(Self { config })
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.config
            .getint(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.config
            .getfloat(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        let Some(value) = self.config.get(section, key) else {
            return default;
        };
        match value.to_lowercase().as_str() {
            "true" | "yes" | "1" => true,
            "false" | "no" | "0" => false,
            _ => default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
[data]
csv_dir = /tmp/quotes
code = BHP
exchange = ASX
start_date = 2023-01-01
end_date = 2024-01-01
pretty = yes
";

    #[test]
    fn reads_strings() {
        let config = FileConfigAdapter::from_string(SAMPLE).unwrap();
        assert_eq!(
            config.get_string("data", "csv_dir"),
            Some("/tmp/quotes".to_string())
        );
        assert_eq!(config.get_string("data", "code"), Some("BHP".to_string()));
        assert_eq!(config.get_string("data", "missing"), None);
    }

    #[test]
    fn bool_spellings_and_default() {
        let config = FileConfigAdapter::from_string(SAMPLE).unwrap();
        assert!(config.get_bool("data", "pretty", false));
        assert!(!config.get_bool("data", "missing", false));
        assert!(config.get_bool("data", "missing", true));
    }

    #[test]
    fn numeric_defaults() {
        let config = FileConfigAdapter::from_string(SAMPLE).unwrap();
        assert_eq!(config.get_int("data", "missing", 42), 42);
        assert_eq!(config.get_double("data", "missing", 0.5), 0.5);
    }

    #[test]
    fn rejects_missing_file() {
        assert!(FileConfigAdapter::from_file("/no/such/file.ini").is_err());
    }
}
