use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::format::{CalendarFormatter, LocaleFormatter, NumberFormatter};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("[format] month_names must list exactly 12 names, got {0}")]
    MonthNames(usize),
}

#[derive(Debug, Deserialize, Default)]
pub struct PickerConfig {
    pub format: Option<FormatConfig>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FormatConfig {
    pub separator:   Option<String>,
    pub month_names: Option<Vec<String>>,
}

impl PickerConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_dir().join("config.toml");
        if path.exists() {
            Self::from_toml(&std::fs::read_to_string(&path)?)
        } else {
            Ok(PickerConfig::default())
        }
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let cfg: PickerConfig = toml::from_str(text)?;
        if let Some(names) = cfg.format.as_ref().and_then(|f| f.month_names.as_ref()) {
            if names.len() != 12 {
                return Err(ConfigError::MonthNames(names.len()));
            }
        }
        Ok(cfg)
    }

    /// Formatter described by the `[format]` table. No table, or a bare
    /// separator override, keeps the numeric `D/M/Y` default; month names
    /// switch to the name-aware formatter.
    pub fn formatter(&self) -> Box<dyn CalendarFormatter> {
        let Some(format) = &self.format else {
            return Box::new(NumberFormatter);
        };
        match &format.month_names {
            Some(names) => {
                let mut f = LocaleFormatter::default();
                if let Some(sep) = &format.separator {
                    f.separator = sep.clone();
                }
                for (slot, name) in f.month_names.iter_mut().zip(names) {
                    *slot = name.clone();
                }
                Box::new(f)
            }
            None => match format.separator.as_deref() {
                None | Some("/") => Box::new(NumberFormatter),
                Some(sep) => {
                    // Numeric layout with a custom separator.
                    let mut f = LocaleFormatter {
                        separator: sep.to_owned(),
                        ..LocaleFormatter::default()
                    };
                    for (i, slot) in f.month_names.iter_mut().enumerate() {
                        *slot = (i + 1).to_string();
                    }
                    Box::new(f)
                }
            },
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("calpick")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_keeps_the_numeric_default() {
        let cfg = PickerConfig::from_toml("").unwrap();
        let f = cfg.formatter();
        assert_eq!(f.format_string(4, 6, 2021), "4/7/2021");
    }

    #[test]
    fn month_names_switch_to_the_locale_formatter() {
        let cfg = PickerConfig::from_toml(
            r#"
            [format]
            separator = "-"
            month_names = ["Jan","Feb","Mar","Apr","May","Jun","Jul","Aug","Sep","Oct","Nov","Dec"]
            "#,
        )
        .unwrap();
        let f = cfg.formatter();
        assert_eq!(f.format_string(4, 6, 2021), "4-Jul-2021");
        let parsed = f.parse("4-Jul-2021");
        assert_eq!((parsed.date, parsed.month, parsed.year), (4, 6, 2021));
    }

    #[test]
    fn custom_separator_stays_numeric() {
        let cfg = PickerConfig::from_toml("[format]\nseparator = \".\"\n").unwrap();
        let f = cfg.formatter();
        assert_eq!(f.format_string(4, 6, 2021), "4.7.2021");
        let parsed = f.parse("4.7.2021");
        assert_eq!((parsed.date, parsed.month, parsed.year), (4, 6, 2021));
    }

    #[test]
    fn wrong_month_name_count_is_rejected() {
        let err = PickerConfig::from_toml("[format]\nmonth_names = [\"Jan\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::MonthNames(1)));
    }
}
