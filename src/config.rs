use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::i18n::Language;
use crate::labels::{
    DateFormat, DayOfWeek, LabelResolver, SettingCategory, SettingValue, TimeFormat,
};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)] // Default to English for backward compatibility
    pub language: Language,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub blog: BlogSettings,
}

/// Raw date and time preferences of a blog.
///
/// Values are kept as the stored strings so tokens this client does not know
/// yet survive a load and save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BlogSettings {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_time_format")]
    pub time_format: String,
    #[serde(default = "default_start_of_week")]
    pub start_of_week: String,
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_date_format() -> String {
    DateFormat::MonthDayYear.token().to_string()
}
fn default_time_format() -> String {
    TimeFormat::LowercaseMeridiem.token().to_string()
}
fn default_start_of_week() -> String {
    DayOfWeek::Monday.token().to_string()
}

impl Default for BlogSettings {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            time_format: default_time_format(),
            start_of_week: default_start_of_week(),
        }
    }
}

impl BlogSettings {
    pub fn date_format_description<'a>(&'a self, resolver: &'a LabelResolver) -> &'a str {
        resolver.label(SettingCategory::DateFormat, &self.date_format)
    }

    pub fn time_format_description<'a>(&'a self, resolver: &'a LabelResolver) -> &'a str {
        resolver.label(SettingCategory::TimeFormat, &self.time_format)
    }

    pub fn start_of_week_description<'a>(&'a self, resolver: &'a LabelResolver) -> &'a str {
        resolver.label(SettingCategory::StartOfWeek, &self.start_of_week)
    }

    pub fn date_format(&self) -> Option<DateFormat> {
        DateFormat::from_token(&self.date_format)
    }

    pub fn time_format(&self) -> Option<TimeFormat> {
        TimeFormat::from_token(&self.time_format)
    }

    pub fn start_of_week(&self) -> Option<DayOfWeek> {
        DayOfWeek::from_token(&self.start_of_week)
    }

    pub fn set_date_format(&mut self, format: DateFormat) {
        self.date_format = format.token().to_string();
    }

    pub fn set_time_format(&mut self, format: TimeFormat) {
        self.time_format = format.token().to_string();
    }

    pub fn set_start_of_week(&mut self, day: DayOfWeek) {
        self.start_of_week = day.token().to_string();
    }

    /// Categories whose stored value has no label in this client.
    pub fn unrecognized(&self) -> Vec<SettingCategory> {
        SettingCategory::all()
            .iter()
            .copied()
            .filter(|category| {
                let raw = self.raw(*category);
                !category.tokens().iter().any(|token| *token == raw)
            })
            .collect()
    }

    /// Raw value stored for `category`.
    pub fn raw(&self, category: SettingCategory) -> &str {
        match category {
            SettingCategory::DateFormat => &self.date_format,
            SettingCategory::TimeFormat => &self.time_format,
            SettingCategory::StartOfWeek => &self.start_of_week,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            log_level: default_log_level(),
            blog: BlogSettings::default(),
        }
    }
}

impl AppConfig {
    /// Load config from file, or create default if not exists
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        if !path.as_ref().exists() {
            let default_config = Self::default();
            default_config.save_to_file(&path)?;
            return Ok(default_config);
        }
        Self::load_from_file(path)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: AppConfig = toml::from_str(&content)?;

        // Validate configuration
        if config.log_level.trim().is_empty() {
            config.log_level = default_log_level();
        }

        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        // Add comments to make the config file more readable
        let content = format!(
            "language = \"{:?}\"        # English, SimplifiedChinese, TraditionalChinese or Japanese\n\
             log_level = {}            # Default log filter, RUST_LOG takes precedence\n\n\
             # Stored blog settings to describe\n\
             [blog]\n\
             date_format = {}       # F j, Y | Y-m-d | m/d/Y | d/m/Y\n\
             time_format = {}        # g:i a | g:i A | H:i\n\
             start_of_week = {}          # 0 = Sunday ... 6 = Saturday\n",
            self.language,
            toml_string(&self.log_level),
            toml_string(&self.blog.date_format),
            toml_string(&self.blog.time_format),
            toml_string(&self.blog.start_of_week),
        );

        fs::write(path, content)?;
        Ok(())
    }
}

/// Quotes a value as a TOML string.
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
