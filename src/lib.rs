//! Localized labels for blog date and time settings.
//!
//! Maps stored setting tokens such as `"Y-m-d"` or `"g:i a"` to the text shown
//! in a settings screen, with the full choice lists for pickers.

pub mod config;
pub mod i18n;
pub mod labels;
pub mod sample;

pub use config::{AppConfig, BlogSettings};
pub use i18n::{CachedTranslations, Language};
pub use labels::{
    DateFormat, DayOfWeek, LabelResolver, SettingCategory, SettingValue, TimeFormat, UnknownToken,
};
pub use sample::{REFERENCE_INSTANT, ReferenceInstant};
