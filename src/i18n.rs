//! Internationalization support for settings labels.
//!
//! Provides cached translation strings for weekday names, month names,
//! meridiem markers and settings headings. All strings are pre-built once
//! per language so label tables never format translations on lookup.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Supported languages in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
pub enum Language {
    /// English
    #[default]
    English,
    /// Simplified Chinese
    SimplifiedChinese,
    /// Traditional Chinese
    TraditionalChinese,
    /// Japanese
    Japanese,
}

impl Language {
    /// Number of supported languages.
    pub const COUNT: usize = 4;

    /// Returns all available languages.
    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::SimplifiedChinese,
            Language::TraditionalChinese,
            Language::Japanese,
        ]
    }

    /// Returns the display name of the language.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::SimplifiedChinese => "简体中文",
            Language::TraditionalChinese => "繁體中文",
            Language::Japanese => "日本語",
        }
    }

    /// Stable position of the language in [`Language::all`].
    pub fn index(&self) -> usize {
        match self {
            Language::English => 0,
            Language::SimplifiedChinese => 1,
            Language::TraditionalChinese => 2,
            Language::Japanese => 3,
        }
    }

    /// Pattern used for the locale's long date style.
    pub fn long_date_pattern(&self) -> &'static str {
        get_raw_translation(*self, RawKey::LongDatePattern)
    }
}

/// Cached translations for one language.
/// All strings are pre-built and stored in an Arc for efficient cloning.
#[derive(Clone)]
pub struct CachedTranslations {
    inner: Arc<TranslationCache>,
}

struct TranslationCache {
    language: Language,
    weekday_names: [String; 7],
    month_names: [String; 12],
    am_lower: String,
    pm_lower: String,
    am_upper: String,
    pm_upper: String,
    date_format_title: String,
    time_format_title: String,
    start_of_week_title: String,
}

impl CachedTranslations {
    /// Creates a new cached translations instance for the specified language.
    pub fn new(lang: Language) -> Self {
        let inner = Arc::new(TranslationCache::new(lang));
        Self { inner }
    }

    pub fn language(&self) -> Language {
        self.inner.language
    }

    /// Weekday name where 0 is Sunday. Out of range indices wrap around.
    pub fn weekday_name(&self, weekday: u8) -> &str {
        &self.inner.weekday_names[usize::from(weekday) % 7]
    }

    /// Month name for a 1-based month number.
    pub fn month_name(&self, month: u8) -> &str {
        let index = usize::from(month.clamp(1, 12)) - 1;
        &self.inner.month_names[index]
    }

    /// Meridiem marker for a 24-hour clock hour.
    pub fn meridiem(&self, hour: u8, uppercase: bool) -> &str {
        match (hour < 12, uppercase) {
            (true, false) => &self.inner.am_lower,
            (false, false) => &self.inner.pm_lower,
            (true, true) => &self.inner.am_upper,
            (false, true) => &self.inner.pm_upper,
        }
    }

    // Settings screen headings
    pub fn date_format_title(&self) -> &str {
        &self.inner.date_format_title
    }
    pub fn time_format_title(&self) -> &str {
        &self.inner.time_format_title
    }
    pub fn start_of_week_title(&self) -> &str {
        &self.inner.start_of_week_title
    }
}

impl TranslationCache {
    fn new(lang: Language) -> Self {
        let raw = |key| get_raw_translation(lang, key).to_string();
        Self {
            language: lang,
            weekday_names: WEEKDAY_KEYS.map(raw),
            month_names: MONTH_KEYS.map(raw),
            am_lower: raw(RawKey::AmLower),
            pm_lower: raw(RawKey::PmLower),
            am_upper: raw(RawKey::AmUpper),
            pm_upper: raw(RawKey::PmUpper),
            date_format_title: raw(RawKey::DateFormatTitle),
            time_format_title: raw(RawKey::TimeFormatTitle),
            start_of_week_title: raw(RawKey::StartOfWeekTitle),
        }
    }
}

const WEEKDAY_KEYS: [RawKey; 7] = [
    RawKey::Sunday,
    RawKey::Monday,
    RawKey::Tuesday,
    RawKey::Wednesday,
    RawKey::Thursday,
    RawKey::Friday,
    RawKey::Saturday,
];

const MONTH_KEYS: [RawKey; 12] = [
    RawKey::January,
    RawKey::February,
    RawKey::March,
    RawKey::April,
    RawKey::May,
    RawKey::June,
    RawKey::July,
    RawKey::August,
    RawKey::September,
    RawKey::October,
    RawKey::November,
    RawKey::December,
];

/// Raw translation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawKey {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,

    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,

    AmLower,
    PmLower,
    AmUpper,
    PmUpper,

    LongDatePattern,
    DateFormatTitle,
    TimeFormatTitle,
    StartOfWeekTitle,
}

/// Gets raw translation string without formatting.
fn get_raw_translation(lang: Language, key: RawKey) -> &'static str {
    match (lang, key) {
        // Days of the week
        (Language::English, RawKey::Sunday) => "Sunday",
        (Language::SimplifiedChinese, RawKey::Sunday) => "星期日",
        (Language::TraditionalChinese, RawKey::Sunday) => "星期日",
        (Language::Japanese, RawKey::Sunday) => "日曜日",

        (Language::English, RawKey::Monday) => "Monday",
        (Language::SimplifiedChinese, RawKey::Monday) => "星期一",
        (Language::TraditionalChinese, RawKey::Monday) => "星期一",
        (Language::Japanese, RawKey::Monday) => "月曜日",

        (Language::English, RawKey::Tuesday) => "Tuesday",
        (Language::SimplifiedChinese, RawKey::Tuesday) => "星期二",
        (Language::TraditionalChinese, RawKey::Tuesday) => "星期二",
        (Language::Japanese, RawKey::Tuesday) => "火曜日",

        (Language::English, RawKey::Wednesday) => "Wednesday",
        (Language::SimplifiedChinese, RawKey::Wednesday) => "星期三",
        (Language::TraditionalChinese, RawKey::Wednesday) => "星期三",
        (Language::Japanese, RawKey::Wednesday) => "水曜日",

        (Language::English, RawKey::Thursday) => "Thursday",
        (Language::SimplifiedChinese, RawKey::Thursday) => "星期四",
        (Language::TraditionalChinese, RawKey::Thursday) => "星期四",
        (Language::Japanese, RawKey::Thursday) => "木曜日",

        (Language::English, RawKey::Friday) => "Friday",
        (Language::SimplifiedChinese, RawKey::Friday) => "星期五",
        (Language::TraditionalChinese, RawKey::Friday) => "星期五",
        (Language::Japanese, RawKey::Friday) => "金曜日",

        (Language::English, RawKey::Saturday) => "Saturday",
        (Language::SimplifiedChinese, RawKey::Saturday) => "星期六",
        (Language::TraditionalChinese, RawKey::Saturday) => "星期六",
        (Language::Japanese, RawKey::Saturday) => "土曜日",

        // Months
        (Language::English, RawKey::January) => "January",
        (Language::SimplifiedChinese, RawKey::January) => "一月",
        (Language::TraditionalChinese, RawKey::January) => "一月",
        (Language::Japanese, RawKey::January) => "1月",

        (Language::English, RawKey::February) => "February",
        (Language::SimplifiedChinese, RawKey::February) => "二月",
        (Language::TraditionalChinese, RawKey::February) => "二月",
        (Language::Japanese, RawKey::February) => "2月",

        (Language::English, RawKey::March) => "March",
        (Language::SimplifiedChinese, RawKey::March) => "三月",
        (Language::TraditionalChinese, RawKey::March) => "三月",
        (Language::Japanese, RawKey::March) => "3月",

        (Language::English, RawKey::April) => "April",
        (Language::SimplifiedChinese, RawKey::April) => "四月",
        (Language::TraditionalChinese, RawKey::April) => "四月",
        (Language::Japanese, RawKey::April) => "4月",

        (Language::English, RawKey::May) => "May",
        (Language::SimplifiedChinese, RawKey::May) => "五月",
        (Language::TraditionalChinese, RawKey::May) => "五月",
        (Language::Japanese, RawKey::May) => "5月",

        (Language::English, RawKey::June) => "June",
        (Language::SimplifiedChinese, RawKey::June) => "六月",
        (Language::TraditionalChinese, RawKey::June) => "六月",
        (Language::Japanese, RawKey::June) => "6月",

        (Language::English, RawKey::July) => "July",
        (Language::SimplifiedChinese, RawKey::July) => "七月",
        (Language::TraditionalChinese, RawKey::July) => "七月",
        (Language::Japanese, RawKey::July) => "7月",

        (Language::English, RawKey::August) => "August",
        (Language::SimplifiedChinese, RawKey::August) => "八月",
        (Language::TraditionalChinese, RawKey::August) => "八月",
        (Language::Japanese, RawKey::August) => "8月",

        (Language::English, RawKey::September) => "September",
        (Language::SimplifiedChinese, RawKey::September) => "九月",
        (Language::TraditionalChinese, RawKey::September) => "九月",
        (Language::Japanese, RawKey::September) => "9月",

        (Language::English, RawKey::October) => "October",
        (Language::SimplifiedChinese, RawKey::October) => "十月",
        (Language::TraditionalChinese, RawKey::October) => "十月",
        (Language::Japanese, RawKey::October) => "10月",

        (Language::English, RawKey::November) => "November",
        (Language::SimplifiedChinese, RawKey::November) => "十一月",
        (Language::TraditionalChinese, RawKey::November) => "十一月",
        (Language::Japanese, RawKey::November) => "11月",

        (Language::English, RawKey::December) => "December",
        (Language::SimplifiedChinese, RawKey::December) => "十二月",
        (Language::TraditionalChinese, RawKey::December) => "十二月",
        (Language::Japanese, RawKey::December) => "12月",

        // Meridiem markers, only the English ones have a case distinction
        (Language::English, RawKey::AmLower) => "am",
        (Language::SimplifiedChinese, RawKey::AmLower) => "上午",
        (Language::TraditionalChinese, RawKey::AmLower) => "上午",
        (Language::Japanese, RawKey::AmLower) => "午前",

        (Language::English, RawKey::PmLower) => "pm",
        (Language::SimplifiedChinese, RawKey::PmLower) => "下午",
        (Language::TraditionalChinese, RawKey::PmLower) => "下午",
        (Language::Japanese, RawKey::PmLower) => "午後",

        (Language::English, RawKey::AmUpper) => "AM",
        (Language::SimplifiedChinese, RawKey::AmUpper) => "上午",
        (Language::TraditionalChinese, RawKey::AmUpper) => "上午",
        (Language::Japanese, RawKey::AmUpper) => "午前",

        (Language::English, RawKey::PmUpper) => "PM",
        (Language::SimplifiedChinese, RawKey::PmUpper) => "下午",
        (Language::TraditionalChinese, RawKey::PmUpper) => "下午",
        (Language::Japanese, RawKey::PmUpper) => "午後",

        // Long date style
        (Language::English, RawKey::LongDatePattern) => "F j, Y",
        (Language::SimplifiedChinese, RawKey::LongDatePattern) => "Y年n月j日",
        (Language::TraditionalChinese, RawKey::LongDatePattern) => "Y年n月j日",
        (Language::Japanese, RawKey::LongDatePattern) => "Y年n月j日",

        // Settings headings
        (Language::English, RawKey::DateFormatTitle) => "Date Format",
        (Language::SimplifiedChinese, RawKey::DateFormatTitle) => "日期格式",
        (Language::TraditionalChinese, RawKey::DateFormatTitle) => "日期格式",
        (Language::Japanese, RawKey::DateFormatTitle) => "日付の形式",

        (Language::English, RawKey::TimeFormatTitle) => "Time Format",
        (Language::SimplifiedChinese, RawKey::TimeFormatTitle) => "时间格式",
        (Language::TraditionalChinese, RawKey::TimeFormatTitle) => "時間格式",
        (Language::Japanese, RawKey::TimeFormatTitle) => "時刻の形式",

        (Language::English, RawKey::StartOfWeekTitle) => "Week Starts On",
        (Language::SimplifiedChinese, RawKey::StartOfWeekTitle) => "每周开始于",
        (Language::TraditionalChinese, RawKey::StartOfWeekTitle) => "每週開始於",
        (Language::Japanese, RawKey::StartOfWeekTitle) => "週の始まり",
    }
}
