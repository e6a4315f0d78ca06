//! Localized labels for stored blog settings tokens.
//!
//! Each settings category (date format, time format, start of week) is a closed
//! enumeration of raw tokens. [`LabelResolver`] builds the label table of every
//! category once per language and answers lookups from it. Unknown tokens are
//! echoed back unchanged so values introduced server-side still display.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use crate::i18n::{CachedTranslations, Language};
use crate::sample::REFERENCE_INSTANT;

/// The settings domains that have a closed token set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingCategory {
    DateFormat,
    TimeFormat,
    StartOfWeek,
}

impl SettingCategory {
    pub fn all() -> &'static [SettingCategory] {
        &[
            SettingCategory::DateFormat,
            SettingCategory::TimeFormat,
            SettingCategory::StartOfWeek,
        ]
    }

    /// Every valid token of the category in canonical order.
    pub fn tokens(self) -> &'static [&'static str] {
        match self {
            SettingCategory::DateFormat => &DATE_FORMAT_TOKENS,
            SettingCategory::TimeFormat => &TIME_FORMAT_TOKENS,
            SettingCategory::StartOfWeek => &DAY_OF_WEEK_TOKENS,
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::DateFormat {}
    impl Sealed for super::TimeFormat {}
    impl Sealed for super::DayOfWeek {}
}

/// A closed set of raw setting tokens with a localized label per token.
///
/// Implemented only by [`DateFormat`], [`TimeFormat`] and [`DayOfWeek`].
pub trait SettingValue: sealed::Sealed + Copy + Sized + 'static {
    const CATEGORY: SettingCategory;

    /// All values in canonical order.
    const ALL: &'static [Self];

    /// Index of the value in [`ALL`](Self::ALL) and in the category's tokens.
    fn position(self) -> usize;

    /// The raw token as stored in blog settings.
    fn token(self) -> &'static str {
        Self::CATEGORY.tokens()[self.position()]
    }

    /// Builds the label shown for this value.
    fn describe(self, translations: &CachedTranslations) -> String;

    fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|value| value.token() == token)
    }
}

/// Error returned when parsing a token that is not part of a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownToken {
    pub category: SettingCategory,
    pub token: String,
}

impl fmt::Display for UnknownToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {:?} token '{}'", self.category, self.token)
    }
}

impl std::error::Error for UnknownToken {}

/// Date format settings, in order of typical usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `F j, Y`, shown in the locale's long date style
    MonthDayYear,
    /// `Y-m-d`
    YearMonthDay,
    /// `m/d/Y`
    MonthDayYearNumeric,
    /// `d/m/Y`
    DayMonthYear,
}

const DATE_FORMAT_TOKENS: [&str; 4] = ["F j, Y", "Y-m-d", "m/d/Y", "d/m/Y"];

impl SettingValue for DateFormat {
    const CATEGORY: SettingCategory = SettingCategory::DateFormat;
    const ALL: &'static [Self] = &[
        DateFormat::MonthDayYear,
        DateFormat::YearMonthDay,
        DateFormat::MonthDayYearNumeric,
        DateFormat::DayMonthYear,
    ];

    fn position(self) -> usize {
        match self {
            DateFormat::MonthDayYear => 0,
            DateFormat::YearMonthDay => 1,
            DateFormat::MonthDayYearNumeric => 2,
            DateFormat::DayMonthYear => 3,
        }
    }

    fn describe(self, translations: &CachedTranslations) -> String {
        match self {
            // The long style is localized, not the literal pattern
            DateFormat::MonthDayYear => REFERENCE_INSTANT.render_long_date(translations),
            DateFormat::YearMonthDay
            | DateFormat::MonthDayYearNumeric
            | DateFormat::DayMonthYear => REFERENCE_INSTANT.render(self.token(), translations),
        }
    }
}

/// Time format settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeFormat {
    /// `g:i a`
    LowercaseMeridiem,
    /// `g:i A`
    UppercaseMeridiem,
    /// `H:i`
    TwentyFourHour,
}

const TIME_FORMAT_TOKENS: [&str; 3] = ["g:i a", "g:i A", "H:i"];

impl SettingValue for TimeFormat {
    const CATEGORY: SettingCategory = SettingCategory::TimeFormat;
    const ALL: &'static [Self] = &[
        TimeFormat::LowercaseMeridiem,
        TimeFormat::UppercaseMeridiem,
        TimeFormat::TwentyFourHour,
    ];

    fn position(self) -> usize {
        match self {
            TimeFormat::LowercaseMeridiem => 0,
            TimeFormat::UppercaseMeridiem => 1,
            TimeFormat::TwentyFourHour => 2,
        }
    }

    fn describe(self, translations: &CachedTranslations) -> String {
        REFERENCE_INSTANT.render(self.token(), translations)
    }
}

/// Days of the week, keyed by the stored `start_of_week` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

const DAY_OF_WEEK_TOKENS: [&str; 7] = ["0", "1", "2", "3", "4", "5", "6"];

impl DayOfWeek {
    /// Weekday number, 0 is Sunday.
    pub fn number(self) -> u8 {
        match self {
            DayOfWeek::Sunday => 0,
            DayOfWeek::Monday => 1,
            DayOfWeek::Tuesday => 2,
            DayOfWeek::Wednesday => 3,
            DayOfWeek::Thursday => 4,
            DayOfWeek::Friday => 5,
            DayOfWeek::Saturday => 6,
        }
    }
}

impl SettingValue for DayOfWeek {
    const CATEGORY: SettingCategory = SettingCategory::StartOfWeek;
    const ALL: &'static [Self] = &[
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    fn position(self) -> usize {
        usize::from(self.number())
    }

    fn describe(self, translations: &CachedTranslations) -> String {
        translations.weekday_name(self.number()).to_string()
    }
}

macro_rules! impl_token_traits {
    ($($ty:ty),* $(,)?) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownToken;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as SettingValue>::from_token(s).ok_or_else(|| UnknownToken {
                    category: <$ty as SettingValue>::CATEGORY,
                    token: s.to_string(),
                })
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.token())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let token = String::deserialize(deserializer)?;
                token.parse().map_err(serde::de::Error::custom)
            }
        }
    )*};
}

impl_token_traits!(DateFormat, TimeFormat, DayOfWeek);

/// Label tables for one language, cheap to clone.
#[derive(Clone)]
pub struct LabelResolver {
    inner: Arc<LabelTables>,
}

struct LabelTables {
    translations: CachedTranslations,
    date_formats: Vec<String>,
    time_formats: Vec<String>,
    days_of_week: Vec<String>,
}

impl LabelTables {
    fn new(lang: Language) -> Self {
        let translations = CachedTranslations::new(lang);
        let date_formats = build_labels::<DateFormat>(&translations);
        let time_formats = build_labels::<TimeFormat>(&translations);
        let days_of_week = build_labels::<DayOfWeek>(&translations);

        log::debug!("built settings label tables for {:?}", lang);

        Self {
            translations,
            date_formats,
            time_formats,
            days_of_week,
        }
    }

    fn labels(&self, category: SettingCategory) -> &[String] {
        match category {
            SettingCategory::DateFormat => &self.date_formats,
            SettingCategory::TimeFormat => &self.time_formats,
            SettingCategory::StartOfWeek => &self.days_of_week,
        }
    }
}

fn build_labels<V: SettingValue>(translations: &CachedTranslations) -> Vec<String> {
    V::ALL
        .iter()
        .map(|value| value.describe(translations))
        .collect()
}

static SHARED_RESOLVERS: [OnceLock<LabelResolver>; Language::COUNT] =
    [const { OnceLock::new() }; Language::COUNT];

impl LabelResolver {
    /// Builds a private set of label tables for `lang`.
    pub fn new(lang: Language) -> Self {
        Self {
            inner: Arc::new(LabelTables::new(lang)),
        }
    }

    /// Process-wide resolver for `lang`, built on first use.
    pub fn shared(lang: Language) -> &'static LabelResolver {
        SHARED_RESOLVERS[lang.index()].get_or_init(|| Self::new(lang))
    }

    pub fn language(&self) -> Language {
        self.inner.translations.language()
    }

    /// Every valid token of `category` in canonical order.
    pub fn all_tokens(&self, category: SettingCategory) -> &'static [&'static str] {
        category.tokens()
    }

    /// Labels of [`all_tokens`](Self::all_tokens), index for index.
    pub fn all_labels(&self, category: SettingCategory) -> &[String] {
        self.inner.labels(category)
    }

    /// Label for a raw token, or the token itself when it is not recognized.
    pub fn label<'a>(&'a self, category: SettingCategory, token: &'a str) -> &'a str {
        let position = category.tokens().iter().position(|known| *known == token);
        match position {
            Some(index) => &self.inner.labels(category)[index],
            None => {
                log::debug!("no label for {:?} token '{}'", category, token);
                token
            }
        }
    }

    /// Label for a typed value.
    pub fn value_label<V: SettingValue>(&self, value: V) -> &str {
        &self.inner.labels(V::CATEGORY)[value.position()]
    }

    /// `(token, label)` pairs for populating a picker.
    pub fn choices(
        &self,
        category: SettingCategory,
    ) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        category
            .tokens()
            .iter()
            .copied()
            .zip(self.all_labels(category).iter().map(String::as_str))
    }

    /// Localized heading for the category's settings row.
    pub fn title(&self, category: SettingCategory) -> &str {
        let translations = &self.inner.translations;
        match category {
            SettingCategory::DateFormat => translations.date_format_title(),
            SettingCategory::TimeFormat => translations.time_format_title(),
            SettingCategory::StartOfWeek => translations.start_of_week_title(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_tokens_match<V: SettingValue>() {
        let tokens: Vec<&str> = V::ALL.iter().map(|value| value.token()).collect();
        assert_eq!(tokens, V::CATEGORY.tokens());
    }

    fn assert_positions_match<V: SettingValue + PartialEq + fmt::Debug>() {
        let resolver = LabelResolver::new(Language::English);
        assert_eq!(V::ALL.len(), V::CATEGORY.tokens().len());
        for (index, value) in V::ALL.iter().enumerate() {
            assert_eq!(value.position(), index);
            assert_eq!(V::ALL[value.position()], *value);
            assert_eq!(
                resolver.value_label(*value),
                resolver.label(V::CATEGORY, value.token())
            );
        }
    }

    #[test]
    fn test_value_positions_index_label_tables() {
        assert_positions_match::<DateFormat>();
        assert_positions_match::<TimeFormat>();
        assert_positions_match::<DayOfWeek>();
    }

    #[test]
    fn test_value_tokens_match_category_tokens() {
        assert_tokens_match::<DateFormat>();
        assert_tokens_match::<TimeFormat>();
        assert_tokens_match::<DayOfWeek>();
    }

    #[test]
    fn test_tables_cover_every_token() {
        for lang in Language::all() {
            let resolver = LabelResolver::new(*lang);
            for category in SettingCategory::all() {
                assert_eq!(
                    resolver.all_tokens(*category).len(),
                    resolver.all_labels(*category).len(),
                    "Mismatched table for {:?} in {:?}",
                    category,
                    lang
                );
            }
        }
    }

    #[test]
    fn test_labels_zip_with_tokens() {
        for lang in Language::all() {
            let resolver = LabelResolver::new(*lang);
            for category in SettingCategory::all() {
                for (token, label) in resolver
                    .all_tokens(*category)
                    .iter()
                    .zip(resolver.all_labels(*category))
                {
                    assert_eq!(resolver.label(*category, token), label.as_str());
                    assert!(!label.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_unknown_token_is_echoed() {
        let resolver = LabelResolver::new(Language::English);
        for category in SettingCategory::all() {
            assert_eq!(
                resolver.label(*category, "not-a-real-token"),
                "not-a-real-token"
            );
            assert_eq!(resolver.label(*category, ""), "");
        }
    }

    #[test]
    fn test_date_format_labels() {
        let resolver = LabelResolver::new(Language::English);
        let category = SettingCategory::DateFormat;

        assert_eq!(resolver.label(category, "F j, Y"), "December 17, 2017");
        assert_eq!(resolver.label(category, "Y-m-d"), "2017-12-17");
        assert_eq!(resolver.label(category, "m/d/Y"), "12/17/2017");
        assert_eq!(resolver.label(category, "d/m/Y"), "17/12/2017");
    }

    #[test]
    fn test_date_format_labels_localized() {
        let resolver = LabelResolver::new(Language::Japanese);
        let category = SettingCategory::DateFormat;

        assert_eq!(resolver.label(category, "F j, Y"), "2017年12月17日");
        assert_eq!(resolver.label(category, "Y-m-d"), "2017-12-17");
    }

    #[test]
    fn test_time_format_labels() {
        let resolver = LabelResolver::new(Language::English);
        let category = SettingCategory::TimeFormat;

        assert_eq!(resolver.label(category, "g:i a"), "5:46 pm");
        assert_eq!(resolver.label(category, "g:i A"), "5:46 PM");
        assert_eq!(resolver.label(category, "H:i"), "17:46");
    }

    #[test]
    fn test_twenty_four_hour_label_is_locale_invariant() {
        for lang in Language::all() {
            let resolver = LabelResolver::new(*lang);
            assert_eq!(resolver.value_label(TimeFormat::TwentyFourHour), "17:46");
        }
    }

    #[test]
    fn test_day_of_week_order() {
        let resolver = LabelResolver::new(Language::English);
        let category = SettingCategory::StartOfWeek;

        assert_eq!(
            resolver.all_tokens(category),
            ["0", "1", "2", "3", "4", "5", "6"]
        );
        assert_eq!(
            resolver.all_labels(category),
            [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday"
            ]
        );
    }

    #[test]
    fn test_day_of_week_localized() {
        let resolver = LabelResolver::new(Language::SimplifiedChinese);
        assert_eq!(resolver.label(SettingCategory::StartOfWeek, "1"), "星期一");
        assert_eq!(resolver.value_label(DayOfWeek::Saturday), "星期六");
    }

    #[test]
    fn test_lookup_is_deterministic() {
        let resolver = LabelResolver::new(Language::TraditionalChinese);
        for category in SettingCategory::all() {
            for token in resolver.all_tokens(*category) {
                let first = resolver.label(*category, token).to_string();
                let second = resolver.label(*category, token).to_string();
                assert_eq!(first, second);
            }
        }

        let rebuilt = LabelResolver::new(Language::TraditionalChinese);
        for category in SettingCategory::all() {
            assert_eq!(resolver.all_labels(*category), rebuilt.all_labels(*category));
        }
    }

    #[test]
    fn test_shared_resolver_is_reused() {
        let first = LabelResolver::shared(Language::Japanese);
        let second = LabelResolver::shared(Language::Japanese);

        assert!(std::ptr::eq(first, second));
        assert_eq!(first.language(), Language::Japanese);
        assert_eq!(LabelResolver::shared(Language::English).language(), Language::English);
    }

    #[test]
    fn test_choices_pairs() {
        let resolver = LabelResolver::new(Language::English);
        let choices: Vec<_> = resolver.choices(SettingCategory::TimeFormat).collect();

        assert_eq!(
            choices,
            vec![("g:i a", "5:46 pm"), ("g:i A", "5:46 PM"), ("H:i", "17:46")]
        );
    }

    #[test]
    fn test_titles() {
        let resolver = LabelResolver::new(Language::English);

        assert_eq!(resolver.title(SettingCategory::DateFormat), "Date Format");
        assert_eq!(resolver.title(SettingCategory::TimeFormat), "Time Format");
        assert_eq!(resolver.title(SettingCategory::StartOfWeek), "Week Starts On");
    }

    #[test]
    fn test_value_parsing() {
        assert_eq!("Y-m-d".parse::<DateFormat>(), Ok(DateFormat::YearMonthDay));
        assert_eq!("g:i A".parse::<TimeFormat>(), Ok(TimeFormat::UppercaseMeridiem));
        assert_eq!("3".parse::<DayOfWeek>(), Ok(DayOfWeek::Wednesday));

        let err = "7".parse::<DayOfWeek>().unwrap_err();
        assert_eq!(err.category, SettingCategory::StartOfWeek);
        assert_eq!(err.token, "7");
        assert!(err.to_string().contains("'7'"));
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct StoredSettings {
        date_format: DateFormat,
        start_of_week: DayOfWeek,
    }

    #[test]
    fn test_values_serialize_as_tokens() {
        let stored: StoredSettings =
            toml::from_str("date_format = \"m/d/Y\"\nstart_of_week = \"0\"\n").unwrap();
        assert_eq!(
            stored,
            StoredSettings {
                date_format: DateFormat::MonthDayYearNumeric,
                start_of_week: DayOfWeek::Sunday,
            }
        );

        let text = toml::to_string(&stored).unwrap();
        assert!(text.contains("date_format = \"m/d/Y\""));

        assert!(
            toml::from_str::<StoredSettings>("date_format = \"nope\"\nstart_of_week = \"0\"\n")
                .is_err()
        );
    }

    #[test]
    fn test_value_display_is_token() {
        assert_eq!(DateFormat::DayMonthYear.to_string(), "d/m/Y");
        assert_eq!(TimeFormat::LowercaseMeridiem.to_string(), "g:i a");
        assert_eq!(DayOfWeek::Friday.to_string(), "5");
    }
}
