//! Sample date rendering.
//!
//! Format-derived labels are produced by rendering one fixed instant through
//! the stored format pattern, so the example a user picks from is exactly
//! what that pattern prints.

use crate::i18n::CachedTranslations;
use std::fmt::{self, Write};

/// A calendar date and wall-clock time without time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceInstant {
    pub year: i32,
    /// 1-based month
    pub month: u8,
    pub day: u8,
    /// 24-hour clock
    pub hour: u8,
    pub minute: u8,
}

/// The instant every sample label is rendered from: 2017-12-17 17:46.
pub const REFERENCE_INSTANT: ReferenceInstant = ReferenceInstant {
    year: 2017,
    month: 12,
    day: 17,
    hour: 17,
    minute: 46,
};

impl ReferenceInstant {
    /// Hour on the 12-hour clock, in `1..=12`.
    pub fn hour12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    /// Renders a PHP `date()` style pattern.
    ///
    /// Supported characters: `d j m n F Y H g i a A`. A backslash emits the
    /// following character literally; every other character is copied
    /// through unchanged.
    pub fn render(&self, pattern: &str, translations: &CachedTranslations) -> String {
        let mut out = String::with_capacity(pattern.len() * 2);
        self.write_pattern(&mut out, pattern, translations)
            .expect("writing to a String cannot fail");
        out
    }

    /// Renders the instant in the long date style of the translations' language.
    pub fn render_long_date(&self, translations: &CachedTranslations) -> String {
        self.render(translations.language().long_date_pattern(), translations)
    }

    fn write_pattern<W: Write>(
        &self,
        out: &mut W,
        pattern: &str,
        translations: &CachedTranslations,
    ) -> fmt::Result {
        let mut chars = pattern.chars();

        while let Some(c) = chars.next() {
            match c {
                'd' => write!(out, "{:02}", self.day)?,
                'j' => write!(out, "{}", self.day)?,
                'm' => write!(out, "{:02}", self.month)?,
                'n' => write!(out, "{}", self.month)?,
                'F' => out.write_str(translations.month_name(self.month))?,
                'Y' => write!(out, "{:04}", self.year)?,
                'H' => write!(out, "{:02}", self.hour)?,
                'g' => write!(out, "{}", self.hour12())?,
                'i' => write!(out, "{:02}", self.minute)?,
                'a' => out.write_str(translations.meridiem(self.hour, false))?,
                'A' => out.write_str(translations.meridiem(self.hour, true))?,
                '\\' => out.write_char(chars.next().unwrap_or('\\'))?,
                other => out.write_char(other)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn english() -> CachedTranslations {
        CachedTranslations::new(Language::English)
    }

    #[test]
    fn test_hour12() {
        let mut instant = REFERENCE_INSTANT;
        assert_eq!(instant.hour12(), 5);

        instant.hour = 0;
        assert_eq!(instant.hour12(), 12);

        instant.hour = 12;
        assert_eq!(instant.hour12(), 12);
    }

    #[test]
    fn test_render_numeric_dates() {
        let translations = english();

        assert_eq!(REFERENCE_INSTANT.render("Y-m-d", &translations), "2017-12-17");
        assert_eq!(REFERENCE_INSTANT.render("m/d/Y", &translations), "12/17/2017");
        assert_eq!(REFERENCE_INSTANT.render("d/m/Y", &translations), "17/12/2017");
    }

    #[test]
    fn test_render_times() {
        let translations = english();

        assert_eq!(REFERENCE_INSTANT.render("H:i", &translations), "17:46");
        assert_eq!(REFERENCE_INSTANT.render("g:i a", &translations), "5:46 pm");
        assert_eq!(REFERENCE_INSTANT.render("g:i A", &translations), "5:46 PM");
    }

    #[test]
    fn test_render_padding() {
        let instant = ReferenceInstant {
            year: 2009,
            month: 3,
            day: 4,
            hour: 8,
            minute: 5,
        };
        let translations = english();

        assert_eq!(instant.render("d.m.Y H:i", &translations), "04.03.2009 08:05");
        assert_eq!(instant.render("j/n g:i a", &translations), "4/3 8:05 am");
    }

    #[test]
    fn test_render_unsupported_characters_pass_through() {
        let translations = english();

        assert_eq!(REFERENCE_INSTANT.render("l w y", &translations), "l w y");
        assert_eq!(REFERENCE_INSTANT.render("", &translations), "");
    }

    #[test]
    fn test_render_escapes() {
        let translations = english();

        assert_eq!(REFERENCE_INSTANT.render("\\Y Y", &translations), "Y 2017");
        assert_eq!(REFERENCE_INSTANT.render("Y\\", &translations), "2017\\");
    }

    #[test]
    fn test_render_long_date() {
        assert_eq!(
            REFERENCE_INSTANT.render_long_date(&english()),
            "December 17, 2017"
        );
        assert_eq!(
            REFERENCE_INSTANT.render_long_date(&CachedTranslations::new(Language::Japanese)),
            "2017年12月17日"
        );
        assert_eq!(
            REFERENCE_INSTANT
                .render_long_date(&CachedTranslations::new(Language::SimplifiedChinese)),
            "2017年12月17日"
        );
    }

    #[test]
    fn test_render_localized_meridiem() {
        let zh_tw = CachedTranslations::new(Language::TraditionalChinese);
        assert_eq!(REFERENCE_INSTANT.render("g:i a", &zh_tw), "5:46 下午");
    }
}
