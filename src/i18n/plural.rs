//! Plural categories and the rule families used to pick them.

use std::fmt;

/// CLDR plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// The translation key suffix for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A family of languages sharing one plural rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRules {
    Arabic,
    Chinese,
    French,
    German,
    Irish,
    Russian,
    Scottish,
    Spanish,
    Welsh,
}

const LOCALES: &[(PluralRules, &[&str])] = &[
    (PluralRules::Arabic, &["ar"]),
    (
        PluralRules::Chinese,
        &["my", "zh", "id", "ja", "jv", "ko", "ms", "th", "vi"],
    ),
    (
        PluralRules::French,
        &["hy", "bn", "fr", "gu", "hi", "fa", "pa", "zu"],
    ),
    (
        PluralRules::German,
        &[
            "af", "sq", "az", "eu", "bg", "ca", "da", "nl", "en", "et", "fi", "ka", "de", "el",
            "hu", "lb", "no", "so", "sw", "sv", "ta", "te", "tr", "ur",
        ],
    ),
    (PluralRules::Irish, &["ga"]),
    (PluralRules::Russian, &["ru", "uk"]),
    (PluralRules::Scottish, &["gd"]),
    (PluralRules::Spanish, &["pt-PT", "it", "es"]),
    (PluralRules::Welsh, &["cy"]),
];

impl PluralRules {
    /// Rule family for a BCP 47 locale: an exact (case-insensitive) match
    /// first, then the language subtag alone.
    pub fn for_locale(locale: &str) -> Option<Self> {
        let lookup = |tag: &str| {
            LOCALES.iter().find_map(|(rules, locales)| {
                locales
                    .iter()
                    .any(|l| l.eq_ignore_ascii_case(tag))
                    .then_some(*rules)
            })
        };
        let language = locale.split('-').next().unwrap_or(locale);
        lookup(locale).or_else(|| lookup(language))
    }

    /// Category for a non-negative integer count.
    pub fn select(self, n: u64) -> PluralCategory {
        use PluralCategory::*;
        match self {
            Self::Arabic => match (n, n % 100) {
                (0, _) => Zero,
                (1, _) => One,
                (2, _) => Two,
                (_, 3..=10) => Few,
                (_, 11..=99) => Many,
                _ => Other,
            },
            Self::Chinese => Other,
            Self::French => match n {
                0 | 1 => One,
                _ => Other,
            },
            Self::German => match n {
                1 => One,
                _ => Other,
            },
            Self::Irish => match n {
                1 => One,
                2 => Two,
                3..=6 => Few,
                7..=10 => Many,
                _ => Other,
            },
            Self::Russian => {
                let last_two = n % 100;
                let last = last_two % 10;
                if last == 1 && last_two != 11 {
                    One
                } else if (2..=4).contains(&last) && !(12..=14).contains(&last_two) {
                    Few
                } else if last == 0 || (5..=9).contains(&last) || (11..=14).contains(&last_two) {
                    Many
                } else {
                    Other
                }
            }
            Self::Scottish => match n {
                1 | 11 => One,
                2 | 12 => Two,
                3..=10 | 13..=19 => Few,
                _ => Other,
            },
            Self::Spanish => {
                if n == 1 {
                    One
                } else if n != 0 && n % 1_000_000 == 0 {
                    Many
                } else {
                    Other
                }
            }
            Self::Welsh => match n {
                0 => Zero,
                1 => One,
                2 => Two,
                3 => Few,
                6 => Many,
                _ => Other,
            },
        }
    }
}

/// Plural category of `count` in `locale`.
///
/// The count is floored and made non-negative first. Non-finite counts and
/// locales without a rule family select `Other`.
pub fn plural_category(locale: &str, count: f64) -> PluralCategory {
    if !count.is_finite() {
        return PluralCategory::Other;
    }
    let n = count.floor().abs() as u64;
    PluralRules::for_locale(locale).map_or(PluralCategory::Other, |rules| rules.select(n))
}
