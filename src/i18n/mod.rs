//! Translations: key lookup, plural forms and `%{name}` interpolation.
//!
//! An [`I18n`] is built from the (nested) `i18n` namespace of a component's
//! resolved config. Plural forms live under the message key, one entry per
//! category (`charactersUnderLimit.one`, `charactersUnderLimit.other`).

pub mod plural;
pub mod template;

use tracing::warn;

use crate::config::value::format_number;
use crate::config::{flatten, ConfigObject, ConfigValue, FlatConfig};

pub use plural::{plural_category, PluralCategory, PluralRules};

/// Locale used when neither the config nor the document provides one.
pub const DEFAULT_LOCALE: &str = "en";

/// Errors from translating a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum I18nError {
    #[error("i18n: no translation found for `{key}`")]
    MissingTranslation { key: String },
    #[error("i18n: plural form `.other` is required for `{key}` in `{locale}` locale")]
    MissingPluralForm { key: String, locale: String },
    #[error("i18n: no data found to replace {placeholder} placeholder in string")]
    MissingPlaceholderData { placeholder: String },
}

/// Translator over one component's messages.
#[derive(Debug, Clone)]
pub struct I18n {
    translations: FlatConfig,
    locale: String,
}

impl I18n {
    /// Build a translator. `locale` falls back to [`DEFAULT_LOCALE`].
    pub fn new(translations: &ConfigObject, locale: Option<&str>) -> Self {
        Self {
            translations: flatten(translations),
            locale: locale
                .filter(|l| !l.trim().is_empty())
                .unwrap_or(DEFAULT_LOCALE)
                .to_owned(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Translate `key`.
    ///
    /// With a numeric `count` in `options`, the plural form for the locale
    /// is looked up under `key`. Placeholders are filled from `options`.
    pub fn t(&self, key: &str, options: Option<&ConfigObject>) -> Result<String, I18nError> {
        let lookup_key = match options.and_then(|o| o.number("count")) {
            Some(count) => format!("{key}.{}", self.plural_suffix(key, count)?),
            None => key.to_owned(),
        };

        let message = self
            .translations
            .get(&lookup_key)
            .and_then(ConfigValue::as_str)
            .ok_or_else(|| I18nError::MissingTranslation {
                key: lookup_key.clone(),
            })?;

        template::render(message, |name| {
            options
                .and_then(|o| o.get(name))
                .filter(|v| !v.is_undefined())
                .map(placeholder_value)
        })
        .map_err(|placeholder| I18nError::MissingPlaceholderData {
            placeholder: placeholder.to_owned(),
        })
    }

    /// Translate `key` with a `count` option, the common plural case.
    pub fn t_count(&self, key: &str, count: f64) -> Result<String, I18nError> {
        let options: ConfigObject = [("count", count)].into_iter().collect();
        self.t(key, Some(&options))
    }

    /// Plural suffix for `key`: the locale's category when a translation
    /// exists for it, otherwise `other`.
    fn plural_suffix(&self, key: &str, count: f64) -> Result<PluralCategory, I18nError> {
        let preferred = plural_category(&self.locale, count);
        if self.translations.contains_key(&format!("{key}.{preferred}")) {
            return Ok(preferred);
        }
        if self.translations.contains_key(&format!("{key}.other")) {
            warn!(
                key,
                locale = %self.locale,
                form = %preferred,
                "plural form missing, using `other`"
            );
            return Ok(PluralCategory::Other);
        }
        Err(I18nError::MissingPluralForm {
            key: key.to_owned(),
            locale: self.locale.clone(),
        })
    }
}

/// Render an option value for interpolation. Numbers get thousands grouping.
fn placeholder_value(value: &ConfigValue) -> String {
    match value {
        ConfigValue::Number(n) => group_thousands(*n),
        ConfigValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `1234567.5` -> `"1,234,567.5"`.
fn group_thousands(n: f64) -> String {
    let formatted = format_number(n);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return formatted;
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}{grouped}{frac_part}")
}
