//! Static vendor → app locale mapping.
//!
//! The translation vendor assigns its own locale identifiers (e.g. `pt-BR`);
//! the app's localization lookup uses its own vocabulary (e.g. `pt-br`). The
//! table below relates the two. It is hand-curated and must be extended
//! manually when the vendor adds a locale.

use std::collections::HashMap;

use lazy_static::lazy_static;
use unic_langid::LanguageIdentifier;

use crate::error::Error;

/// Vendor locale code paired with the app locale code it maps to.
///
/// Mostly one-to-one; vendor dialect codes may collapse onto one app code.
const LOCALE_TABLE: &[(&str, &str)] = &[
    ("ar", "ar-ar"),
    ("ast", "ast-es"),
    ("bg", "bul-bg"),
    ("cs", "cs-cz"),
    ("de", "de-de"),
    ("el", "el-gr"),
    ("es-ES", "es-es"),
    ("fa", "fa-ir"),
    ("fil", "fil-ph"),
    ("fr", "fr-fr"),
    ("he", "he-il"),
    ("hi", "hi-in"),
    ("hr", "hr-hr"),
    ("hu", "hu-hu"),
    ("id", "id-id"),
    ("it", "it-it"),
    ("ko", "ko-ko"),
    ("nl", "nl-nl"),
    ("pl", "pl-pl"),
    ("pt-BR", "pt-br"),
    ("ro", "ro-ro"),
    ("ru", "ru-ru"),
    ("sk", "sk-sk"),
    ("sl", "sl-sl"),
    ("tr", "tr-tr"),
    ("uk", "uk-ua"),
    ("ur-PK", "ur-pk"),
    ("vi", "vi-vi"),
    ("zh-CN", "zh-cn"),
];

lazy_static! {
    static ref VENDOR_TO_APP: HashMap<&'static str, &'static str> =
        LOCALE_TABLE.iter().copied().collect();
}

/// Returns the app locale code for a vendor locale code, if mapped.
pub fn app_locale(vendor: &str) -> Option<&'static str> {
    VENDOR_TO_APP.get(vendor).copied()
}

/// Returns the app locale code for a vendor locale code, or
/// [`Error::MissingMapping`] if the vendor code is not in the table.
///
/// Forward conversion rejects unmapped vendor locales rather than silently
/// dropping their data, so a vendor-side locale addition surfaces as an
/// error instead of a missing language in the generated catalog.
pub fn require_app_locale(vendor: &str) -> Result<&'static str, Error> {
    app_locale(vendor).ok_or_else(|| Error::MissingMapping(vendor.to_string()))
}

/// Iterates over the full table in vendor-code order.
pub fn vendor_locales() -> impl Iterator<Item = (&'static str, &'static str)> {
    LOCALE_TABLE.iter().copied()
}

/// Parses a locale code into a [`LanguageIdentifier`], if well-formed.
pub fn language_identifier(code: &str) -> Option<LanguageIdentifier> {
    code.parse().ok()
}
