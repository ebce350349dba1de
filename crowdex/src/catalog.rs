//! The aggregate catalog: app locale code → locale bundle.
//!
//! A locale bundle is an ordered JSON object mapping translation keys to
//! localized values. The catalog is the root object serialized into the
//! generated Dart source and deserialized back out of it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Error;

/// Ordered mapping from app locale code to that locale's bundle.
///
/// Iteration order is insertion order. Forward conversion inserts locales in
/// sorted archive-entry order, which makes reruns byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    locales: Map<String, Value>,
}

impl Catalog {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Catalog {
            locales: Map::new(),
        }
    }

    /// Inserts (or replaces) the bundle for an app locale.
    pub fn insert_bundle(&mut self, app_locale: impl Into<String>, bundle: Map<String, Value>) {
        self.locales.insert(app_locale.into(), Value::Object(bundle));
    }

    /// Returns the bundle for an app locale, if present.
    pub fn get(&self, app_locale: &str) -> Option<&Value> {
        self.locales.get(app_locale)
    }

    /// Iterates over app locale codes in catalog order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Iterates over (app locale, bundle) pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.locales.iter()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Builds a catalog from a parsed literal value.
    ///
    /// The value must be an object whose members are all objects; anything
    /// else is not a locale → bundle mapping.
    pub fn from_value(value: Value) -> Result<Self, Error> {
        let Value::Object(locales) = value else {
            return Err(Error::invalid_catalog("top-level literal is not a map"));
        };
        for (locale, bundle) in &locales {
            if !bundle.is_object() {
                return Err(Error::invalid_catalog(format!(
                    "locale `{}` does not map to an object",
                    locale
                )));
            }
        }
        Ok(Catalog { locales })
    }

    /// Consumes the catalog, returning the underlying JSON object.
    pub fn into_value(self) -> Value {
        Value::Object(self.locales)
    }

    /// Borrows the catalog as a JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.locales
    }
}
