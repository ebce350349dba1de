//! Rendering the aggregate catalog as generated Dart source.
//!
//! The output is a single assignment, `const crowdin = { ... };`, preceded by
//! a do-not-edit banner. Translated text is embedded in Dart string literals,
//! so every literal `$` is escaped to keep Dart's string interpolation from
//! firing on translation text.
//!
//! Quote style is a proper pretty-printer decision per string, not a textual
//! rewrite of serialized JSON, so nested values and quoted quotes cannot
//! corrupt the output.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use indoc::indoc;
use serde_json::Value;

use crate::{catalog::Catalog, error::Error};

/// Header written above the generated assignment.
const BANNER: &str = indoc! {r"
    // Generated from the vendor translation export. Do not edit by hand;
    // rerun the forward conversion instead.
"};

/// String literal style for the generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// Strict JSON-shaped double-quoted strings.
    Double,
    /// Dart `prefer_single_quotes` style. Strings containing an apostrophe
    /// stay double-quoted so no quote ever needs escaping inside itself.
    #[default]
    Single,
}

impl Display for QuoteStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteStyle::Double => write!(f, "double"),
            QuoteStyle::Single => write!(f, "single"),
        }
    }
}

impl FromStr for QuoteStyle {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "double" => Ok(QuoteStyle::Double),
            "single" => Ok(QuoteStyle::Single),
            other => Err(Error::UnknownStyle(other.to_string())),
        }
    }
}

/// Renders the full generated source file for a catalog.
pub fn render_source(catalog: &Catalog, style: QuoteStyle) -> String {
    let mut out = String::from(BANNER);
    out.push_str("const crowdin = ");
    write_object(&mut out, catalog.as_map(), style, 0);
    out.push_str(";\n");
    out
}

fn write_value(out: &mut String, value: &Value, style: QuoteStyle, indent: usize) {
    match value {
        Value::Object(map) => write_object(out, map, style, indent),
        Value::Array(items) => write_array(out, items, style, indent),
        Value::String(s) => write_string(out, s, style),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Null => out.push_str("null"),
    }
}

fn write_object(
    out: &mut String,
    map: &serde_json::Map<String, Value>,
    style: QuoteStyle,
    indent: usize,
) {
    if map.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push_str("{\n");
    let inner = indent + 2;
    for (i, (key, value)) in map.iter().enumerate() {
        out.push_str(&" ".repeat(inner));
        write_string(out, key, style);
        out.push_str(": ");
        write_value(out, value, style, inner);
        if i + 1 < map.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str(&" ".repeat(indent));
    out.push('}');
}

fn write_array(out: &mut String, items: &[Value], style: QuoteStyle, indent: usize) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push_str("[\n");
    let inner = indent + 2;
    for (i, value) in items.iter().enumerate() {
        out.push_str(&" ".repeat(inner));
        write_value(out, value, style, inner);
        if i + 1 < items.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str(&" ".repeat(indent));
    out.push(']');
}

fn write_string(out: &mut String, s: &str, style: QuoteStyle) {
    let quote = match style {
        QuoteStyle::Double => '"',
        // An apostrophe inside a single-quoted literal would need escaping;
        // keep such strings double-quoted instead.
        QuoteStyle::Single if s.contains('\'') => '"',
        QuoteStyle::Single => '\'',
    };
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, json};

    fn catalog_with(locale: &str, pairs: &[(&str, &str)]) -> Catalog {
        let mut bundle = Map::new();
        for (key, value) in pairs {
            bundle.insert(key.to_string(), json!(value));
        }
        let mut catalog = Catalog::new();
        catalog.insert_bundle(locale, bundle);
        catalog
    }

    #[test]
    fn test_render_empty_catalog() {
        let rendered = render_source(&Catalog::new(), QuoteStyle::Double);
        assert!(rendered.ends_with("const crowdin = {};\n"));
    }

    #[test]
    fn test_render_double_quoted() {
        let catalog = catalog_with("de-de", &[("hello", "Hallo")]);
        let rendered = render_source(&catalog, QuoteStyle::Double);
        assert!(rendered.contains("const crowdin = {\n  \"de-de\": {\n    \"hello\": \"Hallo\"\n  }\n};\n"));
    }

    #[test]
    fn test_render_single_quoted() {
        let catalog = catalog_with("de-de", &[("hello", "Hallo")]);
        let rendered = render_source(&catalog, QuoteStyle::Single);
        assert!(rendered.contains("'de-de': {\n    'hello': 'Hallo'\n  }"));
    }

    #[test]
    fn test_apostrophe_values_stay_double_quoted() {
        let catalog = catalog_with("fr-fr", &[("welcome", "C'est parti"), ("bye", "Au revoir")]);
        let rendered = render_source(&catalog, QuoteStyle::Single);
        assert!(rendered.contains("'welcome': \"C'est parti\""));
        assert!(rendered.contains("'bye': 'Au revoir'"));
    }

    #[test]
    fn test_apostrophe_keys_stay_double_quoted() {
        let catalog = catalog_with("en-us", &[("what's_new", "What's new")]);
        let rendered = render_source(&catalog, QuoteStyle::Single);
        assert!(rendered.contains("\"what's_new\": \"What's new\""));
    }

    #[test]
    fn test_interpolation_sigil_is_escaped() {
        let catalog = catalog_with("en-us", &[("price", "Costs $5")]);
        for style in [QuoteStyle::Double, QuoteStyle::Single] {
            let rendered = render_source(&catalog, style);
            assert!(rendered.contains("Costs \\$5"), "style {}: {}", style, rendered);
        }
    }

    #[test]
    fn test_control_characters_are_escaped() {
        let catalog = catalog_with("en-us", &[("multi", "a\nb\u{1}c")]);
        let rendered = render_source(&catalog, QuoteStyle::Single);
        assert!(rendered.contains("a\\nb\\u0001c"));
    }

    #[test]
    fn test_non_ascii_is_left_raw() {
        let catalog = catalog_with("el-gr", &[("hello", "Γειά σου")]);
        let rendered = render_source(&catalog, QuoteStyle::Single);
        assert!(rendered.contains("Γειά σου"));
    }

    #[test]
    fn test_nested_values_render() {
        let mut bundle = Map::new();
        bundle.insert(
            "plurals".to_string(),
            json!({"one": "1 item", "other": ["many", "items"]}),
        );
        let mut catalog = Catalog::new();
        catalog.insert_bundle("en-us", bundle);

        let rendered = render_source(&catalog, QuoteStyle::Single);
        assert!(rendered.contains("'one': '1 item'"));
        assert!(rendered.contains("'many',\n"));
    }

    #[test]
    fn test_quote_style_from_str() {
        assert_eq!("single".parse::<QuoteStyle>().unwrap(), QuoteStyle::Single);
        assert_eq!("Double".parse::<QuoteStyle>().unwrap(), QuoteStyle::Double);
        assert!(matches!(
            "fancy".parse::<QuoteStyle>(),
            Err(Error::UnknownStyle(s)) if s == "fancy"
        ));
    }
}
