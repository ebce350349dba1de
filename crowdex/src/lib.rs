#![forbid(unsafe_code)]
//! Converter between a translation vendor's zip export and the generated
//! Dart locale catalog consumed by the app's UI layer.
//!
//! Two directions, never run in the same pass:
//!
//! - **forward**: read `<vendor-locale>/.../saturn.json` bundles out of a
//!   zip export, map vendor locale codes to app locale codes, and emit one
//!   `const crowdin = { ... };` assignment as generated Dart source.
//! - **reverse**: parse a previously generated file back (the literal may be
//!   single-quoted, so a restricted literal parser is used rather than strict
//!   JSON), split it into per-locale JSON files, and zip them back up.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use crowdex::{QuoteStyle, forward_convert, reverse_convert};
//!
//! // Vendor export → generated Dart source
//! forward_convert("translations.zip", "crowdin.dart", QuoteStyle::Single)?;
//!
//! // Generated Dart source → vendor-shaped zip
//! reverse_convert("crowdin.dart", "saturn", "saturn.zip", false)?;
//! # Ok::<(), crowdex::Error>(())
//! ```

pub mod archive;
pub mod catalog;
pub mod codec;
pub mod dart;
pub mod error;
pub mod literal;
pub mod locales;

// Re-export most used types for easy consumption
pub use crate::{
    catalog::Catalog,
    codec::{forward_convert, parse_generated_source, reverse_convert},
    dart::{QuoteStyle, render_source},
    error::Error,
};
