//! Forward and reverse conversion entry points.
//!
//! Forward: vendor zip export → generated Dart source. Reverse: generated
//! Dart source → per-locale JSON tree → vendor-shaped zip. Each direction is
//! a single linear pass: read everything, transform in memory, write
//! everything.

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    archive,
    catalog::Catalog,
    dart::{self, QuoteStyle},
    error::Error,
    literal,
};

/// Start of the generated assignment, searched for verbatim.
pub const ASSIGNMENT_MARKER: &str = "const crowdin = ";

/// Closing delimiter of the generated assignment.
pub const CLOSING_MARKER: &str = "};";

lazy_static! {
    // Locale keys become directory names; anything that does not look like a
    // locale code must not touch the filesystem.
    static ref LOCALE_DIR_REGEX: Regex =
        Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})?$").unwrap();
}

/// Converts a vendor zip export into a generated Dart source file.
///
/// Returns the aggregated catalog that was written. Locales appear in sorted
/// archive-entry order, so converting the same archive twice produces
/// byte-identical output.
pub fn forward_convert<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    output_path: Q,
    style: QuoteStyle,
) -> Result<Catalog, Error> {
    let catalog = archive::read_catalog_file(archive_path)?;
    let source = dart::render_source(&catalog, style);
    fs::write(output_path, source)?;
    Ok(catalog)
}

/// Extracts and parses the catalog literal from generated source text.
///
/// The literal spans from [`ASSIGNMENT_MARKER`] to the last [`CLOSING_MARKER`]
/// (inclusive of the closing brace). Fails with [`Error::MarkerNotFound`] if
/// either marker is missing, which usually means a hand-edited file.
pub fn parse_generated_source(content: &str) -> Result<Catalog, Error> {
    let start = content
        .find(ASSIGNMENT_MARKER)
        .ok_or(Error::MarkerNotFound(ASSIGNMENT_MARKER))?;
    let end = content
        .rfind(CLOSING_MARKER)
        .ok_or(Error::MarkerNotFound(CLOSING_MARKER))?;
    let literal_start = start + ASSIGNMENT_MARKER.len();
    if end < literal_start {
        return Err(Error::MarkerNotFound(CLOSING_MARKER));
    }

    // The `\$` sigil escape is undone inside the string parser, so no
    // textual pre-pass over the extracted literal is needed.
    let value = literal::parse_literal(&content[literal_start..=end])?;
    Catalog::from_value(value)
}

/// Converts a generated Dart source file back into a vendor-shaped zip.
///
/// Writes `<output_root>/<app-locale>/saturn.json` for every locale, then
/// compresses the tree into `zip_path`. The uncompressed tree is removed
/// afterwards unless `keep_tree` is set; on failure it is always removed, so
/// a partial run leaves nothing behind.
pub fn reverse_convert<P: AsRef<Path>, Q: AsRef<Path>, R: AsRef<Path>>(
    input_path: P,
    output_root: Q,
    zip_path: R,
    keep_tree: bool,
) -> Result<Catalog, Error> {
    let content = fs::read_to_string(input_path)?;
    let catalog = parse_generated_source(&content)?;

    let root = output_root.as_ref();
    let result = write_locale_tree(&catalog, root)
        .and_then(|_| archive::write_archive(root, zip_path.as_ref()));

    if (result.is_err() || !keep_tree) && root.exists() {
        let removed = fs::remove_dir_all(root);
        result?; // conversion errors win over cleanup errors
        removed?;
    } else {
        result?;
    }

    Ok(catalog)
}

fn write_locale_tree(catalog: &Catalog, root: &Path) -> Result<(), Error> {
    for (locale, bundle) in catalog.iter() {
        if !LOCALE_DIR_REGEX.is_match(locale) {
            return Err(Error::invalid_catalog(format!(
                "locale `{}` is not a usable directory name",
                locale
            )));
        }
        let dir = root.join(locale);
        fs::create_dir_all(&dir)?;
        let json = serde_json::to_string_pretty(bundle)?;
        fs::write(dir.join(archive::BUNDLE_FILE_NAME), json)?;
    }
    Ok(())
}
