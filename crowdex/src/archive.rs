//! Reading vendor zip exports and writing locale trees back into archives.
//!
//! A vendor export contains one directory per vendor locale, each holding a
//! `saturn.json` bundle. Entry names are sorted before filtering so catalog
//! order does not depend on the tool that produced the archive.

use std::fs::File;
use std::io::{Read, Seek, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::{catalog::Catalog, error::Error, locales};

/// Name of the per-locale bundle file inside a vendor export.
pub const BUNDLE_FILE_NAME: &str = "saturn.json";

/// Reads a vendor export from a file path into a catalog.
pub fn read_catalog_file<P: AsRef<Path>>(path: P) -> Result<Catalog, Error> {
    let file = File::open(path)?;
    read_catalog(file)
}

/// Reads a vendor export from any seekable reader into a catalog.
///
/// Entries whose name does not contain [`BUNDLE_FILE_NAME`] are ignored. The
/// vendor locale is the path segment before the first `/`; it must be present
/// in the locale table or the whole read fails with
/// [`Error::MissingMapping`].
pub fn read_catalog<R: Read + Seek>(reader: R) -> Result<Catalog, Error> {
    let mut archive = ZipArchive::new(reader)?;

    let mut names: Vec<String> = archive.file_names().map(String::from).collect();
    names.sort();

    let mut catalog = Catalog::new();
    for name in names {
        if !name.contains(BUNDLE_FILE_NAME) {
            continue;
        }
        let vendor = name.split('/').next().unwrap_or(name.as_str());
        let app = locales::require_app_locale(vendor)?;

        let mut entry = archive.by_name(&name)?;
        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes)?;
        let text = std::str::from_utf8(&bytes).map_err(|_| Error::Decode(name.clone()))?;
        let bundle: Map<String, Value> = serde_json::from_str(text)?;

        catalog.insert_bundle(app, bundle);
    }

    Ok(catalog)
}

/// Compresses the directory tree under `root` into a zip at `zip_path`.
///
/// Entry names are relative to `root` (the root directory itself is not an
/// entry), matching the layout vendors expect on re-upload. Files are added
/// in sorted path order.
pub fn write_archive(root: &Path, zip_path: &Path) -> Result<(), Error> {
    let file = File::create(zip_path)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut files = Vec::new();
    collect_files(root, &mut files)?;
    files.sort();

    for path in files {
        let relative = path.strip_prefix(root).unwrap_or(&path);
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        writer.start_file(name, options)?;
        let bytes = std::fs::read(&path)?;
        writer.write_all(&bytes)?;
    }

    writer.finish()?;
    Ok(())
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), Error> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}
