use std::fs;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crowdex::{Error, QuoteStyle, forward_convert, parse_generated_source, reverse_convert};
use serde_json::json;
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

fn write_test_archive(path: &Path, entries: &[(&str, &str)]) {
    let mut writer = ZipWriter::new(File::create(path).unwrap());
    let options = SimpleFileOptions::default();
    for (name, content) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}

#[test]
fn test_forward_two_locale_example() {
    let dir = TempDir::new().unwrap();
    let archive = dir.path().join("translations.zip");
    write_test_archive(
        &archive,
        &[
            ("de/saturn.json", r#"{"hello": "Hallo"}"#),
            ("fr/saturn.json", r#"{"hello": "Bonjour"}"#),
        ],
    );

    let output = dir.path().join("crowdin.dart");
    let catalog = forward_convert(&archive, &output, QuoteStyle::Double).unwrap();

    assert_eq!(
        catalog.clone().into_value(),
        json!({"de-de": {"hello": "Hallo"}, "fr-fr": {"hello": "Bonjour"}})
    );

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("const crowdin = "));
    assert!(content.trim_end().ends_with("};"));
    assert_eq!(parse_generated_source(&content).unwrap(), catalog);
}

#[test]
fn test_forward_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let archive = dir.path().join("translations.zip");
    // Archive order deliberately reversed; sorted entry names fix the order.
    write_test_archive(
        &archive,
        &[
            ("fr/saturn.json", r#"{"hello": "Bonjour"}"#),
            ("de/saturn.json", r#"{"hello": "Hallo"}"#),
        ],
    );

    let first = dir.path().join("first.dart");
    let second = dir.path().join("second.dart");
    forward_convert(&archive, &first, QuoteStyle::Single).unwrap();
    forward_convert(&archive, &second, QuoteStyle::Single).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());

    let content = fs::read_to_string(&first).unwrap();
    let de = content.find("'de-de'").unwrap();
    let fr = content.find("'fr-fr'").unwrap();
    assert!(de < fr, "locales should appear in sorted order");
}

#[test]
fn test_forward_rejects_unmapped_locale_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let archive = dir.path().join("translations.zip");
    write_test_archive(
        &archive,
        &[
            ("de/saturn.json", r#"{"hello": "Hallo"}"#),
            ("eo/saturn.json", r#"{"hello": "Saluton"}"#),
        ],
    );

    let output = dir.path().join("crowdin.dart");
    let error = forward_convert(&archive, &output, QuoteStyle::Single).unwrap_err();

    assert!(matches!(error, Error::MissingMapping(code) if code == "eo"));
    assert!(!output.exists());
}

#[test]
fn test_reverse_single_quoted_example() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("crowdin.dart");
    fs::write(&input, "const crowdin = {'de-de': {'hello': \"Hallo\"}};").unwrap();

    let root = dir.path().join("saturn");
    let zip_path = dir.path().join("saturn.zip");
    let catalog = reverse_convert(&input, &root, &zip_path, true).unwrap();

    assert_eq!(catalog.get("de-de"), Some(&json!({"hello": "Hallo"})));

    let bundle = fs::read_to_string(root.join("de-de").join("saturn.json")).unwrap();
    assert_eq!(bundle, "{\n  \"hello\": \"Hallo\"\n}");

    let mut archive = zip::ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
    let mut content = String::new();
    archive
        .by_name("de-de/saturn.json")
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    assert_eq!(content, bundle);
}

#[test]
fn test_reverse_removes_tree_by_default() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("crowdin.dart");
    fs::write(&input, "const crowdin = {'de-de': {'hello': 'Hallo'}};").unwrap();

    let root = dir.path().join("saturn");
    let zip_path = dir.path().join("saturn.zip");
    reverse_convert(&input, &root, &zip_path, false).unwrap();

    assert!(zip_path.exists());
    assert!(!root.exists());
}

#[test]
fn test_reverse_cleans_up_on_failure() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("crowdin.dart");
    // Second locale key cannot become a directory name, so the run fails
    // after the first locale was already written out.
    fs::write(
        &input,
        "const crowdin = {'de-de': {'hello': 'Hallo'}, '../evil': {}};",
    )
    .unwrap();

    let root = dir.path().join("saturn");
    let zip_path = dir.path().join("saturn.zip");
    let error = reverse_convert(&input, &root, &zip_path, true).unwrap_err();

    assert!(matches!(error, Error::InvalidCatalog(_)));
    assert!(!root.exists(), "partial tree should be removed on failure");
    assert!(!zip_path.exists());
}

#[test]
fn test_reverse_rejects_file_without_markers() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("crowdin.dart");
    fs::write(&input, "// nothing to see here\n").unwrap();

    let root = dir.path().join("saturn");
    let zip_path = dir.path().join("saturn.zip");
    let error = reverse_convert(&input, &root, &zip_path, false).unwrap_err();

    assert!(matches!(error, Error::MarkerNotFound(_)));
    assert!(!root.exists());
}

#[test]
fn test_round_trip_preserves_values() {
    let dir = TempDir::new().unwrap();
    let archive = dir.path().join("translations.zip");
    write_test_archive(
        &archive,
        &[
            (
                "de/saturn.json",
                r#"{"price": "Kostet $5", "greeting": "Grüß dich", "quote": "Er sagte \"ja\""}"#,
            ),
            (
                "fr/saturn.json",
                r#"{"price": "Coûte $5", "greeting": "C'est parti", "quote": "Il a dit \"oui\""}"#,
            ),
        ],
    );

    for style in [QuoteStyle::Double, QuoteStyle::Single] {
        let generated = dir.path().join(format!("crowdin_{}.dart", style));
        let forward = forward_convert(&archive, &generated, style).unwrap();

        let root = dir.path().join(format!("saturn_{}", style));
        let zip_path = dir.path().join(format!("saturn_{}.zip", style));
        let reverse = reverse_convert(&generated, &root, &zip_path, false).unwrap();

        assert_eq!(forward, reverse, "style {}", style);
        assert_eq!(
            reverse.get("de-de").unwrap()["price"],
            json!("Kostet $5"),
            "sigil escaping must round-trip"
        );
        assert_eq!(reverse.get("fr-fr").unwrap()["greeting"], json!("C'est parti"));
    }
}
