//! Manifest discovery integration tests
//!
//! Builds a small Gradle style project on disk and checks what the finder
//! reports for it.

use std::fs;
use std::path::Path;

use lintmeta::constraint::{at_least, ExtensionSdkRegistry};
use lintmeta::discovery::{FileFinder, ManifestKind};
use lintmeta::report::ManifestsReport;
use lintmeta::{Config, ManifestParser};
use tempfile::TempDir;

const APP_MANIFEST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android"
    package="com.example.app">
    <uses-sdk android:minSdkVersion="21" android:targetSdkVersion="34" />
    <application android:label="Example" />
</manifest>
"#;

const LIB_MANIFEST: &str = r#"<manifest xmlns:android="http://schemas.android.com/apk/res/android"
    package="com.example.lib">
    <uses-sdk android:minSdkVersion="31">
        <extension-sdk android:sdkVersion="30" android:minExtensionVersion="4" />
    </uses-sdk>
</manifest>
"#;

const TEST_MANIFEST: &str = r#"<manifest xmlns:android="http://schemas.android.com/apk/res/android"
    package="com.example.app.test" />
"#;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn sample_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "app/src/main/AndroidManifest.xml", APP_MANIFEST);
    write(root, "app/src/androidTest/AndroidManifest.xml", TEST_MANIFEST);
    write(root, "lib/src/main/AndroidManifest.xml", LIB_MANIFEST);
    write(
        root,
        "app/build/intermediates/merged_manifest/AndroidManifest.xml",
        APP_MANIFEST,
    );
    dir
}

#[test]
fn test_find_manifests_in_project() {
    let project = sample_project();
    let config = Config::default();
    let manifests = FileFinder::new(&config).find_manifests(project.path());

    let relative: Vec<_> = manifests
        .iter()
        .map(|m| m.path.strip_prefix(project.path()).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        relative,
        vec![
            Path::new("app/src/androidTest/AndroidManifest.xml").to_path_buf(),
            Path::new("app/src/main/AndroidManifest.xml").to_path_buf(),
            Path::new("lib/src/main/AndroidManifest.xml").to_path_buf(),
        ]
    );
    assert_eq!(manifests[0].kind, ManifestKind::Test);
    assert_eq!(manifests[1].kind, ManifestKind::Main);
}

#[test]
fn test_targets_limit_the_scan() {
    let project = sample_project();
    let mut config = Config::default();
    config.discovery.targets = vec!["lib".into()];

    let manifests = FileFinder::new(&config).find_manifests(project.path());
    assert_eq!(manifests.len(), 1);
    assert!(manifests[0].path.ends_with("lib/src/main/AndroidManifest.xml"));
}

#[test]
fn test_extra_exclude_patterns() {
    let project = sample_project();
    let mut config = Config::default();
    config.discovery.exclude.push("**/androidTest/**".to_string());

    let manifests = FileFinder::new(&config).find_manifests(project.path());
    assert_eq!(manifests.len(), 2);
    assert!(manifests.iter().all(|m| m.kind == ManifestKind::Main));
}

#[test]
fn test_parse_project_manifests() {
    let project = sample_project();
    write(project.path(), "broken/src/main/AndroidManifest.xml", "<manifest><uses-sdk></manifest>");

    let config = Config::default();
    let (parsed, errors) = FileFinder::new(&config).parse_manifests(project.path());
    assert_eq!(parsed.len(), 3);
    assert_eq!(errors.len(), 1);

    let app = parsed
        .iter()
        .find(|(_, info)| info.package.as_deref() == Some("com.example.app"))
        .map(|(_, info)| info)
        .unwrap();
    assert_eq!(app.min_sdk(), 21);
    assert_eq!(app.api_constraint(), Some(at_least(21)));

    let test = parsed
        .iter()
        .find(|(file, _)| file.kind == ManifestKind::Test)
        .map(|(_, info)| info)
        .unwrap();
    assert_eq!(test.min_sdk(), -1);
    assert_eq!(test.api_constraint(), None);

    let report = ManifestsReport::new(
        project.path().to_path_buf(),
        &parsed,
        &errors,
        &ExtensionSdkRegistry::builtin(),
    );
    let lib = report
        .manifests
        .iter()
        .find(|entry| entry.package.as_deref() == Some("com.example.lib"))
        .unwrap();
    assert_eq!(
        lib.requirement.as_deref(),
        Some("API level ≥ 31 and R Extensions: version ≥ 4")
    );
    assert_eq!(lib.kind, "main");
    assert_eq!(report.errors.len(), 1);
}

#[test]
fn test_codename_min_sdk() {
    let manifest = r#"<manifest xmlns:android="http://schemas.android.com/apk/res/android">
    <uses-sdk android:minSdkVersion="Tiramisu" android:targetSdkVersion="UpsideDownCake" />
</manifest>"#;
    let info = ManifestParser::new()
        .parse(Path::new("AndroidManifest.xml"), manifest)
        .unwrap();
    assert_eq!(info.min_sdk(), 33);
    assert_eq!(info.uses_sdk.unwrap().target_sdk_level(), 34);
}
