//! Desugaring lookup integration tests
//!
//! These tests load descriptor files the way the build tooling hands them
//! over (plain paths, file: URLs, jar entries) and query them through the
//! process-wide and per-project lookups.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use lintmeta::desugar::{
    self, load_files, BuildVariantDesugaring, DesugaredMethodLookup, ProjectDesugaring, SourceSetType,
    DEFAULT_DESUGARED_METHODS,
};
use parking_lot::Mutex;
use tempfile::TempDir;

// Tests in this file swap the process-wide lookup
static GLOBAL_LOOKUP: Mutex<()> = parking_lot::const_mutex(());

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// Built-in table
// ============================================================================

#[test]
fn test_builtin_methods() {
    let lookup = desugar::default_lookup();
    assert_eq!(lookup.len(), DEFAULT_DESUGARED_METHODS.len());

    assert!(lookup.is_desugared_method("java/lang/Character", "compare", "(CC)"));
    assert!(lookup.is_desugared_method("java/util/Objects", "requireNonNull", "(Ljava/lang/Object;)"));
    assert!(!lookup.is_desugared_method("java/lang/Character", "compare", "(II)"));
    assert!(!lookup.is_desugared_method("java/lang/Character", "compareTo", "(CC)"));
    assert!(!lookup.is_desugared_method("android/app/Activity", "onCreate", "(Landroid/os/Bundle;)"));
}

#[test]
fn test_dotted_owner_names() {
    let lookup = desugar::default_lookup();
    assert!(lookup.is_desugared_method("java.lang.Character", "compare", "(CC)"));
    assert!(lookup.is_desugared_method(
        "java.util.Map",
        "entry",
        "(Ljava/lang/Object;Ljava/lang/Object;)"
    ));
}

// ============================================================================
// Descriptor lines
// ============================================================================

#[test]
fn test_classes_fields_and_inner_classes() {
    let lookup = DesugaredMethodLookup::new([
        "java/nio/charset/StandardCharsets#UTF_8",
        "java/util/Optional",
        "java/util/stream/Collectors#toList()Ljava/util/stream/Collector;",
    ]);

    // A class line covers every member and inner class
    assert!(lookup.is_desugared_class("java/util/Optional"));
    assert!(lookup.is_desugared_method("java/util/Optional", "isEmpty", "()"));
    assert!(lookup.is_desugared_field("java/util/Optional", "EMPTY"));
    assert!(lookup.is_desugared_class("java/util/Optional$Builder"));
    assert!(!lookup.is_desugared_class("java/util/stream/Stream"));

    // A field line only matches the field
    assert!(lookup.is_desugared_field("java/nio/charset/StandardCharsets", "UTF_8"));
    assert!(!lookup.is_desugared_method("java/nio/charset/StandardCharsets", "UTF_8", "()"));
    assert!(!lookup.is_desugared_class("java/nio/charset/StandardCharsets"));

    // A method line ignores its return type
    assert!(lookup.is_desugared_method("java/util/stream/Collectors", "toList", "()"));
    assert!(!lookup.is_desugared_field("java/util/stream/Collectors", "toList"));
    assert!(!lookup.is_desugared_method("java/util/stream/Collectors", "toList", "(I)"));
}

#[test]
fn test_hierarchy_lookup() {
    let lookup = DesugaredMethodLookup::new(["java/util/Collection#removeIf(Ljava/util/function/Predicate;)Z"]);
    assert!(lookup.is_desugared_method_in_hierarchy(
        "java/util/ArrayList",
        &["java/util/AbstractList", "java/util/Collection"],
        "removeIf",
        "(Ljava/util/function/Predicate;)"
    ));
    assert!(!lookup.is_desugared_method_in_hierarchy(
        "java/util/ArrayList",
        &["java/util/AbstractList"],
        "removeIf",
        "(Ljava/util/function/Predicate;)"
    ));
}

// ============================================================================
// Loading descriptor files
// ============================================================================

#[test]
fn test_full_class_in_one_file_supersedes_members_in_another() {
    let dir = TempDir::new().unwrap();
    let members = write_file(
        &dir,
        "members.txt",
        "java/util/Optional#isEmpty()Z\njava/util/Optional#orElseThrow()Ljava/lang/Object;\n",
    );
    let classes = write_file(&dir, "classes.txt", "java/util/Optional\r\n\njava/time/Duration#toSeconds()J\n");

    let lines = load_files(&[classes, members]).unwrap();
    assert_eq!(lines, vec!["java/time/Duration#toSeconds()J", "java/util/Optional"]);
}

#[test]
fn test_set_desugared_methods_from_paths_and_urls() {
    let _guard = GLOBAL_LOOKUP.lock();
    let dir = TempDir::new().unwrap();
    let first = write_file(&dir, "desugar_1.txt", "java/util/HashMap#foo()\n");
    let second = write_file(&dir, "desugar_2.txt", "java/util/HashMap#bar(II)Z\njava/util/HashMap#foo()\n");

    let sources = vec![
        first.display().to_string(),
        format!("file://{}", second.display()),
    ];
    desugar::set_desugared_methods(&sources).unwrap();

    let lookup = desugar::current();
    assert_eq!(lookup.len(), 2);
    assert!(desugar::is_desugared_method("java/util/HashMap", "foo", "()", SourceSetType::Main, None));
    assert!(desugar::is_desugared_method("java/util/HashMap", "bar", "(II)", SourceSetType::Main, None));
    assert!(!desugar::is_desugared_method(
        "java/lang/Character",
        "compare",
        "(CC)",
        SourceSetType::Main,
        None
    ));

    desugar::reset();
    assert!(desugar::is_desugared_method(
        "java/lang/Character",
        "compare",
        "(CC)",
        SourceSetType::Main,
        None
    ));
}

#[test]
fn test_set_desugared_methods_from_jar_entry() {
    let _guard = GLOBAL_LOOKUP.lock();
    let dir = TempDir::new().unwrap();
    let jar = dir.path().join("desugar.jar");
    {
        let file = fs::File::create(&jar).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        writer
            .start_file("foo/bar/baz.txt", zip::write::FileOptions::default())
            .unwrap();
        writer
            .write_all(b"java/util/Optional#isEmpty()Z\njava/time/Clock\n")
            .unwrap();
        writer.finish().unwrap();
    }

    let source = format!("jar:file:{}!/foo/bar/baz.txt", jar.display());
    desugar::set_desugared_methods(&[source]).unwrap();
    assert!(desugar::is_desugared_method("java/util/Optional", "isEmpty", "()", SourceSetType::Main, None));
    assert!(desugar::is_desugared_class("java/time/Clock", SourceSetType::Main, None));

    let missing_entry = format!("jar:file:{}!/foo/missing.txt", jar.display());
    let err = desugar::set_desugared_methods(&[missing_entry.as_str()]).unwrap_err();
    assert_eq!(err.path(), missing_entry);
    // The failed call left the jar lookup in place
    assert!(desugar::is_desugared_class("java/time/Clock", SourceSetType::Main, None));

    desugar::reset();
}

#[test]
fn test_missing_source_is_reported() {
    let _guard = GLOBAL_LOOKUP.lock();
    desugar::reset();
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.txt").display().to_string();

    let err = desugar::set_desugared_methods(&[missing.as_str()]).unwrap_err();
    assert_eq!(err.path(), missing);
    assert_eq!(desugar::current().len(), DEFAULT_DESUGARED_METHODS.len());
}

#[test]
fn test_remote_file_url_is_rejected() {
    let _guard = GLOBAL_LOOKUP.lock();
    desugar::reset();
    let remote = "file://server/share/desugar.txt";

    let err = desugar::set_desugared_methods(&[remote]).unwrap_err();
    assert!(matches!(err, desugar::DescriptorLoadError::InvalidUrl { .. }));
    assert_eq!(err.path(), remote);
    assert_eq!(desugar::current().len(), DEFAULT_DESUGARED_METHODS.len());
}

// ============================================================================
// Project desugaring
// ============================================================================

#[test]
fn test_project_files_replace_defaults() {
    let _guard = GLOBAL_LOOKUP.lock();
    desugar::reset();
    let dir = TempDir::new().unwrap();
    let main = write_file(&dir, "main.txt", "java/util/Optional\n");
    let android_test = write_file(&dir, "android_test.txt", "java/time/Clock\n");

    let project = ProjectDesugaring::new(
        Some(BuildVariantDesugaring {
            main: vec![main],
            android_test: Some(vec![android_test]),
            ..Default::default()
        }),
        false,
        21,
    );

    assert!(desugar::is_desugared_class("java/util/Optional", SourceSetType::Main, Some(&project)));
    assert!(!desugar::is_desugared_method(
        "java/lang/Character",
        "compare",
        "(CC)",
        SourceSetType::Main,
        Some(&project)
    ));

    assert!(desugar::is_desugared_class(
        "java/time/Clock",
        SourceSetType::InstrumentationTests,
        Some(&project)
    ));
    assert!(!desugar::is_desugared_class(
        "java/util/Optional",
        SourceSetType::InstrumentationTests,
        Some(&project)
    ));

    // No files for unit tests, so the process-wide lookup applies
    assert!(desugar::is_desugared_method(
        "java/lang/Character",
        "compare",
        "(CC)",
        SourceSetType::UnitTests,
        Some(&project)
    ));
}

#[test]
fn test_core_library_desugaring_uses_bundled_rules() {
    let _guard = GLOBAL_LOOKUP.lock();
    desugar::reset();
    let modern = ProjectDesugaring::new(None, true, 24);
    let legacy = ProjectDesugaring::new(None, true, 19);

    for project in [&modern, &legacy] {
        assert!(desugar::is_desugared_class("java/time/Duration", SourceSetType::Main, Some(project)));
        assert!(desugar::is_desugared_method(
            "java/lang/Character",
            "compare",
            "(CC)",
            SourceSetType::Main,
            Some(project)
        ));
    }

    assert!(desugar::is_desugared_method(
        "java/util/Collection",
        "parallelStream",
        "()",
        SourceSetType::Main,
        Some(&modern)
    ));
    assert!(!desugar::is_desugared_method(
        "java/util/Collection",
        "parallelStream",
        "()",
        SourceSetType::Main,
        Some(&legacy)
    ));

    // Without library desugaring only the built-in table applies
    let plain = ProjectDesugaring::new(None, false, 24);
    assert!(!desugar::is_desugared_class("java/time/Duration", SourceSetType::Main, Some(&plain)));
}

#[test]
fn test_can_be_desugared_later() {
    assert!(desugar::can_be_desugared_later(Some("java.time.Duration")));
    assert!(desugar::can_be_desugared_later(Some("android.os.Build")));
    assert!(!desugar::can_be_desugared_later(Some("com.example.Foo")));
    assert!(!desugar::can_be_desugared_later(None));
}
