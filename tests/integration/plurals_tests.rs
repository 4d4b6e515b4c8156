//! Plural rules integration tests

use lintmeta::plurals::{language_of, PluralsDatabase, Quantity, QuantitySet};
use lintmeta::report::PluralsReport;

fn relevant_for_locale(locale: &str) -> Option<QuantitySet> {
    PluralsDatabase::latest().relevant(&language_of(locale))
}

#[test]
fn test_latest_is_shared() {
    assert!(std::ptr::eq(PluralsDatabase::latest(), PluralsDatabase::latest()));
}

#[test]
fn test_languages_sorted() {
    let languages: Vec<_> = PluralsDatabase::latest().languages().collect();
    assert!(languages.len() > 100);
    assert!(languages.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(languages.contains(&"en"));
    assert!(languages.contains(&"ru"));
}

#[test]
fn test_locale_forms_resolve_to_language() {
    let polish = relevant_for_locale("pl").unwrap();
    assert_eq!(relevant_for_locale("pl-PL"), Some(polish));
    assert_eq!(relevant_for_locale("pl_PL"), Some(polish));
    assert_eq!(relevant_for_locale("b+pl+PL"), Some(polish));
    assert!(polish.contains(Quantity::Few));
    assert!(!polish.contains(Quantity::Two));
}

#[test]
fn test_legacy_codes() {
    let db = PluralsDatabase::latest();
    assert_eq!(db.relevant("iw"), db.relevant("he"));
    assert_eq!(db.relevant("in"), db.relevant("id"));
}

#[test]
fn test_other_is_never_relevant() {
    let db = PluralsDatabase::latest();
    for language in db.languages() {
        let relevant = db.relevant(language).unwrap();
        assert!(!relevant.contains(Quantity::Other), "{language} lists other");
    }
}

#[test]
fn test_examples_imply_multiple_values() {
    let db = PluralsDatabase::latest();
    for language in db.languages() {
        for quantity in [Quantity::Zero, Quantity::One, Quantity::Two] {
            if let Some(examples) = db.find_integer_examples(language, quantity) {
                assert!(examples.contains(','), "{language} {quantity}: {examples}");
                assert!(db.has_multiple_values_for_quantity(language, quantity));
            }
        }
    }
}

#[test]
fn test_plurals_report() {
    let report = PluralsReport::new("ru-RU", PluralsDatabase::latest());
    assert!(report.known);
    assert_eq!(report.language, "ru");

    let quantities: Vec<Quantity> = report.quantities.iter().map(|entry| entry.quantity).collect();
    assert_eq!(quantities, vec![Quantity::One, Quantity::Few, Quantity::Many]);

    let one = &report.quantities[0];
    assert!(one.multiple_values);
    assert!(one.examples.is_some_and(|examples| examples.starts_with("1, 21, 31")));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["relevant"], serde_json::json!(["one", "few", "many"]));
}
