// Plural rule tables, generated from CLDR plurals.xml (integer rules only).

use super::{Quantity, QuantitySet};

pub(super) struct RuleSet {
    pub relevant: QuantitySet,
    pub zero: Option<&'static str>,
    pub one: Option<&'static str>,
    pub two: Option<&'static str>,
}

const fn rules(quantities: &[Quantity]) -> QuantitySet {
    let mut set = QuantitySet::empty();
    let mut i = 0;
    while i < quantities.len() {
        set = set.with(quantities[i]);
        i += 1;
    }
    set
}

use Quantity::{Few, Many, One, Two, Zero};

const ONE_21: &str = "1, 21, 31, 41, 51, 61, 71, 81, 101, 1001, \u{2026}";
const ZERO_ONE: &str = "0, 1";

const NONE: RuleSet = RuleSet {
    relevant: QuantitySet::empty(),
    zero: None,
    one: None,
    two: None,
};

const ONE_ONLY: RuleSet = RuleSet {
    relevant: rules(&[One]),
    zero: None,
    one: None,
    two: None,
};

const ONE_ZERO_OR_ONE: RuleSet = RuleSet {
    relevant: rules(&[One]),
    zero: None,
    one: Some(ZERO_ONE),
    two: None,
};

const ONE_MANY: RuleSet = RuleSet {
    relevant: rules(&[One, Many]),
    zero: None,
    one: None,
    two: None,
};

const ONE_MANY_ZERO_OR_ONE: RuleSet = RuleSet {
    relevant: rules(&[One, Many]),
    zero: None,
    one: Some(ZERO_ONE),
    two: None,
};

const ONE_ENDING_IN_1: RuleSet = RuleSet {
    relevant: rules(&[One]),
    zero: None,
    one: Some(ONE_21),
    two: None,
};

const EAST_SLAVIC: RuleSet = RuleSet {
    relevant: rules(&[One, Few, Many]),
    zero: None,
    one: Some(ONE_21),
    two: None,
};

const WEST_SLAVIC: RuleSet = RuleSet {
    relevant: rules(&[One, Few, Many]),
    zero: None,
    one: None,
    two: None,
};

const SOUTH_SLAVIC: RuleSet = RuleSet {
    relevant: rules(&[One, Few]),
    zero: None,
    one: Some(ONE_21),
    two: None,
};

const SLOVENIAN: RuleSet = RuleSet {
    relevant: rules(&[One, Two, Few]),
    zero: None,
    one: Some("1, 101, 201, 301, 401, 501, 601, 701, 1001, \u{2026}"),
    two: Some("2, 102, 202, 302, 402, 502, 602, 702, 1002, \u{2026}"),
};

const BRETON: RuleSet = RuleSet {
    relevant: rules(&[One, Two, Few, Many]),
    zero: None,
    one: Some("1, 21, 31, 41, 51, 61, 81, 101, 1001, \u{2026}"),
    two: Some("2, 22, 32, 42, 52, 62, 82, 102, 1002, \u{2026}"),
};

const LATVIAN: RuleSet = RuleSet {
    relevant: rules(&[Zero, One]),
    zero: Some("0, 10~20, 30, 40, 50, 60, 100, 1000, 10000, 100000, 1000000, \u{2026}"),
    one: Some(ONE_21),
    two: None,
};

const ROMANIAN: RuleSet = RuleSet {
    relevant: rules(&[One, Few]),
    zero: None,
    one: None,
    two: None,
};

const TACHELHIT: RuleSet = RuleSet {
    relevant: rules(&[One, Few]),
    zero: None,
    one: Some(ZERO_ONE),
    two: None,
};

const TAMAZIGHT: RuleSet = RuleSet {
    relevant: rules(&[One]),
    zero: None,
    one: Some("0, 1, 11~24"),
    two: None,
};

const FILIPINO: RuleSet = RuleSet {
    relevant: rules(&[One]),
    zero: None,
    one: Some("0~3, 5, 7, 8, 10~13, 15, 17, 18, 20, 21, 100, 1000, 10000, 100000, 1000000, \u{2026}"),
    two: None,
};

const ARABIC: RuleSet = RuleSet {
    relevant: rules(&[Zero, One, Two, Few, Many]),
    zero: None,
    one: None,
    two: None,
};

const HEBREW: RuleSet = RuleSet {
    relevant: rules(&[One, Two, Many]),
    zero: None,
    one: None,
    two: None,
};

const IRISH: RuleSet = RuleSet {
    relevant: rules(&[One, Two, Few, Many]),
    zero: None,
    one: None,
    two: None,
};

const SCOTTISH_GAELIC: RuleSet = RuleSet {
    relevant: rules(&[One, Two, Few]),
    zero: None,
    one: Some("1, 11"),
    two: Some("2, 12"),
};

const MANX: RuleSet = RuleSet {
    relevant: rules(&[One, Two, Few, Many]),
    zero: None,
    one: Some("1, 11, 21, 31, 41, 51, 61, 71, 101, 1001, \u{2026}"),
    two: Some("2, 12, 22, 32, 42, 52, 62, 72, 102, 1002, \u{2026}"),
};

const CORNISH: RuleSet = RuleSet {
    relevant: rules(&[Zero, One, Two, Few, Many]),
    zero: None,
    one: None,
    two: Some("2, 22, 42, 62, 82, 102, 122, 142, 1000, 10000, 100000, \u{2026}"),
};

const MALTESE: RuleSet = RuleSet {
    relevant: rules(&[One, Few, Many]),
    zero: None,
    one: None,
    two: None,
};

const ZERO_ONE_ONLY: RuleSet = RuleSet {
    relevant: rules(&[Zero, One]),
    zero: None,
    one: None,
    two: None,
};

const ONE_TWO: RuleSet = RuleSet {
    relevant: rules(&[One, Two]),
    zero: None,
    one: None,
    two: None,
};

/// Sorted by language code; looked up with a binary search.
pub(super) const LANGUAGES: &[(&str, &RuleSet)] = &[
    ("af", &ONE_ONLY),
    ("ak", &ONE_ZERO_OR_ONE),
    ("am", &ONE_ZERO_OR_ONE),
    ("ar", &ARABIC),
    ("ars", &ARABIC),
    ("as", &ONE_ZERO_OR_ONE),
    ("ast", &ONE_ONLY),
    ("az", &ONE_ONLY),
    ("be", &EAST_SLAVIC),
    ("bg", &ONE_ONLY),
    ("bho", &ONE_ZERO_OR_ONE),
    ("bn", &ONE_ZERO_OR_ONE),
    ("bo", &NONE),
    ("br", &BRETON),
    ("bs", &SOUTH_SLAVIC),
    ("ca", &ONE_MANY),
    ("ceb", &FILIPINO),
    ("cs", &WEST_SLAVIC),
    ("cy", &ARABIC),
    ("da", &ONE_ONLY),
    ("de", &ONE_ONLY),
    ("dsb", &SLOVENIAN),
    ("dz", &NONE),
    ("el", &ONE_ONLY),
    ("en", &ONE_ONLY),
    ("eo", &ONE_ONLY),
    ("es", &ONE_MANY),
    ("et", &ONE_ONLY),
    ("eu", &ONE_ONLY),
    ("fa", &ONE_ZERO_OR_ONE),
    ("ff", &ONE_ZERO_OR_ONE),
    ("fi", &ONE_ONLY),
    ("fil", &FILIPINO),
    ("fo", &ONE_ONLY),
    ("fr", &ONE_MANY_ZERO_OR_ONE),
    ("fy", &ONE_ONLY),
    ("ga", &IRISH),
    ("gd", &SCOTTISH_GAELIC),
    ("gl", &ONE_ONLY),
    ("gu", &ONE_ZERO_OR_ONE),
    ("guw", &ONE_ZERO_OR_ONE),
    ("gv", &MANX),
    ("ha", &ONE_ONLY),
    ("he", &HEBREW),
    ("hi", &ONE_ZERO_OR_ONE),
    ("hr", &SOUTH_SLAVIC),
    ("hsb", &SLOVENIAN),
    ("hu", &ONE_ONLY),
    ("hy", &ONE_ZERO_OR_ONE),
    ("id", &NONE),
    ("ig", &NONE),
    ("in", &NONE),
    ("is", &ONE_ENDING_IN_1),
    ("it", &ONE_MANY),
    ("iu", &ONE_TWO),
    ("iw", &HEBREW),
    ("ja", &NONE),
    ("jv", &NONE),
    ("ka", &ONE_ONLY),
    ("kab", &ONE_ZERO_OR_ONE),
    ("kea", &NONE),
    ("kk", &ONE_ONLY),
    ("km", &NONE),
    ("kn", &ONE_ZERO_OR_ONE),
    ("ko", &NONE),
    ("ksh", &ZERO_ONE_ONLY),
    ("kw", &CORNISH),
    ("ky", &ONE_ONLY),
    ("lag", &ZERO_ONE_ONLY),
    ("lb", &ONE_ONLY),
    ("ln", &ONE_ZERO_OR_ONE),
    ("lo", &NONE),
    ("lt", &EAST_SLAVIC),
    ("lv", &LATVIAN),
    ("mg", &ONE_ZERO_OR_ONE),
    ("mk", &ONE_ENDING_IN_1),
    ("ml", &ONE_ONLY),
    ("mn", &ONE_ONLY),
    ("mo", &ROMANIAN),
    ("mr", &ONE_ONLY),
    ("ms", &NONE),
    ("mt", &MALTESE),
    ("my", &NONE),
    ("naq", &ONE_TWO),
    ("nb", &ONE_ONLY),
    ("ne", &ONE_ONLY),
    ("nl", &ONE_ONLY),
    ("nn", &ONE_ONLY),
    ("no", &ONE_ONLY),
    ("nso", &ONE_ZERO_OR_ONE),
    ("or", &ONE_ONLY),
    ("pa", &ONE_ZERO_OR_ONE),
    ("pcm", &ONE_ZERO_OR_ONE),
    ("pl", &WEST_SLAVIC),
    ("prg", &LATVIAN),
    ("ps", &ONE_ONLY),
    ("pt", &ONE_MANY_ZERO_OR_ONE),
    ("rm", &ONE_ONLY),
    ("ro", &ROMANIAN),
    ("ru", &EAST_SLAVIC),
    ("sah", &NONE),
    ("sat", &ONE_TWO),
    ("se", &ONE_TWO),
    ("ses", &NONE),
    ("sg", &NONE),
    ("sh", &SOUTH_SLAVIC),
    ("shi", &TACHELHIT),
    ("si", &ONE_ZERO_OR_ONE),
    ("sk", &WEST_SLAVIC),
    ("sl", &SLOVENIAN),
    ("sma", &ONE_TWO),
    ("smi", &ONE_TWO),
    ("smj", &ONE_TWO),
    ("smn", &ONE_TWO),
    ("sms", &ONE_TWO),
    ("sq", &ONE_ONLY),
    ("sr", &SOUTH_SLAVIC),
    ("su", &NONE),
    ("sv", &ONE_ONLY),
    ("sw", &ONE_ONLY),
    ("ta", &ONE_ONLY),
    ("te", &ONE_ONLY),
    ("th", &NONE),
    ("ti", &ONE_ZERO_OR_ONE),
    ("tk", &ONE_ONLY),
    ("tl", &FILIPINO),
    ("to", &NONE),
    ("tr", &ONE_ONLY),
    ("tzm", &TAMAZIGHT),
    ("ug", &ONE_ONLY),
    ("uk", &EAST_SLAVIC),
    ("ur", &ONE_ONLY),
    ("uz", &ONE_ONLY),
    ("vi", &NONE),
    ("wa", &ONE_ZERO_OR_ONE),
    ("wo", &NONE),
    ("yo", &NONE),
    ("yue", &NONE),
    ("zh", &NONE),
    ("zu", &ONE_ZERO_OR_ONE),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_languages_sorted_and_unique() {
        for pair in LANGUAGES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} must sort before {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn test_examples_only_for_relevant_quantities() {
        for (language, rules) in LANGUAGES {
            for (quantity, examples) in [(Zero, rules.zero), (One, rules.one), (Two, rules.two)] {
                if examples.is_some() {
                    assert!(
                        rules.relevant.contains(quantity),
                        "{language} has examples for irrelevant {quantity}"
                    );
                }
            }
        }
    }
}
