// API level parsing: plain numbers, dotted `major.minor` versions and codenames.

use std::fmt;
use std::str::FromStr;

use super::ConstraintError;

/// The highest API level with a released codename in [`CODENAMES`].
pub const HIGHEST_KNOWN_API: i32 = 36;

/// Version codes as they appear in `Build.VERSION_CODES`. Lookups ignore
/// case and underscores so preview names such as `UpsideDownCake` match too.
const CODENAMES: &[(&str, i32)] = &[
    ("CUPCAKE", 3),
    ("DONUT", 4),
    ("ECLAIR", 5),
    ("ECLAIR_0_1", 6),
    ("ECLAIR_MR1", 7),
    ("FROYO", 8),
    ("GINGERBREAD", 9),
    ("GINGERBREAD_MR1", 10),
    ("HONEYCOMB", 11),
    ("HONEYCOMB_MR1", 12),
    ("HONEYCOMB_MR2", 13),
    ("ICE_CREAM_SANDWICH", 14),
    ("ICE_CREAM_SANDWICH_MR1", 15),
    ("JELLY_BEAN", 16),
    ("JELLY_BEAN_MR1", 17),
    ("JELLY_BEAN_MR2", 18),
    ("KITKAT", 19),
    ("KITKAT_WATCH", 20),
    ("LOLLIPOP", 21),
    ("LOLLIPOP_MR1", 22),
    ("M", 23),
    ("N", 24),
    ("N_MR1", 25),
    ("O", 26),
    ("O_MR1", 27),
    ("P", 28),
    ("Q", 29),
    ("R", 30),
    ("S", 31),
    ("S_V2", 32),
    ("TIRAMISU", 33),
    ("UPSIDE_DOWN_CAKE", 34),
    ("VANILLA_ICE_CREAM", 35),
    ("BAKLAVA", 36),
];

fn normalize_codename(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Looks up a codename; unknown names yield `None`.
pub fn api_for_codename(name: &str) -> Option<i32> {
    let wanted = normalize_codename(name);
    CODENAMES
        .iter()
        .find(|(codename, _)| normalize_codename(codename) == wanted)
        .map(|&(_, level)| level)
}

/// Like [`api_for_codename`], but unknown codenames are assumed to be the
/// next unreleased platform.
pub fn api_for_preview_name(name: &str) -> i32 {
    api_for_codename(name).unwrap_or(HIGHEST_KNOWN_API + 1)
}

/// Parses a manifest-style API level value: blank means absent (-1), a
/// leading digit means a number, anything else is a codename.
pub fn parse_api_level(value: &str) -> i32 {
    let value = value.trim();
    if value.is_empty() {
        return -1;
    }
    if value.starts_with(|c: char| c.is_ascii_digit()) {
        let major = value.split('.').next().unwrap_or(value);
        major.parse().unwrap_or(-1)
    } else {
        api_for_preview_name(value)
    }
}

/// An API level, optionally with a minor version.
///
/// A level written as `36.1` is *dotted*; a dotted level refers to that
/// exact minor version, while a plain `36` covers all minor versions of 36.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ApiLevel {
    major: i32,
    minor: i32,
    dotted: bool,
}

impl ApiLevel {
    pub fn new(major: i32) -> Self {
        Self {
            major,
            minor: 0,
            dotted: false,
        }
    }

    pub fn dotted(major: i32, minor: i32) -> Self {
        Self {
            major,
            minor,
            dotted: true,
        }
    }

    pub fn major(&self) -> i32 {
        self.major
    }

    pub fn minor(&self) -> i32 {
        self.minor
    }

    pub fn is_dotted(&self) -> bool {
        self.dotted
    }
}

impl From<i32> for ApiLevel {
    fn from(major: i32) -> Self {
        ApiLevel::new(major)
    }
}

impl From<(i32, i32)> for ApiLevel {
    fn from((major, minor): (i32, i32)) -> Self {
        ApiLevel::dotted(major, minor)
    }
}

impl FromStr for ApiLevel {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ConstraintError::InvalidApiLevel(s.to_string());
        if s.is_empty() {
            return Err(invalid());
        }
        if !s.starts_with(|c: char| c.is_ascii_digit()) {
            return Ok(ApiLevel::new(api_for_preview_name(s)));
        }
        match s.split_once('.') {
            Some((major, minor)) => {
                let major = major.parse().map_err(|_| invalid())?;
                let minor = minor.parse().map_err(|_| invalid())?;
                Ok(ApiLevel::dotted(major, minor))
            }
            None => Ok(ApiLevel::new(s.parse().map_err(|_| invalid())?)),
        }
    }
}

impl fmt::Display for ApiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dotted {
            write!(f, "{}.{}", self.major, self.minor)
        } else {
            write!(f, "{}", self.major)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codenames() {
        assert_eq!(api_for_codename("TIRAMISU"), Some(33));
        assert_eq!(api_for_codename("Tiramisu"), Some(33));
        assert_eq!(api_for_codename("UpsideDownCake"), Some(34));
        assert_eq!(api_for_codename("S_V2"), Some(32));
        assert_eq!(api_for_codename("Sv2"), Some(32));
        assert_eq!(api_for_codename("ZZ"), None);
        assert_eq!(api_for_preview_name("ZZ"), HIGHEST_KNOWN_API + 1);
    }

    #[test]
    fn test_parse_api_level() {
        assert_eq!(parse_api_level(""), -1);
        assert_eq!(parse_api_level("  "), -1);
        assert_eq!(parse_api_level("21"), 21);
        assert_eq!(parse_api_level("36.1"), 36);
        assert_eq!(parse_api_level("VanillaIceCream"), 35);
        assert_eq!(parse_api_level("ZZ"), 37);
    }

    #[test]
    fn test_from_str() {
        let plain: ApiLevel = "34".parse().unwrap();
        assert_eq!(plain, ApiLevel::new(34));
        assert!(!plain.is_dotted());

        let dotted: ApiLevel = "36.1".parse().unwrap();
        assert_eq!(dotted.major(), 36);
        assert_eq!(dotted.minor(), 1);
        assert!(dotted.is_dotted());
        assert_eq!(dotted.to_string(), "36.1");

        assert_eq!("Baklava".parse::<ApiLevel>().unwrap().major(), 36);
        assert!("".parse::<ApiLevel>().is_err());
        assert!("3x".parse::<ApiLevel>().is_err());
        assert!("3.x".parse::<ApiLevel>().is_err());
    }
}
