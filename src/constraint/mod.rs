//! API level constraints.
//!
//! An [`ApiConstraint`] describes the API levels under which a piece of
//! code can run, e.g. inside `if (SDK_INT >= 26)`. Constraints combine with
//! `and`, `or` and `not`, can be compared with [`ApiConstraint::is_at_least`]
//! and can span several SDKs (the platform plus SDK extensions).

mod api;
mod extension;
mod intervals;
mod level;
mod serialize;

pub mod uses_sdk;

pub use api::{
    above, above_in, at_least, at_least_in, at_most, at_most_in, below, below_in, exactly,
    exactly_in, not_level, not_level_in, range, range_in, try_at_least, ApiConstraint,
    MultiSdkApiConstraint, SdkApiConstraint, SdkApiConstraints, NO_SDK_ID, UNKNOWN_SDK_ID,
};
pub use extension::{ExtensionSdk, ExtensionSdkRegistry, ANDROID_SDK_ID};
pub use intervals::{is_infinity, Intervals, MajorMinor, Span, MAX_MAJOR, MAX_MINOR};
pub use level::{api_for_codename, api_for_preview_name, parse_api_level, ApiLevel, HIGHEST_KNOWN_API};

use thiserror::Error;

/// Errors from parsing constraint text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("Invalid API level: {0}")]
    InvalidApiLevel(String),

    #[error("Invalid SDK descriptor `{0}`; expected comma separated `sdk:level` pairs")]
    InvalidDescriptor(String),

    #[error("Invalid serialized constraint: {0}")]
    InvalidSerialization(String),
}
