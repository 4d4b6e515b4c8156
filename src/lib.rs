//! lintmeta - API level metadata for Android lint checks
//!
//! This library provides the data structures an Android linter consults
//! when deciding whether an API call is safe on a device.
//!
//! # Architecture
//!
//! The crate consists of:
//! 1. **Constraints** - Interval sets of API levels per SDK, combined with
//!    `and`, `or` and `not`, compared, rendered and serialized
//! 2. **Plurals** - CLDR plural categories per language
//! 3. **Desugaring** - Which Java APIs D8/R8 backport to older releases
//! 4. **Manifests** - The `<uses-sdk>` requirement of each AndroidManifest.xml
//!    found in a project
//! 5. **Reporting** - Output results in terminal or JSON form

pub mod config;
pub mod constraint;
pub mod desugar;
pub mod discovery;
pub mod parser;
pub mod plurals;
pub mod report;

pub use config::Config;
pub use constraint::{ApiConstraint, ApiLevel, ExtensionSdkRegistry, Intervals};
pub use desugar::{DesugaredMethodLookup, ProjectDesugaring, SourceSetType};
pub use discovery::FileFinder;
pub use parser::xml::{ManifestInfo, ManifestParser};
pub use plurals::{PluralsDatabase, Quantity, QuantitySet};
pub use report::{Report, ReportFormat, Reporter};
