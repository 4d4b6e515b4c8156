use crate::constraint::{ApiConstraint, ExtensionSdkRegistry};
use crate::desugar::SourceSetType;
use crate::discovery::{ManifestFile, ManifestKind};
use crate::parser::xml::{ManifestError, ManifestInfo};
use crate::plurals::{PluralsDatabase, Quantity, QuantitySet};
use serde::Serialize;
use std::path::PathBuf;

/// Result of one lintmeta command, ready to be rendered
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Constraint(ConstraintReport),
    Check(CheckReport),
    Plurals(PluralsReport),
    Desugar(DesugarReport),
    Manifests(ManifestsReport),
}

/// A decoded or parsed API constraint
#[derive(Debug, Serialize)]
pub struct ConstraintReport {
    pub input: String,
    pub rendered: String,
    pub serialized: String,
    pub descriptor: String,
    pub min_api: i32,
    pub max_api: i32,
    pub sdks: Vec<SdkEntry>,
}

#[derive(Debug, Serialize)]
pub struct SdkEntry {
    pub sdk_id: i32,
    pub name: Option<String>,
    pub constraint: String,
}

impl ConstraintReport {
    pub fn new(input: &str, constraint: &ApiConstraint, registry: &ExtensionSdkRegistry) -> Self {
        let sdks = constraint
            .constraints()
            .iter()
            .map(|api| SdkEntry {
                sdk_id: api.sdk_id(),
                name: registry.find(api.sdk_id()).map(|sdk| sdk.name.clone()),
                constraint: api.to_string_with(Some(registry)),
            })
            .collect();
        Self {
            input: input.to_string(),
            rendered: constraint.to_string_with(Some(registry)),
            serialized: constraint.serialize(),
            descriptor: constraint.describe(),
            min_api: constraint.min_level(),
            max_api: constraint.max_level(),
            sdks,
        }
    }
}

/// Whether the constraint we have satisfies the one we need
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub have: String,
    pub need: String,
    pub satisfied: bool,
    pub first_missing: Option<String>,
}

impl CheckReport {
    pub fn new(have: &ApiConstraint, need: &ApiConstraint, registry: &ExtensionSdkRegistry) -> Self {
        let satisfied = have.is_at_least(need);
        let first_missing = if satisfied {
            None
        } else {
            have.first_missing(need)
        };
        Self {
            have: have.to_string_with(Some(registry)),
            need: need.to_string_with(Some(registry)),
            satisfied,
            first_missing: first_missing.map(|missing| missing.to_string_with(Some(registry))),
        }
    }
}

/// Plural rules of one language
#[derive(Debug, Serialize)]
pub struct PluralsReport {
    pub locale: String,
    pub language: String,
    pub known: bool,
    pub relevant: QuantitySet,
    pub quantities: Vec<QuantityEntry>,
}

#[derive(Debug, Serialize)]
pub struct QuantityEntry {
    pub quantity: Quantity,
    pub examples: Option<&'static str>,
    pub multiple_values: bool,
}

impl PluralsReport {
    pub fn new(locale: &str, database: &PluralsDatabase) -> Self {
        let language = crate::plurals::language_of(locale);
        let relevant = database.relevant(&language);
        let quantities = relevant
            .unwrap_or_default()
            .iter()
            .map(|quantity| QuantityEntry {
                quantity,
                examples: database.find_integer_examples(&language, quantity),
                multiple_values: database.has_multiple_values_for_quantity(&language, quantity),
            })
            .collect();
        Self {
            locale: locale.to_string(),
            known: relevant.is_some(),
            relevant: relevant.unwrap_or_default(),
            language,
            quantities,
        }
    }
}

/// Kind of symbol a desugaring query asked about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Class,
    Field,
    Method,
}

/// Answer to a desugaring query
#[derive(Debug, Serialize)]
pub struct DesugarReport {
    pub owner: String,
    pub name: Option<String>,
    pub desc: Option<String>,
    pub symbol: SymbolKind,
    pub source_set: SourceSetType,
    pub desugared: bool,
    pub can_be_desugared_later: bool,
    pub descriptor_count: usize,
}

/// Minimum API requirements of the manifests in a project
#[derive(Debug, Serialize)]
pub struct ManifestsReport {
    pub root: PathBuf,
    pub manifests: Vec<ManifestEntry>,
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ManifestEntry {
    pub path: PathBuf,
    pub kind: String,
    pub package: Option<String>,
    pub min_sdk_version: Option<String>,
    pub target_sdk_version: Option<String>,
    pub requirement: Option<String>,
    pub serialized: Option<String>,
}

impl ManifestsReport {
    pub fn new(
        root: PathBuf,
        manifests: &[(ManifestFile, ManifestInfo)],
        errors: &[ManifestError],
        registry: &ExtensionSdkRegistry,
    ) -> Self {
        let manifests = manifests
            .iter()
            .map(|(file, info)| {
                let constraint = info.api_constraint();
                let uses_sdk = info.uses_sdk.as_ref();
                ManifestEntry {
                    path: file.path.clone(),
                    kind: match &file.kind {
                        ManifestKind::Main => "main".to_string(),
                        ManifestKind::Test => "test".to_string(),
                        ManifestKind::SourceSet(name) => name.clone(),
                        ManifestKind::Other => "other".to_string(),
                    },
                    package: info.package.clone(),
                    min_sdk_version: uses_sdk.and_then(|u| u.min_sdk_version.clone()),
                    target_sdk_version: uses_sdk.and_then(|u| u.target_sdk_version.clone()),
                    requirement: constraint.as_ref().map(|c| c.to_string_with(Some(registry))),
                    serialized: constraint.as_ref().map(ApiConstraint::serialize),
                }
            })
            .collect();
        Self {
            root,
            manifests,
            errors: errors.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{at_least, at_least_in, range};

    #[test]
    fn test_constraint_report() {
        let registry = ExtensionSdkRegistry::builtin();
        let constraint = range(26, 29);
        let report = ConstraintReport::new("e000000", &constraint, &registry);
        assert_eq!(report.rendered, "API level ≥ 26 and API level < 29");
        assert_eq!(report.serialized, "e000000");
        assert_eq!(report.min_api, 26);
        assert_eq!(report.max_api, 29);
        assert_eq!(report.sdks.len(), 1);
        assert_eq!(report.sdks[0].name.as_deref(), Some("Android SDK"));
    }

    #[test]
    fn test_check_report() {
        let registry = ExtensionSdkRegistry::builtin();
        let have = at_least(24);
        let report = CheckReport::new(&have, &at_least(21), &registry);
        assert!(report.satisfied);
        assert!(report.first_missing.is_none());

        let report = CheckReport::new(&have, &at_least_in(4, 30), &registry);
        assert!(!report.satisfied);
        assert_eq!(report.first_missing.as_deref(), Some("R Extensions: version ≥ 4"));
    }

    #[test]
    fn test_plurals_report() {
        let report = PluralsReport::new("ru-RU", PluralsDatabase::latest());
        assert_eq!(report.language, "ru");
        assert!(report.known);
        assert_eq!(report.quantities.len(), 3);
        assert!(report.quantities[0].multiple_values);

        let unknown = PluralsReport::new("xx", PluralsDatabase::latest());
        assert!(!unknown.known);
        assert!(unknown.quantities.is_empty());
    }
}
