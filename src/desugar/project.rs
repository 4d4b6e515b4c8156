// Per-project desugaring metadata and the lookups derived from it.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::loader::{load_files, DescriptorLoadError};
use super::lookup::DesugaredMethodLookup;

/// The kind of source set a reference is compiled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceSetType {
    Main,
    UnitTests,
    InstrumentationTests,
    TestFixtures,
}

/// Desugaring descriptor files reported by the build for one variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildVariantDesugaring {
    /// Files for the main artifact.
    pub main: Vec<PathBuf>,
    /// Files for the instrumentation test artifact, if it exists.
    pub android_test: Option<Vec<PathBuf>>,
    /// Files for the test fixtures artifact, if it exists.
    pub test_fixtures: Option<Vec<PathBuf>>,
    /// Variant level files, used when an artifact reports none.
    pub fallback: Vec<PathBuf>,
}

impl BuildVariantDesugaring {
    /// Descriptor files for `source_set`, falling back to the variant list.
    pub fn files_for(&self, source_set: SourceSetType) -> &[PathBuf] {
        let artifact = match source_set {
            SourceSetType::Main => Some(&self.main),
            SourceSetType::InstrumentationTests => self.android_test.as_ref(),
            SourceSetType::TestFixtures => self.test_fixtures.as_ref(),
            SourceSetType::UnitTests => None,
        };
        match artifact {
            Some(files) if !files.is_empty() => files,
            _ => &self.fallback,
        }
    }
}

/// Desugaring configuration of a single project.
///
/// Lookups are built on first use and cached per source set.
#[derive(Debug, Default)]
pub struct ProjectDesugaring {
    variant: Option<BuildVariantDesugaring>,
    core_library_desugaring: bool,
    min_sdk: i32,
    cache: Mutex<HashMap<SourceSetType, Arc<DesugaredMethodLookup>>>,
    bundled: OnceCell<Arc<DesugaredMethodLookup>>,
}

impl ProjectDesugaring {
    pub fn new(variant: Option<BuildVariantDesugaring>, core_library_desugaring: bool, min_sdk: i32) -> Self {
        Self {
            variant,
            core_library_desugaring,
            min_sdk,
            ..Self::default()
        }
    }

    pub fn variant(&self) -> Option<&BuildVariantDesugaring> {
        self.variant.as_ref()
    }

    pub fn core_library_desugaring(&self) -> bool {
        self.core_library_desugaring
    }

    pub fn min_sdk(&self) -> i32 {
        self.min_sdk
    }

    /// The lookup for `source_set`, or `None` when the project carries no
    /// desugaring data and the global lookup applies.
    ///
    /// Build metadata wins; without it, projects with core library
    /// desugaring use the bundled rules.
    pub fn lookup(&self, source_set: SourceSetType) -> Result<Option<Arc<DesugaredMethodLookup>>, DescriptorLoadError> {
        if let Some(variant) = &self.variant {
            let files = variant.files_for(source_set);
            if files.is_empty() {
                return Ok(None);
            }
            let mut cache = self.cache.lock();
            if let Some(lookup) = cache.get(&source_set) {
                return Ok(Some(Arc::clone(lookup)));
            }
            debug!("Loading {} desugaring files for {:?}", files.len(), source_set);
            let lookup = Arc::new(DesugaredMethodLookup::new(load_files(files)?));
            cache.insert(source_set, Arc::clone(&lookup));
            return Ok(Some(lookup));
        }

        if self.core_library_desugaring {
            return Ok(Some(self.bundled_rules()));
        }
        Ok(None)
    }

    /// The rules that library desugaring would apply to this project,
    /// whether or not it is enabled.
    pub fn bundled_rules(&self) -> Arc<DesugaredMethodLookup> {
        Arc::clone(
            self.bundled
                .get_or_init(|| Arc::new(DesugaredMethodLookup::new(super::bundled_library_desugaring_rules(self.min_sdk)))),
        )
    }
}
