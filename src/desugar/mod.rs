//! Desugared API index.
//!
//! D8 and R8 backport a number of Java APIs so they can be called on older
//! Android releases. This module answers whether a given method, field or
//! class reference is covered by such a backport, using either a
//! process-wide lookup (built-in table, replaceable through
//! [`set_desugared_methods`]) or a [`ProjectDesugaring`] carrying the
//! project's own descriptor files.

mod bundled;
mod defaults;
mod loader;
mod lookup;
mod project;

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::{debug, warn};

pub use bundled::BUNDLED_LIBRARY_DESUGARING;
pub use defaults::DEFAULT_DESUGARED_METHODS;
pub use loader::{load_files, read_descriptor_sources, DescriptorLoadError};
pub use lookup::{can_be_desugared_later, compare, DesugaredMethodLookup};
pub use project::{BuildVariantDesugaring, ProjectDesugaring, SourceSetType};

/// Stream APIs that library desugaring only provides from API 21 on.
const PARALLEL_STREAM_METHODS: [&str; 5] = [
    "java/util/Collection#parallelStream()Ljava/util/stream/Stream;",
    "java/util/stream/BaseStream#parallel()Ljava/util/stream/BaseStream;",
    "java/util/stream/DoubleStream#parallel()Ljava/util/stream/BaseStream;",
    "java/util/stream/IntStream#parallel()Ljava/util/stream/BaseStream;",
    "java/util/stream/LongStream#parallel()Ljava/util/stream/BaseStream;",
];

static LOOKUP: Lazy<RwLock<Arc<DesugaredMethodLookup>>> = Lazy::new(|| RwLock::new(Arc::new(default_lookup())));

/// A lookup over the built-in table of methods D8 always desugars.
pub fn default_lookup() -> DesugaredMethodLookup {
    DesugaredMethodLookup::new(DEFAULT_DESUGARED_METHODS.iter().copied())
}

/// The process-wide lookup.
pub fn current() -> Arc<DesugaredMethodLookup> {
    LOOKUP.read().clone()
}

/// Replaces the process-wide lookup with the descriptors read from `paths`.
///
/// On error the current lookup is kept, and the error names the first
/// source that could not be read.
pub fn set_desugared_methods<S: AsRef<str>>(paths: &[S]) -> Result<(), DescriptorLoadError> {
    let lines = read_descriptor_sources(paths)?;
    debug!("Using {} desugared method descriptors", lines.len());
    *LOOKUP.write() = Arc::new(DesugaredMethodLookup::new(lines));
    Ok(())
}

/// Restores the built-in table as the process-wide lookup.
pub fn reset() {
    *LOOKUP.write() = Arc::new(default_lookup());
}

/// Descriptor lines for library desugaring as bundled with this crate: the
/// default table, the bundled library surface and, from API 21, the
/// parallel stream methods.
pub fn bundled_library_desugaring_rules(min_sdk: i32) -> Vec<String> {
    let mut lines: Vec<String> = DEFAULT_DESUGARED_METHODS
        .iter()
        .chain(BUNDLED_LIBRARY_DESUGARING)
        .map(|line| line.to_string())
        .collect();
    if min_sdk >= 21 {
        lines.extend(PARALLEL_STREAM_METHODS.iter().map(|line| line.to_string()));
    }
    lines.sort_unstable();
    lines.dedup();
    lines
}

fn lookup_for(project: Option<&ProjectDesugaring>, source_set: SourceSetType) -> Arc<DesugaredMethodLookup> {
    if let Some(project) = project {
        match project.lookup(source_set) {
            Ok(Some(lookup)) => return lookup,
            Ok(None) => {}
            Err(e) => warn!("{}; using default desugaring data", e),
        }
    }
    current()
}

/// Whether `owner.name` with parameter descriptor `desc` (e.g. `(CC)`) is
/// desugared for code in `source_set`.
pub fn is_desugared_method(
    owner: &str,
    name: &str,
    desc: &str,
    source_set: SourceSetType,
    project: Option<&ProjectDesugaring>,
) -> bool {
    lookup_for(project, source_set).is_desugared_method(owner, name, desc)
}

pub fn is_desugared_field(
    owner: &str,
    name: &str,
    source_set: SourceSetType,
    project: Option<&ProjectDesugaring>,
) -> bool {
    lookup_for(project, source_set).is_desugared_field(owner, name)
}

/// Whether every member of `owner` is desugared.
pub fn is_desugared_class(owner: &str, source_set: SourceSetType, project: Option<&ProjectDesugaring>) -> bool {
    lookup_for(project, source_set).is_desugared_class(owner)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Serializes tests that swap the process-wide lookup.
    static GLOBAL_LOOKUP_GUARD: parking_lot::Mutex<()> = parking_lot::const_mutex(());

    #[test]
    fn test_default_global_lookup() {
        let _guard = GLOBAL_LOOKUP_GUARD.lock();
        reset();
        assert!(is_desugared_method(
            "java/lang/Character",
            "compare",
            "(CC)",
            SourceSetType::InstrumentationTests,
            None
        ));
        assert!(!is_desugared_method("foo.bar.Baz", "foo", "(I)", SourceSetType::Main, None));
        assert!(!is_desugared_method("java/lang/Character", "compare", "()", SourceSetType::Main, None));
    }

    #[test]
    fn test_failed_set_keeps_lookup() {
        let _guard = GLOBAL_LOOKUP_GUARD.lock();
        reset();
        let before = current();
        let err = set_desugared_methods(&["/definitely/not/here.txt"]).unwrap_err();
        assert_eq!(err.path(), "/definitely/not/here.txt");
        assert!(Arc::ptr_eq(&before, &current()));

        set_desugared_methods(&["none"]).unwrap();
        assert!(current().is_empty());
        reset();
        assert_eq!(current().len(), DEFAULT_DESUGARED_METHODS.len());
    }

    #[test]
    fn test_bundled_rules() {
        let rules = bundled_library_desugaring_rules(21);
        assert!(rules.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(rules.iter().any(|line| line == PARALLEL_STREAM_METHODS[0]));
        assert!(!bundled_library_desugaring_rules(19)
            .iter()
            .any(|line| line == PARALLEL_STREAM_METHODS[0]));
    }

    #[test]
    fn test_project_error_falls_back_to_global() {
        let _guard = GLOBAL_LOOKUP_GUARD.lock();
        reset();
        let project = ProjectDesugaring::new(
            Some(BuildVariantDesugaring {
                main: vec!["/definitely/not/here.txt".into()],
                ..Default::default()
            }),
            false,
            21,
        );
        assert!(is_desugared_method(
            "java/lang/Character",
            "compare",
            "(CC)",
            SourceSetType::Main,
            Some(&project)
        ));
    }
}
