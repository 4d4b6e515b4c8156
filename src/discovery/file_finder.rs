use crate::config::Config;
use crate::parser::xml::{ManifestError, ManifestInfo, ManifestParser};
use ignore::WalkBuilder;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

const MANIFEST_FILE_NAME: &str = "AndroidManifest.xml";

/// Where a manifest sits in a Gradle style source tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    /// `src/main/AndroidManifest.xml`
    Main,
    /// `src/androidTest/...` and friends
    Test,
    /// Any other source set, e.g. a flavor or `debug`
    SourceSet(String),
    /// A manifest outside a `src/<set>/` directory
    Other,
}

impl ManifestKind {
    /// Determine the manifest kind from its path
    pub fn from_path(path: &Path) -> Self {
        let components: Vec<_> = path
            .components()
            .filter_map(|c| c.as_os_str().to_str())
            .collect();
        let source_set = components
            .windows(3)
            .rev()
            .find(|w| w[0] == "src" && w[2] == MANIFEST_FILE_NAME)
            .map(|w| w[1]);
        match source_set {
            Some("main") => ManifestKind::Main,
            Some(set) if set.starts_with("androidTest") || set.starts_with("test") => ManifestKind::Test,
            Some(set) => ManifestKind::SourceSet(set.to_string()),
            None => ManifestKind::Other,
        }
    }
}

/// A discovered manifest file
#[derive(Debug, Clone)]
pub struct ManifestFile {
    /// Path to the manifest
    pub path: PathBuf,

    pub kind: ManifestKind,
}

/// Finder for AndroidManifest.xml files in a project
pub struct FileFinder<'a> {
    config: &'a Config,
}

impl<'a> FileFinder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Find all manifests under the given path
    pub fn find_manifests(&self, root: &Path) -> Vec<ManifestFile> {
        debug!("Scanning for manifests in: {}", root.display());

        if root.is_file() {
            return vec![ManifestFile {
                path: root.to_path_buf(),
                kind: ManifestKind::from_path(root),
            }];
        }

        let targets = if self.config.discovery.targets.is_empty() {
            vec![root.to_path_buf()]
        } else {
            self.config
                .discovery
                .targets
                .iter()
                .map(|t| root.join(t))
                .collect()
        };

        let mut files: Vec<ManifestFile> = targets
            .par_iter()
            .flat_map(|target| self.scan_directory(target))
            .collect();
        files.sort_by(|a, b| a.path.cmp(&b.path));
        files.dedup_by(|a, b| a.path == b.path);

        debug!("Found {} manifests", files.len());
        files
    }

    /// Scan a single directory for manifests
    fn scan_directory(&self, dir: &Path) -> Vec<ManifestFile> {
        if !dir.exists() {
            trace!("Directory does not exist: {}", dir.display());
            return Vec::new();
        }

        let walker = WalkBuilder::new(dir)
            .hidden(true)           // Skip hidden files
            .git_ignore(true)       // Respect .gitignore
            .git_global(true)       // Respect global gitignore
            .git_exclude(true)      // Respect .git/info/exclude
            .ignore(true)           // Respect .ignore files
            .parents(true)          // Check parent directories for ignore files
            .follow_links(false)    // Don't follow symlinks
            .build();

        walker
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter(|entry| entry.file_name() == MANIFEST_FILE_NAME)
            .filter_map(|entry| {
                let path = entry.path();

                // Check exclusion patterns
                if self.config.should_exclude(path) {
                    trace!("Excluding: {}", path.display());
                    return None;
                }

                let kind = ManifestKind::from_path(path);
                trace!("Found {:?} manifest: {}", kind, path.display());
                Some(ManifestFile {
                    path: path.to_path_buf(),
                    kind,
                })
            })
            .collect()
    }

    /// Find and parse every manifest; unreadable ones are reported and
    /// returned separately.
    pub fn parse_manifests(&self, root: &Path) -> (Vec<(ManifestFile, ManifestInfo)>, Vec<ManifestError>) {
        let parser = ManifestParser::new();
        let results: Vec<_> = self
            .find_manifests(root)
            .into_par_iter()
            .map(|file| parser.parse_file(&file.path).map(|info| (file, info)))
            .collect();

        let mut parsed = Vec::with_capacity(results.len());
        let mut errors = Vec::new();
        for result in results {
            match result {
                Ok(manifest) => parsed.push(manifest),
                Err(e) => {
                    warn!("{}", e);
                    errors.push(e);
                }
            }
        }
        (parsed, errors)
    }
}
