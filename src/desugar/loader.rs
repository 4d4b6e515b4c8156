// Reading descriptor lists from files, file: URLs and jar: URLs.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use url::Url;
use zip::result::ZipError;
use zip::ZipArchive;

/// Failure to read one of the descriptor sources. `path` is the source
/// exactly as it was passed in.
#[derive(Debug, Error)]
pub enum DescriptorLoadError {
    #[error("Desugaring descriptor file not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read desugaring descriptors from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open jar {path}: {source}")]
    Zip {
        path: String,
        #[source]
        source: ZipError,
    },

    #[error("Malformed descriptor URL: {path}")]
    InvalidUrl { path: String },
}

impl DescriptorLoadError {
    /// The source that could not be processed.
    pub fn path(&self) -> &str {
        match self {
            DescriptorLoadError::NotFound { path }
            | DescriptorLoadError::Io { path, .. }
            | DescriptorLoadError::Zip { path, .. }
            | DescriptorLoadError::InvalidUrl { path } => path,
        }
    }
}

/// Reads the non-blank lines of every source in `paths`, sorted and
/// deduplicated.
///
/// A source is a plain path, a `file:` URL, a `jar:<file url>!/<entry>` URL
/// or the literal `none`, which contributes nothing.
pub fn read_descriptor_sources<S: AsRef<str>>(paths: &[S]) -> Result<Vec<String>, DescriptorLoadError> {
    let mut lines = Vec::with_capacity(1024);
    for path in paths {
        let path = path.as_ref();
        read_descriptor_lines(path, &mut lines)?;
    }
    lines.sort_unstable();
    lines.dedup();
    Ok(lines)
}

fn read_descriptor_lines(path: &str, lines: &mut Vec<String>) -> Result<(), DescriptorLoadError> {
    if path == "none" {
        return Ok(());
    }

    if let Some(rest) = path.strip_prefix("jar:") {
        let (jar_url, entry) = rest
            .split_once("!/")
            .ok_or_else(|| DescriptorLoadError::InvalidUrl { path: path.to_string() })?;
        let jar = file_url_to_path(jar_url)
            .ok_or_else(|| DescriptorLoadError::InvalidUrl { path: path.to_string() })?;
        debug!("Reading desugaring descriptors from {} in {}", entry, jar.display());
        return read_jar_entry(path, &jar, entry, lines);
    }

    let file = if path.starts_with("file:") {
        file_url_to_path(path).ok_or_else(|| DescriptorLoadError::InvalidUrl { path: path.to_string() })?
    } else {
        PathBuf::from(path)
    };
    if !file.is_file() {
        return Err(DescriptorLoadError::NotFound { path: path.to_string() });
    }
    debug!("Reading desugaring descriptors from {}", file.display());
    let reader = File::open(&file).map_err(|source| DescriptorLoadError::Io {
        path: path.to_string(),
        source,
    })?;
    collect_lines(BufReader::new(reader), lines).map_err(|source| DescriptorLoadError::Io {
        path: path.to_string(),
        source,
    })
}

fn read_jar_entry(
    path: &str,
    jar: &Path,
    entry: &str,
    lines: &mut Vec<String>,
) -> Result<(), DescriptorLoadError> {
    let file = File::open(jar).map_err(|source| DescriptorLoadError::Io {
        path: path.to_string(),
        source,
    })?;
    let mut archive = ZipArchive::new(BufReader::new(file)).map_err(|source| DescriptorLoadError::Zip {
        path: path.to_string(),
        source,
    })?;
    let zip_entry = archive.by_name(entry).map_err(|source| DescriptorLoadError::Zip {
        path: path.to_string(),
        source,
    })?;
    collect_lines(BufReader::new(zip_entry), lines).map_err(|source| DescriptorLoadError::Io {
        path: path.to_string(),
        source,
    })
}

fn collect_lines<R: Read>(reader: BufReader<R>, lines: &mut Vec<String>) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(())
}

/// Reads and merges descriptor files.
///
/// With more than one file, a class listed in full in one file supersedes
/// the individual members of that class listed in another.
pub fn load_files<P: AsRef<Path>>(files: &[P]) -> Result<Vec<String>, DescriptorLoadError> {
    let mut lines = Vec::with_capacity(1024);
    for file in files {
        let file = file.as_ref();
        let path = file.display().to_string();
        let reader = File::open(file).map_err(|source| DescriptorLoadError::Io {
            path: path.clone(),
            source,
        })?;
        collect_lines(BufReader::new(reader), &mut lines)
            .map_err(|source| DescriptorLoadError::Io { path, source })?;
    }
    lines.sort_unstable();

    if files.len() > 1 {
        lines = drop_members_of_full_classes(lines);
    }
    lines.dedup();
    Ok(lines)
}

/// `lines` must be sorted, so members directly follow their class line.
fn drop_members_of_full_classes(lines: Vec<String>) -> Vec<String> {
    let mut filtered: Vec<String> = Vec::with_capacity(lines.len());
    let mut class_line: Option<usize> = None;
    for line in lines {
        if let Some(index) = class_line {
            let class = filtered[index].as_str();
            if line.len() > class.len()
                && line.starts_with(class)
                && line.as_bytes()[class.len()] == b'#'
            {
                continue;
            }
        }
        class_line = (!line.contains('#')).then_some(filtered.len());
        filtered.push(line);
    }
    filtered
}

/// Converts a `file:` URL into a local path. URLs naming a remote host
/// have no local path.
pub(crate) fn file_url_to_path(url: &str) -> Option<PathBuf> {
    let url = Url::parse(url).ok()?;
    if url.scheme() != "file" {
        return None;
    }
    url.to_file_path().ok()
}
