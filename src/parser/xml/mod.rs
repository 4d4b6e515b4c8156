// XML parser module

mod manifest;

pub use manifest::ManifestParser;

use crate::constraint::uses_sdk::UsesSdk;
use crate::constraint::ApiConstraint;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors while reading a manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed manifest {path} at byte {position}: {source}")]
    Xml {
        path: PathBuf,
        position: usize,
        #[source]
        source: quick_xml::Error,
    },
}

/// What a manifest declares about its API requirements
#[derive(Debug, Default, Clone, Serialize)]
pub struct ManifestInfo {
    pub path: PathBuf,

    /// Package name from the `<manifest>` element
    pub package: Option<String>,

    /// The top level `<uses-sdk>` element, if any
    pub uses_sdk: Option<UsesSdk>,
}

impl ManifestInfo {
    /// The minimum API requirement, combining `minSdkVersion` with any
    /// `<extension-sdk>` children.
    pub fn api_constraint(&self) -> Option<ApiConstraint> {
        self.uses_sdk.as_ref().and_then(UsesSdk::to_constraint)
    }

    pub fn min_sdk(&self) -> i32 {
        self.uses_sdk.as_ref().map_or(-1, UsesSdk::min_sdk_level)
    }
}
