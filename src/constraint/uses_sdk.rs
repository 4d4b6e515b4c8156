// Minimum API requirements declared by a manifest's <uses-sdk> element.

use serde::Serialize;
use tracing::debug;

use super::api::{try_at_least, ApiConstraint, MultiSdkApiConstraint, SdkApiConstraint};
use super::extension::ANDROID_SDK_ID;
use super::level::{parse_api_level, ApiLevel};

/// An `<extension-sdk>` child of `<uses-sdk>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionRequirement {
    /// Raw `android:sdkVersion` value; the SDK id.
    pub sdk_version: String,
    /// Raw `android:minExtensionVersion` value.
    pub min_extension_version: String,
}

/// The attributes and children of `<uses-sdk>` that matter for API checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UsesSdk {
    pub min_sdk_version: Option<String>,
    pub target_sdk_version: Option<String>,
    pub extensions: Vec<ExtensionRequirement>,
}

impl UsesSdk {
    /// The declared minimum API level, or -1 when absent.
    pub fn min_sdk_level(&self) -> i32 {
        self.min_sdk_version.as_deref().map_or(-1, parse_api_level)
    }

    pub fn target_sdk_level(&self) -> i32 {
        self.target_sdk_version.as_deref().map_or(-1, parse_api_level)
    }

    /// Codename used for `minSdkVersion`, if it isn't a number.
    fn min_sdk_codename(&self) -> Option<&str> {
        self.min_sdk_version
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty() && !v.starts_with(|c: char| c.is_ascii_digit()))
    }

    /// The combined requirement of `minSdkVersion` and any extension SDKs.
    ///
    /// The platform level is omitted when an extension SDK already names
    /// the same platform release. Returns `None` when nothing is declared.
    pub fn to_constraint(&self) -> Option<ApiConstraint> {
        let min_sdk = self.min_sdk_level();
        if self.extensions.is_empty() {
            return min_sdk_constraint(min_sdk).map(ApiConstraint::from);
        }

        let codename = self.min_sdk_codename();
        let mut add_min_sdk = true;
        let mut apis: Vec<SdkApiConstraint> = Vec::with_capacity(self.extensions.len() + 1);
        for extension in &self.extensions {
            let sdk_id = parse_api_level(&extension.sdk_version);
            let version = parse_api_level(&extension.min_extension_version);
            if sdk_id == min_sdk && codename.map_or(true, |c| c == extension.sdk_version.trim()) {
                add_min_sdk = false;
            }
            match try_at_least(ApiLevel::new(version), sdk_id) {
                Ok(constraint) if sdk_id > 0 => apis.push(constraint),
                _ => debug!(
                    "Ignoring extension-sdk {} with version {}",
                    extension.sdk_version, extension.min_extension_version
                ),
            }
        }

        if add_min_sdk {
            if let Some(min) = min_sdk_constraint(min_sdk) {
                apis.insert(0, min);
            }
        }
        if apis.is_empty() {
            return None;
        }
        Some(MultiSdkApiConstraint::new(apis, false).into())
    }
}

fn min_sdk_constraint(level: i32) -> Option<SdkApiConstraint> {
    if level <= 0 {
        return None;
    }
    try_at_least(ApiLevel::new(level), ANDROID_SDK_ID).ok()
}
