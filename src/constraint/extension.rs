// SDK identifiers and the registry used to name them in messages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// SDK id of the Android platform itself.
pub const ANDROID_SDK_ID: i32 = 0;

/// An SDK that can be versioned independently of the platform, such as an
/// SDK extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionSdk {
    /// Display name, e.g. `R Extensions`.
    pub name: String,

    /// Short identifier used in lint baselines, e.g. `R-ext`.
    #[serde(default)]
    pub short_name: Option<String>,

    /// Numeric SDK id as used in manifests and descriptors.
    pub id: i32,

    /// Code reference to the constant naming this SDK.
    #[serde(default)]
    pub reference: Option<String>,
}

impl ExtensionSdk {
    pub fn new(name: impl Into<String>, short_name: Option<&str>, id: i32, reference: Option<&str>) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.map(String::from),
            id,
            reference: reference.map(String::from),
        }
    }

    pub fn android() -> Self {
        Self::new("Android SDK", Some("android"), ANDROID_SDK_ID, None)
    }

    pub fn is_android(&self) -> bool {
        self.id == ANDROID_SDK_ID
    }
}

impl fmt::Display for ExtensionSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Known SDKs, indexed by id.
#[derive(Debug, Clone)]
pub struct ExtensionSdkRegistry {
    sdks: Vec<ExtensionSdk>,
}

impl ExtensionSdkRegistry {
    pub fn new(sdks: Vec<ExtensionSdk>) -> Self {
        let mut registry = Self { sdks: Vec::new() };
        for sdk in sdks {
            registry.register(sdk);
        }
        registry
    }

    /// The platform plus the extension SDKs shipped with Android R and later.
    pub fn builtin() -> Self {
        Self::new(vec![
            ExtensionSdk::android(),
            ExtensionSdk::new(
                "R Extensions",
                Some("R-ext"),
                30,
                Some("android.os.Build$VERSION_CODES.R"),
            ),
            ExtensionSdk::new(
                "S Extensions",
                Some("S-ext"),
                31,
                Some("android.os.Build$VERSION_CODES.S"),
            ),
            ExtensionSdk::new(
                "T Extensions",
                Some("T-ext"),
                33,
                Some("android.os.Build$VERSION_CODES.T"),
            ),
            ExtensionSdk::new(
                "Ad Services Extensions",
                Some("AD_SERVICES-ext"),
                1_000_000,
                Some("android.os.ext.SdkExtensions.AD_SERVICES"),
            ),
        ])
    }

    /// Adds an SDK, replacing any earlier entry with the same id.
    pub fn register(&mut self, sdk: ExtensionSdk) {
        match self.sdks.iter_mut().find(|s| s.id == sdk.id) {
            Some(existing) => *existing = sdk,
            None => self.sdks.push(sdk),
        }
    }

    pub fn find(&self, id: i32) -> Option<&ExtensionSdk> {
        self.sdks.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExtensionSdk> {
        self.sdks.iter()
    }

    pub fn len(&self) -> usize {
        self.sdks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sdks.is_empty()
    }
}

impl Default for ExtensionSdkRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
