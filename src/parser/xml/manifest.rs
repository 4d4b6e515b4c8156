use super::{ManifestError, ManifestInfo};
use crate::constraint::uses_sdk::{ExtensionRequirement, UsesSdk};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parser for the API requirements of AndroidManifest.xml files
pub struct ManifestParser;

impl ManifestParser {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse the manifest at `path`
    pub fn parse_file(&self, path: &Path) -> Result<ManifestInfo, ManifestError> {
        let contents = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(path, &contents)
    }

    /// Parse manifest contents, collecting the package and `<uses-sdk>`
    pub fn parse(&self, path: &Path, contents: &str) -> Result<ManifestInfo, ManifestError> {
        let mut info = ManifestInfo {
            path: path.to_path_buf(),
            ..ManifestInfo::default()
        };
        let mut reader = Reader::from_str(contents);
        reader.trim_text(true);

        let mut buf = Vec::new();
        let mut depth = 0usize;
        // Depth of the open <uses-sdk> element, if inside one
        let mut uses_sdk_depth = None;

        loop {
            let event = reader.read_event_into(&mut buf).map_err(|source| ManifestError::Xml {
                path: path.to_path_buf(),
                position: reader.buffer_position(),
                source,
            })?;
            match event {
                Event::Start(ref e) | Event::Empty(ref e) => {
                    let is_start = matches!(event, Event::Start(_));
                    match e.name().as_ref() {
                        b"manifest" if depth == 0 => {
                            info.package = attribute(e, "package");
                        }
                        b"uses-sdk" if depth == 1 => {
                            let uses_sdk = info.uses_sdk.get_or_insert_with(UsesSdk::default);
                            if let Some(min) = android_attribute(e, "minSdkVersion") {
                                uses_sdk.min_sdk_version = Some(min);
                            }
                            if let Some(target) = android_attribute(e, "targetSdkVersion") {
                                uses_sdk.target_sdk_version = Some(target);
                            }
                            if is_start {
                                uses_sdk_depth = Some(depth);
                            }
                        }
                        b"extension-sdk" if uses_sdk_depth == Some(depth.wrapping_sub(1)) => {
                            let sdk_version = android_attribute(e, "sdkVersion");
                            let min_extension_version = android_attribute(e, "minExtensionVersion");
                            match (sdk_version, min_extension_version, info.uses_sdk.as_mut()) {
                                (Some(sdk_version), Some(min_extension_version), Some(uses_sdk)) => {
                                    uses_sdk.extensions.push(ExtensionRequirement {
                                        sdk_version,
                                        min_extension_version,
                                    });
                                }
                                _ => debug!("Incomplete <extension-sdk> in {}", path.display()),
                            }
                        }
                        _ => {}
                    }
                    if is_start {
                        depth += 1;
                    }
                }
                Event::End(_) => {
                    depth = depth.saturating_sub(1);
                    if uses_sdk_depth == Some(depth) {
                        uses_sdk_depth = None;
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        debug!(
            "Parsed manifest {}: minSdkVersion {:?}, {} extension SDKs",
            path.display(),
            info.uses_sdk.as_ref().and_then(|u| u.min_sdk_version.as_deref()),
            info.uses_sdk.as_ref().map_or(0, |u| u.extensions.len())
        );

        Ok(info)
    }
}

impl Default for ManifestParser {
    fn default() -> Self {
        Self::new()
    }
}

fn attribute(element: &BytesStart<'_>, name: &str) -> Option<String> {
    element
        .attributes()
        .filter_map(|a| a.ok())
        .find(|attr| attr.key.as_ref() == name.as_bytes())
        .map(|attr| String::from_utf8_lossy(&attr.value).trim().to_string())
}

/// Value of `android:<name>`; any namespace prefix is accepted.
fn android_attribute(element: &BytesStart<'_>, name: &str) -> Option<String> {
    element
        .attributes()
        .filter_map(|a| a.ok())
        .find(|attr| attr.key.local_name().as_ref() == name.as_bytes() && attr.key.prefix().is_some())
        .map(|attr| String::from_utf8_lossy(&attr.value).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest() {
        let parser = ManifestParser::new();
        let manifest = r#"
            <?xml version="1.0" encoding="utf-8"?>
            <manifest xmlns:android="http://schemas.android.com/apk/res/android"
                package="com.example.app">
                <uses-sdk android:minSdkVersion="21" android:targetSdkVersion="34" />
                <application android:name=".MyApplication">
                    <activity android:name=".MainActivity" />
                </application>
            </manifest>
        "#;

        let result = parser.parse(Path::new("AndroidManifest.xml"), manifest).unwrap();

        assert_eq!(result.package, Some("com.example.app".to_string()));
        let uses_sdk = result.uses_sdk.as_ref().unwrap();
        assert_eq!(uses_sdk.min_sdk_version.as_deref(), Some("21"));
        assert_eq!(uses_sdk.target_sdk_version.as_deref(), Some("34"));
        assert!(uses_sdk.extensions.is_empty());
        assert_eq!(result.api_constraint().unwrap().to_string(), "API level ≥ 21");
    }

    #[test]
    fn test_parse_extension_sdks() {
        let parser = ManifestParser::new();
        let manifest = r#"
            <manifest xmlns:android="http://schemas.android.com/apk/res/android" package="test.pkg">
                <uses-sdk android:minSdkVersion="30">
                    <extension-sdk android:sdkVersion="30" android:minExtensionVersion="12" />
                    <extension-sdk android:sdkVersion="31" android:minExtensionVersion="8" />
                    <extension-sdk android:sdkVersion="33" />
                </uses-sdk>
            </manifest>
        "#;

        let result = parser.parse(Path::new("AndroidManifest.xml"), manifest).unwrap();
        let uses_sdk = result.uses_sdk.as_ref().unwrap();
        assert_eq!(uses_sdk.extensions.len(), 2);
        assert_eq!(uses_sdk.extensions[1].sdk_version, "31");
        assert_eq!(
            result.api_constraint().unwrap().to_string(),
            "SDK 30: version ≥ 12 and SDK 31: version ≥ 8"
        );
    }

    #[test]
    fn test_manifest_without_uses_sdk() {
        let parser = ManifestParser::new();
        let manifest = r#"<manifest package="a.b"><application/></manifest>"#;
        let result = parser.parse(Path::new("AndroidManifest.xml"), manifest).unwrap();
        assert!(result.uses_sdk.is_none());
        assert!(result.api_constraint().is_none());
    }

    #[test]
    fn test_nested_uses_sdk_is_ignored() {
        let parser = ManifestParser::new();
        let manifest = r#"
            <manifest xmlns:android="http://schemas.android.com/apk/res/android">
                <application><uses-sdk android:minSdkVersion="5"/></application>
            </manifest>
        "#;
        let result = parser.parse(Path::new("AndroidManifest.xml"), manifest).unwrap();
        assert!(result.uses_sdk.is_none());
    }

    #[test]
    fn test_malformed_manifest() {
        let parser = ManifestParser::new();
        let err = parser
            .parse(Path::new("AndroidManifest.xml"), "<manifest><uses-sdk></manifest>")
            .unwrap_err();
        assert!(matches!(err, ManifestError::Xml { .. }));
    }
}
