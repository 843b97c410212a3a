//! Package manifest (`package.json`) record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A package manifest with the fields the generator touches made explicit.
///
/// # Examples
///
/// ```
/// use cm_core::PackageManifest;
///
/// let json = r#"{"name": "@fluentui/react-button", "version": "9.0.0-alpha.30", "private": true}"#;
/// let manifest: PackageManifest = serde_json::from_str(json).unwrap();
/// assert_eq!(manifest.version, "9.0.0-alpha.30");
/// assert!(manifest.scripts.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    /// Package name.
    #[serde(default)]
    pub name: String,

    /// Package version.
    #[serde(default)]
    pub version: String,

    /// npm scripts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scripts: Option<BTreeMap<String, String>>,

    /// Runtime dependencies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<BTreeMap<String, String>>,

    /// Development dependencies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_dependencies: Option<BTreeMap<String, String>>,

    /// Fields not owned by this tool.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PackageManifest {
    /// Removes `package` from both dependency maps.
    ///
    /// Returns `true` if anything was removed.
    pub fn remove_dependency(&mut self, package: &str) -> bool {
        let mut removed = false;
        for deps in [&mut self.dependencies, &mut self.dev_dependencies]
            .into_iter()
            .flatten()
        {
            removed |= deps.remove(package).is_some();
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_dependency() {
        let json = r#"{
            "name": "@fluentui/react-examples",
            "dependencies": {"@fluentui/react-button": "^9.0.0", "react": "16.14.0"},
            "devDependencies": {"@fluentui/react-button": "^9.0.0"}
        }"#;
        let mut manifest: PackageManifest = serde_json::from_str(json).unwrap();

        assert!(manifest.remove_dependency("@fluentui/react-button"));
        assert!(!manifest.remove_dependency("@fluentui/react-button"));

        let deps = manifest.dependencies.as_ref().unwrap();
        assert!(deps.contains_key("react"));
        assert!(manifest.dev_dependencies.as_ref().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let json = r#"{"name": "a", "version": "9.0.0", "main": "lib/index.js", "sideEffects": false}"#;
        let manifest: PackageManifest = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(value["main"], "lib/index.js");
        assert_eq!(value["sideEffects"], false);
        assert!(value.get("scripts").is_none());
    }
}
