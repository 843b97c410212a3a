//! TypeScript and api-extractor config records.
//!
//! Both project-level (`tsconfig.json`) and root (`tsconfig.base.json`)
//! configs share [`TsConfig`]. Compiler options the generator owns are
//! explicit; the rest are preserved in `extra`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `compilerOptions` block of a TypeScript config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    /// Emit target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Module system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,

    /// Output directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,

    /// Library declarations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lib: Option<Vec<String>>,

    /// JSX mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsx: Option<String>,

    /// Emit `.d.ts` files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaration: Option<bool>,

    /// Enable decorators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experimental_decorators: Option<bool>,

    /// Import helpers from `tslib`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_helpers: Option<bool>,

    /// Report unused locals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_unused_locals: Option<bool>,

    /// Keep `const enum` declarations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_const_enums: Option<bool>,

    /// Ambient type packages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,

    /// Base directory for `paths`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Module path aliases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<BTreeMap<String, Vec<String>>>,

    /// Options not owned by this tool.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CompilerOptions {
    /// Returns `true` if no option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A TypeScript config file.
///
/// # Examples
///
/// ```
/// use cm_core::TsConfig;
///
/// let json = r#"{"extends": "../../tsconfig.base.json", "compilerOptions": {"types": ["jest"], "strict": true}}"#;
/// let config: TsConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.compiler_options.types.as_deref(), Some(&["jest".to_owned()][..]));
/// assert!(config.compiler_options.extra.contains_key("strict"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsConfig {
    /// Base config this one extends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// Compiler options.
    #[serde(default, skip_serializing_if = "CompilerOptions::is_empty")]
    pub compiler_options: CompilerOptions,

    /// Included source globs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,

    /// Excluded globs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,

    /// Fields not owned by this tool.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An api-extractor config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiExtractorConfig {
    /// JSON schema reference.
    #[serde(rename = "$schema")]
    pub schema: String,

    /// Config this one extends.
    pub extends: String,

    /// Entry point of the declaration rollup, when overridden.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_entry_point_file_path: Option<String>,
}
