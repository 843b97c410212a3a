//! Fixed file templates written by the migration steps.
//!
//! Text templates are rendered with `std::fmt::Write`; JSON templates are
//! typed records from `cm_core` so they share the tree's serializer.

use std::fmt::Write;

use cm_core::ApiExtractorConfig;

/// Ambient `types` every migrated `tsconfig.json` includes.
pub const TSCONFIG_TYPES: &[&str] = &["jest", "custom-global", "inline-style-expand-shorthand"];

/// Script entries removed from the manifest.
pub const LEGACY_SCRIPTS: &[&str] = &["update-snapshots", "start-test", "test:watch"];

/// JSON schema of api-extractor configs.
pub const API_EXTRACTOR_SCHEMA: &str =
    "https://developer.microsoft.com/json-schemas/api-extractor/v7/api-extractor.schema.json";

/// Content of the jest setup file.
pub const JEST_SETUP: &str = "/** Jest test setup file. */\n";

/// Content of the packaging ignore-file.
pub const NPMIGNORE: &str = "\
.storybook/
.vscode/
bundle-size/
config/
coverage/
e2e/
etc/
node_modules/
src/
temp/
__fixtures__
__mocks__
__tests__

*.api.json
*.log
*.spec.*
*.stories.*
*.test.*
*.yml

# config files
*config.*
*rc.*
.editorconfig
.eslint*
.git*
.prettierignore
";

/// Renders `jest.config.js`.
///
/// `offset` is the relative path back to the tree root, with a trailing
/// slash.
#[must_use]
pub fn jest_config(package: &str, offset: &str, serializer: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "// @ts-check");
    let _ = writeln!(out);
    let _ = writeln!(out, "/**");
    let _ = writeln!(out, " * @type {{jest.InitialOptions}}");
    let _ = writeln!(out, " */");
    let _ = writeln!(out, "module.exports = {{");
    let _ = writeln!(out, "  displayName: '{package}',");
    let _ = writeln!(out, "  preset: '{offset}jest.preset.js',");
    let _ = writeln!(out, "  globals: {{");
    let _ = writeln!(out, "    'ts-jest': {{");
    let _ = writeln!(out, "      tsConfig: '<rootDir>/tsconfig.json',");
    let _ = writeln!(out, "      diagnostics: false,");
    let _ = writeln!(out, "    }},");
    let _ = writeln!(out, "  }},");
    let _ = writeln!(out, "  transform: {{");
    let _ = writeln!(out, r"    '^.+\\.tsx?$': 'ts-jest',");
    let _ = writeln!(out, "  }},");
    let _ = writeln!(out, "  coverageDirectory: './coverage',");
    let _ = writeln!(out, "  setupFilesAfterEnv: ['./config/tests.js'],");
    if let Some(serializer) = serializer {
        let _ = writeln!(out, "  snapshotSerializers: ['{serializer}'],");
    }
    let _ = writeln!(out, "}};");
    out
}

/// The shared api-extractor config of a package.
#[must_use]
pub fn api_extractor_public(scope: &str) -> ApiExtractorConfig {
    ApiExtractorConfig {
        schema: API_EXTRACTOR_SCHEMA.to_owned(),
        extends: format!("{scope}scripts/api-extractor/api-extractor.common.json"),
        main_entry_point_file_path: None,
    }
}

/// The local api-extractor config, extending the public one.
///
/// `<unscopedPackageName>` is an api-extractor token, not a placeholder.
#[must_use]
pub fn api_extractor_local() -> ApiExtractorConfig {
    ApiExtractorConfig {
        schema: API_EXTRACTOR_SCHEMA.to_owned(),
        extends: "./api-extractor.json".to_owned(),
        main_entry_point_file_path: Some(
            "<projectFolder>/dist/<unscopedPackageName>/src/index.d.ts".to_owned(),
        ),
    }
}

/// The fixed manifest scripts, in write order.
#[must_use]
pub fn manifest_scripts(normalized_name: &str, offset: &str) -> [(&'static str, String); 5] {
    [
        (
            "docs",
            "api-extractor run --config=config/api-extractor.local.json --local".to_owned(),
        ),
        (
            "build:local",
            format!(
                "tsc -p . --module esnext --emitDeclarationOnly && node {offset}scripts/typescript/normalize-import --output dist/{normalized_name}/src && yarn docs"
            ),
        ),
        ("storybook", "start-storybook".to_owned()),
        ("start", "yarn storybook".to_owned()),
        ("test", "jest".to_owned()),
    ]
}

/// Renders `.storybook/main.js`. `offset` is relative to the project root.
#[must_use]
pub fn storybook_main(offset: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "const rootMain = require('../{offset}.storybook/main');");
    let _ = writeln!(out);
    let _ = writeln!(out, "module.exports = /** @type {{Omit<import('../{offset}.storybook/main'), 'typescript'|'babel'>}} */ ({{");
    let _ = writeln!(out, "  ...rootMain,");
    let _ = writeln!(out, "  stories: [...rootMain.stories, '../src/**/*.stories.mdx', '../src/**/*.stories.@(ts|tsx)'],");
    let _ = writeln!(out, "  addons: [...rootMain.addons],");
    let _ = writeln!(out, "  webpackFinal: (config, options) => {{");
    let _ = writeln!(out, "    const localConfig = {{ ...rootMain.webpackFinal(config, options) }};");
    let _ = writeln!(out);
    let _ = writeln!(out, "    return localConfig;");
    let _ = writeln!(out, "  }},");
    let _ = writeln!(out, "}});");
    out
}

/// Renders `.storybook/preview.js`. `offset` is relative to the project root.
#[must_use]
pub fn storybook_preview(offset: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "import * as rootPreview from '../{offset}.storybook/preview';");
    let _ = writeln!(out);
    let _ = writeln!(out, "export const decorators = [...rootPreview.decorators];");
    let _ = writeln!(out);
    let _ = writeln!(out, "export const parameters = {{ ...rootPreview.parameters }};");
    out
}

/// Renders the default-export block appended to relocated stories.
#[must_use]
pub fn story_default_export(component: &str) -> String {
    format!("\nexport default {{\n  title: 'Components/{component}',\n  component: {component},\n}};\n")
}
