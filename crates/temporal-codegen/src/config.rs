//! Generator configuration.
//!
//! Everything arrives through the plugin parameter string, i.e.
//! `--temporal-go_opt=paths=source_relative,Mfoo.proto=example.com/foo`.

use std::collections::BTreeMap;

use crate::codegen::SdkPackages;
use crate::diagnostic::GeneratorError;

/// Where output files are placed relative to `--temporal-go_out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathsMode {
    /// Output goes to the Go import path of the proto file.
    #[default]
    Import,
    /// Output goes next to the proto file, relative to its include root.
    SourceRelative,
}

/// Configuration for the generator.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    pub paths: PathsMode,

    /// Import path prefix stripped from output file names.
    pub module: Option<String>,

    /// Go import path overrides per proto file (`M` parameters).
    pub import_map: BTreeMap<String, String>,

    /// Go packages of the Temporal SDK referenced by generated code.
    pub sdk: SdkPackages,
}

impl GeneratorConfig {
    /// Parses the comma-separated plugin parameter.
    pub fn from_parameter(parameter: Option<&str>) -> Result<Self, GeneratorError> {
        let mut config = Self::default();
        let Some(parameter) = parameter else {
            return Ok(config);
        };

        for part in parameter.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let invalid = || GeneratorError::InvalidParameter {
                parameter: part.to_string(),
            };
            let (key, value) = part.split_once('=').ok_or_else(invalid)?;

            match key {
                "paths" => {
                    config.paths = match value {
                        "import" => PathsMode::Import,
                        "source_relative" => PathsMode::SourceRelative,
                        _ => return Err(invalid()),
                    };
                }
                "module" => config.module = Some(value.to_string()),
                _ => match key.strip_prefix('M') {
                    Some(file) if !file.is_empty() => {
                        config.import_map.insert(file.to_string(), value.to_string());
                    }
                    _ => return Err(invalid()),
                },
            }
        }

        // Source-relative output never carries the import path to strip.
        if let (PathsMode::SourceRelative, Some(module)) = (config.paths, &config.module) {
            return Err(GeneratorError::InvalidParameter {
                parameter: format!("module={}", module),
            });
        }

        Ok(config)
    }
}
