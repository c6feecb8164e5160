//! Generator error types.
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while turning a plugin request into Go bindings.
///
/// Every variant aborts the whole response: a file is emitted whole or not
/// at all, and protoc reports the message to the user.
#[derive(Error, Diagnostic, Debug)]
pub enum GeneratorError {
    // =========================================================================
    // Request Errors
    // =========================================================================
    #[error("Failed to decode CodeGeneratorRequest: {message}")]
    #[diagnostic(
        code(temporal_go::request::decode_failed),
        help("Run this binary as a protoc plugin: protoc --temporal-go_out=. foo.proto")
    )]
    RequestDecode {
        message: String,
    },

    #[error("Invalid plugin parameter '{parameter}'")]
    #[diagnostic(
        code(temporal_go::request::invalid_parameter),
        help("Supported parameters: paths=import|source_relative, module=<prefix>, M<file>=<import path>")
    )]
    InvalidParameter {
        parameter: String,
    },

    // =========================================================================
    // Descriptor Errors
    // =========================================================================
    #[error("Invalid descriptor set: {message}")]
    #[diagnostic(code(temporal_go::descriptor::invalid_pool))]
    InvalidDescriptors {
        message: String,
    },

    #[error("File '{file}' was requested but is not part of the descriptor set")]
    #[diagnostic(code(temporal_go::descriptor::unknown_file))]
    UnknownFile {
        file: String,
    },

    // =========================================================================
    // Extension Errors
    // =========================================================================
    #[error("Malformed '{extension}' option on '{element}': field '{field}' {problem}")]
    #[diagnostic(
        code(temporal_go::extension::malformed),
        help("Make sure the imported temporal/worker.proto matches the one shipped with this plugin")
    )]
    MalformedExtension {
        extension: String,
        element: String,
        field: String,
        problem: String,
    },

    // =========================================================================
    // Go Package Errors
    // =========================================================================
    #[error("Unable to determine Go import path for '{file}'")]
    #[diagnostic(
        code(temporal_go::go_package::missing_import_path),
        help("Add `option go_package = \"example.com/foo;foo\";` or pass M{file}=<import path>")
    )]
    MissingGoImportPath {
        file: String,
    },

    #[error("Output path '{path}' does not start with module prefix '{module}'")]
    #[diagnostic(code(temporal_go::go_package::module_mismatch))]
    ModulePrefixMismatch {
        path: String,
        module: String,
    },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Generated declaration '{name}' in '{file}' is already declared in the same Go package")]
    #[diagnostic(
        code(temporal_go::validate::duplicate_declaration),
        help("Rename one of the services or methods; names are built as <Verb><Service><Method>")
    )]
    DuplicateDeclaration {
        file: String,
        name: String,
    },
}

impl GeneratorError {
    /// Creates a malformed-extension error.
    pub fn malformed(
        extension: impl Into<String>,
        element: impl Into<String>,
        field: impl Into<String>,
        problem: impl Into<String>,
    ) -> Self {
        Self::MalformedExtension {
            extension: extension.into(),
            element: element.into(),
            field: field.into(),
            problem: problem.into(),
        }
    }
}
