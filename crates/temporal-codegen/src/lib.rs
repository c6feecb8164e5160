//! # Temporal Codegen
//!
//! This crate turns protobuf service definitions into Go bindings for the
//! Temporal Go SDK. It is the library behind the `protoc-gen-temporal-go`
//! protoc plugin.
//!
//! Every RPC method becomes either a workflow (when it carries the
//! `(temporal.workflow)` option) or an activity. Services annotated with
//! `(temporal.worker)` additionally get a worker bootstrap function.
//!
//! ## Architecture
//!
//! ```text
//! CodeGeneratorRequest
//!        │
//!        ▼
//! ┌──────────────┐
//! │  Descriptor  │  Pool, extensions, Go packages
//! │ (req → IR)   │
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Validate   │  Declaration name checks
//! │   (IR)       │
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Codegen    │  Worker, client and call helpers
//! │  (IR → Go)   │
//! └──────┬───────┘
//!        │
//!        ▼
//! CodeGeneratorResponse
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use temporal_codegen::{build_response, PluginRequest};
//!
//! let request = PluginRequest::decode_bytes(&stdin_bytes)?;
//! let response = build_response(&request);
//! ```

pub mod codegen;
pub mod config;
pub mod descriptor;
pub mod diagnostic;
pub mod ir;
pub mod validate;

use prost_types::compiler::code_generator_response::{Feature, File};
use prost_types::compiler::CodeGeneratorResponse;
use tracing::{debug, warn};

pub use codegen::GeneratedCode;
pub use config::GeneratorConfig;
pub use descriptor::PluginRequest;
pub use diagnostic::GeneratorError;

/// Name of the plugin binary, as printed in generated headers.
pub const EXECUTABLE: &str = "protoc-gen-temporal-go";

/// Version printed in generated headers.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs the generation pipeline for one plugin request.
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a new generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Creates a generator configured from the request's parameter string.
    pub fn from_request(request: &PluginRequest) -> Result<Self, GeneratorError> {
        GeneratorConfig::from_parameter(request.parameter.as_deref()).map(Self::new)
    }

    /// Generates Go code for the request.
    ///
    /// This runs the full pipeline:
    /// 1. Build the descriptor pool and load the requested files into IR
    /// 2. Validate declaration names
    /// 3. Generate one Go file per proto file with services
    pub fn generate(&self, request: &PluginRequest) -> Result<GeneratedCode, GeneratorError> {
        let files = descriptor::load_request(request, &self.config)?;
        validate::validate_files(&files)?;

        let protoc_version = request.protoc_version();
        Ok(codegen::generate(&files, &protoc_version, &self.config))
    }
}

/// Decodes a serialized `CodeGeneratorRequest`.
pub fn decode_request(bytes: &[u8]) -> Result<PluginRequest, GeneratorError> {
    PluginRequest::decode_bytes(bytes)
}

/// Builds the plugin response for a request.
///
/// Generation errors are reported through the response's `error` field, so
/// protoc can print them; the response then carries no files.
pub fn build_response(request: &PluginRequest) -> CodeGeneratorResponse {
    let mut response = CodeGeneratorResponse {
        supported_features: Some(Feature::Proto3Optional as u64),
        ..Default::default()
    };

    let result = Generator::from_request(request).and_then(|g| g.generate(request));
    match result {
        Ok(generated) => {
            debug!(files = generated.files.len(), "generation finished");
            response.file = generated
                .files
                .into_iter()
                .map(|(name, content)| File {
                    name: Some(name),
                    content: Some(content),
                    ..Default::default()
                })
                .collect();
        }
        Err(err) => {
            warn!(error = %err, "generation failed");
            response.error = Some(err.to_string());
        }
    }

    response
}
