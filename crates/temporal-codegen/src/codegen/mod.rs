//! Go code generation from the typed IR.
//!
//! Each proto file with at least one service becomes one
//! `<prefix>_temporal.pb.go` file containing, per service and in declared
//! order:
//! - the worker bootstrap (`StartWorker{Service}`), when a task queue is set
//! - the client interface, its private implementation and constructor
//! - the workflow or activity call helpers for every method
//!
//! Emitters are infallible. Everything that can go wrong is caught while
//! loading descriptors or in [`crate::validate`].

mod activities;
mod client;
mod go_file;
mod header;
mod names;
mod options;
mod packages;
mod workflows;
mod worker;

#[cfg(test)]
pub(crate) mod test_support;

pub use go_file::GoFile;
pub use names::{go_camel_case, go_sanitized, Verb};
pub use packages::SdkPackages;

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::ir::FileIR;

/// Suffix appended to the output filename prefix of every generated file.
pub const FILENAME_SUFFIX: &str = "_temporal.pb.go";

/// Generated Go code.
#[derive(Debug)]
pub struct GeneratedCode {
    /// Map of filename to content.
    pub files: Vec<(String, String)>,
}

/// Generates one Go file per proto file that declares services.
///
/// Files are emitted in the order they were requested.
pub fn generate(files: &[FileIR], protoc_version: &str, config: &GeneratorConfig) -> GeneratedCode {
    let mut out = Vec::new();

    for file in files {
        if file.services.is_empty() {
            debug!(file = %file.path, "no services, skipping");
            continue;
        }

        let g = generate_file(file, protoc_version, &config.sdk);
        debug!(file = %file.path, output = %g.filename(), "generated");
        out.push((g.filename().to_string(), g.content()));
    }

    GeneratedCode { files: out }
}

/// Generates the Go file for a single proto file.
pub fn generate_file(file: &FileIR, protoc_version: &str, sdk: &SdkPackages) -> GoFile {
    let filename = format!("{}{}", file.filename_prefix, FILENAME_SUFFIX);
    let mut g = GoFile::new(filename, &file.go_import_path);

    header::generate_header(&mut g, file, protoc_version);

    for service in &file.services {
        worker::generate_worker(&mut g, sdk, service);
        client::generate_client(&mut g, sdk, service);
    }

    g
}

/// Names of every top-level declaration generated for `file`, in emission
/// order. Duplicates here mean the generated file would not compile.
pub fn declarations(file: &FileIR) -> Vec<String> {
    let mut decls = Vec::new();

    for service in &file.services {
        if service.worker.as_ref().is_some_and(|w| !w.task_queue.is_empty()) {
            decls.push(names::worker_function_name(service));
        }
        decls.push(names::client_interface_name(service));
        decls.push(names::client_struct_name(service));
        decls.push(names::client_constructor_name(service));

        for method in &service.methods {
            for verb in Verb::for_role(method.role) {
                decls.push(verb.declaration_name(&service.go_name, &method.go_name));
            }
        }
    }

    decls
}
