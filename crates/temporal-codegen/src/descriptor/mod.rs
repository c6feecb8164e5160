//! Descriptor loading: plugin request to typed IR.
//!
//! Everything the emitters need is resolved here, once, so a malformed
//! request fails before any output is produced.

mod comments;
mod extensions;
mod go_package;
mod request;

pub use extensions::{Extensions, WORKER_EXTENSION, WORKFLOW_EXTENSION};
pub use request::{protoc_version, PluginRequest};

use prost_reflect::{DescriptorPool, FileDescriptor, ServiceDescriptor};
use tracing::debug;

use crate::codegen::go_camel_case;
use crate::config::GeneratorConfig;
use crate::diagnostic::GeneratorError;
use crate::ir::{FileIR, MethodIR, MethodOptions, ServiceIR};
use comments::SourceComments;

/// Loads the files protoc asked to generate, in request order.
pub fn load_request(
    request: &PluginRequest,
    config: &GeneratorConfig,
) -> Result<Vec<FileIR>, GeneratorError> {
    let pool = request.descriptor_pool()?;
    load_files(&pool, &request.file_to_generate, config)
}

/// Loads the named files from `pool`.
pub fn load_files(
    pool: &DescriptorPool,
    names: &[String],
    config: &GeneratorConfig,
) -> Result<Vec<FileIR>, GeneratorError> {
    let extensions = Extensions::resolve(pool);

    names
        .iter()
        .map(|name| {
            let file = pool
                .get_file_by_name(name)
                .ok_or_else(|| GeneratorError::UnknownFile { file: name.clone() })?;
            load_file(&file, &extensions, config)
        })
        .collect()
}

fn load_file(
    file: &FileDescriptor,
    extensions: &Extensions,
    config: &GeneratorConfig,
) -> Result<FileIR, GeneratorError> {
    let proto = file.file_descriptor_proto();
    let comments = SourceComments::new(proto);
    let go_import_path = go_package::import_path(file, config)?;
    let filename_prefix = go_package::filename_prefix(file.name(), &go_import_path, config)?;

    let services = file
        .services()
        .enumerate()
        .map(|(index, service)| load_service(index, &service, extensions, &comments, config))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        file = file.name(),
        go_package = %go_import_path.path,
        services = services.len(),
        "loaded file"
    );

    Ok(FileIR {
        path: file.name().to_string(),
        deprecated: proto
            .options
            .as_ref()
            .and_then(|o| o.deprecated)
            .unwrap_or(false),
        go_import_path,
        filename_prefix,
        syntax_comments: comments.syntax(),
        package_comments: comments.package(),
        services,
    })
}

fn load_service(
    index: usize,
    service: &ServiceDescriptor,
    extensions: &Extensions,
    comments: &SourceComments,
    config: &GeneratorConfig,
) -> Result<ServiceIR, GeneratorError> {
    let worker = extensions.worker_config(service)?;
    if worker.as_ref().is_some_and(|w| w.task_queue.is_empty()) {
        debug!(service = service.full_name(), "worker option without task queue");
    }

    let methods = service
        .methods()
        .enumerate()
        .map(|(method_index, method)| {
            Ok(MethodIR {
                go_name: go_camel_case(method.name()),
                input: go_package::message_ident(&method.input(), config)?,
                output: go_package::message_ident(&method.output(), config)?,
                role: extensions.method_role(&method),
                deprecated: method
                    .method_descriptor_proto()
                    .options
                    .as_ref()
                    .and_then(|o| o.deprecated)
                    .unwrap_or(false),
                comments: comments.method(index, method_index),
                options: MethodOptions::default(),
            })
        })
        .collect::<Result<Vec<_>, GeneratorError>>()?;

    Ok(ServiceIR {
        full_name: service.full_name().to_string(),
        go_name: go_camel_case(service.name()),
        deprecated: service
            .service_descriptor_proto()
            .options
            .as_ref()
            .and_then(|o| o.deprecated)
            .unwrap_or(false),
        comments: comments.service(index),
        worker,
        methods,
    })
}
