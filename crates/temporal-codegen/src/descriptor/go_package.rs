//! Go package resolution: import paths, package names, output file names and
//! message identifiers.

use prost_reflect::{FileDescriptor, MessageDescriptor};

use crate::codegen::{go_camel_case, go_sanitized};
use crate::config::{GeneratorConfig, PathsMode};
use crate::diagnostic::GeneratorError;
use crate::ir::{GoIdent, GoImportPath};

/// Resolves the Go package of a proto file.
///
/// The import path comes from an `M` parameter, else from `go_package`. The
/// package name is the part after `;` when given, else the sanitised last
/// element of the import path.
pub fn import_path(
    file: &FileDescriptor,
    config: &GeneratorConfig,
) -> Result<GoImportPath, GeneratorError> {
    let go_package = file
        .file_descriptor_proto()
        .options
        .as_ref()
        .and_then(|o| o.go_package.as_deref());
    resolve(file.name(), go_package, config)
}

fn resolve(
    file: &str,
    go_package: Option<&str>,
    config: &GeneratorConfig,
) -> Result<GoImportPath, GeneratorError> {
    let (path, name) = config
        .import_map
        .get(file)
        .map(String::as_str)
        .or(go_package)
        .map(split_go_package)
        .filter(|(path, _)| !path.is_empty())
        .ok_or_else(|| GeneratorError::MissingGoImportPath {
            file: file.to_string(),
        })?;

    let name = match name.filter(|n| !n.is_empty()) {
        Some(name) => go_sanitized(name),
        None => go_sanitized(base_name(path)),
    };
    Ok(GoImportPath::new(path, name))
}

/// Splits `example.com/foo;foo` into the import path and optional name.
fn split_go_package(go_package: &str) -> (&str, Option<&str>) {
    match go_package.split_once(';') {
        Some((path, name)) => (path, Some(name)),
        None => (go_package, None),
    }
}

fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Output file name of `file` without the `_temporal.pb.go` suffix.
pub fn filename_prefix(
    file: &str,
    import_path: &GoImportPath,
    config: &GeneratorConfig,
) -> Result<String, GeneratorError> {
    let stem = file.strip_suffix(".proto").unwrap_or(file);

    match config.paths {
        PathsMode::SourceRelative => Ok(stem.to_string()),
        PathsMode::Import => {
            let prefix = format!("{}/{}", import_path.path, base_name(stem));
            let Some(module) = &config.module else {
                return Ok(prefix);
            };
            prefix
                .strip_prefix(module.as_str())
                .and_then(|rest| rest.strip_prefix('/'))
                .map(str::to_string)
                .ok_or_else(|| GeneratorError::ModulePrefixMismatch {
                    path: prefix.clone(),
                    module: module.clone(),
                })
        }
    }
}

/// The Go identifier generated for a message by protoc-gen-go: the name
/// relative to the proto package, camel-cased, with nested messages joined
/// by `_`.
pub fn message_ident(
    message: &MessageDescriptor,
    config: &GeneratorConfig,
) -> Result<GoIdent, GeneratorError> {
    let file = message.parent_file();
    let package = import_path(&file, config)?;

    let full_name = message.full_name();
    let relative = match file.package_name() {
        "" => full_name,
        proto_package => full_name
            .strip_prefix(proto_package)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(full_name),
    };
    Ok(package.ident(go_camel_case(relative)))
}
