//! Request builders shared by the integration tests.
//!
//! Method and service options are kept as raw bytes so they can carry the
//! Temporal extensions, which `prost_types` option structs cannot hold.

#![allow(dead_code)]

use prost::Message;
use prost_reflect::{DescriptorPool, DynamicMessage, Value};
use prost_types::compiler::Version;
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::source_code_info::Location;
use prost_types::{
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileOptions, SourceCodeInfo,
};

use temporal_codegen::PluginRequest;

pub const WORKER_PROTO: &str = "temporal/worker.proto";
const DESCRIPTOR_PROTO: &str = "google/protobuf/descriptor.proto";
const DURATION_PROTO: &str = "google/protobuf/duration.proto";

pub const WORKER_OPTION_FIELDS: &[(&str, Type)] = &[
    ("max_concurrent_activity_execution_size", Type::Int32),
    ("worker_activities_per_second", Type::Double),
    ("max_concurrent_local_activity_execution_size", Type::Int32),
    ("worker_local_activities_per_second", Type::Double),
    ("task_queue_activities_per_second", Type::Double),
    ("max_concurrent_activity_task_pollers", Type::Int32),
    ("max_concurrent_workflow_task_execution_size", Type::Int32),
    ("max_concurrent_workflow_task_pollers", Type::Int32),
    ("enable_logging_in_replay", Type::Bool),
    ("sticky_schedule_to_start_timeout", Type::Message),
    ("worker_stop_timeout", Type::Message),
    ("enable_session_worker", Type::Bool),
    ("max_concurrent_session_execution_size", Type::Int32),
    ("disable_workflow_worker", Type::Bool),
    ("local_activity_worker_only", Type::Bool),
    ("identity", Type::String),
    ("deadlock_detection_timeout", Type::Message),
    ("max_heartbeat_throttle_interval", Type::Message),
    ("default_heartbeat_throttle_interval", Type::Message),
    ("disable_eager_activities", Type::Bool),
    ("max_concurrent_eager_activity_execution_size", Type::Int32),
    ("disable_registration_aliasing", Type::Bool),
    ("build_id", Type::String),
    ("use_build_id_for_versioning", Type::Bool),
];

#[derive(Clone, PartialEq, Message)]
pub struct RawFile {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub package: Option<String>,
    #[prost(string, repeated, tag = "3")]
    pub dependency: Vec<String>,
    #[prost(message, repeated, tag = "4")]
    pub message_type: Vec<DescriptorProto>,
    #[prost(message, repeated, tag = "6")]
    pub service: Vec<RawService>,
    #[prost(message, optional, tag = "8")]
    pub options: Option<FileOptions>,
    #[prost(message, optional, tag = "9")]
    pub source_code_info: Option<SourceCodeInfo>,
    #[prost(string, optional, tag = "12")]
    pub syntax: Option<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct RawService {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(message, repeated, tag = "2")]
    pub method: Vec<RawMethod>,
    #[prost(bytes = "vec", optional, tag = "3")]
    pub options: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, Message)]
pub struct RawMethod {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub input_type: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub output_type: Option<String>,
    #[prost(bytes = "vec", optional, tag = "4")]
    pub options: Option<Vec<u8>>,
}

fn field(name: &str, number: i32, ty: Type, type_name: Option<&str>) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(ty as i32),
        type_name: type_name.map(str::to_string),
        ..Default::default()
    }
}

fn extension(name: &str, number: i32, type_name: &str, extendee: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        extendee: Some(extendee.to_string()),
        ..field(name, number, Type::Message, Some(type_name))
    }
}

/// `temporal/worker.proto` as shipped under `proto/`.
pub fn worker_proto() -> FileDescriptorProto {
    worker_proto_with(WORKER_OPTION_FIELDS)
}

/// `temporal/worker.proto` with `WorkerOptions` declaring `fields`, numbered
/// from 1 in order.
pub fn worker_proto_with(fields: &[(&str, Type)]) -> FileDescriptorProto {
    let options_fields = fields
        .iter()
        .enumerate()
        .map(|(i, (name, ty))| {
            let type_name = (*ty == Type::Message).then_some(".google.protobuf.Duration");
            field(name, i as i32 + 1, *ty, type_name)
        })
        .collect();

    FileDescriptorProto {
        name: Some(WORKER_PROTO.to_string()),
        package: Some("temporal".to_string()),
        dependency: vec![DESCRIPTOR_PROTO.to_string(), DURATION_PROTO.to_string()],
        message_type: vec![
            DescriptorProto {
                name: Some("Workflow".to_string()),
                ..Default::default()
            },
            DescriptorProto {
                name: Some("Worker".to_string()),
                field: vec![
                    field("task_queue", 1, Type::String, None),
                    field("options", 2, Type::Message, Some(".temporal.WorkerOptions")),
                ],
                ..Default::default()
            },
            DescriptorProto {
                name: Some("WorkerOptions".to_string()),
                field: options_fields,
                ..Default::default()
            },
        ],
        extension: vec![
            extension("worker", 7233, ".temporal.Worker", ".google.protobuf.ServiceOptions"),
            extension("workflow", 7234, ".temporal.Workflow", ".google.protobuf.MethodOptions"),
        ],
        options: Some(FileOptions {
            go_package: Some(
                "github.com/temporal-codegen/protoc-gen-temporal-go/proto/temporal".to_string(),
            ),
            ..Default::default()
        }),
        syntax: Some("proto3".to_string()),
        ..Default::default()
    }
}

/// The well-known types plus `temporal/worker.proto`.
pub fn temporal_pool() -> DescriptorPool {
    pool_with(worker_proto())
}

/// The well-known types plus the given `temporal/worker.proto`.
pub fn pool_with(worker: FileDescriptorProto) -> DescriptorPool {
    let mut pool = DescriptorPool::global();
    pool.add_file_descriptor_proto(worker).unwrap();
    pool
}

fn new_message(pool: &DescriptorPool, name: &str) -> DynamicMessage {
    DynamicMessage::new(pool.get_message_by_name(name).unwrap())
}

/// `MethodOptions` carrying `(temporal.workflow) = {}`.
pub fn workflow_option() -> Vec<u8> {
    let pool = temporal_pool();
    let ext = pool.get_extension_by_name("temporal.workflow").unwrap();
    let mut options = new_message(&pool, "google.protobuf.MethodOptions");
    options.set_extension(&ext, Value::Message(new_message(&pool, "temporal.Workflow")));
    options.encode_to_vec()
}

/// `MethodOptions` with `deprecated = true`.
pub fn deprecated_method_option() -> Vec<u8> {
    let pool = temporal_pool();
    let mut options = new_message(&pool, "google.protobuf.MethodOptions");
    options.set_field_by_name("deprecated", Value::Bool(true));
    options.encode_to_vec()
}

/// `ServiceOptions` carrying `(temporal.worker)` with the given task queue
/// and worker option fields.
pub fn worker_option(task_queue: &str, fields: Vec<(&str, Value)>) -> Vec<u8> {
    worker_option_in(&temporal_pool(), task_queue, fields)
}

/// Like [`worker_option`], against the `temporal/worker.proto` in `pool`.
pub fn worker_option_in(
    pool: &DescriptorPool,
    task_queue: &str,
    fields: Vec<(&str, Value)>,
) -> Vec<u8> {
    let ext = pool.get_extension_by_name("temporal.worker").unwrap();

    let mut worker_options = new_message(pool, "temporal.WorkerOptions");
    for (name, value) in fields {
        worker_options.set_field_by_name(name, value);
    }

    let mut worker = new_message(pool, "temporal.Worker");
    worker.set_field_by_name("task_queue", Value::String(task_queue.to_string()));
    worker.set_field_by_name("options", Value::Message(worker_options));

    let mut options = new_message(pool, "google.protobuf.ServiceOptions");
    options.set_extension(&ext, Value::Message(worker));
    options.encode_to_vec()
}

/// A `google.protobuf.Duration` value.
pub fn duration(seconds: i64, nanos: i32) -> Value {
    let pool = temporal_pool();
    let mut message = new_message(&pool, "google.protobuf.Duration");
    message.set_field_by_name("seconds", Value::I64(seconds));
    message.set_field_by_name("nanos", Value::I32(nanos));
    Value::Message(message)
}

pub fn message(name: &str) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

pub fn method(name: &str, package: &str, options: Option<Vec<u8>>) -> RawMethod {
    RawMethod {
        name: Some(name.to_string()),
        input_type: Some(format!(".{}.{}Input", package, name)),
        output_type: Some(format!(".{}.{}Output", package, name)),
        options,
    }
}

pub fn service(name: &str, methods: Vec<RawMethod>, options: Option<Vec<u8>>) -> RawService {
    RawService {
        name: Some(name.to_string()),
        method: methods,
        options,
    }
}

/// A proto3 file importing `temporal/worker.proto`, with an `Input`/`Output`
/// message pair declared for every method.
pub fn file(name: &str, package: &str, go_package: Option<&str>, services: Vec<RawService>) -> RawFile {
    let message_type = services
        .iter()
        .flat_map(|s| &s.method)
        .flat_map(|m| {
            let name = m.name.clone().unwrap_or_default();
            [message(&format!("{}Input", name)), message(&format!("{}Output", name))]
        })
        .collect();

    RawFile {
        name: Some(name.to_string()),
        package: Some(package.to_string()),
        dependency: vec![WORKER_PROTO.to_string()],
        message_type,
        service: services,
        options: Some(FileOptions {
            go_package: go_package.map(str::to_string),
            ..Default::default()
        }),
        source_code_info: None,
        syntax: Some("proto3".to_string()),
    }
}

/// Attaches a leading comment to the element at `path`.
pub fn with_comment(mut file: RawFile, path: Vec<i32>, leading: &str) -> RawFile {
    let info = file.source_code_info.get_or_insert_with(Default::default);
    info.location.push(Location {
        path,
        leading_comments: Some(leading.to_string()),
        ..Default::default()
    });
    file
}

/// A request generating `files`, preceded by their dependencies.
pub fn request(files: Vec<RawFile>, parameter: Option<&str>) -> PluginRequest {
    request_with(worker_proto(), files, parameter)
}

/// Like [`request`], shipping the given `temporal/worker.proto`.
pub fn request_with(
    worker: FileDescriptorProto,
    files: Vec<RawFile>,
    parameter: Option<&str>,
) -> PluginRequest {
    let pool = DescriptorPool::global();
    let mut proto_file: Vec<Vec<u8>> = [DESCRIPTOR_PROTO, DURATION_PROTO]
        .iter()
        .map(|name| {
            pool.get_file_by_name(name)
                .unwrap()
                .file_descriptor_proto()
                .encode_to_vec()
        })
        .collect();
    proto_file.push(worker.encode_to_vec());

    let file_to_generate = files.iter().filter_map(|f| f.name.clone()).collect();
    proto_file.extend(files.iter().map(Message::encode_to_vec));

    PluginRequest {
        file_to_generate,
        parameter: parameter.map(str::to_string),
        compiler_version: Some(Version {
            major: Some(4),
            minor: Some(23),
            patch: Some(2),
            suffix: Some(String::new()),
        }),
        proto_file,
    }
}

/// The `Foo`/`Bar` fixture: one service with one activity and a worker on
/// task queue `q`.
pub fn foo_bar_file(worker_fields: Vec<(&str, Value)>) -> RawFile {
    let file = file(
        "foo.proto",
        "foo",
        Some("example.com/foo;foo"),
        vec![service(
            "Foo",
            vec![method("Bar", "foo", None)],
            Some(worker_option("q", worker_fields)),
        )],
    );
    with_comment(file, vec![6, 0, 2, 0], " Bar activity.\n")
}
