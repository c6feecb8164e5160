//! Temporal extensions: `(temporal.workflow)` on methods and
//! `(temporal.worker)` on services.
//!
//! Extensions are looked up by full name in the request's descriptor pool.
//! When a request never imports `temporal/worker.proto` neither is found,
//! every method is an activity and no worker is generated.

use std::time::Duration;

use prost_reflect::{
    DescriptorPool, DynamicMessage, ExtensionDescriptor, MethodDescriptor, ReflectMessage,
    ServiceDescriptor, Value,
};
use tracing::warn;

use crate::diagnostic::GeneratorError;
use crate::ir::{FieldSpec, OptionKind, OptionValue, Role, WorkerConfig, WORKER_OPTIONS};

pub const WORKFLOW_EXTENSION: &str = "temporal.workflow";
pub const WORKER_EXTENSION: &str = "temporal.worker";

const DURATION_MESSAGE: &str = "google.protobuf.Duration";

/// The Temporal extensions known to a descriptor pool.
pub struct Extensions {
    workflow: Option<ExtensionDescriptor>,
    worker: Option<ExtensionDescriptor>,
}

impl Extensions {
    pub fn resolve(pool: &DescriptorPool) -> Self {
        Self {
            workflow: pool.get_extension_by_name(WORKFLOW_EXTENSION),
            worker: pool.get_extension_by_name(WORKER_EXTENSION),
        }
    }

    /// A method is a workflow iff it carries `(temporal.workflow)`.
    pub fn method_role(&self, method: &MethodDescriptor) -> Role {
        match &self.workflow {
            Some(ext) if method.options().has_extension(ext) => Role::Workflow,
            _ => Role::Activity,
        }
    }

    /// Reads `(temporal.worker)` from a service, if present.
    pub fn worker_config(
        &self,
        service: &ServiceDescriptor,
    ) -> Result<Option<WorkerConfig>, GeneratorError> {
        let Some(ext) = &self.worker else {
            return Ok(None);
        };
        let options = service.options();
        if !options.has_extension(ext) {
            return Ok(None);
        }

        let element = service.full_name();
        let value = options.get_extension(ext);
        let worker = value.as_message().ok_or_else(|| {
            GeneratorError::malformed(WORKER_EXTENSION, element, ext.name(), "is not a message")
        })?;

        let task_queue = match worker.get_field_by_name("task_queue") {
            Some(value) => value
                .as_str()
                .ok_or_else(|| {
                    GeneratorError::malformed(WORKER_EXTENSION, element, "task_queue", "must be a string")
                })?
                .to_string(),
            None => String::new(),
        };

        let options = match worker.get_field_by_name("options") {
            Some(value) => {
                let message = value.as_message().ok_or_else(|| {
                    GeneratorError::malformed(WORKER_EXTENSION, element, "options", "must be a message")
                })?;
                decode_record(message, WORKER_OPTIONS, WORKER_EXTENSION, element)?
            }
            None => Default::default(),
        };

        Ok(Some(WorkerConfig { task_queue, options }))
    }
}

/// Fills a typed option record from the set fields of `message`.
///
/// Fields missing from the catalog are skipped with a warning. A field whose
/// value does not match the catalog's kind is an error.
pub fn decode_record<R: Default>(
    message: &DynamicMessage,
    catalog: &[FieldSpec<R>],
    extension: &str,
    element: &str,
) -> Result<R, GeneratorError> {
    let mut record = R::default();

    for (field, value) in message.fields() {
        let Some(spec) = catalog.iter().find(|spec| spec.proto_name == field.name()) else {
            warn!(
                extension,
                element,
                field = field.name(),
                "ignoring unsupported option field"
            );
            continue;
        };

        let value = option_value(spec.kind(), value)
            .map_err(|problem| GeneratorError::malformed(extension, element, field.name(), problem))?;
        (spec.set)(&mut record, value);
    }

    Ok(record)
}

fn option_value(kind: OptionKind, value: &Value) -> Result<OptionValue, String> {
    match (kind, value) {
        (OptionKind::Bool, Value::Bool(b)) => Ok(OptionValue::Bool(*b)),
        (OptionKind::Int, Value::I32(n)) => Ok(OptionValue::Int(*n)),
        (OptionKind::Float, Value::F64(f)) if !f.is_finite() => Err("must be finite".to_string()),
        (OptionKind::Float, Value::F64(f)) => Ok(OptionValue::Float(*f)),
        (OptionKind::Str, Value::String(s)) => Ok(OptionValue::Str(s.clone())),
        (OptionKind::Duration, Value::Message(m))
            if m.descriptor().full_name() == DURATION_MESSAGE =>
        {
            duration(m).map(|d| OptionValue::Duration(Some(d)))
        }
        _ => Err(format!("must be of type {}", kind.proto_type())),
    }
}

fn duration(message: &DynamicMessage) -> Result<Duration, String> {
    let seconds = message
        .get_field_by_name("seconds")
        .and_then(|v| v.as_i64())
        .unwrap_or_default();
    let nanos = message
        .get_field_by_name("nanos")
        .and_then(|v| v.as_i32())
        .unwrap_or_default();

    if seconds < 0 || nanos < 0 {
        return Err("must not be negative".to_string());
    }
    if nanos >= 1_000_000_000 {
        return Err("has out of range nanos".to_string());
    }
    Ok(Duration::new(seconds as u64, nanos as u32))
}
