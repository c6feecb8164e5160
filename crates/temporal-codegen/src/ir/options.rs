//! Option records and their field catalogs.
//!
//! Each record type has a catalog: an ordered table of [`FieldSpec`]s that
//! maps a proto field to the Go struct field it populates. The descriptor
//! loader uses the catalog to fill the record, and the option projector uses
//! it to emit one `Field: literal` line per non-zero field. Catalog order is
//! output order.

use std::time::Duration;

/// A single option value, tagged by the kind of Go literal it renders to.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Int(i32),
    Float(f64),
    Str(String),
    Duration(Option<Duration>),
}

/// The kind of an [`OptionValue`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Bool,
    Int,
    Float,
    Str,
    Duration,
}

impl OptionKind {
    /// Name of the proto type accepted for this kind, for error messages.
    pub fn proto_type(self) -> &'static str {
        match self {
            OptionKind::Bool => "bool",
            OptionKind::Int => "int32",
            OptionKind::Float => "double",
            OptionKind::Str => "string",
            OptionKind::Duration => "google.protobuf.Duration",
        }
    }
}

impl OptionValue {
    pub fn kind(&self) -> OptionKind {
        match self {
            OptionValue::Bool(_) => OptionKind::Bool,
            OptionValue::Int(_) => OptionKind::Int,
            OptionValue::Float(_) => OptionKind::Float,
            OptionValue::Str(_) => OptionKind::Str,
            OptionValue::Duration(_) => OptionKind::Duration,
        }
    }

    /// Whether this is the Go zero value for its kind.
    ///
    /// A present duration is never zero, even when it is `0s`.
    pub fn is_zero(&self) -> bool {
        match self {
            OptionValue::Bool(b) => !b,
            OptionValue::Int(n) => *n == 0,
            OptionValue::Float(f) => *f == 0.0,
            OptionValue::Str(s) => s.is_empty(),
            OptionValue::Duration(d) => d.is_none(),
        }
    }

    // The loader converts wire values by the catalog's kind before calling a
    // setter, so the fallbacks below are never hit in practice.

    fn into_bool(self) -> bool {
        matches!(self, OptionValue::Bool(true))
    }

    fn into_int(self) -> i32 {
        match self {
            OptionValue::Int(n) => n,
            _ => 0,
        }
    }

    fn into_float(self) -> f64 {
        match self {
            OptionValue::Float(f) => f,
            _ => 0.0,
        }
    }

    fn into_string(self) -> String {
        match self {
            OptionValue::Str(s) => s,
            _ => String::new(),
        }
    }

    fn into_duration(self) -> Option<Duration> {
        match self {
            OptionValue::Duration(d) => d,
            _ => None,
        }
    }
}

/// One entry of an option catalog.
pub struct FieldSpec<R> {
    /// Field name in the Go SDK struct.
    pub go_name: &'static str,
    /// Field name in `temporal/worker.proto`.
    pub proto_name: &'static str,
    pub get: fn(&R) -> OptionValue,
    pub set: fn(&mut R, OptionValue),
}

impl<R: Default> FieldSpec<R> {
    /// The value kind this field holds.
    pub fn kind(&self) -> OptionKind {
        (self.get)(&R::default()).kind()
    }
}

/// Worker settings from the `(temporal.worker)` service option.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkerConfig {
    /// The worker bootstrap is skipped when this is empty.
    pub task_queue: String,
    pub options: WorkerOptions,
}

/// Mirrors `go.temporal.io/sdk/worker.Options`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkerOptions {
    pub max_concurrent_activity_execution_size: i32,
    pub worker_activities_per_second: f64,
    pub max_concurrent_local_activity_execution_size: i32,
    pub worker_local_activities_per_second: f64,
    pub task_queue_activities_per_second: f64,
    pub max_concurrent_activity_task_pollers: i32,
    pub max_concurrent_workflow_task_execution_size: i32,
    pub max_concurrent_workflow_task_pollers: i32,
    pub enable_logging_in_replay: bool,
    pub sticky_schedule_to_start_timeout: Option<Duration>,
    pub worker_stop_timeout: Option<Duration>,
    pub enable_session_worker: bool,
    pub max_concurrent_session_execution_size: i32,
    pub disable_workflow_worker: bool,
    pub local_activity_worker_only: bool,
    pub identity: String,
    pub deadlock_detection_timeout: Option<Duration>,
    pub max_heartbeat_throttle_interval: Option<Duration>,
    pub default_heartbeat_throttle_interval: Option<Duration>,
    pub disable_eager_activities: bool,
    pub max_concurrent_eager_activity_execution_size: i32,
    pub disable_registration_aliasing: bool,
    pub build_id: String,
    pub use_build_id_for_versioning: bool,
}

/// Catalog for [`WorkerOptions`], in `worker.Options` declaration order.
///
/// `DisableStickyExecution` is deprecated upstream and not exposed.
/// Function-typed fields (interceptors, panic policy, background context,
/// fatal error callback) cannot be expressed as proto options.
pub static WORKER_OPTIONS: &[FieldSpec<WorkerOptions>] = &[
    FieldSpec {
        go_name: "MaxConcurrentActivityExecutionSize",
        proto_name: "max_concurrent_activity_execution_size",
        get: |o| OptionValue::Int(o.max_concurrent_activity_execution_size),
        set: |o, v| o.max_concurrent_activity_execution_size = v.into_int(),
    },
    FieldSpec {
        go_name: "WorkerActivitiesPerSecond",
        proto_name: "worker_activities_per_second",
        get: |o| OptionValue::Float(o.worker_activities_per_second),
        set: |o, v| o.worker_activities_per_second = v.into_float(),
    },
    FieldSpec {
        go_name: "MaxConcurrentLocalActivityExecutionSize",
        proto_name: "max_concurrent_local_activity_execution_size",
        get: |o| OptionValue::Int(o.max_concurrent_local_activity_execution_size),
        set: |o, v| o.max_concurrent_local_activity_execution_size = v.into_int(),
    },
    FieldSpec {
        go_name: "WorkerLocalActivitiesPerSecond",
        proto_name: "worker_local_activities_per_second",
        get: |o| OptionValue::Float(o.worker_local_activities_per_second),
        set: |o, v| o.worker_local_activities_per_second = v.into_float(),
    },
    FieldSpec {
        go_name: "TaskQueueActivitiesPerSecond",
        proto_name: "task_queue_activities_per_second",
        get: |o| OptionValue::Float(o.task_queue_activities_per_second),
        set: |o, v| o.task_queue_activities_per_second = v.into_float(),
    },
    FieldSpec {
        go_name: "MaxConcurrentActivityTaskPollers",
        proto_name: "max_concurrent_activity_task_pollers",
        get: |o| OptionValue::Int(o.max_concurrent_activity_task_pollers),
        set: |o, v| o.max_concurrent_activity_task_pollers = v.into_int(),
    },
    FieldSpec {
        go_name: "MaxConcurrentWorkflowTaskExecutionSize",
        proto_name: "max_concurrent_workflow_task_execution_size",
        get: |o| OptionValue::Int(o.max_concurrent_workflow_task_execution_size),
        set: |o, v| o.max_concurrent_workflow_task_execution_size = v.into_int(),
    },
    FieldSpec {
        go_name: "MaxConcurrentWorkflowTaskPollers",
        proto_name: "max_concurrent_workflow_task_pollers",
        get: |o| OptionValue::Int(o.max_concurrent_workflow_task_pollers),
        set: |o, v| o.max_concurrent_workflow_task_pollers = v.into_int(),
    },
    FieldSpec {
        go_name: "EnableLoggingInReplay",
        proto_name: "enable_logging_in_replay",
        get: |o| OptionValue::Bool(o.enable_logging_in_replay),
        set: |o, v| o.enable_logging_in_replay = v.into_bool(),
    },
    FieldSpec {
        go_name: "StickyScheduleToStartTimeout",
        proto_name: "sticky_schedule_to_start_timeout",
        get: |o| OptionValue::Duration(o.sticky_schedule_to_start_timeout),
        set: |o, v| o.sticky_schedule_to_start_timeout = v.into_duration(),
    },
    FieldSpec {
        go_name: "WorkerStopTimeout",
        proto_name: "worker_stop_timeout",
        get: |o| OptionValue::Duration(o.worker_stop_timeout),
        set: |o, v| o.worker_stop_timeout = v.into_duration(),
    },
    FieldSpec {
        go_name: "EnableSessionWorker",
        proto_name: "enable_session_worker",
        get: |o| OptionValue::Bool(o.enable_session_worker),
        set: |o, v| o.enable_session_worker = v.into_bool(),
    },
    FieldSpec {
        go_name: "MaxConcurrentSessionExecutionSize",
        proto_name: "max_concurrent_session_execution_size",
        get: |o| OptionValue::Int(o.max_concurrent_session_execution_size),
        set: |o, v| o.max_concurrent_session_execution_size = v.into_int(),
    },
    FieldSpec {
        go_name: "DisableWorkflowWorker",
        proto_name: "disable_workflow_worker",
        get: |o| OptionValue::Bool(o.disable_workflow_worker),
        set: |o, v| o.disable_workflow_worker = v.into_bool(),
    },
    FieldSpec {
        go_name: "LocalActivityWorkerOnly",
        proto_name: "local_activity_worker_only",
        get: |o| OptionValue::Bool(o.local_activity_worker_only),
        set: |o, v| o.local_activity_worker_only = v.into_bool(),
    },
    FieldSpec {
        go_name: "Identity",
        proto_name: "identity",
        get: |o| OptionValue::Str(o.identity.clone()),
        set: |o, v| o.identity = v.into_string(),
    },
    FieldSpec {
        go_name: "DeadlockDetectionTimeout",
        proto_name: "deadlock_detection_timeout",
        get: |o| OptionValue::Duration(o.deadlock_detection_timeout),
        set: |o, v| o.deadlock_detection_timeout = v.into_duration(),
    },
    FieldSpec {
        go_name: "MaxHeartbeatThrottleInterval",
        proto_name: "max_heartbeat_throttle_interval",
        get: |o| OptionValue::Duration(o.max_heartbeat_throttle_interval),
        set: |o, v| o.max_heartbeat_throttle_interval = v.into_duration(),
    },
    FieldSpec {
        go_name: "DefaultHeartbeatThrottleInterval",
        proto_name: "default_heartbeat_throttle_interval",
        get: |o| OptionValue::Duration(o.default_heartbeat_throttle_interval),
        set: |o, v| o.default_heartbeat_throttle_interval = v.into_duration(),
    },
    FieldSpec {
        go_name: "DisableEagerActivities",
        proto_name: "disable_eager_activities",
        get: |o| OptionValue::Bool(o.disable_eager_activities),
        set: |o, v| o.disable_eager_activities = v.into_bool(),
    },
    FieldSpec {
        go_name: "MaxConcurrentEagerActivityExecutionSize",
        proto_name: "max_concurrent_eager_activity_execution_size",
        get: |o| OptionValue::Int(o.max_concurrent_eager_activity_execution_size),
        set: |o, v| o.max_concurrent_eager_activity_execution_size = v.into_int(),
    },
    FieldSpec {
        go_name: "DisableRegistrationAliasing",
        proto_name: "disable_registration_aliasing",
        get: |o| OptionValue::Bool(o.disable_registration_aliasing),
        set: |o, v| o.disable_registration_aliasing = v.into_bool(),
    },
    FieldSpec {
        go_name: "BuildID",
        proto_name: "build_id",
        get: |o| OptionValue::Str(o.build_id.clone()),
        set: |o, v| o.build_id = v.into_string(),
    },
    FieldSpec {
        go_name: "UseBuildIDForVersioning",
        proto_name: "use_build_id_for_versioning",
        get: |o| OptionValue::Bool(o.use_build_id_for_versioning),
        set: |o, v| o.use_build_id_for_versioning = v.into_bool(),
    },
];

/// Options for `client.StartWorkflowOptions`.
///
/// No per-call fields are configurable from proto yet, so this record and
/// the three below have empty catalogs and always project to `{}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartWorkflowOptions {}

/// Options for `workflow.ChildWorkflowOptions`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChildWorkflowOptions {}

/// Options for `workflow.ActivityOptions`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityOptions {}

/// Options for `workflow.LocalActivityOptions`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalActivityOptions {}

pub static START_WORKFLOW_OPTIONS: &[FieldSpec<StartWorkflowOptions>] = &[];
pub static CHILD_WORKFLOW_OPTIONS: &[FieldSpec<ChildWorkflowOptions>] = &[];
pub static ACTIVITY_OPTIONS: &[FieldSpec<ActivityOptions>] = &[];
pub static LOCAL_ACTIVITY_OPTIONS: &[FieldSpec<LocalActivityOptions>] = &[];

/// All per-call option records of one method.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodOptions {
    pub start_workflow: StartWorkflowOptions,
    pub child_workflow: ChildWorkflowOptions,
    pub activity: ActivityOptions,
    pub local_activity: LocalActivityOptions,
}
