//! Typed intermediate representation of the proto files being generated.
//!
//! The descriptor loader resolves everything the emitters need up front:
//! Go identifiers, comments, deprecation flags, the workflow/activity role
//! of every method and the worker configuration of every service. Emitters
//! only ever read this IR, so they never touch dynamic descriptor options.

mod options;

pub use options::{
    ActivityOptions, ChildWorkflowOptions, FieldSpec, LocalActivityOptions, MethodOptions,
    OptionKind, OptionValue, StartWorkflowOptions, WorkerConfig, WorkerOptions,
    ACTIVITY_OPTIONS, CHILD_WORKFLOW_OPTIONS, LOCAL_ACTIVITY_OPTIONS, START_WORKFLOW_OPTIONS,
    WORKER_OPTIONS,
};

/// A Go import path together with the package name used to reference it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GoImportPath {
    pub path: String,
    pub name: String,
}

impl GoImportPath {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }

    /// Returns an identifier declared in this package.
    pub fn ident(&self, name: impl Into<String>) -> GoIdent {
        GoIdent {
            name: name.into(),
            import_path: self.clone(),
        }
    }
}

/// A Go identifier and the package that declares it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoIdent {
    pub name: String,
    pub import_path: GoImportPath,
}

/// Comments attached to a descriptor element, as protoc reports them.
///
/// Text is kept verbatim, including the leading space protoc leaves after
/// `//` and the trailing newline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comments {
    pub leading_detached: Vec<String>,
    pub leading: String,
    pub trailing: String,
}

/// How a method is bound to Temporal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Marked with `(temporal.workflow)`.
    Workflow,
    /// Everything else.
    Activity,
}

impl Role {
    pub fn is_workflow(self) -> bool {
        self == Role::Workflow
    }
}

/// An RPC method.
#[derive(Debug, Clone)]
pub struct MethodIR {
    pub go_name: String,
    pub input: GoIdent,
    pub output: GoIdent,
    pub role: Role,
    pub deprecated: bool,
    pub comments: Comments,
    /// Per-call option records projected into the generated helpers.
    pub options: MethodOptions,
}

/// An RPC service and its methods, in declaration order.
#[derive(Debug, Clone)]
pub struct ServiceIR {
    pub full_name: String,
    pub go_name: String,
    pub deprecated: bool,
    pub comments: Comments,
    /// `None` when the service carries no `(temporal.worker)` option.
    pub worker: Option<WorkerConfig>,
    pub methods: Vec<MethodIR>,
}

/// A proto file selected for generation.
#[derive(Debug, Clone)]
pub struct FileIR {
    /// Path relative to the proto include root, e.g. `foo/v1/foo.proto`.
    pub path: String,
    pub deprecated: bool,
    pub go_import_path: GoImportPath,
    /// Output file name without the `_temporal.pb.go` suffix.
    pub filename_prefix: String,
    /// Comments attached to the `syntax` statement.
    pub syntax_comments: Comments,
    /// Comments attached to the `package` statement.
    pub package_comments: Comments,
    pub services: Vec<ServiceIR>,
}

impl FileIR {
    /// Go package name of the generated file.
    pub fn go_package_name(&self) -> &str {
        &self.go_import_path.name
    }
}
