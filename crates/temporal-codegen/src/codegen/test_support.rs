//! IR builders shared by the emitter tests.

use crate::ir::{
    Comments, FileIR, GoImportPath, MethodIR, MethodOptions, Role, ServiceIR, WorkerConfig,
};

pub fn make_test_method(name: &str, role: Role) -> MethodIR {
    let package = GoImportPath::new("example.com/foo", "foo");
    MethodIR {
        go_name: name.to_string(),
        input: package.ident(format!("{}Input", name)),
        output: package.ident(format!("{}Output", name)),
        role,
        deprecated: false,
        comments: Comments::default(),
        options: MethodOptions::default(),
    }
}

pub fn make_test_service(
    name: &str,
    worker: Option<WorkerConfig>,
    methods: Vec<MethodIR>,
) -> ServiceIR {
    ServiceIR {
        full_name: format!("foo.{}", name),
        go_name: name.to_string(),
        deprecated: false,
        comments: Comments::default(),
        worker,
        methods,
    }
}

pub fn make_test_file(path: &str, services: Vec<ServiceIR>) -> FileIR {
    FileIR {
        path: path.to_string(),
        deprecated: false,
        go_import_path: GoImportPath::new("example.com/foo", "foo"),
        filename_prefix: format!("example.com/foo/{}", path.trim_end_matches(".proto")),
        syntax_comments: Comments::default(),
        package_comments: Comments::default(),
        services,
    }
}
