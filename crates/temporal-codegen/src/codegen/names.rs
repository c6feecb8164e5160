//! Go naming rules and the names of generated declarations.

use crate::ir::{Role, ServiceIR};

const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

/// Suffix of the generated client interface.
const CLIENT_SUFFIX: &str = "TemporalClient";

/// Converts a proto identifier to an exported Go identifier.
///
/// Follows the protobuf-go rules: `_x` and `.x` sequences are folded into an
/// upper-case `X`, other dots become underscores, and a leading underscore
/// becomes `X` so the result is always exported.
pub fn go_camel_case(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        let next_is_lower = bytes.get(i + 1).is_some_and(u8::is_ascii_lowercase);
        match c {
            b'.' if next_is_lower => {}
            b'.' => out.push('_'),
            b'_' if i == 0 || bytes[i - 1] == b'.' => out.push('X'),
            b'_' if next_is_lower => {}
            c if c.is_ascii_digit() => out.push(c as char),
            c => {
                out.push(c.to_ascii_uppercase() as char);
                while bytes.get(i + 1).is_some_and(u8::is_ascii_lowercase) {
                    i += 1;
                    out.push(bytes[i] as char);
                }
            }
        }
        i += 1;
    }
    out
}

/// Lower-cases the first character, turning an exported name private.
pub fn unexport(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Makes `s` a valid Go identifier by replacing invalid characters and
/// prefixing an underscore on keyword clashes or a non-letter start.
pub fn go_sanitized(s: &str) -> String {
    let mapped: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    let starts_with_letter = mapped.chars().next().is_some_and(char::is_alphabetic);
    if GO_KEYWORDS.contains(&mapped.as_str()) || !starts_with_letter {
        format!("_{}", mapped)
    } else {
        mapped
    }
}

/// The generated helpers, one per Temporal call style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    StartWorkflow,
    ExecuteWorkflow,
    StartChildWorkflow,
    ExecuteChildWorkflow,
    StartActivity,
    ExecuteActivity,
    StartLocalActivity,
    ExecuteLocalActivity,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::StartWorkflow => "StartWorkflow",
            Verb::ExecuteWorkflow => "ExecuteWorkflow",
            Verb::StartChildWorkflow => "StartChildWorkflow",
            Verb::ExecuteChildWorkflow => "ExecuteChildWorkflow",
            Verb::StartActivity => "StartActivity",
            Verb::ExecuteActivity => "ExecuteActivity",
            Verb::StartLocalActivity => "StartLocalActivity",
            Verb::ExecuteLocalActivity => "ExecuteLocalActivity",
        }
    }

    /// Helpers emitted for a method of the given role, in emission order.
    pub fn for_role(role: Role) -> &'static [Verb] {
        match role {
            Role::Workflow => &[
                Verb::StartWorkflow,
                Verb::ExecuteWorkflow,
                Verb::StartChildWorkflow,
                Verb::ExecuteChildWorkflow,
            ],
            Role::Activity => &[
                Verb::StartActivity,
                Verb::ExecuteActivity,
                Verb::StartLocalActivity,
                Verb::ExecuteLocalActivity,
            ],
        }
    }

    /// `{Verb}{Service}{Method}`.
    pub fn declaration_name(self, service: &str, method: &str) -> String {
        format!("{}{}{}", self.as_str(), service, method)
    }
}

pub fn worker_function_name(service: &ServiceIR) -> String {
    format!("StartWorker{}", service.go_name)
}

pub fn client_interface_name(service: &ServiceIR) -> String {
    format!("{}{}", service.go_name, CLIENT_SUFFIX)
}

pub fn client_struct_name(service: &ServiceIR) -> String {
    unexport(&client_interface_name(service))
}

pub fn client_constructor_name(service: &ServiceIR) -> String {
    format!("New{}", client_interface_name(service))
}
