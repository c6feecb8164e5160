//! Client interface, implementation struct and constructor generation.

use super::activities;
use super::go_file::{comment_lines, GoFile};
use super::names::{
    client_constructor_name, client_interface_name, client_struct_name, Verb,
};
use super::packages::SdkPackages;
use super::workflows;
use crate::ir::{MethodIR, ServiceIR};

const DEPRECATION_COMMENT: &str = "// Deprecated: Do not use.";

/// Generates the client for a service: an exported interface listing every
/// method, a private struct wrapping `client.Client`, its constructor, and
/// the call helpers for each method.
///
/// Workflow methods get workflow and child-workflow helpers; activity
/// methods get activity and local-activity helpers.
pub fn generate_client(g: &mut GoFile, sdk: &SdkPackages, service: &ServiceIR) {
    let interface_name = client_interface_name(service);
    exported_interface(g, sdk, service, &interface_name);

    // Private structure.
    let struct_name = client_struct_name(service);
    let client = g.ident(&sdk.client.ident("Client"));
    g.p(format!("type {} struct {{", struct_name));
    g.p(format!("t {}", client));
    g.p("}");
    g.blank();

    // Constructor.
    service_comments(g, service);
    g.p(format!(
        "func {}(c {}) {} {{",
        client_constructor_name(service),
        client,
        interface_name
    ));
    g.p(format!("return &{}{{c}}", struct_name));
    g.p("}");
    g.blank();

    for method in &service.methods {
        for verb in Verb::for_role(method.role) {
            generate_helper(g, sdk, *verb, method, &struct_name, &service.go_name);
        }
    }
}

fn generate_helper(
    g: &mut GoFile,
    sdk: &SdkPackages,
    verb: Verb,
    method: &MethodIR,
    struct_name: &str,
    service_name: &str,
) {
    match verb {
        Verb::StartWorkflow => workflows::start_workflow(g, sdk, method, struct_name, service_name),
        Verb::ExecuteWorkflow => {
            workflows::execute_workflow(g, sdk, method, struct_name, service_name)
        }
        Verb::StartChildWorkflow => {
            workflows::start_child_workflow(g, sdk, method, struct_name, service_name)
        }
        Verb::ExecuteChildWorkflow => {
            workflows::execute_child_workflow(g, sdk, method, struct_name, service_name)
        }
        Verb::StartActivity => activities::start_activity(g, sdk, method, struct_name, service_name),
        Verb::ExecuteActivity => {
            activities::execute_activity(g, sdk, method, struct_name, service_name)
        }
        Verb::StartLocalActivity => {
            activities::start_local_activity(g, sdk, method, struct_name, service_name)
        }
        Verb::ExecuteLocalActivity => {
            activities::execute_local_activity(g, sdk, method, struct_name, service_name)
        }
    }
}

fn exported_interface(g: &mut GoFile, sdk: &SdkPackages, service: &ServiceIR, interface_name: &str) {
    service_comments(g, service);
    g.p_with_trailing(
        format!("type {} interface {{", interface_name),
        &service.comments.trailing,
    );
    for method in &service.methods {
        method_signature(g, sdk, method);
    }
    g.p("}");
    g.blank();
}

fn method_signature(g: &mut GoFile, sdk: &SdkPackages, method: &MethodIR) {
    method_comment(g, method, &[]);

    let package = if method.role.is_workflow() {
        &sdk.workflow
    } else {
        &sdk.context
    };
    let ctx = g.ident(&package.ident("Context"));
    let input = g.ident(&method.input);
    let output = g.ident(&method.output);

    g.p_with_trailing(
        format!("{}(ctx {}, in *{}) (*{}, error)", method.go_name, ctx, input, output),
        &method.comments.trailing,
    );
}

fn service_comments(g: &mut GoFile, service: &ServiceIR) {
    let wrote = !comment_lines(&service.comments.leading).is_empty();
    g.comment(&service.comments.leading);
    if service.deprecated {
        if wrote {
            g.p("//");
        }
        g.p(DEPRECATION_COMMENT);
    }
}

/// Writes the method's leading comment, then `suffix`, then the deprecation
/// notice, separated by empty `//` lines.
pub(super) fn method_comment(g: &mut GoFile, method: &MethodIR, suffix: &[&str]) {
    let mut wrote = !comment_lines(&method.comments.leading).is_empty();
    g.comment(&method.comments.leading);

    if !suffix.is_empty() {
        if wrote {
            g.p("//");
        }
        for line in suffix {
            g.p(format!("// {}", line));
        }
        wrote = true;
    }

    if method.deprecated {
        if wrote {
            g.p("//");
        }
        g.p(DEPRECATION_COMMENT);
    }
}

/// Writes the doc comment and opening line of a call helper:
/// `func (c *{struct}) {Verb}{Service}{Method}(ctx {ctx}, in *{input}) {out} {`.
#[allow(clippy::too_many_arguments)]
pub(super) fn helper_prefix(
    g: &mut GoFile,
    method: &MethodIR,
    comment: &[&str],
    struct_name: &str,
    verb: Verb,
    service_name: &str,
    ctx: &str,
    input: &str,
    out: &str,
) {
    method_comment(g, method, comment);

    let code = format!(
        "func (c *{}) {}(ctx {}, in *{}) {} {{",
        struct_name,
        verb.declaration_name(service_name, &method.go_name),
        ctx,
        input,
        out
    );
    g.p_with_trailing(code, &method.comments.trailing);
}
