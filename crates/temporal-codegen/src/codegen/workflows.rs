//! Workflow call helpers: start/execute, directly or as a child workflow.

use super::client::helper_prefix;
use super::go_file::GoFile;
use super::names::Verb;
use super::options::write_literal;
use super::packages::SdkPackages;
use crate::ir::{MethodIR, CHILD_WORKFLOW_OPTIONS, START_WORKFLOW_OPTIONS};

pub fn start_workflow(
    g: &mut GoFile,
    sdk: &SdkPackages,
    method: &MethodIR,
    struct_name: &str,
    service_name: &str,
) {
    let comment = [
        "This method starts the workflow with pre-configured options, and returns a",
        "WorkflowRun to interact with it until completion. For more information, see",
        "https://docs.temporal.io/dev-guide/go/foundations#start-workflow-execution.",
    ];
    let ctx = g.ident(&sdk.context.ident("Context"));
    let input = g.ident(&method.input);
    let out = format!("({}, error)", g.ident(&sdk.client.ident("WorkflowRun")));

    helper_prefix(
        g,
        method,
        &comment,
        struct_name,
        Verb::StartWorkflow,
        service_name,
        &ctx,
        &input,
        &out,
    );
    start_workflow_options(g, sdk, method);

    g.p(format!("return c.t.ExecuteWorkflow(ctx, opts, c.{}, in)", method.go_name));
    g.p("}");
    g.blank();
}

pub fn execute_workflow(
    g: &mut GoFile,
    sdk: &SdkPackages,
    method: &MethodIR,
    struct_name: &str,
    service_name: &str,
) {
    let comment = [
        "This method executes the workflow with pre-configured options, blocks until",
        "completion, and returns the output/error results. For more information, see",
        "https://docs.temporal.io/dev-guide/go/foundations#start-workflow-execution.",
    ];
    let ctx = g.ident(&sdk.context.ident("Context"));
    let input = g.ident(&method.input);
    let output = g.ident(&method.output);
    let out = format!("(*{}, error)", output);

    helper_prefix(
        g,
        method,
        &comment,
        struct_name,
        Verb::ExecuteWorkflow,
        service_name,
        &ctx,
        &input,
        &out,
    );
    start_workflow_options(g, sdk, method);

    g.p(format!("run, err := c.t.ExecuteWorkflow(ctx, opts, c.{}, in)", method.go_name));
    g.p("if err != nil {");
    g.p("return nil, err");
    g.p("}");
    g.p(format!("var out *{}", output));
    g.p("err = run.Get(ctx, &out)");
    g.p("return out, err");
    g.p("}");
    g.blank();
}

pub fn start_child_workflow(
    g: &mut GoFile,
    sdk: &SdkPackages,
    method: &MethodIR,
    struct_name: &str,
    service_name: &str,
) {
    let comment = [
        "This method starts the workflow (as a child) with pre-configured options,",
        "and returns a Future to interact with it until completion. For more info,",
        "see https://docs.temporal.io/dev-guide/go/foundations#start-workflow-execution",
        "and https://docs.temporal.io/workflows#child-workflow.",
    ];
    let ctx = g.ident(&sdk.workflow.ident("Context"));
    let input = g.ident(&method.input);
    let out = g.ident(&sdk.workflow.ident("ChildWorkflowFuture"));

    helper_prefix(
        g,
        method,
        &comment,
        struct_name,
        Verb::StartChildWorkflow,
        service_name,
        &ctx,
        &input,
        &out,
    );
    child_workflow_options(g, sdk, method);

    let execute = g.ident(&sdk.workflow.ident("ExecuteChildWorkflow"));
    g.p(format!("return {}(ctx, c.{}, in)", execute, method.go_name));
    g.p("}");
    g.blank();
}

pub fn execute_child_workflow(
    g: &mut GoFile,
    sdk: &SdkPackages,
    method: &MethodIR,
    struct_name: &str,
    service_name: &str,
) {
    let comment = [
        "This method executes the workflow (as a child) with pre-configured options,",
        "blocks until completion, and returns the output/error. For more information,",
        "see https://docs.temporal.io/dev-guide/go/foundations#start-workflow-execution",
        "and https://docs.temporal.io/workflows#child-workflow.",
    ];
    let ctx = g.ident(&sdk.workflow.ident("Context"));
    let input = g.ident(&method.input);
    let output = g.ident(&method.output);
    let out = format!("(*{}, error)", output);

    helper_prefix(
        g,
        method,
        &comment,
        struct_name,
        Verb::ExecuteChildWorkflow,
        service_name,
        &ctx,
        &input,
        &out,
    );
    child_workflow_options(g, sdk, method);

    let execute = g.ident(&sdk.workflow.ident("ExecuteChildWorkflow"));
    g.p(format!("var out *{}", output));
    g.p(format!(
        "err := {}(ctx, c.{}, in).Get(ctx, &out)",
        execute, method.go_name
    ));
    g.p("return out, err");
    g.p("}");
    g.blank();
}

fn start_workflow_options(g: &mut GoFile, sdk: &SdkPackages, method: &MethodIR) {
    write_literal(
        g,
        sdk,
        "opts := ",
        &sdk.client.ident("StartWorkflowOptions"),
        &method.options.start_workflow,
        START_WORKFLOW_OPTIONS,
        "",
    );
}

fn child_workflow_options(g: &mut GoFile, sdk: &SdkPackages, method: &MethodIR) {
    let with_options = g.ident(&sdk.workflow.ident("WithChildOptions"));
    write_literal(
        g,
        sdk,
        &format!("ctx = {}(ctx, ", with_options),
        &sdk.workflow.ident("ChildWorkflowOptions"),
        &method.options.child_workflow,
        CHILD_WORKFLOW_OPTIONS,
        ")",
    );
}
