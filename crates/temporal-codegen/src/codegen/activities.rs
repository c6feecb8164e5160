//! Activity call helpers: start/execute, regular or local.

use super::client::helper_prefix;
use super::go_file::GoFile;
use super::names::Verb;
use super::options::write_literal;
use super::packages::SdkPackages;
use crate::ir::{MethodIR, ACTIVITY_OPTIONS, LOCAL_ACTIVITY_OPTIONS};

pub fn start_activity(
    g: &mut GoFile,
    sdk: &SdkPackages,
    method: &MethodIR,
    struct_name: &str,
    service_name: &str,
) {
    let comment = [
        "This method starts the activity with pre-configured options, and returns a",
        "Future to interact with it until completion. For more information, see",
        "https://docs.temporal.io/dev-guide/go/foundations#activity-execution.",
    ];
    let ctx = g.ident(&sdk.workflow.ident("Context"));
    let input = g.ident(&method.input);
    let out = g.ident(&sdk.workflow.ident("Future"));

    helper_prefix(
        g,
        method,
        &comment,
        struct_name,
        Verb::StartActivity,
        service_name,
        &ctx,
        &input,
        &out,
    );
    activity_options(g, sdk, method);

    let execute = g.ident(&sdk.workflow.ident("ExecuteActivity"));
    g.p(format!("return {}(ctx, c.{}, in)", execute, method.go_name));
    g.p("}");
    g.blank();
}

pub fn execute_activity(
    g: &mut GoFile,
    sdk: &SdkPackages,
    method: &MethodIR,
    struct_name: &str,
    service_name: &str,
) {
    let comment = [
        "This method executes the activity with pre-configured options, blocks until",
        "completion, and returns the output/error results. For more information, see",
        "https://docs.temporal.io/dev-guide/go/foundations#activity-execution.",
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
        Verb::ExecuteActivity,
        service_name,
        &ctx,
        &input,
        &out,
    );
    activity_options(g, sdk, method);

    let execute = g.ident(&sdk.workflow.ident("ExecuteActivity"));
    g.p(format!("var out *{}", output));
    g.p(format!(
        "err := {}(ctx, c.{}, in).Get(ctx, &out)",
        execute, method.go_name
    ));
    g.p("return out, err");
    g.p("}");
    g.blank();
}

/// The returned future comes from `workflow.ExecuteActivity` on a context
/// carrying local activity options.
pub fn start_local_activity(
    g: &mut GoFile,
    sdk: &SdkPackages,
    method: &MethodIR,
    struct_name: &str,
    service_name: &str,
) {
    let comment = [
        "This method starts the activity (locally) with pre-configured options, and",
        "returns a Future to interact with it until completion. For more information,",
        "see https://docs.temporal.io/dev-guide/go/foundations#activity-execution",
        "and https://docs.temporal.io/activities#local-activity.",
    ];
    let ctx = g.ident(&sdk.workflow.ident("Context"));
    let input = g.ident(&method.input);
    let out = g.ident(&sdk.workflow.ident("Future"));

    helper_prefix(
        g,
        method,
        &comment,
        struct_name,
        Verb::StartLocalActivity,
        service_name,
        &ctx,
        &input,
        &out,
    );
    local_activity_options(g, sdk, method);

    let execute = g.ident(&sdk.workflow.ident("ExecuteActivity"));
    g.p(format!("return {}(ctx, c.{}, in)", execute, method.go_name));
    g.p("}");
    g.blank();
}

pub fn execute_local_activity(
    g: &mut GoFile,
    sdk: &SdkPackages,
    method: &MethodIR,
    struct_name: &str,
    service_name: &str,
) {
    let comment = [
        "This method executes the activity (locally) with pre-configured options,",
        "blocks until completion, and returns the output/error. For more information,",
        "see https://docs.temporal.io/dev-guide/go/foundations#activity-execution",
        "and https://docs.temporal.io/activities#local-activity.",
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
        Verb::ExecuteLocalActivity,
        service_name,
        &ctx,
        &input,
        &out,
    );
    local_activity_options(g, sdk, method);

    let execute = g.ident(&sdk.workflow.ident("ExecuteLocalActivity"));
    g.p(format!("var out *{}", output));
    g.p(format!(
        "err := {}(ctx, c.{}, in).Get(ctx, &out)",
        execute, method.go_name
    ));
    g.p("return out, err");
    g.p("}");
    g.blank();
}

fn activity_options(g: &mut GoFile, sdk: &SdkPackages, method: &MethodIR) {
    let with_options = g.ident(&sdk.workflow.ident("WithActivityOptions"));
    write_literal(
        g,
        sdk,
        &format!("ctx = {}(ctx, ", with_options),
        &sdk.workflow.ident("ActivityOptions"),
        &method.options.activity,
        ACTIVITY_OPTIONS,
        ")",
    );
}

fn local_activity_options(g: &mut GoFile, sdk: &SdkPackages, method: &MethodIR) {
    let with_options = g.ident(&sdk.workflow.ident("WithLocalActivityOptions"));
    write_literal(
        g,
        sdk,
        &format!("ctx = {}(ctx, ", with_options),
        &sdk.workflow.ident("LocalActivityOptions"),
        &method.options.local_activity,
        LOCAL_ACTIVITY_OPTIONS,
        ")",
    );
}
