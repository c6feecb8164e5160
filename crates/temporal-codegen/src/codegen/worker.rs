//! Worker bootstrap generation.

use tracing::debug;

use super::go_file::GoFile;
use super::names::worker_function_name;
use super::options::{quote_go, write_literal};
use super::packages::SdkPackages;
use crate::ir::{Role, ServiceIR, WORKER_OPTIONS};

/// Generates `StartWorker{Service}`, which registers every method of the
/// service on a worker bound to the configured task queue and runs it until
/// interrupted.
///
/// Services without `(temporal.worker)` or with an empty task queue get no
/// bootstrap.
pub fn generate_worker(g: &mut GoFile, sdk: &SdkPackages, service: &ServiceIR) {
    let Some(worker) = service.worker.as_ref().filter(|w| !w.task_queue.is_empty()) else {
        debug!(service = %service.full_name, "no task queue configured, skipping worker");
        return;
    };

    let client = g.ident(&sdk.client.ident("Client"));
    g.p(format!("func {}(c {}) {{", worker_function_name(service), client));
    g.p(format!("taskQueue := {}", quote_go(&worker.task_queue)));
    write_literal(
        g,
        sdk,
        "opts := ",
        &sdk.worker.ident("Options"),
        &worker.options,
        WORKER_OPTIONS,
        "",
    );

    let new_worker = g.ident(&sdk.worker.ident("New"));
    g.p(format!("w := {}(c, taskQueue, opts)", new_worker));
    g.blank();

    for method in &service.methods {
        match method.role {
            Role::Workflow => g.p(format!("w.RegisterWorkflow({})", method.go_name)),
            Role::Activity => g.p(format!("w.RegisterActivity({})", method.go_name)),
        }
    }
    g.blank();

    let interrupt = g.ident(&sdk.worker.ident("InterruptCh"));
    let fatal = g.ident(&sdk.log.ident("Fatalln"));
    g.p(format!("if err := w.Run({}()); err != nil {{", interrupt));
    g.p(format!("{}(\"Failed to start Temporal worker:\", err)", fatal));
    g.p("}");
    g.p("}");
    g.blank();
}
