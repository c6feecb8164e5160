//! Go packages referenced by generated code.

use crate::ir::GoImportPath;

/// Import table for the Temporal SDK and the standard library packages the
/// generated code refers to. Emitters only reference packages through this
/// table, so tests can point it elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkPackages {
    pub context: GoImportPath,
    pub log: GoImportPath,
    pub time: GoImportPath,
    pub client: GoImportPath,
    pub worker: GoImportPath,
    pub workflow: GoImportPath,
}

impl Default for SdkPackages {
    fn default() -> Self {
        Self {
            context: GoImportPath::new("context", "context"),
            log: GoImportPath::new("log", "log"),
            time: GoImportPath::new("time", "time"),
            client: GoImportPath::new("go.temporal.io/sdk/client", "client"),
            worker: GoImportPath::new("go.temporal.io/sdk/worker", "worker"),
            workflow: GoImportPath::new("go.temporal.io/sdk/workflow", "workflow"),
        }
    }
}
