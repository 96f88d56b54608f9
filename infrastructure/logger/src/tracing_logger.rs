use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const TARGET: &str = "marketplace";

/// `Logger` port backed by `tracing`.
///
/// Records land under the `marketplace` target, so `RUST_LOG=marketplace=debug`
/// surfaces use-case logs alone. `scope` is attached as a structured field.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    scope: &'static str,
}

impl TracingLogger {
    pub fn new(scope: &'static str) -> Self {
        Self { scope }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("app")
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, scope = self.scope, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, scope = self.scope, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, scope = self.scope, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, scope = self.scope, "{}", message);
    }
}
