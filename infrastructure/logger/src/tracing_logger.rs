use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business log lines to `tracing`, tagged with the component that emitted them.
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("pricing")
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Pricing -- ", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Pricing -- ", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Pricing -- ", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Pricing -- ", component = self.component, "{}", message);
    }
}
