use log::{debug, error, info, warn};

/// Logger scoped to the fixture currently being processed.
pub struct LogManager {
    scope: String,
}

impl LogManager {
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.scope, message);
    }

    pub fn detail(&self, message: &str) {
        debug!("[{}] {}", self.scope, message);
    }

    pub fn warning(&self, message: &str) {
        warn!("[{}] {}", self.scope, message);
    }

    /// Logs an error together with its full source chain.
    pub fn failure(&self, err: &(dyn std::error::Error + 'static)) {
        let mut chain = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            chain.push_str(": ");
            chain.push_str(&cause.to_string());
            source = cause.source();
        }
        error!("[{}] {}", self.scope, chain);
    }
}
