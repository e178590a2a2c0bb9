use crate::utils::Quota;
use std::sync::Arc;

/// A logger type which is called with various information.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,

    /// A global execution quota.
    pub quota: Option<Arc<dyn Quota + Send + Sync>>,
}

impl Environment {
    /// Creates an instance of `Environment` which drops all log messages.
    pub fn silent() -> Self {
        Self { logger: Arc::new(|_: &str| {}), quota: None }
    }

    /// Creates a new instance of `Environment` with given logger.
    pub fn with_logger(self, logger: InfoLogger) -> Self {
        Self { logger, ..self }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self { logger: Arc::new(|msg: &str| println!("{msg}")), quota: None }
    }
}
