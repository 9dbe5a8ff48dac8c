use crate::error::{EngineError, Result};
use crate::options::Strategy;
use derive_builder::Builder;

/// Chunk size used by the buffered delimiter scan (1 MiB).
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub strategy: Strategy,
    /// Worker pool size.
    #[builder(default = "num_cpus::get()")]
    pub jobs: usize,
    #[builder(default = "DEFAULT_CHUNK_SIZE")]
    pub chunk_size: usize,
    /// Abort on the first unreadable file instead of skipping it.
    #[builder(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            jobs: num_cpus::get(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            strict: false,
        }
    }
}

impl Config {
    /// Same settings, different strategy.
    #[must_use]
    pub fn with_strategy(&self, strategy: Strategy) -> Self {
        Self {
            strategy,
            ..self.clone()
        }
    }

    /// # Errors
    /// Returns [`EngineError::Config`] when `jobs` or `chunk_size` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.jobs == 0 {
            return Err(EngineError::Config("jobs must be at least 1".into()));
        }
        if self.chunk_size == 0 {
            return Err(EngineError::Config("chunk size must be at least 1 byte".into()));
        }
        Ok(())
    }
}
