//! The read port through which the scheduler obtains configuration.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tracing::warn;

use crate::error::EngineResult;

use super::loader::ConfigLoader;
use super::types::CompensationConfig;

/// Supplies the current compensation configuration.
///
/// The scheduler calls [`ConfigSource::current`] once per tick, so a source
/// that changes between calls is picked up on the next tick without a
/// restart.
pub trait ConfigSource: Send + 'static {
    /// Returns the configuration in effect right now.
    fn current(&mut self) -> CompensationConfig;
}

/// A fixed configuration.
impl ConfigSource for CompensationConfig {
    fn current(&mut self) -> CompensationConfig {
        self.clone()
    }
}

/// Live configuration pushed by a settings editor through a watch channel.
///
/// If every sender is dropped the last published value stays in effect.
///
/// ```
/// use payticker::config::{CompensationConfig, ConfigSource};
/// use rust_decimal::Decimal;
/// use tokio::sync::watch;
///
/// let (tx, mut rx) = watch::channel(CompensationConfig::default());
/// tx.send_modify(|config| config.rate_amount = Decimal::from(12_000));
/// assert_eq!(rx.current().rate_amount, Decimal::from(12_000));
/// ```
impl ConfigSource for watch::Receiver<CompensationConfig> {
    fn current(&mut self) -> CompensationConfig {
        self.borrow_and_update().clone()
    }
}

/// A source shared with other owners, such as a settings editor that also
/// holds the handle.
impl<T: ConfigSource> ConfigSource for Arc<Mutex<T>> {
    fn current(&mut self) -> CompensationConfig {
        self.lock().unwrap_or_else(PoisonError::into_inner).current()
    }
}

/// Re-reads a settings file on every call.
///
/// A read or validation failure keeps the last good configuration in effect,
/// so a half-written file never interrupts the ticker.
///
/// The read is synchronous file I/O, run on the scheduler's runtime worker
/// once per tick. That is fine for a small local file; an application that
/// already loads settings asynchronously should publish them through a
/// `watch` channel instead.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
    last_good: CompensationConfig,
}

impl FileConfigSource {
    /// Opens the settings file, failing if it cannot be loaded now.
    pub fn open<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref().to_path_buf();
        let last_good = ConfigLoader::load(&path)?.compensation().clone();
        Ok(Self { path, last_good })
    }

    /// The settings file being watched.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileConfigSource {
    fn current(&mut self) -> CompensationConfig {
        match ConfigLoader::load(&self.path) {
            Ok(loader) => self.last_good = loader.compensation().clone(),
            Err(err) => warn!(
                path = %self.path.display(),
                error = %err,
                "Settings reload failed, keeping previous configuration"
            ),
        }
        self.last_good.clone()
    }
}
