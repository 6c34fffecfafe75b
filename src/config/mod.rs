//! Configuration for the earnings accrual engine.
//!
//! This module provides the compensation model the calculator reads, a
//! loader that builds it from a YAML or JSON settings file, and the
//! [`ConfigSource`] port the scheduler polls on every tick.
//!
//! # Example
//!
//! ```no_run
//! use payticker::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/salary.yaml").unwrap();
//! println!("Paid in {:?} units", loader.compensation().rate_basis);
//! ```

mod loader;
mod source;
mod types;

pub use loader::{ConfigLoader, SettingsFormat};
pub use source::{ConfigSource, FileConfigSource};
pub use types::{CompensationConfig, RateBasis, Settings, SoundCue};
