//! Settings file loading and validation.
//!
//! This module provides the [`ConfigLoader`] type, which reads a settings
//! file and turns it into a validated [`Settings`] value.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{TimeOfDay, WorkDays, WorkSegment};

use super::types::{CompensationConfig, SegmentEntry, Settings, SettingsFile};

/// The serialization format of a settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    /// YAML (`.yaml` or `.yml`).
    Yaml,
    /// JSON (`.json`).
    Json,
}

impl SettingsFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> EngineResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(EngineError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Loads and provides access to earnings settings.
///
/// The loader is the validating edge in front of the calculator: it rejects
/// structurally invalid values (a negative salary, a non-positive hours
/// override) and quietly drops time blocks whose times cannot be parsed, so
/// that everything behind it can assume well-typed input.
///
/// # File Layout
///
/// ```yaml
/// rate_basis: hourly        # monthly | daily | hourly
/// rate_amount: 50
/// segments:
///   - { start: "09:00", end: "12:00" }
///   - { start: "13:00", end: "18:00" }
/// work_days: [1, 2, 3, 4, 5] # Monday=1 ... Sunday=7
/// sound: coin               # coin | click | mute
/// ```
///
/// Every field is optional and falls back to [`CompensationConfig::default`].
///
/// # Example
///
/// ```no_run
/// use payticker::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/salary.yaml")?;
/// println!("Rate basis: {:?}", loader.compensation().rate_basis);
/// # Ok::<(), payticker::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: Settings,
}

impl ConfigLoader {
    /// Loads settings from the file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file cannot be read
    /// - The extension is not `.yaml`, `.yml` or `.json`
    /// - The content is not valid YAML/JSON for the settings layout
    /// - A value is structurally invalid
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();
        let format = SettingsFormat::from_path(path)?;

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_source(&content, format, &path_str)
    }

    /// Parses settings from an in-memory string.
    ///
    /// ```
    /// use payticker::config::{ConfigLoader, RateBasis, SettingsFormat};
    ///
    /// let loader = ConfigLoader::parse_str(r#"{"salaryType": "day", "salary": 300}"#, SettingsFormat::Json)?;
    /// assert_eq!(loader.compensation().rate_basis, RateBasis::Daily);
    /// # Ok::<(), payticker::error::EngineError>(())
    /// ```
    pub fn parse_str(content: &str, format: SettingsFormat) -> EngineResult<Self> {
        Self::parse_source(content, format, "<memory>")
    }

    fn parse_source(content: &str, format: SettingsFormat, origin: &str) -> EngineResult<Self> {
        let file: SettingsFile = match format {
            SettingsFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                    path: origin.to_string(),
                    message: e.to_string(),
                })?
            }
            SettingsFormat::Json => {
                serde_json::from_str(content).map_err(|e| EngineError::ConfigParseError {
                    path: origin.to_string(),
                    message: e.to_string(),
                })?
            }
        };

        let settings = Self::build_settings(file)?;
        debug!(
            origin,
            rate_basis = ?settings.compensation.rate_basis,
            segments = settings.compensation.segments.len(),
            "Loaded settings"
        );

        Ok(Self { settings })
    }

    /// Validates the raw file and fills in defaults.
    fn build_settings(file: SettingsFile) -> EngineResult<Settings> {
        let defaults = CompensationConfig::default();

        let rate_amount = file.rate_amount.unwrap_or(defaults.rate_amount);
        if rate_amount < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "rate_amount".to_string(),
                message: format!("must not be negative, got {}", rate_amount),
            });
        }

        if let Some(hours) = file.manual_hours {
            if hours <= Decimal::ZERO || hours > Decimal::from(24) {
                return Err(EngineError::InvalidConfig {
                    field: "manual_hours".to_string(),
                    message: format!("must be within (0, 24], got {}", hours),
                });
            }
        }

        let segments = file
            .segment_entries()
            .iter()
            .filter_map(Self::parse_segment)
            .collect();

        let work_days = match &file.work_days {
            Some(ids) => WorkDays::from_ids(ids.iter().copied().filter(|id| {
                let known = (1..=7).contains(id);
                if !known {
                    warn!(id, "Ignoring unknown weekday id");
                }
                known
            })),
            None => defaults.work_days,
        };

        Ok(Settings {
            compensation: CompensationConfig {
                rate_basis: file.rate_basis.unwrap_or(defaults.rate_basis),
                rate_amount,
                segments,
                work_days,
                manual_hours: file.manual_hours,
            },
            sound: file.sound.unwrap_or_default(),
        })
    }

    /// Parses one time block, or drops it if either end is blank or malformed.
    fn parse_segment(entry: &SegmentEntry) -> Option<WorkSegment> {
        if entry.start.trim().is_empty() || entry.end.trim().is_empty() {
            debug!(start = %entry.start, end = %entry.end, "Skipping unset segment");
            return None;
        }

        match (
            entry.start.parse::<TimeOfDay>(),
            entry.end.parse::<TimeOfDay>(),
        ) {
            (Ok(start), Ok(end)) => Some(WorkSegment::new(start, end)),
            (Err(err), _) | (_, Err(err)) => {
                warn!(error = %err, "Dropping segment with malformed time");
                None
            }
        }
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the compensation model.
    pub fn compensation(&self) -> &CompensationConfig {
        &self.settings.compensation
    }

    /// Consumes the loader, returning the settings.
    pub fn into_settings(self) -> Settings {
        self.settings
    }
}
