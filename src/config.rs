//! Configuration persistence for planimeter settings

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};

use crate::domain::{ShapeKind, Unit};

/// Application configuration persisted between sessions.
///
/// Defaults match the first-run state: square, centimeters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CosmicConfigEntry)]
#[version = 1]
pub struct PlanimeterConfig {
    /// Shape kind selected when the app was last used
    pub shape_kind: ShapeKind,
    /// Unit selected when the app was last used
    pub unit: Unit,
}

impl PlanimeterConfig {
    /// Configuration ID for cosmic-config
    pub const ID: &'static str = "io.github.planimeter.planimeter";

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        match cosmic_config::Config::new(Self::ID, Self::VERSION) {
            Ok(config) => match Self::get_entry(&config) {
                Ok(entry) => entry,
                Err((errs, entry)) => {
                    log::warn!("Error loading config, using defaults: {:?}", errs);
                    entry
                }
            },
            Err(err) => {
                log::warn!("Could not create config handler: {:?}", err);
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self) {
        match cosmic_config::Config::new(Self::ID, Self::VERSION) {
            Ok(config) => {
                if let Err(err) = self.write_entry(&config) {
                    log::error!("Failed to save config: {:?}", err);
                }
            }
            Err(err) => {
                log::error!("Could not create config handler for saving: {:?}", err);
            }
        }
    }
}
