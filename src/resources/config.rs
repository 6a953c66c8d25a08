//! Grid controller configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration. Key bindings are
//! configuration data, not code: unknown key names or non-positive sizes are
//! reported as errors at load time so a misconfigured host fails fast
//! instead of silently running with half-applied settings.
//!
//! # Configuration File Format
//!
//! ```ini
//! [movement]
//! cell_size = 2.0
//! move_cooldown = 1.0
//! probe_height = 0.0
//!
//! [input]
//! cooldown = 0.1
//!
//! [bindings]
//! move_forward = W
//! move_backward = S
//! strafe_left = A
//! strafe_right = D
//! turn_left = Q
//! turn_right = E
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::resources::input::KeyBindings;

/// Default safe values for startup
const DEFAULT_CELL_SIZE: f32 = 2.0;
const DEFAULT_MOVE_COOLDOWN: f32 = 1.0;
const DEFAULT_INPUT_COOLDOWN: f32 = 0.1;
const DEFAULT_PROBE_HEIGHT: f32 = 0.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Grid movement configuration resource.
///
/// Stores cell size, cooldown windows, probe height and key bindings.
#[derive(Resource, Debug, Clone)]
pub struct GridConfig {
    /// Edge length of one grid cell in world units.
    pub cell_size: f32,
    /// Per-actor cooldown between accepted intents, in seconds.
    pub move_cooldown: f32,
    /// Input translator cooldown between emitted intents, in seconds.
    pub input_cooldown: f32,
    /// Vertical offset of the coarse controller's probe origin.
    pub probe_height: f32,
    /// Action-to-key bindings.
    pub bindings: KeyBindings,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GridConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            move_cooldown: DEFAULT_MOVE_COOLDOWN,
            input_cooldown: DEFAULT_INPUT_COOLDOWN,
            probe_height: DEFAULT_PROBE_HEIGHT,
            bindings: KeyBindings::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Returns an
    /// error if the file cannot be read or parsed, or if any present value
    /// is invalid.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config)
    }

    /// Apply values from an already-parsed INI document.
    pub fn apply(&mut self, config: &Ini) -> Result<(), String> {
        // [movement] section
        if let Some(cell_size) = read_float(config, "movement", "cell_size")? {
            if cell_size <= 0.0 {
                return Err(format!("cell_size must be positive, got {}", cell_size));
            }
            self.cell_size = cell_size;
        }
        if let Some(cooldown) = read_float(config, "movement", "move_cooldown")? {
            if cooldown < 0.0 {
                return Err(format!("move_cooldown must not be negative, got {}", cooldown));
            }
            self.move_cooldown = cooldown;
        }
        if let Some(height) = read_float(config, "movement", "probe_height")? {
            self.probe_height = height;
        }

        // [input] section
        if let Some(cooldown) = read_float(config, "input", "cooldown")? {
            if cooldown < 0.0 {
                return Err(format!("input cooldown must not be negative, got {}", cooldown));
            }
            self.input_cooldown = cooldown;
        }

        // [bindings] section
        read_binding(config, "move_forward", &mut self.bindings.move_forward)?;
        read_binding(config, "move_backward", &mut self.bindings.move_backward)?;
        read_binding(config, "strafe_left", &mut self.bindings.strafe_left)?;
        read_binding(config, "strafe_right", &mut self.bindings.strafe_right)?;
        read_binding(config, "turn_left", &mut self.bindings.turn_left)?;
        read_binding(config, "turn_right", &mut self.bindings.turn_right)?;

        info!(
            "Loaded config: cell_size={}, move_cooldown={}s, input_cooldown={}s, bindings={:?}",
            self.cell_size, self.move_cooldown, self.input_cooldown, self.bindings
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("movement", "cell_size", Some(self.cell_size.to_string()));
        config.set(
            "movement",
            "move_cooldown",
            Some(self.move_cooldown.to_string()),
        );
        config.set(
            "movement",
            "probe_height",
            Some(self.probe_height.to_string()),
        );
        config.set("input", "cooldown", Some(self.input_cooldown.to_string()));

        config.set(
            "bindings",
            "move_forward",
            Some(format!("{:?}", self.bindings.move_forward)),
        );
        config.set(
            "bindings",
            "move_backward",
            Some(format!("{:?}", self.bindings.move_backward)),
        );
        config.set(
            "bindings",
            "strafe_left",
            Some(format!("{:?}", self.bindings.strafe_left)),
        );
        config.set(
            "bindings",
            "strafe_right",
            Some(format!("{:?}", self.bindings.strafe_right)),
        );
        config.set(
            "bindings",
            "turn_left",
            Some(format!("{:?}", self.bindings.turn_left)),
        );
        config.set(
            "bindings",
            "turn_right",
            Some(format!("{:?}", self.bindings.turn_right)),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;
        Ok(())
    }
}

fn read_float(config: &Ini, section: &str, key: &str) -> Result<Option<f32>, String> {
    match config.getfloat(section, key) {
        Ok(value) => Ok(value.map(|v| v as f32)),
        Err(e) => Err(format!("Invalid value for [{}] {}: {}", section, key, e)),
    }
}

fn read_binding(config: &Ini, key: &str, slot: &mut crate::resources::input::KeyCode) -> Result<(), String> {
    if let Some(name) = config.get("bindings", key) {
        *slot = name
            .parse()
            .map_err(|e| format!("Invalid binding for {}: {}", key, e))?;
    }
    Ok(())
}
