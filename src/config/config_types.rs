// src/config/config_types.rs
//
// Config types for the app. Every field has a default so a partial
// config.toml (or none at all) still gives a working setup.

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub max_width: u32,     // canvas never grows wider than this
    pub initial_width: u32, // viewport width used for the first window
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            max_width: 980,
            initial_width: 960,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub texture_samples: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { texture_samples: 4 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PathConfig {
    pub output_directory: String,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            output_directory: "captures".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OscConfig {
    pub enabled: bool,
    pub rx_port: u16,
}

impl Default for OscConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            rx_port: 9000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    pub show_origin: bool,
    pub initial_seed: u32, // seed counter at startup; the first render uses initial_seed + 1
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_origin: false,
            initial_seed: 1,
        }
    }
}
