//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "fringe.toml";

/// Top-level fringe configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FringeConfig {
    /// Configuration format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Build tool defaults
    #[serde(default)]
    pub make: MakeConfig,

    /// Route planner defaults
    #[serde(default)]
    pub trip: TripConfig,
}

impl Default for FringeConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            make: MakeConfig::default(),
            trip: TripConfig::default(),
        }
    }
}

/// Defaults for `fringe make`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeConfig {
    /// Rule file used when `-f` is not given
    #[serde(default = "default_makefile")]
    pub makefile: String,

    /// File-info database used when `-D` is not given
    #[serde(default = "default_fileinfo")]
    pub fileinfo: String,
}

impl Default for MakeConfig {
    fn default() -> Self {
        Self {
            makefile: default_makefile(),
            fileinfo: default_fileinfo(),
        }
    }
}

/// Defaults for `fringe trip`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripConfig {
    /// Map file used when `-m` is not given
    #[serde(default = "default_map")]
    pub map: String,

    /// Unit label printed after distances
    #[serde(default = "default_units")]
    pub units: String,
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            map: default_map(),
            units: default_units(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_makefile() -> String {
    "Makefile".to_string()
}

fn default_fileinfo() -> String {
    "fileinfo".to_string()
}

fn default_map() -> String {
    "Map".to_string()
}

fn default_units() -> String {
    "miles".to_string()
}
