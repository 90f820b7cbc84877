//! Constants used throughout mooring.
//!
//! Centralizes magic strings and daemon defaults.

/// Configuration file name (.mooring.toml).
pub const CONFIG_FILE: &str = ".mooring.toml";

/// Environment variable overriding the daemon binary path.
pub const BIN_ENV: &str = "MOORING_IPFS_BIN";

/// Default daemon binary name.
pub const DEFAULT_BINARY: &str = "ipfs";

/// Key algorithm requested on key generation.
pub const DEFAULT_KEY_TYPE: &str = "rsa";

/// Key size in bits requested on key generation.
pub const DEFAULT_KEY_SIZE: u32 = 4096;
