//! Naming daemon capability interface.
//!
//! The registry never talks to the `ipfs` binary directly; it goes
//! through [`NamingDaemon`], so tests substitute a scripted daemon and a
//! native RPC client can slot in later without touching the registry.
//!
//! All four primitives return the daemon's raw text. The textual framing
//! of each invocation is a byte-for-byte contract with the daemon's
//! command surface and must be preserved if reimplemented against a
//! compatible daemon.

use std::process::Command;
use tracing::trace;

use crate::core::config::DaemonConfig;
use crate::error::DaemonError;

/// Diagnostic the daemon emits when a key name is already taken.
///
/// Pinned to the current daemon release; [`IpfsCli`] maps it to
/// [`DaemonError::KeyExists`] so nothing above the backend matches on
/// free text.
const KEY_EXISTS_DIAGNOSTIC: &str =
    "Error: key by that name already exists, refusing to overwrite";

/// Capability interface over the external naming daemon.
pub trait NamingDaemon {
    /// Generate a keypair bound to `name` in the daemon's keystore.
    fn generate_key(&self, name: &str) -> Result<String, DaemonError>;

    /// List all known keys with verbose output (`<key-id> <label>` lines).
    fn list_keys(&self) -> Result<String, DaemonError>;

    /// Resolve a key identifier to its current target path.
    fn resolve_name(&self, key_id: &str) -> Result<String, DaemonError>;

    /// Publish `target` under the key named `key`, without re-resolving
    /// the target.
    fn publish_name(&self, key: &str, target: &str) -> Result<String, DaemonError>;
}

/// Daemon backend that invokes the `ipfs` CLI.
///
/// Arguments are passed as an argv vector; no shell is involved, so no
/// shell escaping applies. Inbound values are still validated by
/// [`crate::core::sanitize`] before they get here.
#[derive(Debug, Clone)]
pub struct IpfsCli {
    binary: String,
    key_type: String,
    key_size: u32,
}

impl IpfsCli {
    /// Create a backend from daemon configuration.
    pub fn from_config(config: &DaemonConfig) -> Self {
        Self {
            binary: config.effective_binary(),
            key_type: config.key_type.clone(),
            key_size: config.key_size,
        }
    }

    /// Check that the daemon binary is available.
    ///
    /// # Errors
    ///
    /// Returns `DaemonError::Missing` if the binary is not on PATH.
    pub fn check(&self) -> Result<(), DaemonError> {
        which::which(&self.binary)
            .map(|_| ())
            .map_err(|_| DaemonError::Missing(self.binary.clone()))
    }

    fn run(&self, args: &[&str]) -> Result<String, DaemonError> {
        trace!(binary = %self.binary, ?args, "invoking daemon");

        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .map_err(|source| DaemonError::Spawn {
                command: self.render(args),
                source,
            })?;

        if !output.status.success() {
            return Err(DaemonError::Failed {
                command: self.render(args),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn render(&self, args: &[&str]) -> String {
        format!("{} {}", self.binary, args.join(" "))
    }

    fn key_conflict(stderr: &str) -> bool {
        stderr.trim_end() == KEY_EXISTS_DIAGNOSTIC
    }
}

impl NamingDaemon for IpfsCli {
    fn generate_key(&self, name: &str) -> Result<String, DaemonError> {
        let size = self.key_size.to_string();
        let args = [
            "key", "gen", "--type", &self.key_type, "--size", &size, name,
        ];

        match self.run(&args) {
            Err(DaemonError::Failed { stderr, .. }) if Self::key_conflict(&stderr) => {
                Err(DaemonError::KeyExists(name.to_string()))
            }
            other => other,
        }
    }

    fn list_keys(&self) -> Result<String, DaemonError> {
        self.run(&["key", "list", "-l"])
    }

    fn resolve_name(&self, key_id: &str) -> Result<String, DaemonError> {
        self.run(&["name", "resolve", key_id])
    }

    fn publish_name(&self, key: &str, target: &str) -> Result<String, DaemonError> {
        self.run(&["name", "publish", "--resolve=false", "--key", key, target])
    }
}
