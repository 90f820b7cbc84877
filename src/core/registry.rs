//! Name registry adapter.
//!
//! Maps human-chosen names to daemon-held keys and delegates resolution
//! and publication to the [`NamingDaemon`] capability. Holds no state of
//! its own beyond the optional per-name publish locks: the daemon's
//! key-list is the source of truth, and nothing is cached.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::{debug, trace};

use crate::core::daemon::NamingDaemon;
use crate::core::parse;
use crate::error::{DaemonError, Error, ProtocolError, Result};

/// Outcome of a successful resolve: the key identifier the name is bound
/// to, and the bare content address it currently points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Key identifier in the daemon's keyspace.
    #[serde(rename = "ipns")]
    pub key_id: String,
    /// Bare content address, stripped of the daemon's path framing.
    #[serde(rename = "ipfs")]
    pub target: String,
}

/// The name registry adapter.
///
/// Each call is handled independently; daemon interactions block until
/// the daemon answers, no timeouts are imposed, and no call is retried.
pub struct NameRegistry<D> {
    daemon: D,
    publish_locks: Option<PublishLocks>,
}

impl<D: NamingDaemon> NameRegistry<D> {
    /// Create a registry with the default unsynchronized publish
    /// behavior: concurrent publishes for one name race, the daemon
    /// arbitrates, and the last write wins.
    pub fn new(daemon: D) -> Self {
        Self {
            daemon,
            publish_locks: None,
        }
    }

    /// Create a registry that serializes publishes per name.
    pub fn with_publish_locks(daemon: D) -> Self {
        Self {
            daemon,
            publish_locks: Some(PublishLocks::default()),
        }
    }

    /// Resolve `name` to its current target.
    ///
    /// Read-only against the daemon: lists keys, picks the one labelled
    /// `name`, and resolves its identifier.
    ///
    /// # Errors
    ///
    /// `Error::NotFound` if no key is labelled `name`; `Error::Daemon` if
    /// either daemon query fails; `Error::Protocol` if the resolution
    /// output cannot be unframed.
    pub fn resolve(&self, name: &str) -> Result<Resolution> {
        debug!(name, "resolving name");

        let listing = self.daemon.list_keys()?;
        let key_id = parse::key_for_name(&listing, name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;
        trace!(name, key_id = %key_id, "name is bound to key");

        let raw = self.daemon.resolve_name(&key_id)?;
        let target = parse::resolved_target(&raw)?;

        debug!(name, key_id = %key_id, target = %target, "resolved");
        Ok(Resolution { key_id, target })
    }

    /// Publish `target` under `name`, creating the name's key on first
    /// use.
    ///
    /// Returns the identifier of the key that now carries the
    /// publication, parsed out of the daemon's confirmation.
    ///
    /// # Errors
    ///
    /// Key-provisioning and publish failures surface as `Error::Daemon`;
    /// an unrecognized confirmation surfaces as `Error::Protocol`
    /// carrying the raw daemon output.
    pub fn publish(&self, name: &str, target: &str) -> Result<String> {
        debug!(name, target, "publishing");

        let slot = self.publish_locks.as_ref().map(|locks| locks.slot(name));
        let _guard = slot
            .as_ref()
            .map(|slot| slot.lock().unwrap_or_else(|e| e.into_inner()));

        self.ensure_key(name)?;

        let confirmation = self.daemon.publish_name(name, target)?;
        let key_id = parse::published_key(&confirmation)
            .ok_or_else(|| ProtocolError::Confirmation(confirmation.clone()))?;

        debug!(name, key_id = %key_id, "published");
        Ok(key_id)
    }

    /// Create the key for `name` if it does not exist yet.
    ///
    /// The daemon's duplicate-key conflict is absorbed as success: the
    /// desired end state, a key bound to `name`, already holds. Every
    /// other failure propagates untouched; absorbing more here would
    /// mask real provisioning faults.
    fn ensure_key(&self, name: &str) -> Result<()> {
        match self.daemon.generate_key(name) {
            Ok(_) => {
                debug!(name, "key created");
                Ok(())
            }
            Err(DaemonError::KeyExists(_)) => {
                trace!(name, "key already present");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Per-name lock slots for the optional publish serialization point.
#[derive(Default)]
struct PublishLocks {
    slots: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl PublishLocks {
    fn slot(&self, name: &str) -> Arc<Mutex<()>> {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.entry(name.to_string()).or_default().clone()
    }
}
