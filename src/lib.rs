//! Mooring - an IPNS name registry adapter over the IPFS daemon.
//!
//! Maps human-chosen names to daemon-held keys: publishing a content
//! address under a name creates the name's key on first use, and
//! resolving a name reads back the address its key currently points at.
//! The daemon owns the keystore and the naming protocol; mooring only
//! drives its command surface.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── resolve       # Resolve a name to its content address
//! │   ├── publish       # Publish a content address under a name
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .mooring.toml management
//!     ├── constants     # File names and daemon defaults
//!     ├── daemon        # NamingDaemon capability trait + ipfs CLI backend
//!     ├── parse         # Parsers for the daemon's text responses
//!     ├── registry      # Name-to-key lifecycle, resolve/publish
//!     ├── response      # { ok, url|address, error } envelope
//!     └── sanitize      # Inbound name/content validation
//! ```
//!
//! # Behavior
//!
//! - Keys are created lazily on first publish, never deleted or rotated.
//! - Key creation is idempotent: the daemon's duplicate-key conflict is
//!   absorbed, every other failure propagates.
//! - Resolution is a pure read; nothing is cached.
//! - No retries, no timeouts: every daemon failure surfaces once,
//!   immediately, inside the response envelope.

pub mod cli;
pub mod core;
pub mod error;
