//! Resolve command.

use crate::core::config::Config;
use crate::core::daemon::IpfsCli;
use crate::core::registry::{NameRegistry, Resolution};
use crate::core::response::ResolveResponse;
use crate::core::sanitize;
use crate::error::Result;

/// Resolve `name` and print the response envelope.
///
/// Operational failures land inside the envelope; only envelope
/// serialization itself can error out of here.
pub fn execute(name: &str) -> Result<()> {
    let response = ResolveResponse::from_result(resolve_request(name));
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

fn resolve_request(name: &str) -> Result<Resolution> {
    sanitize::name(name)?;

    let config = Config::load()?;
    let daemon = IpfsCli::from_config(&config.daemon);
    daemon.check()?;

    NameRegistry::new(daemon).resolve(name)
}
