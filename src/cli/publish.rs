//! Publish command.

use crate::core::config::Config;
use crate::core::daemon::IpfsCli;
use crate::core::registry::NameRegistry;
use crate::core::response::PublishResponse;
use crate::core::sanitize;
use crate::error::Result;

/// Publish `content` under `name` and print the response envelope.
///
/// Operational failures land inside the envelope; only envelope
/// serialization itself can error out of here.
pub fn execute(name: &str, content: &str) -> Result<()> {
    let response = PublishResponse::from_result(publish_request(name, content));
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

fn publish_request(name: &str, content: &str) -> Result<String> {
    sanitize::name(name)?;
    sanitize::content(content)?;

    let config = Config::load()?;
    let daemon = IpfsCli::from_config(&config.daemon);
    daemon.check()?;

    let registry = if config.publish.serialize {
        NameRegistry::with_publish_locks(daemon)
    } else {
        NameRegistry::new(daemon)
    };

    registry.publish(name, content)
}
