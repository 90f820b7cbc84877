//! Parsers for the daemon's text responses.
//!
//! Each parser is a pure function: text in, structured value or error
//! out. This keeps the daemon's output shape testable apart from the
//! invocation path.

use crate::error::ProtocolError;

/// Width of the `/<namespace>/` prefix on resolution output.
const RESOLUTION_PREFIX: usize = 6;

/// Trailing framing character after the address.
const RESOLUTION_SUFFIX: usize = 1;

/// Find the key identifier labelled `name` in verbose key-list output.
///
/// Each line of the listing is `<key-id> <label>`. The label must equal
/// `name` exactly; substring hits on longer labels do not count.
pub fn key_for_name(listing: &str, name: &str) -> Option<String> {
    listing.lines().find_map(|line| {
        let mut fields = line.split_whitespace();
        let id = fields.next()?;
        let label = fields.next()?;
        let exact = label == name && fields.next().is_none();
        (exact && is_identifier(id)).then(|| id.to_string())
    })
}

/// Extract the key identifier from publish confirmation text.
///
/// The daemon confirms with `Published to <key-id>: <path>`; the token
/// after the word `to`, terminated by a colon, is the identifier.
pub fn published_key(confirmation: &str) -> Option<String> {
    confirmation
        .split_whitespace()
        .collect::<Vec<_>>()
        .windows(2)
        .find_map(|pair| match pair {
            [keyword, token] if *keyword == "to" => token
                .strip_suffix(':')
                .filter(|id| is_identifier(id))
                .map(str::to_string),
            _ => None,
        })
}

/// Strip the daemon's path framing from resolution output.
///
/// The daemon prints `/<namespace>/<address>` followed by one framing
/// character. The prefix and suffix widths are fixed offsets matching the
/// daemon's current output shape; this is not a general path parser.
/// Output too short to frame an address is a [`ProtocolError`].
pub fn resolved_target(raw: &str) -> Result<String, ProtocolError> {
    raw.len()
        .checked_sub(RESOLUTION_SUFFIX)
        .filter(|end| *end > RESOLUTION_PREFIX)
        .and_then(|end| raw.get(RESOLUTION_PREFIX..end))
        .map(str::to_string)
        .ok_or_else(|| ProtocolError::Resolution(raw.to_string()))
}

fn is_identifier(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphanumeric())
}
