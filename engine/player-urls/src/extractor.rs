//! Placeholder search URL detection and name decoding

/// Marker that introduces the encoded player name in a placeholder URL
pub const SEARCH_MARKER: &str = "search?q=";

/// Base of generated placeholder URLs
pub const SEARCH_URL_BASE: &str = "https://fantasydata.com/nfl/search?q=";

/// Check whether a URL is a placeholder search URL
pub fn is_placeholder(url: &str) -> bool {
    url.contains(SEARCH_MARKER)
}

/// Decode the player name embedded in a placeholder URL
///
/// Everything after the first marker is the percent-encoded name. Returns
/// `None` when the marker is missing, nothing follows it, or the decoded bytes
/// are not valid UTF-8.
pub fn extract_player_name(url: &str) -> Option<String> {
    let (_, encoded) = url.split_once(SEARCH_MARKER)?;
    if encoded.is_empty() {
        return None;
    }

    let decoded = urlencoding::decode(encoded).ok()?;
    if decoded.is_empty() {
        return None;
    }
    Some(decoded.into_owned())
}

/// Build the placeholder search URL for a player name
pub fn search_url(name: &str) -> String {
    format!("{}{}", SEARCH_URL_BASE, urlencoding::encode(name))
}
