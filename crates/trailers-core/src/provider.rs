use regex::Regex;
use std::sync::LazyLock;

use crate::video::Video;

/// The only provider whose clips we can play
pub const TRUSTED_SITE: &str = "YouTube";

const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

static KEY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{5,20}$").unwrap());

/// Exact, case-sensitive match on the site name.
pub fn is_trusted(video: &Video) -> bool {
    video.site == TRUSTED_SITE
}

/// Keep only records from the trusted provider, in their original order.
pub fn trusted_provider_only(videos: &[Video]) -> Vec<Video> {
    videos.iter().filter(|v| is_trusted(v)).cloned().collect()
}

/// Check that a key looks like something the provider can resolve.
pub fn is_playable_key(key: &str) -> bool {
    KEY_RE.is_match(key)
}

/// Watch page for a trusted record with a usable key
pub fn watch_url(video: &Video) -> Option<String> {
    if is_trusted(video) && is_playable_key(&video.key) {
        Some(format!("{}{}", WATCH_URL_PREFIX, video.key))
    } else {
        None
    }
}
