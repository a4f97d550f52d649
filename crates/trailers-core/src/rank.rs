use std::cmp::Ordering;

use crate::video::Video;

/// Total order over candidate clips, best first.
///
/// Keys in priority order, each consulted only on a tie of all earlier ones:
/// official flag, type category, "official trailer" in the name, resolution,
/// publish date, id.
pub fn compare(a: &Video, b: &Video) -> Ordering {
    by_official(a, b)
        .then_with(|| by_type(a, b))
        .then_with(|| by_official_name(a, b))
        .then_with(|| by_size(a, b))
        .then_with(|| by_published(a, b))
        .then_with(|| by_id(a, b))
}

/// Rank all candidates. The input is left untouched.
pub fn rank(videos: &[Video]) -> Vec<Video> {
    let mut ranked = videos.to_vec();
    ranked.sort_by(compare);
    tracing::debug!(
        count = ranked.len(),
        best = ranked.first().map(|v| v.id.as_str()),
        "ranked videos"
    );
    ranked
}

/// The top-ranked candidate, or None for an empty list.
pub fn best_trailer(videos: &[Video]) -> Option<Video> {
    rank(videos).into_iter().next()
}

fn by_official(a: &Video, b: &Video) -> Ordering {
    b.official.cmp(&a.official)
}

fn by_type(a: &Video, b: &Video) -> Ordering {
    a.video_type().priority().cmp(&b.video_type().priority())
}

fn by_official_name(a: &Video, b: &Video) -> Ordering {
    b.has_official_trailer_in_name()
        .cmp(&a.has_official_trailer_in_name())
}

fn by_size(a: &Video, b: &Video) -> Ordering {
    present_then_descending(a.size.as_ref(), b.size.as_ref())
}

fn by_published(a: &Video, b: &Video) -> Ordering {
    present_then_descending(a.published_at.as_ref(), b.published_at.as_ref())
}

fn by_id(a: &Video, b: &Video) -> Ordering {
    a.id.cmp(&b.id)
}

/// Known values before unknown ones, larger known values first.
fn present_then_descending<T: Ord>(a: Option<&T>, b: Option<&T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
