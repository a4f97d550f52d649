use chrono::{DateTime, Utc};
use unicode_normalization::UnicodeNormalization;

const OFFICIAL_TRAILER: &str = "official trailer";

/// Editorial category of a clip, in ranking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VideoType {
    Trailer,
    Teaser,
    Clip,
    Featurette,
    BehindTheScenes,
    /// Any label the provider sends that is not one of the above
    Other,
}

impl VideoType {
    /// Map a provider label to its category. Matching is exact; unknown
    /// labels (including differently-cased ones) fall to `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Trailer" => VideoType::Trailer,
            "Teaser" => VideoType::Teaser,
            "Clip" => VideoType::Clip,
            "Featurette" => VideoType::Featurette,
            "Behind the Scenes" => VideoType::BehindTheScenes,
            _ => VideoType::Other,
        }
    }

    /// Ordinal used by the ranking (0 = most important)
    pub fn priority(self) -> u8 {
        match self {
            VideoType::Trailer => 0,
            VideoType::Teaser => 1,
            VideoType::Clip => 2,
            VideoType::Featurette => 3,
            VideoType::BehindTheScenes => 4,
            VideoType::Other => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VideoType::Trailer => "Trailer",
            VideoType::Teaser => "Teaser",
            VideoType::Clip => "Clip",
            VideoType::Featurette => "Featurette",
            VideoType::BehindTheScenes => "Behind the Scenes",
            VideoType::Other => "Other",
        }
    }
}

/// One candidate clip for a title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Video {
    /// Provider record id, unique per title. Final ranking tie-break.
    pub id: String,
    /// Playback handle on the provider (e.g. a YouTube video id)
    pub key: String,
    /// Display name
    pub name: String,
    /// Provider name ("YouTube", "Vimeo", ...)
    pub site: String,
    /// Vertical resolution; None when the provider did not say
    pub size: Option<u32>,
    /// Raw category label as sent by the provider
    pub kind: String,
    pub official: bool,
    pub published_at: Option<DateTime<Utc>>,
}

impl Video {
    pub fn video_type(&self) -> VideoType {
        VideoType::from_label(&self.kind)
    }

    /// True when the name contains "official trailer", ignoring case.
    pub fn has_official_trailer_in_name(&self) -> bool {
        let name: String = self.name.nfc().collect::<String>().to_lowercase();
        name.contains(OFFICIAL_TRAILER)
    }
}
