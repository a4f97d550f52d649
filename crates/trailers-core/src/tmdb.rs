use std::io::Write;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::date;
use crate::provider;
use crate::video::Video;
use crate::TitleSelection;

/// One entry of the provider's videos payload. Everything except `id` may
/// be missing or null.
#[derive(Debug, Deserialize)]
struct RawVideo {
    id: String,
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    site: Option<String>,
    /// Kept loose so one odd value does not sink the whole payload
    #[serde(default)]
    size: Option<serde_json::Value>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    official: Option<bool>,
    #[serde(default)]
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    Response {
        #[serde(default)]
        id: Option<u64>,
        results: Vec<RawVideo>,
    },
    List(Vec<RawVideo>),
}

/// Videos for a single title
#[derive(Debug, Clone, Default)]
pub struct VideoList {
    /// Provider title id, when the payload carried one
    pub title_id: Option<u64>,
    pub videos: Vec<Video>,
}

impl RawVideo {
    fn into_video(self) -> Video {
        let published_at = self.published_at.as_deref().and_then(|text| {
            let parsed = date::parse_published_at(text);
            if parsed.is_none() && !text.trim().is_empty() {
                tracing::warn!(id = %self.id, published_at = text, "unrecognised publish date, treating as unknown");
            }
            parsed
        });

        let size = self.size.as_ref().and_then(|value| {
            let parsed = parse_size(value);
            if parsed.is_none() && !value.is_null() {
                tracing::warn!(id = %self.id, size = %value, "unusable size, treating as unknown");
            }
            parsed
        });

        Video {
            id: self.id,
            key: self.key.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            site: self.site.unwrap_or_default(),
            size,
            kind: self.kind.unwrap_or_default(),
            official: self.official.unwrap_or(false),
            published_at,
        }
    }
}

fn parse_size(value: &serde_json::Value) -> Option<u32> {
    value.as_u64().and_then(|n| u32::try_from(n).ok())
}

/// Parse a videos payload: either `{"id": .., "results": [..]}` or a bare array.
pub fn parse_videos(json_bytes: &[u8]) -> anyhow::Result<VideoList> {
    let payload: Payload =
        serde_json::from_slice(json_bytes).context("not a provider videos payload")?;

    let (title_id, raw) = match payload {
        Payload::Response { id, results } => (id, results),
        Payload::List(results) => (None, results),
    };

    Ok(VideoList {
        title_id,
        videos: raw.into_iter().map(RawVideo::into_video).collect(),
    })
}

pub fn load_videos(path: &Path) -> anyhow::Result<VideoList> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_videos(&bytes).with_context(|| format!("failed to parse {}", path.display()))
}

/// Output record for a ranked list
#[derive(Debug, Serialize)]
pub struct RankedVideo<'a> {
    pub rank: usize,
    pub id: &'a str,
    pub key: &'a str,
    pub name: &'a str,
    pub site: &'a str,
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub official: bool,
    pub size: Option<u32>,
    pub published_at: Option<DateTime<Utc>>,
    pub watch_url: Option<String>,
}

/// Number an already ranked list for output (1-based).
pub fn ranked_records(videos: &[Video]) -> Vec<RankedVideo<'_>> {
    videos
        .iter()
        .enumerate()
        .map(|(i, v)| RankedVideo {
            rank: i + 1,
            id: &v.id,
            key: &v.key,
            name: &v.name,
            site: &v.site,
            kind: &v.kind,
            official: v.official,
            size: v.size,
            published_at: v.published_at,
            watch_url: provider::watch_url(v),
        })
        .collect()
}

/// Output record for one title
#[derive(Debug, Serialize)]
pub struct RankedTitle<'a> {
    pub source: String,
    pub title_id: Option<u64>,
    pub videos: Vec<RankedVideo<'a>>,
}

/// Write selections as a JSON array, one object per title, in input order.
pub fn write_ranked_json<W: Write>(selections: &[TitleSelection], writer: W) -> anyhow::Result<()> {
    let titles: Vec<RankedTitle> = selections
        .iter()
        .map(|s| RankedTitle {
            source: s.source.display().to_string(),
            title_id: s.title_id,
            videos: ranked_records(&s.videos),
        })
        .collect();
    serde_json::to_writer_pretty(writer, &titles)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const RESPONSE: &str = r#"{
        "id": 693134,
        "results": [
            {
                "iso_639_1": "en",
                "iso_3166_1": "US",
                "name": "Official Trailer 3",
                "key": "U2Qp5pL3ovA",
                "site": "YouTube",
                "size": 1080,
                "type": "Trailer",
                "official": true,
                "published_at": "2023-12-21T14:00:26.000Z",
                "id": "6584a9b1e8a3e1002ea6b5d4"
            },
            {
                "name": "Behind the sand",
                "key": "123456789",
                "site": "Vimeo",
                "size": null,
                "type": "Behind the Scenes",
                "official": false,
                "published_at": "not a date",
                "id": "6584a9b1e8a3e1002ea6b5d5"
            },
            { "id": "bare" }
        ]
    }"#;

    #[test]
    fn test_parse_response() {
        let list = parse_videos(RESPONSE.as_bytes()).unwrap();
        assert_eq!(list.title_id, Some(693134));
        assert_eq!(list.videos.len(), 3);

        let first = &list.videos[0];
        assert_eq!(first.kind, "Trailer");
        assert_eq!(first.size, Some(1080));
        assert!(first.official);
        assert!(first.published_at.is_some());

        let second = &list.videos[1];
        assert_eq!(second.size, None);
        assert_eq!(second.published_at, None);

        let bare = &list.videos[2];
        assert_eq!(bare.id, "bare");
        assert_eq!(bare.kind, "");
        assert!(!bare.official);
    }

    #[test]
    fn test_parse_bare_array() {
        let list = parse_videos(br#"[{"id": "a", "site": "YouTube"}]"#).unwrap();
        assert_eq!(list.title_id, None);
        assert_eq!(list.videos[0].site, "YouTube");

        assert!(parse_videos(b"[]").unwrap().videos.is_empty());
        assert!(parse_videos(b"{\"results\": [{\"name\": \"no id\"}]}").is_err());
        assert!(parse_videos(b"not json").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(RESPONSE.as_bytes()).unwrap();

        let list = load_videos(file.path()).unwrap();
        assert_eq!(list.videos.len(), 3);

        let missing = load_videos(Path::new("/nonexistent/videos.json"));
        assert!(missing.is_err());
    }

    #[test]
    fn test_lenient_size() {
        let list = parse_videos(
            br#"[
                {"id": "neg", "size": -1},
                {"id": "text", "size": "1080p"},
                {"id": "frac", "size": 720.5},
                {"id": "huge", "size": 99999999999},
                {"id": "ok", "size": 720}
            ]"#,
        )
        .unwrap();
        let sizes: Vec<Option<u32>> = list.videos.iter().map(|v| v.size).collect();
        assert_eq!(sizes, [None, None, None, None, Some(720)]);
    }

    #[test]
    fn test_write_ranked_json() {
        let list = parse_videos(RESPONSE.as_bytes()).unwrap();
        let title = TitleSelection {
            source: "dune.json".into(),
            title_id: list.title_id,
            total: list.videos.len(),
            videos: list.videos[..2].to_vec(),
        };
        let empty = TitleSelection {
            source: "dune.json".into(),
            title_id: None,
            total: 0,
            videos: Vec::new(),
        };
        let mut out = Vec::new();
        write_ranked_json(&[title, empty], &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let titles = value.as_array().unwrap();
        // same source twice keeps both entries, in input order
        assert_eq!(titles.len(), 2);
        assert_eq!(titles[0]["source"], "dune.json");
        assert_eq!(titles[0]["title_id"], 693134);
        assert!(titles[1]["title_id"].is_null());
        assert!(titles[1]["videos"].as_array().unwrap().is_empty());

        let rows = titles[0]["videos"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["rank"], 1);
        assert_eq!(rows[0]["type"], "Trailer");
        assert_eq!(rows[0]["watch_url"], "https://www.youtube.com/watch?v=U2Qp5pL3ovA");
        assert!(rows[0]["published_at"].as_str().unwrap().starts_with("2023-12-21T14:00:26"));
        assert_eq!(rows[1]["rank"], 2);
        assert!(rows[1]["watch_url"].is_null());
        assert!(rows[1]["published_at"].is_null());
    }
}
