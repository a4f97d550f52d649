pub mod date;
pub mod provider;
pub mod rank;
pub mod tmdb;
pub mod video;

use std::path::PathBuf;

use anyhow::Context;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

pub use provider::{trusted_provider_only, TRUSTED_SITE};
pub use rank::{best_trailer, rank};
pub use video::{Video, VideoType};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectOptions {
    /// Provider videos payloads, one title per file
    pub inputs: Vec<PathBuf>,
    /// Drop clips that are not on the trusted provider
    #[serde(default)]
    pub trusted_only: bool,
    /// Keep only the top clip of each title
    #[serde(default)]
    pub best_only: bool,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Ranked clips for one input file.
#[derive(Debug, Clone)]
pub struct TitleSelection {
    pub source: PathBuf,
    pub title_id: Option<u64>,
    /// Number of clips in the payload before filtering
    pub total: usize,
    pub videos: Vec<Video>,
}

impl TitleSelection {
    pub fn best(&self) -> Option<&Video> {
        self.videos.first()
    }
}

/// Rank, filter and trim an already loaded list according to `options`.
pub fn select_videos(videos: &[Video], options: &SelectOptions) -> Vec<Video> {
    let mut ranked = rank::rank(videos);
    if options.trusted_only {
        ranked = provider::trusted_provider_only(&ranked);
    }

    let keep = if options.best_only {
        Some(1)
    } else {
        options.limit
    };
    if let Some(n) = keep {
        ranked.truncate(n);
    }
    ranked
}

/// Load every input and select its clips. Results follow input order.
pub fn select(options: &SelectOptions) -> anyhow::Result<Vec<TitleSelection>> {
    let selections = options
        .inputs
        .par_iter()
        .map(|path| -> anyhow::Result<TitleSelection> {
            let list = tmdb::load_videos(path)?;
            let videos = select_videos(&list.videos, options);
            tracing::debug!(
                source = %path.display(),
                total = list.videos.len(),
                kept = videos.len(),
                "selected videos"
            );
            Ok(TitleSelection {
                source: path.clone(),
                title_id: list.title_id,
                total: list.videos.len(),
                videos,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()
        .context("selection failed")?;

    Ok(selections)
}
