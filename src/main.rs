use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trailers_core::{provider, tmdb, SelectOptions, TitleSelection, Video, VideoType};

#[derive(Parser)]
#[command(name = "trailers-rs", version, about = "Rank the trailers and clips of a title, best first")]
struct Cli {
    /// Provider videos payloads (JSON), one title per file
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Only keep clips from the trusted streaming provider
    #[arg(long)]
    trusted_only: bool,

    /// Print only the best clip of each title
    #[arg(long, conflicts_with = "limit")]
    best: bool,

    /// Keep at most N clips per title
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let t_total = std::time::Instant::now();

    let options = SelectOptions {
        inputs: cli.inputs,
        trusted_only: cli.trusted_only,
        best_only: cli.best,
        limit: cli.limit,
    };

    let selections = trailers_core::select(&options)?;

    if cli.json {
        tmdb::write_ranked_json(&selections, std::io::stdout().lock())?;
        println!();
    } else {
        for selection in &selections {
            print_selection(selection);
        }
    }

    let total: usize = selections.iter().map(|s| s.total).sum();
    eprintln!(
        "Done! {} titles, {} clips ranked ({:.2}s)",
        selections.len(),
        total,
        t_total.elapsed().as_secs_f64()
    );

    Ok(())
}

fn print_selection(selection: &TitleSelection) {
    match selection.title_id {
        Some(id) => println!("{} (title {})", selection.source.display(), id),
        None => println!("{}", selection.source.display()),
    }
    if selection.videos.is_empty() {
        println!("  no clips");
        return;
    }
    for (i, video) in selection.videos.iter().enumerate() {
        println!("  {}. {}", i + 1, describe(video));
    }
}

fn describe(video: &Video) -> String {
    let size = video
        .size
        .map_or_else(|| "?p".to_string(), |s| format!("{}p", s));
    let official = if video.official { "official" } else { "unofficial" };
    let date = video
        .published_at
        .map_or_else(|| "undated".to_string(), |d| d.format("%Y-%m-%d").to_string());
    let url = provider::watch_url(video).unwrap_or_else(|| format!("{}:{}", video.site, video.key));

    let kind = match video.video_type() {
        VideoType::Other if !video.kind.is_empty() => video.kind.as_str(),
        t => t.label(),
    };

    format!(
        "[{}] {} ({}, {}, {}) {}",
        kind,
        video.name,
        size,
        official,
        date,
        url
    )
}
