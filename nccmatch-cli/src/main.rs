use clap::Parser;
use nccmatch::io::load_gray_image;
use nccmatch::{InitialBest, MatchConfig, Matcher};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod report;

#[derive(Parser, Debug)]
#[command(author, version, about = "Locate a template in an image with NCC")]
struct Cli {
    /// Path to the image to search.
    #[arg(long, value_name = "FILE", default_value = "./data/proj1-task2.jpg")]
    img_path: PathBuf,
    /// Path to the template image.
    #[arg(
        long,
        value_name = "FILE",
        default_value = "./data/proj1-task2-template.jpg"
    )]
    template_path: PathBuf,
    /// Where the best match is written as JSON.
    #[arg(
        long = "result-saving-path",
        value_name = "FILE",
        default_value = "./results/task2.json"
    )]
    rs_path: PathBuf,
    /// Optional JSON file with matcher settings.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Number of placements to collect for the batch output.
    #[arg(long, default_value_t = 1)]
    topk: usize,
    /// Write the top-k placements as a coordinate batch to this file.
    #[arg(long, value_name = "FILE")]
    batch_output: Option<PathBuf>,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum InitialBestConfig {
    FirstCandidate,
    Zero,
}

impl From<InitialBestConfig> for InitialBest {
    fn from(value: InitialBestConfig) -> Self {
        match value {
            InitialBestConfig::FirstCandidate => InitialBest::FirstCandidate,
            InitialBestConfig::Zero => InitialBest::Zero,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct MatchConfigJson {
    parallel: bool,
    initial_best: InitialBestConfig,
    nms_radius: usize,
    min_score: Option<f64>,
}

impl Default for MatchConfigJson {
    fn default() -> Self {
        let cfg = MatchConfig::default();
        Self {
            parallel: cfg.parallel,
            initial_best: InitialBestConfig::FirstCandidate,
            nms_radius: cfg.nms_radius,
            min_score: None,
        }
    }
}

impl From<MatchConfigJson> for MatchConfig {
    fn from(value: MatchConfigJson) -> Self {
        Self {
            parallel: value.parallel,
            initial_best: value.initial_best.into(),
            nms_radius: value.nms_radius,
            min_score: value.min_score.unwrap_or(f64::NEG_INFINITY),
        }
    }
}

/// Parses a JSON match configuration; missing keys keep their defaults.
fn parse_match_config(text: &str) -> serde_json::Result<MatchConfig> {
    serde_json::from_str::<MatchConfigJson>(text).map(MatchConfig::from)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("nccmatch=info".parse()?))
            .with_target(false)
            .init();
    }

    let match_cfg = match &cli.config {
        Some(path) => parse_match_config(&fs::read_to_string(path)?)?,
        None => MatchConfig::from(MatchConfigJson::default()),
    };
    if cli.batch_output.is_some() && cli.topk == 0 {
        return Err("topk must be at least 1 when --batch-output is set".into());
    }

    let image = load_gray_image(&cli.img_path)?;
    let template = load_gray_image(&cli.template_path)?;
    let matcher = Matcher::new().with_config(match_cfg);

    let best = matcher.search(image.view(), template.view())?;
    tracing::info!(
        row = best.row,
        col = best.col,
        score = best.score,
        "best match"
    );
    report::write_match(&cli.rs_path, best)?;

    if let Some(path) = &cli.batch_output {
        let found = matcher.search_topk(image.view(), template.view(), cli.topk)?;
        let coordinates = found.iter().map(|m| (m.row, m.col)).collect();
        let template_size = (template.height(), template.width());
        report::write_batch(path, coordinates, template_size)?;
    }

    Ok(())
}
