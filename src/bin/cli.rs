//! CLI application for face shape classification.
//!
//! Usage:
//!   face-shape <landmarks.json>                     # Human-readable output
//!   face-shape <landmarks.json> --json              # JSON output
//!   face-shape <landmarks.json> -o result.json      # Save to file
//!   face-shape <landmarks.json> --normalized --width 640 --height 480

use anyhow::{Context, Result};
use clap::Parser;
use face_shape::{analyze_landmarks, Analysis, Landmarks};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "face-shape")]
#[command(author, version, about = "Face shape classification from facial landmarks", long_about = None)]
struct Args {
    /// Landmark file: {"points":[{"x":..,"y":..}]} or [[x, y], ...]
    #[arg(required = true)]
    landmarks: PathBuf,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Landmarks are in normalized [0,1] coordinates
    #[arg(long, requires_all = ["width", "height"])]
    normalized: bool,

    /// Source image width, for --normalized
    #[arg(long, requires = "normalized")]
    width: Option<u32>,

    /// Source image height, for --normalized
    #[arg(long, requires = "normalized")]
    height: Option<u32>,

    /// Include per-shape rule scores in human-readable output
    #[arg(long)]
    scores: bool,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output structure for JSON serialization
#[derive(Serialize)]
struct Output<'a> {
    source: String,
    landmark_count: usize,
    #[serde(flatten)]
    analysis: &'a Analysis,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "face_shape=debug" } else { "face_shape=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    info!(path = %args.landmarks.display(), "loading landmarks");
    let mut landmarks = Landmarks::load(&args.landmarks)
        .with_context(|| format!("failed to load {}", args.landmarks.display()))?;

    // clap guarantees width and height are present exactly when normalized is set
    if let (Some(width), Some(height)) = (args.width, args.height) {
        debug!(width, height, "denormalizing landmarks");
        landmarks = landmarks.denormalize(width as f64, height as f64);
    }

    let analysis = analyze_landmarks(&landmarks).context("face shape analysis failed")?;

    let output = Output {
        source: args.landmarks.display().to_string(),
        landmark_count: landmarks.num_landmarks(),
        analysis: &analysis,
    };

    let output_str = if args.json {
        serde_json::to_string_pretty(&output)?
    } else {
        format_human_readable(&output, args.scores)
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output_str)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "output written");
    } else {
        println!("{}", output_str);
    }

    Ok(())
}

fn format_human_readable(output: &Output, show_scores: bool) -> String {
    let a = output.analysis;
    let m = &a.measurements;
    let mut s = String::new();

    s.push_str(&format!("Landmarks: {} ({} points)\n", output.source, output.landmark_count));
    s.push_str(&format!("\nFace shape: {}\n", a.shape.as_str().to_uppercase()));
    s.push_str(&format!("Confidence: {}%\n", a.confidence_percent()));
    s.push_str(&format!("\n{}\n", a.description));

    s.push_str("\nMeasurements:\n");
    s.push_str(&format!("  Forehead width:   {:.1}\n", m.forehead_width));
    s.push_str(&format!("  Cheekbone width:  {:.1}\n", m.cheekbone_width));
    s.push_str(&format!("  Jaw width:        {:.1}\n", m.jaw_width));
    s.push_str(&format!("  Face height:      {:.1}\n", m.face_height));
    s.push_str(&format!("  Lower face:       {:.1}\n", m.lower_face_height));
    s.push_str(&format!("  Chin to jaw:      {:.1}\n", m.chin_to_jaw_length));

    s.push_str("\nRatios:\n");
    s.push_str(&format!("  Width/Height:     {:.3}\n", m.face_width_to_height_ratio));
    s.push_str(&format!("  Forehead/Jaw:     {:.3}\n", m.forehead_to_jaw_ratio));
    s.push_str(&format!("  Cheekbone/Jaw:    {:.3}\n", m.cheekbone_to_jaw_ratio));

    if show_scores {
        s.push_str("\nScores:\n");
        for (shape, score) in a.scores.iter() {
            s.push_str(&format!("  {:<9} {}\n", shape.as_str(), score));
        }
    }

    let rec = a.recommendations;
    for (title, items) in [
        ("Haircuts", rec.haircuts),
        ("Glasses and accessories", rec.accessories),
        ("Makeup", rec.makeup),
    ] {
        s.push_str(&format!("\n{}:\n", title));
        for item in items {
            s.push_str(&format!("  - {}\n", item));
        }
    }

    s
}
