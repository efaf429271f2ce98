//! `photo_check`: run the spam-suspicion analyzer and validator against a
//! photo on disk and print the verdict.
//!
//! Exit codes: 0 = auto-approve, 1 = flagged for review, 2 = rejected.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;

use civicreport_analysis::{log_photo_analysis, InMemoryPhoto, PhotoAnalyzer, PhotoValidator};
use civicreport_core::Config;

#[derive(Parser, Debug)]
#[command(name = "photo_check")]
#[command(about = "Analyze a report photo for spam suspicion")]
struct Args {
    /// Path to the photo file
    photo: PathBuf,

    /// Output format: json or text (default: text)
    #[arg(long, default_value = "text")]
    format: String,
}

fn guess_content_type(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_env();

    let file_name = args
        .photo
        .file_name()
        .and_then(|n| n.to_str())
        .context("Photo path has no file name")?
        .to_string();
    let metadata = tokio::fs::metadata(&args.photo)
        .await
        .with_context(|| format!("Failed to stat {}", args.photo.display()))?;
    let last_modified: DateTime<Utc> = metadata
        .modified()
        .map(DateTime::from)
        .unwrap_or_else(|_| Utc::now());
    let data = tokio::fs::read(&args.photo)
        .await
        .with_context(|| format!("Failed to read {}", args.photo.display()))?;

    let photo = InMemoryPhoto::new(
        file_name,
        guess_content_type(&args.photo),
        last_modified,
        data,
    );

    let analyzer = PhotoAnalyzer::with_threshold(
        std::sync::Arc::new(civicreport_analysis::ExifTagReader),
        config.auto_approve_threshold,
    );
    let validator = PhotoValidator::new(config.max_photo_size_bytes);

    let analysis = analyzer.analyze(&photo).await;
    log_photo_analysis(&analysis);
    let result = validator.validate(analysis);

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let verdict = if !result.is_valid {
            "REJECTED"
        } else if result.should_auto_approve {
            "AUTO-APPROVE"
        } else {
            "FLAGGED FOR REVIEW"
        };
        println!("{}: {}", result.analysis.file_name, verdict);
        println!(
            "  score: {}/100  format: {}",
            result.analysis.suspicion_score,
            if result.analysis.is_jpeg {
                "JPEG"
            } else if result.analysis.is_png {
                "PNG"
            } else {
                "unknown"
            }
        );
        for reason in &result.reasons {
            println!("  - {}", reason);
        }
    }

    Ok(if !result.is_valid {
        ExitCode::from(2)
    } else if result.flagged_for_review {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}
