//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;
use config::constants::{DEFAULT_COMBINE_BATCH_SIZE, PREVIEW_DEFAULT_SIZE};
use starforge_models::ModelKind;

/// Build a procedural spacecraft model.
///
/// Builds the chosen model, combines it into one mesh and logs part,
/// vertex and triangle counts. Output files are written only when asked for.
#[derive(Debug, Parser)]
#[command(name = "starforge", version, about, long_about = None)]
pub struct Args {
    /// Model to build (falcon-parker, merlin-engine)
    #[arg(long, default_value = "falcon-parker")]
    pub model: ModelKind,

    /// Write the combined mesh as STL to this path
    #[arg(long, value_name = "PATH")]
    pub stl: Option<PathBuf>,

    /// Write ASCII STL instead of binary
    #[arg(long, requires = "stl")]
    pub ascii: bool,

    /// Render a PNG preview to this path
    #[arg(long, value_name = "PATH")]
    pub preview: Option<PathBuf>,

    /// Preview width in pixels
    #[arg(long, default_value_t = PREVIEW_DEFAULT_SIZE)]
    pub width: u32,

    /// Preview height in pixels
    #[arg(long, default_value_t = PREVIEW_DEFAULT_SIZE)]
    pub height: u32,

    /// Instances merged per combiner batch
    #[arg(long, default_value_t = DEFAULT_COMBINE_BATCH_SIZE)]
    pub batch_size: usize,

    /// Print a JSON summary of counts and bounds to stdout
    #[arg(long)]
    pub summary: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["starforge"]).unwrap();
        assert_eq!(args.model, ModelKind::FalconParker);
        assert_eq!(args.batch_size, 10);
        assert_eq!((args.width, args.height), (1400, 1400));
        assert!(args.stl.is_none() && args.preview.is_none());
        assert!(!args.summary);
    }

    #[test]
    fn test_full_invocation() {
        let args = Args::try_parse_from([
            "starforge",
            "--model",
            "merlin-engine",
            "--stl",
            "engine.stl",
            "--ascii",
            "--preview",
            "engine.png",
            "--width",
            "640",
            "--height",
            "480",
            "--batch-size",
            "4",
            "--summary",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.model, ModelKind::MerlinEngine);
        assert_eq!(args.stl, Some(PathBuf::from("engine.stl")));
        assert!(args.ascii && args.summary && args.verbose);
        assert_eq!((args.width, args.height, args.batch_size), (640, 480, 4));
    }

    #[test]
    fn test_unknown_model_rejected() {
        assert!(Args::try_parse_from(["starforge", "--model", "saturn-v"]).is_err());
    }

    #[test]
    fn test_ascii_requires_stl() {
        assert!(Args::try_parse_from(["starforge", "--ascii"]).is_err());
    }
}
