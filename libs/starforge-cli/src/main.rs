//! # Starforge
//!
//! Builds one catalog model and writes the requested outputs.
//!
//! ```text
//! starforge --model falcon-parker --preview falcon.png --stl falcon.stl --summary
//! ```
//!
//! Logging goes through `env_logger`; `RUST_LOG` overrides the default
//! `info` filter (`debug` with `--verbose`).

mod args;
mod error;
mod summary;

use std::process::ExitCode;

use clap::Parser;
use starforge_mesh::export::{export_mesh, StlExporter, StlFormat};
use starforge_mesh::preview::{save_preview, PreviewConfig};
use starforge_mesh::Combiner;

use crate::args::Args;
use crate::error::CliError;
use crate::summary::Summary;

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let mut combiner = Combiner::new(args.batch_size)?;
    args.model.build_into(&mut combiner)?;
    let combined = combiner.finish()?;
    log::info!(
        "Built {}: {} parts in {} batches, {} vertices, {} triangles",
        args.model,
        combined.instance_count(),
        combined.batch_count(),
        combined.mesh().vertex_count(),
        combined.mesh().triangle_count()
    );

    if let Some(path) = &args.preview {
        let config = PreviewConfig {
            width: args.width,
            height: args.height,
            ..PreviewConfig::default()
        };
        save_preview(combined.mesh(), &config, path)?;
    }

    if let Some(path) = &args.stl {
        let exporter = StlExporter {
            format: if args.ascii {
                StlFormat::Ascii
            } else {
                StlFormat::Binary
            },
        };
        export_mesh(combined.mesh(), &exporter, path)?;
    }

    if args.summary {
        let summary = Summary::new(args.model, &combined)?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
