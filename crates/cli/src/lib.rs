//! Command line front end for the Docker model generator.
//!
//! `specgen [TARGET_DIR]` cleans previously generated artifacts out of the
//! target directory, walks the Docker Engine API catalog and writes one
//! `.Generated.cs` file per reachable model.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use specgen_catalog::{Catalog, NAMESPACE};
use specgen_core::{Emitter, Error, GeneratorConfig, ModelSet};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const CRATES: &[&str] = &["specgen_cli", "specgen_core", "specgen_catalog"];

/// Command line arguments.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "specgen",
    version,
    about = "Generate Docker.DotNet model classes from the Engine API types"
)]
pub struct Args {
    /// Directory the generated files are written to
    #[arg(value_name = "TARGET_DIR", default_value = ".")]
    pub target_dir: PathBuf,

    /// TOML file with extra renames and property overrides
    #[arg(long, value_name = "FILE")]
    pub overrides: Option<PathBuf>,

    /// Resolve the models and print the plan as JSON without touching the target directory
    #[arg(long)]
    pub dry_run: bool,

    /// Namespace for the generated classes
    #[arg(long, value_name = "NAMESPACE")]
    pub namespace: Option<String>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Artifacts were cleaned and written.
    Generated {
        /// Stale artifacts deleted before writing.
        removed: usize,
        /// Paths written, in model order.
        written: Vec<PathBuf>,
    },
    /// A dry run printed the plan.
    Planned {
        /// Number of models in the plan.
        models: usize,
    },
}

/// Parse `args` (program name first), run, and return the process exit code.
pub fn run_cli(args: Vec<String>) -> i32 {
    match Args::try_parse_from(args) {
        Ok(args) => {
            init_tracing(args.verbose);
            run(&args)
        }
        Err(err) => {
            let code = err.exit_code();
            let _ = err.print();
            code
        }
    }
}

/// Run with parsed arguments and return the process exit code.
pub fn run(args: &Args) -> i32 {
    let mut stdout = io::stdout().lock();
    match generate(args, &mut stdout) {
        Ok(Outcome::Generated { removed, written }) => {
            info!(removed, written = written.len(), "done");
            0
        }
        Ok(Outcome::Planned { models }) => {
            debug!(models, "printed plan");
            0
        }
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

/// Run one generation pass. The plan goes to `out` on a dry run.
pub fn generate(args: &Args, out: &mut impl Write) -> Result<Outcome, Error> {
    let config = match &args.overrides {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    let namespace = args
        .namespace
        .as_deref()
        .or(config.namespace.as_deref())
        .unwrap_or(NAMESPACE);
    let mut emitter = Emitter::open(&args.target_dir, namespace)?;
    if let Some(suffix) = &config.suffix {
        emitter = emitter.with_suffix(suffix.clone());
    }

    let mut catalog = Catalog::docker()?;
    config.apply(&catalog.schema, &mut catalog.overrides)?;

    if args.dry_run {
        let models = catalog.resolve()?;
        models.check_unique_names()?;
        write_plan(&models, out)?;
        return Ok(Outcome::Planned {
            models: models.len(),
        });
    }

    let removed = emitter.clean()?;
    let models = catalog.resolve()?;
    info!(
        models = models.len(),
        dir = %emitter.dir().display(),
        "resolved models"
    );
    let written = emitter.emit(&models)?;
    Ok(Outcome::Generated { removed, written })
}

fn write_plan(models: &ModelSet, out: &mut impl Write) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut *out, &models.plan())
        .map_err(io::Error::from)
        .and_then(|()| writeln!(out))
        .map_err(|source| Error::Io {
            context: "failed to write model plan".to_string(),
            source,
        })
}

/// SPECGEN_LOG takes a plain level or a full filter spec; RUST_LOG is the
/// fallback.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = match std::env::var("SPECGEN_LOG") {
        Ok(value) if is_plain_level(&value) => EnvFilter::new(directives(&value)),
        Ok(spec) => EnvFilter::new(spec),
        Err(_) => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(directives(level))),
    };

    if tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
