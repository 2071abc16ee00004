//! Command-line front end for the land analysis pipeline.
//!
//! Log verbosity follows `RUST_LOG` (default `verdant_core=info`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use verdant_core::design::SiteSurvey;
use verdant_core::{
    DepthFormat, DepthScan, LandInput, LocationProfile, Pipeline, PipelineConfig,
    RecommendationResolver, RecommendationStore, Recommendations,
};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "verdant", about = "Land analysis and landscape design synthesis")]
struct Args {
    /// Recommendation tables JSON to use instead of the bundled ones.
    #[arg(long, global = true)]
    tables: Option<PathBuf>,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a location code and resolve its recommendations.
    Resolve { code: String },

    /// Run the full pipeline: terrain, design and scene.
    Analyze(AnalyzeArgs),

    /// Resolve every code in a file (one per line, `#` starts a comment).
    Batch {
        codes: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Dump the recommendation tables as JSON.
    Tables {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
struct AnalyzeArgs {
    /// Location (postal) code.
    #[arg(short, long)]
    code: String,

    /// Raw depth buffer file.
    #[arg(long, requires_all = ["width", "height"])]
    depth: Option<PathBuf>,

    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    height: Option<usize>,

    #[arg(long, value_enum, default_value_t = FormatArg::LuminanceAlpha16)]
    format: FormatArg,

    /// Site photo; only its presence is recorded.
    #[arg(long)]
    image: Option<PathBuf>,

    #[arg(long, default_value = "")]
    land_size: String,

    #[arg(long, default_value = "")]
    soil_type: String,

    /// Comma-separated list of existing site features.
    #[arg(long, default_value = "")]
    features: String,

    /// Pipeline configuration JSON (partial files allowed).
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum FormatArg {
    Luminance8,
    LuminanceAlpha16,
}

impl From<FormatArg> for DepthFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Luminance8 => DepthFormat::Luminance8,
            FormatArg::LuminanceAlpha16 => DepthFormat::LuminanceAlpha16,
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Resolution<'a> {
    location: &'a LocationProfile,
    recommendations: &'a Recommendations,
}

fn load_store(path: Option<&Path>) -> Result<RecommendationStore> {
    match path {
        Some(p) => {
            let json = fs::read_to_string(p).with_context(|| format!("reading tables {}", p.display()))?;
            RecommendationStore::from_json(&json).with_context(|| format!("loading tables {}", p.display()))
        }
        None => Ok(RecommendationStore::builtin().clone()),
    }
}

fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    match path {
        Some(p) => {
            let json = fs::read_to_string(p).with_context(|| format!("reading config {}", p.display()))?;
            PipelineConfig::from_json(&json).with_context(|| format!("loading config {}", p.display()))
        }
        None => Ok(PipelineConfig::default()),
    }
}

/// Non-empty, non-comment lines of a codes file, trimmed.
fn parse_codes(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(String::from)
        .collect()
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let s = if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? };
    Ok(s)
}

fn emit(json: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(p) => {
            fs::write(p, json).with_context(|| format!("writing {}", p.display()))?;
            tracing::info!(path = %p.display(), "wrote output");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn land_input(args: &AnalyzeArgs) -> Result<LandInput> {
    let scan = match (&args.depth, args.width, args.height) {
        (Some(path), Some(w), Some(h)) => Some(
            DepthScan::from_file(path, w, h, args.format.into())
                .with_context(|| format!("reading depth buffer {}", path.display()))?,
        ),
        (Some(_), _, _) => bail!("--depth needs both --width and --height"),
        (None, _, _) => None,
    };
    let image = match &args.image {
        Some(p) => Some(fs::read(p).with_context(|| format!("reading image {}", p.display()))?),
        None => None,
    };
    Ok(LandInput {
        location_code: args.code.clone(),
        scan,
        image,
        survey: SiteSurvey::new(&args.land_size, &args.soil_type, &args.features),
    })
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run_resolve(store: &RecommendationStore, code: &str, pretty: bool) -> Result<()> {
    let resolver = RecommendationResolver::new(store);
    let location = verdant_core::resolve_location(code);
    let recommendations = resolver.resolve(&location);
    emit(&to_json(&Resolution { location: &location, recommendations: &recommendations }, pretty)?, None)
}

fn run_analyze(store: &RecommendationStore, args: &AnalyzeArgs, pretty: bool) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let pipeline = Pipeline::with_store(config, store)?;
    let input = land_input(args)?;
    let output = pipeline.run(&input)?;
    eprintln!(
        "{} · {} · zone {} · {} samples · {} contours · {} features",
        output.location.code,
        output.location.climate,
        output.location.hardiness,
        output.terrain.samples.len(),
        output.terrain.contours.len(),
        output.terrain.features.len(),
    );
    emit(&to_json(&output, pretty)?, args.output.as_deref())
}

fn run_batch(store: &RecommendationStore, path: &Path, output: Option<&Path>, pretty: bool) -> Result<()> {
    let text = fs::read_to_string(path).with_context(|| format!("reading codes {}", path.display()))?;
    let codes = parse_codes(&text);
    if codes.is_empty() {
        bail!("no location codes in {}", path.display());
    }
    eprintln!("Resolving {} codes ...", codes.len());

    let results = RecommendationResolver::new(store).resolve_many(&codes);
    let rows: Vec<Resolution<'_>> = results
        .iter()
        .map(|(location, recommendations)| Resolution { location, recommendations })
        .collect();

    let unresolved = rows.iter().filter(|r| !r.location.resolved).count();
    if unresolved > 0 {
        tracing::warn!(unresolved, "some codes were too short to resolve");
    }
    emit(&to_json(&rows, pretty)?, output)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("verdant_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let store = load_store(args.tables.as_deref())?;

    match &args.command {
        Command::Resolve { code } => run_resolve(&store, code, args.pretty),
        Command::Analyze(a) => run_analyze(&store, a, args.pretty),
        Command::Batch { codes, output } => run_batch(&store, codes, output.as_deref(), args.pretty),
        Command::Tables { output } => emit(&to_json(&store, args.pretty)?, output.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn codes_file_skips_blanks_and_comments() {
        let codes = parse_codes("10001\n\n  # office\n 98101 \n#x\n55401");
        assert_eq!(codes, ["10001", "98101", "55401"]);
    }

    #[test]
    fn analyze_args_parse_with_defaults() {
        let args = Args::try_parse_from(["verdant", "analyze", "--code", "10001"]).unwrap();
        let Command::Analyze(a) = args.command else {
            panic!("expected analyze");
        };
        assert_eq!(a.format, FormatArg::LuminanceAlpha16);
        let input = land_input(&a).unwrap();
        assert!(input.scan.is_none());
        assert!(input.survey.existing_features.is_empty());
    }

    #[test]
    fn depth_without_dimensions_is_rejected() {
        assert!(Args::try_parse_from(["verdant", "analyze", "--code", "1", "--depth", "d.raw"]).is_err());
    }

    #[test]
    fn depth_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("depth.raw");
        fs::write(&path, vec![0u8; 64 * 48]).unwrap();
        let args = Args::try_parse_from([
            "verdant",
            "analyze",
            "--code",
            "90210",
            "--depth",
            path.to_str().unwrap(),
            "--width",
            "64",
            "--height",
            "48",
            "--format",
            "luminance8",
            "--features",
            "pond, shed",
        ])
        .unwrap();
        let Command::Analyze(a) = args.command else {
            panic!("expected analyze");
        };
        let input = land_input(&a).unwrap();
        let scan = input.scan.unwrap();
        assert!(scan.covers_declared_size());
        assert_eq!(input.survey.existing_features, ["pond", "shed"]);
    }

    #[test]
    fn config_and_tables_files_are_validated() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("config.json");
        fs::write(&bad, r#"{ "terrain": { "grid_step": 0 } }"#).unwrap();
        assert!(load_config(Some(&bad)).is_err());

        let tables = dir.path().join("tables.json");
        fs::write(&tables, serde_json::to_string(RecommendationStore::builtin()).unwrap()).unwrap();
        assert_eq!(&load_store(Some(&tables)).unwrap(), RecommendationStore::builtin());
        assert!(load_store(Some(&dir.path().join("missing.json"))).is_err());
    }
}
