use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use miette::{miette, IntoDiagnostic, Result, WrapErr};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use lintmeta::constraint::ApiConstraint;
use lintmeta::desugar::{self, SourceSetType};
use lintmeta::discovery::FileFinder;
use lintmeta::plurals::PluralsDatabase;
use lintmeta::report::{
    CheckReport, ConstraintReport, DesugarReport, ManifestsReport, PluralsReport, Report, ReportFormat,
    Reporter, SymbolKind,
};
use lintmeta::Config;

/// lintmeta - API level constraints, plural rules and desugaring data for Android lint
#[derive(Parser, Debug)]
#[command(name = "lintmeta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (defaults to the configured report format)
    #[arg(short, long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Output file (for json format)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode, describe and compare API constraints
    Constraint {
        #[command(subcommand)]
        action: ConstraintCommand,
    },

    /// Show the plural quantities a language needs
    Plurals {
        /// Language or locale, e.g. `ru`, `pt-BR` or `b+sr+Latn`
        locale: String,
    },

    /// Check whether a class, field or method is desugared
    Desugar {
        /// Owner class, e.g. `java/lang/Character` or `java.util.Map.Entry`
        owner: String,

        /// Member name; without it the whole class is checked
        name: Option<String>,

        /// Parameter descriptor such as `(CC)`; without it `name` is a field
        desc: Option<String>,

        /// Descriptor sources replacing the built-in table (path, file: or
        /// jar: URL, or `none`); can be specified multiple times
        #[arg(long = "file", value_name = "SOURCE")]
        files: Vec<String>,

        /// Source set the reference is compiled in
        #[arg(long, value_enum, default_value = "main")]
        source_set: SourceSetArg,
    },

    /// Report the minimum API requirements of all manifests in a project
    Manifest {
        /// Project directory or manifest file
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Patterns to exclude (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
enum ConstraintCommand {
    /// Render a serialized constraint, e.g. `e000000` or `{:ffffffffffffc000}`
    Decode { serialized: String },

    /// Render an `sdk:level` descriptor such as `0:33,1000000:4`
    Describe {
        descriptor: String,

        /// Require every listed SDK instead of any one of them
        #[arg(long)]
        all_of: bool,
    },

    /// Check whether the levels we have satisfy the levels we need
    Check {
        /// Descriptor of the guaranteed levels, all of which hold
        #[arg(long)]
        have: String,

        /// Descriptor of the required levels
        #[arg(long)]
        need: String,

        /// Any one of the required SDK levels is enough
        #[arg(long)]
        any_of: bool,
    },
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum OutputFormat {
    Terminal,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => ReportFormat::Terminal,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum SourceSetArg {
    Main,
    UnitTests,
    AndroidTest,
    TestFixtures,
}

impl From<SourceSetArg> for SourceSetType {
    fn from(source_set: SourceSetArg) -> Self {
        match source_set {
            SourceSetArg::Main => SourceSetType::Main,
            SourceSetArg::UnitTests => SourceSetType::UnitTests,
            SourceSetArg::AndroidTest => SourceSetType::InstrumentationTests,
            SourceSetArg::TestFixtures => SourceSetType::TestFixtures,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.quiet);

    info!("lintmeta v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = load_config(&cli)?;
    let format: ReportFormat = match &cli.format {
        Some(format) => format.clone().into(),
        None => ReportFormat::from_name(&config.report.format).ok_or_else(|| {
            miette!(
                "Unknown report format '{}' in configuration (expected terminal or json)",
                config.report.format
            )
        })?,
    };
    let reporter = Reporter::new(format.clone(), cli.output.clone()).with_details(!cli.quiet);

    let report = match &cli.command {
        Command::Constraint { action } => run_constraint(action, &config)?,
        Command::Plurals { locale } => Report::Plurals(PluralsReport::new(locale, PluralsDatabase::latest())),
        Command::Desugar {
            owner,
            name,
            desc,
            files,
            source_set,
        } => run_desugar(&config, owner, name.as_deref(), desc.as_deref(), files, (*source_set).into())?,
        Command::Manifest { path, exclude } => {
            let show_progress = !cli.quiet && format == ReportFormat::Terminal;
            run_manifest(&config, path, exclude, show_progress)?
        }
    };

    reporter.report(&report)?;

    // A failed check is reported through the exit status as well
    if let Report::Check(check) = &report {
        if !check.satisfied {
            std::process::exit(1);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Results go to stdout, diagnostics to stderr
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(config_path) = &cli.config {
        return Config::from_file(config_path);
    }

    // Try to load from default locations
    let root = match &cli.command {
        Command::Manifest { path, .. } if path.is_dir() => path.clone(),
        _ => PathBuf::from("."),
    };
    Config::from_default_locations(&root)
}

fn run_constraint(action: &ConstraintCommand, config: &Config) -> Result<Report> {
    let registry = config.extension_registry();
    match action {
        ConstraintCommand::Decode { serialized } => {
            let constraint = ApiConstraint::deserialize(serialized.trim())
                .into_diagnostic()
                .wrap_err_with(|| format!("Cannot decode constraint '{}'", serialized))?;
            Ok(Report::Constraint(ConstraintReport::new(serialized, &constraint, &registry)))
        }
        ConstraintCommand::Describe { descriptor, all_of } => {
            let constraint = parse_descriptor(descriptor, !all_of)?;
            Ok(Report::Constraint(ConstraintReport::new(descriptor, &constraint, &registry)))
        }
        ConstraintCommand::Check { have, need, any_of } => {
            let have = parse_descriptor(have, false)?;
            let need = parse_descriptor(need, *any_of)?;
            debug!("Checking {} against {}", have, need);
            Ok(Report::Check(CheckReport::new(&have, &need, &registry)))
        }
    }
}

/// Parses a descriptor; a single SDK yields a plain single SDK constraint.
fn parse_descriptor(descriptor: &str, any_of: bool) -> Result<ApiConstraint> {
    let constraint = ApiConstraint::parse_descriptor(descriptor, any_of)
        .into_diagnostic()
        .wrap_err_with(|| format!("Cannot parse descriptor '{}'", descriptor))?;
    let mut constraints = constraint.constraints();
    if constraints.len() == 1 {
        if let Some(single) = constraints.pop() {
            return Ok(single.into());
        }
    }
    Ok(constraint)
}

fn run_desugar(
    config: &Config,
    owner: &str,
    name: Option<&str>,
    desc: Option<&str>,
    files: &[String],
    source_set: SourceSetType,
) -> Result<Report> {
    let sources = if files.is_empty() {
        config.desugaring.files.as_slice()
    } else {
        files
    };
    if !sources.is_empty() {
        desugar::set_desugared_methods(sources)
            .map_err(|e| miette!("Cannot load desugaring descriptors from {}: {}", e.path(), e))?;
    }

    let project = config.project_desugaring(config.desugaring.min_sdk.unwrap_or(-1));
    let (symbol, desugared) = match (name, desc) {
        (Some(name), Some(desc)) => (
            SymbolKind::Method,
            desugar::is_desugared_method(owner, name, desc, source_set, Some(&project)),
        ),
        (Some(name), None) => (
            SymbolKind::Field,
            desugar::is_desugared_field(owner, name, source_set, Some(&project)),
        ),
        (None, _) => (
            SymbolKind::Class,
            desugar::is_desugared_class(owner, source_set, Some(&project)),
        ),
    };

    let descriptor_count = project
        .lookup(source_set)
        .ok()
        .flatten()
        .unwrap_or_else(desugar::current)
        .len();
    let qualified = owner.replace(['/', '$'], ".");

    Ok(Report::Desugar(DesugarReport {
        owner: owner.to_string(),
        name: name.map(String::from),
        desc: desc.map(String::from),
        symbol,
        source_set,
        desugared,
        can_be_desugared_later: desugar::can_be_desugared_later(Some(&qualified)),
        descriptor_count,
    }))
}

fn run_manifest(config: &Config, path: &Path, exclude: &[String], show_progress: bool) -> Result<Report> {
    let mut config = config.clone();
    config.discovery.exclude.extend(exclude.iter().cloned());

    if !path.exists() {
        return Err(miette!("Path does not exist: {}", path.display()));
    }

    let spinner = if show_progress {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("Scanning {} for manifests...", path.display()));
        spinner.enable_steady_tick(Duration::from_millis(100));
        Some(spinner)
    } else {
        None
    };

    let finder = FileFinder::new(&config);
    let (manifests, errors) = finder.parse_manifests(path);

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    info!("Parsed {} manifests ({} errors)", manifests.len(), errors.len());

    Ok(Report::Manifests(ManifestsReport::new(
        path.to_path_buf(),
        &manifests,
        &errors,
        &config.extension_registry(),
    )))
}
