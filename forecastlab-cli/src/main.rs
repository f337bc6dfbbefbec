//! ForecastLab CLI: check notebook outputs, list checks, inventory artifacts.
//!
//! Commands:
//! - `check`: run the check suite against a project root
//! - `list`: print the check catalog for the current layout
//! - `inventory`: report presence, size and BLAKE3 digest of every artifact
//! - `init-config`: write the default layout as TOML

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use forecastlab_runner::config::DEFAULT_CONFIG_FILE;
use forecastlab_runner::{run_checks, Catalog, Inventory, LayoutConfig, RunOptions, Task};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "forecastlab",
    about = "ForecastLab: validate EDA and forecasting notebook outputs"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the check suite against a project root.
    Check {
        /// Project root containing data/ and notebooks/. Defaults to ".".
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Layout config. Defaults to {root}/forecastlab.toml when present.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Only run checks for one task.
        #[arg(long, value_enum, default_value_t = TaskArg::All)]
        task: TaskArg,

        /// Only run checks whose id contains this string.
        #[arg(long)]
        filter: Option<String>,

        /// Report format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Write the report to a file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Run checks one at a time instead of in parallel.
        #[arg(long, default_value_t = false)]
        serial: bool,

        /// Treat skipped checks as failures.
        #[arg(long, default_value_t = false)]
        fail_on_skip: bool,
    },
    /// Print the check catalog.
    List {
        /// Project root used to find forecastlab.toml. Defaults to ".".
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Layout config.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Only list checks for one task.
        #[arg(long, value_enum, default_value_t = TaskArg::All)]
        task: TaskArg,
    },
    /// Report presence, size and digest of every artifact.
    Inventory {
        /// Project root. Defaults to ".".
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Layout config.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Report format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Write the default layout config.
    InitConfig {
        /// Destination file. Defaults to ./forecastlab.toml.
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        output: PathBuf,

        /// Overwrite an existing file.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TaskArg {
    Task1,
    Task2,
    All,
}

impl TaskArg {
    fn task(self) -> Option<Task> {
        match self {
            TaskArg::Task1 => Some(Task::Task1),
            TaskArg::Task2 => Some(Task::Task2),
            TaskArg::All => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Check {
            root,
            config,
            task,
            filter,
            format,
            output,
            serial,
            fail_on_skip,
        } => {
            let ok = run_check_cmd(
                &root,
                config.as_deref(),
                task.task(),
                filter.as_deref(),
                format,
                output.as_deref(),
                serial,
                fail_on_skip,
            )?;
            if !ok {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::List { root, config, task } => run_list(&root, config.as_deref(), task.task()),
        Commands::Inventory {
            root,
            config,
            format,
        } => run_inventory(&root, config.as_deref(), format),
        Commands::InitConfig { output, force } => run_init_config(&output, force),
    }
}

/// `RUST_LOG` wins; otherwise `-v` picks the level. Logs go to stderr so
/// reports on stdout stay machine-readable.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}

fn load_layout(root: &Path, config: Option<&Path>) -> Result<LayoutConfig> {
    LayoutConfig::resolve(root, config).context("failed to load layout config")
}

#[allow(clippy::too_many_arguments)]
fn run_check_cmd(
    root: &Path,
    config: Option<&Path>,
    task: Option<Task>,
    filter: Option<&str>,
    format: Format,
    output: Option<&Path>,
    serial: bool,
    fail_on_skip: bool,
) -> Result<bool> {
    let layout = load_layout(root, config)?;
    let catalog = Catalog::from_config(&layout);
    let checks = catalog.select(task, filter);
    if checks.is_empty() {
        tracing::warn!("no checks matched the selection");
    }

    let report = run_checks(root, &checks, &RunOptions { parallel: !serial });

    let rendered = match format {
        Format::Text => report.render_text(),
        Format::Json => report.to_json().context("failed to serialize report")?,
    };
    emit(&rendered, output)?;

    Ok(report.is_success(fail_on_skip))
}

fn run_list(root: &Path, config: Option<&Path>, task: Option<Task>) -> Result<()> {
    let layout = load_layout(root, config)?;
    let catalog = Catalog::from_config(&layout);
    for check in catalog.select(task, None) {
        println!("{:<60} {}", check.id, check.artifact.display());
    }
    Ok(())
}

fn run_inventory(root: &Path, config: Option<&Path>, format: Format) -> Result<()> {
    let layout = load_layout(root, config)?;
    let catalog = Catalog::from_config(&layout);
    let inventory = Inventory::take(root, &catalog)?;
    let rendered = match format {
        Format::Text => inventory.render_text(),
        Format::Json => {
            serde_json::to_string_pretty(&inventory).context("failed to serialize inventory")?
        }
    };
    emit(&rendered, None)
}

fn run_init_config(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            output.display()
        );
    }
    let text = LayoutConfig::default().to_toml()?;
    std::fs::write(output, text)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("Wrote {}", output.display());
    Ok(())
}

fn emit(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write report to {}", path.display())),
        None => {
            print!("{rendered}");
            if !rendered.ends_with('\n') {
                println!();
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn check_defaults() {
        let cli = Cli::try_parse_from(["forecastlab", "check"]).unwrap();
        match cli.command {
            Commands::Check {
                root,
                task,
                format,
                serial,
                fail_on_skip,
                ..
            } => {
                assert_eq!(root, PathBuf::from("."));
                assert!(task == TaskArg::All);
                assert!(format == Format::Text);
                assert!(!serial);
                assert!(!fail_on_skip);
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn check_with_options() {
        let cli = Cli::try_parse_from([
            "forecastlab",
            "-vv",
            "check",
            "--task",
            "task2",
            "--format",
            "json",
            "--filter",
            "positive",
            "--fail-on-skip",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Check {
                task,
                format,
                filter,
                fail_on_skip,
                ..
            } => {
                assert_eq!(task.task(), Some(Task::Task2));
                assert!(format == Format::Json);
                assert_eq!(filter.as_deref(), Some("positive"));
                assert!(fail_on_skip);
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn check_cmd_writes_json_report_and_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.json");
        let ok = run_check_cmd(
            dir.path(),
            None,
            Some(Task::Task2),
            None,
            Format::Json,
            Some(&out),
            true,
            false,
        )
        .unwrap();
        assert!(!ok, "empty project must fail existence checks");

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["summary"]["failed"], 9);
        assert_eq!(json["summary"]["skipped"], 6);
    }

    #[test]
    fn init_config_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        run_init_config(&path, false).unwrap();
        assert!(run_init_config(&path, false).is_err());
        run_init_config(&path, true).unwrap();

        let cfg = LayoutConfig::from_file(&path).unwrap();
        assert_eq!(cfg, LayoutConfig::default());
    }
}
