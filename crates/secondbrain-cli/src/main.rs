//! SecondBrain CLI - clinical task tracking for one ward
//!
//! Usage:
//!   secondbrain                    Open the interactive ward (default)
//!   secondbrain queue [--json]     Print today's queue in triage order
//!   secondbrain patients [--json]  Print the roster with open-task counts
//!   secondbrain tasks <ID>         Print one patient's open tasks
//!   secondbrain whoami             Show the clinician
//!   secondbrain init               Write a default config file

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use secondbrain_core::{
    patient_detail, roster, seed, today_queue, BrainConfig, PatientDetailView, QueueRow,
    RosterRow, Ward, DEFAULT_CONFIG_PATH,
};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "secondbrain")]
#[command(author, version, about = "Clinical task tracking for one ward")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// JSON seed file (overrides the config's seed_file)
    #[arg(long, value_name = "FILE")]
    seed: Option<PathBuf>,

    /// Log file (overrides the config's log_file)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive ward
    Tui,

    /// Print today's queue in triage order
    Queue {
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the patient roster with open-task counts
    Patients {
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one patient's open tasks
    Tasks {
        /// Patient id
        patient_id: u32,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the clinician the ward belongs to
    Whoami,

    /// Write a default config file to the --config path
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    match cli.command.take().unwrap_or(Commands::Tui) {
        Commands::Init { force } => cmd_init(&cli.config, force),
        Commands::Tui => {
            let (config, ward) = prepare(&cli, true)?;
            cmd_tui(ward, config)
        }
        Commands::Queue { json } => {
            let (_, ward) = prepare(&cli, false)?;
            cmd_queue(&ward, json)
        }
        Commands::Patients { json } => {
            let (_, ward) = prepare(&cli, false)?;
            cmd_patients(&ward, json)
        }
        Commands::Tasks { patient_id, json } => {
            let (_, ward) = prepare(&cli, false)?;
            cmd_tasks(&ward, patient_id, json)
        }
        Commands::Whoami => {
            let (_, ward) = prepare(&cli, false)?;
            cmd_whoami(&ward)
        }
    }
}

/// Files the ward starts from once flags and config are merged
#[derive(Debug, PartialEq)]
struct Sources {
    seed_file: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

/// Flags take precedence over the config file
fn resolve_sources(cli: &Cli, config: &BrainConfig) -> Sources {
    Sources {
        seed_file: cli.seed.clone().or_else(|| config.seed_file.clone()),
        log_file: cli.log_file.clone().or_else(|| config.log_file.clone()),
    }
}

/// Load the config, install logging and build the ward
fn prepare(cli: &Cli, interactive: bool) -> Result<(BrainConfig, Ward)> {
    let config = BrainConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    let sources = resolve_sources(cli, &config);
    init_logging(cli.verbose, sources.log_file.as_deref(), interactive)?;

    let ward = load_ward(sources.seed_file.as_deref())?;
    Ok((config, ward))
}

/// Install the global subscriber. The interactive UI owns the terminal, so it
/// only logs when a file is given.
fn init_logging(verbose: bool, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let subscriber = builder.with_ansi(false).with_writer(Mutex::new(file)).finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        None if interactive => {
            let subscriber = builder.with_writer(std::io::sink).finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        None => {
            let subscriber = builder.with_writer(std::io::stderr).finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    BrainConfig::default()
        .write(path)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn load_ward(seed_file: Option<&Path>) -> Result<Ward> {
    match seed_file {
        Some(path) => {
            let seed = seed::load_seed(path)
                .with_context(|| format!("Failed to load seed from {}", path.display()))?;
            Ward::from_seed(seed).context("Seed is inconsistent")
        }
        None => Ward::seeded().context("Built-in seed is inconsistent"),
    }
}

fn cmd_tui(ward: Ward, config: BrainConfig) -> Result<()> {
    info!("Launching ward UI");
    secondbrain_tui::run(ward, config.tui)?;
    Ok(())
}

fn cmd_queue(ward: &Ward, json: bool) -> Result<()> {
    let rows = today_queue(ward)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!("{}", format_queue_row(row));
        }
    }
    Ok(())
}

fn cmd_patients(ward: &Ward, json: bool) -> Result<()> {
    let rows = roster(ward);
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!("{}", format_roster_row(row));
        }
    }
    Ok(())
}

fn cmd_tasks(ward: &Ward, patient_id: u32, json: bool) -> Result<()> {
    let view = patient_detail(ward, patient_id)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", format_detail(&view));
    }
    Ok(())
}

fn cmd_whoami(ward: &Ward) -> Result<()> {
    let clinician = ward.clinician();
    match &clinician.email {
        Some(email) => println!("{} <{}>", clinician.name, email),
        None => println!("{}", clinician.name),
    }
    Ok(())
}

fn format_queue_row(row: &QueueRow) -> String {
    let flag = if row.critical { " [Critical]" } else { "" };
    format!(
        "#{:<3} {:<18} {:<10} {}{}: {}",
        row.task_id,
        row.due,
        row.priority.to_string(),
        row.patient_name,
        flag,
        row.title
    )
}

fn format_roster_row(row: &RosterRow) -> String {
    format!(
        "{:<3} {} ({}) · Bed {} · {} · {} open",
        row.patient_id,
        row.name,
        row.acuity.badge(),
        row.bed,
        row.main_problem,
        row.open_tasks
    )
}

fn format_detail(view: &PatientDetailView) -> String {
    let patient = &view.patient;
    let mut out = format!(
        "{} · {} · {}\n",
        patient.name,
        patient.summary(),
        patient.acuity.badge()
    );
    for task in &view.tasks {
        out.push_str(&format!(
            "  #{:<3} {} ({}, {})\n",
            task.task_id, task.title, task.due, task.priority
        ));
        if let Some(notes) = &task.notes {
            out.push_str(&format!("        {}\n", notes));
        }
    }
    out
}
