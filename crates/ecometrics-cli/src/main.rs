// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell

//! # EcoMetrics CLI
//!
//! Carbon and water footprint estimation for AI projects: assess a project
//! description, explore reduction scenarios, and keep a flat-file history
//! of saved assessments.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use ecometrics_engine::{
    aggregate_footprints, assess, calculate_score, compute_footprint, simulate_what_if,
    ProjectAssessment, WhatIfLevers, WhatIfOutcome,
};
use ecometrics_model::{
    Assumptions, FootprintResult, ProjectDescription, ProjectRecord, ScoreResult,
};
use ecometrics_refdata::ReferenceTables;
use ecometrics_store::ProjectStore;

#[derive(Parser)]
#[command(name = "ecometrics")]
#[command(about = "Carbon & water footprint estimation for AI projects", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a project: footprint, eco-score, and recommendations
    Compute {
        /// Project description file (JSON)
        #[arg(short, long)]
        project: PathBuf,

        /// Environmental assumptions file (TOML); defaults apply when omitted
        #[arg(short, long)]
        assumptions: Option<PathBuf>,

        /// Directory of reference-table JSON files; built-ins when omitted
        #[arg(short, long)]
        tables: Option<PathBuf>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Write output to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Append the assessment to the project history
        #[arg(long)]
        save: bool,

        /// History file (defaults to ~/.ecometrics/projects.csv)
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Apply reduction levers to a project and report the delta
    WhatIf {
        /// Project description file (JSON)
        #[arg(short, long)]
        project: PathBuf,

        /// Environmental assumptions file (TOML); defaults apply when omitted
        #[arg(short, long)]
        assumptions: Option<PathBuf>,

        /// Directory of reference-table JSON files; built-ins when omitted
        #[arg(short, long)]
        tables: Option<PathBuf>,

        /// Token reduction in percent (targets inference usage)
        #[arg(long, default_value = "0")]
        tokens: f64,

        /// Traffic reduction in percent (targets inference usage)
        #[arg(long, default_value = "0")]
        traffic: f64,

        /// Grid-intensity improvement in percent (targets all usage)
        #[arg(long, default_value = "0")]
        region: f64,

        /// PUE improvement in percent (targets all usage)
        #[arg(long, default_value = "0")]
        pue: f64,

        /// Retraining-frequency reduction in percent (targets training usage)
        #[arg(long, default_value = "0")]
        frequency: f64,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Write output to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Merge two or more saved projects into one footprint and re-score
    Aggregate {
        /// Names of saved projects to merge
        #[arg(required = true, num_args = 2..)]
        names: Vec<String>,

        /// History file (defaults to ~/.ecometrics/projects.csv)
        #[arg(long)]
        store: Option<PathBuf>,

        /// Environmental assumptions file (TOML); defaults apply when omitted
        #[arg(short, long)]
        assumptions: Option<PathBuf>,

        /// Directory of reference-table JSON files; built-ins when omitted
        #[arg(short, long)]
        tables: Option<PathBuf>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Write output to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List saved projects
    List {
        /// History file (defaults to ~/.ecometrics/projects.csv)
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Compare two saved projects side by side
    Compare {
        /// First saved project name
        name_a: String,

        /// Second saved project name
        name_b: String,

        /// History file (defaults to ~/.ecometrics/projects.csv)
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Show the reference catalogs in use
    Tables {
        /// Directory of reference-table JSON files; built-ins when omitted
        #[arg(short, long)]
        tables: Option<PathBuf>,
    },

    /// Write starter project.json and assumptions.toml files
    Init {
        /// Target directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

/// Aggregate output: merged totals plus the names that went in.
#[derive(Serialize)]
struct AggregateReport {
    projects: Vec<String>,
    footprint: FootprintResult,
    score: ScoreResult,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    match cli.command {
        Commands::Compute {
            project,
            assumptions,
            tables,
            format,
            output,
            save,
            store,
        } => {
            let project = load_project(&project)?;
            let assumptions = load_assumptions(assumptions.as_deref())?;
            let tables = load_tables(tables.as_deref())?;

            info!("Assessing project: {}", project.name);
            let assessment = assess(&project, &assumptions, &tables)?;
            emit(
                &assessment,
                render_assessment(&project, &assessment),
                &format,
                output.as_deref(),
            )?;

            if save {
                let record =
                    ProjectRecord::new(&project, &assessment.footprint, &assessment.score);
                let store = open_store(store)?;
                store.append(&record)?;
                eprintln!("Saved '{}' to {}", project.name, store.path().display());
            }
        }

        Commands::WhatIf {
            project,
            assumptions,
            tables,
            tokens,
            traffic,
            region,
            pue,
            frequency,
            format,
            output,
        } => {
            let project = load_project(&project)?;
            let assumptions = load_assumptions(assumptions.as_deref())?;
            let tables = load_tables(tables.as_deref())?;

            info!("Simulating what-if for: {}", project.name);
            let footprint = compute_footprint(&project, &assumptions, &tables)?;
            let levers = WhatIfLevers {
                token_reduction_pct: tokens,
                traffic_reduction_pct: traffic,
                region_optimization_pct: region,
                pue_improvement_pct: pue,
                frequency_reduction_pct: frequency,
            };
            let outcome = simulate_what_if(&footprint, &levers)?;
            emit(
                &outcome,
                render_what_if(&project.name, &outcome),
                &format,
                output.as_deref(),
            )?;
        }

        Commands::Aggregate {
            names,
            store,
            assumptions,
            tables,
            format,
            output,
        } => {
            let store = open_store(store)?;
            let assumptions = load_assumptions(assumptions.as_deref())?;
            let tables = load_tables(tables.as_deref())?;

            info!("Aggregating {} projects", names.len());
            let mut footprints = Vec::new();
            for name in &names {
                let record = store
                    .latest_by_name(name)?
                    .with_context(|| format!("no saved project named '{name}'"))?;
                // Stored rows carry totals only; recompute for the full
                // phase breakdown before summing.
                let project = record.to_project();
                footprints.push(compute_footprint(&project, &assumptions, &tables)?);
            }
            let merged = aggregate_footprints(&footprints)?;
            let score = calculate_score(&merged);
            let report = AggregateReport {
                projects: names,
                footprint: merged,
                score,
            };
            emit(&report, render_aggregate(&report), &format, output.as_deref())?;
        }

        Commands::List { store } => {
            let store = open_store(store)?;
            let records = store.load_all()?;
            if records.is_empty() {
                println!("No saved projects in {}", store.path().display());
            } else {
                println!(
                    "{:<28} {:>5} {:>5} {:>14}  {}",
                    "Name", "Grade", "Score", "Total kgCO2e", "Saved"
                );
                for r in &records {
                    println!(
                        "{:<28} {:>5} {:>5} {:>14.1}  {}",
                        r.name,
                        r.score_grade.as_str(),
                        r.score_100,
                        r.total_co2_kg,
                        r.timestamp.format("%Y-%m-%d %H:%M")
                    );
                }
            }
        }

        Commands::Compare {
            name_a,
            name_b,
            store,
        } => {
            let store = open_store(store)?;
            let a = store
                .latest_by_name(&name_a)?
                .with_context(|| format!("no saved project named '{name_a}'"))?;
            let b = store
                .latest_by_name(&name_b)?
                .with_context(|| format!("no saved project named '{name_b}'"))?;
            print!("{}", render_comparison(&a, &b));
        }

        Commands::Tables { tables } => {
            let tables = load_tables(tables.as_deref())?;
            print!("{}", render_tables(&tables));
        }

        Commands::Init { dir } => {
            fs::create_dir_all(&dir)
                .with_context(|| format!("creating {}", dir.display()))?;
            let project_path = dir.join("project.json");
            let assumptions_path = dir.join("assumptions.toml");
            anyhow::ensure!(
                !project_path.exists(),
                "{} already exists, not overwriting",
                project_path.display()
            );
            anyhow::ensure!(
                !assumptions_path.exists(),
                "{} already exists, not overwriting",
                assumptions_path.display()
            );

            let project = serde_json::to_string_pretty(&ProjectDescription::default())?;
            fs::write(&project_path, project)?;
            let assumptions = toml::to_string_pretty(&Assumptions::default())?;
            fs::write(&assumptions_path, assumptions)?;

            println!("Wrote {}", project_path.display());
            println!("Wrote {}", assumptions_path.display());
            println!("Edit both, then run: ecometrics compute --project {}", project_path.display());
        }
    }

    Ok(())
}

/// Load and validate a project description from JSON.
fn load_project(path: &Path) -> Result<ProjectDescription> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading project file {}", path.display()))?;
    let project: ProjectDescription = serde_json::from_str(&raw)
        .with_context(|| format!("parsing project file {}", path.display()))?;
    Ok(project.validated()?)
}

/// Load assumptions from TOML, or fall back to the documented defaults.
fn load_assumptions(path: Option<&Path>) -> Result<Assumptions> {
    let Some(path) = path else {
        return Ok(Assumptions::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading assumptions file {}", path.display()))?;
    let assumptions: Assumptions = toml::from_str(&raw)
        .with_context(|| format!("parsing assumptions file {}", path.display()))?;
    Ok(assumptions.validated()?)
}

/// Load reference tables from a directory, or use the built-in catalogs.
fn load_tables(dir: Option<&Path>) -> Result<ReferenceTables> {
    match dir {
        Some(dir) => ReferenceTables::load_dir(dir)
            .with_context(|| format!("loading reference tables from {}", dir.display())),
        None => Ok(ReferenceTables::builtin()),
    }
}

fn open_store(path: Option<PathBuf>) -> Result<ProjectStore> {
    match path {
        Some(path) => Ok(ProjectStore::new(path)),
        None => Ok(ProjectStore::default_location()?),
    }
}

/// Emit a value as pretty JSON or as the prepared text rendering.
fn emit<T: Serialize>(
    value: &T,
    text: String,
    format: &str,
    output: Option<&Path>,
) -> Result<()> {
    let rendered = match format {
        "json" => serde_json::to_string_pretty(value)?,
        "text" => text,
        other => anyhow::bail!("unsupported format: {other} (expected text or json)"),
    };

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Output written to: {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn render_assessment(project: &ProjectDescription, assessment: &ProjectAssessment) -> String {
    let fp = &assessment.footprint;
    let score = &assessment.score;
    let mut out = String::new();

    out.push_str(&format!("Project: {} ({})\n", project.name, project.owner));
    out.push_str(&format!(
        "  {} / {} / {} years\n",
        project.archetype.label(),
        project.environment.label(),
        project.duration_years
    ));
    out.push_str("\nFootprint:\n");
    out.push_str(&format!("  Total CO2:      {:.2} kg CO2e\n", fp.total_co2_kg));
    out.push_str(&format!("  Total energy:   {:.2} kWh\n", fp.total_energy_kwh));
    out.push_str(&format!("  Total water:    {:.3} m3\n", fp.total_water_m3));
    out.push_str(&format!("  Annual CO2:     {:.2} kg CO2e/yr\n", fp.annual_co2_kg));
    out.push_str("\nBreakdown (kg CO2e):\n");
    out.push_str(&format!("  Development:         {:>10.2}\n", fp.co2_development_kg));
    out.push_str(&format!("  Training usage:      {:>10.2}\n", fp.co2_training_usage_kg));
    out.push_str(&format!("  Training embodied:   {:>10.2}\n", fp.co2_training_embodied_kg));
    out.push_str(&format!("  Inference usage:     {:>10.2}\n", fp.co2_inference_usage_kg));
    out.push_str(&format!("  Inference embodied:  {:>10.2}\n", fp.co2_inference_embodied_kg));
    out.push_str(&format!("  Storage & network:   {:>10.2}\n", fp.co2_storage_network_kg));
    out.push_str(&format!(
        "\nScore: {}/100  Grade: {} ({})\n",
        score.score_100, score.grade, score.label
    ));

    if !assessment.recommendations.is_empty() {
        out.push_str("\nRecommendations:\n");
        for rec in &assessment.recommendations {
            out.push_str(&format!("  - {rec}\n"));
        }
    }

    out
}

fn render_what_if(name: &str, outcome: &WhatIfOutcome) -> String {
    let mut out = String::new();
    out.push_str(&format!("What-if for {name}:\n"));
    out.push_str(&format!("  Baseline:   {:.2} kg CO2e\n", outcome.baseline_co2_kg));
    out.push_str(&format!("  Optimized:  {:.2} kg CO2e\n", outcome.optimized_co2_kg));
    out.push_str(&format!(
        "  Reduction:  {:.2} kg CO2e ({:.1}%)\n",
        outcome.absolute_reduction_kg, outcome.relative_reduction_pct
    ));
    out
}

fn render_aggregate(report: &AggregateReport) -> String {
    let fp = &report.footprint;
    let mut out = String::new();
    out.push_str(&format!("Aggregate of: {}\n", report.projects.join(", ")));
    out.push_str(&format!("\n  Total CO2:      {:.2} kg CO2e\n", fp.total_co2_kg));
    out.push_str(&format!("  Total energy:   {:.2} kWh\n", fp.total_energy_kwh));
    out.push_str(&format!("  Total water:    {:.3} m3\n", fp.total_water_m3));
    out.push_str(&format!("  Annual CO2:     {:.2} kg CO2e/yr\n", fp.annual_co2_kg));
    out.push_str(&format!(
        "  Score: {}/100  Grade: {} ({})\n",
        report.score.score_100, report.score.grade, report.score.label
    ));
    out
}

fn render_comparison(a: &ProjectRecord, b: &ProjectRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<16} {:>16} {:>16} {:>12}\n",
        "", a.name, b.name, "delta"
    ));
    out.push_str(&format!(
        "{:<16} {:>16.2} {:>16.2} {:>12.2}\n",
        "Total kgCO2e",
        a.total_co2_kg,
        b.total_co2_kg,
        b.total_co2_kg - a.total_co2_kg
    ));
    out.push_str(&format!(
        "{:<16} {:>16.3} {:>16.3} {:>12.3}\n",
        "Water m3",
        a.total_water_m3,
        b.total_water_m3,
        b.total_water_m3 - a.total_water_m3
    ));
    out.push_str(&format!(
        "{:<16} {:>16} {:>16} {:>12}\n",
        "Score",
        a.score_100,
        b.score_100,
        i32::from(b.score_100) - i32::from(a.score_100)
    ));
    out.push_str(&format!(
        "{:<16} {:>16} {:>16}\n",
        "Grade",
        a.score_grade.as_str(),
        b.score_grade.as_str()
    ));
    out
}

fn render_tables(tables: &ReferenceTables) -> String {
    let mut out = String::new();

    out.push_str("Hardware:\n");
    out.push_str(&format!(
        "  {:<14} {:<22} {:>9} {:>12} {:>10}\n",
        "id", "name", "kW", "embodied kg", "class"
    ));
    for (id, hw) in &tables.hardware {
        out.push_str(&format!(
            "  {:<14} {:<22} {:>9.3} {:>12.0} {:>10}\n",
            id,
            hw.name,
            hw.power_draw_kw,
            hw.embodied_kgco2e,
            hw.class.label()
        ));
    }

    out.push_str("\nRegions:\n");
    out.push_str(&format!("  {:<14} {:<22} {:>12}\n", "id", "name", "gCO2/kWh"));
    for (id, region) in &tables.regions {
        out.push_str(&format!(
            "  {:<14} {:<22} {:>12.0}\n",
            id, region.name, region.gco2_per_kwh
        ));
    }

    out.push_str("\nInfrastructure:\n");
    out.push_str(&format!("  {:<14} {:<22} {:>6}\n", "id", "name", "PUE"));
    for (id, infra) in &tables.infra {
        out.push_str(&format!(
            "  {:<14} {:<22} {:>6.2}\n",
            id, infra.name, infra.pue
        ));
    }

    out.push_str("\nAPI models:\n");
    out.push_str(&format!("  {:<14} {:<22} {:>14}\n", "id", "name", "gCO2/1k tok"));
    for (id, model) in &tables.api_models {
        out.push_str(&format!(
            "  {:<14} {:<22} {:>14.3}\n",
            id, model.name, model.gco2_per_1k_tokens
        ));
    }

    out
}
