// src/bin/linkrank.rs
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::Colorize;

use linkrank::loader;
use linkrank::rank::{aggregate, distribution, stochastic};
use linkrank::reporting;

#[derive(Parser)]
#[command(name = "linkrank", version, about = "Estimates page ranks from link information")]
struct Cli {
    /// Textfile of links among web pages as URL tuples; stdin when omitted
    #[arg(value_name = "DATAFILE")]
    datafile: Option<PathBuf>,

    /// Selected page rank algorithm
    #[arg(long, short, value_enum, default_value_t = Method::Stochastic)]
    method: Method,

    /// Number of repetitions (stochastic only)
    #[arg(long, short, default_value_t = 1_000_000)]
    repeats: usize,

    /// Number of steps a walker takes
    #[arg(long, short, default_value_t = 100)]
    steps: usize,

    /// Number of results shown
    #[arg(long, short, default_value_t = 20)]
    number: usize,

    /// Seed for reproducible stochastic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format for the ranking
    #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Method {
    Stochastic,
    Distribution,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Terminal,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let graph = match &cli.datafile {
        Some(path) => loader::load_from_path(path)?,
        None => loader::load_from_stdin()?,
    };

    reporting::print_stats(&graph);

    let start = Instant::now();
    let ranking = match cli.method {
        Method::Stochastic => {
            let params = stochastic::WalkParams {
                repeats: cli.repeats,
                steps: cli.steps,
                seed: cli.seed,
            };
            stochastic::rank(&graph, &params)?
        }
        Method::Distribution => distribution::rank(&graph, cli.steps)?,
    };
    let elapsed = start.elapsed();

    let top = aggregate::top_n(&ranking, cli.number)?;

    eprintln!("{}", format!("Top {} pages:", cli.number).cyan());
    match cli.format {
        OutputFormat::Terminal => print!("{}", reporting::format_ranking(&top)?),
        OutputFormat::Json => println!("{}", reporting::format_ranking_json(&top)?),
    }
    eprintln!("Calculation took {:.2} seconds.", elapsed.as_secs_f64());

    Ok(())
}
