//! `u-passgen`: generate passwords from the terminal.
//!
//! Usage:
//!   u-passgen generate --count 5
//!   u-passgen generate --length 16 --seed 42 --stats
//!   u-passgen session

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use u_passgen::{EvolverConfig, PasswordEvolver, Session};

#[derive(Parser)]
#[command(name = "u-passgen")]
#[command(about = "Generate strong passwords with a genetic algorithm", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print freshly evolved passwords, one per line
    Generate {
        #[command(flatten)]
        evolver: EvolverArgs,

        /// Number of passwords to print
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Also print strength and generations used
        #[arg(long)]
        stats: bool,
    },
    /// Interactive generate-and-save session on stdin
    Session {
        #[command(flatten)]
        evolver: EvolverArgs,
    },
}

#[derive(Args)]
struct EvolverArgs {
    /// Password length
    #[arg(short, long, default_value_t = 12)]
    length: usize,

    /// Candidates per generation
    #[arg(long, default_value_t = 100)]
    population: usize,

    /// Generation budget
    #[arg(long, default_value_t = 50)]
    generations: usize,

    /// Crossover probability per pair
    #[arg(long, default_value_t = 0.5)]
    crossover_rate: f64,

    /// Mutation probability per candidate
    #[arg(long, default_value_t = 0.2)]
    mutation_rate: f64,

    /// Replacement probability per character of a mutated candidate
    #[arg(long, default_value_t = 0.3)]
    gene_rate: f64,

    /// Candidates compared per tournament
    #[arg(long, default_value_t = 2)]
    tournament_size: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

impl EvolverArgs {
    fn build(&self) -> Result<PasswordEvolver> {
        let mut config = EvolverConfig::default()
            .with_length(self.length)
            .with_population_size(self.population)
            .with_max_generations(self.generations)
            .with_crossover_rate(self.crossover_rate)
            .with_mutation_rate(self.mutation_rate)
            .with_gene_mutation_rate(self.gene_rate)
            .with_tournament_size(self.tournament_size);
        config.seed = self.seed;
        PasswordEvolver::new(config).context("invalid generator settings")
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            evolver,
            count,
            stats,
        } => generate(&evolver, count, stats),
        Command::Session { evolver } => {
            let session = Session::new(evolver.build()?);
            let stdin = io::stdin();
            run_session(session, stdin.lock(), io::stdout().lock())
        }
    }
}

fn generate(args: &EvolverArgs, count: usize, stats: bool) -> Result<()> {
    let base = args.build()?;
    for i in 0..count {
        // Keep seeded batches reproducible but distinct.
        let evolver = match args.seed {
            Some(seed) if i > 0 => {
                let config = base.config().clone().with_seed(seed.wrapping_add(i as u64));
                PasswordEvolver::new(config)?
            }
            _ => base.clone(),
        };
        let evolution = evolver.run()?;
        if stats {
            println!(
                "{}\tstrength={}/5\tgenerations={}",
                evolution.password, evolution.strength, evolution.generations
            );
        } else {
            println!("{}", evolution.password);
        }
    }
    Ok(())
}

const HELP: &str = "commands: generate | save <purpose> | list | help | quit";

fn run_session<R: BufRead, W: Write>(mut session: Session, input: R, mut out: W) -> Result<()> {
    writeln!(out, "{HELP}")?;
    prompt(&mut out)?;
    for line in input.lines() {
        let line = line?;
        let (cmd, rest) = match line.trim().split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest),
            None => (line.trim(), ""),
        };
        match cmd {
            "" => {}
            "generate" | "g" => {
                let password = session.generate()?;
                writeln!(out, "{password}")?;
            }
            "save" | "s" => match session.save(rest) {
                Ok(entry) => writeln!(out, "saved password for {}", entry.purpose)?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            "list" | "l" => {
                if session.vault().is_empty() {
                    writeln!(out, "(no saved passwords)")?;
                }
                for (i, entry) in session.vault().iter().enumerate() {
                    writeln!(out, "{:>3}  {:<24} {}", i + 1, entry.purpose, entry.password)?;
                }
            }
            "help" | "h" | "?" => writeln!(out, "{HELP}")?,
            "quit" | "q" | "exit" => break,
            other => writeln!(out, "unknown command `{other}`; {HELP}")?,
        }
        prompt(&mut out)?;
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
