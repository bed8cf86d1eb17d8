//! dd-solve - double-dummy analysis of a single deal
//!
//! Solves a PBN deal or a randomly dealt board and prints the declarer's
//! tricks for every declarer and strain, or for the one requested.
//!
//! Usage: dd-solve --pbn "N:AKQT3.J6.KJ42.95 652.AK42.AQ87.T4 J74.QT95.T.AK863 98.873.9653.QJ72"
//!        dd-solve --random --cards 8 --seed 42 --trump NT

use anyhow::{bail, Context};
use bridge_analyzer::{
    AlphaBetaSolver, Deal, SearchConfig, Seat, Solver, SolverKind, TrickTable, Trump,
};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "dd-solve")]
#[command(about = "Double-dummy solver for a single deal")]
#[command(version)]
struct Args {
    /// Deal in PBN notation
    #[arg(short = 'p', long = "pbn", conflicts_with = "random")]
    pbn: Option<String>,

    /// Solve a randomly dealt board instead
    #[arg(short = 'r', long = "random")]
    random: bool,

    /// Cards per hand for random deals
    #[arg(short = 'c', long = "cards", default_value_t = 13)]
    cards: usize,

    /// Seed for random deals
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Strain: S, H, D, C or NT (default: all)
    #[arg(short = 't', long = "trump")]
    trump: Option<Trump>,

    /// Declaring seat: N, E, S or W (default: all)
    #[arg(short = 'd', long = "declarer")]
    declarer: Option<Seat>,

    /// Engine: alphabeta or bruteforce
    #[arg(short = 's', long = "solver", default_value = "alphabeta")]
    solver: SolverKind,

    /// Disable the transposition table
    #[arg(long = "no-tt")]
    no_tt: bool,

    /// Disable quick-trick bounds
    #[arg(long = "no-quick-tricks")]
    no_quick_tricks: bool,

    /// Verbose output - log every solve
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let deal = load_deal(&args)?;
    let mut solver = build_solver(&args);

    println!("{}", deal);

    let start = Instant::now();
    if args.trump.is_none() && args.declarer.is_none() {
        let table = TrickTable::solve(solver.as_mut(), &deal);
        println!("{}", table);
        println!("DoubleDummyTricks \"{}\"", table.encode_ddt());
    } else {
        let declarers = args.declarer.map_or(Seat::ALL.to_vec(), |d| vec![d]);
        let strains = args.trump.map_or(Trump::ALL.to_vec(), |t| vec![t]);
        for &declarer in &declarers {
            for &trump in &strains {
                let tricks = solver.declarer_tricks(&deal, trump, declarer);
                println!("{} declaring {}: {} tricks", declarer, trump, tricks);
            }
        }
    }
    log::info!("solved with {} in {:.2?}", solver.name(), start.elapsed());

    Ok(())
}

fn load_deal(args: &Args) -> anyhow::Result<Deal> {
    if let Some(pbn) = &args.pbn {
        return Deal::from_pbn(pbn).with_context(|| format!("parsing deal '{}'", pbn));
    }
    if !args.random {
        bail!("either --pbn or --random is required");
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(Deal::random(&mut rng, args.cards)?)
}

fn build_solver(args: &Args) -> Box<dyn Solver> {
    match args.solver {
        SolverKind::AlphaBeta => {
            let config = SearchConfig {
                transposition: !args.no_tt,
                quick_tricks: !args.no_quick_tricks,
                ..SearchConfig::default()
            };
            Box::new(AlphaBetaSolver::with_config(config))
        }
        kind => {
            if args.no_tt || args.no_quick_tricks {
                log::warn!("search switches only apply to the alphabeta solver");
            }
            kind.create()
        }
    }
}
