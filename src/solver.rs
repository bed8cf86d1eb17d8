//! The solver contract and things built on top of it

use super::alpha_beta::AlphaBetaSolver;
use super::brute_force::BruteForceSolver;
use super::deal::Deal;
use super::error::{Error, Result};
use super::types::*;
use std::fmt;
use std::str::FromStr;

/// Double-dummy solver: tricks one side takes under best play by all four
/// seats, with the seat after `declarer` on lead.
///
/// Engines take `&mut self` for their private scratch state, but the result
/// depends only on the arguments.
pub trait Solver {
    /// Tricks captured by `side`
    fn solve_for(&mut self, deal: &Deal, trump: Trump, declarer: Seat, side: Partnership) -> usize;

    /// Tricks captured by North-South
    fn solve(&mut self, deal: &Deal, trump: Trump, declarer: Seat) -> usize {
        self.solve_for(deal, trump, declarer, Partnership::NorthSouth)
    }

    /// Tricks captured by the declarer's side
    fn declarer_tricks(&mut self, deal: &Deal, trump: Trump, declarer: Seat) -> usize {
        self.solve_for(deal, trump, declarer, declarer.partnership())
    }

    fn name(&self) -> &'static str;
}

/// Available engines, selectable by name
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SolverKind {
    #[default]
    AlphaBeta,
    BruteForce,
}

impl SolverKind {
    pub fn create(self) -> Box<dyn Solver> {
        match self {
            SolverKind::AlphaBeta => Box::new(AlphaBetaSolver::new()),
            SolverKind::BruteForce => Box::new(BruteForceSolver::new()),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverKind::AlphaBeta => write!(f, "alphabeta"),
            SolverKind::BruteForce => write!(f, "bruteforce"),
        }
    }
}

impl FromStr for SolverKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alphabeta" | "alpha-beta" | "ab" => Ok(SolverKind::AlphaBeta),
            "bruteforce" | "brute-force" | "bf" => Ok(SolverKind::BruteForce),
            _ => Err(Error::UnknownSolver(s.to_string())),
        }
    }
}

/// Declarer tricks for every declarer and strain
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrickTable {
    /// tricks[declarer][trump index]
    tricks: [[u8; 5]; NUM_SEATS],
}

impl TrickTable {
    pub fn solve(solver: &mut dyn Solver, deal: &Deal) -> Self {
        let mut tricks = [[0u8; 5]; NUM_SEATS];
        for declarer in Seat::ALL {
            for trump in Trump::ALL {
                tricks[declarer.index()][trump.index()] =
                    solver.declarer_tricks(deal, trump, declarer) as u8;
            }
        }
        TrickTable { tricks }
    }

    #[inline]
    pub fn get(&self, declarer: Seat, trump: Trump) -> usize {
        self.tricks[declarer.index()][trump.index()] as usize
    }

    /// Compact DoubleDummyTricks encoding: one hex digit per entry, declarers
    /// N, S, E, W and strains NT, S, H, D, C
    pub fn encode_ddt(&self) -> String {
        const DECLARERS: [Seat; NUM_SEATS] = [Seat::North, Seat::South, Seat::East, Seat::West];
        const STRAINS: [Trump; 5] = [
            Trump::NoTrump,
            Trump::Suit(Suit::Spades),
            Trump::Suit(Suit::Hearts),
            Trump::Suit(Suit::Diamonds),
            Trump::Suit(Suit::Clubs),
        ];
        DECLARERS
            .iter()
            .flat_map(|&declarer| STRAINS.into_iter().map(move |trump| self.get(declarer, trump)))
            .map(|tricks| char::from_digit(tricks as u32, 16).unwrap_or('?'))
            .collect()
    }
}

impl fmt::Display for TrickTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "     ")?;
        for trump in Trump::ALL {
            write!(f, "{:>4}", trump.to_string())?;
        }
        writeln!(f)?;
        for declarer in Seat::ALL {
            write!(f, "{:<5}", declarer.name())?;
            for trump in Trump::ALL {
                write!(f, "{:>4}", self.get(declarer, trump))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
