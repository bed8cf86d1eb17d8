//! Bridge double-dummy analyzer
//!
//! Computes how many tricks a partnership takes when all four hands are
//! known and every seat plays perfectly.
//!
//! Two engines implement the same [`Solver`] contract:
//! - [`AlphaBetaSolver`]: alpha-beta search with a transposition table,
//!   quick-trick bounds and move ordering
//! - [`BruteForceSolver`]: plain minimax, kept as an oracle
//!
//! Both run on a single [`GameState`] mutated in place with reversible plays.
//!
//! # Example
//!
//! ```
//! use bridge_analyzer::{AlphaBetaSolver, Deal, Seat, Solver, Suit, Trump};
//!
//! let deal = Deal::from_pbn("N:AK... .AK.. QJ... .QJ..").unwrap();
//! let mut solver = AlphaBetaSolver::new();
//!
//! // North declares, East leads
//! assert_eq!(solver.solve(&deal, Trump::NoTrump, Seat::North), 0);
//! assert_eq!(solver.solve(&deal, Trump::Suit(Suit::Spades), Seat::North), 2);
//! ```
//!
//! # Example using bridge-types
//!
//! ```
//! use bridge_analyzer::{Deal, Seat, Solver, SolverKind, Trump};
//!
//! let external = bridge_types::Deal::from_pbn(
//!     "N:AKQJ.AKQ.AKQ.AKQ T987.JT9.JT9.JT9 6543.876.876.876 2.5432.5432.5432",
//! )
//! .unwrap();
//! let deal = Deal::from_bridge_deal(&external).unwrap();
//!
//! let mut solver = SolverKind::AlphaBeta.create();
//! assert_eq!(solver.declarer_tricks(&deal, Trump::NoTrump, Seat::South), 13);
//! ```

mod alpha_beta;
mod brute_force;
mod cache;
pub mod cards;
mod convert;
mod deal;
mod error;
mod hands;
mod moves;
mod solver;
mod state;
mod trick;
pub mod types;

pub use alpha_beta::{AlphaBetaSolver, SearchConfig, SearchStats};
pub use brute_force::BruteForceSolver;
pub use cache::{Bound, Bounds, TableStats, TranspositionTable};
pub use cards::{Card, Cards};
pub use convert::{direction_to_seat, seat_to_direction};
pub use deal::{Deal, Vulnerability};
pub use error::{Error, Result};
pub use hands::Hands;
pub use moves::{move_score, MoveList};
pub use solver::{Solver, SolverKind, TrickTable};
pub use state::{GameState, UndoToken};
pub use trick::{beats, compute_winner, PlayedCard, Trick};
pub use types::{Partnership, Rank, Seat, Suit, Trump};
pub use types::{NUM_RANKS, NUM_SEATS, NUM_SUITS, TOTAL_CARDS, TOTAL_TRICKS};

#[cfg(test)]
mod tests;
