//! Exhaustive minimax, kept as a correctness oracle

use super::deal::Deal;
use super::moves::MoveList;
use super::solver::Solver;
use super::state::GameState;
use super::types::*;
use log::debug;

/// Plain minimax with no memoization.
///
/// Only the free cutoffs apply: a side that already reached its ceiling
/// (maximiser) or floor (minimiser) stops trying siblings.
#[derive(Clone, Debug)]
pub struct BruteForceSolver {
    reduce: bool,
    nodes: u64,
}

impl BruteForceSolver {
    /// Search over reduced moves (equivalent cards collapsed)
    pub fn new() -> Self {
        BruteForceSolver {
            reduce: true,
            nodes: 0,
        }
    }

    /// Search every legal card, equivalent or not
    pub fn unreduced() -> Self {
        BruteForceSolver {
            reduce: false,
            nodes: 0,
        }
    }

    /// Nodes visited by the last solve
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn search(&mut self, state: &mut GameState, side: Partnership) -> usize {
        self.nodes += 1;

        let won = state.tricks_won(side);
        if state.is_terminal() {
            return won;
        }
        if state.trick().is_empty() && state.tricks_remaining() == 1 {
            return state.solve_last_trick(side);
        }

        let floor = won;
        let ceiling = won + state.tricks_remaining();
        let maximizing = state.next_seat().partnership() == side;

        let mut moves = MoveList::new();
        if self.reduce {
            state.fill_legal_moves_reduced(&mut moves);
        } else {
            state.fill_legal_moves(&mut moves);
        }

        let mut best = if maximizing { floor } else { ceiling };
        for &card in &moves {
            let value = state.with_card(card, |s| self.search(s, side));
            if maximizing {
                best = best.max(value);
                if best == ceiling {
                    break;
                }
            } else {
                best = best.min(value);
                if best == floor {
                    break;
                }
            }
        }
        best
    }
}

impl Default for BruteForceSolver {
    fn default() -> Self {
        BruteForceSolver::new()
    }
}

impl Solver for BruteForceSolver {
    fn solve_for(&mut self, deal: &Deal, trump: Trump, declarer: Seat, side: Partnership) -> usize {
        let mut state = GameState::new(deal, trump, declarer);
        self.nodes = 0;
        let tricks = self.search(&mut state, side);
        debug!(
            "bruteforce {} by {}: {} takes {} of {} ({} nodes)",
            trump,
            declarer,
            side,
            tricks,
            deal.num_tricks(),
            self.nodes
        );
        tricks
    }

    fn name(&self) -> &'static str {
        "bruteforce"
    }
}
