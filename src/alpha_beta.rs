//! Alpha-beta search with transposition table, quick-trick bounds and
//! move ordering
//!
//! Values are absolute trick counts for the maximising side. Each node tries,
//! in order: terminal, value-bound cutoff, last-trick evaluation, quick-trick
//! bounds, table lookup, then recursion over reduced moves.
//!
//! By default the root is solved with a sequence of zero-width windows that
//! narrow `[lower, upper]` until they meet. The table is kept between passes,
//! so each pass reuses the bounds of the one before.

use super::cache::{Bound, TableStats, TranspositionTable};
use super::deal::Deal;
use super::moves::MoveList;
use super::solver::Solver;
use super::state::GameState;
use super::types::*;
use log::{debug, trace};

/// Engine switches; none of them may change the solved value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub transposition: bool,
    pub quick_tricks: bool,
    pub move_ordering: bool,
    /// Solve the root with zero-width windows instead of one full window
    pub zero_window: bool,
    /// Table holds 2^table_bits slots
    pub table_bits: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            transposition: true,
            quick_tricks: true,
            move_ordering: true,
            zero_window: true,
            table_bits: 20,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub table: TableStats,
}

pub struct AlphaBetaSolver {
    config: SearchConfig,
    table: TranspositionTable,
    nodes: u64,
}

impl AlphaBetaSolver {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        AlphaBetaSolver {
            config,
            table: TranspositionTable::new(config.table_bits),
            nodes: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Counters from the last solve
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            nodes: self.nodes,
            table: self.table.stats(),
        }
    }

    /// Narrow the root value with null-window passes until the bounds meet
    fn search_zero_window(&mut self, state: &mut GameState, side: Partnership) -> usize {
        let mut lower = 0;
        let mut upper = state.num_tricks();
        let mut guess = upper / 2;
        let mut passes = 0;

        while lower < upper {
            let beta = if guess == lower { guess + 1 } else { guess };
            guess = self.search(state, side, beta - 1, beta);
            if guess < beta {
                upper = guess;
            } else {
                lower = guess;
            }
            passes += 1;
        }

        trace!("zero-window search settled at {} after {} passes", lower, passes);
        lower
    }

    fn search(
        &mut self,
        state: &mut GameState,
        side: Partnership,
        mut alpha: usize,
        mut beta: usize,
    ) -> usize {
        self.nodes += 1;

        let won = state.tricks_won(side);
        if state.is_terminal() {
            return won;
        }

        let remaining = state.tricks_remaining();
        if won + remaining <= alpha {
            return won + remaining;
        }
        if won >= beta {
            return won;
        }

        let at_boundary = state.trick().is_empty();
        if at_boundary && remaining == 1 {
            return state.solve_last_trick(side);
        }

        let mover = state.next_seat().partnership();
        let maximizing = mover == side;

        if self.config.quick_tricks && at_boundary && remaining >= 3 {
            let quick = state.count_quick_tricks(mover);
            if maximizing {
                let lower = won + quick;
                if lower >= beta {
                    return lower;
                }
                alpha = alpha.max(lower);
            } else {
                let upper = won + remaining - quick;
                if upper <= alpha {
                    return upper;
                }
                beta = beta.min(upper);
            }
        }

        let key = if self.config.transposition && at_boundary {
            let key = state.position_key();
            if let Some(bounds) = self.table.probe(key, state.hands(), state.next_seat()) {
                let lower = won + bounds.lower as usize;
                let upper = won + bounds.upper as usize;
                if lower >= beta {
                    return lower;
                }
                if upper <= alpha {
                    return upper;
                }
                if bounds.is_exact() {
                    return lower;
                }
                alpha = alpha.max(lower);
                beta = beta.min(upper);
            }
            Some(key)
        } else {
            None
        };

        let entry_alpha = alpha;
        let entry_beta = beta;

        let mut moves = MoveList::new();
        state.fill_legal_moves_reduced(&mut moves);
        if self.config.move_ordering {
            moves.order(state.trick(), state.trump(), state.next_seat());
        }

        let mut best = if maximizing { 0 } else { state.num_tricks() };
        for &card in &moves {
            let value = state.with_card(card, |s| self.search(s, side, alpha, beta));
            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }
            if alpha >= beta {
                break;
            }
        }

        if let Some(key) = key {
            let bound = if best <= entry_alpha {
                Bound::Upper
            } else if best >= entry_beta {
                Bound::Lower
            } else {
                Bound::Exact
            };
            self.table.store(
                key,
                state.hands(),
                state.next_seat(),
                remaining as u8,
                best.saturating_sub(won) as u8,
                bound,
            );
        }

        best
    }
}

impl Default for AlphaBetaSolver {
    fn default() -> Self {
        AlphaBetaSolver::new()
    }
}

impl Solver for AlphaBetaSolver {
    fn solve_for(&mut self, deal: &Deal, trump: Trump, declarer: Seat, side: Partnership) -> usize {
        let mut state = GameState::new(deal, trump, declarer);
        self.table.clear();
        self.nodes = 0;

        let tricks = if self.config.zero_window {
            self.search_zero_window(&mut state, side)
        } else {
            self.search(&mut state, side, 0, deal.num_tricks())
        };
        debug!(
            "alphabeta {} by {}: {} takes {} of {} ({} nodes, {} table hits)",
            trump,
            declarer,
            side,
            tricks,
            deal.num_tricks(),
            self.nodes,
            self.table.stats().hits
        );
        tricks
    }

    fn name(&self) -> &'static str {
        "alphabeta"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDGAME: &str = "N:AK... .AK.. QJ... .QJ..";

    fn configs() -> Vec<SearchConfig> {
        let full = SearchConfig::default();
        vec![
            full,
            SearchConfig {
                transposition: false,
                ..full
            },
            SearchConfig {
                quick_tricks: false,
                ..full
            },
            SearchConfig {
                move_ordering: false,
                ..full
            },
            SearchConfig {
                zero_window: false,
                ..full
            },
            SearchConfig {
                table_bits: 2,
                ..full
            },
        ]
    }

    #[test]
    fn test_endgames() {
        let deal = Deal::from_pbn(ENDGAME).unwrap();
        let mut solver = AlphaBetaSolver::new();
        assert_eq!(solver.solve(&deal, Trump::NoTrump, Seat::North), 0);
        assert_eq!(solver.solve(&deal, Trump::Suit(Suit::Spades), Seat::North), 2);
    }

    #[test]
    fn test_all_top_cards() {
        let deal = Deal::from_pbn("N:AK.AK.AK.AK QJ.QJ.QJ.QJ 32.32.32.32 T9.T9.T9.T9").unwrap();
        for config in configs() {
            let mut solver = AlphaBetaSolver::with_config(config);
            assert_eq!(solver.solve(&deal, Trump::NoTrump, Seat::South), 8);
            assert_eq!(
                solver.solve_for(&deal, Trump::NoTrump, Seat::South, Partnership::EastWest),
                0
            );
        }
    }

    #[test]
    fn test_config_does_not_change_result() {
        let deal = Deal::from_pbn("N:AQ.K2.3. K4.AQ.2. J2.43.A. 53.J5.K.").unwrap();
        let mut reference = AlphaBetaSolver::new();
        let mut solvers: Vec<_> = configs()
            .into_iter()
            .map(AlphaBetaSolver::with_config)
            .collect();
        for trump in Trump::ALL {
            for declarer in Seat::ALL {
                let expected = reference.solve(&deal, trump, declarer);
                for solver in solvers.iter_mut() {
                    let got = solver.solve(&deal, trump, declarer);
                    assert_eq!(
                        got,
                        expected,
                        "{:?} {} by {}",
                        solver.config(),
                        trump,
                        declarer
                    );
                }
            }
        }
    }

    #[test]
    fn test_stats_reset_per_solve() {
        let deal = Deal::from_pbn("N:AQ.K2.3. K4.AQ.2. J2.43.A. 53.J5.K.").unwrap();
        let mut solver = AlphaBetaSolver::new();
        solver.solve(&deal, Trump::NoTrump, Seat::North);
        let first = solver.stats();
        assert!(first.nodes > 0);
        assert!(first.table.probes > 0);

        solver.solve(&deal, Trump::NoTrump, Seat::North);
        assert_eq!(solver.stats(), first);
    }
}
