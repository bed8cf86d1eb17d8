//! Mutable search node with reversible play/undo
//!
//! One `GameState` is built per solve and mutated in place for the whole
//! search. Every play is paired with an undo, either through an explicit
//! [`UndoToken`] or through the depth-indexed undo log used by the engines.

use super::cards::*;
use super::deal::Deal;
use super::hands::Hands;
use super::moves::MoveList;
use super::trick::{compute_winner, PlayedCard, Trick};
use super::types::*;

/// Multiplier folding the four hands into a position key
const KEY_MULTIPLIER: u64 = 0x9E3779B97F4A7C15;

/// A trick that completed on the play an undo token reverses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CompletedTrick {
    winner: Seat,
    plays: [PlayedCard; NUM_SEATS],
}

/// Everything needed to reverse one `play_card`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UndoToken {
    mover: Seat,
    completed: Option<CompletedTrick>,
}

impl UndoToken {
    const EMPTY: UndoToken = UndoToken {
        mover: Seat::North,
        completed: None,
    };

    /// Seat that played the card
    #[inline]
    pub fn mover(&self) -> Seat {
        self.mover
    }

    /// Winner of the trick the play completed, if any
    #[inline]
    pub fn trick_winner(&self) -> Option<Seat> {
        self.completed.map(|t| t.winner)
    }
}

pub struct GameState {
    hands: Hands,
    trick: Trick,
    tricks_won: [u8; 2],
    next: Seat,
    num_tricks: usize,
    trump: Trump,
    undo_log: Box<[UndoToken]>,
    depth: usize,
}

impl GameState {
    /// Start of play: the seat after the declarer leads
    pub fn new(deal: &Deal, trump: Trump, declarer: Seat) -> Self {
        Self::from_hands(*deal.hands(), trump, declarer.next())
    }

    /// Position with `leader` on lead to an empty trick
    pub fn from_hands(hands: Hands, trump: Trump, leader: Seat) -> Self {
        let num_tricks = hands.num_tricks();
        GameState {
            hands,
            trick: Trick::new(),
            tricks_won: [0; 2],
            next: leader,
            num_tricks,
            trump,
            undo_log: vec![UndoToken::EMPTY; num_tricks * NUM_SEATS].into_boxed_slice(),
            depth: 0,
        }
    }

    #[inline]
    pub fn hands(&self) -> &Hands {
        &self.hands
    }

    #[inline]
    pub fn trick(&self) -> &Trick {
        &self.trick
    }

    /// Seat to play next
    #[inline]
    pub fn next_seat(&self) -> Seat {
        self.next
    }

    #[inline]
    pub fn trump(&self) -> Trump {
        self.trump
    }

    #[inline]
    pub fn num_tricks(&self) -> usize {
        self.num_tricks
    }

    #[inline]
    pub fn tricks_won(&self, side: Partnership) -> usize {
        self.tricks_won[side.index()] as usize
    }

    #[inline]
    pub fn tricks_played(&self) -> usize {
        (self.tricks_won[0] + self.tricks_won[1]) as usize
    }

    /// Tricks not yet resolved, counting the one in progress
    #[inline]
    pub fn tricks_remaining(&self) -> usize {
        self.num_tricks - self.tricks_played()
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.tricks_played() == self.num_tricks
    }

    /// Legal plays for the seat to move, ascending
    #[inline]
    pub fn legal_moves(&self) -> Cards {
        self.hands[self.next].legal_plays(self.trick.led_suit())
    }

    #[inline]
    pub fn fill_legal_moves(&self, moves: &mut MoveList) {
        moves.fill(self.legal_moves());
    }

    /// Legal plays with equivalent cards collapsed.
    ///
    /// A card is dropped when the next higher card of its suit still in play
    /// (in any hand or on the table) belongs to the mover, so only the top of
    /// each run of touching cards survives.
    pub fn legal_moves_reduced(&self) -> Cards {
        let legal = self.legal_moves();
        let mut live = self.hands.all_cards();
        for p in self.trick.plays() {
            live.insert(p.card);
        }

        let mut kept = Cards::new();
        for suit in Suit::ALL {
            let moves = legal.suit_bits(suit);
            if moves == 0 {
                continue;
            }
            let live_bits = live.suit_bits(suit);
            let mut survivors = moves;
            let mut rest = moves;
            while rest != 0 {
                let bit = rest & rest.wrapping_neg();
                rest &= rest - 1;
                let above = live_bits & !((bit << 1) - 1);
                let next_higher = above & above.wrapping_neg();
                if next_higher & moves != 0 {
                    survivors &= !bit;
                }
            }
            kept = kept.union(Cards::from_suit_bits(suit, survivors));
        }
        kept
    }

    #[inline]
    pub fn fill_legal_moves_reduced(&self, moves: &mut MoveList) {
        moves.fill(self.legal_moves_reduced());
    }

    /// Play a card for the seat to move.
    ///
    /// Completing a trick scores it, clears it and hands the lead to its winner.
    pub fn play_card(&mut self, card: Card) -> UndoToken {
        let mover = self.next;
        debug_assert!(
            self.hands[mover].contains(card),
            "{} does not hold {}",
            mover,
            card
        );

        self.hands[mover].remove(card);
        self.trick.play(card, mover);

        let completed = self.trick.complete_plays().map(|&plays| {
            let winner = compute_winner(&plays, plays[0].card.suit(), self.trump);
            CompletedTrick { winner, plays }
        });

        match completed {
            Some(done) => {
                self.tricks_won[done.winner.partnership().index()] += 1;
                self.trick.reset();
                self.next = done.winner;
            }
            None => self.next = mover.next(),
        }

        UndoToken { mover, completed }
    }

    /// Exact inverse of the `play_card` that produced `token`
    pub fn undo_card(&mut self, card: Card, token: UndoToken) {
        match token.completed {
            Some(done) => {
                debug_assert_eq!(done.plays[NUM_SEATS - 1].card, card);
                self.tricks_won[done.winner.partnership().index()] -= 1;
                self.trick.restore(&done.plays[..NUM_SEATS - 1]);
            }
            None => {
                let undone = self.trick.undo_last();
                debug_assert_eq!(undone.map(|p| p.card), Some(card));
            }
        }
        self.hands[token.mover].insert(card);
        self.next = token.mover;
    }

    /// Play a card, recording its undo token in the log slot for the current
    /// depth. Returns that depth.
    #[inline]
    pub fn play_card_fast(&mut self, card: Card) -> usize {
        let depth = self.depth;
        self.undo_log[depth] = self.play_card(card);
        self.depth += 1;
        depth
    }

    /// Undo the play recorded at `depth`, which must be the latest one
    #[inline]
    pub fn undo_card_fast(&mut self, card: Card, depth: usize) {
        debug_assert_eq!(depth + 1, self.depth, "undo out of order");
        self.depth = depth;
        let token = self.undo_log[depth];
        self.undo_card(card, token);
    }

    /// Play `card`, run `f` on the resulting position, then undo
    #[inline]
    pub fn with_card<R>(&mut self, card: Card, f: impl FnOnce(&mut Self) -> R) -> R {
        let depth = self.play_card_fast(card);
        let result = f(self);
        self.undo_card_fast(card, depth);
        result
    }

    /// Final tally for `side` when one card is left in each hand and the
    /// last trick has not started
    pub fn solve_last_trick(&self, side: Partnership) -> usize {
        debug_assert!(self.trick.is_empty());
        debug_assert!(self.hands.sizes().iter().all(|&n| n == 1));

        let mut plays = [PlayedCard::new(Card::from_index(0), self.next); NUM_SEATS];
        let mut seat = self.next;
        for play in plays.iter_mut() {
            if let Some(card) = self.hands[seat].lowest() {
                *play = PlayedCard::new(card, seat);
            }
            seat = seat.next();
        }

        let winner = compute_winner(&plays, plays[0].card.suit(), self.trump);
        self.tricks_won(side) + usize::from(winner.partnership() == side)
    }

    /// Tricks `side` can take immediately from the hand on lead.
    ///
    /// Counts, per suit, the run of top remaining cards held by the leader.
    /// Side suits count nothing while the opponents hold a trump. Zero unless
    /// `side` is on lead to an empty trick.
    ///
    /// Partner's winners are left out: opposite SA SK the SQ SJ fall under
    /// them, and without an entry partner's winners are stranded anyway.
    pub fn count_quick_tricks(&self, side: Partnership) -> usize {
        let leader = self.next;
        if !self.trick.is_empty() || leader.partnership() != side {
            return 0;
        }

        let live = self.hands.all_cards();
        let mine = self.hands[leader];
        let opponents = self.hands.partnership_cards(side.opponents());
        let opponents_ruff = self.trump.suit().is_some_and(|t| opponents.has_suit(t));

        let mut total = 0;
        for suit in Suit::ALL {
            if opponents_ruff && !self.trump.is_trump(suit) {
                continue;
            }
            let held = mine.suit_bits(suit);
            let mut rest = live.suit_bits(suit);
            while rest != 0 {
                let top = 1u16 << (15 - rest.leading_zeros());
                if held & top == 0 {
                    break;
                }
                total += 1;
                rest &= !top;
            }
        }
        total.min(self.tricks_remaining())
    }

    /// 64-bit fingerprint of the hands, the seat to move and the trick size
    pub fn position_key(&self) -> u64 {
        let mut key = self.hands[Seat::North].bits();
        for seat in [Seat::East, Seat::South, Seat::West] {
            key = key
                .wrapping_mul(KEY_MULTIPLIER)
                .wrapping_add(self.hands[seat].bits());
        }
        key = key.wrapping_mul(31).wrapping_add(self.next.index() as u64);
        key.wrapping_mul(31).wrapping_add(self.trick.len() as u64)
    }
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("hands", &self.hands)
            .field("trick", &self.trick)
            .field("tricks_won", &self.tricks_won)
            .field("next", &self.next)
            .field("trump", &self.trump)
            .field("depth", &self.depth)
            .finish()
    }
}
