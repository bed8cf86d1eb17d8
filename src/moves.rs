//! Fixed-capacity move buffer and cheap move ordering

use super::cards::{Card, Cards};
use super::trick::{beats, Trick};
use super::types::*;

/// Up to 13 candidate moves, kept on the stack
#[derive(Clone, Copy)]
pub struct MoveList {
    cards: [Card; TOTAL_TRICKS],
    len: usize,
}

impl MoveList {
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            cards: [Card::from_index(0); TOTAL_TRICKS],
            len: 0,
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[inline]
    pub fn push(&mut self, card: Card) {
        debug_assert!(self.len < TOTAL_TRICKS, "move list overflow");
        self.cards[self.len] = card;
        self.len += 1;
    }

    /// Replace the contents with a card set, ascending
    #[inline]
    pub fn fill(&mut self, cards: Cards) {
        self.clear();
        for card in cards {
            self.push(card);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards[..self.len]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.as_slice().iter()
    }

    /// Sort so the likeliest cutoff comes first, judged by what `mover`
    /// wants from the current trick.
    ///
    /// Leads go strongest first. When following, a trick partner already
    /// holds gets the lowest card, a trick that can be taken gets a winner
    /// (the cheapest one in fourth seat), and everything else goes low.
    pub fn order(&mut self, trick: &Trick, trump: Trump, mover: Seat) {
        let moves = &mut self.cards[..self.len];
        let (led, winning) = match (trick.led_suit(), trick.winning_play(trump)) {
            (Some(led), Some(winning)) => (led, winning),
            _ => {
                moves.sort_unstable_by_key(|&c| std::cmp::Reverse(move_score(c, None, trump)));
                return;
            }
        };

        let partner_winning = winning.seat == mover.partner();
        let last_to_play = trick.len() == NUM_SEATS - 1;
        moves.sort_unstable_by_key(|&c| {
            let score = move_score(c, Some(led), trump);
            if partner_winning {
                score
            } else if beats(c, winning.card, led, trump) {
                if last_to_play {
                    score
                } else {
                    NUM_CARD_SCORES - score
                }
            } else {
                2 * NUM_CARD_SCORES + score
            }
        });
    }
}

/// Upper bound on `move_score`, used to stack ordering tiers
const NUM_CARD_SCORES: usize = 3 * NUM_RANKS;

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Trumps above led-suit cards above everything else, then rank
#[inline]
pub fn move_score(card: Card, led: Option<Suit>, trump: Trump) -> usize {
    let rank = card.rank().index();
    if trump.is_trump(card.suit()) {
        rank + 2 * NUM_RANKS
    } else if led == Some(card.suit()) {
        rank + NUM_RANKS
    } else {
        rank
    }
}
