//! Four hands representation - allocation-free
//!
//! Uses a fixed-size array of Cards (4 × u64), no heap allocation.

use super::cards::*;
use super::error::{Error, Result};
use super::types::*;

/// Four hands, one per seat - no heap allocation
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hands {
    hands: [Cards; NUM_SEATS],
}

impl Hands {
    /// Create empty hands
    #[inline]
    pub const fn new() -> Self {
        Hands {
            hands: [Cards::new(); NUM_SEATS],
        }
    }

    #[inline]
    pub const fn from_cards(hands: [Cards; NUM_SEATS]) -> Self {
        Hands { hands }
    }

    /// Get hand for a seat
    #[inline]
    pub const fn hand(&self, seat: Seat) -> Cards {
        self.hands[seat.index()]
    }

    /// Get all cards across all hands
    #[inline]
    pub const fn all_cards(&self) -> Cards {
        self.hands[0]
            .union(self.hands[1])
            .union(self.hands[2])
            .union(self.hands[3])
    }

    /// Get cards held by one side
    #[inline]
    pub const fn partnership_cards(&self, side: Partnership) -> Cards {
        let [a, b] = side.seats();
        self.hands[a.index()].union(self.hands[b.index()])
    }

    /// Get number of tricks (cards in the longest hand)
    #[inline]
    pub fn num_tricks(&self) -> usize {
        self.hands.iter().map(Cards::len).max().unwrap_or(0)
    }

    /// Card counts per seat
    pub fn sizes(&self) -> [usize; NUM_SEATS] {
        [
            self.hands[0].len(),
            self.hands[1].len(),
            self.hands[2].len(),
            self.hands[3].len(),
        ]
    }

    /// Seat holding a card, if any
    pub fn owner(&self, card: Card) -> Option<Seat> {
        Seat::ALL
            .into_iter()
            .find(|seat| self.hands[seat.index()].contains(card))
    }

    /// Check that no card is held by two seats
    pub fn check_disjoint(&self) -> Result<()> {
        let mut seen = Cards::new();
        for hand in &self.hands {
            let overlap = seen.intersect(*hand);
            if let Some(card) = overlap.lowest() {
                return Err(Error::DuplicateCard(card));
            }
            seen = seen.union(*hand);
        }
        Ok(())
    }

    /// Parse from PBN-style deal string
    /// Format: "N:AKQT3.J6.KJ42.95 652.AK42.AQ87.T4 J74.QT95.T.AK863 98.873.9653.QJ72"
    /// Hands follow clockwise from the first seat (North when omitted).
    pub fn from_pbn(s: &str) -> Result<Self> {
        let mut hands = Hands::new();
        let s = s.trim();

        let (start_seat, rest) = match s.split_once(':') {
            Some((seat, rest)) => (seat.parse::<Seat>()?, rest),
            None => (Seat::North, s),
        };

        let hand_strs: Vec<&str> = rest.split_whitespace().collect();
        if hand_strs.len() != NUM_SEATS {
            return Err(Error::MalformedDeal(s.to_string()));
        }

        let mut seat = start_seat;
        for hand_str in hand_strs {
            hands[seat] = parse_hand(hand_str)?;
            seat = seat.next();
        }

        Ok(hands)
    }
}

impl std::ops::Index<Seat> for Hands {
    type Output = Cards;

    #[inline]
    fn index(&self, seat: Seat) -> &Self::Output {
        &self.hands[seat.index()]
    }
}

impl std::ops::IndexMut<Seat> for Hands {
    #[inline]
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        &mut self.hands[seat.index()]
    }
}

impl std::fmt::Debug for Hands {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for seat in Seat::ALL {
            write!(f, "{}: {} ", seat.letter(), self[seat])?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Hands {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for seat in Seat::ALL {
            writeln!(f, "  {}: {}", seat.letter(), self[seat])?;
        }
        Ok(())
    }
}

/// Parse a single hand from PBN format (SHDC separated by dots)
fn parse_hand(s: &str) -> Result<Cards> {
    let mut cards = Cards::new();
    let suits: Vec<&str> = s.split('.').collect();
    if suits.len() != NUM_SUITS {
        return Err(Error::MalformedHand(s.to_string()));
    }

    for (suit, suit_str) in Suit::ALL.into_iter().zip(suits) {
        for c in suit_str.chars() {
            if c == '-' {
                continue; // Void marker
            }
            let card = Card::new(suit, Rank::from_char(c)?);
            if cards.contains(card) {
                return Err(Error::DuplicateCard(card));
            }
            cards.insert(card);
        }
    }

    Ok(cards)
}
