//! Cards bitboard representation
//!
//! Uses a 52-bit integer where each bit represents a card.
//! Bit index = suit * 13 + rank, so each suit owns a 13-bit window and
//! ranks ascend within it: bit 0 = Spade 2, bit 12 = Spade Ace,
//! bit 13 = Heart 2, ..., bit 51 = Club Ace.

use super::types::*;
use std::fmt;

/// Mask of one suit window before shifting
pub const SUIT_MASK: u64 = 0x1FFF;

/// Mask of every valid card bit
pub const DECK_MASK: u64 = (1u64 << TOTAL_CARDS) - 1;

/// Get mask for a suit (13 bits)
#[inline]
pub const fn mask_of(suit: Suit) -> u64 {
    SUIT_MASK << (suit.index() * NUM_RANKS)
}

/// One playing card, identified by its bit index (0-51)
///
/// Copyable and compared by index, so the 52 values act as interned singletons.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Every card in ascending bit order
    pub const ALL: [Card; TOTAL_CARDS] = {
        let mut all = [Card(0); TOTAL_CARDS];
        let mut i = 0;
        while i < TOTAL_CARDS {
            all[i] = Card(i as u8);
            i += 1;
        }
        all
    };

    #[inline]
    pub const fn new(suit: Suit, rank: Rank) -> Card {
        Card((suit.index() * NUM_RANKS + rank.index()) as u8)
    }

    /// Card from bit index; `index` must be below 52
    #[inline]
    pub const fn from_index(index: usize) -> Card {
        debug_assert!(index < TOTAL_CARDS);
        Card(index as u8)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn suit(self) -> Suit {
        Suit::from_index(self.0 as usize / NUM_RANKS)
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::from_index(self.0 as usize % NUM_RANKS)
    }

    /// Single-bit mask of this card
    #[inline]
    pub const fn mask(self) -> u64 {
        1u64 << self.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit().letter(), self.rank().letter())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Cards represented as a 52-bit bitboard
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cards {
    bits: u64,
}

impl Cards {
    /// Create empty card set
    #[inline]
    pub const fn new() -> Self {
        Cards { bits: 0 }
    }

    /// Create from raw bits; bits above 51 are discarded
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Cards {
            bits: bits & DECK_MASK,
        }
    }

    /// Place a 13-bit rank window (bit r = rank r) into one suit
    #[inline]
    pub const fn from_suit_bits(suit: Suit, bits: u16) -> Self {
        Cards {
            bits: ((bits as u64) & SUIT_MASK) << (suit.index() * NUM_RANKS),
        }
    }

    /// The full 52-card deck
    #[inline]
    pub const fn deck() -> Self {
        Cards { bits: DECK_MASK }
    }

    /// Get raw bits value
    #[inline]
    pub const fn bits(&self) -> u64 {
        self.bits
    }

    /// Count number of cards
    #[inline]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Check if a card is present
    #[inline]
    pub const fn contains(&self, card: Card) -> bool {
        self.bits & card.mask() != 0
    }

    /// Get cards in a specific suit, left in place
    #[inline]
    pub const fn suit(&self, suit: Suit) -> Cards {
        Cards {
            bits: self.bits & mask_of(suit),
        }
    }

    /// The 13-bit window of one suit shifted down to bit 0 (bit r = rank r)
    #[inline]
    pub const fn suit_bits(&self, suit: Suit) -> u16 {
        ((self.bits >> (suit.index() * NUM_RANKS)) & SUIT_MASK) as u16
    }

    #[inline]
    pub const fn has_suit(&self, suit: Suit) -> bool {
        self.bits & mask_of(suit) != 0
    }

    /// Card with the highest bit index (within one suit: the highest rank)
    #[inline]
    pub fn highest(&self) -> Option<Card> {
        (!self.is_empty()).then(|| Card::from_index(63 - self.bits.leading_zeros() as usize))
    }

    /// Card with the lowest bit index (within one suit: the lowest rank)
    #[inline]
    pub fn lowest(&self) -> Option<Card> {
        (!self.is_empty()).then(|| Card::from_index(self.bits.trailing_zeros() as usize))
    }

    #[inline]
    pub const fn union(&self, other: Cards) -> Cards {
        Cards {
            bits: self.bits | other.bits,
        }
    }

    #[inline]
    pub const fn intersect(&self, other: Cards) -> Cards {
        Cards {
            bits: self.bits & other.bits,
        }
    }

    /// Cards in self but not in other
    #[inline]
    pub const fn difference(&self, other: Cards) -> Cards {
        Cards {
            bits: self.bits & !other.bits,
        }
    }

    #[inline]
    pub const fn is_disjoint(&self, other: Cards) -> bool {
        self.bits & other.bits == 0
    }

    /// Add a single card
    #[inline]
    pub fn insert(&mut self, card: Card) -> &mut Self {
        self.bits |= card.mask();
        self
    }

    /// Remove a single card
    #[inline]
    pub fn remove(&mut self, card: Card) -> &mut Self {
        self.bits &= !card.mask();
        self
    }

    /// Cards that may legally be played from this hand.
    ///
    /// Must follow the led suit when holding it; otherwise anything goes.
    #[inline]
    pub const fn legal_plays(&self, led: Option<Suit>) -> Cards {
        if let Some(suit) = led {
            let follow = self.suit(suit);
            if !follow.is_empty() {
                return follow;
            }
        }
        *self
    }

    /// Iterate in ascending bit order (suit by suit, low rank first)
    #[inline]
    pub fn iter(&self) -> CardsIterator {
        CardsIterator { bits: self.bits }
    }
}

impl FromIterator<Card> for Cards {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut cards = Cards::new();
        for card in iter {
            cards.insert(card);
        }
        cards
    }
}

impl fmt::Debug for Cards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cards(")?;
        for suit in Suit::ALL {
            let suit_cards = self.suit(suit);
            if !suit_cards.is_empty() {
                write!(f, "{}: ", suit.letter())?;
                for card in suit_cards.iter().rev() {
                    write!(f, "{}", card.rank().letter())?;
                }
                write!(f, " ")?;
            }
        }
        write!(f, ")")
    }
}

impl fmt::Display for Cards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, suit) in Suit::ALL.into_iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{} ", suit.letter())?;
            let suit_cards = self.suit(suit);
            if suit_cards.is_empty() {
                write!(f, "-")?;
            } else {
                for card in suit_cards.iter().rev() {
                    write!(f, "{}", card.rank().letter())?;
                }
            }
        }
        Ok(())
    }
}

/// Iterator over cards in a Cards bitset
#[derive(Clone)]
pub struct CardsIterator {
    bits: u64,
}

impl Iterator for CardsIterator {
    type Item = Card;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            let card = Card::from_index(self.bits.trailing_zeros() as usize);
            self.bits &= self.bits - 1; // Clear lowest set bit
            Some(card)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for CardsIterator {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            let index = 63 - self.bits.leading_zeros() as usize;
            self.bits &= !(1u64 << index);
            Some(Card::from_index(index))
        }
    }
}

impl ExactSizeIterator for CardsIterator {}

impl IntoIterator for Cards {
    type Item = Card;
    type IntoIter = CardsIterator;

    fn into_iter(self) -> Self::IntoIter {
        CardsIterator { bits: self.bits }
    }
}

impl IntoIterator for &Cards {
    type Item = Card;
    type IntoIter = CardsIterator;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
