//! The trick in progress: up to four (card, seat) plays and who wins them

use super::cards::Card;
use super::types::*;
use std::fmt;

/// One card on the table and the seat that played it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlayedCard {
    pub card: Card,
    pub seat: Seat,
}

impl PlayedCard {
    /// Filler for unused trick slots
    const EMPTY: PlayedCard = PlayedCard {
        card: Card::from_index(0),
        seat: Seat::North,
    };

    #[inline]
    pub const fn new(card: Card, seat: Seat) -> Self {
        PlayedCard { card, seat }
    }
}

/// Does `challenger` beat `incumbent` in a trick led in `led`?
///
/// A card that is neither trump nor of the led suit never wins.
#[inline]
pub fn beats(challenger: Card, incumbent: Card, led: Suit, trump: Trump) -> bool {
    let c_trump = trump.is_trump(challenger.suit());
    let i_trump = trump.is_trump(incumbent.suit());
    match (c_trump, i_trump) {
        (true, false) => true,
        (false, true) => false,
        (true, true) => challenger.rank() > incumbent.rank(),
        (false, false) => {
            let c_led = challenger.suit() == led;
            let i_led = incumbent.suit() == led;
            match (c_led, i_led) {
                (true, false) => true,
                (true, true) => challenger.rank() > incumbent.rank(),
                _ => false,
            }
        }
    }
}

/// Winner of a full trick given explicitly; the first play is the lead
#[inline]
pub fn compute_winner(plays: &[PlayedCard; NUM_SEATS], led: Suit, trump: Trump) -> Seat {
    let mut best = plays[0];
    for &play in &plays[1..] {
        if beats(play.card, best.card, led, trump) {
            best = play;
        }
    }
    best.seat
}

/// State machine for one trick: empty, 1..3 played, complete
#[derive(Clone, Copy)]
pub struct Trick {
    plays: [PlayedCard; NUM_SEATS],
    count: u8,
    led: Option<Suit>,
}

impl Trick {
    #[inline]
    pub const fn new() -> Self {
        Trick {
            plays: [PlayedCard::EMPTY; NUM_SEATS],
            count: 0,
            led: None,
        }
    }

    /// Add a card; the first card fixes the led suit
    #[inline]
    pub fn play(&mut self, card: Card, seat: Seat) {
        debug_assert!(!self.is_complete(), "trick already holds four cards");
        if self.count == 0 {
            self.led = Some(card.suit());
        }
        self.plays[self.count as usize] = PlayedCard::new(card, seat);
        self.count += 1;
    }

    /// Remove the most recent play
    #[inline]
    pub fn undo_last(&mut self) -> Option<PlayedCard> {
        if self.count == 0 {
            return None;
        }
        self.count -= 1;
        if self.count == 0 {
            self.led = None;
        }
        Some(self.plays[self.count as usize])
    }

    /// Rebuild a trick from its plays
    #[inline]
    pub fn restore(&mut self, plays: &[PlayedCard]) {
        self.reset();
        for p in plays {
            self.play(p.card, p.seat);
        }
    }

    #[inline]
    pub fn reset(&mut self) {
        self.count = 0;
        self.led = None;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.count as usize == NUM_SEATS
    }

    #[inline]
    pub fn led_suit(&self) -> Option<Suit> {
        self.led
    }

    /// Cards played so far, in play order
    #[inline]
    pub fn plays(&self) -> &[PlayedCard] {
        &self.plays[..self.count as usize]
    }

    /// All four plays, once the trick is complete
    #[inline]
    pub fn complete_plays(&self) -> Option<&[PlayedCard; NUM_SEATS]> {
        self.is_complete().then_some(&self.plays)
    }

    /// The play currently winning the trick, if any card is down
    pub fn winning_play(&self, trump: Trump) -> Option<PlayedCard> {
        let led = self.led?;
        let mut best = self.plays[0];
        for &play in &self.plays[1..self.count as usize] {
            if beats(play.card, best.card, led, trump) {
                best = play;
            }
        }
        Some(best)
    }

    /// Seat currently winning the trick
    #[inline]
    pub fn winner(&self, trump: Trump) -> Option<Seat> {
        self.winning_play(trump).map(|p| p.seat)
    }
}

impl Default for Trick {
    fn default() -> Self {
        Trick::new()
    }
}

impl PartialEq for Trick {
    fn eq(&self, other: &Self) -> bool {
        self.led == other.led && self.plays() == other.plays()
    }
}

impl Eq for Trick {}

impl fmt::Debug for Trick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trick[")?;
        for (i, p) in self.plays().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", p.seat.letter(), p.card)?;
        }
        write!(f, "]")
    }
}
