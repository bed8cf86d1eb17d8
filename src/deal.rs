//! Validated deals and their board metadata

use super::cards::*;
use super::error::{Error, Result};
use super::hands::Hands;
use super::types::*;
use std::fmt;
use std::str::FromStr;

/// Which sides are vulnerable on a board
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Vulnerability {
    #[default]
    None,
    NorthSouth,
    EastWest,
    Both,
}

impl Vulnerability {
    pub fn is_vulnerable(self, side: Partnership) -> bool {
        match self {
            Vulnerability::None => false,
            Vulnerability::Both => true,
            Vulnerability::NorthSouth => side == Partnership::NorthSouth,
            Vulnerability::EastWest => side == Partnership::EastWest,
        }
    }
}

impl fmt::Display for Vulnerability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Vulnerability::None => "None",
            Vulnerability::NorthSouth => "NS",
            Vulnerability::EastWest => "EW",
            Vulnerability::Both => "All",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Vulnerability {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NONE" | "LOVE" | "-" => Ok(Vulnerability::None),
            "NS" => Ok(Vulnerability::NorthSouth),
            "EW" => Ok(Vulnerability::EastWest),
            "ALL" | "BOTH" => Ok(Vulnerability::Both),
            _ => Err(Error::InvalidVulnerability(s.to_string())),
        }
    }
}

/// A complete deal: four disjoint, equal-sized hands plus board metadata.
///
/// Construction validates the hands; the solvers trust a `Deal` as given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    hands: Hands,
    board_number: Option<u32>,
    board_name: Option<String>,
    dealer: Option<Seat>,
    vulnerability: Vulnerability,
}

impl Deal {
    /// Validate and wrap four hands
    pub fn new(hands: Hands) -> Result<Self> {
        hands.check_disjoint()?;
        let sizes = hands.sizes();
        if sizes.iter().any(|&n| n != sizes[0]) {
            return Err(Error::UnequalHands(sizes));
        }
        Ok(Deal {
            hands,
            board_number: None,
            board_name: None,
            dealer: None,
            vulnerability: Vulnerability::None,
        })
    }

    /// Parse a PBN deal string, e.g.
    /// "N:AKQT3.J6.KJ42.95 652.AK42.AQ87.T4 J74.QT95.T.AK863 98.873.9653.QJ72"
    pub fn from_pbn(s: &str) -> Result<Self> {
        Deal::new(Hands::from_pbn(s)?)
    }

    pub fn with_board_number(mut self, number: u32) -> Self {
        self.board_number = Some(number);
        self
    }

    pub fn with_board_name(mut self, name: impl Into<String>) -> Self {
        self.board_name = Some(name.into());
        self
    }

    pub fn with_dealer(mut self, dealer: Seat) -> Self {
        self.dealer = Some(dealer);
        self
    }

    pub fn with_vulnerability(mut self, vulnerability: Vulnerability) -> Self {
        self.vulnerability = vulnerability;
        self
    }

    #[inline]
    pub fn hands(&self) -> &Hands {
        &self.hands
    }

    #[inline]
    pub fn hand(&self, seat: Seat) -> Cards {
        self.hands[seat]
    }

    /// Cards per hand, which is also the number of tricks to play
    #[inline]
    pub fn num_tricks(&self) -> usize {
        self.hands.num_tricks()
    }

    pub fn board_number(&self) -> Option<u32> {
        self.board_number
    }

    pub fn board_name(&self) -> Option<&str> {
        self.board_name.as_deref()
    }

    pub fn dealer(&self) -> Option<Seat> {
        self.dealer
    }

    pub fn vulnerability(&self) -> Vulnerability {
        self.vulnerability
    }

    /// Shuffle a deck and deal `cards_per_hand` cards to each seat.
    ///
    /// Fewer than 13 cards per hand gives a reduced deal drawn from the whole deck.
    #[cfg(any(test, feature = "rand"))]
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R, cards_per_hand: usize) -> Result<Self> {
        use rand::seq::SliceRandom;

        if cards_per_hand > NUM_RANKS {
            return Err(Error::TooManyCards(cards_per_hand));
        }

        let mut deck = Card::ALL;
        deck.shuffle(rng);

        let mut cards = deck.into_iter();
        let mut hands = Hands::new();
        for seat in Seat::ALL {
            hands[seat] = cards.by_ref().take(cards_per_hand).collect();
        }
        Deal::new(hands)
    }
}

impl fmt::Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.board_number, &self.board_name) {
            (Some(n), Some(name)) => writeln!(f, "Board {} ({})", n, name)?,
            (Some(n), None) => writeln!(f, "Board {}", n)?,
            (None, Some(name)) => writeln!(f, "{}", name)?,
            (None, None) => {}
        }
        if let Some(dealer) = self.dealer {
            writeln!(f, "Dealer: {}  Vul: {}", dealer, self.vulnerability)?;
        }
        write!(f, "{}", self.hands)
    }
}
