//! Core type definitions: suits, ranks, seats, partnerships and trump
//!
//! Every enumeration is closed and indexed by ordinal; relationships between
//! seats are constant lookup tables rather than arithmetic on the hot path.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

pub const NUM_SUITS: usize = 4;
pub const NUM_RANKS: usize = 13;
pub const NUM_SEATS: usize = 4;
pub const TOTAL_CARDS: usize = NUM_RANKS * NUM_SUITS;
pub const TOTAL_TRICKS: usize = NUM_RANKS;

/// Suits: Spades=0, Hearts=1, Diamonds=2, Clubs=3
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; NUM_SUITS] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Suit {
        Self::ALL[index]
    }

    pub const fn letter(self) -> char {
        const LETTERS: [char; NUM_SUITS] = ['S', 'H', 'D', 'C'];
        LETTERS[self as usize]
    }

    pub fn from_char(c: char) -> Result<Suit> {
        match c.to_ascii_uppercase() {
            'S' => Ok(Suit::Spades),
            'H' => Ok(Suit::Hearts),
            'D' => Ok(Suit::Diamonds),
            'C' => Ok(Suit::Clubs),
            _ => Err(Error::InvalidSuit(c.to_string())),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Ranks: Two=0, ..., Ten=8, Jack=9, Queen=10, King=11, Ace=12
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; NUM_RANKS] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Rank {
        Self::ALL[index]
    }

    pub const fn letter(self) -> char {
        const LETTERS: [char; NUM_RANKS] = [
            '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
        ];
        LETTERS[self as usize]
    }

    pub fn from_char(c: char) -> Result<Rank> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' | '1' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(Error::InvalidRank(c)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The two sides at the table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Partnership {
    NorthSouth,
    EastWest,
}

impl Partnership {
    pub const ALL: [Partnership; 2] = [Partnership::NorthSouth, Partnership::EastWest];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn opponents(self) -> Partnership {
        match self {
            Partnership::NorthSouth => Partnership::EastWest,
            Partnership::EastWest => Partnership::NorthSouth,
        }
    }

    /// The two seats of this side
    #[inline]
    pub const fn seats(self) -> [Seat; 2] {
        match self {
            Partnership::NorthSouth => [Seat::North, Seat::South],
            Partnership::EastWest => [Seat::East, Seat::West],
        }
    }
}

impl fmt::Display for Partnership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partnership::NorthSouth => write!(f, "NS"),
            Partnership::EastWest => write!(f, "EW"),
        }
    }
}

/// Seats in clockwise order: North=0, East=1, South=2, West=3
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Seat {
    #[default]
    North,
    East,
    South,
    West,
}

const NEXT_SEAT: [Seat; NUM_SEATS] = [Seat::East, Seat::South, Seat::West, Seat::North];
const PARTNER: [Seat; NUM_SEATS] = [Seat::South, Seat::West, Seat::North, Seat::East];
const PARTNERSHIP: [Partnership; NUM_SEATS] = [
    Partnership::NorthSouth,
    Partnership::EastWest,
    Partnership::NorthSouth,
    Partnership::EastWest,
];

impl Seat {
    pub const ALL: [Seat; NUM_SEATS] = [Seat::North, Seat::East, Seat::South, Seat::West];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Seat {
        Self::ALL[index]
    }

    /// Next seat clockwise (left-hand opponent)
    #[inline]
    pub const fn next(self) -> Seat {
        NEXT_SEAT[self as usize]
    }

    #[inline]
    pub const fn partner(self) -> Seat {
        PARTNER[self as usize]
    }

    #[inline]
    pub const fn partnership(self) -> Partnership {
        PARTNERSHIP[self as usize]
    }

    #[inline]
    pub const fn is_ns(self) -> bool {
        matches!(self.partnership(), Partnership::NorthSouth)
    }

    pub const fn name(self) -> &'static str {
        const NAMES: [&str; NUM_SEATS] = ["North", "East", "South", "West"];
        NAMES[self as usize]
    }

    pub const fn letter(self) -> char {
        const LETTERS: [char; NUM_SEATS] = ['N', 'E', 'S', 'W'];
        LETTERS[self as usize]
    }

    pub fn from_char(c: char) -> Result<Seat> {
        match c.to_ascii_uppercase() {
            'N' => Ok(Seat::North),
            'E' => Ok(Seat::East),
            'S' => Ok(Seat::South),
            'W' => Ok(Seat::West),
            _ => Err(Error::InvalidSeat(c.to_string())),
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Seat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Seat> {
        let trimmed = s.trim();
        if let Some(seat) = Seat::ALL
            .into_iter()
            .find(|seat| seat.name().eq_ignore_ascii_case(trimmed))
        {
            return Ok(seat);
        }
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Seat::from_char(c).map_err(|_| Error::InvalidSeat(s.to_string())),
            _ => Err(Error::InvalidSeat(s.to_string())),
        }
    }
}

/// Trump selection: one of the four suits, or none
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trump {
    Suit(Suit),
    NoTrump,
}

impl Trump {
    pub const ALL: [Trump; NUM_SUITS + 1] = [
        Trump::Suit(Suit::Spades),
        Trump::Suit(Suit::Hearts),
        Trump::Suit(Suit::Diamonds),
        Trump::Suit(Suit::Clubs),
        Trump::NoTrump,
    ];

    #[inline]
    pub const fn suit(self) -> Option<Suit> {
        match self {
            Trump::Suit(suit) => Some(suit),
            Trump::NoTrump => None,
        }
    }

    #[inline]
    pub fn is_trump(self, suit: Suit) -> bool {
        self == Trump::Suit(suit)
    }

    /// Position in [`Trump::ALL`]
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Trump::Suit(suit) => suit as usize,
            Trump::NoTrump => NUM_SUITS,
        }
    }
}

impl fmt::Display for Trump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trump::Suit(suit) => write!(f, "{}", suit.letter()),
            Trump::NoTrump => write!(f, "NT"),
        }
    }
}

impl FromStr for Trump {
    type Err = Error;

    fn from_str(s: &str) -> Result<Trump> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" => Ok(Trump::Suit(Suit::Spades)),
            "H" => Ok(Trump::Suit(Suit::Hearts)),
            "D" => Ok(Trump::Suit(Suit::Diamonds)),
            "C" => Ok(Trump::Suit(Suit::Clubs)),
            "N" | "NT" => Ok(Trump::NoTrump),
            _ => Err(Error::InvalidTrump(s.to_string())),
        }
    }
}
