//! Errors raised at the input boundary
//!
//! The solving core is total over well-formed state; only parsing and deal
//! validation can fail.

use crate::cards::Card;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unrecognized suit '{0}'")]
    InvalidSuit(String),

    #[error("unrecognized rank '{0}'")]
    InvalidRank(char),

    #[error("unrecognized seat '{0}'")]
    InvalidSeat(String),

    #[error("unrecognized trump '{0}' (expected S, H, D, C or NT)")]
    InvalidTrump(String),

    #[error("unrecognized vulnerability '{0}'")]
    InvalidVulnerability(String),

    #[error("unrecognized solver '{0}' (expected alphabeta or bruteforce)")]
    UnknownSolver(String),

    #[error("malformed hand '{0}'")]
    MalformedHand(String),

    #[error("malformed deal '{0}'")]
    MalformedDeal(String),

    #[error("card {0} appears in more than one hand")]
    DuplicateCard(Card),

    #[error("hands hold unequal card counts {0:?}")]
    UnequalHands([usize; 4]),

    #[error("cannot deal {0} cards to each hand")]
    TooManyCards(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
