//! Conversion between bridge-types and internal solver types.
//!
//! The solver uses bitboards internally; the shared bridge data model is only
//! touched at the API boundary.

use super::cards::*;
use super::deal::Deal;
use super::error::Result;
use super::hands::Hands;
use super::types::*;

impl Hands {
    /// Create Hands from a bridge_types::Deal
    pub fn from_deal(deal: &bridge_types::Deal) -> Self {
        let mut hands = Hands::new();
        for seat in Seat::ALL {
            for card in deal.hand(seat_to_direction(seat)).cards() {
                hands[seat].insert(convert_card(card));
            }
        }
        hands
    }
}

impl Deal {
    /// Validate a bridge_types::Deal and carry it over
    pub fn from_bridge_deal(deal: &bridge_types::Deal) -> Result<Self> {
        Deal::new(Hands::from_deal(deal))
    }
}

fn convert_card(card: &bridge_types::Card) -> Card {
    Card::new(convert_suit(card.suit), convert_rank(card.rank))
}

fn convert_suit(suit: bridge_types::Suit) -> Suit {
    match suit {
        bridge_types::Suit::Spades => Suit::Spades,
        bridge_types::Suit::Hearts => Suit::Hearts,
        bridge_types::Suit::Diamonds => Suit::Diamonds,
        bridge_types::Suit::Clubs => Suit::Clubs,
    }
}

/// bridge_types ranks run Two=2 .. Ace=14
fn convert_rank(rank: bridge_types::Rank) -> Rank {
    Rank::from_index((rank as usize) - 2)
}

pub fn seat_to_direction(seat: Seat) -> bridge_types::Direction {
    match seat {
        Seat::North => bridge_types::Direction::North,
        Seat::East => bridge_types::Direction::East,
        Seat::South => bridge_types::Direction::South,
        Seat::West => bridge_types::Direction::West,
    }
}

pub fn direction_to_seat(dir: bridge_types::Direction) -> Seat {
    match dir {
        bridge_types::Direction::North => Seat::North,
        bridge_types::Direction::East => Seat::East,
        bridge_types::Direction::South => Seat::South,
        bridge_types::Direction::West => Seat::West,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PBN: &str = "N:AKQT3.J6.KJ42.95 652.AK42.AQ87.T4 J74.QT95.T.AK863 98.873.9653.QJ72";

    #[test]
    fn test_from_deal_matches_from_pbn() {
        let deal = bridge_types::Deal::from_pbn(PBN).unwrap();
        let hands = Hands::from_deal(&deal);

        assert_eq!(hands.sizes(), [13, 13, 13, 13]);
        assert_eq!(hands, Hands::from_pbn(PBN).unwrap());
    }

    #[test]
    fn test_from_bridge_deal() {
        let deal = bridge_types::Deal::from_pbn(PBN).unwrap();
        let ours = Deal::from_bridge_deal(&deal).unwrap();
        assert_eq!(ours, Deal::from_pbn(PBN).unwrap());
    }

    #[test]
    fn test_direction_conversion() {
        for seat in Seat::ALL {
            assert_eq!(direction_to_seat(seat_to_direction(seat)), seat);
        }
        assert_eq!(
            seat_to_direction(Seat::West),
            bridge_types::Direction::West
        );
    }
}
