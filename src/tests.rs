//! Crate-level solver tests: known deals, cross-solver agreement and
//! conservation properties

use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

struct TestCase {
    name: &'static str,
    pbn: &'static str,
    trump: Trump,
    declarer: Seat,
    expected_ns_tricks: usize,
}

const NT: Trump = Trump::NoTrump;
const SPADES: Trump = Trump::Suit(Suit::Spades);
const HEARTS: Trump = Trump::Suit(Suit::Hearts);
const DIAMONDS: Trump = Trump::Suit(Suit::Diamonds);
const CLUBS: Trump = Trump::Suit(Suit::Clubs);

const QUICK_CASES: &[TestCase] = &[
    TestCase {
        name: "Endgame, no ruff",
        pbn: "N:AK... .AK.. QJ... .QJ..",
        trump: NT,
        declarer: Seat::North,
        expected_ns_tricks: 0,
    },
    TestCase {
        name: "Endgame, ruff",
        pbn: "N:AK... .AK.. QJ... .QJ..",
        trump: SPADES,
        declarer: Seat::North,
        expected_ns_tricks: 2,
    },
    TestCase {
        name: "North holds every ace and king",
        pbn: "N:AK.AK.AK.AK QJ.QJ.QJ.QJ 32.32.32.32 T9.T9.T9.T9",
        trump: NT,
        declarer: Seat::South,
        expected_ns_tricks: 8,
    },
    TestCase {
        name: "Cold 7NT",
        pbn: "N:AKQJ.AKQ.AKQ.AKQ T987.JT9.JT9.JT9 6543.876.876.876 2.5432.5432.5432",
        trump: NT,
        declarer: Seat::South,
        expected_ns_tricks: 13,
    },
    TestCase {
        name: "NS makes 0",
        pbn: "N:T987.JT9.JT9.JT9 AKQJ.AKQ.AKQ.AKQ 2.5432.5432.5432 6543.876.876.876",
        trump: NT,
        declarer: Seat::South,
        expected_ns_tricks: 0,
    },
    TestCase {
        name: "Blocked spades",
        pbn: "N:AK.2.. .AKQ.. QJ.3.. .JT9..",
        trump: NT,
        declarer: Seat::West,
        expected_ns_tricks: 2,
    },
];

const LONG_DIAMONDS: &str = "N:AKQJ.AKQJ.. T987.T987.. 6543.6543.. ..AKQJT987.";
const SPLIT_SUITS: &str = "N:AKQJ.AKQJ.. ..AKQJ.AKQJ T987.T987.. ..T987.T987";

/// Eight-card deals, values checked against the brute-force solver
const EIGHT_CARD_CASES: &[TestCase] = &[
    TestCase {
        name: "West runs diamonds",
        pbn: LONG_DIAMONDS,
        trump: NT,
        declarer: Seat::South,
        expected_ns_tricks: 0,
    },
    TestCase {
        name: "North cashes out",
        pbn: LONG_DIAMONDS,
        trump: NT,
        declarer: Seat::West,
        expected_ns_tricks: 8,
    },
    TestCase {
        name: "East leads into North",
        pbn: LONG_DIAMONDS,
        trump: NT,
        declarer: Seat::North,
        expected_ns_tricks: 8,
    },
    TestCase {
        name: "West ruffs the first lead",
        pbn: LONG_DIAMONDS,
        trump: DIAMONDS,
        declarer: Seat::West,
        expected_ns_tricks: 0,
    },
    TestCase {
        // East pitches a heart on the ruff, keeps four trumps and ruffs
        // the last heart
        name: "North ruffs, East keeps a trump",
        pbn: LONG_DIAMONDS,
        trump: SPADES,
        declarer: Seat::South,
        expected_ns_tricks: 7,
    },
    TestCase {
        name: "Split suits, North leads",
        pbn: SPLIT_SUITS,
        trump: NT,
        declarer: Seat::West,
        expected_ns_tricks: 8,
    },
    TestCase {
        name: "Split suits, East leads",
        pbn: SPLIT_SUITS,
        trump: NT,
        declarer: Seat::North,
        expected_ns_tricks: 0,
    },
    TestCase {
        name: "Split suits, South ruffs",
        pbn: SPLIT_SUITS,
        trump: SPADES,
        declarer: Seat::North,
        expected_ns_tricks: 8,
    },
    TestCase {
        name: "Split suits, East ruffs",
        pbn: SPLIT_SUITS,
        trump: DIAMONDS,
        declarer: Seat::West,
        expected_ns_tricks: 0,
    },
];

/// Sixteen slots: any real solve has to evict
const TINY_TABLE: SearchConfig = SearchConfig {
    transposition: true,
    quick_tricks: false,
    move_ordering: true,
    zero_window: true,
    table_bits: 4,
};

const FULL_DEAL: &str = "N:AKQT3.J6.KJ42.95 652.AK42.AQ87.T4 J74.QT95.T.AK863 98.873.9653.QJ72";

const FULL_DEAL_CASES: &[TestCase] = &[
    TestCase {
        name: "NT, West leads",
        pbn: FULL_DEAL,
        trump: NT,
        declarer: Seat::South,
        expected_ns_tricks: 9,
    },
    TestCase {
        name: "NT, East leads",
        pbn: FULL_DEAL,
        trump: NT,
        declarer: Seat::North,
        expected_ns_tricks: 9,
    },
    TestCase {
        name: "Spades, West leads",
        pbn: FULL_DEAL,
        trump: SPADES,
        declarer: Seat::South,
        expected_ns_tricks: 10,
    },
    TestCase {
        name: "Hearts, West leads",
        pbn: FULL_DEAL,
        trump: HEARTS,
        declarer: Seat::South,
        expected_ns_tricks: 8,
    },
    TestCase {
        name: "Diamonds, West leads",
        pbn: FULL_DEAL,
        trump: DIAMONDS,
        declarer: Seat::South,
        expected_ns_tricks: 7,
    },
    TestCase {
        name: "Clubs, West leads",
        pbn: FULL_DEAL,
        trump: CLUBS,
        declarer: Seat::South,
        expected_ns_tricks: 8,
    },
    TestCase {
        name: "Balanced hands",
        pbn: "N:AK32.AK32.K32.32 QJT9.QJT.QJT.QJT 8765.987.987.987 4.654.A654.AK654",
        trump: NT,
        declarer: Seat::South,
        expected_ns_tricks: 5,
    },
];

fn run_cases(solver: &mut dyn Solver, cases: &[TestCase]) {
    for case in cases {
        let deal = Deal::from_pbn(case.pbn).unwrap();
        let tricks = solver.solve(&deal, case.trump, case.declarer);
        assert_eq!(
            tricks,
            case.expected_ns_tricks,
            "{} ({}): {} by {}",
            case.name,
            solver.name(),
            case.trump,
            case.declarer
        );
    }
}

fn random_deals(seed: u64, count: usize, cards: usize) -> Vec<Deal> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Deal::random(&mut rng, cards).unwrap())
        .collect()
}

#[test]
fn test_quick_cases() {
    run_cases(&mut AlphaBetaSolver::new(), QUICK_CASES);
}

#[test]
fn test_quick_cases_small_deals_brute_force() {
    // Brute force only on the short deals
    let short: Vec<&TestCase> = QUICK_CASES
        .iter()
        .filter(|c| Deal::from_pbn(c.pbn).unwrap().num_tricks() <= 2)
        .collect();
    assert_eq!(short.len(), 2);
    let mut solver = BruteForceSolver::new();
    for case in short {
        let deal = Deal::from_pbn(case.pbn).unwrap();
        assert_eq!(
            solver.solve(&deal, case.trump, case.declarer),
            case.expected_ns_tricks,
            "{}",
            case.name
        );
    }
}

#[test]
#[ignore] // Slow: full 13-card deals
fn test_full_deal_cases() {
    run_cases(&mut AlphaBetaSolver::new(), FULL_DEAL_CASES);
}

#[test]
fn test_eight_card_cases() {
    run_cases(&mut AlphaBetaSolver::new(), EIGHT_CARD_CASES);
    run_cases(&mut AlphaBetaSolver::with_config(TINY_TABLE), EIGHT_CARD_CASES);
    run_cases(
        &mut AlphaBetaSolver::with_config(SearchConfig {
            zero_window: false,
            ..TINY_TABLE
        }),
        EIGHT_CARD_CASES,
    );
}

#[test]
fn test_tiny_table_agrees_with_no_table() {
    let mut tiny = AlphaBetaSolver::with_config(TINY_TABLE);
    let mut untabled = AlphaBetaSolver::with_config(SearchConfig {
        transposition: false,
        ..SearchConfig::default()
    });

    let mut overwrites = 0;
    for deal in random_deals(9, 3, 6) {
        for trump in [NT, SPADES] {
            let expected = untabled.solve(&deal, trump, Seat::South);
            assert_eq!(
                tiny.solve(&deal, trump, Seat::South),
                expected,
                "{} on {:?}",
                trump,
                deal.hands()
            );
            overwrites += tiny.stats().table.overwrites;
        }
    }
    assert!(overwrites > 0);
}

#[test]
fn test_tiny_table_agrees_on_mixed_eight_card_deals() {
    let mut tiny = AlphaBetaSolver::with_config(TINY_TABLE);
    let mut full = AlphaBetaSolver::new();

    let mut overwrites = 0;
    for deal in random_deals(12, 2, 8) {
        for trump in [NT, HEARTS] {
            for declarer in [Seat::South, Seat::West] {
                let expected = full.solve(&deal, trump, declarer);
                assert!(expected <= 8);
                assert_eq!(
                    tiny.solve(&deal, trump, declarer),
                    expected,
                    "{} by {} on {:?}",
                    trump,
                    declarer,
                    deal.hands()
                );
                overwrites += tiny.stats().table.overwrites;
            }
        }
    }
    assert!(overwrites > 0);
}

/// Every way of dealing `pool` two cards to a seat
fn two_card_splits(pool: [Card; 8]) -> Vec<Deal> {
    let mut deals = Vec::new();
    for code in 0..4usize.pow(8) {
        let mut hands = Hands::new();
        for (i, &card) in pool.iter().enumerate() {
            let seat = Seat::from_index((code >> (2 * i)) & 3);
            hands[seat].insert(card);
        }
        if hands.sizes() == [2; 4] {
            deals.push(Deal::new(hands).unwrap());
        }
    }
    deals
}

#[test]
fn test_solvers_agree_on_every_two_card_split() {
    let pool = [
        Card::new(Suit::Spades, Rank::Ace),
        Card::new(Suit::Spades, Rank::Queen),
        Card::new(Suit::Spades, Rank::Two),
        Card::new(Suit::Hearts, Rank::King),
        Card::new(Suit::Hearts, Rank::Three),
        Card::new(Suit::Diamonds, Rank::Ace),
        Card::new(Suit::Diamonds, Rank::Four),
        Card::new(Suit::Clubs, Rank::Five),
    ];
    let deals = two_card_splits(pool);
    assert_eq!(deals.len(), 2520);

    let mut brute = BruteForceSolver::unreduced();
    let mut alpha_beta = AlphaBetaSolver::new();
    for deal in &deals {
        for trump in [NT, SPADES, CLUBS] {
            for declarer in Seat::ALL {
                assert_eq!(
                    alpha_beta.solve(deal, trump, declarer),
                    brute.solve(deal, trump, declarer),
                    "{} by {} on {:?}",
                    trump,
                    declarer,
                    deal.hands()
                );
            }
        }
    }
}

#[test]
fn test_solvers_agree_on_random_deals() {
    let mut brute = BruteForceSolver::new();
    let mut alpha_beta = AlphaBetaSolver::new();

    for (seed, cards, count) in [(1, 2, 10), (2, 3, 25), (3, 4, 6)] {
        for deal in random_deals(seed, count, cards) {
            for trump in Trump::ALL {
                for declarer in Seat::ALL {
                    assert_eq!(
                        alpha_beta.solve(&deal, trump, declarer),
                        brute.solve(&deal, trump, declarer),
                        "{} by {} on {:?}",
                        trump,
                        declarer,
                        deal.hands()
                    );
                }
            }
        }
    }
}

#[test]
fn test_every_config_agrees_with_brute_force() {
    let full = SearchConfig::default();
    let configs = [
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
            transposition: false,
            quick_tricks: false,
            move_ordering: false,
            zero_window: false,
            ..full
        },
    ];

    let mut brute = BruteForceSolver::new();
    let mut solvers = configs.map(AlphaBetaSolver::with_config);
    for deal in random_deals(4, 8, 4) {
        for trump in [NT, HEARTS] {
            for declarer in [Seat::North, Seat::East] {
                let expected = brute.solve(&deal, trump, declarer);
                for solver in solvers.iter_mut() {
                    assert_eq!(
                        solver.solve(&deal, trump, declarer),
                        expected,
                        "{:?}",
                        solver.config()
                    );
                }
            }
        }
    }
}

#[test]
fn test_zero_sum() {
    let mut solvers: [Box<dyn Solver>; 2] = [
        SolverKind::AlphaBeta.create(),
        SolverKind::BruteForce.create(),
    ];
    for deal in random_deals(5, 12, 3) {
        let total = deal.num_tricks();
        for solver in solvers.iter_mut() {
            for trump in Trump::ALL {
                for declarer in Seat::ALL {
                    let ns = solver.solve_for(&deal, trump, declarer, Partnership::NorthSouth);
                    let ew = solver.solve_for(&deal, trump, declarer, Partnership::EastWest);
                    assert_eq!(ns + ew, total, "{} {} by {}", solver.name(), trump, declarer);
                    assert!(ns <= total);
                }
            }
        }
    }
}

#[test]
fn test_declarer_tricks_follow_declarer_side() {
    let deal = Deal::from_pbn("N:AK... .AK.. QJ... .QJ..").unwrap();
    let mut solver = AlphaBetaSolver::new();
    for trump in Trump::ALL {
        for declarer in Seat::ALL {
            let ns = solver.solve(&deal, trump, declarer);
            let expected = if declarer.is_ns() { ns } else { 2 - ns };
            assert_eq!(solver.declarer_tricks(&deal, trump, declarer), expected);
        }
    }
}

#[test]
fn test_reduction_is_sound() {
    let mut reduced = BruteForceSolver::new();
    let mut full = BruteForceSolver::unreduced();
    for deal in random_deals(6, 15, 3) {
        for trump in Trump::ALL {
            for declarer in Seat::ALL {
                assert_eq!(
                    reduced.solve(&deal, trump, declarer),
                    full.solve(&deal, trump, declarer),
                    "{} by {} on {:?}",
                    trump,
                    declarer,
                    deal.hands()
                );
            }
        }
    }
}

#[test]
fn test_trick_table_matches_single_solves() {
    let deal = random_deals(7, 1, 3).remove(0);
    let mut solver = AlphaBetaSolver::new();
    let table = TrickTable::solve(&mut solver, &deal);
    let mut brute = BruteForceSolver::new();
    for declarer in Seat::ALL {
        for trump in Trump::ALL {
            assert_eq!(
                table.get(declarer, trump),
                brute.declarer_tricks(&deal, trump, declarer)
            );
        }
    }
}

#[test]
fn test_bridge_types_deal_solves_the_same() {
    let pbn = "N:AKQJ.AKQ.AKQ.AKQ T987.JT9.JT9.JT9 6543.876.876.876 2.5432.5432.5432";
    let external = bridge_types::Deal::from_pbn(pbn).unwrap();
    let deal = Deal::from_bridge_deal(&external).unwrap();
    assert_eq!(deal, Deal::from_pbn(pbn).unwrap());
    assert_eq!(AlphaBetaSolver::new().solve(&deal, NT, Seat::South), 13);
}

#[test]
fn test_solve_is_repeatable() {
    let deal = random_deals(8, 1, 4).remove(0);
    let mut solver = AlphaBetaSolver::new();
    let first: Vec<usize> = Trump::ALL
        .iter()
        .map(|&t| solver.solve(&deal, t, Seat::West))
        .collect();
    let second: Vec<usize> = Trump::ALL
        .iter()
        .map(|&t| solver.solve(&deal, t, Seat::West))
        .collect();
    assert_eq!(first, second);
}
