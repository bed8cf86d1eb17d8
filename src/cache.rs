//! Transposition table: flat, fixed-capacity store of value bounds
//!
//! Positions are only stored at trick boundaries. Bounds are relative to the
//! maximising side's tally at the node, so they range over `0..=remaining`.

use super::hands::Hands;
use super::types::Seat;
use log::trace;

/// Slots examined from the home slot before one is replaced
const PROBE_WINDOW: usize = 4;

/// Known range of a position's value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub lower: u8,
    pub upper: u8,
}

impl Bounds {
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.lower == self.upper
    }
}

/// How a search result relates to the true value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// True value is at least the result
    Lower,
    /// True value is at most the result
    Upper,
    Exact,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
    pub overwrites: u64,
}

#[derive(Clone, Copy)]
struct Slot {
    key: u64,
    hands: Hands,
    seat: Seat,
    bounds: Bounds,
    /// Tricks left to play at the stored position
    remaining: u8,
    /// Table generation that wrote the slot; 0 is never live
    generation: u32,
}

impl Slot {
    const EMPTY: Slot = Slot {
        key: 0,
        hands: Hands::new(),
        seat: Seat::North,
        bounds: Bounds { lower: 0, upper: 0 },
        remaining: 0,
        generation: 0,
    };
}

/// Flat table of `2^bits` slots.
///
/// A full probe window gives up the entry with the fewest tricks left, since
/// it stands for the smallest subtree. Clearing bumps a generation counter
/// rather than wiping the slots.
pub struct TranspositionTable {
    slots: Box<[Slot]>,
    bits: usize,
    mask: usize,
    generation: u32,
    stats: TableStats,
}

impl TranspositionTable {
    /// Table with `2^bits` slots
    pub fn new(bits: usize) -> Self {
        let bits = bits.clamp(1, 30);
        let size = 1 << bits;
        TranspositionTable {
            slots: vec![Slot::EMPTY; size].into_boxed_slice(),
            bits,
            mask: size - 1,
            generation: 1,
            stats: TableStats::default(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.mask + 1
    }

    /// Drop every entry and reset the statistics
    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.slots.fill(Slot::EMPTY);
            self.generation = 1;
        }
        self.stats = TableStats::default();
    }

    #[inline]
    pub fn stats(&self) -> TableStats {
        self.stats
    }

    #[inline]
    fn home(&self, key: u64) -> usize {
        (key >> (64 - self.bits)) as usize
    }

    #[inline]
    fn is_live(&self, slot: &Slot) -> bool {
        slot.generation == self.generation
    }

    #[inline]
    fn matches(&self, slot: &Slot, key: u64, hands: &Hands, seat: Seat) -> bool {
        self.is_live(slot) && slot.key == key && slot.seat == seat && slot.hands == *hands
    }

    /// Look up the bounds stored for an exact position
    pub fn probe(&mut self, key: u64, hands: &Hands, seat: Seat) -> Option<Bounds> {
        self.stats.probes += 1;
        let home = self.home(key);
        for d in 0..PROBE_WINDOW {
            let slot = &self.slots[(home + d) & self.mask];
            if self.matches(slot, key, hands, seat) {
                self.stats.hits += 1;
                return Some(slot.bounds);
            }
            if !self.is_live(slot) {
                break;
            }
        }
        None
    }

    /// Record a search result for a position with `remaining` tricks to play
    pub fn store(
        &mut self,
        key: u64,
        hands: &Hands,
        seat: Seat,
        remaining: u8,
        value: u8,
        bound: Bound,
    ) {
        self.stats.stores += 1;
        let home = self.home(key);

        let mut target = None;
        let mut shallowest = home;
        for d in 0..PROBE_WINDOW {
            let idx = (home + d) & self.mask;
            let slot = &self.slots[idx];
            if !self.is_live(slot) || self.matches(slot, key, hands, seat) {
                target = Some(idx);
                break;
            }
            if slot.remaining < self.slots[shallowest].remaining {
                shallowest = idx;
            }
        }

        let idx = match target {
            Some(idx) => idx,
            None => {
                trace!(
                    "transposition table overwrite at slot {} ({} tricks left)",
                    shallowest,
                    self.slots[shallowest].remaining
                );
                self.stats.overwrites += 1;
                shallowest
            }
        };

        let generation = self.generation;
        let fresh = !self.matches(&self.slots[idx], key, hands, seat);
        let slot = &mut self.slots[idx];
        if fresh {
            *slot = Slot {
                key,
                hands: *hands,
                seat,
                bounds: Bounds {
                    lower: 0,
                    upper: remaining,
                },
                remaining,
                generation,
            };
        }

        let bounds = &mut slot.bounds;
        match bound {
            Bound::Lower => bounds.lower = bounds.lower.max(value),
            Bound::Upper => bounds.upper = bounds.upper.min(value),
            Bound::Exact => {
                bounds.lower = value;
                bounds.upper = value;
            }
        }
    }
}
