//! Bounded needle storage
//!
//! Needles are stored *unspun*: the slot they occupy when the spin index
//! is zero. Insertion order is placement order.

use heapless::Vec;

use crate::angle::{wrap, wrap_diff, SpinIndex};

/// Maximum number of needles on the dial
pub const MAX_NEEDLES: usize = 30;

/// Minimum angular separation between two needles, in slots
pub const COLLISION_STEPS: i32 = 1;

/// Why a needle could not be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlacementError {
    /// Candidate slot is too close to a stored needle
    Collision,
    /// Needle set is at capacity
    Full,
}

/// Ordered, capacity-bounded set of needle slots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeedleSet<const N: usize = MAX_NEEDLES> {
    slots: Vec<u8, N>,
}

impl<const N: usize> NeedleSet<N> {
    /// Create an empty set
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Number of stored needles
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no needles are stored
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Check if another needle would exceed capacity
    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    /// Check if `slot` lies within [`COLLISION_STEPS`] of any stored needle
    pub fn collides(&self, slot: u8) -> bool {
        self.slots
            .iter()
            .any(|&stored| wrap_diff(slot as i32, stored as i32).abs() < COLLISION_STEPS)
    }

    /// Store a needle at unspun `slot`
    ///
    /// Collision is checked before capacity, so a colliding candidate on a
    /// full set reports [`PlacementError::Collision`].
    pub fn insert(&mut self, slot: u8) -> Result<(), PlacementError> {
        let slot = wrap(slot as i32);
        if self.collides(slot) {
            return Err(PlacementError::Collision);
        }
        self.slots.push(slot).map_err(|_| PlacementError::Full)
    }

    /// Remove all needles
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Unspun slots in placement order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.slots.iter().copied()
    }

    /// Rendered slots for the given spin, in placement order
    pub fn rendered(&self, spin: SpinIndex) -> impl Iterator<Item = u8> + '_ {
        self.iter().map(move |slot| spin.apply(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::ANGLE_STEPS;
    use proptest::prelude::*;

    #[test]
    fn test_insert_then_collides() {
        let mut set: NeedleSet = NeedleSet::new();
        assert!(!set.collides(13));

        set.insert(13).unwrap();

        assert!(set.collides(13));
        // Neighbouring slots are free with a separation of one
        assert!(!set.collides(12));
        assert!(!set.collides(14));
        assert_eq!(set.insert(13), Err(PlacementError::Collision));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_every_slot_fits_once() {
        let mut set: NeedleSet = NeedleSet::new();
        for slot in 0..ANGLE_STEPS {
            set.insert(slot).unwrap();
        }
        assert_eq!(set.len(), ANGLE_STEPS as usize);
        for slot in 0..ANGLE_STEPS {
            assert_eq!(set.insert(slot), Err(PlacementError::Collision));
        }
    }

    #[test]
    fn test_full_rejects_any_slot() {
        let mut set: NeedleSet<3> = NeedleSet::new();
        set.insert(0).unwrap();
        set.insert(8).unwrap();
        set.insert(16).unwrap();
        assert!(set.is_full());

        assert_eq!(set.insert(4), Err(PlacementError::Full));
        // Collision wins over capacity
        assert_eq!(set.insert(8), Err(PlacementError::Collision));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_order_and_rendering() {
        let mut set: NeedleSet = NeedleSet::new();
        set.insert(13).unwrap();
        set.insert(2).unwrap();
        set.insert(23).unwrap();

        let mut spin = SpinIndex::ZERO;
        spin.advance(6);

        let unspun: heapless::Vec<u8, 4> = set.iter().collect();
        let rendered: heapless::Vec<u8, 4> = set.rendered(spin).collect();
        assert_eq!(unspun.as_slice(), &[13, 2, 23]);
        assert_eq!(rendered.as_slice(), &[19, 8, 5]);

        set.clear();
        assert!(set.is_empty());
    }

    proptest! {
        #[test]
        fn prop_stored_needles_never_coincide(slots in proptest::collection::vec(0u8..ANGLE_STEPS, 0..64)) {
            let mut set: NeedleSet = NeedleSet::new();
            for slot in slots {
                let _ = set.insert(slot);
            }
            let stored: heapless::Vec<u8, MAX_NEEDLES> = set.iter().collect();
            prop_assert!(stored.len() <= MAX_NEEDLES);
            for (i, a) in stored.iter().enumerate() {
                for b in &stored[i + 1..] {
                    prop_assert!(wrap_diff(*a as i32, *b as i32).abs() >= COLLISION_STEPS);
                }
            }
        }
    }
}
