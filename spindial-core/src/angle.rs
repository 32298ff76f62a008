//! Discrete angle model
//!
//! The dial is divided into [`ANGLE_STEPS`] slots, 15° apart, numbered
//! clockwise from the 3 o'clock position (screen y grows downwards). Every
//! slot has a fixed needle shape given as pixel offsets from the dial
//! centre: a base point just outside the dial and a tip point further out.

/// Number of discrete positions around the dial
pub const ANGLE_STEPS: u8 = 24;

/// Slot at the visual top of the dial, where new needles land
pub const TOP_SLOT: u8 = ANGLE_STEPS * 3 / 4;

/// Needle base offsets (dx, dy) from the dial centre, per slot
pub const BASE_OFFSETS: [(i8, i8); ANGLE_STEPS as usize] = [
    (64, 0),
    (62, 18),
    (56, 33),
    (45, 45),
    (33, 56),
    (18, 62),
    (4, 64),
    (-18, 62),
    (-33, 56),
    (-45, 45),
    (-56, 33),
    (-62, 18),
    (-64, 0),
    (-62, -18),
    (-56, -33),
    (-45, -45),
    (-33, -56),
    (-18, -62),
    (4, -64),
    (18, -62),
    (33, -56),
    (45, -45),
    (56, -33),
    (62, -18),
];

/// Needle tip offsets (dx, dy) from the dial centre, per slot
///
/// Same directions as [`BASE_OFFSETS`], pushed radially outwards.
pub const TIP_OFFSETS: [(i8, i8); ANGLE_STEPS as usize] = [
    (73, 0),
    (71, 21),
    (64, 39),
    (53, 53),
    (39, 64),
    (21, 71),
    (4, 73),
    (-21, 71),
    (-39, 64),
    (-53, 53),
    (-64, 39),
    (-71, 21),
    (-73, 0),
    (-71, -21),
    (-64, -39),
    (-53, -53),
    (-39, -64),
    (-21, -71),
    (4, -73),
    (21, -71),
    (39, -64),
    (53, -53),
    (64, -39),
    (71, -21),
];

/// Reduce any integer to a slot in `[0, ANGLE_STEPS)`
pub fn wrap(i: i32) -> u8 {
    i.rem_euclid(ANGLE_STEPS as i32) as u8
}

/// Signed angular distance from `b` to `a`, in `(-ANGLE_STEPS/2, ANGLE_STEPS/2]`
pub fn wrap_diff(a: i32, b: i32) -> i32 {
    let steps = ANGLE_STEPS as i64;
    let d = (a as i64 - b as i64).rem_euclid(steps);
    if d > steps / 2 {
        (d - steps) as i32
    } else {
        d as i32
    }
}

/// Base and tip offsets for a slot (wrapped)
pub fn needle_offsets(slot: u8) -> ((i8, i8), (i8, i8)) {
    let i = wrap(slot as i32) as usize;
    (BASE_OFFSETS[i], TIP_OFFSETS[i])
}

/// Global rotation applied to every stored needle before it is drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpinIndex(u8);

impl SpinIndex {
    /// Spin index at rest
    pub const ZERO: Self = Self(0);

    /// Current value, always in `[0, ANGLE_STEPS)`
    pub fn get(self) -> u8 {
        self.0
    }

    /// Advance by `steps`, wrapping
    pub fn advance(&mut self, steps: u8) {
        self.0 = wrap(self.0 as i32 + steps as i32);
    }

    /// Rendered slot of a needle stored at `unspun`
    pub fn apply(self, unspun: u8) -> u8 {
        wrap(unspun as i32 + self.0 as i32)
    }
}

impl From<u8> for SpinIndex {
    fn from(value: u8) -> Self {
        Self(wrap(value as i32))
    }
}
