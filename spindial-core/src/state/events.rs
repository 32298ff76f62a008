//! Events that trigger state transitions

use crate::needles::PlacementError;

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// One frame elapsed
    Tick,
    /// Button press stored a new needle
    Placed,
    /// Button press could not store a needle
    Rejected(PlacementError),
}

impl Event {
    /// Check if this event comes from a button press
    pub fn is_press(&self) -> bool {
        matches!(self, Event::Placed | Event::Rejected(_))
    }
}
