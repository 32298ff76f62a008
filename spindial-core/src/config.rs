//! Engine configuration

/// Tunables for the needle engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EngineConfig {
    /// Slots the dial rotates per frame
    pub spin_steps: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { spin_steps: 1 }
    }
}
