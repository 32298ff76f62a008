//! Panel geometry and rotation
//!
//! The controller has 240x320 pixels of RAM. Smaller glass is mounted at a
//! fixed position inside that RAM, so every rotation needs its own offset
//! from panel coordinates to RAM addresses.

use crate::cmd::madctl;

/// Controller RAM columns
pub const CONTROLLER_COLUMNS: u16 = 240;

/// Controller RAM rows
pub const CONTROLLER_ROWS: u16 = 320;

/// How the glass sits inside controller RAM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelGeometry {
    /// 240x240 (1.3", 1.54"): flush with the last RAM rows
    RightJustified,
    /// 135x240 (1.14"): centered, odd spare column count
    CenteredOdd,
    /// Everything else (1.47", 1.69", 1.9", 2.0"): centered
    Centered,
}

/// RAM offsets for both orientations of the glass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelOffsets {
    pub colstart: u16,
    pub rowstart: u16,
    /// Column offset once the scan direction is flipped
    pub colstart2: u16,
    /// Row offset once the scan direction is flipped
    pub rowstart2: u16,
}

impl PanelGeometry {
    /// Classify a panel by its size
    pub fn classify(width: u16, height: u16) -> Self {
        match (width, height) {
            (240, 240) => PanelGeometry::RightJustified,
            (135, 240) => PanelGeometry::CenteredOdd,
            _ => PanelGeometry::Centered,
        }
    }

    /// RAM offsets for a panel of this class
    pub fn offsets(self, width: u16, height: u16) -> PanelOffsets {
        let spare_cols = CONTROLLER_COLUMNS.saturating_sub(width);
        let spare_rows = CONTROLLER_ROWS.saturating_sub(height);

        match self {
            PanelGeometry::RightJustified => PanelOffsets {
                colstart: spare_cols,
                rowstart: spare_rows,
                colstart2: spare_cols,
                rowstart2: 0,
            },
            PanelGeometry::CenteredOdd => PanelOffsets {
                colstart: (spare_cols + 1) / 2,
                rowstart: spare_rows / 2,
                colstart2: spare_cols / 2,
                rowstart2: spare_rows / 2,
            },
            PanelGeometry::Centered => PanelOffsets {
                colstart: spare_cols / 2,
                rowstart: spare_rows / 2,
                colstart2: spare_cols / 2,
                rowstart2: spare_rows / 2,
            },
        }
    }
}

/// Display rotation, clockwise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl From<u8> for Rotation {
    /// Any value is accepted and reduced modulo 4
    fn from(m: u8) -> Self {
        match m & 3 {
            0 => Rotation::Deg0,
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            _ => Rotation::Deg270,
        }
    }
}

impl Rotation {
    /// MADCTL operand for this rotation
    pub fn madctl(self) -> u8 {
        match self {
            Rotation::Deg0 => madctl::MX | madctl::MY | madctl::BGR,
            Rotation::Deg90 => madctl::MY | madctl::MV | madctl::BGR,
            Rotation::Deg180 => madctl::RGB,
            Rotation::Deg270 => madctl::MX | madctl::MV | madctl::BGR,
        }
    }

    /// Offset (x, y) added to panel coordinates in this rotation
    pub fn origin(self, offsets: &PanelOffsets) -> (u16, u16) {
        match self {
            Rotation::Deg0 => (offsets.colstart, offsets.rowstart),
            Rotation::Deg90 => (offsets.rowstart, offsets.colstart2),
            Rotation::Deg180 => (offsets.colstart2, offsets.rowstart2),
            Rotation::Deg270 => (offsets.rowstart2, offsets.colstart),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    fn origins(width: u16, height: u16) -> [(u16, u16); 4] {
        let offsets = PanelGeometry::classify(width, height).offsets(width, height);
        ROTATIONS.map(|r| r.origin(&offsets))
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            PanelGeometry::classify(240, 240),
            PanelGeometry::RightJustified
        );
        assert_eq!(PanelGeometry::classify(135, 240), PanelGeometry::CenteredOdd);
        assert_eq!(PanelGeometry::classify(240, 280), PanelGeometry::Centered);
        assert_eq!(PanelGeometry::classify(172, 320), PanelGeometry::Centered);
    }

    #[test]
    fn test_right_justified_origins() {
        assert_eq!(origins(240, 240), [(0, 80), (80, 0), (0, 0), (0, 0)]);
    }

    #[test]
    fn test_centered_odd_origins() {
        // 105 spare columns split 53/52, 80 spare rows split evenly
        assert_eq!(origins(135, 240), [(53, 40), (40, 52), (52, 40), (40, 53)]);
    }

    #[test]
    fn test_centered_origins() {
        assert_eq!(origins(240, 280), [(0, 20), (20, 0), (0, 20), (20, 0)]);
        assert_eq!(origins(172, 320), [(34, 0), (0, 34), (34, 0), (0, 34)]);
    }

    #[test]
    fn test_rotation_reduces_mod_4() {
        assert_eq!(Rotation::from(0), Rotation::Deg0);
        assert_eq!(Rotation::from(5), Rotation::Deg90);
        assert_eq!(Rotation::from(6), Rotation::Deg180);
        assert_eq!(Rotation::from(255), Rotation::Deg270);
    }

    #[test]
    fn test_madctl_bytes() {
        assert_eq!(ROTATIONS.map(Rotation::madctl), [0xC0, 0xA0, 0x08, 0x60]);
    }
}
