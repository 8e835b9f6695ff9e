use serde::{Deserialize, Serialize};

/// Player-visible status of a populated cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    #[default]
    Hidden,
    Marked,
    Revealed,
}

/// Content of one grid slot.
///
/// Slots start `Unpopulated` and only become a trap or a safe cell once generated, so an unpopulated slot is not the
/// same thing as a hidden one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Unpopulated,
    Trapped {
        status: CellStatus,
    },
    Safe {
        status: CellStatus,
        adjacent_traps: u8,
    },
}

impl Cell {
    pub const fn trapped() -> Self {
        Self::Trapped {
            status: CellStatus::Hidden,
        }
    }

    pub const fn safe(adjacent_traps: u8) -> Self {
        Self::Safe {
            status: CellStatus::Hidden,
            adjacent_traps,
        }
    }

    pub const fn is_populated(self) -> bool {
        !matches!(self, Self::Unpopulated)
    }

    pub const fn is_trapped(self) -> bool {
        matches!(self, Self::Trapped { .. })
    }

    /// Status of a populated cell, `None` while unpopulated.
    pub const fn status(self) -> Option<CellStatus> {
        match self {
            Self::Unpopulated => None,
            Self::Trapped { status } | Self::Safe { status, .. } => Some(status),
        }
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self.status(), Some(CellStatus::Revealed))
    }

    pub const fn is_marked(self) -> bool {
        matches!(self.status(), Some(CellStatus::Marked))
    }

    pub const fn adjacent_traps(self) -> Option<u8> {
        match self {
            Self::Safe { adjacent_traps, .. } => Some(adjacent_traps),
            _ => None,
        }
    }

    pub(crate) fn set_status(&mut self, new_status: CellStatus) {
        match self {
            Self::Unpopulated => {}
            Self::Trapped { status } | Self::Safe { status, .. } => *status = new_status,
        }
    }
}
