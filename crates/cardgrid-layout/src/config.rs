//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::{LayoutError, Result};

/// Column count of the legacy auto-flow layout.
pub const DEFAULT_FLOW_COLUMNS: u32 = 4;

/// Column count of a new free-form board.
pub const DEFAULT_BOARD_COLUMNS: u32 = 16;

/// Widest grid a collection may be configured with.
pub const MAX_COLUMN_COUNT: u32 = 16;

/// How a collection positions its cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Fixed columns; positions derive from `order` via the flow packer.
    #[default]
    Flow,
    /// Free-form board; positions are explicit and set by drag operations.
    Board,
}

/// Where the placement resolver looks when a card's preferred spot is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionSearch {
    /// Row-major scan forward from the preferred position.
    #[default]
    ForwardScan,
    /// Closest free anchor inside the current board, scan as a fallback.
    Nearest,
}

/// Grid configuration for one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of columns in the grid.
    pub column_count: u32,
    /// Layout mode of the collection.
    pub mode: LayoutMode,
    /// Collision strategy used when dropping cards.
    pub collision_search: CollisionSearch,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::flow()
    }
}

impl GridConfig {
    /// Legacy 4-column flow collection.
    pub fn flow() -> Self {
        Self {
            column_count: DEFAULT_FLOW_COLUMNS,
            mode: LayoutMode::Flow,
            collision_search: CollisionSearch::ForwardScan,
        }
    }

    /// Free-form board with `column_count` columns.
    pub fn board(column_count: u32) -> Self {
        Self {
            column_count,
            mode: LayoutMode::Board,
            collision_search: CollisionSearch::ForwardScan,
        }
    }

    pub fn with_collision_search(mut self, search: CollisionSearch) -> Self {
        self.collision_search = search;
        self
    }

    /// Reject configurations that would make scans loop or index nothing.
    pub fn validate(&self) -> Result<()> {
        validate_column_count(self.column_count)?;
        if self.column_count > MAX_COLUMN_COUNT {
            return Err(LayoutError::InvalidConfig(format!(
                "column_count {} exceeds the maximum of {}",
                self.column_count, MAX_COLUMN_COUNT
            )));
        }
        Ok(())
    }
}

/// Minimal check shared by the free-function entry points.
pub(crate) fn validate_column_count(column_count: u32) -> Result<()> {
    if column_count == 0 {
        return Err(LayoutError::InvalidConfig(
            "column_count must be at least 1".to_string(),
        ));
    }
    Ok(())
}
