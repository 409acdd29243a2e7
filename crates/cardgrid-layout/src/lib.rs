//! # Cardgrid Layout
//!
//! Spatial layout engine for card collections.
//! Decides where each rectangular card sits on a grid and keeps the layout
//! free of overlaps as cards are added, resized, duplicated or dragged.
//!
//! ## Design Goals
//!
//! 1. **Flow packing**: Fixed-column, first-fit placement driven by card order
//! 2. **Occupancy matrix**: Cell-to-card table with dynamic row growth
//! 3. **Spot checks**: Exact free/in-bounds test for a single card
//! 4. **Drop placement**: Group moves that keep their shape and resolve collisions
//! 5. **Row insertion**: Uniform downward shift to open an empty row
//! 6. **Purity**: Every call is a function of its inputs; inputs are never mutated
//!
//! Reference (link) cards get positions like any other card but never count
//! as obstacles.

pub mod append;
pub mod config;
pub mod engine;
pub mod flow;
pub mod geometry;
pub mod matrix;
pub mod order;
pub mod placement;
pub mod rows;
pub mod spot;

pub use append::{append_below, empty_row_for_moving_cards};
pub use config::{
    CollisionSearch, GridConfig, LayoutMode, DEFAULT_BOARD_COLUMNS, DEFAULT_FLOW_COLUMNS,
    MAX_COLUMN_COUNT,
};
pub use engine::GridEngine;
pub use flow::pack;
pub use geometry::{CardId, CardKind, CollectionId, GridPos, Rectangle};
pub use matrix::{OccupancyMatrix, Occupant};
pub use order::{insert_at_order, OrderPlacement};
pub use placement::{place, PlacementResolver};
pub use rows::{insert_row, row_boundary, RowDirection};
pub use spot::is_open;

use thiserror::Error;

/// Errors that can occur in layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Invalid dimensions for {card}: {width}x{height} does not fit a {column_count}-column grid")]
    InvalidDimensions {
        card: CardId,
        width: u32,
        height: u32,
        column_count: u32,
    },

    #[error("No placement found for {card} after searching {rows_searched} rows")]
    OutOfBounds { card: CardId, rows_searched: u32 },

    #[error("Invalid grid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
