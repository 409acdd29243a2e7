//! # Drop Placement
//!
//! Resolves where a group of dragged cards lands on a board.
//!
//! ## Overview
//!
//! The group keeps its internal shape: every card is offset from the group's
//! top-left corner, and that offset is re-applied at the drop anchor. When a
//! card's preferred spot is taken (by a card already on the board, or by a
//! card from the same group placed earlier in this call), it is moved to a
//! free spot using the configured [`CollisionSearch`].
//!
//! Results depend only on the inputs, so a drop can be retried or replayed
//! by a background worker and land in the same place.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::config::validate_column_count;
use crate::flow::check_dimensions;
use crate::{
    CardId, CollectionId, CollisionSearch, GridConfig, GridPos, OccupancyMatrix, Rectangle,
    Result,
};

/// Drops moving cards onto a destination board.
#[derive(Debug, Clone, Copy)]
pub struct PlacementResolver {
    column_count: u32,
    search: CollisionSearch,
}

impl PlacementResolver {
    /// Create a resolver for a validated configuration.
    pub fn new(config: &GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            column_count: config.column_count,
            search: config.collision_search,
        })
    }

    /// Create a resolver for an arbitrary non-zero column count.
    pub(crate) fn with_columns(column_count: u32, search: CollisionSearch) -> Result<Self> {
        validate_column_count(column_count)?;
        Ok(Self {
            column_count,
            search,
        })
    }

    /// Place `moving` with its top-left corner at `anchor` among the
    /// `existing` cards of `destination`.
    ///
    /// Returns the moving cards in input order with their final positions and
    /// `parent` set to `destination`. Moving cards found in `existing` are
    /// ignored there, since their old footprint is being vacated.
    pub fn place(
        &self,
        moving: &[Rectangle],
        anchor: GridPos,
        destination: CollectionId,
        existing: &[Rectangle],
    ) -> Result<Vec<Rectangle>> {
        check_dimensions(moving, self.column_count)?;

        let Some(origin) = group_origin(moving) else {
            return Ok(Vec::new());
        };

        debug!(
            cards = moving.len(),
            anchor_row = anchor.row,
            anchor_col = anchor.col,
            %destination,
            search = ?self.search,
            "Placing cards"
        );

        let moving_ids: HashSet<CardId> = moving.iter().map(|c| c.id).collect();
        let mut matrix = OccupancyMatrix::build(existing, &moving_ids, self.column_count)?;

        let offset = |card: &Rectangle| (card.row - origin.row, card.col - origin.col);

        let mut sequence: Vec<usize> = (0..moving.len()).collect();
        sequence.sort_by_key(|&i| (moving[i].order, offset(&moving[i])));

        let mut placed = moving.to_vec();
        for i in sequence {
            let (dr, dc) = offset(&moving[i]);
            let card = &mut placed[i];
            let preferred = GridPos::new(
                anchor.row.saturating_add(dr),
                anchor.col.saturating_add(dc),
            );

            let pos = if matrix.is_region_free(preferred.row, preferred.col, card.width, card.height)
            {
                preferred
            } else {
                let pos = self.resolve_collision(&matrix, preferred, card)?;
                trace!(
                    card = %card.id,
                    preferred_row = preferred.row,
                    preferred_col = preferred.col,
                    row = pos.row,
                    col = pos.col,
                    "Relocated colliding card"
                );
                pos
            };

            card.set_pos(pos);
            card.parent = Some(destination);
            matrix.claim(card);
        }

        Ok(placed)
    }

    fn resolve_collision(
        &self,
        matrix: &OccupancyMatrix,
        preferred: GridPos,
        card: &Rectangle,
    ) -> Result<GridPos> {
        match self.search {
            CollisionSearch::ForwardScan => matrix.find_free_from(preferred, card),
            CollisionSearch::Nearest => match matrix.find_nearest_free(preferred, card) {
                Some(pos) => Ok(pos),
                None => matrix.find_free_from(preferred, card),
            },
        }
    }
}

/// Drop `moving` at `anchor` with the default forward-scan collision search.
pub fn place(
    moving: &[Rectangle],
    anchor: GridPos,
    destination: CollectionId,
    existing: &[Rectangle],
    column_count: u32,
) -> Result<Vec<Rectangle>> {
    PlacementResolver::with_columns(column_count, CollisionSearch::ForwardScan)?
        .place(moving, anchor, destination, existing)
}

/// Top-left corner of the group's bounding box.
fn group_origin(cards: &[Rectangle]) -> Option<GridPos> {
    let row = cards.iter().map(|c| c.row).min()?;
    let col = cards.iter().map(|c| c.col).min()?;
    Some(GridPos::new(row, col))
}
