//! Appending cards below a board's content.
//!
//! Duplicated or imported cards arrive without meaningful positions for the
//! destination board. They are flowed into a compact block and dropped into
//! the first clear row below everything already on the board, leaving one
//! blank row as a gutter.

use tracing::debug;

use crate::placement::PlacementResolver;
use crate::{flow, CollectionId, CollisionSearch, GridPos, Rectangle, Result};

/// Row where appended cards start: two rows after the last non-blank row, or
/// 0 for an empty board.
pub fn empty_row_for_moving_cards(existing: &[Rectangle]) -> u32 {
    existing
        .iter()
        .map(|card| card.row_end())
        .max()
        .map_or(0, |end| end.saturating_add(1))
}

/// Flow `incoming` into a block and place it at the start of the empty row
/// below `existing`.
pub fn append_below(
    incoming: &[Rectangle],
    existing: &[Rectangle],
    destination: CollectionId,
    column_count: u32,
) -> Result<Vec<Rectangle>> {
    let block = flow::pack(incoming, column_count)?;
    let anchor = GridPos::new(empty_row_for_moving_cards(existing), 0);

    debug!(
        cards = incoming.len(),
        anchor_row = anchor.row,
        %destination,
        "Appending cards below board content"
    );

    let resolver = PlacementResolver::with_columns(column_count, CollisionSearch::ForwardScan)?;
    resolver.place(&block, anchor, destination, existing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutError;

    const DEST: CollectionId = CollectionId(7);

    #[test]
    fn test_empty_row() {
        assert_eq!(empty_row_for_moving_cards(&[]), 0);

        let existing = vec![Rectangle::new(1, 0, 0, 1, 1), Rectangle::new(2, 2, 3, 1, 2)];
        // Last non-blank row is 3.
        assert_eq!(empty_row_for_moving_cards(&existing), 5);
    }

    #[test]
    fn test_append_single_cells_side_by_side() {
        let existing = vec![Rectangle::new(1, 0, 0, 4, 1), Rectangle::new(2, 1, 2, 1, 1)];
        let incoming: Vec<Rectangle> = (10..13)
            .map(|id| Rectangle::new(id, 9, 9, 1, 1).with_order(id as i64))
            .collect();

        let placed = append_below(&incoming, &existing, DEST, 16).unwrap();
        let target = empty_row_for_moving_cards(&existing);
        assert_eq!(target, 3);
        for (index, card) in placed.iter().enumerate() {
            assert_eq!(card.row, target);
            assert_eq!(card.col, index as u32);
            assert_eq!(card.parent, Some(DEST));
        }
    }

    #[test]
    fn test_append_wraps_at_column_count() {
        let incoming = vec![
            Rectangle::sized(1, 3, 1),
            Rectangle::sized(2, 2, 2).with_order(1),
        ];
        let placed = append_below(&incoming, &[], DEST, 4).unwrap();
        let positions: Vec<(u32, u32)> = placed.iter().map(|c| (c.row, c.col)).collect();
        assert_eq!(positions, vec![(0, 0), (1, 0)]);
    }

    #[test]
    fn test_append_rejects_wide_cards() {
        let err = append_below(&[Rectangle::sized(1, 5, 1)], &[], DEST, 4).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidDimensions { .. }));
    }
}
