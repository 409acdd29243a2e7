//! Row insertion: open an empty row next to a card by pushing everything past
//! it down by one.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Rectangle;

/// Which side of the reference card the new row opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowDirection {
    Above,
    Below,
}

/// First row that moves when inserting on `direction` of `reference`.
pub fn row_boundary(reference: &Rectangle, direction: RowDirection) -> u32 {
    match direction {
        RowDirection::Above => reference.row,
        RowDirection::Below => reference.row_end(),
    }
}

/// Shift every card starting at or past the boundary down one row.
///
/// All shifted cards move by the same amount, so no overlap can appear
/// between them, and a card left in place that reaches past the boundary
/// already covered the row each shifted card moves into. Returns every card,
/// in input order.
pub fn insert_row(
    reference: &Rectangle,
    direction: RowDirection,
    all_cards: &[Rectangle],
) -> Vec<Rectangle> {
    let boundary = row_boundary(reference, direction);

    let mut shifted = 0usize;
    let cards = all_cards
        .iter()
        .map(|card| {
            let mut card = card.clone();
            if card.row >= boundary {
                card.row = card.row.saturating_add(1);
                shifted += 1;
            }
            card
        })
        .collect();

    debug!(
        reference = %reference.id,
        ?direction,
        boundary,
        shifted,
        "Inserted row"
    );

    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<Rectangle> {
        vec![
            // Row 1, the reference band
            Rectangle::new(0, 1, 1, 2, 1),
            Rectangle::new(1, 1, 3, 1, 1),
            Rectangle::new(2, 1, 4, 1, 1),
            // Row 2
            Rectangle::new(3, 2, 1, 3, 1),
            // Row 3
            Rectangle::new(4, 3, 1, 1, 1),
            Rectangle::new(5, 3, 3, 1, 1),
        ]
    }

    fn rows(cards: &[Rectangle]) -> Vec<u32> {
        cards.iter().map(|c| c.row).collect()
    }

    #[test]
    fn test_insert_below() {
        let cards = cards();
        assert_eq!(row_boundary(&cards[0], RowDirection::Below), 2);

        let result = insert_row(&cards[0], RowDirection::Below, &cards);
        assert_eq!(rows(&result), vec![1, 1, 1, 3, 4, 4]);
    }

    #[test]
    fn test_insert_above_moves_reference_band() {
        let cards = cards();
        let result = insert_row(&cards[3], RowDirection::Above, &cards);
        assert_eq!(rows(&result), vec![1, 1, 1, 3, 4, 4]);

        let result = insert_row(&cards[0], RowDirection::Above, &cards);
        assert_eq!(rows(&result), vec![2, 2, 2, 3, 4, 4]);
    }

    #[test]
    fn test_tall_reference_card() {
        let cards = vec![
            Rectangle::new(0, 0, 0, 1, 3),
            Rectangle::new(1, 1, 1, 1, 1),
            Rectangle::new(2, 3, 0, 1, 1),
        ];
        let result = insert_row(&cards[0], RowDirection::Below, &cards);
        assert_eq!(rows(&result), vec![0, 1, 4]);
    }

    #[test]
    fn test_count_and_columns_unchanged() {
        let cards = cards();
        let result = insert_row(&cards[4], RowDirection::Below, &cards);

        assert_eq!(result.len(), cards.len());
        for (before, after) in cards.iter().zip(&result) {
            assert_eq!(before.id, after.id);
            assert_eq!(before.col, after.col);
        }
    }
}
