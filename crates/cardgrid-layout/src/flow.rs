//! # Flow Packing
//!
//! Auto-placement for fixed-column collections.
//!
//! Cards are taken in `order` and each one goes to the first anchor, scanning
//! rows top to bottom and columns left to right, where its whole footprint is
//! free. Nothing is ever deferred to wait for a better fit, so the result
//! reads like text and re-packing a packed layout leaves it unchanged.

use tracing::{debug, trace};

use crate::config::validate_column_count;
use crate::{GridPos, LayoutError, OccupancyMatrix, Rectangle, Result};

/// Assign row/col to every card in a `column_count`-wide flow layout.
///
/// Returns the cards in their input order. Fails with
/// [`LayoutError::InvalidDimensions`] before placing anything if a card is
/// empty or wider than the grid.
pub fn pack(cards: &[Rectangle], column_count: u32) -> Result<Vec<Rectangle>> {
    validate_column_count(column_count)?;
    check_dimensions(cards, column_count)?;

    debug!(cards = cards.len(), column_count, "Flow packing");

    // Stable: equal orders keep their input sequence.
    let mut sequence: Vec<usize> = (0..cards.len()).collect();
    sequence.sort_by_key(|&i| cards[i].order);

    let mut matrix = OccupancyMatrix::new(column_count)?;
    let mut packed = cards.to_vec();

    for i in sequence {
        let card = &mut packed[i];
        let pos = matrix.find_free_from(GridPos::ORIGIN, card)?;
        card.set_pos(pos);
        // Every card takes a slot in a flow layout, references included.
        matrix.occupy(card.id, pos, card.width, card.height, false);

        trace!(
            card = %card.id,
            row = pos.row,
            col = pos.col,
            width = card.width,
            height = card.height,
            "Packed card"
        );
    }

    Ok(packed)
}

/// Reject any card that cannot fit the grid.
pub(crate) fn check_dimensions(cards: &[Rectangle], column_count: u32) -> Result<()> {
    match cards
        .iter()
        .find(|c| c.width == 0 || c.height == 0 || c.width > column_count)
    {
        Some(card) => Err(LayoutError::InvalidDimensions {
            card: card.id,
            width: card.width,
            height: card.height,
            column_count,
        }),
        None => Ok(()),
    }
}
