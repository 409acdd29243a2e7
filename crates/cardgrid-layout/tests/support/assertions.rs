//! Custom assertions for layout tests.

use cardgrid_layout::Rectangle;

/// Assert that no two non-reference cards share a cell.
#[track_caller]
pub fn assert_no_overlap(cards: &[Rectangle]) {
    let primaries: Vec<&Rectangle> = cards.iter().filter(|c| !c.is_reference()).collect();
    for (i, a) in primaries.iter().enumerate() {
        for b in &primaries[i + 1..] {
            assert!(
                !a.overlaps(b),
                "Cards overlap: {} at ({}, {}) {}x{} and {} at ({}, {}) {}x{}",
                a.id,
                a.row,
                a.col,
                a.width,
                a.height,
                b.id,
                b.row,
                b.col,
                b.width,
                b.height
            );
        }
    }
}

/// Assert that every card stays inside `column_count` columns.
#[track_caller]
pub fn assert_in_bounds(cards: &[Rectangle], column_count: u32) {
    for card in cards {
        assert!(
            card.fits_columns(column_count),
            "{} at column {} with width {} exceeds {} columns",
            card.id,
            card.col,
            card.width,
            column_count
        );
    }
}
