//! Test support utilities for layout integration tests
//!
//! - Fixtures: boards from the product's regression suite
//! - Assertions: layout invariants with readable failure messages

#![allow(dead_code)]

mod assertions;

pub use assertions::*;

use cardgrid_layout::Rectangle;

/// A 16-column board:
///
/// ```text
/// [[0, 0, 0, 0, _, _, ...],
///  [1, 2, 3, _, 4, _, ...],
///  [1, _, 5, 5, _, _, ...],
///  [_, 6, 7, 7, 7, _, ...]]
/// ```
pub fn sixteen_column_board() -> Vec<Rectangle> {
    vec![
        Rectangle::new(0, 0, 0, 4, 1),
        Rectangle::new(1, 1, 0, 1, 2),
        Rectangle::new(2, 1, 1, 1, 1),
        Rectangle::new(3, 1, 2, 1, 1),
        Rectangle::new(4, 1, 4, 1, 1),
        Rectangle::new(5, 2, 2, 2, 1),
        Rectangle::new(6, 3, 1, 1, 1),
        Rectangle::new(7, 3, 2, 3, 1),
    ]
}

/// Four cards dragged from another board; relative shape:
///
/// ```text
/// [[a, b, b, _, c],
///  [d, _, _, _, _],
///  [d, _, _, _, _]]
/// ```
pub fn dragged_group() -> Vec<Rectangle> {
    vec![
        Rectangle::new(100, 3, 5, 1, 1).with_order(0),
        Rectangle::new(101, 3, 6, 2, 1).with_order(1),
        Rectangle::new(102, 3, 8, 1, 1).with_order(2),
        Rectangle::new(103, 4, 5, 1, 2).with_order(3),
    ]
}

/// `(row, col)` of every card, in order.
pub fn positions(cards: &[Rectangle]) -> Vec<(u32, u32)> {
    cards.iter().map(|c| (c.row, c.col)).collect()
}

/// Install a test subscriber so `RUST_LOG=trace cargo test` shows engine logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
