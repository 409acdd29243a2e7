//! Order insertion for flow collections.
//!
//! Flow layouts derive positions from `order`, so adding cards means
//! splicing them into the sequence and renumbering. The engine never keeps a
//! running counter; the resulting orders depend only on the inputs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Rectangle;

/// Where incoming cards go in the existing sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderPlacement {
    Beginning,
    End,
    /// Before the first existing card whose order is at least this value.
    At(i64),
}

/// Splice `incoming` into `existing` and renumber all cards `0..n`.
///
/// Returns the combined list in its new order. Existing cards keep their
/// relative sequence, as do incoming cards.
pub fn insert_at_order(
    existing: &[Rectangle],
    incoming: &[Rectangle],
    at: OrderPlacement,
) -> Vec<Rectangle> {
    let mut sorted = existing.to_vec();
    sorted.sort_by_key(|c| c.order);

    let split = match at {
        OrderPlacement::Beginning => 0,
        OrderPlacement::End => sorted.len(),
        OrderPlacement::At(order) => sorted.partition_point(|c| c.order < order),
    };

    let tail = sorted.split_off(split);
    let mut combined = sorted;
    combined.extend(incoming.iter().cloned());
    combined.extend(tail);

    for (order, card) in combined.iter_mut().enumerate() {
        card.order = order as i64;
    }

    debug!(
        existing = existing.len(),
        incoming = incoming.len(),
        split,
        "Inserted cards by order"
    );

    combined
}
