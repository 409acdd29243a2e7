//! Card footprints on the grid.
//!
//! Everything the engine knows about a card lives in [`Rectangle`]: where it
//! sits, how many cells it spans, its identity and ordering key, and whether
//! it is a reference card. Richer per-card data stays with the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque card identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u64);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card#{}", self.0)
    }
}

/// Opaque collection (board) identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionId(pub u64);

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "collection#{}", self.0)
    }
}

/// What kind of card a rectangle belongs to.
///
/// Only the distinction that matters for overlap checks is kept here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// A regular card that owns its cells.
    #[default]
    Primary,
    /// A linked card pointing at content elsewhere. May share cells.
    Link,
    /// Stand-in created while a duplication finishes. Owns its cells.
    Placeholder,
}

impl CardKind {
    /// Reference cards are exempt from the overlap invariant.
    pub fn is_reference(self) -> bool {
        matches!(self, CardKind::Link)
    }
}

/// A cell coordinate (row, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPos {
    pub row: u32,
    pub col: u32,
}

impl GridPos {
    pub const ORIGIN: GridPos = GridPos { row: 0, col: 0 };

    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// A card's spatial footprint plus the data the engine needs to order and
/// identify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    pub id: CardId,
    pub row: u32,
    pub col: u32,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub kind: CardKind,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<CollectionId>,
}

impl Rectangle {
    /// Create a primary card at `(row, col)` spanning `width` x `height` cells.
    pub fn new(id: u64, row: u32, col: u32, width: u32, height: u32) -> Self {
        Self {
            id: CardId(id),
            row,
            col,
            width,
            height,
            order: 0,
            kind: CardKind::Primary,
            pinned: false,
            parent: None,
        }
    }

    /// Create an unpositioned card of the given size, as a flow collection
    /// would hand it over before packing.
    pub fn sized(id: u64, width: u32, height: u32) -> Self {
        Self::new(id, 0, 0, width, height)
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    pub fn with_kind(mut self, kind: CardKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_parent(mut self, parent: CollectionId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    pub fn is_reference(&self) -> bool {
        self.kind.is_reference()
    }

    pub fn pos(&self) -> GridPos {
        GridPos::new(self.row, self.col)
    }

    pub fn set_pos(&mut self, pos: GridPos) {
        self.row = pos.row;
        self.col = pos.col;
    }

    /// One past the last occupied row.
    pub fn row_end(&self) -> u32 {
        self.row.saturating_add(self.height)
    }

    /// One past the last occupied column.
    pub fn col_end(&self) -> u32 {
        self.col.saturating_add(self.width)
    }

    /// Whether the footprint stays inside `column_count` columns.
    pub fn fits_columns(&self, column_count: u32) -> bool {
        self.col
            .checked_add(self.width)
            .is_some_and(|end| end <= column_count)
    }

    /// Whether this card's cells intersect `other`'s.
    pub fn overlaps(&self, other: &Rectangle) -> bool {
        self.row < other.row_end()
            && other.row < self.row_end()
            && self.col < other.col_end()
            && other.col < self.col_end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_is_reference() {
        assert!(CardKind::Link.is_reference());
        assert!(!CardKind::Primary.is_reference());
        assert!(!CardKind::Placeholder.is_reference());
    }

    #[test]
    fn test_overlaps() {
        let a = Rectangle::new(1, 0, 0, 2, 2);
        let b = Rectangle::new(2, 1, 1, 1, 1);
        let c = Rectangle::new(3, 0, 2, 1, 1);
        let d = Rectangle::new(4, 2, 0, 2, 1);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!a.overlaps(&d));
    }

    #[test]
    fn test_fits_columns() {
        assert!(Rectangle::new(1, 0, 2, 2, 1).fits_columns(4));
        assert!(!Rectangle::new(1, 0, 3, 2, 1).fits_columns(4));
        assert!(!Rectangle::new(1, 0, u32::MAX, 2, 1).fits_columns(4));
    }

    #[test]
    fn test_deserialize_defaults() {
        let card: Rectangle =
            serde_json::from_str(r#"{"id": 7, "row": 1, "col": 2, "width": 1, "height": 3}"#)
                .unwrap();
        assert_eq!(card.id, CardId(7));
        assert_eq!(card.kind, CardKind::Primary);
        assert_eq!(card.order, 0);
        assert!(!card.pinned);
        assert_eq!(card.parent, None);
    }

    #[test]
    fn test_deserialize_link_kind() {
        let card: Rectangle = serde_json::from_str(
            r#"{"id": 7, "row": 0, "col": 0, "width": 1, "height": 1, "kind": "link"}"#,
        )
        .unwrap();
        assert!(card.is_reference());
    }
}
