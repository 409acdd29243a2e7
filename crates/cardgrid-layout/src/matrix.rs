//! # Occupancy Matrix
//!
//! Row-keyed table mapping each grid cell to the card covering it.
//!
//! ## Overview
//!
//! The matrix has a fixed number of columns and only stores rows that some
//! card covers; any other row counts as empty, so a card far down the board
//! costs one row entry, not every row above it. Reference cards are recorded
//! so callers can see them, but they never make a region "occupied".
//!
//! A region must end at or before `u32::MAX`, so the last row index is never
//! a valid anchor.
//!
//! Both the flow packer and the placement resolver scan the matrix for free
//! anchors, so the scans live here next to the data they walk.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use tracing::trace;

use crate::config::validate_column_count;
use crate::{CardId, GridPos, LayoutError, Rectangle, Result};

/// The card covering a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupant {
    pub id: CardId,
    /// Reference occupants do not block placement.
    pub reference: bool,
}

/// Cell occupancy for one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyMatrix {
    column_count: u32,
    rows: BTreeMap<u32, Vec<Option<Occupant>>>,
}

impl OccupancyMatrix {
    /// Create an empty matrix with `column_count` columns.
    pub fn new(column_count: u32) -> Result<Self> {
        validate_column_count(column_count)?;
        Ok(Self {
            column_count,
            rows: BTreeMap::new(),
        })
    }

    /// Build the matrix for `rectangles`, leaving out any card in `excluding`.
    ///
    /// Excluding cards is how callers ask what the board looks like without
    /// the cards currently being dragged.
    pub fn build(
        rectangles: &[Rectangle],
        excluding: &HashSet<CardId>,
        column_count: u32,
    ) -> Result<Self> {
        let mut matrix = Self::new(column_count)?;
        for rect in rectangles.iter().filter(|r| !excluding.contains(&r.id)) {
            matrix.claim(rect);
        }

        trace!(
            cards = rectangles.len(),
            excluded = excluding.len(),
            rows = matrix.rows(),
            stored_rows = matrix.rows.len(),
            columns = column_count,
            "Built occupancy matrix"
        );

        Ok(matrix)
    }

    /// Number of columns.
    pub fn column_count(&self) -> u32 {
        self.column_count
    }

    /// Current row extent. Every row at or past this index is empty.
    pub fn rows(&self) -> u32 {
        self.rows
            .last_key_value()
            .map_or(0, |(&row, _)| row.saturating_add(1))
    }

    /// Occupant of a cell, if any.
    pub fn cell(&self, row: u32, col: u32) -> Option<Occupant> {
        self.rows
            .get(&row)
            .and_then(|cells| cells.get(col as usize))
            .copied()
            .flatten()
    }

    /// Identity of the card covering `(row, col)`.
    pub fn occupant_at(&self, row: u32, col: u32) -> Option<CardId> {
        self.cell(row, col).map(|occupant| occupant.id)
    }

    /// Whether a `width` x `height` region anchored at `(row, col)` is inside
    /// the grid and covered by nothing but reference cards.
    pub fn is_region_free(&self, row: u32, col: u32, width: u32, height: u32) -> bool {
        let Some(col_end) = col.checked_add(width) else {
            return false;
        };
        if col_end > self.column_count {
            return false;
        }
        let Some(row_end) = row.checked_add(height) else {
            return false;
        };

        self.rows.range(row..row_end).all(|(_, cells)| {
            cells[col as usize..col_end as usize]
                .iter()
                .all(|cell| cell.map_or(true, |o| o.reference))
        })
    }

    /// Mark the cells under `rect` as covered by it.
    pub fn claim(&mut self, rect: &Rectangle) {
        self.occupy(rect.id, rect.pos(), rect.width, rect.height, rect.is_reference());
    }

    /// Mark a region as covered by `id`.
    ///
    /// Columns past the bound are clipped. A primary occupant replaces a
    /// reference one; a reference never replaces a primary.
    pub(crate) fn occupy(
        &mut self,
        id: CardId,
        pos: GridPos,
        width: u32,
        height: u32,
        reference: bool,
    ) {
        let col_end = pos.col.saturating_add(width).min(self.column_count);
        if pos.col >= col_end {
            trace!(card = %id, col = pos.col, "Card lies outside the column bound");
            return;
        }

        let columns = self.column_count as usize;
        let row_end = pos.row.saturating_add(height);
        for r in pos.row..row_end {
            let cells = self.rows.entry(r).or_insert_with(|| vec![None; columns]);
            for cell in &mut cells[pos.col as usize..col_end as usize] {
                let replace = match cell {
                    None => true,
                    Some(existing) => existing.reference && !reference,
                };
                if replace {
                    *cell = Some(Occupant { id, reference });
                }
            }
        }
    }

    /// Find the first anchor at or after `start`, in row-major order, where
    /// `card`'s footprint is free.
    ///
    /// A start column that cannot fit the card continues on the next row at
    /// column 0. Rows past the extent are empty, so the scan always ends within
    /// a couple of rows of `max(start.row, rows())`; running past that budget,
    /// or off the last row, is reported as [`LayoutError::OutOfBounds`].
    pub fn find_free_from(&self, start: GridPos, card: &Rectangle) -> Result<GridPos> {
        let max_col = self.max_anchor_col(card)?;

        let budget = start.row.max(self.rows()).saturating_add(1);
        let (mut row, mut col) = (start.row, start.col);

        loop {
            if col <= max_col {
                if self.is_region_free(row, col, card.width, card.height) {
                    return Ok(GridPos::new(row, col));
                }
                col += 1;
            } else {
                match row.checked_add(1) {
                    Some(next) if next <= budget => {
                        row = next;
                        col = 0;
                    }
                    _ => break,
                }
            }
        }

        Err(LayoutError::OutOfBounds {
            card: card.id,
            rows_searched: budget.saturating_sub(start.row).saturating_add(1),
        })
    }

    /// Find the free anchor closest to `preferred`.
    ///
    /// Candidate rows run from 0 up to the current extent or the bottom of
    /// the preferred region, whichever reaches further down. Distance is
    /// squared Euclidean. Ties prefer the smaller row delta, then anchors
    /// after `preferred` in row-major order, then row-major order. Returns
    /// `None` when no candidate fits.
    pub fn find_nearest_free(&self, preferred: GridPos, card: &Rectangle) -> Option<GridPos> {
        let max_col = self.max_anchor_col(card).ok()?;
        let limit = self
            .rows()
            .max(preferred.row.saturating_add(card.height));

        let mut best: Option<((i64, i64, bool, u32, u32), GridPos)> = None;
        let mut step: u32 = 0;
        loop {
            // Rows `step` away are at least `step²` away.
            if let Some(((distance, ..), _)) = best {
                if i64::from(step).pow(2) > distance {
                    break;
                }
            }

            let above = preferred.row.checked_sub(step);
            let below = preferred
                .row
                .checked_add(step)
                .filter(|&row| step > 0 && row < limit);
            if above.is_none() && below.is_none() {
                break;
            }

            for row in [above, below].into_iter().flatten().filter(|&r| r < limit) {
                for col in 0..=max_col {
                    if !self.is_region_free(row, col, card.width, card.height) {
                        continue;
                    }

                    let dr = i64::from(row) - i64::from(preferred.row);
                    let dc = i64::from(col) - i64::from(preferred.col);
                    let before = (row, col) < (preferred.row, preferred.col);
                    let key = (dr * dr + dc * dc, dr.abs(), before, row, col);

                    if best.map_or(true, |(best_key, _)| key < best_key) {
                        best = Some((key, GridPos::new(row, col)));
                    }
                }
            }

            match step.checked_add(1) {
                Some(next) => step = next,
                None => break,
            }
        }

        best.map(|(_, pos)| pos)
    }

    fn max_anchor_col(&self, card: &Rectangle) -> Result<u32> {
        if card.width == 0 || card.height == 0 || card.width > self.column_count {
            return Err(LayoutError::InvalidDimensions {
                card: card.id,
                width: card.width,
                height: card.height,
                column_count: self.column_count,
            });
        }
        Ok(self.column_count - card.width)
    }
}

impl fmt::Display for OccupancyMatrix {
    /// One line per row; `_` marks an empty cell, `~` a reference-only cell.
    /// Long runs of empty rows collapse into a single `...` line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let empty = vec!["_"; self.column_count as usize].join(", ");
        let mut next = 0u32;
        for (&row, cells) in &self.rows {
            let gap = row - next;
            if gap > 3 {
                writeln!(f, "... {gap} empty rows")?;
            } else {
                for _ in 0..gap {
                    writeln!(f, "[{empty}]")?;
                }
            }

            let line: Vec<String> = cells
                .iter()
                .map(|cell| match cell {
                    None => "_".to_string(),
                    Some(o) if o.reference => "~".to_string(),
                    Some(o) => o.id.0.to_string(),
                })
                .collect();
            writeln!(f, "[{}]", line.join(", "))?;
            next = row.saturating_add(1);
        }
        Ok(())
    }
}
