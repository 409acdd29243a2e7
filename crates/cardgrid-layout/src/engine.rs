//! Configured entry point for one collection.
//!
//! [`GridEngine`] validates a [`GridConfig`] once and then runs every layout
//! operation with its column count and collision strategy, each inside a
//! `tracing` span named after the operation.

use std::collections::HashSet;

use tracing::debug_span;

use crate::placement::PlacementResolver;
use crate::{
    append, flow, order, rows, spot, CardId, CollectionId, GridConfig, GridPos, LayoutMode,
    OccupancyMatrix, OrderPlacement, Rectangle, Result, RowDirection,
};

/// Layout operations bound to a validated configuration.
#[derive(Debug, Clone)]
pub struct GridEngine {
    config: GridConfig,
    resolver: PlacementResolver,
}

impl GridEngine {
    /// Validate `config` and build an engine for it.
    pub fn new(config: GridConfig) -> Result<Self> {
        let resolver = PlacementResolver::new(&config)?;
        Ok(Self { config, resolver })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Occupancy of `cards`, leaving out `excluding`.
    pub fn matrix(
        &self,
        cards: &[Rectangle],
        excluding: &HashSet<CardId>,
    ) -> Result<OccupancyMatrix> {
        let _span = debug_span!("matrix", cards = cards.len()).entered();
        OccupancyMatrix::build(cards, excluding, self.config.column_count)
    }

    /// Flow-pack `cards` into the configured columns.
    pub fn pack(&self, cards: &[Rectangle]) -> Result<Vec<Rectangle>> {
        let _span = debug_span!("pack", cards = cards.len()).entered();
        flow::pack(cards, self.config.column_count)
    }

    /// Whether `candidate` fits exactly where it is among `existing`.
    pub fn is_open(&self, candidate: &Rectangle, existing: &[Rectangle]) -> bool {
        let _span = debug_span!("is_open", card = %candidate.id).entered();
        spot::is_open(candidate, existing, self.config.column_count)
    }

    /// Drop `moving` at `anchor` on `destination`.
    pub fn place(
        &self,
        moving: &[Rectangle],
        anchor: GridPos,
        destination: CollectionId,
        existing: &[Rectangle],
    ) -> Result<Vec<Rectangle>> {
        let _span = debug_span!("place", cards = moving.len(), %destination).entered();
        self.resolver.place(moving, anchor, destination, existing)
    }

    /// Open a row on `direction` of `reference`.
    pub fn insert_row(
        &self,
        reference: &Rectangle,
        direction: RowDirection,
        all_cards: &[Rectangle],
    ) -> Vec<Rectangle> {
        let _span = debug_span!("insert_row", reference = %reference.id).entered();
        rows::insert_row(reference, direction, all_cards)
    }

    /// Add `incoming` cards to `destination` and return every card of the
    /// collection afterwards.
    ///
    /// Flow collections splice the cards in at `at` and re-pack the whole
    /// collection. Boards ignore `at` and append the cards below the existing
    /// content.
    pub fn insert_cards(
        &self,
        incoming: &[Rectangle],
        existing: &[Rectangle],
        destination: CollectionId,
        at: OrderPlacement,
    ) -> Result<Vec<Rectangle>> {
        let _span = debug_span!(
            "insert_cards",
            cards = incoming.len(),
            mode = ?self.config.mode,
            %destination
        )
        .entered();

        match self.config.mode {
            LayoutMode::Flow => {
                let reparented: Vec<Rectangle> = incoming
                    .iter()
                    .map(|card| card.clone().with_parent(destination))
                    .collect();
                let combined = order::insert_at_order(existing, &reparented, at);
                flow::pack(&combined, self.config.column_count)
            }
            LayoutMode::Board => {
                let placed =
                    append::append_below(incoming, existing, destination, self.config.column_count)?;
                let mut all = existing.to_vec();
                all.extend(placed);
                Ok(all)
            }
        }
    }
}
