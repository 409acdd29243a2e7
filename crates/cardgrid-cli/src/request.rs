//! JSON request documents, one per subcommand.

use cardgrid_layout::{CollectionId, GridPos, Rectangle, RowDirection};
use serde::{Deserialize, Serialize};

/// `cardgrid pack`
#[derive(Debug, Deserialize)]
pub struct PackRequest {
    pub cards: Vec<Rectangle>,
}

/// `cardgrid check`
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub candidate: Rectangle,
    #[serde(default)]
    pub existing: Vec<Rectangle>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CheckResponse {
    pub open: bool,
}

/// `cardgrid place`
#[derive(Debug, Deserialize)]
pub struct PlaceRequest {
    pub moving: Vec<Rectangle>,
    pub anchor: GridPos,
    pub destination: CollectionId,
    #[serde(default)]
    pub existing: Vec<Rectangle>,
}

/// `cardgrid insert-row`
#[derive(Debug, Deserialize)]
pub struct InsertRowRequest {
    pub reference: Rectangle,
    pub direction: RowDirection,
    pub cards: Vec<Rectangle>,
}

/// `cardgrid append`
#[derive(Debug, Deserialize)]
pub struct AppendRequest {
    pub incoming: Vec<Rectangle>,
    pub destination: CollectionId,
    #[serde(default)]
    pub existing: Vec<Rectangle>,
}
