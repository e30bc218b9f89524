// ABOUTME: The ordered catalog of candidate grid shapes.
// ABOUTME: Validates entries and builds the standard layout table.

use vidgrid_core::{LayoutEntry, Orientation};

/// One candidate grid shape with its applicability constraints
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDefinition {
    pub name: String,
    pub columns: u16,
    pub rows: u16,
    /// Smallest tile count this shape is meant for
    pub min_tiles: usize,
    /// Largest tile count one page of this shape holds
    pub max_tiles: usize,
    /// Viewport must be at least this wide for the shape to apply
    pub min_width: f32,
    /// Viewport must be at least this tall for the shape to apply
    pub min_height: f32,
    /// When set, the shape only applies in the matching orientation
    pub orientation: Option<Orientation>,
}

impl LayoutDefinition {
    /// A plain columns-by-rows grid with capacity columns * rows
    pub fn grid(columns: u16, rows: u16) -> Self {
        Self {
            name: format!("{columns}x{rows}"),
            columns,
            rows,
            min_tiles: 1,
            max_tiles: columns as usize * rows as usize,
            min_width: 0.0,
            min_height: 0.0,
            orientation: None,
        }
    }

    pub fn with_min_width(mut self, min_width: f32) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn with_min_height(mut self, min_height: f32) -> Self {
        self.min_height = min_height;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog must contain at least one layout")]
    Empty,

    #[error("Layout '{0}' has zero columns or rows")]
    ZeroDimension(String),

    #[error("Layout '{name}' has invalid tile range {min_tiles}..={max_tiles}")]
    InvalidTileRange {
        name: String,
        min_tiles: usize,
        max_tiles: usize,
    },

    #[error("Layout '{0}' breaks ascending capacity order")]
    CapacityOrder(String),
}

/// Ordered list of candidate layouts, smallest capacity first.
///
/// Catalog order encodes precedence: when two entries can hold the same
/// tile count, the earlier one wins. The standard table puts wide shapes
/// before tall ones so typical screens prefer them.
#[derive(Debug, Clone)]
pub struct LayoutCatalog {
    entries: Vec<LayoutDefinition>,
}

impl LayoutCatalog {
    /// Build a catalog, enforcing the ordering and field invariants
    pub fn new(entries: Vec<LayoutDefinition>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut previous_capacity = 0;
        for entry in &entries {
            if entry.columns == 0 || entry.rows == 0 {
                return Err(CatalogError::ZeroDimension(entry.name.clone()));
            }
            if entry.max_tiles < entry.min_tiles || entry.min_tiles == 0 {
                return Err(CatalogError::InvalidTileRange {
                    name: entry.name.clone(),
                    min_tiles: entry.min_tiles,
                    max_tiles: entry.max_tiles,
                });
            }
            if entry.max_tiles < previous_capacity {
                return Err(CatalogError::CapacityOrder(entry.name.clone()));
            }
            previous_capacity = entry.max_tiles;
        }
        Ok(Self { entries })
    }

    /// The built-in layout table
    pub fn standard() -> Self {
        let entries = vec![
            LayoutDefinition::grid(1, 1),
            LayoutDefinition::grid(1, 2).with_orientation(Orientation::Portrait),
            LayoutDefinition::grid(2, 1).with_orientation(Orientation::Landscape),
            LayoutDefinition::grid(2, 2).with_min_width(460.0),
            LayoutDefinition::grid(3, 2)
                .with_min_width(480.0)
                .with_orientation(Orientation::Landscape),
            LayoutDefinition::grid(2, 3).with_orientation(Orientation::Portrait),
            LayoutDefinition::grid(3, 3).with_min_width(700.0),
            LayoutDefinition::grid(4, 4).with_min_width(960.0),
            LayoutDefinition::grid(5, 5).with_min_width(1100.0),
        ];
        // The built-in table satisfies the invariants by construction
        Self { entries }
    }

    /// Build a catalog from config file entries
    pub fn from_entries(entries: &[LayoutEntry]) -> Result<Self, CatalogError> {
        let definitions = entries
            .iter()
            .map(|entry| {
                let max_tiles = entry
                    .max_tiles
                    .unwrap_or(entry.columns as usize * entry.rows as usize);
                LayoutDefinition {
                    name: entry
                        .name
                        .clone()
                        .unwrap_or_else(|| format!("{}x{}", entry.columns, entry.rows)),
                    columns: entry.columns,
                    rows: entry.rows,
                    min_tiles: entry.min_tiles,
                    max_tiles,
                    min_width: entry.min_width,
                    min_height: entry.min_height,
                    orientation: entry.orientation,
                }
            })
            .collect();
        Self::new(definitions)
    }

    pub fn entries(&self) -> &[LayoutDefinition] {
        &self.entries
    }

    /// The smallest-capacity entry, used as the universal fallback
    pub fn first(&self) -> &LayoutDefinition {
        &self.entries[0]
    }

    /// The largest page capacity any entry offers
    pub fn max_capacity(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.max_tiles)
            .max()
            .unwrap_or(1)
    }
}

impl Default for LayoutCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
