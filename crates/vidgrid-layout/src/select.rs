// ABOUTME: Layout selection - picks the best-fitting grid shape.
// ABOUTME: Pure function over the catalog, tile count, and viewport size.

use vidgrid_core::ViewportSize;

use crate::catalog::{LayoutCatalog, LayoutDefinition};

/// Pick the layout that best fits `tile_count` tiles into `size`.
///
/// Entries qualify when the viewport meets their minimum width/height and
/// matches their orientation constraint, if any. Among qualifying entries
/// the smallest capacity that still holds every tile wins; when the count
/// exceeds every capacity, the largest qualifying entry is chosen and the
/// overflow is left to pagination. A viewport smaller than every entry's
/// minimums falls back to the first catalog entry so there is always a
/// usable shape. Ties on capacity resolve to the earlier catalog entry.
pub fn select_layout<'a>(
    catalog: &'a LayoutCatalog,
    tile_count: usize,
    size: ViewportSize,
) -> &'a LayoutDefinition {
    let orientation = size.orientation();
    let qualifies = |layout: &LayoutDefinition| {
        layout.min_width <= size.width
            && layout.min_height <= size.height
            && layout
                .orientation
                .is_none_or(|constraint| constraint == orientation)
    };

    let mut largest: Option<&LayoutDefinition> = None;
    for layout in catalog.entries() {
        if !qualifies(layout) {
            continue;
        }
        // Entries are ordered by ascending capacity, so the first fit is
        // the smallest one.
        if layout.max_tiles >= tile_count {
            return layout;
        }
        if largest.is_none_or(|best| layout.max_tiles > best.max_tiles) {
            largest = Some(layout);
        }
    }

    // Every qualifying entry overflows, or nothing qualified at all
    largest.unwrap_or_else(|| catalog.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LayoutDefinition;
    use vidgrid_core::Orientation;

    fn standard() -> LayoutCatalog {
        LayoutCatalog::standard()
    }

    #[test]
    fn zero_tiles_selects_smallest_layout() {
        let catalog = standard();
        let layout = select_layout(&catalog, 0, ViewportSize::new(1200.0, 800.0));
        assert_eq!(layout.name, "1x1");
    }

    #[test]
    fn five_tiles_at_500x400_select_3x2() {
        let catalog = standard();
        let layout = select_layout(&catalog, 5, ViewportSize::new(500.0, 400.0));
        assert_eq!(layout.name, "3x2");
        assert_eq!(layout.max_tiles, 6);
        assert!(layout.min_width <= 500.0);
    }

    #[test]
    fn overflow_selects_largest_qualifying_layout() {
        let catalog = standard();
        let layout = select_layout(&catalog, 30, ViewportSize::new(1200.0, 800.0));
        assert_eq!(layout.name, "5x5");
        assert_eq!(layout.max_tiles, 25);
    }

    #[test]
    fn narrow_viewport_excludes_wide_layouts() {
        // 4x4 needs 960px, 5x5 needs 1100px
        let catalog = standard();
        let layout = select_layout(&catalog, 12, ViewportSize::new(800.0, 600.0));
        assert_eq!(layout.name, "3x3");
    }

    #[test]
    fn portrait_viewport_prefers_portrait_shapes() {
        let catalog = standard();
        let layout = select_layout(&catalog, 2, ViewportSize::new(390.0, 844.0));
        assert_eq!(layout.name, "1x2");

        let layout = select_layout(&catalog, 5, ViewportSize::new(390.0, 844.0));
        assert_eq!(layout.name, "2x3");
    }

    #[test]
    fn landscape_viewport_skips_portrait_shapes() {
        let catalog = standard();
        let layout = select_layout(&catalog, 2, ViewportSize::new(844.0, 390.0));
        assert_eq!(layout.name, "2x1");
    }

    #[test]
    fn tiny_viewport_falls_back_to_first_entry() {
        let catalog = LayoutCatalog::new(vec![
            LayoutDefinition::grid(1, 1).with_min_width(300.0),
            LayoutDefinition::grid(2, 2).with_min_width(600.0),
        ])
        .unwrap();
        let layout = select_layout(&catalog, 4, ViewportSize::new(100.0, 100.0));
        assert_eq!(layout.name, "1x1");
    }

    #[test]
    fn selection_is_deterministic() {
        let catalog = standard();
        let size = ViewportSize::new(1024.0, 768.0);
        let first = select_layout(&catalog, 7, size);
        for _ in 0..10 {
            assert_eq!(select_layout(&catalog, 7, size), first);
        }
    }

    #[test]
    fn capacity_is_monotonic_in_tile_count() {
        let catalog = standard();
        let size = ViewportSize::new(1920.0, 1080.0);
        let mut previous = 0;
        for tile_count in 0..40 {
            let chosen = select_layout(&catalog, tile_count, size).max_tiles;
            assert!(
                chosen >= previous,
                "capacity shrank from {previous} to {chosen} at {tile_count} tiles"
            );
            previous = chosen;
        }
    }

    #[test]
    fn equal_capacity_prefers_catalog_order() {
        let catalog = LayoutCatalog::new(vec![
            LayoutDefinition::grid(1, 1),
            LayoutDefinition::grid(4, 1),
            LayoutDefinition::grid(2, 2),
        ])
        .unwrap();
        let layout = select_layout(&catalog, 4, ViewportSize::new(800.0, 600.0));
        assert_eq!(layout.name, "4x1");
    }

    #[test]
    fn orientation_constraint_respected_on_square_viewport() {
        // Square counts as landscape, so the portrait tier is skipped
        let catalog = standard();
        let layout = select_layout(&catalog, 2, ViewportSize::new(400.0, 400.0));
        assert_eq!(layout.orientation, Some(Orientation::Landscape));
    }
}
