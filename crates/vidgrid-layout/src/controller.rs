// ABOUTME: Orchestrates viewport size, layout selection, and pagination.
// ABOUTME: Publishes column/row counts and the visible page as layout hints.

use vidgrid_core::{TrackReference, ViewportSize};

use crate::catalog::LayoutCatalog;
use crate::page::{paginate, PageView, Pager};
use crate::select::select_layout;
use crate::stable::stable_merge;
use crate::swipe::SwipeAction;

/// Presentation hints for the consuming UI
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutHints {
    pub layout: String,
    pub columns: u16,
    pub rows: u16,
    pub current_page: usize,
    pub total_pages: usize,
    /// The tracks to render on the current page, in display order
    pub tracks: Vec<TrackReference>,
}

/// Derives the visible grid from the latest observed inputs.
///
/// Every recomputation is a synchronous pure derivation: select a layout
/// for the current tile count and viewport, take its capacity as the page
/// size, and clamp the page index into the new page count. There is no
/// other state to coordinate.
pub struct GridController {
    catalog: LayoutCatalog,
    tracks: Vec<TrackReference>,
    size: ViewportSize,
    pager: Pager,
    last_layout: Option<String>,
}

impl GridController {
    pub fn new(catalog: LayoutCatalog) -> Self {
        Self {
            catalog,
            tracks: Vec::new(),
            size: ViewportSize::default(),
            pager: Pager::new(),
            last_layout: None,
        }
    }

    /// Replace the track list from the room layer.
    ///
    /// The new list is stable-merged against the current ordering so a
    /// resort upstream does not reshuffle visible tiles.
    pub fn set_tracks(&mut self, next: &[TrackReference]) {
        self.tracks = stable_merge(&self.tracks, next);
        self.recompute();
    }

    /// Latest observed container size
    pub fn on_resize(&mut self, size: ViewportSize) {
        self.size = size;
        self.recompute();
    }

    pub fn next_page(&mut self) {
        let total_pages = self.total_pages();
        self.pager.next_page(total_pages);
    }

    pub fn prev_page(&mut self) {
        self.pager.prev_page();
    }

    pub fn apply(&mut self, action: SwipeAction) {
        match action {
            SwipeAction::PageNext => self.next_page(),
            SwipeAction::PagePrev => self.prev_page(),
        }
    }

    pub fn tracks(&self) -> &[TrackReference] {
        &self.tracks
    }

    /// Compute the current layout hints
    pub fn snapshot(&self) -> LayoutHints {
        let layout = select_layout(&self.catalog, self.tracks.len(), self.size);
        // Catalog validation guarantees max_tiles >= 1, so pagination
        // cannot fail on capacity.
        let page = paginate(layout.max_tiles, &self.tracks, self.pager.current()).unwrap_or(
            PageView {
                current_page: 0,
                total_pages: 1,
                tracks: &[],
            },
        );

        LayoutHints {
            layout: layout.name.clone(),
            columns: layout.columns,
            rows: layout.rows,
            current_page: page.current_page,
            total_pages: page.total_pages,
            tracks: page.tracks.to_vec(),
        }
    }

    fn total_pages(&self) -> usize {
        let layout = select_layout(&self.catalog, self.tracks.len(), self.size);
        self.tracks.len().div_ceil(layout.max_tiles.max(1)).max(1)
    }

    fn recompute(&mut self) {
        let layout = select_layout(&self.catalog, self.tracks.len(), self.size);
        let total_pages = self.tracks.len().div_ceil(layout.max_tiles.max(1)).max(1);
        self.pager.clamp(total_pages);

        if self.last_layout.as_deref() != Some(layout.name.as_str()) {
            tracing::debug!(
                "Layout changed to {} ({}x{}, {} tiles over {} pages)",
                layout.name,
                layout.columns,
                layout.rows,
                self.tracks.len(),
                total_pages
            );
            self.last_layout = Some(layout.name.clone());
        } else {
            tracing::trace!(
                "Recomputed layout {}: {} tiles, page {}/{}",
                layout.name,
                self.tracks.len(),
                self.pager.current() + 1,
                total_pages
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidgrid_core::TrackReference;

    fn cams(count: usize) -> Vec<TrackReference> {
        (0..count)
            .map(|index| {
                let identity = format!("p{index}");
                TrackReference::camera(identity.as_str(), format!("TR_{index}"))
            })
            .collect()
    }

    #[test]
    fn five_tiles_at_500x400_fit_one_page() {
        let mut controller = GridController::new(LayoutCatalog::standard());
        controller.on_resize(ViewportSize::new(500.0, 400.0));
        controller.set_tracks(&cams(5));

        let hints = controller.snapshot();
        assert_eq!(hints.layout, "3x2");
        assert_eq!((hints.columns, hints.rows), (3, 2));
        assert_eq!(hints.total_pages, 1);
        assert_eq!(hints.tracks.len(), 5);
    }

    #[test]
    fn thirty_tiles_overflow_into_two_pages() {
        let mut controller = GridController::new(LayoutCatalog::standard());
        controller.on_resize(ViewportSize::new(1200.0, 800.0));
        controller.set_tracks(&cams(30));

        let hints = controller.snapshot();
        assert_eq!(hints.layout, "5x5");
        assert_eq!(hints.total_pages, 2);
        assert_eq!(hints.tracks.len(), 25);

        controller.next_page();
        let hints = controller.snapshot();
        assert_eq!(hints.current_page, 1);
        assert_eq!(hints.tracks.len(), 5);

        // Already on the last page
        controller.next_page();
        assert_eq!(controller.snapshot().current_page, 1);
    }

    #[test]
    fn empty_room_still_has_a_layout() {
        let controller = GridController::new(LayoutCatalog::standard());
        let hints = controller.snapshot();
        assert_eq!(hints.layout, "1x1");
        assert_eq!(hints.total_pages, 1);
        assert!(hints.tracks.is_empty());
    }

    #[test]
    fn page_clamps_when_tracks_leave() {
        let mut controller = GridController::new(LayoutCatalog::standard());
        controller.on_resize(ViewportSize::new(1200.0, 800.0));
        controller.set_tracks(&cams(30));
        controller.next_page();
        assert_eq!(controller.snapshot().current_page, 1);

        // Dropping to one page of tracks invalidates page 1
        controller.set_tracks(&cams(10));
        let hints = controller.snapshot();
        assert_eq!(hints.current_page, 0);
        assert_eq!(hints.total_pages, 1);
    }

    #[test]
    fn resort_does_not_reshuffle_visible_tiles() {
        let mut controller = GridController::new(LayoutCatalog::standard());
        controller.on_resize(ViewportSize::new(1200.0, 800.0));
        let tracks = cams(9);
        controller.set_tracks(&tracks);
        let before = controller.snapshot().tracks;

        let mut reversed = tracks.clone();
        reversed.reverse();
        controller.set_tracks(&reversed);
        assert_eq!(controller.snapshot().tracks, before);
    }

    #[test]
    fn swipe_actions_map_to_navigation() {
        let mut controller = GridController::new(LayoutCatalog::standard());
        controller.on_resize(ViewportSize::new(1200.0, 800.0));
        controller.set_tracks(&cams(30));

        controller.apply(SwipeAction::PageNext);
        assert_eq!(controller.snapshot().current_page, 1);
        controller.apply(SwipeAction::PagePrev);
        assert_eq!(controller.snapshot().current_page, 0);
        controller.apply(SwipeAction::PagePrev);
        assert_eq!(controller.snapshot().current_page, 0);
    }

    #[test]
    fn shrinking_viewport_degrades_to_smaller_grid() {
        let mut controller = GridController::new(LayoutCatalog::standard());
        controller.set_tracks(&cams(12));

        controller.on_resize(ViewportSize::new(1200.0, 800.0));
        assert_eq!(controller.snapshot().layout, "4x4");

        controller.on_resize(ViewportSize::new(800.0, 600.0));
        let hints = controller.snapshot();
        assert_eq!(hints.layout, "3x3");
        assert_eq!(hints.total_pages, 2);
    }
}
