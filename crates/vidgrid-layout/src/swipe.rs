// ABOUTME: Swipe gesture detection for page navigation.
// ABOUTME: Translates pointer press/move/release into page actions.

use vidgrid_core::SwipeSettings;

/// Page navigation produced by a completed swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeAction {
    PageNext,
    PagePrev,
}

/// Tracks one pointer drag and decides whether it was a horizontal swipe.
///
/// Detection only; the caller applies the emitted action to the grid
/// controller, so pagination stays testable without pointer events.
#[derive(Debug, Default)]
pub struct SwipeDetector {
    settings: SwipeSettings,
    origin: Option<(f32, f32)>,
    position: (f32, f32),
}

impl SwipeDetector {
    pub fn new(settings: SwipeSettings) -> Self {
        Self {
            settings,
            origin: None,
            position: (0.0, 0.0),
        }
    }

    /// Pointer pressed
    pub fn begin(&mut self, x: f32, y: f32) {
        self.origin = Some((x, y));
        self.position = (x, y);
    }

    /// Pointer moved while pressed
    pub fn update(&mut self, x: f32, y: f32) {
        if self.origin.is_some() {
            self.position = (x, y);
        }
    }

    /// Pointer released; returns the action if the drag was a swipe.
    ///
    /// A swipe needs at least `min_distance` horizontal travel and no more
    /// vertical travel than `max_cross_ratio` times the horizontal. Swiping
    /// left advances (next page), swiping right goes back.
    pub fn end(&mut self) -> Option<SwipeAction> {
        let (origin_x, origin_y) = self.origin.take()?;
        let dx = self.position.0 - origin_x;
        let dy = self.position.1 - origin_y;

        if dx.abs() < self.settings.min_distance {
            return None;
        }
        if dy.abs() > dx.abs() * self.settings.max_cross_ratio {
            return None;
        }

        if dx < 0.0 {
            Some(SwipeAction::PageNext)
        } else {
            Some(SwipeAction::PagePrev)
        }
    }

    /// Abandon the current drag (pointer left the container)
    pub fn cancel(&mut self) {
        self.origin = None;
    }
}
