// ABOUTME: Grid layout selection and pagination for video tile grids.
// ABOUTME: Picks a columns-by-rows shape for a viewport and pages tiles into it.

mod catalog;
mod controller;
mod page;
mod select;
mod stable;
mod swipe;

pub use catalog::{CatalogError, LayoutCatalog, LayoutDefinition};
pub use controller::{GridController, LayoutHints};
pub use page::{paginate, PageError, PageView, Pager};
pub use select::select_layout;
pub use stable::stable_merge;
pub use swipe::{SwipeAction, SwipeDetector};
