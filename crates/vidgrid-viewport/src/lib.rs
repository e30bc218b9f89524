// ABOUTME: Viewport size tracking for vidgrid.
// ABOUTME: Observes container resize notifications, coalesced to frame granularity.

mod registry;

pub use registry::{ElementId, FrameScheduler, ObserverHandle, SizeListener, SizeObserverRegistry};
