// ABOUTME: Shared types and configuration for vidgrid.
// ABOUTME: Defines track references, viewport sizes, and config file handling.

pub mod config;
pub mod size;
pub mod track;

pub use config::{Config, LayoutEntry, SwipeSettings};
pub use size::{Orientation, ViewportSize};
pub use track::{ParticipantIdentity, TrackReference, TrackSource};
