// ABOUTME: Visual-stable merging of reordered track lists.
// ABOUTME: Keeps surviving tiles in their previous relative positions.

use std::collections::HashMap;

use vidgrid_core::TrackReference;

/// Merge a new track list against the previously displayed ordering.
///
/// Tracks present in both lists keep their previous relative order but
/// take their state (mute, subscription) from `next`; tracks missing from
/// `next` are dropped; new tracks append at the tail in `next` order. The
/// result is what gets paginated, so an upstream resort (active speaker,
/// ranking) does not reshuffle tiles the user is already looking at.
pub fn stable_merge(previous: &[TrackReference], next: &[TrackReference]) -> Vec<TrackReference> {
    let mut incoming: HashMap<String, &TrackReference> = next
        .iter()
        .map(|track| (track.tile_id(), track))
        .collect();

    let mut merged = Vec::with_capacity(next.len());
    for track in previous {
        if let Some(current) = incoming.remove(&track.tile_id()) {
            merged.push(current.clone());
        }
    }
    for track in next {
        if incoming.remove(&track.tile_id()).is_some() {
            merged.push(track.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidgrid_core::TrackSource;

    fn cam(identity: &str) -> TrackReference {
        TrackReference::camera(identity, format!("TR_{identity}"))
    }

    #[test]
    fn empty_previous_takes_next_order() {
        let next = vec![cam("a"), cam("b"), cam("c")];
        assert_eq!(stable_merge(&[], &next), next);
    }

    #[test]
    fn reorder_keeps_previous_positions() {
        let previous = vec![cam("a"), cam("b"), cam("c")];
        let reordered = vec![cam("c"), cam("a"), cam("b")];
        assert_eq!(stable_merge(&previous, &reordered), previous);
    }

    #[test]
    fn removed_tracks_vanish() {
        let previous = vec![cam("a"), cam("b"), cam("c")];
        let next = vec![cam("c"), cam("a")];
        assert_eq!(stable_merge(&previous, &next), vec![cam("a"), cam("c")]);
    }

    #[test]
    fn new_tracks_append_in_next_order() {
        let previous = vec![cam("a"), cam("b")];
        let next = vec![cam("d"), cam("b"), cam("a"), cam("e")];
        assert_eq!(
            stable_merge(&previous, &next),
            vec![cam("a"), cam("b"), cam("d"), cam("e")]
        );
    }

    #[test]
    fn surviving_tracks_take_new_state() {
        let previous = vec![cam("a")];
        let mut muted = cam("a");
        if let TrackReference::Track { muted: flag, .. } = &mut muted {
            *flag = true;
        }
        let merged = stable_merge(&previous, &[muted.clone()]);
        assert_eq!(merged, vec![muted]);
    }

    #[test]
    fn placeholder_upgrade_keeps_slot() {
        let previous = vec![
            TrackReference::placeholder("a", TrackSource::Camera),
            cam("b"),
        ];
        let next = vec![cam("b"), cam("a")];
        let merged = stable_merge(&previous, &next);
        assert_eq!(merged, vec![cam("a"), cam("b")]);
    }
}
