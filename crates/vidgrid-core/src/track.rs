// ABOUTME: Track reference types handed over by the media/room layer.
// ABOUTME: Identifies one displayable stream (or a placeholder) per tile.

use std::fmt;

/// Which media stream a tile displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackSource {
    Camera,
    ScreenShare,
}

impl TrackSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackSource::Camera => "camera",
            TrackSource::ScreenShare => "screen_share",
        }
    }
}

/// Identity of the publishing participant, as assigned by the room layer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantIdentity(pub String);

impl ParticipantIdentity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantIdentity {
    fn from(identity: &str) -> Self {
        Self(identity.to_string())
    }
}

/// Handle for one displayable media stream.
///
/// The room layer owns the lifecycle; this layer only reads identity and
/// count. A `Placeholder` reserves a tile slot for a participant whose
/// media for that source is not (yet) published.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackReference {
    Track {
        participant: ParticipantIdentity,
        source: TrackSource,
        /// Server-assigned track sid
        sid: String,
        muted: bool,
        subscribed: bool,
    },
    Placeholder {
        participant: ParticipantIdentity,
        source: TrackSource,
    },
}

impl TrackReference {
    pub fn camera(participant: impl Into<ParticipantIdentity>, sid: impl Into<String>) -> Self {
        TrackReference::Track {
            participant: participant.into(),
            source: TrackSource::Camera,
            sid: sid.into(),
            muted: false,
            subscribed: true,
        }
    }

    pub fn screen_share(
        participant: impl Into<ParticipantIdentity>,
        sid: impl Into<String>,
    ) -> Self {
        TrackReference::Track {
            participant: participant.into(),
            source: TrackSource::ScreenShare,
            sid: sid.into(),
            muted: false,
            subscribed: true,
        }
    }

    pub fn placeholder(participant: impl Into<ParticipantIdentity>, source: TrackSource) -> Self {
        TrackReference::Placeholder {
            participant: participant.into(),
            source,
        }
    }

    pub fn participant(&self) -> &ParticipantIdentity {
        match self {
            TrackReference::Track { participant, .. }
            | TrackReference::Placeholder { participant, .. } => participant,
        }
    }

    pub fn source(&self) -> TrackSource {
        match self {
            TrackReference::Track { source, .. }
            | TrackReference::Placeholder { source, .. } => *source,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, TrackReference::Placeholder { .. })
    }

    pub fn is_muted(&self) -> bool {
        match self {
            TrackReference::Track { muted, .. } => *muted,
            TrackReference::Placeholder { .. } => false,
        }
    }

    pub fn is_subscribed(&self) -> bool {
        match self {
            TrackReference::Track { subscribed, .. } => *subscribed,
            TrackReference::Placeholder { .. } => false,
        }
    }

    /// Stable key for the tile slot this reference occupies.
    ///
    /// Keyed by participant and source (not sid), so a placeholder that is
    /// upgraded to a published track keeps its slot.
    pub fn tile_id(&self) -> String {
        format!("{}:{}", self.participant(), self.source().as_str())
    }
}
