//! Keyed store of live tracks.

use crate::models::{Track, TrackId};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Read access to a set of tracks, shared by the live registry and snapshots.
pub trait TrackSource {
    fn find(&self, id: TrackId) -> Option<Track>;

    /// All tracks. Order carries no meaning for queries beyond which
    /// conflict is surfaced first; both implementations yield ascending id.
    fn tracks(&self) -> Box<dyn Iterator<Item = Track> + '_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Owns at most one track per aircraft id.
#[derive(Debug, Clone, Default)]
pub struct TrackRegistry {
    tracks: BTreeMap<TrackId, Track>,
}

impl TrackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the track for `track.id`.
    ///
    /// Returns the replaced track, if any.
    pub fn upsert(&mut self, track: Track) -> Option<Track> {
        let previous = self.tracks.insert(track.id, track);
        tracing::debug!(
            id = track.id,
            replaced = previous.is_some(),
            "track upserted"
        );
        previous
    }

    /// Remove a track. No-op when absent.
    pub fn remove(&mut self, id: TrackId) -> Option<Track> {
        let removed = self.tracks.remove(&id);
        if removed.is_some() {
            tracing::debug!(id, "track removed");
        }
        removed
    }

    pub fn find(&self, id: TrackId) -> Option<Track> {
        self.tracks.get(&id).copied()
    }

    pub fn all(&self) -> impl Iterator<Item = &Track> {
        self.tracks.values()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Release every track.
    pub fn clear(&mut self) {
        let released = self.tracks.len();
        self.tracks.clear();
        tracing::info!(released, "track registry cleared");
    }

    /// Immutable copy for queries that must not observe later updates.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            tracks: Arc::new(self.tracks.clone()),
        }
    }
}

impl TrackSource for TrackRegistry {
    fn find(&self, id: TrackId) -> Option<Track> {
        TrackRegistry::find(self, id)
    }

    fn tracks(&self) -> Box<dyn Iterator<Item = Track> + '_> {
        Box::new(self.tracks.values().copied())
    }

    fn len(&self) -> usize {
        self.tracks.len()
    }
}

/// Frozen view of a registry. Cheap to clone and safe to send across threads.
#[derive(Debug, Clone)]
pub struct RegistrySnapshot {
    tracks: Arc<BTreeMap<TrackId, Track>>,
}

impl TrackSource for RegistrySnapshot {
    fn find(&self, id: TrackId) -> Option<Track> {
        self.tracks.get(&id).copied()
    }

    fn tracks(&self) -> Box<dyn Iterator<Item = Track> + '_> {
        Box::new(self.tracks.values().copied())
    }

    fn len(&self) -> usize {
        self.tracks.len()
    }
}
