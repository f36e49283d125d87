//! Owned registry plus query engine: the surface offered to event handlers.

use crate::error::QueryError;
use crate::models::{Position, SeparationStatus, Track, TrackId};
use crate::query::QueryEngine;
use crate::registry::{RegistrySnapshot, TrackRegistry};
use crate::rules::SurveillanceRules;

/// One operator's traffic picture.
///
/// Updates and queries must be applied in arrival order; `&mut self` on the
/// update methods keeps a query from ever observing a half-applied report.
#[derive(Debug, Clone, Default)]
pub struct Airspace {
    rules: SurveillanceRules,
    registry: TrackRegistry,
    engine: QueryEngine,
}

impl Airspace {
    pub fn new(rules: SurveillanceRules) -> Self {
        Self {
            engine: QueryEngine::new(&rules),
            rules,
            registry: TrackRegistry::new(),
        }
    }

    pub fn rules(&self) -> &SurveillanceRules {
        &self.rules
    }

    pub fn registry(&self) -> &TrackRegistry {
        &self.registry
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    pub fn upsert_track(&mut self, track: Track) {
        self.registry.upsert(track);
    }

    pub fn remove_track(&mut self, id: TrackId) {
        self.registry.remove(id);
    }

    pub fn clear_registry(&mut self) {
        self.registry.clear();
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        self.registry.snapshot()
    }

    pub fn count_contacts(&self, time: f64, radius: f64) -> usize {
        self.engine.count_contacts(&self.registry, time, radius)
    }

    pub fn estimate_position(
        &self,
        time: f64,
        id: TrackId,
        radius: f64,
    ) -> Result<Position, QueryError> {
        self.engine.estimate_position(&self.registry, time, id, radius)
    }

    pub fn check_separation(
        &self,
        time: f64,
        id: TrackId,
        min_separation: f64,
    ) -> Result<SeparationStatus, QueryError> {
        self.engine
            .check_separation(&self.registry, time, id, min_separation)
    }
}
