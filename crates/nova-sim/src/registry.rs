//! Missile registry — the engine-owned bookkeeping for live missiles.
//!
//! Four maps keyed by missile tag: the visual model handle, the
//! collider entity, the collision solid, and the flight interval.
//! A tag is present in all four maps or in none. BTreeMap keeps
//! iteration order deterministic across runs.

use std::collections::BTreeMap;

use hecs::Entity;

use nova_core::components::{ColliderShape, ModelHandle, MotionInterval};

/// One missile's registry entry, returned on removal.
#[derive(Debug, Clone)]
pub struct MissileEntry {
    pub model: ModelHandle,
    pub collider: Entity,
    pub solid: ColliderShape,
    pub interval: MotionInterval,
}

#[derive(Debug, Default)]
pub struct MissileRegistry {
    pub fire_models: BTreeMap<String, ModelHandle>,
    pub collider_nodes: BTreeMap<String, Entity>,
    pub collision_solids: BTreeMap<String, ColliderShape>,
    pub intervals: BTreeMap<String, MotionInterval>,
    /// Total missiles ever fired; names the next tag.
    pub missile_count: u32,
}

impl MissileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next missile tag ("Missile1", "Missile2", ...).
    pub fn next_tag(&mut self) -> String {
        self.missile_count += 1;
        format!("Missile{}", self.missile_count)
    }

    /// Insert a missile into all four maps.
    pub fn insert(
        &mut self,
        tag: &str,
        model: ModelHandle,
        collider: Entity,
        solid: ColliderShape,
        interval: MotionInterval,
    ) {
        self.fire_models.insert(tag.to_string(), model);
        self.collider_nodes.insert(tag.to_string(), collider);
        self.collision_solids.insert(tag.to_string(), solid);
        self.intervals.insert(tag.to_string(), interval);
    }

    /// Remove a missile from all four maps.
    pub fn remove(&mut self, tag: &str) -> Option<MissileEntry> {
        let model = self.fire_models.remove(tag)?;
        let collider = self.collider_nodes.remove(tag);
        let solid = self.collision_solids.remove(tag);
        let interval = self.intervals.remove(tag);
        match (collider, solid, interval) {
            (Some(collider), Some(solid), Some(interval)) => Some(MissileEntry {
                model,
                collider,
                solid,
                interval,
            }),
            _ => None,
        }
    }

    /// Jump a missile's interval to its end. Returns false when the
    /// tag is not tracked (the caller counts that).
    pub fn finish_interval(&mut self, tag: &str) -> bool {
        match self.intervals.get_mut(tag) {
            Some(interval) => {
                interval.finish();
                true
            }
            None => false,
        }
    }

    /// Tags whose flight interval has stopped playing.
    pub fn finished_tags(&self) -> Vec<String> {
        self.intervals
            .iter()
            .filter(|(_, interval)| !interval.is_playing())
            .map(|(tag, _)| tag.clone())
            .collect()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.intervals.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// All four maps hold exactly the same key set.
    pub fn is_consistent(&self) -> bool {
        let keys: Vec<&String> = self.intervals.keys().collect();
        self.fire_models.keys().collect::<Vec<_>>() == keys
            && self.collider_nodes.keys().collect::<Vec<_>>() == keys
            && self.collision_solids.keys().collect::<Vec<_>>() == keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nova_core::types::Position;

    fn dummy_interval() -> MotionInterval {
        MotionInterval::new(
            Position::new(0.0, 0.0, 0.0),
            Position::new(0.0, 100.0, 0.0),
            2.0,
        )
    }

    fn dummy_solid() -> ColliderShape {
        ColliderShape::Sphere {
            center: Position::default(),
            radius: 1.0,
        }
    }

    #[test]
    fn test_insert_remove_keeps_maps_consistent() {
        let mut world = hecs::World::new();
        let entity = world.spawn(());
        let mut registry = MissileRegistry::new();

        let tag = registry.next_tag();
        assert_eq!(tag, "Missile1");
        registry.insert(&tag, ModelHandle(0), entity, dummy_solid(), dummy_interval());
        assert!(registry.is_consistent());
        assert!(registry.contains(&tag));

        let entry = registry.remove(&tag).unwrap();
        assert_eq!(entry.collider, entity);
        assert!(registry.is_consistent());
        assert!(registry.is_empty());
        assert!(registry.remove(&tag).is_none());
    }

    #[test]
    fn test_finish_interval_misses_report_false() {
        let mut registry = MissileRegistry::new();
        assert!(!registry.finish_interval("Missile99"));
    }

    #[test]
    fn test_finished_tags_picks_stopped_intervals() {
        let mut world = hecs::World::new();
        let mut registry = MissileRegistry::new();
        for _ in 0..3 {
            let tag = registry.next_tag();
            let entity = world.spawn(());
            registry.insert(&tag, ModelHandle(0), entity, dummy_solid(), dummy_interval());
        }
        assert!(registry.finished_tags().is_empty());

        registry.finish_interval("Missile2");
        assert_eq!(registry.finished_tags(), vec!["Missile2".to_string()]);
    }
}
