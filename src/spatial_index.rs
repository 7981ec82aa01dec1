//! Spatial Index Module
//!
//! R-tree backed hit testing for circular entities. A point query returns
//! every entity whose pick region (radius plus tolerance) covers the point,
//! in registration order.

use crate::types::{EntityId, Point};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A pickable disc: the entity's center and its effective pick radius.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub id: EntityId,
    pub center: Point,
    pub reach: f64,
}

impl SpatialEntry {
    pub fn new(id: EntityId, center: Point, radius: f64, tolerance: f64) -> Self {
        Self {
            id,
            center,
            reach: radius + tolerance,
        }
    }

    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        self.center.distance(p) <= self.reach
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.center.x - self.reach, self.center.y - self.reach],
            [self.center.x + self.reach, self.center.y + self.reach],
        )
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Spatial index over pickable entities.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<EntityId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert or replace the entry for `id`.
    pub fn insert(&mut self, id: EntityId, center: Point, radius: f64, tolerance: f64) {
        self.remove(id);
        let entry = SpatialEntry::new(id, center, radius, tolerance);
        self.tree.insert(entry);
        self.entries.insert(id, entry);
    }

    pub fn remove(&mut self, id: EntityId) -> bool {
        match self.entries.remove(&id) {
            Some(entry) => {
                self.tree.remove(&entry);
                true
            }
            None => false,
        }
    }

    /// Move an indexed entry, keeping its reach. No-op for unindexed ids.
    pub fn relocate(&mut self, id: EntityId, center: Point) {
        if let Some(mut entry) = self.entries.remove(&id) {
            self.tree.remove(&entry);
            entry.center = center;
            self.tree.insert(entry);
            self.entries.insert(id, entry);
        }
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Entities whose pick region covers `p`, in registration order.
    pub fn query_point(&self, p: Point) -> Vec<EntityId> {
        let envelope = AABB::from_point([p.x, p.y]);
        let mut hits: Vec<EntityId> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.contains_point(p))
            .map(|entry| entry.id)
            .collect();
        hits.sort_unstable();
        hits
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
