//! Per-category entity containers
//!
//! Groups are never mutated while being iterated: expiry goes through
//! `retain_mut` and collisions mark members first, then compact.

use serde::{Deserialize, Serialize};

use super::entity::{Bounds, Entity, EntityKind};
use super::ship::Ship;

/// Ship handling parameters applied during integration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub acceleration: f32,
    /// Velocity multiplier applied every tick (1 - friction)
    pub retention: f32,
}

/// Anything that owns an [`Entity`] and can be stepped
pub trait Body {
    fn body(&self) -> &Entity;

    /// Advance one tick. Returns true if the member has expired.
    fn advance(&mut self, bounds: &Bounds, _motion: &Motion) -> bool;
}

impl Body for Entity {
    #[inline]
    fn body(&self) -> &Entity {
        self
    }

    #[inline]
    fn advance(&mut self, bounds: &Bounds, _motion: &Motion) -> bool {
        self.update(bounds)
    }
}

/// Members of a single entity category, kept in insertion (id) order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityGroup<T> {
    kind: EntityKind,
    members: Vec<T>,
}

impl<T: Body> EntityGroup<T> {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            members: Vec::new(),
        }
    }

    #[inline]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.members.iter()
    }

    pub fn first(&self) -> Option<&T> {
        self.members.first()
    }

    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.members.first_mut()
    }

    pub fn insert(&mut self, member: T) {
        debug_assert_eq!(member.body().kind, self.kind, "member inserted into wrong group");
        self.members.push(member);
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Advance every member once and drop the expired ones.
    /// Returns the number removed.
    pub fn step(&mut self, bounds: &Bounds, motion: &Motion) -> usize {
        let before = self.members.len();
        self.members.retain_mut(|m| !m.advance(bounds, motion));
        before - self.members.len()
    }

    /// Drop every member whose flag is set. `marked` is indexed like `iter()`.
    pub fn remove_marked(&mut self, marked: &[bool]) {
        debug_assert_eq!(marked.len(), self.members.len());
        let mut flags = marked.iter();
        self.members
            .retain(|_| !flags.next().copied().unwrap_or(false));
    }
}

impl<'a, T: Body> IntoIterator for &'a EntityGroup<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// Sizes of every group, in registry order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroupCounts {
    pub ships: usize,
    pub rocks: usize,
    pub missiles: usize,
    pub explosions: usize,
}

/// The four entity groups of a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Groups {
    pub ships: EntityGroup<Ship>,
    pub rocks: EntityGroup<Entity>,
    pub missiles: EntityGroup<Entity>,
    pub explosions: EntityGroup<Entity>,
}

impl Groups {
    /// Registry holding only `ship`
    pub fn with_ship(ship: Ship) -> Self {
        let mut ships = EntityGroup::new(EntityKind::Ship);
        ships.insert(ship);
        Self {
            ships,
            rocks: EntityGroup::new(EntityKind::Rock),
            missiles: EntityGroup::new(EntityKind::Missile),
            explosions: EntityGroup::new(EntityKind::Explosion),
        }
    }

    /// Advance every group by one tick, removing expired members
    pub fn step_all(&mut self, bounds: &Bounds, motion: &Motion) {
        self.ships.step(bounds, motion);
        self.rocks.step(bounds, motion);
        let expired_missiles = self.missiles.step(bounds, motion);
        self.explosions.step(bounds, motion);
        if expired_missiles > 0 {
            log::trace!("{} missile(s) expired", expired_missiles);
        }
    }

    pub fn counts(&self) -> GroupCounts {
        GroupCounts {
            ships: self.ships.len(),
            rocks: self.rocks.len(),
            missiles: self.missiles.len(),
            explosions: self.explosions.len(),
        }
    }
}
