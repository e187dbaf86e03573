//! Pairwise collision resolution between entity groups
//!
//! `group_collide(A, B)` removes every member of A that overlaps some member
//! of B and reports where it happened so the caller can spawn explosions.
//! Whether the B member is consumed too is decided by [`CollisionRule`].

use glam::Vec2;

use super::entity::{EntityKind, collide};
use super::groups::{Body, EntityGroup};

/// What happens to the second member of a colliding pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionRule {
    pub consume_other: bool,
}

impl CollisionRule {
    /// Missiles are spent on impact and identical categories destroy each
    /// other. Ships survive hits (they cost a life instead).
    pub fn for_kinds(first: EntityKind, second: EntityKind) -> Self {
        Self {
            consume_other: first == second || second == EntityKind::Missile,
        }
    }
}

/// Outcome of one `group_collide` pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Positions of removed first-group members, in group order
    pub impacts: Vec<Vec2>,
    /// Number of second-group members consumed
    pub consumed: usize,
}

impl CollisionReport {
    #[inline]
    pub fn any(&self) -> bool {
        !self.impacts.is_empty()
    }

    #[inline]
    pub fn hits(&self) -> usize {
        self.impacts.len()
    }
}

/// Resolve overlaps between `first` and `second`.
///
/// Each member of `first` is removed on its first overlap. A consumed member
/// of `second` cannot be hit again in the same pass.
pub fn group_collide<A: Body, B: Body>(
    first: &mut EntityGroup<A>,
    second: &mut EntityGroup<B>,
) -> CollisionReport {
    let rule = CollisionRule::for_kinds(first.kind(), second.kind());
    let mut first_hit = vec![false; first.len()];
    let mut second_hit = vec![false; second.len()];
    let mut report = CollisionReport::default();

    for (i, a) in first.iter().enumerate() {
        for (j, b) in second.iter().enumerate() {
            if second_hit[j] {
                continue;
            }
            if collide(a.body(), b.body()) {
                first_hit[i] = true;
                if rule.consume_other {
                    second_hit[j] = true;
                    report.consumed += 1;
                }
                report.impacts.push(a.body().pos);
                break;
            }
        }
    }

    if report.any() {
        log::debug!(
            "{:?} x {:?}: {} hit(s), {} consumed",
            first.kind(),
            second.kind(),
            report.hits(),
            report.consumed
        );
        first.remove_marked(&first_hit);
        second.remove_marked(&second_hit);
    }

    report
}
