//! Simulation module
//!
//! All gameplay logic lives here:
//! - One integration step per entity per tick
//! - Seeded RNG only (spawner)
//! - Stable iteration order (insertion / entity ID)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod entity;
pub mod groups;
pub mod input;
pub mod ship;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, CollisionRule, group_collide};
pub use entity::{Bounds, Entity, EntityKind, Lifespan, collide};
pub use groups::{Body, EntityGroup, GroupCounts, Groups, Motion};
pub use input::{Action, Binding, Command, InputEvent, InputState};
pub use ship::{MissileSpec, Ship};
pub use spawner::{Placement, SpawnPolicy, Spawner};
pub use state::{GameEvent, GamePhase, Rect, Session, Snapshot};
pub use tick::{FrameOutcome, TickInput, handle_input, resolve_collisions, spawn_tick, tick};
