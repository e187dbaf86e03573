//! Sprite sheets and per-entity frame selection

use glam::Vec2;

use crate::sim::{Entity, EntityKind, Ship};

/// Image assets the canvas knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteSheet {
    Nebula,
    Debris,
    Splash,
    Ship,
    Missile,
    Asteroid,
    Explosion,
}

/// Source-rectangle layout of a sheet (first frame)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteInfo {
    pub center: Vec2,
    pub size: Vec2,
}

impl SpriteSheet {
    pub fn info(self) -> SpriteInfo {
        let (center, size) = match self {
            SpriteSheet::Nebula => ((400.0, 300.0), (800.0, 600.0)),
            SpriteSheet::Debris => ((320.0, 240.0), (640.0, 480.0)),
            SpriteSheet::Splash => ((200.0, 150.0), (400.0, 300.0)),
            SpriteSheet::Ship => ((45.0, 45.0), (90.0, 90.0)),
            SpriteSheet::Missile => ((5.0, 5.0), (10.0, 10.0)),
            SpriteSheet::Asteroid => ((45.0, 45.0), (90.0, 90.0)),
            SpriteSheet::Explosion => ((64.0, 64.0), (128.0, 128.0)),
        };
        SpriteInfo {
            center: Vec2::new(center.0, center.1),
            size: Vec2::new(size.0, size.1),
        }
    }

    /// Sheet used for an entity category
    pub fn for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Ship => SpriteSheet::Ship,
            EntityKind::Rock => SpriteSheet::Asteroid,
            EntityKind::Missile => SpriteSheet::Missile,
            EntityKind::Explosion => SpriteSheet::Explosion,
        }
    }

    /// Sheets whose frames advance with entity age
    pub fn is_animated(self) -> bool {
        self == SpriteSheet::Explosion
    }
}

/// One draw-image call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub sheet: SpriteSheet,
    pub src_center: Vec2,
    pub src_size: Vec2,
    pub dest: Vec2,
    pub dest_size: Vec2,
    pub angle: f32,
}

impl Sprite {
    /// First frame of `sheet`, drawn at its native size
    pub fn still(sheet: SpriteSheet, dest: Vec2, angle: f32) -> Self {
        let info = sheet.info();
        Self {
            sheet,
            src_center: info.center,
            src_size: info.size,
            dest,
            dest_size: info.size,
            angle,
        }
    }
}

/// Ship sheet holds two frames side by side; the second shows the flame
pub fn ship_sprite(ship: &Ship) -> Sprite {
    let mut sprite = Sprite::still(SpriteSheet::Ship, ship.body.pos, ship.body.angle);
    if ship.thrust {
        sprite.src_center.x += sprite.src_size.x;
    }
    sprite
}

/// Animated sheets step one frame width per tick of age
pub fn entity_sprite(entity: &Entity) -> Sprite {
    let sheet = SpriteSheet::for_kind(entity.kind);
    let mut sprite = Sprite::still(sheet, entity.pos, entity.angle);
    if sheet.is_animated() {
        sprite.src_center.x += sprite.src_size.x * entity.age as f32;
    }
    sprite
}

/// Nebula plus two debris layers scrolling right at a quarter unit per tick
pub fn background_sprites(time_ticks: u64, width: f32, height: f32) -> [Sprite; 3] {
    let canvas = Vec2::new(width, height);
    let scroll = (time_ticks as f32 / 4.0) % width;
    let nebula = SpriteSheet::Nebula.info();
    let debris = SpriteSheet::Debris.info();
    let layer = |dest: Vec2, sheet: SpriteSheet, info: SpriteInfo| Sprite {
        sheet,
        src_center: info.center,
        src_size: info.size,
        dest,
        dest_size: canvas,
        angle: 0.0,
    };
    [
        layer(canvas / 2.0, SpriteSheet::Nebula, nebula),
        layer(Vec2::new(scroll - width / 2.0, height / 2.0), SpriteSheet::Debris, debris),
        layer(Vec2::new(scroll + width / 2.0, height / 2.0), SpriteSheet::Debris, debris),
    ]
}
