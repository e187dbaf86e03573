//! Draw-call generation
//!
//! The core does not rasterize anything. [`draw_frame`] walks a session and
//! issues image and text calls against a [`Canvas`] supplied by the
//! platform; whatever the canvas does with them is its own business.

pub mod hud;
pub mod sprites;

pub use hud::{TextItem, hud_items};
pub use sprites::{Sprite, SpriteInfo, SpriteSheet, background_sprites, entity_sprite, ship_sprite};

use crate::sim::{GamePhase, Session};

/// Text measurement service
pub trait TextMetrics {
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

/// Drawing collaborator
pub trait Canvas: TextMetrics {
    fn draw_sprite(&mut self, sprite: &Sprite);
    fn draw_text(&mut self, item: &TextItem);
}

/// Emit every draw call for the current frame
pub fn draw_frame(session: &Session, canvas: &mut dyn Canvas) {
    let bounds = session.bounds();

    for sprite in background_sprites(session.time_ticks, bounds.width(), bounds.height()) {
        canvas.draw_sprite(&sprite);
    }

    let groups = &session.groups;
    for ship in &groups.ships {
        canvas.draw_sprite(&ship_sprite(ship));
    }
    for entity in groups
        .rocks
        .iter()
        .chain(groups.missiles.iter())
        .chain(groups.explosions.iter())
    {
        canvas.draw_sprite(&entity_sprite(entity));
    }

    match session.phase {
        GamePhase::Splash => {
            let splash = Sprite::still(SpriteSheet::Splash, bounds.center(), 0.0);
            canvas.draw_sprite(&splash);
        }
        GamePhase::Running => {
            for item in hud_items(session.lives, session.score, bounds.width(), &*canvas) {
                canvas.draw_text(&item);
            }
        }
    }
}

/// Canvas that only traces what it is asked to draw
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceCanvas;

impl TextMetrics for TraceCanvas {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        // Rough average glyph advance for a sans-serif face
        text.chars().count() as f32 * font_size * 0.55
    }
}

impl Canvas for TraceCanvas {
    fn draw_sprite(&mut self, sprite: &Sprite) {
        log::trace!(
            "draw {:?} at ({:.1}, {:.1}) angle {:.2}",
            sprite.sheet,
            sprite.dest.x,
            sprite.dest.y,
            sprite.angle
        );
    }

    fn draw_text(&mut self, item: &TextItem) {
        log::trace!(
            "text {:?} at {:?} ({}px {}, {})",
            item.text,
            item.pos,
            item.size,
            item.family,
            item.color
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use glam::Vec2;

    #[derive(Default)]
    struct Recorder {
        sprites: Vec<Sprite>,
        texts: Vec<TextItem>,
    }

    impl TextMetrics for Recorder {
        fn text_width(&self, text: &str, font_size: f32) -> f32 {
            text.len() as f32 * font_size / 2.0
        }
    }

    impl Canvas for Recorder {
        fn draw_sprite(&mut self, sprite: &Sprite) {
            self.sprites.push(*sprite);
        }

        fn draw_text(&mut self, item: &TextItem) {
            self.texts.push(item.clone());
        }
    }

    #[test]
    fn test_splash_frame() {
        let session = Session::new(Settings::default(), 1).unwrap();
        let mut canvas = Recorder::default();
        draw_frame(&session, &mut canvas);

        let sheets: Vec<SpriteSheet> = canvas.sprites.iter().map(|s| s.sheet).collect();
        assert_eq!(
            sheets,
            vec![
                SpriteSheet::Nebula,
                SpriteSheet::Debris,
                SpriteSheet::Debris,
                SpriteSheet::Ship,
                SpriteSheet::Splash,
            ]
        );
        assert!(canvas.texts.is_empty());
    }

    #[test]
    fn test_running_frame_draws_entities_and_hud() {
        let mut session = Session::new(Settings::default(), 1).unwrap();
        session.start();
        session.spawn_rock();
        session.shoot();
        session.spawn_explosion(Vec2::new(10.0, 10.0));

        let mut canvas = Recorder::default();
        draw_frame(&session, &mut canvas);

        let count = |sheet: SpriteSheet| canvas.sprites.iter().filter(|s| s.sheet == sheet).count();
        assert_eq!(count(SpriteSheet::Asteroid), 1);
        assert_eq!(count(SpriteSheet::Missile), 1);
        assert_eq!(count(SpriteSheet::Explosion), 1);
        assert_eq!(count(SpriteSheet::Splash), 0);

        let texts: Vec<&str> = canvas.texts.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["LIVES", "3", "SCORE", "0"]);
    }
}
