//! LIVES / SCORE overlay layout
//!
//! Values are centered under their labels using the canvas' text metrics.

use glam::Vec2;

use super::TextMetrics;

pub const FONT_FAMILY: &str = "sans-serif";
pub const FONT_COLOR: &str = "rgba(255, 255, 255, 1)";
pub const FONT_SIZE_SMALL: f32 = 11.0;
pub const FONT_SIZE_BIG: f32 = 60.0;
const PADDING: f32 = 10.0;
const OFFSET: f32 = PADDING * 6.0;

/// One draw-text call
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub family: &'static str,
    pub color: &'static str,
}

impl TextItem {
    fn new(text: impl Into<String>, pos: Vec2, size: f32) -> Self {
        Self {
            text: text.into(),
            pos,
            size,
            family: FONT_FAMILY,
            color: FONT_COLOR,
        }
    }
}

/// Lives in the top-left corner, score in the top-right
pub fn hud_items<M: TextMetrics + ?Sized>(
    lives: u32,
    score: u64,
    canvas_width: f32,
    metrics: &M,
) -> Vec<TextItem> {
    let lives_text = lives.to_string();
    let score_text = score.to_string();

    let lives_label_width = metrics.text_width("LIVES", FONT_SIZE_SMALL);
    let lives_value_width = metrics.text_width(&lives_text, FONT_SIZE_BIG);
    let score_label_width = metrics.text_width("SCORE", FONT_SIZE_SMALL);
    let score_value_width = metrics.text_width(&score_text, FONT_SIZE_BIG);

    let left = OFFSET * 2.0;
    let right = canvas_width - OFFSET * 2.0;

    vec![
        TextItem::new("LIVES", Vec2::new(left, OFFSET), FONT_SIZE_SMALL),
        TextItem::new(
            lives_text,
            Vec2::new(
                left + (lives_label_width - lives_value_width) / 2.0,
                OFFSET - PADDING / 2.0 + FONT_SIZE_BIG,
            ),
            FONT_SIZE_BIG,
        ),
        TextItem::new(
            "SCORE",
            Vec2::new(right - score_label_width, OFFSET),
            FONT_SIZE_SMALL,
        ),
        TextItem::new(
            score_text,
            Vec2::new(
                right - (score_label_width + score_value_width) / 2.0,
                PADDING * 11.5,
            ),
            FONT_SIZE_BIG,
        ),
    ]
}
