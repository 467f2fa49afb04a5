//! Per-phase scene composition
//!
//! Draws one frame of the current [`GameState`] onto a [`Canvas`]. Layer
//! order, back to front: water, plants, bubbles, then either the menu, the
//! playfield, or the game-over overlay.

use glam::Vec2;
use std::f32::consts::PI;

use super::canvas::{Canvas, Color, Font, LinearGradient, Paint, TextAlign};
use super::shapes;
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, Obstacle, Puffer, menu_buttons};

/// Scene palette
pub mod palette {
    use super::Color;

    pub const WATER: Color = Color::hex(0x4ba3c3);
    pub const PLANT_DARK: Color = Color::hex(0x2d5a27);
    pub const PLANT_LIGHT: Color = Color::hex(0x3d7a34);
    pub const CORAL: Color = Color::hex(0xff6b6b);
    pub const CORAL_TIP: Color = Color::hex(0xff8787);
    pub const PUFFER: Color = Color::hex(0xffd700);
    pub const PUFFER_SPOT: Color = Color::hex(0xffb700);
    pub const MOUTH: Color = Color::hex(0xff9999);
    pub const BUTTON: Color = Color::hex(0x2c3e50);
    pub const OVERLAY: Color = Color::rgba(0, 0, 0, 0.7);
}

/// Inflation above which spots and spikes show
const SPIKY_SCALE: f32 = 1.1;
const SPOT_COUNT: usize = 8;
const SPIKE_COUNT: usize = 12;

/// Draw a full frame
pub fn draw_frame<C: Canvas>(canvas: &mut C, state: &GameState, settings: &Settings, fps: Option<u32>) {
    draw_background(canvas);
    if settings.decorations {
        draw_plants(canvas, state);
    }
    if settings.bubbles {
        draw_bubbles(canvas, state);
    }

    match state.phase {
        GamePhase::Menu => draw_menu(canvas),
        GamePhase::Playing => draw_playfield(canvas, state),
        GamePhase::GameOver => {
            // The frame that ended the run still shows what was hit
            if state.events.iter().any(|e| matches!(e, GameEvent::Collided { .. })) {
                draw_playfield(canvas, state);
            }
            draw_game_over(canvas, state);
        }
    }

    if settings.show_fps {
        if let Some(fps) = fps {
            canvas.fill_text(
                &format!("{} fps", fps),
                Vec2::new(FIELD_WIDTH - 10.0, 20.0),
                Font::regular(12.0),
                TextAlign::Right,
                Color::WHITE.with_alpha(0.6),
            );
        }
    }
}

fn draw_background<C: Canvas>(canvas: &mut C) {
    canvas.fill_rect(
        Vec2::ZERO,
        Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
        &palette::WATER.into(),
    );
}

fn draw_plants<C: Canvas>(canvas: &mut C, state: &GameState) {
    let paint: Paint = LinearGradient::new(
        Vec2::new(0.0, FIELD_HEIGHT),
        Vec2::new(0.0, FIELD_HEIGHT - 120.0),
    )
    .with_stop(0.0, palette::PLANT_DARK)
    .with_stop(1.0, palette::PLANT_LIGHT)
    .into();

    for plant in &state.plants {
        let points = plant.points(state.time_secs);
        let widths: Vec<f32> = plant.segments.iter().map(|s| s.width).collect();
        canvas.fill_path(&shapes::plant_outline(&points, &widths), &paint);
    }
}

fn draw_bubbles<C: Canvas>(canvas: &mut C, state: &GameState) {
    for bubble in &state.bubbles {
        canvas.fill_circle(
            bubble.pos,
            bubble.radius,
            &Color::WHITE.with_alpha(bubble.opacity).into(),
        );
    }
}

fn draw_playfield<C: Canvas>(canvas: &mut C, state: &GameState) {
    draw_puffer(canvas, &state.puffer);
    for obstacle in state.obstacles.iter() {
        draw_obstacle(canvas, obstacle);
    }
    canvas.fill_text(
        &format!("Score: {}", state.score),
        Vec2::new(10.0, 30.0),
        Font::regular(24.0),
        TextAlign::Left,
        Color::WHITE,
    );
}

/// Draw the puffer at its current inflation
pub fn draw_puffer<C: Canvas>(canvas: &mut C, puffer: &Puffer) {
    let center = puffer.pos;
    let scale = puffer.inflate_scale;
    let radius = puffer.effective_radius();
    let body: Paint = palette::PUFFER.into();

    canvas.fill_path(&shapes::puffer_tail(center, radius), &body);
    canvas.fill_circle(center, radius, &body);

    if scale > SPIKY_SCALE {
        let spot: Paint = palette::PUFFER_SPOT.into();
        for p in shapes::spot_centers(center, radius, SPOT_COUNT) {
            canvas.fill_circle(p, 3.0 * scale, &spot);
        }
        let length = 8.0 * (scale - 1.0);
        for (from, to) in shapes::spikes(center, radius, length, SPIKE_COUNT) {
            canvas.stroke_line(from, to, palette::PUFFER, 2.0);
        }
    }

    // Eye grows at half the rate of the body
    let eye_scale = 1.0 + (scale - 1.0) * 0.5;
    let eye = center + Vec2::new(8.0, -5.0) * scale;
    canvas.fill_circle(eye, 5.0 * eye_scale, &Color::BLACK.into());
    canvas.fill_circle(eye, 4.0 * eye_scale, &Color::WHITE.into());
    canvas.fill_circle(
        center + Vec2::new(9.0, -5.0) * scale,
        2.0 * eye_scale,
        &Color::BLACK.into(),
    );
    canvas.fill_circle(
        center + Vec2::new(10.0, -6.0) * scale,
        eye_scale,
        &Color::WHITE.into(),
    );

    canvas.stroke_arc(
        Vec2::new(center.x + radius * 0.5, center.y + 2.0),
        8.0 * scale,
        0.1,
        PI * 0.9,
        palette::MOUTH,
        2.0,
    );

    canvas.fill_path(&shapes::puffer_fin(center, radius), &body);
}

/// Draw one coral pair
pub fn draw_obstacle<C: Canvas>(canvas: &mut C, obstacle: &Obstacle) {
    let coral: Paint = palette::CORAL.into();
    let tip: Paint = palette::CORAL_TIP.into();

    canvas.fill_rect(
        Vec2::new(obstacle.x, 0.0),
        Vec2::new(OBSTACLE_WIDTH, obstacle.gap_top),
        &coral,
    );
    canvas.fill_path(&shapes::coral_tip(obstacle.x, obstacle.gap_top, true), &tip);

    canvas.fill_rect(
        Vec2::new(obstacle.x, obstacle.gap_bottom),
        Vec2::new(OBSTACLE_WIDTH, FIELD_HEIGHT - obstacle.gap_bottom),
        &coral,
    );
    canvas.fill_path(&shapes::coral_tip(obstacle.x, obstacle.gap_bottom, false), &tip);
}

fn draw_menu<C: Canvas>(canvas: &mut C) {
    canvas.fill_text(
        "Puffer Reef",
        Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 3.0),
        Font::bold(36.0),
        TextAlign::Center,
        Color::WHITE,
    );

    for button in menu_buttons() {
        canvas.fill_path(
            &shapes::round_rect(button.min(), button.size, 10.0),
            &palette::BUTTON.into(),
        );
        canvas.fill_text(
            button.difficulty.profile().name,
            button.center + Vec2::new(0.0, 7.0),
            Font::regular(20.0),
            TextAlign::Center,
            Color::WHITE,
        );
    }

    canvas.fill_text(
        "Tap a difficulty to start",
        Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT * 2.0 / 3.0),
        Font::regular(16.0),
        TextAlign::Center,
        Color::WHITE,
    );
}

fn draw_game_over<C: Canvas>(canvas: &mut C, state: &GameState) {
    canvas.fill_rect(
        Vec2::ZERO,
        Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
        &palette::OVERLAY.into(),
    );

    let cx = FIELD_WIDTH / 2.0;
    let cy = FIELD_HEIGHT / 2.0;
    let line = |canvas: &mut C, text: &str, dy: f32, size: f32| {
        canvas.fill_text(
            text,
            Vec2::new(cx, cy + dy),
            Font::regular(size),
            TextAlign::Center,
            Color::WHITE,
        );
    };

    line(canvas, "Game Over", -50.0, 30.0);
    if let Some(profile) = state.profile() {
        line(canvas, &format!("Difficulty: {}", profile.name), -10.0, 20.0);
    }
    line(canvas, &format!("Final score: {}", state.score), 20.0, 20.0);
    line(canvas, &format!("Best: {}", state.best_score), 50.0, 20.0);
    line(canvas, "Tap to return to the menu", 85.0, 20.0);
}
