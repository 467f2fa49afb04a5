//! Background decorations: swaying plants and rising bubbles
//!
//! Purely cosmetic. Nothing here feeds back into gameplay, and both kinds
//! keep animating in every phase.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

/// One joint of a plant
#[derive(Debug, Clone, PartialEq)]
pub struct PlantSegment {
    /// Resting height of the joint
    pub y: f32,
    /// Full width of the stalk at this joint (tapered when drawn)
    pub width: f32,
    /// Phase offset of the sway (radians)
    pub phase: f32,
    /// Sway speed (radians per second)
    pub speed: f32,
}

/// A seaweed stalk rooted at the bottom edge.
///
/// Segment 0 is the root, the last segment is the free tip.
#[derive(Debug, Clone, PartialEq)]
pub struct Plant {
    pub base_x: f32,
    pub segments: Vec<PlantSegment>,
}

impl Plant {
    pub fn new<R: Rng>(rng: &mut R, base_x: f32) -> Self {
        let height = 80.0 + rng.random::<f32>() * 40.0;
        let segment_height = height / PLANT_SEGMENTS as f32;
        let segments = (0..PLANT_SEGMENTS)
            .map(|i| PlantSegment {
                y: FIELD_HEIGHT - i as f32 * segment_height,
                width: 15.0 + rng.random::<f32>() * 5.0,
                phase: rng.random::<f32>() * std::f32::consts::TAU,
                speed: 0.02 + rng.random::<f32>() * 0.01,
            })
            .collect();
        Self { base_x, segments }
    }

    /// Sway amplitude of segment `index`; the root stays put
    #[inline]
    pub fn amplitude(index: usize) -> f32 {
        PLANT_SWAY_AMPLITUDE * (index as f32 / PLANT_SEGMENTS as f32)
    }

    /// Horizontal position of one segment at `time` seconds
    pub fn segment_x(&self, index: usize, time: f64) -> f32 {
        let seg = &self.segments[index];
        let angle = time * seg.speed as f64 + seg.phase as f64;
        self.base_x + angle.sin() as f32 * Self::amplitude(index)
    }

    /// Joint positions at `time`, root first
    pub fn points(&self, time: f64) -> Vec<Vec2> {
        (0..self.segments.len())
            .map(|i| Vec2::new(self.segment_x(i, time), self.segments[i].y))
            .collect()
    }
}

/// A fresh row of plants evenly spread across the field, edge to edge
pub fn seed_plants<R: Rng>(rng: &mut R) -> Vec<Plant> {
    let spacing = FIELD_WIDTH / (PLANT_COUNT - 1) as f32;
    (0..PLANT_COUNT)
        .map(|i| Plant::new(rng, spacing * i as f32))
        .collect()
}

/// A bubble rising from below the bottom edge
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub pos: Vec2,
    /// Rise per frame (px)
    pub speed: f32,
    pub radius: f32,
    pub opacity: f32,
}

impl Bubble {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(rng.random::<f32>() * FIELD_WIDTH, FIELD_HEIGHT + 10.0),
            speed: rng.random::<f32>() * 2.0 + 1.0,
            radius: rng.random::<f32>() * 8.0 + 2.0,
            opacity: rng.random::<f32>() * 0.5 + 0.1,
        }
    }

    /// Rise one frame, drifting sideways with height
    pub fn update(&mut self) {
        self.pos.y -= self.speed;
        self.pos.x += (self.pos.y / 30.0).sin() * 0.5;
    }

    #[inline]
    pub fn is_gone(&self) -> bool {
        self.pos.y <= BUBBLE_TOP_LIMIT
    }
}

/// Maybe spawn one bubble, then move every bubble and drop the ones that left
/// the top. `max_bubbles` bounds the live count.
pub fn update_bubbles<R: Rng>(bubbles: &mut Vec<Bubble>, rng: &mut R, max_bubbles: usize) {
    if rng.random_bool(BUBBLE_SPAWN_CHANCE) && bubbles.len() < max_bubbles {
        bubbles.push(Bubble::new(rng));
    }
    for bubble in bubbles.iter_mut() {
        bubble.update();
    }
    bubbles.retain(|b| !b.is_gone());
}
