use rand::Rng;
use raylib::prelude::*;
use crate::confetti::draw_pill;
use crate::constants::*;
use crate::palette::*;

const GRAVITY: f32 = 900.0;          // pixels / s²
const LIFETIME: f32 = 3.0;           // seconds before a particle is dropped
const BURST_SIZE: usize = 120;

const COLORS: [Color; 8] = [YELLOW_300, PINK_400, TEAL_300, ORANGE_400, LIME_300, SKY_300, ROSE_400, AMBER_300];

#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vector2,
    pub velocity: Vector2,
    pub rotation: f32,
    pub spin: f32,
    pub color: Color,
    pub age: f32,
}

/// Short-lived celebration confetti fired from the bottom of the canvas.
#[derive(Debug, Default)]
pub struct Burst {
    particles: Vec<Particle>,
}

impl Burst {
    pub fn fire(&mut self, rng: &mut impl Rng) {
        let w = RENDER_WIDTH as f32;
        let h = RENDER_HEIGHT as f32;
        for i in 0..BURST_SIZE {
            // two cannons, one per bottom corner
            let left = i % 2 == 0;
            let origin = Vector2::new(if left { w * 0.1 } else { w * 0.9 }, h);
            let angle: f32 = if left {
                rng.random_range(-80.0_f32..-45.0)
            } else {
                rng.random_range(-135.0_f32..-100.0)
            };
            let speed = rng.random_range(900.0..1500.0);
            let (sin, cos) = angle.to_radians().sin_cos();
            self.particles.push(Particle {
                position: origin,
                velocity: Vector2::new(cos * speed, sin * speed),
                rotation: rng.random_range(0.0..360.0),
                spin: rng.random_range(-540.0..540.0),
                color: COLORS[rng.random_range(0..COLORS.len())],
                age: 0.0,
            });
        }
    }

    pub fn update(&mut self, dt: f32) {
        for p in self.particles.iter_mut() {
            p.velocity.y += GRAVITY * dt;
            p.position += p.velocity * dt;
            p.rotation += p.spin * dt;
            p.age += dt;
        }
        self.particles
            .retain(|p| p.age < LIFETIME && p.position.y <= RENDER_HEIGHT as f32 + 50.0);
    }

    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        for p in self.particles.iter() {
            let fade = 1.0 - (p.age / LIFETIME).powi(2);
            draw_pill(d, p.position, 28.0, 14.0, p.rotation, faded(p.color, fade));
        }
    }
}
