//! Static confetti layer drawn behind everything else.

use raylib::prelude::*;
use crate::constants::*;
use crate::palette::*;

const PILL_WIDTH: f32 = 48.0;
const PILL_HEIGHT: f32 = 24.0;
const STAR_RADIUS: f32 = 18.0;

/// Pill-shaped confetti piece. `top`/`left` are percentages of the canvas.
#[derive(Debug, Clone, Copy)]
pub struct ConfettiPiece {
    pub color: Color,
    pub top: f32,
    pub left: f32,
    pub rotation: f32,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub top: f32,
    pub left: f32,
    pub rotation: f32,
    pub scale: f32,
}

const fn piece(color: Color, top: f32, left: f32, rotation: f32, scale: f32) -> ConfettiPiece {
    ConfettiPiece { color, top, left, rotation, scale }
}

pub const CONFETTI: [ConfettiPiece; 10] = [
    piece(YELLOW_300, 10.0, 5.0, 15.0, 1.0),
    piece(PINK_400, 15.0, 90.0, -10.0, 0.8),
    piece(TEAL_300, 80.0, 85.0, 25.0, 1.2),
    piece(ORANGE_400, 90.0, 10.0, -5.0, 1.1),
    piece(WHITE, 5.0, 40.0, 20.0, 0.7),
    piece(LIME_300, 40.0, 5.0, -15.0, 0.9),
    piece(SKY_300, 75.0, 25.0, 10.0, 1.0),
    piece(ROSE_400, 50.0, 95.0, 5.0, 0.8),
    piece(AMBER_300, 95.0, 50.0, -20.0, 1.3),
    piece(SLATE_300, 20.0, 20.0, 30.0, 0.6),
];

pub const STARS: [Star; 4] = [
    Star { top: 20.0, left: 80.0, rotation: 10.0, scale: 1.2 },
    Star { top: 85.0, left: 5.0, rotation: -15.0, scale: 0.8 },
    Star { top: 50.0, left: 50.0, rotation: 20.0, scale: 0.6 },
    Star { top: 5.0, left: 15.0, rotation: -10.0, scale: 1.0 },
];

/// Canvas position of a percentage anchor.
pub fn anchor(top: f32, left: f32) -> Vector2 {
    Vector2::new(
        RENDER_WIDTH as f32 * left / 100.0,
        RENDER_HEIGHT as f32 * top / 100.0,
    )
}

/// Rotated capsule centred on `center`.
pub fn draw_pill(d: &mut RaylibDrawHandle, center: Vector2, width: f32, height: f32, rotation: f32, color: Color) {
    let radius = height * 0.5;
    let body = (width - height).max(0.0);
    let (sin, cos) = rotation.to_radians().sin_cos();
    let half = Vector2::new(cos * body * 0.5, sin * body * 0.5);

    d.draw_rectangle_pro(
        Rectangle::new(center.x, center.y, body, height),
        Vector2::new(body * 0.5, radius),
        rotation,
        color,
    );
    d.draw_circle_v(center + half, radius, color);
    d.draw_circle_v(center - half, radius, color);
}

/// Points of a five-pointed star, alternating outer and inner vertices.
pub fn star_points(center: Vector2, radius: f32, rotation: f32) -> [Vector2; 10] {
    let inner = radius * 0.4;
    let mut points = [Vector2::zero(); 10];
    for (i, point) in points.iter_mut().enumerate() {
        let r = if i % 2 == 0 { radius } else { inner };
        let angle = (rotation - 90.0 + 36.0 * i as f32).to_radians();
        *point = Vector2::new(center.x + r * angle.cos(), center.y + r * angle.sin());
    }
    points
}

pub fn draw_star(d: &mut RaylibDrawHandle, center: Vector2, radius: f32, rotation: f32, color: Color) {
    let points = star_points(center, radius, rotation);
    for i in 0..points.len() {
        let next = points[(i + 1) % points.len()];
        // Counter-clockwise on screen
        d.draw_triangle(center, next, points[i], color);
    }
}

pub fn draw(d: &mut RaylibDrawHandle) {
    for c in CONFETTI.iter() {
        draw_pill(
            d,
            anchor(c.top, c.left),
            PILL_WIDTH * c.scale,
            PILL_HEIGHT * c.scale,
            c.rotation,
            c.color,
        );
    }
    for s in STARS.iter() {
        draw_star(d, anchor(s.top, s.left), STAR_RADIUS * s.scale, s.rotation, WHITE);
    }
}
