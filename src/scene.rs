//! Scene trait and the widgets both layouts share.

use raylib::prelude::*;
use crate::constants::*;
use crate::palette::*;
use crate::photo::FocalPosition;
use crate::variant::{Transition, Visual, HOVER, TAP};
use crate::view::{Action, UiState};

/// Tile aspect ratio (width / height) photos are cropped to.
pub const TILE_ASPECT: f32 = 3.0 / 4.0;

/// Pointer in canvas coordinates. `position` is `None` when the pointer is
/// outside the canvas or input is not live (recording).
#[derive(Debug, Clone, Copy, Default)]
pub struct Pointer {
    pub position: Option<Vector2>,
    pub down: bool,
}

impl Pointer {
    pub fn over(&self, hit: impl Fn(Vector2) -> bool) -> bool {
        self.position.is_some_and(hit)
    }
}

pub trait Scene {
    /// Advance animation clocks; `state` is the view after this frame's events.
    fn update(&mut self, state: &UiState, pointer: &Pointer, dt: f32);
    /// Draw into the canvas (`RENDER_WIDTH` x `RENDER_HEIGHT`).
    fn draw(&self, d: &mut RaylibDrawHandle, state: &UiState);
    /// Action under a canvas point, if any.
    fn hit_test(&self, point: Vector2, state: &UiState) -> Option<Action>;
}

/// Where the canvas lands inside a window of the given size (letterboxed).
pub fn canvas_viewport(screen_width: f32, screen_height: f32) -> Rectangle {
    let scale = (screen_width / RENDER_WIDTH as f32).min(screen_height / RENDER_HEIGHT as f32);
    let w = RENDER_WIDTH as f32 * scale;
    let h = RENDER_HEIGHT as f32 * scale;
    Rectangle::new((screen_width - w) * 0.5, (screen_height - h) * 0.5, w, h)
}

/// Maps a window point to canvas coordinates; `None` in the letterbox bars.
pub fn screen_to_canvas(point: Vector2, screen_width: f32, screen_height: f32) -> Option<Vector2> {
    let viewport = canvas_viewport(screen_width, screen_height);
    if viewport.width <= 0.0 || !viewport.check_collision_point_rec(point) {
        return None;
    }
    Some(Vector2::new(
        (point.x - viewport.x) * RENDER_WIDTH as f32 / viewport.width,
        (point.y - viewport.y) * RENDER_HEIGHT as f32 / viewport.height,
    ))
}

/// Greedy word wrap. `measure` returns the drawn width of a string.
pub fn wrap_lines(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if !line.is_empty() && measure(&candidate) > max_width {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

pub fn text_width(text: &str, size: i32) -> f32 {
    measure_text(text, size) as f32
}

/// Text with its top-left at `pos`, shifted and faded by `visual`.
pub fn draw_text_visual(d: &mut RaylibDrawHandle, text: &str, pos: Vector2, size: i32, color: Color, visual: &Visual) {
    let size = (size as f32 * visual.scale).round() as i32;
    d.draw_text(
        text,
        (pos.x + visual.x) as i32,
        (pos.y + visual.y) as i32,
        size,
        faded(color, visual.opacity),
    );
}

/// Source rectangle cropping a `width` x `height` texture to `aspect`.
pub fn crop_source(width: f32, height: f32, aspect: f32, focal: FocalPosition) -> Rectangle {
    if width / height > aspect {
        let crop_w = height * aspect;
        Rectangle::new((width - crop_w) * 0.5, 0.0, crop_w, height)
    } else {
        let crop_h = width / aspect;
        Rectangle::new(0.0, focal.crop_top(height, crop_h), width, crop_h)
    }
}

/// A bordered photo tile centred on `center`, `width` wide, tilted by
/// `base_rotation` plus the variant's rotation.
pub fn draw_photo_tile(
    d: &mut RaylibDrawHandle,
    texture: &Texture2D,
    focal: FocalPosition,
    center: Vector2,
    width: f32,
    base_rotation: f32,
    visual: &Visual,
) {
    let w = width * visual.scale;
    let h = w / TILE_ASPECT;
    let border = 4.0 * visual.scale;
    let pos = Vector2::new(center.x + visual.x, center.y + visual.y);
    let rotation = base_rotation + visual.rotate;

    d.draw_rectangle_pro(
        Rectangle::new(pos.x, pos.y, w + border * 2.0, h + border * 2.0),
        Vector2::new(w * 0.5 + border, h * 0.5 + border),
        rotation,
        faded(WHITE, visual.opacity),
    );
    d.draw_texture_pro(
        texture,
        crop_source(texture.width() as f32, texture.height() as f32, TILE_ASPECT, focal),
        Rectangle::new(pos.x, pos.y, w, h),
        Vector2::new(w * 0.5, h * 0.5),
        rotation,
        faded(WHITE, visual.opacity),
    );
}

/// How a pointer is interacting with a button.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Press {
    #[default]
    Idle,
    Hover,
    Tap,
}

impl Press {
    fn target(self) -> (Visual, Transition) {
        match self {
            Press::Idle => (Visual::REST, HOVER.transition),
            Press::Hover => (HOVER.visible, HOVER.transition),
            Press::Tap => (TAP.visible, TAP.transition),
        }
    }
}

/// Tween from wherever the button was towards the current press target.
#[derive(Debug, Clone, Copy)]
struct PressAnimation {
    press: Press,
    start: Visual,
    elapsed: f32,
}

impl Default for PressAnimation {
    fn default() -> Self {
        Self {
            press: Press::Idle,
            start: Visual::REST,
            elapsed: 0.0,
        }
    }
}

impl PressAnimation {
    fn visual(&self) -> Visual {
        let (target, transition) = self.press.target();
        self.start.lerp(&target, transition.progress(self.elapsed))
    }

    fn update(&mut self, press: Press, dt: f32) {
        if press != self.press {
            self.start = self.visual();
            self.press = press;
            self.elapsed = dt;
        } else {
            self.elapsed += dt;
        }
    }
}

/// Pill-shaped push button.
#[derive(Debug, Clone)]
pub struct Button {
    pub label: String,
    pub bounds: Rectangle,
    pub from: Color,
    pub to: Color,
    animation: PressAnimation,
}

impl Button {
    pub fn new(label: &str, bounds: Rectangle, from: Color, to: Color) -> Self {
        Self {
            label: label.to_string(),
            bounds,
            from,
            to,
            animation: PressAnimation::default(),
        }
    }

    pub fn centered(label: &str, center: Vector2, from: Color, to: Color) -> Self {
        let w = text_width(label, BUTTON_FONT_SIZE) + 96.0;
        let h = BUTTON_FONT_SIZE as f32 + 36.0;
        Self::new(label, Rectangle::new(center.x - w * 0.5, center.y - h * 0.5, w, h), from, to)
    }

    pub fn contains(&self, point: Vector2) -> bool {
        self.bounds.check_collision_point_rec(point)
    }

    pub fn press(&self, pointer: &Pointer) -> Press {
        match (pointer.over(|p| self.contains(p)), pointer.down) {
            (false, _) => Press::Idle,
            (true, false) => Press::Hover,
            (true, true) => Press::Tap,
        }
    }

    pub fn update(&mut self, pointer: &Pointer, dt: f32) {
        let press = self.press(pointer);
        self.animation.update(press, dt);
    }

    /// Hover/tap visual on its own, before any entrance animation.
    pub fn press_visual(&self) -> Visual {
        self.animation.visual()
    }

    /// Bounds shifted by `visual` and scaled about the button's centre.
    pub fn draw_bounds(&self, visual: &Visual) -> Rectangle {
        let scale = visual.scale * self.press_visual().scale;
        let w = self.bounds.width * scale;
        let h = self.bounds.height * scale;
        let cx = self.bounds.x + self.bounds.width * 0.5 + visual.x;
        let cy = self.bounds.y + self.bounds.height * 0.5 + visual.y;
        Rectangle::new(cx - w * 0.5, cy - h * 0.5, w, h)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, visual: &Visual) {
        let b = self.draw_bounds(visual);
        let font_size = (BUTTON_FONT_SIZE as f32 * b.height / self.bounds.height).round() as i32;
        let r = b.height * 0.5;
        let from = faded(self.from, visual.opacity);
        let to = faded(self.to, visual.opacity);
        d.draw_circle_v(Vector2::new(b.x + r, b.y + r), r, from);
        d.draw_circle_v(Vector2::new(b.x + b.width - r, b.y + r), r, to);
        d.draw_rectangle_gradient_h(
            (b.x + r) as i32,
            b.y as i32,
            (b.width - r * 2.0) as i32,
            b.height as i32,
            from,
            to,
        );
        let tw = text_width(&self.label, font_size);
        d.draw_text(
            &self.label,
            (b.x + (b.width - tw) * 0.5) as i32,
            (b.y + (b.height - font_size as f32) * 0.5) as i32,
            font_size,
            faded(WHITE, visual.opacity),
        );
    }
}

/// Round speaker button pinned to the bottom-right corner.
pub struct MuteButton {
    center: Vector2,
}

impl Default for MuteButton {
    fn default() -> Self {
        Self {
            center: Vector2::new(
                RENDER_WIDTH as f32 - 24.0 - MUTE_BUTTON_RADIUS,
                RENDER_HEIGHT as f32 - 24.0 - MUTE_BUTTON_RADIUS,
            ),
        }
    }
}

impl MuteButton {
    pub fn contains(&self, point: Vector2) -> bool {
        point.distance_to(self.center) <= MUTE_BUTTON_RADIUS
    }

    /// Background alpha; brighter while the pointer is over the button.
    pub fn background_alpha(&self, pointer: &Pointer) -> f32 {
        if pointer.over(|p| self.contains(p)) { 0.3 } else { 0.2 }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, muted: bool, pointer: &Pointer) {
        let c = self.center;
        let r = MUTE_BUTTON_RADIUS;
        d.draw_circle_v(c, r, faded(WHITE, self.background_alpha(pointer)));

        // speaker body
        let s = r * 0.3;
        d.draw_rectangle_v(Vector2::new(c.x - s * 1.6, c.y - s * 0.5), Vector2::new(s * 0.7, s), WHITE);
        d.draw_triangle(
            Vector2::new(c.x - s * 0.9, c.y),
            Vector2::new(c.x - s * 0.1, c.y + s * 1.1),
            Vector2::new(c.x - s * 0.1, c.y - s * 1.1),
            WHITE,
        );

        if muted {
            let a = Vector2::new(c.x + s * 0.4, c.y - s * 0.6);
            let b = Vector2::new(c.x + s * 1.6, c.y + s * 0.6);
            d.draw_line_ex(a, b, 4.0, WHITE);
            d.draw_line_ex(Vector2::new(a.x, b.y), Vector2::new(b.x, a.y), 4.0, WHITE);
        } else {
            for (i, radius) in [s * 0.8, s * 1.5].into_iter().enumerate() {
                d.draw_ring(c, radius, radius + 4.0, -50.0, 50.0, 16 + i as i32 * 8, WHITE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_len(s: &str) -> f32 {
        s.len() as f32
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap_lines("To another spin around the sun", 12.0, by_len);
        assert_eq!(lines, ["To another", "spin around", "the sun"]);
        assert!(lines.iter().all(|l| l.len() <= 12));
    }

    #[test]
    fn wrap_keeps_overlong_words_whole() {
        let lines = wrap_lines("a extraordinarily b", 5.0, by_len);
        assert_eq!(lines, ["a", "extraordinarily", "b"]);
        assert!(wrap_lines("   ", 5.0, by_len).is_empty());
    }

    #[test]
    fn crop_keeps_focal_region() {
        // Tall image: crop height, top anchored
        let top = crop_source(300.0, 800.0, TILE_ASPECT, FocalPosition::Top);
        assert_eq!((top.y, top.width, top.height), (0.0, 300.0, 400.0));
        let center = crop_source(300.0, 800.0, TILE_ASPECT, FocalPosition::Center);
        assert_eq!(center.y, 200.0);
        // Wide image: crop width, always centred
        let wide = crop_source(1600.0, 800.0, TILE_ASPECT, FocalPosition::Top);
        assert_eq!((wide.x, wide.width, wide.height), (500.0, 600.0, 800.0));
    }

    #[test]
    fn screen_mapping_letterboxes() {
        let w = RENDER_WIDTH as f32;
        let h = RENDER_HEIGHT as f32;
        // Same size: identity
        let p = screen_to_canvas(Vector2::new(100.0, 200.0), w, h).unwrap();
        assert!((p.x - 100.0).abs() < 1e-3 && (p.y - 200.0).abs() < 1e-3);
        // Half width, full height: bars above and below
        let p = screen_to_canvas(Vector2::new(w * 0.25, h * 0.5), w * 0.5, h).unwrap();
        assert!((p.x - w * 0.5).abs() < 1e-2 && (p.y - h * 0.5).abs() < 1e-2);
        assert!(screen_to_canvas(Vector2::new(10.0, 5.0), w * 0.5, h).is_none());
    }

    #[test]
    fn mute_button_hit_area() {
        let b = MuteButton::default();
        assert!(b.contains(b.center));
        assert!(!b.contains(Vector2::new(0.0, 0.0)));
    }

    fn at(x: f32, y: f32, down: bool) -> Pointer {
        Pointer {
            position: Some(Vector2::new(x, y)),
            down,
        }
    }

    fn button() -> Button {
        Button::new("Open Card", Rectangle::new(100.0, 100.0, 200.0, 80.0), YELLOW_400, PINK_500)
    }

    #[test]
    fn mute_button_brightens_on_hover() {
        let b = MuteButton::default();
        assert_eq!(b.background_alpha(&Pointer::default()), 0.2);
        assert_eq!(b.background_alpha(&at(0.0, 0.0, false)), 0.2);
        assert_eq!(b.background_alpha(&at(b.center.x, b.center.y, false)), 0.3);
    }

    #[test]
    fn pointer_inside_bounds_selects_hover_or_tap() {
        let b = button();
        assert_eq!(b.press(&Pointer::default()), Press::Idle);
        assert_eq!(b.press(&at(10.0, 10.0, true)), Press::Idle);
        assert_eq!(b.press(&at(150.0, 120.0, false)), Press::Hover);
        assert_eq!(b.press(&at(150.0, 120.0, true)), Press::Tap);
    }

    #[test]
    fn button_visual_follows_the_pointer() {
        let mut b = button();
        assert_eq!(b.press_visual(), Visual::REST);

        b.update(&at(150.0, 120.0, false), 1.0);
        assert_eq!(b.press_visual(), HOVER.visible);

        b.update(&at(150.0, 120.0, true), 1.0);
        assert_eq!(b.press_visual(), TAP.visible);

        // Leaving eases back rather than snapping
        b.update(&Pointer::default(), 0.01);
        let s = b.press_visual().scale;
        assert!(s > TAP.visible.scale && s < 1.0, "scale {s}");
        b.update(&Pointer::default(), 1.0);
        assert_eq!(b.press_visual(), Visual::REST);
    }

    #[test]
    fn hovered_button_scales_about_its_centre() {
        let mut b = button();
        b.update(&at(150.0, 120.0, false), 1.0);
        let r = b.draw_bounds(&Visual::REST);
        assert!((r.width - 210.0).abs() < 1e-3 && (r.height - 84.0).abs() < 1e-3);
        assert!((r.x + r.width * 0.5 - 200.0).abs() < 1e-3);
        assert!((r.y + r.height * 0.5 - 140.0).abs() < 1e-3);
    }
}
