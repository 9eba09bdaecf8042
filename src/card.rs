//! Landing page that opens onto a card with a photo carousel.

use raylib::prelude::*;
use crate::carousel::{wrap_index, Direction};
use crate::config::GreetingConfig;
use crate::constants::*;
use crate::palette::*;
use crate::scene::{draw_photo_tile, draw_text_visual, text_width, wrap_lines, Button, Pointer, Scene, TILE_ASPECT};
use crate::texture_loader::LoadedPhoto;
use crate::variant::{self, Visual, CARD, ITEM, LANDING};
use crate::view::{Action, UiState};

const LANDING_TITLE_SIZE: i32 = 110;
const TITLE_SIZE: i32 = 96;
const BODY_SIZE: i32 = 32;
const SIGNATURE_SIZE: i32 = 72;
const TEXT_LEFT: f32 = 180.0;
const TEXT_WIDTH: f32 = 720.0;
const FRAME_X: f32 = 1380.0;
const FRAME_Y: f32 = 500.0;
const FRAME_WIDTH: f32 = 540.0;
const ARROW_RADIUS: f32 = 36.0;

/// Which subtree is on stage and how long it has been there.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Stage {
    Landing { elapsed: f32 },
    LandingExit { elapsed: f32 },
    Card { elapsed: f32 },
}

impl Stage {
    /// Advance the stage clock. The card only enters once the landing exit
    /// has finished.
    pub fn advance(self, opened: bool, dt: f32) -> Stage {
        match self {
            Stage::Landing { .. } if opened => Stage::LandingExit { elapsed: dt },
            Stage::Landing { elapsed } => Stage::Landing { elapsed: elapsed + dt },
            Stage::LandingExit { elapsed } => {
                let elapsed = elapsed + dt;
                let end = LANDING.transition.end();
                if elapsed >= end {
                    Stage::Card { elapsed: elapsed - end }
                } else {
                    Stage::LandingExit { elapsed }
                }
            }
            Stage::Card { elapsed } => Stage::Card { elapsed: elapsed + dt },
        }
    }
}

/// Slide transition between two carousel pages.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SlideTransition {
    pub from: Option<i64>,
    pub to: i64,
    pub direction: Direction,
    pub elapsed: f32,
}

impl SlideTransition {
    pub fn follow(&mut self, state: &UiState, dt: f32) {
        if state.page != self.to {
            self.from = Some(self.to);
            self.to = state.page;
            self.direction = state.direction;
            self.elapsed = 0.0;
        } else {
            self.elapsed += dt;
            if self.from.is_some() && self.elapsed >= SLIDE_DURATION {
                self.from = None;
            }
        }
    }
}

pub struct CardScene {
    landing_title: String,
    title: [(String, Color); 3],
    message: Vec<String>,
    closing: String,
    signature: String,
    photos: Vec<LoadedPhoto>,
    open_button: Button,
    stage: Stage,
    slide: SlideTransition,
}

fn arrow_centers() -> (Vector2, Vector2) {
    let offset = FRAME_WIDTH * 0.5 + ARROW_RADIUS + 40.0;
    (
        Vector2::new(FRAME_X - offset, FRAME_Y),
        Vector2::new(FRAME_X + offset, FRAME_Y),
    )
}

impl CardScene {
    pub fn new(config: &GreetingConfig, photos: Vec<LoadedPhoto>) -> Self {
        let [happy, birthday, name] = config.title_words();
        Self {
            landing_title: format!("{happy} {birthday}, {name}!"),
            title: [
                (happy.to_string(), YELLOW_300),
                (birthday.to_string(), PINK_400),
                (name.to_string(), LIME_300),
            ],
            message: wrap_lines(&config.message, TEXT_WIDTH, |s| text_width(s, BODY_SIZE)),
            closing: config.closing.clone(),
            signature: config.signature.clone(),
            photos,
            open_button: Button::centered(
                "Open Card",
                Vector2::new(RENDER_WIDTH as f32 * 0.5, RENDER_HEIGHT as f32 * 0.62),
                YELLOW_400,
                PINK_500,
            ),
            stage: Stage::Landing { elapsed: 0.0 },
            slide: SlideTransition {
                from: None,
                to: 0,
                direction: Direction::Still,
                elapsed: SLIDE_DURATION,
            },
        }
    }

    fn draw_landing(&self, d: &mut RaylibDrawHandle, visual: &Visual) {
        let w = text_width(&self.landing_title, LANDING_TITLE_SIZE);
        let pos = Vector2::new((RENDER_WIDTH as f32 - w * visual.scale) * 0.5, RENDER_HEIGHT as f32 * 0.32);
        draw_text_visual(d, &self.landing_title, pos, LANDING_TITLE_SIZE, YELLOW_300, visual);

        let hint = "A little something for your special day";
        let hw = text_width(hint, BODY_SIZE);
        let pos = Vector2::new((RENDER_WIDTH as f32 - hw) * 0.5, RENDER_HEIGHT as f32 * 0.32 + 140.0);
        draw_text_visual(d, hint, pos, BODY_SIZE, SKY_100, visual);

        self.open_button.draw(d, visual);
    }

    fn draw_card(&self, d: &mut RaylibDrawHandle, visual: &Visual) {
        let mut y = 150.0;
        let mut x = TEXT_LEFT;
        for (word, color) in self.title.iter() {
            draw_text_visual(d, word, Vector2::new(x, y), TITLE_SIZE, *color, visual);
            x += text_width(word, TITLE_SIZE) + 28.0;
            if x > TEXT_LEFT + TEXT_WIDTH * 0.6 {
                x = TEXT_LEFT;
                y += TITLE_SIZE as f32;
            }
        }
        y += TITLE_SIZE as f32 + 30.0;
        for line in self.message.iter() {
            draw_text_visual(d, line, Vector2::new(TEXT_LEFT, y), BODY_SIZE, faded(SKY_100, 0.9), visual);
            y += BODY_SIZE as f32 * 1.4;
        }
        y += 50.0;
        draw_text_visual(d, &self.closing, Vector2::new(TEXT_LEFT, y), BODY_SIZE + 6, SKY_100, visual);
        y += BODY_SIZE as f32 * 1.6;
        draw_text_visual(d, &self.signature, Vector2::new(TEXT_LEFT, y), SIGNATURE_SIZE, YELLOW_300, visual);

        self.draw_carousel(d, visual);
    }

    fn draw_carousel(&self, d: &mut RaylibDrawHandle, card: &Visual) {
        let len = self.photos.len();
        let (enter, exit) = variant::slide(self.slide.direction);
        let center = Vector2::new(FRAME_X + card.x, FRAME_Y + card.y);

        let mut layers = Vec::with_capacity(2);
        if let Some(from) = self.slide.from {
            layers.push((from, exit.hide(self.slide.elapsed)));
        }
        layers.push((self.slide.to, enter.show(self.slide.elapsed)));

        for (page, mut visual) in layers {
            let Some(index) = wrap_index(page, len) else { continue };
            visual.opacity *= card.opacity;
            let photo = &self.photos[index];
            draw_photo_tile(d, &photo.texture, photo.photo.focal, center, FRAME_WIDTH, 0.0, &visual);
        }

        let Some(current) = wrap_index(self.slide.to, len) else { return };

        let caption = &self.photos[current].photo.alt;
        let cw = text_width(caption, BODY_SIZE - 6);
        let frame_bottom = center.y + FRAME_WIDTH / TILE_ASPECT * 0.5;
        d.draw_text(
            caption,
            (center.x - cw * 0.5) as i32,
            (frame_bottom + 24.0) as i32,
            BODY_SIZE - 6,
            faded(SKY_100, card.opacity),
        );

        // Page dots
        let spacing = 26.0;
        let start = center.x - spacing * (len as f32 - 1.0) * 0.5;
        for i in 0..len {
            let alpha = if i == current { 1.0 } else { 0.4 };
            d.draw_circle_v(
                Vector2::new(start + spacing * i as f32, frame_bottom + 80.0),
                7.0,
                faded(WHITE, alpha * card.opacity),
            );
        }

        let (prev, next) = arrow_centers();
        for (c, sign) in [(prev, -1.0), (next, 1.0)] {
            let c = Vector2::new(c.x + card.x, c.y + card.y);
            d.draw_circle_v(c, ARROW_RADIUS, faded(WHITE, 0.2 * card.opacity));
            let tip = Vector2::new(c.x + sign * 12.0, c.y);
            let top = Vector2::new(c.x - sign * 8.0, c.y - 14.0);
            let bottom = Vector2::new(c.x - sign * 8.0, c.y + 14.0);
            d.draw_line_ex(top, tip, 5.0, faded(WHITE, card.opacity));
            d.draw_line_ex(bottom, tip, 5.0, faded(WHITE, card.opacity));
        }
    }
}

impl Scene for CardScene {
    fn update(&mut self, state: &UiState, pointer: &Pointer, dt: f32) {
        self.stage = self.stage.advance(state.opened, dt);
        if let Stage::Landing { .. } = self.stage {
            self.open_button.update(pointer, dt);
        }
        self.slide.follow(state, dt);
    }

    fn draw(&self, d: &mut RaylibDrawHandle, _state: &UiState) {
        match self.stage {
            Stage::Landing { elapsed } => self.draw_landing(d, &ITEM.show(elapsed)),
            Stage::LandingExit { elapsed } => self.draw_landing(d, &LANDING.hide(elapsed)),
            Stage::Card { elapsed } => self.draw_card(d, &CARD.show(elapsed)),
        }
    }

    fn hit_test(&self, point: Vector2, state: &UiState) -> Option<Action> {
        match self.stage {
            Stage::Landing { .. } if !state.opened && self.open_button.contains(point) => Some(Action::Open),
            Stage::Card { .. } => {
                let (prev, next) = arrow_centers();
                if point.distance_to(prev) <= ARROW_RADIUS {
                    Some(Action::Paginate(-1))
                } else if point.distance_to(next) <= ARROW_RADIUS {
                    Some(Action::Paginate(1))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}
