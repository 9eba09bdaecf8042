//! Hero text beside a 3+2 photo collage.

use raylib::prelude::*;
use crate::config::GreetingConfig;
use crate::constants::*;
use crate::palette::*;
use crate::scene::{draw_photo_tile, draw_text_visual, text_width, wrap_lines, Button, Pointer, Scene, TILE_ASPECT};
use crate::texture_loader::LoadedPhoto;
use crate::variant::{self, Variant, Visual, CONTAINER, CONTAINER_STAGGER, ITEM};
use crate::view::{Action, UiState};

const TITLE_SIZE: i32 = 120;
const BODY_SIZE: i32 = 34;
const SIGNATURE_SIZE: i32 = 84;
const TEXT_LEFT: f32 = 160.0;
const TEXT_WIDTH: f32 = 760.0;
const GRID_LEFT: f32 = 960.0;
const GRID_WIDTH: f32 = 800.0;
const GRID_GAP: f32 = 12.0;

/// Collage slot: grid column (of six), row, resting tilt and entrance variant.
struct Slot {
    column: f32,
    row: f32,
    tilt: f32,
    variant: Variant,
}

const SLOTS: [Slot; 5] = [
    Slot { column: 0.0, row: 0.0, tilt: -2.0, variant: variant::IMAGE_MAIN },
    Slot { column: 2.0, row: 0.0, tilt: 1.0, variant: variant::IMAGE_SIDE_LEFT },
    Slot { column: 4.0, row: 0.0, tilt: -1.0, variant: variant::IMAGE_SIDE_RIGHT },
    Slot { column: 1.0, row: 1.0, tilt: 2.0, variant: variant::IMAGE_SIDE_LEFT },
    Slot { column: 3.0, row: 1.0, tilt: -2.0, variant: variant::IMAGE_MAIN },
];

/// Centre and width of a two-column tile starting at `column` in `row`.
fn slot_geometry(column: f32, row: f32) -> (Vector2, f32) {
    let col_width = (GRID_WIDTH - GRID_GAP * 5.0) / 6.0;
    let tile_width = col_width * 2.0 + GRID_GAP;
    let tile_height = tile_width / TILE_ASPECT;
    let grid_height = tile_height * 2.0 + GRID_GAP;
    let top = (RENDER_HEIGHT as f32 - grid_height) * 0.5;
    let x = GRID_LEFT + column * (col_width + GRID_GAP) + tile_width * 0.5;
    let y = top + row * (tile_height + GRID_GAP) + tile_height * 0.5;
    (Vector2::new(x, y), tile_width)
}

pub struct CollageScene {
    title: [(String, Color); 3],
    message: Vec<String>,
    closing: String,
    signature: String,
    photos: Vec<LoadedPhoto>,
    play_button: Button,
    elapsed: f32,
}

impl CollageScene {
    pub fn new(config: &GreetingConfig, photos: Vec<LoadedPhoto>) -> Self {
        let [happy, birthday, name] = config.title_words();
        let message = wrap_lines(&config.message, TEXT_WIDTH, |s| text_width(s, BODY_SIZE));
        let button_y = 540.0 + 60.0 + message.len() as f32 * (BODY_SIZE as f32 * 1.4);
        let play_button = Button::centered(
            "Play Birthday Song",
            Vector2::new(TEXT_LEFT + 260.0, button_y),
            YELLOW_400,
            PINK_500,
        );
        Self {
            title: [
                (happy.to_string(), YELLOW_300),
                (birthday.to_string(), PINK_400),
                (name.to_string(), LIME_300),
            ],
            message,
            closing: config.closing.clone(),
            signature: config.signature.clone(),
            photos,
            play_button,
            elapsed: 0.0,
        }
    }

    /// Visual of stagger child `index`, combined with the container fade.
    fn child(&self, variant: &Variant, index: usize) -> Visual {
        let mut v = variant.show(CONTAINER_STAGGER.child_elapsed(self.elapsed, index));
        v.opacity *= CONTAINER.show(self.elapsed).opacity;
        v
    }
}

impl Scene for CollageScene {
    fn update(&mut self, state: &UiState, pointer: &Pointer, dt: f32) {
        self.elapsed += dt;
        if !state.started {
            self.play_button.update(pointer, dt);
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle, state: &UiState) {
        let text = self.child(&ITEM, 0);

        // Title, one word per line
        let mut y = 140.0;
        for (word, color) in self.title.iter() {
            draw_text_visual(d, word, Vector2::new(TEXT_LEFT, y), TITLE_SIZE, *color, &text);
            y += TITLE_SIZE as f32 * 0.95;
        }

        y += 40.0;
        for line in self.message.iter() {
            draw_text_visual(d, line, Vector2::new(TEXT_LEFT, y), BODY_SIZE, faded(SKY_100, 0.9), &text);
            y += BODY_SIZE as f32 * 1.4;
        }

        if !state.started {
            self.play_button.draw(d, &text);
        }

        let mut y = self.play_button.bounds.y + self.play_button.bounds.height + 48.0;
        draw_text_visual(d, &self.closing, Vector2::new(TEXT_LEFT, y), BODY_SIZE + 6, SKY_100, &text);
        y += BODY_SIZE as f32 * 1.6;
        draw_text_visual(d, &self.signature, Vector2::new(TEXT_LEFT - 4.0, y), SIGNATURE_SIZE, YELLOW_300, &text);

        for (i, (photo, slot)) in self.photos.iter().zip(SLOTS.iter()).enumerate() {
            let (center, width) = slot_geometry(slot.column, slot.row);
            let visual = self.child(&slot.variant, i + 1);
            draw_photo_tile(d, &photo.texture, photo.photo.focal, center, width, slot.tilt, &visual);
        }
    }

    fn hit_test(&self, point: Vector2, state: &UiState) -> Option<Action> {
        if !state.started && self.play_button.contains(point) {
            return Some(Action::PlaySong);
        }
        None
    }
}
