//! Animated birthday greeting rendered with raylib.
//!
//! The state machine lives in [`view::GreetingView`] and is independent of the
//! window; [`collage`] and [`card`] draw it.

pub mod audio;
pub mod burst;
pub mod card;
pub mod carousel;
pub mod collage;
pub mod config;
pub mod confetti;
pub mod constants;
pub mod ease;
pub mod error;
pub mod ffmpeg;
pub mod listener;
pub mod palette;
pub mod photo;
pub mod playback;
pub mod reveal;
pub mod scene;
pub mod texture_loader;
pub mod variant;
pub mod view;

pub use config::{GreetingConfig, Layout};
pub use error::{GreetingError, GreetingResult};
pub use view::{Action, GreetingView, UiState};
