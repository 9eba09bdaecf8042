use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{AUTOPLAY_INTERVAL, SLIDE_DURATION};
use crate::error::{GreetingError, GreetingResult};
use crate::photo::{FocalPosition, Photo};
use crate::texture_loader::load_sorted_image_paths;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Hero text next to a 3+2 photo collage.
    #[default]
    Collage,
    /// Landing page that opens onto a photo carousel.
    Card,
}

#[derive(Debug, PartialEq, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GreetingConfig {
    pub recipient: String,
    pub message: String,
    pub closing: String,
    pub signature: String,
    pub photos: Vec<Photo>,
    pub music: Option<PathBuf>,
    pub layout: Layout,
    pub autoplay_interval_secs: f32,
    pub pause_when_unfocused: bool,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            recipient: "Bert".to_string(),
            message: "To another spin around the sun with a year of love, growth, adventures and joy."
                .to_string(),
            closing: "Lots of love,".to_string(),
            signature: "Tim x".to_string(),
            photos: vec![
                Photo::new("assets/photo1.png", FocalPosition::Top, "Dad and child"),
                Photo::new("assets/photo2.png", FocalPosition::Top, "Dad throwing child"),
                Photo::new("assets/photo3.png", FocalPosition::Center, "Mum lifting child silhouette"),
                Photo::new("assets/photo4.jpg", FocalPosition::Center, "Family group photo"),
                Photo::new("assets/photo5.jpg", FocalPosition::Center, "Wedding group photo"),
            ],
            music: Some(PathBuf::from("assets/Birthday_Echoes.mp3")),
            layout: Layout::Collage,
            autoplay_interval_secs: AUTOPLAY_INTERVAL,
            pause_when_unfocused: true,
        }
    }
}

impl GreetingConfig {
    /// Reads a JSON config. Relative asset paths resolve against the file's
    /// directory.
    pub fn load(path: &Path) -> GreetingResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| GreetingError::config(format!("failed to read {path:?}: {e}")))?;
        let mut config = Self::from_json(&text)?;
        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        Ok(config)
    }

    pub fn from_json(text: &str) -> GreetingResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// The autoplay interval may not be shorter than one slide transition.
    pub fn validate(&self) -> GreetingResult<()> {
        let interval = self.autoplay_interval_secs;
        if !interval.is_finite() || interval < SLIDE_DURATION {
            return Err(GreetingError::config(format!(
                "autoplay_interval_secs must be at least {SLIDE_DURATION}, got {interval}"
            )));
        }
        Ok(())
    }

    /// Applies command-line overrides on top of the loaded config. A photo
    /// directory replaces the configured photos with every image in it.
    pub fn apply_overrides(
        &mut self,
        photos_dir: Option<&Path>,
        music: Option<&Path>,
        layout: Option<Layout>,
    ) -> GreetingResult<()> {
        if let Some(dir) = photos_dir {
            self.photos = load_sorted_image_paths(dir)?
                .into_iter()
                .map(Photo::from_path)
                .collect();
        }
        if let Some(music) = music {
            self.music = Some(music.to_path_buf());
        }
        if let Some(layout) = layout {
            self.layout = layout;
        }
        Ok(())
    }

    fn rebase(&mut self, base: &Path) {
        for photo in &mut self.photos {
            if photo.path.is_relative() {
                photo.path = base.join(&photo.path);
            }
        }
        if let Some(music) = self.music.as_mut() {
            if music.is_relative() {
                *music = base.join(&*music);
            }
        }
    }

    /// Title words in display order.
    pub fn title_words(&self) -> [&str; 3] {
        ["Happy", "Birthday", self.recipient.as_str()]
    }
}
