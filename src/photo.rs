use std::path::PathBuf;

/// Which part of a photo stays in frame when it is cropped to a tile.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocalPosition {
    Top,
    #[default]
    Center,
}

impl FocalPosition {
    /// Top edge (in source pixels) of a `crop_height` window over an image
    /// `height` pixels tall.
    pub fn crop_top(self, height: f32, crop_height: f32) -> f32 {
        let slack = (height - crop_height).max(0.0);
        match self {
            FocalPosition::Top => 0.0,
            FocalPosition::Center => slack * 0.5,
        }
    }
}

#[derive(Debug, PartialEq, Clone, serde::Serialize, serde::Deserialize)]
pub struct Photo {
    pub path: PathBuf,
    #[serde(default)]
    pub focal: FocalPosition,
    #[serde(default)]
    pub alt: String,
}

impl Photo {
    pub fn new(path: impl Into<PathBuf>, focal: FocalPosition, alt: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            focal,
            alt: alt.into(),
        }
    }

    /// Photo from a bare file, captioned with its file stem.
    pub fn from_path(path: PathBuf) -> Self {
        let alt = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        Self {
            path,
            focal: FocalPosition::Center,
            alt,
        }
    }
}
