use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use crate::error::{GreetingError, GreetingResult};
use crate::photo::Photo;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// A decoded photo ready to draw.
pub struct LoadedPhoto {
    pub photo: Photo,
    pub texture: Texture2D,
}

fn extension_of(path: &Path) -> String {
    path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase()
}

// --- Image files in a directory, sorted by file name ---
pub fn load_sorted_image_paths(dir_path: &Path) -> GreetingResult<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path)
        .map_err(|e| GreetingError::asset(dir_path, format!("failed to read directory: {e}")))?;

    for entry in entries {
        let path = entry?.path();
        if path.is_file() && IMAGE_EXTENSIONS.contains(&extension_of(&path).as_str()) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        Err(GreetingError::asset(dir_path, "no image files found"))
    } else {
        Ok(paths)
    }
}

/// Quarter turns (clockwise) needed to display an image with this EXIF
/// orientation upright. Mirrored orientations are drawn unflipped.
pub fn quarter_turns(orientation: u16) -> u8 {
    match orientation {
        3 | 4 => 2,
        5 | 6 => 1,
        7 | 8 => 3,
        _ => 0,
    }
}

fn read_orientation(path: &Path, bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // Not fatal: draw the photo as stored.
            tracing::warn!(?path, error = %e, "could not read EXIF data");
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> GreetingResult<Texture2D> {
    let file_bytes = fs::read(image_path)
        .map_err(|e| GreetingError::asset(image_path, format!("failed to read file: {e}")))?;

    let extension = extension_of(image_path);
    // EXIF is only reliable in JPEG containers
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| GreetingError::asset(image_path, format!("failed to decode image: {e}")))?;

    match quarter_turns(orientation) {
        1 => image.rotate_cw(),
        2 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        3 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        tracing::debug!(?image_path, orientation, "applied EXIF rotation");
    }

    let mut texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| GreetingError::asset(image_path, format!("failed to create texture: {e}")))?;
    texture.set_texture_filter(thread, TextureFilter::TEXTURE_FILTER_BILINEAR);

    Ok(texture)
}

/// Loads every photo that decodes, skipping (and logging) the rest.
pub fn load_photos(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    photos: &[Photo],
) -> GreetingResult<Vec<LoadedPhoto>> {
    let mut loaded = Vec::with_capacity(photos.len());
    for photo in photos {
        match load_texture_with_exif_rotation(rl, thread, &photo.path) {
            Ok(texture) => loaded.push(LoadedPhoto { photo: photo.clone(), texture }),
            Err(e) => tracing::warn!(error = %e, "skipping photo"),
        }
    }
    if loaded.is_empty() && !photos.is_empty() {
        return Err(GreetingError::config("none of the configured photos could be loaded"));
    }
    tracing::info!(count = loaded.len(), "photos loaded");
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_turns() {
        assert_eq!(quarter_turns(1), 0);
        assert_eq!(quarter_turns(3), 2);
        assert_eq!(quarter_turns(6), 1);
        assert_eq!(quarter_turns(8), 3);
        assert_eq!(quarter_turns(42), 0);
    }

    #[test]
    fn directory_listing_filters_and_sorts() {
        let dir = std::env::temp_dir().join(format!("greeting_photos_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        for name in ["b.JPG", "a.png", "notes.txt", "c.gif"] {
            fs::write(dir.join(name), b"x").unwrap();
        }

        let names: Vec<_> = load_sorted_image_paths(&dir)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.png", "b.JPG", "c.gif"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = std::env::temp_dir().join(format!("greeting_empty_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        assert!(load_sorted_image_paths(&dir).is_err());
        fs::remove_dir_all(&dir).unwrap();
    }
}
