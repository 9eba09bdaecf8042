use std::path::Path;
use std::process::{Command, Stdio};
use std::io::Write;
use raylib::prelude::*;
use crate::error::{GreetingError, GreetingResult};

/// Pipes raw RGBA frames into an `ffmpeg` child encoding H.264.
pub struct Ffmpeg {
    process: std::process::Child,
    stdin: Option<std::process::ChildStdin>,
    row: Vec<u8>,
}

/// Arguments for an `ffmpeg` invocation reading `width`x`height` RGBA frames
/// from stdin.
pub fn ffmpeg_args(width: i32, height: i32, fps: u32, output: &Path) -> Vec<String> {
    let mut args: Vec<String> = [
        "-loglevel", "error",
        "-y",
        "-f", "rawvideo",
        "-pixel_format", "rgba",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    args.extend([
        "-video_size".to_string(), format!("{}x{}", width, height),
        "-framerate".to_string(), format!("{}", fps),
        "-i".to_string(), "-".to_string(),
        "-c:v".to_string(), "libx264".to_string(),
        "-pix_fmt".to_string(), "yuv420p".to_string(),
        output.to_string_lossy().into_owned(),
    ]);
    args
}

impl Ffmpeg {
    pub fn new(width: i32, height: i32, fps: u32, output: &Path) -> GreetingResult<Ffmpeg> {
        let mut process = Command::new("ffmpeg")
            .stdin(Stdio::piped())
            .args(ffmpeg_args(width, height, fps, output))
            .spawn()
            .map_err(|e| GreetingError::record(format!("failed to start ffmpeg: {e}")))?;
        let stdin = process.stdin.take()
            .ok_or_else(|| GreetingError::record("failed to open ffmpeg stdin"))?;
        tracing::info!(?output, width, height, fps, "recording started");
        Ok(Ffmpeg { process, stdin: Some(stdin), row: Vec::new() })
    }

    /// Writes one frame. Render textures come back bottom-up, so rows are
    /// sent in reverse order.
    pub fn write(&mut self, image: &Image) -> GreetingResult<()> {
        let width = image.width() as usize;
        let height = image.height() as usize;
        let stride = width * 4; // RGBA
        let stdin = self.stdin.as_mut()
            .ok_or_else(|| GreetingError::record("ffmpeg stdin already closed"))?;

        let pixels = image.get_image_data();
        self.row.clear();
        self.row.reserve(stride);
        for y in (0..height).rev() {
            self.row.clear();
            for c in &pixels[y * width..(y + 1) * width] {
                self.row.extend_from_slice(&[c.r, c.g, c.b, c.a]);
            }
            stdin.write_all(&self.row)?;
        }
        Ok(())
    }

    /// Closes the pipe and waits for the encoder to finish the file.
    pub fn finish(mut self) -> GreetingResult<()> {
        self.stdin = None;
        let status = self.process.wait()?;
        if status.success() {
            tracing::info!("recording finished");
            Ok(())
        } else {
            Err(GreetingError::record(format!("ffmpeg exited with {status}")))
        }
    }
}

impl Drop for Ffmpeg {
    fn drop(&mut self) {
        // Close stdin pipe and wait for ffmpeg to finish
        if self.stdin.take().is_some() {
            if let Err(e) = self.process.wait() {
                tracing::warn!(error = %e, "failed to wait for ffmpeg");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_describe_raw_rgba_input() {
        let args = ffmpeg_args(1920, 1080, 60, Path::new("bert.mp4"));
        let joined = args.join(" ");
        assert!(joined.contains("-pixel_format rgba"));
        assert!(joined.contains("-video_size 1920x1080"));
        assert!(joined.contains("-framerate 60"));
        assert_eq!(args.last().map(String::as_str), Some("bert.mp4"));
    }
}
