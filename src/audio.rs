use raylib::prelude::*;
use crate::error::{GreetingError, GreetingResult};

/// Audio output the playback controller drives.
pub trait AudioSink {
    /// Starts (or resumes) playback. May be rejected by the host.
    fn play(&mut self) -> GreetingResult<()>;
    fn set_muted(&mut self, muted: bool);
    fn is_muted(&self) -> bool;
    /// Called once per frame; streaming sinks refill their buffers here.
    fn update(&mut self) {}
}

/// Looping background track streamed through raylib.
pub struct MusicSink<'aud> {
    music: Music<'aud>,
    muted: bool,
}

impl<'aud> MusicSink<'aud> {
    pub fn load(audio: &'aud RaylibAudio, path: &std::path::Path) -> GreetingResult<Self> {
        let name = path
            .to_str()
            .ok_or_else(|| GreetingError::asset(path, "path is not valid UTF-8"))?;
        let music = audio
            .new_music(name)
            .map_err(|e| GreetingError::asset(path, e.to_string()))?;
        tracing::info!(?path, "music loaded");
        Ok(Self { music, muted: false })
    }
}

impl AudioSink for MusicSink<'_> {
    fn play(&mut self) -> GreetingResult<()> {
        if !self.music.is_stream_playing() {
            self.music.play_stream();
        }
        if self.music.is_stream_playing() {
            Ok(())
        } else {
            Err(GreetingError::audio("music stream refused to start"))
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.music.set_volume(if muted { 0.0 } else { 1.0 });
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn update(&mut self) {
        self.music.update_stream();
    }
}

/// Stand-in when no device or track is available: every play is rejected.
#[derive(Debug, Default)]
pub struct SilentSink {
    muted: bool,
}

impl AudioSink for SilentSink {
    fn play(&mut self) -> GreetingResult<()> {
        Err(GreetingError::audio("no audio output available"))
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}

impl<A: AudioSink + ?Sized> AudioSink for Box<A> {
    fn play(&mut self) -> GreetingResult<()> {
        (**self).play()
    }

    fn set_muted(&mut self, muted: bool) {
        (**self).set_muted(muted)
    }

    fn is_muted(&self) -> bool {
        (**self).is_muted()
    }

    fn update(&mut self) {
        (**self).update()
    }
}
