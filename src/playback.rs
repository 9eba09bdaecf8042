use crate::audio::AudioSink;

/// Owns the `muted`/`started` flags and the audio output they control.
pub struct Playback<A: AudioSink> {
    audio: A,
    muted: bool,
    started: bool,
}

impl<A: AudioSink> Playback<A> {
    pub fn new(audio: A) -> Self {
        let muted = audio.is_muted();
        Self {
            audio,
            muted,
            started: false,
        }
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        self.audio.set_muted(self.muted);
        tracing::debug!(muted = self.muted, "mute toggled");
    }

    /// First click or touch anywhere: start music unless something already did.
    pub fn on_first_interaction(&mut self) {
        if !self.started {
            self.start();
        }
    }

    /// Attempts playback and marks the session started. A rejected attempt
    /// leaves everything else untouched.
    pub fn start(&mut self) {
        if let Err(e) = self.audio.play() {
            tracing::debug!(error = %e, "playback rejected");
        }
        self.started = true;
    }

    pub fn update(&mut self) {
        self.audio.update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GreetingError, GreetingResult};

    #[derive(Default)]
    struct Probe {
        plays: u32,
        muted: bool,
        reject: bool,
    }

    impl AudioSink for Probe {
        fn play(&mut self) -> GreetingResult<()> {
            self.plays += 1;
            if self.reject {
                Err(GreetingError::audio("blocked"))
            } else {
                Ok(())
            }
        }

        fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        fn is_muted(&self) -> bool {
            self.muted
        }
    }

    #[test]
    fn toggle_twice_restores_and_mirrors_sink() {
        let mut p = Playback::new(Probe::default());
        p.toggle_mute();
        assert!(p.muted());
        assert!(p.audio().muted);
        p.toggle_mute();
        assert!(!p.muted());
        assert!(!p.audio().muted);
    }

    #[test]
    fn first_interaction_only_plays_when_not_started() {
        let mut p = Playback::new(Probe::default());
        p.on_first_interaction();
        p.on_first_interaction();
        assert_eq!(p.audio().plays, 1);
        assert!(p.started());
    }

    #[test]
    fn rejected_play_is_swallowed() {
        let mut p = Playback::new(Probe {
            reject: true,
            ..Probe::default()
        });
        p.start();
        assert!(p.started());
        assert!(!p.muted());
        assert_eq!(p.audio().plays, 1);
    }

    #[test]
    fn start_is_unconditional() {
        let mut p = Playback::new(Probe::default());
        p.start();
        p.start();
        assert_eq!(p.audio().plays, 2);
    }
}
