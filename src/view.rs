//! The greeting view: playback, reveal and carousel state behind one event
//! surface. Scenes read [`UiState`] snapshots; the frame loop feeds events in.

use crate::audio::AudioSink;
use crate::carousel::{Carousel, Direction};
use crate::config::Layout;
use crate::constants::RECORD_LANDING_HOLD;
use crate::listener::{Interaction, OneShotListener};
use crate::playback::Playback;
use crate::reveal::Reveal;

const FIRST_INTERACTION: &[Interaction] = &[Interaction::Click, Interaction::Touch];

/// Everything a scene needs to draw one frame.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct UiState {
    pub muted: bool,
    pub started: bool,
    pub opened: bool,
    pub page: i64,
    pub direction: Direction,
}

/// Discrete things the user can do to the view.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    ToggleMute,
    Open,
    PlaySong,
    Paginate(i64),
}

/// What an unattended recording does once the first screen has been held for
/// `RECORD_LANDING_HOLD` seconds: the card opens, the collage starts its song.
pub fn recording_cue(layout: Layout, state: &UiState, clock: f32) -> Option<Action> {
    if clock < RECORD_LANDING_HOLD {
        return None;
    }
    match layout {
        Layout::Card if !state.opened => Some(Action::Open),
        Layout::Collage if !state.started => Some(Action::PlaySong),
        _ => None,
    }
}

pub struct GreetingView<A: AudioSink> {
    layout: Layout,
    playback: Playback<A>,
    reveal: Reveal,
    carousel: Carousel,
    first_interaction: OneShotListener,
    pause_when_unfocused: bool,
}

impl<A: AudioSink> GreetingView<A> {
    pub fn new(layout: Layout, audio: A, autoplay_interval: f32) -> Self {
        Self {
            layout,
            playback: Playback::new(audio),
            reveal: Reveal::default(),
            carousel: Carousel::new(autoplay_interval),
            first_interaction: OneShotListener::register(FIRST_INTERACTION),
            pause_when_unfocused: true,
        }
    }

    pub fn with_pause_when_unfocused(mut self, pause: bool) -> Self {
        self.pause_when_unfocused = pause;
        self
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn state(&self) -> UiState {
        UiState {
            muted: self.playback.muted(),
            started: self.playback.started(),
            opened: self.reveal.opened(),
            page: self.carousel.page(),
            direction: self.carousel.direction(),
        }
    }

    pub fn audio(&self) -> &A {
        self.playback.audio()
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn listening_for_first_interaction(&self) -> bool {
        self.first_interaction.is_armed()
    }

    /// Window-level pointer/touch input, delivered after any button it hit.
    pub fn interact(&mut self, event: Interaction) {
        if self.first_interaction.fire(event) {
            tracing::debug!(?event, "first interaction");
            self.playback.on_first_interaction();
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::ToggleMute => self.toggle_mute(),
            Action::Open => self.handle_open(),
            Action::PlaySong => self.play_song(),
            Action::Paginate(delta) => self.paginate(delta),
        }
    }

    pub fn toggle_mute(&mut self) {
        self.playback.toggle_mute();
    }

    /// Opens the card and starts the music regardless of earlier attempts.
    pub fn handle_open(&mut self) {
        if self.reveal.open() {
            tracing::info!("card opened");
            if self.layout == Layout::Card {
                self.carousel.start_autoplay();
            }
        }
        self.playback.start();
    }

    pub fn play_song(&mut self) {
        if !self.playback.started() {
            self.playback.start();
        }
    }

    pub fn paginate(&mut self, delta: i64) {
        self.carousel.paginate(delta);
    }

    /// Per-frame update. Autoplay only runs while the card is open, and holds
    /// while the window is in the background if so configured.
    pub fn tick(&mut self, dt: f32, focused: bool) {
        self.playback.update();
        if !self.reveal.opened() {
            return;
        }
        if focused || !self.pause_when_unfocused {
            let fired = self.carousel.tick(dt);
            if fired > 0 {
                tracing::trace!(page = self.carousel.page(), "carousel advanced");
            }
        }
    }

    /// Releases the autoplay timer and detaches the interaction listener.
    pub fn teardown(&mut self) {
        self.carousel.stop_autoplay();
        self.first_interaction.unsubscribe();
    }
}

impl<A: AudioSink> Drop for GreetingView<A> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentSink;

    fn card() -> GreetingView<SilentSink> {
        GreetingView::new(Layout::Card, SilentSink::default(), 4.0)
    }

    #[test]
    fn fresh_view_is_closed_and_silent() {
        let v = card();
        let s = v.state();
        assert!(!s.opened && !s.started && !s.muted);
        assert_eq!((s.page, s.direction), (0, Direction::Still));
        assert!(v.listening_for_first_interaction());
    }

    #[test]
    fn closed_card_never_advances() {
        let mut v = card();
        v.tick(60.0, true);
        assert_eq!(v.state().page, 0);
    }

    #[test]
    fn background_window_holds_autoplay() {
        let mut v = card();
        v.handle_open();
        v.tick(10.0, false);
        assert_eq!(v.state().page, 0);

        let mut v = card().with_pause_when_unfocused(false);
        v.handle_open();
        v.tick(4.0, false);
        assert_eq!(v.state().page, 1);
    }

    #[test]
    fn collage_opens_without_autoplay() {
        let mut v = GreetingView::new(Layout::Collage, SilentSink::default(), 4.0);
        v.handle_open();
        assert!(!v.carousel().autoplay_active());
    }

    #[test]
    fn play_song_starts_once() {
        let mut v = GreetingView::new(Layout::Collage, SilentSink::default(), 4.0);
        v.dispatch(Action::PlaySong);
        assert!(v.state().started);
    }

    #[test]
    fn recording_cue_waits_for_the_hold() {
        let v = card();
        assert_eq!(recording_cue(Layout::Card, &v.state(), RECORD_LANDING_HOLD - 0.1), None);
        assert_eq!(recording_cue(Layout::Card, &v.state(), RECORD_LANDING_HOLD), Some(Action::Open));
        assert_eq!(
            recording_cue(Layout::Collage, &v.state(), RECORD_LANDING_HOLD),
            Some(Action::PlaySong)
        );
    }

    #[test]
    fn recording_cue_fires_once_per_layout() {
        let mut v = card();
        v.dispatch(Action::Open);
        assert_eq!(recording_cue(Layout::Card, &v.state(), 10.0), None);

        let mut v = GreetingView::new(Layout::Collage, SilentSink::default(), 4.0);
        let cue = recording_cue(Layout::Collage, &v.state(), 10.0).unwrap();
        v.dispatch(cue);
        assert!(v.state().started);
        assert_eq!(recording_cue(Layout::Collage, &v.state(), 10.0), None);
    }

    #[test]
    fn teardown_detaches_everything() {
        let mut v = card();
        v.handle_open();
        v.teardown();
        assert!(!v.carousel().autoplay_active());
        assert!(!v.listening_for_first_interaction());
        v.teardown();
    }
}
