use std::cell::RefCell;
use std::rc::Rc;

use greeting::audio::AudioSink;
use greeting::carousel::Direction;
use greeting::constants::{FRAME_TIME, RECORD_LANDING_HOLD};
use greeting::listener::Interaction;
use greeting::view::recording_cue;
use greeting::{Action, GreetingError, GreetingResult, GreetingView, Layout};

#[derive(Debug, Default)]
struct Log {
    plays: u32,
    muted: bool,
    mute_calls: Vec<bool>,
}

/// Sink that records what the view asked of it. The log is shared so tests
/// can still read it after the view is dropped.
#[derive(Clone, Default)]
struct Recorder {
    log: Rc<RefCell<Log>>,
    reject: bool,
}

impl AudioSink for Recorder {
    fn play(&mut self) -> GreetingResult<()> {
        self.log.borrow_mut().plays += 1;
        if self.reject {
            Err(GreetingError::audio("autoplay blocked"))
        } else {
            Ok(())
        }
    }

    fn set_muted(&mut self, muted: bool) {
        let mut log = self.log.borrow_mut();
        log.muted = muted;
        log.mute_calls.push(muted);
    }

    fn is_muted(&self) -> bool {
        self.log.borrow().muted
    }
}

fn card(sink: Recorder) -> GreetingView<Recorder> {
    GreetingView::new(Layout::Card, sink, 4.0)
}

#[test]
fn opening_the_card_starts_music_and_autoplay() {
    let sink = Recorder::default();
    let mut view = card(sink.clone());

    let s = view.state();
    assert!(!s.opened && !s.started);

    view.dispatch(Action::Open);
    // click bubbles to the window listener after the button
    view.interact(Interaction::Click);

    let s = view.state();
    assert!(s.opened && s.started);
    assert!(view.carousel().autoplay_active());
    assert_eq!(sink.log.borrow().plays, 1);
}

#[test]
fn one_timer_tick_advances_one_photo() {
    let mut view = card(Recorder::default());
    view.handle_open();
    view.tick(4.0, true);

    let s = view.state();
    assert_eq!((s.page, s.direction), (1, Direction::Forward));
    assert_eq!(view.carousel().photo_index(5), Some(1 % 5));
}

#[test]
fn first_interaction_plays_exactly_once() {
    let sink = Recorder::default();
    let mut view = GreetingView::new(Layout::Collage, sink.clone(), 4.0);

    view.interact(Interaction::Touch);
    for _ in 0..5 {
        view.interact(Interaction::Click);
        view.interact(Interaction::Touch);
    }

    assert!(view.state().started);
    assert!(!view.listening_for_first_interaction());
    assert_eq!(sink.log.borrow().plays, 1);
}

#[test]
fn play_song_button_preempts_first_interaction() {
    let sink = Recorder::default();
    let mut view = GreetingView::new(Layout::Collage, sink.clone(), 4.0);

    view.dispatch(Action::PlaySong);
    view.interact(Interaction::Click);

    assert_eq!(sink.log.borrow().plays, 1);
}

#[test]
fn mute_twice_round_trips_and_mirrors_audio() {
    let sink = Recorder::default();
    let mut view = card(sink.clone());
    let initial = view.state().muted;

    view.dispatch(Action::ToggleMute);
    assert_eq!(view.state().muted, !initial);
    assert_eq!(sink.log.borrow().muted, view.state().muted);

    view.dispatch(Action::ToggleMute);
    assert_eq!(view.state().muted, initial);
    assert_eq!(sink.log.borrow().muted, view.state().muted);
    assert_eq!(sink.log.borrow().mute_calls, [!initial, initial]);
}

#[test]
fn blocked_playback_changes_nothing_visible() {
    let sink = Recorder {
        reject: true,
        ..Recorder::default()
    };
    let mut view = card(sink.clone());

    view.interact(Interaction::Click);

    let s = view.state();
    assert!(s.started);
    assert!(!s.muted);
    assert!(!s.opened);
    assert!(sink.log.borrow().mute_calls.is_empty());
}

#[test]
fn open_plays_even_after_first_interaction() {
    let sink = Recorder::default();
    let mut view = card(sink.clone());

    view.interact(Interaction::Click);
    view.dispatch(Action::Open);
    view.dispatch(Action::Open);

    assert!(view.state().opened);
    assert_eq!(sink.log.borrow().plays, 3);
}

#[test]
fn manual_pagination_sets_direction() {
    let mut view = card(Recorder::default());
    view.handle_open();

    view.dispatch(Action::Paginate(-1));
    let s = view.state();
    assert_eq!((s.page, s.direction), (-1, Direction::Backward));
    assert_eq!(view.carousel().photo_index(5), Some(1));

    view.dispatch(Action::Paginate(2));
    assert_eq!(view.state().direction, Direction::Forward);
}

#[test]
fn teardown_leaves_no_timer_running() {
    let mut view = card(Recorder::default());
    view.handle_open();
    assert!(view.carousel().autoplay_active());

    view.teardown();
    assert!(!view.carousel().autoplay_active());
    view.tick(60.0, true);
    assert_eq!(view.state().page, 0);
}

#[test]
fn photo_index_always_valid() {
    let mut view = card(Recorder::default());
    view.handle_open();
    for delta in [3, -7, 11, -1, 0, 1_000_001] {
        view.paginate(delta);
        for n in 1..8 {
            let idx = view.carousel().photo_index(n).unwrap();
            assert!(idx < n);
        }
    }
}

#[test]
fn unattended_collage_recording_starts_the_song() {
    let sink = Recorder::default();
    let mut view = GreetingView::new(Layout::Collage, sink.clone(), 4.0);

    let mut clock = 0.0;
    while clock < RECORD_LANDING_HOLD + 1.0 {
        clock += FRAME_TIME;
        if let Some(action) = recording_cue(Layout::Collage, &view.state(), clock) {
            view.dispatch(action);
        }
        view.tick(FRAME_TIME, true);
    }

    assert!(view.state().started);
    assert_eq!(sink.log.borrow().plays, 1);
}
