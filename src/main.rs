use std::path::PathBuf;

use anyhow::{anyhow, Context as _};
use clap::Parser;
use raylib::prelude::*;

use greeting::audio::{AudioSink, MusicSink, SilentSink};
use greeting::burst::Burst;
use greeting::card::CardScene;
use greeting::collage::CollageScene;
use greeting::confetti;
use greeting::constants::*;
use greeting::ffmpeg::Ffmpeg;
use greeting::listener::Interaction;
use greeting::palette::BLUE_600;
use greeting::scene::{canvas_viewport, screen_to_canvas, MuteButton, Pointer, Scene};
use greeting::texture_loader::load_photos;
use greeting::view::recording_cue;
use greeting::{Action, GreetingConfig, GreetingView, Layout};

#[derive(Parser, Debug)]
#[command(name = "greeting", version, about = "Animated birthday greeting")]
struct Cli {
    /// Greeting configuration (JSON).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use every image in this directory instead of the configured photos.
    #[arg(long)]
    photos: Option<PathBuf>,

    /// Background music track.
    #[arg(long)]
    music: Option<PathBuf>,

    /// Page layout.
    #[arg(long, value_enum)]
    layout: Option<Layout>,

    /// Render to an MP4 file instead of running interactively (requires `ffmpeg` on PATH).
    #[arg(long)]
    record: Option<PathBuf>,

    /// Length of the recording in seconds.
    #[arg(long, default_value_t = 12.0)]
    record_seconds: f32,

    /// Log more (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).with_target(false).init();
}

fn resolve_config(cli: &Cli) -> anyhow::Result<GreetingConfig> {
    let mut config = match &cli.config {
        Some(path) => GreetingConfig::load(path).with_context(|| format!("loading {path:?}"))?,
        None => GreetingConfig::default(),
    };
    config
        .apply_overrides(cli.photos.as_deref(), cli.music.as_deref(), cli.layout)
        .context("applying command-line overrides")?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = resolve_config(&cli)?;
    tracing::info!(layout = ?config.layout, photos = config.photos.len(), "starting greeting");

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title(&format!("Happy Birthday {}", config.recipient))
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Assets ---
    let photos = load_photos(&mut rl, &thread, &config.photos)?;

    let audio_device = match RaylibAudio::init_audio_device() {
        Ok(device) => Some(device),
        Err(e) => {
            tracing::warn!(error = ?e, "no audio device, music disabled");
            None
        }
    };
    let sink: Box<dyn AudioSink + '_> = match (&audio_device, &config.music) {
        (Some(device), Some(path)) => match MusicSink::load(device, path) {
            Ok(music) => Box::new(music),
            Err(e) => {
                tracing::warn!(error = %e, "music unavailable");
                Box::new(SilentSink::default())
            }
        },
        _ => Box::new(SilentSink::default()),
    };

    let layout = config.layout;
    let mut view = GreetingView::new(layout, sink, config.autoplay_interval_secs)
        .with_pause_when_unfocused(config.pause_when_unfocused);
    let mut scene: Box<dyn Scene> = match layout {
        Layout::Collage => Box::new(CollageScene::new(&config, photos)),
        Layout::Card => Box::new(CardScene::new(&config, photos)),
    };

    let mut recorder = match &cli.record {
        Some(path) => Some(Ffmpeg::new(RENDER_WIDTH, RENDER_HEIGHT, FPS, path)?),
        None => None,
    };
    let record_frames = (cli.record_seconds.max(0.0) * FPS as f32).round() as u64;

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("failed to create render texture: {e}"))?;

    let mute_button = MuteButton::default();
    let mut burst = Burst::default();
    let mut rng = rand::rng();
    let mut clock = 0.0;
    let mut frames = 0u64;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = if recorder.is_some() { FRAME_TIME } else { rl.get_frame_time() };
        clock += dt;
        let before = view.state();
        let sw = rl.get_screen_width() as f32;
        let sh = rl.get_screen_height() as f32;

        // --- Input ---
        let hover = if recorder.is_some() {
            Pointer::default()
        } else {
            Pointer {
                position: screen_to_canvas(rl.get_mouse_position(), sw, sh),
                down: rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT),
            }
        };
        let pointer = if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            Some((Interaction::Click, rl.get_mouse_position()))
        } else if rl.is_gesture_detected(Gesture::GESTURE_TAP) {
            Some((Interaction::Touch, rl.get_touch_position(0)))
        } else {
            None
        };
        if let Some((kind, position)) = pointer {
            if let Some(point) = screen_to_canvas(position, sw, sh) {
                let action = if mute_button.contains(point) {
                    Some(Action::ToggleMute)
                } else {
                    scene.hit_test(point, &before)
                };
                if let Some(action) = action {
                    view.dispatch(action);
                }
            }
            // the window-level listener sees the event after the button did
            view.interact(kind);
        }

        if rl.is_key_pressed(KeyboardKey::KEY_M) {
            view.dispatch(Action::ToggleMute);
        }
        if layout == Layout::Card {
            let opened = view.state().opened;
            if !opened && (rl.is_key_pressed(KeyboardKey::KEY_ENTER) || rl.is_key_pressed(KeyboardKey::KEY_SPACE)) {
                view.dispatch(Action::Open);
            }
            if opened && rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
                view.dispatch(Action::Paginate(1));
            }
            if opened && rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
                view.dispatch(Action::Paginate(-1));
            }
        }
        if recorder.is_some() {
            if let Some(action) = recording_cue(layout, &view.state(), clock) {
                view.dispatch(action);
            }
        }

        // --- Update ---
        view.tick(dt, recorder.is_some() || rl.is_window_focused());
        let state = view.state();
        let celebrate = match layout {
            Layout::Card => state.opened && !before.opened,
            Layout::Collage => state.started && !before.started,
        };
        if celebrate {
            burst.fire(&mut rng);
        }
        burst.update(dt);
        scene.update(&state, &hover, dt);

        // --- Render each frame into fixed size "framebuffer" ---
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(&thread);
            d.clear_background(BLUE_600);
            confetti::draw(&mut d);
            scene.draw(&mut d, &state);
            burst.draw(&mut d);
            mute_button.draw(&mut d, state.muted, &hover);
        });

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        let viewport = canvas_viewport(d.get_screen_width() as f32, d.get_screen_height() as f32);
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            viewport,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
        drop(d);

        if let Some(ffmpeg) = recorder.as_mut() {
            let image = framebuffer
                .load_image()
                .map_err(|e| anyhow!("failed to read back frame: {e}"))?;
            ffmpeg.write(&image)?;
            frames += 1;
            if frames >= record_frames {
                break;
            }
        }
    }

    view.teardown();
    if let Some(ffmpeg) = recorder {
        ffmpeg.finish()?;
    }
    Ok(())
}
