pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const AUTOPLAY_INTERVAL: f32 = 4.0;       // Time between carousel advances (seconds)
pub const SLIDE_DURATION: f32 = 0.5;          // Carousel slide in/out (seconds)
pub const SLIDE_OFFSET: f32 = 1000.0;         // Horizontal distance a slide travels (pixels)
pub const RECORD_LANDING_HOLD: f32 = 2.0;     // Landing time before a recording opens the card (seconds)

pub const MUTE_BUTTON_RADIUS: f32 = 44.0;
pub const BUTTON_FONT_SIZE: i32 = 40;
