//! Space Invaders arcade machine: the 8080 core wired to the cabinet's input
//! latches, shift register and 1bpp video RAM.

pub mod app;
pub mod io;
pub mod machine;
pub mod video;

pub use app::InvadersApp;
pub use io::{DipConfig, InvadersIo};
pub use machine::InvadersMachine;
pub use video::{render_video, Overlay};

/// Logical screen width in pixels (the monitor is mounted rotated).
pub const SCREEN_WIDTH: usize = 224;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 256;
/// Default integer scaling factor for the SDL2 frontend.
pub const SCREEN_SCALE: u32 = 3;
