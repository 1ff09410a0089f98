use nace_common::app::App;
use nace_common::key::Key;

use crate::machine::InvadersMachine;
use crate::video::{overlay_pause_banner, render_video, Overlay};
use crate::{SCREEN_HEIGHT, SCREEN_SCALE, SCREEN_WIDTH};

/// Frontend wrapper: one [`App::update`] runs one machine frame and redraws
/// the screen.
#[derive(Default)]
pub struct InvadersApp {
    should_exit: bool,
    paused: bool,
    pub overlay: Overlay,
    pub machine: InvadersMachine,
}

impl InvadersApp {
    pub fn new(machine: InvadersMachine) -> Self {
        Self {
            machine,
            ..Self::default()
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

impl App for InvadersApp {
    fn init(&mut self) {
        log::info!("Space Invaders init");
    }

    fn update(&mut self, screen: &mut [u8]) {
        if !self.paused && !self.should_exit {
            let report = self.machine.step_frame();
            if report.halted {
                self.should_exit = true;
            }
        }

        render_video(self.machine.video_ram(), screen, self.overlay);

        if self.paused {
            overlay_pause_banner(screen);
        }
    }

    fn handle_key_event(&mut self, key: Key, is_pressed: bool) {
        if is_pressed {
            match key {
                Key::P => {
                    self.paused = !self.paused;
                    return;
                }
                Key::Escape => {
                    self.should_exit = true;
                    return;
                }
                // Any other key resumes.
                _ if self.paused => self.paused = false,
                _ => {}
            }
        }

        self.machine.handle_key(key, is_pressed);
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("Space Invaders exit");
    }

    fn width(&self) -> u32 {
        SCREEN_WIDTH as u32
    }

    fn height(&self) -> u32 {
        SCREEN_HEIGHT as u32
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn title(&self) -> String {
        "Nace Space Invaders".to_string()
    }
}
