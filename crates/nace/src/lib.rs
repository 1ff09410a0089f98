use anyhow::Result;
use nace_common::app::App;
use nace_invaders::{InvadersApp, InvadersMachine};
use nace_sdl2::{SdlContext, SdlInitInfo};

/// Machines the launcher can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MachineType {
    SpaceInvaders,
}

impl MachineType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "space_invaders" | "space-invaders" | "invaders" => Some(MachineType::SpaceInvaders),
            _ => None,
        }
    }
}

pub fn run(machine: MachineType, rom_data: &[u8]) -> Result<()> {
    match machine {
        MachineType::SpaceInvaders => run_space_invaders(rom_data),
    }
}

pub fn run_space_invaders(rom_data: &[u8]) -> Result<()> {
    let mut machine = InvadersMachine::new();
    machine.load_rom(rom_data)?;
    let app = InvadersApp::new(machine);
    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)
}
