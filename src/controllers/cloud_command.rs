// src/controllers/cloud_command.rs
//
// The commands the app responds to, whether they come from the keyboard or OSC

use nannou::prelude::*;

use crate::models::CloudKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CloudCommand {
    /// Render a new cloud of this kind with the next seed
    Render(CloudKind),
    /// Render a new cloud of the most recent kind
    RenderAgain,
    /// Export the current canvas
    Save,
    ToggleOrigin,
    SetOrigin(bool),
    /// Set the seed counter; the next render uses seed + 1
    SetSeed(u32),
}

pub fn command_for_key(key: Key) -> Option<CloudCommand> {
    match key {
        Key::Key1 | Key::C => Some(CloudCommand::Render(CloudKind::Cumulus)),
        Key::Key2 | Key::I => Some(CloudCommand::Render(CloudKind::Cirrus)),
        Key::Space => Some(CloudCommand::RenderAgain),
        Key::S => Some(CloudCommand::Save),
        Key::O => Some(CloudCommand::ToggleOrigin),
        _ => None,
    }
}
