//src/controllers/osc_controller.rs
//
// Receives cloud commands over OSC:
//   /cloud/cumulus
//   /cloud/cirrus
//   /cloud/again
//   /cloud/save
//   /cloud/origin [int 0|1]   toggles without an argument
//   /cloud/seed int

use log::warn;
use nannou_osc as osc;

use super::CloudCommand;
use crate::error::{Error, Result};
use crate::models::CloudKind;

pub struct OscController {
    command_queue: Vec<CloudCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self> {
        let receiver = osc::receiver(port)
            .map_err(|e| Error::Osc(format!("port {}: {}", port, e)))?;

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                match parse_message(&message) {
                    Some(command) => self.command_queue.push(command),
                    None => warn!(
                        "Unknown OSC message: {} {:?}",
                        message.addr, message.args
                    ),
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<CloudCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

pub fn parse_message(message: &osc::Message) -> Option<CloudCommand> {
    match (message.addr.as_str(), &message.args[..]) {
        ("/cloud/cumulus", []) => Some(CloudCommand::Render(CloudKind::Cumulus)),
        ("/cloud/cirrus", []) => Some(CloudCommand::Render(CloudKind::Cirrus)),
        ("/cloud/again", []) => Some(CloudCommand::RenderAgain),
        ("/cloud/save", []) => Some(CloudCommand::Save),
        ("/cloud/origin", []) => Some(CloudCommand::ToggleOrigin),
        ("/cloud/origin", [osc::Type::Int(setting)]) => Some(CloudCommand::SetOrigin(*setting != 0)),
        ("/cloud/seed", [osc::Type::Int(seed)]) if *seed >= 0 => {
            Some(CloudCommand::SetSeed(*seed as u32))
        }
        _ => None,
    }
}
