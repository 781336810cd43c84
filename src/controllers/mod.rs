pub mod cloud_command;
pub mod osc_controller;

pub use cloud_command::{command_for_key, CloudCommand};
pub use osc_controller::OscController;
