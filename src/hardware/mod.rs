///! Hardware scaffolding around the clicktrain engine.
///!
///! The engine itself (see the `engine` crate) never touches a register: it
///! returns plain `engine::TickOutput` values and an `engine::IndicatorState`.
///! This module defines the traits a target board implements to actually move
///! those values onto silicon, plus the sample-rate tick timer used to drive
///! `Engine::tick` at `AUDIO_RATE`.
use stm32h7xx_hal as hal;

pub mod dac;
pub mod logging;
pub mod ports;
pub mod timers;

pub use dac::{dac_code_from_i16, i16_from_dac_code, DacCode};
pub use ports::{DacPort, IndicatorPort, NullOutputs, TriggerPort};
