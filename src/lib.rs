//! Firmware scaffolding around the [`engine`] crate: hardware output ports, the
//! fixed-layout command channel, and the settings/lifecycle glue that ties
//! incoming opcodes to `engine::Engine`'s lifecycle methods.
//!
//! Unlike `engine`, this crate carries an unconditional `stm32h7xx-hal`
//! dependency, so it never builds for the host; all pure, host-testable logic
//! (the DAC code conversion, the command codec) lives in `engine` instead and
//! is re-exported here under `hardware`/`net`.
#![no_std]

pub mod hardware;
pub mod net;
pub mod settings;

pub use engine;
