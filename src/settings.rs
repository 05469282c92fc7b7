///! Settings and lifecycle glue between the command channel and the engine.
///!
///! Mirrors the per-binary `Settings` struct pattern this firmware's hardware
///! scaffolding is modeled on (one plain struct built once at startup and
///! handed to a `Engine::init`-style constructor), generalized to cover the
///! three named paradigm variants instead of one fixed DSP configuration.
use engine::{Config, ConfigError, Engine, Variant};
use miniconf::Miniconf;
use serde::{Deserialize, Serialize};

use crate::net::command::{AlertKind, Message, Opcode};

#[derive(Copy, Clone, Debug, Serialize, Deserialize, Miniconf)]
pub struct Settings {
    pub sample_rate: u32,
    pub variant: VariantSetting,
    pub experiment_loop: bool,
}

/// `serde`-friendly mirror of `engine::Variant` (kept distinct from the
/// engine's own enum so the engine crate stays free of serde/miniconf). Left
/// as a plain `serde` leaf, not a `Miniconf` derive: only the container
/// `Settings` struct derives `Miniconf`, and `miniconf`'s blanket leaf impl
/// picks up enum-typed fields like this one through `serde` alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariantSetting {
    Jittered,
    Fixed850,
    Fixed800,
}

impl From<VariantSetting> for Variant {
    fn from(value: VariantSetting) -> Self {
        match value {
            VariantSetting::Jittered => Variant::Jittered,
            VariantSetting::Fixed850 => Variant::Fixed850,
            VariantSetting::Fixed800 => Variant::Fixed800,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            sample_rate: 48_000,
            variant: VariantSetting::Fixed800,
            experiment_loop: true,
        }
    }
}

impl Settings {
    /// Validate and build the engine's timing configuration.
    pub fn config(&self) -> Result<Config, ConfigError> {
        Config::new(self.variant.into(), self.sample_rate, self.experiment_loop)
    }

    /// Build a ready-to-run engine from these settings, the initial pattern
    /// buffer, and a non-blocking jitter seed.
    pub fn build_engine(&self, pattern: &[u8], seed: [u8; 16]) -> Result<Engine, ConfigError> {
        Engine::init(self.config()?, pattern, seed)
    }
}

/// A dispatched opcode that needs a hardware write the caller must perform,
/// since `Engine` itself owns no output port.
pub enum DispatchAction {
    /// Write `code` to the trigger port immediately, independent of the tick loop.
    TriggerTest(u8),
}

/// Route one decoded command-channel opcode to the corresponding engine
/// lifecycle operation, returning a [`DispatchAction`] when the caller must
/// also touch hardware directly. `ACQ_CMD_F2B`/`ACQ_CMD_B2F` and the
/// buffer/count query opcodes are transport bookkeeping outside the engine's
/// concern and are not dispatched here.
pub fn dispatch(engine: &mut Engine, opcode: Opcode, iparam: [i32; 4]) -> Option<DispatchAction> {
    match opcode {
        Opcode::AcqStart => {
            log::info!("acquisition start");
            engine.start();
            None
        }
        Opcode::AcqStop => {
            log::info!("acquisition stop");
            engine.stop();
            None
        }
        Opcode::F2bTrigtest => match u8::try_from(iparam[0]) {
            Ok(code) => Some(DispatchAction::TriggerTest(code)),
            Err(_) => {
                log::error!("F2B_TRIGTEST code {} out of range", iparam[0]);
                None
            }
        },
        _ => None,
    }
}

/// Build the out-of-band data-loss notification and log it, mirroring the
/// teacher's `log::warn!("Short message: {} {}", ...)` call site for a
/// transport-level short write.
pub fn data_loss_alert(expected: usize, actual: usize) -> Message {
    log::warn!("data loss: expected {expected} bytes, wrote {actual}");
    Message::new(Opcode::AcqAlert, [AlertKind::DataLoss.into(), 0, 0, 0])
}
