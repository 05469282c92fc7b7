///! Abstract output registers the clicktrain engine's tick output is written to.
///!
///! No specific target chip is wired up here; a deployment substitutes its own
///! implementations of these traits over the board's actual DAC/GPIO
///! peripherals. `NullOutputs` is a no-op double for `idle`-loop bring-up
///! before a board's real ports are attached; any exercising of the three
///! traits' logic against `engine::Engine::tick` output belongs to `engine`'s
///! own host-testable suite, not to this crate, which never builds for host.

/// Write one tick's worth of stereo DAC samples.
pub trait DacPort {
    fn write(&mut self, left: i16, right: i16);
}

/// Write a trigger code to the parallel trigger port.
pub trait TriggerPort {
    fn set(&mut self, code: u8);
}

/// Two-state status indicator, named to match the `lights_on`/`lights_dimm`
/// verbs used throughout the originating lifecycle operations.
pub trait IndicatorPort {
    fn lights_on(&mut self);
    fn lights_dimm(&mut self);
}

/// A no-op implementation of all three output ports, used during early
/// bring-up before a board's real ports are wired in.
#[derive(Default)]
pub struct NullOutputs {
    pub last_dac: (i16, i16),
    pub last_trigger: Option<u8>,
    pub lights_dimmed: bool,
}

impl DacPort for NullOutputs {
    fn write(&mut self, left: i16, right: i16) {
        self.last_dac = (left, right);
    }
}

impl TriggerPort for NullOutputs {
    fn set(&mut self, code: u8) {
        self.last_trigger = Some(code);
    }
}

impl IndicatorPort for NullOutputs {
    fn lights_on(&mut self) {
        self.lights_dimmed = false;
    }

    fn lights_dimm(&mut self) {
        self.lights_dimmed = true;
    }
}
