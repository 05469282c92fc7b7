use heapless::Vec;
use rand_core::SeedableRng;
use rand_xorshift::XorShiftRng;

use crate::config::Config;
use crate::error::ConfigError;
use crate::output::{self, TickOutput};
use crate::pattern::{self, Trial, MAX_PATTERN_LEN};
use crate::region;

/// Indicator-light state driven by lifecycle transitions. The firmware layer
/// watches this and forwards changes to its own `IndicatorPort`; the engine
/// itself owns no hardware.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IndicatorState {
    On,
    Dimm,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Init,
    Running,
    Paused,
    Stopped,
}

struct RuntimeState {
    counter0: i32,
    /// Reserved: zeroed by `start`/`resume`, never read. Kept faithfully rather
    /// than deleted, matching the upstream source's own unused field.
    #[allow(dead_code)]
    counter1: i32,
    pattern: Vec<u8, MAX_PATTERN_LEN>,
    pattern_offset: usize,
    trial: Trial,
    jitter_samples: i32,
    audio_active: bool,
    trigger_active: bool,
    indicator: IndicatorState,
    lifecycle: Lifecycle,
}

/// The Adapter-Probe clicktrain engine: owns timing configuration, the cyclic
/// pattern buffer, and all per-tick runtime state. `tick` is the hard-real-time
/// hot path; every other method is a lifecycle transition invoked from outside
/// the sample clock.
pub struct Engine {
    cfg: Config,
    rng: XorShiftRng,
    state: RuntimeState,
    staged_pattern: Option<Vec<u8, MAX_PATTERN_LEN>>,
}

impl Engine {
    /// Validate `cfg`, adopt `pattern` as the initial cyclic buffer, and seed the
    /// jitter RNG from `seed`. `seed` must come from a non-blocking source — the
    /// tick routine never falls back to a blocking kernel RNG for jitter draws.
    pub fn init(cfg: Config, pattern: &[u8], seed: [u8; 16]) -> Result<Self, ConfigError> {
        if pattern.is_empty() {
            return Err(ConfigError::PatternEmpty);
        }
        let mut buf = Vec::new();
        buf.extend_from_slice(pattern)
            .map_err(|_| ConfigError::PatternTooLong)?;

        Ok(Engine {
            cfg,
            rng: XorShiftRng::from_seed(seed),
            state: RuntimeState {
                counter0: 0,
                counter1: 0,
                pattern: buf,
                pattern_offset: 0,
                trial: Trial::initial(),
                jitter_samples: 0,
                audio_active: false,
                trigger_active: false,
                indicator: IndicatorState::On,
                lifecycle: Lifecycle::Init,
            },
            staged_pattern: None,
        })
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.state.lifecycle
    }

    pub fn indicator_state(&self) -> IndicatorState {
        self.state.indicator
    }

    pub fn counter0(&self) -> i32 {
        self.state.counter0
    }

    pub fn pattern_offset(&self) -> usize {
        self.state.pattern_offset
    }

    pub fn current_trial(&self) -> Trial {
        self.state.trial
    }

    pub fn start(&mut self) {
        self.state.indicator = IndicatorState::Dimm;
        self.state.counter0 = 0;
        self.state.counter1 = 0;
        self.state.trigger_active = true;
        self.state.audio_active = true;
        self.state.lifecycle = Lifecycle::Running;
    }

    pub fn stop(&mut self) {
        self.state.audio_active = false;
        self.state.indicator = IndicatorState::On;
        self.state.lifecycle = Lifecycle::Stopped;
    }

    pub fn pause(&mut self) {
        self.state.audio_active = false;
        self.state.indicator = IndicatorState::On;
        self.state.lifecycle = Lifecycle::Paused;
    }

    /// Resume leaves `trigger_active` untouched: a trial paused mid-run resumes
    /// with whatever trigger-gate state was in force before the pause.
    pub fn resume(&mut self) {
        self.state.indicator = IndicatorState::Dimm;
        self.state.counter0 = 0;
        self.state.counter1 = 0;
        self.state.audio_active = true;
        self.state.lifecycle = Lifecycle::Running;
    }

    /// Explicitly set the trigger-port gate (used by the `F2B_TRIGTEST` command
    /// path to probe the trigger port independent of the run state).
    pub fn set_trigger_active(&mut self, active: bool) {
        self.state.trigger_active = active;
    }

    /// Stage a replacement pattern buffer; it takes effect at the next trial
    /// boundary (`counter0 == 0`), never mid-trial, so a producer may update the
    /// pattern live without the tick routine observing a torn buffer.
    pub fn stage_pattern(&mut self, pattern: &[u8]) -> Result<(), ConfigError> {
        if pattern.is_empty() {
            return Err(ConfigError::PatternEmpty);
        }
        let mut buf = Vec::new();
        buf.extend_from_slice(pattern)
            .map_err(|_| ConfigError::PatternTooLong)?;
        self.staged_pattern = Some(buf);
        Ok(())
    }

    /// Advance one sample. Must complete within one sample period; allocates
    /// nothing and never blocks.
    pub fn tick(&mut self) -> TickOutput {
        if self.state.counter0 == 0 {
            if let Some(buf) = self.staged_pattern.take() {
                self.state.pattern = buf;
                self.state.pattern_offset = 0;
            }

            let outcome = pattern::decode_at_boundary(
                &self.state.pattern,
                self.state.pattern_offset,
                &self.cfg,
                self.state.jitter_samples,
                &mut self.rng,
            );
            self.state.pattern_offset = outcome.new_offset;
            self.state.jitter_samples = outcome.jitter_samples;
            if let Some(trial) = outcome.trial {
                self.state.trial = trial;
            }
            if outcome.pause_requested {
                self.pause();
            }
            if outcome.stop_requested {
                self.stop();
            }
        }

        let regions = region::evaluate(
            self.state.counter0,
            &self.cfg,
            &self.state.trial,
            self.state.jitter_samples,
        );
        let out = output::tick_output(
            self.state.counter0,
            &self.cfg,
            &self.state.trial,
            self.state.trigger_active,
            self.state.pattern_offset,
            &regions,
        );

        let result = TickOutput {
            dac_left: if self.state.audio_active { out.dac_left } else { 0 },
            dac_right: if self.state.audio_active { out.dac_right } else { 0 },
            // trigger_active gating already happened inside `output::tick_output`.
            trigger: out.trigger,
        };

        self.state.counter0 = (self.state.counter0 + 1).rem_euclid(self.cfg.soa);

        result
    }
}
