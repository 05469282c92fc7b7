use crate::config::Config;
use crate::pattern::{Laterality, Trial};
use crate::region::{probe_anchor_minus, probe_anchor_plus, RegionFlags};

/// DAC register value for the "high" phase of a click. The originating hardware
/// drives this through a bipolar DAC; the exact analog scale is a hardware
/// concern (see `hardware::dac` in the firmware crate), so the engine only
/// needs a full-scale signed placeholder and its negation-free "off" state.
pub const AMP_OPPCHN: i16 = i16::MAX;

/// One tick's worth of output: DAC register values for both channels and an
/// optional trigger-port code.
#[derive(Copy, Clone, Debug, Default)]
pub struct TickOutput {
    pub dac_left: i16,
    pub dac_right: i16,
    pub trigger: Option<u8>,
}

fn click_hi(local_offset: i32, cfg: &Config) -> bool {
    local_offset.rem_euclid(cfg.click_period) < cfg.hi_period
}

/// The center-adapter local click offset, reproduced exactly as authored
/// upstream: `counter0 - stim_instant % probe_period`. Under normal operator
/// precedence this computes `counter0 - (stim_instant % probe_period)`, not
/// `(counter0 - stim_instant) % probe_period` — this is preserved deliberately,
/// not corrected, per an explicit decision to keep ambiguous source behavior
/// faithful rather than guess the author's intent.
fn center_adapter_local_offset(counter0: i32, cfg: &Config) -> i32 {
    counter0.wrapping_sub(cfg.stim_instant % cfg.probe_period)
}

/// Compute this tick's DAC values and trigger emission.
///
/// `pattern_offset_after` is the pattern cursor *after* this tick's boundary
/// decode (if any); the trigger guard requires it to be nonzero so the very
/// first trial of a run, before any byte has been consumed, never fires.
pub fn tick_output(
    counter0: i32,
    cfg: &Config,
    trial: &Trial,
    trigger_active: bool,
    pattern_offset_after: usize,
    regions: &RegionFlags,
) -> TickOutput {
    let mut left = 0i16;
    let mut right = 0i16;

    let trigger = if trigger_active
        && pattern_offset_after > 0
        && counter0 == cfg.stim_instant + cfg.ap_offset
    {
        Some(trial.trigger_code)
    } else {
        None
    };

    match trial.adapter_type {
        Laterality::Center => {
            if regions.adapter_center {
                let off = center_adapter_local_offset(counter0, cfg);
                let hi = click_hi(off, cfg);
                left = if hi { AMP_OPPCHN } else { 0 };
                right = left;
            }
        }
        Laterality::Left => {
            if regions.adapter_lead {
                let off = counter0 - cfg.stim_instant_minus600;
                left = if click_hi(off, cfg) { AMP_OPPCHN } else { 0 };
            }
            if regions.adapter_lag {
                let off = counter0 - cfg.stim_instant_plus600;
                right = if click_hi(off, cfg) { AMP_OPPCHN } else { 0 };
            }
        }
        Laterality::Right => {
            if regions.adapter_lead {
                let off = counter0 - cfg.stim_instant_minus600;
                right = if click_hi(off, cfg) { AMP_OPPCHN } else { 0 };
            }
            if regions.adapter_lag {
                let off = counter0 - cfg.stim_instant_plus600;
                left = if click_hi(off, cfg) { AMP_OPPCHN } else { 0 };
            }
        }
    }

    // Probe stage runs after adapter, and overwrites it whenever the probe's own
    // window is active — the two windows are disjoint under default timing, but
    // probe-wins-on-overlap is the behavior to preserve if they are not.
    match trial.probe_type {
        Laterality::Center => {
            if regions.probe_center {
                let off = counter0 - cfg.stim_instant - cfg.ap_offset;
                let hi = click_hi(off, cfg);
                left = if hi { AMP_OPPCHN } else { 0 };
                right = left;
            }
        }
        Laterality::Left => {
            if regions.probe_lead {
                let off = counter0 - probe_anchor_minus(trial, cfg) - cfg.ap_offset;
                left = if click_hi(off, cfg) { AMP_OPPCHN } else { 0 };
            }
            if regions.probe_lag {
                let off = counter0 - probe_anchor_plus(trial, cfg) - cfg.ap_offset;
                right = if click_hi(off, cfg) { AMP_OPPCHN } else { 0 };
            }
        }
        Laterality::Right => {
            if regions.probe_lead {
                let off = counter0 - probe_anchor_minus(trial, cfg) - cfg.ap_offset;
                right = if click_hi(off, cfg) { AMP_OPPCHN } else { 0 };
            }
            if regions.probe_lag {
                let off = counter0 - probe_anchor_plus(trial, cfg) - cfg.ap_offset;
                left = if click_hi(off, cfg) { AMP_OPPCHN } else { 0 };
            }
        }
    }

    TickOutput { dac_left: left, dac_right: right, trigger }
}
