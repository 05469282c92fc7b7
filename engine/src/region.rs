use crate::config::Config;
use crate::pattern::{Itd, Trial};

/// The six boolean time-windows evaluated fresh every tick.
#[derive(Copy, Clone, Debug, Default)]
pub struct RegionFlags {
    pub adapter_center: bool,
    pub adapter_lead: bool,
    pub adapter_lag: bool,
    pub probe_center: bool,
    pub probe_lead: bool,
    pub probe_lag: bool,
}

/// Adapter anchors always use the 600us lead/lag offsets regardless of the
/// trial's own ITD choice; only the probe windows vary with the trial.
fn adapter_window(counter0: i32, anchor: i32, cfg: &Config, adapter_end: i32) -> bool {
    if counter0 < anchor || counter0 >= anchor + adapter_end {
        return false;
    }
    let tau = (counter0 - anchor) % cfg.iai;
    if counter0 < anchor + cfg.adapter_burst_start {
        tau < cfg.adapter_period0
    } else {
        tau < cfg.adapter_period1
    }
}

fn probe_window(counter0: i32, anchor: i32, probe_period: i32) -> bool {
    counter0 >= anchor && counter0 < anchor + probe_period
}

pub fn probe_anchor_minus(trial: &Trial, cfg: &Config) -> i32 {
    match trial.probe_itd {
        Itd::Us200 => cfg.stim_instant_minus200,
        Itd::Us600 => cfg.stim_instant_minus600,
    }
}

pub fn probe_anchor_plus(trial: &Trial, cfg: &Config) -> i32 {
    match trial.probe_itd {
        Itd::Us200 => cfg.stim_instant_plus200,
        Itd::Us600 => cfg.stim_instant_plus600,
    }
}

/// Evaluate all six windows for the current sample, trial, and jitter draw.
pub fn evaluate(counter0: i32, cfg: &Config, trial: &Trial, jitter_samples: i32) -> RegionFlags {
    let adapter_end = cfg.adapter_total_dur_base + jitter_samples;
    let probe_minus = probe_anchor_minus(trial, cfg);
    let probe_plus = probe_anchor_plus(trial, cfg);

    RegionFlags {
        adapter_center: adapter_window(counter0, cfg.stim_instant_center, cfg, adapter_end),
        adapter_lead: adapter_window(counter0, cfg.stim_instant_minus600, cfg, adapter_end),
        adapter_lag: adapter_window(counter0, cfg.stim_instant_plus600, cfg, adapter_end),
        probe_center: probe_window(counter0, cfg.stim_instant_center + cfg.ap_offset, cfg.probe_period),
        probe_lead: probe_window(counter0, probe_minus + cfg.ap_offset, cfg.probe_period),
        probe_lag: probe_window(counter0, probe_plus + cfg.ap_offset, cfg.probe_period),
    }
}
