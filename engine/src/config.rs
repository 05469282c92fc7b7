use crate::error::ConfigError;

/// The three named Adapter-Probe clicktrain paradigms. All three share the same
/// trial structure, pattern alphabet, and region/output logic; only the adapter
/// duration (and whether it is jittered) differs. See `Config::new`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Continuous adapter, duration jittered 750ms..850ms in 10ms steps.
    Jittered,
    /// Continuous adapter, duration fixed at 850ms.
    Fixed850,
    /// Continuous adapter, duration fixed at 800ms.
    Fixed800,
}

/// Immutable paradigm timing, computed once from a sample rate and variant.
///
/// All fields are sample counts (`i32`) so the tick routine never touches
/// floating point; only `Config::new` converts from seconds.
#[derive(Copy, Clone, Debug)]
pub struct Config {
    pub audio_rate: u32,
    pub experiment_loop: bool,

    pub soa: i32,
    pub ap_offset: i32,
    pub hi_period: i32,
    pub click_period: i32,
    pub adapter_burst_start: i32,
    pub adapter_total_dur_base: i32,
    pub adapter_total_dur_randmax: i32,
    pub adapter_period0: i32,
    pub adapter_period1: i32,
    pub probe_period: i32,
    pub iai: i32,

    pub lr_delta200: i32,
    pub lr_delta600: i32,

    pub stim_instant: i32,
    pub stim_instant_center: i32,
    pub stim_instant_minus200: i32,
    pub stim_instant_plus200: i32,
    pub stim_instant_minus600: i32,
    pub stim_instant_plus600: i32,
}

impl Config {
    /// Build and validate the timing table for `variant` at `audio_rate` samples/second,
    /// with `experiment_loop` controlling whether the pattern buffer repeats on wrap.
    ///
    /// Constants below are the exact per-variant values taken from the originating
    /// paradigm sources (the `0.xxxxx1` multipliers and the `AUDIO_RATE` scaling are
    /// reproduced verbatim, including the stray extra `1` at the end of each literal).
    pub fn new(variant: Variant, audio_rate: u32, experiment_loop: bool) -> Result<Self, ConfigError> {
        let r = audio_rate as f64;

        let soa = (4.000_01 * r) as i32;
        let ap_offset = (1.000_001 * r) as i32; // all three variants run the continuous adapter
        let hi_period = (0.000_51 * r) as i32;
        let click_period = (0.010_01 * r) as i32;
        let adapter_burst_start = (0.200_001 * r) as i32;
        let iai = (0.200_001 * r) as i32;

        let (adapter_total_dur_base, adapter_total_dur_randmax) = match variant {
            Variant::Jittered => {
                let base = (0.750_001 * r) as i32;
                let randmax = ((0.100_001 * r) as i32) / click_period;
                (base, randmax)
            }
            Variant::Fixed850 => ((0.850_001 * r) as i32, 0),
            Variant::Fixed800 => ((0.800_001 * r) as i32, 0),
        };

        let probe_period = click_period * 5;
        let adapter_period0 = probe_period;
        let adapter_period1 = probe_period * 4;

        let lr_delta200 = (0.000_21 * r) as i32;
        let lr_delta600 = (0.000_61 * r) as i32;

        let stim_instant = (0.200_001 * r) as i32;
        let stim_instant_center = stim_instant;
        let stim_instant_minus200 = stim_instant - lr_delta200 / 2;
        let stim_instant_plus200 = stim_instant + lr_delta200 / 2;
        let stim_instant_minus600 = stim_instant - lr_delta600 / 2;
        let stim_instant_plus600 = stim_instant + lr_delta600 / 2;

        let cfg = Config {
            audio_rate,
            experiment_loop,
            soa,
            ap_offset,
            hi_period,
            click_period,
            adapter_burst_start,
            adapter_total_dur_base,
            adapter_total_dur_randmax,
            adapter_period0,
            adapter_period1,
            probe_period,
            iai,
            lr_delta200,
            lr_delta600,
            stim_instant,
            stim_instant_center,
            stim_instant_minus200,
            stim_instant_plus200,
            stim_instant_minus600,
            stim_instant_plus600,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.soa <= 0 {
            return Err(ConfigError::NonPositiveTrialLength);
        }
        if self.stim_instant + self.ap_offset + self.probe_period > self.soa {
            return Err(ConfigError::ProbeOverrunsTrial);
        }
        if self.stim_instant < self.lr_delta600 / 2 {
            return Err(ConfigError::LeadWindowUnderflows);
        }
        if self.hi_period >= self.click_period {
            return Err(ConfigError::HiPeriodNotShorterThanClickPeriod);
        }
        let worst_case_adapter_end = self.adapter_total_dur_base
            + self.adapter_total_dur_randmax * self.click_period
            + self.ap_offset;
        if worst_case_adapter_end > self.soa {
            return Err(ConfigError::AdapterDurationOverrunsTrial);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A config that passes `validate()` as built, so each test below only
    /// has to break the one field its invariant reads.
    fn baseline() -> Config {
        Config::new(Variant::Fixed800, 48_000, true).unwrap()
    }

    #[test]
    fn rejects_non_positive_trial_length() {
        let mut cfg = baseline();
        cfg.soa = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::NonPositiveTrialLength));
    }

    #[test]
    fn rejects_probe_overrunning_trial() {
        let mut cfg = baseline();
        cfg.stim_instant = cfg.soa;
        assert_eq!(cfg.validate(), Err(ConfigError::ProbeOverrunsTrial));
    }

    #[test]
    fn rejects_lead_window_underflow() {
        let mut cfg = baseline();
        cfg.stim_instant = 0;
        cfg.lr_delta600 = 4;
        assert_eq!(cfg.validate(), Err(ConfigError::LeadWindowUnderflows));
    }

    #[test]
    fn rejects_hi_period_not_shorter_than_click_period() {
        let mut cfg = baseline();
        cfg.hi_period = cfg.click_period;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::HiPeriodNotShorterThanClickPeriod)
        );
    }

    #[test]
    fn rejects_adapter_duration_overrunning_trial() {
        let mut cfg = baseline();
        cfg.adapter_total_dur_base = cfg.soa;
        assert_eq!(cfg.validate(), Err(ConfigError::AdapterDurationOverrunsTrial));
    }
}
