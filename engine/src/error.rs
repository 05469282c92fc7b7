use core::fmt;

/// Faults detected while validating a [`crate::config::Config`] before real-time entry.
///
/// This is deliberately a plain enum rather than `std::error::Error`: the engine
/// is `no_std` and is shared into firmware binaries that cannot pull in `std`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `soa` (trial length) must be a positive number of samples.
    NonPositiveTrialLength,
    /// `stim_instant + ap_offset + probe_period` must fit inside one trial.
    ProbeOverrunsTrial,
    /// `stim_instant` must be at least half of `lr_delta600`, or the lead window underflows.
    LeadWindowUnderflows,
    /// `hi_period` must be strictly shorter than `click_period`.
    HiPeriodNotShorterThanClickPeriod,
    /// The adapter's worst-case duration (base + max jitter) plus `ap_offset` must fit in one trial.
    AdapterDurationOverrunsTrial,
    /// A staged or initial pattern exceeded the fixed-capacity buffer.
    PatternTooLong,
    /// The pattern buffer must contain at least one byte.
    PatternEmpty,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ConfigError::NonPositiveTrialLength => "soa must be a positive number of samples",
            ConfigError::ProbeOverrunsTrial => {
                "stim_instant + ap_offset + probe_period must not exceed soa"
            }
            ConfigError::LeadWindowUnderflows => {
                "stim_instant must be at least lr_delta600 / 2"
            }
            ConfigError::HiPeriodNotShorterThanClickPeriod => {
                "hi_period must be shorter than click_period"
            }
            ConfigError::AdapterDurationOverrunsTrial => {
                "adapter_total_dur_base + adapter_total_dur_randmax * click_period + ap_offset must not exceed soa"
            }
            ConfigError::PatternTooLong => "pattern exceeds the fixed pattern buffer capacity",
            ConfigError::PatternEmpty => "pattern buffer must not be empty",
        };
        f.write_str(msg)
    }
}
