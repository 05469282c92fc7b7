use crate::config::Config;
use rand_core::RngCore;

/// Fixed capacity of the cyclic pattern buffer. The originating paradigm buffers
/// ran well under this length; chosen generously since the buffer lives in
/// `static` storage on the firmware side.
pub const MAX_PATTERN_LEN: usize = 256;

/// Laterality of an adapter or probe stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Laterality {
    Center,
    Left,
    Right,
}

/// Which interaural-time-difference table a lateralized probe uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Itd {
    Us200,
    Us600,
}

/// The tuple decided once per trial by the pattern sequencer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Trial {
    pub trigger_code: u8,
    pub adapter_type: Laterality,
    pub probe_type: Laterality,
    /// ITD used by lateralized probe windows. Ignored when `probe_type == Center`
    /// (mirrors the source, which leaves this field stale on center-probe trials).
    pub probe_itd: Itd,
}

impl Trial {
    /// The trial in effect before any pattern byte has ever been decoded. Its exact
    /// value is unobservable: the engine never emits output from this row because
    /// the trigger guard requires `pattern_offset > 0`, and no region can be true
    /// before a trial has populated `stim_instant`-relative anchors with a distance
    /// ever reached. A center/center row is the least surprising default.
    pub const fn initial() -> Self {
        TRIAL_K
    }
}

const TRIAL_A: Trial = Trial { trigger_code: 1, adapter_type: Laterality::Left, probe_type: Laterality::Left, probe_itd: Itd::Us600 };
const TRIAL_B: Trial = Trial { trigger_code: 2, adapter_type: Laterality::Left, probe_type: Laterality::Left, probe_itd: Itd::Us200 };
const TRIAL_C: Trial = Trial { trigger_code: 3, adapter_type: Laterality::Left, probe_type: Laterality::Center, probe_itd: Itd::Us600 };
const TRIAL_D: Trial = Trial { trigger_code: 4, adapter_type: Laterality::Left, probe_type: Laterality::Right, probe_itd: Itd::Us200 };
const TRIAL_E: Trial = Trial { trigger_code: 5, adapter_type: Laterality::Left, probe_type: Laterality::Right, probe_itd: Itd::Us600 };
const TRIAL_F: Trial = Trial { trigger_code: 6, adapter_type: Laterality::Right, probe_type: Laterality::Left, probe_itd: Itd::Us600 };
const TRIAL_G: Trial = Trial { trigger_code: 7, adapter_type: Laterality::Right, probe_type: Laterality::Left, probe_itd: Itd::Us200 };
const TRIAL_H: Trial = Trial { trigger_code: 8, adapter_type: Laterality::Right, probe_type: Laterality::Center, probe_itd: Itd::Us600 };
const TRIAL_I: Trial = Trial { trigger_code: 9, adapter_type: Laterality::Right, probe_type: Laterality::Right, probe_itd: Itd::Us200 };
const TRIAL_J: Trial = Trial { trigger_code: 10, adapter_type: Laterality::Right, probe_type: Laterality::Right, probe_itd: Itd::Us600 };
// 'K' and 'L' decode identically: the upstream 'L' case falls through to a no-op
// default (a missing `break`), so there is no behavioral difference to preserve.
const TRIAL_K: Trial = Trial { trigger_code: 11, adapter_type: Laterality::Center, probe_type: Laterality::Center, probe_itd: Itd::Us600 };

fn lookup(byte: u8) -> Option<Trial> {
    match byte {
        b'A' => Some(TRIAL_A),
        b'B' => Some(TRIAL_B),
        b'C' => Some(TRIAL_C),
        b'D' => Some(TRIAL_D),
        b'E' => Some(TRIAL_E),
        b'F' => Some(TRIAL_F),
        b'G' => Some(TRIAL_G),
        b'H' => Some(TRIAL_H),
        b'I' => Some(TRIAL_I),
        b'J' => Some(TRIAL_J),
        b'K' | b'L' => Some(TRIAL_K),
        _ => None,
    }
}

/// Result of decoding the pattern buffer at a trial boundary (`counter0 == 0`).
pub struct DecodeOutcome {
    /// `Some` when the byte selected a trial tuple; `None` (unrecognized byte, or
    /// `@`) leaves the previously selected trial in force, exactly as the source's
    /// `default: break;` does.
    pub trial: Option<Trial>,
    pub new_offset: usize,
    pub jitter_samples: i32,
    pub pause_requested: bool,
    pub stop_requested: bool,
}

fn advance(offset: usize, len: usize) -> (usize, bool) {
    let next = offset + 1;
    if next == len {
        (0, true)
    } else {
        (next, false)
    }
}

/// Decode one trial boundary, consuming one or more pattern bytes.
///
/// `prior_jitter_samples` carries over the previously drawn jitter so a variant
/// with `adapter_total_dur_randmax == 0` (no `.` byte ever drawn) simply keeps
/// it at zero, and a jittered variant keeps its last draw between `.` bytes.
pub fn decode_at_boundary(
    buf: &[u8],
    start_offset: usize,
    cfg: &Config,
    prior_jitter_samples: i32,
    rng: &mut impl RngCore,
) -> DecodeOutcome {
    let len = buf.len();
    let mut offset = start_offset;
    let mut jitter_samples = prior_jitter_samples;
    let mut stop_requested = false;

    loop {
        let byte = buf[offset];

        // The jitter marker is only meaningful for a variant whose adapter duration
        // is actually randomized; with randmax == 0 the upstream sources for the
        // fixed-duration variants never compile a '.' case at all, so it is a plain
        // no-op there rather than a refetch loop.
        if byte == b'.' && cfg.adapter_total_dur_randmax > 0 {
            let draw = (rng.next_u32() as i32).rem_euclid(cfg.adapter_total_dur_randmax);
            jitter_samples = draw * cfg.click_period;
            let (next, wrapped) = advance(offset, len);
            if wrapped && !cfg.experiment_loop {
                stop_requested = true;
            }
            offset = next;
            continue;
        }

        let pause_requested = byte == b'@';
        let trial = lookup(byte);

        let (next, wrapped) = advance(offset, len);
        if wrapped && !cfg.experiment_loop {
            stop_requested = true;
        }
        offset = next;

        return DecodeOutcome {
            trial,
            new_offset: offset,
            jitter_samples,
            pause_requested,
            stop_requested,
        };
    }
}
