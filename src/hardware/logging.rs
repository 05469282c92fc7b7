///! RTT-backed `log` backend, wired up the same way the hardware scaffolding
///! this firmware is modeled on sets up its own RTT channel: a best-effort,
///! critical-section-free print channel guarded by a single `AtomicBool` lock
///! instead of a true critical section, so a high-priority tick can never be
///! blocked behind a lower-priority log write (a log message can be lost if a
///! higher-priority task preempts mid-write, which is the tradeoff this
///! generator makes the same way).
use core::sync::atomic::{AtomicBool, Ordering};

static LOGGER: rtt_logger::RTTLogger = rtt_logger::RTTLogger::new(log::LevelFilter::Info);

/// Initialize the RTT channel and install it as the global `log` backend.
/// Must be called exactly once, before the first `log::info!`/`log::warn!`/
/// `log::error!` call from `settings::dispatch` or elsewhere in this crate.
pub fn init() {
    let channels = rtt_target::rtt_init_default!();
    // SAFETY: the closure does not establish a true critical section as the
    // API expects, but the `AtomicBool` compare-exchange below still ensures
    // at most one writer touches the channel at a time.
    unsafe {
        rtt_target::set_print_channel_cs(
            channels.up.0,
            &((|arg, f| {
                static LOCKED: AtomicBool = AtomicBool::new(false);
                if LOCKED
                    .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
                    .is_ok()
                {
                    f(arg);
                    LOCKED.store(false, Ordering::Release);
                }
            }) as rtt_target::CriticalSectionFunc),
        );
    }

    log::set_logger(&LOGGER)
        .map(|()| log::set_max_level(log::LevelFilter::Trace))
        .unwrap();
    log::info!("RTT logging initialized");
}
