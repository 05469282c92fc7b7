///! The sampling timer drives the output tick at a fixed sample rate.
///!
///! Trimmed down from the timer-channel macro family this was copied from: that
///! family also generated input-capture/timestamp channels for an ADC
///! acquisition path this generator has no use for (there is no analog input
///! here, only a DAC and a digital trigger line), so only the plain
///! period/start/update-event surface survives.
use super::hal;

pub struct SamplingTimer {
    timer: hal::timer::Timer<hal::stm32::TIM2>,
    update_event: Option<UpdateEvent>,
}

impl SamplingTimer {
    /// Construct the sampling timer from an already-configured peripheral timer.
    pub fn new(mut timer: hal::timer::Timer<hal::stm32::TIM2>) -> Self {
        timer.pause();
        Self {
            timer,
            // Note(unsafe): Only one TIM2 exists, and this resource takes
            // ownership of it once instantiated, so this is only ever called once.
            update_event: Some(unsafe { UpdateEvent::new() }),
        }
    }

    /// Take the timer's update event, used to drive a per-sample DMA/interrupt tick.
    pub fn update_event(&mut self) -> UpdateEvent {
        self.update_event.take().unwrap()
    }

    /// Get the timer's period, in timer ticks.
    pub fn get_period(&self) -> u32 {
        let regs = unsafe { &*hal::stm32::TIM2::ptr() };
        regs.arr.read().arr().bits()
    }

    /// Set the timer's period, in timer ticks, to produce one tick per output sample.
    pub fn set_period_ticks(&mut self, period: u32) {
        let regs = unsafe { &*hal::stm32::TIM2::ptr() };
        regs.arr.write(|w| w.arr().bits(period));
        self.timer.apply_freq();
    }

    /// Start the timer.
    pub fn start(&mut self) {
        self.timer.apply_freq();
        self.timer.reset_counter();
        self.timer.resume();
    }
}

pub struct UpdateEvent {}

impl UpdateEvent {
    /// Note(unsafe): only safe to call once, see `SamplingTimer::new`.
    unsafe fn new() -> Self {
        Self {}
    }

    /// Enable a DMA/interrupt request on each timer update (once per output sample).
    pub fn listen_dma(&self) {
        let regs = unsafe { &*hal::stm32::TIM2::ptr() };
        regs.dier.modify(|_, w| w.ude().set_bit());
    }
}
