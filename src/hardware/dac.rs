///! DAC code conversion, re-exported from `engine` so the conversion logic
///! lives alongside the rest of this workspace's host-testable pure code (this
///! crate's unconditional `stm32h7xx-hal` dependency means nothing defined
///! here can run as a host unit test).
///!
///! The DMA-driven SPI transfer machinery that actually clocks these codes out
///! to silicon is a target-specific concern (see `other_examples` for a fully
///! worked DMA/SPI driver); no target chip is named by this firmware, so only
///! the code conversion survives here, behind the [`super::ports::DacPort`]
///! trait a real board implements.
pub use engine::dac::{dac_code_from_i16, i16_from_dac_code, DacCode};
