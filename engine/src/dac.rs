///! DAC code conversion.
///!
///! Bipolar DACs in this family use an offset-binary register code where
///! `u16::MAX / 2` is zero output. It is more natural to work with a
///! two's-complement `i16` everywhere else, so the two representations are
///! related by flipping the sign bit. Kept here rather than in the firmware
///! crate so it stays host-testable alongside the rest of the pure logic (the
///! firmware crate's unconditional `stm32h7xx-hal` dependency means nothing
///! there can run as a host unit test).

/// A raw DAC register code (offset binary).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DacCode(pub u16);

/// Convert a two's-complement sample into the DAC's offset-binary register code.
pub fn dac_code_from_i16(value: i16) -> DacCode {
    DacCode(value as u16 ^ 0x8000)
}

/// Recover the two's-complement sample from a DAC's offset-binary register code.
pub fn i16_from_dac_code(code: DacCode) -> i16 {
    (code.0 ^ 0x8000) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_offset_binary() {
        for sample in [i16::MIN, -1, 0, 1, i16::MAX] {
            let code = dac_code_from_i16(sample);
            assert_eq!(i16_from_dac_code(code), sample);
        }
    }

    #[test]
    fn zero_maps_to_mid_scale() {
        assert_eq!(dac_code_from_i16(0), DacCode(0x8000));
    }
}
