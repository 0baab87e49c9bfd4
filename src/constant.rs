// binary32 layout
//   Sign  Exponent  Mantissa
//   1     8         23        = 32 bits

pub const EXP_MASK: u32 = 0x7F80_0000;
pub const SIGN_MASK: u32 = 0x8000_0000;
pub const MANTISSA_MASK: u32 = 0x007F_FFFF;

pub const EXP_OFFSET: u32 = 23;
pub const SIGN_OFFSET: u32 = 31;

pub const EXP_WIDTH: u32 = 8;
pub const MANTISSA_WIDTH: u32 = 23;

/// Bias of the binary32 exponent field, `2^(8-1) - 1`.
pub const EXP_BIAS_32: i32 = 127;
/// Bias of the binary64 exponent field, `2^(11-1) - 1`. No binary64 operations exist yet.
pub const EXP_BIAS_64: i32 = 1023;

pub const EXP_MAX: u32 = (1 << EXP_WIDTH) - 1;
pub const HIDDEN_BIT: u32 = 1 << MANTISSA_WIDTH;
pub const QUIET_BIT: u32 = 1 << (MANTISSA_WIDTH - 1);

/// True exponent of every subnormal value.
pub(crate) const SUBNORMAL_EXP: i32 = 1 - EXP_BIAS_32;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn masks_partition_word() {
        assert_eq!(EXP_MASK | SIGN_MASK | MANTISSA_MASK, u32::max_value());
        assert_eq!(EXP_MASK & SIGN_MASK, 0);
        assert_eq!(EXP_MASK & MANTISSA_MASK, 0);
        assert_eq!(SIGN_MASK & MANTISSA_MASK, 0);
    }

    #[test]
    fn masks_agree_with_offsets() {
        assert_eq!(EXP_MAX << EXP_OFFSET, EXP_MASK);
        assert_eq!(1 << SIGN_OFFSET, SIGN_MASK);
        assert_eq!(HIDDEN_BIT - 1, MANTISSA_MASK);
        assert_eq!(EXP_MASK.count_ones(), EXP_WIDTH);
        assert_eq!(MANTISSA_MASK.count_ones(), MANTISSA_WIDTH);
    }

    #[test]
    fn biases() {
        assert_eq!(EXP_BIAS_32, (1 << (EXP_WIDTH - 1)) - 1);
        assert_eq!(EXP_BIAS_64, (1 << (11 - 1)) - 1);
        assert_eq!(SUBNORMAL_EXP, -126);
    }
}
