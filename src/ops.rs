use crate::{
    constant::*,
    exception::Status,
    format::{FloatClass, FloatFormat},
    util::{clamp_shift, shift_lane},
};

/// Which way a field moves inside its lane.
///
/// `Up` shifts toward the sign bit (left), `Down` toward bit 0 (right).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Splits a signed amount into a direction and a magnitude.
    /// Non-negative amounts shift up.
    pub fn from_signed(amount: i32) -> (Direction, u32) {
        if amount < 0 {
            (Direction::Down, amount.unsigned_abs())
        } else {
            (Direction::Up, amount as u32)
        }
    }

    fn resolve(self, amount: i32) -> (Direction, u32) {
        let (sign_dir, n) = Direction::from_signed(amount);
        match sign_dir {
            Direction::Up => (self, n),
            Direction::Down => (self.reverse(), n),
        }
    }
}

/// Saturating shifts of a single field. The other fields are left untouched,
/// and the result is not checked for being a meaningful number.
pub trait FloatShift: Sized {
    fn shift_exp(self, amount: i32, direction: Direction) -> Self {
        self.shift_exp_with_status(amount, direction).0
    }

    fn shift_sig(self, amount: i32, direction: Direction) -> Self {
        self.shift_sig_with_status(amount, direction).0
    }

    fn shift_exp_with_status(self, amount: i32, direction: Direction) -> (Self, Status);
    fn shift_sig_with_status(self, amount: i32, direction: Direction) -> (Self, Status);
}

impl FloatShift for f32 {
    fn shift_exp_with_status(self, amount: i32, direction: Direction) -> (f32, Status) {
        shift_field(self, EXP_MASK, EXP_WIDTH, amount, direction)
    }

    fn shift_sig_with_status(self, amount: i32, direction: Direction) -> (f32, Status) {
        shift_field(self, MANTISSA_MASK, MANTISSA_WIDTH, amount, direction)
    }
}

fn shift_field(f: f32, mask: u32, width: u32, amount: i32, direction: Direction) -> (f32, Status) {
    let (direction, requested) = direction.resolve(amount);
    let shamt = clamp_shift(requested, width);
    let clamped = if shamt != requested {
        log::debug!("shift of {} clamped to field width {}", requested, width);
        Status::clamped()
    } else {
        Status::none()
    };

    let bits = f.to_bits();
    let shifted = shift_lane(bits, mask, shamt, direction);
    log::trace!(
        "shift lane {:#010x} {:?} by {}: {:#010x} -> {:#010x}",
        mask, direction, shamt, bits, shifted
    );

    // every bit moves within the lane or falls out, so a lower count means loss
    let truncated = if (shifted & mask).count_ones() != (bits & mask).count_ones() {
        Status::truncated()
    } else {
        Status::none()
    };

    let result = f32::from_bits(shifted);
    let class = match result.class() {
        FloatClass::Infinite => Status::infinite(),
        FloatClass::Nan => Status::nan(),
        _ => Status::none(),
    };

    (result, clamped | truncated | class)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::exception::*;
    use crate::getter::FloatGetter;

    #[test]
    fn from_signed() {
        assert_eq!(Direction::from_signed(3), (Direction::Up, 3));
        assert_eq!(Direction::from_signed(0), (Direction::Up, 0));
        assert_eq!(Direction::from_signed(-3), (Direction::Down, 3));
        assert_eq!(Direction::from_signed(i32::min_value()), (Direction::Down, 1 << 31));
    }

    #[test]
    fn negative_amount_reverses() {
        let f = 3.0f32;
        assert_eq!(f.shift_exp(-1, Direction::Up).to_bits(), f.shift_exp(1, Direction::Down).to_bits());
        assert_eq!(f.shift_sig(-2, Direction::Down).to_bits(), f.shift_sig(2, Direction::Up).to_bits());
    }

    #[test]
    fn exponent_shift() {
        // 2.0 stores 0x80; shifting down gives 0x40 (true exponent -63)
        let f = 2.0f32.shift_exp(1, Direction::Down);
        assert_eq!(f.to_bits(), 0x2000_0000);
        assert_eq!(f.exp_biased(), -63);

        // 1.0 stores 0x7F; shifting up gives 0xFE
        let g = 1.0f32.shift_exp(1, Direction::Up);
        assert_eq!(g.to_bits(), 0x7F00_0000);
    }

    #[test]
    fn mantissa_shift() {
        assert_eq!(1.5f32.shift_sig(1, Direction::Down), 1.25);
        assert_eq!(1.25f32.shift_sig(1, Direction::Up), 1.5);
        // top mantissa bit leaves the lane instead of touching the exponent
        assert_eq!(1.5f32.shift_sig(1, Direction::Up), 1.0);
        assert_eq!(1.0f32.shift_sig(1, Direction::Up).to_bits(), 0x3F80_0000);
    }

    #[test]
    fn status_clamped() {
        let (f, s) = 1.0f32.shift_exp_with_status(100, Direction::Down);
        assert!(s.contains(STATUS_CLAMPED | STATUS_TRUNCATED));
        assert_eq!(f.to_bits(), 0);

        let (_, s) = 1.0f32.shift_sig_with_status(23, Direction::Down);
        assert!(!s.contains(STATUS_CLAMPED));
    }

    #[test]
    fn status_truncated() {
        let (_, s) = 1.5f32.shift_sig_with_status(1, Direction::Up);
        assert_eq!(s, Status::truncated());
        let (_, s) = 1.25f32.shift_sig_with_status(1, Direction::Up);
        assert!(s.is_none());
    }

    #[test]
    fn status_special_results() {
        let (f, s) = f32::from_bits(0x3FC0_0000).shift_exp_with_status(1, Direction::Up);
        assert_eq!(f.to_bits(), 0x7F40_0000);
        assert_eq!(s, Status::none());

        let (f, s) = f32::INFINITY.shift_exp_with_status(0, Direction::Down);
        assert_eq!(f, f32::INFINITY);
        assert_eq!(s, Status::infinite());

        let (f, s) = f32::from_bits(0x7F80_0001).shift_sig_with_status(0, Direction::Up);
        assert!(f.is_nan());
        assert_eq!(s, Status::nan());

        let (f, s) = f32::from_bits(0x7F80_0001).shift_sig_with_status(1, Direction::Down);
        assert!(f.is_inf());
        assert_eq!(s, Status::truncated() | Status::infinite());
    }
}
