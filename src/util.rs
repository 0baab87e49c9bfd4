use crate::ops::Direction;

pub(crate) fn clamp_shift(amount: u32, width: u32) -> u32 {
  amount.min(width)
}

/// Shifts the bits under `mask` and merges them back with the rest of the word.
/// Bits pushed out of the lane are dropped.
pub(crate) fn shift_lane(bits: u32, mask: u32, shamt: u32, direction: Direction) -> u32 {
  let field = bits & mask;
  let rest = bits & !mask;
  let shifted = match direction {
    Direction::Up => field.checked_shl(shamt).unwrap_or(0),
    Direction::Down => field.checked_shr(shamt).unwrap_or(0),
  };

  (shifted & mask) | rest
}
