use crate::constant::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatClass {
  Zero,
  Subnormal,
  Normal,
  Infinite,
  Nan,
}

/// Classification by bit fields alone.
pub trait FloatFormat {
  fn class(self) -> FloatClass;
  fn is_signal_nan(self) -> bool;
  fn is_inf(self) -> bool;
  fn is_zero(self) -> bool;
}

impl FloatFormat for f32 {
  fn class(self) -> FloatClass {
    let bits = self.to_bits();
    match (bits & EXP_MASK, bits & MANTISSA_MASK) {
      (0, 0) => FloatClass::Zero,
      (0, _) => FloatClass::Subnormal,
      (EXP_MASK, 0) => FloatClass::Infinite,
      (EXP_MASK, _) => FloatClass::Nan,
      _ => FloatClass::Normal,
    }
  }

  fn is_signal_nan(self) -> bool {
    self.class() == FloatClass::Nan && (self.to_bits() & QUIET_BIT) == 0
  }

  fn is_inf(self) -> bool {
    self.class() == FloatClass::Infinite
  }

  fn is_zero(self) -> bool {
    self.class() == FloatClass::Zero
  }
}
