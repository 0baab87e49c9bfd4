use crate::constant::*;

/// Packs fields back into a binary32 value.
///
/// Field arguments are masked to their lane width, so excess high bits are
/// dropped instead of leaking into a neighbouring field.
pub trait FloatConstructor: Sized {
  fn from_fields(sign: bool, exp: u32, sig: u32) -> Self;
  fn with_sign(self, sign: bool) -> Self;
  fn with_exp(self, exp: u32) -> Self;
  fn with_sig(self, sig: u32) -> Self;
  fn default_nan() -> Self;
  fn zero(sign: bool) -> Self;
  fn infinite(sign: bool) -> Self;
}

impl FloatConstructor for f32 {
  fn from_fields(sign: bool, exp: u32, sig: u32) -> f32 {
    let sign = (sign as u32) << SIGN_OFFSET;
    let exp = (exp << EXP_OFFSET) & EXP_MASK;
    let sig = sig & MANTISSA_MASK;

    f32::from_bits(sign | exp | sig)
  }

  fn with_sign(self, sign: bool) -> f32 {
    f32::from_bits((self.to_bits() & !SIGN_MASK) | ((sign as u32) << SIGN_OFFSET))
  }

  fn with_exp(self, exp: u32) -> f32 {
    f32::from_bits((self.to_bits() & !EXP_MASK) | ((exp << EXP_OFFSET) & EXP_MASK))
  }

  fn with_sig(self, sig: u32) -> f32 {
    f32::from_bits((self.to_bits() & !MANTISSA_MASK) | (sig & MANTISSA_MASK))
  }

  fn default_nan() -> f32 {
    f32::from_fields(true, EXP_MAX, QUIET_BIT)
  }

  fn zero(sign: bool) -> f32 {
    f32::from_fields(sign, 0, 0)
  }

  fn infinite(sign: bool) -> f32 {
    f32::from_fields(sign, EXP_MAX, 0)
  }
}
