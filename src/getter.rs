use crate::constant::*;
use crate::format::{FloatClass, FloatFormat};
use either::Either;

/// Read access to the fields of a binary32 value.
pub trait FloatGetter {
  fn sign_bit(self) -> bool;
  /// Stored exponent field, shifted down (0..=255).
  fn exp_unbiased(self) -> u32;
  /// Stored exponent field left in place.
  fn exp_masked(self) -> u32;
  /// True exponent, `exp_unbiased() - 127`.
  fn exp_biased(self) -> i32;
  /// True exponent moved back into the exponent lane; not masked.
  fn exp_biased_raw(self) -> i32;
  fn sig(self) -> u32;
  /// Numeric significand: `1.m` for a non-zero exponent field, `0.m` otherwise.
  fn significand(self) -> f32;
  /// True exponent and significand bits of finite non-zero values.
  ///
  /// Normal values get the hidden bit OR-ed in; subnormals report an exponent
  /// of -126 and no hidden bit. Zero, infinity and NaN are returned as `Left`.
  fn parts(self) -> Either<FloatClass, (i32, u32)>;
}

impl FloatGetter for f32 {
  fn sign_bit(self) -> bool { (self.to_bits() & SIGN_MASK) >> SIGN_OFFSET != 0 }
  fn exp_unbiased(self) -> u32 { (self.to_bits() & EXP_MASK) >> EXP_OFFSET }
  fn exp_masked(self) -> u32 { self.to_bits() & EXP_MASK }
  fn exp_biased(self) -> i32 { self.exp_unbiased() as i32 - EXP_BIAS_32 }
  fn exp_biased_raw(self) -> i32 { self.exp_biased().wrapping_shl(EXP_OFFSET) }
  fn sig(self) -> u32 { self.to_bits() & MANTISSA_MASK }

  fn significand(self) -> f32 {
    if self.exp_unbiased() != 0 {
      // 1.m is the stored mantissa under an exponent field of exactly the bias
      f32::from_bits(((EXP_BIAS_32 as u32) << EXP_OFFSET) | self.sig())
    } else {
      // exact: sig < 2^24 and the divisor is a power of two
      self.sig() as f32 / HIDDEN_BIT as f32
    }
  }

  fn parts(self) -> Either<FloatClass, (i32, u32)> {
    match self.class() {
      FloatClass::Normal => Either::Right((self.exp_biased(), self.sig() | HIDDEN_BIT)),
      FloatClass::Subnormal => Either::Right((SUBNORMAL_EXP, self.sig())),
      class => Either::Left(class),
    }
  }
}
