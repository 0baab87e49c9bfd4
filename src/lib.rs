//! Take binary32 floats apart and put them back together.
//!
//! A value is split into its sign, exponent and mantissa fields. Each field can be
//! read or edited on its own and the word is reassembled into an `f32`. The
//! reassembled word is never validated: NaN, infinity and subnormal patterns are
//! all legal results.
//!
//! ```
//! use float_shredder::*;
//!
//! assert_eq!(to_raw_bits(1.0), 0x3F80_0000);
//! assert_eq!(exponent_biased(0.5), -1);
//! assert_eq!(shift_mantissa(1.25, 1, Direction::Up), 1.5);
//! ```

mod constant;
mod constructor;
mod exception;
mod format;
mod getter;
mod ops;
mod util;

use std::fmt;

pub use constant::*;
pub use constructor::FloatConstructor;
pub use either::Either;
pub use exception::*;
pub use format::{FloatClass, FloatFormat};
pub use getter::FloatGetter;
pub use ops::{Direction, FloatShift};

/// Reinterprets the bits of `value`; no numeric conversion takes place.
pub fn to_raw_bits(value: f32) -> u32 {
    value.to_bits()
}

/// Reinterprets `bits` as a float, whatever pattern they hold.
pub fn from_raw_bits(bits: u32) -> f32 {
    f32::from_bits(bits)
}

/// `true` for negative values, `-0.0` included.
pub fn sign_bit(value: f32) -> bool {
    value.sign_bit()
}

pub fn exponent_unbiased(value: f32) -> u32 {
    value.exp_unbiased()
}

pub fn exponent_raw_masked(value: f32) -> u32 {
    value.exp_masked()
}

pub fn exponent_biased(value: f32) -> i32 {
    value.exp_biased()
}

pub fn exponent_biased_raw(value: f32) -> i32 {
    value.exp_biased_raw()
}

pub fn mantissa_raw_masked(value: f32) -> u32 {
    value.sig()
}

pub fn significand(value: f32) -> f32 {
    value.significand()
}

/// Shifts the exponent field by `amount`, clamped to 8. A negative amount
/// shifts the other way.
pub fn shift_exponent(value: f32, amount: i32, direction: Direction) -> f32 {
    value.shift_exp(amount, direction)
}

/// Shifts the mantissa field by `amount`, clamped to 23. A negative amount
/// shifts the other way.
pub fn shift_mantissa(value: f32, amount: i32, direction: Direction) -> f32 {
    value.shift_sig(amount, direction)
}

/// Positive amounts shift up, negative ones down.
pub fn shift_exponent_by(value: f32, amount: i32) -> f32 {
    value.shift_exp(amount, Direction::Up)
}

/// Positive amounts shift up, negative ones down.
pub fn shift_mantissa_by(value: f32, amount: i32) -> f32 {
    value.shift_sig(amount, Direction::Up)
}

/// A binary32 value held as its separate fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fields {
    pub sign: bool,
    pub exp: u32,
    pub sig: u32,
}

impl From<f32> for Fields {
    fn from(f: f32) -> Fields {
        Fields {
            sign: f.sign_bit(),
            exp: f.exp_unbiased(),
            sig: f.sig(),
        }
    }
}

impl From<u32> for Fields {
    fn from(u: u32) -> Fields {
        Fields::from(f32::from_bits(u))
    }
}

impl From<Fields> for f32 {
    fn from(fields: Fields) -> f32 {
        f32::from_fields(fields.sign, fields.exp, fields.sig)
    }
}

impl From<Fields> for u32 {
    fn from(fields: Fields) -> u32 {
        f32::from(fields).to_bits()
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {:08b} {:023b}",
            self.sign as u8,
            self.exp & EXP_MAX,
            self.sig & MANTISSA_MASK
        )
    }
}
