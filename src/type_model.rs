/*!
 * Element types of texts and output arrays, most likely not relevant to you.
 */

use num_traits::{NumCast, PrimInt};

use crate::{
    error::{ConstructionError, InvalidArgument},
    sealed::Sealed,
};

// -------------------- InputElement with implementations for u8, u16, i32, i64 --------------------

/// Element type of a text. Characters are compared by their numerical value.
///
/// For `i32`/`i64`-based texts, negative values are rejected, because `-1` is reserved as the rank
/// of the empty string during construction.
pub trait InputElement: Sealed + std::fmt::Debug + Copy + Ord + Into<i64> {
    const ZERO: Self;
    const MAY_BE_NEGATIVE: bool;
}

impl Sealed for u8 {}

impl InputElement for u8 {
    const ZERO: Self = 0;
    const MAY_BE_NEGATIVE: bool = false;
}

impl Sealed for u16 {}

impl InputElement for u16 {
    const ZERO: Self = 0;
    const MAY_BE_NEGATIVE: bool = false;
}

impl Sealed for i32 {}

impl InputElement for i32 {
    const ZERO: Self = 0;
    const MAY_BE_NEGATIVE: bool = true;
}

impl Sealed for i64 {}

impl InputElement for i64 {
    const ZERO: Self = 0;
    const MAY_BE_NEGATIVE: bool = true;
}

// -------------------- OutputElement with implementations for i32, i64, usize --------------------

/// Element type of suffix and LCP arrays.
pub trait OutputElement:
    Sealed + PrimInt + std::hash::Hash + std::fmt::Debug + std::fmt::Display
{
    const MAX: Self;
    const ZERO: Self;
}

impl OutputElement for i32 {
    const MAX: Self = Self::MAX;
    const ZERO: Self = 0;
}

impl OutputElement for i64 {
    const MAX: Self = Self::MAX;
    const ZERO: Self = 0;
}

impl Sealed for usize {}

impl OutputElement for usize {
    const MAX: Self = Self::MAX;
    const ZERO: Self = 0;
}

// -------------------- conversions between text indices and output elements --------------------

pub(crate) fn index_to_output<O: OutputElement>(index: usize) -> Result<O, ConstructionError> {
    <O as NumCast>::from(index).ok_or(ConstructionError::InvalidArgument(
        InvalidArgument::TextTooLong { text_len: index },
    ))
}

// Negative or too large values are reported as `None`.
pub(crate) fn output_to_index<O: OutputElement>(value: O) -> Option<usize> {
    <usize as NumCast>::from(value)
}

pub(crate) fn check_text_len_fits<O: OutputElement>(text_len: usize) -> Result<(), ConstructionError> {
    match <O as NumCast>::from(text_len) {
        Some(_) => Ok(()),
        None => Err(InvalidArgument::TextTooLong { text_len }.into()),
    }
}

pub(crate) fn check_non_negative<I: InputElement>(text: &[I]) -> Result<(), ConstructionError> {
    if !I::MAY_BE_NEGATIVE {
        return Ok(());
    }

    match text.iter().position(|&c| c < I::ZERO) {
        Some(position) => Err(InvalidArgument::NegativeCharacter { position }.into()),
        None => Ok(()),
    }
}
