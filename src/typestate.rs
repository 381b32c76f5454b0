/*!
 * Typestate model for builder APIs, most likely not relevant to you.
 */

use either::Either;

use crate::{OutputElement, sealed::Sealed};

pub enum Undecided {}

impl Sealed for Undecided {}

pub trait OutputElementOrUndecided: Sealed {}

impl OutputElementOrUndecided for Undecided {}

impl<O: OutputElement> OutputElementOrUndecided for O {}

pub trait BufferModeOrUndecided: Sealed {}

impl BufferModeOrUndecided for Undecided {}

/// Decision about whether an owned [`Vec`]-based buffer or a user-provided slice-based buffer is used.
pub trait BufferMode: Sealed {
    type Buffer<'a, T: 'a>;

    fn buffer_to_either<'a, T>(buffer: Self::Buffer<'a, T>) -> Either<Vec<T>, &'a mut [T]>;

    fn either_to_buffer<'a, T: std::fmt::Debug>(
        either_: Either<Vec<T>, &'a mut [T]>,
    ) -> Self::Buffer<'a, T>;

    fn unwrap_or_allocate<'a, T, E, F>(
        opt: Option<&'a mut [T]>,
        f: F,
    ) -> Result<Self::Buffer<'a, T>, E>
    where
        F: FnOnce() -> Result<Vec<T>, E>;
}

impl<B: BufferMode> BufferModeOrUndecided for B {}

#[derive(Debug)]
pub struct BorrowedBuffer {}

impl Sealed for BorrowedBuffer {}

impl BufferMode for BorrowedBuffer {
    type Buffer<'a, T: 'a> = &'a mut [T];

    fn buffer_to_either<'a, T>(buffer: Self::Buffer<'a, T>) -> Either<Vec<T>, &'a mut [T]> {
        Either::Right(buffer)
    }

    fn either_to_buffer<'a, T: std::fmt::Debug>(
        either_: Either<Vec<T>, &'a mut [T]>,
    ) -> Self::Buffer<'a, T> {
        either_.unwrap_right()
    }

    fn unwrap_or_allocate<'a, T, E, F>(
        opt: Option<&'a mut [T]>,
        _f: F,
    ) -> Result<Self::Buffer<'a, T>, E>
    where
        F: FnOnce() -> Result<Vec<T>, E>,
    {
        Ok(opt.expect("a borrowed buffer is always supplied in the borrowed buffer mode"))
    }
}

#[derive(Debug)]
pub struct OwnedBuffer {}

impl Sealed for OwnedBuffer {}

impl BufferMode for OwnedBuffer {
    type Buffer<'a, T: 'a> = Vec<T>;

    fn buffer_to_either<'a, T>(buffer: Self::Buffer<'a, T>) -> Either<Vec<T>, &'a mut [T]> {
        Either::Left(buffer)
    }

    fn either_to_buffer<'a, T: std::fmt::Debug>(
        either_: Either<Vec<T>, &'a mut [T]>,
    ) -> Self::Buffer<'a, T> {
        either_.unwrap_left()
    }

    fn unwrap_or_allocate<'a, T, E, F>(
        _opt: Option<&'a mut [T]>,
        f: F,
    ) -> Result<Self::Buffer<'a, T>, E>
    where
        F: FnOnce() -> Result<Vec<T>, E>,
    {
        f()
    }
}
