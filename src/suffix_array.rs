/*!
 * Construct the [suffix array] for a text using [`SuffixArrayConstruction`].
 *
 * The suffix array is built by prefix doubling. In every round, the suffixes are sorted by a pair of
 * rank classes: the class of their first `k` characters and the class of the `k` characters after that.
 * The new order then defines the classes for prefixes of length `2k`. The construction stops as soon as
 * every suffix has its own class, which takes at most `log(n) + 1` rounds of `O(n log n)` comparisons each.
 *
 * The entry point to the API is the [`SuffixArrayConstruction`] builder-like struct. It is always required to
 * pass the input text and register the output element, either by choosing an owned output buffer or by
 * supplying a borrowed one:
 * ```
 * use prefix_doubling_sa::SuffixArrayConstruction;
 *
 * let text = b"banana".as_slice();
 *
 * // additional space at the end of the buffer is left untouched
 * let mut my_suffix_array_buffer = vec![0i64; 8];
 *
 * let res = SuffixArrayConstruction::for_text(text)
 *     .in_borrowed_buffer(&mut my_suffix_array_buffer)
 *     .run()
 *     .unwrap();
 *
 * assert_eq!(res.suffix_array(), &[5, 3, 1, 0, 4, 2]);
 * ```
 *
 * # Sentinel Convention and Suffix Array Length
 *
 * Suffixes are sorted as if the text were terminated by a unique, lexicographically smallest character.
 * A suffix that is a prefix of another suffix is therefore sorted first. The sentinel is not part of the
 * text or of the suffix array, the resulting suffix array has the same length as the text.
 *
 * # Return Type and LCP
 *
 * The read-only return type of [`SuffixArrayConstruction::run`] bundles the suffix array
 * and a reference to the input text. It is generic over whether an owned or borrowed suffix array buffer is used.
 * The object can be destructured into parts or used to compute a longest common prefix (LCP) array,
 * see [`lcp`](super::lcp).
 *
 * # Large Alphabets
 *
 * Texts of `i32`/`i64` values are supported, but negative values are rejected with an
 * [`InvalidArgument::NegativeCharacter`] error, because `-1` is the rank of the empty string.
 *
 * [suffix array]: https://en.wikipedia.org/wiki/Suffix_array
 */

use log::{debug, trace};

use crate::{
    InputElement, OutputElement,
    error::{ConstructionError, InvalidArgument, try_allocate},
    lcp::LcpConstruction,
    owned_or_borrowed::OwnedOrBorrowed,
    rank::RankComparator,
    type_model::{check_non_negative, check_text_len_fits, index_to_output, output_to_index},
    typestate::{
        BorrowedBuffer, BufferMode, BufferModeOrUndecided, OutputElementOrUndecided, OwnedBuffer,
        Undecided,
    },
};

use std::marker::PhantomData;

/// The main entry point of this library, for constructing suffix arrays.
///
/// See [`suffix_array`](self) for details.
#[derive(Debug)]
pub struct SuffixArrayConstruction<
    's,
    't,
    I: InputElement,
    O: OutputElementOrUndecided,
    B: BufferModeOrUndecided,
> {
    text: &'t [I],
    suffix_array_buffer: Option<&'s mut [O]>,
    _buffer_mode_marker: PhantomData<B>,
}

impl<'t, I: InputElement> SuffixArrayConstruction<'static, 't, I, Undecided, Undecided> {
    /// The first method to call. Any text length is allowed, as long as it fits into the output element type
    /// you will choose.
    pub fn for_text(text: &'t [I]) -> Self {
        Self {
            text,
            suffix_array_buffer: None,
            _buffer_mode_marker: PhantomData,
        }
    }

    /// Provide a buffer to the library in which the suffix array will be stored.
    ///
    /// The buffer has to be at least as large as the text. Entries after the first `text.len()` entries
    /// are not modified.
    pub fn in_borrowed_buffer<'s, O: OutputElement>(
        self,
        suffix_array_buffer: &'s mut [O],
    ) -> SuffixArrayConstruction<'s, 't, I, O, BorrowedBuffer> {
        SuffixArrayConstruction {
            text: self.text,
            suffix_array_buffer: Some(suffix_array_buffer),
            _buffer_mode_marker: PhantomData,
        }
    }

    /// Inform the library of your desired output element type,
    /// if you want to obtain the suffix array in a [`Vec`].
    pub fn in_owned_buffer<O: OutputElement>(
        self,
    ) -> SuffixArrayConstruction<'static, 't, I, O, OwnedBuffer> {
        SuffixArrayConstruction {
            text: self.text,
            suffix_array_buffer: None,
            _buffer_mode_marker: PhantomData,
        }
    }

    /// Inform the library that you want to obtain the suffix array in a [`Vec<i32>`].
    pub fn in_owned_buffer32(self) -> SuffixArrayConstruction<'static, 't, I, i32, OwnedBuffer> {
        self.in_owned_buffer()
    }

    /// Inform the library that you want to obtain the suffix array in a [`Vec<i64>`].
    pub fn in_owned_buffer64(self) -> SuffixArrayConstruction<'static, 't, I, i64, OwnedBuffer> {
        self.in_owned_buffer()
    }

    /// Inform the library that you want to obtain the suffix array in a [`Vec<usize>`].
    pub fn in_owned_buffer_usize(
        self,
    ) -> SuffixArrayConstruction<'static, 't, I, usize, OwnedBuffer> {
        self.in_owned_buffer()
    }
}

impl<'s, 't, I: InputElement, O: OutputElement, B: BufferMode>
    SuffixArrayConstruction<'s, 't, I, O, B>
{
    /// Construct the suffix array for the given text.
    ///
    /// # Panics
    ///
    /// If a borrowed buffer is shorter than the text.
    ///
    /// # Returns
    ///
    /// An error or a type that bundles the suffix array with a reference to the text.
    /// See [`suffix_array`](self#return-type-and-lcp) for details.
    pub fn run(mut self) -> Result<SuffixArrayWithText<'s, 't, I, O, B>, ConstructionError> {
        let text_len = self.text.len();

        if let Some(buffer) = &self.suffix_array_buffer {
            assert!(
                buffer.len() >= text_len,
                "suffix_array_buffer must be at least as large as text"
            );
        }

        check_text_len_fits::<O>(text_len)?;
        check_non_negative(self.text)?;

        let order = sort_suffixes(self.text)?;

        let mut suffix_array =
            OwnedOrBorrowed::take_buffer_or_allocate(self.suffix_array_buffer.take(), || {
                try_allocate(text_len, O::ZERO)
            })?;

        let output: &mut [O] = &mut suffix_array.buffer;
        for (entry, &suffix) in output.iter_mut().zip(&order) {
            *entry = index_to_output(suffix)?;
        }

        suffix_array.shorten_buffer_to(text_len);

        Ok(SuffixArrayWithText {
            suffix_array,
            text: self.text,
        })
    }
}

// Prefix doubling over a working array of text indices. All scratch memory is owned by this call.
pub(crate) fn sort_suffixes<I: InputElement>(text: &[I]) -> Result<Vec<usize>, ConstructionError> {
    let text_len = text.len();

    let mut order = Vec::new();
    order.try_reserve_exact(text_len)?;
    order.extend(0..text_len);

    if text_len <= 1 {
        return Ok(order);
    }

    let mut rank = Vec::new();
    rank.try_reserve_exact(text_len)?;
    rank.extend(text.iter().map(|&c| -> i64 { c.into() }));

    let mut next_rank = try_allocate(text_len, 0i64)?;

    let mut step = 1;
    let mut rounds = 0;

    loop {
        let comparator = RankComparator::new(&rank, step);
        order.sort_unstable_by(|&a, &b| comparator.compare(a, b));
        let max_rank = comparator.rerank(&order, &mut next_rank);

        std::mem::swap(&mut rank, &mut next_rank);
        rounds += 1;

        trace!(
            "prefix doubling round {rounds} with step {step}: {} rank classes",
            max_rank + 1
        );

        // every suffix has its own class, later rounds could not change the order
        if max_rank as usize == text_len - 1 {
            break;
        }

        step *= 2;
    }

    debug!("sorted {text_len} suffixes in {rounds} prefix doubling rounds");

    Ok(order)
}

// Checks that the suffix array is a permutation of the text indices. The order is not checked.
pub(crate) fn validate_permutation<O: OutputElement>(
    text_len: usize,
    suffix_array: &[O],
) -> Result<(), ConstructionError> {
    if suffix_array.len() != text_len {
        return Err(InvalidArgument::LengthMismatch {
            text_len,
            suffix_array_len: suffix_array.len(),
        }
        .into());
    }

    let mut seen = try_allocate(text_len, false)?;

    for (position, &entry) in suffix_array.iter().enumerate() {
        let Some(seen_before) = output_to_index(entry).and_then(|suffix| seen.get_mut(suffix))
        else {
            return Err(InvalidArgument::IndexOutOfRange { position }.into());
        };

        if *seen_before {
            return Err(InvalidArgument::DuplicateIndex { position }.into());
        }

        *seen_before = true;
    }

    Ok(())
}

/// The read-only return type of a suffix array construction.
///
/// It keeps a reference to the text to allow constructing an LCP array.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SuffixArrayWithText<'s, 't, I: InputElement, O: OutputElement, B: BufferMode> {
    pub(crate) suffix_array: OwnedOrBorrowed<'s, O, B>,
    pub(crate) text: &'t [I],
}

impl<'s, 't, I: InputElement, O: OutputElement, B: BufferMode>
    SuffixArrayWithText<'s, 't, I, O, B>
{
    pub fn suffix_array(&self) -> &[O] {
        &self.suffix_array.buffer
    }

    pub fn text(&self) -> &'t [I] {
        self.text
    }

    pub fn into_parts(self) -> (B::Buffer<'s, O>, &'t [I]) {
        (self.suffix_array.into_inner(), self.text)
    }

    /// Construct this type without going through a [`SuffixArrayConstruction`] or by using the parts
    /// obtained by [`Self::into_parts`].
    ///
    /// The suffix array must be a permutation of the text indices, otherwise an
    /// [`InvalidArgument`] error is returned. Whether it is sorted is not checked. The LCP array
    /// of an unsorted permutation is not meaningful.
    pub fn from_parts(
        suffix_array: B::Buffer<'s, O>,
        text: &'t [I],
    ) -> Result<Self, ConstructionError> {
        let suffix_array = OwnedOrBorrowed::new(suffix_array);
        validate_permutation(text.len(), &suffix_array.buffer)?;

        Ok(Self { suffix_array, text })
    }

    pub fn lcp_construction(self) -> LcpConstruction<'static, 's, 't, I, O, B, OwnedBuffer> {
        LcpConstruction {
            suffix_array: self.suffix_array,
            text: self.text,
            lcp_buffer: None,
            _lcp_buffer_mode_marker: PhantomData,
        }
    }
}

impl<'t, I: InputElement, O: OutputElement> SuffixArrayWithText<'static, 't, I, O, OwnedBuffer> {
    pub fn into_vec(self) -> Vec<O> {
        self.suffix_array.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_suffix_array(text: &[u8]) -> Vec<usize> {
        let mut suffix_array: Vec<_> = (0..text.len()).collect();
        suffix_array.sort_by_key(|&i| &text[i..]);
        suffix_array
    }

    #[test]
    fn banana() {
        assert_eq!(sort_suffixes(b"banana").unwrap(), [5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn degenerate_lengths() {
        assert!(sort_suffixes::<u8>(&[]).unwrap().is_empty());
        assert_eq!(sort_suffixes(b"x").unwrap(), [0]);
    }

    #[test]
    fn repeated_character() {
        assert_eq!(sort_suffixes(b"aaaa").unwrap(), [3, 2, 1, 0]);
    }

    #[test]
    fn end_of_text_before_zero_byte() {
        assert_eq!(sort_suffixes(&[0u8, 0, 1, 0]).unwrap(), [3, 0, 1, 2]);
    }

    #[test]
    fn matches_naive_sorting() {
        for text in [
            b"mississippi".as_slice(),
            b"abracadabra",
            b"abababcabba",
            b"immissiissippi",
            b"zyxwvutsrqponm",
            b"aabaabaabaab",
        ] {
            assert_eq!(sort_suffixes(text).unwrap(), naive_suffix_array(text));
        }
    }

    #[test]
    fn large_alphabet_values() {
        let text = [1_000_000i64, 3, 1_000_000, 3, 0];

        assert_eq!(sort_suffixes(&text).unwrap(), [4, 3, 1, 2, 0]);
    }

    #[test]
    fn borrowed_buffer_keeps_extra_space() {
        let mut buffer = vec![-7i32; 9];

        let res = SuffixArrayConstruction::for_text(b"banana".as_slice())
            .in_borrowed_buffer(&mut buffer)
            .run()
            .unwrap();

        assert_eq!(res.suffix_array(), &[5, 3, 1, 0, 4, 2]);
        drop(res);
        assert_eq!(&buffer[6..], &[-7, -7, -7]);
    }

    #[test]
    #[should_panic(expected = "suffix_array_buffer must be at least as large as text")]
    fn borrowed_buffer_too_small() {
        let mut buffer = vec![0i32; 3];

        let _ = SuffixArrayConstruction::for_text(b"banana".as_slice())
            .in_borrowed_buffer(&mut buffer)
            .run();
    }

    #[test]
    fn negative_characters_are_rejected() {
        let text = [2i32, -1, 2];

        let res = SuffixArrayConstruction::for_text(text.as_slice())
            .in_owned_buffer32()
            .run();

        assert_eq!(
            res.unwrap_err(),
            ConstructionError::InvalidArgument(InvalidArgument::NegativeCharacter { position: 1 })
        );
    }

    #[test]
    fn permutation_validation() {
        assert!(validate_permutation(3, &[2i32, 0, 1]).is_ok());
        assert_eq!(
            validate_permutation(3, &[2i32, 0]),
            Err(InvalidArgument::LengthMismatch {
                text_len: 3,
                suffix_array_len: 2
            }
            .into())
        );
        assert_eq!(
            validate_permutation(3, &[2i32, -1, 0]),
            Err(InvalidArgument::IndexOutOfRange { position: 1 }.into())
        );
        assert_eq!(
            validate_permutation(3, &[2usize, 3, 0]),
            Err(InvalidArgument::IndexOutOfRange { position: 1 }.into())
        );
        assert_eq!(
            validate_permutation(3, &[1i64, 0, 1]),
            Err(InvalidArgument::DuplicateIndex { position: 2 }.into())
        );
    }
}
