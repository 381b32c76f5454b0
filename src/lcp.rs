/*!
 * Construct the [longest common prefix array] (LCP) for a suffix array and its text.
 *
 * [`LcpConstruction`] provides a builder-like API for constructing the LCP array. It can only be obtained from
 * a [`SuffixArrayWithText`](super::suffix_array::SuffixArrayWithText), which is in turn obtained from a
 * suffix array construction or from validated parts.
 *
 * ```
 * use prefix_doubling_sa::SuffixArrayConstruction;
 *
 * let text = b"abracadabra".as_slice();
 *
 * let res = SuffixArrayConstruction::for_text(text)
 *     .in_owned_buffer32()
 *     .run()
 *     .unwrap();
 *
 * let res_with_lcp = res.lcp_construction()
 *     .run()
 *     .unwrap();
 *
 * assert_eq!(res_with_lcp.lcp(), &[0, 1, 4, 1, 1, 0, 3, 0, 0, 0, 2]);
 * ```
 *
 * # Output Convention
 *
 * The LCP array has the same length as the suffix array and always starts with a 0, because the smallest
 * suffix has no predecessor. The second entry is the LCP value for the first two suffixes of the suffix array,
 * and so on.
 *
 * # Algorithm
 *
 * The array is computed with [Kasai's algorithm] in linear time. Suffixes are visited in text order,
 * and the common prefix length found for one suffix, minus one, is a lower bound for the next suffix.
 *
 * [longest common prefix array]: https://en.wikipedia.org/wiki/LCP_array
 * [Kasai's algorithm]: https://doi.org/10.1007/3-540-48194-X_17
 */

use log::debug;

use std::marker::PhantomData;

use crate::{
    InputElement, OutputElement,
    error::{ConstructionError, InvalidArgument, try_allocate},
    owned_or_borrowed::OwnedOrBorrowed,
    rank::longest_common_prefix,
    type_model::{index_to_output, output_to_index},
    typestate::{BorrowedBuffer, BufferMode, OwnedBuffer},
};

/// Construct the longest common prefix array for a suffix array and text.
///
/// See [`lcp`](self) for details.
#[derive(Debug)]
pub struct LcpConstruction<
    'l,
    's,
    't,
    I: InputElement,
    O: OutputElement,
    SaB: BufferMode,
    LcpB: BufferMode,
> {
    pub(crate) suffix_array: OwnedOrBorrowed<'s, O, SaB>,
    pub(crate) text: &'t [I],
    pub(crate) lcp_buffer: Option<&'l mut [O]>,
    pub(crate) _lcp_buffer_mode_marker: PhantomData<LcpB>,
}

impl<'s, 't, I: InputElement, O: OutputElement, SaB: BufferMode>
    LcpConstruction<'static, 's, 't, I, O, SaB, OwnedBuffer>
{
    /// Construct the LCP array in a borrowed buffer instead of allocating an owned [`Vec`].
    ///
    /// The buffer must have the same length as the suffix array.
    pub fn in_borrowed_buffer<'l>(
        self,
        lcp_buffer: &'l mut [O],
    ) -> LcpConstruction<'l, 's, 't, I, O, SaB, BorrowedBuffer> {
        LcpConstruction {
            suffix_array: self.suffix_array,
            text: self.text,
            lcp_buffer: Some(lcp_buffer),
            _lcp_buffer_mode_marker: PhantomData,
        }
    }
}

impl<'l, 's, 't, I: InputElement, O: OutputElement, SaB: BufferMode, LcpB: BufferMode>
    LcpConstruction<'l, 's, 't, I, O, SaB, LcpB>
{
    /// Construct the LCP array for the given suffix array and text.
    ///
    /// # Panics
    ///
    /// If a borrowed LCP buffer does not have the same length as the suffix array.
    ///
    /// # Returns
    ///
    /// An error or a type that bundles the suffix array with the LCP array.
    pub fn run(
        mut self,
    ) -> Result<SuffixArrayWithLcp<'l, 's, 't, I, O, SaB, LcpB>, ConstructionError> {
        let suffix_array_len = self.suffix_array.buffer.len();

        if let Some(lcp_buffer) = &self.lcp_buffer {
            assert_eq!(
                lcp_buffer.len(),
                suffix_array_len,
                "lcp_buffer must have the same length as the suffix array"
            );
        }

        let mut lcp = OwnedOrBorrowed::take_buffer_or_allocate(self.lcp_buffer.take(), || {
            try_allocate(suffix_array_len, O::ZERO)
        })?;

        kasai(self.text, &self.suffix_array.buffer, &mut lcp.buffer)?;

        Ok(SuffixArrayWithLcp {
            lcp,
            suffix_array: self.suffix_array,
            text: self.text,
        })
    }
}

// Expects a permutation of the text indices as suffix array and an LCP buffer of the same length.
pub(crate) fn kasai<I: InputElement, O: OutputElement>(
    text: &[I],
    suffix_array: &[O],
    lcp: &mut [O],
) -> Result<(), ConstructionError> {
    let text_len = text.len();

    let mut position = try_allocate(text_len, 0usize)?;

    for (rank, &suffix) in suffix_array.iter().enumerate() {
        let Some(slot) = output_to_index(suffix).and_then(|suffix| position.get_mut(suffix)) else {
            return Err(InvalidArgument::IndexOutOfRange { position: rank }.into());
        };

        *slot = rank;
    }

    let mut common_prefix_len = 0;
    let mut max_common_prefix_len = 0;

    for (suffix, &rank) in position.iter().enumerate() {
        if rank == 0 {
            lcp[0] = O::ZERO;
            continue;
        }

        let Some(predecessor) = output_to_index(suffix_array[rank - 1]) else {
            return Err(InvalidArgument::IndexOutOfRange { position: rank - 1 }.into());
        };

        common_prefix_len += longest_common_prefix(
            text.get(suffix + common_prefix_len..).unwrap_or_default(),
            text.get(predecessor + common_prefix_len..)
                .unwrap_or_default(),
        );

        lcp[rank] = index_to_output(common_prefix_len)?;
        max_common_prefix_len = max_common_prefix_len.max(common_prefix_len);

        common_prefix_len = common_prefix_len.saturating_sub(1);
    }

    debug!(
        "computed LCP array of {text_len} suffixes, longest repeat has length {max_common_prefix_len}"
    );

    Ok(())
}

/// The read-only return type of an LCP construction.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SuffixArrayWithLcp<
    'l,
    's,
    't,
    I: InputElement,
    O: OutputElement,
    SaB: BufferMode,
    LcpB: BufferMode,
> {
    pub(crate) lcp: OwnedOrBorrowed<'l, O, LcpB>,
    pub(crate) suffix_array: OwnedOrBorrowed<'s, O, SaB>,
    pub(crate) text: &'t [I],
}

impl<'l, 's, 't, I: InputElement, O: OutputElement, SaB: BufferMode, LcpB: BufferMode>
    SuffixArrayWithLcp<'l, 's, 't, I, O, SaB, LcpB>
{
    pub fn suffix_array(&self) -> &[O] {
        &self.suffix_array.buffer
    }

    pub fn lcp(&self) -> &[O] {
        &self.lcp.buffer
    }

    pub fn text(&self) -> &'t [I] {
        self.text
    }

    pub fn into_parts(self) -> (SaB::Buffer<'s, O>, LcpB::Buffer<'l, O>, &'t [I]) {
        (
            self.suffix_array.into_inner(),
            self.lcp.into_inner(),
            self.text,
        )
    }
}
