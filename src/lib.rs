/*!
 * Construction of [suffix arrays] by prefix doubling and of [longest common prefix arrays] (LCP) by
 * Kasai's algorithm, in safe Rust.
 *
 * There are two ways to use this library. The functions [`build_suffix_array`] and [`build_lcp_array`]
 * cover the common case of byte texts and `usize` arrays:
 *
 * ```
 * let text = b"banana";
 *
 * let suffix_array = prefix_doubling_sa::build_suffix_array(text).unwrap();
 * let lcp = prefix_doubling_sa::build_lcp_array(text, &suffix_array).unwrap();
 *
 * assert_eq!(suffix_array, [5, 3, 1, 0, 4, 2]);
 * assert_eq!(lcp, [0, 1, 3, 0, 0, 2]);
 * ```
 *
 * The builder-like API starting with [`SuffixArrayConstruction`] additionally supports `u16`, `i32` and
 * `i64`-based texts, `i32`, `i64` and `usize` output elements, and writing the results into borrowed buffers.
 * See [`suffix_array`] and [`lcp`] for details.
 *
 * Every construction owns its scratch memory. Constructions for different texts do not share any
 * state and may run concurrently.
 *
 * [suffix arrays]: https://en.wikipedia.org/wiki/Suffix_array
 * [longest common prefix arrays]: https://en.wikipedia.org/wiki/LCP_array
 */

mod error;
mod owned_or_borrowed;
mod rank;
mod type_model;

pub mod lcp;
pub mod suffix_array;
pub mod typestate;

#[doc(inline)]
pub use error::{ConstructionError, InvalidArgument};

#[doc(inline)]
pub use type_model::{InputElement, OutputElement};

#[doc(inline)]
pub use suffix_array::SuffixArrayConstruction;

pub use rank::longest_common_prefix;

/// Construct the suffix array of a byte text.
///
/// Every text length is supported, the only possible error is [`ConstructionError::AllocationFailure`].
pub fn build_suffix_array(text: &[u8]) -> Result<Vec<usize>, ConstructionError> {
    SuffixArrayConstruction::for_text(text)
        .in_owned_buffer_usize()
        .run()
        .map(suffix_array::SuffixArrayWithText::into_vec)
}

/// Construct the LCP array of a byte text and its suffix array.
///
/// The result has the same length as the text and starts with a 0. The suffix array is checked to be
/// a permutation of the text indices, but it is not checked to be sorted.
pub fn build_lcp_array(text: &[u8], suffix_array: &[usize]) -> Result<Vec<usize>, ConstructionError> {
    suffix_array::validate_permutation(text.len(), suffix_array)?;

    let mut lcp = error::try_allocate(text.len(), 0)?;
    lcp::kasai(text, suffix_array, &mut lcp)?;

    Ok(lcp)
}

mod sealed {
    pub trait Sealed {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banana() {
        let suffix_array = build_suffix_array(b"banana").unwrap();
        let lcp = build_lcp_array(b"banana", &suffix_array).unwrap();

        assert_eq!(suffix_array, [5, 3, 1, 0, 4, 2]);
        assert_eq!(&lcp[1..], &[1, 3, 0, 0, 2]);
        assert_eq!(lcp[0], 0);
    }

    #[test]
    fn empty_text() {
        assert!(build_suffix_array(b"").unwrap().is_empty());
        assert!(build_lcp_array(b"", &[]).unwrap().is_empty());
    }

    #[test]
    fn mismatched_suffix_array() {
        assert_eq!(
            build_lcp_array(b"abc", &[0, 1]),
            Err(ConstructionError::InvalidArgument(
                InvalidArgument::LengthMismatch {
                    text_len: 3,
                    suffix_array_len: 2
                }
            ))
        );
        assert_eq!(
            build_lcp_array(b"abc", &[0, 1, 7]),
            Err(ConstructionError::InvalidArgument(
                InvalidArgument::IndexOutOfRange { position: 2 }
            ))
        );
    }
}
