#![allow(unused)]

use prefix_doubling_sa::{InputElement, OutputElement};
use num_traits::NumCast;
use rand::{Rng, SeedableRng, rngs::StdRng};

pub fn setup_basic_example() -> &'static [u8; 11] {
    b"abababcabba"
}

pub fn random_text(rng: &mut impl Rng, len: usize, alphabet_size: u8) -> Vec<u8> {
    (0..len).map(|_| rng.random_range(0..alphabet_size)).collect()
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_5a11)
}

pub fn naive_suffix_array<I: InputElement>(text: &[I]) -> Vec<usize> {
    let mut suffix_array: Vec<_> = (0..text.len()).collect();
    suffix_array.sort_by_key(|&i| &text[i..]);
    suffix_array
}

pub fn is_permutation<O: OutputElement>(len: usize, maybe_suffix_array: &[O]) -> bool {
    let mut seen = vec![false; len];

    for &entry in maybe_suffix_array {
        match <usize as NumCast>::from(entry) {
            Some(idx) if idx < len && !seen[idx] => seen[idx] = true,
            _ => return false,
        }
    }

    maybe_suffix_array.len() == len
}

pub fn is_suffix_array<I: InputElement, O: OutputElement>(
    text: &[I],
    maybe_suffix_array: &[O],
) -> bool {
    if text.is_empty() && maybe_suffix_array.is_empty() {
        return true;
    }

    if !is_permutation(text.len(), maybe_suffix_array) {
        return false;
    }

    for indices in maybe_suffix_array.windows(2) {
        let previous = <usize as NumCast>::from(indices[0]).unwrap();
        let current = <usize as NumCast>::from(indices[1]).unwrap();

        // slices compare the end of the text as smaller than any character
        if text[previous..] > text[current..] {
            return false;
        }
    }

    true
}

pub fn is_lcp_array<I: InputElement, O: OutputElement>(
    text: &[I],
    suffix_array: &[O],
    lcp: &[O],
) -> bool {
    if lcp.len() != suffix_array.len() {
        return false;
    }

    if let Some(&first) = lcp.first()
        && first != O::zero()
    {
        return false;
    }

    for (i, indices) in suffix_array.windows(2).enumerate() {
        let first = <usize as NumCast>::from(indices[0]).unwrap();
        let second = <usize as NumCast>::from(indices[1]).unwrap();

        let lcp_value = <usize as NumCast>::from(lcp[i + 1]).unwrap();

        if naive_longest_common_prefix(&text[first..], &text[second..]) != lcp_value {
            return false;
        }
    }

    true
}

fn naive_longest_common_prefix<I: InputElement>(t1: &[I], t2: &[I]) -> usize {
    let mut lcp = 0;

    for (c1, c2) in std::iter::zip(t1, t2) {
        if c1 != c2 {
            break;
        }

        lcp += 1;
    }

    lcp
}
