use std::cmp::Ordering;

/// Rank of the empty string, the text end sorts before every character.
pub(crate) const END_OF_TEXT_RANK: i64 = -1;

// Compares suffixes by their rank classes of one prefix doubling round. It only borrows the
// rank table of its round, so every construction has its own comparison state.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RankComparator<'r> {
    rank: &'r [i64],
    step: usize,
}

impl<'r> RankComparator<'r> {
    pub(crate) fn new(rank: &'r [i64], step: usize) -> Self {
        Self { rank, step }
    }

    // (rank of the first `step` characters, rank of the following `step` characters)
    pub(crate) fn key(&self, suffix: usize) -> (i64, i64) {
        let next_rank = self
            .rank
            .get(suffix + self.step)
            .copied()
            .unwrap_or(END_OF_TEXT_RANK);

        (self.rank[suffix], next_rank)
    }

    pub(crate) fn compare(&self, a: usize, b: usize) -> Ordering {
        self.key(a).cmp(&self.key(b))
    }

    /// Assigns the rank classes of the next round to the suffixes in `sorted` order.
    ///
    /// Adjacent suffixes with equal keys share a class, so the classes are dense. Returns the
    /// largest class that was assigned.
    pub(crate) fn rerank(&self, sorted: &[usize], next_rank: &mut [i64]) -> i64 {
        let Some((&first, rest)) = sorted.split_first() else {
            return END_OF_TEXT_RANK;
        };

        let mut class = 0;
        let mut previous = first;
        next_rank[first] = class;

        for &suffix in rest {
            if self.compare(previous, suffix) != Ordering::Equal {
                class += 1;
            }

            next_rank[suffix] = class;
            previous = suffix;
        }

        class
    }
}

/// Length of the longest common prefix of two texts.
pub fn longest_common_prefix<T: Eq>(a: &[T], b: &[T]) -> usize {
    std::iter::zip(a, b).take_while(|(c1, c2)| c1 == c2).count()
}
