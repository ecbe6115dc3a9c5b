use crate::chain::{Chain, ChainAsRef, ChainFold, Cons, Folder, Nil, NonEmpty};

/// The layout of one nesting level of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    /// how many times `rest` has been followed to reach this level
    pub depth: usize,

    /// storage size of this level's head type
    pub size_of_head: usize,

    /// number of types after this level's head
    pub count: usize,
}

/// Per-level layout of a chain type, known without any value of that type.
pub trait Levels: Chain {
    fn push_levels(depth: usize, levels: &mut Vec<Level>);

    /// One [`Level`] for every non-terminal level, head-first.
    fn levels() -> Vec<Level> {
        let mut levels = Vec::with_capacity(Self::LEN);
        Self::push_levels(0, &mut levels);
        levels
    }
}

impl Levels for Nil {
    fn push_levels(_depth: usize, _levels: &mut Vec<Level>) {}
}

impl<H, R> Levels for Cons<H, R>
where
    R: Levels,
{
    fn push_levels(depth: usize, levels: &mut Vec<Level>) {
        levels.push(Level { depth, size_of_head: Self::SIZE_OF_HEAD, count: Self::COUNT });
        R::push_levels(depth + 1, levels)
    }
}

/// A [`Folder`] collecting the size of every value it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadSizes;

impl<'a, T> Folder<Vec<usize>, &'a T> for HeadSizes {
    fn apply(&mut self, mut acc: Vec<usize>, input: &'a T) -> Vec<usize> {
        acc.push(std::mem::size_of_val(input));
        acc
    }
}

/// Measures the head of every level of an actual chain value.
///
/// Agrees with [`Levels::levels`] on `size_of_head`.
pub fn measure_heads<'a, C>(chain: &'a C) -> Vec<usize>
where
    C: ChainAsRef<'a>,
    C::RefChain: ChainFold<HeadSizes, Vec<usize>>,
{
    let acc = Vec::with_capacity(<C::RefChain as Chain>::LEN);
    chain.chain_as_ref().chain_fold(acc, HeadSizes)
}
