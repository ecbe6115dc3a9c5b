use super::{Chain, Cons};

/// Depth zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Here;

/// One level deeper than `I`.
#[derive(Debug, Clone, Copy, Default)]
pub struct There<I>(I);

pub trait Idx {
    const IDX: usize;
}

impl Idx for Here {
    const IDX: usize = 0;
}
impl<I> Idx for There<I>
where
    I: Idx,
{
    const IDX: usize = 1 + I::IDX;
}

/// Access to the sub-chain found by following `rest` as many times as `I` says.
pub trait Nested<I> {
    type Target: Chain;

    fn nested(&self) -> &Self::Target;
    fn nested_mut(&mut self) -> &mut Self::Target;
}

/// The sub-chain of `C` at depth `I`.
pub type At<C, I> = <C as Nested<I>>::Target;

impl<C> Nested<Here> for C
where
    C: Chain,
{
    type Target = C;

    fn nested(&self) -> &Self::Target {
        self
    }
    fn nested_mut(&mut self) -> &mut Self::Target {
        self
    }
}

impl<H, R, I> Nested<There<I>> for Cons<H, R>
where
    R: Chain + Nested<I>,
{
    type Target = <R as Nested<I>>::Target;

    fn nested(&self) -> &Self::Target {
        <R as Nested<I>>::nested(&self.1)
    }
    fn nested_mut(&mut self) -> &mut Self::Target {
        <R as Nested<I>>::nested_mut(&mut self.1)
    }
}

/// Access to the head value at depth `I`.
pub trait Get<I> {
    type Item;

    fn get(&self) -> &Self::Item;
    fn get_mut(&mut self) -> &mut Self::Item;
}

impl<H, R> Get<Here> for Cons<H, R> {
    type Item = H;

    fn get(&self) -> &Self::Item {
        &self.0
    }
    fn get_mut(&mut self) -> &mut Self::Item {
        &mut self.0
    }
}

impl<H, R, I> Get<There<I>> for Cons<H, R>
where
    R: Get<I>,
{
    type Item = R::Item;

    fn get(&self) -> &Self::Item {
        <R as Get<I>>::get(&self.1)
    }
    fn get_mut(&mut self) -> &mut Self::Item {
        <R as Get<I>>::get_mut(&mut self.1)
    }
}
