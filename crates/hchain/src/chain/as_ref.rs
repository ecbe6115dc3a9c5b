use super::*;

/// Borrows every element of a chain, producing a chain of shared references.
pub trait ChainAsRef<'a> {
    type RefChain: Chain + 'a;

    fn chain_as_ref(&'a self) -> Self::RefChain;
}

impl<'a> ChainAsRef<'a> for Nil {
    type RefChain = Self;

    fn chain_as_ref(&'a self) -> Self::RefChain {
        Self
    }
}

impl<'a, H, R> ChainAsRef<'a> for Cons<H, R>
where
    R: ChainAsRef<'a>,
    H: 'a,
{
    type RefChain = Cons<&'a H, R::RefChain>;

    fn chain_as_ref(&'a self) -> Self::RefChain {
        Cons(&self.0, self.1.chain_as_ref())
    }
}
