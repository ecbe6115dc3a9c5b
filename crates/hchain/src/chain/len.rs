use super::Chain;

/// Instance-method access to the length constants of a [`Chain`].
pub trait ChainLen {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;

    /// The number of types after the head.
    fn count(&self) -> usize;
}

impl<C> ChainLen for C
where
    C: Chain,
{
    fn len(&self) -> usize {
        <Self as Chain>::LEN
    }
    fn is_empty(&self) -> bool {
        <Self as Chain>::LEN == 0
    }
    fn count(&self) -> usize {
        <Self as Chain>::COUNT
    }
}
