mod as_ref;
pub use as_ref::ChainAsRef;

mod fold;
pub use fold::{ChainFold, Folder};

mod index;
pub use index::{At, Get, Here, Idx, Nested, There};

mod len;
pub use len::ChainLen;


/// The terminal chain: no head, no rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Nil;

/// A single level of a chain: the head value followed by the rest of the chain, owned by value.
///
/// `Default` constructs the head first, then the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cons<H, R>(pub H, pub R);

/// A chain over a sequence of types, either [`Cons`] or [`Nil`].
pub trait Chain: Sized {
    /// The number of types in the sequence.
    const LEN: usize;

    /// The number of types remaining after the head. `0` for [`Nil`].
    const COUNT: usize;

    fn push_front<H>(self, head: H) -> Cons<H, Self> {
        Cons(head, self)
    }

    /// The sub-chain at depth `I` (`Here` being `self`).
    fn at<I>(&self) -> &At<Self, I>
    where
        Self: Nested<I>,
    {
        <Self as Nested<I>>::nested(self)
    }

    fn at_mut<I>(&mut self) -> &mut At<Self, I>
    where
        Self: Nested<I>,
    {
        <Self as Nested<I>>::nested_mut(self)
    }
}

/// A chain that has a head, i.e. anything but [`Nil`].
///
/// [`Nil`] does not implement this trait, so running past the end of a chain
/// does not compile.
pub trait NonEmpty: Chain {
    type Head;
    type Rest: Chain;

    /// The storage size of the head type.
    const SIZE_OF_HEAD: usize = std::mem::size_of::<Self::Head>();

    fn size_of_head(&self) -> usize {
        Self::SIZE_OF_HEAD
    }

    fn head(&self) -> &Self::Head;
    fn head_mut(&mut self) -> &mut Self::Head;

    fn rest(&self) -> &Self::Rest;
    fn rest_mut(&mut self) -> &mut Self::Rest;

    fn into_parts(self) -> (Self::Head, Self::Rest);
}

impl Chain for Nil {
    const LEN: usize = 0;
    const COUNT: usize = 0;
}

impl<H, R> Chain for Cons<H, R>
where
    R: Chain,
{
    const LEN: usize = 1 + R::LEN;
    const COUNT: usize = R::LEN;
}

impl<H, R> NonEmpty for Cons<H, R>
where
    R: Chain,
{
    type Head = H;
    type Rest = R;

    fn head(&self) -> &Self::Head {
        &self.0
    }
    fn head_mut(&mut self) -> &mut Self::Head {
        &mut self.0
    }

    fn rest(&self) -> &Self::Rest {
        &self.1
    }
    fn rest_mut(&mut self) -> &mut Self::Rest {
        &mut self.1
    }

    fn into_parts(self) -> (Self::Head, Self::Rest) {
        (self.0, self.1)
    }
}
