/// The chain type over a sequence of types.
///
/// `Chain![A, B, C]` is `Cons<A, Cons<B, Cons<C, Nil>>>`; `Chain![]` is `Nil`.
#[macro_export]
macro_rules! Chain {
    [] => { $crate::Nil };
    [$head:ty $(, $rest:ty)* $(,)?] => { $crate::Cons<$head, $crate::Chain![$($rest),*]> };
}

/// A chain value built from the given expressions, head-first.
#[macro_export]
macro_rules! chain {
    [] => { $crate::Nil };
    [$head:expr $(, $rest:expr)* $(,)?] => { $crate::Cons($head, $crate::chain![$($rest),*]) };
}
