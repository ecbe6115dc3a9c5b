use super::*;

pub trait ChainFold<F, Acc> {
    fn chain_fold(self, acc: Acc, folder: F) -> Acc;
}

/// One step of a fold, applied to every element head-first.
pub trait Folder<Acc, In> {
    fn apply(&mut self, acc: Acc, input: In) -> Acc;
}

impl<F, Acc> ChainFold<F, Acc> for Nil {
    fn chain_fold(self, acc: Acc, _folder: F) -> Acc {
        acc
    }
}

impl<F, Acc, H, R> ChainFold<F, Acc> for Cons<H, R>
where
    F: Folder<Acc, H>,
    R: ChainFold<F, Acc>,
{
    fn chain_fold(self, acc: Acc, mut folder: F) -> Acc {
        let acc = folder.apply(acc, self.0);
        self.1.chain_fold(acc, folder)
    }
}
