use quickcheck::{Arbitrary, Gen};

mod cursor;

/// An enum for the various kinds of "things" to do to a tree in a quicktest. Detaching the
/// cursor is left out on purpose: properties here are about the tree reachable from the root.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the values from wherever the cursor is
    Insert(T, T),
    /// Insert the values after moving the cursor back to the root
    InsertFromRoot(T, T),
    /// Move to the left child
    MoveLeft,
    /// Move to the right child
    MoveRight,
    /// Move to the parent
    MoveUp,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2, 3, 4]).unwrap() {
            0 => Op::Insert(T::arbitrary(g), T::arbitrary(g)),
            1 => Op::InsertFromRoot(T::arbitrary(g), T::arbitrary(g)),
            2 => Op::MoveLeft,
            3 => Op::MoveRight,
            4 => Op::MoveUp,
            _ => unreachable!(),
        }
    }
}
