//! The capability a [`Dependent`](crate::Dependent) needs from its owner.
//!
//! Declared here, beside its only consumer, so that the crate owning the
//! provider depends on this crate and never the other way round.

use mutualdep_leaf::Leaf;
use std::rc::Rc;

/// Anything that can hand out a reference to a [`Leaf`].
///
/// The returned reference borrows from the implementer; the implementer
/// must always have a leaf to return once callers can reach it.
pub trait LeafSource {
    fn leaf(&self) -> &Leaf;
}

impl LeafSource for Leaf {
    fn leaf(&self) -> &Leaf {
        self
    }
}

impl<T: LeafSource + ?Sized> LeafSource for &T {
    fn leaf(&self) -> &Leaf {
        (**self).leaf()
    }
}

impl<T: LeafSource + ?Sized> LeafSource for Box<T> {
    fn leaf(&self) -> &Leaf {
        (**self).leaf()
    }
}

impl<T: LeafSource + ?Sized> LeafSource for Rc<T> {
    fn leaf(&self) -> &Leaf {
        (**self).leaf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(source: &impl LeafSource) -> i64 {
        source.leaf().value()
    }

    #[test]
    fn leaf_supplies_itself() {
        let leaf = Leaf::new(3);
        assert!(std::ptr::eq(leaf.leaf(), &leaf));
    }

    #[test]
    fn pointer_wrappers_forward_to_the_same_leaf() {
        let leaf = Leaf::new(5);
        assert_eq!(value_of(&&leaf), 5);

        let boxed: Box<dyn LeafSource> = Box::new(Leaf::new(6));
        assert_eq!(value_of(&boxed), 6);

        let shared = Rc::new(Leaf::new(7));
        assert!(std::ptr::eq(shared.leaf(), &*shared));
    }
}
