//! # Dependent
//!
//! A [`Dependent`] reaches a [`Leaf`] it does not own by asking a
//! [`LeafSource`] for it. The source is usually the composite that owns both
//! the leaf and this dependent, but this crate never names that type.
//!
//! ## Ownership
//!
//! ```text
//! Composite ──owns──▶ Leaf
//!     │  ▲
//!   owns │ Weak (non-owning)
//!     ▼  │
//! Dependent<P: LeafSource>
//! ```
//!
//! The back edge is a [`Weak`] handle, so the owner is never kept alive by
//! the dependent and no reference cycle leaks.

pub mod capability;
pub mod error;

pub use capability::LeafSource;
pub use error::DependentError;

use mutualdep_leaf::Leaf;
use std::fmt;
use std::io::Write;
use std::rc::{Rc, Weak};

/// Delegates display to whatever leaf its capability supplies.
///
/// The provider must outlive every use of the dependent. This is a caller
/// invariant. An owner that hands out a handle to itself, such as a
/// composite built with [`Rc::new_cyclic`], keeps it for as long as any
/// `Rc` to the owner exists: a composite's dependent cannot observe a dead
/// provider unless the caller moves the composite out of its `Rc` with
/// [`Rc::try_unwrap`]. Breaking the invariant yields
/// [`DependentError::ProviderDropped`] rather than a panic.
pub struct Dependent<P: ?Sized> {
    provider: Weak<P>,
}

impl<P: LeafSource + ?Sized> Dependent<P> {
    /// Wrap a non-owning handle to a provider.
    ///
    /// The handle is not upgraded here, so this is safe to call from inside
    /// [`Rc::new_cyclic`] before the provider finishes construction.
    pub fn new(provider: Weak<P>) -> Self {
        Self { provider }
    }

    /// Attach to an already-shared provider.
    pub fn attach(provider: &Rc<P>) -> Self {
        Self::new(Rc::downgrade(provider))
    }

    /// Whether the provider is still alive.
    pub fn is_attached(&self) -> bool {
        self.provider.strong_count() > 0
    }

    /// Run `f` against the leaf the capability supplies.
    pub fn with_leaf<R>(&self, f: impl FnOnce(&Leaf) -> R) -> Result<R, DependentError> {
        let Some(provider) = self.provider.upgrade() else {
            tracing::warn!("leaf provider dropped before use");
            return Err(DependentError::ProviderDropped);
        };
        let leaf = provider.leaf();
        tracing::trace!(value = leaf.value(), "resolved leaf through capability");
        Ok(f(leaf))
    }

    /// Display the capability's leaf on stdout.
    pub fn display_via_capability(&self) -> Result<(), DependentError> {
        self.with_leaf(Leaf::display)
    }

    /// Display the capability's leaf to `out`.
    ///
    /// Writes exactly what [`Leaf::display_to`] writes for the same leaf.
    pub fn display_via_capability_to<W: Write + ?Sized>(
        &self,
        out: &mut W,
    ) -> Result<(), DependentError> {
        self.with_leaf(|leaf| leaf.display_to(out))??;
        Ok(())
    }
}

impl<P: ?Sized> fmt::Debug for Dependent<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dependent")
            .field("attached", &(self.provider.strong_count() > 0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Owner shaped like a composite: owns a leaf and a dependent on itself.
    struct Owner {
        leaf: Leaf,
        dependent: Dependent<Owner>,
        lookups: Cell<usize>,
    }

    impl LeafSource for Owner {
        fn leaf(&self) -> &Leaf {
            self.lookups.set(self.lookups.get() + 1);
            &self.leaf
        }
    }

    fn owner(value: i64) -> Rc<Owner> {
        Rc::new_cyclic(|this| Owner {
            leaf: Leaf::new(value),
            dependent: Dependent::new(this.clone()),
            lookups: Cell::new(0),
        })
    }

    #[test]
    fn construction_does_not_call_back() {
        let owner = owner(1);
        assert_eq!(owner.lookups.get(), 0);
        assert!(owner.dependent.is_attached());
    }

    #[test]
    fn with_leaf_reaches_owned_leaf() {
        let owner = owner(9);
        let same = owner
            .dependent
            .with_leaf(|leaf| std::ptr::eq(leaf, &owner.leaf))
            .unwrap();
        assert!(same);
        assert_eq!(owner.lookups.get(), 1);
    }

    #[test]
    fn display_via_capability_matches_direct_display() {
        let owner = owner(-4);

        let mut direct = Vec::new();
        owner.leaf.display_to(&mut direct).unwrap();

        let mut delegated = Vec::new();
        owner
            .dependent
            .display_via_capability_to(&mut delegated)
            .unwrap();

        assert_eq!(direct, delegated);
        assert_eq!(String::from_utf8(delegated).unwrap(), "leaf value=-4\n");
    }

    #[test]
    fn display_via_capability_on_stdout() {
        owner(2).dependent.display_via_capability().unwrap();
    }

    #[test]
    fn accepts_trait_object_providers() {
        let provider: Rc<dyn LeafSource> = Rc::new(Leaf::new(11));
        let dependent = Dependent::attach(&provider);
        assert_eq!(dependent.with_leaf(Leaf::value).unwrap(), 11);
    }

    #[test]
    fn dropped_provider_is_reported() {
        let provider = Rc::new(Leaf::new(5));
        let dependent = Dependent::attach(&provider);
        drop(provider);

        assert!(!dependent.is_attached());
        assert!(matches!(
            dependent.display_via_capability(),
            Err(DependentError::ProviderDropped)
        ));
        assert!(matches!(
            dependent.with_leaf(Leaf::value),
            Err(DependentError::ProviderDropped)
        ));
    }

    #[test]
    fn sink_failure_is_reported() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("sink closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let provider = Rc::new(Leaf::new(5));
        let dependent = Dependent::attach(&provider);
        let err = dependent
            .display_via_capability_to(&mut Broken)
            .unwrap_err();
        assert!(matches!(err, DependentError::Io(_)));
    }

    #[test]
    fn debug_shows_attachment() {
        let provider = Rc::new(Leaf::new(5));
        let dependent = Dependent::attach(&provider);
        assert_eq!(format!("{dependent:?}"), "Dependent { attached: true }");
    }
}
