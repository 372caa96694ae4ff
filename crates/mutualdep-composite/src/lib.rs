//! # Composite
//!
//! The top of the mutualdep workspace. A [`Composite`] owns one [`Leaf`] and
//! one [`Dependent`], and hands the dependent a non-owning handle to itself
//! as its [`LeafSource`].
//!
//! ## Crate graph
//!
//! ```text
//! mutualdep-composite ──▶ mutualdep-dependent ──▶ mutualdep-leaf
//!   impl LeafSource         trait LeafSource            ▲
//!   for Composite                                       │
//!          └────────────────────────────────────────────┘
//! ```
//!
//! The dependent needs to call back into the composite, but Cargo forbids a
//! dependency from `mutualdep-dependent` back to this crate. The dependent
//! crate declares the capability it needs instead, and this crate implements
//! it.

pub mod config;
pub mod emit;

pub use config::{CompositeConfig, ConfigError};
pub use emit::{emit_to, format_and_emit, format_value};
pub use mutualdep_dependent::{Dependent, DependentError, LeafSource};
pub use mutualdep_leaf::Leaf;

use std::rc::Rc;

/// Owner of a leaf and of a dependent that reaches that leaf through the
/// composite itself.
///
/// Only ever handed out behind an [`Rc`]: the dependent's back-reference is a
/// [`std::rc::Weak`] to that allocation. `Rc` also keeps the composite on one
/// thread.
#[derive(Debug)]
pub struct Composite {
    leaf: Leaf,
    dependent: Dependent<Composite>,
}

impl Composite {
    /// Build a composite whose leaf holds `value`.
    ///
    /// The leaf is built before the dependent, and the dependent's handle
    /// cannot be upgraded until this returns, so no caller ever observes a
    /// partially-built composite.
    pub fn new(value: i64) -> Rc<Self> {
        let composite = Rc::new_cyclic(|this| Self {
            leaf: Leaf::new(value),
            dependent: Dependent::new(this.clone()),
        });
        tracing::debug!(value, "composite constructed");
        composite
    }

    pub fn from_config(config: &CompositeConfig) -> Rc<Self> {
        Self::new(config.value)
    }

    /// The leaf this composite owns.
    pub fn leaf(&self) -> &Leaf {
        &self.leaf
    }

    pub fn dependent(&self) -> &Dependent<Self> {
        &self.dependent
    }
}

impl LeafSource for Composite {
    fn leaf(&self) -> &Leaf {
        Composite::leaf(self)
    }
}
