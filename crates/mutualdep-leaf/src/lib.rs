//! # Leaf
//!
//! The innermost piece of the mutualdep workspace. A [`Leaf`] holds one
//! integer configuration value and knows how to display itself.
//!
//! This crate depends on nothing else in the workspace. Both the dependent
//! crate and the composite crate name [`Leaf`] directly; neither of them is
//! visible from here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

/// An opaque unit of domain state.
///
/// The value is stored verbatim at construction and never changes. Zero,
/// negative, and extreme values are all accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Leaf {
    value: i64,
}

impl Leaf {
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    /// The configuration value this leaf was built with.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Write this leaf's rendering, followed by a newline, to stdout.
    pub fn display(&self) {
        tracing::trace!(value = self.value, "leaf display");
        println!("{self}");
    }

    /// Write this leaf's rendering, followed by a newline, to `out`.
    ///
    /// [`Leaf::display`] produces the same bytes on stdout.
    pub fn display_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        tracing::trace!(value = self.value, "leaf display to sink");
        writeln!(out, "{self}")
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "leaf value={}", self.value)
    }
}
