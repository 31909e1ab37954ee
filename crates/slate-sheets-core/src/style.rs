//! Style handles
//!
//! Cell formats live in an externally owned style registry; the worksheet
//! only stores opaque handles and resolves them to xf indices at
//! serialization time.

/// Opaque handle into an external style registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleRef(u32);

impl StyleRef {
    /// Create a handle from the registry's identifier
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// The registry identifier
    pub fn id(&self) -> u32 {
        self.0
    }
}

/// Resolves style handles to xf indices in the styles part
///
/// An index of 0 means "no style" and is elided from the output.
pub trait StyleResolver {
    /// The xf index for a handle
    fn xf_index(&self, style: StyleRef) -> u32;
}
