//! # singularis_core - Shared Primitives
//!
//! Zero-dependency building blocks used by the inventory crates:
//! - **Handles**: typed, generational, non-owning references
//! - **Handle maps**: owning storage that hands out those references
//! - **Errors**: why a handle did not resolve
//!
//! Holding a [`Handle`] never keeps its referent alive. Every lookup goes
//! through the owning [`HandleMap`], which rejects null and stale handles.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

pub mod error;
pub mod handle;

pub use error::*;
pub use handle::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::HandleError;
    pub use crate::handle::{Handle, HandleMap};
}
