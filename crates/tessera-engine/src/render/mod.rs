//! GPU rendering subsystem.
//!
//! `desc` holds the plain descriptor structs every resource is built from.
//! `triangle` is the one renderer: a fixed three-vertex mesh, optionally
//! animated through a uniform block.
//!
//! Convention:
//! - geometry is already in clip space; there is no viewport transform
//! - colors are linear premultiplied RGBA (`paint::Color`)

mod desc;
pub mod triangle;

pub use desc::{BufferSpec, DrawCall, LoadPolicy, PassSpec, PipelineSpec, StorePolicy};
