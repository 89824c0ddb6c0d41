//! Flvread-IO: byte-level plumbing for the FLV reader.
//!
//! - `codec` - big-endian 24/32-bit integers and the FLV timestamp layout
//! - `peek` - a buffered reader that peeks ahead, defers skips until the next
//!   read, and seeks past unbuffered bytes when the source allows it

pub mod codec;
pub mod peek;

pub use peek::{Bounded, PeekReader, DEFAULT_CAPACITY};
