//! Pure data structures for mirrored order documents.

pub mod item;
pub mod order;
pub mod status;
mod wire;

pub use item::*;
pub use order::*;
pub use status::*;
