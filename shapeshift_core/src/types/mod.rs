mod blob;
mod format;

pub use blob::*;
pub use format::*;
