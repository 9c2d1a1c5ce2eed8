mod mapping;
mod number;
mod value;

pub use mapping::*;
pub use number::*;
pub use value::*;
