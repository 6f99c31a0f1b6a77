mod number;
pub(crate) use number::*;

mod value;
pub use value::*;
