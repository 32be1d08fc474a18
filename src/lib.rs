//! A generic last-in-first-out stack that never holds on to removed values.

mod debug;
mod error;
mod stack;

pub use error::StackError;
pub use stack::GenericStack;
