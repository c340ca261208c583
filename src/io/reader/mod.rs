/*! Split file reading utilities
!*/
mod examples;
mod lines;

pub use examples::{Examples, Record};
pub use lines::UniversalLines;
