/*!
# IO utilities

Split file reading and example writing.
!*/
pub mod reader;
pub mod writer;
