/*!
# Example writing

Generated examples are written as JSON lines, one `{"id": <key>, "text": <text>}` object per line.
!*/
mod writer_jsonl;
pub use writer_jsonl::WriterJsonl;
