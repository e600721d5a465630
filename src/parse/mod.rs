//! Duration parsing: tokenizer and millisecond accumulation.

mod engine;
mod tokenizer;

pub use engine::*;
pub use tokenizer::*;
