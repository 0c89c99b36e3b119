//! Text processing module for tokenization, normalization, sentence
//! segmentation, and frequency counting.

mod frequency;
mod normalizer;
mod segmenter;
mod tokenizer;

pub use frequency::WordFrequencies;
pub use normalizer::{capitalize_first_letter, space_commas, Normalizer};
pub use segmenter::{count_sentences, split_fragments, split_sentences};
pub use tokenizer::{Token, TokenKind, Tokenizer};
