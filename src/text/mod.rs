//! Text normalization: word tokens and sentences.

pub mod sentences;
pub mod stopwords;
pub mod tokenizer;

pub use sentences::split_sentences;
pub use stopwords::is_stopword;
pub use tokenizer::tokenize;
