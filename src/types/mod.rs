pub mod answer_bundle;
pub mod identifiers;
pub mod tokens;

pub use answer_bundle::{Answer, AnswerError, AnswerSummary, Query, RankedDocument, RankedSentence};
pub use identifiers::{DocumentId, DocumentIdError, DocumentVersion};
pub use tokens::TokenSequence;
