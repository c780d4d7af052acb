pub mod document;
pub mod question;
pub mod topic;

pub use document::{is_supported_mime, Document, SUPPORTED_MIME_TYPES};
pub use question::{Difficulty, Question, QuestionType};
pub use topic::Topic;
