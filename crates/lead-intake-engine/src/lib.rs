pub mod evaluation;
pub mod format;
pub mod markdown;
pub mod phone;
pub mod submission;
pub mod text;

// Re-export key types for easier usage
pub use evaluation::format_evaluation;
pub use format::{Formatter, LinkStyle, escape, format, unescape};
pub use markdown::convert_markdown;
pub use phone::{PhoneEdit, PhoneMask, format_phone};
pub use submission::{
    FormKind, Submission, SubmissionError, SubmissionForm, SubmissionRecord, SummaryStyle,
};
pub use text::{camel_case_to_spaced, capitalize_words, shorten_string};
