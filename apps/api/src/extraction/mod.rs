// Field Extractor: raw resume text in, ParsedResume out.
// Pure and synchronous; handlers call it inline, no spawn_blocking needed.

pub mod extractor;
pub mod handlers;
pub mod lines;
pub mod patterns;
pub mod taxonomy;

pub use extractor::parse_resume;
#[cfg(test)]
pub use extractor::parse_resume_at;
