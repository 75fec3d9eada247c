// Resume upload: PDF text extraction and the skill analysis pipeline.

pub mod handlers;
pub mod pdf;
pub mod upload;
