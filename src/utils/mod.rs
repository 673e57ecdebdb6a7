//! Small shared helpers.

pub mod encoding;

pub use encoding::read_text_lossy;
