//! Archive format implementations.

pub mod common;
pub mod zip;

pub use self::zip::ZipExtractor;
pub use self::zip::extract_zip;
