pub mod archive;
pub mod config;
pub mod content;
pub mod converter;
pub mod error;
pub mod export;
pub mod logger;
pub mod model;
pub mod text_utils;
pub mod view;
#[cfg(test)]
mod test_data;

pub use converter::{build_archive, convert, convert_file};
pub use error::{ConvertError, Result};
