pub mod images;
pub mod markdown;

pub use images::{extract_images, Image};
pub use markdown::html_to_markdown;

use crate::text_utils::strip_tags;

pub const MORE_MARKER: &str = "<!--more-->";

/// Plain text that precedes the "read more" marker, if the body has one
pub fn description_from_more(html: &str) -> Option<String> {
    let (before, _) = html.split_once(MORE_MARKER)?;
    Some(strip_tags(before).trim().to_string())
}
