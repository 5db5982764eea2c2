use std::path::Path;

use spdlog::info;

use crate::archive::Archive;
use crate::config::ConversionOptions;
use crate::error::{ConvertError, Result};
use crate::model::{Blog, PostKind};
use crate::view::PostRenderer;

/// Renders every selected post and page of `blog` into an archive tree
pub fn build_archive(blog: &Blog, options: &ConversionOptions) -> Result<Archive> {
    let mut archive = Archive::new();

    for kind in [PostKind::Post, PostKind::Page] {
        let Some(post_options) = options.for_kind(kind) else {
            continue;
        };

        let renderer = PostRenderer::new(post_options)?;
        let mut count = 0;
        for post in blog.entries(kind) {
            if let Some(rendered) = renderer.render(post, options.list_option) {
                archive.add(&rendered);
                count += 1;
            }
        }
        info!("{:?}: {} of {} entries converted", kind, count, blog.entries(kind).len());
    }

    Ok(archive)
}

/// Export text to archive bytes
pub async fn convert(xml: &str, options: &ConversionOptions) -> Result<Vec<u8>> {
    let blog = Blog::from_export(xml)?;
    let archive = build_archive(&blog, options)?;
    archive.serialize().await
}

pub async fn convert_file(path: &Path, options: &ConversionOptions) -> Result<Vec<u8>> {
    let xml = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConvertError::Parse(format!("Error reading {}: {}", path.display(), e)))?;
    convert(&xml, options).await
}
