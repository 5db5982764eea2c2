use ramhorns::Template;
use spdlog::debug;

use crate::config::{ListOption, PostOptions};
use crate::error::{ConvertError, Result};
use crate::model::Post;
use crate::view::post_view::PostView;

/// One output file, before it is placed in the archive
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPost {
    pub path: Option<String>,
    pub filename: String,
    pub content: String,
}

/// The three templates of a [`PostOptions`], compiled once per conversion
pub struct PostRenderer<'a> {
    options: &'a PostOptions,
    path: Option<Template<'a>>,
    filename: Template<'a>,
    content: Template<'a>,
}

fn template_error(name: &'static str, message: String) -> ConvertError {
    ConvertError::Template { name, message }
}

/// Every `{{#x}}` or `{{^x}}` needs its own `{{/x}}`, in order. ramhorns
/// renders unbalanced sections as plain text instead of failing.
fn check_sections(name: &'static str, source: &str) -> Result<()> {
    let mut open: Vec<&str> = vec![];
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let (close, skip) = if after.starts_with('{') { ("}}}", 1) } else { ("}}", 0) };
        let Some(end) = after[skip..].find(close) else {
            return Err(template_error(name, format!("unclosed tag at offset {}", source.len() - rest.len() + start)));
        };

        let tag = after[skip..skip + end].trim();
        if let Some(section) = tag.strip_prefix('#').or_else(|| tag.strip_prefix('^')) {
            open.push(section.trim());
        } else if let Some(closing) = tag.strip_prefix('/') {
            let closing = closing.trim();
            match open.pop() {
                Some(section) if section == closing => {}
                Some(section) => {
                    return Err(template_error(name, format!("section {} closed by /{}", section, closing)))
                }
                None => return Err(template_error(name, format!("/{} closes no section", closing))),
            }
        }

        rest = &after[skip + end + close.len()..];
    }

    match open.last() {
        Some(section) => Err(template_error(name, format!("section {} is never closed", section))),
        None => Ok(()),
    }
}

fn compile<'a>(name: &'static str, source: &'a str) -> Result<Template<'a>> {
    check_sections(name, source)?;
    Template::new(source).map_err(|e| template_error(name, e.to_string()))
}

impl<'a> PostRenderer<'a> {
    pub fn new(options: &'a PostOptions) -> Result<PostRenderer<'a>> {
        let path = match options.path {
            Some(ref path) => Some(compile("path", path)?),
            None => None,
        };

        Ok(PostRenderer {
            options,
            path,
            filename: compile("filename", &options.filename)?,
            content: compile("content", &options.template)?,
        })
    }

    /// `None` when the post's status is not one of the configured statuses
    pub fn render(&self, post: &Post, list_option: ListOption) -> Option<RenderedPost> {
        if !self.options.accepts(&post.status) {
            debug!("Skipping {} ({}): status {} is not selected", post.slug, post.id, post.status);
            return None;
        }

        let view = PostView::new(post, list_option);
        let mut content = self.content.render(&view);
        // ramhorns drops the newline that follows a trailing tag
        if self.options.template.ends_with('\n') && !content.ends_with('\n') {
            content.push('\n');
        }

        Some(RenderedPost {
            path: self.path.as_ref().map(|t| t.render(&view)),
            filename: self.filename.render(&view),
            content,
        })
    }
}
