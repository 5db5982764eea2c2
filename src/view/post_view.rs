use ramhorns::Content;

use crate::config::ListOption;
use crate::content::Image;
use crate::model::{Attachment, Post};
use crate::text_utils::format_date_time;

#[derive(Content)]
pub struct AttachmentView<'a> {
    url: &'a str,
    filename: &'a str,
    #[ramhorns(rename = "relativePath")]
    relative_path: &'a str,
    #[ramhorns(rename = "altText")]
    alt_text: &'a str,
    #[ramhorns(rename = "isImage")]
    is_image: bool,
    markdown: Option<&'a str>,
}

#[derive(Content)]
pub struct ImageView<'a> {
    url: &'a str,
    #[ramhorns(rename = "relativeUrl")]
    relative_url: &'a str,
    alt: &'a str,
    title: &'a str,
    markdown: &'a str,
}

/// Everything a template can reference for one post or page
#[derive(Content)]
pub struct PostView<'a> {
    id: u64,
    title: &'a str,
    url: &'a str,
    path: &'a str,
    slug: &'a str,
    #[ramhorns(rename = "pubDate")]
    pub_date: Option<String>,
    status: &'a str,
    html: &'a str,
    markdown: &'a str,
    description: &'a str,
    author: Option<&'a str>,
    #[ramhorns(rename = "authorUsername")]
    author_username: Option<&'a str>,
    month: Option<u32>,
    #[ramhorns(rename = "monthZeroPadded")]
    month_zero_padded: Option<&'a str>,
    #[ramhorns(rename = "monthName")]
    month_name: Option<&'static str>,
    #[ramhorns(rename = "monthShortName")]
    month_short_name: Option<&'static str>,
    day: Option<u32>,
    #[ramhorns(rename = "dayZeroPadded")]
    day_zero_padded: Option<&'a str>,
    year: Option<i32>,
    #[ramhorns(rename = "shortYear")]
    short_year: Option<&'a str>,
    #[ramhorns(rename = "firstImage")]
    first_image: &'a str,
    #[ramhorns(rename = "firstImageMarkdown")]
    first_image_markdown: &'a str,
    category: Option<&'a str>,
    categories: String,
    tags: String,
    attachments: Vec<AttachmentView<'a>>,
    images: Vec<ImageView<'a>>,
}

impl<'a> From<&'a Attachment> for AttachmentView<'a> {
    fn from(attachment: &'a Attachment) -> Self {
        AttachmentView {
            url: &attachment.url,
            filename: &attachment.filename,
            relative_path: &attachment.relative_path,
            alt_text: &attachment.alt_text,
            is_image: attachment.is_image,
            markdown: attachment.markdown.as_deref(),
        }
    }
}

impl<'a> From<&'a Image> for ImageView<'a> {
    fn from(image: &'a Image) -> Self {
        ImageView {
            url: &image.url,
            relative_url: &image.relative_url,
            alt: &image.alt,
            title: &image.title,
            markdown: &image.markdown,
        }
    }
}

impl<'a> PostView<'a> {
    pub fn new(post: &'a Post, list_option: ListOption) -> PostView<'a> {
        let calendar = post.calendar.as_ref();
        let category_names: Vec<&str> = post.categories.iter().map(|c| c.name.as_str()).collect();
        let tag_names: Vec<&str> = post.tags.iter().map(|t| t.name.as_str()).collect();
        let first_image = post.first_image();

        PostView {
            id: post.id,
            title: &post.title,
            url: &post.url,
            path: &post.path,
            slug: &post.slug,
            pub_date: post.date.as_ref().map(format_date_time),
            status: &post.status,
            html: &post.html,
            markdown: &post.markdown,
            description: &post.description,
            author: post.author.as_ref().map(|a| a.name()),
            author_username: post.author.as_ref().map(|a| a.username.as_str()),
            month: calendar.map(|c| c.month),
            month_zero_padded: calendar.map(|c| c.month_zero_padded.as_str()),
            month_name: calendar.map(|c| c.month_name),
            month_short_name: calendar.map(|c| c.month_short_name),
            day: calendar.map(|c| c.day),
            day_zero_padded: calendar.map(|c| c.day_zero_padded.as_str()),
            year: calendar.map(|c| c.year),
            short_year: calendar.map(|c| c.short_year.as_str()),
            first_image: first_image.map(|i| i.relative_url.as_str()).unwrap_or_default(),
            first_image_markdown: first_image.map(|i| i.markdown.as_str()).unwrap_or_default(),
            category: category_names.first().copied(),
            categories: list_option.format(&category_names),
            tags: list_option.format(&tag_names),
            attachments: post.attachments.iter().map(AttachmentView::from).collect(),
            images: post.images.iter().map(ImageView::from).collect(),
        }
    }
}
