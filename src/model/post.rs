use chrono::{Datelike, NaiveDateTime};
use spdlog::debug;

use crate::content::{description_from_more, extract_images, html_to_markdown, Image};
use crate::export::ItemXml;
use crate::model::attachment::{Attachment, AttachmentIndex};
use crate::model::author::Author;
use crate::model::term::{Category, Tag};
use crate::model::Blog;
use crate::text_utils::{resolve_date, strip_media_origin, strip_origin};

const FULL_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostKind {
    Post,
    Page,
}

impl PostKind {
    pub fn from_post_type(post_type: &str) -> Option<PostKind> {
        match post_type {
            "post" => Some(PostKind::Post),
            "page" => Some(PostKind::Page),
            _ => None,
        }
    }
}

/// Date parts exposed to templates
#[derive(Debug, Clone, PartialEq)]
pub struct Calendar {
    pub month: u32,
    pub month_zero_padded: String,
    pub month_name: &'static str,
    pub month_short_name: &'static str,
    pub day: u32,
    pub day_zero_padded: String,
    pub year: i32,
    pub short_year: String,
}

impl Calendar {
    pub fn from_date(date: &NaiveDateTime) -> Calendar {
        let month = date.month();
        let day = date.day();
        let year = date.year();

        Calendar {
            month,
            month_zero_padded: format!("{:02}", month),
            month_name: FULL_MONTHS[month as usize - 1],
            month_short_name: SHORT_MONTHS[month as usize - 1],
            day,
            day_zero_padded: format!("{:02}", day),
            year,
            short_year: format!("{:02}", year.rem_euclid(100)),
        }
    }
}

/// A post or a page of the export
#[derive(Debug, Clone)]
pub struct Post {
    pub kind: PostKind,
    pub id: u64,
    pub title: String,
    pub url: String,
    pub path: String,
    pub slug: String,
    pub author: Option<Author>,
    pub date: Option<NaiveDateTime>,
    pub calendar: Option<Calendar>,
    pub status: String,
    pub html: String,
    pub markdown: String,
    pub description: String,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub attachments: Vec<Attachment>,
    pub images: Vec<Image>,
}

impl Post {
    /// Builds a post from its item. Authors and terms of `blog` must be complete.
    pub fn from_item(item: &ItemXml, kind: PostKind, blog: &Blog) -> Post {
        debug!("Building {:?} {} - {}", kind, item.post_id, item.title);

        let date = resolve_date(&item.pub_date, &item.post_date);
        let html = strip_media_origin(&item.content);
        let markdown = html_to_markdown(&html);

        let description = if item.description.is_empty() {
            description_from_more(&html).unwrap_or_default()
        } else {
            item.description.clone()
        };

        let terms: Vec<&str> = item.categories.iter().map(|t| t.name.as_str()).collect();
        let images = extract_images(&html);

        Post {
            kind,
            id: item.post_id,
            title: item.title.clone(),
            url: item.link.clone(),
            path: strip_origin(&item.link),
            slug: item.post_name.clone(),
            author: blog.author_by_username(&item.creator).cloned(),
            date,
            calendar: date.as_ref().map(Calendar::from_date),
            status: item.status.clone(),
            html,
            markdown,
            description,
            categories: blog.match_categories(&terms),
            tags: blog.match_tags(&terms),
            attachments: vec![],
            images,
        }
    }

    pub fn first_image(&self) -> Option<&Image> {
        self.images.first()
    }

    /// Attaches the post's attachments once; later calls keep the first result
    pub fn add_attachments(&mut self, index: &AttachmentIndex) {
        if !self.attachments.is_empty() {
            return;
        }

        self.attachments = index.for_post(self.id).cloned().collect();
    }
}
