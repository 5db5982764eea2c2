use spdlog::{info, warn};

use crate::error::Result;
use crate::export::{parse_export, ChannelXml};

pub mod attachment;
pub mod author;
pub mod post;
pub mod term;

pub use attachment::{Attachment, AttachmentIndex};
pub use author::Author;
pub use post::{Calendar, Post, PostKind};
pub use term::{Category, Tag, TaxonomyTerm, Term};

/// The typed content of one export
#[derive(Debug, Clone, Default)]
pub struct Blog {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: String,
    pub wxr_version: String,
    pub site_url: String,
    pub blog_url: String,
    pub authors: Vec<Author>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub terms: Vec<TaxonomyTerm>,
    pub posts: Vec<Post>,
    pub pages: Vec<Post>,
    pub attachments: Vec<Attachment>,
}

impl Blog {
    pub fn from_export(xml: &str) -> Result<Blog> {
        let channel = parse_export(xml)?;
        Ok(Blog::from_channel(&channel))
    }

    pub fn from_channel(channel: &ChannelXml) -> Blog {
        let mut blog = Blog {
            title: channel.title.clone(),
            link: channel.link.clone(),
            description: channel.description.clone(),
            language: channel.language.clone(),
            wxr_version: channel.wxr_version.clone(),
            site_url: channel.base_site_url.clone(),
            blog_url: channel.base_blog_url.clone(),
            authors: channel.authors.iter().map(Author::from).collect(),
            categories: channel.categories.iter().map(Category::from).collect(),
            tags: channel.tags.iter().map(Tag::from).collect(),
            terms: channel.terms.iter().map(TaxonomyTerm::from).collect(),
            ..Default::default()
        };

        let mut posts = vec![];
        let mut pages = vec![];
        let mut attachments = vec![];
        for item in &channel.items {
            match item.post_type.as_str() {
                "attachment" => attachments.push(Attachment::from_item(item)),
                post_type => match PostKind::from_post_type(post_type) {
                    Some(PostKind::Post) => posts.push(Post::from_item(item, PostKind::Post, &blog)),
                    Some(PostKind::Page) => pages.push(Post::from_item(item, PostKind::Page, &blog)),
                    None => {}
                },
            }
        }
        blog.posts = posts;
        blog.pages = pages;
        blog.attachments = attachments;
        blog.link_attachments();

        info!(
            "Loaded {}: {} authors, {} categories, {} tags, {} posts, {} pages, {} attachments",
            blog.title,
            blog.authors.len(),
            blog.categories.len(),
            blog.tags.len(),
            blog.posts.len(),
            blog.pages.len(),
            blog.attachments.len()
        );

        blog
    }

    /// Unresolved when no author or more than one author has this username
    pub fn author_by_username(&self, username: &str) -> Option<&Author> {
        match author::find_by_username(&self.authors, username) {
            Ok(author) => Some(author),
            Err(0) => {
                warn!("Author {} was not found.", username);
                None
            }
            Err(count) => {
                warn!("Author {} is ambiguous: {} authors share this username.", username, count);
                None
            }
        }
    }

    pub fn match_categories<S: AsRef<str>>(&self, terms: &[S]) -> Vec<Category> {
        term::match_terms(&self.categories, terms)
    }

    pub fn match_tags<S: AsRef<str>>(&self, terms: &[S]) -> Vec<Tag> {
        term::match_terms(&self.tags, terms)
    }

    /// Gives each post and page the attachments whose parent is the post.
    /// Posts that already have attachments are left alone.
    pub fn link_attachments(&mut self) {
        let Blog {
            posts,
            pages,
            attachments,
            ..
        } = self;
        let index = AttachmentIndex::new(attachments);
        for post in posts.iter_mut().chain(pages.iter_mut()) {
            post.add_attachments(&index);
        }
    }

    pub fn entries(&self, kind: PostKind) -> &[Post] {
        match kind {
            PostKind::Post => &self.posts,
            PostKind::Page => &self.pages,
        }
    }

    pub fn images(&self) -> impl Iterator<Item = &Attachment> {
        self.attachments.iter().filter(|a| a.is_image)
    }
}
