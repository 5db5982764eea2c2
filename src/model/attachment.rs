use std::collections::HashMap;

use crate::export::ItemXml;
use crate::text_utils::strip_first_media_origin;

const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "svg", "bmp"];

#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub post_id: u64,
    pub url: String,
    pub filename: String,
    pub relative_path: String,
    pub alt_text: String,
    pub is_image: bool,
    pub markdown: Option<String>,
}

impl Attachment {
    /// Panics when `item` is not an attachment: callers partition items by type first
    pub fn from_item(item: &ItemXml) -> Attachment {
        assert_eq!(
            item.post_type, "attachment",
            "Attempted to create an attachment from a non-attachment post (id={})",
            item.post_id
        );

        let url = match item.attachment_url {
            Some(ref url) if !url.is_empty() => url.clone(),
            _ => item.guid.clone(),
        };
        let filename = match url.rsplit_once('/') {
            Some((_, last)) if !last.is_empty() => last.to_string(),
            _ => url.clone(),
        };
        let relative_path = strip_first_media_origin(&url).replacen(&format!("/{}", filename), "", 1);
        let alt_text = item.excerpt.replace('"', "");
        let is_image = is_image_file(&filename);
        let markdown = if is_image {
            Some(format!("![{}]({}/{} \"{}\")", alt_text, relative_path, filename, alt_text))
        } else {
            None
        };

        Attachment {
            post_id: item.post_parent,
            url,
            filename,
            relative_path,
            alt_text,
            is_image,
            markdown,
        }
    }
}

fn is_image_file(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, extension)) if !extension.is_empty() => {
            IMAGE_EXTENSIONS.contains(&extension.to_lowercase().as_str())
        }
        _ => false,
    }
}

/// Attachments grouped by the id of the post they belong to
pub struct AttachmentIndex<'a> {
    attachments: &'a [Attachment],
    by_parent: HashMap<u64, Vec<usize>>,
}

impl<'a> AttachmentIndex<'a> {
    pub fn new(attachments: &'a [Attachment]) -> AttachmentIndex<'a> {
        let mut by_parent: HashMap<u64, Vec<usize>> = HashMap::new();
        for (idx, attachment) in attachments.iter().enumerate() {
            by_parent.entry(attachment.post_id).or_default().push(idx);
        }

        AttachmentIndex {
            attachments,
            by_parent,
        }
    }

    pub fn for_post(&self, post_id: u64) -> impl Iterator<Item = &'a Attachment> + '_ {
        let attachments = self.attachments;
        self.by_parent
            .get(&post_id)
            .into_iter()
            .flatten()
            .map(move |&idx| &attachments[idx])
    }
}
