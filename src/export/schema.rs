use crate::error::{ConvertError, Result};
use crate::export::xml_tree::{parse_document, XmlElement};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorXml {
    pub id: u64,
    pub login: String,
    pub email: String,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryXml {
    pub term_id: u64,
    pub nicename: String,
    pub parent: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagXml {
    pub term_id: u64,
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermXml {
    pub term_id: u64,
    pub taxonomy: String,
    pub slug: String,
    pub parent: String,
    pub name: String,
}

/// One `<category>` element of an item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemTermXml {
    pub domain: String,
    pub nicename: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemXml {
    pub title: String,
    pub link: String,
    pub pub_date: String,
    pub creator: String,
    pub guid: String,
    pub description: String,
    pub content: String,
    pub excerpt: String,
    pub post_id: u64,
    pub post_date: String,
    pub post_date_gmt: String,
    pub post_name: String,
    pub status: String,
    pub post_parent: u64,
    pub menu_order: i64,
    pub post_type: String,
    pub is_sticky: bool,
    pub categories: Vec<ItemTermXml>,
    pub attachment_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelXml {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: String,
    pub wxr_version: String,
    pub base_site_url: String,
    pub base_blog_url: String,
    pub authors: Vec<AuthorXml>,
    pub categories: Vec<CategoryXml>,
    pub tags: Vec<TagXml>,
    pub terms: Vec<TermXml>,
    pub items: Vec<ItemXml>,
}

fn text(element: &XmlElement, name: &str) -> String {
    element.child_text(name).trim().to_string()
}

fn number<T: std::str::FromStr + Default>(element: &XmlElement, name: &str) -> T {
    element.child_text(name).trim().parse::<T>().unwrap_or_default()
}

impl AuthorXml {
    fn from_element(e: &XmlElement) -> AuthorXml {
        AuthorXml {
            id: number(e, "wp:author_id"),
            login: text(e, "wp:author_login"),
            email: text(e, "wp:author_email"),
            display_name: text(e, "wp:author_display_name"),
            first_name: text(e, "wp:author_first_name"),
            last_name: text(e, "wp:author_last_name"),
        }
    }
}

impl CategoryXml {
    fn from_element(e: &XmlElement) -> CategoryXml {
        CategoryXml {
            term_id: number(e, "wp:term_id"),
            nicename: text(e, "wp:category_nicename"),
            parent: text(e, "wp:category_parent"),
            name: text(e, "wp:cat_name"),
        }
    }
}

impl TagXml {
    fn from_element(e: &XmlElement) -> TagXml {
        TagXml {
            term_id: number(e, "wp:term_id"),
            slug: text(e, "wp:tag_slug"),
            name: text(e, "wp:tag_name"),
        }
    }
}

impl TermXml {
    fn from_element(e: &XmlElement) -> TermXml {
        TermXml {
            term_id: number(e, "wp:term_id"),
            taxonomy: text(e, "wp:term_taxonomy"),
            slug: text(e, "wp:term_slug"),
            parent: text(e, "wp:term_parent"),
            name: text(e, "wp:term_name"),
        }
    }
}

impl ItemXml {
    fn from_element(e: &XmlElement) -> ItemXml {
        let categories = e
            .children_named("category")
            .map(|c| ItemTermXml {
                domain: c.attribute("domain").unwrap_or_default().to_string(),
                nicename: c.attribute("nicename").unwrap_or_default().to_string(),
                name: c.text.trim().to_string(),
            })
            .collect();

        ItemXml {
            title: text(e, "title"),
            link: text(e, "link"),
            pub_date: text(e, "pubDate"),
            creator: text(e, "dc:creator"),
            guid: text(e, "guid"),
            description: text(e, "description"),
            // Bodies keep their whitespace
            content: e.child_text("content:encoded").to_string(),
            excerpt: e.child_text("excerpt:encoded").to_string(),
            post_id: number(e, "wp:post_id"),
            post_date: text(e, "wp:post_date"),
            post_date_gmt: text(e, "wp:post_date_gmt"),
            post_name: text(e, "wp:post_name"),
            status: text(e, "wp:status"),
            post_parent: number(e, "wp:post_parent"),
            menu_order: number(e, "wp:menu_order"),
            post_type: text(e, "wp:post_type"),
            is_sticky: number::<u8>(e, "wp:is_sticky") != 0,
            categories,
            attachment_url: e.child("wp:attachment_url").map(|a| a.text.trim().to_string()),
        }
    }
}

impl ChannelXml {
    fn from_element(channel: &XmlElement) -> ChannelXml {
        ChannelXml {
            title: text(channel, "title"),
            link: text(channel, "link"),
            description: text(channel, "description"),
            language: text(channel, "language"),
            wxr_version: text(channel, "wp:wxr_version"),
            base_site_url: text(channel, "wp:base_site_url"),
            base_blog_url: text(channel, "wp:base_blog_url"),
            authors: channel.children_named("wp:author").map(AuthorXml::from_element).collect(),
            categories: channel.children_named("wp:category").map(CategoryXml::from_element).collect(),
            tags: channel.children_named("wp:tag").map(TagXml::from_element).collect(),
            terms: channel.children_named("wp:term").map(TermXml::from_element).collect(),
            items: channel.children_named("item").map(ItemXml::from_element).collect(),
        }
    }
}

/// Parses a WXR export into its channel record
pub fn parse_export(xml: &str) -> Result<ChannelXml> {
    let document = parse_document(xml)?;
    let channel = document
        .child("rss")
        .and_then(|rss| rss.child("channel"))
        .ok_or_else(|| ConvertError::Parse("missing rss/channel element".to_string()))?;

    Ok(ChannelXml::from_element(channel))
}

#[cfg(test)]
mod tests {
    use crate::test_data::EXPORT_DATA;

    use super::*;

    #[test]
    fn test_parse_channel() {
        let channel = parse_export(EXPORT_DATA).unwrap();
        assert_eq!(channel.title, "Coffee Notes");
        assert_eq!(channel.base_site_url, "https://coffee.example.com");
        assert_eq!(channel.wxr_version, "1.2");
        assert_eq!(channel.authors.len(), 2);
        assert_eq!(channel.authors[0].login, "jdoe");
        assert_eq!(channel.authors[0].display_name, "Jane Doe");
        assert_eq!(channel.categories[0].nicename, "news");
        assert_eq!(channel.categories[1].parent, "news");
        assert_eq!(channel.tags[0].slug, "rust");
        assert_eq!(channel.terms[0].taxonomy, "nav_menu");
        assert_eq!(channel.items.len(), 6);
    }

    #[test]
    fn test_parse_item() {
        let channel = parse_export(EXPORT_DATA).unwrap();
        let item = &channel.items[0];
        assert_eq!(item.post_id, 1);
        assert_eq!(item.post_type, "post");
        assert_eq!(item.creator, "jdoe");
        assert_eq!(item.status, "publish");
        assert_eq!(item.categories.len(), 2);
        assert_eq!(item.categories[0].domain, "category");
        assert_eq!(item.categories[0].name, "News");
        assert_eq!(item.categories[1].nicename, "rust");
        assert!(item.content.contains("<!--more-->"));

        let attachment = channel.items.iter().find(|i| i.post_type == "attachment").unwrap();
        assert_eq!(attachment.post_parent, 1);
        assert!(attachment.attachment_url.is_some());
    }

    #[test]
    fn test_missing_channel() {
        let res = parse_export("<rss><nothing/></rss>");
        assert!(matches!(res, Err(ConvertError::Parse(_))));
    }

    #[test]
    fn test_not_xml() {
        let res = parse_export("<rss><channel><item></channel></rss>");
        assert!(matches!(res, Err(ConvertError::Parse(_))));
    }
}
