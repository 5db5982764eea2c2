use crate::text_utils::strip_origin;

/// An `<img>` found in a post body
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub url: String,
    pub relative_url: String,
    pub alt: String,
    pub title: String,
    pub markdown: String,
}

impl Image {
    fn from_attributes(attributes: &[(String, String)]) -> Image {
        let attr = |name: &str| attribute(attributes, name);
        let first_non_empty = |a: &str, b: &str| if !a.is_empty() { a.to_string() } else { b.to_string() };

        let url = attr("src").to_string();
        let relative_url = strip_origin(&url);
        let alt = first_non_empty(attr("alt"), attr("title"));
        let title = first_non_empty(attr("title"), attr("alt"));
        let markdown = format!("![{}]({} \"{}\")", alt, relative_url, title.replace('"', ""));

        Image {
            url,
            relative_url,
            alt,
            title,
            markdown,
        }
    }
}

fn attribute<'a>(attributes: &'a [(String, String)], name: &str) -> &'a str {
    attributes
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
        .unwrap_or_default()
}

/// Every `<img ...>` tag of `html`, in document order. This is a plain tag
/// scanner: it accepts markup an HTML parser would repair or reject.
pub fn extract_images(html: &str) -> Vec<Image> {
    let mut images = vec![];
    let mut remaining = html;

    while let Some(start) = remaining.find("<img") {
        let tag = &remaining[start + 4..];
        let Some(end) = tag.find('>') else {
            break;
        };
        // `<img>` has nothing to extract
        if end > 0 {
            let attributes = parse_attributes(&tag[..end]);
            images.push(Image::from_attributes(&attributes));
        }
        remaining = &tag[end + 1..];
    }

    images
}

/// Attribute list of a tag body. Names are lower-cased, the first occurrence
/// of a name wins, values may be double-quoted, single-quoted or bare.
fn parse_attributes(tag: &str) -> Vec<(String, String)> {
    let mut attributes: Vec<(String, String)> = vec![];
    let mut chars = tag.char_indices().peekable();

    loop {
        while let Some(&(_, c)) = chars.peek() {
            if c.is_whitespace() || c == '/' {
                chars.next();
            } else {
                break;
            }
        }

        let Some(&(name_start, _)) = chars.peek() else {
            break;
        };
        let mut name_end = tag.len();
        while let Some(&(i, c)) = chars.peek() {
            if c.is_whitespace() || c == '=' || c == '/' {
                name_end = i;
                break;
            }
            chars.next();
        }
        let name = tag[name_start..name_end].to_ascii_lowercase();

        while let Some(&(_, c)) = chars.peek() {
            if c.is_whitespace() {
                chars.next();
            } else {
                break;
            }
        }

        let mut value = String::new();
        if let Some(&(_, '=')) = chars.peek() {
            chars.next();
            while let Some(&(_, c)) = chars.peek() {
                if c.is_whitespace() {
                    chars.next();
                } else {
                    break;
                }
            }
            match chars.peek().copied() {
                Some((start, quote)) if quote == '"' || quote == '\'' => {
                    chars.next();
                    let mut end = tag.len();
                    for (i, c) in chars.by_ref() {
                        if c == quote {
                            end = i;
                            break;
                        }
                    }
                    value = tag[start + 1..end].to_string();
                }
                Some((start, _)) => {
                    let mut end = tag.len();
                    while let Some(&(i, c)) = chars.peek() {
                        if c.is_whitespace() {
                            end = i;
                            break;
                        }
                        chars.next();
                    }
                    value = tag[start..end].to_string();
                }
                None => {}
            }
        }

        if !name.is_empty() && !attributes.iter().any(|(k, _)| *k == name) {
            attributes.push((name, decode_entities(&value)));
        }
    }

    attributes
}

fn decode_entities(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
