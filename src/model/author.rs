use crate::export::AuthorXml;

#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: u64,
    pub username: String,
    pub display_name: String,
}

impl Author {
    /// Display name, or the username when the export has none
    pub fn name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.username
        } else {
            &self.display_name
        }
    }
}

impl From<&AuthorXml> for Author {
    fn from(xml: &AuthorXml) -> Self {
        Author {
            id: xml.id,
            username: xml.login.clone(),
            display_name: xml.display_name.clone(),
        }
    }
}

/// Case-insensitive username lookup. Only an unambiguous match resolves.
pub fn find_by_username<'a>(authors: &'a [Author], username: &str) -> Result<&'a Author, usize> {
    let search = username.trim().to_lowercase();
    let matches: Vec<&Author> = authors
        .iter()
        .filter(|a| a.username.to_lowercase() == search)
        .collect();

    match matches.as_slice() {
        [author] => Ok(*author),
        _ => Err(matches.len()),
    }
}
