use crate::export::{CategoryXml, TagXml, TermXml};

/// A taxonomy entry that item terms can be matched against
pub trait Term {
    fn slug(&self) -> &str;
    fn name(&self) -> &str;

    fn matches(&self, search: &str) -> bool {
        self.name().to_lowercase() == search || self.slug().to_lowercase() == search
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: u64,
    pub slug: String,
    pub name: String,
    pub parent: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: u64,
    pub slug: String,
    pub name: String,
}

/// Any other `wp:term` of the export, e.g. navigation menus
#[derive(Debug, Clone, PartialEq)]
pub struct TaxonomyTerm {
    pub id: u64,
    pub taxonomy: String,
    pub slug: String,
    pub parent: String,
    pub name: String,
}

impl Term for Category {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Term for Tag {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl From<&CategoryXml> for Category {
    fn from(xml: &CategoryXml) -> Self {
        Category {
            id: xml.term_id,
            slug: xml.nicename.clone(),
            name: xml.name.clone(),
            parent: xml.parent.clone(),
        }
    }
}

impl From<&TagXml> for Tag {
    fn from(xml: &TagXml) -> Self {
        Tag {
            id: xml.term_id,
            slug: xml.slug.clone(),
            name: xml.name.clone(),
        }
    }
}

impl From<&TermXml> for TaxonomyTerm {
    fn from(xml: &TermXml) -> Self {
        TaxonomyTerm {
            id: xml.term_id,
            taxonomy: xml.taxonomy.clone(),
            slug: xml.slug.clone(),
            parent: xml.parent.clone(),
            name: xml.name.clone(),
        }
    }
}

/// First entry of `list` matching each raw term by name or slug. Terms
/// without a match are dropped.
pub fn match_terms<T: Term + Clone, S: AsRef<str>>(list: &[T], terms: &[S]) -> Vec<T> {
    terms
        .iter()
        .filter_map(|term| {
            let search = term.as_ref().trim().to_lowercase();
            list.iter().find(|t| t.matches(&search)).cloned()
        })
        .collect()
}
