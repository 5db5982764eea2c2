pub mod schema;
pub mod xml_tree;

pub use schema::{parse_export, AuthorXml, CategoryXml, ChannelXml, ItemTermXml, ItemXml, TagXml, TermXml};
