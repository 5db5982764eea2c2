use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{ConvertError, Result};
use crate::model::PostKind;

pub const DEFAULT_POST_TEMPLATE: &str = r##"---
title: "{{{title}}}"
slug: "{{{slug}}}"
date: "{{year}}-{{monthZeroPadded}}-{{dayZeroPadded}}T00:00:00.000Z"
template: "post"
draft: false
author: {{{author}}}
category: "{{{category}}}"
tags: {{{tags}}}
description: "{{{description}}}"
socialImage: "{{{firstImage}}}"
---

{{{markdown}}}
"##;

pub const DEFAULT_PAGE_TEMPLATE: &str = r##"---
title: "{{{title}}}"
template: "page"
socialImage: {{{firstImage}}}
---

{{{markdown}}}
"##;

/// `wp:status` values of an item
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Publish,
    Draft,
    Pending,
    Private,
    Future,
    Inherit,
    Trash,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Publish => "publish",
            ItemStatus::Draft => "draft",
            ItemStatus::Pending => "pending",
            ItemStatus::Private => "private",
            ItemStatus::Future => "future",
            ItemStatus::Inherit => "inherit",
            ItemStatus::Trash => "trash",
        }
    }
}

impl FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "publish" => Ok(ItemStatus::Publish),
            "draft" => Ok(ItemStatus::Draft),
            "pending" => Ok(ItemStatus::Pending),
            "private" => Ok(ItemStatus::Private),
            "future" => Ok(ItemStatus::Future),
            "inherit" => Ok(ItemStatus::Inherit),
            "trash" => Ok(ItemStatus::Trash),
            other => Err(format!("Unknown item status: {}", other)),
        }
    }
}

impl Display for ItemStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How multi-valued fields (categories, tags) are written into templates
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListOption {
    #[serde(rename = "markdown")]
    Markdown,
    #[default]
    #[serde(rename = "commaSeparated")]
    CommaSeparated,
}

impl ListOption {
    pub fn format<S: AsRef<str>>(&self, items: &[S]) -> String {
        if items.is_empty() {
            return String::new();
        }

        let items: Vec<&str> = items.iter().map(|s| s.as_ref()).collect();
        match self {
            ListOption::Markdown => format!("\n  - {}", items.join("\n  - ")),
            ListOption::CommaSeparated => items.join(", "),
        }
    }
}

fn default_statuses() -> Vec<ItemStatus> {
    vec![ItemStatus::Publish]
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PostOptions {
    pub path: Option<String>,
    pub filename: String,
    pub template: String,
    #[serde(default = "default_statuses")]
    pub statuses: Vec<ItemStatus>,
}

impl PostOptions {
    pub fn default_posts() -> PostOptions {
        PostOptions {
            path: Some("posts".to_string()),
            filename: "{{slug}}.md".to_string(),
            template: DEFAULT_POST_TEMPLATE.to_string(),
            statuses: default_statuses(),
        }
    }

    pub fn default_pages() -> PostOptions {
        PostOptions {
            path: Some("pages".to_string()),
            filename: "{{slug}}.md".to_string(),
            template: DEFAULT_PAGE_TEMPLATE.to_string(),
            statuses: default_statuses(),
        }
    }

    /// Unknown statuses never match
    pub fn accepts(&self, status: &str) -> bool {
        match status.parse::<ItemStatus>() {
            Ok(status) => self.statuses.contains(&status),
            Err(_) => false,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ConversionOptions {
    pub posts: Option<PostOptions>,
    pub pages: Option<PostOptions>,
    #[serde(default)]
    pub list_option: ListOption,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        ConversionOptions {
            posts: Some(PostOptions::default_posts()),
            pages: None,
            list_option: ListOption::default(),
        }
    }
}

impl ConversionOptions {
    pub fn for_kind(&self, kind: PostKind) -> Option<&PostOptions> {
        match kind {
            PostKind::Post => self.posts.as_ref(),
            PostKind::Page => self.pages.as_ref(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Copy, Clone)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub options: ConversionOptions,
    pub log: Option<Log>,
}

pub fn parse_config(cfg_content: &str) -> Result<Config> {
    toml::from_str::<Config>(cfg_content)
        .map_err(|e| ConvertError::Config(format!("Error parsing configuration file: {}", e)))
}

pub fn read_config(cfg_path: &Path) -> Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => {
            return Err(ConvertError::Config(format!(
                "Error opening configuration file {}: {}",
                cfg_path.display(),
                e
            )))
        }
    };

    parse_config(&cfg_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_option_format() {
        let categories = ["A", "B"];
        assert_eq!(ListOption::CommaSeparated.format(&categories), "A, B");
        assert_eq!(ListOption::Markdown.format(&categories), "\n  - A\n  - B");

        let empty: [&str; 0] = [];
        assert_eq!(ListOption::CommaSeparated.format(&empty), "");
        assert_eq!(ListOption::Markdown.format(&empty), "");
    }

    #[test]
    fn test_parse_config() {
        let cfg = parse_config(r##"
[options]
list_option = "markdown"

[options.posts]
path = "content/{{year}}"
filename = "{{slug}}.md"
template = "{{{markdown}}}"
statuses = ["publish", "draft"]

[options.pages]
filename = "{{slug}}.md"
template = "{{{markdown}}}"

[log]
level = "Debug"
log_to_console = true
"##).unwrap();

        assert_eq!(cfg.options.list_option, ListOption::Markdown);
        let posts = cfg.options.for_kind(PostKind::Post).unwrap();
        assert_eq!(posts.path.as_deref(), Some("content/{{year}}"));
        assert_eq!(posts.statuses, [ItemStatus::Publish, ItemStatus::Draft]);
        let pages = cfg.options.for_kind(PostKind::Page).unwrap();
        assert!(pages.path.is_none());
        assert_eq!(pages.statuses, [ItemStatus::Publish]);
        assert!(cfg.log.unwrap().log_to_console);
    }

    #[test]
    fn test_default_config() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.options, ConversionOptions::default());
        assert_eq!(cfg.options.list_option, ListOption::CommaSeparated);
        assert!(cfg.options.for_kind(PostKind::Page).is_none());
        assert!(cfg.log.is_none());
    }

    #[test]
    fn test_bad_config() {
        let res = parse_config("[options]\nlist_option = \"bullets\"");
        assert!(matches!(res, Err(ConvertError::Config(_))));
    }

    #[test]
    fn test_accepts_status() {
        let options = PostOptions::default_posts();
        assert!(options.accepts("publish"));
        assert!(!options.accepts("draft"));
        assert!(!options.accepts("auto-draft"));
    }
}
