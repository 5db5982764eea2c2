use lazy_static::lazy_static;
use regex::{Captures, Regex};
use scraper::{ElementRef, Html, Node};

lazy_static! {
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
    static ref HARD_BREAK_REGEX: Regex = Regex::new(r" {2}\n[ \t]+").unwrap();
    static ref NEWLINES_REGEX: Regex = Regex::new(r"\n\s*\n").unwrap();
    static ref BLANK_LINES_REGEX: Regex = Regex::new(r"\n{3,}").unwrap();
    // Anything between the destination and the closing parenthesis goes away
    static ref REFERENCE_REGEX: Regex = Regex::new(r"(!?\[[^\]]*\]\([^\s)]+)[^)]*\)").unwrap();
    static ref CODE_BLOCK_REGEX: Regex = Regex::new("\u{E000}(\\d+)\u{E001}").unwrap();
    static ref INLINE_ESCAPE_REGEX: Regex = Regex::new(r"[\\*_`]").unwrap();
    // Shortcodes such as [gallery ids="1,2"] are kept, lone brackets are escaped
    static ref BRACKET_REGEX: Regex = Regex::new(r"\[/?[A-Za-z][\w-]*(?:\s[^\[\]]*)?\]|\[").unwrap();
    static ref LINK_CLOSE_REGEX: Regex = Regex::new(r"\]\(").unwrap();
    static ref HEADING_ESCAPE_REGEX: Regex = Regex::new(r"^(\s*)(#{1,6}(?:\s|$))").unwrap();
    static ref BLOCK_ESCAPE_REGEX: Regex = Regex::new(r"^(\s*)([-+>=])").unwrap();
    static ref ORDERED_ESCAPE_REGEX: Regex = Regex::new(r"^(\s*)(\d+)\.(\s|$)").unwrap();
}

/// Converts an HTML fragment to Markdown. Unknown elements keep their text,
/// comments (including `<!--more-->`) are dropped.
pub fn html_to_markdown(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut writer = MarkdownWriter::default();
    let markdown = writer.render_children(fragment.root_element());
    let markdown = normalize(&markdown);
    let markdown = fix_references(&markdown);
    writer.restore_code_blocks(&markdown)
}

/// Keeps only the destination of image and link references
pub fn fix_references(markdown: &str) -> String {
    REFERENCE_REGEX.replace_all(markdown, "${1})").to_string()
}

/// Backslash-escapes text that Markdown would otherwise read as syntax
pub fn escape_text(text: &str) -> String {
    let text = INLINE_ESCAPE_REGEX.replace_all(text, "\\$0");
    let text = BRACKET_REGEX.replace_all(&text, |caps: &Captures| {
        if &caps[0] == "[" {
            "\\[".to_string()
        } else {
            caps[0].to_string()
        }
    });
    let text = LINK_CLOSE_REGEX.replace_all(&text, "\\](");
    let text = HEADING_ESCAPE_REGEX.replace(&text, "${1}\\${2}");
    let text = BLOCK_ESCAPE_REGEX.replace(&text, "${1}\\${2}");
    ORDERED_ESCAPE_REGEX.replace(&text, "${1}${2}\\.${3}").to_string()
}

/// Appends without doubling the space between adjacent inline pieces
fn push_inline(buf: &mut String, piece: &str) {
    if buf.ends_with(' ') && piece.starts_with(' ') {
        buf.push_str(&piece[1..]);
    } else {
        buf.push_str(piece);
    }
}

/// Fenced code is kept aside behind a placeholder so that whitespace
/// clean-ups never touch it.
#[derive(Default)]
struct MarkdownWriter {
    code_blocks: Vec<String>,
}

impl MarkdownWriter {
    fn render_children(&mut self, element: ElementRef) -> String {
        let mut buf = String::new();
        for child in element.children() {
            match child.value() {
                Node::Text(text) => {
                    let text = WHITESPACE_REGEX.replace_all(text, " ");
                    push_inline(&mut buf, &escape_text(&text));
                }
                Node::Element(_) => {
                    if let Some(child) = ElementRef::wrap(child) {
                        let piece = self.render_element(child);
                        push_inline(&mut buf, &piece);
                    }
                }
                _ => {}
            }
        }
        buf
    }

    fn render_element(&mut self, element: ElementRef) -> String {
        let name = element.value().name();
        match name {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = name[1..].parse::<usize>().unwrap_or(1);
                let text = self.block_content(element);
                if text.is_empty() {
                    return String::new();
                }
                format!("\n\n{} {}\n\n", "#".repeat(level), text.replace('\n', " "))
            }
            "p" | "div" | "section" | "article" | "header" | "footer" | "main" | "aside" | "figure"
            | "figcaption" | "table" | "dl" | "dd" | "dt" => {
                format!("\n\n{}\n\n", self.block_content(element))
            }
            "tr" => format!("\n{}\n", self.block_content(element)),
            "td" | "th" => format!("{} ", self.render_children(element).trim()),
            "br" => "  \n".to_string(),
            "hr" => "\n\n---\n\n".to_string(),
            "strong" | "b" => wrap_inline(&self.render_children(element), "**"),
            "em" | "i" => wrap_inline(&self.render_children(element), "_"),
            "code" => {
                let code: String = element.text().collect();
                if code.is_empty() {
                    String::new()
                } else {
                    format!("`{}`", code)
                }
            }
            "pre" => {
                let code: String = element.text().collect();
                self.code_blocks.push(format!("```\n{}\n```", code.trim_end_matches('\n')));
                format!("\n\n\u{E000}{}\u{E001}\n\n", self.code_blocks.len() - 1)
            }
            "a" => self.render_link(element),
            "img" => render_image(element),
            "ul" | "ol" => self.render_list(element, name == "ol"),
            "blockquote" => {
                let quoted = self
                    .block_content(element)
                    .lines()
                    .map(|line| if line.is_empty() { ">".to_string() } else { format!("> {}", line) })
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("\n\n{}\n\n", quoted)
            }
            "script" | "style" | "noscript" | "head" | "title" => String::new(),
            _ => self.render_children(element),
        }
    }

    /// Inline content of a block element, trimmed, with line breaks tidied up
    fn block_content(&mut self, element: ElementRef) -> String {
        let content = self.render_children(element);
        let content = HARD_BREAK_REGEX.replace_all(&content, "  \n");
        normalize(&content)
    }

    fn render_link(&mut self, element: ElementRef) -> String {
        let content = self.render_children(element);
        let Some(href) = element.value().attr("href") else {
            return content;
        };
        let text = content.trim();
        match element.value().attr("title") {
            Some(title) if !title.is_empty() => format!("[{}]({} \"{}\")", text, href, title.replace('"', "")),
            _ => format!("[{}]({})", text, href),
        }
    }

    fn render_list(&mut self, element: ElementRef, ordered: bool) -> String {
        let start = element
            .value()
            .attr("start")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(1);

        let items: Vec<ElementRef> = element
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|child| child.value().name() == "li")
            .collect();

        let mut lines = Vec::with_capacity(items.len());
        for (idx, item) in items.into_iter().enumerate() {
            let marker = if ordered { format!("{}. ", start + idx) } else { "- ".to_string() };
            let content = self.block_content(item);
            let content = NEWLINES_REGEX.replace_all(&content, "\n");
            let indent = " ".repeat(marker.len());
            let body = content
                .lines()
                .enumerate()
                .map(|(n, line)| if n == 0 { line.to_string() } else { format!("{}{}", indent, line) })
                .collect::<Vec<_>>()
                .join("\n");
            lines.push(format!("{}{}", marker, body));
        }

        format!("\n\n{}\n\n", lines.join("\n"))
    }

    /// Puts the code blocks back, repeating the placeholder's line prefix
    /// (list indentation, quote markers) on every code line
    fn restore_code_blocks(&self, markdown: &str) -> String {
        let mut out = String::with_capacity(markdown.len());
        let mut last = 0;
        for caps in CODE_BLOCK_REGEX.captures_iter(markdown) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let block = caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|idx| self.code_blocks.get(idx));
            let Some(block) = block else {
                continue;
            };

            out.push_str(&markdown[last..whole.start()]);
            let line_start = markdown[..whole.start()].rfind('\n').map(|i| i + 1).unwrap_or(0);
            let prefix = &markdown[line_start..whole.start()];
            let prefix = if prefix.chars().all(|c| c == ' ' || c == '>') { prefix } else { "" };

            for (n, line) in block.split('\n').enumerate() {
                if n > 0 {
                    out.push('\n');
                    out.push_str(if line.is_empty() { prefix.trim_end() } else { prefix });
                }
                out.push_str(line);
            }
            last = whole.end();
        }
        out.push_str(&markdown[last..]);
        out
    }
}

fn wrap_inline(content: &str, delimiter: &str) -> String {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return content.to_string();
    }
    let leading = if content.starts_with(char::is_whitespace) { " " } else { "" };
    let trailing = if content.ends_with(char::is_whitespace) { " " } else { "" };
    format!("{}{}{}{}{}", leading, delimiter, trimmed, delimiter, trailing)
}

fn render_image(element: ElementRef) -> String {
    let src = element.value().attr("src").unwrap_or_default();
    if src.is_empty() {
        return String::new();
    }
    let alt = element.value().attr("alt").unwrap_or_default();
    match element.value().attr("title") {
        Some(title) if !title.is_empty() => format!("![{}]({} \"{}\")", alt, src, title.replace('"', "")),
        _ => format!("![{}]({})", alt, src),
    }
}

/// Trims trailing whitespace (hard breaks survive), collapses blank lines
fn normalize(text: &str) -> String {
    let lines: Vec<String> = text
        .split('\n')
        .map(|line| {
            let trimmed = line.trim_end();
            if line.len() - trimmed.len() >= 2 && !trimmed.is_empty() {
                format!("{}  ", trimmed)
            } else {
                trimmed.to_string()
            }
        })
        .collect();
    let joined = lines.join("\n");
    let collapsed = BLANK_LINES_REGEX.replace_all(&joined, "\n\n");
    let collapsed = collapsed.trim_matches('\n');
    // A hard break at the very end of a block means nothing
    let collapsed = collapsed.trim_end();
    collapsed.trim_start_matches(' ').to_string()
}
