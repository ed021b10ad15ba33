use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use walkdir::WalkDir;

use super::paths::GuidePaths;
use crate::error::{GuideError, Result};

lazy_static! {
    static ref SECTION_TAG_RE: Regex = Regex::new(r"(?i)<(/?)section\b([^>]*)>").unwrap();
    static ref ID_ATTR_RE: Regex =
        Regex::new(r#"(?i)(?:^|\s)id\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap();
    static ref HEADING_RE: Regex = Regex::new(r"(?is)<h[23]\b[^>]*>(.*?)</h[23]>").unwrap();
    static ref NON_TEXT_RE: Regex =
        Regex::new(r"(?is)<script\b.*?</script>|<style\b.*?</style>|<!--.*?-->").unwrap();
    static ref TAG_RE: Regex = Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9]*)?[^>]*>").unwrap();
}

/// Tags that break a line when rendered; everything else is inline
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "caption", "dd", "details", "div", "dl",
    "dt", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hr", "li", "main", "nav", "ol", "p", "pre", "section", "summary", "table", "tbody", "td",
    "tfoot", "th", "thead", "tr", "ul",
];

/// A titled block of page content, as rendered in the guide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub body: String,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
        }
    }

    fn from_markup(attrs: &str, inner: &str) -> Self {
        let id = ID_ATTR_RE
            .captures(attrs)
            .and_then(|c| c.get(1).or_else(|| c.get(2)))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();

        let title = HEADING_RE
            .captures(inner)
            .map(|c| text_content(&c[1]))
            .unwrap_or_default();

        Self {
            id,
            title,
            body: text_content(inner),
        }
    }
}

/// An opened `<section>` waiting for its closing tag
struct OpenSection<'a> {
    attrs: &'a str,
    inner_start: usize,
    slot: usize,
}

/// Pull every `<section>` block out of a rendered page, in document order.
///
/// Nested sections each get their own entry, and a parent's body includes the
/// text of its children. A section left unclosed runs to the end of the page.
/// Sections without an `id` or heading are still returned with empty fields;
/// deciding what is searchable is left to the index builder.
pub fn extract_sections(html: &str) -> Vec<Section> {
    let mut slots: Vec<Option<Section>> = Vec::new();
    let mut open: Vec<OpenSection<'_>> = Vec::new();

    for caps in SECTION_TAG_RE.captures_iter(html) {
        let (Some(tag), Some(attrs)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        let closing = caps.get(1).map(|m| !m.as_str().is_empty()).unwrap_or(false);

        if closing {
            // stray closing tags without an open section are ignored
            if let Some(section) = open.pop() {
                let inner = &html[section.inner_start..tag.start()];
                slots[section.slot] = Some(Section::from_markup(section.attrs, inner));
            }
        } else {
            open.push(OpenSection {
                attrs: attrs.as_str(),
                inner_start: tag.end(),
                slot: slots.len(),
            });
            slots.push(None);
        }
    }

    for section in open.drain(..) {
        let inner = &html[section.inner_start..];
        slots[section.slot] = Some(Section::from_markup(section.attrs, inner));
    }

    slots.into_iter().flatten().collect()
}

/// Text of an HTML fragment with markup removed and whitespace collapsed.
///
/// Inline tags vanish without a trace so `OMEGA<b>MON</b>` stays one word;
/// block-level tags separate the text on either side.
pub fn text_content(fragment: &str) -> String {
    let without_code = NON_TEXT_RE.replace_all(fragment, " ");
    let without_tags = TAG_RE.replace_all(&without_code, |caps: &Captures| {
        let name = caps.get(2).map(|m| m.as_str().to_ascii_lowercase());
        match name {
            Some(name) if BLOCK_TAGS.contains(&name.as_str()) => " ",
            _ => "",
        }
    });
    let decoded = decode_entities(&without_tags);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Read the main page plus any extra pages and extract their sections.
///
/// The main page must exist. Extra pages are optional; unreadable ones are
/// logged and skipped.
pub fn collect_sections(paths: &GuidePaths, page_pattern: &str) -> Result<Vec<Section>> {
    if !paths.page.exists() {
        return Err(GuideError::PageNotFound(paths.page.clone()));
    }

    let html = fs::read_to_string(&paths.page)?;
    let mut sections = extract_sections(&html);
    tracing::debug!(page = %paths.page.display(), count = sections.len(), "extracted sections");

    for page in collect_extra_pages(&paths.pages, page_pattern)? {
        match fs::read_to_string(&page) {
            Ok(html) => sections.extend(extract_sections(&html)),
            Err(e) => tracing::warn!(page = %page.display(), error = %e, "skipping unreadable page"),
        }
    }

    Ok(sections)
}

fn collect_extra_pages(dir: &Path, page_pattern: &str) -> Result<Vec<PathBuf>> {
    let pattern = Pattern::new(page_pattern)?;

    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut pages: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.file_name()
                .to_str()
                .map(|name| pattern.matches(name))
                .unwrap_or(false)
        })
        .map(|e| e.into_path())
        .collect();

    pages.sort();
    Ok(pages)
}
