// Page parsing — plain-text extracts into sectioned documents.
//
// With `explaintext` and `exsectionformat=wiki`, the TextExtracts API marks
// headings as `== Title ==` lines (more `=` for deeper levels). A section's
// text runs from its heading to the next heading of any depth, so a parent
// section doesn't include its subsections. Text before the first heading is
// the lead; it stays in the document body but isn't a section.

use regex_lite::Regex;
use serde::Deserialize;

use crate::document::{Document, Section};

/// Split an extract into its sections, in order.
pub fn split_sections(extract: &str) -> Vec<Section> {
    let heading = Regex::new(r"^(={2,6})\s*(.*?)\s*={2,6}\s*$").expect("valid heading pattern");

    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<(Section, Vec<&str>)> = None;

    for line in extract.lines() {
        if let Some(caps) = heading.captures(line.trim_end()) {
            if let Some((section, body)) = current.take() {
                sections.push(finish(section, &body));
            }
            let level = caps[1].len() as u8;
            let title = caps[2].to_string();
            current = Some((
                Section {
                    title,
                    level,
                    text: String::new(),
                },
                Vec::new(),
            ));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
    }

    if let Some((section, body)) = current {
        sections.push(finish(section, &body));
    }

    sections
}

fn finish(mut section: Section, body: &[&str]) -> Section {
    section.text = body.join("\n").trim().to_string();
    section
}

/// Build a document from a page title and its plain-text extract.
pub fn document_from_extract(title: &str, extract: &str) -> Document {
    Document::new(title, extract, split_sections(extract))
}

// -- Serde types for action=query responses (formatversion=2) --

#[derive(Debug, Deserialize)]
pub struct QueryResponse<Q> {
    pub query: Option<Q>,
    #[serde(rename = "continue")]
    pub continuation: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
pub struct PagesQuery {
    #[serde(default)]
    pub pages: Vec<PageRecord>,
}

/// A single page from `prop=extracts|pageprops` or `prop=links`.
#[derive(Debug, Deserialize)]
pub struct PageRecord {
    pub title: String,
    #[serde(default)]
    pub missing: bool,
    #[serde(default)]
    pub invalid: bool,
    pub extract: Option<String>,
    pub pageprops: Option<PageProps>,
    #[serde(default)]
    pub links: Vec<PageLink>,
}

impl PageRecord {
    pub fn is_disambiguation(&self) -> bool {
        self.pageprops
            .as_ref()
            .is_some_and(|p| p.disambiguation.is_some())
    }
}

#[derive(Debug, Deserialize)]
pub struct PageProps {
    pub disambiguation: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct PageLink {
    pub ns: i64,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub searchinfo: Option<SearchInfo>,
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub struct SearchInfo {
    pub suggestion: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub title: String,
}
