// Document model — what a concept resolves to.
//
// A document is a body of text plus an ordered list of named sections. The
// relation core only reads documents; fetching and parsing them is the
// resolver's job.

/// A named sub-text of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    /// Heading depth (2 for `== Title ==`, 3 for `=== Title ===`, ...)
    pub level: u8,
    /// Text under the heading, up to the next heading of any level. May be empty.
    pub text: String,
}

impl Section {
    pub fn new(title: &str, text: &str) -> Self {
        Self {
            title: title.to_string(),
            level: 2,
            text: text.to_string(),
        }
    }
}

/// A reference document for one concept.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    /// The whole body text, including every section
    pub content: String,
    sections: Vec<Section>,
}

impl Document {
    pub fn new(title: &str, content: &str, sections: Vec<Section>) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
            sections,
        }
    }

    /// Build a document whose body is the concatenation of its sections.
    pub fn from_sections(title: &str, sections: Vec<Section>) -> Self {
        let content = sections
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Self::new(title, &content, sections)
    }

    /// Sections in document order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_titles(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.title.as_str())
    }

    /// Text of the first section with the given title, if there is one.
    pub fn section(&self, title: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.title == title)
            .map(|s| s.text.as_str())
    }
}
