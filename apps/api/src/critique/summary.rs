//! Summary parser: turns a free-form critique response into strengths, weaknesses and
//! recommendations.
//!
//! Two bullet conventions are understood:
//! - **separated**: items delimited by the `[SEP]` token (what the critique prompt asks for);
//! - **line-marked**: one item per line, each starting with `-` or `•` (older stored responses).
//!
//! Parsing never fails. Text with no recognizable structure yields an empty summary.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::llm_client::prompts::ITEM_SEPARATOR;

/// `Strengths:` / `Weaknesses:` / `Recommendations:`, any case, optionally behind a markdown
/// heading marker and/or wrapped in `**bold**`.
static SECTION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:#{1,6}[ \t]*)?(?:\*\*)?\b(strengths|weaknesses|recommendations)(?:\*\*)?[ \t]*:(?:\*\*)?",
    )
    .expect("section header pattern is a valid regex")
});

const LINE_MARKERS: [char; 2] = ['-', '•'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Strengths,
    Weaknesses,
    Recommendations,
}

impl Section {
    fn from_header(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "strengths" => Some(Section::Strengths),
            "weaknesses" => Some(Section::Weaknesses),
            "recommendations" => Some(Section::Recommendations),
            _ => None,
        }
    }

    fn heading(self) -> &'static str {
        match self {
            Section::Strengths => "Strengths",
            Section::Weaknesses => "Weaknesses",
            Section::Recommendations => "Recommendations",
        }
    }
}

/// The three labeled lists extracted from one critique.
/// Items are trimmed and never empty. Repeated headers accumulate into the same list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSummary {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ParsedSummary {
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    pub fn item_count(&self) -> usize {
        self.strengths.len() + self.weaknesses.len() + self.recommendations.len()
    }

    pub fn items(&self, section: Section) -> &[String] {
        match section {
            Section::Strengths => &self.strengths,
            Section::Weaknesses => &self.weaknesses,
            Section::Recommendations => &self.recommendations,
        }
    }

    fn push(&mut self, section: Section, item: String) {
        match section {
            Section::Strengths => self.strengths.push(item),
            Section::Weaknesses => self.weaknesses.push(item),
            Section::Recommendations => self.recommendations.push(item),
        }
    }
}

/// Renders the summary in the separated convention, one section per line.
impl fmt::Display for ParsedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections = [
            Section::Strengths,
            Section::Weaknesses,
            Section::Recommendations,
        ];
        for (i, section) in sections.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{}: {}",
                section.heading(),
                self.items(section).join(ITEM_SEPARATOR)
            )?;
        }
        Ok(())
    }
}

/// Parses a critique response.
///
/// The convention is chosen per section. The separated convention is primary; a section
/// is read line-marked only when it has no `[SEP]`, nothing follows its header on the
/// header line, and every non-blank line of its body starts with a marker.
pub fn parse_summary(text: &str) -> ParsedSummary {
    let sections = split_sections(text);
    if sections.is_empty() {
        debug!("No section headers found in {} bytes of analysis text", text.len());
        return ParsedSummary::default();
    }

    let line_marked = sections
        .iter()
        .filter(|(_, body)| is_line_marked(body))
        .count();
    if line_marked > 0 {
        debug!(
            sections = sections.len(),
            line_marked, "Parsed analysis text with line-marker bullets"
        );
    }

    collect(&sections, |body| {
        if is_line_marked(body) {
            line_marked_items(body)
        } else {
            separated_items(body)
        }
    })
}

/// Parses using only the `[SEP]` convention.
pub fn parse_separated(text: &str) -> ParsedSummary {
    collect(&split_sections(text), separated_items)
}

/// Parses using only the `-` / `•` line-marker convention.
pub fn parse_line_marked(text: &str) -> ParsedSummary {
    collect(&split_sections(text), line_marked_items)
}

/// Pairs every header with the text between it and the next header.
/// Anything before the first header is dropped.
fn split_sections(text: &str) -> Vec<(Section, &str)> {
    let headers: Vec<(Section, usize, usize)> = SECTION_HEADER
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let section = Section::from_header(caps.get(1)?.as_str())?;
            Some((section, whole.start(), whole.end()))
        })
        .collect();

    headers
        .iter()
        .enumerate()
        .map(|(i, &(section, _, body_start))| {
            let body_end = headers.get(i + 1).map_or(text.len(), |next| next.1);
            (section, &text[body_start..body_end])
        })
        .collect()
}

fn collect<F>(sections: &[(Section, &str)], items_of: F) -> ParsedSummary
where
    F: Fn(&str) -> Vec<String>,
{
    let mut summary = ParsedSummary::default();
    for &(section, body) in sections {
        for item in items_of(body) {
            summary.push(section, item);
        }
    }
    summary
}

fn separated_items(body: &str) -> Vec<String> {
    body.split(ITEM_SEPARATOR).filter_map(clean_item).collect()
}

fn is_line_marked(body: &str) -> bool {
    if body.contains(ITEM_SEPARATOR) {
        return false;
    }
    let mut lines = body.lines();
    if lines.next().is_some_and(|rest| !rest.trim().is_empty()) {
        return false;
    }
    let mut marked = lines.map(str::trim).filter(|line| !line.is_empty()).peekable();
    marked.peek().is_some() && marked.all(|line| line.starts_with(&LINE_MARKERS[..]))
}

fn line_marked_items(body: &str) -> Vec<String> {
    body.lines()
        .filter_map(|line| line.trim().strip_prefix(&LINE_MARKERS[..]))
        .filter_map(clean_item)
        .collect()
}

/// Trims a piece and removes one enclosing `[...]` pair.
fn clean_item(piece: &str) -> Option<String> {
    let piece = piece.trim();
    let piece = piece
        .strip_prefix('[')
        .and_then(|p| p.strip_suffix(']'))
        .unwrap_or(piece)
        .trim();
    (!piece.is_empty()).then(|| piece.to_string())
}
