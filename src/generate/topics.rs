use std::collections::BTreeMap;

use super::headings::Heading;
use super::sentence::sentences;

/// A contiguous page range owned by one heading, with the concatenated text
/// of its pages.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicSegment {
    pub title: String,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Converts the heading sequence into non-overlapping page ranges: each
/// heading owns the pages from its own page up to just before the next
/// heading's page, and the last heading runs to the end of the document.
/// An empty heading sequence produces zero segments.
pub fn segment_topics(
    headings: &[Heading],
    pages: &BTreeMap<usize, String>,
    page_count: usize,
) -> Vec<TopicSegment> {
    headings
        .iter()
        .enumerate()
        .map(|(i, heading)| {
            let start = heading.page;
            let end = headings
                .get(i + 1)
                .map(|next| next.page - 1)
                .unwrap_or(page_count);

            let text = (start..=end)
                .filter_map(|page| pages.get(&page))
                .map(String::as_str)
                .collect::<Vec<&str>>()
                .join(" ");

            TopicSegment {
                title: heading.text.clone(),
                start,
                end,
                text,
            }
        })
        .collect()
}

/// First two sentences of the topic text, joined by a single space. Fewer
/// sentences give a shorter summary; none give an empty string.
pub fn summarize(text: &str) -> String {
    sentences(text).take(2).collect::<Vec<&str>>().join(" ")
}
