use serde::Serialize;

pub const DEFAULT_SUBJECT: &str = "Generated Subject";
pub const DEFAULT_TOPIC: &str = "Generated Topic";

/// Full study corpus produced by one generation run. Handed to external
/// persistence as structured data; re-generation replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Corpus {
    pub subject: String,
    pub topic: String,
    pub source_file: String,
    pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Topic {
    /// stable id derived from ordinal position, `topic_<n>`
    pub id: String,

    /// detected heading text
    pub title: String,

    /// inclusive page range, `start-end`
    pub page_range: String,

    /// leading sentences of the topic text
    pub summary: String,

    /// at most 6 per topic
    pub mcqs: Vec<Mcq>,

    /// at most 4 per topic
    pub flashcards: Vec<Flashcard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mcq {
    pub question: String,

    /// exactly 4 distinct options, shuffled
    pub options: Vec<String>,

    /// index of the correct option post-shuffle
    pub answer_index: usize,

    pub difficulty: Difficulty,

    /// truncated excerpt of the source sentence
    pub source_quote: String,

    /// starting page of the topic; per-sentence origin is not tracked
    pub source_page: usize,

    /// fixed heuristic weight
    pub confidence: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "hard")]
    Hard,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,

    /// starting page of the topic; per-sentence origin is not tracked
    pub source_page: usize,

    /// fixed heuristic weight
    pub confidence: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Difficulty::Medium).unwrap(), "\"medium\"");
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
    }
}
