mod corpus;
mod flashcards;
mod headings;
mod mcq;
mod rng;
mod sentence;
mod topics;
mod vocab;

pub use corpus::{Corpus, Difficulty, Flashcard, Mcq, Topic, DEFAULT_SUBJECT, DEFAULT_TOPIC};
pub use headings::Heading;
pub use rng::{SeededRng, DEFAULT_SEED};
pub use sentence::sentences;
pub use vocab::Vocabulary;

use crate::extract::Document;

/// Runs the full generation pipeline over an extracted document: heading
/// detection in ascending page order, topic segmentation, then per-topic
/// summary, MCQ and flashcard synthesis. A fresh random source is seeded at
/// the start of every run, so identical input text always yields an
/// identical corpus. A document with no detected headings yields a corpus
/// with zero topics.
pub fn generate_corpus(document: &Document, vocabulary: &Vocabulary) -> Corpus {
    let mut rng = SeededRng::new(DEFAULT_SEED);

    let mut detected = Vec::new();
    for (page, text) in &document.pages {
        headings::detect_headings(text, *page, &vocabulary.headings, &mut detected);
    }

    let segments = topics::segment_topics(&detected, &document.pages, document.page_count);

    let topics = segments
        .iter()
        .enumerate()
        .map(|(index, segment)| Topic {
            id: format!("topic_{}", index + 1),
            title: segment.title.clone(),
            page_range: format!("{}-{}", segment.start, segment.end),
            summary: topics::summarize(&segment.text),
            mcqs: mcq::generate_mcqs(&segment.text, segment.start, vocabulary, &mut rng),
            flashcards: flashcards::generate_flashcards(&segment.text, segment.start, vocabulary),
        })
        .collect();

    Corpus {
        subject: DEFAULT_SUBJECT.to_string(),
        topic: DEFAULT_TOPIC.to_string(),
        source_file: document.filename.clone(),
        topics,
    }
}
