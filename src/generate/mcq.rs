use super::corpus::{Difficulty, Mcq};
use super::rng::SeededRng;
use super::sentence::sentences;
use super::vocab::Vocabulary;

const MAX_MCQS_PER_TOPIC: usize = 6;
const MIN_SENTENCE_LEN: usize = 20;
const MAX_SENTENCE_LEN: usize = 150;
const HARD_SENTENCE_LEN: usize = 80;
const QUOTE_LEN: usize = 20;
const MCQ_CONFIDENCE: f32 = 0.8;

const DISTRACTOR_COUNT: usize = 3;
const DISTRACTOR_ATTEMPTS: usize = 20;
const DISTRACTOR_PHRASE_WORDS: usize = 5;
const FALLBACK_DISTRACTORS: [&str; 3] = [
    "None of the above",
    "All of the above",
    "Information insufficient",
];

/// Extracts up to 6 MCQs from a topic's text. Each qualifying sentence is
/// split on the first anchor keyword that occurs exactly once, part one
/// becoming the question stem and part two the correct answer. Candidates
/// whose distractors collide with the correct answer are dropped rather
/// than emitted with fewer than 4 distinct options.
pub fn generate_mcqs(
    text: &str,
    start_page: usize,
    vocabulary: &Vocabulary,
    rng: &mut SeededRng,
) -> Vec<Mcq> {
    let mut mcqs = Vec::new();

    for sentence in sentences(text) {
        if mcqs.len() >= MAX_MCQS_PER_TOPIC {
            break;
        }

        let len = sentence.chars().count();
        if len <= MIN_SENTENCE_LEN || len >= MAX_SENTENCE_LEN {
            continue;
        }

        let Some((anchor, stem, correct)) = split_on_anchor(sentence, &vocabulary.anchors) else {
            continue;
        };

        let distractors = synthesize_distractors(correct, text, rng);
        if distractors.iter().any(|d| d == correct) {
            continue;
        }

        let mut options = vec![correct.to_string()];
        options.extend(distractors);
        rng.shuffle(&mut options);
        let answer_index = options
            .iter()
            .position(|option| option == correct)
            .unwrap_or_default();

        let difficulty = if len > HARD_SENTENCE_LEN {
            Difficulty::Hard
        } else {
            Difficulty::Medium
        };

        let mut source_quote: String = sentence.chars().take(QUOTE_LEN).collect();
        source_quote.push_str("...");

        mcqs.push(Mcq {
            question: format!("What {} {}?", anchor, stem),
            options,
            answer_index,
            difficulty,
            source_quote,
            source_page: start_page,
            confidence: MCQ_CONFIDENCE,
        });
    }

    mcqs
}

/// First anchor keyword (in priority order) that occurs exactly once in the
/// sentence, with the trimmed parts on either side of it. Keywords that
/// occur zero or multiple times are passed over.
fn split_on_anchor<'a>(sentence: &'a str, anchors: &'a [String]) -> Option<(&'a str, &'a str, &'a str)> {
    for anchor in anchors {
        if !sentence.contains(anchor.as_str()) {
            continue;
        }
        let parts: Vec<&str> = sentence.split(anchor.as_str()).collect();
        if parts.len() == 2 {
            return Some((anchor.as_str(), parts[0].trim(), parts[1].trim()));
        }
    }
    None
}

/// Always returns exactly 3 mutually distinct distractors. Up to 20 draws
/// pick a random sentence, rejecting any that contains the correct answer
/// or has too few words; the candidate phrase is its leading words. Missing
/// slots are padded from the fixed fallback strings, in order.
fn synthesize_distractors(correct: &str, text: &str, rng: &mut SeededRng) -> Vec<String> {
    let pool: Vec<&str> = sentences(text).collect();
    let mut distractors: Vec<String> = Vec::with_capacity(DISTRACTOR_COUNT);

    if !pool.is_empty() {
        let mut attempts = 0;
        while distractors.len() < DISTRACTOR_COUNT && attempts < DISTRACTOR_ATTEMPTS {
            attempts += 1;

            let candidate = pool[rng.pick(pool.len())];
            if candidate.contains(correct) {
                continue;
            }

            let words: Vec<&str> = candidate.split(' ').collect();
            if words.len() <= 3 {
                continue;
            }

            let phrase = words[..words.len().min(DISTRACTOR_PHRASE_WORDS)].join(" ");
            if !distractors.contains(&phrase) {
                distractors.push(phrase);
            }
        }
    }

    for fallback in FALLBACK_DISTRACTORS {
        if distractors.len() >= DISTRACTOR_COUNT {
            break;
        }
        let fallback = fallback.to_string();
        if !distractors.contains(&fallback) {
            distractors.push(fallback);
        }
    }

    distractors
}
