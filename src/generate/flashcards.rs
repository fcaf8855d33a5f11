use super::corpus::Flashcard;
use super::sentence::sentences;
use super::vocab::Vocabulary;

const MAX_FLASHCARDS_PER_TOPIC: usize = 4;
const QUESTION_CONFIDENCE: f32 = 0.9;
const CLOZE_CONFIDENCE: f32 = 0.85;

/// Extracts up to 4 flashcards from a topic's text. Sentences already
/// phrased as a question ("define" / "what is" with a single `?`) are split
/// into front and back directly; otherwise the first domain term found in
/// the sentence becomes a cloze-style prompt with the whole sentence as the
/// back. Sentences matching neither rule contribute nothing.
pub fn generate_flashcards(text: &str, start_page: usize, vocabulary: &Vocabulary) -> Vec<Flashcard> {
    let mut flashcards = Vec::new();

    for sentence in sentences(text) {
        if flashcards.len() >= MAX_FLASHCARDS_PER_TOPIC {
            break;
        }

        if let Some(card) = question_card(sentence, start_page) {
            flashcards.push(card);
            continue;
        }

        if let Some(card) = cloze_card(sentence, start_page, &vocabulary.terms) {
            flashcards.push(card);
        }
    }

    flashcards
}

fn question_card(sentence: &str, start_page: usize) -> Option<Flashcard> {
    let lower = sentence.to_lowercase();
    if !lower.contains("define") && !lower.contains("what is") {
        return None;
    }

    let parts: Vec<&str> = sentence.split('?').collect();
    if parts.len() != 2 {
        return None;
    }

    Some(Flashcard {
        front: format!("{}?", parts[0]),
        back: parts[1].trim().to_string(),
        source_page: start_page,
        confidence: QUESTION_CONFIDENCE,
    })
}

fn cloze_card(sentence: &str, start_page: usize, terms: &[String]) -> Option<Flashcard> {
    terms
        .iter()
        .find(|term| sentence.contains(term.as_str()))
        .map(|term| Flashcard {
            front: format!("Define/Explain: {}", term),
            back: sentence.to_string(),
            source_page: start_page,
            confidence: CLOZE_CONFIDENCE,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Vec<Flashcard> {
        generate_flashcards(text, 3, &Vocabulary::default())
    }

    #[test]
    fn test_question_sentence_becomes_front_and_back() {
        let cards = run("What is refraction?");

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].front, "What is refraction?");
        // the terminator is the only `?`, so the remainder is empty
        assert_eq!(cards[0].back, "");
        assert_eq!(cards[0].confidence, 0.9);
        assert_eq!(cards[0].source_page, 3);
    }

    #[test]
    fn test_term_sentence_becomes_cloze_card() {
        let cards = run("Light undergoes Diffraction at narrow slits.");

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].front, "Define/Explain: Diffraction");
        assert_eq!(cards[0].back, "Light undergoes Diffraction at narrow slits.");
        assert_eq!(cards[0].confidence, 0.85);
    }

    #[test]
    fn test_first_term_in_priority_order_wins() {
        // both Refraction and Diffraction appear; Refraction comes first in
        // the vocabulary
        let cards = run("Refraction and Diffraction both bend light.");

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].front, "Define/Explain: Refraction");
    }

    #[test]
    fn test_define_sentence_without_question_mark_falls_through_to_cloze() {
        let cards = run("We define Polarization as a filtering of wave orientation.");

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].front, "Define/Explain: Polarization");
        assert_eq!(cards[0].confidence, 0.85);
    }

    #[test]
    fn test_unmatched_sentences_contribute_nothing() {
        assert!(run("The sky is blue today.").is_empty());
        assert!(run("").is_empty());
    }

    #[test]
    fn test_at_most_four_flashcards() {
        let text = "Reflection one. Reflection two. Reflection three. \
                    Reflection four. Reflection five. Reflection six.";
        assert_eq!(run(text).len(), 4);
    }

    #[test]
    fn test_mixed_rules_keep_sentence_order() {
        let text = "What is Reflection? Interference makes fringes appear.";
        let cards = run(text);

        assert_eq!(cards.len(), 2);
        // the question rule wins for the first sentence even though it also
        // contains a vocabulary term
        assert_eq!(cards[0].front, "What is Reflection?");
        assert_eq!(cards[1].front, "Define/Explain: Interference");
    }
}
