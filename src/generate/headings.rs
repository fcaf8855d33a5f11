/// One detected heading occurrence. The sequence follows page order, and
/// within a page the vocabulary's priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub text: String,
    pub page: usize,
}

/// Scans one page of text against the heading vocabulary and appends any
/// occurrences to `out`. Matching is exact, case-sensitive substring
/// containment. An occurrence is suppressed only when the immediately
/// preceding entry has the same text; a heading may legitimately reappear
/// after a different intervening heading, since documents are assumed to
/// progress monotonically through the vocabulary.
pub fn detect_headings(page_text: &str, page: usize, vocabulary: &[String], out: &mut Vec<Heading>) {
    for term in vocabulary {
        if page_text.contains(term.as_str()) {
            let repeated = out.last().is_some_and(|last| last.text == *term);
            if !repeated {
                out.push(Heading {
                    text: term.clone(),
                    page,
                });
            }
        }
    }
}
