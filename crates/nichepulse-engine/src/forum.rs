//! Rule-based heuristics for forum posts.
//!
//! Collectors use these to turn raw threads into [`ForumSignals`]
//! (complaints, desires, purchase triggers). Plain regex matching only.
//!
//! [`ForumSignals`]: nichepulse_core::ForumSignals

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::matcher::{is_content_word, words};

static QUESTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(how do i|how can i|how to|what's the best way|anyone know|does anyone|has anyone|looking for|searching for|need help with|need a|recommend|suggestions?|advice|tips|alternative to|replacement for|instead of|is there an?|are there any)\b",
    )
    .expect("valid question regex")
});

static PAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(struggle|struggling|difficult|hard to|can't|cannot|unable to|frustrated|frustrating|annoying|annoyed|hate|hating|problem|issue|bug|broken|doesn't work|not working|wish there was|if only|would be nice if|tired of|sick of|fed up with|waste of time|time consuming|takes forever|expensive|overpriced|costs too much|can't afford|complicated|confusing|complex|overwhelming)\b",
    )
    .expect("valid pain regex")
});

static REQUEST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(wish|want|need|require|would love|should have|must have|needs to have|feature request|suggestion|idea|please add|can you add|would be great if)\b",
    )
    .expect("valid request regex")
});

static SOLUTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(i use|i'm using|we use|currently using|switched to|moved to|migrated to|recommend|love|great tool|best tool|solved by|fixed by|helped by)\b",
    )
    .expect("valid solution regex")
});

static BELIEF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(i think|i believe|in my opinion|imo|imho|the problem is|the issue is|the truth is|people don't realize|most people think|the best approach|the right way|should be)\b",
    )
    .expect("valid belief regex")
});

static SHOWCASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(i made|i built|i created|check out|showcase)\b")
        .expect("valid showcase regex")
});

/// What a post's author is trying to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostIntent {
    Question,
    Complaint,
    Request,
    Showcase,
    Discussion,
}

impl std::fmt::Display for PostIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostIntent::Question => write!(f, "question"),
            PostIntent::Complaint => write!(f, "complaint"),
            PostIntent::Request => write!(f, "request"),
            PostIntent::Showcase => write!(f, "showcase"),
            PostIntent::Discussion => write!(f, "discussion"),
        }
    }
}

/// Categorize a post by its title.
///
/// First match wins: question, complaint, request, showcase. Anything else
/// is a discussion.
#[must_use]
pub fn categorize_post(title: &str) -> PostIntent {
    if title.contains('?') || QUESTION_RE.is_match(title) {
        PostIntent::Question
    } else if PAIN_RE.is_match(title) {
        PostIntent::Complaint
    } else if REQUEST_RE.is_match(title) {
        PostIntent::Request
    } else if SHOWCASE_RE.is_match(title) {
        PostIntent::Showcase
    } else {
        PostIntent::Discussion
    }
}

/// Sentences pulled from one post, grouped by what they express.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForumInsights {
    pub pain_points: Vec<String>,
    pub questions: Vec<String>,
    pub requests: Vec<String>,
    pub solutions: Vec<String>,
    pub beliefs: Vec<String>,
}

/// Run every sentence extractor over a post's title and body.
#[must_use]
pub fn analyze_post(title: &str, body: &str) -> ForumInsights {
    let text = format!("{title}. {body}");
    ForumInsights {
        pain_points: extract_pain_points(&text),
        questions: extract_questions(&text),
        requests: extract_requests(&text),
        solutions: extract_solutions(&text),
        beliefs: extract_beliefs(&text),
    }
}

/// Sentences of `text` that express pain or frustration, trimmed, in order.
#[must_use]
pub fn extract_pain_points(text: &str) -> Vec<String> {
    sentences_matching(text, &PAIN_RE)
}

/// Sentences asking for help or a recommendation.
#[must_use]
pub fn extract_questions(text: &str) -> Vec<String> {
    sentences_matching(text, &QUESTION_RE)
}

/// Sentences asking for a feature or stating a want.
#[must_use]
pub fn extract_requests(text: &str) -> Vec<String> {
    sentences_matching(text, &REQUEST_RE)
}

/// Sentences naming a tool or fix the author already uses.
#[must_use]
pub fn extract_solutions(text: &str) -> Vec<String> {
    sentences_matching(text, &SOLUTION_RE)
}

/// Sentences stating an opinion about the problem space.
#[must_use]
pub fn extract_beliefs(text: &str) -> Vec<String> {
    sentences_matching(text, &BELIEF_RE)
}

fn sentences_matching(text: &str, pattern: &Regex) -> Vec<String> {
    text.split(['.', '!', '?', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty() && pattern.is_match(s))
        .map(ToOwned::to_owned)
        .collect()
}

/// The `top_n` most frequent content words across post titles.
///
/// Ties are broken alphabetically so the result is deterministic.
#[must_use]
pub fn common_themes<'a, I>(titles: I, top_n: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for title in titles {
        for word in words(title).filter(|w| is_content_word(w)) {
            *counts.entry(word).or_default() += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|(a_word, a_count), (b_word, b_count)| {
        b_count.cmp(a_count).then_with(|| a_word.cmp(b_word))
    });
    ranked.into_iter().take(top_n).map(|(word, _)| word).collect()
}
