//! Forum post analysis command handler.

use std::collections::BTreeMap;
use std::path::Path;

use nichepulse_engine::forum::{analyze_post, categorize_post, common_themes};
use serde::{Deserialize, Serialize};

use crate::input::{print_json, read_json};

#[derive(Debug, Deserialize)]
pub(crate) struct ForumPost {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct PostSummary {
    pub title: String,
    pub intent: String,
    pub pain_points: Vec<String>,
    pub questions: Vec<String>,
    pub requests: Vec<String>,
    pub solutions: Vec<String>,
    pub beliefs: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PostsReport {
    pub posts: Vec<PostSummary>,
    pub intent_counts: BTreeMap<String, usize>,
    pub themes: Vec<String>,
}

/// Summarize a batch of posts: per-post intent and extracted sentences,
/// intent totals, and the most common title themes.
pub(crate) fn summarize_posts(posts: &[ForumPost], top: usize) -> PostsReport {
    let mut intent_counts: BTreeMap<String, usize> = BTreeMap::new();
    let summaries: Vec<PostSummary> = posts
        .iter()
        .map(|post| {
            let intent = categorize_post(&post.title).to_string();
            *intent_counts.entry(intent.clone()).or_default() += 1;
            let insights = analyze_post(&post.title, &post.body);
            PostSummary {
                title: post.title.clone(),
                intent,
                pain_points: insights.pain_points,
                questions: insights.questions,
                requests: insights.requests,
                solutions: insights.solutions,
                beliefs: insights.beliefs,
            }
        })
        .collect();

    let themes = common_themes(posts.iter().map(|p| p.title.as_str()), top);

    PostsReport {
        posts: summaries,
        intent_counts,
        themes,
    }
}

/// Analyze posts from a JSON file and print the summary.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub(crate) async fn run_posts(path: &Path, top: usize) -> anyhow::Result<()> {
    let posts: Vec<ForumPost> = read_json(path).await?;
    print_json(&summarize_posts(&posts, top))
}
