//! Prompt construction for the two content formats.
//!
//! Pure string assembly, no I/O. Sentences keyed on optional brief fields are
//! appended only when the field is present; an omitted field contributes
//! nothing to the prompt text, so there are never empty clauses or doubled
//! spaces.

use crate::models::{ContentBrief, ContentType};

/// System and user prompts for a single LLM call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

pub fn build_prompts(brief: &ContentBrief) -> PromptPair {
    match brief.content_type {
        ContentType::SocialPost => social_post_prompts(brief),
        ContentType::AdCopy => ad_copy_prompts(brief),
    }
}

fn social_post_prompts(brief: &ContentBrief) -> PromptPair {
    let platform = brief.platform.as_deref().unwrap_or("social media");

    let system = join_sentences(
        format!(
            "You are an expert social media content creator. Generate engaging {} posts that capture attention and drive engagement.",
            platform
        ),
        brand_clauses(brief),
    );

    let user = join_sentences(
        format!("Create a compelling social media post about: {}.", brief.topic),
        [
            tone_clause(brief),
            Some("Include relevant hashtags and call-to-action. Keep it concise and engaging.".to_string()),
        ],
    );

    PromptPair { system, user }
}

fn ad_copy_prompts(brief: &ContentBrief) -> PromptPair {
    let platform = brief.platform.as_deref().unwrap_or("digital");

    let system = join_sentences(
        "You are an expert advertising copywriter. Create persuasive ad copy that converts."
            .to_string(),
        brand_clauses(brief),
    );

    let user = join_sentences(
        format!("Write compelling {} ad copy for: {}.", platform, brief.topic),
        [
            tone_clause(brief),
            Some("Focus on benefits, create urgency, and include a clear call-to-action.".to_string()),
        ],
    );

    PromptPair { system, user }
}

/// Brand-context sentences shared by both formats, one per present field,
/// in a fixed order.
fn brand_clauses(brief: &ContentBrief) -> [Option<String>; 3] {
    [
        brief
            .brand_voice
            .as_deref()
            .map(|voice| format!("Write in a {} tone.", voice)),
        brief
            .target_audience
            .as_deref()
            .map(|audience| format!("Target audience: {}.", audience)),
        brief
            .industry
            .as_deref()
            .map(|industry| format!("Industry: {}.", industry)),
    ]
}

fn tone_clause(brief: &ContentBrief) -> Option<String> {
    brief.tone.as_deref().map(|tone| format!("Tone: {}.", tone))
}

fn join_sentences<I>(base: String, clauses: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    let mut sentences = vec![base];
    sentences.extend(clauses.into_iter().flatten());
    sentences.join(" ")
}
