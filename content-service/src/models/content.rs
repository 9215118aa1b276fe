use serde::{Deserialize, Serialize};

/// The two content formats the service can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    SocialPost,
    AdCopy,
}

impl ContentType {
    /// Parse a wire value; anything outside the two known types is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "social_post" => Some(Self::SocialPost),
            "ad_copy" => Some(Self::AdCopy),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SocialPost => "social_post",
            Self::AdCopy => "ad_copy",
        }
    }
}

/// A validated content brief. Optional fields hold `None` for both absent
/// and empty inputs, so downstream prompt clauses are either whole sentences
/// or missing entirely.
#[derive(Debug, Clone)]
pub struct ContentBrief {
    pub content_type: ContentType,
    pub platform: Option<String>,
    pub topic: String,
    pub tone: Option<String>,
    pub brand_voice: Option<String>,
    pub target_audience: Option<String>,
    pub industry: Option<String>,
}

/// Row inserted into the `contents` collection for a resolved user.
#[derive(Debug, Serialize)]
pub struct NewContentRecord {
    pub user_id: String,
    pub content_type: ContentType,
    pub platform: String,
    pub original_text: String,
    pub edited_text: String,
    pub topic: String,
    pub tone: String,
}

impl NewContentRecord {
    /// Build the record persisted after a successful generation. The text
    /// starts out identical in both columns; `platform` and `tone` fall back
    /// to `"general"` and `"neutral"` when the brief left them out.
    pub fn from_generated(brief: &ContentBrief, user_id: &str, content: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            content_type: brief.content_type,
            platform: brief
                .platform
                .clone()
                .unwrap_or_else(|| "general".to_string()),
            original_text: content.to_string(),
            edited_text: content.to_string(),
            topic: brief.topic.clone(),
            tone: brief.tone.clone().unwrap_or_else(|| "neutral".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief(content_type: ContentType) -> ContentBrief {
        ContentBrief {
            content_type,
            platform: None,
            topic: "summer sale".to_string(),
            tone: None,
            brand_voice: None,
            target_audience: None,
            industry: None,
        }
    }

    #[test]
    fn parse_accepts_only_known_types() {
        assert_eq!(ContentType::parse("social_post"), Some(ContentType::SocialPost));
        assert_eq!(ContentType::parse("ad_copy"), Some(ContentType::AdCopy));
        assert_eq!(ContentType::parse("blog_post"), None);
        assert_eq!(ContentType::parse(""), None);
        assert_eq!(ContentType::parse("Social_Post"), None);
    }

    #[test]
    fn record_defaults_platform_and_tone() {
        let record = NewContentRecord::from_generated(
            &brief(ContentType::SocialPost),
            "user-1",
            "generated text",
        );

        assert_eq!(record.platform, "general");
        assert_eq!(record.tone, "neutral");
        assert_eq!(record.original_text, "generated text");
        assert_eq!(record.edited_text, record.original_text);
    }

    #[test]
    fn record_keeps_provided_platform_and_tone() {
        let mut b = brief(ContentType::AdCopy);
        b.platform = Some("instagram".to_string());
        b.tone = Some("playful".to_string());

        let record = NewContentRecord::from_generated(&b, "user-1", "copy");

        assert_eq!(record.platform, "instagram");
        assert_eq!(record.tone, "playful");
    }

    #[test]
    fn record_serializes_to_snake_case_columns() {
        let record = NewContentRecord::from_generated(&brief(ContentType::AdCopy), "user-1", "copy");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["user_id"], "user-1");
        assert_eq!(value["content_type"], "ad_copy");
        assert_eq!(value["topic"], "summer sale");
    }
}
