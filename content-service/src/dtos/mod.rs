use crate::error::ContentError;
use crate::models::{ContentBrief, ContentType};
use serde::{Deserialize, Serialize};

/// Success envelope shared by both endpoints: `{"data": ...}`.
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Raw generation request body. Everything is optional at the wire level;
/// `into_brief` decides what is actually required.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateContentRequest {
    pub content_type: Option<String>,
    pub platform: Option<String>,
    pub topic: Option<String>,
    pub tone: Option<String>,
    pub brand_voice: Option<String>,
    pub target_audience: Option<String>,
    pub industry: Option<String>,
}

impl GenerateContentRequest {
    /// Validate the raw request into a typed brief.
    ///
    /// `contentType` and `topic` are required and must be non-empty; every
    /// other field is optional, with empty strings treated as absent.
    pub fn into_brief(self) -> Result<ContentBrief, ContentError> {
        let content_type = non_empty(self.content_type);
        let topic = non_empty(self.topic);

        let (Some(content_type), Some(topic)) = (content_type, topic) else {
            return Err(ContentError::MissingRequiredFields);
        };

        let content_type =
            ContentType::parse(&content_type).ok_or(ContentError::InvalidContentType)?;

        Ok(ContentBrief {
            content_type,
            platform: non_empty(self.platform),
            topic,
            tone: non_empty(self.tone),
            brand_voice: non_empty(self.brand_voice),
            target_audience: non_empty(self.target_audience),
            industry: non_empty(self.industry),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub content: String,
    pub content_type: ContentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    pub topic: String,
    /// `null` for anonymous generations.
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_content: u64,
    pub content_by_type: ContentTypeCounts,
    /// Rows created in the trailing seven days.
    pub recent_content: u64,
    pub user_id: String,
}

/// Per-type tallies; both known buckets are always present, even at zero.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContentTypeCounts {
    pub social_post: u64,
    pub ad_copy: u64,
}

impl ContentTypeCounts {
    /// Tally raw `content_type` values into the two known buckets. Rows with
    /// an unrecognized type are dropped rather than surfaced as new buckets.
    pub fn tally<'a, I>(types: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = Self::default();
        for value in types {
            match ContentType::parse(value) {
                Some(ContentType::SocialPost) => counts.social_post += 1,
                Some(ContentType::AdCopy) => counts.ad_copy += 1,
                None => {}
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(content_type: Option<&str>, topic: Option<&str>) -> GenerateContentRequest {
        GenerateContentRequest {
            content_type: content_type.map(String::from),
            topic: topic.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn brief_requires_content_type_and_topic() {
        let err = request(None, Some("topic")).into_brief().unwrap_err();
        assert!(matches!(err, ContentError::MissingRequiredFields));

        let err = request(Some("social_post"), None).into_brief().unwrap_err();
        assert!(matches!(err, ContentError::MissingRequiredFields));
    }

    #[test]
    fn brief_treats_empty_strings_as_missing() {
        let err = request(Some("social_post"), Some("")).into_brief().unwrap_err();
        assert!(matches!(err, ContentError::MissingRequiredFields));

        let mut req = request(Some("social_post"), Some("topic"));
        req.platform = Some(String::new());
        req.tone = Some(String::new());
        let brief = req.into_brief().unwrap();
        assert!(brief.platform.is_none());
        assert!(brief.tone.is_none());
    }

    #[test]
    fn brief_rejects_unknown_content_type() {
        let err = request(Some("newsletter"), Some("topic"))
            .into_brief()
            .unwrap_err();
        assert!(matches!(err, ContentError::InvalidContentType));
    }

    #[test]
    fn missing_required_fields_reported_before_type_check() {
        // Unknown type plus missing topic: the required-field error wins,
        // matching the validation order of the endpoint contract.
        let err = request(Some("newsletter"), None).into_brief().unwrap_err();
        assert!(matches!(err, ContentError::MissingRequiredFields));
    }

    #[test]
    fn tally_counts_known_types_and_drops_the_rest() {
        let types = ["social_post", "ad_copy", "social_post", "newsletter", ""];
        let counts = ContentTypeCounts::tally(types);

        assert_eq!(
            counts,
            ContentTypeCounts {
                social_post: 2,
                ad_copy: 1,
            }
        );
    }

    #[test]
    fn tally_of_nothing_keeps_both_buckets() {
        let counts = ContentTypeCounts::tally([]);
        let value = serde_json::to_value(&counts).unwrap();

        assert_eq!(value["social_post"], 0);
        assert_eq!(value["ad_copy"], 0);
    }
}
