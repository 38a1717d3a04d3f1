//! Scheduled post slot

use serde::{Deserialize, Serialize};

/// One scheduled post: derived date/time display strings plus generated
/// image-prompt and caption text.
///
/// Persisted as five string fields. Consumers treat slots as read-only; the
/// prompt merge step is the only writer of `image_prompt` after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSlot {
    /// Weekday name, e.g. "Monday".
    pub day: String,
    /// Short display date, e.g. "Oct 16".
    pub date: String,
    /// 12-hour clock string, e.g. "2:05 PM".
    pub time: String,
    pub image_prompt: String,
    pub caption: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_fields() {
        let slot = PostSlot {
            day: "Friday".into(),
            date: "Oct 16".into(),
            time: "9:30 AM".into(),
            image_prompt: "Beachside hammock with ocean view".into(),
            caption: "Finding joy in travel. What brings you joy today? ✨".into(),
        };

        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(json["imagePrompt"], "Beachside hammock with ocean view");
        assert_eq!(json.as_object().unwrap().len(), 5);
    }
}
