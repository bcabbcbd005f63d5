use serde::{Deserialize, Serialize};

/// A single user-submitted comment as served by the comment store.
///
/// The `id` is opaque, unique and never reused; it is the sole key used
/// for delete requests.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Comment {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "commentInput")]
    pub comment_input: String,
    #[serde(rename = "fileUrl", default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(
        rename = "timestampMillis",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp_millis: Option<i64>,
}

/// Result of asking the backend whether the visitor is logged in.
///
/// `link` points to the logout page when logged in and to the login page
/// otherwise.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct LoginStatus {
    pub logged_in: bool,
    pub link: String,
}

/// COVID-19 case counts for a single day.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct CovidDay {
    pub total_cases: u32,
    pub new_cases: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_comments_with_and_without_attachment() {
        let json = r#"[
            {"id":"1","name":"Ann","commentInput":"Hi"},
            {"id":"2","name":"Bo","commentInput":"Yo","fileUrl":"img/x.png"}
        ]"#;
        let comments: Vec<Comment> = serde_json::from_str(json).unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].id, "1");
        assert_eq!(comments[0].name, "Ann");
        assert_eq!(comments[0].comment_input, "Hi");
        assert!(comments[0].file_url.is_none());
        assert_eq!(comments[1].file_url.as_deref(), Some("img/x.png"));
    }

    #[test]
    fn deserialize_comment_with_all_server_fields() {
        let json = r#"{
            "id": "42",
            "name": "Anonymous",
            "email": "N/A",
            "commentInput": "First!",
            "fileUrl": "/serve?blob-key=abc",
            "timestampMillis": 1589240000000
        }"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.email.as_deref(), Some("N/A"));
        assert_eq!(comment.timestamp_millis, Some(1_589_240_000_000));
    }

    #[test]
    fn deserialize_covid_day_uses_camel_case_wire_names() {
        let json = r#"{"totalCases":2820,"newCases":20}"#;
        let day: CovidDay = serde_json::from_str(json).unwrap();
        assert_eq!(day.total_cases, 2820);
        assert_eq!(day.new_cases, 20);
    }
}
