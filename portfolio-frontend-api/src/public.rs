use std::collections::BTreeMap;

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use portfolio_boundary::{Comment, CovidDay, LoginStatus};

use crate::{ensure_success, into_json, into_text, Error, Result};

/// Public portfolio backend API
#[derive(Clone, Copy)]
pub struct PublicApi {
    url: &'static str,
}

impl PublicApi {
    #[must_use]
    pub const fn new(url: &'static str) -> Self {
        Self { url }
    }

    /// Fetches the most recent comments, newest first.
    ///
    /// Without a limit the store decides how many comments to return.
    pub async fn comments(&self, limit: Option<u64>) -> Result<Vec<Comment>> {
        let url = comments_url(self.url, limit);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    /// Deletes a single comment, identified by its id.
    pub async fn delete_comment(&self, id: &str) -> Result<()> {
        let url = format!("{}/delete-data", self.url);
        let response = Request::post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(delete_body(id))?
            .send()
            .await?;
        ensure_success(&response)
    }

    /// Asks the backend whether the visitor is logged in.
    pub async fn login_status(&self) -> Result<LoginStatus> {
        let url = format!("{}/login", self.url);
        let response = Request::get(&url).send().await?;
        let text = into_text(response).await?;
        parse_login_status(&text)
    }

    /// Fetches the one-shot URL the comment form must be posted to.
    pub async fn blobstore_upload_url(&self) -> Result<String> {
        let url = format!("{}/blobstore-upload-url", self.url);
        let response = Request::get(&url).send().await?;
        let text = into_text(response).await?;
        Ok(text.trim().to_owned())
    }

    pub async fn covid_data(&self) -> Result<BTreeMap<String, CovidDay>> {
        let url = format!("{}/covid-data", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn comment_data(&self) -> Result<BTreeMap<String, u32>> {
        let url = format!("{}/comment-data", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }
}

fn comments_url(base: &str, limit: Option<u64>) -> String {
    match limit {
        Some(limit) => format!("{base}/data?comment-limit={limit}"),
        None => format!("{base}/data"),
    }
}

fn delete_body(id: &str) -> String {
    format!("id={}", utf8_percent_encode(id, NON_ALPHANUMERIC))
}

// The login endpoint answers with two text lines: the login state first,
// the matching login or logout link second.
fn parse_login_status(text: &str) -> Result<LoginStatus> {
    let mut lines = text.lines().map(str::trim);
    let status = lines.next().filter(|line| !line.is_empty());
    let link = lines.next().filter(|line| !line.is_empty());
    match (status, link) {
        (Some(status), Some(link)) => Ok(LoginStatus {
            logged_in: status.eq_ignore_ascii_case("true"),
            link: link.to_owned(),
        }),
        _ => Err(Error::Fetch("malformed login response".to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_url_with_and_without_limit() {
        assert_eq!(
            comments_url("", Some(3)),
            "/data?comment-limit=3"
        );
        assert_eq!(comments_url("", None), "/data");
    }

    #[test]
    fn delete_body_is_form_encoded() {
        assert_eq!(delete_body("1"), "id=1");
        assert_eq!(delete_body("c 1&x"), "id=c%201%26x");
    }

    #[test]
    fn parse_login_status_of_a_logged_in_visitor() {
        let status = parse_login_status("true\n/logout\n").unwrap();
        assert!(status.logged_in);
        assert_eq!(status.link, "/logout");
    }

    #[test]
    fn parse_login_status_of_a_logged_out_visitor() {
        let status = parse_login_status("false\nhttps://example.com/login").unwrap();
        assert!(!status.logged_in);
        assert_eq!(status.link, "https://example.com/login");
    }

    #[test]
    fn parse_login_status_rejects_malformed_responses() {
        assert!(parse_login_status("").is_err());
        assert!(parse_login_status("true").is_err());
        assert!(parse_login_status("\n\n").is_err());
    }
}
