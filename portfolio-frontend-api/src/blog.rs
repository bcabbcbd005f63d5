use gloo_net::http::Request;

use crate::{into_text, Result};

/// Third-party document API that serves blog posts as HTML fragments.
const BLOG_API_URL: &str = "https://potion-api.now.sh/html";

/// Fetches a blog post rendered as an HTML fragment.
pub async fn blog_post_html(post_id: &str) -> Result<String> {
    let url = format!("{BLOG_API_URL}?id={post_id}");
    let response = Request::get(&url).send().await?;
    into_text(response).await
}
