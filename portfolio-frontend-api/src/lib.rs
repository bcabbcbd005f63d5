use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod blog;
mod public;

pub use self::{blog::*, public::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("request failed with HTTP status {0}")]
    Status(u16),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

fn ensure_success(response: &Response) -> Result<()> {
    // ensure we've got 2xx status
    if response.ok() {
        Ok(())
    } else {
        Err(Error::Status(response.status()))
    }
}

async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    ensure_success(&response)?;
    Ok(response.json().await?)
}

async fn into_text(response: Response) -> Result<String> {
    ensure_success(&response)?;
    Ok(response.text().await?)
}
