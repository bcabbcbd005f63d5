use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use leptos_router::*;

use portfolio_boundary::LoginStatus;
use portfolio_core::limit::limit_or_default;
use portfolio_frontend_api as api;

mod pages;
use pages::*;

mod components;
use components::*;

// All backend endpoints are mounted at the site root.
const DEFAULT_API_URL: &str = "";
const COMMENT_LIMIT_STORAGE_KEY: &str = "comment-limit";
const BLOG_POST_ID: &str = "0cb628857f3c4c77bf7f9a879a6ec21d";

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- signals -- //

    let login_status = RwSignal::new(None::<LoginStatus>);
    let stored_limit: Option<String> = LocalStorage::get(COMMENT_LIMIT_STORAGE_KEY).ok();
    let comment_limit = RwSignal::new(limit_or_default(stored_limit.as_deref()));

    // -- init API -- //

    let public_api = api::PublicApi::new(DEFAULT_API_URL);

    // -- actions -- //

    let fetch_login_status = Action::new(move |()| async move {
        match public_api.login_status().await {
            Ok(status) => {
                login_status.update(|s| *s = Some(status));
            }
            Err(err) => {
                log::error!("Unable to fetch login status: {err}");
            }
        }
    });

    fetch_login_status.dispatch(());

    // -- effects -- //

    Effect::new(move |_| {
        let limit = comment_limit.get();
        log::debug!("Persist comment limit: {limit}");
        LocalStorage::set(COMMENT_LIMIT_STORAGE_KEY, limit.to_string())
            .expect("LocalStorage::set");
    });

    view! {
      <Router>
        <NavBar login_status = login_status.into() />
        <main>
          <Routes>
            <Route
              path=Page::Home.path()
              view=move || view! { <Home /> }
            />
            <Route
              path=Page::Blog.path()
              view=move || view! {
                <Blog
                  public_api
                  login_status = login_status.into()
                  comment_limit
                />
              }
            />
            <Route
              path=Page::Charts.path()
              view=move || view! { <Charts public_api /> }
            />
          </Routes>
        </main>
      </Router>
    }
}
