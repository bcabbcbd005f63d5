use leptos::*;

use portfolio_boundary::LoginStatus;
use portfolio_frontend_api::{self as api, PublicApi};

use crate::components::*;

#[component]
pub fn Blog(
    public_api: PublicApi,
    login_status: Signal<Option<LoginStatus>>,
    comment_limit: RwSignal<u64>,
) -> impl IntoView {
    // -- actions -- //

    let fetch_post =
        Action::new(move |()| async move { api::blog_post_html(crate::BLOG_POST_ID).await });

    fetch_post.dispatch(());

    view! {
      <section>
        <div class="container p-6 mx-auto">
          <h1 class="text-3xl font-bold">"Blog"</h1>
          { move || match fetch_post.value().get() {
              Some(Ok(html)) => view! {
                <div class="mt-6" inner_html=html></div>
              }.into_view(),
              Some(Err(_)) => view! {
                <p class="mt-6 text-gray-500">"The blog post could not be loaded."</p>
              }.into_view(),
              None => view! {
                <p class="mt-6 text-gray-500">"The blog post is loaded ..."</p>
              }.into_view(),
          }}
          <div class="mt-10">
            <CommentSection public_api login_status comment_limit />
          </div>
        </div>
      </section>
    }
}
