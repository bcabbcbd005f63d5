use leptos::*;

use portfolio_boundary::LoginStatus;
use portfolio_frontend_api::PublicApi;

const INPUT_CLASS: &str = "form-control block w-full px-3 py-1.5 text-base font-normal text-gray-700 bg-white bg-clip-padding border border-solid border-gray-300 rounded transition ease-in-out m-0 focus:text-gray-700 focus:bg-white focus:outline-none";

/// Form for submitting a new comment with an optional image attachment.
///
/// The form posts directly to a one-shot blobstore upload URL, so the
/// browser handles the multipart submission and the backend redirects
/// back to the blog page afterwards.
#[component]
pub fn CommentForm(
    public_api: PublicApi,
    login_status: Signal<Option<LoginStatus>>,
) -> impl IntoView {
    // -- actions -- //

    let fetch_upload_url = Action::new(move |()| async move {
        match public_api.blobstore_upload_url().await {
            Ok(url) => Some(url),
            Err(err) => {
                log::error!("Unable to fetch upload URL: {err}");
                None
            }
        }
    });

    fetch_upload_url.dispatch(());

    // -- memos -- //

    let memorized_status = create_memo(move |_| login_status.get());
    let memorized_upload_url = create_memo(move |_| fetch_upload_url.value().get().flatten());

    move || match memorized_status.get() {
        Some(status) if status.logged_in => view! {
          <UploadForm upload_url = memorized_upload_url.into() />
        }
        .into_view(),
        Some(status) => view! {
          <p class="p-5 text-sm text-gray-600">
            "Please "
            <a class="underline" href=status.link>"log in"</a>
            " to leave a comment."
          </p>
        }
        .into_view(),
        None => view! {
          <p class="p-5 text-sm text-gray-500">"Checking login status ..."</p>
        }
        .into_view(),
    }
}

#[component]
fn UploadForm(upload_url: Signal<Option<String>>) -> impl IntoView {
    move || match upload_url.get() {
        Some(action_url) => view! {
          <form action=action_url method="POST" enctype="multipart/form-data" class="p-5 space-y-3">
            <input type="text" name="name" placeholder="Your name" class=INPUT_CLASS />
            <input type="email" name="email" placeholder="Email address" class=INPUT_CLASS />
            <textarea name="comment-input" required placeholder="Write a comment" class=INPUT_CLASS></textarea>
            <input type="file" name="file" accept="image/*" />
            <button
              type="submit"
              class="inline-block px-6 py-2.5 font-medium text-xs leading-tight uppercase rounded shadow-md hover:shadow-lg focus:shadow-lg focus:outline-none transition duration-150 ease-in-out bg-gray-100"
            >
              "Post comment"
            </button>
          </form>
        }
        .into_view(),
        None => view! {
          <p class="p-5 text-sm text-gray-500">"The comment form is prepared ..."</p>
        }
        .into_view(),
    }
}
