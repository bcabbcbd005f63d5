use leptos::*;
use time::{format_description::FormatItem, macros::format_description, OffsetDateTime};

use portfolio_boundary::{Comment, LoginStatus};
use portfolio_core::{
    feed::{attachment_image_url, CommentFeed},
    limit::parse_limit,
};
use portfolio_frontend_api::PublicApi;

use crate::components::CommentForm;

const DATE_TIME_FORMAT: &[FormatItem] = format_description!("[year]-[month]-[day] [hour]:[minute]");

#[component]
pub fn CommentSection(
    public_api: PublicApi,
    login_status: Signal<Option<LoginStatus>>,
    comment_limit: RwSignal<u64>,
) -> impl IntoView {
    // -- signals -- //

    let feed = RwSignal::new(CommentFeed::default());

    // -- actions -- //

    let load_comments = Action::new(move |limit: &u64| {
        let limit = *limit;
        let generation = feed
            .try_update(CommentFeed::begin_load)
            .expect("comment feed signal");
        async move {
            match public_api.comments(Some(limit)).await {
                Ok(comments) => {
                    feed.update(|feed| {
                        if !feed.apply_load(generation, comments) {
                            log::debug!("Discarded superseded comment load");
                        }
                    });
                }
                Err(err) => {
                    log::error!("Unable to load comments: {err}");
                    feed.update(|feed| feed.load_failed(generation));
                }
            }
        }
    });

    let delete_comment = Action::new(move |id: &String| {
        let id = id.clone();
        async move {
            if let Err(err) = public_api.delete_comment(&id).await {
                log::error!("Unable to delete comment {id}: {err}");
            }
            // Reconcile with the authoritative server state.
            load_comments.dispatch(comment_limit.get_untracked());
        }
    });

    load_comments.dispatch(comment_limit.get_untracked());

    // -- callbacks -- //

    let on_delete = move |id: String| {
        if feed.with_untracked(CommentFeed::is_loading) {
            log::warn!("Cannot delete comment ({id}): a load is in flight");
            return;
        }
        feed.update(|feed| {
            feed.remove(&id);
        });
        delete_comment.dispatch(id);
    };

    let on_limit_change = move |input: String| match parse_limit(&input) {
        Some(limit) => {
            comment_limit.set(limit);
            load_comments.dispatch(limit);
        }
        None => {
            log::warn!("Ignoring invalid comment limit: {input:?}");
        }
    };

    // -- memos -- //

    let memorized_comments = create_memo(move |_| feed.with(|feed| feed.comments().to_vec()));

    view! {
      <div class="mx-auto max-w-none">
        <div class="overflow-hidden bg-white sm:rounded-lg sm:shadow">
          <div class="border-b border-gray-200 bg-white px-4 py-5 sm:px-6">
            <h3 class="text-base font-semibold leading-6 text-gray-900">"Comments"</h3>
            <label class="mt-1 flex items-center gap-x-2 text-sm text-gray-500">
              "Show at most"
              <input
                type = "number"
                min = "1"
                class = "w-20 rounded border border-gray-300 px-2 py-1"
                prop:value = move || comment_limit.get().to_string()
                on:change = move |ev| on_limit_change(event_target_value(&ev))
              />
              "comments"
            </label>
          </div>
          { move || {
              let comments = memorized_comments.get();
              if comments.is_empty() {
                view! {
                  <p class="text-gray-500 p-5">"There are currently no comments."</p>
                }.into_view()
              } else {
                view! {
                  <ul role="list" class="divide-y divide-gray-100">
                    <For
                      each = move || comments.clone()
                      key = |comment| comment.id.clone()
                      let:comment
                    >
                      <CommentListElement comment on_delete />
                    </For>
                  </ul>
                }.into_view()
              }
          }}
          <CommentForm public_api login_status />
        </div>
      </div>
    }
}

#[component]
fn CommentListElement<F>(comment: Comment, on_delete: F) -> impl IntoView
where
    F: Fn(String) + 'static + Copy,
{
    let image_url = attachment_image_url(&comment).to_owned();
    let Comment {
        id,
        name,
        email,
        comment_input,
        timestamp_millis,
        ..
    } = comment;
    let posted_at = timestamp_millis.and_then(format_timestamp);

    view! {
      <li class="flex items-center justify-between gap-x-6 p-5">
        <div class="flex min-w-0 gap-x-4">
          <img class="h-12 w-12 flex-none rounded-full bg-gray-50" src={ image_url } alt="" />
          <div class="min-w-0 flex-auto">
            <p class="text-sm font-semibold leading-6 text-gray-900">{ name }</p>
            {
              email.map(|email| view! {
                <p class="mt-1 truncate text-xs leading-5 text-gray-500">{ email }</p>
              })
            }
            <p class="mt-1 text-sm leading-6 text-gray-600">{ comment_input }</p>
            {
              posted_at.map(|posted_at| view! {
                <p class="mt-1 flex text-xs leading-5 text-gray-500">
                  <time>{ posted_at }</time>
                </p>
              })
            }
          </div>
        </div>
        <div class="flex flex-none items-center gap-x-4">
          <a
            href = "#"
            class = "rounded-md bg-white px-2.5 py-1.5 text-sm font-semibold text-gray-900 shadow-sm ring-1 ring-inset ring-gray-300 hover:bg-gray-50"
            on:click = move |_| on_delete(id.clone())
          >
            "delete"
          </a>
        </div>
      </li>
    }
}

fn format_timestamp(millis: i64) -> Option<String> {
    let timestamp = OffsetDateTime::from_unix_timestamp(millis / 1000).ok()?;
    timestamp.format(DATE_TIME_FORMAT).ok()
}
