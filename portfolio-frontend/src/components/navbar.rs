use leptos::*;
use leptos_router::*;

use portfolio_boundary::LoginStatus;

use crate::Page;

#[component]
pub fn NavBar(login_status: Signal<Option<LoginStatus>>) -> impl IntoView {
    let memorized_status = create_memo(move |_| login_status.get());

    view! {
      <nav class="relative container mx-auto p-6">
        <div class="flex items-center justify-between">

          // Logo
          <div class="pt-2 font-bold">
            <A href = Page::Home.path()>"My Portfolio"</A>
          </div>

          // Menu items
          <div class="space-x-6 md:flex">
            <MenuItem page = Page::Home label = "Home" />
            <MenuItem page = Page::Blog label = "Blog" />
            <MenuItem page = Page::Charts label = "Charts" />
            { move || match memorized_status.get() {
                Some(status) if status.logged_in => view! {
                  <a class="hover:text-gray-600" href=status.link>"Logout"</a>
                }.into_view(),
                Some(status) => view! {
                  <a class="hover:text-gray-600" href=status.link>"Login"</a>
                }.into_view(),
                None => view! {}.into_view(),
              }
            }
          </div>
        </div>
      </nav>
    }
}

#[component]
fn MenuItem(page: Page, label: &'static str) -> impl IntoView {
    view! {
      <A href=page.path() class="hover:text-gray-600".to_string()>{ label }</A>
    }
}
