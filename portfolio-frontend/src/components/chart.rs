use leptos::*;

use portfolio_core::charts::polyline_points;
use portfolio_frontend_api as api;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 200.0;

/// A labelled series of samples in chart order.
pub type Series = Vec<(String, f64)>;

#[component]
pub fn LineChart(
    title: &'static str,
    series: Signal<Option<Result<Series, api::Error>>>,
) -> impl IntoView {
    let memorized_series = create_memo(move |_| series.get());

    view! {
      <div class="m-5 overflow-hidden rounded-lg bg-white px-4 py-5 shadow">
        <h3 class="text-base font-semibold leading-6 text-gray-900">{ title }</h3>
        { move || match memorized_series.get() {
            Some(Ok(series)) => {
              if series.is_empty() {
                view! {
                  <p class="text-gray-500">"No data available."</p>
                }.into_view()
              } else {
                let values: Vec<f64> = series.iter().map(|(_, value)| *value).collect();
                let points = polyline_points(&values, CHART_WIDTH, CHART_HEIGHT);
                let first_label = series.first().map(|(label, _)| label.clone()).unwrap_or_default();
                let last_label = series.last().map(|(label, _)| label.clone()).unwrap_or_default();
                view! {
                  <svg viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}") class="mt-2 w-full">
                    <polyline points=points fill="none" stroke="currentColor" stroke-width="2" />
                  </svg>
                  <div class="flex justify-between text-xs text-gray-500">
                    <span>{ first_label }</span>
                    <span>{ last_label }</span>
                  </div>
                }.into_view()
              }
            }
            Some(Err(_)) => view! { <p class="text-gray-500">"- API error -"</p> }.into_view(),
            None => view! { <p class="text-gray-500">"-"</p> }.into_view(),
        }}
      </div>
    }
}
