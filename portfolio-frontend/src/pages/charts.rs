use leptos::*;

use portfolio_frontend_api::{self as api, PublicApi};

use crate::components::*;

// Plants in the garden, counted by hand once a month.
const PLANT_DATA: [(&str, f64); 6] = [
    ("2020-01", 4.0),
    ("2020-02", 6.0),
    ("2020-03", 9.0),
    ("2020-04", 11.0),
    ("2020-05", 16.0),
    ("2020-06", 21.0),
];

#[component]
pub fn Charts(public_api: PublicApi) -> impl IntoView {
    // -- actions -- //

    let fetch_covid_data = Action::new(move |()| async move { public_api.covid_data().await });
    let fetch_comment_data = Action::new(move |()| async move { public_api.comment_data().await });

    fetch_covid_data.dispatch(());
    fetch_comment_data.dispatch(());

    // -- series -- //

    let plant_series = Signal::derive(move || {
        let series = PLANT_DATA
            .iter()
            .map(|(label, value)| ((*label).to_string(), *value))
            .collect::<Vec<_>>();
        Some(Ok::<_, api::Error>(series))
    });

    let covid_series = Signal::derive(move || {
        fetch_covid_data.value().get().map(|result| {
            result.map(|data| {
                data.into_iter()
                    .map(|(date, day)| (date, f64::from(day.total_cases)))
                    .collect::<Vec<_>>()
            })
        })
    });

    let comment_series = Signal::derive(move || {
        fetch_comment_data.value().get().map(|result| {
            result.map(|data| {
                data.into_iter()
                    .map(|(date, count)| (date, f64::from(count)))
                    .collect::<Vec<_>>()
            })
        })
    });

    view! {
      <section>
        <div class="container p-6 mx-auto">
          <h1 class="text-3xl font-bold">"Charts"</h1>
          <LineChart title = "Plants in my garden" series = plant_series />
          <LineChart title = "COVID-19 total cases" series = covid_series />
          <LineChart title = "Submitted comments over time" series = comment_series />
        </div>
      </section>
    }
}
