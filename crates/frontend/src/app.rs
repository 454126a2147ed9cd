use crate::usecases::u501_generate_plot::GeneratePlotView;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <GeneratePlotView />
    }
}
