use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::state::create_state;

#[component]
pub fn GeneratePlotView() -> impl IntoView {
    let state = create_state();

    // Submit the current prompt; rejected while a request is in flight
    let submit_prompt = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut accepted = false;
        state.update(|s| accepted = s.begin_submit());
        if !accepted {
            return;
        }

        let prompt = state.with_untracked(|s| s.prompt.clone());
        spawn_local(async move {
            match api::generate_plot(prompt).await {
                Ok(response) => state.update(|s| s.finish_success(response.plot_url)),
                Err(reason) => state.update(|s| s.finish_failure(reason)),
            }
        });
    };

    view! {
        <div id="u501_generate_plot--usecase" data-page-category="usecase" style="padding: 20px; max-width: 900px; margin: 20px auto;">
            <h2>"Natural Language Plot Generator"</h2>

            <p style="color: #666;">
                "Describe the chart you want and the server renders it from the connected database."
            </p>

            <form on:submit=submit_prompt>
                // The prompt stays editable while a request is running;
                // only the submit control is locked.
                <textarea
                    rows="3"
                    style="width: 100%; padding: 10px; font-size: 14px; border: 1px solid #ccc; border-radius: 4px; box-sizing: border-box;"
                    placeholder="e.g. Show total sales per month for 2024 as a bar chart"
                    prop:value=move || state.with(|s| s.prompt.clone())
                    on:input=move |ev| state.update(|s| s.prompt = event_target_value(&ev))
                ></textarea>

                <div style="margin: 10px 0;">
                    <button
                        type="submit"
                        style="padding: 10px 20px; background: #007bff; color: white; border: none; border-radius: 4px; cursor: pointer; font-size: 16px;"
                        prop:disabled=move || state.with(|s| s.is_loading)
                    >
                        {move || if state.with(|s| s.is_loading) { "Generating..." } else { "Generate plot" }}
                    </button>
                </div>
            </form>

            <Show when=move || state.with(|s| s.is_loading)>
                <div style="margin: 10px 0; color: #007bff;">
                    "Generating your plot, this can take a few seconds..."
                </div>
            </Show>

            // Failure message, mutually exclusive with the plot below
            {move || {
                let message = state.with(|s| s.error_message.clone());
                if message.is_empty() {
                    view! { <div></div> }.into_any()
                } else {
                    view! {
                        <div style="padding: 10px; background: #fee; border: 1px solid #fcc; border-radius: 4px; color: #c00; margin: 10px 0;">
                            {message}
                        </div>
                    }.into_any()
                }
            }}

            {move || {
                let url = state.with(|s| s.plot_url.clone());
                if url.is_empty() {
                    view! { <div></div> }.into_any()
                } else {
                    view! {
                        <div style="margin-top: 20px; padding: 15px; background: #f9f9f9; border: 1px solid #ddd; border-radius: 8px;">
                            <img src=url alt="Generated plot" style="max-width: 100%;" />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
