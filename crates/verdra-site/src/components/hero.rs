//! Hero section with the repository scan form

use leptos::*;
use verdra_core::{format_savings, ScanState};

use crate::api::{failure_message, scan_repository};
use crate::components::AnalysisResults;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="bg-gradient-to-br from-emerald-900 via-emerald-800 to-slate-900 text-white py-20">
            <div class="container mx-auto px-4">
                <div class="max-w-4xl mx-auto text-center">
                    <h1 class="text-4xl md:text-6xl font-bold mb-6">
                        "Let's fix "
                        <span class="text-emerald-300">"Tech Debt"</span>
                    </h1>
                    <p class="text-xl md:text-2xl text-emerald-100 mb-10">
                        "Verdra finds the code that quietly burns compute: queries in loops, noisy logging, dead imports and functions."
                    </p>

                    <div class="bg-white text-gray-900 rounded-2xl shadow-2xl p-8">
                        <h2 class="text-2xl font-semibold mb-2">"Analyze Your Repository"</h2>
                        <p class="text-gray-600 mb-6">
                            "Paste a public GitHub repository and get a report in seconds."
                        </p>
                        <ScanForm/>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Repository input, submit button, inline error and the latest results
#[component]
pub fn ScanForm() -> impl IntoView {
    let (repo_input, set_repo_input) = create_signal(String::new());
    let (state, set_state) = create_signal(ScanState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let input = repo_input.get_untracked();
        let mut request = None;
        set_state.update(|state| request = state.submit(&input));

        if let Some(repo) = request {
            spawn_local(async move {
                let outcome = scan_repository(repo.to_string())
                    .await
                    .map_err(|err| failure_message(&err));
                set_state.set(ScanState::settle(outcome));
            });
        }
    };

    let pending = move || state.with(ScanState::is_pending);
    let error = move || state.with(|state| state.error().map(str::to_string));
    let results = Signal::derive(move || state.with(|state| state.results().cloned()));
    let savings = Signal::derive(move || state.with(ScanState::savings));

    view! {
        <form on:submit=on_submit class="space-y-3 text-left">
            <div class="flex flex-col sm:flex-row gap-3">
                <input
                    type="text"
                    name="repo_url"
                    class="flex-1 px-4 py-3 border border-gray-300 rounded-lg font-mono text-sm focus:ring-2 focus:ring-emerald-500 focus:border-emerald-500"
                    placeholder="https://github.com/username/repository"
                    aria-label="GitHub repository URL"
                    aria-invalid=move || error().is_some().to_string()
                    on:input=move |ev| set_repo_input.set(event_target_value(&ev))
                    prop:value=repo_input
                />
                <button
                    type="submit"
                    class="px-8 py-3 bg-emerald-600 hover:bg-emerald-700 disabled:opacity-60 disabled:cursor-not-allowed text-white font-semibold rounded-lg transition inline-flex items-center justify-center gap-2"
                    disabled=pending
                >
                    <Show when=pending>
                        <span class="h-4 w-4 border-2 border-white border-t-transparent rounded-full animate-spin" aria-hidden="true"></span>
                    </Show>
                    "Analyze"
                </button>
            </div>

            {move || {
                error().map(|message| {
                    view! { <p class="text-sm text-red-600" role="alert">{message}</p> }
                })
            }}
        </form>

        <AnalysisResults results=results/>
        <SavingsBanner savings=savings/>
    }
}

/// Estimated monthly savings, shown only when the scan reported an amount
#[component]
pub fn SavingsBanner(#[prop(into)] savings: MaybeSignal<Option<f64>>) -> impl IntoView {
    move || {
        savings.get().map(|amount| {
            view! {
                <div class="mt-4 p-4 rounded-xl bg-emerald-50 border border-emerald-200 text-emerald-800 text-lg font-semibold text-center">
                    "With Verdra, you can save "
                    <span class="text-emerald-600">{format_savings(amount)}</span>
                    " per month"
                </div>
            }
        })
    }
}
