//! FAQ accordion

use leptos::*;
use verdra_core::CATEGORY_TABLE;

#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <section id="faq" class="py-20">
            <div class="container mx-auto px-4">
                <div class="max-w-3xl mx-auto">
                    <h2 class="text-3xl md:text-4xl font-bold text-center text-gray-900 mb-12">"FAQ"</h2>

                    <div class="space-y-4">
                        <FaqItem id="developers" question="Who are the developers?">
                            "Northwestern CS Grads"
                            <span class="block mt-3 space-x-4">
                                <a
                                    href="https://www.linkedin.com/in/isaacsun1/"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-emerald-700 hover:underline"
                                >
                                    "Isaac Sun"
                                </a>
                                <a
                                    href="https://www.linkedin.com/in/mkli/"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-emerald-700 hover:underline"
                                >
                                    "Mark Li"
                                </a>
                            </span>
                        </FaqItem>

                        <FaqItem id="technology" question="What's the technology behind Verdra?">
                            "Verdra uses lightweight static analysis to scan serverless functions for common performance issues like database calls inside loops, large or unused imports, and over-provisioned memory. By analyzing the abstract syntax tree and control flow without running the code, Verdra helps developers catch inefficiencies early in the development process."
                        </FaqItem>

                        <FaqItem id="detects" question="What does Verdra detect?">
                            <ul class="space-y-2">
                                {CATEGORY_TABLE
                                    .iter()
                                    .map(|style| view! {
                                        <li>
                                            <span class="font-semibold text-gray-800">{style.title}</span>
                                            ": "
                                            {style.description}
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </FaqItem>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Collapsible question. Items open independently and all start closed.
#[component]
pub fn FaqItem(id: &'static str, question: &'static str, children: Children) -> impl IntoView {
    let (is_open, set_is_open) = create_signal(false);

    view! {
        <div class="border border-gray-200 rounded-xl overflow-hidden bg-white" data-faq=id>
            <button
                type="button"
                id=format!("faq-{id}-header")
                aria-controls=format!("faq-{id}-content")
                aria-expanded=move || is_open.get().to_string()
                class="w-full px-6 py-4 flex items-center justify-between gap-4 text-left hover:bg-gray-50 transition"
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                <span class="font-semibold text-gray-900">{question}</span>
                <span class="text-gray-500 transition-transform" class:rotate-180=move || is_open.get()>"▾"</span>
            </button>
            <div
                id=format!("faq-{id}-content")
                class="px-6 pb-4 text-gray-600 leading-relaxed"
                class:hidden=move || !is_open.get()
            >
                {children()}
            </div>
        </div>
    }
}
