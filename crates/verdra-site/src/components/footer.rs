use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-emerald-950 text-emerald-100 py-10">
            <div class="container mx-auto px-4 flex flex-col md:flex-row items-center justify-between gap-4">
                <div class="flex items-center">
                    <span class="text-xl mr-2">"🌿"</span>
                    <span class="font-semibold text-white">"Verdra"</span>
                    <span class="ml-3 text-sm text-emerald-300">"Changing how we see code"</span>
                </div>
                <div class="flex space-x-6 text-sm">
                    <a href="#detects" class="hover:text-white transition">"What We Detect"</a>
                    <a href="#faq" class="hover:text-white transition">"FAQ"</a>
                    <a href="#signup" class="hover:text-white transition">"Join Beta"</a>
                </div>
                <p class="text-xs text-emerald-400">"© 2025 Verdra"</p>
            </div>
        </footer>
    }
}
