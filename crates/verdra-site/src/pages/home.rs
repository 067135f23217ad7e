//! Landing page

use leptos::*;
use verdra_core::CATEGORY_TABLE;

use crate::components::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            <Hero/>

            // How It Works
            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl md:text-4xl font-bold text-center text-gray-900 mb-16">"How It Works"</h2>
                    <ol class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                        {SCAN_STEPS
                            .iter()
                            .enumerate()
                            .map(|(position, step)| view! { <StepCard position=position step=step/> })
                            .collect_view()}
                    </ol>
                </div>
            </section>

            // Detections
            <section id="detects" class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">"What Verdra Detects"</h2>
                        <p class="text-lg text-gray-600">
                            "Serverless bills grow one loop at a time. These are the patterns we flag."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        {CATEGORY_TABLE
                            .iter()
                            .map(|style| view! { <DetectionCard entry=style/> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <Signup/>

            <Faq/>

            // CTA Section
            <section class="py-20 bg-gradient-to-r from-emerald-600 to-teal-600 text-white">
                <div class="container mx-auto px-4 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold mb-6">"Ready to Cut Your Cloud Bill?"</h2>
                    <p class="text-xl text-emerald-100 mb-8">"Scan a repository now and see what it costs you."</p>
                    <a href="#hero" class="px-8 py-4 bg-white text-emerald-700 font-semibold rounded-lg hover:bg-gray-100 transition">
                        "Analyze a Repository"
                    </a>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_has_every_anchor() {
        let runtime = create_runtime();
        let html = view! { <HomePage/> }.into_view().render_to_string().to_string();
        runtime.dispose();

        for anchor in ["hero", "detects", "signup", "faq"] {
            assert!(html.contains(&format!(r#"id="{anchor}""#)), "missing #{anchor}");
        }
        for style in CATEGORY_TABLE.iter() {
            assert!(html.contains(style.title), "missing card for {}", style.key);
        }
        assert!(!html.contains("Analysis Results"));
    }
}
