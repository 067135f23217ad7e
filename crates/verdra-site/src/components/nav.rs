//! Top navigation

use leptos::*;

/// In-page sections reachable from the nav, `(anchor, label)`
const SECTIONS: [(&str, &str); 4] = [
    ("#hero", "Analyze"),
    ("#detects", "What We Detect"),
    ("#signup", "Join Beta"),
    ("#faq", "FAQ"),
];

#[component]
pub fn MarketingNav() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let close_menu = Callback::new(move |_| set_menu_open.set(false));

    view! {
        <nav class="bg-white/90 backdrop-blur border-b border-emerald-100 sticky top-0 z-50">
            <div class="container mx-auto px-4 h-16 flex items-center justify-between">
                <a href="#hero" class="flex items-center gap-2 text-xl font-bold text-emerald-900">
                    <span class="text-2xl">"🌿"</span>
                    "Verdra"
                </a>

                <div class="hidden md:flex items-center gap-8">
                    <SectionLinks link_class="text-gray-600 hover:text-emerald-700 transition"/>
                    <a href="#signup" class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white font-medium rounded-lg transition">
                        "Get Early Access"
                    </a>
                </div>

                <button
                    type="button"
                    class="md:hidden w-10 h-10 rounded-md text-2xl text-emerald-900 hover:bg-emerald-50"
                    aria-label="Toggle menu"
                    aria-controls="mobile-menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <div
                id="mobile-menu"
                class="md:hidden border-t border-emerald-100 px-4 py-4 flex flex-col gap-3"
                class:hidden=move || !menu_open.get()
            >
                <SectionLinks link_class="text-gray-700" on_pick=close_menu/>
            </div>
        </nav>
    }
}

#[component]
fn SectionLinks(
    link_class: &'static str,
    #[prop(optional, into)] on_pick: Option<Callback<()>>,
) -> impl IntoView {
    SECTIONS
        .iter()
        .map(|(href, label)| {
            view! {
                <a
                    href=*href
                    class=link_class
                    on:click=move |_| {
                        if let Some(on_pick) = on_pick {
                            on_pick.call(());
                        }
                    }
                >
                    {*label}
                </a>
            }
        })
        .collect_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_menu_starts_closed() {
        let runtime = create_runtime();
        let html = view! { <MarketingNav/> }.into_view().render_to_string().to_string();
        runtime.dispose();

        for (href, _) in SECTIONS {
            let links = html.matches(&format!(r##"href="{href}""##)).count();
            assert!(links >= 2, "{href} linked {links} times");
        }
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains("☰"));
    }
}
