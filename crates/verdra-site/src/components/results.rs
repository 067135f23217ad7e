//! Scan results panel

use leptos::*;
use verdra_core::{Issue, ResultsView, ScanResultSet, SectionView};

/// Grouped, collapsible display of a scan result set.
///
/// Renders nothing until a scan has completed (`results` is `None`).
#[component]
pub fn AnalysisResults(#[prop(into)] results: MaybeSignal<Option<ScanResultSet>>) -> impl IntoView {
    move || {
        results.with(|set| {
            set.as_ref()
                .map(|set| view! { <ResultsPanel results=ResultsView::build(set)/> })
        })
    }
}

#[component]
fn ResultsPanel(results: ResultsView) -> impl IntoView {
    let summary = results.summary();
    let clean = results.is_clean();
    let toggles = section_toggles(&results);

    view! {
        <div class="w-full my-8 p-8 rounded-2xl border border-slate-200 bg-gradient-to-br from-white to-slate-50 shadow-lg text-left">
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-2xl font-bold text-gray-900 tracking-tight">"Analysis Results"</h2>
                <span class="inline-flex items-center gap-1 px-3 py-1 text-sm font-medium rounded-full border border-emerald-600 text-emerald-700">
                    <span class="font-mono">">_"</span>
                    {summary}
                </span>
            </div>

            <hr class="mb-6 border-slate-200"/>

            {results
                .sections
                .into_iter()
                .zip(toggles)
                .map(|(section, expanded)| view! { <CategorySection section=section expanded=expanded/> })
                .collect_view()}

            {clean.then(|| view! { <EmptyState/> })}
        </div>
    }
}

/// One open/closed signal per section, seeded from the view model
fn section_toggles(results: &ResultsView) -> Vec<RwSignal<bool>> {
    results
        .sections
        .iter()
        .map(|section| create_rw_signal(section.expanded))
        .collect()
}

fn toggle(expanded: RwSignal<bool>) {
    expanded.update(|open| *open = !*open);
}

#[component]
fn CategorySection(section: SectionView, expanded: RwSignal<bool>) -> impl IntoView {
    let anchor = section.anchor().to_string();
    let count = section.count();
    let SectionView {
        title,
        icon,
        accent,
        border_class,
        issues,
        ..
    } = section;

    view! {
        <section
            class="mb-4 rounded-xl border border-slate-200 bg-white overflow-hidden"
            data-category=anchor.clone()
            data-count=count
            data-expanded=move || expanded.get().to_string()
        >
            <button
                type="button"
                id=format!("{anchor}-header")
                aria-controls=format!("{anchor}-content")
                aria-expanded=move || expanded.get().to_string()
                class="w-full min-h-14 px-5 py-3 flex items-center justify-between gap-3 text-left hover:bg-slate-50 transition"
                on:click=move |_| toggle(expanded)
            >
                <span class="flex items-center gap-3 font-semibold text-gray-900">
                    <span class="text-xl" style=format!("color: {accent}")>{icon}</span>
                    {title}
                    <span class="px-2 h-6 inline-flex items-center rounded-full bg-emerald-50 text-emerald-700 text-xs font-semibold">
                        {count}
                    </span>
                </span>
                <span
                    class="text-emerald-600 transition-transform"
                    class:rotate-180=move || expanded.get()
                >
                    "▾"
                </span>
            </button>

            <div
                id=format!("{anchor}-content")
                class="px-5 pt-1 pb-4"
                class:hidden=move || !expanded.get()
            >
                {issues
                    .into_iter()
                    .map(|issue| view! { <IssueRow issue=issue accent=accent border_class=border_class/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn IssueRow(issue: Issue, accent: &'static str, border_class: &'static str) -> impl IntoView {
    let line = format!("line {}", issue.line);

    view! {
        <div class=format!("flex items-start gap-3 mb-2 p-3 rounded-lg bg-slate-50 border-l-4 {border_class} hover:translate-x-1 transition")>
            <span class="mt-0.5 opacity-80" style=format!("color: {accent}")>"⚠"</span>
            <div class="flex flex-col gap-1">
                <span class="font-mono text-sm text-gray-800 break-all">{issue.filepath}</span>
                <div class="flex items-center gap-4 font-mono text-xs">
                    <span class="px-2 py-0.5 rounded bg-sky-50 text-sky-700">{line}</span>
                    <span class="px-2 py-0.5 rounded bg-emerald-50 text-emerald-700">{issue.name}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12" data-empty-state="true">
            <h3 class="text-lg font-semibold text-emerald-700 mb-1">"No issues found in your codebase"</h3>
            <p class="text-sm text-gray-600">"Great job! Your code looks clean and optimized."</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdra_core::Category;

    fn render(results: Option<ScanResultSet>) -> String {
        let runtime = create_runtime();
        let html = view! { <AnalysisResults results=results/> }
            .into_view()
            .render_to_string()
            .to_string();
        runtime.dispose();
        html
    }

    /// Visible text with tags and hydration comments removed
    fn text_of(html: &str) -> String {
        let mut text = String::new();
        let mut in_tag = false;
        for c in html.chars() {
            match c {
                '<' => in_tag = true,
                '>' => in_tag = false,
                _ if !in_tag => text.push(c),
                _ => {}
            }
        }
        text
    }

    fn empty_set() -> ScanResultSet {
        Category::KNOWN
            .iter()
            .cloned()
            .map(|category| (category, Vec::new()))
            .collect()
    }

    #[test]
    fn test_absent_results_render_nothing() {
        let html = render(None);
        assert!(!html.contains("Analysis Results"));
        assert!(!html.contains("<div"));
        assert!(text_of(&html).trim().is_empty());
    }

    #[test]
    fn test_all_empty_shows_empty_state() {
        let html = render(Some(empty_set()));
        assert!(html.contains("No issues found in your codebase"));
        assert!(html.contains("data-empty-state"));
        assert!(!html.contains("data-category="));
        assert!(text_of(&html).contains("0 issues found"));
    }

    #[test]
    fn test_single_db_loop_section() {
        let set = empty_set().with_category(
            Category::DbLoops,
            vec![verdra_core::Issue::new("a.py", 12, "query")],
        );
        let html = render(Some(set));
        let text = text_of(&html);

        assert_eq!(html.matches("data-category=").count(), 1);
        assert!(html.contains(r#"data-category="dbLoops""#));
        assert!(html.contains(r#"data-count="1""#));
        assert!(html.contains(r#"data-expanded="true""#));
        assert!(text.contains("DB Calls in Loops"));
        assert!(text.contains("a.py"));
        assert!(text.contains("line 12"));
        assert!(text.contains("query"));
        assert!(text.contains("1 issue found"));
        assert!(!html.contains("No issues found"));
    }

    #[test]
    fn test_only_first_section_starts_open() {
        let set = empty_set()
            .with_category(Category::LoggingLoops, vec![verdra_core::Issue::new("a.py", 3, "log")])
            .with_category(
                Category::UnusedImports,
                vec![
                    verdra_core::Issue::new("b.py", 1, "os"),
                    verdra_core::Issue::new("b.py", 2, "sys"),
                ],
            );
        let html = render(Some(set));

        assert_eq!(html.matches("data-category=").count(), 2);
        assert_eq!(html.matches(r#"data-expanded="true""#).count(), 1);
        assert_eq!(html.matches(r#"data-expanded="false""#).count(), 1);
        assert!(text_of(&html).contains("3 issues found"));

        let logging = html.find(r#"data-category="loggingLoops""#).unwrap();
        let imports = html.find(r#"data-category="unusedImports""#).unwrap();
        assert!(logging < imports);
    }

    #[test]
    fn test_unknown_category_uses_raw_key() {
        let set = ScanResultSet::new().with_category(
            Category::from_key("mysteryCategory"),
            vec![verdra_core::Issue::new("x.py", 5, "thing")],
        );
        let html = render(Some(set));

        assert!(html.contains(r#"data-category="mysteryCategory""#));
        assert!(html.contains("border-l-4 border-emerald-600"));
        assert!(text_of(&html).contains("mysteryCategory"));
    }

    #[test]
    fn test_toggle_stays_local_to_its_section() {
        let runtime = create_runtime();
        let set = ScanResultSet::new()
            .with_category(Category::DbLoops, vec![verdra_core::Issue::new("a.py", 1, "q")])
            .with_category(Category::LoggingLoops, vec![verdra_core::Issue::new("b.py", 2, "log")])
            .with_category(Category::UnusedImports, vec![verdra_core::Issue::new("c.py", 3, "os")]);
        let results = ResultsView::build(&set);
        let toggles = section_toggles(&results);
        let states = || toggles.iter().map(|t| t.get_untracked()).collect::<Vec<_>>();

        assert_eq!(states(), [true, false, false]);

        toggle(toggles[1]);
        assert_eq!(states(), [true, true, false]);

        toggle(toggles[0]);
        assert_eq!(states(), [false, true, false]);

        toggle(toggles[1]);
        assert_eq!(states(), [false, false, false]);

        let third = toggles[2];
        let section = results.sections[2].clone();
        let closed = view! { <CategorySection section=section expanded=third/> }
            .into_view()
            .render_to_string()
            .to_string();
        assert!(closed.contains(r#"data-expanded="false""#));

        toggle(third);
        let section = results.sections[2].clone();
        let open = view! { <CategorySection section=section expanded=third/> }
            .into_view()
            .render_to_string()
            .to_string();
        assert!(open.contains(r#"data-expanded="true""#));
        assert_eq!(states(), [false, false, true]);

        runtime.dispose();
    }
}
