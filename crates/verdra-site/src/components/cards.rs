//! Card components for the landing page

use leptos::*;
use verdra_core::CategoryStyle;

/// One category of finding, built from its presentation entry
#[component]
pub fn DetectionCard(entry: &'static CategoryStyle) -> impl IntoView {
    view! {
        <div
            class=format!("bg-white rounded-xl shadow-lg p-6 border-t-4 {}", entry.border_class)
            data-category=entry.key
        >
            <div class="text-4xl mb-4" style=format!("color: {}", entry.accent)>{entry.icon}</div>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{entry.title}</h3>
            <p class="text-gray-600">{entry.description}</p>
        </div>
    }
}

/// A stage of the scan, shown in the "How It Works" strip
pub struct ScanStep {
    pub title: &'static str,
    pub detail: &'static str,
}

pub static SCAN_STEPS: [ScanStep; 3] = [
    ScanStep {
        title: "Paste a Repository",
        detail: "Point Verdra at any public GitHub repository. No install, no configuration.",
    },
    ScanStep {
        title: "Static Analysis",
        detail: "The code is parsed and walked without being run, looking for patterns that waste compute.",
    },
    ScanStep {
        title: "Fix What Matters",
        detail: "Findings are grouped by kind with file and line, most costly first.",
    },
];

/// Numbered step; `position` is zero-based
#[component]
pub fn StepCard(position: usize, step: &'static ScanStep) -> impl IntoView {
    let number = position + 1;

    view! {
        <li class="flex items-start gap-4" data-step=number>
            <span class="shrink-0 w-10 h-10 rounded-lg bg-emerald-100 text-emerald-700 font-mono font-bold flex items-center justify-center">
                {format!("{number:02}")}
            </span>
            <div>
                <h3 class="font-semibold text-gray-900">{step.title}</h3>
                <p class="text-sm text-gray-600 mt-1">{step.detail}</p>
            </div>
        </li>
    }
}
