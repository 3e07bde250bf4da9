//! Stats Card Component

use leptos::prelude::*;

use super::icons::Icon;

/// One headline figure on the dashboard
#[component]
pub fn StatsCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    icon: &'static str,
    color: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 p-6 rounded-lg shadow-lg flex items-center space-x-4">
            <div class=format!("p-3 rounded-full {}", color)>
                <Icon path=icon class="w-6 h-6 text-white" />
            </div>
            <div>
                <p class="text-sm text-gray-400">{title}</p>
                <p class="text-2xl font-bold text-white">{move || value.get()}</p>
            </div>
        </div>
    }
}
