//! Sidebar Component
//!
//! Navigation links. Slides in over the page on small screens.

use leptos::prelude::*;

use inventory_core::Route;

use super::icons::{self, Icon};

fn route_icon(route: Route) -> &'static str {
    match route {
        Route::Dashboard => icons::HOME,
        Route::Products => icons::BOX,
        Route::NewProduct => icons::PLUS_CIRCLE,
    }
}

#[component]
pub fn Sidebar(
    #[prop(into)] current: Signal<Route>,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_navigate: Callback<Route>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let backdrop_class = move || {
        if open.get() {
            "fixed inset-0 bg-black bg-opacity-50 z-20 md:hidden block"
        } else {
            "fixed inset-0 bg-black bg-opacity-50 z-20 md:hidden hidden"
        }
    };
    let aside_class = move || {
        format!(
            "absolute md:relative z-30 md:z-auto bg-gray-800 w-64 min-h-screen flex-shrink-0 p-4 transform {} md:translate-x-0 transition-transform duration-300 ease-in-out",
            if open.get() { "translate-x-0" } else { "-translate-x-full" }
        )
    };

    view! {
        <div class=backdrop_class on:click=move |_| on_close.run(())></div>
        <aside class=aside_class>
            <div class="flex items-center mb-8">
                <Icon path=icons::LOGO class="w-8 h-8 text-indigo-500" />
                <span class="text-white text-2xl font-bold ml-2">"Inventaris"</span>
            </div>
            <nav class="space-y-2">
                {Route::ALL
                    .into_iter()
                    .map(|route| {
                        let link_class = move || {
                            if current.get() == route {
                                "flex items-center px-4 py-3 text-sm font-medium rounded-lg transition-colors duration-200 bg-indigo-600 text-white"
                            } else {
                                "flex items-center px-4 py-3 text-sm font-medium rounded-lg transition-colors duration-200 text-gray-300 hover:bg-gray-700 hover:text-white"
                            }
                        };
                        view! {
                            <a
                                href="#"
                                class=link_class
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    on_navigate.run(route);
                                }
                            >
                                <Icon path=route_icon(route) class="w-5 h-5" />
                                <span class="ml-3">{route.label()}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
