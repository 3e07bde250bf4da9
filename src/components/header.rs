//! Header Component
//!
//! Title bar with the mobile menu button and the signed-in user.

use leptos::prelude::*;

use super::icons::{self, Icon};

#[component]
pub fn Header(#[prop(into)] on_menu_click: Callback<()>) -> impl IntoView {
    view! {
        <header class="bg-gray-800 shadow-md p-4 flex justify-between items-center">
            <div class="flex items-center">
                <button
                    class="md:hidden mr-4 text-gray-400 hover:text-white"
                    on:click=move |_| on_menu_click.run(())
                >
                    <Icon path=icons::MENU class="w-6 h-6" />
                </button>
                <h1 class="text-xl font-bold text-white">"Sistem Inventaris"</h1>
            </div>
            <div class="flex items-center space-x-4">
                <span class="text-sm">"Selamat datang, Admin!"</span>
                <img
                    class="w-8 h-8 rounded-full"
                    src="https://placehold.co/40x40/6366f1/FFFFFF?text=A"
                    alt="Admin"
                />
            </div>
        </header>
    }
}
