//! Recent Products Component

use leptos::prelude::*;

use inventory_core::{recent_products, Product};

/// Latest additions, newest first
#[component]
pub fn RecentProducts(#[prop(into)] products: Signal<Vec<Product>>, limit: usize) -> impl IntoView {
    view! {
        <ul class="space-y-3">
            <For
                each=move || products.with(|p| recent_products(p, limit))
                key=|p| (p.id.clone(), p.version)
                children=move |p| {
                    view! {
                        <li class="flex justify-between items-center bg-gray-700 p-3 rounded-md">
                            <div>
                                <p class="font-semibold text-white">{p.name}</p>
                                <p class="text-sm text-gray-400">{p.category}</p>
                            </div>
                            <span class="font-bold text-indigo-400">{format!("{} Pcs", p.stock)}</span>
                        </li>
                    }
                }
            />
        </ul>
    }
}
