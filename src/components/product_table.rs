//! Product Table Component
//!
//! Lists every product with edit and delete actions.

use leptos::prelude::*;

use inventory_core::format::money;
use inventory_core::{Product, ProductId};

#[component]
pub fn ProductTable(
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(into)] currency: String,
    #[prop(into)] on_edit: Callback<ProductId>,
    #[prop(into)] on_delete: Callback<ProductId>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 p-6 rounded-lg shadow-lg">
            <h2 class="text-2xl font-bold mb-6 text-white">"Daftar Produk"</h2>
            <div class="overflow-x-auto">
                <table class="w-full text-sm text-left text-gray-400">
                    <thead class="text-xs text-gray-300 uppercase bg-gray-700">
                        <tr>
                            <th scope="col" class="px-6 py-3">"Nama Produk"</th>
                            <th scope="col" class="px-6 py-3">"Kategori"</th>
                            <th scope="col" class="px-6 py-3">"Stok"</th>
                            <th scope="col" class="px-6 py-3">"Harga"</th>
                            <th scope="col" class="px-6 py-3 text-center">"Aksi"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || products.get()
                            // Version is part of the key so edited rows re-render
                            key=|p| (p.id.clone(), p.version)
                            children=move |p| {
                                let edit_id = p.id.clone();
                                let delete_id = p.id.clone();
                                view! {
                                    <tr class="bg-gray-800 border-b border-gray-700 hover:bg-gray-600">
                                        <th scope="row" class="px-6 py-4 font-medium text-white whitespace-nowrap">
                                            {p.name}
                                        </th>
                                        <td class="px-6 py-4">{p.category}</td>
                                        <td class="px-6 py-4">{p.stock}</td>
                                        <td class="px-6 py-4">{money(&currency, p.price)}</td>
                                        <td class="px-6 py-4 text-center space-x-2">
                                            <button
                                                class="font-medium text-indigo-400 hover:underline"
                                                on:click=move |_| on_edit.run(edit_id.clone())
                                            >
                                                "Ubah"
                                            </button>
                                            <button
                                                class="font-medium text-red-500 hover:underline"
                                                on:click=move |_| on_delete.run(delete_id.clone())
                                            >
                                                "Hapus"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || products.with(Vec::is_empty)>
                    <p class="py-6 text-center text-gray-500">"Belum ada produk."</p>
                </Show>
            </div>
        </div>
    }
}
