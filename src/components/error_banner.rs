//! Error Banner Component
//!
//! Dismissible service error. Offers a reset when stored data is corrupt
//! and another attempt when loading failed for any other reason.

use leptos::prelude::*;

use inventory_core::InventoryError;

/// Banner text for a service error
pub fn banner_message(error: &InventoryError) -> String {
    match error {
        InventoryError::Storage(reason) => {
            format!("Penyimpanan tidak dapat diakses ({}).", reason)
        }
        InventoryError::Corrupt { key, .. } => {
            format!("Data tersimpan di '{}' rusak dan tidak dapat dibaca.", key)
        }
        InventoryError::NotFound(id) => {
            format!("Produk {} tidak ditemukan. Mungkin sudah dihapus.", id)
        }
        InventoryError::InvalidInput(reason) => format!("Data produk tidak valid: {}.", reason),
        InventoryError::Config(reason) => format!("Pengaturan tidak valid: {}.", reason),
    }
}

#[component]
pub fn ErrorBanner(
    #[prop(into)] error: Signal<Option<InventoryError>>,
    #[prop(into)] can_retry: Signal<bool>,
    #[prop(into)] on_retry: Callback<()>,
    #[prop(into)] on_dismiss: Callback<()>,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    move || {
        error.get().map(|e| {
            let can_reset = e.is_recoverable_by_reset();
            view! {
                <div class="mb-6 flex items-center justify-between bg-red-900 text-red-100 px-4 py-3 rounded-lg">
                    <span class="text-sm">{banner_message(&e)}</span>
                    <div class="flex space-x-3">
                        <Show when=move || can_retry.get()>
                            <button
                                class="text-sm font-medium underline"
                                on:click=move |_| on_retry.run(())
                            >
                                "Coba lagi"
                            </button>
                        </Show>
                        <Show when=move || can_reset>
                            <button
                                class="text-sm font-medium underline"
                                on:click=move |_| on_reset.run(())
                            >
                                "Reset data"
                            </button>
                        </Show>
                        <button class="text-sm font-medium" on:click=move |_| on_dismiss.run(())>
                            "Tutup"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
