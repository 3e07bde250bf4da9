//! Confirmation Modal Component
//!
//! Shown while the controller is confirming a delete. Removal only
//! happens through `on_confirm`.

use leptos::prelude::*;

use inventory_core::Confirmation;

#[component]
pub fn ConfirmModal(
    #[prop(into)] confirmation: Signal<Option<Confirmation>>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    move || {
        confirmation.get().map(|c| {
            view! {
                <div class="fixed inset-0 bg-black bg-opacity-60 z-50 flex justify-center items-center">
                    <div class="bg-gray-800 rounded-lg shadow-xl p-6 w-full max-w-md mx-4">
                        <h3 class="text-xl font-bold text-white mb-4">{c.title}</h3>
                        <p class="text-gray-300 mb-6">{c.message}</p>
                        <div class="flex justify-end space-x-4">
                            <button
                                class="px-5 py-2.5 text-sm font-medium text-gray-300 bg-gray-600 rounded-lg hover:bg-gray-700"
                                on:click=move |_| on_cancel.run(())
                            >
                                "Batal"
                            </button>
                            <button
                                class="text-white bg-red-600 hover:bg-red-700 font-medium rounded-lg text-sm px-5 py-2.5"
                                on:click=move |_| on_confirm.run(())
                            >
                                "Ya, Lanjutkan"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
