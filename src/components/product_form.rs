//! Product Form Component
//!
//! Create and edit form. Field text is parsed on submit; the controller
//! binds the draft to the product being edited.

use leptos::prelude::*;

use inventory_core::{Product, ProductDraft};

/// Raw text of the form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub category: String,
    pub stock: String,
    pub price: String,
}

impl FormFields {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            stock: product.stock.to_string(),
            price: product.price.to_string(),
        }
    }

    /// Restore what the user typed before a failed save
    pub fn from_draft(draft: &ProductDraft) -> Self {
        Self {
            name: draft.name.clone().unwrap_or_default(),
            category: draft.category.clone().unwrap_or_default(),
            stock: draft.stock.map(|s| s.to_string()).unwrap_or_default(),
            price: draft.price.map(|p| p.to_string()).unwrap_or_default(),
        }
    }

    /// Validate and build a full draft. The error is shown under the form.
    pub fn to_draft(&self) -> Result<ProductDraft, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Nama produk wajib diisi.".to_string());
        }
        let category = self.category.trim();
        if category.is_empty() {
            return Err("Kategori wajib diisi.".to_string());
        }
        let stock = parse_amount(&self.stock, "Stok")?;
        let price = parse_amount(&self.price, "Harga")?;
        Ok(ProductDraft::full(None, name, category, stock, price))
    }
}

fn parse_amount(raw: &str, label: &str) -> Result<u64, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(format!("{} wajib diisi.", label));
    }
    raw.parse::<u64>()
        .map_err(|_| format!("{} harus berupa bilangan bulat tidak negatif.", label))
}

#[component]
pub fn ProductForm(
    initial: Option<Product>,
    unsaved: Option<ProductDraft>,
    #[prop(into)] on_save: Callback<ProductDraft>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = initial.is_some();
    let start = match (&unsaved, &initial) {
        (Some(draft), _) => FormFields::from_draft(draft),
        (None, Some(product)) => FormFields::from_product(product),
        (None, None) => FormFields::default(),
    };
    let fields = RwSignal::new(start);
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match fields.with(FormFields::to_draft) {
            Ok(draft) => {
                error.set(None);
                on_save.run(draft);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    let title = if is_edit { "Ubah Produk" } else { "Tambah Produk Baru" };
    let input_class = "bg-gray-700 border border-gray-600 text-white text-sm rounded-lg focus:ring-indigo-500 focus:border-indigo-500 block w-full p-2.5";
    let label_class = "block mb-2 text-sm font-medium text-gray-300";

    view! {
        <div class="bg-gray-800 p-8 rounded-lg shadow-lg max-w-2xl mx-auto">
            <h2 class="text-2xl font-bold mb-6 text-white">{title}</h2>
            <form on:submit=submit>
                <div class="mb-4">
                    <label for="name" class=label_class>"Nama Produk"</label>
                    <input
                        type="text"
                        id="name"
                        class=input_class
                        prop:value=move || fields.with(|f| f.name.clone())
                        on:input=move |ev| fields.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="mb-4">
                    <label for="category" class=label_class>"Kategori"</label>
                    <input
                        type="text"
                        id="category"
                        class=input_class
                        prop:value=move || fields.with(|f| f.category.clone())
                        on:input=move |ev| fields.update(|f| f.category = event_target_value(&ev))
                    />
                </div>
                <div class="grid md:grid-cols-2 md:gap-6">
                    <div class="mb-4">
                        <label for="stock" class=label_class>"Stok"</label>
                        <input
                            type="number"
                            id="stock"
                            min="0"
                            class=input_class
                            prop:value=move || fields.with(|f| f.stock.clone())
                            on:input=move |ev| fields.update(|f| f.stock = event_target_value(&ev))
                        />
                    </div>
                    <div class="mb-4">
                        <label for="price" class=label_class>"Harga (Rp)"</label>
                        <input
                            type="number"
                            id="price"
                            min="0"
                            class=input_class
                            prop:value=move || fields.with(|f| f.price.clone())
                            on:input=move |ev| fields.update(|f| f.price = event_target_value(&ev))
                        />
                    </div>
                </div>
                {move || error.get().map(|message| view! {
                    <p class="mb-4 text-sm text-red-400">{message}</p>
                })}
                <div class="flex justify-end space-x-4 mt-6">
                    <button
                        type="button"
                        class="px-5 py-2.5 text-sm font-medium text-gray-300 bg-gray-600 rounded-lg hover:bg-gray-700"
                        on:click=move |_| on_cancel.run(())
                    >
                        "Batal"
                    </button>
                    <button
                        type="submit"
                        class="text-white bg-indigo-600 hover:bg-indigo-700 font-medium rounded-lg text-sm px-5 py-2.5"
                    >
                        "Simpan Produk"
                    </button>
                </div>
            </form>
        </div>
    }
}
