//! Inventory Frontend App
//!
//! Wires the store, the service and the page layout.

use leptos::prelude::*;
use reactive_stores::Store;

use inventory_core::{
    Activity, Controller, FormMode, InventoryService, Page, Product, ProductDraft, ProductId,
    Route,
};

use crate::browser::{load_config, BrowserStorage, TimerLatency};
use crate::components::{
    ConfirmModal, Dashboard, ErrorBanner, Header, LoadingSpinner, ProductForm, ProductTable,
    Sidebar,
};
use crate::context::{use_app_context, AppContext};
use crate::store::{AppState, AppStateStoreFields};

/// What the main area renders. Kept separate from the controller so that
/// unrelated controller changes do not rebuild the page.
#[derive(Debug, Clone, PartialEq)]
enum PageView {
    Loading,
    Dashboard,
    Products,
    Form(Option<Product>, Option<ProductDraft>),
}

impl PageView {
    fn of(controller: &Controller) -> Self {
        // Confirming keeps the page visible under the modal
        if matches!(controller.activity(), Activity::Loading(_)) {
            return PageView::Loading;
        }
        match controller.page() {
            Page::Dashboard => PageView::Dashboard,
            Page::Products => PageView::Products,
            Page::Form(mode) => {
                let initial = match mode {
                    FormMode::Create => None,
                    FormMode::Edit(product) => Some(product.clone()),
                };
                PageView::Form(initial, controller.unsaved_draft().cloned())
            }
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let (controller, initial) = Controller::start();
    let store = Store::new(AppState::new(controller, config.clone()));
    provide_context(store);

    let service = InventoryService::new(BrowserStorage, TimerLatency, &config);
    let ctx = AppContext::new(store, service);
    provide_context(ctx);
    ctx.run(initial);

    view! { <Layout /> }
}

#[component]
fn Layout() -> impl IntoView {
    let ctx = use_app_context();
    let controller = ctx.store.controller();
    let config = ctx.store.config().get_untracked();

    let view_state = Memo::new(move |_| controller.with(PageView::of));
    let products = Memo::new(move |_| controller.with(|c| c.products().to_vec()));
    let route = Memo::new(move |_| controller.with(|c| c.page().route()));
    let sidebar_open = Memo::new(move |_| controller.with(Controller::sidebar_open));
    let confirmation = Memo::new(move |_| controller.with(|c| c.confirmation().cloned()));
    let error = Memo::new(move |_| controller.with(|c| c.error().cloned()));
    let can_retry = Memo::new(move |_| controller.with(Controller::can_retry_load));

    let threshold = config.low_stock_threshold;
    let recent_limit = config.recent_limit;
    let currency = config.currency_prefix.clone();

    let page = move || match view_state.get() {
        PageView::Loading => view! { <LoadingSpinner /> }.into_any(),
        PageView::Dashboard => view! {
            <Dashboard
                products=products
                low_stock_threshold=threshold
                recent_limit=recent_limit
                currency=currency.clone()
            />
        }
        .into_any(),
        PageView::Products => view! {
            <ProductTable
                products=products
                currency=currency.clone()
                on_edit=move |id: ProductId| ctx.edit(id)
                on_delete=move |id: ProductId| ctx.request_delete(id)
            />
        }
        .into_any(),
        PageView::Form(initial, unsaved) => view! {
            <ProductForm
                initial=initial
                unsaved=unsaved
                on_save=move |draft: ProductDraft| ctx.submit(draft)
                on_cancel=move |_: ()| ctx.navigate(Route::Products)
            />
        }
        .into_any(),
    };

    view! {
        <div class="flex h-screen bg-gray-900 text-gray-200 font-sans">
            <Sidebar
                current=route
                open=sidebar_open
                on_navigate=move |r: Route| ctx.navigate(r)
                on_close=move |_: ()| ctx.set_sidebar_open(false)
            />
            <div class="flex-1 flex flex-col overflow-hidden">
                <Header on_menu_click=move |_: ()| ctx.set_sidebar_open(true) />
                <main class="flex-1 overflow-x-hidden overflow-y-auto bg-gray-900 p-6">
                    <ErrorBanner
                        error=error
                        can_retry=can_retry
                        on_retry=move |_: ()| ctx.reload()
                        on_dismiss=move |_: ()| ctx.dismiss_error()
                        on_reset=move |_: ()| ctx.reset()
                    />
                    {page}
                </main>
            </div>
            <ConfirmModal
                confirmation=confirmation
                on_confirm=move |_: ()| ctx.confirm_delete()
                on_cancel=move |_: ()| ctx.cancel_delete()
            />
        </div>
    }
}
