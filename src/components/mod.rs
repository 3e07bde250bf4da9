//! UI Components
//!
//! Stateless Leptos components: data and callbacks in, events out.

mod icons;
mod header;
mod sidebar;
mod stats_card;
mod category_chart;
mod recent_products;
mod dashboard;
mod product_table;
mod product_form;
mod confirm_modal;
mod loading_spinner;
mod error_banner;

pub use header::Header;
pub use sidebar::Sidebar;
pub use dashboard::Dashboard;
pub use product_table::ProductTable;
pub use product_form::ProductForm;
pub use confirm_modal::ConfirmModal;
pub use loading_spinner::LoadingSpinner;
pub use error_banner::ErrorBanner;
