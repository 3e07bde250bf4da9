//! Dashboard Component
//!
//! Headline statistics, the category chart and the latest products.

use leptos::prelude::*;

use inventory_core::format::{group_thousands, money};
use inventory_core::{DashboardStats, Product};

use super::category_chart::CategoryChart;
use super::icons;
use super::recent_products::RecentProducts;
use super::stats_card::StatsCard;

#[component]
pub fn Dashboard(
    #[prop(into)] products: Signal<Vec<Product>>,
    low_stock_threshold: u64,
    recent_limit: usize,
    #[prop(into)] currency: String,
) -> impl IntoView {
    let stats = Memo::new(move |_| {
        products.with(|p| DashboardStats::compute(p, low_stock_threshold))
    });

    let total_products = Signal::derive(move || stats.get().total_products.to_string());
    let total_stock = Signal::derive(move || group_thousands(stats.get().total_stock));
    let total_value = Signal::derive(move || money(&currency, stats.get().total_value));
    let low_stock = Signal::derive(move || stats.get().low_stock.to_string());

    view! {
        <div>
            <h2 class="text-3xl font-bold mb-6 text-white">"Dashboard"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                <StatsCard title="Total Jenis Produk" value=total_products icon=icons::BOX color="bg-indigo-500" />
                <StatsCard title="Total Stok" value=total_stock icon=icons::ARCHIVE color="bg-blue-500" />
                <StatsCard title="Total Nilai Inventaris" value=total_value icon=icons::DOLLAR color="bg-green-500" />
                <StatsCard title="Stok Hampir Habis" value=low_stock icon=icons::WARNING color="bg-red-500" />
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <div class="bg-gray-800 p-6 rounded-lg shadow-lg">
                    <h3 class="font-bold text-xl mb-4 text-white">"Stok per Kategori"</h3>
                    <CategoryChart products=products />
                </div>
                <div class="bg-gray-800 p-6 rounded-lg shadow-lg">
                    <h3 class="font-bold text-xl mb-4 text-white">"Produk Terbaru"</h3>
                    <RecentProducts products=products limit=recent_limit />
                </div>
            </div>
        </div>
    }
}
