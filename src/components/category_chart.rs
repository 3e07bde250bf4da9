//! Category Chart Component
//!
//! Stock per category as a Chart.js doughnut, with a plain legend that
//! still shows when Chart.js is unavailable.

use leptos::html::Canvas;
use leptos::prelude::*;

use inventory_core::format::group_thousands;
use inventory_core::{category_totals, Product};

use crate::chart::DoughnutChart;

#[component]
pub fn CategoryChart(#[prop(into)] products: Signal<Vec<Product>>) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();
    let chart = StoredValue::new_local(None::<DoughnutChart>);
    let totals = Memo::new(move |_| products.with(|p| category_totals(p)));

    // Redraw whenever the totals change; the previous instance is destroyed first
    Effect::new(move |_| {
        let totals = totals.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        chart.update_value(|slot| {
            *slot = None;
            match DoughnutChart::render(&canvas, &totals) {
                Ok(drawn) => *slot = Some(drawn),
                Err(e) => tracing::warn!(error = %e, "chart rendering unavailable"),
            }
        });
    });

    on_cleanup(move || chart.update_value(|slot| *slot = None));

    view! {
        <div class="h-80">
            <canvas node_ref=canvas_ref></canvas>
        </div>
        <ul class="mt-4 grid grid-cols-2 gap-2 text-sm text-gray-300">
            <For
                each=move || totals.get()
                key=|t| (t.category.clone(), t.stock)
                children=move |t| {
                    view! {
                        <li class="flex justify-between bg-gray-700 px-3 py-1 rounded">
                            <span>{t.category}</span>
                            <span class="font-semibold">{group_thousands(t.stock)}</span>
                        </li>
                    }
                }
            />
        </ul>
    }
}
