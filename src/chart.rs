//! Chart.js Bindings
//!
//! Category doughnut chart drawn by the global `Chart` constructor that
//! `index.html` loads.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use inventory_core::CategoryTotal;

#[wasm_bindgen]
extern "C" {
    type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &web_sys::HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &Chart);
}

const PALETTE: &[&str] = &[
    "rgba(99, 102, 241, 0.7)",
    "rgba(59, 130, 246, 0.7)",
    "rgba(16, 185, 129, 0.7)",
    "rgba(239, 68, 68, 0.7)",
    "rgba(245, 158, 11, 0.7)",
];

// ========================
// Chart.js configuration
// ========================

#[derive(Serialize)]
struct ChartConfig<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    data: ChartData<'a>,
    options: ChartOptions,
}

#[derive(Serialize)]
struct ChartData<'a> {
    labels: Vec<&'a str>,
    datasets: Vec<Dataset>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Dataset {
    label: &'static str,
    data: Vec<f64>,
    background_color: &'static [&'static str],
    border_color: &'static str,
    border_width: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChartOptions {
    responsive: bool,
    maintain_aspect_ratio: bool,
    plugins: Plugins,
}

#[derive(Serialize)]
struct Plugins {
    legend: Legend,
}

#[derive(Serialize)]
struct Legend {
    position: &'static str,
    labels: LegendLabels,
}

#[derive(Serialize)]
struct LegendLabels {
    color: &'static str,
    font: Font,
}

#[derive(Serialize)]
struct Font {
    family: &'static str,
}

impl<'a> ChartConfig<'a> {
    fn doughnut(totals: &'a [CategoryTotal]) -> Self {
        Self {
            kind: "doughnut",
            data: ChartData {
                labels: totals.iter().map(|t| t.category.as_str()).collect(),
                datasets: vec![Dataset {
                    label: "Stok",
                    data: totals.iter().map(|t| t.stock as f64).collect(),
                    background_color: PALETTE,
                    border_color: "#4B5563",
                    border_width: 2,
                }],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                plugins: Plugins {
                    legend: Legend {
                        position: "bottom",
                        labels: LegendLabels {
                            color: "#D1D5DB",
                            font: Font {
                                family: "'Poppins', sans-serif",
                            },
                        },
                    },
                },
            },
        }
    }
}

/// A live chart; dropping it destroys the Chart.js instance
pub struct DoughnutChart(Chart);

impl DoughnutChart {
    pub fn render(
        canvas: &web_sys::HtmlCanvasElement,
        totals: &[CategoryTotal],
    ) -> Result<Self, String> {
        let config = serde_wasm_bindgen::to_value(&ChartConfig::doughnut(totals))
            .map_err(|e| e.to_string())?;
        Chart::new(canvas, &config)
            .map(Self)
            .map_err(|e| e.as_string().unwrap_or_else(|| format!("{:?}", e)))
    }
}

impl Drop for DoughnutChart {
    fn drop(&mut self) {
        self.0.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_shape() {
        let totals = vec![
            CategoryTotal { category: "Elektronik".into(), stock: 25 },
            CategoryTotal { category: "Buku".into(), stock: 120 },
        ];
        let json = serde_json::to_value(ChartConfig::doughnut(&totals)).unwrap();
        assert_eq!(json["type"], "doughnut");
        assert_eq!(json["data"]["labels"], serde_json::json!(["Elektronik", "Buku"]));
        assert_eq!(json["data"]["datasets"][0]["data"], serde_json::json!([25.0, 120.0]));
        assert_eq!(json["options"]["maintainAspectRatio"], false);
        assert_eq!(json["options"]["plugins"]["legend"]["position"], "bottom");
    }
}
