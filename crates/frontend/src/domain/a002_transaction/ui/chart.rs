use crate::domain::a002_transaction::chart::ChartSeries;
use charming::{
    component::{Axis, Title},
    element::AxisType,
    series::Line,
    Chart, WasmRenderer,
};
use leptos::prelude::*;

const CHART_WIDTH: u32 = 640;
const CHART_HEIGHT: u32 = 360;

/// Line chart over a [`ChartSeries`].
///
/// Renders into the container div after mount and re-renders whenever the
/// series changes. An empty series produces an empty chart, not an error.
#[component]
pub fn LineChart(
    /// DOM id of the container div; must be unique per chart on the page.
    #[prop(into)] container_id: String,
    #[prop(into)] series: Signal<ChartSeries>,
) -> impl IntoView {
    let render_target = container_id.clone();

    Effect::new(move |_| {
        let series = series.get();
        let chart = Chart::new()
            .title(Title::new().text(series.label.clone()))
            .x_axis(Axis::new().type_(AxisType::Category).data(series.labels))
            .y_axis(Axis::new().type_(AxisType::Value))
            .series(Line::new().name(series.label).data(series.values));

        if let Err(err) = WasmRenderer::new(CHART_WIDTH, CHART_HEIGHT).render(&render_target, &chart)
        {
            log::error!("Failed to render chart '{}': {:?}", render_target, err);
        }
    });

    view! {
        <div class="chart-card" id=container_id></div>
    }
}
