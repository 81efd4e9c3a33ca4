//! Convergence curve rendered as an HTML chart with plotly

use std::fs;
use std::path::Path;

use plotly::common::{Line, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Plot, Scatter};

use crate::error::RecordError;

/// Build the chart: global best per generation against the iteration number
/// (counted from 0).
pub fn convergence_plot(trace: &[f64], title: &str) -> Plot {
    let iterations: Vec<usize> = (0..trace.len()).collect();
    let curve = Scatter::new(iterations, trace.to_vec())
        .mode(Mode::Lines)
        .name("global best")
        .line(Line::new().width(2.0).color("blue"));

    let layout = Layout::new()
        .title(Title::with_text(title))
        .x_axis(Axis::new().title(Title::with_text("Iteration number")))
        .y_axis(Axis::new().title(Title::with_text("Global optimal value")));

    let mut plot = Plot::new();
    plot.add_trace(curve);
    plot.set_layout(layout);
    plot
}

/// Write the convergence chart of `trace` to `path` as standalone HTML
pub fn plot_convergence(trace: &[f64], title: &str, path: &Path) -> Result<(), RecordError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let plot = convergence_plot(trace, title);
    fs::write(path, plot.to_html())?;
    log::info!("created convergence plot: {}", path.display());
    Ok(())
}
