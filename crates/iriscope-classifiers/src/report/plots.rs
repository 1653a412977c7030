use plotly::layout::{Axis, Layout};
use plotly::{Bar, Plot};

/// Plot the per-class probability distribution as a bar chart.
pub fn plot_probability_bar(
    probabilities: &[f32],
    target_names: &[&str],
    title: &str,
) -> Result<Plot, String> {
    if probabilities.len() != target_names.len() {
        return Err(format!(
            "probabilities ({}) and target names ({}) must have the same length",
            probabilities.len(),
            target_names.len()
        ));
    }

    let species: Vec<String> = target_names.iter().map(|name| name.to_string()).collect();
    let values: Vec<f64> = probabilities.iter().map(|p| *p as f64).collect();

    let trace = Bar::new(species, values).name("Probability");

    let layout = Layout::new()
        .title(title)
        .x_axis(Axis::new().title("Species"))
        .y_axis(Axis::new().title("Probability"));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);

    Ok(plot)
}
