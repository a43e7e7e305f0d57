use super::*;

fn dataset(label: &str, data: &[f64]) -> Dataset {
    Dataset {
        label: label.to_owned(),
        data: data.to_vec(),
    }
}

// =============================================================
// Axis routing (price vs score)
// =============================================================

#[test]
fn price_bounds_only_consider_price_series() {
    let datasets = vec![
        dataset("Price per sqft", &[5200.0, 5600.0]),
        dataset("Demand Score", &[10.0, 99.0]),
    ];
    assert_eq!(price_bounds(&datasets), (5200.0, 5600.0));
}

#[test]
fn price_bounds_without_price_series_fall_back() {
    let datasets = vec![dataset("Demand Score", &[10.0, 99.0])];
    assert_eq!(price_bounds(&datasets), (0.0, 1.0));
}

#[test]
fn flat_price_series_is_padded_to_a_visible_range() {
    let datasets = vec![dataset("Avg Price", &[5000.0, 5000.0])];
    assert_eq!(price_bounds(&datasets), (4999.0, 5001.0));
}

#[test]
fn series_colors_follow_classification() {
    assert_eq!(series_color(true), "#4361ee");
    assert_eq!(series_color(false), "#e63946");
}

// =============================================================
// Geometry
// =============================================================

#[test]
fn x_positions_span_the_padded_plot() {
    assert_eq!(x_position(0, 2), PAD);
    assert_eq!(x_position(1, 2), PLOT_WIDTH - PAD);
}

#[test]
fn single_point_is_centered() {
    assert_eq!(x_position(0, 1), PLOT_WIDTH / 2.0);
}

#[test]
fn y_positions_invert_the_axis() {
    // Axis bottom for the minimum, axis top for the maximum.
    assert_eq!(y_position(0.0, 0.0, 100.0), PLOT_HEIGHT - PAD);
    assert_eq!(y_position(100.0, 0.0, 100.0), PAD);
}

#[test]
fn polyline_is_clamped_to_label_count() {
    let points = polyline_points(&[0.0, 50.0, 100.0, 75.0], 2, 0.0, 100.0);
    assert_eq!(points.split(' ').count(), 2);
}

// =============================================================
// Tooltip formats
// =============================================================

#[test]
fn price_tooltips_use_currency() {
    assert_eq!(
        tooltip_label("Price per sqft", 5400.0, true),
        "Price per sqft: ₹5,400"
    );
}

#[test]
fn score_tooltips_use_value_out_of_100() {
    assert_eq!(
        tooltip_label("Demand Score", 72.5, false),
        "Demand Score: 72.5/100"
    );
}
