//! Default chart geometry and styling (pixels at 100 dpi)

pub const WIDTH: f64 = 1200.0;
pub const HEIGHT: f64 = 600.0;
pub const TITLE: &str = "NIST Randomness Test Summary";
pub const X_LABEL: &str = "Pass Rate (%)";
pub const Y_LABEL: &str = "NIST Test";
pub const BAR_COLOR: &str = "skyblue";
pub const BACKGROUND: &str = "white";
pub const AXIS_COLOR: &str = "black";
pub const GRID_COLOR: &str = "rgb(176,176,176)";
pub const GRID_DASH: &str = "4,4";
pub const GRID_OPACITY: f64 = 0.6;
pub const TEXT_COLOR: &str = "black";
pub const FONT_FAMILY: &str = "DejaVu Sans, Helvetica, Arial, sans-serif";
pub const FONT_SIZE: f64 = 12.0;
pub const TITLE_FONT_SIZE: f64 = 18.0;
pub const LABEL_FONT_SIZE: f64 = 14.0;
/// Space around the whole figure
pub const PAD: f64 = 20.0;
/// Band reserved for the rotated y-axis label
pub const Y_LABEL_BAND: f64 = 30.0;
pub const PLOT_TOP: f64 = 60.0;
/// Below the plot: tick labels and the x-axis label
pub const PLOT_BOTTOM_MARGIN: f64 = 70.0;
/// Right of the plot: room for a "100.00%" label past a full bar
pub const PLOT_RIGHT_MARGIN: f64 = 90.0;
/// Fraction of each bar slot the bar fills
pub const BAR_FILL: f64 = 0.8;
/// Below this slot height the canvas grows instead
pub const MIN_SLOT: f64 = 18.0;
/// Gap between a bar end and its percentage label
pub const VALUE_GAP: f64 = 4.0;
/// Gap between a test name and the y axis
pub const NAME_GAP: f64 = 8.0;
pub const X_TICKS: [f64; 6] = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];
/// Average glyph advance relative to font size, for width estimates
pub const CHAR_WIDTH_RATIO: f64 = 0.57;
