//! SVG generation for the pass-rate bar chart

use glam::{DVec2, dvec2};

use super::ChartOptions;
use super::defaults;
use super::dom::{Group, Line, Rect, Style, Svg, Text};
use crate::errors::RenderError;
use crate::summary::Summary;

/// Proportional character widths (hundredths of an average glyph), ASCII
/// `' '..='~'`.
#[rustfmt::skip]
pub const AW_CHAR: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Estimated rendered width of `text` in pixels.
pub fn text_width_px(text: &str, font_size: f64) -> f64 {
    let hundredths: u32 = text
        .chars()
        .map(|c| {
            if (' '..='~').contains(&c) {
                AW_CHAR[(c as usize) - 0x20] as u32
            } else {
                100
            }
        })
        .sum();
    hundredths as f64 * 0.01 * font_size * defaults::CHAR_WIDTH_RATIO
}

/// Round to two decimals so the markup stays readable.
fn px(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Plot rectangle inside the figure, in SVG pixel space (y grows down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub top_left: DVec2,
    pub size: DVec2,
}

impl PlotArea {
    pub fn left(&self) -> f64 {
        self.top_left.x
    }

    pub fn right(&self) -> f64 {
        self.top_left.x + self.size.x
    }

    pub fn top(&self) -> f64 {
        self.top_left.y
    }

    pub fn bottom(&self) -> f64 {
        self.top_left.y + self.size.y
    }

    /// X coordinate of a rate on the `[0, 1]` axis.
    pub fn x_at(&self, rate: f64) -> f64 {
        self.left() + rate.clamp(0.0, 1.0) * self.size.x
    }
}

/// Computed geometry for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub canvas: DVec2,
    pub plot: PlotArea,
    /// Vertical space per bar
    pub slot: f64,
}

impl Layout {
    pub fn new(summary: &Summary, options: &ChartOptions) -> Layout {
        let name_width = summary
            .entries()
            .iter()
            .map(|e| text_width_px(&e.test, defaults::FONT_SIZE))
            .fold(0.0, f64::max);
        let left = defaults::PAD + defaults::Y_LABEL_BAND + name_width + defaults::NAME_GAP;

        let bars = summary.len().max(1) as f64;
        let chrome = defaults::PLOT_TOP + defaults::PLOT_BOTTOM_MARGIN;
        let height = options.height.max(chrome + bars * defaults::MIN_SLOT);
        let width = options.width.max(left + defaults::PLOT_RIGHT_MARGIN + 100.0);

        let top_left = dvec2(left, defaults::PLOT_TOP);
        let bottom_right = dvec2(
            width - defaults::PLOT_RIGHT_MARGIN,
            height - defaults::PLOT_BOTTOM_MARGIN,
        );
        let plot = PlotArea {
            top_left,
            size: bottom_right - top_left,
        };
        Layout {
            canvas: dvec2(width, height),
            plot,
            slot: plot.size.y / bars,
        }
    }

    /// Vertical center of bar `index`. Index 0 sits at the bottom.
    pub fn bar_center_y(&self, index: usize) -> f64 {
        self.plot.bottom() - (index as f64 + 0.5) * self.slot
    }
}

fn text(pos: DVec2, content: impl Into<String>, font_size: f64, anchor: &str) -> Text {
    Text {
        x: Some(px(pos.x)),
        y: Some(px(pos.y)),
        fill: Some(defaults::TEXT_COLOR.to_string()),
        font_size: Some(font_size),
        text_anchor: Some(anchor.to_string()),
        dominant_baseline: Some("central".to_string()),
        content: content.into(),
        ..Default::default()
    }
}

/// Build the chart document.
pub fn build_chart(summary: &Summary, options: &ChartOptions) -> Svg {
    let layout = Layout::new(summary, options);
    let plot = layout.plot;
    let mut svg = Svg::new(layout.canvas.x, layout.canvas.y);

    svg.push(Style {
        type_: Some("text/css".to_string()),
        content: format!("text {{ font-family: {}; }}", defaults::FONT_FAMILY),
    });
    svg.push(Rect {
        x: Some(px(0.0)),
        y: Some(px(0.0)),
        width: Some(px(layout.canvas.x)),
        height: Some(px(layout.canvas.y)),
        fill: Some(defaults::BACKGROUND.to_string()),
        ..Default::default()
    });

    // Grid and tick labels
    let mut grid = Group::with_class("grid");
    for tick in defaults::X_TICKS {
        let x = plot.x_at(tick);
        grid.push(Line {
            x1: Some(px(x)),
            y1: Some(px(plot.top())),
            x2: Some(px(x)),
            y2: Some(px(plot.bottom())),
            stroke: Some(defaults::GRID_COLOR.to_string()),
            stroke_width: Some(0.8),
            stroke_dasharray: Some(defaults::GRID_DASH.to_string()),
            stroke_opacity: Some(defaults::GRID_OPACITY),
        });
        grid.push(text(
            dvec2(x, plot.bottom() + 16.0),
            format!("{:.1}", tick),
            defaults::FONT_SIZE,
            "middle",
        ));
    }
    svg.push(grid);

    // Bars, names and percentage labels
    let mut bars = Group::with_class("bars");
    let bar_height = layout.slot * defaults::BAR_FILL;
    for (index, entry) in summary.entries().iter().enumerate() {
        let rate = entry.pass_rate.raw();
        let center_y = layout.bar_center_y(index);
        let end_x = plot.x_at(rate);

        bars.push(Rect {
            x: Some(px(plot.left())),
            y: Some(px(center_y - bar_height / 2.0)),
            width: Some(px(end_x - plot.left())),
            height: Some(px(bar_height)),
            fill: Some(options.bar_color.clone()),
            ..Default::default()
        });
        bars.push(text(
            dvec2(plot.left() - defaults::NAME_GAP, center_y),
            entry.test.as_str(),
            defaults::FONT_SIZE,
            "end",
        ));
        bars.push(text(
            dvec2(end_x + defaults::VALUE_GAP, center_y),
            entry.pass_rate.percent(),
            defaults::FONT_SIZE,
            "start",
        ));
    }
    svg.push(bars);

    // Axes frame
    svg.push(Rect {
        x: Some(px(plot.left())),
        y: Some(px(plot.top())),
        width: Some(px(plot.size.x)),
        height: Some(px(plot.size.y)),
        fill: Some("none".to_string()),
        stroke: Some(defaults::AXIS_COLOR.to_string()),
        stroke_width: Some(1.0),
    });

    // Title and axis labels
    let mut title = text(
        dvec2(layout.canvas.x / 2.0, defaults::PLOT_TOP / 2.0),
        options.title.as_str(),
        defaults::TITLE_FONT_SIZE,
        "middle",
    );
    title.font_weight = Some("bold".to_string());
    svg.push(title);

    svg.push(text(
        dvec2(
            plot.left() + plot.size.x / 2.0,
            layout.canvas.y - defaults::PAD - 6.0,
        ),
        options.x_label.as_str(),
        defaults::LABEL_FONT_SIZE,
        "middle",
    ));

    let y_label_pos = dvec2(
        defaults::PAD + defaults::Y_LABEL_BAND / 2.0,
        plot.top() + plot.size.y / 2.0,
    );
    let mut y_label = text(
        y_label_pos,
        options.y_label.as_str(),
        defaults::LABEL_FONT_SIZE,
        "middle",
    );
    y_label.transform = Some(format!(
        "rotate(-90 {} {})",
        px(y_label_pos.x),
        px(y_label_pos.y)
    ));
    svg.push(y_label);

    svg
}

/// Render the chart to an SVG string.
pub fn render_svg(summary: &Summary, options: &ChartOptions) -> Result<String, RenderError> {
    build_chart(summary, options).to_xml()
}
