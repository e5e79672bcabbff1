//! Facet-derived SVG elements used by the chart.
//!
//! Only the handful of elements a bar chart needs. Serialized with
//! `facet-xml`.

use facet::Facet;
use facet_xml as xml;

use crate::errors::RenderError;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Root SVG element
#[derive(Facet, Debug, Clone, Default)]
#[facet(rename = "svg")]
pub struct Svg {
    #[facet(xml::attribute)]
    pub xmlns: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<f64>,
    #[facet(xml::attribute)]
    pub height: Option<f64>,
    #[facet(xml::attribute, rename = "viewBox")]
    pub view_box: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

impl Svg {
    pub fn new(width: f64, height: f64) -> Self {
        Svg {
            xmlns: Some(SVG_NS.to_string()),
            width: Some(width),
            height: Some(height),
            view_box: Some(format!("0 0 {} {}", width, height)),
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, node: impl Into<SvgNode>) {
        self.children.push(node.into());
    }

    pub fn to_xml(&self) -> Result<String, RenderError> {
        xml::to_string(self).map_err(|e| RenderError::Serialize {
            message: e.to_string(),
        })
    }
}

/// Any SVG node the chart emits
#[derive(Facet, Debug, Clone)]
#[repr(u8)]
pub enum SvgNode {
    #[facet(rename = "g")]
    G(Group),
    #[facet(rename = "style")]
    Style(Style),
    #[facet(rename = "rect")]
    Rect(Rect),
    #[facet(rename = "line")]
    Line(Line),
    #[facet(rename = "text")]
    Text(Text),
}

macro_rules! impl_into_node {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for SvgNode {
                fn from(v: $ty) -> SvgNode { SvgNode::$ty(v) }
            }
        )*
    };
}

impl_into_node!(Style, Rect, Line, Text);

impl From<Group> for SvgNode {
    fn from(g: Group) -> SvgNode {
        SvgNode::G(g)
    }
}

/// SVG group element (`<g>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Group {
    #[facet(xml::attribute)]
    pub id: Option<String>,
    #[facet(xml::attribute)]
    pub class: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

impl Group {
    pub fn with_class(class: &str) -> Self {
        Group {
            class: Some(class.to_string()),
            ..Default::default()
        }
    }

    pub fn push(&mut self, node: impl Into<SvgNode>) {
        self.children.push(node.into());
    }
}

/// SVG style element (`<style>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Style {
    #[facet(xml::attribute, rename = "type")]
    pub type_: Option<String>,
    #[facet(xml::text)]
    pub content: String,
}

/// SVG rect element (`<rect>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Rect {
    #[facet(xml::attribute)]
    pub x: Option<f64>,
    #[facet(xml::attribute)]
    pub y: Option<f64>,
    #[facet(xml::attribute)]
    pub width: Option<f64>,
    #[facet(xml::attribute)]
    pub height: Option<f64>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<f64>,
}

/// SVG line element (`<line>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Line {
    #[facet(xml::attribute)]
    pub x1: Option<f64>,
    #[facet(xml::attribute)]
    pub y1: Option<f64>,
    #[facet(xml::attribute)]
    pub x2: Option<f64>,
    #[facet(xml::attribute)]
    pub y2: Option<f64>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<f64>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
    #[facet(xml::attribute, rename = "stroke-opacity")]
    pub stroke_opacity: Option<f64>,
}

/// SVG text element (`<text>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Text {
    #[facet(xml::attribute)]
    pub x: Option<f64>,
    #[facet(xml::attribute)]
    pub y: Option<f64>,
    #[facet(xml::attribute)]
    pub transform: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "font-size")]
    pub font_size: Option<f64>,
    #[facet(xml::attribute, rename = "font-weight")]
    pub font_weight: Option<String>,
    #[facet(xml::attribute, rename = "text-anchor")]
    pub text_anchor: Option<String>,
    #[facet(xml::attribute, rename = "dominant-baseline")]
    pub dominant_baseline: Option<String>,
    #[facet(xml::text)]
    pub content: String,
}
