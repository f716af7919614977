//! DOT source encoding
//!
//! Turns the typed graph model into Graphviz source text. All record-label
//! syntax lives here; the model itself carries only structured fields.

use crate::graph::{Anchor, GraphModel, LabelField, RecordLabel};

/// Encoder for undirected Graphviz source
pub struct DotEncoder {
    graph_name: String,
    splines: bool,
}

impl DotEncoder {
    pub fn new() -> Self {
        Self {
            graph_name: "wharfmap".to_string(),
            splines: true,
        }
    }

    /// Set the graph name
    pub fn with_graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = name.into();
        self
    }

    /// Enable or disable spline edge routing
    pub fn with_splines(mut self, splines: bool) -> Self {
        self.splines = splines;
        self
    }

    /// Encode the model: graph header, nodes in model order, then edges
    pub fn encode(&self, model: &GraphModel) -> String {
        let mut lines = Vec::new();
        lines.push("// Container network graph".to_string());
        lines.push(format!("graph {} {{", quote(&self.graph_name)));
        if self.splines {
            lines.push("    graph [splines=true];".to_string());
        }

        for node in &model.nodes {
            lines.push(format!(
                "    {} [shape=record, style=filled, fillcolor={}, label={}];",
                quote(&node.id),
                quote(&node.fill_color),
                quote(&render_label(&node.label))
            ));
        }

        for edge in &model.edges {
            lines.push(format!(
                "    {} -- {} [color={}];",
                render_anchor(&edge.tail),
                render_anchor(&edge.head),
                quote(&edge.color)
            ));
        }

        lines.push("}".to_string());
        lines.join("\n")
    }
}

impl Default for DotEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a record label to Graphviz record syntax
pub fn render_label(label: &RecordLabel) -> String {
    format!("{{ {} }}", render_fields(&label.fields))
}

fn render_fields(fields: &[LabelField]) -> String {
    fields
        .iter()
        .map(render_field)
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render_field(field: &LabelField) -> String {
    match field {
        LabelField::Text(text) => escape_record_text(text),
        LabelField::Anchored { port, text } => {
            format!("<{}> {}", port, escape_record_text(text))
        }
        LabelField::Group(fields) => format!("{{ {} }}", render_fields(fields)),
    }
}

fn render_anchor(anchor: &Anchor) -> String {
    match &anchor.port {
        Some(port) => format!("{}:{}", quote(&anchor.node), quote(port)),
        None => quote(&anchor.node),
    }
}

/// Quote an identifier or attribute value
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Escape characters with meaning inside record labels
fn escape_record_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '{' | '}' | '|' | '<' | '>' | '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
