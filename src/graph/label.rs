//! Structured record labels
//!
//! Node labels are built as ordered field lists and only turned into
//! Graphviz record syntax by the DOT encoder, keeping presentation strings
//! out of the graph model.

use serde::Serialize;

/// One field of a record label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LabelField {
    /// Plain text cell
    Text(String),
    /// Cell addressable as an edge anchor via its port name
    Anchored { port: String, text: String },
    /// Nested sub-record
    Group(Vec<LabelField>),
}

/// An ordered list of record fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordLabel {
    pub fields: Vec<LabelField>,
}

impl RecordLabel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plain text field
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.fields.push(LabelField::Text(text.into()));
        self
    }

    /// Append an anchored field
    pub fn anchored(mut self, port: impl Into<String>, text: impl Into<String>) -> Self {
        self.fields.push(LabelField::Anchored {
            port: port.into(),
            text: text.into(),
        });
        self
    }

    /// Append a nested sub-record
    pub fn group(mut self, fields: Vec<LabelField>) -> Self {
        self.fields.push(LabelField::Group(fields));
        self
    }

    /// Collect all port names, including those in nested groups
    pub fn ports(&self) -> Vec<&str> {
        fn walk<'a>(fields: &'a [LabelField], out: &mut Vec<&'a str>) {
            for field in fields {
                match field {
                    LabelField::Anchored { port, .. } => out.push(port),
                    LabelField::Group(inner) => walk(inner, out),
                    LabelField::Text(_) => {}
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.fields, &mut out);
        out
    }
}
