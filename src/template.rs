// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Minimal text templates: `{{.Field}}` actions substituted with plain values.
//!
//! Only field references are understood. Any other action, an unclosed `{{`
//! or a reference to a field that is not bound is a template error.

use crate::constants::template::{LEFT_DELIM, RANDOM_NAME, RIGHT_DELIM};
use crate::error::{LoadgenError, Result};

/// Values available to a template while rendering
#[derive(Debug, Clone)]
pub struct TemplateData {
    pub random_name: String,
}

impl TemplateData {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            RANDOM_NAME => Some(&self.random_name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Text(String),
    Field(String),
}

/// A parsed template
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(start) = rest.find(LEFT_DELIM) {
            if start > 0 {
                segments.push(Segment::Text(rest[..start].to_string()));
            }
            let after_open = &rest[start + LEFT_DELIM.len()..];
            let Some(end) = after_open.find(RIGHT_DELIM) else {
                return Err(LoadgenError::Template(format!(
                    "unclosed action at byte {}",
                    source.len() - rest.len() + start
                )));
            };
            segments.push(parse_action(&after_open[..end])?);
            rest = &after_open[end + RIGHT_DELIM.len()..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// Whether the template contains a reference to `field`
    pub fn references(&self, field: &str) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Field(name) if name == field))
    }

    pub fn render(&self, data: &TemplateData) -> Result<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Field(name) => {
                    let value = data.field(name).ok_or_else(|| {
                        LoadgenError::Template(format!("can't evaluate field {}", name))
                    })?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

fn parse_action(action: &str) -> Result<Segment> {
    let trimmed = action.trim();
    if trimmed.is_empty() {
        return Err(LoadgenError::Template("missing value for action".to_string()));
    }

    match trimmed.strip_prefix('.') {
        Some(name) if is_identifier(name) => Ok(Segment::Field(name.to_string())),
        _ => Err(LoadgenError::Template(format!(
            "unsupported action {}{}{}",
            LEFT_DELIM, action, RIGHT_DELIM
        ))),
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
