//! Endpoint descriptors: one immutable record per Asana operation.
//!
//! # Design
//! A descriptor is pure data: method, path template, declared query names and
//! whether a JSON body is sent. Path parameter names are read off the template
//! rather than listed separately, so the two can never disagree.

use std::borrow::Cow;

use crate::http::HttpMethod;

/// Declarative description of a single Asana REST operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// Operation name, e.g. `get_a_task`.
    pub name: &'static str,
    pub method: HttpMethod,
    /// Path relative to the API root with `{name}` placeholders.
    pub path_template: &'static str,
    /// Query parameter names exactly as they appear on the wire.
    pub query_params: &'static [&'static str],
    pub has_body: bool,
    /// Human-readable title used for tool listings.
    pub summary: &'static str,
}

/// A piece of a path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Param(&'a str),
}

impl EndpointDescriptor {
    pub const fn get(
        name: &'static str,
        path_template: &'static str,
        query_params: &'static [&'static str],
        summary: &'static str,
    ) -> Self {
        Self {
            name,
            method: HttpMethod::Get,
            path_template,
            query_params,
            has_body: false,
            summary,
        }
    }

    pub const fn post(
        name: &'static str,
        path_template: &'static str,
        query_params: &'static [&'static str],
        summary: &'static str,
    ) -> Self {
        Self {
            name,
            method: HttpMethod::Post,
            path_template,
            query_params,
            has_body: true,
            summary,
        }
    }

    pub const fn put(
        name: &'static str,
        path_template: &'static str,
        query_params: &'static [&'static str],
        summary: &'static str,
    ) -> Self {
        Self {
            name,
            method: HttpMethod::Put,
            path_template,
            query_params,
            has_body: true,
            summary,
        }
    }

    pub const fn delete(
        name: &'static str,
        path_template: &'static str,
        query_params: &'static [&'static str],
        summary: &'static str,
    ) -> Self {
        Self {
            name,
            method: HttpMethod::Delete,
            path_template,
            query_params,
            has_body: false,
            summary,
        }
    }

    /// Split the template into literal text and `{param}` placeholders.
    ///
    /// An unterminated `{` is kept as literal text.
    pub fn segments(&self) -> Vec<Segment<'static>> {
        let mut segments = Vec::new();
        let mut rest = self.path_template;
        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|i| open + i) else {
                break;
            };
            if open > 0 {
                segments.push(Segment::Literal(&rest[..open]));
            }
            segments.push(Segment::Param(&rest[open + 1..close]));
            rest = &rest[close + 1..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest));
        }
        segments
    }

    /// Path parameter names in template order.
    pub fn path_params(&self) -> Vec<&'static str> {
        self.segments()
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Param(name) => Some(name),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    pub fn is_path_param(&self, name: &str) -> bool {
        self.path_params().contains(&name)
    }

    /// Resolve a caller-facing name to the declared wire name.
    ///
    /// Accepts the wire name itself (`due_on.before`) or its argument form
    /// (`due_on_before`).
    pub fn query_param(&self, name: &str) -> Option<&'static str> {
        self.query_params
            .iter()
            .copied()
            .find(|wire| *wire == name)
            .or_else(|| {
                self.query_params
                    .iter()
                    .copied()
                    .find(|wire| argument_name(wire) == name)
            })
    }

    pub fn declares(&self, name: &str) -> bool {
        self.is_path_param(name) || self.query_param(name).is_some()
    }
}

/// Identifier-safe form of a wire name: dots become underscores.
pub fn argument_name(wire: &str) -> Cow<'_, str> {
    if wire.contains('.') {
        Cow::Owned(wire.replace('.', "_"))
    } else {
        Cow::Borrowed(wire)
    }
}
