//! Action-detail templates with `{{variable}}` placeholders.
//!
//! A placeholder holds a dot-separated path (`{{ case.title }}`) that is
//! resolved against a JSON context. Object keys are looked up by name and
//! array elements by decimal index (`{{ tasks.0.title }}`). Only strings,
//! numbers and booleans can be rendered. Text outside placeholders,
//! including a lone `}}`, is copied verbatim.

use serde_json::Value;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Failure to parse or render a template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("unterminated placeholder starting at byte {offset}")]
    Unterminated { offset: usize },

    #[error("empty placeholder at byte {offset}")]
    EmptyPlaceholder { offset: usize },

    #[error("invalid variable path `{path}`")]
    InvalidPath { path: String },

    #[error("unresolved variable `{path}`")]
    UnresolvedVariable { path: String },

    #[error("variable `{path}` is not a string, number or boolean")]
    NotRenderable { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Variable(String),
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse `source` into literal text and placeholders.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Unterminated`], [`TemplateError::EmptyPlaceholder`]
    /// or [`TemplateError::InvalidPath`] for malformed placeholders.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            let after_open = &rest[start + OPEN.len()..];
            let end = after_open.find(CLOSE).ok_or(TemplateError::Unterminated {
                offset: offset + start,
            })?;

            let path = after_open[..end].trim();
            if path.is_empty() {
                return Err(TemplateError::EmptyPlaceholder {
                    offset: offset + start,
                });
            }
            if path.split('.').any(str::is_empty) {
                return Err(TemplateError::InvalidPath {
                    path: path.to_string(),
                });
            }
            segments.push(Segment::Variable(path.to_string()));

            let consumed = start + OPEN.len() + end + CLOSE.len();
            offset += consumed;
            rest = &rest[consumed..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// Placeholder paths in order of appearance (duplicates kept).
    #[must_use]
    pub fn variables(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Variable(path) => Some(path.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Substitute every placeholder from `context`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::UnresolvedVariable`] when a path does not
    /// exist and [`TemplateError::NotRenderable`] when it points at `null`,
    /// an object or an array.
    pub fn render(&self, context: &Value) -> Result<String, TemplateError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Variable(path) => out.push_str(&resolve(context, path)?),
            }
        }
        Ok(out)
    }
}

/// Parse and render in one step.
///
/// # Errors
///
/// Any parse or render [`TemplateError`].
pub fn render(source: &str, context: &Value) -> Result<String, TemplateError> {
    Template::parse(source)?.render(context)
}

fn resolve(context: &Value, path: &str) -> Result<String, TemplateError> {
    let mut current = context;
    for key in path.split('.') {
        let next = match current {
            Value::Object(map) => map.get(key),
            Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        current = next.ok_or_else(|| TemplateError::UnresolvedVariable {
            path: path.to_string(),
        })?;
    }

    match current {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(TemplateError::NotRenderable {
            path: path.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_render_nested_variable() {
        let out = render(
            "New high priority case: {{case.title}}",
            &json!({"case": {"title": "Printer on fire"}}),
        )
        .unwrap();
        assert_eq!(out, "New high priority case: Printer on fire");
    }

    #[test]
    fn should_render_multiple_variables_and_ignore_inner_whitespace() {
        let out = render(
            "Task '{{ task.title }}' completed by {{task.assignee}}.",
            &json!({"task": {"title": "Call back", "assignee": "Sam"}}),
        )
        .unwrap();
        assert_eq!(out, "Task 'Call back' completed by Sam.");
    }

    #[test]
    fn should_render_numbers_booleans_and_array_indices() {
        let out = render(
            "{{case.id}} {{case.urgent}} {{case.tags.1}}",
            &json!({"case": {"id": 42, "urgent": true, "tags": ["a", "b"]}}),
        )
        .unwrap();
        assert_eq!(out, "42 true b");
    }

    #[test]
    fn should_pass_plain_text_through() {
        assert_eq!(
            render("No placeholders }} here", &json!({})).unwrap(),
            "No placeholders }} here"
        );
        assert_eq!(render("", &json!({})).unwrap(), "");
    }

    #[test]
    fn should_fail_on_unresolved_variable() {
        let err = render("Hi {{user.name}}", &json!({"user": {}})).unwrap_err();
        assert_eq!(
            err,
            TemplateError::UnresolvedVariable {
                path: "user.name".to_string()
            }
        );
    }

    #[test]
    fn should_fail_on_object_value() {
        let err = render("{{case}}", &json!({"case": {"title": "x"}})).unwrap_err();
        assert!(matches!(err, TemplateError::NotRenderable { .. }));
    }

    #[test]
    fn should_fail_on_null_value() {
        let err = render("{{case.owner}}", &json!({"case": {"owner": null}})).unwrap_err();
        assert!(matches!(err, TemplateError::NotRenderable { .. }));
    }

    #[test]
    fn should_report_unterminated_placeholder_offset() {
        let err = Template::parse("ok {{a}} then {{broken").unwrap_err();
        assert_eq!(err, TemplateError::Unterminated { offset: 14 });
    }

    #[test]
    fn should_reject_empty_placeholder() {
        let err = Template::parse("x {{   }}").unwrap_err();
        assert_eq!(err, TemplateError::EmptyPlaceholder { offset: 2 });
    }

    #[test]
    fn should_reject_path_with_empty_segment() {
        let err = Template::parse("{{case..title}}").unwrap_err();
        assert!(matches!(err, TemplateError::InvalidPath { .. }));
    }

    #[test]
    fn should_list_variables_in_order() {
        let t = Template::parse("{{a}} {{b.c}} {{a}}").unwrap();
        assert_eq!(t.variables(), vec!["a", "b.c", "a"]);
    }
}
