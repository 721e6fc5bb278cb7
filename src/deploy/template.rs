//! Variable interpolation for deployment templates.
//!
//! Templates use `${variable}` syntax. A literal `${` is written `$${`.

use std::collections::{BTreeMap, HashSet};

use crate::error::{Result, StagehandError};

/// A segment of an interpolated string.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Variable reference: ${name}
    Variable(String),
}

/// Parse a string containing `${var}` interpolations.
pub fn parse_template(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut chars = input.chars().peekable();
    let mut current_literal = String::new();

    while let Some(c) = chars.next() {
        if c == '$' {
            match chars.peek() {
                Some('$') => {
                    // Escaped: $$ becomes $
                    chars.next();
                    if chars.peek() == Some(&'{') {
                        // $${...} -> literal ${...}
                        chars.next();
                        current_literal.push('$');
                        current_literal.push('{');
                        while let Some(&c) = chars.peek() {
                            chars.next();
                            current_literal.push(c);
                            if c == '}' {
                                break;
                            }
                        }
                    } else {
                        current_literal.push('$');
                    }
                }
                Some('{') => {
                    chars.next();

                    if !current_literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut current_literal)));
                    }

                    let mut var_name = String::new();
                    while let Some(&c) = chars.peek() {
                        if c == '}' {
                            chars.next();
                            break;
                        }
                        var_name.push(c);
                        chars.next();
                    }

                    segments.push(Segment::Variable(var_name));
                }
                _ => {
                    current_literal.push(c);
                }
            }
        } else {
            current_literal.push(c);
        }
    }

    if !current_literal.is_empty() {
        segments.push(Segment::Literal(current_literal));
    }

    segments
}

/// Extract all variable names referenced by a template.
pub fn extract_variables(input: &str) -> HashSet<String> {
    parse_template(input)
        .into_iter()
        .filter_map(|seg| match seg {
            Segment::Variable(name) => Some(name),
            _ => None,
        })
        .collect()
}

/// Variable values available to a template, ordered for stable display.
pub type TemplateContext = BTreeMap<String, String>;

/// Render a template against a context.
///
/// # Errors
///
/// Returns `UndefinedTemplateVariable` for the first variable with no
/// value in the context.
pub fn render(template_name: &str, input: &str, ctx: &TemplateContext) -> Result<String> {
    let mut output = String::with_capacity(input.len());

    for segment in parse_template(input) {
        match segment {
            Segment::Literal(text) => output.push_str(&text),
            Segment::Variable(name) => match ctx.get(&name) {
                Some(value) => output.push_str(value),
                None => {
                    return Err(StagehandError::UndefinedTemplateVariable {
                        template: template_name.to_string(),
                        variable: name,
                    })
                }
            },
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(pairs: &[(&str, &str)]) -> TemplateContext {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parse_splits_literals_and_variables() {
        let segments = parse_template("listen ${port};");
        assert_eq!(
            segments,
            vec![
                Segment::Literal("listen ".into()),
                Segment::Variable("port".into()),
                Segment::Literal(";".into()),
            ]
        );
    }

    #[test]
    fn render_substitutes_values() {
        let out = render("test", "proxy_pass http://127.0.0.1:${port};", &ctx(&[("port", "8501")]))
            .unwrap();
        assert_eq!(out, "proxy_pass http://127.0.0.1:8501;");
    }

    #[test]
    fn render_fails_on_undefined_variable() {
        let err = render("nginx", "server_name ${domain};", &ctx(&[])).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("nginx"));
        assert!(msg.contains("domain"));
    }

    #[test]
    fn escaped_braces_stay_literal() {
        let out = render("test", "echo $${PORT}", &ctx(&[])).unwrap();
        assert_eq!(out, "echo ${PORT}");
    }

    #[test]
    fn bare_dollar_is_literal() {
        let out = render("test", "cost: $5", &ctx(&[])).unwrap();
        assert_eq!(out, "cost: $5");
    }

    #[test]
    fn extract_variables_finds_unique_names() {
        let vars = extract_variables("${a} ${b} ${a}");
        assert_eq!(vars.len(), 2);
        assert!(vars.contains("a"));
        assert!(vars.contains("b"));
    }
}
