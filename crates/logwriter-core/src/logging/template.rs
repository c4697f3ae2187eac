//! Runtime positional message templates
//!
//! Templates use numbered placeholders: `"{0} of {1} files copied"`.
//! Literal braces are written `{{` and `}}`. A placeholder may be reused
//! and arguments may go unused; referencing a missing argument is an error.

use std::fmt::{self, Display, Write as _};

use thiserror::Error;

/// Errors produced while expanding a template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Placeholder {{{index}}} has no argument ({count} supplied)")]
    MissingArgument { index: usize, count: usize },

    #[error("Invalid placeholder '{{{0}}}'")]
    InvalidPlaceholder(String),

    #[error("Unbalanced brace at byte {0}")]
    UnbalancedBrace(usize),

    #[error("Argument {0} failed to format")]
    Display(usize),
}

pub type TemplateResult<T> = Result<T, TemplateError>;

/// Expand `template` with `args`
pub fn render(template: &str, args: &[&dyn Display]) -> TemplateResult<String> {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut chars = template.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    out.push('{');
                    continue;
                }

                let mut name = String::new();
                let mut closed = false;
                for (_, inner) in chars.by_ref() {
                    match inner {
                        '}' => {
                            closed = true;
                            break;
                        }
                        '{' => return Err(TemplateError::UnbalancedBrace(pos)),
                        other => name.push(other),
                    }
                }
                if !closed {
                    return Err(TemplateError::UnbalancedBrace(pos));
                }

                let index: usize = name
                    .trim()
                    .parse()
                    .map_err(|_| TemplateError::InvalidPlaceholder(name.clone()))?;
                let arg = args.get(index).ok_or(TemplateError::MissingArgument {
                    index,
                    count: args.len(),
                })?;
                write!(out, "{}", arg).map_err(|_: fmt::Error| TemplateError::Display(index))?;
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(TemplateError::UnbalancedBrace(pos));
                }
            }
            other => out.push(other),
        }
    }

    Ok(out)
}
