//! Rewrites informally typed notation into the canonical algebraic syntax.
//!
//! Rules, in order:
//! 1. `^` becomes `**`.
//! 2. A digit directly followed by the variable symbol gets an explicit `*`
//!    (`5x` becomes `5*x`). Only the adjacent character is inspected, so
//!    `5 x`, `2(x+1)` and other variables are left alone.
//! 3. Equations only: `left = right` becomes `(left)-(right)`.

use tracing::debug;

use crate::env::Environment;
use crate::error::{MathError, Result};
use crate::expr::Expr;
use crate::parser::{MAX_NESTING, parse_expr};

const OPERATOR_CHARS: &str = "+-*/^().=";

/// Longest raw input accepted. Rewriting at most doubles the text, which keeps
/// the canonical form within the parser's own limit.
pub const MAX_INPUT_LEN: usize = 1024;

/// Equation in zero-form text: `(left)-(right)`, or the bare expression when
/// the input had no `=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeroForm {
    sides: Option<(String, String)>,
    canonical: String,
}

impl ZeroForm {
    pub fn left(&self) -> Option<&str> {
        self.sides.as_ref().map(|(l, _)| l.as_str())
    }

    pub fn right(&self) -> Option<&str> {
        self.sides.as_ref().map(|(_, r)| r.as_str())
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    env: Environment,
}

impl Normalizer {
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Rules 1 and 2. Used for function expressions, which must not contain `=`.
    pub fn normalize_expression(&self, raw: &str) -> Result<String> {
        let rewritten = self.rewrite(raw)?;
        if rewritten.contains('=') {
            return Err(MathError::Normalization(format!(
                "unexpected '=' in function expression '{raw}'"
            )));
        }
        debug!(raw, canonical = %rewritten, "normalized expression");
        Ok(rewritten)
    }

    /// Rules 1 to 3.
    pub fn normalize_equation(&self, raw: &str) -> Result<ZeroForm> {
        let rewritten = self.rewrite(raw)?;
        let zero_form = match rewritten.split_once('=') {
            None => ZeroForm {
                sides: None,
                canonical: rewritten,
            },
            Some((_, right)) if right.contains('=') => {
                return Err(MathError::Normalization(format!(
                    "expected a single '=' in equation '{raw}'"
                )));
            }
            Some((left, right)) => {
                let (left, right) = (left.trim(), right.trim());
                if left.is_empty() || right.is_empty() {
                    return Err(MathError::Normalization(format!(
                        "equation '{raw}' has an empty side"
                    )));
                }
                let left = format!("({left})");
                let right = format!("({right})");
                let canonical = format!("{left}-{right}");
                ZeroForm {
                    sides: Some((left, right)),
                    canonical,
                }
            }
        };
        debug!(raw, canonical = %zero_form.canonical, "normalized equation");
        Ok(zero_form)
    }

    /// Parse canonical text and reject identifiers the environment does not know.
    pub fn parse_canonical(&self, canonical: &str) -> Result<Expr> {
        let expr = parse_expr(canonical)?;
        if let Some(unknown) = expr
            .free_symbols()
            .into_iter()
            .find(|s| !self.env.is_known(s))
        {
            return Err(MathError::Normalization(format!(
                "unsupported symbol '{unknown}' (expected '{}')",
                self.env.symbol
            )));
        }
        Ok(expr)
    }

    fn rewrite(&self, raw: &str) -> Result<String> {
        check_tokens(raw)?;
        let powered = raw.replace('^', "**");
        Ok(insert_implicit_mul(&powered, &self.env.symbol))
    }
}

/// Insert `*` between a digit and an immediately following `symbol`.
pub fn insert_implicit_mul(text: &str, symbol: &str) -> String {
    if symbol.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + 4);
    let mut prev: Option<char> = None;
    for (idx, c) in text.char_indices() {
        if prev.is_some_and(|p| p.is_ascii_digit()) && text[idx..].starts_with(symbol) {
            out.push('*');
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

fn check_tokens(raw: &str) -> Result<()> {
    if raw.trim().is_empty() {
        return Err(MathError::Normalization("empty expression".to_string()));
    }
    if raw.len() > MAX_INPUT_LEN {
        return Err(MathError::Normalization(format!(
            "input is {} characters long (limit {MAX_INPUT_LEN})",
            raw.len()
        )));
    }
    let mut depth = 0usize;
    for (pos, c) in raw.char_indices() {
        if !(c.is_ascii_alphanumeric() || c.is_whitespace() || OPERATOR_CHARS.contains(c)) {
            return Err(MathError::Normalization(format!(
                "unsupported character '{c}' at position {pos}"
            )));
        }
        match c {
            '(' => {
                depth += 1;
                if depth > MAX_NESTING {
                    return Err(MathError::Normalization(format!(
                        "parentheses nest deeper than {MAX_NESTING} levels at position {pos}"
                    )));
                }
            }
            ')' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    MathError::Normalization(format!("unbalanced ')' at position {pos}"))
                })?;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(MathError::Normalization(format!(
            "unbalanced parentheses: {depth} unclosed '('"
        )));
    }
    Ok(())
}
