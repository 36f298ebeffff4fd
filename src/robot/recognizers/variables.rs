//! Variable recognizers (`${scalar}`, `@{list}`, `&{dictionary}`, `%{ENVIRONMENT}`)
//!
//! Variables nest (`${outer${inner}}`), so they cannot be expressed as a flat expected sequence.
//! [scan_variables] walks the line once with a stack of open begin markers, where a begin
//! marker is a sigil immediately followed by `{`:
//!
//! - a begin marker pushes a new open variable;
//! - `}` closes the innermost open variable, producing one variable spanning from its own sigil
//!   to the brace (already closed children included);
//! - a `}` with nothing open is plain text;
//! - a single escape backslash right before a sigil or a `}` makes it plain text;
//! - variables still open at the end of the line are dropped.
//!
//! Variables are reported in the order they close, so inner variables always come before the
//! variables enclosing them. Each kind's recognizer keeps only its own kind from the shared scan,
//! which preserves that order.
//!
//! A doubled sigil (`$${x}`) is two sigil tokens; only the one right before `{` opens the
//! variable and the first is leading text.

use super::{check_window, is_escaped, ContextRecognizer};
use crate::robot::context::{ContextType, OneLineSingleContext};
use crate::robot::lexing::{LineTokenPosition, Token, TokenType};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Kind of variable, decided by its sigil
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableKind {
    Scalar,
    List,
    Dictionary,
    Environment,
}

impl VariableKind {
    pub fn from_sigil(token_type: TokenType) -> Option<Self> {
        match token_type {
            TokenType::SingleScalarBeginDollar => Some(VariableKind::Scalar),
            TokenType::SingleListBeginAt => Some(VariableKind::List),
            TokenType::SingleDictionaryBeginAmpersand => Some(VariableKind::Dictionary),
            TokenType::SingleEnvironmentBeginPercent => Some(VariableKind::Environment),
            _ => None,
        }
    }

    pub fn context_type(&self) -> ContextType {
        match self {
            VariableKind::Scalar => ContextType::ScalarVariable,
            VariableKind::List => ContextType::ListVariable,
            VariableKind::Dictionary => ContextType::DictionaryVariable,
            VariableKind::Environment => ContextType::EnvironmentVariable,
        }
    }
}

/// A variable found by [scan_variables]: its kind and token index range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundVariable {
    pub kind: VariableKind,
    pub range: Range<usize>,
}

/// Find all terminated variables in `line`, in closing order
pub fn scan_variables(tokens: &[Token], line: &LineTokenPosition) -> Vec<FoundVariable> {
    check_window(tokens, line);

    let mut open: Vec<(VariableKind, usize)> = Vec::new();
    let mut found = Vec::new();
    let mut index = line.start;

    while index < line.end {
        let token_type = tokens[index].token_type;

        if let Some(kind) = VariableKind::from_sigil(token_type) {
            let opens = index + 1 < line.end
                && tokens[index + 1].token_type == TokenType::SingleVariableBeginCurlyBracket
                && !is_escaped(tokens, line.start, index);
            if opens {
                open.push((kind, index));
                index += 2;
                continue;
            }
        } else if token_type == TokenType::SingleVariableEndCurlyBracket
            && !is_escaped(tokens, line.start, index)
        {
            if let Some((kind, begin)) = open.pop() {
                found.push(FoundVariable {
                    kind,
                    range: begin..index + 1,
                });
            }
        }

        index += 1;
    }

    found
}

/// Recognizer for one kind of variable
#[derive(Debug, Clone, Copy)]
pub struct VariableRecognizer {
    kind: VariableKind,
}

impl VariableRecognizer {
    pub fn new(kind: VariableKind) -> Self {
        VariableRecognizer { kind }
    }

    pub fn kind(&self) -> VariableKind {
        self.kind
    }
}

impl ContextRecognizer for VariableRecognizer {
    fn name(&self) -> &str {
        match self.kind {
            VariableKind::Scalar => "scalar-variable",
            VariableKind::List => "list-variable",
            VariableKind::Dictionary => "dictionary-variable",
            VariableKind::Environment => "environment-variable",
        }
    }

    fn recognize<'a>(
        &self,
        tokens: &'a [Token],
        line: &LineTokenPosition,
    ) -> Vec<OneLineSingleContext<'a>> {
        scan_variables(tokens, line)
            .into_iter()
            .filter(|variable| variable.kind == self.kind)
            .map(|variable| {
                OneLineSingleContext::new(
                    self.kind.context_type(),
                    line.line_number,
                    &tokens[variable.range],
                )
            })
            .collect()
    }
}
