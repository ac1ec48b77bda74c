//! Generated-source header convention

use crate::ast::{CompilationUnit, Trivia};

pub const GENERATED_COMMENT: &str = "// THIS IS GENERATED CODE. DO NOT EDIT.";
pub const LINT_DISABLE_COMMENT: &str = "// ReSharper disable all";

/// Prepends the fixed generated-code header to a unit's leading trivia.
///
/// The prepend is unconditional: there is no existing-header detection, so
/// applying it twice yields two headers.
pub fn with_generated_header(mut unit: CompilationUnit) -> CompilationUnit {
    let mut leading = vec![
        Trivia::Comment(GENERATED_COMMENT.to_string()),
        Trivia::Newline,
        Trivia::Comment(LINT_DISABLE_COMMENT.to_string()),
        Trivia::Newline,
        Trivia::Newline,
    ];
    leading.append(&mut unit.leading);
    unit.leading = leading;
    unit
}
