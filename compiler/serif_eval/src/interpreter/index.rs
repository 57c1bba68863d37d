//! Array and string indexing.

use serif_ir::Expr;

use super::Interpreter;
use crate::errors::{indexing_non_array, string_index_count, type_mismatch};
use crate::{EvalResult, RuntimeError, Value};

impl Interpreter {
    /// Indices are evaluated before the base.
    pub(super) fn eval_index(&mut self, base: &Expr, indices: &[Expr]) -> EvalResult {
        let indices = self.eval_indices(indices)?;
        match self.eval(base)? {
            Value::Str(text) => match indices.as_slice() {
                [start] => Ok(Value::string(substring(&text, *start, None))),
                [start, end] => Ok(Value::string(substring(&text, *start, Some(*end)))),
                _ => Err(string_index_count(indices.len())),
            },
            root => get_path(root, &indices),
        }
    }

    pub(super) fn eval_indices(&mut self, indices: &[Expr]) -> Result<Vec<i64>, RuntimeError> {
        indices
            .iter()
            .map(|index| match self.eval(index)? {
                Value::Number(n) => Ok(n),
                other => Err(type_mismatch("indexing", "a number", other.type_name())),
            })
            .collect()
    }
}

/// Follow `indices` from `root`. Fewer indices than dimensions yields the
/// inner array itself, aliased.
fn get_path(root: Value, indices: &[i64]) -> EvalResult {
    let mut current = root;
    for &index in indices {
        current = match current {
            Value::Array(array) => array.get(index)?,
            other => return Err(indexing_non_array(other.type_name())),
        };
    }
    Ok(current)
}

/// Characters from `start` to the end, or to `end` inclusive.
///
/// Any index outside the string, or an end before the start, gives the
/// empty string. A lone start equal to the length is the empty suffix.
fn substring(text: &str, start: i64, end: Option<i64>) -> String {
    let len = text.chars().count();
    let Ok(start) = usize::try_from(start) else {
        return String::new();
    };
    if start > len {
        return String::new();
    }
    match end {
        None => text.chars().skip(start).collect(),
        Some(end) => match usize::try_from(end) {
            Ok(end) if end >= start && end < len => text
                .chars()
                .skip(start)
                .take(end.saturating_sub(start).saturating_add(1))
                .collect(),
            _ => String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::substring;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_substring_suffix() {
        assert_eq!(substring("hello", 1, None), "ello");
        assert_eq!(substring("hello", 5, None), "");
        assert_eq!(substring("hello", 6, None), "");
        assert_eq!(substring("hello", -1, None), "");
    }

    #[test]
    fn test_substring_inclusive_range() {
        assert_eq!(substring("hello", 1, Some(3)), "ell");
        assert_eq!(substring("hello", 0, Some(0)), "h");
        assert_eq!(substring("hello", 0, Some(4)), "hello");
        assert_eq!(substring("hello", 3, Some(1)), "");
        assert_eq!(substring("hello", 0, Some(5)), "");
        assert_eq!(substring("héllo", 1, Some(1)), "é");
    }
}
