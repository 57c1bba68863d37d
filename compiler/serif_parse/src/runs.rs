//! Styled text runs and their grouping into statements.

use serif_ir::Style;

/// A stretch of text sharing one style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub style: Style,
}

impl StyledRun {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        StyledRun {
            text: text.into(),
            style,
        }
    }

    /// Unformatted text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::plain())
    }

    fn slice(&self, start: usize, end: usize) -> Self {
        StyledRun {
            text: self.text[start..end].to_owned(),
            style: self.style.clone(),
        }
    }
}

/// Group `runs` into statements.
///
/// A `.` followed by whitespace, or by the end of the document, ends the
/// current statement and stays with it. Any other `.` is literal text.
/// Statements holding nothing but whitespace and periods are dropped.
pub fn split_statements(runs: &[StyledRun]) -> Vec<Vec<StyledRun>> {
    let mut statements = Vec::new();
    let mut current = Vec::new();

    for (position, run) in runs.iter().enumerate() {
        let mut start = 0;
        let mut chars = run.text.char_indices().peekable();
        while let Some((offset, c)) = chars.next() {
            if c != '.' {
                continue;
            }
            let next = match chars.peek() {
                Some(&(_, next)) => Some(next),
                None => first_char_after(runs, position),
            };
            if next.map_or(true, char::is_whitespace) {
                let end = offset + c.len_utf8();
                current.push(run.slice(start, end));
                finish(&mut statements, &mut current);
                start = end;
            }
        }
        if start < run.text.len() {
            current.push(run.slice(start, run.text.len()));
        }
    }
    finish(&mut statements, &mut current);

    statements
}

fn first_char_after(runs: &[StyledRun], position: usize) -> Option<char> {
    runs[position + 1..]
        .iter()
        .find_map(|run| run.text.chars().next())
}

fn finish(statements: &mut Vec<Vec<StyledRun>>, current: &mut Vec<StyledRun>) {
    let statement = std::mem::take(current);
    let has_content = statement
        .iter()
        .any(|run| run.text.chars().any(|c| !c.is_whitespace() && c != '.'));
    if has_content {
        statements.push(statement);
    }
}
