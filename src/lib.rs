#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod macros;
pub mod parser;
pub mod scanner;

extern crate regex;

pub use crate::{ast::ast::Node, parser::parser::parse, scanner::scanner::Scanner};

/// Byte offset into the source, tagged with the name of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub usize, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` inside that line. A position at or past the end of the
/// source resolves to the end of the last line.
pub fn get_line_at_position(content: &str, position: usize) -> (usize, String, usize) {
    let pos = position.min(content.len());

    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, String::new(), 0);

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        last = (line_number, line.to_string(), line.trim_end_matches('\n').len());
        start = end;
        line_number += 1;
    }

    last
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nsecond\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 30);
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("1 + ", 4);
        assert_eq!(line_number, 1);
        assert_eq!(line, "1 + ");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = super::get_line_at_position("", 0);
        assert_eq!(line_number, 1);
        assert_eq!(line, "");
        assert_eq!(line_pos, 0);
    }

    #[test]
    fn test_offsets_beyond_four_gib() {
        let offset = u32::MAX as usize + 10;
        let position = super::Position(offset, std::rc::Rc::new("big.expr".to_string()));
        assert_eq!(position.0, offset);

        let (line_number, line, line_pos) = super::get_line_at_position("1 +\n2", offset);
        assert_eq!(line_number, 2);
        assert_eq!(line, "2");
        assert_eq!(line_pos, 1);
    }

    #[test]
    fn test_format_error_points_at_token() {
        let error = crate::parse("2*(3 1)", None).unwrap_err();
        let rendered = super::format_error(&error, "2*(3 1)");

        assert!(rendered.starts_with("Error: MismatchedDelimiter"));
        assert!(rendered.contains("-> shell"));
        assert!(rendered.contains("1 | 2*(3 1)"));
        assert!(rendered.ends_with("  | -----^\n"));
    }
}

/// Renders an error with the offending line and a caret under the position.
pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: name (tip)
        -> shell
           |
        1 | 2*(3 1)
          | -----^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.1));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", format_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
