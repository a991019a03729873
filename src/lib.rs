#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

/// A byte range into the source text a token was produced from.
///
/// Invariant: `start + length <= source.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: u32,
    pub length: u32,
    pub source: Rc<String>,
}

impl Span {
    pub fn new(start: u32, length: u32, source: Rc<String>) -> Self {
        debug_assert!((start + length) as usize <= source.len());
        Span {
            start,
            length,
            source,
        }
    }

    pub fn null() -> Self {
        Span {
            start: 0,
            length: 0,
            source: Rc::new(String::from("<null>")),
        }
    }

    pub fn end(&self) -> u32 {
        self.start + self.length
    }

    /// The exact substring of the source this span covers.
    pub fn lexeme(&self) -> &str {
        self.source
            .get(self.start as usize..self.end() as usize)
            .unwrap_or("")
    }
}

pub fn get_line_at_offset(source: &str, offset: u32) -> (usize, String, usize) {
    let pos = offset as usize;

    if pos > source.len() {
        panic!("Offset exceeds source length");
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    panic!("Failed to find line containing offset");
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    #[test]
    fn test_get_line_at_offset() {
        let source = "Hello, world!\nSecond line\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_offset(source, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_offset(source, 35);
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_span_lexeme() {
        let source = Rc::new(String::from("let x = 42;"));
        let span = super::Span::new(4, 1, Rc::clone(&source));
        assert_eq!(span.lexeme(), "x");
        assert_eq!(span.end(), 5);

        let span = super::Span::new(8, 2, source);
        assert_eq!(span.lexeme(), "42");
    }
}

pub fn display_error(error: &Error) {
    /*
        error: message
        -> final.lang
           |
        20 | let a = $;
           | --------^
    */

    let span = error.get_span();
    let (line, line_text, line_pos) = get_line_at_offset(&span.source, span.start);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", error.get_file());
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = line_pos - removed_whitespace + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
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
