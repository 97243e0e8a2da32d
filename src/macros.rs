//! Utility macros for the parser.
//!
//! - `MK_TOKEN!` - Creates a Token from a source slice and its byte range

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$value` - The token's source slice
/// * `$start` - Byte offset of the first character
/// * `$file` - The `Rc<String>` naming the source
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(&source[4..6], 4, scanner.file);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($value:expr, $start:expr, $file:expr) => {{
        let value: &str = $value;
        let start: usize = $start;
        $crate::scanner::tokens::Token {
            value,
            span: $crate::Span {
                start: $crate::Position(start, ::std::rc::Rc::clone(&$file)),
                end: $crate::Position(start + value.len(), ::std::rc::Rc::clone(&$file)),
            },
        }
    }};
}
