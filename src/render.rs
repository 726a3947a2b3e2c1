//! Bounded rendering of one trace line.
//!
//! The output buffer admits at most `capacity - 1` characters; everything
//! past that is silently dropped. The cap counts characters, not bytes, so
//! truncation can never split a code point.

use std::fmt::{self, Write};

/// Renders `"<file> (<line>): "` followed by the formatted message,
/// truncated to `capacity - 1` characters.
pub fn render(capacity: usize, file: &str, line: u32, args: fmt::Arguments<'_>) -> String {
    let mut buf = Bounded::new(capacity.saturating_sub(1));
    // Bounded never reports errors; overflow just stops accepting chars.
    let _ = write!(buf, "{file} ({line}): ");
    let _ = buf.write_fmt(args);
    buf.text
}

struct Bounded {
    text: String,
    remaining: usize,
}

impl Bounded {
    fn new(max_chars: usize) -> Self {
        Self {
            text: String::new(),
            remaining: max_chars,
        }
    }
}

impl Write for Bounded {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.remaining == 0 {
                break;
            }
            self.text.push(ch);
            self.remaining -= 1;
        }
        Ok(())
    }
}
