//! Renderer module
//!
//! Renders a ReferenceSet as plain text: one reference per line, in the
//! order references were first seen. No header, no count, no sorting.

use crate::core::model::ReferenceSet;
use std::io::{self, Write};

/// Render to a writer and flush it
pub fn render_to<W: Write>(refs: &ReferenceSet, mut writer: W) -> io::Result<()> {
    for token in refs.iter() {
        writeln!(writer, "{}", token)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(tokens: &[&str]) -> ReferenceSet {
        let mut set = ReferenceSet::new();
        for t in tokens {
            set.insert(*t);
        }
        set
    }

    fn render(set: &ReferenceSet) -> String {
        let mut buffer = Vec::new();
        render_to(set, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&ReferenceSet::new()), "");
    }

    #[test]
    fn test_render_one_per_line_in_insertion_order() {
        let set = refs(&["java.util.List", "com.google.Foo", "java.io.File"]);
        assert_eq!(render(&set), "java.util.List\ncom.google.Foo\njava.io.File\n");
    }

    #[test]
    fn test_render_keeps_duplicate_free_order() {
        let set = refs(&["b", "a", "b"]);
        assert_eq!(render(&set), "b\na\n");
    }
}
