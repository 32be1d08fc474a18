//! Helpers for Debug impls.

use std::fmt::{self, Debug};

/// Write one element per line, top first, prefixed by its depth from the
/// bottom. The top element is marked.
pub(crate) fn write_levels<T: Debug>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    if values.is_empty() {
        return write!(f, "[]");
    }

    // Pad depths to the width of the largest one.
    let width = (values.len() - 1).to_string().len();

    writeln!(f, "[")?;
    for (depth, value) in values.iter().enumerate().rev() {
        write!(f, "    {depth:>width$}: {value:?}")?;
        if depth == values.len() - 1 {
            write!(f, "  <- top")?;
        }
        writeln!(f)?;
    }
    write!(f, "]")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Levels<'a>(&'a [char]);

    impl Debug for Levels<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_levels(f, self.0)
        }
    }

    #[test]
    fn empty() {
        assert_eq!(format!("{:?}", Levels(&[])), "[]");
    }

    #[test]
    fn top_first_with_marker() {
        let s = format!("{:?}", Levels(&['a', 'b', 'c']));
        assert_eq!(s, "[\n    2: 'c'  <- top\n    1: 'b'\n    0: 'a'\n]");
    }

    #[test]
    fn depths_are_padded() {
        let chars: Vec<char> = ('a'..='k').collect();
        let s = format!("{:?}", Levels(&chars));
        assert!(s.contains("\n    10: 'k'  <- top\n"));
        assert!(s.contains("\n     0: 'a'\n"));
    }
}
