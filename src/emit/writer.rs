//! Output writer with indentation tracking
//!
//! Builds generated source line by line for the text-based targets.

/// Writer that tracks indentation and builds the generated text
#[derive(Debug)]
pub struct SourceWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Spaces per indentation level
    indent_width: usize,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl SourceWriter {
    /// Create a new writer with the given indentation width
    pub fn new(indent_width: usize) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_width,
            at_line_start: true,
        }
    }

    /// Get the generated output
    pub fn finish(self) -> String {
        self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    fn write_indent(&mut self) {
        if self.at_line_start {
            let width = self.indent_level * self.indent_width;
            self.output.extend(std::iter::repeat_n(' ', width));
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Ensure the output ends with exactly one blank line
    pub fn blank_line(&mut self) {
        if !self.at_line_start {
            self.newline();
        }
        if !self.output.is_empty() && !self.output.ends_with("\n\n") {
            self.newline();
        }
    }

    /// Write one element per line, separated by `,` and closed by `close` on the last element.
    pub fn write_list<I>(&mut self, items: I, close: &str)
    where
        I: IntoIterator<Item = String>,
    {
        let mut items = items.into_iter().peekable();
        while let Some(item) = items.next() {
            self.write(&item);
            if items.peek().is_some() {
                self.writeln(",");
            } else {
                self.writeln(close);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation_applies_at_line_start() {
        let mut w = SourceWriter::new(3);
        w.writeln("package P is");
        w.indent();
        w.write("X : Integer");
        w.writeln(" := 1;");
        w.dedent();
        w.writeln("end P;");
        assert_eq!(w.finish(), "package P is\n   X : Integer := 1;\nend P;\n");
    }

    #[test]
    fn test_dedent_saturates_at_zero() {
        let mut w = SourceWriter::new(4);
        w.dedent();
        w.writeln("x");
        assert_eq!(w.finish(), "x\n");
    }

    #[test]
    fn test_blank_line_is_not_repeated() {
        let mut w = SourceWriter::new(3);
        w.writeln("a");
        w.blank_line();
        w.blank_line();
        w.writeln("b");
        assert_eq!(w.finish(), "a\n\nb\n");
    }

    #[test]
    fn test_blank_line_on_empty_output_is_noop() {
        let mut w = SourceWriter::new(3);
        w.blank_line();
        assert_eq!(w.finish(), "");
    }

    #[test]
    fn test_write_list_separates_and_closes() {
        let mut w = SourceWriter::new(2);
        w.indent();
        w.write_list(vec!["a".to_string(), "b".to_string()], ");");
        assert_eq!(w.finish(), "  a,\n  b);\n");
    }

    #[test]
    fn test_write_list_empty_writes_nothing() {
        let mut w = SourceWriter::new(2);
        w.write_list(Vec::<String>::new(), ");");
        assert_eq!(w.finish(), "");
    }
}
