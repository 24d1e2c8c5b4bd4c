/// Code indented by four or more columns.
pub struct IndentedCode;

impl IndentedCode {
    /// Final literal: the accumulated lines without trailing blank lines,
    /// terminated by one line ending.
    pub fn literal(raw: &str) -> String {
        let mut lines: Vec<&str> = raw.split('\n').collect();
        while lines
            .last()
            .is_some_and(|l| l.bytes().all(|b| b == b' ' || b == b'\t'))
        {
            lines.pop();
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
