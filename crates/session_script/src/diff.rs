use std::fmt::Write;

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if ch < ' ' => {
                let _ = write!(&mut out, "\\u{{{:02X}}}", ch as u32);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Mark the caret as `|`, or the selection as `[...]`.
///
/// ```
/// use session_script::render_caret;
///
/// assert_eq!(render_caret("$12", 1, None), "$|12");
/// assert_eq!(render_caret("$12", 3, Some(1..3)), "$[12]");
/// ```
pub fn render_caret(display: &str, caret: usize, selection: Option<std::ops::Range<usize>>) -> String {
    let mut out = String::with_capacity(display.len() + 2);
    match selection {
        Some(range) => {
            out.push_str(&display[..range.start]);
            out.push('[');
            out.push_str(&display[range.clone()]);
            out.push(']');
            out.push_str(&display[range.end..]);
        }
        None => {
            out.push_str(&display[..caret]);
            out.push('|');
            out.push_str(&display[caret..]);
        }
    }
    out
}

/// Describe the first mismatch between two transcripts, with two lines of
/// context either side.
pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    let max = expected.len().max(actual.len());
    let mut out = String::new();

    let mismatch = (0..max).find(|&i| line(expected, i) != line(actual, i));
    if let Some(i) = mismatch {
        let start = i.saturating_sub(2);
        let end = (i + 3).min(max);
        let _ = writeln!(
            &mut out,
            "first mismatch at step {} (showing {}..={}):",
            i + 1,
            start + 1,
            end
        );
        for idx in start..end {
            let marker = if idx == i { ">" } else { " " };
            let _ = writeln!(&mut out, "{marker} {:>4}  expected: {}", idx + 1, line(expected, idx));
            let _ = writeln!(&mut out, "{marker} {:>4}    actual: {}", idx + 1, line(actual, idx));
        }
    }
    let _ = writeln!(
        &mut out,
        "expected {} lines, actual {} lines",
        expected.len(),
        actual.len()
    );
    out
}

fn line(lines: &[String], i: usize) -> &str {
    lines.get(i).map(String::as_str).unwrap_or("<missing>")
}
