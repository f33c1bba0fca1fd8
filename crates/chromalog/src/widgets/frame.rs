//! Boxes and separator lines.

use console::Term;

use crate::util::{display_width, pad_to_width, truncate_to_width};

/// Columns used when the terminal size is unknown.
const FALLBACK_COLUMNS: usize = 80;

/// Line set used to draw a box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BorderStyle {
    #[default]
    Single,
    Double,
    Round,
    Bold,
}

struct Border {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
    tee_left: char,
    tee_right: char,
}

impl BorderStyle {
    fn border(self) -> Border {
        let (corners, horizontal, vertical, tees) = match self {
            BorderStyle::Single => (['┌', '┐', '└', '┘'], '─', '│', ['├', '┤']),
            BorderStyle::Double => (['╔', '╗', '╚', '╝'], '═', '║', ['╠', '╣']),
            BorderStyle::Round => (['╭', '╮', '╰', '╯'], '─', '│', ['├', '┤']),
            BorderStyle::Bold => (['┏', '┓', '┗', '┛'], '━', '┃', ['┣', '┫']),
        };
        Border {
            top_left: corners[0],
            top_right: corners[1],
            bottom_left: corners[2],
            bottom_right: corners[3],
            horizontal,
            vertical,
            tee_left: tees[0],
            tee_right: tees[1],
        }
    }
}

/// Layout options for [`boxed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxOptions {
    /// Spaces between the border and the text.
    pub padding: usize,
    /// Spaces before the left border.
    pub margin: usize,
    pub border: BorderStyle,
    /// Longest text width before lines are truncated with `…`.
    pub max_width: Option<usize>,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            padding: 1,
            margin: 1,
            border: BorderStyle::Single,
            max_width: None,
        }
    }
}

/// Draws `content` inside a border, with `title` in a header row.
///
/// An empty title omits the header row and its rule.
///
/// # Example
///
/// ```rust
/// use chromalog::{boxed, BoxOptions};
///
/// let out = boxed("Hi", "a\nbcd", &BoxOptions { margin: 0, ..Default::default() });
/// assert_eq!(out, "┌─────┐\n│ Hi  │\n├─────┤\n│ a   │\n│ bcd │\n└─────┘");
/// ```
pub fn boxed(title: &str, content: &str, options: &BoxOptions) -> String {
    let border = options.border.border();
    let clip = |line: &str| match options.max_width {
        Some(max) => truncate_to_width(line, max),
        None => line.to_string(),
    };

    let title = clip(title);
    let lines: Vec<String> = content.lines().map(clip).collect();
    let text_width = lines
        .iter()
        .map(|line| display_width(line))
        .chain(std::iter::once(display_width(&title)))
        .max()
        .unwrap_or(0);
    let inner = text_width + options.padding * 2;

    let margin = " ".repeat(options.margin);
    let pad = " ".repeat(options.padding);
    let rule = border.horizontal.to_string().repeat(inner);
    let row = |text: &str| {
        format!(
            "{}{}{}{}{}{}",
            margin,
            border.vertical,
            pad,
            pad_to_width(text, text_width),
            pad,
            border.vertical
        )
    };

    let mut out = vec![format!(
        "{}{}{}{}",
        margin, border.top_left, rule, border.top_right
    )];
    if !title.is_empty() {
        out.push(row(title.as_str()));
        out.push(format!(
            "{}{}{}{}",
            margin, border.tee_left, rule, border.tee_right
        ));
    }
    out.extend(lines.iter().map(|line| row(line.as_str())));
    out.push(format!(
        "{}{}{}{}",
        margin, border.bottom_left, rule, border.bottom_right
    ));

    out.join("\n")
}

/// A line of `ch` repeated `len` times.
pub fn separator(ch: char, len: usize) -> String {
    ch.to_string().repeat(len)
}

/// A separator as wide as the terminal, or 80 columns if unknown.
pub fn separator_for_terminal(ch: char) -> String {
    let columns = Term::stdout()
        .size_checked()
        .map(|(_, cols)| usize::from(cols))
        .unwrap_or(FALLBACK_COLUMNS);
    separator(ch, columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_margin() -> BoxOptions {
        BoxOptions {
            margin: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_box_default_margin() {
        let out = boxed("T", "x", &BoxOptions::default());
        assert_eq!(out, " ┌───┐\n │ T │\n ├───┤\n │ x │\n └───┘");
    }

    #[test]
    fn test_box_without_title() {
        let out = boxed("", "ab", &no_margin());
        assert_eq!(out, "┌────┐\n│ ab │\n└────┘");
    }

    #[test]
    fn test_box_title_wider_than_content() {
        let out = boxed("Title", "a", &no_margin());
        assert_eq!(
            out,
            "┌───────┐\n│ Title │\n├───────┤\n│ a     │\n└───────┘"
        );
    }

    #[test]
    fn test_box_double_border() {
        let options = BoxOptions {
            border: BorderStyle::Double,
            padding: 0,
            ..no_margin()
        };
        assert_eq!(boxed("", "ok", &options), "╔══╗\n║ok║\n╚══╝");
    }

    #[test]
    fn test_box_wide_chars_align() {
        let out = boxed("", "日本\nab", &no_margin());
        let widths: Vec<usize> = out.lines().map(display_width).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn test_box_truncates_long_lines() {
        let options = BoxOptions {
            max_width: Some(4),
            ..no_margin()
        };
        let out = boxed("", "abcdefgh", &options);
        assert_eq!(out, "┌──────┐\n│ abc… │\n└──────┘");
    }

    #[test]
    fn test_separator() {
        assert_eq!(separator('-', 5), "-----");
        assert_eq!(separator('═', 0), "");
    }
}
