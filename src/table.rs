/// Markdown table rendering.
///
/// Every column is padded to its widest cell, so the raw markdown lines up
/// in a terminal as well as rendering as a table.
use std::fmt::Write;

/// Column alignment marker placed in the separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Align {
    /// Plain `---`, left to the markdown renderer.
    #[default]
    #[value(name = "none")]
    Default,
    Left,
    Center,
    Right,
}

impl Align {
    fn marks_start(self) -> bool {
        matches!(self, Align::Left | Align::Center)
    }

    fn marks_end(self) -> bool {
        matches!(self, Align::Center | Align::Right)
    }
}

impl From<&str> for Align {
    /// `left`, `center` and `right` name an alignment; anything else is
    /// the default.
    fn from(s: &str) -> Self {
        match s {
            "left" => Align::Left,
            "center" => Align::Center,
            "right" => Align::Right,
            _ => Align::Default,
        }
    }
}

/// Width of each column: the widest of the header cell and every data
/// cell, counted in chars.
pub fn column_widths<H: AsRef<str>>(header: &[H], rows: &[Vec<Option<String>>]) -> Vec<usize> {
    header
        .iter()
        .enumerate()
        .map(|(col, h)| {
            rows.iter()
                .filter_map(|row| row[col].as_deref())
                .map(|cell| cell.chars().count())
                .fold(h.as_ref().chars().count(), usize::max)
        })
        .collect()
}

/// Render `header` and `rows` as a markdown table.
///
/// `None` cells render blank. `align` gives per-column separator markers;
/// columns past its end use the default.
///
/// # Panics
///
/// Panics if any row has a different number of cells than `header`.
pub fn render<H: AsRef<str>>(
    header: &[H],
    rows: &[Vec<Option<String>>],
    align: Option<&[Align]>,
) -> String {
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(
            row.len(),
            header.len(),
            "table row {i} has {} cells but the header has {}",
            row.len(),
            header.len()
        );
    }

    let widths = column_widths(header, rows);
    let mut md = String::new();

    write_row(&mut md, header.iter().map(|h| h.as_ref()), &widths);

    let separators: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(col, &width)| {
            let align = align.and_then(|a| a.get(col)).copied().unwrap_or_default();
            separator(width, align)
        })
        .collect();
    write_row(&mut md, separators.iter().map(String::as_str), &widths);

    for row in rows {
        write_row(
            &mut md,
            row.iter().map(|cell| cell.as_deref().unwrap_or("")),
            &widths,
        );
    }
    md
}

fn separator(width: usize, align: Align) -> String {
    let mut sep = "-".repeat(width);
    if align.marks_start() {
        sep.replace_range(..sep.len().min(1), ":");
    }
    if align.marks_end() {
        let last = sep.len().saturating_sub(1);
        sep.replace_range(last.., ":");
    }
    sep
}

fn write_row<'a>(md: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    md.push_str("| ");
    for (col, (cell, &width)) in cells.zip(widths).enumerate() {
        if col > 0 {
            md.push_str(" | ");
        }
        // Writing into a String cannot fail.
        let _ = write!(md, "{cell:<width$}");
    }
    md.push_str(" |\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn cells(row: &[&str]) -> Vec<Option<String>> {
        row.iter().map(|c| Some(c.to_string())).collect()
    }

    #[test]
    fn header_only() {
        let md = render(&["instance", "Foo.bar"], &[], None);
        assert_eq!(md, "| instance | Foo.bar |\n| -------- | ------- |\n");
    }

    #[test]
    fn widths_follow_widest_cell() {
        let rows = vec![cells(&["i1", "1.50 ± 0.10"]), cells(&["long-instance", "2.00 ± 0.00"])];
        let md = render(&["instance", "Foo.bar"], &rows, None);
        assert_eq!(
            md,
            "\
| instance      | Foo.bar     |
| ------------- | ----------- |
| i1            | 1.50 ± 0.10 |
| long-instance | 2.00 ± 0.00 |
"
        );
    }

    #[test]
    fn plus_minus_counts_as_one_char() {
        assert_eq!(column_widths(&["x"], &[cells(&["1.00 ± 0.00"])]), vec![11]);
    }

    #[test]
    fn absent_cells_render_blank() {
        let rows = vec![vec![Some("a".to_string()), None], cells(&["b", "wide cell"])];
        let md = render(&["instance", "X.m"], &rows, None);
        assert_eq!(
            md,
            "\
| instance | X.m       |
| -------- | --------- |
| a        |           |
| b        | wide cell |
"
        );
    }

    #[test]
    fn alignment_markers() {
        let align = [Align::Left, Align::Center, Align::Right, Align::Default];
        let md = render(&["aa", "bbb", "cccc", "d"], &[], Some(&align));
        assert_eq!(md.lines().nth(1), Some("| :- | :-: | ---: | - |"));
    }

    #[test]
    fn alignment_markers_on_narrow_columns() {
        let align: Vec<Align> = ["left", "center", "right", "anything-else"]
            .into_iter()
            .map(Align::from)
            .collect();
        let md = render(&["a", "bb", "ccc", "d"], &[], Some(&align));
        assert_eq!(md.lines().nth(1), Some("| : | :: | --: | - |"));
    }

    #[test]
    fn zero_width_column_alignment() {
        assert_eq!(separator(0, Align::Default), "");
        assert_eq!(separator(0, Align::Left), ":");
        assert_eq!(separator(0, Align::Center), ":");
        assert_eq!(separator(0, Align::Right), ":");
    }

    #[test]
    fn short_align_leaves_rest_default() {
        let md = render(&["abc", "def"], &[], Some(&[Align::Right]));
        assert_eq!(md.lines().nth(1), Some("| --: | --- |"));
    }

    #[test]
    fn align_from_str() {
        assert_eq!(Align::from("left"), Align::Left);
        assert_eq!(Align::from("center"), Align::Center);
        assert_eq!(Align::from("right"), Align::Right);
        assert_eq!(Align::from("Right"), Align::Default);
        assert_eq!(Align::from(""), Align::Default);
    }

    #[test]
    #[should_panic(expected = "table row 1 has 1 cells but the header has 2")]
    fn ragged_rows_panic() {
        let rows = vec![cells(&["a", "b"]), cells(&["c"])];
        render(&["x", "y"], &rows, None);
    }

    fn arb_table() -> impl Strategy<Value = (Vec<String>, Vec<Vec<Option<String>>>)> {
        (1usize..5).prop_flat_map(|cols| {
            let header = proptest::collection::vec("[a-zA-Z.±]{0,12}", cols);
            let row = proptest::collection::vec(proptest::option::of("[ -~±]{0,16}"), cols);
            (header, proptest::collection::vec(row, 0..6))
        })
    }

    proptest! {
        #[test]
        fn render_is_deterministic((header, rows) in arb_table()) {
            let align = vec![Align::Center; header.len()];
            prop_assert_eq!(
                render(&header, &rows, Some(&align)),
                render(&header, &rows, Some(&align))
            );
        }

        #[test]
        fn every_line_has_column_widths((header, rows) in arb_table()) {
            let widths = column_widths(&header, &rows);
            let md = render(&header, &rows, None);
            let lines: Vec<&str> = md.lines().collect();
            prop_assert_eq!(lines.len(), rows.len() + 2);
            let expected_len: usize =
                widths.iter().sum::<usize>() + 3 * widths.len() + 1;
            for line in lines {
                prop_assert!(line.starts_with("| "));
                prop_assert!(line.ends_with(" |"));
                prop_assert_eq!(line.chars().count(), expected_len);
            }
        }
    }
}
