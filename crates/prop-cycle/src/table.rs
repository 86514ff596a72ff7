// SPDX-License-Identifier: MIT
//
// Text-table rendering of a cycle's materialized property sets.
//
// One header cell per key in declared key order, one row per property
// set, every cell the value's own printable form. Column widths are
// measured in terminal display columns, not bytes, so values that render
// wide (CJK, emoji) keep the table aligned. Display-only: this output is
// never parsed back.

use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::cycle::Cycler;

impl<V: Clone + fmt::Debug> Cycler<V> {
    /// Render the full cycle as an aligned box-drawing table.
    ///
    /// ```text
    /// ┌─────┬──────┐
    /// │ "c" │ "lw" │
    /// ├─────┼──────┤
    /// │ 'r' │ 0    │
    /// │ 'g' │ 1    │
    /// │ 'b' │ 2    │
    /// └─────┴──────┘
    /// ```
    #[must_use]
    pub fn table(&self) -> String {
        let keys = self.key_order();
        if keys.is_empty() {
            return String::from("┌┐\n└┘\n");
        }

        let header: Vec<String> = keys.iter().map(|key| format!("{key:?}")).collect();
        let rows: Vec<Vec<String>> = self
            .iter()
            .map(|set| keys.iter().map(|key| format!("{:?}", set[*key])).collect())
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|cell| cell.width()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }

        let mut out = String::new();
        rule(&mut out, &widths, '┌', '┬', '┐');
        write_row(&mut out, &header, &widths);
        rule(&mut out, &widths, '├', '┼', '┤');
        for row in &rows {
            write_row(&mut out, row, &widths);
        }
        rule(&mut out, &widths, '└', '┴', '┘');
        out
    }
}

fn rule(out: &mut String, widths: &[usize], left: char, mid: char, right: char) {
    out.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push(mid);
        }
        for _ in 0..width + 2 {
            out.push('─');
        }
    }
    out.push(right);
    out.push('\n');
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    for (cell, width) in cells.iter().zip(widths) {
        out.push('│');
        out.push(' ');
        out.push_str(cell);
        // Pad to the column width plus the one-space gutter.
        for _ in cell.width()..width + 1 {
            out.push(' ');
        }
    }
    out.push_str("│\n");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
