// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;
    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Plain text table with a header row and padded columns.
pub struct Table<'a, T, C: TableColumn<T>> {
    columns: &'a [C],
    data: &'a [T],
    separator: &'a str,
    row_color: Option<&'a dyn Fn(&T) -> Option<Color>>,
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            separator: "  ",
            row_color: None,
        }
    }

    pub fn with_row_color(mut self, f: &'a dyn Fn(&T) -> Option<Color>) -> Self {
        self.row_color = Some(f);
        self
    }

    fn widths(&self, header: &[Cow<'_, str>], rows: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
        let mut widths: Vec<usize> = header.iter().map(|c| c.width()).collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }
        widths
    }

    fn render_row(&self, cells: &[Cow<'_, str>], widths: &[usize]) -> String {
        let last = cells.len().saturating_sub(1);
        let mut line = String::new();
        for (i, ((cell, width), col)) in cells.iter().zip(widths).zip(self.columns).enumerate() {
            let pad = width.saturating_sub(cell.width());
            match col.padding_direction() {
                // Last column does not need padding if it's left-aligned
                PaddingDirection::Left if i == last => line.push_str(cell),
                PaddingDirection::Left => {
                    line.push_str(cell);
                    line.push_str(&" ".repeat(pad));
                }
                PaddingDirection::Right => {
                    line.push_str(&" ".repeat(pad));
                    line.push_str(cell);
                }
            }
            if i != last {
                line.push_str(self.separator);
            }
        }
        line
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<_> = self.columns.iter().map(|col| col.name()).collect();
        let rows: Vec<Vec<_>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();
        let widths = self.widths(&header, &rows);

        writeln!(f, "{}", self.render_row(&header, &widths).bold())?;
        for (cells, data) in rows.iter().zip(self.data) {
            let line = self.render_row(cells, &widths);
            match self.row_color.and_then(|g| g(data)) {
                Some(color) => writeln!(f, "{}", line.color(color))?,
                None => writeln!(f, "{line}")?,
            }
        }
        Ok(())
    }
}
