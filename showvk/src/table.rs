use std::io::Write;

use crate::consts::{COLUMN_GAP, INDENT};
use crate::error::{Error, Result};
use crate::vulkan::{ExtensionProperties, LayerProperties};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Every column left-aligned, no indentation.
    Plain,
    /// Indented rows, first column left-aligned, inner columns right-aligned.
    Indented,
}

/// A row a [`Table`] knows how to print.
pub trait Renderable {
    /// Number of columns fixed by the row type, `None` when it comes from the header.
    const ARITY: Option<usize>;
    const STYLE: Style;

    fn cells(&self) -> Vec<String>;

    fn arity(&self) -> usize {
        self.cells().len()
    }
}

impl Renderable for Vec<String> {
    const ARITY: Option<usize> = None;
    const STYLE: Style = Style::Plain;

    fn cells(&self) -> Vec<String> {
        self.clone()
    }

    fn arity(&self) -> usize {
        self.len()
    }
}

impl Renderable for ExtensionProperties {
    const ARITY: Option<usize> = Some(2);
    const STYLE: Style = Style::Indented;

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.spec_version.to_string()]
    }
}

impl Renderable for LayerProperties {
    const ARITY: Option<usize> = Some(4);
    const STYLE: Style = Style::Indented;

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.spec_version.to_string(),
            self.implementation_version.to_string(),
            self.description.clone(),
        ]
    }
}

/// A header and its rows, checked to agree on the column count.
pub struct Table<'a, R> {
    header: &'a [&'a str],
    rows: &'a [R],
}

impl<'a, R: Renderable> Table<'a, R> {
    pub fn new(header: &'a [&'a str], rows: &'a [R]) -> Result<Self> {
        match R::ARITY {
            Some(arity) if header.len() != arity => {
                return Err(Error::ColumnMismatch {
                    expected: arity,
                    found: header.len(),
                });
            }
            Some(_) => (),
            None => {
                if let Some(row) = rows.iter().find(|row| row.arity() != header.len()) {
                    return Err(Error::ColumnMismatch {
                        expected: header.len(),
                        found: row.arity(),
                    });
                }
            }
        }

        Ok(Self { header, rows })
    }

    /// Width of each column: the longest of its header cell and row cells.
    pub fn widths(&self) -> Vec<usize> {
        let mut widths = self
            .header
            .iter()
            .map(|cell| cell.chars().count())
            .collect::<Vec<_>>();

        for row in self.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        widths
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let widths = self.widths();

        let header = self
            .header
            .iter()
            .map(|cell| cell.to_string())
            .collect::<Vec<_>>();
        write_row(out, R::STYLE, &widths, &header)?;

        for row in self.rows {
            write_row(out, R::STYLE, &widths, &row.cells())?;
        }

        Ok(())
    }
}

fn write_row<W: Write>(out: &mut W, style: Style, widths: &[usize], cells: &[String]) -> Result<()> {
    if style == Style::Indented {
        write!(out, "{}", INDENT)?;
    }

    if let Some((last, init)) = cells.split_last() {
        for (column, (cell, &width)) in init.iter().zip(widths).enumerate() {
            match style {
                Style::Indented if column > 0 => write!(out, "{:>width$}", cell, width = width)?,
                _ => write!(out, "{:<width$}", cell, width = width)?,
            }
            write!(out, "{:gap$}", "", gap = COLUMN_GAP)?;
        }
        write!(out, "{}", last)?;
    }

    writeln!(out)?;
    Ok(())
}
