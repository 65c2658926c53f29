use std::fmt;

use crate::{
    core::{InvalidRegime, Matrix, RegimeKey, Weight},
    graph::Network,
};

/// A square matrix rendered as a fixed-width text table, headed by the
/// location names.
///
/// Every cell is right-aligned to the same width; missing connections show
/// as `∞`. Cells wider than the width are not truncated.
///
/// # Examples
///
/// ```
/// use weatherway::{core::{Matrix, Weight}, io::CostTable};
///
/// let mut costs = Matrix::filled(2, u32::inf(), 0);
/// costs[(0, 1)] = 7;
///
/// let table = CostTable::new(["A", "B"], &costs).width(4);
///
/// assert_eq!(table.to_string(), "       A   B\n   A   0   7\n   B   ∞   0\n");
/// ```
#[derive(Debug, Clone)]
pub struct CostTable<'a, W> {
    names: Vec<&'a str>,
    matrix: &'a Matrix<W>,
    width: usize,
}

impl<'a, W> CostTable<'a, W> {
    pub const DEFAULT_WIDTH: usize = 15;

    /// Names are assigned to rows and columns in index order. Missing names
    /// are rendered empty.
    pub fn new<I>(names: I, matrix: &'a Matrix<W>) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            names: names.into_iter().collect(),
            matrix,
            width: Self::DEFAULT_WIDTH,
        }
    }

    pub fn width(self, width: usize) -> Self {
        Self { width, ..self }
    }

    fn name(&self, index: usize) -> &str {
        self.names.get(index).copied().unwrap_or_default()
    }
}

impl<W> fmt::Display for CostTable<'_, W>
where
    W: Weight + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.width;

        write!(f, "{:>width$}", "")?;
        for col in 0..self.matrix.dim() {
            write!(f, "{:>width$}", self.name(col))?;
        }
        writeln!(f)?;

        for (row, cells) in self.matrix.rows().enumerate() {
            write!(f, "{:>width$}", self.name(row))?;

            for cell in cells {
                if cell.is_inf() {
                    write!(f, "{:>width$}", "∞")?;
                } else {
                    write!(f, "{:>width$}", cell)?;
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

impl<W: Weight> Network<W> {
    /// The raw costs of a regime as a printable table.
    pub fn table<'a>(&self, regime: impl Into<RegimeKey<'a>>) -> Result<CostTable<'_, W>, InvalidRegime> {
        let plane = self.plane(regime)?;
        Ok(CostTable::new(self.catalog().names(), plane))
    }
}
