//! Main fact table rows after numeric coercion.

/// One row of the fact table, numeric columns already coerced.
///
/// A cell that was empty or failed to parse is `None`; non-finite numbers are
/// treated the same way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactRow {
    /// 0-based position in the source table, header excluded.
    pub index: usize,
    pub area: Option<String>,
    pub ethnicity: Option<String>,
    pub year: Option<f64>,
    pub numb: Option<f64>,
    pub pc: Option<f64>,
    pub numb_x: Option<f64>,
    pub pc_x: Option<f64>,
}

/// The three dimension values of a row that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowDimensions<'a> {
    pub area: &'a str,
    pub ethnicity: &'a str,
    pub year: i64,
}

/// 2^63; truncated values in `[-2^63, 2^63)` convert to `i64` exactly.
const I64_RANGE_BOUND: f64 = 9_223_372_036_854_775_808.0;

impl FactRow {
    /// Dimension values, or `None` when any of area, ethnicity or year is missing.
    ///
    /// A year outside the `i64` range counts as missing.
    pub fn dimensions(&self) -> Option<RowDimensions<'_>> {
        let area = self.area.as_deref()?;
        let ethnicity = self.ethnicity.as_deref()?;
        let year = self.year.map(f64::trunc).filter(|year| {
            (-I64_RANGE_BOUND..I64_RANGE_BOUND).contains(year)
        })?;
        Some(RowDimensions {
            area,
            ethnicity,
            year: year as i64,
        })
    }
}
