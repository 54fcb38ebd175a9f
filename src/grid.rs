//! Presentation grids derived from picker state: the signed day matrix for a
//! month, the fixed 3×4 month matrix, and the 20-year window matrix.

use crate::math::{day_of_week, last_day_of_month};

/// Seven signed day cells. Positive = day of the displayed month. Negative =
/// a day of an adjacent month; the magnitude is that day's number in its own
/// month (leading cells come from the previous month, trailing cells from
/// the next).
pub type WeekRow = [i32; 7];

/// Builds display grids, keeping the day grid cached for the current
/// (year, month) and recomputing only when the view moves.
#[derive(Debug, Default)]
pub struct GridBuilder {
    cache: Option<DayGridCache>,
}

#[derive(Debug)]
struct DayGridCache {
    year:  i32,
    month: u32,
    weeks: Vec<WeekRow>,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Week rows for the given month (`month` 0-indexed). Rows =
    /// `ceil((month_len + first_weekday) / 7)`, so a month never renders an
    /// all-padding trailing week.
    pub fn date_grid(&mut self, year: i32, month: u32) -> &[WeekRow] {
        let stale = !matches!(&self.cache, Some(c) if c.year == year && c.month == month);
        if stale {
            self.cache = Some(DayGridCache {
                year,
                month,
                weeks: build_day_grid(year, month),
            });
        }
        &self.cache.as_ref().unwrap().weeks
    }

    /// Months 0..11 in row-major order.
    pub fn month_grid(&self) -> [[u32; 4]; 3] {
        let mut grid = [[0u32; 4]; 3];
        for (i, row) in grid.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (i * 4 + j) as u32;
            }
        }
        grid
    }

    /// The 20-year window containing `anchor`, as 4 rows of 5. The window is
    /// fixed (…1981-2000, 2001-2020, 2021-2040…), not centered on the anchor.
    pub fn year_grid(&self, anchor: i32) -> [[i32; 5]; 4] {
        let base = ceil_div(anchor, 20) * 20;
        let mut grid = [[0i32; 5]; 4];
        for (i, row) in grid.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = base - 19 + (i * 5 + j) as i32;
            }
        }
        grid
    }
}

fn build_day_grid(year: i32, month: u32) -> Vec<WeekRow> {
    let last_month_len = last_day_of_month(year, month as i32 - 1) as i32;
    let this_month_len = last_day_of_month(year, month as i32) as i32;
    let first_weekday = day_of_week(year, month as i32, 1) as i32;

    let rows = (this_month_len + first_weekday + 6) / 7;
    let mut weeks = Vec::with_capacity(rows as usize);
    for i in 0..rows {
        let mut week: WeekRow = [0; 7];
        for j in 1..=7 {
            let raw = i * 7 + j - first_weekday;
            week[j as usize - 1] = if raw > this_month_len {
                this_month_len - raw // trailing day of the next month
            } else if raw <= 0 {
                -(last_month_len + raw) // leading day of the previous month
            } else {
                raw
            };
        }
        weeks.push(week);
    }
    weeks
}

fn ceil_div(a: i32, b: i32) -> i32 {
    a.div_euclid(b) + (a.rem_euclid(b) > 0) as i32
}
