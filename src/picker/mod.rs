use chrono::{Datelike, Local};
use std::sync::mpsc;
use thiserror::Error;
use tracing::{debug, trace};

use crate::math;

// ─── Pick mode / events ───────────────────────────────────────────────────────

/// Which granularity the picker is currently selecting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PickMode {
    #[default]
    Date,
    Month,
    Year,
}

/// Change notification, sent only after the field's carry/borrow
/// normalization has fully resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    DateChanged(u32),
    MonthChanged(u32),
    YearChanged(i32),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickerError {
    /// The day delta was so large that normalization hit the step cap.
    #[error("date normalization did not settle after {steps} carry steps")]
    CarryOverflow { steps: u32 },
}

/// Upper bound on carry/borrow iterations in `set_date`. Each step moves at
/// most one month, so this is ~340 years of drift; intended usage shifts by
/// at most one month per call.
pub const MAX_CARRY_STEPS: u32 = 4096;

// ─── Picker state ─────────────────────────────────────────────────────────────

/// One picker session's authoritative (date, month, year, mode) state.
///
/// Fields are public: collaborators that already hold valid values (grid
/// cells, guarded parse results) write them directly, exactly like the
/// `go_pick_*` transitions. The `set_*` mutators are for values that may be
/// out of range and need carry/borrow into the coarser units.
pub struct CalendarPicker {
    pub date:      u32,
    pub month:     u32, // 0 = January … 11 = December
    pub year:      i32,
    pub pick_mode: PickMode,
    event_tx: mpsc::Sender<ChangeEvent>,
    event_rx: mpsc::Receiver<ChangeEvent>,
}

impl CalendarPicker {
    /// Picker anchored at a specific day. `month` is 0-indexed; the caller
    /// provides a valid (date, month, year) combination.
    pub fn at(year: i32, month: u32, date: u32) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        Self { date, month, year, pick_mode: PickMode::Date, event_tx, event_rx }
    }

    /// Picker anchored at today. Years past 2300 are assumed to come from a
    /// Buddhist-era clock and are shifted back 543 years; this adjustment
    /// applies at construction only, never in the mutators.
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        let mut year = today.year();
        if year > 2300 {
            year -= 543;
        }
        Self::at(year, today.month0(), today.day())
    }

    // ── Mutators with carry/borrow ────────────────────────────────────────────

    /// Sets the day of month, carrying overflow into the month (and from
    /// there into the year) until the day is valid. A day ≤ 0 borrows from
    /// the previous month the same way. Emits `MonthChanged`/`YearChanged`
    /// for every unit crossed, then `DateChanged` once settled.
    pub fn set_date(&mut self, mut d: i32) -> Result<u32, PickerError> {
        for _ in 0..MAX_CARRY_STEPS {
            let len = math::last_day_of_month(self.year, self.month as i32) as i32;
            if d > len {
                trace!(day = d, month = self.month, year = self.year, "day overflow, carrying");
                d -= len;
                self.set_month(self.month as i32 + 1);
            } else if d <= 0 {
                trace!(day = d, month = self.month, year = self.year, "day underflow, borrowing");
                self.set_month(self.month as i32 - 1);
                d += math::last_day_of_month(self.year, self.month as i32) as i32;
            } else {
                self.date = d as u32;
                self.emit(ChangeEvent::DateChanged(self.date));
                return Ok(self.date);
            }
        }
        Err(PickerError::CarryOverflow { steps: MAX_CARRY_STEPS })
    }

    /// Sets the 0-indexed month, carrying whole years for values outside
    /// `[0,11]`. Emits `YearChanged` per year crossed, then `MonthChanged`.
    pub fn set_month(&mut self, mut m: i32) -> u32 {
        while m > 11 {
            self.set_year(self.year + 1);
            m -= 12;
        }
        while m < 0 {
            self.set_year(self.year - 1);
            m += 12;
        }
        self.month = m as u32;
        self.emit(ChangeEvent::MonthChanged(self.month));
        self.month
    }

    /// Sets the year. Unbounded; emits `YearChanged`.
    pub fn set_year(&mut self, y: i32) -> i32 {
        self.year = y;
        self.emit(ChangeEvent::YearChanged(y));
        y
    }

    // ── Grid-cell selection ───────────────────────────────────────────────────

    /// Interprets a signed day-grid cell (see `grid::GridBuilder::date_grid`)
    /// and selects that day, moving to the adjacent month first when the
    /// cell is non-positive. Cells below -15 are taken to belong to the
    /// previous month, the rest to the next; the threshold is a heuristic
    /// carried over from the grid's leading/trailing day counts.
    pub fn select_cell(&mut self, cell: i32) -> Result<u32, PickerError> {
        if cell > 0 {
            return self.set_date(cell);
        }
        if cell < -15 {
            self.set_month(self.month as i32 - 1);
        } else {
            self.set_month(self.month as i32 + 1);
        }
        self.set_date(-cell)
    }

    // ── Mode transitions ──────────────────────────────────────────────────────

    /// Jump straight to a day cell: all three fields are assumed valid, no
    /// carry, no change event.
    pub fn go_pick_date(&mut self, year: i32, month: u32, date: u32) {
        debug!(year, month, date, "pick mode -> date");
        self.date = date;
        self.month = month;
        self.year = year;
        self.pick_mode = PickMode::Date;
    }

    pub fn go_pick_month(&mut self, year: i32, month: u32) {
        debug!(year, month, "pick mode -> month");
        self.month = month;
        self.year = year;
        self.pick_mode = PickMode::Month;
    }

    pub fn go_pick_year(&mut self, year: i32) {
        debug!(year, "pick mode -> year");
        self.year = year;
        self.pick_mode = PickMode::Year;
    }

    // ── Event queue ───────────────────────────────────────────────────────────

    fn emit(&self, ev: ChangeEvent) {
        // Receiver lives on self, so the send cannot fail.
        let _ = self.event_tx.send(ev);
    }

    /// Next pending change notification, if any.
    pub fn poll_event(&mut self) -> Option<ChangeEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Drains all pending notifications in emission order.
    pub fn drain_events(&mut self) -> Vec<ChangeEvent> {
        let mut buf = Vec::new();
        while let Ok(ev) = self.event_rx.try_recv() {
            buf.push(ev);
        }
        buf
    }
}

impl Default for CalendarPicker {
    fn default() -> Self {
        Self::new()
    }
}
