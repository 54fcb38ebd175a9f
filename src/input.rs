//! Text-field side of the picker: parses typed text through the formatter,
//! applies only the fields that pass their validity guard, and runs the
//! drill-up/down convention over the picker's change events.

use tracing::debug;

use crate::format::{CalendarFormatter, NumberFormatter};
use crate::picker::{CalendarPicker, ChangeEvent, PickMode};

pub struct CalendarInput {
    /// Current display text. Kept verbatim as typed until a picker change
    /// rewrites it through the formatter.
    pub value: String,
    formatter: Box<dyn CalendarFormatter>,
    picker:    Option<CalendarPicker>,
}

impl CalendarInput {
    pub fn new() -> Self {
        Self::with_formatter(Box::new(NumberFormatter))
    }

    pub fn with_formatter(formatter: Box<dyn CalendarFormatter>) -> Self {
        Self { value: String::new(), formatter, picker: None }
    }

    /// Starts a picker session (anchored at today) and seeds it from the
    /// current text. No-op when a session is already open.
    pub fn open(&mut self) {
        if self.picker.is_some() {
            return;
        }
        debug!("opening picker session");
        self.picker = Some(CalendarPicker::new());
        let text = self.value.clone();
        self.date_change(&text);
    }

    pub fn is_open(&self) -> bool {
        self.picker.is_some()
    }

    /// The open session, for grid collaborators to feed selections into.
    pub fn picker_mut(&mut self) -> Option<&mut CalendarPicker> {
        self.picker.as_mut()
    }

    /// Called with the field's text on every keystroke (and on blur).
    pub fn input_change(&mut self, text: &str) {
        self.date_change(text);
    }

    /// Each parsed field is applied only if it passes its guard; malformed
    /// or missing fields leave the picker untouched. Direct writes — values
    /// that reach the picker this way are taken as already in range.
    fn date_change(&mut self, text: &str) {
        self.value = text.to_owned();
        if let Some(picker) = self.picker.as_mut() {
            let dmy = self.formatter.parse(&self.value);
            if let Some(d) = dmy.date() {
                picker.date = d;
            }
            if let Some(m) = dmy.month() {
                picker.month = m;
            }
            if let Some(y) = dmy.year() {
                picker.year = y;
            }
        }
    }

    /// Drains the session's change events: any change refreshes the text;
    /// a year selection drills down to the month grid, a month selection to
    /// the day grid, and a day selection commits and closes the session.
    pub fn process_events(&mut self) {
        let Some(picker) = self.picker.as_mut() else { return };
        let mut close = false;
        for ev in picker.drain_events() {
            match ev {
                ChangeEvent::DateChanged(_) => close = true,
                ChangeEvent::MonthChanged(_) => picker.pick_mode = PickMode::Date,
                ChangeEvent::YearChanged(_) => picker.pick_mode = PickMode::Month,
            }
            self.value = self
                .formatter
                .format_string(picker.date, picker.month, picker.year);
        }
        if close {
            debug!(value = %self.value, "date committed, closing picker session");
            self.picker = None;
        }
    }
}

impl Default for CalendarInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_at(input: &mut CalendarInput, year: i32, month: u32, date: u32) {
        input.open();
        let p = input.picker_mut().unwrap();
        p.go_pick_date(year, month, date);
    }

    #[test]
    fn typed_text_applies_guarded_fields() {
        let mut input = CalendarInput::new();
        open_at(&mut input, 2020, 0, 1);
        input.input_change("15/2/2021");
        let p = input.picker_mut().unwrap();
        assert_eq!((p.date, p.month, p.year), (15, 1, 2021));
    }

    #[test]
    fn partial_and_malformed_fields_are_skipped() {
        let mut input = CalendarInput::new();
        open_at(&mut input, 2020, 5, 10);
        // Month+year only: date keeps its previous value.
        input.input_change("3/2021");
        {
            let p = input.picker_mut().unwrap();
            assert_eq!((p.date, p.month, p.year), (10, 2, 2021));
        }
        // Garbage changes nothing but the displayed text.
        input.input_change("soon");
        let p = input.picker_mut().unwrap();
        assert_eq!((p.date, p.month, p.year), (10, 2, 2021));
        assert_eq!(input.value, "soon");
    }

    #[test]
    fn year_and_month_selections_drill_down() {
        let mut input = CalendarInput::new();
        open_at(&mut input, 2021, 5, 15);

        input.picker_mut().unwrap().set_year(1999);
        input.process_events();
        assert_eq!(input.picker_mut().unwrap().pick_mode, PickMode::Month);
        assert_eq!(input.value, "15/6/1999");

        input.picker_mut().unwrap().set_month(2);
        input.process_events();
        assert_eq!(input.picker_mut().unwrap().pick_mode, PickMode::Date);
        assert_eq!(input.value, "15/3/1999");
    }

    #[test]
    fn day_selection_commits_and_closes() {
        let mut input = CalendarInput::new();
        open_at(&mut input, 2021, 1, 1);
        input.picker_mut().unwrap().set_date(28).unwrap();
        input.process_events();
        assert!(!input.is_open());
        assert_eq!(input.value, "28/2/2021");
    }

    #[test]
    fn carry_refreshes_text_with_the_settled_state() {
        let mut input = CalendarInput::new();
        open_at(&mut input, 2021, 0, 31);
        input.picker_mut().unwrap().set_date(32).unwrap();
        input.process_events();
        // Intermediate MonthChanged is followed by DateChanged; the final
        // text reflects the fully settled state and the session is closed.
        assert!(!input.is_open());
        assert_eq!(input.value, "1/2/2021");
    }
}
