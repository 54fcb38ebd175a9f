//! End-to-end picker session: typed text seeds the state, grid selections
//! drill down through year → month → day, and the committed day closes the
//! session with refreshed text.

use calpick::{CalendarInput, GridBuilder, PickMode};

#[test]
fn full_drill_down_session() {
    let mut input = CalendarInput::new();
    let mut grids = GridBuilder::new();

    input.open();
    input.input_change("15/2/2021");
    {
        let p = input.picker_mut().unwrap();
        assert_eq!((p.date, p.month, p.year), (15, 1, 2021));
    }

    // Drill up to the year grid and pick a year cell.
    let anchor = input.picker_mut().unwrap().year;
    let years = grids.year_grid(anchor);
    assert!(years.iter().flatten().any(|&y| y == 2021));
    input.picker_mut().unwrap().go_pick_year(anchor);
    let picked_year = years[1][3]; // 2029 in the 2021-2040 window
    assert_eq!(picked_year, 2029);
    input.picker_mut().unwrap().set_year(picked_year);
    input.process_events();
    assert_eq!(input.picker_mut().unwrap().pick_mode, PickMode::Month);
    assert_eq!(input.value, "15/2/2029");

    // Pick a month cell from the constant 3x4 grid.
    let months = grids.month_grid();
    let picked_month = months[2][3]; // November
    input.picker_mut().unwrap().set_month(picked_month as i32);
    input.process_events();
    assert_eq!(input.picker_mut().unwrap().pick_mode, PickMode::Date);
    assert_eq!(input.value, "15/12/2029");

    // Pick a leading cell of the day grid: it belongs to the previous month.
    let (y, m) = {
        let p = input.picker_mut().unwrap();
        (p.year, p.month)
    };
    // December 2029 starts on a Saturday, so the first row leads with
    // November days.
    let weeks = grids.date_grid(y, m);
    let cell = weeks[0][0];
    assert_eq!(cell, -25);
    input.picker_mut().unwrap().select_cell(cell).unwrap();
    input.process_events();

    // The day selection committed Nov 25, 2029 and closed the session.
    assert!(!input.is_open());
    assert_eq!(input.value, "25/11/2029");
}

#[test]
fn typed_garbage_never_corrupts_the_session() {
    let mut input = CalendarInput::new();
    input.open();
    input.input_change("31/1/2021");
    input.input_change("not a date");
    // Date 0 and month 0 (parsed as -1) fail their guards; only the year
    // applies.
    input.input_change("0/0/2050");
    let p = input.picker_mut().unwrap();
    assert_eq!((p.date, p.month, p.year), (31, 0, 2050));
    // The picker still normalizes mutations from the mixed state.
    assert_eq!(p.set_date(32), Ok(1));
    assert_eq!((p.date, p.month, p.year), (1, 1, 2050));
}
