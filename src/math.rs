//! Gregorian calendar arithmetic: day-of-week and month-length, total over
//! all integer year/month inputs (out-of-range months carry into the year).

/// True for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Folds an arbitrary 0-indexed month into `[0,11]`, carrying whole years.
/// `normalize_month(2021, -1)` is December 2020; `normalize_month(2021, 12)`
/// is January 2022.
pub fn normalize_month(year: i32, month: i32) -> (i32, u32) {
    (year + month.div_euclid(12), month.rem_euclid(12) as u32)
}

/// Day of week for a calendar day, 0 = Sunday … 6 = Saturday.
/// `month` is 0-indexed. Sakamoto-style congruence: January and February
/// count as months 10/11 of the previous year.
pub fn day_of_week(year: i32, month: i32, day: i32) -> u32 {
    let y = if month < 2 { year - 1 } else { year };
    let lead = ((((month + 10) % 12) as f64) * 2.6 + 2.5).floor() as i32;
    (lead + day + y + y.div_euclid(4) + y.div_euclid(400) - y.div_euclid(100)).rem_euclid(7) as u32
}

/// Number of days in the given 0-indexed month. Accepts months outside
/// `[0,11]` (e.g. -1 for December of the previous year) by normalizing first.
pub fn last_day_of_month(year: i32, month: i32) -> u32 {
    let (y, m) = normalize_month(year, month);
    if m == 1 {
        if is_leap_year(y) { 29 } else { 28 }
    } else {
        // 31/30 alternation, phase-shifted so the Jul/Aug double-31 lands right.
        30 + ((((m + 10) % 12) % 5 + 1) % 2)
    }
}
