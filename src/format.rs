//! Pluggable date formatting: the `CalendarFormatter` capability consumed by
//! the input collaborator, the numeric default, and a month-name variant.

/// Sentinel for a field the parser could not produce.
pub const UNSET: i32 = -1;

/// Result of parsing free text. Fields keep the raw parsed values; the
/// guarded accessors encode the apply-policy (date/year ≥ 1, month ≥ 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate {
    pub date:  i32,
    pub month: i32, // 0-indexed
    pub year:  i32,
}

impl ParsedDate {
    pub const EMPTY: ParsedDate = ParsedDate { date: UNSET, month: UNSET, year: UNSET };

    pub fn date(&self) -> Option<u32> {
        (self.date >= 1).then_some(self.date as u32)
    }
    pub fn month(&self) -> Option<u32> {
        (self.month >= 0).then_some(self.month as u32)
    }
    pub fn year(&self) -> Option<i32> {
        (self.year >= 1).then_some(self.year)
    }
}

/// Conversion between the picker's (date, month, year) state and display
/// text. `month` is 0-indexed everywhere in the API; implementations decide
/// how it is shown (the default shows it 1-based).
pub trait CalendarFormatter {
    fn format_date(&self, date: u32, month: u32, year: i32) -> String;
    fn format_month(&self, date: u32, month: u32, year: i32) -> String;
    fn format_year(&self, date: u32, month: u32, year: i32) -> String;
    fn format_string(&self, date: u32, month: u32, year: i32) -> String;
    fn parse(&self, text: &str) -> ParsedDate;
}

// ─── Numeric default ──────────────────────────────────────────────────────────

/// `D/M/Y` with a 1-based month. The parse side reads tokens from the end of
/// the list (year, then month, then date) so partial input like `3/2021`
/// still yields the trailing fields.
#[derive(Debug, Default, Clone)]
pub struct NumberFormatter;

impl CalendarFormatter for NumberFormatter {
    fn format_date(&self, date: u32, _month: u32, _year: i32) -> String {
        date.to_string()
    }
    fn format_month(&self, _date: u32, month: u32, _year: i32) -> String {
        (month + 1).to_string()
    }
    fn format_year(&self, _date: u32, _month: u32, year: i32) -> String {
        year.to_string()
    }
    fn format_string(&self, date: u32, month: u32, year: i32) -> String {
        format!("{}/{}/{}", date, month + 1, year)
    }
    fn parse(&self, text: &str) -> ParsedDate {
        parse_numeric(text, "/")
    }
}

fn parse_numeric(text: &str, separator: &str) -> ParsedDate {
    let mut out = ParsedDate::EMPTY;
    if text.is_empty() {
        return out;
    }
    let tokens: Vec<&str> = text.split(separator).collect();
    let n = tokens.len();
    if n >= 3 {
        out.date = num_or_unset(tokens[n - 3]);
    }
    if n >= 2 {
        out.month = match tokens[n - 2].trim().parse::<i32>() {
            Ok(v) => v - 1,
            Err(_) => UNSET,
        };
    }
    out.year = num_or_unset(tokens[n - 1]);
    out
}

fn num_or_unset(token: &str) -> i32 {
    token.trim().parse().unwrap_or(UNSET)
}

// ─── Month-name variant ───────────────────────────────────────────────────────

/// Formatter with a month-name table and configurable separator; the month
/// position accepts either a name (case-insensitive) or a 1-based number.
#[derive(Debug, Clone)]
pub struct LocaleFormatter {
    pub separator:   String,
    pub month_names: [String; 12],
}

impl Default for LocaleFormatter {
    fn default() -> Self {
        const NAMES: [&str; 12] = [
            "January", "February", "March", "April", "May", "June",
            "July", "August", "September", "October", "November", "December",
        ];
        Self {
            separator:   " ".to_owned(),
            month_names: NAMES.map(str::to_owned),
        }
    }
}

impl LocaleFormatter {
    fn month_index(&self, token: &str) -> i32 {
        let t = token.trim();
        if let Some(i) = self.month_names.iter().position(|n| n.eq_ignore_ascii_case(t)) {
            return i as i32;
        }
        match t.parse::<i32>() {
            Ok(v) => v - 1,
            Err(_) => UNSET,
        }
    }
}

impl CalendarFormatter for LocaleFormatter {
    fn format_date(&self, date: u32, _month: u32, _year: i32) -> String {
        date.to_string()
    }
    fn format_month(&self, _date: u32, month: u32, _year: i32) -> String {
        self.month_names[month as usize % 12].clone()
    }
    fn format_year(&self, _date: u32, _month: u32, year: i32) -> String {
        year.to_string()
    }
    fn format_string(&self, date: u32, month: u32, year: i32) -> String {
        let s = &self.separator;
        format!("{date}{s}{}{s}{year}", self.format_month(date, month, year))
    }
    fn parse(&self, text: &str) -> ParsedDate {
        let mut out = ParsedDate::EMPTY;
        if text.is_empty() {
            return out;
        }
        let tokens: Vec<&str> = text.split(self.separator.as_str()).collect();
        let n = tokens.len();
        if n >= 3 {
            out.date = num_or_unset(tokens[n - 3]);
        }
        if n >= 2 {
            out.month = self.month_index(tokens[n - 2]);
        }
        out.year = num_or_unset(tokens[n - 1]);
        out
    }
}
