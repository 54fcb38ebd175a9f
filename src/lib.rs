//! Date-picker core: Gregorian calendar math, day/month/year display grids,
//! and a carry-aware navigation model with change events. Rendering and
//! popover placement live in the embedding UI; this crate owns the state and
//! the arithmetic.

pub mod config;
pub mod format;
pub mod grid;
pub mod input;
pub mod math;
pub mod picker;

pub use config::{ConfigError, PickerConfig};
pub use format::{CalendarFormatter, LocaleFormatter, NumberFormatter, ParsedDate};
pub use grid::{GridBuilder, WeekRow};
pub use input::CalendarInput;
pub use picker::{CalendarPicker, ChangeEvent, PickMode, PickerError};
