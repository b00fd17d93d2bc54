//! Pure forecast transformations: the window over the hourly series and the
//! weather-code table.

pub mod codes;
pub mod window;
pub mod wording;

pub use codes::describe;
pub use window::{WindowError, forecast_window, resolve_timezone};
