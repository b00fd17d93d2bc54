mod forecast;
mod stats;

pub use forecast::cmd_forecast;
pub use stats::cmd_stats;
