mod month;
pub use month::*;
mod date;
pub use date::*;
mod week_day;
pub use week_day::*;
mod year;
pub use year::*;
mod holiday;
pub use holiday::*;
mod worked_time;
pub use worked_time::*;
mod working_days;
pub use working_days::*;
