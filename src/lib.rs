pub mod func_name;
pub mod name_display;
pub mod ternary;
pub mod timer;

pub use func_name::{Callable, func_name};
pub use name_display::NameDisplay;
pub use ternary::ternary;
pub use timer::{Timer, TimerBuilder, timed, timed_named};
