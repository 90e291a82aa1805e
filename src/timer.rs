use std::time::Instant;

use derive_builder::Builder;
use log::Level;

use crate::func_name::Callable;
use crate::name_display::NameDisplay;

/// Timing decorator configuration.
///
/// [`Timer::wrap`] turns a zero-argument action into a wrapper of the same
/// shape that times every invocation and logs the elapsed duration. The
/// wrapped action runs synchronously and exactly once per call; a panic
/// inside it unwinds through the wrapper before anything is logged.
#[derive(Builder, Clone, Debug)]
#[builder(default)]
pub struct Timer {
    display: NameDisplay,
    level: Level,
}

impl Default for Timer {
    fn default() -> Timer {
        Timer {
            display: NameDisplay::Hidden,
            level: Level::Info,
        }
    }
}

impl Timer {
    /// Returns a reusable wrapper around `action`. Each invocation of the
    /// wrapper independently measures one execution and emits one log record
    /// of the form `-- func <name >executed in <elapsed> --`.
    pub fn wrap<F>(&self, mut action: F) -> impl FnMut() + use<F>
    where
        F: FnMut(),
    {
        let level = self.level;
        let prefix = self.display.log_prefix();

        move || {
            let start = Instant::now();
            action();
            let elapsed = start.elapsed();

            log::log!(level, "-- func {}executed in {:?} --", prefix, elapsed);
        }
    }
}

/// Wraps `action` without a name in the log line.
pub fn timed<F>(action: F) -> impl FnMut()
where
    F: FnMut(),
{
    Timer::default().wrap(action)
}

/// Wraps `action` with the resolved name of `name_source` in the log line.
///
/// A zero-argument action cannot carry an arbitrary function's arguments or
/// result, so to time such a function pass a closure over the real call as
/// `action` and the original function item as `name_source`:
///
/// ```
/// fn is_palindrome(s: &str) -> bool {
///     s == s.chars().rev().collect::<String>()
/// }
///
/// let phrase = "step on no pets";
/// let mut result = false;
/// let mut wrapper = functimer::timed_named(&is_palindrome, || {
///     result = is_palindrome(phrase);
/// });
/// wrapper();
/// drop(wrapper);
/// assert!(result);
/// ```
pub fn timed_named<Args, N, F>(name_source: &N, action: F) -> impl FnMut() + use<Args, N, F>
where
    N: Callable<Args>,
    F: FnMut(),
{
    Timer {
        display: NameDisplay::of(name_source),
        ..Timer::default()
    }
    .wrap(action)
}
