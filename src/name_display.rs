use crate::func_name::{Callable, func_name};

/// Whether the timing log line carries the timed function's name.
///
/// Replaces a `show_name` flag paired with an optional name source: the
/// "flag set but no source" combination cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NameDisplay {
    Hidden,
    Named(String),
}

impl NameDisplay {
    /// Resolves the display name from a callable. The callable is only used
    /// as a name source; it is never invoked.
    pub fn of<Args, F>(name_source: &F) -> NameDisplay
    where
        F: Callable<Args>,
    {
        NameDisplay::Named(func_name(name_source).to_string())
    }

    pub(crate) fn log_prefix(&self) -> String {
        match self {
            NameDisplay::Hidden => String::new(),
            NameDisplay::Named(name) => format!("{} ", name),
        }
    }
}

impl Default for NameDisplay {
    fn default() -> NameDisplay {
        NameDisplay::Hidden
    }
}
