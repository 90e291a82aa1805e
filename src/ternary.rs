/// Ternary selection: `if_true` when `cond` holds, `if_false` otherwise.
///
/// Both arms are evaluated before the call, like any function arguments.
pub fn ternary<T>(cond: bool, if_true: T, if_false: T) -> T {
    if cond { if_true } else { if_false }
}
