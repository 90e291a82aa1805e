use std::any::type_name;

/// Marker for values that can be invoked. Implemented for every `FnOnce`
/// signature up to eight arguments, so passing a non-callable to
/// [`func_name`] is a compile error rather than a runtime panic.
pub trait Callable<Args> {}

macro_rules! impl_callable {
    ($($arg:ident),*) => {
        impl<Func, $($arg,)* Ret> Callable<($($arg,)*)> for Func
        where
            Func: FnOnce($($arg),*) -> Ret,
        {
        }
    };
}

impl_callable!();
impl_callable!(A1);
impl_callable!(A1, A2);
impl_callable!(A1, A2, A3);
impl_callable!(A1, A2, A3, A4);
impl_callable!(A1, A2, A3, A4, A5);
impl_callable!(A1, A2, A3, A4, A5, A6);
impl_callable!(A1, A2, A3, A4, A5, A6, A7);
impl_callable!(A1, A2, A3, A4, A5, A6, A7, A8);

/// Returns the unqualified declared name of a callable, with module path
/// segments stripped.
///
/// Pass the function item itself, not a coerced `fn` pointer. Closures have
/// no declared name and resolve to `{{closure}}`.
pub fn func_name<Args, F>(_function: &F) -> &'static str
where
    F: Callable<Args>,
{
    short_name(type_name::<F>())
}

fn short_name(qualified: &'static str) -> &'static str {
    qualified.rsplit("::").next().unwrap_or(qualified)
}
