//! Conditional compilation helpers.

/// Code compiled only when type-stack tracing is active: a debug build with
/// the `debug` feature.
///
/// ```ignore
/// crate::cfg::debug! {
///     mod info_stack;
/// }
///
/// let message = crate::cfg::debug! {
///     if { with_stack(message) } else { message }
/// };
///
/// crate::cfg::debug! {
///     run { stack.clear(); }
/// }
/// ```
macro_rules! debug {
    (if { $($yes:tt)* } else { $($no:tt)* }) => {{
        #[cfg(all(debug_assertions, feature = "debug"))]
        let __value = { $($yes)* };
        #[cfg(not(all(debug_assertions, feature = "debug")))]
        let __value = { $($no)* };
        __value
    }};
    (run { $($body:tt)* }) => {
        #[cfg(all(debug_assertions, feature = "debug"))]
        { $($body)* }
    };
    ($($item:item)*) => {
        $(
            #[cfg(all(debug_assertions, feature = "debug"))]
            $item
        )*
    };
}

pub(crate) use debug;
