pub trait ArrayMap<T, U> {
    type Output;
    fn array_map_by_ref(&self, f: impl FnMut(&T) -> U) -> Self::Output;
}
impl<T, U> ArrayMap<T, U> for [T; 4] {
    type Output = [U; 4];
    #[inline]
    fn array_map_by_ref(&self, mut f: impl FnMut(&T) -> U) -> Self::Output {
        let [
            e0,
            e1,
            e2,
            e3,
        ] = self;
        [
            f(e0),
            f(e1),
            f(e2),
            f(e3),
        ]
    }
}

/// Emits a `tracing` event if the `tracing` feature is enabled, compiles to nothing otherwise.
macro_rules! event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            tracing::$level!($($arg)+);
        }
    };
}

#[inline]
#[cfg_attr(debug_assertions, track_caller)]
pub unsafe fn unreachable_debugchecked(msg: &str) -> ! {
    #[cfg(debug_assertions)]
    {
        // Most of those panics are in a tree corrupton context, so we should
        // just abort the process to prevent unwinders from collecting corrupted data
        abort_on_panic(|| -> () { unreachable!("{}", msg) });
        std::process::abort()
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = msg;
        core::hint::unreachable_unchecked()
    }
}

#[cfg(debug_assertions)]
#[inline]
pub fn abort_on_panic<R>(f: impl FnOnce() -> R) -> R {
    #[cfg(feature = "unwind_safety")]
    {
        std::panic::catch_unwind(
            std::panic::AssertUnwindSafe(f)
        ).unwrap_or_else(|_| std::process::abort())
    }
    #[cfg(not(feature = "unwind_safety"))]
    {
        f()
    }
}
