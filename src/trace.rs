//! Feature-gated tracing hooks.
//!
//! `trace_span!(guard, "name", key = value, ..)` binds an entered span guard
//! to `guard` for the rest of the enclosing block. `trace_event!("message",
//! key = value, ..)` emits an info-level event. Without the `tracing` feature
//! both expand to plain bindings of the field values.

#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($guard:ident, $name:literal $(, $key:ident = $value:expr)* $(,)?) => {
        let $guard = tracing::info_span!($name $(, $key = $value)*).entered();
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($guard:ident, $name:literal $(, $key:ident = $value:expr)* $(,)?) => {
        let $guard = ($($value,)*);
    };
}

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($message:literal $(, $key:ident = $value:expr)* $(,)?) => {
        tracing::info!($($key = $value,)* $message)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($message:literal $(, $key:ident = $value:expr)* $(,)?) => {
        let _ = ($($value,)*);
    };
}

pub(crate) use trace_event;
pub(crate) use trace_span;
