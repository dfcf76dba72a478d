#[cfg(feature = "tracing")]
macro_rules! op_span {
    ($($arg:tt)*) => {
        tracing::trace_span!($($arg)*).entered()
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! op_span {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(feature = "tracing")]
macro_rules! debug_event {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_event {
    ($($arg:tt)*) => {
        ()
    };
}

pub(crate) use debug_event;
pub(crate) use op_span;
