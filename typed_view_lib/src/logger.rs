
/// # Arguments
/// * `type_name` - of type &str
/// * `offset` - byte offset the value was read from
/// * `next_offset` - cursor position after the read
#[macro_export]
macro_rules! log_read {
    ($type_name:expr, $offset:expr, $next_offset:expr) => {
        log::trace!("read {} at offset {}, cursor now {}", $type_name, $offset, $next_offset);
    };
}

/// view of type typed_view_lib::typed_view::TypedView
#[macro_export]
macro_rules! log_sub_view {
    ($pos:expr, $n:expr, $view:expr) => {
        log::trace!(
            "sub view {{ pos: {}, requested: {}, size: {}, length: {} }}",
            $pos,
            $n,
            $view.size(),
            $view.length()
        );
    };
}

/// error of type typed_view_lib::error::ErrorType
#[macro_export]
macro_rules! log_range_error {
    ($error:expr) => {
        log::debug!("{}", $error);
    };
}
