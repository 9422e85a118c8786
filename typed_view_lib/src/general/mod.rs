pub mod byte_view;
pub(crate) mod unaligned;
