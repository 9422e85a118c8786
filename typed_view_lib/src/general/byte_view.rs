/// Trait for view types over a borrowed byte buffer
///
/// The buffer is never copied or owned, the lifetime `'a` ties every view to it.
pub trait ByteView<'a>: Sized {
    /// get view over the whole buffer
    fn from_buf(buf: &'a [u8]) -> Self;
    /// get the byte buffer of the view
    fn buf(&self) -> &'a [u8];
}
