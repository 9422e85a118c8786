use crate::element_trait::ElementTrait;
use crate::general::unaligned::{read_padded, write_at, write_truncated};
use crate::typed_view::TypedView;
use std::marker::PhantomData;
use std::mem::size_of;

/// A non-owning, writable view of a byte buffer as a sequence of `T`.
///
/// Holds the buffer exclusively, so unlike `TypedView` it cannot be aliased
/// by other views while it lives.
pub struct TypedViewMut<'a, T: ElementTrait> {
    buf: &'a mut [u8],
    len: usize,
    phantom: PhantomData<T>,
}

impl<'a, T: ElementTrait> TypedViewMut<'a, T> {
    pub fn new(buf: &'a mut [u8]) -> TypedViewMut<'a, T> {
        let len = T::element_count(buf.len());
        TypedViewMut {
            buf,
            len,
            phantom: PhantomData,
        }
    }

    pub fn size(&self) -> usize {
        self.buf.len()
    }

    pub fn length(&self) -> usize {
        self.len
    }

    pub fn type_size(&self) -> usize {
        size_of::<T>()
    }

    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        Some(read_padded(self.buf, index * size_of::<T>()))
    }

    /// Writes `val` at `index`, returns false if `index` is out of range.
    ///
    /// A partial trailing element only receives the bytes that fit.
    pub fn set(&mut self, index: usize, val: T) -> bool {
        if index >= self.len {
            return false;
        }
        write_truncated(self.buf, index * size_of::<T>(), val);
        true
    }

    /// # Safety
    /// `(index + 1) * size_of::<T>() <= self.size()`
    pub unsafe fn set_unchecked(&mut self, index: usize, val: T) {
        write_at(self.buf, index * size_of::<T>(), val)
    }

    pub fn fill(&mut self, val: T) {
        for i in 0..self.len {
            self.set(i, val);
        }
    }

    /// borrow a read-only view of the same bytes
    pub fn as_view(&self) -> TypedView<'_, T> {
        TypedView::new(self.buf)
    }
}
