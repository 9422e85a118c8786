use crate::element_trait::ElementTrait;
use crate::error::{ErrorType, Result};
use crate::general::byte_view::ByteView;
use crate::general::unaligned::{read_at, read_padded};
use std::cmp::{min, Ordering};
use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem::size_of;

/// A non-owning, read-only view of a byte buffer as a sequence of `T`.
///
/// The length is the byte size divided by `size_of::<T>()`, rounded up, so the
/// last element may be partial. Checked accessors read a partial element with
/// its missing bytes set to zero. Elements are read unaligned, the buffer
/// needs no particular alignment.
pub struct TypedView<'a, T: ElementTrait> {
    buf: &'a [u8],
    len: usize,
    phantom: PhantomData<T>,
}

impl<'a, T: ElementTrait> TypedView<'a, T> {
    pub fn new(buf: &'a [u8]) -> TypedView<'a, T> {
        TypedView {
            buf,
            len: T::element_count(buf.len()),
            phantom: PhantomData,
        }
    }

    /// size of the view in bytes
    pub fn size(&self) -> usize {
        self.buf.len()
    }

    /// size of the view in elements of `T`
    pub fn length(&self) -> usize {
        self.len
    }

    /// size of `T` in bytes
    pub fn type_size(&self) -> usize {
        size_of::<T>()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.buf
    }

    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        Some(read_padded(self.buf, index * size_of::<T>()))
    }

    /// Reads the element at `index` without any bounds check.
    ///
    /// # Safety
    /// The whole element must lie inside the view:
    /// `(index + 1) * size_of::<T>() <= self.size()`.
    /// A partial trailing element does not satisfy this.
    pub unsafe fn get_unchecked(&self, index: usize) -> T {
        read_at(self.buf, index * size_of::<T>())
    }

    pub fn first(&self) -> Option<T> {
        self.get(0)
    }

    pub fn last(&self) -> Option<T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn iter(&self) -> Iter<'a, T> {
        Iter {
            view: *self,
            front: 0,
            back: self.len,
        }
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Returns a view of `n` elements starting at byte position `pos`.
    ///
    /// Fails if `pos` is past the end of the view. A request for more elements
    /// than remain is not an error, the result is cut down to the whole
    /// elements left behind `pos`.
    pub fn sub_view(&self, pos: usize, n: usize) -> Result<TypedView<'a, T>> {
        if pos > self.buf.len() {
            return Err(ErrorType::position_out_of_range(pos, self.buf.len()));
        }
        let remaining = (self.buf.len() - pos) / size_of::<T>();
        let size = min(n, remaining) * size_of::<T>();
        let view = TypedView::new(&self.buf[pos..pos + size]);
        log_sub_view!(pos, n, view);
        Ok(view)
    }

    /// Copies `N` elements into an array.
    ///
    /// The first element copied is at element offset `pos`, pulled back to
    /// `length() - N` when the view is longer than `N` (no pull back otherwise).
    ///
    /// # Safety
    /// No bounds check is done. If fewer than `N` whole elements remain
    /// behind the computed start offset the read goes past the end of the
    /// buffer.
    pub unsafe fn sub_array<const N: usize>(&self, pos: usize) -> [T; N] {
        let start = min(pos, if self.len > N { self.len - N } else { self.len });
        let base = self.buf.as_ptr().add(start * size_of::<T>()) as *const [T; N];
        std::ptr::read_unaligned(base)
    }
}

impl<'a, T: ElementTrait> ByteView<'a> for TypedView<'a, T> {
    fn from_buf(buf: &'a [u8]) -> Self {
        TypedView::new(buf)
    }

    fn buf(&self) -> &'a [u8] {
        self.buf
    }
}

impl<'a, T: ElementTrait> Clone for TypedView<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: ElementTrait> Copy for TypedView<'a, T> {}

impl<'a, T: ElementTrait> Default for TypedView<'a, T> {
    fn default() -> Self {
        TypedView::new(&[])
    }
}

impl<'a, T: ElementTrait + Debug> Debug for TypedView<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// element wise, by `ElementTrait::eq`
impl<'a, 'b, T: ElementTrait> PartialEq<TypedView<'b, T>> for TypedView<'a, T> {
    fn eq(&self, other: &TypedView<'b, T>) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| T::eq(&a, &b))
    }
}

/// lexicographic, by `ElementTrait::eq` and `ElementTrait::lt`
impl<'a, 'b, T: ElementTrait> PartialOrd<TypedView<'b, T>> for TypedView<'a, T> {
    fn partial_cmp(&self, other: &TypedView<'b, T>) -> Option<Ordering> {
        for (a, b) in self.iter().zip(other.iter()) {
            if T::lt(&a, &b) {
                return Some(Ordering::Less);
            }
            if T::lt(&b, &a) {
                return Some(Ordering::Greater);
            }
            if !T::eq(&a, &b) {
                return None;
            }
        }
        Some(self.len.cmp(&other.len))
    }
}

impl<'a, T: ElementTrait> IntoIterator for TypedView<'a, T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'v, T: ElementTrait> IntoIterator for &'v TypedView<'a, T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a `TypedView`, by value
#[derive(Clone)]
pub struct Iter<'a, T: ElementTrait> {
    view: TypedView<'a, T>,
    front: usize,
    back: usize,
}

impl<'a, T: ElementTrait> Iterator for Iter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let item = self.view.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T: ElementTrait> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.view.get(self.back)
    }
}

impl<'a, T: ElementTrait> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: ElementTrait> FusedIterator for Iter<'a, T> {}
