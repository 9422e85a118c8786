use crate::element_trait::ElementTrait;
use crate::general::byte_view::ByteView;
use crate::typed_view::TypedView;
use std::fmt::{self, Debug, Formatter};

/// Type level position of an element type inside an `ElementSet`.
///
/// Only used to select a view, it is inferred at the call site:
/// `view.view_as::<u32, _>()`.
pub struct Slot<const N: usize>;

/// A statically known set of element types, written as a tuple `(T1, T2, ...)`.
pub trait ElementSet<'a> {
    /// one `TypedView` per element type, all over the same bytes
    type Views: Copy;

    fn views(buf: &'a [u8]) -> Self::Views;
}

/// Picks the view of type `T` out of a tuple of views.
///
/// `I` disambiguates the position, so there is one impl per tuple slot and a
/// type outside the set has no impl at all.
pub trait Selector<'a, T: ElementTrait, I> {
    fn select(&self) -> TypedView<'a, T>;
}

macro_rules! element_set {
    (@slot [$($all:ident),+] $ty:ident $idx:tt) => {
        impl<'a, $($all: ElementTrait),+> Selector<'a, $ty, Slot<$idx>> for ($(TypedView<'a, $all>,)+) {
            #[inline]
            fn select(&self) -> TypedView<'a, $ty> {
                self.$idx
            }
        }
    };
    (@select $all:tt $($ty:ident : $idx:tt),+) => {
        $(element_set!(@slot $all $ty $idx);)+
    };
    ($($ty:ident : $idx:tt),+) => {
        impl<'a, $($ty: ElementTrait),+> ElementSet<'a> for ($($ty,)+) {
            type Views = ($(TypedView<'a, $ty>,)+);

            fn views(buf: &'a [u8]) -> Self::Views {
                ($(TypedView::<$ty>::new(buf),)+)
            }
        }

        element_set!(@select [$($ty),+] $($ty : $idx),+);
    };
}

element_set!(A: 0);
element_set!(A: 0, B: 1);
element_set!(A: 0, B: 1, C: 2);
element_set!(A: 0, B: 1, C: 2, D: 3);
element_set!(A: 0, B: 1, C: 2, D: 3, E: 4);
element_set!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
element_set!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
element_set!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);
element_set!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, J: 8);
element_set!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, J: 8, K: 9);
element_set!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, J: 8, K: 9, L: 10);
element_set!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, J: 8, K: 9, L: 10, M: 11);

/// The same bytes viewed as each type of the set `S`.
///
/// ```
/// use typed_view_lib::MultiTypeView;
///
/// let buf = [1u8, 0, 0, 0];
/// let view = MultiTypeView::<(u8, u32)>::new(&buf);
/// assert_eq!(view.view_as::<u8, _>().length(), 4);
/// assert_eq!(view.view_as::<u32, _>().length(), 1);
/// ```
///
/// Asking for a type that is not in `S` does not compile:
///
/// ```compile_fail
/// use typed_view_lib::MultiTypeView;
///
/// let buf = [0u8; 4];
/// MultiTypeView::<(u8, u32)>::new(&buf).view_as::<u16, _>();
/// ```
pub struct MultiTypeView<'a, S: ElementSet<'a>> {
    buf: &'a [u8],
    views: S::Views,
}

impl<'a, S: ElementSet<'a>> MultiTypeView<'a, S> {
    pub fn new(buf: &'a [u8]) -> MultiTypeView<'a, S> {
        MultiTypeView {
            buf,
            views: S::views(buf),
        }
    }

    /// the view of the bytes as `T`
    pub fn view_as<T: ElementTrait, I>(&self) -> TypedView<'a, T>
        where S::Views: Selector<'a, T, I>
    {
        self.views.select()
    }

    /// size in bytes, shared by every view of the set
    pub fn size(&self) -> usize {
        self.buf.len()
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.buf
    }
}

impl<'a, S: ElementSet<'a>> ByteView<'a> for MultiTypeView<'a, S> {
    fn from_buf(buf: &'a [u8]) -> Self {
        MultiTypeView::new(buf)
    }

    fn buf(&self) -> &'a [u8] {
        self.buf
    }
}

impl<'a, S: ElementSet<'a>> Clone for MultiTypeView<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S: ElementSet<'a>> Copy for MultiTypeView<'a, S> {}

impl<'a, S: ElementSet<'a>> Debug for MultiTypeView<'a, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiTypeView")
            .field("size", &self.buf.len())
            .finish()
    }
}
