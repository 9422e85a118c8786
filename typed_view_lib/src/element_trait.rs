use std::mem::size_of;

/// Per element type policy used by the views.
///
/// # Safety
/// Implementing this trait asserts that every bit pattern of `size_of::<Self>()`
/// bytes is a valid value of `Self`. The views read elements straight out of
/// foreign byte buffers, so types with invalid bit patterns (`bool`, `char`,
/// enums, references) must never implement it.
pub unsafe trait ElementTrait: Copy + 'static {
    fn eq(a: &Self, b: &Self) -> bool;

    fn lt(a: &Self, b: &Self) -> bool;

    /// number of elements needed to cover `size_in_bytes`, rounded up
    fn element_count(size_in_bytes: usize) -> usize {
        let type_size = size_of::<Self>();
        if type_size > 1 {
            let rem = size_in_bytes % type_size;
            if rem > 0 {
                return size_in_bytes / type_size + 1;
            }
        }
        size_in_bytes / type_size
    }
}

macro_rules! impl_element_trait {
    ($($ty:ty),+) => {
        $(
            unsafe impl ElementTrait for $ty {
                #[inline]
                fn eq(a: &Self, b: &Self) -> bool {
                    a == b
                }

                #[inline]
                fn lt(a: &Self, b: &Self) -> bool {
                    a < b
                }
            }
        )+
    };
}

impl_element_trait!(u8, u16, u32, u64, u128, usize);
impl_element_trait!(i8, i16, i32, i64, i128, isize);
impl_element_trait!(f32, f64);
