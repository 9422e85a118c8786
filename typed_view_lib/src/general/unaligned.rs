use crate::element_trait::ElementTrait;
use std::cmp::min;
use std::mem::{size_of, MaybeUninit};
use std::ptr;

/// # Safety
/// `buf[byte_pos..byte_pos + size_of::<T>()]` must be in bounds
#[inline]
pub(crate) unsafe fn read_at<T: ElementTrait>(buf: &[u8], byte_pos: usize) -> T {
    ptr::read_unaligned(buf.as_ptr().add(byte_pos) as *const T)
}

/// # Safety
/// `buf[byte_pos..byte_pos + size_of::<T>()]` must be in bounds
#[inline]
pub(crate) unsafe fn write_at<T: ElementTrait>(buf: &mut [u8], byte_pos: usize, val: T) {
    ptr::write_unaligned(buf.as_mut_ptr().add(byte_pos) as *mut T, val)
}

/// reads the element starting at `byte_pos`, bytes past the end of `buf` read as zero
///
/// `byte_pos` must not exceed `buf.len()`
pub(crate) fn read_padded<T: ElementTrait>(buf: &[u8], byte_pos: usize) -> T {
    let available = min(size_of::<T>(), buf.len() - byte_pos);
    if available == size_of::<T>() {
        return unsafe { read_at(buf, byte_pos) };
    }
    let mut value = MaybeUninit::<T>::zeroed();
    unsafe {
        ptr::copy_nonoverlapping(
            buf.as_ptr().add(byte_pos),
            value.as_mut_ptr() as *mut u8,
            available,
        );
        // every bit pattern is a valid T
        value.assume_init()
    }
}

/// writes the element starting at `byte_pos`, bytes that would land past the end of `buf` are dropped
///
/// `byte_pos` must not exceed `buf.len()`
pub(crate) fn write_truncated<T: ElementTrait>(buf: &mut [u8], byte_pos: usize, val: T) {
    let available = min(size_of::<T>(), buf.len() - byte_pos);
    if available == size_of::<T>() {
        return unsafe { write_at(buf, byte_pos, val) };
    }
    unsafe {
        ptr::copy_nonoverlapping(
            &val as *const T as *const u8,
            buf.as_mut_ptr().add(byte_pos),
            available,
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::general::unaligned::{read_padded, write_truncated};
    use hex_literal::hex;

    #[test]
    fn read_unaligned_position() {
        let buf = hex!("ff 01000000 ff");
        assert_eq!(read_padded::<u32>(&buf, 1), u32::from_ne_bytes([1, 0, 0, 0]));
    }

    #[test]
    fn read_partial_is_zero_filled() {
        let buf = hex!("aabbcc");
        assert_eq!(read_padded::<u32>(&buf, 0), u32::from_ne_bytes([0xaa, 0xbb, 0xcc, 0]));
        assert_eq!(read_padded::<u16>(&buf, 2), u16::from_ne_bytes([0xcc, 0]));
    }

    #[test]
    fn write_partial_is_truncated() {
        let mut buf = [0u8; 3];
        write_truncated::<u32>(&mut buf, 1, u32::from_ne_bytes([1, 2, 3, 4]));
        assert_eq!(buf, [0, 1, 2]);
    }
}
