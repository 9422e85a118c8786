use crate::element_trait::ElementTrait;
use crate::error::{ErrorType, Result};
use crate::general::byte_view::ByteView;
use crate::multi_type_view::{ElementSet, MultiTypeView, Selector};
use crate::typed_view::TypedView;
use std::any::type_name;
use std::fmt::{self, Debug, Formatter};
use std::mem::size_of;

/// Reads typed values and sub views out of a buffer in order.
///
/// # Remarks
/// - The cursor is a byte offset shared by all types of the set `S`.
/// - Only `read_as` and the sub view start position are checked, a bad
///   `set_offset` surfaces on the next read.
/// - A failed call never moves the cursor.
pub struct SequentialReader<'a, S: ElementSet<'a>> {
    view: MultiTypeView<'a, S>,
    byte_offset: usize,
}

impl<'a, S: ElementSet<'a>> SequentialReader<'a, S> {
    pub fn new(buf: &'a [u8]) -> SequentialReader<'a, S> {
        SequentialReader::from_view(MultiTypeView::from_buf(buf))
    }

    /// Reader over the bytes of any other view, e.g. a sub view cut out by a
    /// previous reader.
    pub fn from_byte_view<V: ByteView<'a>>(view: &V) -> SequentialReader<'a, S> {
        SequentialReader::new(view.buf())
    }

    pub fn from_view(view: MultiTypeView<'a, S>) -> SequentialReader<'a, S> {
        SequentialReader {
            view,
            byte_offset: 0,
        }
    }

    /// Reads one `T` at the cursor and moves the cursor past it.
    ///
    /// The value returned is element `offset / size_of::<T>()` of the `T` view,
    /// so a cursor that is not a multiple of the type size reads the element
    /// it falls into, not the bytes starting at the cursor.
    ///
    /// Only types of the set `S` can be read:
    ///
    /// ```compile_fail
    /// use typed_view_lib::SequentialReader;
    ///
    /// let buf = [0u8; 8];
    /// let _ = SequentialReader::<(u8,)>::new(&buf).read_as::<u64, _>();
    /// ```
    pub fn read_as<T: ElementTrait, I>(&mut self) -> Result<T>
        where S::Views: Selector<'a, T, I>
    {
        let offset = self.byte_offset;
        let view = self.view.view_as::<T, I>();
        let end = match offset.checked_add(size_of::<T>()) {
            Some(end) if end <= view.size() => end,
            end => {
                let e = ErrorType::offset_out_of_range(end, view.size());
                log_range_error!(e);
                return Err(e);
            }
        };
        self.byte_offset = end;
        log_read!(type_name::<T>(), offset, end);
        // the element ends at or before `end`, which is within the view
        Ok(unsafe { view.get_unchecked(offset / size_of::<T>()) })
    }

    pub fn view(&self) -> &MultiTypeView<'a, S> {
        &self.view
    }

    /// ```compile_fail
    /// use typed_view_lib::SequentialReader;
    ///
    /// let buf = [0u8; 8];
    /// SequentialReader::<(u8, u16)>::new(&buf).view_as::<f32, _>();
    /// ```
    pub fn view_as<T: ElementTrait, I>(&self) -> TypedView<'a, T>
        where S::Views: Selector<'a, T, I>
    {
        self.view.view_as::<T, I>()
    }

    /// current cursor in bytes
    pub fn offset(&self) -> usize {
        self.byte_offset
    }

    pub fn set_offset(&mut self, offset: usize) {
        self.byte_offset = offset;
    }

    /// bytes left between the cursor and the end of the buffer
    pub fn remaining(&self) -> usize {
        self.view.size().saturating_sub(self.byte_offset)
    }

    pub fn size_by_type<T: ElementTrait, I>(&self) -> usize
        where S::Views: Selector<'a, T, I>
    {
        self.view_as::<T, I>().size()
    }

    /// Sub view of `n` elements at the cursor, the cursor moves past them.
    pub fn make_sub_view<T: ElementTrait, I>(
        &mut self,
        n: usize,
    ) -> Result<TypedView<'a, T>>
        where S::Views: Selector<'a, T, I>
    {
        self.make_sub_view_at::<T, I>(self.byte_offset, n, true)
    }

    /// Sub view of `n` elements at byte position `pos`.
    ///
    /// With `advance` the cursor moves by `n * size_of::<T>()` no matter where
    /// `pos` is and how much of the request was cut off at the end of the buffer.
    pub fn make_sub_view_at<T: ElementTrait, I>(
        &mut self,
        pos: usize,
        n: usize,
        advance: bool,
    ) -> Result<TypedView<'a, T>>
        where S::Views: Selector<'a, T, I>
    {
        let sub = self.view_as::<T, I>().sub_view(pos, n).map_err(|e| {
            log_range_error!(e);
            e
        })?;
        if advance {
            self.byte_offset = self.byte_offset.saturating_add(n.saturating_mul(size_of::<T>()));
        }
        Ok(sub)
    }

    /// Sub view of `n` elements, sliced at the cursor after it was moved.
    ///
    /// With `advance` the cursor first moves by `n * size_of::<T>()` and the
    /// slice starts there, without it the slice starts at the current cursor.
    pub fn make_sub_view_by_size<T: ElementTrait, I>(
        &mut self,
        n: usize,
        advance: bool,
    ) -> Result<TypedView<'a, T>>
        where S::Views: Selector<'a, T, I>
    {
        let offset = if advance {
            self.byte_offset.saturating_add(n.saturating_mul(size_of::<T>()))
        } else {
            self.byte_offset
        };
        let sub = self.view_as::<T, I>().sub_view(offset, n).map_err(|e| {
            log_range_error!(e);
            e
        })?;
        self.byte_offset = offset;
        Ok(sub)
    }
}

impl<'a, S: ElementSet<'a>> Debug for SequentialReader<'a, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequentialReader")
            .field("size", &self.view.size())
            .field("byte_offset", &self.byte_offset)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorType;
    use crate::multi_type_view::MultiTypeView;
    use crate::sequential_reader::SequentialReader;
    use crate::typed_view::TypedView;
    use byteorder::{NativeEndian, WriteBytesExt};
    use hex_literal::hex;
    use test_case::test_case;

    type Reader<'a> = SequentialReader<'a, (u8, u16, u32, u64, f64)>;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn read_u32_twice_then_error() {
        init_logger();
        let buf = hex!("01000000 02000000");
        let mut reader = Reader::new(&buf);
        assert_eq!(reader.read_as::<u32, _>(), Ok(u32::from_ne_bytes([1, 0, 0, 0])));
        assert_eq!(reader.read_as::<u32, _>(), Ok(u32::from_ne_bytes([2, 0, 0, 0])));
        assert_eq!(reader.offset(), 8);
        match reader.read_as::<u32, _>() {
            Err(ErrorType::RangeError(_)) => {}
            other => panic!("expected range error, got {:?}", other),
        }
        assert_eq!(reader.offset(), 8);
    }

    #[test_case(&[]; "empty")]
    #[test_case(&[42]; "one")]
    #[test_case(&[1, 2, 3, u64::MAX, 0]; "several")]
    fn sequential_matches_iteration(values: &[u64]) {
        let mut buf = Vec::new();
        for v in values {
            buf.write_u64::<NativeEndian>(*v).unwrap();
        }
        let mut reader = Reader::new(&buf);
        let expected: Vec<u64> = TypedView::<u64>::new(&buf).iter().collect();
        let mut read = Vec::new();
        for _ in 0..values.len() {
            read.push(reader.read_as::<u64, _>().unwrap());
        }
        assert_eq!(read, expected);
        let before = reader.offset();
        assert!(reader.read_as::<u64, _>().is_err());
        assert_eq!(reader.offset(), before);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn mixed_types() {
        let mut buf = Vec::new();
        buf.write_u16::<NativeEndian>(7).unwrap();
        buf.write_u16::<NativeEndian>(9).unwrap();
        buf.write_u32::<NativeEndian>(11).unwrap();
        buf.write_f64::<NativeEndian>(1.5).unwrap();
        let mut reader = Reader::new(&buf);
        assert_eq!(reader.read_as::<u16, _>(), Ok(7));
        assert_eq!(reader.read_as::<u16, _>(), Ok(9));
        assert_eq!(reader.read_as::<u32, _>(), Ok(11));
        assert_eq!(reader.read_as::<f64, _>(), Ok(1.5));
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn misaligned_cursor_reads_containing_element() {
        let buf = hex!("aa 000000 01020304");
        let mut reader = Reader::new(&buf);
        assert_eq!(reader.read_as::<u8, _>(), Ok(0xaa));
        // cursor 1 falls into element 0 of the u32 view
        assert_eq!(reader.read_as::<u32, _>(), Ok(u32::from_ne_bytes([0xaa, 0, 0, 0])));
        assert_eq!(reader.offset(), 5);
    }

    #[test]
    fn limit_is_whole_buffer_size() {
        let buf = [0u8; 6];
        let mut reader = Reader::new(&buf);
        assert_eq!(reader.size_by_type::<u64, _>(), 6);
        assert_eq!(reader.size_by_type::<u8, _>(), 6);
        assert!(reader.read_as::<u64, _>().is_err());
        assert!(reader.read_as::<u32, _>().is_ok());
        assert!(reader.read_as::<u16, _>().is_ok());
        assert!(reader.read_as::<u8, _>().is_err());
    }

    #[test]
    fn set_offset_equals_prior_reads() {
        let buf: Vec<u8> = (0u8..16).collect();
        let mut walked = Reader::new(&buf);
        walked.read_as::<u32, _>().unwrap();
        walked.read_as::<u32, _>().unwrap();
        let mut jumped = Reader::new(&buf);
        jumped.set_offset(8);
        assert_eq!(walked.read_as::<u64, _>(), jumped.read_as::<u64, _>());
        assert_eq!(walked.offset(), jumped.offset());
    }

    #[test]
    fn set_offset_out_of_range_fails_on_read() {
        let buf = [0u8; 4];
        let mut reader = Reader::new(&buf);
        reader.set_offset(usize::MAX);
        assert_eq!(reader.offset(), usize::MAX);
        assert!(reader.read_as::<u8, _>().is_err());
        assert_eq!(reader.offset(), usize::MAX);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn make_sub_view_at_cursor() {
        let buf = hex!("0100 0200 0300 0400");
        let mut reader = Reader::new(&buf);
        let first = reader.make_sub_view::<u16, _>(3).unwrap();
        assert_eq!(first.length(), 3);
        assert_eq!(first.as_bytes(), &buf[..6]);
        assert_eq!(reader.offset(), 6);
        let rest = reader.make_sub_view::<u16, _>(3).unwrap();
        assert_eq!(rest.size(), 2);
        // cursor moves by the requested size, not the truncated one
        assert_eq!(reader.offset(), 12);
        assert!(reader.make_sub_view::<u16, _>(1).is_err());
        assert_eq!(reader.offset(), 12);
    }

    #[test]
    fn make_sub_view_at_position() {
        let buf: Vec<u8> = (0u8..8).collect();
        let mut reader = Reader::new(&buf);
        reader.set_offset(2);
        let sub = reader.make_sub_view_at::<u8, _>(5, 2, true).unwrap();
        assert_eq!(sub.to_vec(), vec![5, 6]);
        assert_eq!(reader.offset(), 4);
        let sub = reader.make_sub_view_at::<u8, _>(0, 3, false).unwrap();
        assert_eq!(sub.to_vec(), vec![0, 1, 2]);
        assert_eq!(reader.offset(), 4);
        assert!(reader.make_sub_view_at::<u8, _>(9, 1, true).is_err());
        assert_eq!(reader.offset(), 4);
    }

    #[test]
    fn make_sub_view_by_size() {
        let buf: Vec<u8> = (0u8..8).collect();
        let mut reader = Reader::new(&buf);
        let sub = reader.make_sub_view_by_size::<u8, _>(2, false).unwrap();
        assert_eq!(sub.to_vec(), vec![0, 1]);
        assert_eq!(reader.offset(), 0);
        // slice starts at the moved cursor
        let sub = reader.make_sub_view_by_size::<u8, _>(2, true).unwrap();
        assert_eq!(sub.to_vec(), vec![2, 3]);
        assert_eq!(reader.offset(), 2);
        let sub = reader.make_sub_view_by_size::<u16, _>(3, true).unwrap();
        assert!(sub.is_empty());
        assert_eq!(reader.offset(), 8);
        assert!(reader.make_sub_view_by_size::<u8, _>(1, true).is_err());
        assert_eq!(reader.offset(), 8);
    }

    #[test]
    fn view_access_bypasses_cursor() {
        let buf = hex!("01000000 02000000");
        let view = MultiTypeView::<(u8, u16, u32, u64, f64)>::new(&buf);
        let mut reader = SequentialReader::from_view(view);
        reader.read_as::<u32, _>().unwrap();
        assert_eq!(reader.view().size(), 8);
        assert_eq!(reader.view_as::<u32, _>().get(0), Some(u32::from_ne_bytes([1, 0, 0, 0])));
        assert_eq!(reader.view_as::<u8, _>().length(), 8);
        assert_eq!(reader.offset(), 4);
    }

    #[test]
    fn nested_reader_over_sub_view() {
        let buf = hex!("02 0a00 0b00 ff");
        let mut reader = Reader::new(&buf);
        let count = reader.read_as::<u8, _>().unwrap() as usize;
        let body = reader.make_sub_view::<u16, _>(count).unwrap();
        assert_eq!(reader.offset(), 5);

        let mut inner = SequentialReader::<(u16,)>::from_byte_view(&body);
        assert_eq!(inner.read_as::<u16, _>(), Ok(u16::from_ne_bytes([0x0a, 0])));
        assert_eq!(inner.read_as::<u16, _>(), Ok(u16::from_ne_bytes([0x0b, 0])));
        assert!(inner.read_as::<u16, _>().is_err());
        assert_eq!(reader.read_as::<u8, _>(), Ok(0xff));
    }

    #[test]
    fn reader_over_multi_type_view() {
        let buf = hex!("01000000");
        let view = MultiTypeView::<(u8, u32)>::new(&buf);
        let mut reader = SequentialReader::<(u32,)>::from_byte_view(&view);
        assert_eq!(reader.read_as::<u32, _>(), Ok(u32::from_ne_bytes([1, 0, 0, 0])));
    }

    #[test]
    fn debug() {
        let buf = [0u8; 3];
        let reader = Reader::new(&buf);
        assert_eq!(format!("{:?}", reader), "SequentialReader { size: 3, byte_offset: 0 }");
    }
}
