use crate::element_kind::ElementKind;
use log::{debug, info, warn};
use std::fmt::Display;
use std::io::{self, Write};
use std::mem::size_of;
use typed_view_lib::{ElementSet, ElementTrait, Selector, SequentialReader};

/// every type the dump tool can read, in the order of `ElementKind`
pub type DumpTypes = (u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

pub type DumpReader<'a> = SequentialReader<'a, DumpTypes>;

/// Settings of a single dump
pub struct DumpOptions {
    pub kind: ElementKind,
    /// byte offset the first value is read from
    pub offset: usize,
    /// read until the buffer is exhausted if None
    pub count: Option<usize>,
    /// values per line, at least 1
    pub columns: usize,
}

/// Prints the values of `buf` to `out`, returns the number of values printed.
///
/// Each line starts with the byte offset of its first value in hex.
pub fn dump<W: Write>(out: &mut W, buf: &[u8], options: &DumpOptions) -> io::Result<usize> {
    let mut reader = DumpReader::new(buf);
    reader.set_offset(options.offset);
    if options.offset % options.kind.size() != 0 {
        warn!(
            "offset {} is not a multiple of {} bytes, values are taken from the {} containing the cursor",
            options.offset,
            options.kind.size(),
            options.kind
        );
    }
    info!("dumping {} bytes as {} from offset {}", buf.len(), options.kind, options.offset);
    let printed = match options.kind {
        ElementKind::U8 => dump_as::<u8, _, _>(out, &mut reader, options)?,
        ElementKind::I8 => dump_as::<i8, _, _>(out, &mut reader, options)?,
        ElementKind::U16 => dump_as::<u16, _, _>(out, &mut reader, options)?,
        ElementKind::I16 => dump_as::<i16, _, _>(out, &mut reader, options)?,
        ElementKind::U32 => dump_as::<u32, _, _>(out, &mut reader, options)?,
        ElementKind::I32 => dump_as::<i32, _, _>(out, &mut reader, options)?,
        ElementKind::U64 => dump_as::<u64, _, _>(out, &mut reader, options)?,
        ElementKind::I64 => dump_as::<i64, _, _>(out, &mut reader, options)?,
        ElementKind::F32 => dump_as::<f32, _, _>(out, &mut reader, options)?,
        ElementKind::F64 => dump_as::<f64, _, _>(out, &mut reader, options)?,
    };
    let leftover = reader.remaining();
    if options.count.is_none() && leftover > 0 {
        warn!("{} trailing bytes do not fill a {}", leftover, options.kind);
    }
    Ok(printed)
}

fn dump_as<'a, T, I, W>(out: &mut W, reader: &mut DumpReader<'a>, options: &DumpOptions) -> io::Result<usize>
    where T: ElementTrait + Display,
          <DumpTypes as ElementSet<'a>>::Views: Selector<'a, T, I>,
          W: Write
{
    debug_assert_eq!(size_of::<T>(), options.kind.size());
    let mut printed = 0;
    let mut line_start = reader.offset();
    let mut line: Vec<String> = Vec::with_capacity(options.columns);
    while options.count.map_or(true, |count| printed < count) {
        let offset = reader.offset();
        match reader.read_as::<T, I>() {
            Ok(value) => {
                if line.is_empty() {
                    line_start = offset;
                }
                line.push(value.to_string());
                printed += 1;
                if line.len() >= options.columns {
                    write_line(out, line_start, &line)?;
                    line.clear();
                }
            }
            Err(e) => {
                debug!("stopped after {} values: {}", printed, e);
                break;
            }
        }
    }
    if !line.is_empty() {
        write_line(out, line_start, &line)?;
    }
    Ok(printed)
}

fn write_line<W: Write>(out: &mut W, offset: usize, values: &[String]) -> io::Result<()> {
    writeln!(out, "{:08x}: {}", offset, values.join(" "))
}
