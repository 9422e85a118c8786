use crate::element_kind::ElementKind;

/// values printed per line if not specified otherwise
pub const DEFAULT_COLUMNS: usize = 8;

pub const DEFAULT_ELEMENT_TYPE: ElementKind = ElementKind::U8;

/// the largest file the dump tool loads into memory
pub const MAX_DUMP_SIZE: u64 = 2u64.pow(30);
