use std::fmt::{self, Display, Formatter};
use std::mem::size_of;
use std::str::FromStr;

/// All element types the dump tool can print
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ElementKind {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl ElementKind {
    pub const NAMES: [&'static str; 10] = ["u8", "i8", "u16", "i16", "u32", "i32", "u64", "i64", "f32", "f64"];

    pub fn name(self) -> &'static str {
        match self {
            ElementKind::U8 => "u8",
            ElementKind::I8 => "i8",
            ElementKind::U16 => "u16",
            ElementKind::I16 => "i16",
            ElementKind::U32 => "u32",
            ElementKind::I32 => "i32",
            ElementKind::U64 => "u64",
            ElementKind::I64 => "i64",
            ElementKind::F32 => "f32",
            ElementKind::F64 => "f64",
        }
    }

    /// size of one element in bytes
    pub fn size(self) -> usize {
        match self {
            ElementKind::U8 => size_of::<u8>(),
            ElementKind::I8 => size_of::<i8>(),
            ElementKind::U16 => size_of::<u16>(),
            ElementKind::I16 => size_of::<i16>(),
            ElementKind::U32 => size_of::<u32>(),
            ElementKind::I32 => size_of::<i32>(),
            ElementKind::U64 => size_of::<u64>(),
            ElementKind::I64 => size_of::<i64>(),
            ElementKind::F32 => size_of::<f32>(),
            ElementKind::F64 => size_of::<f64>(),
        }
    }
}

impl FromStr for ElementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "u8" => ElementKind::U8,
            "i8" => ElementKind::I8,
            "u16" => ElementKind::U16,
            "i16" => ElementKind::I16,
            "u32" => ElementKind::U32,
            "i32" => ElementKind::I32,
            "u64" => ElementKind::U64,
            "i64" => ElementKind::I64,
            "f32" => ElementKind::F32,
            "f64" => ElementKind::F64,
            other => return Err(format!("unknown element type {}", other)),
        })
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
