//! 工具模块：FFI 字符串编组
pub mod cstring_converter;

pub use self::cstring_converter::CStringConverter;
