//! C字符串转换工具
//! 负责 FFI 边界两侧的字符串编组：借用调用方的 NUL 结尾输入，按 C 分配器复制输出

use std::ffi::{CStr, c_char};
use std::ptr::{self, NonNull};

use tracing::trace;

use crate::error::{RswResult, RswappalyzerError};

/// C字符串转换工具
pub struct CStringConverter;

impl CStringConverter {
    /// 借用调用方传入的 C 字符串，空指针视为参数缺省
    ///
    /// # Safety
    /// `ptr` 为空，或指向在 `'a` 内有效且不被修改的 NUL 结尾字节序列。
    pub unsafe fn borrow<'a>(ptr: *const c_char) -> Option<&'a CStr> {
        if ptr.is_null() {
            return None;
        }
        Some(unsafe { CStr::from_ptr(ptr) })
    }

    /// 将字符串复制到 `libc::malloc` 分配的缓冲区，所有权转移给调用方（用 `free` 释放）
    ///
    /// 不经过 Rust 全局分配器：`CString::into_raw` 返回的内存不能交给 C 的 `free`。
    pub fn to_malloc(s: &str) -> RswResult<NonNull<c_char>> {
        let bytes = s.as_bytes();
        if let Some(pos) = bytes.iter().position(|&b| b == 0) {
            return Err(RswappalyzerError::InteriorNul(pos));
        }

        let size = bytes.len() + 1;
        let raw = unsafe { libc::malloc(size) }.cast::<c_char>();
        let buf = NonNull::new(raw).ok_or(RswappalyzerError::AllocationFailed(size))?;

        // 缓冲区为新分配内存，与 bytes 不重叠
        unsafe {
            ptr::copy_nonoverlapping(bytes.as_ptr().cast::<c_char>(), buf.as_ptr(), bytes.len());
            buf.as_ptr().add(bytes.len()).write(0);
        }

        trace!("Copied {} bytes into malloc buffer {:p}", size, buf);
        Ok(buf)
    }

    /// 释放 `to_malloc` 返回的缓冲区，空指针直接忽略
    ///
    /// # Safety
    /// `ptr` 为空，或为本工具（或同一 C 分配器）分配且尚未释放的指针。
    pub unsafe fn free(ptr: *mut c_char) {
        if ptr.is_null() {
            return;
        }
        unsafe { libc::free(ptr.cast()) };
    }
}
