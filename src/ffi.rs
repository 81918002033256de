//! C ABI 导出符号
//!
//! 对外只暴露两个符号：
//! - `char* wappalyzer(const char* a, const char* b)`
//! - `void wappalyzer_free(char* p)`
//!
//! `wappalyzer` 的返回值由 `malloc` 分配，所有权转移给调用方，用平台 `free`
//! （或 `wappalyzer_free`）释放。返回 `NULL` 表示未产生检测结果，调用方
//! 解引用前必须判空，且不能对 `NULL` 调用 `free`。

use std::any::Any;
use std::ffi::c_char;
use std::panic::{self, AssertUnwindSafe};
use std::ptr;

use tracing::error;

use crate::detector::{DetectInput, global_detector};
use crate::error::{RswResult, RswappalyzerError};
use crate::utils::CStringConverter;

/// 导出检测函数
///
/// 两个输入当前不参与分类，结果固定为 `"cloudflare"`。空指针输入视为缺省。
///
/// # Safety
/// `a`、`b` 为空，或指向调用期间有效的 NUL 结尾字符串。函数返回后不再持有它们。
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wappalyzer(a: *const c_char, b: *const c_char) -> *mut c_char {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let input = unsafe { DetectInput::from_raw(a, b) };
        global_detector().detect_to_c(&input)
    }));

    match flatten_panic(outcome) {
        Ok(buf) => buf.as_ptr(),
        Err(e) => {
            error!("wappalyzer returned NULL: {}", e);
            ptr::null_mut()
        }
    }
}

/// 释放 `wappalyzer` 返回的字符串，空指针为 no-op
///
/// # Safety
/// `p` 为空，或为 `wappalyzer` 返回且尚未释放的指针。
#[unsafe(no_mangle)]
pub unsafe extern "C" fn wappalyzer_free(p: *mut c_char) {
    unsafe { CStringConverter::free(p) }
}

/// 合并 panic 与业务错误
fn flatten_panic<T>(outcome: Result<RswResult<T>, Box<dyn Any + Send>>) -> RswResult<T> {
    match outcome {
        Ok(result) => result,
        Err(payload) => Err(RswappalyzerError::Panic(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_payloads() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");

        let payload: Box<dyn Any + Send> = Box::new(String::from("owned boom"));
        assert_eq!(panic_message(payload.as_ref()), "owned boom");

        let payload: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic payload");
    }

    #[test]
    fn test_flatten_panic_maps_to_error() {
        let outcome: Result<RswResult<u8>, Box<dyn Any + Send>> =
            panic::catch_unwind(|| -> RswResult<u8> { panic!("inside ffi") });
        let err = flatten_panic(outcome).unwrap_err();
        assert!(matches!(err, RswappalyzerError::Panic(ref msg) if msg == "inside ffi"));

        let outcome: Result<RswResult<u8>, Box<dyn Any + Send>> = Ok(Ok(7));
        assert_eq!(flatten_panic(outcome).unwrap(), 7);
    }

    #[test]
    fn test_wappalyzer_free_null() {
        unsafe { wappalyzer_free(ptr::null_mut()) };
    }
}
