use std::ffi::CStr;
use std::ptr::NonNull;

use objc2::runtime::AnyObject;

use crate::api::{HostApi, NS_UTF8_STRING_ENCODING};
use crate::dispatch::{Id, class_object, send};
use crate::error::Error;

/// An owned host string, released when dropped.
#[derive(Debug)]
pub struct NativeString {
    api: &'static HostApi,
    id: NonNull<AnyObject>,
}

impl NativeString {
    pub fn new(api: &'static HostApi, text: &str) -> Result<Self, Error> {
        let id = unsafe {
            let raw = send!(api.alloc, class_object(api.string_class));
            send!(
                api.string_init_with_bytes,
                raw,
                text.as_ptr().cast(),
                text.len(),
                NS_UTF8_STRING_ENCODING
            )
        };
        let id = NonNull::new(id).ok_or(Error::Nil("NSString initWithBytes:length:encoding:"))?;
        Ok(Self { api, id })
    }

    pub fn id(&self) -> Id {
        self.id.as_ptr()
    }

    pub fn to_string_lossy(&self) -> String {
        unsafe { to_string_lossy(self.api, self.id()) }
    }
}

impl Drop for NativeString {
    fn drop(&mut self) {
        unsafe { send!(self.api.release, self.id()) };
    }
}

/// Copy the contents of any host string. Nil yields an empty string.
///
/// # Safety
///
/// `string` must be nil or a live `NSString`.
pub(crate) unsafe fn to_string_lossy(api: &HostApi, string: Id) -> String {
    if string.is_null() {
        return String::new();
    }
    let utf8 = unsafe { send!(api.utf8_string, string) };
    if utf8.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(utf8) }.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_utf8() {
        let api = HostApi::load().unwrap();
        let string = NativeString::new(api, "My Window ✓").unwrap();
        assert_eq!(string.to_string_lossy(), "My Window ✓");
    }

    #[test]
    fn test_empty_string() {
        let api = HostApi::load().unwrap();
        let string = NativeString::new(api, "").unwrap();
        assert_eq!(string.to_string_lossy(), "");
    }

    #[test]
    fn test_equal_contents() {
        let api = HostApi::load().unwrap();
        let a = NativeString::new(api, "NSWindowDidMoveNotification").unwrap();
        let b = NativeString::new(api, "NSWindowDidMoveNotification").unwrap();
        let c = NativeString::new(api, "NSWindowDidResizeNotification").unwrap();
        unsafe {
            assert!(send!(api.string_is_equal, a.id(), b.id()).as_bool());
            assert!(!send!(api.string_is_equal, a.id(), c.id()).as_bool());
        }
    }

    #[test]
    fn test_nil_reads_empty() {
        let api = HostApi::load().unwrap();
        assert_eq!(unsafe { to_string_lossy(api, std::ptr::null_mut()) }, "");
    }
}
