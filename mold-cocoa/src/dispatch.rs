//! Name-based message dispatch.
//!
//! A [`Message`] pairs a registered selector with an entry point already cast to
//! the signature the caller declared. Three flavours exist:
//!
//! - [`Message::instance`] caches the implementation a class uses for an instance
//!   method. Calls jump straight to it with no runtime lookup.
//! - [`Message::class`] does the same for a class (meta-class) method.
//! - [`Message::dynamic`] only checks that the class responds to the selector and
//!   sends through `objc_msgSend`, so class clusters such as `NSString` resolve on
//!   the receiver's real class.
//!
//! The runtime cannot check the declared signature. Every entry point is called as
//! `fn(receiver, selector, args...)` and a wrong signature is undefined behaviour,
//! which is why all constructors are `unsafe`.

use std::mem;

use objc2::runtime::{AnyClass, AnyObject, Sel};

use crate::error::DispatchError;

/// Untyped object reference as passed across dispatched calls.
pub type Id = *mut AnyObject;

#[link(name = "objc", kind = "dylib")]
unsafe extern "C" {
    fn objc_msgSend();
}

/// A selector bound to a typed entry point.
#[derive(Debug, Clone, Copy)]
pub struct Message<F> {
    sel: Sel,
    imp: F,
}

impl<F: Copy> Message<F> {
    /// Resolve and cache the instance method `selector` of `class`.
    ///
    /// # Safety
    ///
    /// `F` must be an `unsafe extern "C" fn(Id, Sel, ...)` pointer type matching the
    /// method's real signature, and it may only be called on instances whose class
    /// does not override `selector`.
    pub unsafe fn instance(class: &str, selector: &str) -> Result<Self, DispatchError> {
        let cls = lookup_class(class)?;
        let sel = Sel::register(selector);
        let method = cls
            .instance_method(sel)
            .ok_or_else(|| unknown_selector(class, selector))?;
        tracing::trace!(class, selector, "Cached instance method");
        Ok(Self {
            sel,
            imp: unsafe { cast(method.implementation()) },
        })
    }

    /// Resolve and cache the class method `selector` of `class`.
    ///
    /// # Safety
    ///
    /// As for [`Message::instance`]; the receiver must be the class object itself
    /// (see [`class_object`]).
    pub unsafe fn class(class: &str, selector: &str) -> Result<Self, DispatchError> {
        let cls = lookup_class(class)?;
        let sel = Sel::register(selector);
        let method = cls
            .class_method(sel)
            .ok_or_else(|| unknown_selector(class, selector))?;
        tracing::trace!(class, selector, "Cached class method");
        Ok(Self {
            sel,
            imp: unsafe { cast(method.implementation()) },
        })
    }

    /// Check that instances of `class` respond to `selector` and send it through
    /// `objc_msgSend` on every call.
    ///
    /// # Safety
    ///
    /// As for [`Message::instance`]. Additionally `F` must not return a struct the
    /// platform ABI returns through memory (e.g. `CGRect` on x86_64); use
    /// [`Message::instance`] for those.
    pub unsafe fn dynamic(class: &str, selector: &str) -> Result<Self, DispatchError> {
        let cls = lookup_class(class)?;
        let sel = Sel::register(selector);
        if cls.instance_method(sel).is_none() {
            return Err(unknown_selector(class, selector));
        }
        let send: unsafe extern "C" fn() = objc_msgSend;
        Ok(Self {
            sel,
            imp: unsafe { cast(send) },
        })
    }

    #[inline]
    pub fn sel(&self) -> Sel {
        self.sel
    }

    #[inline]
    pub fn imp(&self) -> F {
        self.imp
    }
}

/// Invoke a [`Message`]: `send!(message, receiver, args...)`.
///
/// Expands to a raw call through the cached entry point and must be used inside an
/// `unsafe` block.
macro_rules! send {
    ($message:expr, $receiver:expr $(, $arg:expr)* $(,)?) => {{
        let message = $message;
        (message.imp())($receiver, message.sel() $(, $arg)*)
    }};
}
pub(crate) use send;

pub fn lookup_class(name: &str) -> Result<&'static AnyClass, DispatchError> {
    AnyClass::get(name).ok_or_else(|| DispatchError::UnknownClass(name.to_owned()))
}

/// The class itself as a message receiver.
#[inline]
pub fn class_object(cls: &'static AnyClass) -> Id {
    cls as *const AnyClass as *mut AnyObject
}

fn unknown_selector(class: &str, selector: &str) -> DispatchError {
    DispatchError::UnknownSelector {
        class: class.to_owned(),
        selector: selector.to_owned(),
    }
}

/// Reinterpret one function pointer type as another.
unsafe fn cast<F: Copy, G: Copy>(entry: G) -> F {
    assert_eq!(
        mem::size_of::<F>(),
        mem::size_of::<G>(),
        "entry points can only be cast to function pointer types"
    );
    unsafe { mem::transmute_copy(&entry) }
}

#[cfg(test)]
mod tests {
    use std::ffi::{CStr, c_char};
    use std::ptr;

    use super::*;

    type Getter = unsafe extern "C" fn(Id, Sel) -> Id;
    type Action = unsafe extern "C" fn(Id, Sel);
    type ClassName = unsafe extern "C" fn(Id, Sel) -> Id;
    type Utf8 = unsafe extern "C" fn(Id, Sel) -> *const c_char;

    #[test]
    fn test_unknown_class() {
        let err = unsafe { Message::<Getter>::instance("MoldNoSuchClass", "init") }.unwrap_err();
        assert_eq!(err, DispatchError::UnknownClass("MoldNoSuchClass".into()));
    }

    #[test]
    fn test_unknown_selector() {
        let err = unsafe { Message::<Getter>::class("NSObject", "moldNoSuchSelector") }.unwrap_err();
        assert_eq!(
            err,
            DispatchError::UnknownSelector {
                class: "NSObject".into(),
                selector: "moldNoSuchSelector".into(),
            }
        );

        let err = unsafe { Message::<Getter>::dynamic("NSObject", "moldNoSuchSelector") }.unwrap_err();
        assert!(matches!(err, DispatchError::UnknownSelector { .. }));
    }

    #[test]
    fn test_instance_method_is_not_a_class_method() {
        // `init` is an instance method; asking for it as a class method must fail.
        assert!(unsafe { Message::<Getter>::class("NSObject", "init") }.is_err());
    }

    #[test]
    fn test_alloc_init_release_round() {
        let cls = lookup_class("NSObject").unwrap();
        let (alloc, init, release, class_name, utf8) = unsafe {
            (
                Message::<Getter>::class("NSObject", "alloc").unwrap(),
                Message::<Getter>::instance("NSObject", "init").unwrap(),
                Message::<Action>::dynamic("NSObject", "release").unwrap(),
                Message::<ClassName>::dynamic("NSObject", "className").unwrap(),
                Message::<Utf8>::dynamic("NSString", "UTF8String").unwrap(),
            )
        };
        assert_eq!(alloc.sel().name(), "alloc");

        unsafe {
            let object = send!(init, send!(alloc, class_object(cls)));
            assert!(!object.is_null());

            let name = send!(class_name, object);
            let name = CStr::from_ptr(send!(utf8, name));
            assert_eq!(name.to_str().unwrap(), "NSObject");

            send!(release, object);
        }
    }

    #[test]
    fn test_messaging_nil_is_harmless() {
        let release = unsafe { Message::<Action>::dynamic("NSObject", "release") }.unwrap();
        unsafe { send!(release, ptr::null_mut()) };
    }
}
