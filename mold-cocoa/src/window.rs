//! Window factory.

use std::ptr::{self, NonNull};

use mold_api::{Rect, Size};
use mold_kernel::{Diagnostic, DiagnosticSink, WindowConfig};
use objc2::runtime::{AnyObject, Bool};

use crate::api::{HostApi, NS_BACKING_STORE_BUFFERED, NSUInteger};
use crate::dispatch::{Id, class_object, send};
use crate::error::Error;
use crate::string::NativeString;

/// The single top-level window. Released exactly once, when dropped.
#[derive(Debug)]
pub struct Window {
    api: &'static HostApi,
    id: NonNull<AnyObject>,
}

impl Window {
    /// Create, configure and show a window.
    ///
    /// The host keeps the window alive after it closes; this handle owns the only
    /// release.
    pub fn create(api: &'static HostApi, config: &WindowConfig) -> Result<Self, Error> {
        let content = Rect::new(config.x, config.y, config.width, config.height);
        let id = unsafe {
            let raw = send!(api.alloc, class_object(api.window_class));
            send!(
                api.window_init,
                raw,
                content,
                config.style.bits() as NSUInteger,
                NS_BACKING_STORE_BUFFERED,
                Bool::NO
            )
        };
        let id = NonNull::new(id).ok_or(Error::WindowCreation)?;
        let window = Self { api, id };

        unsafe {
            send!(api.set_released_when_closed, window.id(), Bool::NO);

            let view = send!(api.content_view, window.id());
            send!(api.set_wants_layer, view, Bool::YES);

            send!(api.set_accepts_mouse_moved_events, window.id(), Bool::YES);
        }

        if let Some(title) = &config.title {
            let title = NativeString::new(api, title)?;
            unsafe { send!(api.set_title, window.id(), title.id()) };
        }

        unsafe { send!(api.make_key_and_order_front, window.id(), ptr::null_mut()) };

        tracing::info!(
            width = config.width,
            height = config.height,
            title = config.title.as_deref().unwrap_or(""),
            "Window created"
        );
        Ok(window)
    }

    pub fn id(&self) -> Id {
        self.id.as_ptr()
    }

    pub fn frame(&self) -> Rect {
        unsafe { send!(self.api.frame, self.id()) }
    }

    /// Current frame size. Also reported as a diagnostic line.
    pub fn size(&self, sink: &mut impl DiagnosticSink) -> Size {
        let size = self.frame().size;
        sink.emit(Diagnostic::WindowSize(size));
        size
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        tracing::debug!("Releasing window");
        unsafe { send!(self.api.release, self.id()) };
    }
}
