//! [`Host`] implementation over the shared application.

use std::ptr::NonNull;

use mold_api::{Point, Rect};
use mold_kernel::Host;
use objc2::runtime::{AnyObject, Bool};

use crate::api::{HostApi, NS_EVENT_MASK_ANY};
use crate::dispatch::{Id, class_object, send};
use crate::window::Window;

#[link(name = "Foundation", kind = "framework")]
unsafe extern "C" {
    static NSDefaultRunLoopMode: Id;
}

/// An event dequeued from the application. Owned by the current autorelease scope.
#[derive(Debug)]
pub struct EventRef(NonNull<AnyObject>);

impl EventRef {
    pub fn id(&self) -> Id {
        self.0.as_ptr()
    }
}

/// An autorelease pool, drained when dropped.
#[derive(Debug)]
pub struct AutoreleaseScope {
    api: &'static HostApi,
    pool: Id,
}

impl AutoreleaseScope {
    pub fn new(api: &'static HostApi) -> Self {
        let pool = unsafe {
            let raw = send!(api.alloc, class_object(api.pool_class));
            send!(api.pool_init, raw)
        };
        if pool.is_null() {
            tracing::warn!("Autorelease pool could not be created");
        }
        Self { api, pool }
    }
}

impl Drop for AutoreleaseScope {
    fn drop(&mut self) {
        if !self.pool.is_null() {
            unsafe { send!(self.api.release, self.pool) };
        }
    }
}

#[derive(Debug)]
pub struct CocoaHost {
    api: &'static HostApi,
    app: NonNull<AnyObject>,
    window: Window,
}

impl CocoaHost {
    pub(crate) fn new(api: &'static HostApi, app: NonNull<AnyObject>, window: Window) -> Self {
        Self { api, app, window }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    fn app(&self) -> Id {
        self.app.as_ptr()
    }
}

impl Host for CocoaHost {
    type RawEvent = EventRef;
    type Scope = AutoreleaseScope;

    fn enter_scope(&mut self) -> AutoreleaseScope {
        AutoreleaseScope::new(self.api)
    }

    fn next_event(&mut self) -> Option<EventRef> {
        let api = self.api;
        let event = unsafe {
            let until = send!(api.distant_future, class_object(api.date_class));
            send!(
                api.next_event,
                self.app(),
                NS_EVENT_MASK_ANY,
                until,
                NSDefaultRunLoopMode,
                Bool::YES
            )
        };
        NonNull::new(event).map(EventRef)
    }

    fn event_type(&self, event: &EventRef) -> u64 {
        unsafe { send!(self.api.event_type, event.id()) as u64 }
    }

    fn location_in_window(&self, event: &EventRef) -> Point {
        unsafe { send!(self.api.location_in_window, event.id()) }
    }

    fn key_code(&self, event: &EventRef) -> u16 {
        unsafe { send!(self.api.key_code, event.id()) }
    }

    fn modifier_flags(&self, event: &EventRef) -> u64 {
        unsafe { send!(self.api.modifier_flags, event.id()) as u64 }
    }

    fn window_frame(&self) -> Rect {
        self.window.frame()
    }

    fn forward(&mut self, event: EventRef) {
        tracing::trace!(event = ?event.id(), "Forwarding event");
        unsafe { send!(self.api.send_event, self.app(), event.id()) };
    }

    fn update_windows(&mut self) {
        unsafe { send!(self.api.update_windows, self.app()) };
    }

    fn shutdown(self) {
        tracing::info!("Shutting down");
        drop(self.window);
    }
}
