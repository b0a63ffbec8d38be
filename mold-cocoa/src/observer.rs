//! Window notification observer.
//!
//! One global block is registered with the default notification center for the
//! single window. Its trampoline maps the notification name onto the shared
//! [`LifecycleState`].

use std::ptr;
use std::sync::Arc;

use mold_api::Notification;
use mold_kernel::{Diagnostic, DiagnosticSink, LifecycleState, StdoutSink};

use crate::api::HostApi;
use crate::block::{BlockDescriptor, GlobalBlock, object_callback};
use crate::dispatch::{Id, class_object, send};
use crate::error::Error;
use crate::string::to_string_lossy;
use crate::window::Window;

#[link(name = "AppKit", kind = "framework")]
unsafe extern "C" {
    static NSWindowWillCloseNotification: Id;
    static NSWindowDidResizeNotification: Id;
    static NSWindowDidMoveNotification: Id;
    static NSWindowDidMiniaturizeNotification: Id;
    static NSWindowDidDeminiaturizeNotification: Id;
}

/// State captured by the observer block.
pub(crate) struct NotificationContext {
    api: &'static HostApi,
    lifecycle: Arc<LifecycleState>,
    names: [(Id, Notification); 5],
}

static DESCRIPTOR: BlockDescriptor = object_callback::<NotificationContext>();

impl NotificationContext {
    pub(crate) fn new(api: &'static HostApi, lifecycle: Arc<LifecycleState>) -> Self {
        let names = unsafe {
            [
                (NSWindowWillCloseNotification, Notification::WillClose),
                (NSWindowDidResizeNotification, Notification::DidResize),
                (NSWindowDidMoveNotification, Notification::DidMove),
                (NSWindowDidMiniaturizeNotification, Notification::DidMiniaturize),
                (NSWindowDidDeminiaturizeNotification, Notification::DidDeminiaturize),
            ]
        };
        Self {
            api,
            lifecycle,
            names,
        }
    }

    /// Match a notification name against the known constants. The host usually
    /// posts the constant itself, so pointer identity is tried before content.
    unsafe fn lookup(&self, name: Id) -> Option<Notification> {
        if let Some(&(_, notification)) = self.names.iter().find(|(known, _)| *known == name) {
            return Some(notification);
        }
        self.names
            .iter()
            .find(|(known, _)| unsafe { send!(self.api.string_is_equal, name, *known) }.as_bool())
            .map(|&(_, notification)| notification)
    }

    /// # Safety
    ///
    /// `notification` must be nil or a live `NSNotification`.
    pub(crate) unsafe fn deliver(&self, notification: Id, sink: &mut impl DiagnosticSink) {
        if notification.is_null() {
            return;
        }
        let name = unsafe { send!(self.api.notification_name, notification) };
        if name.is_null() {
            return;
        }
        match unsafe { self.lookup(name) } {
            Some(notification) => {
                tracing::trace!(?notification, "Window notification");
                self.lifecycle.apply(notification);
            }
            None => {
                let name = unsafe { to_string_lossy(self.api, name) };
                sink.emit(Diagnostic::UnknownNotification(&name));
            }
        }
    }
}

unsafe extern "C" fn on_notification(block: *const GlobalBlock<NotificationContext>, notification: Id) {
    let context = unsafe { (*block).context() };
    unsafe { context.deliver(notification, &mut StdoutSink) };
}

/// Register the lifecycle observer for `window`. Stays registered for the life of
/// the process.
pub(crate) fn observe(
    api: &'static HostApi,
    window: &Window,
    lifecycle: Arc<LifecycleState>,
) -> Result<(), Error> {
    let block = GlobalBlock::leak(
        on_notification,
        &DESCRIPTOR,
        NotificationContext::new(api, lifecycle),
    );
    unsafe {
        let center = send!(api.default_center, class_object(api.center_class));
        if center.is_null() {
            return Err(Error::Nil("NSNotificationCenter defaultCenter"));
        }
        let token = send!(
            api.add_observer,
            center,
            ptr::null_mut(),
            window.id(),
            ptr::null_mut(),
            block.as_ptr()
        );
        if token.is_null() {
            return Err(Error::Nil("NSNotificationCenter addObserverForName:object:queue:usingBlock:"));
        }
    }
    tracing::debug!("Registered window observer");
    Ok(())
}
