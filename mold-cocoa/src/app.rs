use std::ptr::NonNull;
use std::sync::Arc;

use mold_kernel::{AppConfig, LifecycleState, StdoutSink};
use objc2::runtime::Bool;

use crate::api::{HostApi, NS_APPLICATION_ACTIVATION_POLICY_REGULAR};
use crate::dispatch::{Id, class_object, send};
use crate::error::Error;
use crate::host::{AutoreleaseScope, CocoaHost};
use crate::observer;
use crate::string::NativeString;
use crate::window::Window;

/// Bring up the shared application and the single window.
///
/// Must be called on the main thread. Returns the host for the run-loop together
/// with the lifecycle flags the window observer updates.
pub fn launch(config: &AppConfig) -> Result<(CocoaHost, Arc<LifecycleState>), Error> {
    let api = HostApi::load()?;
    let _scope = AutoreleaseScope::new(api);

    let app = unsafe { send!(api.shared_application, class_object(api.application_class)) };
    let app = NonNull::new(app).ok_or(Error::Nil("NSApplication sharedApplication"))?;

    unsafe {
        send!(
            api.set_activation_policy,
            app.as_ptr(),
            NS_APPLICATION_ACTIVATION_POLICY_REGULAR
        );
        send!(api.finish_launching, app.as_ptr());
    }
    tracing::info!("Application launched");

    install_main_menu(api, app.as_ptr(), &config.menu_title)?;

    let window = Window::create(api, &config.window)?;
    window.size(&mut StdoutSink);

    let lifecycle = Arc::new(LifecycleState::new());
    observer::observe(api, &window, Arc::clone(&lifecycle))?;

    unsafe { send!(api.activate_ignoring_other_apps, app.as_ptr(), Bool::YES) };

    Ok((CocoaHost::new(api, app, window), lifecycle))
}

fn install_main_menu(api: &'static HostApi, app: Id, title: &str) -> Result<(), Error> {
    let title = NativeString::new(api, title)?;
    let menu = unsafe {
        let raw = send!(api.alloc, class_object(api.menu_class));
        send!(api.menu_init_with_title, raw, title.id())
    };
    if menu.is_null() {
        return Err(Error::Nil("NSMenu initWithTitle:"));
    }
    unsafe {
        send!(api.set_main_menu, app, menu);
        send!(api.release, menu);
    }
    Ok(())
}
