//! The table of every host entry point the backend uses.
//!
//! All names are resolved once, up front, so a missing class or selector fails at
//! startup instead of in the middle of the run-loop.

use std::ffi::{c_char, c_void};
use std::sync::OnceLock;

use mold_api::{Point, Rect};
use objc2::runtime::{AnyClass, Bool, Sel};

use crate::dispatch::{Id, Message, lookup_class};
use crate::error::DispatchError;

pub type NSUInteger = usize;
pub type NSInteger = isize;

pub type Getter = unsafe extern "C" fn(Id, Sel) -> Id;
pub type Action = unsafe extern "C" fn(Id, Sel);
pub type SetObject = unsafe extern "C" fn(Id, Sel, Id);
pub type SetBool = unsafe extern "C" fn(Id, Sel, Bool);
pub type InitWithObject = unsafe extern "C" fn(Id, Sel, Id) -> Id;
pub type InitWindow = unsafe extern "C" fn(Id, Sel, Rect, NSUInteger, NSUInteger, Bool) -> Id;
pub type GetRect = unsafe extern "C" fn(Id, Sel) -> Rect;
pub type GetPoint = unsafe extern "C" fn(Id, Sel) -> Point;
pub type GetUInteger = unsafe extern "C" fn(Id, Sel) -> NSUInteger;
pub type GetU16 = unsafe extern "C" fn(Id, Sel) -> u16;
pub type SetPolicy = unsafe extern "C" fn(Id, Sel, NSInteger) -> Bool;
pub type NextEvent = unsafe extern "C" fn(Id, Sel, NSUInteger, Id, Id, Bool) -> Id;
pub type AddObserver = unsafe extern "C" fn(Id, Sel, Id, Id, Id, *const c_void) -> Id;
pub type InitWithBytes = unsafe extern "C" fn(Id, Sel, *const c_void, NSUInteger, NSUInteger) -> Id;
pub type IsEqual = unsafe extern "C" fn(Id, Sel, Id) -> Bool;
pub type Utf8String = unsafe extern "C" fn(Id, Sel) -> *const c_char;

pub const NS_UTF8_STRING_ENCODING: NSUInteger = 4;
pub const NS_BACKING_STORE_BUFFERED: NSUInteger = 2;
pub const NS_APPLICATION_ACTIVATION_POLICY_REGULAR: NSInteger = 0;
pub const NS_EVENT_MASK_ANY: NSUInteger = NSUInteger::MAX;

#[derive(Debug)]
pub struct HostApi {
    pub(crate) window_class: &'static AnyClass,
    pub(crate) application_class: &'static AnyClass,
    pub(crate) pool_class: &'static AnyClass,
    pub(crate) menu_class: &'static AnyClass,
    pub(crate) string_class: &'static AnyClass,
    pub(crate) date_class: &'static AnyClass,
    pub(crate) center_class: &'static AnyClass,

    // NSObject
    pub(crate) alloc: Message<Getter>,
    pub(crate) release: Message<Action>,

    // NSAutoreleasePool
    pub(crate) pool_init: Message<Getter>,

    // NSApplication
    pub(crate) shared_application: Message<Getter>,
    pub(crate) set_activation_policy: Message<SetPolicy>,
    pub(crate) finish_launching: Message<Action>,
    pub(crate) set_main_menu: Message<SetObject>,
    pub(crate) activate_ignoring_other_apps: Message<SetBool>,
    pub(crate) next_event: Message<NextEvent>,
    pub(crate) send_event: Message<SetObject>,
    pub(crate) update_windows: Message<Action>,

    // NSMenu
    pub(crate) menu_init_with_title: Message<InitWithObject>,

    // NSWindow
    pub(crate) window_init: Message<InitWindow>,
    pub(crate) set_released_when_closed: Message<SetBool>,
    pub(crate) content_view: Message<Getter>,
    pub(crate) set_accepts_mouse_moved_events: Message<SetBool>,
    pub(crate) set_title: Message<SetObject>,
    pub(crate) make_key_and_order_front: Message<SetObject>,
    pub(crate) frame: Message<GetRect>,

    // NSView
    pub(crate) set_wants_layer: Message<SetBool>,

    // NSEvent
    pub(crate) event_type: Message<GetUInteger>,
    pub(crate) location_in_window: Message<GetPoint>,
    pub(crate) key_code: Message<GetU16>,
    pub(crate) modifier_flags: Message<GetUInteger>,

    // NSDate
    pub(crate) distant_future: Message<Getter>,

    // NSNotificationCenter / NSNotification
    pub(crate) default_center: Message<Getter>,
    pub(crate) add_observer: Message<AddObserver>,
    pub(crate) notification_name: Message<Getter>,

    // NSString
    pub(crate) string_init_with_bytes: Message<InitWithBytes>,
    pub(crate) string_is_equal: Message<IsEqual>,
    pub(crate) utf8_string: Message<Utf8String>,
}

static API: OnceLock<HostApi> = OnceLock::new();

impl HostApi {
    /// Resolve the table on first use and return the process-wide copy.
    pub fn load() -> Result<&'static HostApi, DispatchError> {
        if let Some(api) = API.get() {
            return Ok(api);
        }
        let api = unsafe { Self::resolve() }?;
        tracing::debug!("Resolved host entry points");
        Ok(API.get_or_init(|| api))
    }

    /// # Safety
    ///
    /// Every signature below must match the host's declaration of the method.
    unsafe fn resolve() -> Result<Self, DispatchError> {
        unsafe {
            Ok(Self {
                window_class: lookup_class("NSWindow")?,
                application_class: lookup_class("NSApplication")?,
                pool_class: lookup_class("NSAutoreleasePool")?,
                menu_class: lookup_class("NSMenu")?,
                string_class: lookup_class("NSString")?,
                date_class: lookup_class("NSDate")?,
                center_class: lookup_class("NSNotificationCenter")?,

                alloc: Message::class("NSObject", "alloc")?,
                release: Message::dynamic("NSObject", "release")?,

                pool_init: Message::instance("NSAutoreleasePool", "init")?,

                shared_application: Message::class("NSApplication", "sharedApplication")?,
                set_activation_policy: Message::instance(
                    "NSApplication",
                    "setActivationPolicy:",
                )?,
                finish_launching: Message::instance("NSApplication", "finishLaunching")?,
                set_main_menu: Message::instance("NSApplication", "setMainMenu:")?,
                activate_ignoring_other_apps: Message::instance(
                    "NSApplication",
                    "activateIgnoringOtherApps:",
                )?,
                next_event: Message::instance(
                    "NSApplication",
                    "nextEventMatchingMask:untilDate:inMode:dequeue:",
                )?,
                send_event: Message::instance("NSApplication", "sendEvent:")?,
                update_windows: Message::instance("NSApplication", "updateWindows")?,

                menu_init_with_title: Message::instance("NSMenu", "initWithTitle:")?,

                window_init: Message::instance(
                    "NSWindow",
                    "initWithContentRect:styleMask:backing:defer:",
                )?,
                set_released_when_closed: Message::instance(
                    "NSWindow",
                    "setReleasedWhenClosed:",
                )?,
                content_view: Message::instance("NSWindow", "contentView")?,
                set_accepts_mouse_moved_events: Message::instance(
                    "NSWindow",
                    "setAcceptsMouseMovedEvents:",
                )?,
                set_title: Message::instance("NSWindow", "setTitle:")?,
                make_key_and_order_front: Message::instance(
                    "NSWindow",
                    "makeKeyAndOrderFront:",
                )?,
                frame: Message::instance("NSWindow", "frame")?,

                set_wants_layer: Message::dynamic("NSView", "setWantsLayer:")?,

                event_type: Message::dynamic("NSEvent", "type")?,
                location_in_window: Message::dynamic("NSEvent", "locationInWindow")?,
                key_code: Message::dynamic("NSEvent", "keyCode")?,
                modifier_flags: Message::dynamic("NSEvent", "modifierFlags")?,

                distant_future: Message::class("NSDate", "distantFuture")?,

                default_center: Message::class("NSNotificationCenter", "defaultCenter")?,
                add_observer: Message::instance(
                    "NSNotificationCenter",
                    "addObserverForName:object:queue:usingBlock:",
                )?,
                notification_name: Message::dynamic("NSNotification", "name")?,

                string_init_with_bytes: Message::dynamic(
                    "NSString",
                    "initWithBytes:length:encoding:",
                )?,
                string_is_equal: Message::dynamic("NSString", "isEqualToString:")?,
                utf8_string: Message::dynamic("NSString", "UTF8String")?,
            })
        }
    }
}
