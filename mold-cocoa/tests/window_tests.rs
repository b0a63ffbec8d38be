//! Window factory checks against the real host.
//!
//! Runs on the process main thread (`harness = false`).

#[cfg(target_os = "macos")]
mod macos {
    use std::ffi::{CStr, c_char};

    use mold_api::{Rect, Size, WindowStyle};
    use mold_cocoa::dispatch::{Id, Message};
    use mold_cocoa::{HostApi, Window, launch};
    use mold_kernel::{AppConfig, Host, WindowConfig};
    use objc2::runtime::Sel;

    type Getter = unsafe extern "C" fn(Id, Sel) -> Id;
    type Utf8 = unsafe extern "C" fn(Id, Sel) -> *const c_char;

    fn title_of(window: &Window) -> String {
        unsafe {
            let title = Message::<Getter>::instance("NSWindow", "title").unwrap();
            let utf8 = Message::<Utf8>::dynamic("NSString", "UTF8String").unwrap();
            let string = (title.imp())(window.id(), title.sel());
            let bytes = (utf8.imp())(string, utf8.sel());
            CStr::from_ptr(bytes).to_string_lossy().into_owned()
        }
    }

    fn borderless(title: Option<&str>) -> WindowConfig {
        WindowConfig {
            width: 320.0,
            height: 240.0,
            x: 40.0,
            y: 40.0,
            title: title.map(str::to_owned),
            style: WindowStyle::BORDERLESS,
        }
    }

    fn launch_reports_size() {
        let config = AppConfig {
            window: borderless(Some("Mold test")),
            ..AppConfig::default()
        };
        let (host, lifecycle) = launch(&config).unwrap();

        assert_eq!(host.window_frame(), Rect::new(40.0, 40.0, 320.0, 240.0));
        assert_eq!(title_of(host.window()), "Mold test");

        let mut lines = Vec::new();
        assert_eq!(host.window().size(&mut lines), Size::new(320.0, 240.0));
        assert_eq!(lines, vec!["w: 320.000000, h: 240.000000".to_string()]);

        assert!(!lifecycle.will_close());
        host.shutdown();
    }

    fn untitled_window_keeps_default_title() {
        let api = HostApi::load().unwrap();
        let window = Window::create(api, &borderless(None)).unwrap();
        assert_eq!(title_of(&window), "");
    }

    fn titled_window_frame_includes_decorations() {
        let api = HostApi::load().unwrap();
        let config = WindowConfig {
            style: WindowStyle::default(),
            ..borderless(Some("Decorated"))
        };
        let window = Window::create(api, &config).unwrap();
        let frame = window.frame();
        assert_eq!(frame.size.width, 320.0);
        assert!(frame.size.height >= 240.0);
        assert_eq!(title_of(&window), "Decorated");
    }

    fn check(name: &str, test: fn()) {
        test();
        println!("test {name} ... ok");
    }

    pub fn run() {
        check("launch_reports_size", launch_reports_size);
        check("untitled_window_keeps_default_title", untitled_window_keeps_default_title);
        check(
            "titled_window_frame_includes_decorations",
            titled_window_frame_includes_decorations,
        );
    }
}

fn main() {
    #[cfg(target_os = "macos")]
    macos::run();
}
