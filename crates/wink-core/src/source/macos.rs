use std::ffi::c_void;
use std::path::PathBuf;
use std::ptr;

use accessibility_sys::{
    AXUIElementCopyAttributeValue, AXUIElementCreateApplication, AXUIElementRef,
    AXUIElementSetAttributeValue, AXUIElementSetMessagingTimeout, kAXErrorAPIDisabled,
    kAXErrorAttributeUnsupported, kAXErrorCannotComplete, kAXErrorNoValue, kAXErrorSuccess,
    kAXFocusedAttribute, kAXMainAttribute, kAXMinimizedAttribute, kAXTitleAttribute,
    kAXWindowsAttribute,
};
use core_foundation::array::{CFArray, CFArrayRef};
use core_foundation::base::{CFIndex, CFType, CFTypeRef, TCFType};
use core_foundation::boolean::CFBoolean;
use core_foundation::dictionary::CFDictionary;
use core_foundation::number::CFNumber;
use core_foundation::string::CFString;
use core_graphics::geometry::CGRect;
use objc2::msg_send;
use objc2::rc::autoreleasepool;
use objc2_app_kit::{NSApplicationActivationOptions, NSRunningApplication};
use tracing::debug;

use crate::config::WinkConfig;
use crate::source::errors::SourceError;
use crate::source::traits::WindowSource;
use crate::source::types::{ActivationHandle, ActivationTarget, AxWindow, ResolvedProcess, ServerWindow};

#[link(name = "CoreGraphics", kind = "framework")]
unsafe extern "C" {
    fn CGWindowListCopyWindowInfo(option: u32, relative_to_window: u32) -> CFArrayRef;
}

#[link(name = "ApplicationServices", kind = "framework")]
unsafe extern "C" {
    fn AXIsProcessTrusted() -> bool;
}

/// Skip Finder desktop and wallpaper backing windows.
const CG_WINDOW_LIST_EXCLUDE_DESKTOP_ELEMENTS: u32 = 1 << 4;
const CG_NULL_WINDOW_ID: u32 = 0;

/// Window source backed by the real window server and Accessibility API.
pub struct MacosWindowSource {
    messaging_timeout_secs: f32,
}

impl MacosWindowSource {
    pub fn new(config: &WinkConfig) -> Self {
        Self {
            messaging_timeout_secs: config.accessibility.messaging_timeout_secs,
        }
    }
}

impl WindowSource for MacosWindowSource {
    fn list_server_windows(&self) -> Result<Vec<ServerWindow>, SourceError> {
        check_accessibility_permission()?;

        // All windows rather than on-screen-only: windows on other Spaces are
        // still switch targets. Desktop elements never are.
        let options = CG_WINDOW_LIST_EXCLUDE_DESKTOP_ELEMENTS;

        // SAFETY: Create Rule: the returned array is +1 retained and owned here.
        let list_ref = unsafe { CGWindowListCopyWindowInfo(options, CG_NULL_WINDOW_ID) };
        if list_ref.is_null() {
            return Err(SourceError::ListFailed {
                message: "CGWindowListCopyWindowInfo returned null".to_string(),
            });
        }

        // SAFETY: list_ref is a +1 retained CFArrayRef of CFDictionary entries.
        // wrap_under_create_rule takes ownership and releases on drop.
        let list: CFArray<CFDictionary> = unsafe { CFArray::wrap_under_create_rule(list_ref) };

        let mut windows = Vec::with_capacity(list.len() as usize);
        for i in 0..list.len() {
            let Some(info) = list.get(i) else {
                continue;
            };
            match parse_server_window(&info) {
                Some(window) => windows.push(window),
                None => {
                    debug!(
                        event = "core.source.server_entry_unparsed",
                        index = i,
                        reason = "missing_window_number"
                    );
                }
            }
        }

        debug!(
            event = "core.source.server_list_completed",
            count = windows.len()
        );
        Ok(windows)
    }

    fn list_ax_windows(&self, pid: i32) -> Result<Vec<AxWindow>, SourceError> {
        // SAFETY: AXUIElementCreateApplication creates a +1 retained AXUIElementRef.
        let app_element = unsafe { AXUIElementCreateApplication(pid) };
        if app_element.is_null() {
            return Err(SourceError::AxQueryFailed {
                pid,
                message: "failed to create application element".to_string(),
            });
        }

        // SAFETY: app_element is a valid AXUIElementRef we just created.
        unsafe {
            AXUIElementSetMessagingTimeout(app_element, self.messaging_timeout_secs);
        }

        let result = copy_ax_windows(app_element, pid);

        // SAFETY: Release the app element (Create Rule: we own it).
        unsafe {
            core_foundation::base::CFRelease(app_element as *mut c_void);
        }

        result
    }

    fn resolve_process(&self, pid: i32) -> Option<ResolvedProcess> {
        autoreleasepool(|_pool| {
            let app = NSRunningApplication::runningApplicationWithProcessIdentifier(pid)?;

            let display_name = app
                .localizedName()
                .map(|name| name.to_string())
                .filter(|name| !name.is_empty())?;
            let bundle_id = app.bundleIdentifier().map(|id| id.to_string());
            let icon_path = app
                .bundleURL()
                .and_then(|url| url.path())
                .map(|path| PathBuf::from(path.to_string()));

            Some(ResolvedProcess {
                display_name,
                bundle_id,
                icon_path,
            })
        })
    }

    fn activate_process(&self, pid: i32) -> Result<(), SourceError> {
        autoreleasepool(|_pool| {
            let Some(app) = NSRunningApplication::runningApplicationWithProcessIdentifier(pid)
            else {
                return Err(SourceError::ProcessNotFound { pid });
            };

            // Ignoring other apps' focus is the point of a switcher: the user
            // explicitly chose this window over the current focus holder.
            let options = NSApplicationActivationOptions::NSApplicationActivateIgnoringOtherApps;

            // SAFETY: app is a valid NSRunningApplication; activateWithOptions:
            // takes an options bitmask and returns whether activation started.
            let activated: bool = unsafe { msg_send![&*app, activateWithOptions: options] };

            if activated {
                debug!(event = "core.source.process_activated", pid = pid);
                Ok(())
            } else {
                Err(SourceError::ActivationFailed {
                    pid,
                    message: "activateWithOptions returned false".to_string(),
                })
            }
        })
    }

    fn focus_window(&self, handle: &ActivationHandle) -> Result<(), SourceError> {
        let ActivationTarget::AxWindow { ordinal, title } = handle.target() else {
            return Err(SourceError::FocusFailed {
                message: "handle has no window-level target".to_string(),
            });
        };

        ax_focus_window(handle.pid(), *ordinal, title, self.messaging_timeout_secs)
    }
}

fn check_accessibility_permission() -> Result<(), SourceError> {
    // SAFETY: Takes no arguments; reads this process's trust state.
    let trusted = unsafe { AXIsProcessTrusted() };
    if trusted {
        Ok(())
    } else {
        Err(SourceError::PermissionDenied)
    }
}

/// Parse one raw window-server dictionary into a typed entry.
///
/// Every key except the window number is optional and defaults rather than
/// failing: titles are usually absent without the screen-capture entitlement,
/// and system entries omit alpha or bounds.
fn parse_server_window(info: &CFDictionary) -> Option<ServerWindow> {
    let window_number = dict_i64(info, "kCGWindowNumber")? as u32;

    let owner_pid = dict_i64(info, "kCGWindowOwnerPID").map(|pid| pid as i32);
    // Missing layer defaults to -1 so the entry fails the normal-layer filter
    let layer = dict_i64(info, "kCGWindowLayer").map_or(-1, |layer| layer as i32);
    let title = dict_string(info, "kCGWindowName").unwrap_or_default();
    let alpha = dict_f64(info, "kCGWindowAlpha").unwrap_or(1.0);
    let on_screen = dict_bool(info, "kCGWindowIsOnscreen").unwrap_or(false);
    let (width, height) = dict_rect(info, "kCGWindowBounds")
        .map_or((0.0, 0.0), |rect| (rect.size.width, rect.size.height));

    Some(ServerWindow {
        window_number,
        owner_pid,
        layer,
        title,
        on_screen,
        alpha,
        width,
        height,
    })
}

fn dict_value(info: &CFDictionary, key: &'static str) -> Option<CFType> {
    let cf_key = CFString::from_static_string(key);
    let value = info.find(cf_key.as_CFTypeRef() as *const _)?;
    // SAFETY: Get Rule: the dictionary keeps its own reference; wrap_under_get_rule
    // retains an independent one.
    Some(unsafe { CFType::wrap_under_get_rule(value.cast()) })
}

fn dict_i64(info: &CFDictionary, key: &'static str) -> Option<i64> {
    dict_value(info, key)?.downcast::<CFNumber>()?.to_i64()
}

fn dict_f64(info: &CFDictionary, key: &'static str) -> Option<f64> {
    dict_value(info, key)?.downcast::<CFNumber>()?.to_f64()
}

fn dict_string(info: &CFDictionary, key: &'static str) -> Option<String> {
    dict_value(info, key)?
        .downcast::<CFString>()
        .map(|s| s.to_string())
}

fn dict_bool(info: &CFDictionary, key: &'static str) -> Option<bool> {
    dict_value(info, key)?.downcast::<CFBoolean>().map(bool::from)
}

fn dict_rect(info: &CFDictionary, key: &'static str) -> Option<CGRect> {
    let dict = dict_value(info, key)?.downcast::<CFDictionary>()?;
    CGRect::from_dict_representation(&dict)
}

/// Read a process's accessibility window list through an app element.
///
/// The caller owns `app_element` and releases it afterwards.
fn copy_ax_windows(app_element: AXUIElementRef, pid: i32) -> Result<Vec<AxWindow>, SourceError> {
    let windows_attr = CFString::new(kAXWindowsAttribute);
    let mut windows_value: CFTypeRef = ptr::null();

    // SAFETY: Standard AXUIElementCopyAttributeValue call (Copy Rule: +1 retained ref on success).
    let err = unsafe {
        AXUIElementCopyAttributeValue(
            app_element,
            windows_attr.as_concrete_TypeRef(),
            &mut windows_value,
        )
    };

    if err == kAXErrorAPIDisabled {
        return Err(SourceError::PermissionDenied);
    }
    if err == kAXErrorCannotComplete {
        // Messaging timeout expired or the process is not answering
        return Err(SourceError::AxTimeout { pid });
    }
    if err == kAXErrorNoValue || err == kAXErrorAttributeUnsupported {
        // Process exposes no window list; not an error, just nothing to merge
        return Ok(Vec::new());
    }
    if err != kAXErrorSuccess {
        return Err(SourceError::AxQueryFailed {
            pid,
            message: format!("failed to read windows attribute (AXError: {})", err),
        });
    }
    if windows_value.is_null() {
        return Ok(Vec::new());
    }

    // SAFETY: windows_value is a +1 retained CFArrayRef from CopyAttributeValue.
    // wrap_under_create_rule takes ownership and releases on drop.
    let cf_array: CFArray<CFType> =
        unsafe { CFArray::wrap_under_create_rule(windows_value as CFArrayRef) };

    let mut windows = Vec::with_capacity(cf_array.len() as usize);
    for i in 0..cf_array.len() {
        // Array elements are unretained borrows into the CFArray
        let Some(item) = cf_array.get(i) else {
            continue;
        };
        let window_element = item.as_CFTypeRef() as AXUIElementRef;

        let title = ax_string_attribute(window_element, kAXTitleAttribute).unwrap_or_default();
        let minimized = ax_bool_attribute(window_element, kAXMinimizedAttribute).unwrap_or(false);

        windows.push(AxWindow {
            ordinal: (i as usize) + 1,
            title,
            minimized,
        });
    }

    debug!(
        event = "core.source.ax_list_completed",
        pid = pid,
        count = windows.len()
    );
    Ok(windows)
}

/// Get a string attribute from an AX element.
fn ax_string_attribute(element: AXUIElementRef, attribute: &str) -> Option<String> {
    let cf_attr = CFString::new(attribute);
    let mut value: CFTypeRef = ptr::null();

    // SAFETY: Standard AXUIElementCopyAttributeValue call (Copy Rule: +1 retained ref on success).
    let result = unsafe {
        AXUIElementCopyAttributeValue(element, cf_attr.as_concrete_TypeRef(), &mut value)
    };
    if result != kAXErrorSuccess || value.is_null() {
        return None;
    }

    // SAFETY: value is a +1 retained CFTypeRef. wrap_under_create_rule takes ownership.
    let cf_type: CFType = unsafe { TCFType::wrap_under_create_rule(value) };
    cf_type.downcast::<CFString>().map(|s| s.to_string())
}

/// Get a boolean attribute from an AX element.
fn ax_bool_attribute(element: AXUIElementRef, attribute: &str) -> Option<bool> {
    let cf_attr = CFString::new(attribute);
    let mut value: CFTypeRef = ptr::null();

    // SAFETY: Standard AXUIElementCopyAttributeValue call (Copy Rule: +1 retained ref on success).
    let result = unsafe {
        AXUIElementCopyAttributeValue(element, cf_attr.as_concrete_TypeRef(), &mut value)
    };
    if result != kAXErrorSuccess || value.is_null() {
        return None;
    }

    // SAFETY: value is a +1 retained CFTypeRef. wrap_under_create_rule takes ownership.
    let cf_type: CFType = unsafe { TCFType::wrap_under_create_rule(value) };
    cf_type.downcast::<CFBoolean>().map(bool::from)
}

/// Focus a window via the Accessibility API from a discovery-time handle.
fn ax_focus_window(
    pid: i32,
    ordinal: usize,
    title: &str,
    timeout_secs: f32,
) -> Result<(), SourceError> {
    // SAFETY: AXUIElementCreateApplication creates a +1 retained AXUIElementRef.
    let app_element = unsafe { AXUIElementCreateApplication(pid) };
    if app_element.is_null() {
        return Err(SourceError::FocusFailed {
            message: format!("failed to create application element for pid {}", pid),
        });
    }

    // SAFETY: app_element is a valid AXUIElementRef we just created.
    unsafe {
        AXUIElementSetMessagingTimeout(app_element, timeout_secs);
    }

    let result = ax_find_and_focus(app_element, pid, ordinal, title);

    // SAFETY: Release the app element (Create Rule: we own it).
    unsafe {
        core_foundation::base::CFRelease(app_element as *mut c_void);
    }

    result
}

/// Find the target window in the app's current AX window list and focus it.
///
/// Titles are the stable coordinate between discovery and activation; the
/// ordinal captured at discovery time is only a fallback hint, since window
/// lists shift as windows open and close.
fn ax_find_and_focus(
    app_element: AXUIElementRef,
    pid: i32,
    ordinal: usize,
    title: &str,
) -> Result<(), SourceError> {
    let windows_attr = CFString::new(kAXWindowsAttribute);
    let mut windows_value: CFTypeRef = ptr::null();

    // SAFETY: Standard AXUIElementCopyAttributeValue call (Copy Rule: +1 retained ref on success).
    let err = unsafe {
        AXUIElementCopyAttributeValue(
            app_element,
            windows_attr.as_concrete_TypeRef(),
            &mut windows_value,
        )
    };
    if err != kAXErrorSuccess || windows_value.is_null() {
        return Err(SourceError::FocusFailed {
            message: format!("failed to list windows for pid {} (AXError: {})", pid, err),
        });
    }

    // SAFETY: windows_value is a +1 retained CFArrayRef from CopyAttributeValue.
    // wrap_under_create_rule takes ownership and releases on drop.
    let cf_array: CFArray<CFType> =
        unsafe { CFArray::wrap_under_create_rule(windows_value as CFArrayRef) };

    if !title.is_empty() {
        let title_lower = title.to_lowercase();
        for i in 0..cf_array.len() {
            let Some(item) = cf_array.get(i) else {
                continue;
            };
            let window_element = item.as_CFTypeRef() as AXUIElementRef;

            if let Some(window_title) = ax_string_attribute(window_element, kAXTitleAttribute)
                && window_title.to_lowercase() == title_lower
            {
                return ax_make_main_and_focused(window_element);
            }
        }
    }

    // Fall back to the discovery-time position (fallback-titled windows have
    // no AX title to match on)
    if let Some(item) = cf_array.get(ordinal.saturating_sub(1) as CFIndex) {
        let window_element = item.as_CFTypeRef() as AXUIElementRef;
        return ax_make_main_and_focused(window_element);
    }

    Err(SourceError::FocusFailed {
        message: format!(
            "no window matching '{}' (ordinal {}) among {} windows of pid {}",
            title,
            ordinal,
            cf_array.len(),
            pid
        ),
    })
}

/// Make a window its process's main and focused window.
fn ax_make_main_and_focused(window_element: AXUIElementRef) -> Result<(), SourceError> {
    let cf_true = CFBoolean::true_value();

    let main_attr = CFString::new(kAXMainAttribute);
    // SAFETY: Setting attribute value on a valid window element.
    let main_err = unsafe {
        AXUIElementSetAttributeValue(
            window_element,
            main_attr.as_concrete_TypeRef(),
            cf_true.as_CFTypeRef(),
        )
    };

    let focused_attr = CFString::new(kAXFocusedAttribute);
    // SAFETY: Setting attribute value on a valid window element.
    let focused_err = unsafe {
        AXUIElementSetAttributeValue(
            window_element,
            focused_attr.as_concrete_TypeRef(),
            cf_true.as_CFTypeRef(),
        )
    };

    // Some apps honor only one of the two attributes; fail only when both refuse
    if main_err != kAXErrorSuccess && focused_err != kAXErrorSuccess {
        return Err(SourceError::FocusFailed {
            message: format!(
                "window refused focus (AXMain error: {}, AXFocused error: {})",
                main_err, focused_err
            ),
        });
    }

    Ok(())
}
