use objc::runtime::Object;
use objc::{class, msg_send, sel, sel_impl};

/// `[[NSPasteboard generalPasteboard] changeCount]`
pub fn change_count() -> Option<u64> {
    // SAFETY: AppKit is linked through clipboard-rs. `generalPasteboard`
    // returns a shared, autoreleased instance and `changeCount` only reads
    // an integer property.
    unsafe {
        let pasteboard: *mut Object = msg_send![class!(NSPasteboard), generalPasteboard];
        if pasteboard.is_null() {
            return None;
        }
        let count: isize = msg_send![pasteboard, changeCount];
        u64::try_from(count).ok()
    }
}
