//! Process-wide settings for the bridge.

use jni::sys::jint;
use parking_lot::RwLock;
use triumph_signatures::ClassName;

/// The reply timeout used when a `ProxyBusObject` does not carry a positive one, in milliseconds.
pub const DEFAULT_CALL_TIMEOUT: jint = 25000;

/// The call flags used when a `ProxyBusObject` carries a negative value.
pub const DEFAULT_CALL_FLAGS: jint = 0;

static DEFAULT_EXCEPTION_CLASS: RwLock<&'static str> =
    RwLock::new("java/lang/IllegalStateException");
static REPLY_TIMEOUT: RwLock<jint> = RwLock::new(DEFAULT_CALL_TIMEOUT);
static CALL_FLAGS: RwLock<jint> = RwLock::new(DEFAULT_CALL_FLAGS);

/// Sets the exception class thrown for errors that do not name one, as a JNI internal name.
///
/// Names that are not valid internal names, such as `java.lang.RuntimeException`, are ignored.
pub fn set_default_exception_class(class: &'static str) {
    match ClassName::parse_jni(class) {
        Ok(_) => *DEFAULT_EXCEPTION_CLASS.write() = class,
        Err(e) => log::warn!("ignoring invalid exception class {:?}: {}", class, e),
    }
}
pub fn get_default_exception_class() -> &'static str {
    *DEFAULT_EXCEPTION_CLASS.read()
}

/// Sets the reply timeout substituted for non-positive timeouts. Non-positive values are ignored.
pub fn set_default_reply_timeout(timeout: jint) {
    if timeout > 0 {
        *REPLY_TIMEOUT.write() = timeout;
    }
}
pub fn get_default_reply_timeout() -> jint {
    *REPLY_TIMEOUT.read()
}

/// Sets the flags substituted for negative flag values. Negative values are ignored.
pub fn set_default_call_flags(flags: jint) {
    if flags >= 0 {
        *CALL_FLAGS.write() = flags;
    }
}
pub fn get_default_call_flags() -> jint {
    *CALL_FLAGS.read()
}
