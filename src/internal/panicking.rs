use crate::{conversions::JniReturn, errors::*, globals, jni_env::JniEnv};
use jni::JNIEnv;
use std::{any::Any, panic::AssertUnwindSafe};

#[inline(never)]
#[cold]
fn get_panic_string(e: Box<dyn Any + Send + 'static>) -> String {
    if e.is::<String>() {
        match e.downcast::<String>() {
            Ok(s) => *s,
            Err(_) => "error retrieving string???".to_string(),
        }
    } else if let Some(s) = e.downcast_ref::<&'static str>() {
        s.to_string()
    } else {
        "could not retrieve panic data".to_string()
    }
}

#[inline(never)]
#[cold]
pub fn panic_abort(e: Box<dyn Any + Send + 'static>) -> ! {
    std::panic::catch_unwind(AssertUnwindSafe(|| {
        let msg = get_panic_string(e);
        log::error!("Panic encountered in triumph_jni internal code: {}", msg);
        eprintln!("Panic encountered in triumph_jni internal code: {msg}");
    }))
    .ok();
    std::process::abort();
}

#[inline(never)]
#[cold]
pub fn fail(e: Error) -> ! {
    log::error!("Error thrown by internal triumph_jni code: {}", e);
    eprintln!("Error thrown by internal triumph_jni code: {e}");
    if let Some(bt) = e.backtrace() {
        eprintln!("{bt:?}");
    }
    eprintln!("Aborting due to fatal error...");
    std::process::abort(); // rip
}

#[inline(never)]
#[cold]
fn check_fail(r: Result<()>) {
    if let Err(e) = r {
        fail(e);
    }
}

pub fn catch_panic<R>(func: impl FnOnce() -> R) -> Result<R> {
    match std::panic::catch_unwind(AssertUnwindSafe(func)) {
        Ok(v) => Ok(v),
        Err(e) => Err(Error::panicked(get_panic_string(e))),
    }
}

/// The function that wraps every exported native method, converting its result into a JNI return
/// value and preventing panics from crossing the FFI barrier.
///
/// Errors are thrown into the JVM as exceptions, and the closest thing to a null value is
/// returned in their place. This has the weird name it does to allow us to identify it in the
/// stack trace.
#[inline(never)]
pub fn __tjni_entry_point<'env, R: JniReturn>(
    env: JNIEnv<'env>,
    func: impl FnOnce(&JniEnv<'env>) -> Result<R>,
) -> R::JavaType {
    // for safety, just in case there's a bug that might cause panics in e.g. backtrace, since
    // we invoke a lot of weird stuff trying to get the panic string.
    match std::panic::catch_unwind(AssertUnwindSafe(|| {
        match catch_panic(|| JniEnv::with_env(env, func)).and_then(|r| r) {
            Ok(v) => v.into_java(),
            Err(e) => {
                check_fail(e.emit_error(&env, globals::get_default_exception_class()));
                R::null_ret()
            }
        }
    })) {
        Ok(v) => v,
        Err(e) => panic_abort(e),
    }
}
