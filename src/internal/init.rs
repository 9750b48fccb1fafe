use crate::{
    errors::*,
    internal::panicking::panic_abort,
    jni_env::{jni_install, jni_shutdown},
};
use jni::{
    sys::{self, jint, JNI_ERR, JNI_VERSION_1_2},
    JavaVM,
};
use std::panic::AssertUnwindSafe;

fn load(vm: *mut sys::JavaVM) -> Result<()> {
    let vm = unsafe { JavaVM::from_raw(vm)? };
    let env = vm.get_env()?;
    if let Err(e) = jni_install(env) {
        // the failed lookup leaves a NoClassDefFoundError or NoSuchMethodError behind
        if env.exception_check()? {
            env.exception_clear()?;
        }
        return Err(e);
    }
    Ok(())
}

/// Resolves the bus identifiers for a JVM loading this library.
///
/// Returns the JNI version the library needs, or `JNI_ERR` if any class, method or field is
/// missing. The JVM then refuses to load the library.
pub fn jni_load(vm: *mut sys::JavaVM) -> jint {
    match std::panic::catch_unwind(AssertUnwindSafe(|| load(vm))) {
        Ok(Ok(())) => {
            log::info!("triumph_jni loaded into JVM {:p}", vm);
            JNI_VERSION_1_2
        }
        Ok(Err(e)) => {
            log::error!("triumph_jni failed to initialize: {}", e);
            JNI_ERR
        }
        Err(e) => panic_abort(e),
    }
}

/// Releases the bus identifiers held for a JVM unloading this library.
pub fn jni_unload(vm: *mut sys::JavaVM) {
    if jni_shutdown(vm as usize) {
        log::debug!("triumph_jni unloaded from JVM {:p}", vm);
    } else {
        log::warn!("triumph_jni unloaded from JVM {:p}, which it was never loaded into", vm);
    }
}
