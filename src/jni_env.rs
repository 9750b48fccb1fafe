use crate::{bus_ids::BusIds, errors::*};
use chashmap::CHashMap;
use jni::JNIEnv;
use lazy_static::lazy_static;
use std::{ops::Deref, sync::Arc};

lazy_static! {
    static ref CACHES: CHashMap<usize, Arc<BusIds>> = CHashMap::new();
}

fn vm_offset(env: JNIEnv<'_>) -> Result<usize> {
    Ok(env.get_java_vm()?.get_java_vm_pointer() as usize)
}

/// Resolves the bus identifiers for the JVM `env` belongs to and stores them, replacing any
/// previous entry for the same JVM.
pub(crate) fn jni_install(env: JNIEnv<'_>) -> Result<()> {
    let offset = vm_offset(env)?;
    let ids = BusIds::resolve(env)?;
    CACHES.insert(offset, Arc::new(ids));
    Ok(())
}

/// Drops the bus identifiers stored for the JVM at `vm_ptr`, releasing their global references.
///
/// Returns whether an entry was present.
pub(crate) fn jni_shutdown(vm_ptr: usize) -> bool {
    CACHES.remove(&vm_ptr).is_some()
}

fn jni_lookup(env: JNIEnv<'_>) -> Result<Arc<BusIds>> {
    let offset = vm_offset(env)?;
    match CACHES.get(&offset) {
        Some(ids) => Ok(ids.clone()),
        None => Err(Error::message("native library has not been initialized")),
    }
}

/// A wrapper for a [`JNIEnv`] that carries the bus identifiers resolved for its JVM.
#[derive(Clone)]
pub struct JniEnv<'env> {
    env: JNIEnv<'env>,
    ids: Arc<BusIds>,
}
impl<'env> JniEnv<'env> {
    /// Creates a new [`JniEnv`] wrapping this environment.
    ///
    /// Fails if the library was never initialized for this JVM.
    pub fn with_env<R>(
        env: JNIEnv<'env>,
        func: impl FnOnce(&JniEnv<'env>) -> Result<R>,
    ) -> Result<R> {
        let ids = jni_lookup(env)?;
        func(&JniEnv { env, ids })
    }

    /// Returns the bus identifiers for this JVM.
    pub fn ids(&self) -> &BusIds {
        &self.ids
    }

    /// Returns the underlying [`JNIEnv`].
    pub fn raw(&self) -> JNIEnv<'env> {
        self.env
    }
}
impl<'env> Deref for JniEnv<'env> {
    type Target = JNIEnv<'env>;

    fn deref(&self) -> &Self::Target {
        &self.env
    }
}
