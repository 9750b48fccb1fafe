//! The symbols the JVM binds to: the library lifecycle hooks and the `native` methods of
//! `org.alljoyn.triumph.TriumphCPPAdapter`.

#![allow(clippy::too_many_arguments)]

use crate::{
    adapter,
    internal::{init, panicking::__tjni_entry_point},
};
use jni::{
    objects::{JClass, JObject, JString},
    sys::{self, jint, jobject, jobjectArray},
    JNIEnv,
};
use std::ffi::c_void;

#[no_mangle]
pub extern "system" fn JNI_OnLoad(vm: *mut sys::JavaVM, _reserved: *mut c_void) -> jint {
    init::jni_load(vm)
}

#[no_mangle]
pub extern "system" fn JNI_OnUnload(vm: *mut sys::JavaVM, _reserved: *mut c_void) {
    init::jni_unload(vm)
}

/// `static native Object callMethod(BusAttachment, ProxyBusObject, String, String, String, Type,
/// Object[])`
#[no_mangle]
pub extern "system" fn Java_org_alljoyn_triumph_TriumphCPPAdapter_callMethod<'env>(
    env: JNIEnv<'env>,
    _class: JClass<'env>,
    bus: JObject<'env>,
    proxy: JObject<'env>,
    interface_name: JString<'env>,
    method_name: JString<'env>,
    input_sig: JString<'env>,
    out_type: JObject<'env>,
    args: jobjectArray,
) -> jobject {
    __tjni_entry_point(env, |env| {
        adapter::call_method(
            env,
            bus,
            proxy,
            interface_name,
            method_name,
            input_sig,
            out_type,
            JObject::from(args),
        )
    })
}

/// `static native String[] splitSignature(String)`
#[no_mangle]
pub extern "system" fn Java_org_alljoyn_triumph_TriumphCPPAdapter_splitSignature<'env>(
    env: JNIEnv<'env>,
    _class: JClass<'env>,
    signature: JString<'env>,
) -> jobjectArray {
    __tjni_entry_point(env, |env| adapter::split_signature(env, signature))
}

/// `static native void emitSignal(SignalEmitter, String, String, String, Object[])`
#[no_mangle]
pub extern "system" fn Java_org_alljoyn_triumph_TriumphCPPAdapter_emitSignal<'env>(
    env: JNIEnv<'env>,
    _class: JClass<'env>,
    emitter: JObject<'env>,
    interface_name: JString<'env>,
    signal_name: JString<'env>,
    arg_signature: JString<'env>,
    args: jobjectArray,
) {
    __tjni_entry_point(env, |env| {
        adapter::emit_signal(
            env,
            emitter,
            interface_name,
            signal_name,
            arg_signature,
            JObject::from(args),
        )
    })
}

/// `static native void setProperty(BusAttachment, ProxyBusObject, String, String, String,
/// Object)`
#[no_mangle]
pub extern "system" fn Java_org_alljoyn_triumph_TriumphCPPAdapter_setProperty<'env>(
    env: JNIEnv<'env>,
    _class: JClass<'env>,
    bus: JObject<'env>,
    proxy: JObject<'env>,
    interface_name: JString<'env>,
    property_name: JString<'env>,
    signature: JString<'env>,
    value: JObject<'env>,
) {
    __tjni_entry_point(env, |env| {
        adapter::set_property(env, bus, proxy, interface_name, property_name, signature, value)
    })
}

/// `private static native Variant getPropertyPriv(BusAttachment, ProxyBusObject, String, String)`
#[no_mangle]
pub extern "system" fn Java_org_alljoyn_triumph_TriumphCPPAdapter_getPropertyPriv<'env>(
    env: JNIEnv<'env>,
    _class: JClass<'env>,
    bus: JObject<'env>,
    proxy: JObject<'env>,
    interface_name: JString<'env>,
    property_name: JString<'env>,
) -> jobject {
    __tjni_entry_point(env, |env| {
        adapter::get_property(env, bus, proxy, interface_name, property_name)
    })
}
