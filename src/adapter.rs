//! The forwarding operations behind `TriumphCPPAdapter`'s native methods.
//!
//! Each operation hands its arguments unchanged to exactly one method of an AllJoyn Java binding
//! object. The only values this module computes itself are the reply timeout and flags of
//! [`call_method`].

use crate::{
    bus_ids::FieldId,
    errors::*,
    globals,
    jni_env::JniEnv,
    symbols::{Member, SYMBOLS},
};
use jni::{
    objects::{JFieldID, JObject, JString, JValue},
    sys::jint,
};

/// Returns the reply timeout to use for a method call, replacing non-positive values with the
/// default reply timeout.
pub fn effective_reply_timeout(timeout: jint) -> jint {
    if timeout <= 0 {
        globals::get_default_reply_timeout()
    } else {
        timeout
    }
}

/// Returns the flags to use for a method call, replacing negative values with the default flags.
pub fn effective_call_flags(flags: jint) -> jint {
    if flags < 0 {
        globals::get_default_call_flags()
    } else {
        flags
    }
}

fn proxy_field<'env>(env: &JniEnv<'env>, member: &Member) -> Result<JFieldID<'env>> {
    let class = env.ids().proxy_bus_object_class();
    match env.get_field_id(class, member.name, member.sig.as_str()) {
        Ok(id) => Ok(id),
        Err(_) => jni_throw!(
            @"java/lang/IllegalStateException",
            "Unable to find '{}' field in ProxyBusObject", member.name
        ),
    }
}

fn proxy_int_field<'env>(
    env: &JniEnv<'env>,
    proxy: JObject<'env>,
    member: &Member,
) -> Result<jint> {
    let field = proxy_field(env, member)?;
    Ok(env.get_field_unchecked(proxy, field, member.ty.clone())?.i()?)
}

/// Invokes `methodName` of `interfaceName` on a remote object through its `ProxyBusObject`.
///
/// The reply timeout and flags are read from the proxy's `replyTimeoutMsecs` and `flags` fields,
/// with defaults substituted by [`effective_reply_timeout`] and [`effective_call_flags`].
#[allow(clippy::too_many_arguments)]
pub fn call_method<'env>(
    env: &JniEnv<'env>,
    bus: JObject<'env>,
    proxy: JObject<'env>,
    interface_name: JString<'env>,
    method_name: JString<'env>,
    input_sig: JString<'env>,
    out_type: JObject<'env>,
    args: JObject<'env>,
) -> Result<JObject<'env>> {
    let timeout = proxy_int_field(env, proxy, &SYMBOLS.proxy_reply_timeout)?;
    let flags = proxy_int_field(env, proxy, &SYMBOLS.proxy_flags)?;
    let timeout = effective_reply_timeout(timeout);
    let flags = effective_call_flags(flags);

    let result = env.call_method_unchecked(
        proxy,
        env.ids().proxy_method_call.get(),
        SYMBOLS.proxy_method_call.ty.clone(),
        &[
            JValue::Object(bus),
            JValue::Object(interface_name.into()),
            JValue::Object(method_name.into()),
            JValue::Object(input_sig.into()),
            JValue::Object(out_type),
            JValue::Object(args),
            JValue::Int(timeout),
            JValue::Int(flags),
        ],
    )?;
    Ok(result.l()?)
}

/// Splits a signature of contiguous AllJoyn types into the signatures of its members, using
/// `Signature.split`.
pub fn split_signature<'env>(
    env: &JniEnv<'env>,
    signature: JString<'env>,
) -> Result<JObject<'env>> {
    let ids = env.ids();
    let result = env.call_static_method_unchecked(
        ids.signature_class(),
        ids.signature_split.get(),
        SYMBOLS.signature_split.ty.clone(),
        &[JValue::Object(signature.into())],
    )?;
    Ok(result.l()?)
}

fn emitter_object<'env>(
    env: &JniEnv<'env>,
    emitter: JObject<'env>,
    member: &Member,
    id: FieldId,
) -> Result<JObject<'env>> {
    let value = env.get_field_unchecked(emitter, id.get(), member.ty.clone())?.l()?;
    if value.is_null() {
        jni_throw!(
            @"java/lang/IllegalStateException",
            "Unable to find '{}' field in SignalEmitter", member.name
        )
    }
    Ok(value)
}

fn emitter_int<'env>(
    env: &JniEnv<'env>,
    emitter: JObject<'env>,
    member: &Member,
    id: FieldId,
) -> Result<jint> {
    Ok(env.get_field_unchecked(emitter, id.get(), member.ty.clone())?.i()?)
}

/// Emits `signalName` of `interfaceName` through a `SignalEmitter`.
///
/// The source object, destination, session id, time to live, flags and message context are read
/// from the emitter itself and passed to `SignalEmitter.signal` in its parameter order.
pub fn emit_signal<'env>(
    env: &JniEnv<'env>,
    emitter: JObject<'env>,
    interface_name: JString<'env>,
    signal_name: JString<'env>,
    arg_signature: JString<'env>,
    args: JObject<'env>,
) -> Result<()> {
    let ids = env.ids();
    let sym = &*SYMBOLS;

    let source = emitter_object(env, emitter, &sym.emitter_source, ids.emitter_source)?;
    let msg_context =
        emitter_object(env, emitter, &sym.emitter_msg_context, ids.emitter_msg_context)?;
    let destination =
        emitter_object(env, emitter, &sym.emitter_destination, ids.emitter_destination)?;
    let session_id = emitter_int(env, emitter, &sym.emitter_session_id, ids.emitter_session_id)?;
    let time_to_live =
        emitter_int(env, emitter, &sym.emitter_time_to_live, ids.emitter_time_to_live)?;
    let flags = emitter_int(env, emitter, &sym.emitter_flags, ids.emitter_flags)?;

    env.call_method_unchecked(
        emitter,
        ids.signal_emitter_signal.get(),
        sym.signal_emitter_signal.ty.clone(),
        &[
            JValue::Object(source),
            JValue::Object(destination),
            JValue::Int(session_id),
            JValue::Object(interface_name.into()),
            JValue::Object(signal_name.into()),
            JValue::Object(arg_signature.into()),
            JValue::Object(args),
            JValue::Int(time_to_live),
            JValue::Int(flags),
            JValue::Object(msg_context),
        ],
    )?
    .v()?;
    Ok(())
}

/// Sets a property of a remote object through its `ProxyBusObject`.
pub fn set_property<'env>(
    env: &JniEnv<'env>,
    bus: JObject<'env>,
    proxy: JObject<'env>,
    interface_name: JString<'env>,
    property_name: JString<'env>,
    signature: JString<'env>,
    value: JObject<'env>,
) -> Result<()> {
    env.call_method_unchecked(
        proxy,
        env.ids().proxy_set_property.get(),
        SYMBOLS.proxy_set_property.ty.clone(),
        &[
            JValue::Object(bus),
            JValue::Object(interface_name.into()),
            JValue::Object(property_name.into()),
            JValue::Object(signature.into()),
            JValue::Object(value),
        ],
    )?
    .v()?;
    Ok(())
}

/// Reads a property of a remote object through its `ProxyBusObject`, returning the `Variant`
/// holding its value.
pub fn get_property<'env>(
    env: &JniEnv<'env>,
    bus: JObject<'env>,
    proxy: JObject<'env>,
    interface_name: JString<'env>,
    property_name: JString<'env>,
) -> Result<JObject<'env>> {
    let result = env.call_method_unchecked(
        proxy,
        env.ids().proxy_get_property.get(),
        SYMBOLS.proxy_get_property.ty.clone(),
        &[
            JValue::Object(bus),
            JValue::Object(interface_name.into()),
            JValue::Object(property_name.into()),
        ],
    )?;
    Ok(result.l()?)
}
