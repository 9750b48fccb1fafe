use crate::{
    errors::*,
    symbols::{Member, SYMBOLS},
};
use jni::{
    objects::{GlobalRef, JClass, JFieldID, JMethodID, JStaticMethodID},
    sys::{jfieldID, jmethodID},
    JNIEnv,
};

/// A method id that stays valid for as long as its class is not unloaded.
#[derive(Copy, Clone, Debug)]
pub struct MethodId(jmethodID);
impl MethodId {
    pub fn get<'a>(self) -> JMethodID<'a> {
        JMethodID::from(self.0)
    }
}

/// A static method id that stays valid for as long as its class is not unloaded.
#[derive(Copy, Clone, Debug)]
pub struct StaticMethodId(jmethodID);
impl StaticMethodId {
    pub fn get<'a>(self) -> JStaticMethodID<'a> {
        JStaticMethodID::from(self.0)
    }
}

/// A field id that stays valid for as long as its class is not unloaded.
#[derive(Copy, Clone, Debug)]
pub struct FieldId(jfieldID);
impl FieldId {
    pub fn get<'a>(self) -> JFieldID<'a> {
        JFieldID::from(self.0)
    }
}

// Member ids are plain handles into the VM's class metadata and may be used from any thread.
unsafe impl Send for MethodId {}
unsafe impl Sync for MethodId {}
unsafe impl Send for StaticMethodId {}
unsafe impl Sync for StaticMethodId {}
unsafe impl Send for FieldId {}
unsafe impl Sync for FieldId {}

/// The identifiers resolved when the library is loaded into a JVM.
///
/// The classes are held through global references, which keeps them from being unloaded and
/// hence keeps every member id valid until this value is dropped.
pub struct BusIds {
    _msg_arg: GlobalRef,
    pub msg_arg_marshal: StaticMethodId,
    pub msg_arg_marshal_array: StaticMethodId,
    pub msg_arg_unmarshal: StaticMethodId,
    pub msg_arg_unmarshal_array: StaticMethodId,

    signature: GlobalRef,
    pub signature_split: StaticMethodId,

    proxy_bus_object: GlobalRef,
    pub proxy_method_call: MethodId,
    pub proxy_set_property: MethodId,
    pub proxy_get_property: MethodId,

    _signal_emitter: GlobalRef,
    pub signal_emitter_signal: MethodId,
    pub emitter_source: FieldId,
    pub emitter_destination: FieldId,
    pub emitter_session_id: FieldId,
    pub emitter_time_to_live: FieldId,
    pub emitter_flags: FieldId,
    pub emitter_msg_context: FieldId,

    _object: GlobalRef,
}

fn find_class(env: JNIEnv, name: &str, what: &str) -> Result<GlobalRef> {
    match env.find_class(name) {
        Ok(class) if !class.is_null() => Ok(env.new_global_ref(class)?),
        _ => Err(Error::message(format!("Unable to find {}", what))),
    }
}

fn class_of(global: &GlobalRef) -> JClass<'_> {
    JClass::from(global.as_obj())
}

fn method(env: JNIEnv, class: &GlobalRef, member: &Member, what: &str) -> Result<MethodId> {
    match env.get_method_id(class_of(class), member.name, member.sig.as_str()) {
        Ok(id) => Ok(MethodId(id.into_inner())),
        Err(_) => Err(Error::message(format!("Unable to find Method ID for '{}'", what))),
    }
}

fn static_method(
    env: JNIEnv,
    class: &GlobalRef,
    member: &Member,
    what: &str,
) -> Result<StaticMethodId> {
    match env.get_static_method_id(class_of(class), member.name, member.sig.as_str()) {
        Ok(id) => Ok(StaticMethodId(id.into_inner())),
        Err(_) => Err(Error::message(format!("Unable to find Method ID for '{}'", what))),
    }
}

fn field(env: JNIEnv, class: &GlobalRef, member: &Member, owner: &str) -> Result<FieldId> {
    match env.get_field_id(class_of(class), member.name, member.sig.as_str()) {
        Ok(id) => Ok(FieldId(id.into_inner())),
        Err(_) => Err(Error::message(format!(
            "Unable to find Field ID for '{}' field '{}'",
            owner, member.name
        ))),
    }
}

impl BusIds {
    /// Resolves every bus symbol, in order, stopping at the first one that cannot be found.
    pub fn resolve(env: JNIEnv) -> Result<BusIds> {
        let sym = &*SYMBOLS;

        let msg_arg = find_class(env, &sym.msg_arg, "Class MsgArg")?;
        let msg_arg_marshal =
            static_method(env, &msg_arg, &sym.msg_arg_marshal, "MsgArg.marshal")?;
        let msg_arg_marshal_array =
            static_method(env, &msg_arg, &sym.msg_arg_marshal_array, "MsgArg.marshalArray")?;
        let msg_arg_unmarshal =
            static_method(env, &msg_arg, &sym.msg_arg_unmarshal, "MsgArg.unmarshal")?;
        let msg_arg_unmarshal_array =
            static_method(env, &msg_arg, &sym.msg_arg_unmarshal_array, "MsgArg.unmarshalArray")?;

        let signature = find_class(env, &sym.signature, "Class Signature")?;
        let signature_split =
            static_method(env, &signature, &sym.signature_split, "Signature.split")?;

        let proxy_bus_object = find_class(env, &sym.proxy_bus_object, "Class ProxyBusObject")?;
        let proxy_method_call =
            method(env, &proxy_bus_object, &sym.proxy_method_call, "methodCall")?;
        let proxy_set_property =
            method(env, &proxy_bus_object, &sym.proxy_set_property, "setProperty")?;
        let proxy_get_property =
            method(env, &proxy_bus_object, &sym.proxy_get_property, "getProperty")?;

        let signal_emitter = find_class(env, &sym.signal_emitter, "Class SignalEmitter")?;
        let signal_emitter_signal =
            method(env, &signal_emitter, &sym.signal_emitter_signal, "SignalEmitter.signal()")?;
        let emitter_source = field(env, &signal_emitter, &sym.emitter_source, "SignalEmitter")?;
        let emitter_destination =
            field(env, &signal_emitter, &sym.emitter_destination, "SignalEmitter")?;
        let emitter_session_id =
            field(env, &signal_emitter, &sym.emitter_session_id, "SignalEmitter")?;
        let emitter_time_to_live =
            field(env, &signal_emitter, &sym.emitter_time_to_live, "SignalEmitter")?;
        let emitter_flags = field(env, &signal_emitter, &sym.emitter_flags, "SignalEmitter")?;
        let emitter_msg_context =
            field(env, &signal_emitter, &sym.emitter_msg_context, "SignalEmitter")?;

        let object = find_class(env, &sym.object, "Object .class file")?;

        Ok(BusIds {
            _msg_arg: msg_arg,
            msg_arg_marshal,
            msg_arg_marshal_array,
            msg_arg_unmarshal,
            msg_arg_unmarshal_array,
            signature,
            signature_split,
            proxy_bus_object,
            proxy_method_call,
            proxy_set_property,
            proxy_get_property,
            _signal_emitter: signal_emitter,
            signal_emitter_signal,
            emitter_source,
            emitter_destination,
            emitter_session_id,
            emitter_time_to_live,
            emitter_flags,
            emitter_msg_context,
            _object: object,
        })
    }

    pub fn signature_class(&self) -> JClass<'_> {
        class_of(&self.signature)
    }
    pub fn proxy_bus_object_class(&self) -> JClass<'_> {
        class_of(&self.proxy_bus_object)
    }
}
