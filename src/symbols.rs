//! The classes, methods and fields of the AllJoyn Java binding that this library binds to.
//!
//! Every descriptor here must match the Java class library exactly, or `JNI_OnLoad` fails.

use jni::signature::JavaType;
use triumph_signatures::{ClassName, MethodName, MethodSig, Type};

const BUS: &[&str] = &["org", "alljoyn", "bus"];
const LANG: &[&str] = &["java", "lang"];
const REFLECT: &[&str] = &["java", "lang", "reflect"];
const TRIUMPH: &[&str] = &["org", "alljoyn", "triumph"];

pub const MSG_ARG: ClassName<'static> = ClassName::new(BUS, "MsgArg");
pub const SIGNATURE: ClassName<'static> = ClassName::new(BUS, "Signature");
pub const PROXY_BUS_OBJECT: ClassName<'static> = ClassName::new(BUS, "ProxyBusObject");
pub const SIGNAL_EMITTER: ClassName<'static> = ClassName::new(BUS, "SignalEmitter");
pub const OBJECT_CLASS: ClassName<'static> = ClassName::new(LANG, "Object");

/// The Java class whose `native` methods this library implements.
pub const ADAPTER_CLASS: ClassName<'static> = ClassName::new(TRIUMPH, "TriumphCPPAdapter");

const BUS_ATTACHMENT: Type<'static> = Type::class(BUS, "BusAttachment");
const BUS_OBJECT: Type<'static> = Type::class(BUS, "BusObject");
const MESSAGE_CONTEXT: Type<'static> = Type::class(BUS, "MessageContext");
const VARIANT: Type<'static> = Type::class(BUS, "Variant");
const STRING: Type<'static> = Type::class(LANG, "String");
const OBJECT: Type<'static> = Type::of(OBJECT_CLASS);
const REFLECT_TYPE: Type<'static> = Type::class(REFLECT, "Type");
const REFLECT_METHOD: Type<'static> = Type::class(REFLECT, "Method");

/// A method or field looked up by name and descriptor.
#[derive(Debug, Clone)]
pub struct Member {
    pub name: &'static str,
    pub sig: String,
    /// The type of a field, or the return type of a method.
    pub ty: JavaType,
}
impl Member {
    fn method(name: &'static str, sig: &MethodSig<'_>) -> Self {
        Member { name, sig: sig.display_jni().to_string(), ty: JavaType::from(&sig.ret_ty) }
    }
    fn field(name: &'static str, ty: &Type<'_>) -> Self {
        Member { name, sig: ty.display_jni().to_string(), ty: JavaType::from(ty) }
    }
}

const MARSHAL_PARAMS: &[Type<'static>] = &[Type::Long, STRING, OBJECT];
const MARSHAL_ARRAY_PARAMS: &[Type<'static>] = &[Type::Long, STRING, OBJECT.array()];
const UNMARSHAL_PARAMS: &[Type<'static>] = &[Type::Long, REFLECT_TYPE];
const UNMARSHAL_ARRAY_PARAMS: &[Type<'static>] = &[REFLECT_METHOD, Type::Long];
const SPLIT_PARAMS: &[Type<'static>] = &[STRING];
const METHOD_CALL_PARAMS: &[Type<'static>] = &[
    BUS_ATTACHMENT,
    STRING,
    STRING,
    STRING,
    REFLECT_TYPE,
    OBJECT.array(),
    Type::Int,
    Type::Int,
];
const SET_PROPERTY_PARAMS: &[Type<'static>] = &[BUS_ATTACHMENT, STRING, STRING, STRING, OBJECT];
const GET_PROPERTY_PARAMS: &[Type<'static>] = &[BUS_ATTACHMENT, STRING, STRING];
const SIGNAL_PARAMS: &[Type<'static>] = &[
    BUS_OBJECT,
    STRING,
    Type::Int,
    STRING,
    STRING,
    STRING,
    OBJECT.array(),
    Type::Int,
    Type::Int,
    MESSAGE_CONTEXT,
];

/// The rendered names and descriptors of every bus symbol, in the order they are resolved.
#[derive(Debug)]
pub struct BusSymbols {
    pub msg_arg: String,
    pub msg_arg_marshal: Member,
    pub msg_arg_marshal_array: Member,
    pub msg_arg_unmarshal: Member,
    pub msg_arg_unmarshal_array: Member,

    pub signature: String,
    pub signature_split: Member,

    pub proxy_bus_object: String,
    pub proxy_method_call: Member,
    pub proxy_set_property: Member,
    pub proxy_get_property: Member,
    pub proxy_reply_timeout: Member,
    pub proxy_flags: Member,

    pub signal_emitter: String,
    pub signal_emitter_signal: Member,
    pub emitter_source: Member,
    pub emitter_destination: Member,
    pub emitter_session_id: Member,
    pub emitter_time_to_live: Member,
    pub emitter_flags: Member,
    pub emitter_msg_context: Member,

    pub object: String,
}
impl BusSymbols {
    fn new() -> Self {
        BusSymbols {
            msg_arg: MSG_ARG.display_internal().to_string(),
            msg_arg_marshal: Member::method("marshal", &MethodSig::void(MARSHAL_PARAMS)),
            msg_arg_marshal_array: Member::method(
                "marshal",
                &MethodSig::void(MARSHAL_ARRAY_PARAMS),
            ),
            msg_arg_unmarshal: Member::method(
                "unmarshal",
                &MethodSig::new(OBJECT, UNMARSHAL_PARAMS),
            ),
            msg_arg_unmarshal_array: Member::method(
                "unmarshal",
                &MethodSig::new(OBJECT.array(), UNMARSHAL_ARRAY_PARAMS),
            ),

            signature: SIGNATURE.display_internal().to_string(),
            signature_split: Member::method("split", &MethodSig::new(STRING.array(), SPLIT_PARAMS)),

            proxy_bus_object: PROXY_BUS_OBJECT.display_internal().to_string(),
            proxy_method_call: Member::method(
                "methodCall",
                &MethodSig::new(OBJECT, METHOD_CALL_PARAMS),
            ),
            proxy_set_property: Member::method(
                "setProperty",
                &MethodSig::void(SET_PROPERTY_PARAMS),
            ),
            proxy_get_property: Member::method(
                "getProperty",
                &MethodSig::new(VARIANT, GET_PROPERTY_PARAMS),
            ),
            proxy_reply_timeout: Member::field("replyTimeoutMsecs", &Type::Int),
            proxy_flags: Member::field("flags", &Type::Int),

            signal_emitter: SIGNAL_EMITTER.display_internal().to_string(),
            signal_emitter_signal: Member::method("signal", &MethodSig::void(SIGNAL_PARAMS)),
            emitter_source: Member::field("source", &BUS_OBJECT),
            emitter_destination: Member::field("destination", &STRING),
            emitter_session_id: Member::field("sessionId", &Type::Int),
            emitter_time_to_live: Member::field("timeToLive", &Type::Int),
            emitter_flags: Member::field("flags", &Type::Int),
            emitter_msg_context: Member::field("msgContext", &MESSAGE_CONTEXT),

            object: OBJECT_CLASS.display_internal().to_string(),
        }
    }
}

lazy_static::lazy_static! {
    /// The bus symbol table.
    pub static ref SYMBOLS: BusSymbols = BusSymbols::new();
}

/// The `native` methods of [`ADAPTER_CLASS`] implemented by this library.
pub const ADAPTER_NATIVES: &[&str] =
    &["callMethod", "splitSignature", "emitSignal", "setProperty", "getPropertyPriv"];

/// Returns the JNI export symbol the JVM binds a `native` method of [`ADAPTER_CLASS`] to.
pub fn adapter_export_name(method: &'static str) -> String {
    MethodName::new(ADAPTER_CLASS, method).display_jni_export().to_string()
}
