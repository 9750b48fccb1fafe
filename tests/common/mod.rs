//! A JVM with stub `org.alljoyn.bus` classes, for tests that go through the exported natives.

#![allow(dead_code)]

use jni::{
    errors::Error,
    objects::{JObject, JString, JValue},
    sys::jint,
    InitArgsBuilder, JNIEnv, JNIVersion, JavaVM, NativeMethod,
};
use std::{
    env,
    ffi::c_void,
    fs,
    path::{Path, PathBuf},
    process::Command,
    ptr,
};
use triumph_jni::exports::*;

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

pub const ADAPTER: &str = "org/alljoyn/triumph/TriumphCPPAdapter";
pub const ILLEGAL_STATE: &str = "java.lang.IllegalStateException";
pub const NOT_INITIALIZED: &str = "native library has not been initialized";

pub const CALL_METHOD: (&str, &str) = (
    "callMethod",
    "(Lorg/alljoyn/bus/BusAttachment;Lorg/alljoyn/bus/ProxyBusObject;Ljava/lang/String;\
     Ljava/lang/String;Ljava/lang/String;Ljava/lang/reflect/Type;[Ljava/lang/Object;)\
     Ljava/lang/Object;",
);
pub const SPLIT_SIGNATURE: (&str, &str) =
    ("splitSignature", "(Ljava/lang/String;)[Ljava/lang/String;");
pub const EMIT_SIGNAL: (&str, &str) = (
    "emitSignal",
    "(Lorg/alljoyn/bus/SignalEmitter;Ljava/lang/String;Ljava/lang/String;Ljava/lang/String;\
     [Ljava/lang/Object;)V",
);
pub const SET_PROPERTY: (&str, &str) = (
    "setProperty",
    "(Lorg/alljoyn/bus/BusAttachment;Lorg/alljoyn/bus/ProxyBusObject;Ljava/lang/String;\
     Ljava/lang/String;Ljava/lang/String;Ljava/lang/Object;)V",
);
pub const GET_PROPERTY_PRIV: (&str, &str) = (
    "getPropertyPriv",
    "(Lorg/alljoyn/bus/BusAttachment;Lorg/alljoyn/bus/ProxyBusObject;Ljava/lang/String;\
     Ljava/lang/String;)Lorg/alljoyn/bus/Variant;",
);

fn java_sources(dir: &Path, sources: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            java_sources(&path, sources);
        } else if path.extension().map_or(false, |ext| ext == "java") {
            sources.push(path);
        }
    }
}

/// Compiles the stub classes, replacing those with a counterpart in the `variant` directory.
fn compile_fixture(variant: Option<&str>) -> PathBuf {
    let root = Path::new(FIXTURES);
    let mut sources = Vec::new();
    java_sources(&root.join("java"), &mut sources);
    if let Some(variant) = variant {
        let mut replacements = Vec::new();
        java_sources(&root.join(variant), &mut replacements);
        sources.retain(|src| replacements.iter().all(|r| r.file_name() != src.file_name()));
        sources.extend(replacements);
    }

    let out = Path::new(env!("CARGO_TARGET_TMPDIR"))
        .join("fixtures")
        .join(variant.unwrap_or("complete"));
    if out.exists() {
        fs::remove_dir_all(&out).unwrap();
    }
    fs::create_dir_all(&out).unwrap();

    let javac = match env::var_os("JAVA_HOME") {
        Some(home) => PathBuf::from(home).join("bin").join("javac"),
        None => PathBuf::from("javac"),
    };
    let status = Command::new(javac)
        .arg("-d")
        .arg(&out)
        .args(&sources)
        .status()
        .expect("could not run javac");
    assert!(status.success(), "javac failed on the test fixtures");
    out
}

fn native(method: (&str, &str), fn_ptr: *mut c_void) -> NativeMethod {
    NativeMethod { name: method.0.into(), sig: method.1.into(), fn_ptr }
}

/// Starts a JVM with the stub classes on its class path, and binds the adapter's `native`
/// methods to this library's exports.
///
/// The library itself is not loaded; see [`load`].
pub fn start_jvm(variant: Option<&str>) -> JavaVM {
    let classes = compile_fixture(variant);
    let args = InitArgsBuilder::new()
        .version(JNIVersion::V8)
        .option(&format!("-Djava.class.path={}", classes.display()))
        .build()
        .unwrap();
    let vm = JavaVM::new(args).unwrap();

    let env = vm.attach_current_thread_permanently().unwrap();
    let natives = [
        native(CALL_METHOD, Java_org_alljoyn_triumph_TriumphCPPAdapter_callMethod as *mut c_void),
        native(
            SPLIT_SIGNATURE,
            Java_org_alljoyn_triumph_TriumphCPPAdapter_splitSignature as *mut c_void,
        ),
        native(EMIT_SIGNAL, Java_org_alljoyn_triumph_TriumphCPPAdapter_emitSignal as *mut c_void),
        native(SET_PROPERTY, Java_org_alljoyn_triumph_TriumphCPPAdapter_setProperty as *mut c_void),
        native(
            GET_PROPERTY_PRIV,
            Java_org_alljoyn_triumph_TriumphCPPAdapter_getPropertyPriv as *mut c_void,
        ),
    ];
    env.register_native_methods(ADAPTER, &natives).unwrap();
    vm
}

pub fn attach(vm: &JavaVM) -> JNIEnv<'_> {
    vm.attach_current_thread_permanently().unwrap()
}

pub fn load(vm: &JavaVM) -> jint {
    JNI_OnLoad(vm.get_java_vm_pointer(), ptr::null_mut())
}

pub fn unload(vm: &JavaVM) {
    JNI_OnUnload(vm.get_java_vm_pointer(), ptr::null_mut())
}

/// Invokes a static method of the adapter class, returning `None` if it threw.
pub fn call_adapter<'a>(
    env: JNIEnv<'a>,
    method: (&str, &str),
    args: &[JValue<'a>],
) -> Option<JValue<'a>> {
    match env.call_static_method(ADAPTER, method.0, method.1, args) {
        Ok(value) => Some(value),
        Err(Error::JavaException) => None,
        Err(e) => panic!("calling {}: {}", method.0, e),
    }
}

/// Splits a signature through the adapter, returning `None` if it threw.
pub fn split_signature(env: JNIEnv<'_>, signature: &str) -> Option<Vec<String>> {
    let parts = call_adapter(env, SPLIT_SIGNATURE, &[JValue::Object(string(env, signature))])?;
    let parts = parts.l().unwrap();
    Some((0..array_len(env, parts)).map(|i| read_string(env, array_element(env, parts, i))).collect())
}

/// Returns the class name and message of the pending exception, clearing it.
pub fn take_exception(env: JNIEnv<'_>) -> Option<(String, String)> {
    if !env.exception_check().unwrap() {
        return None;
    }
    let throwable = env.exception_occurred().unwrap();
    env.exception_clear().unwrap();

    let class = env.get_object_class(throwable).unwrap();
    let name = env.call_method(class, "getName", "()Ljava/lang/String;", &[]).unwrap();
    let message = env.call_method(throwable, "getMessage", "()Ljava/lang/String;", &[]).unwrap();
    Some((read_string(env, name.l().unwrap()), read_string(env, message.l().unwrap())))
}

pub fn exception(class: &str, message: &str) -> Option<(String, String)> {
    Some((class.to_string(), message.to_string()))
}

pub fn string<'a>(env: JNIEnv<'a>, value: &str) -> JObject<'a> {
    env.new_string(value).unwrap().into()
}

pub fn read_string<'a>(env: JNIEnv<'a>, value: JObject<'a>) -> String {
    env.get_string(JString::from(value)).unwrap().into()
}

pub fn new_object<'a>(env: JNIEnv<'a>, class: &str) -> JObject<'a> {
    env.new_object(class, "()V", &[]).unwrap()
}

pub fn object_array<'a>(env: JNIEnv<'a>, items: &[JObject<'a>]) -> JObject<'a> {
    let array = env.new_object_array(items.len() as jint, "java/lang/Object", JObject::null());
    let array = array.unwrap();
    for (i, item) in items.iter().enumerate() {
        env.set_object_array_element(array, i as jint, *item).unwrap();
    }
    JObject::from(array)
}

pub fn array_len<'a>(env: JNIEnv<'a>, array: JObject<'a>) -> jint {
    env.get_array_length(array.into_inner()).unwrap()
}

pub fn array_element<'a>(env: JNIEnv<'a>, array: JObject<'a>, index: jint) -> JObject<'a> {
    env.get_object_array_element(array.into_inner(), index).unwrap()
}

pub fn int_field<'a>(env: JNIEnv<'a>, obj: JObject<'a>, name: &str) -> jint {
    env.get_field(obj, name, "I").unwrap().i().unwrap()
}

pub fn object_field<'a>(env: JNIEnv<'a>, obj: JObject<'a>, name: &str, sig: &str) -> JObject<'a> {
    env.get_field(obj, name, sig).unwrap().l().unwrap()
}

pub fn same<'a>(env: JNIEnv<'a>, a: JObject<'a>, b: JObject<'a>) -> bool {
    env.is_same_object(a, b).unwrap()
}

/// Creates a stub `ProxyBusObject` with the given reply timeout and flags.
pub fn proxy<'a>(env: JNIEnv<'a>, timeout: jint, flags: jint) -> JObject<'a> {
    let args = [JValue::Int(timeout), JValue::Int(flags)];
    env.new_object("org/alljoyn/bus/ProxyBusObject", "(II)V", &args).unwrap()
}

pub fn bus_exception<'a>(env: JNIEnv<'a>, message: &str) -> JObject<'a> {
    let args = [JValue::Object(string(env, message))];
    env.new_object("org/alljoyn/bus/BusException", "(Ljava/lang/String;)V", &args).unwrap()
}

/// Invokes `callMethod` for `Ping` on `org.alljoyn.Bus.Peer`, returning `None` if it threw.
pub fn call_ping<'a>(
    env: JNIEnv<'a>,
    bus: JObject<'a>,
    proxy: JObject<'a>,
    out_type: JObject<'a>,
    args: JObject<'a>,
) -> Option<JObject<'a>> {
    let result = call_adapter(env, CALL_METHOD, &[
        JValue::Object(bus),
        JValue::Object(proxy),
        JValue::Object(string(env, "org.alljoyn.Bus.Peer")),
        JValue::Object(string(env, "Ping")),
        JValue::Object(string(env, "s")),
        JValue::Object(out_type),
        JValue::Object(args),
    ])?;
    Some(result.l().unwrap())
}
