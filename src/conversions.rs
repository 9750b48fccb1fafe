use jni::{objects::JObject, sys::jobject};

/// A value returned from a native method to the JVM.
pub trait JniReturn {
    /// The raw type used in the exported function signature.
    type JavaType;

    /// Converts the value into its raw JNI form.
    fn into_java(self) -> Self::JavaType;

    /// Returns the closest thing to a null value in this type. Used as a return type for an JNI
    /// function after throwing an exception.
    fn null_ret() -> Self::JavaType;
}

impl JniReturn for () {
    type JavaType = ();
    fn into_java(self) {}
    fn null_ret() {}
}

impl<'env> JniReturn for JObject<'env> {
    type JavaType = jobject;
    fn into_java(self) -> jobject {
        self.into_inner()
    }
    fn null_ret() -> jobject {
        std::ptr::null_mut()
    }
}
