#![deny(unused_must_use)]

//! The native half of the Triumph AllJoyn explorer.
//!
//! `TriumphCPPAdapter` declares a handful of `native` methods that reach into non-public parts of
//! the AllJoyn Java binding. This library implements them by resolving the binding's classes,
//! methods and fields once, when the JVM loads it, and forwarding each call to the matching
//! binding method.

#[macro_use]
mod errors;

mod adapter;
mod bus_ids;
mod conversions;
mod globals;
mod internal;
mod jni_env;

pub mod exports;
pub mod symbols;

pub use errors::{Error, Result};
pub use jni_env::JniEnv;

/// The forwarding operations, callable from Rust with an initialized [`JniEnv`].
pub mod bus {
    pub use crate::{
        adapter::{
            call_method, effective_call_flags, effective_reply_timeout, emit_signal,
            get_property, set_property, split_signature,
        },
        bus_ids::{BusIds, FieldId, MethodId, StaticMethodId},
    };
}

/// Process-wide settings.
pub mod config {
    pub use crate::globals::{
        get_default_call_flags, get_default_exception_class, get_default_reply_timeout,
        set_default_call_flags, set_default_exception_class, set_default_reply_timeout,
        DEFAULT_CALL_FLAGS, DEFAULT_CALL_TIMEOUT,
    };
}

#[doc(inline)]
/// The module containing types that represent Java type signatures.
pub use triumph_signatures as signatures;
