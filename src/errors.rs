use backtrace::Backtrace;
use jni::JNIEnv;
use std::{
    borrow::Cow,
    fmt::{Display, Formatter},
    panic::Location,
};
use thiserror::Error;

// internal reexports
pub use std::{error::Error as ErrorTrait, result::Result as StdResult};

/// The error type used for `triumph_jni`.
///
/// This error does not implement [`Error`](`ErrorTrait`) to allow a `From` implementation for any
/// standard error.
#[derive(Debug)]
pub struct Error(Box<ErrorData>);

#[derive(Debug)]
struct ErrorData {
    location: &'static Location<'static>,
    data: ErrorType,
    backtrace: Option<Backtrace>,
    override_except_class: Option<Cow<'static, str>>,
}

#[derive(Error, Debug)]
enum ErrorType {
    #[error("Internal error: {0}")]
    Wrapped(Box<dyn ErrorTrait + 'static>),
    #[error("Internal error: {0}")]
    Error(Cow<'static, str>),
    #[error("{0}")]
    Message(Cow<'static, str>),
    #[error("Rust code panicked: {0}")]
    Panicking(Cow<'static, str>),
}
impl ErrorType {
    fn wrapped(&self) -> Option<&(dyn ErrorTrait + 'static)> {
        match self {
            ErrorType::Wrapped(err) => Some(err.as_ref()),
            _ => None,
        }
    }
    fn is_validation_message(&self) -> bool {
        matches!(self, ErrorType::Message(_))
    }
}

impl Error {
    #[inline(never)]
    #[track_caller]
    fn raw_new(tp: ErrorType, request_backtrace: bool) -> Self {
        let backtrace = if request_backtrace { Some(Backtrace::new_unresolved()) } else { None };
        Error(Box::new(ErrorData {
            location: Location::caller(),
            data: tp,
            backtrace,
            override_except_class: None,
        }))
    }

    /// Creates a new `Error` with an internal error message.
    #[inline(never)]
    #[track_caller]
    pub fn new(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::raw_new(ErrorType::Error(msg.into()), true)
    }

    /// Creates a new `Error` with an error message.
    ///
    /// Unlike [`Error::new`], this does not record a backtrace, and will directly use the text
    /// as the cause of any generated exception.
    #[inline(never)]
    #[track_caller]
    pub fn message(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::raw_new(ErrorType::Message(msg.into()), false)
    }

    /// Creates a new `Error` from a Rust panic.
    #[inline(never)]
    #[track_caller]
    pub(crate) fn panicked(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::raw_new(ErrorType::Panicking(msg.into()), false)
    }

    /// Wraps any error in an `Error`.
    ///
    /// JNI errors reporting a pending Java exception do not record a backtrace, as the Java
    /// exception already carries one.
    #[inline(never)]
    #[track_caller]
    pub fn wrap<T: ErrorTrait + 'static>(err: T) -> Self {
        let is_exception = matches!(
            (&err as &(dyn ErrorTrait + 'static)).downcast_ref::<jni::errors::Error>(),
            Some(jni::errors::Error::JavaException)
        );
        Self::raw_new(ErrorType::Wrapped(Box::new(err)), !is_exception)
    }

    /// Catches a panic and converts it to an `Error`.
    pub fn catch_panic<R>(func: impl FnOnce() -> R) -> Result<R> {
        crate::internal::panicking::catch_panic(func)
    }

    /// Returns whether this error was caused by a Java exception that is still pending in the
    /// JVM, such as a `BusException` thrown by a forwarded call.
    pub fn is_java_exception(&self) -> bool {
        matches!(
            self.source().and_then(|err| err.downcast_ref::<jni::errors::Error>()),
            Some(jni::errors::Error::JavaException)
        )
    }

    /// Emits an error into an [`JNIEnv`]
    ///
    /// A Java exception that is already pending because of this error is rethrown unchanged.
    /// Any other pending exception (for example the `NoSuchFieldError` left behind by a failed
    /// lookup) is cleared and replaced.
    pub fn emit_error(&self, env: &JNIEnv, exception_class: &str) -> Result<()> {
        if self.is_java_exception() && env.exception_check()? {
            return Ok(());
        }
        if env.exception_check()? {
            env.exception_clear()?;
        }

        let class = match &self.0.override_except_class {
            Some(x) => x.as_ref(),
            None => exception_class,
        };
        log::debug!("throwing {}: {}", class, self);
        env.throw_new(class, self.to_string())?;
        Ok(())
    }

    /// Sets the class used when emitting this error as an exception to JNI.
    ///
    /// The class is given as an JNI internal name.
    #[inline(never)]
    pub fn set_exception_class(mut self, class: impl Into<Cow<'static, str>>) -> Self {
        self.0.override_except_class = Some(class.into());
        self
    }

    /// Returns the exception class override set on this error, if any.
    pub fn exception_class(&self) -> Option<&str> {
        self.0.override_except_class.as_deref()
    }

    /// Returns the cause of this error.
    pub fn source(&self) -> Option<&(dyn ErrorTrait + 'static)> {
        self.0.data.wrapped()
    }

    /// Returns the backtrace for this error, resolving its symbols.
    pub fn backtrace(&self) -> Option<Backtrace> {
        self.0.backtrace.as_ref().map(|bt| {
            let mut bt = bt.clone();
            bt.resolve();
            bt
        })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.data.is_validation_message() {
            Display::fmt(&self.0.data, f)
        } else {
            write!(
                f,
                "{} (at {}:{})",
                self.0.data,
                self.0.location.file(),
                self.0.location.line()
            )
        }
    }
}
impl<T: ErrorTrait + 'static> From<T> for Error {
    #[track_caller]
    fn from(t: T) -> Self {
        Error::wrap(t)
    }
}

/// The result type used for `triumph_jni`.
pub type Result<T> = StdResult<T, Error>;

/// Returns from the current function with an internal [`struct@Error`].
///
/// This requires the function return a [`Result`], and uses the same format as [`format!`].
#[macro_export]
macro_rules! jni_bail {
    ($($tt:tt)*) => {
        return ::std::result::Result::Err($crate::Error::new(::std::format!($($tt)*)))
    }
}

/// Returns from the current function with an internal [`struct@Error`], if a precondition fails.
///
/// This requires the function return a [`Result`], and uses the same format as [`assert!`].
#[macro_export]
macro_rules! jni_assert {
    ($condition:expr, $($tt:tt)*) => {
        if !$condition {
            $crate::jni_bail!($($tt)*)
        }
    }
}

/// Returns from the current function with an [`struct@Error`]. Use this function for exceptions
/// that are meant to be thrown directly to Java code.
///
/// This requires the function return a [`Result`], and uses the same format as [`format!`].
///
/// Optionally, you may add an initial argument starting with @ to set the exception class. For
/// example:
///
/// ```rust
/// # use triumph_jni::*;
/// # fn test() -> Result<u32> {
/// jni_throw!(@"java/lang/IllegalStateException", "Unable to find 'flags' field in ProxyBusObject")
/// # }
/// ```
#[macro_export]
macro_rules! jni_throw {
    (@ $exception_class:literal) => {
        return ::std::result::Result::Err(
            $crate::Error::message("").set_exception_class($exception_class)
        )
    };
    (@ $exception_class:literal, $($tt:tt)*) => {
        return ::std::result::Result::Err(
            $crate::Error::message(::std::format!($($tt)*)).set_exception_class($exception_class)
        )
    };
    ($($tt:tt)*) => {
        return ::std::result::Result::Err($crate::Error::message(::std::format!($($tt)*)))
    };
}
