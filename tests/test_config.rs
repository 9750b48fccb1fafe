use triumph_jni::{bus::*, config::*};

// Settings are process-wide, so everything touching them runs in one test.
#[test]
fn test_settings() {
    assert_eq!(get_default_exception_class(), "java/lang/IllegalStateException");
    assert_eq!(get_default_reply_timeout(), DEFAULT_CALL_TIMEOUT);
    assert_eq!(get_default_call_flags(), DEFAULT_CALL_FLAGS);

    set_default_reply_timeout(1000);
    assert_eq!(effective_reply_timeout(0), 1000);
    assert_eq!(effective_reply_timeout(300), 300);
    set_default_reply_timeout(0);
    set_default_reply_timeout(-20);
    assert_eq!(get_default_reply_timeout(), 1000);

    set_default_call_flags(4);
    assert_eq!(effective_call_flags(-1), 4);
    assert_eq!(effective_call_flags(0), 0);
    set_default_call_flags(-3);
    assert_eq!(get_default_call_flags(), 4);
    set_default_call_flags(0);
    assert_eq!(get_default_call_flags(), 0);

    set_default_exception_class("java/lang/RuntimeException");
    assert_eq!(get_default_exception_class(), "java/lang/RuntimeException");
    set_default_exception_class("java.lang.IllegalArgumentException");
    set_default_exception_class("");
    set_default_exception_class("Ljava/lang/Error;");
    assert_eq!(get_default_exception_class(), "java/lang/RuntimeException");

    set_default_reply_timeout(DEFAULT_CALL_TIMEOUT);
    set_default_call_flags(DEFAULT_CALL_FLAGS);
    set_default_exception_class("java/lang/IllegalStateException");
    assert_eq!(effective_reply_timeout(-1), 25000);
}
