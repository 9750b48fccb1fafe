use triumph_signatures::*;

const TEST_TYPES: &[(Type<'static>, &'static str)] = &[
    (Type::Byte, "B"),
    (Type::Short, "S"),
    (Type::Int, "I"),
    (Type::Long, "J"),
    (Type::Float, "F"),
    (Type::Double, "D"),
    (Type::Boolean, "Z"),
    (Type::Char, "C"),
    (Type::Byte.array_dim(3), "[[[B"),
    (Type::class(&["java", "lang"], "String"), "Ljava/lang/String;"),
    (Type::class(&["java", "lang"], "Object").array(), "[Ljava/lang/Object;"),
    (Type::class(&["org", "alljoyn", "bus"], "MessageContext"), "Lorg/alljoyn/bus/MessageContext;"),
];

#[test]
fn test_display_types_jni() {
    for (ty, jni_ty) in TEST_TYPES {
        assert_eq!(&ty.display_jni().to_string(), jni_ty);
    }
}

#[test]
fn test_parse_types_jni() {
    for (ty, jni_ty) in TEST_TYPES {
        assert_eq!(&Type::parse_jni(jni_ty).unwrap(), ty, "parsing {:?}", jni_ty);
    }
}

#[test]
fn test_primitive_types() {
    assert!(Type::Int.is_primitive());
    assert!(!Type::Int.array().is_primitive());
    assert!(!Type::class(&["java", "lang"], "String").is_primitive());
}

#[test]
fn test_class_names() {
    let name = ClassName::parse_jni("org/alljoyn/bus/ProxyBusObject").unwrap();
    assert_eq!(name, ClassName::new(&["org", "alljoyn", "bus"], "ProxyBusObject"));
    assert_eq!(name.display_internal().to_string(), "org/alljoyn/bus/ProxyBusObject");
    assert_eq!(name.display_jni().to_string(), "Lorg/alljoyn/bus/ProxyBusObject;");

    let bare = ClassName::parse_jni("Bare").unwrap();
    assert!(bare.package.is_empty());
    assert_eq!(bare.display_internal().to_string(), "Bare");
}

#[test]
fn test_display_temporaries() {
    assert_eq!(
        ClassName::new(&["org", "alljoyn", "bus"], "Signature").display_internal().to_string(),
        "org/alljoyn/bus/Signature",
    );
    assert_eq!(Type::Int.array().display_jni().to_string(), "[I");
    assert_eq!(MethodSig::void(&[]).display_jni().to_string(), "()V");
}

#[test]
fn test_borrowed_equals_parsed() {
    let parsed = ClassName::parse_jni("java/lang/reflect/Method").unwrap();
    let borrowed = ClassName::new(&["java", "lang", "reflect"], "Method");
    assert!(matches!(parsed.package, StaticList::Owned(_)));
    assert!(matches!(borrowed.package, StaticList::Borrowed(_)));
    assert_eq!(parsed, borrowed);
}

#[test]
fn test_primitive_descriptors() {
    for ch in "BSIJFDZC".chars() {
        let ty = BasicType::from_descriptor(ch).unwrap();
        assert!(ty.is_primitive());
        assert_eq!(ty.descriptor(), Some(ch));
    }
    assert_eq!(BasicType::from_descriptor('V'), None);
    assert_eq!(BasicType::from_descriptor('L'), None);
    assert_eq!(BasicType::Class(ClassName::new(&[], "Bare")).descriptor(), None);
}
