use crate::*;
use jni::signature::{JavaType, Primitive};

impl<'a, 'b> From<&'b BasicType<'a>> for JavaType {
    fn from(ty: &'b BasicType<'a>) -> Self {
        match ty {
            BasicType::Byte => JavaType::Primitive(Primitive::Byte),
            BasicType::Short => JavaType::Primitive(Primitive::Short),
            BasicType::Int => JavaType::Primitive(Primitive::Int),
            BasicType::Long => JavaType::Primitive(Primitive::Long),
            BasicType::Float => JavaType::Primitive(Primitive::Float),
            BasicType::Double => JavaType::Primitive(Primitive::Double),
            BasicType::Boolean => JavaType::Primitive(Primitive::Boolean),
            BasicType::Char => JavaType::Primitive(Primitive::Char),
            BasicType::Class(class) => JavaType::Object(class.display_internal().to_string()),
        }
    }
}
impl<'a, 'b> From<&'b Type<'a>> for JavaType {
    fn from(ty: &'b Type<'a>) -> Self {
        let mut java_ty = JavaType::from(&ty.basic_sig);
        for _ in 0..ty.array_dim {
            java_ty = JavaType::Array(Box::new(java_ty));
        }
        java_ty
    }
}
impl<'a, 'b> From<&'b ReturnType<'a>> for JavaType {
    fn from(ty: &'b ReturnType<'a>) -> Self {
        match ty {
            ReturnType::Void => JavaType::Primitive(Primitive::Void),
            ReturnType::Ty(ty) => JavaType::from(ty),
        }
    }
}
