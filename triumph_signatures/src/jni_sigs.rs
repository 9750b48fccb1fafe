use crate::*;
use pest::error::Error;
use pest_consume::{match_nodes, Parser};
use std::fmt::{Display, Formatter, Result as FmtResult, Write};

#[derive(Parser)]
#[grammar = "jni_signature.pest"]
struct JniParser;

/// The error returned when a JNI descriptor cannot be parsed.
pub type ParseError = Error<Rule>;

type Result<T> = std::result::Result<T, ParseError>;
type Node<'i> = pest_consume::Node<'i, Rule, ()>;

#[pest_consume::parser]
impl JniParser {
    fn path(input: Node<'_>) -> Result<ClassName<'_>> {
        let mut components: Vec<&str> = input.as_str().split('/').collect();
        match components.pop() {
            Some(name) => Ok(ClassName::new_owned(&components, name)),
            None => Err(input.error("class name has no components")),
        }
    }

    fn ty(input: Node<'_>) -> Result<Type<'_>> {
        Ok(match_nodes!(input.children();
            [ty_dims(dims), ty_prim(prim)] => Type::new(prim).array_dim(dims),
            [ty_dims(dims), ty_class(class)] => Type::of(class).array_dim(dims),
        ))
    }
    fn ty_dims(input: Node<'_>) -> Result<usize> {
        Ok(input.as_str().len())
    }
    fn ty_prim(input: Node<'_>) -> Result<BasicType<'_>> {
        let prim = input.as_str().chars().next().and_then(BasicType::from_descriptor);
        prim.ok_or_else(|| input.error("not a primitive type"))
    }
    fn ty_class(input: Node<'_>) -> Result<ClassName<'_>> {
        Ok(match_nodes!(input.children();
            [path(path)] => path,
        ))
    }
    fn ty_void(_input: Node<'_>) -> Result<()> {
        Ok(())
    }

    fn sig(input: Node<'_>) -> Result<MethodSig<'_>> {
        Ok(match_nodes!(input.children();
            [ty(params).., sig_ret(ret_ty)] => MethodSig {
                ret_ty,
                params: StaticList::from(params.collect::<Vec<_>>()),
            },
        ))
    }
    fn sig_ret(input: Node<'_>) -> Result<ReturnType<'_>> {
        Ok(match_nodes!(input.children();
            [ty_void(_)] => ReturnType::Void,
            [ty(ty)] => ReturnType::Ty(ty),
        ))
    }

    fn full_ty(input: Node<'_>) -> Result<Type<'_>> {
        Ok(match_nodes!(input.children();
            [ty(ty), EOI(_)] => ty,
        ))
    }
    fn full_sig(input: Node<'_>) -> Result<MethodSig<'_>> {
        Ok(match_nodes!(input.children();
            [sig(sig), EOI(_)] => sig,
        ))
    }
    fn full_path(input: Node<'_>) -> Result<ClassName<'_>> {
        Ok(match_nodes!(input.children();
            [path(path), EOI(_)] => path,
        ))
    }
    #[allow(non_snake_case)]
    fn EOI(_input: Node<'_>) -> Result<()> {
        Ok(())
    }
}

impl<'a> MethodSig<'a> {
    /// Parses a method descriptor, such as `(Ljava/lang/String;)[Ljava/lang/String;`.
    pub fn parse_jni(source: &'a str) -> Result<Self> {
        JniParser::full_sig(JniParser::parse(Rule::full_sig, source)?.single()?)
    }
}
impl<'a> Type<'a> {
    /// Parses a field descriptor, such as `[Ljava/lang/Object;`.
    pub fn parse_jni(source: &'a str) -> Result<Self> {
        JniParser::full_ty(JniParser::parse(Rule::full_ty, source)?.single()?)
    }
}
impl<'a> ClassName<'a> {
    /// Parses a class name from a JNI internal name, such as `java/lang/String`.
    pub fn parse_jni(source: &'a str) -> Result<Self> {
        JniParser::full_path(JniParser::parse(Rule::full_path, source)?.single()?)
    }
}

/// Values that can be written in JNI descriptor syntax.
trait WriteJni {
    fn write_jni(&self, f: &mut Formatter<'_>) -> FmtResult;
}

struct DisplayJni<'a, T>(&'a T);
impl<'a, T: WriteJni> Display for DisplayJni<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.write_jni(f)
    }
}

struct DisplayInternal<'a>(&'a ClassName<'a>);
impl<'a> Display for DisplayInternal<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for component in self.0.package.iter() {
            f.write_str(component)?;
            f.write_char('/')?;
        }
        f.write_str(self.0.name)
    }
}

impl<'a> WriteJni for MethodSig<'a> {
    fn write_jni(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('(')?;
        for param in self.params.iter() {
            param.write_jni(f)?;
        }
        f.write_char(')')?;
        self.ret_ty.write_jni(f)
    }
}
impl<'a> WriteJni for ReturnType<'a> {
    fn write_jni(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ReturnType::Void => f.write_char('V'),
            ReturnType::Ty(ty) => ty.write_jni(f),
        }
    }
}
impl<'a> WriteJni for Type<'a> {
    fn write_jni(&self, f: &mut Formatter<'_>) -> FmtResult {
        for _ in 0..self.array_dim {
            f.write_char('[')?;
        }
        self.basic_sig.write_jni(f)
    }
}
impl<'a> WriteJni for BasicType<'a> {
    fn write_jni(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            BasicType::Class(class) => class.write_jni(f),
            prim => match prim.descriptor() {
                Some(ch) => f.write_char(ch),
                None => unreachable!(),
            },
        }
    }
}
impl<'a> WriteJni for ClassName<'a> {
    fn write_jni(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "L{};", DisplayInternal(self))
    }
}

impl<'a> MethodSig<'a> {
    /// Displays this object in JNI descriptor syntax.
    pub fn display_jni(&'a self) -> impl Display + 'a {
        DisplayJni(self)
    }
}
impl<'a> ReturnType<'a> {
    /// Displays this object in JNI descriptor syntax.
    pub fn display_jni(&'a self) -> impl Display + 'a {
        DisplayJni(self)
    }
}
impl<'a> Type<'a> {
    /// Displays this object in JNI descriptor syntax.
    pub fn display_jni(&'a self) -> impl Display + 'a {
        DisplayJni(self)
    }
}
impl<'a> BasicType<'a> {
    /// Displays this object in JNI descriptor syntax.
    pub fn display_jni(&'a self) -> impl Display + 'a {
        DisplayJni(self)
    }
}
impl<'a> ClassName<'a> {
    /// Displays this object in JNI descriptor syntax.
    pub fn display_jni(&'a self) -> impl Display + 'a {
        DisplayJni(self)
    }

    /// Displays this object as a JNI internal name, the form accepted by `FindClass`.
    pub fn display_internal(&'a self) -> impl Display + 'a {
        DisplayInternal(self)
    }
}
