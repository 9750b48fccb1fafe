use crate::*;
use std::fmt::{Display, Formatter, Write};

/// Escapes a single name component for use in a JNI export symbol.
struct DisplayMangled<'a>(&'a str);
impl<'a> Display for DisplayMangled<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for char in self.0.chars() {
            match char {
                'a'..='z' | 'A'..='Z' | '0'..='9' => f.write_char(char)?,
                '_' => f.write_str("_1")?,
                ';' => f.write_str("_2")?,
                '[' => f.write_str("_3")?,
                _ => {
                    let mut buf = [0u16; 2];
                    for unit in char.encode_utf16(&mut buf) {
                        write!(f, "_0{:04x}", unit)?;
                    }
                }
            }
        }
        Ok(())
    }
}

struct DisplayJniClassName<'a>(&'a ClassName<'a>);
impl<'a> Display for DisplayJniClassName<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for package_name in self.0.package.iter() {
            Display::fmt(&DisplayMangled(package_name), f)?;
            f.write_char('_')?;
        }
        Display::fmt(&DisplayMangled(self.0.name), f)
    }
}
impl<'a> ClassName<'a> {
    /// Displays this class as the class portion of a JNI export symbol name.
    pub fn display_jni_export(&'a self) -> impl Display + 'a {
        DisplayJniClassName(self)
    }
}

struct DisplayJniExport<'a>(&'a MethodName<'a>);
impl<'a> Display for DisplayJniExport<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Java_")?;
        Display::fmt(&self.0.class.display_jni_export(), f)?;
        f.write_char('_')?;
        Display::fmt(&DisplayMangled(self.0.name), f)
    }
}
impl<'a> MethodName<'a> {
    /// Displays this method as the short JNI export symbol name the JVM looks up when binding
    /// a `native` method.
    pub fn display_jni_export(&'a self) -> impl Display + 'a {
        DisplayJniExport(self)
    }
}
