// vkscript
//
// Copyright 2023 Neil Roberts
//
// Permission is hereby granted, free of charge, to any person obtaining a
// copy of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense,
// and/or sell copies of the Software, and to permit persons to whom the
// Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice (including the next
// paragraph) shall be included in all copies or substantial portions of the
// Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.  IN NO EVENT SHALL
// THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
// DEALINGS IN THE SOFTWARE.

use crate::tokenizer::{Kind as TokenKind, Token};
use serde::Serialize;
use std::fmt;

/// The component type of a [Value].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BaseType {
    SInt,
    UInt,
    Float,
}

/// A single number parsed from a script, stored with the width that
/// its declared type asked for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
}

macro_rules! cast_fn {
    ($func:ident, $t:ty) => {
        pub fn $func(self) -> $t {
            match self {
                Value::I8(v) => v as $t,
                Value::I16(v) => v as $t,
                Value::I32(v) => v as $t,
                Value::I64(v) => v as $t,
                Value::U8(v) => v as $t,
                Value::U16(v) => v as $t,
                Value::U32(v) => v as $t,
                Value::U64(v) => v as $t,
                Value::F32(v) => v as $t,
                Value::F64(v) => v as $t,
            }
        }
    };
}

impl Value {
    /// Converts the token into a value of the given base type and bit
    /// width. Integer types accept decimal and hex integers. Float
    /// types accept decimal integers and doubles but not hex. Returns
    /// `None` if the token can’t be used for the type.
    ///
    /// Widths that aren’t a power of two are stored in the next size
    /// up, so a 24-bit component becomes a 32-bit value. 16-bit floats
    /// are stored as `F32`.
    ///
    /// Integers that don’t fit the width wrap around like an `as` cast,
    /// so `300` as an 8-bit unsigned value is `U8(44)`. There is no
    /// range check here.
    pub fn from_token(
        token: &Token,
        base_type: BaseType,
        bits: usize,
    ) -> Option<Value> {
        match base_type {
            BaseType::Float => {
                let v = match token.kind {
                    TokenKind::Integer(v) => v as f64,
                    TokenKind::Double(v) => v,
                    _ => return None,
                };

                match bits {
                    1..=32 => Some(Value::F32(v as f32)),
                    33..=64 => Some(Value::F64(v)),
                    _ => None,
                }
            },
            BaseType::SInt | BaseType::UInt => {
                let v = match token.kind {
                    TokenKind::Integer(v) => v,
                    TokenKind::Hex(v) => v as i64,
                    _ => return None,
                };

                let signed = base_type == BaseType::SInt;

                match (signed, bits) {
                    (true, 1..=8) => Some(Value::I8(v as i8)),
                    (true, 9..=16) => Some(Value::I16(v as i16)),
                    (true, 17..=32) => Some(Value::I32(v as i32)),
                    (true, 33..=64) => Some(Value::I64(v)),
                    (false, 1..=8) => Some(Value::U8(v as u8)),
                    (false, 9..=16) => Some(Value::U16(v as u16)),
                    (false, 17..=32) => Some(Value::U32(v as u32)),
                    (false, 33..=64) => Some(Value::U64(v as u64)),
                    _ => None,
                }
            },
        }
    }

    pub fn base_type(self) -> BaseType {
        match self {
            Value::I8(_) | Value::I16(_) | Value::I32(_) | Value::I64(_) => {
                BaseType::SInt
            },
            Value::U8(_) | Value::U16(_) | Value::U32(_) | Value::U64(_) => {
                BaseType::UInt
            },
            Value::F32(_) | Value::F64(_) => BaseType::Float,
        }
    }

    pub fn is_integer(self) -> bool {
        self.base_type() != BaseType::Float
    }

    pub fn is_float(self) -> bool {
        self.base_type() == BaseType::Float
    }

    /// The number of bits used to store the value.
    pub fn bits(self) -> usize {
        match self {
            Value::I8(_) | Value::U8(_) => 8,
            Value::I16(_) | Value::U16(_) => 16,
            Value::I32(_) | Value::U32(_) | Value::F32(_) => 32,
            Value::I64(_) | Value::U64(_) | Value::F64(_) => 64,
        }
    }

    cast_fn!(as_i8, i8);
    cast_fn!(as_i16, i16);
    cast_fn!(as_i32, i32);
    cast_fn!(as_i64, i64);
    cast_fn!(as_u8, u8);
    cast_fn!(as_u16, u16);
    cast_fn!(as_u32, u32);
    cast_fn!(as_u64, u64);
    cast_fn!(as_f32, f32);
    cast_fn!(as_f64, f64);
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::I8(v) => write!(f, "{}", v),
            Value::I16(v) => write!(f, "{}", v),
            Value::I32(v) => write!(f, "{}", v),
            Value::I64(v) => write!(f, "{}", v),
            Value::U8(v) => write!(f, "{}", v),
            Value::U16(v) => write!(f, "{}", v),
            Value::U32(v) => write!(f, "{}", v),
            Value::U64(v) => write!(f, "{}", v),
            Value::F32(v) => write!(f, "{}", v),
            Value::F64(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tokenizer::Tokenizer;

    fn token(text: &str) -> Token {
        Tokenizer::new(text, 1).next_token()
    }

    #[test]
    fn test_float() {
        let v = Value::from_token(&token("2.5"), BaseType::Float, 32);
        assert_eq!(v, Some(Value::F32(2.5)));
        let v = Value::from_token(&token("-3"), BaseType::Float, 64);
        assert_eq!(v, Some(Value::F64(-3.0)));
        let v = Value::from_token(&token("1.5"), BaseType::Float, 16);
        assert_eq!(v, Some(Value::F32(1.5)));

        assert_eq!(Value::from_token(&token("0xff"), BaseType::Float, 32), None);
        assert_eq!(Value::from_token(&token("abc"), BaseType::Float, 32), None);
    }

    #[test]
    fn test_integer() {
        let v = Value::from_token(&token("-2"), BaseType::SInt, 16);
        assert_eq!(v, Some(Value::I16(-2)));
        let v = Value::from_token(&token("0xff0000ff"), BaseType::UInt, 32);
        assert_eq!(v, Some(Value::U32(0xff0000ff)));
        let v = Value::from_token(&token("300"), BaseType::UInt, 8);
        assert_eq!(v, Some(Value::U8(44)));
        let v = Value::from_token(&token("-200"), BaseType::SInt, 8);
        assert_eq!(v, Some(Value::I8(56)));
        let v = Value::from_token(&token("7"), BaseType::UInt, 24);
        assert_eq!(v, Some(Value::U32(7)));

        assert_eq!(Value::from_token(&token("2.0"), BaseType::SInt, 32), None);
        assert_eq!(Value::from_token(&token("("), BaseType::SInt, 32), None);
    }

    #[test]
    fn test_casts() {
        let v = Value::I16(-7);
        assert!(v.is_integer());
        assert!(!v.is_float());
        assert_eq!(v.bits(), 16);
        assert_eq!(v.as_i32(), -7);
        assert_eq!(v.as_f64(), -7.0);

        let v = Value::F32(2.75);
        assert!(v.is_float());
        assert_eq!(v.base_type(), BaseType::Float);
        assert_eq!(v.as_i32(), 2);
        assert_eq!(v.to_string(), "2.75");
    }
}
