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

//! The types that can be used for the values of buffer commands, for
//! example `vec3` or `i16vec2`. Vulkan format names such as
//! `R32G32B32_SFLOAT` can be used too.

use crate::error::InvalidType;
use crate::format::{Format, Mode};
use crate::value::{BaseType, Value};
use crate::tokenizer::Token;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The shape of the values in a buffer command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatumType {
    name: &'static str,
    base_type: BaseType,
    bits: usize,
    columns: usize,
    rows: usize,
}

// Sorted by name so that it can be used with a binary search
static GLSL_TYPES: [(&str, BaseType, usize, usize, usize); 64] = [
    // name, base type, bits, columns, rows
    ("dmat2", BaseType::Float, 64, 2, 2),
    ("dmat2x2", BaseType::Float, 64, 2, 2),
    ("dmat2x3", BaseType::Float, 64, 2, 3),
    ("dmat2x4", BaseType::Float, 64, 2, 4),
    ("dmat3", BaseType::Float, 64, 3, 3),
    ("dmat3x2", BaseType::Float, 64, 3, 2),
    ("dmat3x3", BaseType::Float, 64, 3, 3),
    ("dmat3x4", BaseType::Float, 64, 3, 4),
    ("dmat4", BaseType::Float, 64, 4, 4),
    ("dmat4x2", BaseType::Float, 64, 4, 2),
    ("dmat4x3", BaseType::Float, 64, 4, 3),
    ("dmat4x4", BaseType::Float, 64, 4, 4),
    ("double", BaseType::Float, 64, 1, 1),
    ("dvec2", BaseType::Float, 64, 1, 2),
    ("dvec3", BaseType::Float, 64, 1, 3),
    ("dvec4", BaseType::Float, 64, 1, 4),
    ("float", BaseType::Float, 32, 1, 1),
    ("i16vec2", BaseType::SInt, 16, 1, 2),
    ("i16vec3", BaseType::SInt, 16, 1, 3),
    ("i16vec4", BaseType::SInt, 16, 1, 4),
    ("i64vec2", BaseType::SInt, 64, 1, 2),
    ("i64vec3", BaseType::SInt, 64, 1, 3),
    ("i64vec4", BaseType::SInt, 64, 1, 4),
    ("i8vec2", BaseType::SInt, 8, 1, 2),
    ("i8vec3", BaseType::SInt, 8, 1, 3),
    ("i8vec4", BaseType::SInt, 8, 1, 4),
    ("int", BaseType::SInt, 32, 1, 1),
    ("int16_t", BaseType::SInt, 16, 1, 1),
    ("int64_t", BaseType::SInt, 64, 1, 1),
    ("int8_t", BaseType::SInt, 8, 1, 1),
    ("ivec2", BaseType::SInt, 32, 1, 2),
    ("ivec3", BaseType::SInt, 32, 1, 3),
    ("ivec4", BaseType::SInt, 32, 1, 4),
    ("mat2", BaseType::Float, 32, 2, 2),
    ("mat2x2", BaseType::Float, 32, 2, 2),
    ("mat2x3", BaseType::Float, 32, 2, 3),
    ("mat2x4", BaseType::Float, 32, 2, 4),
    ("mat3", BaseType::Float, 32, 3, 3),
    ("mat3x2", BaseType::Float, 32, 3, 2),
    ("mat3x3", BaseType::Float, 32, 3, 3),
    ("mat3x4", BaseType::Float, 32, 3, 4),
    ("mat4", BaseType::Float, 32, 4, 4),
    ("mat4x2", BaseType::Float, 32, 4, 2),
    ("mat4x3", BaseType::Float, 32, 4, 3),
    ("mat4x4", BaseType::Float, 32, 4, 4),
    ("u16vec2", BaseType::UInt, 16, 1, 2),
    ("u16vec3", BaseType::UInt, 16, 1, 3),
    ("u16vec4", BaseType::UInt, 16, 1, 4),
    ("u64vec2", BaseType::UInt, 64, 1, 2),
    ("u64vec3", BaseType::UInt, 64, 1, 3),
    ("u64vec4", BaseType::UInt, 64, 1, 4),
    ("u8vec2", BaseType::UInt, 8, 1, 2),
    ("u8vec3", BaseType::UInt, 8, 1, 3),
    ("u8vec4", BaseType::UInt, 8, 1, 4),
    ("uint", BaseType::UInt, 32, 1, 1),
    ("uint16_t", BaseType::UInt, 16, 1, 1),
    ("uint64_t", BaseType::UInt, 64, 1, 1),
    ("uint8_t", BaseType::UInt, 8, 1, 1),
    ("uvec2", BaseType::UInt, 32, 1, 2),
    ("uvec3", BaseType::UInt, 32, 1, 3),
    ("uvec4", BaseType::UInt, 32, 1, 4),
    ("vec2", BaseType::Float, 32, 1, 2),
    ("vec3", BaseType::Float, 32, 1, 3),
    ("vec4", BaseType::Float, 32, 1, 4),
];

impl DatumType {
    /// Looks up a GLSL type name or, failing that, a Vulkan format
    /// name.
    pub fn from_name(name: &str) -> Result<DatumType, InvalidType> {
        if let Ok(pos) = GLSL_TYPES.binary_search_by(
            |&(glsl_name, ..)| glsl_name.cmp(name)
        ) {
            let (name, base_type, bits, columns, rows) = GLSL_TYPES[pos];
            return Ok(DatumType { name, base_type, bits, columns, rows });
        }

        Format::lookup_by_name(name)
            .and_then(DatumType::from_format)
            .ok_or_else(|| InvalidType(name.to_owned()))
    }

    /// Makes a vector type out of a Vulkan format. Packed formats
    /// become a single unsigned integer of the packed size. Returns
    /// `None` if the parts of an unpacked format don’t all have the
    /// same size and mode.
    pub fn from_format(format: &'static Format) -> Option<DatumType> {
        if let Some(bits) = format.packed_size() {
            return Some(DatumType {
                name: format.name,
                base_type: BaseType::UInt,
                bits,
                columns: 1,
                rows: 1,
            });
        }

        let part = format.uniform_part()?;

        Some(DatumType {
            name: format.name,
            base_type: part.mode.base_type(),
            bits: part.bits,
            columns: 1,
            rows: format.parts().len(),
        })
    }

    /// The name that the type was parsed from.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn base_type(&self) -> BaseType {
        self.base_type
    }

    pub fn bits(&self) -> usize {
        self.bits
    }

    pub fn is_float(&self) -> bool {
        self.base_type == BaseType::Float
    }

    /// The number of components in a column, ie the size of the
    /// vector.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// The number of values needed for one complete datum.
    pub fn element_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Finds the unpacked Vulkan format with the same layout as a
    /// column of this type.
    pub fn to_format(&self) -> Option<&'static Format> {
        let mode = match self.base_type {
            BaseType::Float => Mode::SFLOAT,
            BaseType::SInt => Mode::SINT,
            BaseType::UInt => Mode::UINT,
        };

        Format::lookup_by_details(self.bits, mode, self.rows)
    }

    /// Converts a token into a value for one component of this type.
    pub fn value_from_token(&self, token: &Token) -> Option<Value> {
        Value::from_token(token, self.base_type, self.bits)
    }
}

impl FromStr for DatumType {
    type Err = InvalidType;

    fn from_str(s: &str) -> Result<DatumType, InvalidType> {
        DatumType::from_name(s)
    }
}

impl fmt::Display for DatumType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::format::VkFormat;
    use crate::tokenizer::Tokenizer;

    fn check_type(
        name: &str,
        base_type: BaseType,
        bits: usize,
        columns: usize,
        rows: usize,
    ) {
        let t = match DatumType::from_name(name) {
            Ok(t) => t,
            Err(e) => unreachable!("{}", e),
        };

        assert_eq!(t.base_type(), base_type, "{}", name);
        assert_eq!(t.bits(), bits, "{}", name);
        assert_eq!(t.column_count(), columns, "{}", name);
        assert_eq!(t.row_count(), rows, "{}", name);
        assert_eq!(t.to_string(), name);
    }

    #[test]
    fn test_sorted() {
        for pair in GLSL_TYPES.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    fn test_glsl_names() {
        check_type("int", BaseType::SInt, 32, 1, 1);
        check_type("uint8_t", BaseType::UInt, 8, 1, 1);
        check_type("double", BaseType::Float, 64, 1, 1);
        check_type("vec3", BaseType::Float, 32, 1, 3);
        check_type("i16vec3", BaseType::SInt, 16, 1, 3);
        check_type("u64vec2", BaseType::UInt, 64, 1, 2);
        check_type("dvec4", BaseType::Float, 64, 1, 4);
        check_type("mat2x3", BaseType::Float, 32, 2, 3);
        check_type("dmat4", BaseType::Float, 64, 4, 4);
    }

    #[test]
    fn test_format_names() {
        check_type("R32G32B32A32_SFLOAT", BaseType::Float, 32, 1, 4);
        check_type("R8G8_SNORM", BaseType::SInt, 8, 1, 2);
        check_type("R16_UINT", BaseType::UInt, 16, 1, 1);
        check_type("A8B8G8R8_UNORM_PACK32", BaseType::UInt, 32, 1, 1);

        // The parts of this format have different sizes
        assert_eq!(
            DatumType::from_name("D24_UNORM_S8_UINT"),
            Err(InvalidType("D24_UNORM_S8_UINT".to_owned())),
        );
    }

    #[test]
    fn test_invalid() {
        let e = DatumType::from_name("vec5").unwrap_err();
        assert_eq!(e.to_string(), "Invalid type provided: vec5");
        assert!("INVALID".parse::<DatumType>().is_err());
        assert!("Vec3".parse::<DatumType>().is_err());
    }

    #[test]
    fn test_element_count() {
        assert_eq!(DatumType::from_name("mat4x2").unwrap().element_count(), 8);
        assert_eq!(DatumType::from_name("ivec3").unwrap().element_count(), 3);
        assert_eq!(DatumType::from_name("float").unwrap().element_count(), 1);
    }

    #[test]
    fn test_to_format() {
        let t = DatumType::from_name("vec2").unwrap();
        assert_eq!(t.to_format().unwrap(), &VkFormat::R32G32_SFLOAT);
        let t = DatumType::from_name("ivec3").unwrap();
        assert_eq!(t.to_format().unwrap(), &VkFormat::R32G32B32_SINT);
        let t = DatumType::from_name("u8vec4").unwrap();
        assert_eq!(t.to_format().unwrap(), &VkFormat::R8G8B8A8_UINT);
    }

    #[test]
    fn test_value_from_token() {
        let mut tokenizer = Tokenizer::new("3 2.5", 1);
        let int_token = tokenizer.next_token();
        let float_token = tokenizer.next_token();

        let t = DatumType::from_name("i16vec3").unwrap();
        assert_eq!(t.value_from_token(&int_token), Some(Value::I16(3)));
        assert_eq!(t.value_from_token(&float_token), None);

        let t = DatumType::from_name("dvec2").unwrap();
        assert_eq!(t.value_from_token(&float_token), Some(Value::F64(2.5)));
    }
}
