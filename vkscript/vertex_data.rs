// Copyright © 2011, 2016, 2018 Intel Corporation
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

//! Parses the columnar text of a `[vertex data]` section, for example:
//!
//! ```text
//!   0/R32G32B32_SFLOAT 1/R32_UINT      3/int/int       4/int/int
//!   0.0 0.0 0.0        10              0               0       # comment
//!   0.0 1.0 0.0         5              1               1
//!   1.0 1.0 0.0         0              0               1
//! ```
//!
//! The first line that isn’t blank or a comment holds the column
//! headers. Each header has the form `ATTRLOC/FORMAT` where `ATTRLOC`
//! is the location of the vertex attribute bound to the column and
//! `FORMAT` is the name of a VkFormat minus the `VK_FORMAT_` prefix.
//!
//! Alternatively the header can use the Piglit style
//! `ATTRLOC/GL_TYPE/GLSL_TYPE`. `GL_TYPE` is the GL type of the data
//! that follows (“`half`”, “`float`”, “`double`”, “`byte`”,
//! “`ubyte`”, “`short`”, “`ushort`”, “`int`” or “`uint`”) and
//! `GLSL_TYPE` is the GLSL type of the attribute (“`int`”, “`uint`”,
//! “`float`”, “`double`”, “`ivec*`”, “`uvec*`”, “`vec*`” or
//! “`dvec*`”).
//!
//! Every following line is a row with one cell per column. A cell has
//! one number for each component of the column’s format. Packed
//! formats take a single integer for the whole cell, which can be
//! written in hex.

use crate::error::{Error, Result};
use crate::format::{Format, Mode};
use crate::tokenizer::{Token, Tokenizer};
use crate::value::{BaseType, Value};
use serde::Serialize;

/// One column of the vertex data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    location: u32,
    format: &'static Format,
    // Byte offset of the attribute within a vertex
    offset: usize,
}

/// The values for one column of one row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cell {
    values: Vec<Value>,
}

/// The parsed contents of a `[vertex data]` section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexData {
    headers: Vec<Header>,
    rows: Vec<Vec<Cell>>,
    // Number of bytes needed for each vertex when the data is laid
    // out in a buffer
    stride: usize,
}

impl Header {
    #[inline]
    pub fn location(&self) -> u32 {
        self.location
    }

    #[inline]
    pub fn format(&self) -> &'static Format {
        self.format
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The number of values in each cell of this column.
    pub fn n_values(&self) -> usize {
        match self.format.packed_size() {
            Some(_) => 1,
            None => self.format.parts().len(),
        }
    }
}

impl Cell {
    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl VertexData {
    #[inline]
    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }
}

fn align(value: usize, alignment: usize) -> usize {
    let alignment = alignment.max(1);

    value.div_ceil(alignment) * alignment
}

macro_rules! invalid {
    ($line_num:expr, $($message:expr),+) => {
        return Err(Error::parse($line_num, format!($($message),+)))
    };
}

fn lookup_gl_type(
    line_num: usize,
    gl_type: &str,
) -> Result<(Mode, usize)> {
    static GL_TYPES: [(&str, Mode, usize); 9] = [
        ("byte", Mode::SINT, 8),
        ("ubyte", Mode::UINT, 8),
        ("short", Mode::SINT, 16),
        ("ushort", Mode::UINT, 16),
        ("int", Mode::SINT, 32),
        ("uint", Mode::UINT, 32),
        ("half", Mode::SFLOAT, 16),
        ("float", Mode::SFLOAT, 32),
        ("double", Mode::SFLOAT, 64),
    ];

    match GL_TYPES.iter().find(|&&(name, ..)| name == gl_type) {
        Some(&(_, mode, bit_size)) => Ok((mode, bit_size)),
        None => invalid!(line_num, "Unknown GL type: {}", gl_type),
    }
}

fn components_for_glsl_type(line_num: usize, glsl_type: &str) -> Result<usize> {
    if ["int", "uint", "float", "double"].contains(&glsl_type) {
        return Ok(1);
    }

    let vec_part = match glsl_type.chars().next() {
        Some('i' | 'u' | 'd') => &glsl_type[1..],
        _ => glsl_type,
    };

    let size = match vec_part.strip_prefix("vec") {
        Some(size) => size,
        None => invalid!(line_num, "Unknown GLSL type: {}", glsl_type),
    };

    match size.parse::<usize>() {
        Ok(n) if (2..=4).contains(&n) => Ok(n),
        _ => invalid!(line_num, "Invalid vec size: {}", glsl_type),
    }
}

fn decode_type(
    line_num: usize,
    gl_type: &str,
    glsl_type: &str,
) -> Result<&'static Format> {
    let (mode, bit_size) = lookup_gl_type(line_num, gl_type)?;
    let n_components = components_for_glsl_type(line_num, glsl_type)?;

    match Format::lookup_by_details(bit_size, mode, n_components) {
        Some(format) => Ok(format),
        None => {
            invalid!(line_num, "Invalid type combo: {}/{}", gl_type, glsl_type)
        },
    }
}

fn parse_header(
    line_num: usize,
    s: &str,
    offset: usize,
) -> Result<Header> {
    let mut parts = s.split('/');

    let location = match parts.next().map(str::parse::<u32>) {
        Some(Ok(location)) => location,
        _ => invalid!(line_num, "Invalid attrib location in {}", s),
    };

    let format_name = match parts.next() {
        Some(name) => name,
        None => {
            invalid!(
                line_num,
                "Column headers must be in the form location/format. \
                 Got: {}",
                s
            );
        },
    };

    let format = match parts.next() {
        None => match Format::lookup_by_name(format_name) {
            Some(format) => format,
            None => invalid!(line_num, "Unknown format: {}", format_name),
        },
        Some(glsl_type) => {
            if parts.next().is_some() {
                invalid!(
                    line_num,
                    "Extra data at end of column header: {}",
                    s
                );
            }

            decode_type(line_num, format_name, glsl_type)?
        },
    };

    Ok(Header {
        location,
        format,
        offset: align(offset, format.alignment()),
    })
}

/// Parser for the body of a `[vertex data]` section. Use
/// [parse](Parser::parse) to read the whole body.
#[derive(Debug)]
pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    headers: Vec<Header>,
    stride: usize,
    rows: Vec<Vec<Cell>>,
}

impl<'a> Parser<'a> {
    /// Creates a parser for `data`. `first_line` is the line number of
    /// the first line of `data` within the whole script.
    pub fn new(data: &'a str, first_line: usize) -> Parser<'a> {
        Parser {
            tokenizer: Tokenizer::new(data, first_line),
            headers: Vec::new(),
            stride: 0,
            rows: Vec::new(),
        }
    }

    /// Parses the whole body. Returns `None` if there was nothing
    /// but blank lines and comments.
    pub fn parse(mut self) -> Result<Option<VertexData>> {
        let mut has_header = false;

        loop {
            let token = self.tokenizer.peek_token();

            if token.is_eos() {
                break;
            }

            if token.is_eol() {
                self.tokenizer.next_token();
                continue;
            }

            if has_header {
                self.parse_row(token.line_num)?;
            } else {
                self.parse_header_line()?;
                has_header = true;
            }
        }

        if !has_header {
            return Ok(None);
        }

        Ok(Some(VertexData {
            headers: self.headers,
            rows: self.rows,
            stride: self.stride,
        }))
    }

    fn parse_header_line(&mut self) -> Result<()> {
        let mut stride = 0;
        let mut max_alignment = 1;

        loop {
            let token = self.tokenizer.next_token();

            if token.is_end() {
                break;
            }

            let header = parse_header(token.line_num, &token.text, stride)?;

            stride = header.offset + header.format.size();
            max_alignment = max_alignment.max(header.format.alignment());

            self.headers.push(header);
        }

        self.stride = align(stride, max_alignment);

        Ok(())
    }

    // Gets the token for the next value in a cell. A cell must not be
    // split across lines.
    fn next_cell_token(&mut self, line_num: usize) -> Result<Token> {
        let token = self.tokenizer.next_token();

        if token.is_end() {
            invalid!(line_num, "Too few cells in given vertex data row");
        }

        Ok(token)
    }

    fn parse_value(
        token: &Token,
        base_type: BaseType,
        bits: usize,
    ) -> Result<Value> {
        match Value::from_token(token, base_type, bits) {
            Some(value) => Ok(value),
            None => invalid!(token.line_num, "Invalid vertex data value"),
        }
    }

    fn parse_cell(
        &mut self,
        format: &'static Format,
        line_num: usize,
    ) -> Result<Cell> {
        if let Some(bits) = format.packed_size() {
            let token = self.next_cell_token(line_num)?;
            let value = Parser::parse_value(&token, BaseType::UInt, bits)?;

            return Ok(Cell { values: vec![value] });
        }

        let mut values = Vec::with_capacity(format.parts().len());

        for part in format.parts() {
            let token = self.next_cell_token(line_num)?;

            // Hex is only allowed for packed formats
            if token.is_hex() {
                invalid!(token.line_num, "Invalid vertex data value");
            }

            values.push(Parser::parse_value(
                &token,
                part.mode.base_type(),
                part.bits,
            )?);
        }

        Ok(Cell { values })
    }

    fn parse_row(&mut self, line_num: usize) -> Result<()> {
        let mut row = Vec::with_capacity(self.headers.len());

        for i in 0..self.headers.len() {
            let format = self.headers[i].format;
            row.push(self.parse_cell(format, line_num)?);
        }

        if !self.tokenizer.next_token().is_end() {
            invalid!(line_num, "Extra data at end of vertex data row");
        }

        self.rows.push(row);

        Ok(())
    }
}
