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

use std::fmt;
use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can be returned while loading or parsing a script.
#[derive(Debug, Error)]
pub enum Error {
    /// The script text is malformed.
    #[error("line {line_num}: {message}")]
    Parse { line_num: usize, message: String },
    #[error("{filename}: {source}")]
    Io {
        filename: String,
        #[source]
        source: io::Error,
    },
    #[error("{filename}: the script is not valid UTF-8")]
    InvalidUtf8 { filename: String },
}

impl Error {
    pub fn parse(line_num: usize, message: impl fmt::Display) -> Error {
        Error::Parse { line_num, message: message.to_string() }
    }

    /// Returns the error message without the line number prefix.
    pub fn message(&self) -> String {
        match self {
            Error::Parse { message, .. } => message.clone(),
            _ => self.to_string(),
        }
    }

    pub fn line_num(&self) -> Option<usize> {
        match self {
            Error::Parse { line_num, .. } => Some(*line_num),
            _ => None,
        }
    }

    pub(crate) fn from_io(filename: &str, source: io::Error) -> Error {
        if source.kind() == io::ErrorKind::InvalidData {
            Error::InvalidUtf8 { filename: filename.to_owned() }
        } else {
            Error::Io { filename: filename.to_owned(), source }
        }
    }
}

/// Error returned when the name of an enum value isn’t recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} provided: {name}")]
pub struct UnknownName {
    pub kind: &'static str,
    pub name: String,
}

/// Error returned when a type name can’t be parsed as a
/// [DatumType](crate::datum_type::DatumType).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid type provided: {0}")]
pub struct InvalidType(pub String);
