// vkscript
//
// Copyright (C) 2018 Intel Corporation
// Copyright 2023 Neil Roberts
//
// Permission is hereby granted, free of charge, to any person obtaining a
// copy of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation
// on the rights to use, copy, modify, merge, publish, distribute, sub
// license, and/or sell copies of the Software, and to permit persons to whom
// the Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice (including the next
// paragraph) shall be included in all copies or substantial portions of the
// Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NON-INFRINGEMENT.  IN NO EVENT SHALL
// VA LINUX SYSTEM, IBM AND/OR THEIR SUPPLIERS BE LIABLE FOR ANY CLAIM,
// DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR
// OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE
// USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::value::BaseType;
use serde::{Serialize, Serializer};
use std::num::NonZeroUsize;

/// Description of one of the `VkFormat`s that can appear in a script,
/// either as a vertex data column or as a required framebuffer
/// format.
#[derive(Debug)]
pub struct Format {
    pub vk_format: VkFormat,
    pub name: &'static str,
    pub packed_size: Option<NonZeroUsize>,
    n_parts: usize,
    parts: [Part; 4],
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Component {
    R,
    G,
    B,
    A,
    D,
    S,
    X,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
#[allow(clippy::upper_case_acronyms)]
pub enum Mode {
    UNORM,
    SNORM,
    USCALED,
    SSCALED,
    UINT,
    SINT,
    UFLOAT,
    SFLOAT,
    SRGB,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Part {
    pub bits: usize,
    pub component: Component,
    pub mode: Mode,
}

include!{"format_table.rs"}

impl PartialEq for Format {
    #[inline]
    fn eq(&self, other: &Format) -> bool {
        // If the Vulkan format enum is the same then everything else
        // about the format should be the same too
        self.vk_format == other.vk_format
    }
}

impl PartialEq<VkFormat> for Format {
    #[inline]
    fn eq(&self, other: &VkFormat) -> bool {
        self.vk_format == *other
    }
}

impl Format {
    pub fn lookup_by_name(name: &str) -> Option<&'static Format> {
        match FORMATS.binary_search_by(|format| format.name.cmp(name)) {
            Ok(pos) => Some(&FORMATS[pos]),
            Err(_) => None,
        }
    }

    /// Finds the unpacked RGBA-ordered format with `n_components`
    /// parts that all have the given bit size and mode.
    pub fn lookup_by_details(
        bit_size: usize,
        mode: Mode,
        n_components: usize
    ) -> Option<&'static Format> {
        static COMP_ORDER: [Component; 4] = [
            Component::R,
            Component::G,
            Component::B,
            Component::A,
        ];

        'format_loop: for format in FORMATS.iter() {
            if format.n_parts != n_components || format.packed_size.is_some() {
                continue;
            }

            for (i, part) in format.parts().iter().enumerate() {
                if part.bits != bit_size
                    || part.component != COMP_ORDER[i]
                    || part.mode != mode
                {
                    continue 'format_loop;
                }
            }

            return Some(format);
        }

        None
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts[0..self.n_parts]
    }

    /// Returns the first part if every part of the format has the
    /// same bit size and mode.
    pub fn uniform_part(&self) -> Option<&Part> {
        let (first, rest) = self.parts().split_first()?;

        rest.iter()
            .all(|p| p.bits == first.bits && p.mode == first.mode)
            .then_some(first)
    }

    pub fn size(&self) -> usize {
        match self.packed_size {
            Some(size) => usize::from(size) / 8,
            None => self.parts().iter().map(|p| p.bits).sum::<usize>() / 8,
        }
    }

    pub fn packed_size(&self) -> Option<usize> {
        self.packed_size.map(usize::from)
    }

    pub fn alignment(&self) -> usize {
        match self.packed_size {
            Some(size) => usize::from(size) / 8,
            None => {
                self.parts().iter().map(|p| p.bits).max().unwrap_or(0) / 8
            },
        }
    }
}

impl Mode {
    /// The type of [Value](crate::value::Value) used to store a
    /// component with this mode. Normalized and scaled modes store
    /// the raw integer.
    pub fn base_type(self) -> BaseType {
        if self.is_float() {
            BaseType::Float
        } else if self.is_signed() {
            BaseType::SInt
        } else {
            BaseType::UInt
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, Mode::UFLOAT | Mode::SFLOAT)
    }

    pub fn is_signed(self) -> bool {
        matches!(
            self,
            Mode::SNORM | Mode::SSCALED | Mode::SINT | Mode::SFLOAT
        )
    }
}

impl Serialize for Format {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name)
    }
}
