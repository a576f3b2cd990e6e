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

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
#[allow(non_camel_case_types)]
pub enum VkFormat {
    R4G4_UNORM_PACK8 = 1,
    R4G4B4A4_UNORM_PACK16 = 2,
    B4G4R4A4_UNORM_PACK16 = 3,
    R5G6B5_UNORM_PACK16 = 4,
    B5G6R5_UNORM_PACK16 = 5,
    R5G5B5A1_UNORM_PACK16 = 6,
    B5G5R5A1_UNORM_PACK16 = 7,
    A1R5G5B5_UNORM_PACK16 = 8,
    R8_UNORM = 9,
    R8_SNORM = 10,
    R8_USCALED = 11,
    R8_SSCALED = 12,
    R8_UINT = 13,
    R8_SINT = 14,
    R8_SRGB = 15,
    R8G8_UNORM = 16,
    R8G8_SNORM = 17,
    R8G8_USCALED = 18,
    R8G8_SSCALED = 19,
    R8G8_UINT = 20,
    R8G8_SINT = 21,
    R8G8_SRGB = 22,
    R8G8B8_UNORM = 23,
    R8G8B8_SNORM = 24,
    R8G8B8_USCALED = 25,
    R8G8B8_SSCALED = 26,
    R8G8B8_UINT = 27,
    R8G8B8_SINT = 28,
    R8G8B8_SRGB = 29,
    B8G8R8_UNORM = 30,
    B8G8R8_SNORM = 31,
    B8G8R8_USCALED = 32,
    B8G8R8_SSCALED = 33,
    B8G8R8_UINT = 34,
    B8G8R8_SINT = 35,
    B8G8R8_SRGB = 36,
    R8G8B8A8_UNORM = 37,
    R8G8B8A8_SNORM = 38,
    R8G8B8A8_USCALED = 39,
    R8G8B8A8_SSCALED = 40,
    R8G8B8A8_UINT = 41,
    R8G8B8A8_SINT = 42,
    R8G8B8A8_SRGB = 43,
    B8G8R8A8_UNORM = 44,
    B8G8R8A8_SNORM = 45,
    B8G8R8A8_USCALED = 46,
    B8G8R8A8_SSCALED = 47,
    B8G8R8A8_UINT = 48,
    B8G8R8A8_SINT = 49,
    B8G8R8A8_SRGB = 50,
    A8B8G8R8_UNORM_PACK32 = 51,
    A8B8G8R8_SNORM_PACK32 = 52,
    A8B8G8R8_USCALED_PACK32 = 53,
    A8B8G8R8_SSCALED_PACK32 = 54,
    A8B8G8R8_UINT_PACK32 = 55,
    A8B8G8R8_SINT_PACK32 = 56,
    A8B8G8R8_SRGB_PACK32 = 57,
    A2R10G10B10_UNORM_PACK32 = 58,
    A2R10G10B10_SNORM_PACK32 = 59,
    A2R10G10B10_USCALED_PACK32 = 60,
    A2R10G10B10_SSCALED_PACK32 = 61,
    A2R10G10B10_UINT_PACK32 = 62,
    A2R10G10B10_SINT_PACK32 = 63,
    A2B10G10R10_UNORM_PACK32 = 64,
    A2B10G10R10_SNORM_PACK32 = 65,
    A2B10G10R10_USCALED_PACK32 = 66,
    A2B10G10R10_SSCALED_PACK32 = 67,
    A2B10G10R10_UINT_PACK32 = 68,
    A2B10G10R10_SINT_PACK32 = 69,
    R16_UNORM = 70,
    R16_SNORM = 71,
    R16_USCALED = 72,
    R16_SSCALED = 73,
    R16_UINT = 74,
    R16_SINT = 75,
    R16_SFLOAT = 76,
    R16G16_UNORM = 77,
    R16G16_SNORM = 78,
    R16G16_USCALED = 79,
    R16G16_SSCALED = 80,
    R16G16_UINT = 81,
    R16G16_SINT = 82,
    R16G16_SFLOAT = 83,
    R16G16B16_UNORM = 84,
    R16G16B16_SNORM = 85,
    R16G16B16_USCALED = 86,
    R16G16B16_SSCALED = 87,
    R16G16B16_UINT = 88,
    R16G16B16_SINT = 89,
    R16G16B16_SFLOAT = 90,
    R16G16B16A16_UNORM = 91,
    R16G16B16A16_SNORM = 92,
    R16G16B16A16_USCALED = 93,
    R16G16B16A16_SSCALED = 94,
    R16G16B16A16_UINT = 95,
    R16G16B16A16_SINT = 96,
    R16G16B16A16_SFLOAT = 97,
    R32_UINT = 98,
    R32_SINT = 99,
    R32_SFLOAT = 100,
    R32G32_UINT = 101,
    R32G32_SINT = 102,
    R32G32_SFLOAT = 103,
    R32G32B32_UINT = 104,
    R32G32B32_SINT = 105,
    R32G32B32_SFLOAT = 106,
    R32G32B32A32_UINT = 107,
    R32G32B32A32_SINT = 108,
    R32G32B32A32_SFLOAT = 109,
    R64_UINT = 110,
    R64_SINT = 111,
    R64_SFLOAT = 112,
    R64G64_UINT = 113,
    R64G64_SINT = 114,
    R64G64_SFLOAT = 115,
    R64G64B64_UINT = 116,
    R64G64B64_SINT = 117,
    R64G64B64_SFLOAT = 118,
    R64G64B64A64_UINT = 119,
    R64G64B64A64_SINT = 120,
    R64G64B64A64_SFLOAT = 121,
    B10G11R11_UFLOAT_PACK32 = 122,
    D16_UNORM = 124,
    X8_D24_UNORM_PACK32 = 125,
    D32_SFLOAT = 126,
    S8_UINT = 127,
    D16_UNORM_S8_UINT = 128,
    D24_UNORM_S8_UINT = 129,
    D32_SFLOAT_S8_UINT = 130,
}

static FORMATS: [Format; 129] = [
    Format {
        vk_format: VkFormat::A1R5G5B5_UNORM_PACK16,
        name: "A1R5G5B5_UNORM_PACK16",
        packed_size: NonZeroUsize::new(16),
        n_parts: 4,
        parts: [
            Part { bits: 1, component: Component::A, mode: Mode::UNORM },
            Part { bits: 5, component: Component::R, mode: Mode::UNORM },
            Part { bits: 5, component: Component::G, mode: Mode::UNORM },
            Part { bits: 5, component: Component::B, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::A2B10G10R10_SINT_PACK32,
        name: "A2B10G10R10_SINT_PACK32",
        packed_size: NonZeroUsize::new(32),
        n_parts: 4,
        parts: [
            Part { bits: 2, component: Component::A, mode: Mode::SINT },
            Part { bits: 10, component: Component::B, mode: Mode::SINT },
            Part { bits: 10, component: Component::G, mode: Mode::SINT },
            Part { bits: 10, component: Component::R, mode: Mode::SINT },
        ],
    },
    Format {
        vk_format: VkFormat::A2B10G10R10_SNORM_PACK32,
        name: "A2B10G10R10_SNORM_PACK32",
        packed_size: NonZeroUsize::new(32),
        n_parts: 4,
        parts: [
            Part { bits: 2, component: Component::A, mode: Mode::SNORM },
            Part { bits: 10, component: Component::B, mode: Mode::SNORM },
            Part { bits: 10, component: Component::G, mode: Mode::SNORM },
            Part { bits: 10, component: Component::R, mode: Mode::SNORM },
        ],
    },
    Format {
        vk_format: VkFormat::A2B10G10R10_SSCALED_PACK32,
        name: "A2B10G10R10_SSCALED_PACK32",
        packed_size: NonZeroUsize::new(32),
        n_parts: 4,
        parts: [
            Part { bits: 2, component: Component::A, mode: Mode::SSCALED },
            Part { bits: 10, component: Component::B, mode: Mode::SSCALED },
            Part { bits: 10, component: Component::G, mode: Mode::SSCALED },
            Part { bits: 10, component: Component::R, mode: Mode::SSCALED },
        ],
    },
    Format {
        vk_format: VkFormat::A2B10G10R10_UINT_PACK32,
        name: "A2B10G10R10_UINT_PACK32",
        packed_size: NonZeroUsize::new(32),
        n_parts: 4,
        parts: [
            Part { bits: 2, component: Component::A, mode: Mode::UINT },
            Part { bits: 10, component: Component::B, mode: Mode::UINT },
            Part { bits: 10, component: Component::G, mode: Mode::UINT },
            Part { bits: 10, component: Component::R, mode: Mode::UINT },
        ],
    },
    Format {
        vk_format: VkFormat::A2B10G10R10_UNORM_PACK32,
        name: "A2B10G10R10_UNORM_PACK32",
        packed_size: NonZeroUsize::new(32),
        n_parts: 4,
        parts: [
            Part { bits: 2, component: Component::A, mode: Mode::UNORM },
            Part { bits: 10, component: Component::B, mode: Mode::UNORM },
            Part { bits: 10, component: Component::G, mode: Mode::UNORM },
            Part { bits: 10, component: Component::R, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::A2B10G10R10_USCALED_PACK32,
        name: "A2B10G10R10_USCALED_PACK32",
        packed_size: NonZeroUsize::new(32),
        n_parts: 4,
        parts: [
            Part { bits: 2, component: Component::A, mode: Mode::USCALED },
            Part { bits: 10, component: Component::B, mode: Mode::USCALED },
            Part { bits: 10, component: Component::G, mode: Mode::USCALED },
            Part { bits: 10, component: Component::R, mode: Mode::USCALED },
        ],
    },
    Format {
        vk_format: VkFormat::A2R10G10B10_SINT_PACK32,
        name: "A2R10G10B10_SINT_PACK32",
        packed_size: NonZeroUsize::new(32),
        n_parts: 4,
        parts: [
            Part { bits: 2, component: Component::A, mode: Mode::SINT },
            Part { bits: 10, component: Component::R, mode: Mode::SINT },
            Part { bits: 10, component: Component::G, mode: Mode::SINT },
            Part { bits: 10, component: Component::B, mode: Mode::SINT },
        ],
    },
    Format {
        vk_format: VkFormat::A2R10G10B10_SNORM_PACK32,
        name: "A2R10G10B10_SNORM_PACK32",
        packed_size: NonZeroUsize::new(32),
        n_parts: 4,
        parts: [
            Part { bits: 2, component: Component::A, mode: Mode::SNORM },
            Part { bits: 10, component: Component::R, mode: Mode::SNORM },
            Part { bits: 10, component: Component::G, mode: Mode::SNORM },
            Part { bits: 10, component: Component::B, mode: Mode::SNORM },
        ],
    },
    Format {
        vk_format: VkFormat::A2R10G10B10_SSCALED_PACK32,
        name: "A2R10G10B10_SSCALED_PACK32",
        packed_size: NonZeroUsize::new(32),
        n_parts: 4,
        parts: [
            Part { bits: 2, component: Component::A, mode: Mode::SSCALED },
            Part { bits: 10, component: Component::R, mode: Mode::SSCALED },
            Part { bits: 10, component: Component::G, mode: Mode::SSCALED },
            Part { bits: 10, component: Component::B, mode: Mode::SSCALED },
        ],
    },
    Format {
        vk_format: VkFormat::A2R10G10B10_UINT_PACK32,
        name: "A2R10G10B10_UINT_PACK32",
        packed_size: NonZeroUsize::new(32),
        n_parts: 4,
        parts: [
            Part { bits: 2, component: Component::A, mode: Mode::UINT },
            Part { bits: 10, component: Component::R, mode: Mode::UINT },
            Part { bits: 10, component: Component::G, mode: Mode::UINT },
            Part { bits: 10, component: Component::B, mode: Mode::UINT },
        ],
    },
    Format {
        vk_format: VkFormat::A2R10G10B10_UNORM_PACK32,
        name: "A2R10G10B10_UNORM_PACK32",
        packed_size: NonZeroUsize::new(32),
        n_parts: 4,
        parts: [
            Part { bits: 2, component: Component::A, mode: Mode::UNORM },
            Part { bits: 10, component: Component::R, mode: Mode::UNORM },
            Part { bits: 10, component: Component::G, mode: Mode::UNORM },
            Part { bits: 10, component: Component::B, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::A2R10G10B10_USCALED_PACK32,
        name: "A2R10G10B10_USCALED_PACK32",
        packed_size: NonZeroUsize::new(32),
        n_parts: 4,
        parts: [
            Part { bits: 2, component: Component::A, mode: Mode::USCALED },
            Part { bits: 10, component: Component::R, mode: Mode::USCALED },
            Part { bits: 10, component: Component::G, mode: Mode::USCALED },
            Part { bits: 10, component: Component::B, mode: Mode::USCALED },
        ],
    },
    Format {
        vk_format: VkFormat::A8B8G8R8_SINT_PACK32,
        name: "A8B8G8R8_SINT_PACK32",
        packed_size: NonZeroUsize::new(32),
        n_parts: 4,
        parts: [
            Part { bits: 8, component: Component::A, mode: Mode::SINT },
            Part { bits: 8, component: Component::B, mode: Mode::SINT },
            Part { bits: 8, component: Component::G, mode: Mode::SINT },
            Part { bits: 8, component: Component::R, mode: Mode::SINT },
        ],
    },
    Format {
        vk_format: VkFormat::A8B8G8R8_SNORM_PACK32,
        name: "A8B8G8R8_SNORM_PACK32",
        packed_size: NonZeroUsize::new(32),
        n_parts: 4,
        parts: [
            Part { bits: 8, component: Component::A, mode: Mode::SNORM },
            Part { bits: 8, component: Component::B, mode: Mode::SNORM },
            Part { bits: 8, component: Component::G, mode: Mode::SNORM },
            Part { bits: 8, component: Component::R, mode: Mode::SNORM },
        ],
    },
    Format {
        vk_format: VkFormat::A8B8G8R8_SRGB_PACK32,
        name: "A8B8G8R8_SRGB_PACK32",
        packed_size: NonZeroUsize::new(32),
        n_parts: 4,
        parts: [
            Part { bits: 8, component: Component::A, mode: Mode::SRGB },
            Part { bits: 8, component: Component::B, mode: Mode::SRGB },
            Part { bits: 8, component: Component::G, mode: Mode::SRGB },
            Part { bits: 8, component: Component::R, mode: Mode::SRGB },
        ],
    },
    Format {
        vk_format: VkFormat::A8B8G8R8_SSCALED_PACK32,
        name: "A8B8G8R8_SSCALED_PACK32",
        packed_size: NonZeroUsize::new(32),
        n_parts: 4,
        parts: [
            Part { bits: 8, component: Component::A, mode: Mode::SSCALED },
            Part { bits: 8, component: Component::B, mode: Mode::SSCALED },
            Part { bits: 8, component: Component::G, mode: Mode::SSCALED },
            Part { bits: 8, component: Component::R, mode: Mode::SSCALED },
        ],
    },
    Format {
        vk_format: VkFormat::A8B8G8R8_UINT_PACK32,
        name: "A8B8G8R8_UINT_PACK32",
        packed_size: NonZeroUsize::new(32),
        n_parts: 4,
        parts: [
            Part { bits: 8, component: Component::A, mode: Mode::UINT },
            Part { bits: 8, component: Component::B, mode: Mode::UINT },
            Part { bits: 8, component: Component::G, mode: Mode::UINT },
            Part { bits: 8, component: Component::R, mode: Mode::UINT },
        ],
    },
    Format {
        vk_format: VkFormat::A8B8G8R8_UNORM_PACK32,
        name: "A8B8G8R8_UNORM_PACK32",
        packed_size: NonZeroUsize::new(32),
        n_parts: 4,
        parts: [
            Part { bits: 8, component: Component::A, mode: Mode::UNORM },
            Part { bits: 8, component: Component::B, mode: Mode::UNORM },
            Part { bits: 8, component: Component::G, mode: Mode::UNORM },
            Part { bits: 8, component: Component::R, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::A8B8G8R8_USCALED_PACK32,
        name: "A8B8G8R8_USCALED_PACK32",
        packed_size: NonZeroUsize::new(32),
        n_parts: 4,
        parts: [
            Part { bits: 8, component: Component::A, mode: Mode::USCALED },
            Part { bits: 8, component: Component::B, mode: Mode::USCALED },
            Part { bits: 8, component: Component::G, mode: Mode::USCALED },
            Part { bits: 8, component: Component::R, mode: Mode::USCALED },
        ],
    },
    Format {
        vk_format: VkFormat::B10G11R11_UFLOAT_PACK32,
        name: "B10G11R11_UFLOAT_PACK32",
        packed_size: NonZeroUsize::new(32),
        n_parts: 3,
        parts: [
            Part { bits: 10, component: Component::B, mode: Mode::UFLOAT },
            Part { bits: 11, component: Component::G, mode: Mode::UFLOAT },
            Part { bits: 11, component: Component::R, mode: Mode::UFLOAT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::B4G4R4A4_UNORM_PACK16,
        name: "B4G4R4A4_UNORM_PACK16",
        packed_size: NonZeroUsize::new(16),
        n_parts: 4,
        parts: [
            Part { bits: 4, component: Component::B, mode: Mode::UNORM },
            Part { bits: 4, component: Component::G, mode: Mode::UNORM },
            Part { bits: 4, component: Component::R, mode: Mode::UNORM },
            Part { bits: 4, component: Component::A, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::B5G5R5A1_UNORM_PACK16,
        name: "B5G5R5A1_UNORM_PACK16",
        packed_size: NonZeroUsize::new(16),
        n_parts: 4,
        parts: [
            Part { bits: 5, component: Component::B, mode: Mode::UNORM },
            Part { bits: 5, component: Component::G, mode: Mode::UNORM },
            Part { bits: 5, component: Component::R, mode: Mode::UNORM },
            Part { bits: 1, component: Component::A, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::B5G6R5_UNORM_PACK16,
        name: "B5G6R5_UNORM_PACK16",
        packed_size: NonZeroUsize::new(16),
        n_parts: 3,
        parts: [
            Part { bits: 5, component: Component::B, mode: Mode::UNORM },
            Part { bits: 6, component: Component::G, mode: Mode::UNORM },
            Part { bits: 5, component: Component::R, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::B8G8R8A8_SINT,
        name: "B8G8R8A8_SINT",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 8, component: Component::B, mode: Mode::SINT },
            Part { bits: 8, component: Component::G, mode: Mode::SINT },
            Part { bits: 8, component: Component::R, mode: Mode::SINT },
            Part { bits: 8, component: Component::A, mode: Mode::SINT },
        ],
    },
    Format {
        vk_format: VkFormat::B8G8R8A8_SNORM,
        name: "B8G8R8A8_SNORM",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 8, component: Component::B, mode: Mode::SNORM },
            Part { bits: 8, component: Component::G, mode: Mode::SNORM },
            Part { bits: 8, component: Component::R, mode: Mode::SNORM },
            Part { bits: 8, component: Component::A, mode: Mode::SNORM },
        ],
    },
    Format {
        vk_format: VkFormat::B8G8R8A8_SRGB,
        name: "B8G8R8A8_SRGB",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 8, component: Component::B, mode: Mode::SRGB },
            Part { bits: 8, component: Component::G, mode: Mode::SRGB },
            Part { bits: 8, component: Component::R, mode: Mode::SRGB },
            Part { bits: 8, component: Component::A, mode: Mode::SRGB },
        ],
    },
    Format {
        vk_format: VkFormat::B8G8R8A8_SSCALED,
        name: "B8G8R8A8_SSCALED",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 8, component: Component::B, mode: Mode::SSCALED },
            Part { bits: 8, component: Component::G, mode: Mode::SSCALED },
            Part { bits: 8, component: Component::R, mode: Mode::SSCALED },
            Part { bits: 8, component: Component::A, mode: Mode::SSCALED },
        ],
    },
    Format {
        vk_format: VkFormat::B8G8R8A8_UINT,
        name: "B8G8R8A8_UINT",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 8, component: Component::B, mode: Mode::UINT },
            Part { bits: 8, component: Component::G, mode: Mode::UINT },
            Part { bits: 8, component: Component::R, mode: Mode::UINT },
            Part { bits: 8, component: Component::A, mode: Mode::UINT },
        ],
    },
    Format {
        vk_format: VkFormat::B8G8R8A8_UNORM,
        name: "B8G8R8A8_UNORM",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 8, component: Component::B, mode: Mode::UNORM },
            Part { bits: 8, component: Component::G, mode: Mode::UNORM },
            Part { bits: 8, component: Component::R, mode: Mode::UNORM },
            Part { bits: 8, component: Component::A, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::B8G8R8A8_USCALED,
        name: "B8G8R8A8_USCALED",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 8, component: Component::B, mode: Mode::USCALED },
            Part { bits: 8, component: Component::G, mode: Mode::USCALED },
            Part { bits: 8, component: Component::R, mode: Mode::USCALED },
            Part { bits: 8, component: Component::A, mode: Mode::USCALED },
        ],
    },
    Format {
        vk_format: VkFormat::B8G8R8_SINT,
        name: "B8G8R8_SINT",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 8, component: Component::B, mode: Mode::SINT },
            Part { bits: 8, component: Component::G, mode: Mode::SINT },
            Part { bits: 8, component: Component::R, mode: Mode::SINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::B8G8R8_SNORM,
        name: "B8G8R8_SNORM",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 8, component: Component::B, mode: Mode::SNORM },
            Part { bits: 8, component: Component::G, mode: Mode::SNORM },
            Part { bits: 8, component: Component::R, mode: Mode::SNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::B8G8R8_SRGB,
        name: "B8G8R8_SRGB",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 8, component: Component::B, mode: Mode::SRGB },
            Part { bits: 8, component: Component::G, mode: Mode::SRGB },
            Part { bits: 8, component: Component::R, mode: Mode::SRGB },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::B8G8R8_SSCALED,
        name: "B8G8R8_SSCALED",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 8, component: Component::B, mode: Mode::SSCALED },
            Part { bits: 8, component: Component::G, mode: Mode::SSCALED },
            Part { bits: 8, component: Component::R, mode: Mode::SSCALED },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::B8G8R8_UINT,
        name: "B8G8R8_UINT",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 8, component: Component::B, mode: Mode::UINT },
            Part { bits: 8, component: Component::G, mode: Mode::UINT },
            Part { bits: 8, component: Component::R, mode: Mode::UINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::B8G8R8_UNORM,
        name: "B8G8R8_UNORM",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 8, component: Component::B, mode: Mode::UNORM },
            Part { bits: 8, component: Component::G, mode: Mode::UNORM },
            Part { bits: 8, component: Component::R, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::B8G8R8_USCALED,
        name: "B8G8R8_USCALED",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 8, component: Component::B, mode: Mode::USCALED },
            Part { bits: 8, component: Component::G, mode: Mode::USCALED },
            Part { bits: 8, component: Component::R, mode: Mode::USCALED },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::D16_UNORM,
        name: "D16_UNORM",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 16, component: Component::D, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::D16_UNORM_S8_UINT,
        name: "D16_UNORM_S8_UINT",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 16, component: Component::D, mode: Mode::UNORM },
            Part { bits: 8, component: Component::S, mode: Mode::UINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::D24_UNORM_S8_UINT,
        name: "D24_UNORM_S8_UINT",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 24, component: Component::D, mode: Mode::UNORM },
            Part { bits: 8, component: Component::S, mode: Mode::UINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::D32_SFLOAT,
        name: "D32_SFLOAT",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 32, component: Component::D, mode: Mode::SFLOAT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::D32_SFLOAT_S8_UINT,
        name: "D32_SFLOAT_S8_UINT",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 32, component: Component::D, mode: Mode::SFLOAT },
            Part { bits: 8, component: Component::S, mode: Mode::UINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16G16B16A16_SFLOAT,
        name: "R16G16B16A16_SFLOAT",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::SFLOAT },
            Part { bits: 16, component: Component::G, mode: Mode::SFLOAT },
            Part { bits: 16, component: Component::B, mode: Mode::SFLOAT },
            Part { bits: 16, component: Component::A, mode: Mode::SFLOAT },
        ],
    },
    Format {
        vk_format: VkFormat::R16G16B16A16_SINT,
        name: "R16G16B16A16_SINT",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::SINT },
            Part { bits: 16, component: Component::G, mode: Mode::SINT },
            Part { bits: 16, component: Component::B, mode: Mode::SINT },
            Part { bits: 16, component: Component::A, mode: Mode::SINT },
        ],
    },
    Format {
        vk_format: VkFormat::R16G16B16A16_SNORM,
        name: "R16G16B16A16_SNORM",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::SNORM },
            Part { bits: 16, component: Component::G, mode: Mode::SNORM },
            Part { bits: 16, component: Component::B, mode: Mode::SNORM },
            Part { bits: 16, component: Component::A, mode: Mode::SNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16G16B16A16_SSCALED,
        name: "R16G16B16A16_SSCALED",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::SSCALED },
            Part { bits: 16, component: Component::G, mode: Mode::SSCALED },
            Part { bits: 16, component: Component::B, mode: Mode::SSCALED },
            Part { bits: 16, component: Component::A, mode: Mode::SSCALED },
        ],
    },
    Format {
        vk_format: VkFormat::R16G16B16A16_UINT,
        name: "R16G16B16A16_UINT",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::UINT },
            Part { bits: 16, component: Component::G, mode: Mode::UINT },
            Part { bits: 16, component: Component::B, mode: Mode::UINT },
            Part { bits: 16, component: Component::A, mode: Mode::UINT },
        ],
    },
    Format {
        vk_format: VkFormat::R16G16B16A16_UNORM,
        name: "R16G16B16A16_UNORM",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::UNORM },
            Part { bits: 16, component: Component::G, mode: Mode::UNORM },
            Part { bits: 16, component: Component::B, mode: Mode::UNORM },
            Part { bits: 16, component: Component::A, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16G16B16A16_USCALED,
        name: "R16G16B16A16_USCALED",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::USCALED },
            Part { bits: 16, component: Component::G, mode: Mode::USCALED },
            Part { bits: 16, component: Component::B, mode: Mode::USCALED },
            Part { bits: 16, component: Component::A, mode: Mode::USCALED },
        ],
    },
    Format {
        vk_format: VkFormat::R16G16B16_SFLOAT,
        name: "R16G16B16_SFLOAT",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::SFLOAT },
            Part { bits: 16, component: Component::G, mode: Mode::SFLOAT },
            Part { bits: 16, component: Component::B, mode: Mode::SFLOAT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16G16B16_SINT,
        name: "R16G16B16_SINT",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::SINT },
            Part { bits: 16, component: Component::G, mode: Mode::SINT },
            Part { bits: 16, component: Component::B, mode: Mode::SINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16G16B16_SNORM,
        name: "R16G16B16_SNORM",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::SNORM },
            Part { bits: 16, component: Component::G, mode: Mode::SNORM },
            Part { bits: 16, component: Component::B, mode: Mode::SNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16G16B16_SSCALED,
        name: "R16G16B16_SSCALED",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::SSCALED },
            Part { bits: 16, component: Component::G, mode: Mode::SSCALED },
            Part { bits: 16, component: Component::B, mode: Mode::SSCALED },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16G16B16_UINT,
        name: "R16G16B16_UINT",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::UINT },
            Part { bits: 16, component: Component::G, mode: Mode::UINT },
            Part { bits: 16, component: Component::B, mode: Mode::UINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16G16B16_UNORM,
        name: "R16G16B16_UNORM",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::UNORM },
            Part { bits: 16, component: Component::G, mode: Mode::UNORM },
            Part { bits: 16, component: Component::B, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16G16B16_USCALED,
        name: "R16G16B16_USCALED",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::USCALED },
            Part { bits: 16, component: Component::G, mode: Mode::USCALED },
            Part { bits: 16, component: Component::B, mode: Mode::USCALED },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16G16_SFLOAT,
        name: "R16G16_SFLOAT",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::SFLOAT },
            Part { bits: 16, component: Component::G, mode: Mode::SFLOAT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16G16_SINT,
        name: "R16G16_SINT",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::SINT },
            Part { bits: 16, component: Component::G, mode: Mode::SINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16G16_SNORM,
        name: "R16G16_SNORM",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::SNORM },
            Part { bits: 16, component: Component::G, mode: Mode::SNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16G16_SSCALED,
        name: "R16G16_SSCALED",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::SSCALED },
            Part { bits: 16, component: Component::G, mode: Mode::SSCALED },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16G16_UINT,
        name: "R16G16_UINT",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::UINT },
            Part { bits: 16, component: Component::G, mode: Mode::UINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16G16_UNORM,
        name: "R16G16_UNORM",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::UNORM },
            Part { bits: 16, component: Component::G, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16G16_USCALED,
        name: "R16G16_USCALED",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::USCALED },
            Part { bits: 16, component: Component::G, mode: Mode::USCALED },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16_SFLOAT,
        name: "R16_SFLOAT",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::SFLOAT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16_SINT,
        name: "R16_SINT",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::SINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16_SNORM,
        name: "R16_SNORM",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::SNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16_SSCALED,
        name: "R16_SSCALED",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::SSCALED },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16_UINT,
        name: "R16_UINT",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::UINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16_UNORM,
        name: "R16_UNORM",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R16_USCALED,
        name: "R16_USCALED",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 16, component: Component::R, mode: Mode::USCALED },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R32G32B32A32_SFLOAT,
        name: "R32G32B32A32_SFLOAT",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 32, component: Component::R, mode: Mode::SFLOAT },
            Part { bits: 32, component: Component::G, mode: Mode::SFLOAT },
            Part { bits: 32, component: Component::B, mode: Mode::SFLOAT },
            Part { bits: 32, component: Component::A, mode: Mode::SFLOAT },
        ],
    },
    Format {
        vk_format: VkFormat::R32G32B32A32_SINT,
        name: "R32G32B32A32_SINT",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 32, component: Component::R, mode: Mode::SINT },
            Part { bits: 32, component: Component::G, mode: Mode::SINT },
            Part { bits: 32, component: Component::B, mode: Mode::SINT },
            Part { bits: 32, component: Component::A, mode: Mode::SINT },
        ],
    },
    Format {
        vk_format: VkFormat::R32G32B32A32_UINT,
        name: "R32G32B32A32_UINT",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 32, component: Component::R, mode: Mode::UINT },
            Part { bits: 32, component: Component::G, mode: Mode::UINT },
            Part { bits: 32, component: Component::B, mode: Mode::UINT },
            Part { bits: 32, component: Component::A, mode: Mode::UINT },
        ],
    },
    Format {
        vk_format: VkFormat::R32G32B32_SFLOAT,
        name: "R32G32B32_SFLOAT",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 32, component: Component::R, mode: Mode::SFLOAT },
            Part { bits: 32, component: Component::G, mode: Mode::SFLOAT },
            Part { bits: 32, component: Component::B, mode: Mode::SFLOAT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R32G32B32_SINT,
        name: "R32G32B32_SINT",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 32, component: Component::R, mode: Mode::SINT },
            Part { bits: 32, component: Component::G, mode: Mode::SINT },
            Part { bits: 32, component: Component::B, mode: Mode::SINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R32G32B32_UINT,
        name: "R32G32B32_UINT",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 32, component: Component::R, mode: Mode::UINT },
            Part { bits: 32, component: Component::G, mode: Mode::UINT },
            Part { bits: 32, component: Component::B, mode: Mode::UINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R32G32_SFLOAT,
        name: "R32G32_SFLOAT",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 32, component: Component::R, mode: Mode::SFLOAT },
            Part { bits: 32, component: Component::G, mode: Mode::SFLOAT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R32G32_SINT,
        name: "R32G32_SINT",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 32, component: Component::R, mode: Mode::SINT },
            Part { bits: 32, component: Component::G, mode: Mode::SINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R32G32_UINT,
        name: "R32G32_UINT",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 32, component: Component::R, mode: Mode::UINT },
            Part { bits: 32, component: Component::G, mode: Mode::UINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R32_SFLOAT,
        name: "R32_SFLOAT",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 32, component: Component::R, mode: Mode::SFLOAT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R32_SINT,
        name: "R32_SINT",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 32, component: Component::R, mode: Mode::SINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R32_UINT,
        name: "R32_UINT",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 32, component: Component::R, mode: Mode::UINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R4G4B4A4_UNORM_PACK16,
        name: "R4G4B4A4_UNORM_PACK16",
        packed_size: NonZeroUsize::new(16),
        n_parts: 4,
        parts: [
            Part { bits: 4, component: Component::R, mode: Mode::UNORM },
            Part { bits: 4, component: Component::G, mode: Mode::UNORM },
            Part { bits: 4, component: Component::B, mode: Mode::UNORM },
            Part { bits: 4, component: Component::A, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R4G4_UNORM_PACK8,
        name: "R4G4_UNORM_PACK8",
        packed_size: NonZeroUsize::new(8),
        n_parts: 2,
        parts: [
            Part { bits: 4, component: Component::R, mode: Mode::UNORM },
            Part { bits: 4, component: Component::G, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R5G5B5A1_UNORM_PACK16,
        name: "R5G5B5A1_UNORM_PACK16",
        packed_size: NonZeroUsize::new(16),
        n_parts: 4,
        parts: [
            Part { bits: 5, component: Component::R, mode: Mode::UNORM },
            Part { bits: 5, component: Component::G, mode: Mode::UNORM },
            Part { bits: 5, component: Component::B, mode: Mode::UNORM },
            Part { bits: 1, component: Component::A, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R5G6B5_UNORM_PACK16,
        name: "R5G6B5_UNORM_PACK16",
        packed_size: NonZeroUsize::new(16),
        n_parts: 3,
        parts: [
            Part { bits: 5, component: Component::R, mode: Mode::UNORM },
            Part { bits: 6, component: Component::G, mode: Mode::UNORM },
            Part { bits: 5, component: Component::B, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R64G64B64A64_SFLOAT,
        name: "R64G64B64A64_SFLOAT",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 64, component: Component::R, mode: Mode::SFLOAT },
            Part { bits: 64, component: Component::G, mode: Mode::SFLOAT },
            Part { bits: 64, component: Component::B, mode: Mode::SFLOAT },
            Part { bits: 64, component: Component::A, mode: Mode::SFLOAT },
        ],
    },
    Format {
        vk_format: VkFormat::R64G64B64A64_SINT,
        name: "R64G64B64A64_SINT",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 64, component: Component::R, mode: Mode::SINT },
            Part { bits: 64, component: Component::G, mode: Mode::SINT },
            Part { bits: 64, component: Component::B, mode: Mode::SINT },
            Part { bits: 64, component: Component::A, mode: Mode::SINT },
        ],
    },
    Format {
        vk_format: VkFormat::R64G64B64A64_UINT,
        name: "R64G64B64A64_UINT",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 64, component: Component::R, mode: Mode::UINT },
            Part { bits: 64, component: Component::G, mode: Mode::UINT },
            Part { bits: 64, component: Component::B, mode: Mode::UINT },
            Part { bits: 64, component: Component::A, mode: Mode::UINT },
        ],
    },
    Format {
        vk_format: VkFormat::R64G64B64_SFLOAT,
        name: "R64G64B64_SFLOAT",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 64, component: Component::R, mode: Mode::SFLOAT },
            Part { bits: 64, component: Component::G, mode: Mode::SFLOAT },
            Part { bits: 64, component: Component::B, mode: Mode::SFLOAT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R64G64B64_SINT,
        name: "R64G64B64_SINT",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 64, component: Component::R, mode: Mode::SINT },
            Part { bits: 64, component: Component::G, mode: Mode::SINT },
            Part { bits: 64, component: Component::B, mode: Mode::SINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R64G64B64_UINT,
        name: "R64G64B64_UINT",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 64, component: Component::R, mode: Mode::UINT },
            Part { bits: 64, component: Component::G, mode: Mode::UINT },
            Part { bits: 64, component: Component::B, mode: Mode::UINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R64G64_SFLOAT,
        name: "R64G64_SFLOAT",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 64, component: Component::R, mode: Mode::SFLOAT },
            Part { bits: 64, component: Component::G, mode: Mode::SFLOAT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R64G64_SINT,
        name: "R64G64_SINT",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 64, component: Component::R, mode: Mode::SINT },
            Part { bits: 64, component: Component::G, mode: Mode::SINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R64G64_UINT,
        name: "R64G64_UINT",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 64, component: Component::R, mode: Mode::UINT },
            Part { bits: 64, component: Component::G, mode: Mode::UINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R64_SFLOAT,
        name: "R64_SFLOAT",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 64, component: Component::R, mode: Mode::SFLOAT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R64_SINT,
        name: "R64_SINT",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 64, component: Component::R, mode: Mode::SINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R64_UINT,
        name: "R64_UINT",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 64, component: Component::R, mode: Mode::UINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8G8B8A8_SINT,
        name: "R8G8B8A8_SINT",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::SINT },
            Part { bits: 8, component: Component::G, mode: Mode::SINT },
            Part { bits: 8, component: Component::B, mode: Mode::SINT },
            Part { bits: 8, component: Component::A, mode: Mode::SINT },
        ],
    },
    Format {
        vk_format: VkFormat::R8G8B8A8_SNORM,
        name: "R8G8B8A8_SNORM",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::SNORM },
            Part { bits: 8, component: Component::G, mode: Mode::SNORM },
            Part { bits: 8, component: Component::B, mode: Mode::SNORM },
            Part { bits: 8, component: Component::A, mode: Mode::SNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8G8B8A8_SRGB,
        name: "R8G8B8A8_SRGB",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::SRGB },
            Part { bits: 8, component: Component::G, mode: Mode::SRGB },
            Part { bits: 8, component: Component::B, mode: Mode::SRGB },
            Part { bits: 8, component: Component::A, mode: Mode::SRGB },
        ],
    },
    Format {
        vk_format: VkFormat::R8G8B8A8_SSCALED,
        name: "R8G8B8A8_SSCALED",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::SSCALED },
            Part { bits: 8, component: Component::G, mode: Mode::SSCALED },
            Part { bits: 8, component: Component::B, mode: Mode::SSCALED },
            Part { bits: 8, component: Component::A, mode: Mode::SSCALED },
        ],
    },
    Format {
        vk_format: VkFormat::R8G8B8A8_UINT,
        name: "R8G8B8A8_UINT",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::UINT },
            Part { bits: 8, component: Component::G, mode: Mode::UINT },
            Part { bits: 8, component: Component::B, mode: Mode::UINT },
            Part { bits: 8, component: Component::A, mode: Mode::UINT },
        ],
    },
    Format {
        vk_format: VkFormat::R8G8B8A8_UNORM,
        name: "R8G8B8A8_UNORM",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::UNORM },
            Part { bits: 8, component: Component::G, mode: Mode::UNORM },
            Part { bits: 8, component: Component::B, mode: Mode::UNORM },
            Part { bits: 8, component: Component::A, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8G8B8A8_USCALED,
        name: "R8G8B8A8_USCALED",
        packed_size: None,
        n_parts: 4,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::USCALED },
            Part { bits: 8, component: Component::G, mode: Mode::USCALED },
            Part { bits: 8, component: Component::B, mode: Mode::USCALED },
            Part { bits: 8, component: Component::A, mode: Mode::USCALED },
        ],
    },
    Format {
        vk_format: VkFormat::R8G8B8_SINT,
        name: "R8G8B8_SINT",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::SINT },
            Part { bits: 8, component: Component::G, mode: Mode::SINT },
            Part { bits: 8, component: Component::B, mode: Mode::SINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8G8B8_SNORM,
        name: "R8G8B8_SNORM",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::SNORM },
            Part { bits: 8, component: Component::G, mode: Mode::SNORM },
            Part { bits: 8, component: Component::B, mode: Mode::SNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8G8B8_SRGB,
        name: "R8G8B8_SRGB",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::SRGB },
            Part { bits: 8, component: Component::G, mode: Mode::SRGB },
            Part { bits: 8, component: Component::B, mode: Mode::SRGB },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8G8B8_SSCALED,
        name: "R8G8B8_SSCALED",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::SSCALED },
            Part { bits: 8, component: Component::G, mode: Mode::SSCALED },
            Part { bits: 8, component: Component::B, mode: Mode::SSCALED },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8G8B8_UINT,
        name: "R8G8B8_UINT",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::UINT },
            Part { bits: 8, component: Component::G, mode: Mode::UINT },
            Part { bits: 8, component: Component::B, mode: Mode::UINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8G8B8_UNORM,
        name: "R8G8B8_UNORM",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::UNORM },
            Part { bits: 8, component: Component::G, mode: Mode::UNORM },
            Part { bits: 8, component: Component::B, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8G8B8_USCALED,
        name: "R8G8B8_USCALED",
        packed_size: None,
        n_parts: 3,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::USCALED },
            Part { bits: 8, component: Component::G, mode: Mode::USCALED },
            Part { bits: 8, component: Component::B, mode: Mode::USCALED },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8G8_SINT,
        name: "R8G8_SINT",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::SINT },
            Part { bits: 8, component: Component::G, mode: Mode::SINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8G8_SNORM,
        name: "R8G8_SNORM",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::SNORM },
            Part { bits: 8, component: Component::G, mode: Mode::SNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8G8_SRGB,
        name: "R8G8_SRGB",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::SRGB },
            Part { bits: 8, component: Component::G, mode: Mode::SRGB },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8G8_SSCALED,
        name: "R8G8_SSCALED",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::SSCALED },
            Part { bits: 8, component: Component::G, mode: Mode::SSCALED },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8G8_UINT,
        name: "R8G8_UINT",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::UINT },
            Part { bits: 8, component: Component::G, mode: Mode::UINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8G8_UNORM,
        name: "R8G8_UNORM",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::UNORM },
            Part { bits: 8, component: Component::G, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8G8_USCALED,
        name: "R8G8_USCALED",
        packed_size: None,
        n_parts: 2,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::USCALED },
            Part { bits: 8, component: Component::G, mode: Mode::USCALED },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8_SINT,
        name: "R8_SINT",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::SINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8_SNORM,
        name: "R8_SNORM",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::SNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8_SRGB,
        name: "R8_SRGB",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::SRGB },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8_SSCALED,
        name: "R8_SSCALED",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::SSCALED },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8_UINT,
        name: "R8_UINT",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::UINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8_UNORM,
        name: "R8_UNORM",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::R8_USCALED,
        name: "R8_USCALED",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 8, component: Component::R, mode: Mode::USCALED },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::S8_UINT,
        name: "S8_UINT",
        packed_size: None,
        n_parts: 1,
        parts: [
            Part { bits: 8, component: Component::S, mode: Mode::UINT },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
    Format {
        vk_format: VkFormat::X8_D24_UNORM_PACK32,
        name: "X8_D24_UNORM_PACK32",
        packed_size: NonZeroUsize::new(32),
        n_parts: 2,
        parts: [
            Part { bits: 8, component: Component::X, mode: Mode::UNORM },
            Part { bits: 24, component: Component::D, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
            Part { bits: 0, component: Component::X, mode: Mode::UNORM },
        ],
    },
];
