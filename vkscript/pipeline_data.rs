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

//! The pipeline state that is accumulated while parsing the commands
//! of a `[test]` section. Each property command in the section
//! overwrites one field and the draw commands take a snapshot of the
//! state as it is at that point.

use crate::error::UnknownName;
use serde::{Serialize, Serializer};
use std::fmt;

// Defines an enum whose values are named by their Vulkan enum names.
// The second argument is the name used in error messages.
macro_rules! named_enum {
    (
        $(#[$attr:meta])*
        $enum_name:ident, $kind:literal, {
            $($variant:ident = $name:literal,)*
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $enum_name {
            $($variant,)*
        }

        impl $enum_name {
            pub fn from_name(name: &str) -> Option<$enum_name> {
                match name {
                    $($name => Some($enum_name::$variant),)*
                    _ => None,
                }
            }

            /// Like [from_name](Self::from_name) but returns an
            /// error that names the type if the lookup fails.
            pub fn parse(name: &str) -> Result<$enum_name, UnknownName> {
                $enum_name::from_name(name).ok_or_else(|| UnknownName {
                    kind: $kind,
                    name: name.to_owned(),
                })
            }

            pub fn name(self) -> &'static str {
                match self {
                    $($enum_name::$variant => $name,)*
                }
            }
        }

        impl fmt::Display for $enum_name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl Serialize for $enum_name {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }
    };
}

named_enum! {
    /// The primitive assembly mode for a draw command.
    Topology, "Topology", {
        PointList = "VK_PRIMITIVE_TOPOLOGY_POINT_LIST",
        LineList = "VK_PRIMITIVE_TOPOLOGY_LINE_LIST",
        LineStrip = "VK_PRIMITIVE_TOPOLOGY_LINE_STRIP",
        TriangleList = "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_LIST",
        TriangleStrip = "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_STRIP",
        TriangleFan = "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_FAN",
        LineListWithAdjacency = "VK_PRIMITIVE_TOPOLOGY_LINE_LIST_WITH_ADJACENCY",
        LineStripWithAdjacency = "VK_PRIMITIVE_TOPOLOGY_LINE_STRIP_WITH_ADJACENCY",
        TriangleListWithAdjacency = "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_LIST_WITH_ADJACENCY",
        TriangleStripWithAdjacency = "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_STRIP_WITH_ADJACENCY",
        PatchList = "VK_PRIMITIVE_TOPOLOGY_PATCH_LIST",
    }
}

named_enum! {
    /// How polygons are rasterized.
    PolygonMode, "PolygonMode", {
        Fill = "VK_POLYGON_MODE_FILL",
        Line = "VK_POLYGON_MODE_LINE",
        Point = "VK_POLYGON_MODE_POINT",
    }
}

named_enum! {
    /// Which faces are discarded. Setting both the front and back
    /// bits is the same as [CullMode::FrontAndBack].
    CullMode, "CullMode", {
        None = "VK_CULL_MODE_NONE",
        Front = "VK_CULL_MODE_FRONT_BIT",
        Back = "VK_CULL_MODE_BACK_BIT",
        FrontAndBack = "VK_CULL_MODE_FRONT_AND_BACK",
    }
}

named_enum! {
    /// The winding order of front-facing polygons.
    FrontFace, "FrontFace", {
        CounterClockwise = "VK_FRONT_FACE_COUNTER_CLOCKWISE",
        Clockwise = "VK_FRONT_FACE_CLOCKWISE",
    }
}

named_enum! {
    /// The logical operation applied to the framebuffer.
    LogicOp, "LogicOp", {
        Clear = "VK_LOGIC_OP_CLEAR",
        And = "VK_LOGIC_OP_AND",
        AndReverse = "VK_LOGIC_OP_AND_REVERSE",
        Copy = "VK_LOGIC_OP_COPY",
        AndInverted = "VK_LOGIC_OP_AND_INVERTED",
        NoOp = "VK_LOGIC_OP_NO_OP",
        Xor = "VK_LOGIC_OP_XOR",
        Or = "VK_LOGIC_OP_OR",
        Nor = "VK_LOGIC_OP_NOR",
        Equivalent = "VK_LOGIC_OP_EQUIVALENT",
        Invert = "VK_LOGIC_OP_INVERT",
        OrReverse = "VK_LOGIC_OP_OR_REVERSE",
        CopyInverted = "VK_LOGIC_OP_COPY_INVERTED",
        OrInverted = "VK_LOGIC_OP_OR_INVERTED",
        Nand = "VK_LOGIC_OP_NAND",
        Set = "VK_LOGIC_OP_SET",
    }
}

named_enum! {
    /// A source or destination blend factor.
    BlendFactor, "BlendFactor", {
        Zero = "VK_BLEND_FACTOR_ZERO",
        One = "VK_BLEND_FACTOR_ONE",
        SrcColor = "VK_BLEND_FACTOR_SRC_COLOR",
        OneMinusSrcColor = "VK_BLEND_FACTOR_ONE_MINUS_SRC_COLOR",
        DstColor = "VK_BLEND_FACTOR_DST_COLOR",
        OneMinusDstColor = "VK_BLEND_FACTOR_ONE_MINUS_DST_COLOR",
        SrcAlpha = "VK_BLEND_FACTOR_SRC_ALPHA",
        OneMinusSrcAlpha = "VK_BLEND_FACTOR_ONE_MINUS_SRC_ALPHA",
        DstAlpha = "VK_BLEND_FACTOR_DST_ALPHA",
        OneMinusDstAlpha = "VK_BLEND_FACTOR_ONE_MINUS_DST_ALPHA",
        ConstantColor = "VK_BLEND_FACTOR_CONSTANT_COLOR",
        OneMinusConstantColor = "VK_BLEND_FACTOR_ONE_MINUS_CONSTANT_COLOR",
        ConstantAlpha = "VK_BLEND_FACTOR_CONSTANT_ALPHA",
        OneMinusConstantAlpha = "VK_BLEND_FACTOR_ONE_MINUS_CONSTANT_ALPHA",
        SrcAlphaSaturate = "VK_BLEND_FACTOR_SRC_ALPHA_SATURATE",
        Src1Color = "VK_BLEND_FACTOR_SRC1_COLOR",
        OneMinusSrc1Color = "VK_BLEND_FACTOR_ONE_MINUS_SRC1_COLOR",
        Src1Alpha = "VK_BLEND_FACTOR_SRC1_ALPHA",
        OneMinusSrc1Alpha = "VK_BLEND_FACTOR_ONE_MINUS_SRC1_ALPHA",
    }
}

named_enum! {
    /// The operation combining the blended source and destination.
    BlendOp, "BlendOp", {
        Add = "VK_BLEND_OP_ADD",
        Subtract = "VK_BLEND_OP_SUBTRACT",
        ReverseSubtract = "VK_BLEND_OP_REVERSE_SUBTRACT",
        Min = "VK_BLEND_OP_MIN",
        Max = "VK_BLEND_OP_MAX",
        Zero = "VK_BLEND_OP_ZERO_EXT",
        Src = "VK_BLEND_OP_SRC_EXT",
        Dst = "VK_BLEND_OP_DST_EXT",
        SrcOver = "VK_BLEND_OP_SRC_OVER_EXT",
        DstOver = "VK_BLEND_OP_DST_OVER_EXT",
        SrcIn = "VK_BLEND_OP_SRC_IN_EXT",
        DstIn = "VK_BLEND_OP_DST_IN_EXT",
        SrcOut = "VK_BLEND_OP_SRC_OUT_EXT",
        DstOut = "VK_BLEND_OP_DST_OUT_EXT",
        SrcAtop = "VK_BLEND_OP_SRC_ATOP_EXT",
        DstAtop = "VK_BLEND_OP_DST_ATOP_EXT",
        Xor = "VK_BLEND_OP_XOR_EXT",
        Multiply = "VK_BLEND_OP_MULTIPLY_EXT",
        Screen = "VK_BLEND_OP_SCREEN_EXT",
        Overlay = "VK_BLEND_OP_OVERLAY_EXT",
        Darken = "VK_BLEND_OP_DARKEN_EXT",
        Lighten = "VK_BLEND_OP_LIGHTEN_EXT",
        ColorDodge = "VK_BLEND_OP_COLORDODGE_EXT",
        ColorBurn = "VK_BLEND_OP_COLORBURN_EXT",
        HardLight = "VK_BLEND_OP_HARDLIGHT_EXT",
        SoftLight = "VK_BLEND_OP_SOFTLIGHT_EXT",
        Difference = "VK_BLEND_OP_DIFFERENCE_EXT",
        Exclusion = "VK_BLEND_OP_EXCLUSION_EXT",
        Invert = "VK_BLEND_OP_INVERT_EXT",
        InvertRgb = "VK_BLEND_OP_INVERT_RGB_EXT",
        LinearDodge = "VK_BLEND_OP_LINEARDODGE_EXT",
        LinearBurn = "VK_BLEND_OP_LINEARBURN_EXT",
        VividLight = "VK_BLEND_OP_VIVIDLIGHT_EXT",
        LinearLight = "VK_BLEND_OP_LINEARLIGHT_EXT",
        PinLight = "VK_BLEND_OP_PINLIGHT_EXT",
        HardMix = "VK_BLEND_OP_HARDMIX_EXT",
        HslHue = "VK_BLEND_OP_HSL_HUE_EXT",
        HslSaturation = "VK_BLEND_OP_HSL_SATURATION_EXT",
        HslColor = "VK_BLEND_OP_HSL_COLOR_EXT",
        HslLuminosity = "VK_BLEND_OP_HSL_LUMINOSITY_EXT",
        Plus = "VK_BLEND_OP_PLUS_EXT",
        PlusClamped = "VK_BLEND_OP_PLUS_CLAMPED_EXT",
        PlusClampedAlpha = "VK_BLEND_OP_PLUS_CLAMPED_ALPHA_EXT",
        PlusDarker = "VK_BLEND_OP_PLUS_DARKER_EXT",
        Minus = "VK_BLEND_OP_MINUS_EXT",
        MinusClamped = "VK_BLEND_OP_MINUS_CLAMPED_EXT",
        Contrast = "VK_BLEND_OP_CONTRAST_EXT",
        InvertOvg = "VK_BLEND_OP_INVERT_OVG_EXT",
        Red = "VK_BLEND_OP_RED_EXT",
        Green = "VK_BLEND_OP_GREEN_EXT",
        Blue = "VK_BLEND_OP_BLUE_EXT",
    }
}

named_enum! {
    /// A comparison used by the depth and stencil tests.
    CompareOp, "CompareOp", {
        Never = "VK_COMPARE_OP_NEVER",
        Less = "VK_COMPARE_OP_LESS",
        Equal = "VK_COMPARE_OP_EQUAL",
        LessOrEqual = "VK_COMPARE_OP_LESS_OR_EQUAL",
        Greater = "VK_COMPARE_OP_GREATER",
        NotEqual = "VK_COMPARE_OP_NOT_EQUAL",
        GreaterOrEqual = "VK_COMPARE_OP_GREATER_OR_EQUAL",
        Always = "VK_COMPARE_OP_ALWAYS",
    }
}

named_enum! {
    /// The action taken on the stencil buffer.
    StencilOp, "StencilOp", {
        Keep = "VK_STENCIL_OP_KEEP",
        Zero = "VK_STENCIL_OP_ZERO",
        Replace = "VK_STENCIL_OP_REPLACE",
        IncrementAndClamp = "VK_STENCIL_OP_INCREMENT_AND_CLAMP",
        DecrementAndClamp = "VK_STENCIL_OP_DECREMENT_AND_CLAMP",
        Invert = "VK_STENCIL_OP_INVERT",
        IncrementAndWrap = "VK_STENCIL_OP_INCREMENT_AND_WRAP",
        DecrementAndWrap = "VK_STENCIL_OP_DECREMENT_AND_WRAP",
    }
}

// Mapping of the topology names accepted by `draw arrays` to the
// topology, sorted alphabetically so we can do a binary search.
static TOPOLOGY_NAMES: [(&str, Topology); 22] = [
    // GL names used in Piglit
    ("GL_LINES", Topology::LineList),
    ("GL_LINES_ADJACENCY", Topology::LineListWithAdjacency),
    ("GL_LINE_STRIP", Topology::LineStrip),
    ("GL_LINE_STRIP_ADJACENCY", Topology::LineStripWithAdjacency),
    ("GL_PATCHES", Topology::PatchList),
    ("GL_POINTS", Topology::PointList),
    ("GL_TRIANGLES", Topology::TriangleList),
    ("GL_TRIANGLES_ADJACENCY", Topology::TriangleListWithAdjacency),
    ("GL_TRIANGLE_FAN", Topology::TriangleFan),
    ("GL_TRIANGLE_STRIP", Topology::TriangleStrip),
    ("GL_TRIANGLE_STRIP_ADJACENCY", Topology::TriangleStripWithAdjacency),
    // Vulkan names
    ("LINE_LIST", Topology::LineList),
    ("LINE_LIST_WITH_ADJACENCY", Topology::LineListWithAdjacency),
    ("LINE_STRIP", Topology::LineStrip),
    ("LINE_STRIP_WITH_ADJACENCY", Topology::LineStripWithAdjacency),
    ("PATCH_LIST", Topology::PatchList),
    ("POINT_LIST", Topology::PointList),
    ("TRIANGLE_FAN", Topology::TriangleFan),
    ("TRIANGLE_LIST", Topology::TriangleList),
    ("TRIANGLE_LIST_WITH_ADJACENCY", Topology::TriangleListWithAdjacency),
    ("TRIANGLE_STRIP", Topology::TriangleStrip),
    ("TRIANGLE_STRIP_WITH_ADJACENCY", Topology::TriangleStripWithAdjacency),
];

impl Topology {
    /// Looks up one of the names that can be used in a `draw arrays`
    /// command. These are either the Vulkan names without the
    /// `VK_PRIMITIVE_TOPOLOGY_` prefix or the GL names used in Piglit.
    pub fn from_draw_name(name: &str) -> Option<Topology> {
        TOPOLOGY_NAMES
            .binary_search_by(|&(topology_name, _)| topology_name.cmp(name))
            .ok()
            .map(|pos| TOPOLOGY_NAMES[pos].1)
    }

    /// The Vulkan name without the `VK_PRIMITIVE_TOPOLOGY_` prefix.
    pub fn draw_name(self) -> &'static str {
        let name = self.name();
        name.strip_prefix("VK_PRIMITIVE_TOPOLOGY_").unwrap_or(name)
    }
}

impl CullMode {
    /// Combines two cull modes as if their bits were ored together.
    pub fn union(self, other: CullMode) -> CullMode {
        match (self, other) {
            (CullMode::None, mode) | (mode, CullMode::None) => mode,
            (CullMode::Front, CullMode::Front) => CullMode::Front,
            (CullMode::Back, CullMode::Back) => CullMode::Back,
            _ => CullMode::FrontAndBack,
        }
    }
}

pub const COLOR_MASK_R: u8 = 1 << 0;
pub const COLOR_MASK_G: u8 = 1 << 1;
pub const COLOR_MASK_B: u8 = 1 << 2;
pub const COLOR_MASK_A: u8 = 1 << 3;
pub const COLOR_MASK_ALL: u8 =
    COLOR_MASK_R | COLOR_MASK_G | COLOR_MASK_B | COLOR_MASK_A;

static COLOR_COMPONENT_NAMES: [(&str, u8); 4] = [
    ("VK_COLOR_COMPONENT_R_BIT", COLOR_MASK_R),
    ("VK_COLOR_COMPONENT_G_BIT", COLOR_MASK_G),
    ("VK_COLOR_COMPONENT_B_BIT", COLOR_MASK_B),
    ("VK_COLOR_COMPONENT_A_BIT", COLOR_MASK_A),
];

/// Returns the bit for one of the `VK_COLOR_COMPONENT_*_BIT` names.
pub fn color_component_bit(name: &str) -> Option<u8> {
    COLOR_COMPONENT_NAMES
        .iter()
        .find(|&&(component_name, _)| component_name == name)
        .map(|&(_, bit)| bit)
}

/// The stencil state for one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StencilState {
    pub fail_op: StencilOp,
    pub pass_op: StencilOp,
    pub depth_fail_op: StencilOp,
    pub compare_op: CompareOp,
    pub compare_mask: u32,
    pub write_mask: u32,
    pub reference: u32,
}

impl Default for StencilState {
    fn default() -> StencilState {
        StencilState {
            fail_op: StencilOp::Keep,
            pass_op: StencilOp::Keep,
            depth_fail_op: StencilOp::Keep,
            compare_op: CompareOp::Always,
            compare_mask: u32::MAX,
            write_mask: u32::MAX,
            reference: 0,
        }
    }
}

/// The pipeline state set by the property commands of a `[test]`
/// section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineData {
    topology: Topology,
    polygon_mode: PolygonMode,
    cull_mode: CullMode,
    front_face: FrontFace,
    logic_op: LogicOp,

    src_color_blend_factor: BlendFactor,
    dst_color_blend_factor: BlendFactor,
    src_alpha_blend_factor: BlendFactor,
    dst_alpha_blend_factor: BlendFactor,
    color_blend_op: BlendOp,
    alpha_blend_op: BlendOp,
    color_write_mask: u8,

    depth_compare_op: CompareOp,
    front: StencilState,
    back: StencilState,

    line_width: f32,
    depth_bias_constant_factor: f32,
    depth_bias_clamp: f32,
    depth_bias_slope_factor: f32,
    min_depth_bounds: f32,
    max_depth_bounds: f32,

    primitive_restart_enable: bool,
    depth_clamp_enable: bool,
    rasterizer_discard_enable: bool,
    depth_bias_enable: bool,
    logic_op_enable: bool,
    blend_enable: bool,
    depth_test_enable: bool,
    depth_write_enable: bool,
    depth_bounds_test_enable: bool,
    stencil_test_enable: bool,
}

impl Default for PipelineData {
    fn default() -> PipelineData {
        PipelineData {
            topology: Topology::TriangleStrip,
            polygon_mode: PolygonMode::Fill,
            cull_mode: CullMode::None,
            front_face: FrontFace::CounterClockwise,
            logic_op: LogicOp::Clear,

            src_color_blend_factor: BlendFactor::One,
            dst_color_blend_factor: BlendFactor::Zero,
            src_alpha_blend_factor: BlendFactor::One,
            dst_alpha_blend_factor: BlendFactor::Zero,
            color_blend_op: BlendOp::Add,
            alpha_blend_op: BlendOp::Add,
            color_write_mask: COLOR_MASK_ALL,

            depth_compare_op: CompareOp::Always,
            front: Default::default(),
            back: Default::default(),

            line_width: 1.0,
            depth_bias_constant_factor: 0.0,
            depth_bias_clamp: 0.0,
            depth_bias_slope_factor: 0.0,
            min_depth_bounds: 0.0,
            max_depth_bounds: 0.0,

            primitive_restart_enable: false,
            depth_clamp_enable: false,
            rasterizer_discard_enable: false,
            depth_bias_enable: false,
            logic_op_enable: false,
            blend_enable: false,
            depth_test_enable: false,
            depth_write_enable: false,
            depth_bounds_test_enable: false,
            stencil_test_enable: false,
        }
    }
}

// Generates a getter and a setter for each of the given fields
macro_rules! accessors {
    ($($field:ident, $setter:ident: $type:ty;)*) => {
        $(
            pub fn $field(&self) -> $type {
                self.$field
            }

            pub fn $setter(&mut self, value: $type) {
                self.$field = value;
            }
        )*
    };
}

impl PipelineData {
    accessors! {
        topology, set_topology: Topology;
        polygon_mode, set_polygon_mode: PolygonMode;
        cull_mode, set_cull_mode: CullMode;
        front_face, set_front_face: FrontFace;
        logic_op, set_logic_op: LogicOp;

        src_color_blend_factor, set_src_color_blend_factor: BlendFactor;
        dst_color_blend_factor, set_dst_color_blend_factor: BlendFactor;
        src_alpha_blend_factor, set_src_alpha_blend_factor: BlendFactor;
        dst_alpha_blend_factor, set_dst_alpha_blend_factor: BlendFactor;
        color_blend_op, set_color_blend_op: BlendOp;
        alpha_blend_op, set_alpha_blend_op: BlendOp;
        color_write_mask, set_color_write_mask: u8;

        depth_compare_op, set_depth_compare_op: CompareOp;
        front, set_front: StencilState;
        back, set_back: StencilState;

        line_width, set_line_width: f32;
        depth_bias_constant_factor, set_depth_bias_constant_factor: f32;
        depth_bias_clamp, set_depth_bias_clamp: f32;
        depth_bias_slope_factor, set_depth_bias_slope_factor: f32;
        min_depth_bounds, set_min_depth_bounds: f32;
        max_depth_bounds, set_max_depth_bounds: f32;

        primitive_restart_enable, set_primitive_restart_enable: bool;
        depth_clamp_enable, set_depth_clamp_enable: bool;
        rasterizer_discard_enable, set_rasterizer_discard_enable: bool;
        depth_bias_enable, set_depth_bias_enable: bool;
        logic_op_enable, set_logic_op_enable: bool;
        blend_enable, set_blend_enable: bool;
        depth_test_enable, set_depth_test_enable: bool;
        depth_write_enable, set_depth_write_enable: bool;
        depth_bounds_test_enable, set_depth_bounds_test_enable: bool;
        stencil_test_enable, set_stencil_test_enable: bool;
    }

    pub fn front_mut(&mut self) -> &mut StencilState {
        &mut self.front
    }

    pub fn back_mut(&mut self) -> &mut StencilState {
        &mut self.back
    }
}
