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

use crate::datum_type::DatumType;
use crate::pipeline_data::{PipelineData, Topology};
use crate::shader_stage::Stage;
use crate::tolerance::Tolerance;
use crate::value::Value;
use serde::Serialize;
use std::fmt;

/// The comparison used by a `probe ssbo` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    /// The values must be exactly equal.
    Equal,
    /// The values must be different.
    NotEqual,
    /// The floating-point values must be equal within the current
    /// tolerance. For integer types this is the same as [Equal].
    ///
    /// [Equal]: Comparator::Equal
    FuzzyEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

static COMPARATOR_SYMBOLS: [(&str, Comparator); 7] = [
    ("==", Comparator::Equal),
    ("!=", Comparator::NotEqual),
    ("~=", Comparator::FuzzyEqual),
    ("<", Comparator::Less),
    ("<=", Comparator::LessOrEqual),
    (">", Comparator::Greater),
    (">=", Comparator::GreaterOrEqual),
];

impl Comparator {
    pub fn from_symbol(symbol: &str) -> Option<Comparator> {
        COMPARATOR_SYMBOLS
            .iter()
            .find(|&&(s, _)| s == symbol)
            .map(|&(_, comparator)| comparator)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Comparator::Equal => "==",
            Comparator::NotEqual => "!=",
            Comparator::FuzzyEqual => "~=",
            Comparator::Less => "<",
            Comparator::LessOrEqual => "<=",
            Comparator::Greater => ">",
            Comparator::GreaterOrEqual => ">=",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The kind of buffer updated by a [Operation::Buffer] command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BufferKind {
    Ssbo,
    Ubo,
    PushConstant,
}

/// The contents of a [Operation::Buffer] command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BufferData {
    /// Only sets the size of the buffer, as in `ssbo 5 40`.
    Size(u32),
    /// Values to write at the given byte offset.
    Subdata {
        datum_type: DatumType,
        offset: u32,
        values: Vec<Value>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Clear,
    ClearColor {
        r: f32,
        g: f32,
        b: f32,
        a: f32,
    },
    ClearDepth {
        value: f32,
    },
    ClearStencil {
        value: u32,
    },
    DrawRect {
        ortho: bool,
        patch: bool,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        pipeline: Box<PipelineData>,
    },
    DrawArrays {
        indexed: bool,
        instanced: bool,
        topology: Topology,
        first_vertex: u32,
        vertex_count: u32,
        instance_count: u32,
        pipeline: Box<PipelineData>,
    },
    Compute {
        x: u32,
        y: u32,
        z: u32,
        pipeline: Box<PipelineData>,
    },
    EntryPoint {
        stage: Stage,
        name: String,
    },
    PatchParameterVertices {
        count: u32,
    },
    /// A probe of the framebuffer. A probe of a single pixel has a
    /// width and height of 1. If `whole_window` is set then the
    /// coordinates are ignored. The alpha component is only used if
    /// `is_rgba` is set.
    Probe {
        relative: bool,
        whole_window: bool,
        is_rect: bool,
        is_rgba: bool,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: [f32; 4],
    },
    ProbeSsbo {
        descriptor_set: u32,
        binding: u32,
        offset: u32,
        comparator: Comparator,
        datum_type: DatumType,
        values: Vec<Value>,
    },
    /// An update to a buffer. Push constants don’t have a descriptor
    /// set or binding so these are left as zero.
    Buffer {
        kind: BufferKind,
        descriptor_set: u32,
        binding: u32,
        data: BufferData,
    },
    Tolerance {
        tolerances: Vec<Tolerance>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Command {
    /// The line in the script where the command starts.
    pub line_num: usize,
    pub op: Operation,
}

fn write_values(f: &mut fmt::Formatter, values: &[Value]) -> fmt::Result {
    for value in values {
        write!(f, " {}", value)?;
    }

    Ok(())
}

fn write_binding(
    f: &mut fmt::Formatter,
    descriptor_set: u32,
    binding: u32,
) -> fmt::Result {
    if descriptor_set == 0 {
        write!(f, "{}", binding)
    } else {
        write!(f, "{}:{}", descriptor_set, binding)
    }
}

impl Operation {
    fn fmt_probe(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Operation::Probe {
            relative,
            whole_window,
            is_rect,
            is_rgba,
            x,
            y,
            width,
            height,
            color,
        } = self else {
            return Ok(());
        };

        if *relative {
            write!(f, "relative ")?;
        }

        write!(f, "probe")?;

        if *whole_window {
            write!(f, " all")?;
        } else if *is_rect {
            write!(f, " rect")?;
        }

        write!(f, " {}", if *is_rgba { "rgba" } else { "rgb" })?;

        if !*whole_window {
            write!(f, " {} {}", x, y)?;

            if *is_rect {
                write!(f, " {} {}", width, height)?;
            }
        }

        let n_components = if *is_rgba { 4 } else { 3 };

        for component in &color[0..n_components] {
            write!(f, " {}", component)?;
        }

        Ok(())
    }
}

/// Writes the operation using the script syntax that would parse back
/// to the same operation.
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operation::Clear => write!(f, "clear"),
            Operation::ClearColor { r, g, b, a } => {
                write!(f, "clear color {} {} {} {}", r, g, b, a)
            },
            Operation::ClearDepth { value } => {
                write!(f, "clear depth {}", value)
            },
            Operation::ClearStencil { value } => {
                write!(f, "clear stencil {}", value)
            },
            Operation::DrawRect { ortho, patch, x, y, width, height, .. } => {
                write!(f, "draw rect")?;
                if *ortho {
                    write!(f, " ortho")?;
                }
                if *patch {
                    write!(f, " patch")?;
                }
                write!(f, " {} {} {} {}", x, y, width, height)
            },
            Operation::DrawArrays {
                indexed,
                instanced,
                topology,
                first_vertex,
                vertex_count,
                instance_count,
                ..
            } => {
                write!(f, "draw arrays")?;
                if *indexed {
                    write!(f, " indexed")?;
                }
                if *instanced {
                    write!(f, " instanced")?;
                }
                write!(
                    f,
                    " {} {} {}",
                    topology.draw_name(),
                    first_vertex,
                    vertex_count,
                )?;
                if *instanced {
                    write!(f, " {}", instance_count)?;
                }
                Ok(())
            },
            Operation::Compute { x, y, z, .. } => {
                write!(f, "compute {} {} {}", x, y, z)
            },
            Operation::EntryPoint { stage, name } => {
                write!(f, "{} entrypoint {}", stage, name)
            },
            Operation::PatchParameterVertices { count } => {
                write!(f, "patch parameter vertices {}", count)
            },
            Operation::Probe { .. } => self.fmt_probe(f),
            Operation::ProbeSsbo {
                descriptor_set,
                binding,
                offset,
                comparator,
                datum_type,
                values,
            } => {
                write!(f, "probe ssbo {} ", datum_type)?;
                write_binding(f, *descriptor_set, *binding)?;
                write!(f, " {} {}", offset, comparator)?;
                write_values(f, values)
            },
            Operation::Buffer { kind, descriptor_set, binding, data } => {
                match kind {
                    BufferKind::Ssbo => {
                        write!(f, "ssbo ")?;
                        write_binding(f, *descriptor_set, *binding)?;
                    },
                    BufferKind::Ubo => {
                        write!(f, "uniform ubo ")?;
                        write_binding(f, *descriptor_set, *binding)?;
                    },
                    BufferKind::PushConstant => write!(f, "uniform")?,
                }

                match data {
                    BufferData::Size(size) => write!(f, " {}", size),
                    BufferData::Subdata { datum_type, offset, values } => {
                        if *kind == BufferKind::Ssbo {
                            write!(f, " subdata")?;
                        }
                        write!(f, " {} {}", datum_type, offset)?;
                        write_values(f, values)
                    },
                }
            },
            Operation::Tolerance { tolerances } => {
                write!(f, "tolerance")?;
                for tolerance in tolerances {
                    write!(f, " {}", tolerance)?;
                }
                Ok(())
            },
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.op.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_comparator() {
        for &(symbol, comparator) in COMPARATOR_SYMBOLS.iter() {
            assert_eq!(Comparator::from_symbol(symbol), Some(comparator));
            assert_eq!(comparator.symbol(), symbol);
        }

        assert_eq!(Comparator::from_symbol("=>"), None);
        assert_eq!(Comparator::GreaterOrEqual.to_string(), ">=");
    }

    #[test]
    fn test_display() {
        let op = Operation::ClearColor { r: 1.0, g: 0.5, b: 0.25, a: 0.0 };
        assert_eq!(op.to_string(), "clear color 1 0.5 0.25 0");

        let op = Operation::DrawArrays {
            indexed: false,
            instanced: true,
            topology: Topology::LineListWithAdjacency,
            first_vertex: 2,
            vertex_count: 9,
            instance_count: 12,
            pipeline: Default::default(),
        };
        assert_eq!(
            op.to_string(),
            "draw arrays instanced LINE_LIST_WITH_ADJACENCY 2 9 12",
        );

        let op = Operation::Probe {
            relative: true,
            whole_window: false,
            is_rect: false,
            is_rgba: false,
            x: 25.0,
            y: 30.0,
            width: 1.0,
            height: 1.0,
            color: [0.2, 0.4, 0.6, 0.0],
        };
        assert_eq!(op.to_string(), "relative probe rgb 25 30 0.2 0.4 0.6");

        let op = Operation::Buffer {
            kind: BufferKind::Ssbo,
            descriptor_set: 9,
            binding: 5,
            data: BufferData::Size(40),
        };
        assert_eq!(op.to_string(), "ssbo 9:5 40");

        let op = Operation::Buffer {
            kind: BufferKind::PushConstant,
            descriptor_set: 0,
            binding: 0,
            data: BufferData::Subdata {
                datum_type: DatumType::from_name("ivec2").unwrap(),
                offset: 4,
                values: vec![Value::I32(-1), Value::I32(3)],
            },
        };
        assert_eq!(op.to_string(), "uniform ivec2 4 -1 3");

        let op = Operation::Tolerance {
            tolerances: vec![
                Tolerance::new(0.5, true),
                Tolerance::new(2.0, false),
            ],
        };
        assert_eq!(op.to_string(), "tolerance 0.5% 2");

        let op = Operation::EntryPoint {
            stage: Stage::TessCtrl,
            name: "main".to_owned(),
        };
        assert_eq!(op.to_string(), "tessellation control entrypoint main");
    }
}
