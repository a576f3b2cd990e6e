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

//! The nodes that make up a parsed [Script](crate::script::Script).
//! Each section of the script produces at most one node.

use crate::command::Command;
use crate::feature::Feature;
use crate::format::Format;
use crate::pipeline_data::PipelineData;
use crate::shader_stage::Stage;
use crate::vertex_data::VertexData;
use serde::Serialize;
use std::fmt;

/// The extra data carried by the requirements that take an argument.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Argument {
    /// The format for a `framebuffer` or `depthstencil` requirement.
    Format(&'static Format),
    /// The size from an `fbsize` requirement.
    Size { width: u32, height: u32 },
    /// The minimum API version from a `vulkan` requirement.
    Version { major: u32, minor: u32, patch: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Requirement {
    pub feature: Feature,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument: Option<Argument>,
}

impl Requirement {
    pub fn new(feature: Feature) -> Requirement {
        Requirement { feature, argument: None }
    }

    pub fn with_argument(feature: Feature, argument: Argument) -> Requirement {
        Requirement { feature, argument: Some(argument) }
    }

    /// The format if this is a `framebuffer` or `depthstencil`
    /// requirement.
    pub fn format(&self) -> Option<&'static Format> {
        match self.argument {
            Some(Argument::Format(format)) => Some(format),
            _ => None,
        }
    }
}

/// The contents of a `[require]` section.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RequireNode {
    requirements: Vec<Requirement>,
    extensions: Vec<String>,
}

impl RequireNode {
    pub fn add_requirement(&mut self, requirement: Requirement) {
        self.requirements.push(requirement);
    }

    pub fn add_extension(&mut self, extension: String) {
        self.extensions.push(extension);
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// The extension names in the order they appeared.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty() && self.extensions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "source", rename_all = "snake_case")]
pub enum ShaderSource {
    Glsl(String),
    SpirvAsm(String),
    /// Already assembled SPIR-V words.
    Binary(Vec<u32>),
    /// A built-in vertex shader that copies the first attribute to the
    /// position.
    Passthrough,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShaderNode {
    pub stage: Stage,
    pub source: ShaderSource,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct IndicesNode {
    indices: Vec<u16>,
}

impl IndicesNode {
    pub fn new(indices: Vec<u16>) -> IndicesNode {
        IndicesNode { indices }
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }
}

/// The commands of a `[test]` section along with the pipeline state
/// that was set by the end of the section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestNode {
    commands: Vec<Command>,
    pipeline_data: PipelineData,
}

impl TestNode {
    pub fn new(commands: Vec<Command>, pipeline_data: PipelineData) -> Self {
        TestNode { commands, pipeline_data }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn pipeline_data(&self) -> &PipelineData {
        &self.pipeline_data
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Require(RequireNode),
    Shader(ShaderNode),
    VertexData(VertexData),
    Indices(IndicesNode),
    Test(TestNode),
}

impl Node {
    pub fn as_require(&self) -> Option<&RequireNode> {
        match self {
            Node::Require(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_shader(&self) -> Option<&ShaderNode> {
        match self {
            Node::Shader(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_vertex_data(&self) -> Option<&VertexData> {
        match self {
            Node::VertexData(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_indices(&self) -> Option<&IndicesNode> {
        match self {
            Node::Indices(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_test(&self) -> Option<&TestNode> {
        match self {
            Node::Test(node) => Some(node),
            _ => None,
        }
    }
}

/// Writes a one-line summary of the node.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Require(node) => write!(
                f,
                "require: {} features, {} extensions",
                node.requirements.len(),
                node.extensions.len(),
            ),
            Node::Shader(node) => {
                let kind = match &node.source {
                    ShaderSource::Glsl(_) => "GLSL",
                    ShaderSource::SpirvAsm(_) => "SPIR-V assembly",
                    ShaderSource::Binary(_) => "SPIR-V binary",
                    ShaderSource::Passthrough => "passthrough",
                };
                write!(f, "{} shader: {}", node.stage, kind)
            },
            Node::VertexData(node) => write!(
                f,
                "vertex data: {} attributes, {} vertices",
                node.headers().len(),
                node.rows().len(),
            ),
            Node::Indices(node) => {
                write!(f, "indices: {}", node.indices.len())
            },
            Node::Test(node) => {
                write!(f, "test: {} commands", node.commands.len())
            },
        }
    }
}
