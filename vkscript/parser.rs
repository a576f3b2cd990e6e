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

//! Turns the sections of a script into [Node]s. Each kind of section
//! has its own block parser. The `[test]` section is handed to the
//! [CommandParser] and the `[vertex data]` section to the
//! [vertex data parser](vertex_data::Parser).

use crate::command_parser::CommandParser;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::feature::Feature;
use crate::format::Format;
use crate::nodes::{
    Argument, IndicesNode, Node, RequireNode, Requirement, ShaderNode,
    ShaderSource, TestNode,
};
use crate::section_parser::{
    trim_line_or_skip, Section, SectionKind, SectionParser, ShaderFormat,
};
use crate::shader_stage::Stage;
use crate::source::Source;
use crate::tokenizer::{Kind as TokenKind, Token, Tokenizer};
use crate::vertex_data;
use log::{debug, warn};

macro_rules! error_at_line {
    ($line_num:expr, $($format_arg:expr),+ $(,)?) => {
        Error::parse($line_num, format!($($format_arg),+))
    };
}

/// Collects the [Node]s for a script. Use [parse](Parser::parse) to
/// read a whole script or one of the `process_*_block` methods to
/// parse the body of a single section.
#[derive(Debug, Default)]
pub struct Parser {
    config: Config,
    nodes: Vec<Node>,
}

fn is_valid_extension_name(name: &str) -> bool {
    name.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

// Parses a version such as `1.2.3`. Missing parts are zero.
fn parse_version(s: &str) -> Option<(u32, u32, u32)> {
    let mut parts = [0u32; 3];

    for (i, part) in s.split('.').enumerate() {
        *parts.get_mut(i)? = part.parse::<u32>().ok()?;
    }

    Some((parts[0], parts[1], parts[2]))
}

fn check_requirement_end(tokenizer: &mut Tokenizer, name: &str) -> Result<()> {
    let token = tokenizer.next_token();

    if token.is_end() {
        Ok(())
    } else {
        Err(error_at_line!(
            token.line_num,
            "Extra parameter for {} requirement",
            name
        ))
    }
}

fn parse_format(
    tokenizer: &mut Tokenizer,
    line_num: usize,
) -> Result<&'static Format> {
    let token = tokenizer.next_token();

    if token.is_end() {
        return Err(error_at_line!(line_num, "Missing format name"));
    }

    match Format::lookup_by_name(&token.text) {
        Some(format) => Ok(format),
        None => Err(error_at_line!(line_num, "Unknown format: {}", token.text)),
    }
}

fn parse_fbsize(
    tokenizer: &mut Tokenizer,
    line_num: usize,
) -> Result<Argument> {
    let width = tokenizer.next_token().as_u32();
    let height = tokenizer.next_token().as_u32();

    match (width, height) {
        (Some(width), Some(height)) if tokenizer.peek_token().is_end() => {
            Ok(Argument::Size { width, height })
        },
        _ => Err(error_at_line!(line_num, "Invalid fbsize")),
    }
}

fn parse_vulkan_version(
    tokenizer: &mut Tokenizer,
    line_num: usize,
) -> Result<Argument> {
    let token = tokenizer.next_token();

    match parse_version(&token.text) {
        Some((major, minor, patch))
            if !token.is_end() && tokenizer.peek_token().is_end() =>
        {
            Ok(Argument::Version { major, minor, patch })
        },
        _ => Err(error_at_line!(line_num, "Invalid Vulkan version")),
    }
}

fn decode_binary(
    data: &mut Vec<u32>,
    line: &str,
    line_num: usize,
) -> Result<()> {
    let line = match trim_line_or_skip(line) {
        Some(l) => l,
        None => return Ok(()),
    };

    for part in line.split_whitespace() {
        let digits = part
            .strip_prefix("0x")
            .or_else(|| part.strip_prefix("0X"))
            .unwrap_or(part);

        match u32::from_str_radix(digits, 16) {
            Ok(value) => data.push(value),
            Err(_) => {
                return Err(error_at_line!(
                    line_num,
                    "Invalid hex value: {}",
                    part
                ));
            },
        }
    }

    Ok(())
}

// Whether the token is an unsigned integer that was too big to be
// lexed as one.
fn is_overflowed_integer(token: &Token) -> bool {
    let text = token.text.as_str();
    let digits = text.strip_prefix('+').unwrap_or(text);

    match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => {
            !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit())
        },
        None => {
            !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
        },
    }
}

fn index_value(token: &Token) -> Result<u16> {
    let value = match token.kind {
        TokenKind::Integer(v) if v >= 0 => v as u64,
        TokenKind::Hex(v) => v,
        TokenKind::Double(_) | TokenKind::String
            if is_overflowed_integer(token) =>
        {
            u64::MAX
        },
        _ => {
            return Err(error_at_line!(
                token.line_num,
                "Invalid value in indices block"
            ));
        },
    };

    u16::try_from(value).map_err(|_| {
        error_at_line!(token.line_num, "Value too large in indices block")
    })
}

impl Parser {
    pub fn new() -> Parser {
        Parser::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Parser {
        Parser { config, nodes: Vec::new() }
    }

    /// The nodes that have been parsed so far, in file order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// Reads the whole script from the source and adds a node for
    /// each section that has one. The first error stops the parse.
    pub fn parse(&mut self, source: &Source) -> Result<()> {
        let mut section_parser = SectionParser::new(source)?;

        section_parser.set_strict(self.config.strict());

        for section in section_parser.parse()? {
            self.process_section(&section)?;
        }

        Ok(())
    }

    pub fn process_section(&mut self, section: &Section) -> Result<()> {
        debug!(
            "line {}: [{}] section",
            section.first_line.saturating_sub(1),
            section.kind,
        );

        let body = &section.body;
        let first_line = section.first_line;

        match section.kind {
            SectionKind::Comment => Ok(()),
            SectionKind::Require => {
                self.process_require_block(body, first_line)
            },
            SectionKind::Shader { stage, format } => {
                self.process_shader_block(stage, format, body, first_line)
            },
            SectionKind::VertexShaderPassthrough => {
                self.nodes.push(Node::Shader(ShaderNode {
                    stage: Stage::Vertex,
                    source: ShaderSource::Passthrough,
                }));
                Ok(())
            },
            SectionKind::VertexData => {
                self.process_vertex_data_block(body, first_line)
            },
            SectionKind::Indices => {
                self.process_indices_block(body, first_line)
            },
            SectionKind::Test => self.process_test_block(body, first_line),
        }
    }

    fn process_require_line(
        tokenizer: &mut Tokenizer,
        node: &mut RequireNode,
        token: Token,
    ) -> Result<()> {
        let line_num = token.line_num;

        let name = match token.as_string() {
            Some(name) => name,
            None => {
                return Err(error_at_line!(line_num, "Invalid require line"));
            },
        };

        let requirement = match name {
            "framebuffer" | "depthstencil" => {
                let feature = if name == "framebuffer" {
                    Feature::Framebuffer
                } else {
                    Feature::DepthStencil
                };
                let format = parse_format(tokenizer, line_num)?;
                Requirement::with_argument(feature, Argument::Format(format))
            },
            "fbsize" => Requirement::with_argument(
                Feature::FramebufferSize,
                parse_fbsize(tokenizer, line_num)?,
            ),
            "vulkan" => Requirement::with_argument(
                Feature::VulkanVersion,
                parse_vulkan_version(tokenizer, line_num)?,
            ),
            _ => match Feature::from_device_feature_name(name) {
                Some(feature) => Requirement::new(feature),
                None if is_valid_extension_name(name) => {
                    check_requirement_end(tokenizer, name)?;
                    node.add_extension(name.to_owned());
                    return Ok(());
                },
                None => {
                    return Err(error_at_line!(
                        line_num,
                        "Invalid require line"
                    ));
                },
            },
        };

        check_requirement_end(tokenizer, requirement.feature.name())?;

        node.add_requirement(requirement);

        Ok(())
    }

    /// Parses the body of a `[require]` section. A node is only added
    /// if the body lists at least one feature or extension.
    pub fn process_require_block(
        &mut self,
        data: &str,
        first_line: usize,
    ) -> Result<()> {
        let mut tokenizer = Tokenizer::new(data, first_line);
        let mut node = RequireNode::default();

        loop {
            let token = tokenizer.next_token();

            if token.is_eos() {
                break;
            }

            if token.is_eol() {
                continue;
            }

            Parser::process_require_line(&mut tokenizer, &mut node, token)?;
        }

        if !node.is_empty() {
            self.nodes.push(Node::Require(node));
        }

        Ok(())
    }

    /// Parses the body of an `[indices]` section. A node is only added
    /// if there is at least one index.
    pub fn process_indices_block(
        &mut self,
        data: &str,
        first_line: usize,
    ) -> Result<()> {
        let mut tokenizer = Tokenizer::new(data, first_line);
        let mut indices = Vec::new();

        loop {
            let token = tokenizer.next_token();

            if token.is_eos() {
                break;
            }

            if token.is_eol() {
                continue;
            }

            indices.push(index_value(&token)?);
        }

        if !indices.is_empty() {
            self.nodes.push(Node::Indices(IndicesNode::new(indices)));
        }

        Ok(())
    }

    /// Parses the body of a `[vertex data]` section. A body with only
    /// comments or blank lines doesn’t add a node.
    pub fn process_vertex_data_block(
        &mut self,
        data: &str,
        first_line: usize,
    ) -> Result<()> {
        if let Some(vertex_data) =
            vertex_data::Parser::new(data, first_line).parse()?
        {
            self.nodes.push(Node::VertexData(vertex_data));
        }

        Ok(())
    }

    /// Parses the body of a `[test]` section. This always adds a node
    /// even if there are no commands.
    pub fn process_test_block(
        &mut self,
        data: &str,
        first_line: usize,
    ) -> Result<()> {
        let mut parser = CommandParser::new(data, first_line);

        parser.parse()?;

        let (commands, pipeline_data) = parser.into_parts();

        self.nodes.push(Node::Test(TestNode::new(commands, pipeline_data)));

        Ok(())
    }

    pub fn process_shader_block(
        &mut self,
        stage: Stage,
        format: ShaderFormat,
        data: &str,
        first_line: usize,
    ) -> Result<()> {
        let source = match format {
            ShaderFormat::Glsl => ShaderSource::Glsl(data.to_owned()),
            ShaderFormat::SpirvAsm => ShaderSource::SpirvAsm(data.to_owned()),
            ShaderFormat::SpirvHex => {
                let mut words = Vec::new();

                for (i, line) in data.lines().enumerate() {
                    decode_binary(&mut words, line, first_line + i)?;
                }

                ShaderSource::Binary(words)
            },
        };

        let is_empty = match &source {
            ShaderSource::Glsl(s) | ShaderSource::SpirvAsm(s) => {
                s.trim().is_empty()
            },
            ShaderSource::Binary(words) => words.is_empty(),
            ShaderSource::Passthrough => false,
        };

        if is_empty {
            warn!(
                "line {}: the {} shader section is empty",
                first_line.saturating_sub(1),
                stage,
            );
        }

        self.nodes.push(Node::Shader(ShaderNode { stage, source }));

        Ok(())
    }
}
