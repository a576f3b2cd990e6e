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

//! Parses the body of a `[test]` section into a list of [Command]s.
//!
//! Each command takes up one logical line. Lines setting a pipeline
//! property don’t produce a command but instead update the
//! [PipelineData] that is shared by the rest of the section. Draw and
//! compute commands take a snapshot of the pipeline state as it stood
//! when they were parsed.

use crate::command::{
    BufferData, BufferKind, Command, Comparator, Operation,
};
use crate::datum_type::DatumType;
use crate::error::{Error, Result, UnknownName};
use crate::pipeline_data::{
    self, BlendFactor, BlendOp, CompareOp, CullMode, FrontFace, LogicOp,
    PipelineData, PolygonMode, StencilOp, Topology,
};
use crate::shader_stage::Stage;
use crate::tokenizer::{Kind as TokenKind, Token, Tokenizer};
use crate::tolerance::Tolerance;
use crate::value::Value;
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchResult {
    Matched,
    NotMatched,
}

macro_rules! handle_match_result {
    ($func:expr) => {
        match $func? {
            MatchResult::NotMatched => (),
            MatchResult::Matched => return Ok(None),
        }
    };
}

macro_rules! error_at_line {
    ($parser:expr, $($format_arg:expr),+ $(,)?) => {
        Error::parse($parser.line_num, format!($($format_arg),+))
    };
}

// How the value of a pipeline property is parsed. The functions
// store the parsed value in the pipeline.
#[derive(Clone, Copy)]
enum Property {
    Bool(fn(&mut PipelineData, bool)),
    Float(fn(&mut PipelineData, f32)),
    // An enum with its own “Unknown value” message. Returns false if
    // the name isn’t recognised.
    Enum(fn(&mut PipelineData, &str) -> bool),
    CullMode,
    // An enum whose name parser reports its own error.
    Named(fn(&mut PipelineData, &str) -> std::result::Result<(), UnknownName>),
    Uint(fn(&mut PipelineData, u32)),
    ColorWriteMask,
}

macro_rules! enum_property {
    ($enum_type:ident, $setter:ident) => {
        Property::Enum(|pipeline, name| match $enum_type::from_name(name) {
            Some(value) => {
                pipeline.$setter(value);
                true
            },
            None => false,
        })
    };
}

macro_rules! named_property {
    ($enum_type:ident, $setter:ident) => {
        Property::Named(|pipeline, name| {
            $enum_type::parse(name).map(|value| pipeline.$setter(value))
        })
    };
    ($enum_type:ident, $face:ident . $field:ident) => {
        Property::Named(|pipeline, name| {
            $enum_type::parse(name).map(|value| {
                pipeline.$face().$field = value;
            })
        })
    };
}

// Sorted by name so that it can be binary searched
static PROPERTIES: [(&str, Property); 43] = [
    ("alphaBlendOp", named_property!(BlendOp, set_alpha_blend_op)),
    ("back.compareMask", Property::Uint(|p, v| p.back_mut().compare_mask = v)),
    ("back.compareOp", named_property!(CompareOp, back_mut.compare_op)),
    ("back.depthFailOp", named_property!(StencilOp, back_mut.depth_fail_op)),
    ("back.failOp", named_property!(StencilOp, back_mut.fail_op)),
    ("back.passOp", named_property!(StencilOp, back_mut.pass_op)),
    ("back.reference", Property::Uint(|p, v| p.back_mut().reference = v)),
    ("back.writeMask", Property::Uint(|p, v| p.back_mut().write_mask = v)),
    ("blendEnable", Property::Bool(PipelineData::set_blend_enable)),
    ("colorBlendOp", named_property!(BlendOp, set_color_blend_op)),
    ("colorWriteMask", Property::ColorWriteMask),
    ("cullMode", Property::CullMode),
    (
        "depthBiasClamp",
        Property::Float(PipelineData::set_depth_bias_clamp),
    ),
    (
        "depthBiasConstantFactor",
        Property::Float(PipelineData::set_depth_bias_constant_factor),
    ),
    (
        "depthBiasEnable",
        Property::Bool(PipelineData::set_depth_bias_enable),
    ),
    (
        "depthBiasSlopeFactor",
        Property::Float(PipelineData::set_depth_bias_slope_factor),
    ),
    (
        "depthBoundsTestEnable",
        Property::Bool(PipelineData::set_depth_bounds_test_enable),
    ),
    (
        "depthClampEnable",
        Property::Bool(PipelineData::set_depth_clamp_enable),
    ),
    ("depthCompareOp", named_property!(CompareOp, set_depth_compare_op)),
    (
        "depthTestEnable",
        Property::Bool(PipelineData::set_depth_test_enable),
    ),
    (
        "depthWriteEnable",
        Property::Bool(PipelineData::set_depth_write_enable),
    ),
    (
        "dstAlphaBlendFactor",
        named_property!(BlendFactor, set_dst_alpha_blend_factor),
    ),
    (
        "dstColorBlendFactor",
        named_property!(BlendFactor, set_dst_color_blend_factor),
    ),
    (
        "front.compareMask",
        Property::Uint(|p, v| p.front_mut().compare_mask = v),
    ),
    ("front.compareOp", named_property!(CompareOp, front_mut.compare_op)),
    ("front.depthFailOp", named_property!(StencilOp, front_mut.depth_fail_op)),
    ("front.failOp", named_property!(StencilOp, front_mut.fail_op)),
    ("front.passOp", named_property!(StencilOp, front_mut.pass_op)),
    ("front.reference", Property::Uint(|p, v| p.front_mut().reference = v)),
    ("front.writeMask", Property::Uint(|p, v| p.front_mut().write_mask = v)),
    ("frontFace", enum_property!(FrontFace, set_front_face)),
    ("lineWidth", Property::Float(PipelineData::set_line_width)),
    ("logicOp", enum_property!(LogicOp, set_logic_op)),
    ("logicOpEnable", Property::Bool(PipelineData::set_logic_op_enable)),
    ("maxDepthBounds", Property::Float(PipelineData::set_max_depth_bounds)),
    ("minDepthBounds", Property::Float(PipelineData::set_min_depth_bounds)),
    ("polygonMode", enum_property!(PolygonMode, set_polygon_mode)),
    (
        "primitiveRestartEnable",
        Property::Bool(PipelineData::set_primitive_restart_enable),
    ),
    (
        "rasterizerDiscardEnable",
        Property::Bool(PipelineData::set_rasterizer_discard_enable),
    ),
    (
        "srcAlphaBlendFactor",
        named_property!(BlendFactor, set_src_alpha_blend_factor),
    ),
    (
        "srcColorBlendFactor",
        named_property!(BlendFactor, set_src_color_blend_factor),
    ),
    (
        "stencilTestEnable",
        Property::Bool(PipelineData::set_stencil_test_enable),
    ),
    ("topology", enum_property!(Topology, set_topology)),
];

fn find_property(name: &str) -> Option<Property> {
    PROPERTIES
        .binary_search_by(|&(property_name, _)| property_name.cmp(name))
        .ok()
        .map(|pos| PROPERTIES[pos].1)
}

fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

// Parses either a plain binding number or “set:binding”
fn parse_binding(token: &Token) -> Option<(u32, u32)> {
    match token.kind {
        TokenKind::Integer(_) | TokenKind::Hex(_) => {
            token.as_u32().map(|binding| (0, binding))
        },
        TokenKind::String => {
            let (set, binding) = token.text.split_once(':')?;
            Some((set.parse().ok()?, binding.parse().ok()?))
        },
        _ => None,
    }
}

// Splits a list of bit names such as “A | B|C” into the names
fn bit_names(token: &Token) -> impl Iterator<Item = &str> {
    token.text.split('|').filter(|part| !part.is_empty())
}

fn stage_for_word(word: &str) -> Option<Stage> {
    match word {
        "vertex" => Some(Stage::Vertex),
        "geometry" => Some(Stage::Geometry),
        "fragment" => Some(Stage::Fragment),
        "compute" => Some(Stage::Compute),
        _ => None,
    }
}

/// Parser for the commands in a `[test]` section.
///
/// ```
/// use vkscript::command_parser::CommandParser;
///
/// let mut parser = CommandParser::new("lineWidth 3.0\ndraw rect 0 0 1 1", 1);
/// parser.parse().unwrap();
/// assert_eq!(parser.commands().len(), 1);
/// assert_eq!(parser.commands()[0].line_num, 2);
/// assert_eq!(parser.pipeline_data().line_width(), 3.0);
/// ```
#[derive(Debug)]
pub struct CommandParser<'a> {
    tokenizer: Tokenizer<'a>,
    // Line where the command currently being parsed starts
    line_num: usize,
    pipeline: PipelineData,
    commands: Vec<Command>,
}

impl<'a> CommandParser<'a> {
    /// Creates a parser for `data`. `first_line` is the line number of
    /// the first line of `data` within the whole script.
    pub fn new(data: &'a str, first_line: usize) -> CommandParser<'a> {
        CommandParser {
            tokenizer: Tokenizer::new(data, first_line),
            line_num: first_line,
            pipeline: PipelineData::default(),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// The pipeline state after all of the lines parsed so far.
    pub fn pipeline_data(&self) -> &PipelineData {
        &self.pipeline
    }

    pub fn into_parts(self) -> (Vec<Command>, PipelineData) {
        (self.commands, self.pipeline)
    }

    /// Parses all of the data. Parsing stops at the first error.
    pub fn parse(&mut self) -> Result<()> {
        loop {
            let token = self.tokenizer.next_token();

            if token.is_eos() {
                break Ok(());
            }

            if token.is_eol() {
                continue;
            }

            self.line_num = token.line_num;

            if let Some(op) = self.process_command(&token)? {
                trace!("line {}: {}", self.line_num, op);

                self.commands.push(Command { line_num: self.line_num, op });
            }
        }
    }

    fn process_command(&mut self, token: &Token) -> Result<Option<Operation>> {
        let name = match token.as_string() {
            Some(name) => name,
            None => {
                return Err(error_at_line!(
                    self,
                    "Command name must be a string"
                ));
            },
        };

        let op = match name {
            "clear" => self.process_clear()?,
            "draw" => self.process_draw()?,
            "compute" => self.process_compute()?,
            "patch" => self.process_patch()?,
            "probe" => self.process_probe(false)?,
            "relative" => self.process_relative()?,
            "ssbo" => self.process_ssbo()?,
            "uniform" => self.process_uniform()?,
            "tolerance" => self.process_tolerance()?,
            _ => {
                handle_match_result!(self.process_pipeline_property(name));

                if name == "tessellation" || stage_for_word(name).is_some() {
                    self.process_entrypoint(name)?
                } else {
                    return Err(error_at_line!(
                        self,
                        "Unknown command: {}",
                        name
                    ));
                }
            },
        };

        Ok(Some(op))
    }

    // Consumes the next token and returns whether it was the end of
    // the command
    fn at_end(&mut self) -> bool {
        self.tokenizer.next_token().is_end()
    }

    fn check_end(&mut self, message: &str) -> Result<()> {
        if self.at_end() {
            Ok(())
        } else {
            Err(error_at_line!(self, "{}", message))
        }
    }

    fn skip_word(&mut self, word: &str) -> bool {
        if self.tokenizer.peek_token().is_word(word) {
            self.tokenizer.next_token();
            true
        } else {
            false
        }
    }

    fn parse_f64(&mut self) -> Result<f64> {
        self.tokenizer
            .next_token()
            .to_f64()
            .ok_or_else(|| error_at_line!(self, "Invalid conversion to double"))
    }

    fn parse_f32(&mut self) -> Result<f32> {
        Ok(self.parse_f64()? as f32)
    }

    fn snapshot(&self) -> Box<PipelineData> {
        Box::new(self.pipeline.clone())
    }

    fn process_clear(&mut self) -> Result<Operation> {
        let token = self.tokenizer.next_token();

        if token.is_end() {
            return Ok(Operation::Clear);
        }

        match token.as_string() {
            Some("color") => {
                let r = self.parse_f32()?;
                let g = self.parse_f32()?;
                let b = self.parse_f32()?;
                let a = self.parse_f32()?;
                self.check_end("Extra parameter to clear color command")?;
                Ok(Operation::ClearColor { r, g, b, a })
            },
            Some("depth") => {
                let value = self.parse_f32()?;
                self.check_end("Extra parameter to clear depth command")?;
                Ok(Operation::ClearDepth { value })
            },
            Some("stencil") => {
                let token = self.tokenizer.next_token();

                if token.is_end() {
                    return Err(error_at_line!(
                        self,
                        "Missing stencil value for clear stencil command"
                    ));
                }

                let value = token.as_u32().ok_or_else(|| {
                    error_at_line!(
                        self,
                        "Invalid stencil value for clear stencil command"
                    )
                })?;

                self.check_end("Extra parameter to clear stencil command")?;

                Ok(Operation::ClearStencil { value })
            },
            _ => Err(error_at_line!(self, "Extra parameter to clear command")),
        }
    }

    fn process_draw(&mut self) -> Result<Operation> {
        if self.skip_word("rect") {
            self.process_draw_rect()
        } else if self.skip_word("arrays") {
            self.process_draw_arrays()
        } else {
            Err(error_at_line!(self, "Invalid value for draw command"))
        }
    }

    fn process_draw_rect(&mut self) -> Result<Operation> {
        let ortho = self.skip_word("ortho");
        let patch = self.skip_word("patch");

        let x = self.parse_f32()?;
        let y = self.parse_f32()?;
        let width = self.parse_f32()?;
        let height = self.parse_f32()?;

        self.check_end("Extra parameter to draw rect command")?;

        Ok(Operation::DrawRect {
            ortho,
            patch,
            x,
            y,
            width,
            height,
            pipeline: self.snapshot(),
        })
    }

    fn process_draw_arrays(&mut self) -> Result<Operation> {
        let indexed = self.skip_word("indexed");
        let instanced = self.skip_word("instanced");

        let token = self.tokenizer.next_token();

        let topology_name = token.as_string().ok_or_else(|| {
            error_at_line!(self, "Missing draw arrays topology")
        })?;

        let topology =
            Topology::from_draw_name(topology_name).ok_or_else(|| {
                error_at_line!(
                    self,
                    "Unknown parameter to draw arrays: {}",
                    topology_name
                )
            })?;

        let first_vertex =
            self.tokenizer.next_token().as_u32().ok_or_else(|| {
                error_at_line!(
                    self,
                    "Missing integer first vertex value for draw arrays"
                )
            })?;

        let vertex_count =
            self.tokenizer.next_token().as_u32().ok_or_else(|| {
                error_at_line!(
                    self,
                    "Missing integer vertex count value for draw arrays"
                )
            })?;

        let mut instance_count = 0;

        if instanced && !self.tokenizer.peek_token().is_end() {
            instance_count =
                self.tokenizer.next_token().as_u32().ok_or_else(|| {
                    error_at_line!(
                        self,
                        "Invalid instance count value for draw arrays"
                    )
                })?;
        }

        self.check_end("Extra parameter to draw arrays command")?;

        Ok(Operation::DrawArrays {
            indexed,
            instanced,
            topology,
            first_vertex,
            vertex_count,
            instance_count,
            pipeline: self.snapshot(),
        })
    }

    fn process_compute(&mut self) -> Result<Operation> {
        let token = self.tokenizer.peek_token();

        if token.is_word("entrypoint") {
            return self.process_entrypoint("compute");
        } else if token.is_string() {
            return Err(error_at_line!(self, "Unknown command: compute"));
        }

        let mut size = [0u32; 3];

        for (axis, value) in ["X", "Y", "Z"].iter().zip(size.iter_mut()) {
            *value = self.tokenizer.next_token().as_u32().ok_or_else(|| {
                error_at_line!(
                    self,
                    "Missing integer value for compute {} entry",
                    axis
                )
            })?;
        }

        self.check_end("Extra parameter to compute command")?;

        Ok(Operation::Compute {
            x: size[0],
            y: size[1],
            z: size[2],
            pipeline: self.snapshot(),
        })
    }

    fn process_entrypoint(&mut self, first_word: &str) -> Result<Operation> {
        let mut command = first_word.to_owned();

        let stage = if first_word == "tessellation" {
            let token = self.tokenizer.next_token();

            let stage = match token.as_string() {
                Some("evaluation") => Stage::TessEval,
                Some("control") => Stage::TessCtrl,
                _ => {
                    return Err(error_at_line!(
                        self,
                        "Tessellation entrypoint must have \
                         <evaluation|control> in name"
                    ));
                },
            };

            command.push(' ');
            command.push_str(&token.text);

            stage
        } else {
            match stage_for_word(first_word) {
                Some(stage) => stage,
                None => {
                    return Err(error_at_line!(
                        self,
                        "Unknown command: {}",
                        first_word
                    ));
                },
            }
        };

        if !self.skip_word("entrypoint") {
            return Err(error_at_line!(self, "Unknown command: {}", command));
        }

        let token = self.tokenizer.next_token();

        if token.is_end() {
            return Err(error_at_line!(self, "Missing entrypoint name"));
        }

        let name = match token.as_string() {
            Some(name) => name.to_owned(),
            None => {
                return Err(error_at_line!(
                    self,
                    "Entrypoint name must be a string"
                ));
            },
        };

        self.check_end("Extra parameter for entrypoint command")?;

        Ok(Operation::EntryPoint { stage, name })
    }

    fn process_patch(&mut self) -> Result<Operation> {
        if !self.skip_word("parameter") {
            return Err(error_at_line!(
                self,
                "Missing parameter flag to patch command"
            ));
        }

        if !self.skip_word("vertices") {
            return Err(error_at_line!(
                self,
                "Missing vertices flag to patch command"
            ));
        }

        let count = self.tokenizer.next_token().as_u32().ok_or_else(|| {
            error_at_line!(
                self,
                "Invalid count parameter for patch parameter vertices"
            )
        })?;

        self.check_end(
            "Extra parameter for patch parameter vertices command"
        )?;

        Ok(Operation::PatchParameterVertices { count })
    }

    fn process_relative(&mut self) -> Result<Operation> {
        if self.skip_word("probe") {
            self.process_probe(true)
        } else {
            Err(error_at_line!(self, "relative must be used with probe"))
        }
    }

    // Parses a tuple of values for a probe command. The tuple can
    // optionally be surrounded by brackets.
    fn parse_probe_tuple(&mut self, values: &mut [f32]) -> Result<()> {
        let bracketed = self.tokenizer.peek_token().is_open_bracket();

        if bracketed {
            self.tokenizer.next_token();
        }

        for value in values.iter_mut() {
            *value = self.parse_f32()?;
        }

        if bracketed {
            if !self.tokenizer.next_token().is_close_bracket() {
                return Err(error_at_line!(
                    self,
                    "Missing close bracket for probe command"
                ));
            }
        } else if self.tokenizer.peek_token().is_close_bracket() {
            return Err(error_at_line!(
                self,
                "Missing open bracket for probe command"
            ));
        }

        Ok(())
    }

    fn next_probe_word(&mut self) -> Result<Token> {
        let token = self.tokenizer.next_token();

        if token.is_string() {
            Ok(token)
        } else {
            Err(error_at_line!(self, "Invalid token in probe command"))
        }
    }

    fn process_probe(&mut self, relative: bool) -> Result<Operation> {
        if !relative && self.skip_word("ssbo") {
            return self.process_probe_ssbo();
        }

        let mut token = self.next_probe_word()?;

        let is_rect = token.is_word("rect");
        let whole_window = token.is_word("all");

        if is_rect || whole_window {
            token = self.next_probe_word()?;
        }

        let is_rgba = match token.as_string() {
            Some("rgb") => false,
            Some("rgba") => true,
            _ => {
                return Err(error_at_line!(
                    self,
                    "Invalid format specified to probe command"
                ));
            },
        };

        let mut position = [0.0, 0.0, 1.0, 1.0];

        if is_rect {
            self.parse_probe_tuple(&mut position)?;
        } else if !whole_window {
            self.parse_probe_tuple(&mut position[0..2])?;
        }

        let mut color = [0.0; 4];
        let n_components = if is_rgba { 4 } else { 3 };

        self.parse_probe_tuple(&mut color[0..n_components])?;

        self.check_end("Extra parameter to probe command")?;

        Ok(Operation::Probe {
            relative,
            whole_window,
            is_rect,
            is_rgba,
            x: position[0],
            y: position[1],
            width: position[2],
            height: position[3],
            color,
        })
    }

    fn parse_datum_type(
        &mut self,
        token: &Token,
        command: &str,
    ) -> Result<DatumType> {
        match token.as_string() {
            Some(name) => DatumType::from_name(name)
                .map_err(|e| error_at_line!(self, "{}", e)),
            None if token.is_end() => Err(error_at_line!(
                self,
                "Missing type for {} command",
                command,
            )),
            None => Err(error_at_line!(
                self,
                "Invalid type provided: {}",
                token,
            )),
        }
    }

    // Parses the rest of the line as values of the given type. The
    // number of values must be a multiple of the number of components
    // in the type.
    fn parse_values(
        &mut self,
        datum_type: DatumType,
        command: &str,
    ) -> Result<Vec<Value>> {
        let mut values = Vec::new();

        loop {
            let token = self.tokenizer.next_token();

            if token.is_end() {
                break;
            }

            match datum_type.value_from_token(&token) {
                Some(value) => values.push(value),
                None => {
                    return Err(error_at_line!(
                        self,
                        "Invalid value provided to {} command: {}",
                        command,
                        token,
                    ));
                },
            }
        }

        if values.is_empty() || values.len() % datum_type.element_count() != 0
        {
            return Err(error_at_line!(
                self,
                "Incorrect number of values provided to {} command",
                command,
            ));
        }

        Ok(values)
    }

    fn process_probe_ssbo(&mut self) -> Result<Operation> {
        let token = self.tokenizer.next_token();
        let datum_type = self.parse_datum_type(&token, "probe ssbo")?;

        let (descriptor_set, binding) =
            parse_binding(&self.tokenizer.next_token()).ok_or_else(|| {
                error_at_line!(
                    self,
                    "Invalid binding value for probe ssbo command"
                )
            })?;

        let token = self.tokenizer.next_token();

        let offset = match token.kind {
            TokenKind::Integer(_)
                | TokenKind::Hex(_)
                | TokenKind::Double(_) => token.as_u32().ok_or_else(|| {
                error_at_line!(self, "Invalid offset for probe ssbo command")
            })?,
            _ => {
                return Err(error_at_line!(
                    self,
                    "Invalid value for probe ssbo command"
                ));
            },
        };

        let token = self.tokenizer.next_token();

        let comparator = token
            .as_string()
            .and_then(Comparator::from_symbol)
            .ok_or_else(|| error_at_line!(self, "Invalid comparator"))?;

        let values = self.parse_values(datum_type, "probe ssbo")?;

        Ok(Operation::ProbeSsbo {
            descriptor_set,
            binding,
            offset,
            comparator,
            datum_type,
            values,
        })
    }

    fn process_ssbo(&mut self) -> Result<Operation> {
        let token = self.tokenizer.next_token();

        if token.is_end() {
            return Err(error_at_line!(
                self,
                "Missing binding and size values for ssbo command"
            ));
        }

        let (descriptor_set, binding) =
            parse_binding(&token).ok_or_else(|| {
                error_at_line!(self, "Invalid binding value for ssbo command")
            })?;

        let token = self.tokenizer.next_token();

        let data = match token.kind {
            TokenKind::Eol | TokenKind::Eos => {
                return Err(error_at_line!(
                    self,
                    "Missing size value for ssbo command"
                ));
            },
            TokenKind::Integer(_)
                | TokenKind::Hex(_)
                | TokenKind::Double(_) => {
                let size = token.as_u32().ok_or_else(|| {
                    error_at_line!(self, "Invalid size value for ssbo command")
                })?;

                self.check_end("Extra parameter for ssbo command")?;

                BufferData::Size(size)
            },
            _ if token.is_word("subdata") => {
                let token = self.tokenizer.next_token();
                let datum_type = self.parse_datum_type(&token, "ssbo")?;

                let offset =
                    self.tokenizer.next_token().as_u32().ok_or_else(|| {
                        error_at_line!(self, "Invalid offset for ssbo command")
                    })?;

                let values = self.parse_values(datum_type, "ssbo")?;

                BufferData::Subdata { datum_type, offset, values }
            },
            _ => {
                return Err(error_at_line!(
                    self,
                    "Invalid value for ssbo command"
                ));
            },
        };

        Ok(Operation::Buffer {
            kind: BufferKind::Ssbo,
            descriptor_set,
            binding,
            data,
        })
    }

    fn process_uniform(&mut self) -> Result<Operation> {
        let mut token = self.tokenizer.next_token();

        let (kind, descriptor_set, binding) = if token.is_word("ubo") {
            let (descriptor_set, binding) =
                parse_binding(&self.tokenizer.next_token()).ok_or_else(
                    || {
                        error_at_line!(
                            self,
                            "Invalid binding value for uniform ubo command"
                        )
                    },
                )?;

            token = self.tokenizer.next_token();

            (BufferKind::Ubo, descriptor_set, binding)
        } else {
            (BufferKind::PushConstant, 0, 0)
        };

        let datum_type = self.parse_datum_type(&token, "uniform")?;

        let offset = self.tokenizer.next_token().as_u32().ok_or_else(|| {
            error_at_line!(self, "Invalid offset value for uniform command")
        })?;

        let values = self.parse_values(datum_type, "uniform")?;

        Ok(Operation::Buffer {
            kind,
            descriptor_set,
            binding,
            data: BufferData::Subdata { datum_type, offset, values },
        })
    }

    fn process_tolerance(&mut self) -> Result<Operation> {
        let mut tolerances = Vec::new();

        loop {
            let token = self.tokenizer.next_token();

            if token.is_end() {
                break;
            }

            let value = match token.kind {
                TokenKind::Integer(v) => v as f64,
                TokenKind::Double(v) => v,
                _ => {
                    return Err(error_at_line!(
                        self,
                        "Invalid value for tolerance command"
                    ));
                },
            };

            let is_percent = self.tokenizer.peek_token().is_percent();

            if is_percent {
                self.tokenizer.next_token();
            }

            if tolerances.len() >= 4 {
                return Err(error_at_line!(
                    self,
                    "Extra parameter for tolerance command"
                ));
            }

            tolerances.push(Tolerance::new(value, is_percent));
        }

        match tolerances.len() {
            0 => Err(error_at_line!(
                self,
                "Missing value for tolerance command"
            )),
            1 | 4 => Ok(Operation::Tolerance { tolerances }),
            _ => Err(error_at_line!(
                self,
                "Invalid number of tolerance parameters provided"
            )),
        }
    }

    fn process_pipeline_property(&mut self, name: &str) -> Result<MatchResult> {
        let property = match find_property(name) {
            Some(property) => property,
            None => return Ok(MatchResult::NotMatched),
        };

        let token = self.tokenizer.next_token();

        match property {
            Property::Bool(setter) => {
                let value = self.property_word(&token, name)?;

                let value = parse_bool(value).ok_or_else(|| {
                    error_at_line!(
                        self,
                        "Invalid value passed as a boolean string"
                    )
                })?;

                setter(&mut self.pipeline, value);
            },
            Property::Float(setter) => {
                if token.is_end() {
                    return Err(self.missing_value(name));
                }

                let value = token.to_f64().ok_or_else(|| {
                    error_at_line!(self, "Invalid conversion to double")
                })?;

                setter(&mut self.pipeline, value as f32);
            },
            Property::Enum(setter) => {
                let value = self.property_word(&token, name)?;

                if !setter(&mut self.pipeline, value) {
                    return Err(error_at_line!(
                        self,
                        "Unknown value for {} command",
                        name
                    ));
                }
            },
            Property::CullMode => {
                return self.process_cull_mode(token, name);
            },
            Property::Named(setter) => {
                let value = self.property_parameter(&token, name)?;

                if let Err(e) = setter(&mut self.pipeline, value) {
                    return Err(error_at_line!(self, "{}", e));
                }
            },
            Property::Uint(setter) => {
                if token.is_end() {
                    return Err(self.missing_parameter(name));
                }

                let value = token.as_u32().ok_or_else(|| {
                    error_at_line!(
                        self,
                        "Invalid parameter for {} command",
                        name
                    )
                })?;

                setter(&mut self.pipeline, value);
            },
            Property::ColorWriteMask => {
                return self.process_color_write_mask(token, name);
            },
        }

        if self.at_end() {
            Ok(MatchResult::Matched)
        } else {
            Err(error_at_line!(self, "Extra parameter for {} command", name))
        }
    }

    fn missing_value(&self, name: &str) -> Error {
        error_at_line!(self, "Missing value for {} command", name)
    }

    fn missing_parameter(&self, name: &str) -> Error {
        error_at_line!(self, "Missing parameter for {} command", name)
    }

    // Gets the word used as the value of a boolean or enum property
    fn property_word<'t>(
        &self,
        token: &'t Token,
        name: &str,
    ) -> Result<&'t str> {
        if token.is_end() {
            return Err(self.missing_value(name));
        }

        token.as_string().ok_or_else(|| {
            error_at_line!(self, "Invalid value for {} command", name)
        })
    }

    // Same as property_word but for the properties that use the word
    // “parameter” in their error messages
    fn property_parameter<'t>(
        &self,
        token: &'t Token,
        name: &str,
    ) -> Result<&'t str> {
        if token.is_end() {
            return Err(self.missing_parameter(name));
        }

        token.as_string().ok_or_else(|| {
            error_at_line!(self, "Invalid parameter for {} command", name)
        })
    }

    fn process_cull_mode(
        &mut self,
        mut token: Token,
        name: &str,
    ) -> Result<MatchResult> {
        if token.is_end() {
            return Err(self.missing_value(name));
        }

        let mut cull_mode = CullMode::None;

        while !token.is_end() {
            if !token.is_string() {
                return Err(error_at_line!(
                    self,
                    "Invalid value for {} command",
                    name
                ));
            }

            for part in bit_names(&token) {
                let mode = CullMode::from_name(part).ok_or_else(|| {
                    error_at_line!(self, "Unknown value for {} command", name)
                })?;

                cull_mode = cull_mode.union(mode);
            }

            token = self.tokenizer.next_token();
        }

        self.pipeline.set_cull_mode(cull_mode);

        Ok(MatchResult::Matched)
    }

    fn process_color_write_mask(
        &mut self,
        mut token: Token,
        name: &str,
    ) -> Result<MatchResult> {
        if token.is_end() {
            return Err(self.missing_parameter(name));
        }

        let mut mask = 0;

        while !token.is_end() {
            if !token.is_string() {
                return Err(error_at_line!(
                    self,
                    "Unknown parameter for {} command",
                    name
                ));
            }

            for part in bit_names(&token) {
                mask |= pipeline_data::color_component_bit(part).ok_or_else(
                    || {
                        error_at_line!(
                            self,
                            "Unknown parameter for {} command",
                            name
                        )
                    },
                )?;
            }

            token = self.tokenizer.next_token();
        }

        self.pipeline.set_color_write_mask(mask);

        Ok(MatchResult::Matched)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(data: &str) -> CommandParser {
        let mut parser = CommandParser::new(data, 1);

        if let Err(e) = parser.parse() {
            panic!("parsing “{}” failed: {}", data, e);
        }

        parser
    }

    fn parse_op(data: &str) -> Operation {
        let parser = parse(data);
        assert_eq!(parser.commands().len(), 1, "{}", data);
        parser.commands()[0].op.clone()
    }

    fn check_error(data: &str, message: &str) {
        let mut parser = CommandParser::new(data, 1);

        match parser.parse() {
            Ok(()) => panic!("“{}” was expected to fail", data),
            Err(e) => assert_eq!(e.message(), message, "{}", data),
        }
    }

    #[test]
    fn test_properties_sorted() {
        for pair in PROPERTIES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
        }

        assert!(find_property("lineWidth").is_some());
        assert!(find_property("linewidth").is_none());
    }

    #[test]
    fn test_multiple_commands() {
        let parser = parse(
            "# comment\n\
             clear color 1 0.4 0.5 0.2\n\
             \n\
             clear\n\
             draw rect -1 -1 2 2\n"
        );

        let line_nums = parser
            .commands()
            .iter()
            .map(|c| c.line_num)
            .collect::<Vec<_>>();

        assert_eq!(line_nums, [2, 4, 5]);
        assert_eq!(parser.commands()[1].op, Operation::Clear);

        let mut parser = CommandParser::new("clear\n\nclear depth", 10);
        let e = parser.parse().unwrap_err();
        assert_eq!(e.to_string(), "line 12: Invalid conversion to double");
        assert_eq!(parser.commands().len(), 1);
    }

    #[test]
    fn test_unknown_command() {
        check_error("unknown", "Unknown command: unknown");
        check_error("1.5 2", "Command name must be a string");
        check_error("(", "Command name must be a string");
    }

    #[test]
    fn test_clear() {
        assert_eq!(parse_op("clear"), Operation::Clear);
        assert_eq!(
            parse_op("clear color 1 0.4 0.5 0.2"),
            Operation::ClearColor { r: 1.0, g: 0.4, b: 0.5, a: 0.2 },
        );
        assert_eq!(
            parse_op("clear depth 0.8"),
            Operation::ClearDepth { value: 0.8 },
        );
        assert_eq!(
            parse_op("clear stencil 8"),
            Operation::ClearStencil { value: 8 },
        );

        check_error("clear EXTRA", "Extra parameter to clear command");
        check_error("clear depth", "Invalid conversion to double");
        check_error(
            "clear depth 1 EXTRA",
            "Extra parameter to clear depth command",
        );
        check_error(
            "clear stencil",
            "Missing stencil value for clear stencil command",
        );
        check_error(
            "clear stencil 2.3",
            "Invalid stencil value for clear stencil command",
        );
        check_error(
            "clear stencil -1",
            "Invalid stencil value for clear stencil command",
        );
        check_error(
            "clear stencil 2 EXTRA",
            "Extra parameter to clear stencil command",
        );
        check_error("clear color 1 2 3", "Invalid conversion to double");
        check_error("clear color 1 2 X 4", "Invalid conversion to double");
        check_error(
            "clear color 1 2 3 4 5",
            "Extra parameter to clear color command",
        );
    }

    #[test]
    fn test_draw_rect() {
        match parse_op("draw rect 1.2 2.3 200 400.2") {
            Operation::DrawRect { ortho, patch, x, y, width, height, .. } => {
                assert!(!ortho);
                assert!(!patch);
                assert_eq!((x, y, width, height), (1.2, 2.3, 200.0, 400.2));
            },
            op => unreachable!("{:?}", op),
        }

        assert!(matches!(
            parse_op("draw rect ortho 1 2 3 4"),
            Operation::DrawRect { ortho: true, patch: false, .. },
        ));
        assert!(matches!(
            parse_op("draw rect patch 1 2 3 4"),
            Operation::DrawRect { ortho: false, patch: true, .. },
        ));
        assert!(matches!(
            parse_op("draw rect ortho patch 1 2 3 4"),
            Operation::DrawRect { ortho: true, patch: true, .. },
        ));

        check_error("draw rect 1.2 2.3 400.2", "Invalid conversion to double");
        check_error("draw rect patch ortho 1 2 3 4", "Invalid conversion to double");
        check_error(
            "draw rect 1 2 3 4 EXTRA",
            "Extra parameter to draw rect command",
        );
        check_error("draw something", "Invalid value for draw command");
    }

    #[test]
    fn test_draw_arrays() {
        match parse_op("draw arrays instanced LINE_LIST_WITH_ADJACENCY 2 9 12") {
            Operation::DrawArrays {
                indexed,
                instanced,
                topology,
                first_vertex,
                vertex_count,
                instance_count,
                ..
            } => {
                assert!(!indexed);
                assert!(instanced);
                assert_eq!(topology, Topology::LineListWithAdjacency);
                assert_eq!(first_vertex, 2);
                assert_eq!(vertex_count, 9);
                assert_eq!(instance_count, 12);
            },
            op => unreachable!("{:?}", op),
        }

        assert!(matches!(
            parse_op("draw arrays indexed GL_TRIANGLES 0 3"),
            Operation::DrawArrays {
                indexed: true,
                instanced: false,
                topology: Topology::TriangleList,
                instance_count: 0,
                ..
            },
        ));

        check_error("draw arrays 1 2 3", "Missing draw arrays topology");
        check_error(
            "draw arrays UNKNOWN 1 2",
            "Unknown parameter to draw arrays: UNKNOWN",
        );
        check_error(
            "draw arrays POINT_LIST",
            "Missing integer first vertex value for draw arrays",
        );
        check_error(
            "draw arrays POINT_LIST 1.5 2",
            "Missing integer first vertex value for draw arrays",
        );
        check_error(
            "draw arrays POINT_LIST 1",
            "Missing integer vertex count value for draw arrays",
        );
        check_error(
            "draw arrays POINT_LIST 1 2 3",
            "Extra parameter to draw arrays command",
        );
        check_error(
            "draw arrays instanced POINT_LIST 1 2 3 4",
            "Extra parameter to draw arrays command",
        );
    }

    #[test]
    fn test_pipeline_snapshot() {
        let parser = parse(
            "lineWidth 2\n\
             draw rect 0 0 1 1\n\
             lineWidth 4\n\
             compute 1 1 1\n"
        );

        match &parser.commands()[0].op {
            Operation::DrawRect { pipeline, .. } => {
                assert_eq!(pipeline.line_width(), 2.0);
            },
            op => unreachable!("{:?}", op),
        }

        match &parser.commands()[1].op {
            Operation::Compute { pipeline, .. } => {
                assert_eq!(pipeline.line_width(), 4.0);
            },
            op => unreachable!("{:?}", op),
        }

        assert_eq!(parser.pipeline_data().line_width(), 4.0);
    }

    #[test]
    fn test_compute() {
        assert!(matches!(
            parse_op("compute 1 2 3"),
            Operation::Compute { x: 1, y: 2, z: 3, .. },
        ));

        check_error("compute 1.2 2 3", "Missing integer value for compute X entry");
        check_error("compute 1 a 3", "Missing integer value for compute Y entry");
        check_error("compute 1 2", "Missing integer value for compute Z entry");
        check_error("compute 1 2 3 4", "Extra parameter to compute command");
    }

    #[test]
    fn test_entrypoint() {
        let stages = [
            ("vertex", Stage::Vertex),
            ("tessellation control", Stage::TessCtrl),
            ("tessellation evaluation", Stage::TessEval),
            ("geometry", Stage::Geometry),
            ("fragment", Stage::Fragment),
            ("compute", Stage::Compute),
        ];

        for (name, stage) in stages {
            assert_eq!(
                parse_op(&format!("{} entrypoint main", name)),
                Operation::EntryPoint { stage, name: "main".to_owned() },
            );

            check_error(
                &format!("{} entrypoint", name),
                "Missing entrypoint name",
            );
            check_error(
                &format!("{} entrypoint main EXTRA", name),
                "Extra parameter for entrypoint command",
            );
            check_error(
                &format!("{} entrypoint 123", name),
                "Entrypoint name must be a string",
            );
        }

        for name in [
            "vertex",
            "fragment",
            "geometry",
            "compute",
            "tessellation evaluation",
            "tessellation control",
        ] {
            check_error(
                &format!("{} main", name),
                &format!("Unknown command: {}", name),
            );
        }

        check_error(
            "tessellation entrypoint main",
            "Tessellation entrypoint must have <evaluation|control> in name",
        );
        check_error(
            "tessellation unknown entrypoint main",
            "Tessellation entrypoint must have <evaluation|control> in name",
        );
        check_error("unknown entrypoint main", "Unknown command: unknown");
    }

    #[test]
    fn test_patch_parameter_vertices() {
        assert_eq!(
            parse_op("patch parameter vertices 9"),
            Operation::PatchParameterVertices { count: 9 },
        );

        check_error("patch vertices 3", "Missing parameter flag to patch command");
        check_error("patch parameter 3", "Missing vertices flag to patch command");
        check_error(
            "patch parameter vertices invalid",
            "Invalid count parameter for patch parameter vertices",
        );
        check_error(
            "patch parameter vertices 3 EXTRA",
            "Extra parameter for patch parameter vertices command",
        );
    }

    #[test]
    fn test_probe() {
        for relative in [false, true] {
            let prefix = if relative { "relative " } else { "" };

            assert_eq!(
                parse_op(&format!("{}probe rgb 25 30 0.2 0.4 0.6", prefix)),
                Operation::Probe {
                    relative,
                    whole_window: false,
                    is_rect: false,
                    is_rgba: false,
                    x: 25.0,
                    y: 30.0,
                    width: 1.0,
                    height: 1.0,
                    color: [0.2, 0.4, 0.6, 0.0],
                },
            );

            assert_eq!(
                parse_op(&format!(
                    "{}probe rect rgba 25 30 200 400 1 255 9 4",
                    prefix
                )),
                Operation::Probe {
                    relative,
                    whole_window: false,
                    is_rect: true,
                    is_rgba: true,
                    x: 25.0,
                    y: 30.0,
                    width: 200.0,
                    height: 400.0,
                    color: [1.0, 255.0, 9.0, 4.0],
                },
            );
        }

        assert!(matches!(
            parse_op("probe all rgba 0.2 0.3 0.4 0.5"),
            Operation::Probe {
                relative: false,
                whole_window: true,
                is_rgba: true,
                color: [0.2, 0.3, 0.4, 0.5],
                ..
            },
        ));
        assert!(matches!(
            parse_op("probe all rgb 0.2 0.3 0.4"),
            Operation::Probe { whole_window: true, is_rgba: false, .. },
        ));
    }

    #[test]
    fn test_probe_brackets() {
        let expected = parse_op("relative probe rect rgb 0.5 0.6 0.3 0.4 1 2 3");

        for data in [
            "relative probe rect rgb (0.5, 0.6, 0.3, 0.4) 1 2 3",
            "relative probe rect rgb 0.5 0.6 0.3 0.4 (1, 2, 3)",
            "relative probe rect rgb 0.5, 0.6, 0.3 0.4 1 2 3",
            "relative probe rect rgb (0.5 0.6 0.3 0.4) (1 2 3)",
        ] {
            assert_eq!(parse_op(data), expected, "{}", data);
        }

        check_error(
            "probe rgb (10 30 0.2 0.3 0.4",
            "Missing close bracket for probe command",
        );
        check_error(
            "probe rgb 10 30) 0.2 0.3 0.4",
            "Missing open bracket for probe command",
        );
        check_error(
            "probe rgb 10 30 (0.2 0.3 0.4",
            "Missing close bracket for probe command",
        );
        check_error(
            "probe rgb 10 30 0.2 0.3 0.4)",
            "Missing open bracket for probe command",
        );
    }

    #[test]
    fn test_probe_errors() {
        check_error("relative unknown", "relative must be used with probe");
        check_error("probe 1", "Invalid token in probe command");
        check_error("probe rect 1", "Invalid token in probe command");
        check_error(
            "probe rect unknown",
            "Invalid format specified to probe command",
        );
        check_error(
            "probe all unknown",
            "Invalid format specified to probe command",
        );
        check_error("probe rgb ab 30 1 2 3", "Invalid conversion to double");
        check_error("probe rgb 10 30 1 2", "Invalid conversion to double");
        check_error("probe all rgba 2 3 4 ab", "Invalid conversion to double");
        check_error(
            "probe rgb 10 30 0.2 0.3 0.4 extra",
            "Extra parameter to probe command",
        );
        check_error(
            "relative probe rgba 10 30 0.2 0.3 0.4 0.4 extra",
            "Extra parameter to probe command",
        );
        check_error(
            "probe all rgb 0.2 0.3 0.4 0.5",
            "Extra parameter to probe command",
        );
    }

    #[test]
    fn test_bool_properties() {
        for value in ["TRUE", "true", "TRuE"] {
            let data = format!("depthTestEnable {}", value);
            let parser = parse(&data);
            assert!(parser.pipeline_data().depth_test_enable());
        }

        for value in ["FALSE", "false", "FAlsE"] {
            let data = format!(
                "depthTestEnable true\ndepthTestEnable {}",
                value
            );
            let parser = parse(&data);
            assert!(!parser.pipeline_data().depth_test_enable());
        }

        let parser = parse(
            "primitiveRestartEnable true\n\
             stencilTestEnable true\n\
             blendEnable true"
        );
        let pipeline = parser.pipeline_data();
        assert!(pipeline.primitive_restart_enable());
        assert!(pipeline.stencil_test_enable());
        assert!(pipeline.blend_enable());
        assert!(!pipeline.logic_op_enable());
        assert!(parser.commands().is_empty());

        check_error("blendEnable", "Missing value for blendEnable command");
        check_error("blendEnable 1", "Invalid value for blendEnable command");
        check_error(
            "blendEnable yes",
            "Invalid value passed as a boolean string",
        );
        check_error(
            "blendEnable true EXTRA",
            "Extra parameter for blendEnable command",
        );
    }

    #[test]
    fn test_float_properties() {
        let parser = parse(
            "depthBiasConstantFactor 3.4\n\
             lineWidth 2\n\
             depthBiasClamp -1.5\n\
             depthBiasSlopeFactor 0.25\n\
             minDepthBounds 0.1\n\
             maxDepthBounds 0.9"
        );
        let pipeline = parser.pipeline_data();
        assert_eq!(pipeline.depth_bias_constant_factor(), 3.4);
        assert_eq!(pipeline.line_width(), 2.0);
        assert_eq!(pipeline.depth_bias_clamp(), -1.5);
        assert_eq!(pipeline.depth_bias_slope_factor(), 0.25);
        assert_eq!(pipeline.min_depth_bounds(), 0.1);
        assert_eq!(pipeline.max_depth_bounds(), 0.9);

        check_error("lineWidth", "Missing value for lineWidth command");
        check_error("lineWidth INVALID", "Invalid conversion to double");
        check_error("lineWidth 1 EXTRA", "Extra parameter for lineWidth command");
    }

    #[test]
    fn test_enum_properties() {
        let parser = parse(
            "topology VK_PRIMITIVE_TOPOLOGY_PATCH_LIST\n\
             polygonMode VK_POLYGON_MODE_LINE\n\
             frontFace VK_FRONT_FACE_CLOCKWISE\n\
             logicOp VK_LOGIC_OP_NAND"
        );
        let pipeline = parser.pipeline_data();
        assert_eq!(pipeline.topology(), Topology::PatchList);
        assert_eq!(pipeline.polygon_mode(), PolygonMode::Line);
        assert_eq!(pipeline.front_face(), FrontFace::Clockwise);
        assert_eq!(pipeline.logic_op(), LogicOp::Nand);

        for (name, arg) in [
            ("topology", "VK_PRIMITIVE_TOPOLOGY_POINT_LIST"),
            ("polygonMode", "VK_POLYGON_MODE_POINT"),
            ("cullMode", "VK_CULL_MODE_BACK_BIT"),
            ("frontFace", "VK_FRONT_FACE_COUNTER_CLOCKWISE"),
            ("logicOp", "VK_LOGIC_OP_NO_OP"),
        ] {
            check_error(
                &format!("{} 123", name),
                &format!("Invalid value for {} command", name),
            );
            check_error(name, &format!("Missing value for {} command", name));
            check_error(
                &format!("{} UNKNOWN", name),
                &format!("Unknown value for {} command", name),
            );

            if name != "cullMode" {
                check_error(
                    &format!("{} {} EXTRA", name, arg),
                    &format!("Extra parameter for {} command", name),
                );
            }
        }
    }

    #[test]
    fn test_cull_mode() {
        for (value, expected) in [
            ("VK_CULL_MODE_NONE", CullMode::None),
            ("VK_CULL_MODE_FRONT_BIT", CullMode::Front),
            ("VK_CULL_MODE_BACK_BIT", CullMode::Back),
            ("VK_CULL_MODE_BACK_BIT | VK_CULL_MODE_FRONT_BIT", CullMode::FrontAndBack),
            ("VK_CULL_MODE_FRONT_BIT|VK_CULL_MODE_BACK_BIT", CullMode::FrontAndBack),
            ("VK_CULL_MODE_FRONT_AND_BACK", CullMode::FrontAndBack),
        ] {
            let data = format!("cullMode {}", value);
            let parser = parse(&data);
            assert_eq!(parser.pipeline_data().cull_mode(), expected, "{}", value);
        }

        check_error(
            "cullMode VK_CULL_MODE_BACK_BIT | EXTRA",
            "Unknown value for cullMode command",
        );
    }

    #[test]
    fn test_color_write_mask() {
        use crate::pipeline_data::{COLOR_MASK_A, COLOR_MASK_B, COLOR_MASK_G, COLOR_MASK_R};

        let parser = parse("colorWriteMask VK_COLOR_COMPONENT_G_BIT");
        assert_eq!(parser.pipeline_data().color_write_mask(), COLOR_MASK_G);

        let parser = parse(
            "colorWriteMask VK_COLOR_COMPONENT_A_BIT | VK_COLOR_COMPONENT_B_BIT | \
             VK_COLOR_COMPONENT_R_BIT"
        );
        assert_eq!(
            parser.pipeline_data().color_write_mask(),
            COLOR_MASK_A | COLOR_MASK_B | COLOR_MASK_R,
        );

        check_error(
            "colorWriteMask INVALID",
            "Unknown parameter for colorWriteMask command",
        );
        check_error(
            "colorWriteMask VK_COLOR_COMPONENT_G_BIT | INVALID",
            "Unknown parameter for colorWriteMask command",
        );
        check_error(
            "colorWriteMask",
            "Missing parameter for colorWriteMask command",
        );
        check_error(
            "colorWriteMask VK_COLOR_COMPONENT_R_BIT | VK_COLOR_COMPONENT_B_BIT \
             EXTRA",
            "Unknown parameter for colorWriteMask command",
        );
    }

    #[test]
    fn test_named_properties() {
        let parser = parse(
            "srcColorBlendFactor VK_BLEND_FACTOR_SRC_ALPHA\n\
             dstAlphaBlendFactor VK_BLEND_FACTOR_DST_COLOR\n\
             colorBlendOp VK_BLEND_OP_MAX\n\
             alphaBlendOp VK_BLEND_OP_XOR_EXT\n\
             depthCompareOp VK_COMPARE_OP_EQUAL\n\
             front.compareOp VK_COMPARE_OP_LESS\n\
             back.passOp VK_STENCIL_OP_REPLACE\n\
             front.depthFailOp VK_STENCIL_OP_ZERO\n\
             back.failOp VK_STENCIL_OP_INVERT"
        );
        let pipeline = parser.pipeline_data();
        assert_eq!(pipeline.src_color_blend_factor(), BlendFactor::SrcAlpha);
        assert_eq!(pipeline.dst_alpha_blend_factor(), BlendFactor::DstColor);
        assert_eq!(pipeline.color_blend_op(), BlendOp::Max);
        assert_eq!(pipeline.alpha_blend_op(), BlendOp::Xor);
        assert_eq!(pipeline.depth_compare_op(), CompareOp::Equal);
        assert_eq!(pipeline.front().compare_op, CompareOp::Less);
        assert_eq!(pipeline.back().compare_op, CompareOp::Always);
        assert_eq!(pipeline.back().pass_op, StencilOp::Replace);
        assert_eq!(pipeline.front().depth_fail_op, StencilOp::Zero);
        assert_eq!(pipeline.back().fail_op, StencilOp::Invert);

        for name in ["colorBlendOp", "srcAlphaBlendFactor", "back.compareOp"] {
            check_error(
                name,
                &format!("Missing parameter for {} command", name),
            );
            check_error(
                &format!("{} 1.23", name),
                &format!("Invalid parameter for {} command", name),
            );
        }

        check_error(
            "colorBlendOp VK_BLEND_OP_MAX EXTRA",
            "Extra parameter for colorBlendOp command",
        );
        check_error(
            "dstColorBlendFactor INVALID",
            "Unknown BlendFactor provided: INVALID",
        );
        check_error("alphaBlendOp INVALID", "Unknown BlendOp provided: INVALID");
        check_error(
            "depthCompareOp INVALID",
            "Unknown CompareOp provided: INVALID",
        );
        check_error(
            "front.passOp INVALID",
            "Unknown StencilOp provided: INVALID",
        );
    }

    #[test]
    fn test_stencil_values() {
        let parser = parse(
            "front.reference 10\n\
             back.reference 20\n\
             front.compareMask 0xff\n\
             back.writeMask 15"
        );
        let pipeline = parser.pipeline_data();
        assert_eq!(pipeline.front().reference, 10);
        assert_eq!(pipeline.back().reference, 20);
        assert_eq!(pipeline.front().compare_mask, 0xff);
        assert_eq!(pipeline.back().compare_mask, u32::MAX);
        assert_eq!(pipeline.back().write_mask, 15);

        check_error(
            "front.reference",
            "Missing parameter for front.reference command",
        );
        check_error(
            "back.reference INVALID",
            "Invalid parameter for back.reference command",
        );
        check_error(
            "back.reference 1.5",
            "Invalid parameter for back.reference command",
        );
        check_error(
            "front.reference 10 EXTRA",
            "Extra parameter for front.reference command",
        );
    }

    #[test]
    fn test_ssbo() {
        assert_eq!(
            parse_op("ssbo 5 40"),
            Operation::Buffer {
                kind: BufferKind::Ssbo,
                descriptor_set: 0,
                binding: 5,
                data: BufferData::Size(40),
            },
        );
        assert_eq!(
            parse_op("ssbo 9:5 40"),
            Operation::Buffer {
                kind: BufferKind::Ssbo,
                descriptor_set: 9,
                binding: 5,
                data: BufferData::Size(40),
            },
        );

        check_error("ssbo 5 40 EXTRA", "Extra parameter for ssbo command");
        check_error("ssbo 5.0 40", "Invalid binding value for ssbo command");
        check_error("ssbo abc 40", "Invalid binding value for ssbo command");
        check_error("ssbo 5 40.0", "Invalid size value for ssbo command");
        check_error("ssbo 5 abc", "Invalid value for ssbo command");
        check_error("ssbo 5", "Missing size value for ssbo command");
        check_error("ssbo", "Missing binding and size values for ssbo command");
    }

    #[test]
    fn test_ssbo_subdata() {
        assert_eq!(
            parse_op("ssbo 5:6 subdata vec3 2 2.3 4.2 1.2"),
            Operation::Buffer {
                kind: BufferKind::Ssbo,
                descriptor_set: 5,
                binding: 6,
                data: BufferData::Subdata {
                    datum_type: DatumType::from_name("vec3").unwrap(),
                    offset: 2,
                    values: vec![Value::F32(2.3), Value::F32(4.2), Value::F32(1.2)],
                },
            },
        );

        match parse_op("ssbo 6 subdata i16vec3 2 2 4 1 3 6 8") {
            Operation::Buffer { data: BufferData::Subdata { values, .. }, .. } => {
                assert_eq!(
                    values,
                    [2, 4, 1, 3, 6, 8].map(Value::I16).to_vec(),
                );
            },
            op => unreachable!("{:?}", op),
        }

        check_error(
            "ssbo subdata i16vec3 2 2 3 2",
            "Invalid binding value for ssbo command",
        );
        check_error(
            "ssbo INVALID subdata i16vec3 2 2 3 4",
            "Invalid binding value for ssbo command",
        );
        check_error("ssbo 6 INVALID i16vec3 2 2", "Invalid value for ssbo command");
        check_error(
            "ssbo 0 subdata INVALID 2 2 3 4",
            "Invalid type provided: INVALID",
        );
        check_error(
            "ssbo 0 subdata vec2 2.0 3 2 4",
            "Invalid offset for ssbo command",
        );
        check_error(
            "ssbo 0 subdata vec2 asdf 3 2 4",
            "Invalid offset for ssbo command",
        );
        check_error(
            "ssbo 6 subdata i16vec3 2 2",
            "Incorrect number of values provided to ssbo command",
        );
        check_error(
            "ssbo 6 subdata i16vec3 2",
            "Incorrect number of values provided to ssbo command",
        );
        check_error(
            "ssbo 6 subdata ivec2 0 1 2.5",
            "Invalid value provided to ssbo command: 2.5",
        );
    }

    #[test]
    fn test_uniform() {
        assert_eq!(
            parse_op("uniform vec3 2 2.1 3.2 4.3"),
            Operation::Buffer {
                kind: BufferKind::PushConstant,
                descriptor_set: 0,
                binding: 0,
                data: BufferData::Subdata {
                    datum_type: DatumType::from_name("vec3").unwrap(),
                    offset: 2,
                    values: vec![Value::F32(2.1), Value::F32(3.2), Value::F32(4.3)],
                },
            },
        );

        let parser = parse("uniform vec3 2 2.1 3.2 4.3 \\\n5.4 6.7 8.9\nclear");
        assert_eq!(parser.commands().len(), 2);
        assert_eq!(parser.commands()[1].line_num, 3);
        match &parser.commands()[0].op {
            Operation::Buffer { data: BufferData::Subdata { values, .. }, .. } => {
                assert_eq!(values.len(), 6);
            },
            op => unreachable!("{:?}", op),
        }

        check_error("uniform INVALID 0 2.1 3.2 4.3", "Invalid type provided: INVALID");
        check_error(
            "uniform vec3 5.5 2.1 3.2 4.3",
            "Invalid offset value for uniform command",
        );
        check_error(
            "uniform vec3 INVALID 2.1 3.2 4.3",
            "Invalid offset value for uniform command",
        );
        check_error(
            "uniform vec3 2 2.1 3.2 4.3 5.5",
            "Incorrect number of values provided to uniform command",
        );
        check_error("uniform", "Missing type for uniform command");
    }

    #[test]
    fn test_uniform_ubo() {
        assert!(matches!(
            parse_op("uniform ubo 3:2 vec3 1 2.1 3.2 4.3"),
            Operation::Buffer {
                kind: BufferKind::Ubo,
                descriptor_set: 3,
                binding: 2,
                data: BufferData::Subdata { offset: 1, .. },
            },
        ));
        assert!(matches!(
            parse_op("uniform ubo 2 vec3 1 2.1 3.2 4.3"),
            Operation::Buffer {
                kind: BufferKind::Ubo,
                descriptor_set: 0,
                binding: 2,
                ..
            },
        ));

        check_error(
            "uniform ubo 0.0 vec3 0 2.1 3.2 4.3",
            "Invalid binding value for uniform ubo command",
        );
        check_error(
            "uniform ubo INVALID vec3 0 2.1 3.2 4.3",
            "Invalid binding value for uniform ubo command",
        );
        check_error(
            "uniform ubo 0 INVALID 0 2.1 3.2 4.3",
            "Invalid type provided: INVALID",
        );
        check_error(
            "uniform ubo 0 vec3 5.5 2.1 3.2 4.3",
            "Invalid offset value for uniform command",
        );
        check_error(
            "uniform ubo 0 vec3 2 2.1 3.2 4.3 5.5",
            "Incorrect number of values provided to uniform command",
        );
    }

    #[test]
    fn test_probe_ssbo() {
        assert_eq!(
            parse_op("probe ssbo vec3 3:6 2 >= 2.3 4.2 1.2"),
            Operation::ProbeSsbo {
                descriptor_set: 3,
                binding: 6,
                offset: 2,
                comparator: Comparator::GreaterOrEqual,
                datum_type: DatumType::from_name("vec3").unwrap(),
                values: vec![Value::F32(2.3), Value::F32(4.2), Value::F32(1.2)],
            },
        );

        assert!(matches!(
            parse_op("probe ssbo i16vec3 6 2 <= 2 4 1"),
            Operation::ProbeSsbo {
                descriptor_set: 0,
                binding: 6,
                comparator: Comparator::LessOrEqual,
                ..
            },
        ));

        for symbol in ["==", "!=", "~=", "<", "<=", ">", ">="] {
            match parse_op(&format!("probe ssbo int 0 0 {} 1", symbol)) {
                Operation::ProbeSsbo { comparator, .. } => {
                    assert_eq!(comparator.symbol(), symbol);
                },
                op => unreachable!("{:?}", op),
            }
        }

        check_error(
            "probe ssbo i16vec3 2 == 2 3 2",
            "Invalid value for probe ssbo command",
        );
        check_error(
            "probe ssbo i16vec3 INVALID 2 == 2 3 4",
            "Invalid binding value for probe ssbo command",
        );
        check_error(
            "probe ssbo INVALID 0 2 == 2 3 4",
            "Invalid type provided: INVALID",
        );
        check_error(
            "probe ssbo vec2 0 2.0 == 3 2 4",
            "Invalid offset for probe ssbo command",
        );
        check_error(
            "probe ssbo vec2 0 INVALID == 3 2 4",
            "Invalid value for probe ssbo command",
        );
        check_error("probe ssbo vec2 6 2 INVALID 3 2 4", "Invalid comparator");
        check_error(
            "probe ssbo i16vec3 6 2 == 2",
            "Incorrect number of values provided to probe ssbo command",
        );
        check_error(
            "probe ssbo i16vec3 6 2 ==",
            "Incorrect number of values provided to probe ssbo command",
        );
    }

    #[test]
    fn test_tolerance() {
        assert_eq!(
            parse_op("tolerance 0.5% 2.4 3.9% 99.7"),
            Operation::Tolerance {
                tolerances: vec![
                    Tolerance::new(0.5, true),
                    Tolerance::new(2.4, false),
                    Tolerance::new(3.9, true),
                    Tolerance::new(99.7, false),
                ],
            },
        );
        assert_eq!(
            parse_op("tolerance 1, 2%, 3, 4"),
            Operation::Tolerance {
                tolerances: vec![
                    Tolerance::new(1.0, false),
                    Tolerance::new(2.0, true),
                    Tolerance::new(3.0, false),
                    Tolerance::new(4.0, false),
                ],
            },
        );
        assert_eq!(
            parse_op("tolerance 3"),
            Operation::Tolerance { tolerances: vec![Tolerance::new(3.0, false)] },
        );

        check_error("tolerance", "Missing value for tolerance command");
        check_error("tolerance 1INVALID", "Invalid value for tolerance command");
        check_error("tolerance % 1", "Invalid value for tolerance command");
        check_error("tolerance 1 2", "Invalid number of tolerance parameters provided");
        check_error(
            "tolerance 1 2 3",
            "Invalid number of tolerance parameters provided",
        );
        check_error("tolerance 1 2 3 4 5", "Extra parameter for tolerance command");
    }

    #[test]
    fn test_round_trip() {
        let script = "clear\n\
                      clear color 1 0.4 0.5 0.2\n\
                      clear depth 0.5\n\
                      clear stencil 3\n\
                      draw rect ortho patch -1 -1 2 2.5\n\
                      draw arrays indexed instanced TRIANGLE_FAN 1 4 7\n\
                      compute 3 2 1\n\
                      tessellation evaluation entrypoint main\n\
                      patch parameter vertices 3\n\
                      relative probe rect rgba 0.1 0.2 0.3 0.4 1 0 1 0.5\n\
                      probe all rgb 1 0 0\n\
                      probe rgba 4 5 0 0 1 1\n\
                      probe ssbo u8vec2 1:3 4 ~= 1 2 3 4\n\
                      ssbo 7 128\n\
                      ssbo 2:7 subdata mat2x3 16 1 2 3 4 5 6\n\
                      uniform ubo 1:0 dvec2 8 -1.5 2\n\
                      uniform R8G8_SINT 0 -4 5\n\
                      tolerance 1% 2 3% 4\n";

        let parser = parse(script);
        assert_eq!(parser.commands().len(), script.lines().count());

        for command in parser.commands() {
            let text = command.to_string();
            let reparsed = parse_op(&text);
            assert_eq!(reparsed, command.op, "{}", text);
        }
    }
}
