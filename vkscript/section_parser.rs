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

//! Splits a script into its sections. Each section starts with a
//! header line such as `[vertex shader]` and runs until the next
//! header. The bodies are kept as text along with the line number of
//! their first line so that the parsers for each section can report
//! errors against the whole script.

use crate::error::{Error, Result};
use crate::shader_stage::{Stage, ALL_STAGES};
use crate::source::Source;
use crate::stream::Stream;
use log::warn;
use serde::Serialize;
use std::fmt;

/// How the source of a shader section is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShaderFormat {
    Glsl,
    SpirvAsm,
    /// Whitespace-separated 32-bit words in hex.
    SpirvHex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Comment,
    Require,
    Shader { stage: Stage, format: ShaderFormat },
    VertexShaderPassthrough,
    VertexData,
    Indices,
    Test,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SectionKind::Comment => write!(f, "comment"),
            SectionKind::Require => write!(f, "require"),
            SectionKind::Shader { stage, format } => {
                write!(f, "{} shader", stage)?;

                match format {
                    ShaderFormat::Glsl => Ok(()),
                    ShaderFormat::SpirvAsm => write!(f, " spirv"),
                    ShaderFormat::SpirvHex => write!(f, " binary"),
                }
            },
            SectionKind::VertexShaderPassthrough => {
                write!(f, "vertex shader passthrough")
            },
            SectionKind::VertexData => write!(f, "vertex data"),
            SectionKind::Indices => write!(f, "indices"),
            SectionKind::Test => write!(f, "test"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    /// The text of the section after the header line, including the
    /// line terminators.
    pub body: String,
    /// The line number of the first line of the body.
    pub first_line: usize,
}

#[derive(Debug)]
enum State {
    // Before any section header
    Start,
    // In a section that can’t have any data
    NoData,
    InSection(Section),
}

macro_rules! error_at_line {
    ($parser:expr, $($format_arg:expr),+ $(,)?) => {
        Error::parse($parser.stream.line_num(), format!($($format_arg),+))
    };
}

// Utility like String::strip_prefix except that it additionally
// strips any leading whitespace and checks that the prefix is followed
// either by the end of the string or some whitespace. The returned
// tail will include the trailing whitespace if there is any.
fn strip_word_prefix<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let tail = s.trim_start().strip_prefix(prefix)?;

    match tail.chars().next() {
        None => Some(tail),
        Some(ch) if ch.is_whitespace() => Some(tail),
        Some(_) => None,
    }
}

// Calls strip_word_prefix for each word in the prefix string so that
// there can be any amount of whitespace between the words.
fn strip_words_prefix<'a>(mut s: &'a str, prefix: &str) -> Option<&'a str> {
    for word in prefix.split_whitespace() {
        s = strip_word_prefix(s, word)?;
    }

    Some(s)
}

// Removes a comment and the surrounding whitespace. Returns None if
// nothing is left.
pub(crate) fn trim_line_or_skip(line: &str) -> Option<&str> {
    let line = line
        .split_once('#')
        .map_or(line, |(line, _comment)| line)
        .trim();

    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}

fn is_stage_name<'a>(line: &'a str, suffix: &str) -> Option<(Stage, &'a str)> {
    ALL_STAGES.iter().find_map(|&stage| {
        strip_words_prefix(line, stage.name())
            .and_then(|tail| strip_word_prefix(tail, suffix))
            .map(|tail| (stage, tail))
    })
}

fn stage_section_kind(section_name: &str) -> Option<SectionKind> {
    let (stage, tail) = is_stage_name(section_name, "shader")?;

    let format = if let Some(tail) = strip_words_prefix(tail, "spirv hex") {
        tail.trim().is_empty().then_some(ShaderFormat::SpirvHex)
    } else if let Some(tail) = strip_word_prefix(tail, "spirv") {
        tail.trim().is_empty().then_some(ShaderFormat::SpirvAsm)
    } else if let Some(tail) = strip_word_prefix(tail, "binary") {
        tail.trim().is_empty().then_some(ShaderFormat::SpirvHex)
    } else if let Some(tail) = strip_word_prefix(tail, "passthrough") {
        if stage == Stage::Vertex && tail.trim().is_empty() {
            return Some(SectionKind::VertexShaderPassthrough);
        }
        None
    } else {
        tail.trim().is_empty().then_some(ShaderFormat::Glsl)
    }?;

    Some(SectionKind::Shader { stage, format })
}

fn section_kind(section_name: &str) -> Option<SectionKind> {
    if let Some(kind) = stage_section_kind(section_name) {
        return Some(kind);
    }

    let kind = match section_name.split_whitespace().collect::<Vec<_>>()[..] {
        ["comment"] => SectionKind::Comment,
        ["require"] => SectionKind::Require,
        ["vertex", "data"] => SectionKind::VertexData,
        ["indices"] => SectionKind::Indices,
        ["test"] => SectionKind::Test,
        _ => return None,
    };

    Some(kind)
}

/// Reads a script from a [Source] and splits it into [Section]s.
#[derive(Debug)]
pub struct SectionParser<'a> {
    stream: Stream<'a>,
    strict: bool,
    state: State,
    sections: Vec<Section>,
}

impl<'a> SectionParser<'a> {
    /// Creates a parser for the source. This can fail if the source
    /// is a file that can’t be opened.
    pub fn new(source: &'a Source) -> Result<SectionParser<'a>> {
        Ok(SectionParser {
            stream: Stream::new(source)?,
            strict: true,
            state: State::Start,
            sections: Vec::new(),
        })
    }

    /// Sets whether text before the first section header is an
    /// error. Otherwise it is ignored with a warning. Defaults to
    /// true.
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    fn end_section(&mut self) {
        if let State::InSection(section) =
            std::mem::replace(&mut self.state, State::NoData)
        {
            self.sections.push(section);
        }
    }

    fn process_section_header(&mut self, line: &str) -> Result<()> {
        let section_name = match line.find(']') {
            None => return Err(error_at_line!(self, "Missing ‘]’")),
            Some(pos) => match line.trim_end().split_at(pos) {
                // The closing bracket must be the last thing on the
                // line
                (before, "]") => &before[1..],
                _ => {
                    return Err(error_at_line!(
                        self,
                        "Trailing data after ‘]’"
                    ));
                },
            },
        };

        let kind = match section_kind(section_name) {
            Some(kind) => kind,
            None => {
                return Err(error_at_line!(
                    self,
                    "Unknown section “{}”",
                    section_name.trim()
                ));
            },
        };

        self.end_section();

        let section = Section {
            kind,
            body: String::new(),
            first_line: self.stream.line_num() + 1,
        };

        if kind == SectionKind::VertexShaderPassthrough {
            // The passthrough shader doesn’t have any data
            self.sections.push(section);
        } else {
            self.state = State::InSection(section);
        }

        Ok(())
    }

    fn process_none_line(&self, line: &str) -> Result<()> {
        match trim_line_or_skip(line) {
            Some(_) => Err(error_at_line!(self, "expected empty line")),
            None => Ok(()),
        }
    }

    fn process_line(&mut self, line: &str) -> Result<()> {
        if line.starts_with('[') {
            return self.process_section_header(line);
        }

        match &mut self.state {
            State::InSection(section) => {
                section.body.push_str(line);
                Ok(())
            },
            State::NoData => self.process_none_line(line),
            State::Start => {
                if self.strict {
                    self.process_none_line(line)
                } else {
                    if trim_line_or_skip(line).is_some() {
                        warn!(
                            "line {}: ignoring text before the first section",
                            self.stream.line_num(),
                        );
                    }
                    Ok(())
                }
            },
        }
    }

    /// Reads the whole source and returns the sections in the order
    /// they appear.
    pub fn parse(mut self) -> Result<Vec<Section>> {
        let mut line = String::new();

        loop {
            line.clear();

            if self.stream.read_line(&mut line)? == 0 {
                break;
            }

            self.process_line(&line)?;
        }

        self.end_section();

        Ok(self.sections)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::source::TokenReplacement;

    fn parse(source: &str) -> Vec<Section> {
        let source = Source::from_string(source.to_owned());
        SectionParser::new(&source).unwrap().parse().unwrap()
    }

    fn check_error(source: &str, error: &str) {
        let source = Source::from_string(source.to_owned());
        let e = SectionParser::new(&source).unwrap().parse().unwrap_err();
        assert_eq!(e.to_string(), error);
    }

    #[test]
    fn test_strip_word_prefix() {
        assert_eq!(strip_word_prefix("potato", "potato"), Some(""));
        assert_eq!(strip_word_prefix("   potato", "potato"), Some(""));
        assert_eq!(strip_word_prefix("   potato  ", "potato"), Some("  "));
        assert_eq!(strip_word_prefix(" \t potato\t", "potato"), Some("\t"));
        assert_eq!(strip_word_prefix("potato-party", "potato"), None);
        assert_eq!(strip_word_prefix("potato party", "potato"), Some(" party"));
        assert_eq!(strip_word_prefix("hotpotato", "potato"), None);
        assert_eq!(strip_word_prefix("potatopie", "potato"), None);

        assert_eq!(strip_words_prefix("potato pie", "potato pie"), Some(""));
        assert_eq!(strip_words_prefix("potato    pie", "potato pie"), Some(""));
        assert_eq!(strip_words_prefix("potato  pies", "potato pie"), None);
        assert_eq!(strip_words_prefix(" hot potato ", "hot potato"), Some(" "));
    }

    #[test]
    fn test_trim_line_or_skip() {
        assert_eq!(trim_line_or_skip("potato"), Some("potato"));
        assert_eq!(trim_line_or_skip("   potato \r\n"), Some("potato"));
        assert_eq!(trim_line_or_skip("   potato# pie # pie"), Some("potato"));
        assert_eq!(trim_line_or_skip("    \t     \n"), None);
        assert_eq!(trim_line_or_skip("    # comment    "), None);
    }

    #[test]
    fn test_empty() {
        assert!(parse("").is_empty());
        assert!(parse("\n  \n# just a comment\n").is_empty());
    }

    #[test]
    fn test_sections() {
        let sections = parse(
            "# leading comment\n\
             [require]\n\
             geometryShader\n\
             [vertex data]\n\
             0/R32_SFLOAT\n\
             1.0\n\
             [test]\n\
             clear\n\
             [test]\n\
             draw rect 0 0 1 1"
        );

        assert_eq!(sections.len(), 4);

        assert_eq!(sections[0].kind, SectionKind::Require);
        assert_eq!(sections[0].body, "geometryShader\n");
        assert_eq!(sections[0].first_line, 3);

        assert_eq!(sections[1].kind, SectionKind::VertexData);
        assert_eq!(sections[1].body, "0/R32_SFLOAT\n1.0\n");
        assert_eq!(sections[1].first_line, 5);

        assert_eq!(sections[2].kind, SectionKind::Test);
        assert_eq!(sections[2].body, "clear\n");
        assert_eq!(sections[2].first_line, 8);

        assert_eq!(sections[3].kind, SectionKind::Test);
        assert_eq!(sections[3].body, "draw rect 0 0 1 1");
        assert_eq!(sections[3].first_line, 10);
    }

    #[test]
    fn test_shader_headers() {
        for stage in ALL_STAGES {
            let sections = parse(&format!("[{} shader]\nvoid main() {{}}", stage));
            assert_eq!(
                sections[0].kind,
                SectionKind::Shader { stage, format: ShaderFormat::Glsl },
            );
            assert_eq!(sections[0].body, "void main() {}");
            assert_eq!(sections[0].kind.to_string(), format!("{} shader", stage));
        }

        let check = |header: &str, kind: SectionKind| {
            let sections = parse(header);
            assert_eq!(sections.len(), 1);
            assert_eq!(sections[0].kind, kind);
        };

        check(
            "[fragment shader spirv]",
            SectionKind::Shader {
                stage: Stage::Fragment,
                format: ShaderFormat::SpirvAsm,
            },
        );
        check(
            "[  tessellation   control shader  binary ]",
            SectionKind::Shader {
                stage: Stage::TessCtrl,
                format: ShaderFormat::SpirvHex,
            },
        );
        check(
            "[compute shader spirv hex]",
            SectionKind::Shader {
                stage: Stage::Compute,
                format: ShaderFormat::SpirvHex,
            },
        );
        check("[vertex shader passthrough]", SectionKind::VertexShaderPassthrough);
        check("[comment]", SectionKind::Comment);
        check("[ vertex  data ]", SectionKind::VertexData);
        check("[indices]", SectionKind::Indices);
    }

    #[test]
    fn test_comment_section() {
        let sections = parse(
            "[comment]\n\
             this is a comment. It will be ignored.\n\
             \x20   [this isn’t a section header]\n\
             [test]\n\
             draw arrays TRIANGLE_LIST 1 2"
        );
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].kind, SectionKind::Comment);
        assert_eq!(
            sections[0].body,
            "this is a comment. It will be ignored.\n\
             \x20   [this isn’t a section header]\n",
        );
        assert_eq!(sections[1].first_line, 5);
    }

    #[test]
    fn test_passthrough() {
        let sections = parse(
            "[vertex shader passthrough]\n\
             \n\
             # comments are allowed\n\
             [fragment shader]\n\
             main"
        );
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].kind, SectionKind::VertexShaderPassthrough);
        assert_eq!(sections[0].body, "");
        assert_eq!(sections[1].first_line, 5);

        check_error(
            "[vertex shader passthrough]\n\
             gl_Position = vec4(0.0);",
            "line 2: expected empty line",
        );
    }

    #[test]
    fn test_text_before_sections() {
        check_error(
            "this is not in a section\n\
             [test]\n\
             clear",
            "line 1: expected empty line",
        );

        let source = Source::from_string(
            "this is not in a section\n\
             [test]\n\
             clear".to_owned()
        );
        let mut parser = SectionParser::new(&source).unwrap();
        parser.set_strict(false);
        let sections = parser.parse().unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].body, "clear");
    }

    #[test]
    fn test_bad_section() {
        check_error(
            "[   reticulated splines   ]",
            "line 1: Unknown section “reticulated splines”",
        );
        check_error(
            "\n[I forgot to close the door",
            "line 2: Missing ‘]’",
        );
        check_error(
            "[vertex shader] <-- this is a great section",
            "line 1: Trailing data after ‘]’",
        );
        check_error(
            "[geometry shader passthrough]",
            "line 1: Unknown section “geometry shader passthrough”",
        );
        check_error(
            "[tessellation shader]",
            "line 1: Unknown section “tessellation shader”",
        );
    }

    #[test]
    fn test_token_replacements() {
        let source = Source::from_string(
            "[test]\n\
             clear color RED 0 0 1".to_owned()
        ).with_token_replacements([
            "RED=1.0".parse::<TokenReplacement>().unwrap(),
        ]);

        let sections = SectionParser::new(&source).unwrap().parse().unwrap();
        assert_eq!(sections[0].body, "clear color 1.0 0 0 1");
    }
}
