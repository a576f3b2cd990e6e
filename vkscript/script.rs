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

use crate::command::Command;
use crate::config::Config;
use crate::error::Result;
use crate::nodes::{Node, TestNode};
use crate::parser::Parser;
use crate::source::Source;
use serde::Serialize;

/// A parsed script. This owns all of the [Node]s in the order that
/// their sections appeared.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Script {
    filename: String,
    nodes: Vec<Node>,
}

impl Script {
    /// Parses the script with the default [Config].
    pub fn load(source: &Source) -> Result<Script> {
        Script::load_with_config(source, Config::default())
    }

    pub fn load_with_config(source: &Source, config: Config) -> Result<Script> {
        let mut parser = Parser::with_config(config);

        parser.parse(source)?;

        Ok(Script {
            filename: source.filename().to_owned(),
            nodes: parser.into_nodes(),
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Iterates over the nodes of all the `[test]` sections.
    pub fn test_nodes(&self) -> impl Iterator<Item = &TestNode> {
        self.nodes.iter().filter_map(Node::as_test)
    }

    /// Iterates over the commands of all of the `[test]` sections in
    /// order.
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.test_nodes().flat_map(|node| node.commands().iter())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::command::{BufferData, BufferKind, Operation};
    use crate::error::Error;
    use crate::nodes::{ShaderNode, ShaderSource};
    use crate::shader_stage::Stage;
    use crate::source::TokenReplacement;
    use std::fs;
    use std::io;

    fn script_from_string(source: &str) -> Script {
        let source = Source::from_string(source.to_owned());
        Script::load(&source).unwrap()
    }

    #[test]
    fn test_filename() {
        let script = script_from_string("");
        assert_eq!(script.filename(), "(string source)");
        assert!(script.nodes().is_empty());
        assert_eq!(script.commands().count(), 0);
    }

    #[test]
    fn test_load_from_invalid_file() {
        let source = Source::from_file("this-file-does-not-exist".to_string());
        let e = Script::load(&source).unwrap_err();
        match e {
            Error::Io { ref source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            },
            _ => unreachable!("expected Error::Io, got: {}", e),
        };
    }

    fn run_test_bad_utf8(filename: String) {
        fs::write(&filename, b"[test]\nenchant\xe9 in latin1").unwrap();

        let source = Source::from_file(filename.clone());
        let error = Script::load(&source).unwrap_err();

        assert!(matches!(error, Error::InvalidUtf8 { .. }));
        assert_eq!(
            error.to_string(),
            format!("{}: the script is not valid UTF-8", filename),
        );
    }

    #[test]
    fn test_bad_utf8() {
        let mut filename = std::env::temp_dir();
        filename.push("vkscript-test-bad-utf8-source");
        let filename_str = filename.to_str().unwrap().to_owned();

        // Catch the unwind to try to remove the file that we created
        // if the test fails
        let r = std::panic::catch_unwind(
            move || run_test_bad_utf8(filename_str)
        );

        if let Err(e) = fs::remove_file(filename) {
            assert_eq!(e.kind(), io::ErrorKind::NotFound);
        }

        if let Err(e) = r {
            std::panic::resume_unwind(e);
        }
    }

    #[test]
    fn test_commands_across_sections() {
        let script = script_from_string(
            "[vertex shader passthrough]\n\
             [fragment shader]\n\
             # this comment isn’t really a comment and it should stay\n\
             void main() { }\n\
             [test]\n\
             clear\n\
             [comment]\n\
             draw rect 0 0 1 1\n\
             [test]\n\
             ssbo 9:5 40\n\
             uniform ubo 1 float 0 2.5\n"
        );

        assert_eq!(script.nodes().len(), 4);
        assert_eq!(script.test_nodes().count(), 2);

        let commands = script.commands().collect::<Vec<_>>();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0].op, Operation::Clear);
        assert_eq!(commands[0].line_num, 6);
        assert_eq!(
            commands[1].op,
            Operation::Buffer {
                kind: BufferKind::Ssbo,
                descriptor_set: 9,
                binding: 5,
                data: BufferData::Size(40),
            },
        );
        assert_eq!(commands[1].line_num, 10);
        assert!(matches!(
            commands[2].op,
            Operation::Buffer { kind: BufferKind::Ubo, binding: 1, .. }
        ));

        assert!(matches!(
            &script.nodes()[1],
            Node::Shader(ShaderNode {
                stage: Stage::Fragment,
                source: ShaderSource::Glsl(s),
            }) if s.starts_with("# this comment")
        ));
    }

    #[test]
    fn test_token_replacements() {
        let source = Source::from_string(
            "[test]\n\
             clear color RED\n\
             probe all rgba RED".to_owned()
        ).with_token_replacements([
            "RED=1 0 0 ONE".parse::<TokenReplacement>().unwrap(),
            "ONE=1".parse::<TokenReplacement>().unwrap(),
        ]);

        let script = Script::load(&source).unwrap();
        let commands = script.commands().collect::<Vec<_>>();
        assert_eq!(
            commands[0].op,
            Operation::ClearColor { r: 1.0, g: 0.0, b: 0.0, a: 1.0 },
        );
        assert!(matches!(
            commands[1].op,
            Operation::Probe { whole_window: true, color, .. }
                if color == [1.0, 0.0, 0.0, 1.0]
        ));

        let source = Source::from_string("[test]\nclear X".to_owned())
            .with_token_replacements([
                "X=X".parse::<TokenReplacement>().unwrap(),
            ]);
        assert_eq!(
            Script::load(&source).unwrap_err().to_string(),
            "line 2: The token replacements cause an infinite loop",
        );
    }

    #[test]
    fn test_lenient_config() {
        let source = Source::from_string(
            "Some notes before the first section\n\
             [indices]\n\
             1 2 3".to_owned()
        );

        assert_eq!(
            Script::load(&source).unwrap_err().to_string(),
            "line 1: expected empty line",
        );

        let mut config = Config::new();
        config.set_strict(false);
        let script = Script::load_with_config(&source, config).unwrap();
        assert_eq!(script.nodes().len(), 1);
    }

    #[test]
    fn test_serialize() {
        let script = script_from_string(
            "[require]\n\
             framebuffer R8G8B8A8_UNORM\n\
             [indices]\n\
             0 1 2\n\
             [test]\n\
             clear depth 0.5\n"
        );

        let json = serde_json::to_value(&script).unwrap();

        assert_eq!(json["filename"], "(string source)");

        let nodes = json["nodes"].as_array().unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0]["type"], "require");
        assert_eq!(nodes[0]["requirements"][0]["feature"], "framebuffer");
        assert_eq!(
            nodes[0]["requirements"][0]["argument"]["format"],
            "R8G8B8A8_UNORM",
        );
        assert_eq!(nodes[1]["type"], "indices");
        assert_eq!(nodes[1]["indices"], serde_json::json!([0, 1, 2]));
        assert_eq!(nodes[2]["type"], "test");
        assert_eq!(nodes[2]["commands"][0]["line_num"], 6);
        assert_eq!(
            nodes[2]["commands"][0]["op"]["clear_depth"]["value"],
            0.5,
        );
    }
}
