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

use serde::Serialize;
use std::fmt;

/// An enum of all the possible shader stages that a script can
/// provide source for.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Vertex = 0,
    TessCtrl,
    TessEval,
    Geometry,
    Fragment,
    Compute
}

/// The number of shader stages. This should match the number of
/// values in [Stage].
pub const N_STAGES: usize = 6;

/// All the possible stage values.
pub static ALL_STAGES: [Stage; N_STAGES] = [
    Stage::Vertex,
    Stage::TessCtrl,
    Stage::TessEval,
    Stage::Geometry,
    Stage::Fragment,
    Stage::Compute,
];

impl Stage {
    /// The name of the stage as it appears in section headers and
    /// entrypoint commands, for example `tessellation control`.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Vertex => "vertex",
            Stage::TessCtrl => "tessellation control",
            Stage::TessEval => "tessellation evaluation",
            Stage::Geometry => "geometry",
            Stage::Fragment => "fragment",
            Stage::Compute => "compute",
        }
    }

    /// Finds the stage whose name is at the start of `s`. Returns the
    /// stage and the rest of the string.
    pub fn strip_prefix(s: &str) -> Option<(Stage, &str)> {
        ALL_STAGES.iter().find_map(|&stage| {
            s.strip_prefix(stage.name()).map(|rest| (stage, rest))
        })
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_names() {
        for (i, stage) in ALL_STAGES.iter().enumerate() {
            assert_eq!(*stage as usize, i);
            assert_eq!(Stage::strip_prefix(stage.name()), Some((*stage, "")));
        }

        assert_eq!(Stage::TessEval.to_string(), "tessellation evaluation");
        assert_eq!(
            Stage::strip_prefix("geometry shader spirv"),
            Some((Stage::Geometry, " shader spirv")),
        );
        assert_eq!(Stage::strip_prefix("tessellation shader"), None);
    }
}
