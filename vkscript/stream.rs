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

use crate::error::{Error, Result};
use crate::source;
use std::fs;
use std::io;
use std::io::BufRead;

const MAX_TOKEN_REPLACEMENTS: usize = 1000;

// Encapsulates the two possible buf readers (either from a file or
// from a string) that the stream will use.
#[derive(Debug)]
enum Reader<'a> {
    File(io::BufReader<fs::File>),
    String(io::BufReader<&'a [u8]>),
}

/// A struct used to read lines from a [Source](source::Source) with
/// the token replacements applied. Lines are returned one physical
/// line at a time, including the trailing newline, so that the line
/// numbers reported by the parsers match the file. Joining lines
/// that end with `\` is left to the
/// [Tokenizer](crate::tokenizer::Tokenizer).
#[derive(Debug)]
pub struct Stream<'a> {
    source: &'a source::Source,
    reader: Reader<'a>,

    line_num: usize,
    reached_eof: bool,
}

impl<'a> Stream<'a> {
    /// Constructs a new [Stream] that will read lines from the given
    /// [Source](source::Source). The construction can fail if the
    /// source is a file and opening the file fails.
    pub fn new(source: &source::Source) -> Result<Stream> {
        let reader = match source.data() {
            source::Data::File { filename } => {
                let file = fs::File::open(filename)
                    .map_err(|e| Error::from_io(filename, e))?;
                Reader::File(io::BufReader::new(file))
            },
            source::Data::String { source } => {
                Reader::String(io::BufReader::new(source.as_bytes()))
            },
        };

        Ok(Stream {
            source,
            reader,
            line_num: 0,
            reached_eof: false,
        })
    }

    /// Read a line from the stream and append it to the given String
    /// after applying the token replacements set on the
    /// [Source](source::Source).
    ///
    /// The length of the data appended to the string is returned. If
    /// the end of the source is reached then it will return 0.
    pub fn read_line(&mut self, line: &mut String) -> Result<usize> {
        if self.reached_eof {
            return Ok(0);
        }

        let start_length = line.len();

        let length = match &mut self.reader {
            Reader::File(r) => r.read_line(line),
            Reader::String(r) => r.read_line(line),
        }.map_err(|e| Error::from_io(self.source.filename(), e))?;

        if length == 0 {
            self.reached_eof = true;
            return Ok(0);
        }

        self.line_num += 1;

        self.process_token_replacements(line, start_length)?;

        Ok(line.len() - start_length)
    }

    /// Returns the line number in the source data of the last line
    /// that was returned by [read_line](Stream::read_line). The first
    /// line is 1.
    pub fn line_num(&self) -> usize {
        self.line_num
    }

    fn process_token_replacements(
        &self,
        line: &mut String,
        start_pos: usize
    ) -> Result<()> {
        let mut count = 0usize;

        // Loop through each valid position in the line string. We
        // can’t safely use an iterator because we’re going to modify
        // the string as we iterate
        let mut pos = start_pos;

        while pos < line.len() {
            'token_loop: loop {
                for token_replacement in self.source.token_replacements() {
                    if line[pos..].starts_with(&token_replacement.token) {
                        count += 1;

                        if count >= MAX_TOKEN_REPLACEMENTS {
                            return Err(Error::parse(
                                self.line_num,
                                "The token replacements cause an infinite \
                                 loop",
                            ));
                        }

                        line.replace_range(
                            pos..pos + token_replacement.token.len(),
                            &token_replacement.replacement,
                        );

                        // Start looking for tokens from the start of
                        // the list in case the replacement contains
                        // one of the earlier tokens
                        continue 'token_loop;
                    }
                }

                break 'token_loop;
            }

            pos += line[pos..].chars().next().map_or(1, char::len_utf8);
        }

        Ok(())
    }
}

impl<'a> Iterator for Stream<'a> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Result<String>> {
        let mut line = String::new();

        match self.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(Ok(line)),
            Err(e) => {
                self.reached_eof = true;
                Some(Err(e))
            },
        }
    }
}
