//! Front end for VkScript, the script format used to describe Vulkan
//! tests. A script is split into sections which are parsed into a
//! list of [nodes](nodes::Node) owned by a [Script].
//!
//! ```
//! use vkscript::{Script, Source};
//! use vkscript::command::Operation;
//!
//! let source = Source::from_string(
//!     "[test]\n\
//!      clear color 1 0 0 1\n\
//!      clear\n".to_owned()
//! );
//! let script = Script::load(&source).unwrap();
//! let commands = script.commands().collect::<Vec<_>>();
//!
//! assert_eq!(commands.len(), 2);
//! assert_eq!(commands[1].op, Operation::Clear);
//! ```

mod stream;

pub mod tokenizer;
pub mod format;
pub mod datum_type;
pub mod value;
pub mod feature;
pub mod shader_stage;
pub mod pipeline_data;
pub mod tolerance;
pub mod command;
pub mod command_parser;
pub mod vertex_data;
pub mod nodes;
pub mod section_parser;
pub mod parser;
pub mod script;
pub mod source;
pub mod error;
pub mod config;
pub mod logger;

pub use config::Config;
pub use error::{Error, Result};
pub use logger::Logger;
pub use script::Script;
pub use source::Source;
