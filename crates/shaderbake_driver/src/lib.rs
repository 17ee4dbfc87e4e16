//! Compiles the GLSL shaders found in a directory to SPIR-V, one external
//! compiler process per file.
//!
//! The output of `foo.vert` is written next to it as `foo.vert.spv`.

mod compiler;
mod discover;
mod driver;
mod error;
mod stage;

pub use compiler::*;
pub use discover::*;
pub use driver::*;
pub use error::*;
pub use stage::*;
