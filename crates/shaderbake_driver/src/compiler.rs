use std::{
    env,
    ffi::{OsStr, OsString},
    io,
    path::{Path, PathBuf},
    process::{Command, ExitStatus},
};

use log::debug;

use crate::{BuildError, ShaderFile};

pub const DEFAULT_COMPILER: &str = "glslangValidator";

/// Something that turns one shader source into a SPIR-V binary.
///
/// Returns the exit status of the compilation, zero meaning success. An `Err` means the
/// compiler could not be run at all and stops the whole build.
pub trait Compiler {
    fn compile(&mut self, directory: &Path, shader: &ShaderFile) -> Result<i32, BuildError>;
}

impl<C: Compiler + ?Sized> Compiler for &mut C {
    #[inline]
    fn compile(&mut self, directory: &Path, shader: &ShaderFile) -> Result<i32, BuildError> {
        (**self).compile(directory, shader)
    }
}

/// `-V <input> -o <input>.spv`, relative to the build directory.
pub fn compiler_args(shader: &ShaderFile) -> [OsString; 4] {
    [
        OsString::from("-V"),
        shader.file_name().to_owned(),
        OsString::from("-o"),
        shader.output_file_name(),
    ]
}

/// Runs an external glslangValidator compatible executable, one blocking process per shader.
///
/// The child inherits stdout and stderr, so its diagnostics reach the user unmodified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessCompiler {
    program: OsString,
}

impl ProcessCompiler {
    #[inline]
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[inline]
    pub fn program(&self) -> &OsStr {
        &self.program
    }
}

/// Anchors a program given as a path at the current directory, since the child runs
/// inside the build directory. Bare names are left for the `PATH` lookup.
pub fn resolve_program(program: &OsStr) -> io::Result<PathBuf> {
    let path = Path::new(program);

    if path.components().count() > 1 || path.is_absolute() {
        Ok(env::current_dir()?.join(path))
    } else {
        Ok(path.to_owned())
    }
}

impl Default for ProcessCompiler {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_COMPILER)
    }
}

impl Compiler for ProcessCompiler {
    fn compile(&mut self, directory: &Path, shader: &ShaderFile) -> Result<i32, BuildError> {
        let program = resolve_program(&self.program)?;
        let args = compiler_args(shader);
        debug!(
            "Running {} {:?} for {} stage in {}",
            program.display(),
            args,
            shader.stage(),
            directory.display()
        );

        let status = Command::new(&program)
            .args(&args)
            .current_dir(directory)
            .status()
            .map_err(|source| BuildError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        Ok(exit_code(status))
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => -signal,
        (None, None) => -1,
    }
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
