use std::{ffi::OsString, path::PathBuf};

use log::{debug, warn};

use crate::{
    find_shaders, BuildError, Compiler, ProcessCompiler, ShaderFile, ShaderStage, DEFAULT_COMPILER,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShaderBuildDesc {
    /// Searched non-recursively. Outputs are written here as well.
    pub directory: PathBuf,
    /// Executable used by [`ShaderBuilder::run_process`]. Bare names are looked up on `PATH`,
    /// paths are relative to the current directory.
    pub compiler: OsString,
    /// Visited in order.
    pub stages: Vec<ShaderStage>,
    /// Stop after the first shader that fails to compile.
    pub fail_fast: bool,
}

impl Default for ShaderBuildDesc {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            compiler: OsString::from(DEFAULT_COMPILER),
            stages: ShaderStage::ALL.to_vec(),
            fail_fast: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileResult {
    pub shader: ShaderFile,
    pub status: i32,
}

impl CompileResult {
    #[inline]
    pub fn is_success(&self) -> bool {
        self.status == 0
    }
}

/// Per-shader outcomes of a build, in the order the shaders were compiled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    results: Vec<CompileResult>,
}

impl BuildReport {
    #[inline]
    pub fn results(&self) -> &[CompileResult] {
        &self.results
    }

    pub fn compiled(&self) -> impl Iterator<Item = &CompileResult> + '_ {
        self.results.iter().filter(|result| result.is_success())
    }

    pub fn failures(&self) -> impl Iterator<Item = &CompileResult> + '_ {
        self.results.iter().filter(|result| !result.is_success())
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

pub struct ShaderBuilder {
    desc: ShaderBuildDesc,
}

impl ShaderBuilder {
    #[inline]
    pub fn new(desc: ShaderBuildDesc) -> Self {
        Self { desc }
    }

    /// Builds with the external compiler named in the desc.
    pub fn run_process(&self) -> Result<BuildReport, BuildError> {
        self.run(ProcessCompiler::new(self.desc.compiler.clone()))
    }

    /// Compiles every shader of every stage, one at a time.
    ///
    /// A shader that fails to compile does not stop the build unless `fail_fast` is set.
    /// Listing the directory or launching the compiler failing does.
    pub fn run(&self, mut compiler: impl Compiler) -> Result<BuildReport, BuildError> {
        let mut report = BuildReport::default();

        for &stage in &self.desc.stages {
            debug!(
                "Looking for .{stage} shaders in {}",
                self.desc.directory.display()
            );

            for shader in find_shaders(&self.desc.directory, stage)? {
                println!("Compiling {}", shader.file_name().to_string_lossy());

                let status = compiler.compile(&self.desc.directory, &shader)?;
                if status != 0 {
                    warn!(
                        "{} failed to compile (exit status {status})",
                        shader.path().display()
                    );
                }

                report.results.push(CompileResult { shader, status });

                if status != 0 && self.desc.fail_fast {
                    return Ok(report);
                }
            }
        }

        Ok(report)
    }
}
