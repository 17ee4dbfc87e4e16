use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

use log::trace;
use walkdir::WalkDir;

use crate::{BuildError, ShaderStage};

const OUTPUT_EXTENSION: &str = ".spv";

/// A shader source file found in the build directory.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShaderFile {
    path: PathBuf,
    stage: ShaderStage,
}

impl ShaderFile {
    /// Returns `None` if the file name does not end in `.<extension>` of `stage`.
    pub fn new(path: impl Into<PathBuf>, stage: ShaderStage) -> Option<Self> {
        let path = path.into();

        if matches_stage(&path, stage) {
            Some(Self { path, stage })
        } else {
            None
        }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    #[inline]
    pub fn file_name(&self) -> &OsStr {
        // `new` guarantees a file name
        self.path.file_name().unwrap_or_default()
    }

    /// `foo.vert` becomes `foo.vert.spv`, the source extension is kept.
    pub fn output_file_name(&self) -> OsString {
        let mut name = self.file_name().to_owned();
        name.push(OUTPUT_EXTENSION);
        name
    }

    pub fn output_path(&self) -> PathBuf {
        self.path.with_file_name(self.output_file_name())
    }
}

fn matches_stage(path: &Path, stage: ShaderStage) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };

    // `*.vert` never matches dot files
    if name.to_string_lossy().starts_with('.') {
        return false;
    }

    path.extension()
        .and_then(OsStr::to_str)
        .and_then(ShaderStage::from_extension)
        == Some(stage)
}

/// Lists the regular files directly inside `directory` that belong to `stage`.
///
/// The order is whatever the filesystem hands out.
pub fn find_shaders(
    directory: impl AsRef<Path>,
    stage: ShaderStage,
) -> Result<Vec<ShaderFile>, BuildError> {
    let mut shaders = Vec::new();

    for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            trace!("Skipping {}, not a file", path.display());
            continue;
        }

        if let Some(shader) = ShaderFile::new(path, stage) {
            shaders.push(shader);
        }
    }

    Ok(shaders)
}
