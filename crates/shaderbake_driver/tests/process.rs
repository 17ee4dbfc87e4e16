#![cfg(unix)]

use std::{
    env, fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};

use shaderbake_driver::{BuildError, ShaderBuildDesc, ShaderBuilder};

const FAKE_COMPILER: &str = r#"#!/bin/sh
echo "$@" >> invocations.log
case "$2" in
    bad.*) exit 3 ;;
esac
printf 'SPIR-V' > "$4"
"#;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn install_fake_compiler(dir: &Path) -> PathBuf {
    let path = dir.join("fake-glslang");
    fs::write(&path, FAKE_COMPILER).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn external_compiler_end_to_end() {
    let root = scratch_dir("external_compiler_end_to_end");
    let compiler = install_fake_compiler(&root);

    let shaders = root.join("shaders");
    fs::create_dir_all(&shaders).unwrap();
    for name in ["a.vert", "bad.frag", "c.frag", "ignored.glsl"] {
        fs::write(shaders.join(name), "void main() {}\n").unwrap();
    }

    let report = ShaderBuilder::new(ShaderBuildDesc {
        directory: shaders.clone(),
        compiler: compiler.clone().into_os_string(),
        ..Default::default()
    })
    .run_process()
    .unwrap();

    assert_eq!(report.len(), 3);
    assert_eq!(report.compiled().count(), 2);

    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].shader.file_name(), "bad.frag");
    assert_eq!(failures[0].status, 3);

    assert_eq!(fs::read_to_string(shaders.join("a.vert.spv")).unwrap(), "SPIR-V");
    assert_eq!(fs::read_to_string(shaders.join("c.frag.spv")).unwrap(), "SPIR-V");
    assert!(!shaders.join("a.spv").exists());
    assert!(!shaders.join("bad.frag.spv").exists());
    assert!(!shaders.join("ignored.glsl.spv").exists());

    let mut invocations: Vec<_> = fs::read_to_string(shaders.join("invocations.log"))
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect();
    invocations.sort();
    assert_eq!(
        invocations,
        [
            "-V a.vert -o a.vert.spv",
            "-V bad.frag -o bad.frag.spv",
            "-V c.frag -o c.frag.spv",
        ]
    );

    // A compiler given relative to the caller's directory still resolves while the
    // child runs inside the shader directory.
    let relative_compiler = pathdiff::diff_paths(&compiler, env::current_dir().unwrap()).unwrap();
    assert!(relative_compiler.is_relative());

    let relative = ShaderBuilder::new(ShaderBuildDesc {
        directory: shaders.clone(),
        compiler: relative_compiler.into_os_string(),
        ..Default::default()
    })
    .run_process()
    .unwrap();
    assert_eq!(relative.len(), 3);
    assert_eq!(relative.compiled().count(), 2);

    let missing = ShaderBuilder::new(ShaderBuildDesc {
        directory: shaders,
        compiler: root.join("no-such-compiler").into_os_string(),
        ..Default::default()
    })
    .run_process()
    .unwrap_err();
    assert!(matches!(missing, BuildError::Spawn { .. }));
}
