use anyhow::Result;
use log::info;
use shaderbake_driver::{ShaderBuildDesc, ShaderBuilder};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let report = ShaderBuilder::new(ShaderBuildDesc::default()).run_process()?;

    // Compile failures are reported by the compiler itself and do not change the exit status.
    info!(
        "Compiled {} of {} shaders",
        report.compiled().count(),
        report.len()
    );

    Ok(())
}
