//! Write the program name and arguments to ~/Documents/python_sample.txt and open it.
//!
//! Every argument is a document line, written verbatim: there are no options,
//! not even `--help` or `--`. Per-run switches come from the environment
//! (`VARO_FIXTURES_OUTPUT_DIR`, `VARO_FIXTURES_NO_OPEN`) and `config.toml`.

use anyhow::Result;
use varo_fixtures::{
    default_opener, lossy_args, program_base_name, util, Config, SampleFileWriter,
};

fn main() -> Result<()> {
    let mut argv = std::env::args_os();
    let program = program_base_name(argv.next().as_deref());
    let args = lossy_args(argv);

    util::init_data_dir_from_env();
    util::init_file_logging("varo-sample-file")?;

    let mut config = Config::load().writer;
    config.apply_env_overrides(|name| std::env::var_os(name));

    let opener = default_opener(config.open_after_write);
    let writer = SampleFileWriter::new(config, opener);

    println!("ARGS >>> {:?}", args);
    println!("OUTPUT >>> {}", writer.target_path()?.display());

    let path = writer.run(&program, args)?;
    tracing::info!(path = %path.display(), program = %program, "Sample file written");

    Ok(())
}
