use anyhow::Result;
use clap::Parser;
use varo_fixtures::{ui, util, App, Config, EnvironmentSnapshot, ProcessEnvironment};

/// Show this process's environment variables in a read-only window.
#[derive(Parser, Debug)]
#[command(name = "varo-env-viewer", version, about)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Snapshot first; nothing below mutates the environment but it must reflect launch state
    let snapshot = EnvironmentSnapshot::capture(&ProcessEnvironment);

    util::init_data_dir_from_env();
    util::init_file_logging("varo-env-viewer")?;
    ui::install_panic_hook();

    let config = Config::load();

    let mut app = App::new(config.viewer, &snapshot);
    app.run().await
}
