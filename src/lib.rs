pub mod config;
pub mod env;
pub mod opener;
pub mod ui;
pub mod util;
pub mod writer;

pub use config::{Config, ConfigError, ViewerConfig, WriterConfig};
pub use env::{EnvironmentProvider, EnvironmentSnapshot, ProcessEnvironment, StaticEnvironment};
pub use opener::{default_opener, platform_name, DocumentOpener, NoopOpener, OpenError, SystemOpener};
pub use ui::App;
pub use writer::{
    lossy_args, program_base_name, OutputDocument, SampleFileWriter, WriterError,
};
