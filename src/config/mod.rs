mod settings;

pub use settings::{
    Config, ConfigError, ViewerConfig, WriterConfig, NO_OPEN_ENV, OUTPUT_DIR_ENV,
};
