//! Utility modules

pub mod logging;
pub mod paths;

pub use logging::init_file_logging;
pub use paths::{
    config_path, data_dir, documents_dir, init_data_dir, init_data_dir_from_env, log_file_path,
    logs_dir,
};
