pub mod logging;

pub use logging::{
    FileLogger, StdoutLogger, init_file_logger, init_stdout_logger, level_from_env,
    parse_level_filter,
};

// Re-export log crate so downstream crates can use tether_base::log::*
pub use log;
