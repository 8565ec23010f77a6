//! Configuration: types, default paths, and XML loading.
//! CLI flags override config-file values; the file only carries ambient
//! settings (logging, default failure policy), never the per-invocation
//! source/destination paths.

pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{
    default_config_path, default_log_path, path_has_symlink_ancestor, CONFIG_ENV_VAR,
};
pub use types::{Config, LogLevel};
pub use xml::{create_template_config, load_config_from_xml_path, load_or_init, LoadResult};
