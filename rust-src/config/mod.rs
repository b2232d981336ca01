//! Configuration and settings for the equipment visualizer.

mod settings;

#[allow(unused_imports)]
pub use settings::{
    get_data_dir,
    get_db_path,
    resolve_db_path,
    use_color,
    DEFAULT_REFRESH_INTERVAL,
    DB_PATH_ENV,
};
