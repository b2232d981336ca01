//! Storage layer for the local dataset library.

mod backup;
mod database;

pub use backup::{backup_path, discard_library, restore_library};
#[allow(unused_imports)]
pub use database::{
    init_database,
    save_dataset,
    list_datasets,
    get_dataset,
    load_equipment,
    get_summary,
    delete_dataset,
};
