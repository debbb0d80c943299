// storage/mod.rs
// SQLite access for the domain backfill

mod backfill;
mod pool;

pub use backfill::{backfill_domains, backfill_with_pool};
pub use pool::init_db_pool_with_path;
