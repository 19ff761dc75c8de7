//! Catalog page operation: fetch, filter, and merge watch progress.

use skillup_core::catalog::{apply_filters, CatalogEntry, CatalogFilter};
use skillup_core::errors::StorageError;
use skillup_core::model::Sector;
use skillup_storage::queries::{courses, progress, sectors};
use skillup_storage::DatabaseManager;

/// Load the filtered catalog for one user. The full course list is
/// fetched newest-first; filtering happens in memory, the way the page
/// re-applies it on every keystroke.
pub fn load_catalog(
    db: &DatabaseManager,
    user_id: &str,
    filter: &CatalogFilter,
) -> Result<Vec<CatalogEntry>, StorageError> {
    let all = db.with_reader(|conn| courses::list_courses_with_sector(conn))?;
    let watched = db.with_reader(|conn| progress::progress_map(conn, user_id))?;
    Ok(apply_filters(all, filter, &watched))
}

/// Sectors for the filter dropdown.
pub fn filter_sectors(db: &DatabaseManager) -> Result<Vec<Sector>, StorageError> {
    db.with_reader(|conn| sectors::list_sectors(conn))
}
