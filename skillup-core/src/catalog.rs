//! Catalog filtering: three independent, AND-combined predicates over the
//! fetched course list, plus per-course watch-percent merge.

use std::collections::HashMap;

use crate::model::{CourseLevel, CourseWithSector};

/// Catalog filter state. Every field defaults to "no restriction".
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    /// Case-insensitive substring match on the title. Empty matches all.
    pub search: String,
    pub sector_id: Option<i64>,
    pub level: Option<CourseLevel>,
}

impl CatalogFilter {
    fn matches(&self, item: &CourseWithSector) -> bool {
        let matches_search = self.search.is_empty()
            || item
                .course
                .title
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        let matches_sector = self
            .sector_id
            .map_or(true, |id| item.course.sector_id == id);
        let matches_level = self.level.map_or(true, |level| item.course.level == level);
        matches_search && matches_sector && matches_level
    }
}

/// A catalog row ready for display: course, sector name, caller's watch percent.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub course: CourseWithSector,
    pub watch_percent: i64,
}

/// Apply the filter and merge the caller's progress map.
/// Courses absent from the map show 0 percent. A filter matching nothing
/// yields an empty list, never an error.
pub fn apply_filters(
    courses: Vec<CourseWithSector>,
    filter: &CatalogFilter,
    progress: &HashMap<i64, i64>,
) -> Vec<CatalogEntry> {
    courses
        .into_iter()
        .filter(|item| filter.matches(item))
        .map(|item| {
            let watch_percent = progress.get(&item.course.id).copied().unwrap_or(0);
            CatalogEntry {
                course: item,
                watch_percent,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Course;

    fn course(id: i64, title: &str, level: CourseLevel, sector_id: i64) -> CourseWithSector {
        CourseWithSector {
            course: Course {
                id,
                title: title.to_string(),
                level,
                sector_id,
                video_url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
                thumbnail_url: String::new(),
                duration_hours: 2,
                xp_reward: level.xp_reward(),
                created_at: 0,
            },
            sector_name: None,
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let courses = vec![
            course(1, "Liderança Ágil", CourseLevel::Expert, 1),
            course(2, "Excel Básico", CourseLevel::Iniciante, 1),
        ];
        let filter = CatalogFilter {
            search: "lideran".to_string(),
            ..Default::default()
        };
        let result = apply_filters(courses, &filter, &HashMap::new());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].course.course.id, 1);
    }

    #[test]
    fn filters_combine_with_and() {
        let courses = vec![
            course(1, "Scrum", CourseLevel::Expert, 1),
            course(2, "Scrum", CourseLevel::Expert, 2),
            course(3, "Scrum", CourseLevel::Iniciante, 1),
        ];
        let filter = CatalogFilter {
            search: "scrum".to_string(),
            sector_id: Some(1),
            level: Some(CourseLevel::Expert),
        };
        let result = apply_filters(courses, &filter, &HashMap::new());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].course.course.id, 1);
    }

    #[test]
    fn unmatched_sector_yields_empty_not_error() {
        let courses = vec![course(1, "Scrum", CourseLevel::Expert, 1)];
        let filter = CatalogFilter {
            sector_id: Some(99),
            ..Default::default()
        };
        assert!(apply_filters(courses, &filter, &HashMap::new()).is_empty());
    }

    #[test]
    fn progress_merge_defaults_to_zero() {
        let courses = vec![
            course(1, "A", CourseLevel::Iniciante, 1),
            course(2, "B", CourseLevel::Iniciante, 1),
        ];
        let mut progress = HashMap::new();
        progress.insert(1, 45);
        let result = apply_filters(courses, &CatalogFilter::default(), &progress);
        assert_eq!(result[0].watch_percent, 45);
        assert_eq!(result[1].watch_percent, 0);
    }
}
