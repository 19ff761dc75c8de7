//! Admin CRUD through the service layer: derived XP, thumbnail
//! resolution, validation, and constraint surfacing.

use skillup_core::errors::AdminError;
use skillup_core::model::CourseLevel;
use skillup_services::admin::{
    create_course, create_sector, delete_course, delete_sector, NewCourseInput,
};
use skillup_services::progress::view_course;
use skillup_storage::DatabaseManager;

fn setup_db() -> DatabaseManager {
    DatabaseManager::open_in_memory().unwrap()
}

fn course_input(title: &str, sector_id: Option<i64>) -> NewCourseInput {
    NewCourseInput {
        title: title.to_string(),
        level: CourseLevel::Expert,
        sector_id,
        video_url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
        thumbnail_url: None,
        duration_hours: 8,
    }
}

#[test]
fn course_creation_derives_xp_and_thumbnail() {
    let db = setup_db();
    let sector = create_sector(&db, "TI").unwrap();

    let course = create_course(&db, &course_input("Kubernetes Avançado", Some(sector.id))).unwrap();

    // Expert reward, never caller-supplied.
    assert_eq!(course.xp_reward, 200);
    assert_eq!(
        course.thumbnail_url,
        "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg"
    );
}

#[test]
fn course_creation_validates_required_fields() {
    let db = setup_db();
    let sector = create_sector(&db, "TI").unwrap();

    let err = create_course(&db, &course_input("   ", Some(sector.id))).unwrap_err();
    assert!(matches!(err, AdminError::Validation(_)));

    let err = create_course(&db, &course_input("Curso", None)).unwrap_err();
    assert!(matches!(err, AdminError::Validation(_)));

    let mut input = course_input("Curso", Some(sector.id));
    input.video_url = String::new();
    let err = create_course(&db, &input).unwrap_err();
    assert!(matches!(err, AdminError::Validation(_)));
}

#[test]
fn sector_names_are_unique() {
    let db = setup_db();
    create_sector(&db, "TI").unwrap();

    let err = create_sector(&db, "TI").unwrap_err();
    assert!(matches!(err, AdminError::Storage(ref e) if e.is_constraint_violation()));
}

#[test]
fn sector_name_must_be_non_empty() {
    let db = setup_db();
    let err = create_sector(&db, "  ").unwrap_err();
    assert!(matches!(err, AdminError::Validation(_)));
}

#[test]
fn deleting_a_referenced_sector_fails_and_keeps_the_row() {
    let db = setup_db();
    let sector = create_sector(&db, "TI").unwrap();
    create_course(&db, &course_input("Curso", Some(sector.id))).unwrap();

    let err = delete_sector(&db, sector.id).unwrap_err();
    assert!(err.is_in_use());

    // Still listable afterwards.
    let names = db
        .with_reader(|conn| skillup_storage::queries::sectors::list_sectors(conn))
        .unwrap();
    assert_eq!(names.len(), 1);
}

#[test]
fn deleting_a_course_with_progress_fails() {
    let db = setup_db();
    let sector = create_sector(&db, "TI").unwrap();
    let course = create_course(&db, &course_input("Curso", Some(sector.id))).unwrap();

    db.with_writer(|conn| {
        conn.execute(
            "INSERT INTO profiles (id, name, role) VALUES ('u1', 'Ana', 'user')",
            [],
        )
        .unwrap();
        Ok(())
    })
    .unwrap();
    view_course(&db, "u1", course.id).unwrap();

    let err = delete_course(&db, course.id).unwrap_err();
    assert!(err.is_in_use());
}

#[test]
fn deleting_an_unreferenced_course_succeeds() {
    let db = setup_db();
    let sector = create_sector(&db, "TI").unwrap();
    let course = create_course(&db, &course_input("Curso", Some(sector.id))).unwrap();

    delete_course(&db, course.id).unwrap();
    delete_sector(&db, sector.id).unwrap();
}
