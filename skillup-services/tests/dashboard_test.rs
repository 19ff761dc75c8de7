//! Dashboard aggregation: stats, study hours, and recommendations.

use skillup_core::config::DashboardConfig;
use skillup_core::model::CourseLevel;
use skillup_services::dashboard::load_dashboard;
use skillup_services::identity::CurrentUser;
use skillup_services::progress::{save_progress_at, view_course};
use skillup_storage::queries::courses;
use skillup_storage::DatabaseManager;

fn setup_db() -> DatabaseManager {
    DatabaseManager::open_in_memory().unwrap()
}

fn seed_sector(db: &DatabaseManager, name: &str) -> i64 {
    db.with_writer(|conn| {
        conn.execute("INSERT INTO sectors (name) VALUES (?1)", [name])
            .unwrap();
        Ok(conn.last_insert_rowid())
    })
    .unwrap()
}

fn seed_user(db: &DatabaseManager, id: &str, sector_id: Option<i64>) -> CurrentUser {
    db.with_writer(|conn| {
        conn.execute(
            "INSERT INTO profiles (id, name, role, sector_id, email)
             VALUES (?1, 'Ana Lima', 'user', ?2, 'ana@corp.com')",
            rusqlite::params![id, sector_id],
        )
        .unwrap();
        Ok(())
    })
    .unwrap();
    CurrentUser {
        id: id.to_string(),
        email: Some("ana@corp.com".to_string()),
        name: "Ana Lima".to_string(),
        avatar_url: None,
        role: "user".to_string(),
        sector_id,
    }
}

fn seed_course(db: &DatabaseManager, title: &str, sector_id: i64, created_at: i64) -> i64 {
    db.with_writer(|conn| {
        courses::insert_course(
            conn,
            &courses::NewCourseRow {
                title: title.to_string(),
                level: CourseLevel::Iniciante,
                sector_id,
                video_url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
                thumbnail_url: "https://placehold.co/600x400/png?text=C".to_string(),
                duration_hours: 2,
                xp_reward: CourseLevel::Iniciante.xp_reward(),
                created_at,
            },
        )
    })
    .unwrap()
}

fn complete(db: &DatabaseManager, user: &str, course: i64) {
    view_course(db, user, course).unwrap();
    save_progress_at(db, user, course, 100, 1_700_000_100).unwrap();
}

#[test]
fn stats_cover_count_xp_level_and_hours() {
    let db = setup_db();
    let ti = seed_sector(&db, "TI");
    let user = seed_user(&db, "u1", Some(ti));
    let c1 = seed_course(&db, "Curso A", ti, 1_700_000_000);
    let c2 = seed_course(&db, "Curso B", ti, 1_700_000_001);
    seed_course(&db, "Curso C", ti, 1_700_000_002);
    complete(&db, &user.id, c1);
    complete(&db, &user.id, c2);

    let config = DashboardConfig::default();
    let stats = load_dashboard(&db, &config, &user).unwrap();

    assert_eq!(stats.completed_courses, 2);
    assert_eq!(stats.total_xp, 100);
    assert_eq!(stats.level.level, 1);
    // Default estimate: half an hour per completed course.
    assert!((stats.study_hours - 1.0).abs() < f64::EPSILON);
}

#[test]
fn recommendations_exclude_completed_and_respect_the_limit() {
    let db = setup_db();
    let ti = seed_sector(&db, "TI");
    let user = seed_user(&db, "u1", Some(ti));
    let done = seed_course(&db, "Feito", ti, 1_700_000_000);
    for (i, title) in ["A", "B", "C", "D"].iter().enumerate() {
        seed_course(&db, title, ti, 1_700_000_001 + i as i64);
    }
    complete(&db, &user.id, done);

    let config = DashboardConfig::default();
    let stats = load_dashboard(&db, &config, &user).unwrap();

    assert_eq!(stats.recommendations.len(), 3);
    assert!(stats
        .recommendations
        .iter()
        .all(|r| r.course.title != "Feito"));
    // Newest first.
    assert_eq!(stats.recommendations[0].course.title, "D");
}

#[test]
fn recommendations_stick_to_the_users_sector() {
    let db = setup_db();
    let ti = seed_sector(&db, "TI");
    let rh = seed_sector(&db, "RH");
    let user = seed_user(&db, "u1", Some(ti));
    seed_course(&db, "Curso TI", ti, 1_700_000_000);
    seed_course(&db, "Curso RH", rh, 1_700_000_001);

    let config = DashboardConfig::default();
    let stats = load_dashboard(&db, &config, &user).unwrap();

    assert_eq!(stats.recommendations.len(), 1);
    assert_eq!(stats.recommendations[0].course.title, "Curso TI");
}

#[test]
fn user_without_a_sector_sees_any_sector() {
    let db = setup_db();
    let ti = seed_sector(&db, "TI");
    let rh = seed_sector(&db, "RH");
    let user = seed_user(&db, "u1", None);
    seed_course(&db, "Curso TI", ti, 1_700_000_000);
    seed_course(&db, "Curso RH", rh, 1_700_000_001);

    let config = DashboardConfig::default();
    let stats = load_dashboard(&db, &config, &user).unwrap();

    assert_eq!(stats.recommendations.len(), 2);
}

#[test]
fn empty_history_yields_level_one_and_zero_hours() {
    let db = setup_db();
    let ti = seed_sector(&db, "TI");
    let user = seed_user(&db, "u1", Some(ti));

    let config = DashboardConfig::default();
    let stats = load_dashboard(&db, &config, &user).unwrap();

    assert_eq!(stats.completed_courses, 0);
    assert_eq!(stats.total_xp, 0);
    assert_eq!(stats.level.level, 1);
    assert_eq!(stats.study_hours, 0.0);
}
