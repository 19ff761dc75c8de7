//! V001: Initial schema.
//! profiles, sectors, courses, user_progress, certificates.

pub const MIGRATION_SQL: &str = r#"
-- Sectors: organizational departments grouping users and courses.
CREATE TABLE IF NOT EXISTS sectors (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
) STRICT;

-- Profiles: one per auth identity. id mirrors the auth provider's user id.
-- Created on registration by the provider trigger; the app only updates.
CREATE TABLE IF NOT EXISTS profiles (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    avatar_url TEXT,
    role TEXT NOT NULL DEFAULT 'user',
    sector_id INTEGER REFERENCES sectors(id),
    email TEXT
) STRICT;

CREATE INDEX IF NOT EXISTS idx_profiles_sector ON profiles(sector_id);

-- Courses: xp_reward is written at creation from the level rule table.
CREATE TABLE IF NOT EXISTS courses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    level TEXT NOT NULL CHECK (level IN ('iniciante', 'intermediario', 'expert')),
    sector_id INTEGER NOT NULL REFERENCES sectors(id),
    video_url TEXT NOT NULL,
    thumbnail_url TEXT NOT NULL,
    duration_hours INTEGER NOT NULL DEFAULT 0,
    xp_reward INTEGER NOT NULL,
    created_at INTEGER NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_courses_sector ON courses(sector_id);
CREATE INDEX IF NOT EXISTS idx_courses_level ON courses(level);

-- Progress: at most one record per (user, course). Never deleted by the app.
CREATE TABLE IF NOT EXISTS user_progress (
    user_id TEXT NOT NULL REFERENCES profiles(id),
    course_id INTEGER NOT NULL REFERENCES courses(id),
    progress_percent INTEGER NOT NULL DEFAULT 0,
    completed INTEGER NOT NULL DEFAULT 0,
    completed_at INTEGER,
    last_accessed_at INTEGER,
    PRIMARY KEY (user_id, course_id)
) STRICT;

CREATE INDEX IF NOT EXISTS idx_user_progress_completed
    ON user_progress(user_id) WHERE completed = 1;

-- Certificates: issued externally on completion; read-only to the app.
-- The id is the externally shared verification token.
CREATE TABLE IF NOT EXISTS certificates (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL REFERENCES profiles(id),
    course_id INTEGER NOT NULL REFERENCES courses(id),
    issued_at INTEGER NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_certificates_user ON certificates(user_id);
"#;
