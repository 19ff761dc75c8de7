//! V002: Precomputed views.
//! view_ranking_global orders by total_xp descending; consumers trust that
//! order and never re-sort.

pub const MIGRATION_SQL: &str = r#"
DROP VIEW IF EXISTS view_ranking_global;
CREATE VIEW view_ranking_global AS
    SELECT
        p.id AS user_id,
        p.name AS name,
        p.avatar_url AS avatar_url,
        s.name AS sector_name,
        COALESCE(SUM(c.xp_reward), 0) AS total_xp,
        COUNT(c.id) AS modules_completed
    FROM profiles p
    LEFT JOIN sectors s ON s.id = p.sector_id
    LEFT JOIN user_progress up ON up.user_id = p.id AND up.completed = 1
    LEFT JOIN courses c ON c.id = up.course_id
    GROUP BY p.id
    ORDER BY total_xp DESC, p.id ASC;

DROP VIEW IF EXISTS view_user_stats;
CREATE VIEW view_user_stats AS
    SELECT
        p.id AS user_id,
        COALESCE(SUM(c.xp_reward), 0) AS total_xp
    FROM profiles p
    LEFT JOIN user_progress up ON up.user_id = p.id AND up.completed = 1
    LEFT JOIN courses c ON c.id = up.course_id
    GROUP BY p.id;
"#;
