use rusqlite::Connection;

/// Opens a fresh in-memory database and creates the schema.
///
/// The portal deliberately tolerates orphan references (a class owned by an
/// unknown teacher id, an enrollment for an unknown student id, history left
/// behind by a deleted class), so no table declares a foreign key.
pub fn open_db() -> rusqlite::Result<Connection> {
    let conn = Connection::open_in_memory()?;

    conn.execute(
        "CREATE TABLE users(
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            username TEXT NOT NULL UNIQUE,
            role TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE classes(
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            teacher_id TEXT NOT NULL
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX idx_classes_teacher ON classes(teacher_id)",
        [],
    )?;

    // Single source of truth for enrollment; a class's roster and a
    // student's class list are both projections of this table, read back in
    // insertion (rowid) order.
    conn.execute(
        "CREATE TABLE enrollments(
            class_id TEXT NOT NULL,
            student_id TEXT NOT NULL,
            PRIMARY KEY(class_id, student_id)
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX idx_enrollments_student ON enrollments(student_id)",
        [],
    )?;

    conn.execute(
        "CREATE TABLE lessons(
            id TEXT PRIMARY KEY,
            class_id TEXT NOT NULL,
            date TEXT NOT NULL,
            topic TEXT NOT NULL,
            attendance_json TEXT NOT NULL
        )",
        [],
    )?;
    conn.execute("CREATE INDEX idx_lessons_class ON lessons(class_id)", [])?;

    conn.execute(
        "CREATE TABLE activities(
            id TEXT PRIMARY KEY,
            class_id TEXT NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            due_date TEXT NOT NULL,
            file_url TEXT
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX idx_activities_class ON activities(class_id)",
        [],
    )?;

    conn.execute(
        "CREATE TABLE submissions(
            id TEXT PRIMARY KEY,
            activity_id TEXT NOT NULL,
            student_id TEXT NOT NULL,
            submitted_at TEXT NOT NULL,
            file_url TEXT NOT NULL,
            grade REAL
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX idx_submissions_activity ON submissions(activity_id)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX idx_submissions_student ON submissions(student_id)",
        [],
    )?;

    Ok(conn)
}
