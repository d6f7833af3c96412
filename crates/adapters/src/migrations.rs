pub const MIGRATIONS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS applications (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        picture TEXT,
        title TEXT NOT NULL,
        subtitle TEXT NOT NULL DEFAULT '',
        cwd TEXT,
        command TEXT NOT NULL
    );",
    "CREATE INDEX IF NOT EXISTS idx_applications_title ON applications(title);",
];
