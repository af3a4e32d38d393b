//! Database module - SQLite storage for stats, logged sets and travel days

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};

/// Most recent joined rows returned by the history query
const HISTORY_LIMIT: u32 = 50;

/// The single user-stats row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub name: String,
    pub bodyweight: f64,
    pub bench_1rm: f64,
    pub deadlift_1rm: f64,
    pub squat_1rm: f64,
    pub last_updated: DateTime<Utc>,
}

/// One performed set, as passed in by a front-end
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetLog {
    pub date: NaiveDate,
    pub program_day: String,
    pub exercise: String,
    pub weight: f64,
    pub reps: i32,
    #[serde(default)]
    pub note: String,
}

/// Joined workout+set row from the history query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRow {
    pub date: NaiveDate,
    pub day: String,
    pub exercise: String,
    pub weight: f64,
    pub reps: i32,
    pub note: String,
}

/// A marked travel day (no training planned)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelDay {
    pub date: NaiveDate,
    pub reason: String,
}

/// Database wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// In-memory database for tests
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// Initialize schema and seed the single user row on first creation
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS user_stats (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                bodyweight REAL NOT NULL,
                bench_1rm REAL NOT NULL,
                deadlift_1rm REAL NOT NULL,
                squat_1rm REAL NOT NULL,
                last_updated TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS workouts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                wdate TEXT NOT NULL,
                program_day TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS sets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                workout_id INTEGER NOT NULL REFERENCES workouts(id),
                exercise TEXT NOT NULL,
                weight REAL NOT NULL,
                reps INTEGER NOT NULL,
                note TEXT NOT NULL DEFAULT ''
            );
            CREATE TABLE IF NOT EXISTS travel_days (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                day_date TEXT NOT NULL UNIQUE,
                reason TEXT NOT NULL
            );",
        )?;

        // Seed the default user exactly once
        let users: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM user_stats", [], |row| row.get(0))?;
        if users == 0 {
            self.conn.execute(
                "INSERT INTO user_stats (name, bodyweight, bench_1rm, deadlift_1rm, squat_1rm, last_updated)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params!["Master", 60.5, 55.0, 120.0, 90.0, Utc::now().to_rfc3339()],
            )?;
        }

        Ok(())
    }

    /// Read the single user-stats row
    pub fn user_stats(&self) -> Result<UserStats> {
        let stats = self.conn.query_row(
            "SELECT name, bodyweight, bench_1rm, deadlift_1rm, squat_1rm, last_updated
             FROM user_stats LIMIT 1",
            [],
            |row| {
                let updated: String = row.get(5)?;
                Ok(UserStats {
                    name: row.get(0)?,
                    bodyweight: row.get(1)?,
                    bench_1rm: row.get(2)?,
                    deadlift_1rm: row.get(3)?,
                    squat_1rm: row.get(4)?,
                    last_updated: DateTime::parse_from_rfc3339(&updated)
                        .map(|d| d.with_timezone(&Utc))
                        .unwrap_or_else(|_| Utc::now()),
                })
            },
        )?;
        Ok(stats)
    }

    /// Replace all mutable user-stats fields and refresh the timestamp
    pub fn update_stats(&self, stats: &UserStats) -> Result<()> {
        self.conn.execute(
            "UPDATE user_stats SET
                name = ?1, bodyweight = ?2, bench_1rm = ?3,
                deadlift_1rm = ?4, squat_1rm = ?5, last_updated = ?6
             WHERE id = 1",
            params![
                stats.name,
                stats.bodyweight,
                stats.bench_1rm,
                stats.deadlift_1rm,
                stats.squat_1rm,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Append one workout and its set as a unit
    pub fn log_set(&mut self, set: &SetLog) -> Result<i64> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO workouts (wdate, program_day) VALUES (?1, ?2)",
            params![set.date.to_string(), set.program_day],
        )?;
        let workout_id = tx.last_insert_rowid();
        tx.execute(
            "INSERT INTO sets (workout_id, exercise, weight, reps, note) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![workout_id, set.exercise, set.weight, set.reps, set.note],
        )?;
        tx.commit()?;
        Ok(workout_id)
    }

    /// Most recent logged sets, newest first
    pub fn recent_history(&self) -> Result<Vec<HistoryRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT w.wdate, w.program_day, s.exercise, s.weight, s.reps, s.note
             FROM workouts w JOIN sets s ON w.id = s.workout_id
             ORDER BY w.wdate DESC, w.id DESC LIMIT ?1",
        )?;

        let rows = stmt
            .query_map([HISTORY_LIMIT], |row| {
                let date_str: String = row.get(0)?;
                Ok(HistoryRow {
                    date: date_str.parse().unwrap_or_else(|_| Utc::now().date_naive()),
                    day: row.get(1)?,
                    exercise: row.get(2)?,
                    weight: row.get(3)?,
                    reps: row.get(4)?,
                    note: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    /// Mark a travel day. Returns false when the date is already marked.
    pub fn add_travel_day(&self, date: NaiveDate, reason: &str) -> Result<bool> {
        self.conn.execute(
            "INSERT OR IGNORE INTO travel_days (day_date, reason) VALUES (?1, ?2)",
            params![date.to_string(), reason],
        )?;
        Ok(self.conn.changes() > 0)
    }

    /// All travel days, oldest first
    pub fn travel_days(&self) -> Result<Vec<TravelDay>> {
        let mut stmt = self
            .conn
            .prepare("SELECT day_date, reason FROM travel_days ORDER BY day_date")?;

        let days = stmt
            .query_map([], |row| {
                let date_str: String = row.get(0)?;
                Ok(TravelDay {
                    date: date_str.parse().unwrap_or_else(|_| Utc::now().date_naive()),
                    reason: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(days)
    }

    /// Unmark a travel day. Deleting an unmarked date is a no-op.
    pub fn delete_travel_day(&self, date: NaiveDate) -> Result<()> {
        self.conn.execute(
            "DELETE FROM travel_days WHERE day_date = ?1",
            params![date.to_string()],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn sample_set(d: &str, exercise: &str, weight: f64, reps: i32) -> SetLog {
        SetLog {
            date: date(d),
            program_day: "Day 1 - Push (Heavy Chest)".to_string(),
            exercise: exercise.to_string(),
            weight,
            reps,
            note: String::new(),
        }
    }

    #[test]
    fn test_seeds_default_user_once() {
        let db = Database::open_in_memory().unwrap();
        let stats = db.user_stats().unwrap();
        assert_eq!(stats.name, "Master");
        assert_eq!(stats.bodyweight, 60.5);
        assert_eq!(stats.bench_1rm, 55.0);
        assert_eq!(stats.deadlift_1rm, 120.0);
        assert_eq!(stats.squat_1rm, 90.0);

        // re-running schema init must not add a second row
        db.init_schema().unwrap();
        let count: i64 = db
            .conn
            .query_row("SELECT COUNT(*) FROM user_stats", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_update_stats_full_replace() {
        let db = Database::open_in_memory().unwrap();
        let mut stats = db.user_stats().unwrap();
        stats.bodyweight = 61.0;
        stats.bench_1rm = 57.5;
        stats.deadlift_1rm = 125.0;
        stats.squat_1rm = 95.0;
        db.update_stats(&stats).unwrap();

        let reread = db.user_stats().unwrap();
        assert_eq!(reread.bodyweight, 61.0);
        assert_eq!(reread.bench_1rm, 57.5);
        assert_eq!(reread.deadlift_1rm, 125.0);
        assert_eq!(reread.squat_1rm, 95.0);
    }

    #[test]
    fn test_log_set_then_history() {
        let mut db = Database::open_in_memory().unwrap();
        db.log_set(&sample_set("2026-01-05", "Bench Press", 45.0, 5))
            .unwrap();
        let mut newest = sample_set("2026-01-07", "Squat", 67.5, 5);
        newest.note = "belt on".to_string();
        db.log_set(&newest).unwrap();

        let history = db.recent_history().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].date, date("2026-01-07"));
        assert_eq!(history[0].exercise, "Squat");
        assert_eq!(history[0].weight, 67.5);
        assert_eq!(history[0].reps, 5);
        assert_eq!(history[0].note, "belt on");
        assert_eq!(history[1].exercise, "Bench Press");
    }

    #[test]
    fn test_history_is_capped() {
        let mut db = Database::open_in_memory().unwrap();
        for i in 0..60 {
            db.log_set(&sample_set("2026-01-05", &format!("ex{i}"), 20.0, 10))
                .unwrap();
        }
        assert_eq!(db.recent_history().unwrap().len(), HISTORY_LIMIT as usize);
    }

    #[test]
    fn test_travel_day_duplicate_is_soft_failure() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.add_travel_day(date("2026-03-01"), "conference").unwrap());
        assert!(!db.add_travel_day(date("2026-03-01"), "other reason").unwrap());

        // the original row is untouched
        let days = db.travel_days().unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].reason, "conference");
    }

    #[test]
    fn test_travel_days_sorted_ascending() {
        let db = Database::open_in_memory().unwrap();
        db.add_travel_day(date("2026-03-10"), "trip").unwrap();
        db.add_travel_day(date("2026-03-01"), "conference").unwrap();

        let days = db.travel_days().unwrap();
        assert_eq!(days[0].date, date("2026-03-01"));
        assert_eq!(days[1].date, date("2026-03-10"));
    }

    #[test]
    fn test_delete_travel_day_idempotent() {
        let db = Database::open_in_memory().unwrap();
        db.add_travel_day(date("2026-03-01"), "conference").unwrap();
        db.delete_travel_day(date("2026-03-01")).unwrap();
        assert!(db.travel_days().unwrap().is_empty());

        // deleting again is fine
        db.delete_travel_day(date("2026-03-01")).unwrap();
    }
}
