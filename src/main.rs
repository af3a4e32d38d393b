//! gymtrack - Personal strength-training tracker

use std::net::SocketAddr;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};

use gymtrack::db::{Database, SetLog};
use gymtrack::program::generate_week;
use gymtrack::tui::App;

#[derive(Parser)]
#[command(name = "gymtrack")]
#[command(author, version, about = "Personal strength-training tracker")]
struct Cli {
    /// SQLite database file
    #[arg(long, env = "GYMTRACK_DB", default_value = "gym.db")]
    db: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open TUI dashboard
    Tui,

    /// Print the weekly plan
    Plan {
        /// Program week (1-8)
        #[arg(short, long, default_value = "1")]
        week: i32,
    },

    /// Quick-log one performed set
    Log {
        /// Exercise name (e.g., "Bench Press", "Squat")
        exercise: String,

        /// Weight in kg
        #[arg(short, long)]
        weight: f64,

        /// Number of reps
        #[arg(short, long)]
        reps: i32,

        /// Date of the workout (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Program day label (e.g., "Day 1 - Push (Heavy Chest)")
        #[arg(long, default_value = "")]
        day: String,

        /// Optional note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List recent logged sets
    History {
        /// Number of records to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show current stats
    Stats,

    /// Update bodyweight and one-rep maxes
    SetStats {
        #[arg(long)]
        name: Option<String>,

        /// Bodyweight in kg
        #[arg(long)]
        bodyweight: Option<f64>,

        /// Bench press 1RM in kg
        #[arg(long)]
        bench: Option<f64>,

        /// Deadlift 1RM in kg
        #[arg(long)]
        deadlift: Option<f64>,

        /// Squat 1RM in kg
        #[arg(long)]
        squat: Option<f64>,
    },

    /// Run the JSON API server
    Serve {
        /// Address to bind (use 0.0.0.0 for phone access on the same network)
        #[arg(short, long, default_value = "0.0.0.0:8080")]
        bind: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut db = Database::open(&cli.db)?;

    match cli.command {
        Some(Commands::Tui) => {
            let mut app = App::new(db)?;
            app.run()?;
        }

        Some(Commands::Plan { week }) => {
            let stats = db.user_stats()?;
            let plan = generate_week(&stats, week);
            println!(
                "PROGRAM WEEK {} - User: {} (bw {}kg)",
                plan.week, stats.name, stats.bodyweight
            );
            for day in &plan.days {
                println!("\n{}", day.title);
                for ex in &day.exercises {
                    match (ex.sets.as_str(), ex.weight) {
                        ("", Some(w)) => println!("  - {} @ {} kg", ex.name, w),
                        (sets, Some(w)) => println!("  - {} - {} @ {} kg", ex.name, sets, w),
                        (sets, None) => println!("  - {} - {}", ex.name, sets),
                    }
                }
            }
        }

        Some(Commands::Log { exercise, weight, reps, date, day, note }) => {
            let set = SetLog {
                date: date.unwrap_or_else(|| Utc::now().date_naive()),
                program_day: day,
                exercise: exercise.clone(),
                weight,
                reps,
                note: note.unwrap_or_default(),
            };
            let id = db.log_set(&set)?;
            println!("Logged: {} {}kg x{} (workout id: {})", exercise, weight, reps, id);
        }

        Some(Commands::History { limit }) => {
            let history = db.recent_history()?;
            println!("Recent sets:");
            println!("{:-<70}", "");
            for row in history.iter().take(limit) {
                println!(
                    "{} | {:28} | {}kg x{} | {}",
                    row.date,
                    row.exercise,
                    row.weight,
                    row.reps,
                    if row.note.is_empty() { "-" } else { row.note.as_str() }
                );
            }
        }

        Some(Commands::Stats) => {
            let stats = db.user_stats()?;
            println!("User: {}", stats.name);
            println!("Bodyweight:   {} kg", stats.bodyweight);
            println!("Bench 1RM:    {} kg", stats.bench_1rm);
            println!("Deadlift 1RM: {} kg", stats.deadlift_1rm);
            println!("Squat 1RM:    {} kg", stats.squat_1rm);
            println!("Last updated: {}", stats.last_updated.format("%Y-%m-%d %H:%M"));
        }

        Some(Commands::SetStats { name, bodyweight, bench, deadlift, squat }) => {
            let mut stats = db.user_stats()?;
            if let Some(name) = name {
                stats.name = name;
            }
            if let Some(bw) = bodyweight {
                stats.bodyweight = bw;
            }
            if let Some(bench) = bench {
                stats.bench_1rm = bench;
            }
            if let Some(deadlift) = deadlift {
                stats.deadlift_1rm = deadlift;
            }
            if let Some(squat) = squat {
                stats.squat_1rm = squat;
            }
            db.update_stats(&stats)?;
            println!(
                "Updated: bw {} / bench {} / deadlift {} / squat {}",
                stats.bodyweight, stats.bench_1rm, stats.deadlift_1rm, stats.squat_1rm
            );
        }

        Some(Commands::Serve { bind }) => {
            println!("Serving gymtrack API on {}", bind);
            gymtrack::web::serve(db, bind).await?;
        }

        None => {
            // Default: show TUI
            let mut app = App::new(db)?;
            app.run()?;
        }
    }

    Ok(())
}
