//! Program generator - turns stored maxes and a week number into a weekly plan

use serde::{Deserialize, Serialize};

use crate::db::UserStats;
use crate::loads::pct_of_max;
use crate::split::{LoadRule, MaxLift, SPLIT, deadlift_week};

/// One planned exercise: name, sets-by-reps scheme, optional target weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExercisePlan {
    pub name: String,
    pub sets: String,
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub title: String,
    pub exercises: Vec<ExercisePlan>,
}

/// Full five-day plan for one week. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub week: i32,
    pub user: UserStats,
    pub days: Vec<DayPlan>,
}

fn max_for(stats: &UserStats, lift: MaxLift) -> f64 {
    match lift {
        MaxLift::Bench => stats.bench_1rm,
        MaxLift::Deadlift => stats.deadlift_1rm,
        MaxLift::Squat => stats.squat_1rm,
    }
}

/// Build the plan for one week. Pure: reads stats, computes, returns.
pub fn generate_week(stats: &UserStats, week: i32) -> WeeklyPlan {
    let days = SPLIT
        .iter()
        .map(|day| DayPlan {
            title: day.title.to_string(),
            exercises: day.exercises.iter().map(|ex| plan_exercise(stats, week, ex)).collect(),
        })
        .collect();

    WeeklyPlan {
        week,
        user: stats.clone(),
        days,
    }
}

fn plan_exercise(stats: &UserStats, week: i32, ex: &crate::split::SplitExercise) -> ExercisePlan {
    match ex.load {
        LoadRule::Pct { max, fraction } => ExercisePlan {
            name: ex.name.to_string(),
            sets: ex.scheme.to_string(),
            weight: Some(pct_of_max(max_for(stats, max), fraction)),
        },
        LoadRule::Fixed(kg) => ExercisePlan {
            name: ex.name.to_string(),
            sets: ex.scheme.to_string(),
            weight: Some(kg),
        },
        LoadRule::None => ExercisePlan {
            name: ex.name.to_string(),
            sets: ex.scheme.to_string(),
            weight: None,
        },
        // the phased slot shows the schedule label instead of its own name
        LoadRule::DeadliftPhase => {
            let (label, fraction) = deadlift_week(week);
            ExercisePlan {
                name: label.to_string(),
                sets: String::new(),
                weight: Some(pct_of_max(stats.deadlift_1rm, fraction)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_stats() -> UserStats {
        UserStats {
            name: "Master".to_string(),
            bodyweight: 60.5,
            bench_1rm: 55.0,
            deadlift_1rm: 120.0,
            squat_1rm: 90.0,
            last_updated: "2026-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_week_one_worked_example() {
        let plan = generate_week(&sample_stats(), 1);
        assert_eq!(plan.week, 1);
        assert_eq!(plan.days.len(), 5);

        // Day 1 heavy bench: 82% of 55 -> 45.1 -> 45.0
        let bench = &plan.days[0].exercises[0];
        assert_eq!(bench.name, "Bench Press (wide grip) - heavy");
        assert_eq!(bench.sets, "5x3-5");
        assert_eq!(bench.weight, Some(45.0));

        // Day 2 deadlift slot carries the week-1 schedule entry
        let deadlift = &plan.days[1].exercises[0];
        assert_eq!(deadlift.name, "RDL 3x10");
        assert_eq!(deadlift.sets, "");
        assert_eq!(deadlift.weight, Some(30.0));

        // Day 3 squat: 75% of 90 -> 67.5
        let squat = &plan.days[2].exercises[0];
        assert_eq!(squat.name, "Squat");
        assert_eq!(squat.weight, Some(67.5));
    }

    #[test]
    fn test_fixed_and_unloaded_exercises() {
        let plan = generate_week(&sample_stats(), 1);

        let incline = &plan.days[0].exercises[1];
        assert_eq!(incline.name, "Incline DB Press");
        assert_eq!(incline.weight, Some(16.0));

        let dips = &plan.days[0].exercises[2];
        assert_eq!(dips.name, "Weighted Dips");
        assert_eq!(dips.sets, "3x5-8");
        assert_eq!(dips.weight, None);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let stats = sample_stats();
        assert_eq!(generate_week(&stats, 3), generate_week(&stats, 3));
    }

    #[test]
    fn test_week_changes_only_the_deadlift_slot() {
        let stats = sample_stats();
        let week1 = generate_week(&stats, 1);
        let week4 = generate_week(&stats, 4);

        for (day_idx, (d1, d4)) in week1.days.iter().zip(&week4.days).enumerate() {
            assert_eq!(d1.title, d4.title);
            for (ex_idx, (e1, e4)) in d1.exercises.iter().zip(&d4.exercises).enumerate() {
                if day_idx == 1 && ex_idx == 0 {
                    assert_eq!(e4.name, "DL 3x2");
                    assert_eq!(e4.weight, Some(90.0)); // 75% of 120
                } else {
                    assert_eq!(e1, e4);
                }
            }
        }
    }

    #[test]
    fn test_does_not_mutate_stats() {
        let stats = sample_stats();
        let before = stats.clone();
        let _ = generate_week(&stats, 6);
        assert_eq!(stats, before);
    }

    #[test]
    fn test_plan_json_shape() {
        let plan = generate_week(&sample_stats(), 2);
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["week"], 2);
        assert_eq!(json["user"]["bench_1rm"], 55.0);
        assert_eq!(json["days"][1]["exercises"][0]["name"], "DL 4x5 light");
        assert_eq!(json["days"][1]["exercises"][0]["weight"], 42.5); // 35% of 120 -> 42 -> 42.5
        assert!(json["days"][0]["exercises"][2]["weight"].is_null());
    }
}
