//! Split definitions - the fixed five-day program and the deadlift rebuild schedule

/// Which stored one-rep max a percentage load is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxLift {
    Bench,
    Deadlift,
    Squat,
}

/// How the target weight for a split exercise is derived
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadRule {
    /// Fraction of a stored one-rep max, plate-rounded
    Pct { max: MaxLift, fraction: f64 },
    /// Constant starting weight (dumbbells, light cable work)
    Fixed(f64),
    /// No prescribed load - bodyweight or machine, scheme only
    None,
    /// Day-2 deadlift slot: label and weight come from the weekly
    /// rebuild schedule, not from a static fraction
    DeadliftPhase,
}

#[derive(Debug, Clone, Copy)]
pub struct SplitExercise {
    pub name: &'static str,
    pub scheme: &'static str,
    pub load: LoadRule,
}

#[derive(Debug, Clone, Copy)]
pub struct SplitDay {
    pub title: &'static str,
    pub exercises: &'static [SplitExercise],
}

/// Five-day split, heavy-to-volume across the week
pub const SPLIT: &[SplitDay] = &[
    SplitDay {
        title: "Day 1 - Push (Heavy Chest)",
        exercises: &[
            SplitExercise {
                name: "Bench Press (wide grip) - heavy",
                scheme: "5x3-5",
                load: LoadRule::Pct { max: MaxLift::Bench, fraction: 0.82 },
            },
            SplitExercise {
                name: "Incline DB Press",
                scheme: "4x8",
                load: LoadRule::Fixed(16.0),
            },
            SplitExercise {
                name: "Weighted Dips",
                scheme: "3x5-8",
                load: LoadRule::None,
            },
            SplitExercise {
                name: "Machine Chest Press",
                scheme: "3x10",
                load: LoadRule::None,
            },
            SplitExercise {
                name: "Cable Flyes",
                scheme: "3x12",
                load: LoadRule::None,
            },
            SplitExercise {
                name: "Light Tricep Pushdown",
                scheme: "2x15",
                load: LoadRule::Fixed(20.0),
            },
        ],
    },
    SplitDay {
        title: "Day 2 - Pull (Strength + Deadlift rebuild)",
        exercises: &[
            SplitExercise {
                name: "Deadlift (conventional) - phased",
                scheme: "",
                load: LoadRule::DeadliftPhase,
            },
            SplitExercise {
                name: "Bent Over Row",
                scheme: "4x6",
                load: LoadRule::Pct { max: MaxLift::Deadlift, fraction: 0.45 },
            },
            SplitExercise {
                name: "Weighted Pull-Ups",
                scheme: "4x5",
                load: LoadRule::None,
            },
            SplitExercise {
                name: "Lat Pulldown",
                scheme: "3x8",
                load: LoadRule::None,
            },
            SplitExercise {
                name: "Cable Row",
                scheme: "3x10",
                load: LoadRule::None,
            },
            SplitExercise {
                name: "Face Pulls",
                scheme: "3x15",
                load: LoadRule::None,
            },
            SplitExercise {
                name: "Hammer Curls",
                scheme: "3x10",
                load: LoadRule::Fixed(16.0),
            },
        ],
    },
    SplitDay {
        title: "Day 3 - Legs (Power)",
        exercises: &[
            SplitExercise {
                name: "Squat",
                scheme: "5x5",
                load: LoadRule::Pct { max: MaxLift::Squat, fraction: 0.75 },
            },
            SplitExercise {
                name: "Leg Press",
                scheme: "4x10",
                load: LoadRule::Fixed(95.0),
            },
            SplitExercise {
                name: "RDL (light)",
                scheme: "3x8-10",
                load: LoadRule::Pct { max: MaxLift::Deadlift, fraction: 0.35 },
            },
            SplitExercise {
                name: "Leg Extension",
                scheme: "3x12",
                load: LoadRule::None,
            },
            SplitExercise {
                name: "Hamstring Curl",
                scheme: "3x12",
                load: LoadRule::None,
            },
            SplitExercise {
                name: "Calves",
                scheme: "3x15-20",
                load: LoadRule::None,
            },
        ],
    },
    SplitDay {
        title: "Day 4 - Push (Volume)",
        exercises: &[
            SplitExercise {
                name: "Bench Press - volume",
                scheme: "4x8",
                load: LoadRule::Pct { max: MaxLift::Bench, fraction: 0.62 },
            },
            SplitExercise {
                name: "Incline Smith Press",
                scheme: "4x10",
                load: LoadRule::None,
            },
            SplitExercise {
                name: "Chest Dips (bw)",
                scheme: "3x10-12",
                load: LoadRule::None,
            },
            SplitExercise {
                name: "Lateral Raises",
                scheme: "4x15",
                load: LoadRule::None,
            },
            SplitExercise {
                name: "Overhead Press",
                scheme: "3x6",
                load: LoadRule::Pct { max: MaxLift::Bench, fraction: 0.4 },
            },
            SplitExercise {
                name: "High-Low Cable Flyes",
                scheme: "3x12",
                load: LoadRule::None,
            },
            SplitExercise {
                name: "Rope Tricep Ext",
                scheme: "3x12",
                load: LoadRule::None,
            },
        ],
    },
    SplitDay {
        title: "Day 5 - Pull (Volume)",
        exercises: &[
            SplitExercise {
                name: "Pull-Ups (strict)",
                scheme: "3x8",
                load: LoadRule::None,
            },
            SplitExercise {
                name: "Seated Row",
                scheme: "4x12",
                load: LoadRule::None,
            },
            SplitExercise {
                name: "Single Arm Lat Pulldown",
                scheme: "3x10",
                load: LoadRule::None,
            },
            SplitExercise {
                name: "Chest-Supported DB Row",
                scheme: "3x12",
                load: LoadRule::None,
            },
            SplitExercise {
                name: "Rear Delt Machine",
                scheme: "3x15",
                load: LoadRule::None,
            },
            SplitExercise {
                name: "Barbell Curls",
                scheme: "3x10",
                load: LoadRule::None,
            },
            SplitExercise {
                name: "Concentration Curls",
                scheme: "2x12",
                load: LoadRule::None,
            },
        ],
    },
];

/// Deadlift rebuild schedule: week number -> (session label, fraction of
/// deadlift 1RM). Week 5 intentionally backs off below week 4 before the
/// final ramp - keep the table as written.
pub fn deadlift_week(week: i32) -> (&'static str, f64) {
    match week {
        ..=1 => ("RDL 3x10", 0.25),
        2 => ("DL 4x5 light", 0.35),
        3 => ("DL 3x3", 0.55),
        4 => ("DL 3x2", 0.75),
        5 => ("DL 3x3 heavier", 0.65),
        6 => ("DL 3x2 heavier", 0.80),
        7.. => ("DL 1-3RM test day", 0.90),
    }
}
