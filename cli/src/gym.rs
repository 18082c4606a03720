use macrolog_core::Workout;
use tabled::{Table, Tabled};
use tabled::settings::{Color, Modify, Style};
use tabled::settings::object::Rows;

#[derive(Tabled)]
struct WorkoutRow {
    #[tabled(rename = "Exercise")]
    exercise: String,
    #[tabled(rename = "Weight (kg)")]
    weight: String,
    #[tabled(rename = "Reps")]
    reps: u32,
    #[tabled(rename = "Sets")]
    sets: u32,
    #[tabled(rename = "Notes")]
    notes: String,
}

pub fn show_workouts(workouts: &[Workout]) {
    if workouts.is_empty() {
        println!("No workouts logged.");
        return;
    }

    let rows: Vec<WorkoutRow> = workouts
        .iter()
        .map(|w| WorkoutRow {
            exercise: w.exercise_name.clone(),
            weight: format!("{:.1}", w.weight),
            reps: w.reps,
            sets: w.sets,
            notes: if w.notes.is_empty() { "-".to_string() } else { w.notes.clone() },
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("{}", table);
}

pub fn show_last_workout(exercise: &str, last: Option<&Workout>) {
    match last {
        Some(w) => {
            println!(
                "{}: last done {} - {:.1} kg x {} reps x {} sets",
                w.exercise_name,
                w.date_logged.format("%Y-%m-%d"),
                w.weight,
                w.reps,
                w.sets
            );
            if !w.notes.is_empty() {
                println!("  Notes: {}", w.notes);
            }
        }
        None => println!("No history for '{}' yet.", exercise),
    }
}
