mod dashboard;
mod gym;
mod meals;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::Parser;
use macrolog_core::catalog::{self, QuantityUnit};
use macrolog_core::{
    parse_log_date, today, DaySummaryUseCase, FileDailyRecordRepository, FileGoalsRepository,
    FileMealRepository, FileWorkoutRepository, Goals, MealService, MealTime, StreakUseCase,
    WorkoutService,
};

#[derive(Parser)]
#[command(name = "macrolog")]
#[command(about = "A nutrition and workout tracker for your terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show a day's meals, totals vs goals, and streaks (records the day's outcome)
    Today {
        /// Day to show: today, yesterday, -Nd or YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },
    /// Log a food with explicit per-unit nutrition
    Add {
        food: String,
        #[arg(long)]
        quantity: f64,
        /// Unit the quantity is measured in (free text, e.g. grams, piece, cup)
        #[arg(long, default_value = "piece")]
        unit: String,
        /// Protein per unit, in grams
        #[arg(long)]
        protein: f64,
        /// Calories per unit
        #[arg(long)]
        calories: f64,
        /// breakfast, lunch, dinner or snack
        #[arg(long, default_value = "snack")]
        meal_time: String,
        #[arg(long)]
        date: Option<String>,
    },
    /// Log a food from the built-in catalog
    Log {
        food: String,
        #[arg(long)]
        quantity: f64,
        /// grams or pieces
        #[arg(long, default_value = "grams")]
        unit: String,
        #[arg(long, default_value = "snack")]
        meal_time: String,
        #[arg(long)]
        date: Option<String>,
    },
    /// List the built-in food catalog
    Foods,
    /// Delete a day's logged meals
    ClearMeals {
        #[arg(long)]
        date: Option<String>,
    },
    /// Show a day's workouts
    Gym {
        #[arg(long)]
        date: Option<String>,
    },
    /// Log a gym session
    AddWorkout {
        exercise: String,
        /// Working weight in kg
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        reps: u32,
        #[arg(long)]
        sets: u32,
        #[arg(long, default_value = "")]
        notes: String,
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the last recorded session of an exercise
    Last { exercise: String },
    /// Delete a day's workouts
    ClearWorkouts {
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the current protein/calorie goals
    Goals,
    /// Update the protein/calorie goals
    SetGoals {
        /// Daily protein target in grams
        #[arg(long)]
        protein: f64,
        /// Daily calorie target in kcal
        #[arg(long)]
        calories: f64,
    },
    /// Open the progress dashboard
    Dash,
}

fn parse_meal_time(input: &str) -> MealTime {
    match input.to_lowercase().as_str() {
        "b" | "breakfast" => MealTime::Breakfast,
        "l" | "lunch" => MealTime::Lunch,
        "d" | "dinner" => MealTime::Dinner,
        _ => MealTime::Snack,
    }
}

fn parse_quantity_unit(input: &str) -> Result<QuantityUnit> {
    match input.to_lowercase().as_str() {
        "g" | "gram" | "grams" => Ok(QuantityUnit::Grams),
        "piece" | "pieces" | "pc" => Ok(QuantityUnit::Pieces),
        other => Err(anyhow!("Unknown unit '{}' (expected grams or pieces)", other)),
    }
}

fn resolve_date(date: Option<String>) -> Result<NaiveDate> {
    match date {
        Some(s) => parse_log_date(&s),
        None => Ok(today()),
    }
}

/// The home-view flow: summarize the day against the goals, persist the
/// outcome, then report streaks.
fn show_today(
    meal_service: &MealService<FileMealRepository>,
    record_repo: &FileDailyRecordRepository,
    goals: &Goals,
    date: NaiveDate,
) -> Result<()> {
    let summary = DaySummaryUseCase::new(meal_service).summarize(date, goals)?;

    let streaks = StreakUseCase::new(record_repo);
    streaks.record_daily_outcome(date, summary.protein_goal_met, summary.calorie_goal_met)?;
    let streak_summary = streaks.summary(date)?;

    println!("{}", date.format("%Y-%m-%d (%a)"));
    meals::show_meals(&meal_service.meals_for(date)?);
    meals::show_summary(&summary, goals);
    println!(
        "Streak: {} days (best {}, {} days tracked)",
        streak_summary.current, streak_summary.best, streak_summary.days_tracked
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let meal_service = MealService::new(FileMealRepository::new(None)?);
    let workout_service = WorkoutService::new(FileWorkoutRepository::new(None)?);
    let record_repo = FileDailyRecordRepository::new(None)?;
    let goals_repo = FileGoalsRepository::new(None)?;

    match cli.command {
        Some(Commands::Today { date }) => {
            let date = resolve_date(date)?;
            let goals = goals_repo.load()?;
            show_today(&meal_service, &record_repo, &goals, date)?;
        }
        Some(Commands::Add { food, quantity, unit, protein, calories, meal_time, date }) => {
            let date = resolve_date(date)?;
            let food_name = format!("{} ({} {})", food, quantity, unit);
            let meal = meal_service.add_meal(
                food_name,
                quantity,
                protein * quantity,
                calories * quantity,
                parse_meal_time(&meal_time),
                date,
            )?;
            println!(
                "Logged: {} - {:.1} g protein, {:.0} kcal",
                meal.food_name, meal.protein, meal.calories
            );
        }
        Some(Commands::Log { food, quantity, unit, meal_time, date }) => {
            let date = resolve_date(date)?;
            let quantity_unit = parse_quantity_unit(&unit)?;
            let (protein, calories) = catalog::nutrition_for(&food, quantity, quantity_unit)?;
            let food_name = format!("{} ({} {})", food, quantity, unit);
            let meal = meal_service.add_meal(
                food_name,
                quantity,
                protein,
                calories,
                parse_meal_time(&meal_time),
                date,
            )?;
            println!(
                "Logged: {} - {:.1} g protein, {:.0} kcal",
                meal.food_name, meal.protein, meal.calories
            );
        }
        Some(Commands::Foods) => {
            meals::show_catalog();
        }
        Some(Commands::ClearMeals { date }) => {
            let date = resolve_date(date)?;
            meal_service.clear_day(date)?;
            println!("Cleared meals for {}.", date);
        }
        Some(Commands::Gym { date }) => {
            let date = resolve_date(date)?;
            println!("{}", date.format("%Y-%m-%d (%a)"));
            gym::show_workouts(&workout_service.workouts_for(date)?);
        }
        Some(Commands::AddWorkout { exercise, weight, reps, sets, notes, date }) => {
            let date = resolve_date(date)?;
            if let Some(last) = workout_service.last_workout(&exercise)? {
                println!(
                    "Last time: {:.1} kg x {} reps x {} sets ({})",
                    last.weight,
                    last.reps,
                    last.sets,
                    last.date_logged.format("%Y-%m-%d")
                );
            }
            let workout =
                workout_service.add_workout(exercise, weight, reps, sets, notes, date)?;
            println!(
                "Logged: {} - {:.1} kg x {} reps x {} sets",
                workout.exercise_name, workout.weight, workout.reps, workout.sets
            );
        }
        Some(Commands::Last { exercise }) => {
            let last = workout_service.last_workout(&exercise)?;
            gym::show_last_workout(&exercise, last.as_ref());
        }
        Some(Commands::ClearWorkouts { date }) => {
            let date = resolve_date(date)?;
            workout_service.clear_day(date)?;
            println!("Cleared workouts for {}.", date);
        }
        Some(Commands::Goals) => {
            let goals = goals_repo.load()?;
            println!("Protein goal:  {:.0} g/day", goals.protein_goal);
            println!("Calorie goal:  {:.0} kcal/day", goals.calorie_goal);
        }
        Some(Commands::SetGoals { protein, calories }) => {
            let goals = Goals { protein_goal: protein, calorie_goal: calories };
            goals_repo.save(&goals)?;
            println!(
                "Goals updated: {:.0} g protein, {:.0} kcal.",
                goals.protein_goal, goals.calorie_goal
            );
        }
        Some(Commands::Dash) | None => {
            let date = today();
            let goals = goals_repo.load()?;
            let summary = DaySummaryUseCase::new(&meal_service).summarize(date, &goals)?;

            let streaks = StreakUseCase::new(&record_repo);
            streaks.record_daily_outcome(
                date,
                summary.protein_goal_met,
                summary.calorie_goal_met,
            )?;
            let streak_summary = streaks.summary(date)?;

            dashboard::run(dashboard::DashboardData {
                date,
                summary,
                goals,
                streaks: streak_summary,
            })?;
        }
    }
    Ok(())
}
