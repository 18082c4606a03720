use macrolog_core::catalog::CATALOG;
use macrolog_core::{DaySummary, Goals, Meal};
use tabled::{Table, Tabled};
use tabled::settings::{Color, Modify, Style};
use tabled::settings::object::Rows;

#[derive(Tabled)]
struct MealRow {
    #[tabled(rename = "Meal")]
    meal_time: String,
    #[tabled(rename = "Food")]
    food: String,
    #[tabled(rename = "Protein (g)")]
    protein: String,
    #[tabled(rename = "Calories")]
    calories: String,
}

pub fn show_meals(meals: &[Meal]) {
    if meals.is_empty() {
        println!("No meals logged.");
        return;
    }

    let rows: Vec<MealRow> = meals
        .iter()
        .map(|m| MealRow {
            meal_time: m.meal_time.to_string(),
            food: m.food_name.clone(),
            protein: format!("{:.1}", m.protein),
            calories: format!("{:.0}", m.calories),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("{}", table);
}

pub fn show_summary(summary: &DaySummary, goals: &Goals) {
    println!(
        "Protein:  {:>6.1} / {:.0} g   ({:.0}%)",
        summary.protein_total, goals.protein_goal, summary.protein_percentage
    );
    println!(
        "Calories: {:>6.0} / {:.0} kcal ({:.0}%)",
        summary.calorie_total, goals.calorie_goal, summary.calorie_percentage
    );
    if summary.goal_reached {
        println!("\x1b[1;32mGoal reached today!\x1b[0m");
    }
}

#[derive(Tabled)]
struct FoodRow {
    #[tabled(rename = "Food")]
    food: &'static str,
    #[tabled(rename = "Per")]
    base_unit: &'static str,
    #[tabled(rename = "Protein (g)")]
    protein: String,
    #[tabled(rename = "Calories")]
    calories: String,
}

pub fn show_catalog() {
    let rows: Vec<FoodRow> = CATALOG
        .iter()
        .map(|f| FoodRow {
            food: f.name,
            base_unit: f.base_unit.label(),
            protein: format!("{:.1}", f.protein),
            calories: format!("{:.0}", f.calories),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("{}", table);
}
