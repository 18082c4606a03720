use anyhow::{anyhow, Result};

/// The reference amount a catalog entry's nutrition figures describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUnit {
    /// Figures are per 100 g.
    Grams100,
    Piece,
    Slice,
    Scoop,
    Cup,
    Tsp,
}

impl BaseUnit {
    /// True for units you count rather than weigh.
    pub fn is_countable(&self) -> bool {
        !matches!(self, BaseUnit::Grams100)
    }

    pub fn label(&self) -> &'static str {
        match self {
            BaseUnit::Grams100 => "100g",
            BaseUnit::Piece => "piece",
            BaseUnit::Slice => "slice",
            BaseUnit::Scoop => "scoop",
            BaseUnit::Cup => "cup",
            BaseUnit::Tsp => "tsp",
        }
    }
}

/// How the user expressed the quantity they ate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUnit {
    Grams,
    Pieces,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodInfo {
    pub name: &'static str,
    /// kcal per base unit.
    pub calories: f64,
    /// grams of protein per base unit.
    pub protein: f64,
    pub base_unit: BaseUnit,
    /// Weight of one countable unit; used to bridge between grams and
    /// pieces. Absent entries fall back to 100 g.
    pub grams_per_unit: Option<f64>,
}

const DEFAULT_GRAMS_PER_UNIT: f64 = 100.0;

pub const CATALOG: &[FoodInfo] = &[
    // Grains / bread
    FoodInfo { name: "White Rice", calories: 130.0, protein: 2.7, base_unit: BaseUnit::Grams100, grams_per_unit: None },
    FoodInfo { name: "Bread (1 slice)", calories: 80.0, protein: 5.0, base_unit: BaseUnit::Slice, grams_per_unit: Some(30.0) },
    FoodInfo { name: "Almond Tortilla", calories: 150.0, protein: 2.0, base_unit: BaseUnit::Piece, grams_per_unit: Some(50.0) },
    // Proteins
    FoodInfo { name: "Egg (1 large)", calories: 70.0, protein: 6.0, base_unit: BaseUnit::Piece, grams_per_unit: None },
    FoodInfo { name: "Chicken", calories: 165.0, protein: 31.0, base_unit: BaseUnit::Grams100, grams_per_unit: None },
    FoodInfo { name: "Shrimp", calories: 99.0, protein: 24.0, base_unit: BaseUnit::Grams100, grams_per_unit: None },
    FoodInfo { name: "Fish", calories: 140.0, protein: 25.0, base_unit: BaseUnit::Grams100, grams_per_unit: None },
    FoodInfo { name: "Paneer", calories: 265.0, protein: 18.0, base_unit: BaseUnit::Grams100, grams_per_unit: None },
    FoodInfo { name: "Tofu", calories: 76.0, protein: 8.0, base_unit: BaseUnit::Grams100, grams_per_unit: None },
    FoodInfo { name: "Protein Powder (1 scoop)", calories: 120.0, protein: 24.0, base_unit: BaseUnit::Scoop, grams_per_unit: Some(30.0) },
    // Vegetables
    FoodInfo { name: "Spinach", calories: 23.0, protein: 3.0, base_unit: BaseUnit::Grams100, grams_per_unit: None },
    FoodInfo { name: "Potatoes", calories: 87.0, protein: 2.0, base_unit: BaseUnit::Grams100, grams_per_unit: None },
    FoodInfo { name: "Broccoli", calories: 35.0, protein: 3.0, base_unit: BaseUnit::Grams100, grams_per_unit: None },
    // Dairy
    FoodInfo { name: "Yogurt", calories: 60.0, protein: 3.5, base_unit: BaseUnit::Grams100, grams_per_unit: None },
    FoodInfo { name: "Whole Milk", calories: 150.0, protein: 8.0, base_unit: BaseUnit::Cup, grams_per_unit: Some(240.0) },
    FoodInfo { name: "Cheese", calories: 400.0, protein: 25.0, base_unit: BaseUnit::Grams100, grams_per_unit: None },
    FoodInfo { name: "Ghee", calories: 45.0, protein: 0.0, base_unit: BaseUnit::Tsp, grams_per_unit: Some(5.0) },
    // Fruits
    FoodInfo { name: "Apple (1 medium)", calories: 95.0, protein: 0.5, base_unit: BaseUnit::Piece, grams_per_unit: Some(180.0) },
    FoodInfo { name: "Banana (1 medium)", calories: 105.0, protein: 1.3, base_unit: BaseUnit::Piece, grams_per_unit: Some(120.0) },
    FoodInfo { name: "Avocado", calories: 160.0, protein: 2.0, base_unit: BaseUnit::Grams100, grams_per_unit: None },
    FoodInfo { name: "Dates (1 date)", calories: 20.0, protein: 0.2, base_unit: BaseUnit::Piece, grams_per_unit: Some(8.0) },
    FoodInfo { name: "Orange (1 medium)", calories: 62.0, protein: 1.2, base_unit: BaseUnit::Piece, grams_per_unit: Some(130.0) },
    FoodInfo { name: "Pear (1 medium)", calories: 100.0, protein: 0.6, base_unit: BaseUnit::Piece, grams_per_unit: Some(180.0) },
];

pub fn find(name: &str) -> Option<&'static FoodInfo> {
    CATALOG.iter().find(|f| f.name.eq_ignore_ascii_case(name))
}

/// Total (protein, calories) for a logged quantity of a catalog food.
///
/// A grams quantity against a per-100g food scales by quantity/100; against
/// a countable food it scales by quantity / grams-per-unit. A pieces
/// quantity against a countable food is a straight multiplier; against a
/// per-100g food each "piece" is converted to grams first.
pub fn nutrition_for(name: &str, quantity: f64, unit: QuantityUnit) -> Result<(f64, f64)> {
    let info = find(name).ok_or_else(|| anyhow!("Unknown food: {}", name))?;

    let grams_per_unit = info.grams_per_unit.unwrap_or(DEFAULT_GRAMS_PER_UNIT);
    let multiplier = match unit {
        QuantityUnit::Grams => {
            if info.base_unit == BaseUnit::Grams100 {
                quantity / 100.0
            } else {
                quantity / grams_per_unit
            }
        }
        QuantityUnit::Pieces => {
            if info.base_unit.is_countable() {
                quantity
            } else {
                quantity * grams_per_unit / 100.0
            }
        }
    };

    Ok((info.protein * multiplier, info.calories * multiplier))
}
