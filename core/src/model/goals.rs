use serde::{Deserialize, Serialize};

/// Daily macro targets. Owned by the caller and passed explicitly into
/// summary computations rather than read as ambient state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Goals {
    pub protein_goal: f64,
    pub calorie_goal: f64,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            protein_goal: 70.0,
            calorie_goal: 2300.0,
        }
    }
}
