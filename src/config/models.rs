use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn description(&self) -> &str;
}

pub const DEFAULT_ZONES: [&str; 5] = ["north", "south", "east", "west", "central"];
pub const DEFAULT_MAJORS: [&str; 6] = [
    "computer science",
    "computer engineering",
    "business analytics",
    "information security",
    "electrical engineering",
    "mechanical engineering",
];
pub const DEFAULT_MIN_RENTAL_DAYS: i64 = 7;
pub const DEFAULT_MAX_RENTAL_DAYS: i64 = 365;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZonesConfigItem {
    pub value: Vec<String>,
    pub description: String,
}

impl Default for ZonesConfigItem {
    fn default() -> Self {
        Self {
            value: DEFAULT_ZONES.iter().map(|z| z.to_string()).collect(),
            description: "Zones a locker can be placed in.".into(),
        }
    }
}

impl ConfigItem<Vec<String>> for ZonesConfigItem {
    fn get_value(&self) -> &Vec<String> {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MajorsConfigItem {
    pub value: Vec<String>,
    pub description: String,
}

impl Default for MajorsConfigItem {
    fn default() -> Self {
        Self {
            value: DEFAULT_MAJORS.iter().map(|m| m.to_string()).collect(),
            description: "Courses a student can be enrolled in.".into(),
        }
    }
}

impl ConfigItem<Vec<String>> for MajorsConfigItem {
    fn get_value(&self) -> &Vec<String> {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalDaysConfigItem {
    pub value: i64,
    pub description: String,
}

impl RentalDaysConfigItem {
    pub fn min_default() -> Self {
        Self {
            value: DEFAULT_MIN_RENTAL_DAYS,
            description: "Shortest rental period in days.".into(),
        }
    }

    pub fn max_default() -> Self {
        Self {
            value: DEFAULT_MAX_RENTAL_DAYS,
            description: "Longest rental period in days.".into(),
        }
    }
}

impl ConfigItem<i64> for RentalDaysConfigItem {
    fn get_value(&self) -> &i64 {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}
