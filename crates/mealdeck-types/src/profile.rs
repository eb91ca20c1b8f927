//! User profile schema.
//!
//! A flat, versionless data contract describing user preferences. These
//! types carry no behavior beyond display labels; the profile is static
//! data fed to the profile screen.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// Basic Identity & Lifestyle
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeasurementSystem {
    Imperial,
    #[default]
    Metric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    LightlyActive,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Returns the label shown in the profile screen.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly active",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very active",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBasicProfile {
    pub full_name: String,
    /// ISO 8601 date, e.g. "1990-04-12". None when never provided.
    pub date_of_birth: Option<String>,
    pub gender: Option<Gender>,
    pub country: String,
    /// IANA timezone ID, e.g. "Europe/Lisbon".
    pub timezone: Option<String>,
    pub measurement_system: MeasurementSystem,
    pub activity_level: ActivityLevel,
}

// ============================================================================
// Dietary Preferences
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DietType {
    Vegan,
    Vegetarian,
    Keto,
    Paleo,
    #[default]
    Balanced,
    Pescatarian,
    Custom,
}

impl DietType {
    pub fn label(&self) -> &'static str {
        match self {
            DietType::Vegan => "Vegan",
            DietType::Vegetarian => "Vegetarian",
            DietType::Keto => "Keto",
            DietType::Paleo => "Paleo",
            DietType::Balanced => "Balanced",
            DietType::Pescatarian => "Pescatarian",
            DietType::Custom => "Custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cuisine {
    Mediterranean,
    Asian,
    AmericanGeneral,
    Mexican,
    Italian,
    Indian,
    African,
    French,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DietaryPreferences {
    pub diet_type: DietType,
    /// Only meaningful when `diet_type` is `Custom`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_diet_type_name: Option<String>,
    pub cuisine_preferences: BTreeSet<Cuisine>,
    pub liked_ingredients: Vec<String>,
    pub disliked_ingredients: Vec<String>,
}

// ============================================================================
// Allergies & Intolerances
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommonAllergen {
    Dairy,
    Gluten,
    Nuts,
    Soy,
    Eggs,
    Fish,
    Shellfish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllergySeverity {
    Mild,
    Moderate,
    Severe,
}

impl AllergySeverity {
    pub fn label(&self) -> &'static str {
        match self {
            AllergySeverity::Mild => "mild",
            AllergySeverity::Moderate => "moderate",
            AllergySeverity::Severe => "severe",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAllergy {
    pub name: String,
    pub severity: AllergySeverity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AllergyInfo {
    pub common_allergens: BTreeSet<CommonAllergen>,
    pub custom_allergies: Vec<CustomAllergy>,
}

// ============================================================================
// Health & Nutrition Goals
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalType {
    WeightLoss,
    MuscleGain,
    #[default]
    Maintenance,
    SpecificConditionDiabetes,
    SpecificConditionHeartHealth,
}

impl GoalType {
    pub fn label(&self) -> &'static str {
        match self {
            GoalType::WeightLoss => "Weight loss",
            GoalType::MuscleGain => "Muscle gain",
            GoalType::Maintenance => "Maintenance",
            GoalType::SpecificConditionDiabetes => "Diabetes management",
            GoalType::SpecificConditionHeartHealth => "Heart health",
        }
    }
}

/// Macro split in whole percentage points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroSplit {
    pub protein_percentage: u8,
    pub carbs_percentage: u8,
    pub fats_percentage: u8,
}

impl MacroSplit {
    /// Sum of the three components. A well-formed split totals 100.
    pub fn total(&self) -> u16 {
        u16::from(self.protein_percentage)
            + u16::from(self.carbs_percentage)
            + u16::from(self.fats_percentage)
    }
}

impl Default for MacroSplit {
    fn default() -> Self {
        Self {
            protein_percentage: 30,
            carbs_percentage: 40,
            fats_percentage: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HealthGoals {
    pub goal_type: GoalType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_goal_type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_calories: Option<u32>,
    pub macro_preferences: MacroSplit,
    pub notes: String,
}

// ============================================================================
// Meal Planning Habits
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    SnackMorning,
    SnackAfternoon,
    SnackEvening,
}

impl MealType {
    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::SnackMorning => "Morning snack",
            MealType::SnackAfternoon => "Afternoon snack",
            MealType::SnackEvening => "Evening snack",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealPrepFrequency {
    Daily,
    #[default]
    Weekly,
    BiWeekly,
    Monthly,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CookingSkill {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl CookingSkill {
    pub fn label(&self) -> &'static str {
        match self {
            CookingSkill::Beginner => "Beginner",
            CookingSkill::Intermediate => "Intermediate",
            CookingSkill::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KitchenTool {
    Oven,
    Microwave,
    Blender,
    AirFryer,
    Stovetop,
    InstantPot,
    FoodProcessor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanningHabits {
    pub meals_to_include: BTreeSet<MealType>,
    pub meal_prep_frequency: MealPrepFrequency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_meal_prep_days: Option<u8>,
    /// Preferred time per meal as "HH:MM".
    pub meal_times: BTreeMap<MealType, String>,
    pub cooking_skill_level: CookingSkill,
    pub available_kitchen_tools: BTreeSet<KitchenTool>,
}

// ============================================================================
// Grocery Preferences
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AutoOrdering {
    On,
    #[default]
    Off,
    PromptMe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubstitutionPreference {
    AlwaysAllow,
    #[default]
    AskFirst,
    NeverAllow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub fn label(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPreferences {
    pub preferred_days: BTreeSet<DayOfWeek>,
    /// Windows as "HH:MM-HH:MM".
    pub preferred_time_windows: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroceryPreferences {
    pub favorite_stores: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_budget_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_budget_max: Option<u32>,
    pub auto_ordering_preference: AutoOrdering,
    pub ingredient_substitution: SubstitutionPreference,
    pub delivery_preferences: DeliveryPreferences,
}

// ============================================================================
// Master profile
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub basic_profile: UserBasicProfile,
    pub dietary_preferences: DietaryPreferences,
    pub allergy_info: AllergyInfo,
    pub health_goals: HealthGoals,
    pub meal_planning_habits: MealPlanningHabits,
    pub grocery_preferences: GroceryPreferences,
}
