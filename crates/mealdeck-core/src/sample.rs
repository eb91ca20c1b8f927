//! Mocked backend data.
//!
//! There is no server. The auth screens validate locally against fixed
//! demo credentials and log in with a fixed literal token; the main tabs
//! render the static profile, week plan, and grocery list built here.

use std::collections::{BTreeMap, BTreeSet};

use mealdeck_types::plan::{DayPlan, GroceryItem, PlannedMeal};
use mealdeck_types::profile::{
    ActivityLevel, AllergyInfo, AllergySeverity, AutoOrdering, CommonAllergen, CookingSkill,
    Cuisine, CustomAllergy, DayOfWeek, DeliveryPreferences, DietType, DietaryPreferences, Gender,
    GoalType, GroceryPreferences, HealthGoals, KitchenTool, MacroSplit, MealPlanningHabits,
    MealPrepFrequency, MealType, MeasurementSystem, SubstitutionPreference, UserBasicProfile,
    UserProfile,
};

/// Demo account accepted by the login screen.
pub const DEMO_EMAIL: &str = "test@example.com";
/// Demo account password.
pub const DEMO_PASSWORD: &str = "123456";
/// Token issued by the mocked backend on any successful login/registration.
pub const MOCK_TOKEN: &str = "mock-jwt-token-abc123";

/// Local stand-in for the backend credential check.
pub fn check_credentials(email: &str, password: &str) -> bool {
    email == DEMO_EMAIL && password == DEMO_PASSWORD
}

/// The demo user's profile shown by the profile tab.
pub fn user_profile() -> UserProfile {
    UserProfile {
        id: "user-demo-001".to_string(),
        basic_profile: UserBasicProfile {
            full_name: "Alex Morgan".to_string(),
            date_of_birth: Some("1992-06-15".to_string()),
            gender: Some(Gender::PreferNotToSay),
            country: "United States".to_string(),
            timezone: Some("America/New_York".to_string()),
            measurement_system: MeasurementSystem::Imperial,
            activity_level: ActivityLevel::LightlyActive,
        },
        dietary_preferences: DietaryPreferences {
            diet_type: DietType::Balanced,
            custom_diet_type_name: None,
            cuisine_preferences: BTreeSet::from([
                Cuisine::Mediterranean,
                Cuisine::Italian,
                Cuisine::Asian,
            ]),
            liked_ingredients: vec![
                "salmon".to_string(),
                "avocado".to_string(),
                "chickpeas".to_string(),
            ],
            disliked_ingredients: vec!["cilantro".to_string()],
        },
        allergy_info: AllergyInfo {
            common_allergens: BTreeSet::from([CommonAllergen::Nuts]),
            custom_allergies: vec![CustomAllergy {
                name: "Sesame".to_string(),
                severity: AllergySeverity::Mild,
            }],
        },
        health_goals: HealthGoals {
            goal_type: GoalType::Maintenance,
            custom_goal_type_name: None,
            target_calories: Some(2200),
            macro_preferences: MacroSplit::default(),
            notes: "Keep weekday dinners under 30 minutes.".to_string(),
        },
        meal_planning_habits: MealPlanningHabits {
            meals_to_include: BTreeSet::from([
                MealType::Breakfast,
                MealType::Lunch,
                MealType::Dinner,
                MealType::SnackAfternoon,
            ]),
            meal_prep_frequency: MealPrepFrequency::Weekly,
            custom_meal_prep_days: None,
            meal_times: BTreeMap::from([
                (MealType::Breakfast, "07:30".to_string()),
                (MealType::Lunch, "12:30".to_string()),
                (MealType::Dinner, "19:00".to_string()),
            ]),
            cooking_skill_level: CookingSkill::Intermediate,
            available_kitchen_tools: BTreeSet::from([
                KitchenTool::Oven,
                KitchenTool::Stovetop,
                KitchenTool::Blender,
                KitchenTool::AirFryer,
            ]),
        },
        grocery_preferences: GroceryPreferences {
            favorite_stores: vec!["Green Basket".to_string(), "Corner Market".to_string()],
            weekly_budget_min: Some(80),
            weekly_budget_max: Some(120),
            auto_ordering_preference: AutoOrdering::PromptMe,
            ingredient_substitution: SubstitutionPreference::AskFirst,
            delivery_preferences: DeliveryPreferences {
                preferred_days: BTreeSet::from([DayOfWeek::Saturday]),
                preferred_time_windows: vec!["09:00-12:00".to_string()],
            },
        },
    }
}

/// The demo week plan shown by the meals tab.
///
/// Always Monday-first; the caller reorders when the week starts Sunday.
pub fn week_plan() -> Vec<DayPlan> {
    fn meal(meal_type: MealType, name: &str, calories: u32) -> PlannedMeal {
        PlannedMeal {
            meal_type,
            name: name.to_string(),
            calories,
        }
    }

    vec![
        DayPlan {
            day: DayOfWeek::Monday,
            meals: vec![
                meal(MealType::Breakfast, "Greek yogurt & berries", 320),
                meal(MealType::Lunch, "Chickpea salad wrap", 540),
                meal(MealType::Dinner, "Sheet-pan salmon & greens", 610),
            ],
        },
        DayPlan {
            day: DayOfWeek::Tuesday,
            meals: vec![
                meal(MealType::Breakfast, "Overnight oats", 380),
                meal(MealType::Lunch, "Minestrone & sourdough", 490),
                meal(MealType::Dinner, "Chicken souvlaki bowls", 650),
            ],
        },
        DayPlan {
            day: DayOfWeek::Wednesday,
            meals: vec![
                meal(MealType::Breakfast, "Spinach omelette", 340),
                meal(MealType::Lunch, "Leftover souvlaki", 620),
                meal(MealType::Dinner, "Mushroom risotto", 580),
            ],
        },
        DayPlan {
            day: DayOfWeek::Thursday,
            meals: vec![
                meal(MealType::Breakfast, "Smoothie (banana, oats)", 300),
                meal(MealType::Lunch, "Caprese sandwich", 520),
                meal(MealType::Dinner, "Stir-fried tofu & rice", 600),
            ],
        },
        DayPlan {
            day: DayOfWeek::Friday,
            meals: vec![
                meal(MealType::Breakfast, "Avocado toast", 360),
                meal(MealType::Lunch, "Poke-style bowl", 560),
                meal(MealType::Dinner, "Homemade pizza night", 780),
            ],
        },
        DayPlan {
            day: DayOfWeek::Saturday,
            meals: vec![
                meal(MealType::Breakfast, "Pancakes & fruit", 520),
                meal(MealType::Lunch, "Mezze plate", 480),
                meal(MealType::Dinner, "Paella", 700),
            ],
        },
        DayPlan {
            day: DayOfWeek::Sunday,
            meals: vec![
                meal(MealType::Breakfast, "Shakshuka", 410),
                meal(MealType::Lunch, "Roast vegetable couscous", 530),
                meal(MealType::Dinner, "Prep-day soup & salad", 450),
            ],
        },
    ]
}

/// The demo grocery list shown by the groceries tab.
pub fn grocery_list() -> Vec<GroceryItem> {
    fn item(name: &str, quantity: &str, aisle: &str, checked: bool) -> GroceryItem {
        GroceryItem {
            name: name.to_string(),
            quantity: quantity.to_string(),
            aisle: aisle.to_string(),
            checked,
        }
    }

    vec![
        item("Salmon fillets", "2 lbs", "Seafood", false),
        item("Chicken thighs", "1.5 lbs", "Meat", false),
        item("Greek yogurt", "32 oz", "Dairy", true),
        item("Eggs", "1 dozen", "Dairy", true),
        item("Spinach", "2 bunches", "Produce", false),
        item("Avocados", "4", "Produce", false),
        item("Cherry tomatoes", "1 pint", "Produce", false),
        item("Bananas", "6", "Produce", true),
        item("Arborio rice", "1 lb", "Pantry", false),
        item("Chickpeas", "3 cans", "Pantry", false),
        item("Rolled oats", "1 lb", "Pantry", true),
        item("Sourdough loaf", "1", "Bakery", false),
    ]
}
