//! Main stack state.

use chrono::Datelike;
use mealdeck_core::config::{Config, StartTab};
use mealdeck_core::sample;
use mealdeck_types::plan::{DayPlan, GroceryItem};
use mealdeck_types::profile::{DayOfWeek, UserProfile};

/// The four bottom tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainTab {
    Dashboard,
    Meals,
    Groceries,
    Profile,
}

impl MainTab {
    pub fn all() -> &'static [MainTab] {
        &[
            MainTab::Dashboard,
            MainTab::Meals,
            MainTab::Groceries,
            MainTab::Profile,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MainTab::Dashboard => "Dashboard",
            MainTab::Meals => "Meals",
            MainTab::Groceries => "Groceries",
            MainTab::Profile => "Profile",
        }
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> MainTab {
        Self::all()[(self.index() + 1) % Self::all().len()]
    }

    pub fn prev(&self) -> MainTab {
        let len = Self::all().len();
        Self::all()[(self.index() + len - 1) % len]
    }
}

impl From<StartTab> for MainTab {
    fn from(tab: StartTab) -> Self {
        match tab {
            StartTab::Dashboard => MainTab::Dashboard,
            StartTab::Meals => MainTab::Meals,
            StartTab::Groceries => MainTab::Groceries,
            StartTab::Profile => MainTab::Profile,
        }
    }
}

/// Today's weekday, in the profile schema's terms.
pub fn today() -> DayOfWeek {
    match chrono::Local::now().weekday() {
        chrono::Weekday::Mon => DayOfWeek::Monday,
        chrono::Weekday::Tue => DayOfWeek::Tuesday,
        chrono::Weekday::Wed => DayOfWeek::Wednesday,
        chrono::Weekday::Thu => DayOfWeek::Thursday,
        chrono::Weekday::Fri => DayOfWeek::Friday,
        chrono::Weekday::Sat => DayOfWeek::Saturday,
        chrono::Weekday::Sun => DayOfWeek::Sunday,
    }
}

/// State for the authenticated tab stack.
#[derive(Debug, Clone)]
pub struct MainState {
    pub tab: MainTab,
    pub profile: UserProfile,
    /// Week plan in display order (Monday- or Sunday-first per config).
    pub plan: Vec<DayPlan>,
    pub groceries: Vec<GroceryItem>,
    /// Selected day in the meals tab.
    pub meals_cursor: usize,
    /// Selected item in the groceries tab.
    pub grocery_cursor: usize,
    /// Selected section in the profile tab (last entry is Log out).
    pub profile_cursor: usize,
}

impl MainState {
    /// Profile tab entries: six sections plus the Log out action.
    pub const PROFILE_ENTRIES: usize = 7;
    /// Index of the Log out entry.
    pub const LOGOUT_ENTRY: usize = Self::PROFILE_ENTRIES - 1;

    pub fn new(config: &Config) -> Self {
        let mut plan = sample::week_plan();
        if !config.week_starts_monday {
            // Monday-first fixture; Sunday-first display moves the last day up.
            plan.rotate_right(1);
        }
        let today = today();
        let meals_cursor = plan.iter().position(|d| d.day == today).unwrap_or(0);

        Self {
            tab: MainTab::from(config.start_tab),
            profile: sample::user_profile(),
            plan,
            groceries: sample::grocery_list(),
            meals_cursor,
            grocery_cursor: 0,
            profile_cursor: 0,
        }
    }

    /// The plan entry for today, if the plan covers it.
    pub fn today_plan(&self) -> Option<&DayPlan> {
        let today = today();
        self.plan.iter().find(|d| d.day == today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: tab order cycles through all four tabs and wraps.
    #[test]
    fn test_tab_cycle() {
        let mut tab = MainTab::Dashboard;
        for _ in 0..MainTab::all().len() {
            tab = tab.next();
        }
        assert_eq!(tab, MainTab::Dashboard);
        assert_eq!(MainTab::Dashboard.prev(), MainTab::Profile);
    }

    /// Test: Sunday-first config reorders the week accordingly.
    #[test]
    fn test_week_order_follows_config() {
        let monday_first = MainState::new(&Config::default());
        assert_eq!(monday_first.plan[0].day, DayOfWeek::Monday);

        let config = Config {
            week_starts_monday: false,
            ..Config::default()
        };
        let sunday_first = MainState::new(&config);
        assert_eq!(sunday_first.plan[0].day, DayOfWeek::Sunday);
        assert_eq!(sunday_first.plan[1].day, DayOfWeek::Monday);
        assert_eq!(sunday_first.plan.len(), 7);
    }

    /// Test: the configured start tab is respected.
    #[test]
    fn test_start_tab() {
        let config = Config {
            start_tab: mealdeck_core::config::StartTab::Groceries,
            ..Config::default()
        };
        assert_eq!(MainState::new(&config).tab, MainTab::Groceries);
    }

    /// Test: the meals cursor starts on today.
    #[test]
    fn test_meals_cursor_starts_today() {
        let state = MainState::new(&Config::default());
        assert_eq!(state.plan[state.meals_cursor].day, today());
    }
}
