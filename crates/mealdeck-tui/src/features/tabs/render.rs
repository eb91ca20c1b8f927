//! Main stack view.
//!
//! Tab bar, one content pane per tab, and a hint line. All content is
//! read-only sample data except the grocery check marks.

use chrono::Timelike;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

use super::state::{MainState, MainTab};
use crate::common::truncate_to_width;

/// Renders the authenticated tab stack.
pub fn render(main: &MainState, frame: &mut Frame, area: Rect) {
    let [tab_area, content_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_tab_bar(main, frame, tab_area);

    match main.tab {
        MainTab::Dashboard => render_dashboard(main, frame, content_area),
        MainTab::Meals => render_meals(main, frame, content_area),
        MainTab::Groceries => render_groceries(main, frame, content_area),
        MainTab::Profile => render_profile(main, frame, content_area),
    }

    render_hints(main, frame, hint_area);
}

fn render_tab_bar(main: &MainState, frame: &mut Frame, area: Rect) {
    let titles: Vec<Line> = MainTab::all()
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!(" {} {} ", i + 1, tab.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(main.tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn render_hints(main: &MainState, frame: &mut Frame, area: Rect) {
    let hint = match main.tab {
        MainTab::Dashboard => "Tab/1-4 switch tabs, q quit",
        MainTab::Meals => "Up/Down select day, Tab/1-4 switch tabs, q quit",
        MainTab::Groceries => "Up/Down select, Space toggle, Tab/1-4 switch tabs, q quit",
        MainTab::Profile => "Up/Down select, Enter on Log out to sign out, q quit",
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}

fn section_block(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
}

fn kv(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<22}"), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

// ============================================================================
// Dashboard
// ============================================================================

fn greeting(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

fn render_dashboard(main: &MainState, frame: &mut Frame, area: Rect) {
    let block = section_block("Today");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let first_name = main
        .profile
        .basic_profile
        .full_name
        .split_whitespace()
        .next()
        .unwrap_or("there")
        .to_string();
    let hour = chrono::Local::now().hour();

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{}, {first_name}!", greeting(hour)),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    match main.today_plan() {
        Some(day) => {
            lines.push(Line::from(Span::styled(
                format!("{} - planned meals", day.day.label()),
                Style::default().fg(Color::Cyan),
            )));
            for meal in &day.meals {
                lines.push(kv(
                    meal.meal_type.label(),
                    format!("{}  ({} kcal)", meal.name, meal.calories),
                ));
            }
            lines.push(Line::from(""));

            let total = day.calories_total();
            let summary = match main.profile.health_goals.target_calories {
                Some(target) => format!("{total} of {target} kcal planned"),
                None => format!("{total} kcal planned"),
            };
            lines.push(Line::from(Span::styled(
                summary,
                Style::default().fg(Color::Green),
            )));
        }
        None => lines.push(Line::from(Span::styled(
            "Nothing planned for today.",
            Style::default().fg(Color::Gray),
        ))),
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// Meals
// ============================================================================

fn render_meals(main: &MainState, frame: &mut Frame, area: Rect) {
    let block = section_block("Week plan");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for (i, day) in main.plan.iter().enumerate() {
        let selected = i == main.meals_cursor;
        let header_style = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(
            format!(
                "{} {:<10} {} kcal",
                if selected { ">" } else { " " },
                day.day.label(),
                day.calories_total()
            ),
            header_style,
        )));

        if selected {
            for meal in &day.meals {
                lines.push(kv(
                    &format!("    {}", meal.meal_type.label()),
                    format!("{} ({} kcal)", meal.name, meal.calories),
                ));
            }
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// Groceries
// ============================================================================

fn render_groceries(main: &MainState, frame: &mut Frame, area: Rect) {
    let block = section_block("Grocery list");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    let mut current_aisle: Option<&str> = None;

    for (i, item) in main.groceries.iter().enumerate() {
        if current_aisle != Some(item.aisle.as_str()) {
            current_aisle = Some(item.aisle.as_str());
            lines.push(Line::from(Span::styled(
                item.aisle.clone(),
                Style::default().fg(Color::Cyan),
            )));
        }

        let selected = i == main.grocery_cursor;
        let mark = if item.checked { "[x]" } else { "[ ]" };
        let text = truncate_to_width(
            &format!(
                "{} {} {}  ({})",
                if selected { ">" } else { " " },
                mark,
                item.name,
                item.quantity
            ),
            inner.width.saturating_sub(1) as usize,
        );
        let style = if selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else if item.checked {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// Profile
// ============================================================================

const PROFILE_SECTION_TITLES: [&str; 7] = [
    "Identity & lifestyle",
    "Dietary preferences",
    "Allergies & intolerances",
    "Health goals",
    "Meal planning habits",
    "Grocery preferences",
    "Log out",
];

fn render_profile(main: &MainState, frame: &mut Frame, area: Rect) {
    let block = section_block("Profile");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for (i, title) in PROFILE_SECTION_TITLES.iter().enumerate() {
        let selected = i == main.profile_cursor;
        let style = if i == MainState::LOGOUT_ENTRY {
            let base = Style::default().fg(Color::Red);
            if selected {
                base.add_modifier(Modifier::BOLD)
            } else {
                base
            }
        } else if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(
            format!("{} {title}", if selected { ">" } else { " " }),
            style,
        )));

        if selected && i != MainState::LOGOUT_ENTRY {
            lines.extend(profile_section_lines(main, i));
            lines.push(Line::from(""));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn join_labels<T>(items: impl Iterator<Item = T>, label: impl Fn(T) -> String) -> String {
    let joined: Vec<String> = items.map(label).collect();
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined.join(", ")
    }
}

fn profile_section_lines(main: &MainState, section: usize) -> Vec<Line<'static>> {
    let profile = &main.profile;
    match section {
        0 => {
            let basic = &profile.basic_profile;
            vec![
                kv("    Name", basic.full_name.clone()),
                kv(
                    "    Date of birth",
                    basic.date_of_birth.clone().unwrap_or_else(|| "-".to_string()),
                ),
                kv("    Country", basic.country.clone()),
                kv(
                    "    Timezone",
                    basic.timezone.clone().unwrap_or_else(|| "-".to_string()),
                ),
                kv(
                    "    Units",
                    format!("{:?}", basic.measurement_system).to_lowercase(),
                ),
                kv("    Activity", basic.activity_level.label().to_string()),
            ]
        }
        1 => {
            let diet = &profile.dietary_preferences;
            vec![
                kv("    Diet", diet.diet_type.label().to_string()),
                kv(
                    "    Cuisines",
                    join_labels(diet.cuisine_preferences.iter(), |c| format!("{c:?}")),
                ),
                kv("    Likes", diet.liked_ingredients.join(", ")),
                kv("    Dislikes", diet.disliked_ingredients.join(", ")),
            ]
        }
        2 => {
            let allergies = &profile.allergy_info;
            let mut lines = vec![kv(
                "    Common",
                join_labels(allergies.common_allergens.iter(), |a| format!("{a:?}")),
            )];
            for custom in &allergies.custom_allergies {
                lines.push(kv(
                    "    Custom",
                    format!("{} ({})", custom.name, custom.severity.label()),
                ));
            }
            lines
        }
        3 => {
            let goals = &profile.health_goals;
            let macros = goals.macro_preferences;
            vec![
                kv("    Goal", goals.goal_type.label().to_string()),
                kv(
                    "    Target calories",
                    goals
                        .target_calories
                        .map_or_else(|| "-".to_string(), |c| format!("{c} kcal")),
                ),
                kv(
                    "    Macros (P/C/F)",
                    format!(
                        "{}% / {}% / {}%",
                        macros.protein_percentage, macros.carbs_percentage, macros.fats_percentage
                    ),
                ),
                kv("    Notes", goals.notes.clone()),
            ]
        }
        4 => {
            let habits = &profile.meal_planning_habits;
            vec![
                kv(
                    "    Meals included",
                    join_labels(habits.meals_to_include.iter(), |m| m.label().to_string()),
                ),
                kv(
                    "    Prep frequency",
                    format!("{:?}", habits.meal_prep_frequency).to_lowercase(),
                ),
                kv(
                    "    Cooking skill",
                    habits.cooking_skill_level.label().to_string(),
                ),
                kv(
                    "    Kitchen tools",
                    join_labels(habits.available_kitchen_tools.iter(), |t| format!("{t:?}")),
                ),
            ]
        }
        5 => {
            let grocery = &profile.grocery_preferences;
            let budget = match (grocery.weekly_budget_min, grocery.weekly_budget_max) {
                (Some(min), Some(max)) => format!("${min} - ${max} / week"),
                (Some(min), None) => format!("from ${min} / week"),
                (None, Some(max)) => format!("up to ${max} / week"),
                (None, None) => "-".to_string(),
            };
            vec![
                kv("    Stores", grocery.favorite_stores.join(", ")),
                kv("    Budget", budget),
                kv(
                    "    Auto-ordering",
                    format!("{:?}", grocery.auto_ordering_preference).to_lowercase(),
                ),
                kv(
                    "    Substitutions",
                    format!("{:?}", grocery.ingredient_substitution).to_lowercase(),
                ),
                kv(
                    "    Delivery days",
                    join_labels(grocery.delivery_preferences.preferred_days.iter(), |d| {
                        d.label().to_string()
                    }),
                ),
            ]
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: greeting buckets follow the clock.
    #[test]
    fn test_greeting_buckets() {
        assert_eq!(greeting(7), "Good morning");
        assert_eq!(greeting(13), "Good afternoon");
        assert_eq!(greeting(22), "Good evening");
        assert_eq!(greeting(3), "Good evening");
    }

    /// Test: the section list matches the profile cursor range.
    #[test]
    fn test_profile_sections_match_state() {
        assert_eq!(PROFILE_SECTION_TITLES.len(), MainState::PROFILE_ENTRIES);
        assert_eq!(
            PROFILE_SECTION_TITLES[MainState::LOGOUT_ENTRY],
            "Log out"
        );
    }
}
