//! Plain-text rendering of page state for the terminal.

use std::fmt::Write;

use chrono::NaiveDate;
use colored::Colorize;

use crate::models::Pet;
use crate::ui::form::PetForm;
use crate::ui::notify::{Level, Notification};
use crate::ui::pages::{DashboardPage, PetDetailsPage, PetsPage};

/// Display format for birthdates, e.g. `Jan 1, 2020`.
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

pub fn notification(n: &Notification) -> String {
    match n.level {
        Level::Success => n.message.green().to_string(),
        Level::Error => n.message.red().to_string(),
    }
}

/// Card-style listing of the filtered pets.
pub fn pets_page(page: &PetsPage) -> String {
    if page.loading {
        return "Loading...\n".to_string();
    }

    let mut out = String::new();
    let visible = page.visible();
    if visible.is_empty() {
        out.push_str("No pets found matching your criteria.\n");
    }

    for pet in visible {
        let _ = writeln!(out, "{}", pet.name.bold());
        let _ = writeln!(out, "  {} . {}", pet.pet_type, pet.gender);
        let _ = writeln!(out, "  {}", pet.description);
        let _ = writeln!(out, "  Born: {}", display_date(pet.birthdate));
        let _ = writeln!(out, "  id: {}", pet.id);
        out.push('\n');
    }

    out
}

pub fn pet_details(page: &PetDetailsPage) -> String {
    if page.loading {
        return "Loading...\n".to_string();
    }

    let Some(pet) = &page.pet else {
        return "Pet not found\nBack to pets\n".to_string();
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", pet.name.bold());
    let _ = writeln!(out, "Photo: {}", pet.photo);
    let _ = writeln!(out, "Type: {}", pet.pet_type);
    let _ = writeln!(out, "Birth Date: {}", display_date(pet.birthdate));
    let _ = writeln!(out, "Gender: {}", pet.gender);
    out.push('\n');
    let _ = writeln!(out, "About");
    let _ = writeln!(out, "{}", pet.description);
    out
}

const DASHBOARD_HEADERS: [&str; 5] = ["ID", "Name", "Type", "Birth Date", "Gender"];

fn dashboard_row(pet: &Pet) -> [String; 5] {
    [
        pet.id.to_string(),
        pet.name.clone(),
        pet.pet_type.to_string(),
        display_date(pet.birthdate),
        pet.gender.to_string(),
    ]
}

/// Admin table with one row per pet, columns padded to the widest cell.
pub fn dashboard(page: &DashboardPage) -> String {
    if page.loading {
        return "Loading...\n".to_string();
    }
    if page.pets.is_empty() {
        return "No pets yet.\n".to_string();
    }

    let rows: Vec<[String; 5]> = page.pets.iter().map(dashboard_row).collect();
    let mut widths = DASHBOARD_HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header = DASHBOARD_HEADERS.map(str::to_string);
    for row in std::iter::once(&header).chain(&rows) {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

pub fn form(form: &PetForm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", form.title().bold());
    for (label, value) in [
        ("Name", &form.name),
        ("Type", &form.pet_type),
        ("Birth Date", &form.birthdate),
        ("Gender", &form.gender),
        ("Description", &form.description),
        ("Photo URL", &form.photo),
    ] {
        let _ = writeln!(out, "  {label}: {value}");
    }
    let _ = writeln!(out, "[{}]", form.submit_label());
    out
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use petcatalog_core::pet::{Gender, PetType};
    use petcatalog_core::types::new_pet_id;

    use super::*;
    use crate::ui::filter::PetFilter;

    fn pet(name: &str, pet_type: PetType) -> Pet {
        Pet {
            id: new_pet_id(),
            name: name.to_string(),
            pet_type,
            birthdate: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            gender: Gender::Male,
            description: "Friendly".to_string(),
            photo: "http://x/y.jpg".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn dates_use_short_month_format() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(display_date(date), "Jan 1, 2020");
    }

    #[test]
    fn empty_filter_result_says_so() {
        let page = PetsPage {
            loading: false,
            pets: vec![pet("Rex", PetType::Dog)],
            filter: PetFilter {
                pet_type: Some(PetType::Cat),
                ..PetFilter::default()
            },
            notification: None,
        };
        assert_eq!(pets_page(&page), "No pets found matching your criteria.\n");
    }

    #[test]
    fn listing_shows_birthdate() {
        let page = PetsPage {
            loading: false,
            pets: vec![pet("Rex", PetType::Dog)],
            ..PetsPage::default()
        };
        let text = pets_page(&page);
        assert!(text.contains("Rex"));
        assert!(text.contains("Born: Jan 1, 2020"));
    }

    #[test]
    fn missing_pet_renders_not_found() {
        let page = PetDetailsPage {
            loading: false,
            ..PetDetailsPage::new(new_pet_id())
        };
        assert!(pet_details(&page).starts_with("Pet not found"));
    }

    #[test]
    fn dashboard_has_header_and_one_row_per_pet() {
        let page = DashboardPage {
            loading: false,
            pets: vec![pet("Rex", PetType::Dog), pet("Tom", PetType::Cat)],
            ..DashboardPage::default()
        };
        let text = dashboard(&page);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[0].contains("Birth Date"));
        assert!(lines[2].contains("Tom"));
        assert!(lines[2].contains("cat"));
    }

    #[test]
    fn form_shows_submit_label() {
        assert!(form(&PetForm::create()).ends_with("[Add Pet]\n"));
    }

    #[test]
    fn notification_keeps_message_text() {
        let n = Notification::success("Pet added successfully");
        assert!(notification(&n).contains("Pet added successfully"));
    }
}
