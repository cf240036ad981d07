use comfy_table::{Attribute, Cell, Color, Row, Table};
use duecard_core::card::CardView;
use owo_colors::OwoColorize;

const OVERDUE_MARKER: &str = "⏰";

pub fn display_todos(views: &[CardView]) {
    if views.is_empty() {
        println!("No todos found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "", "Title", "Due"]);

    for view in views {
        let mut row = Row::new();
        row.add_cell(Cell::new(view.short_id()));
        row.add_cell(Cell::new(if view.completed { "[x]" } else { "[ ]" }));

        let mut title_cell = Cell::new(&view.title);
        if view.completed {
            title_cell = title_cell
                .add_attribute(Attribute::CrossedOut)
                .fg(Color::DarkGrey);
        } else if view.overdue {
            title_cell = title_cell.fg(Color::Red).add_attribute(Attribute::Bold);
        }
        row.add_cell(title_cell);

        let due_cell = match &view.due_label {
            Some(label) if view.overdue => {
                Cell::new(format!("{} {}", OVERDUE_MARKER, label)).fg(Color::Red)
            }
            Some(label) if label == "Due today" && !view.completed => {
                Cell::new(label).fg(Color::Yellow)
            }
            Some(label) => Cell::new(label),
            None => Cell::new(""),
        };
        row.add_cell(due_cell);

        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_card(view: &CardView) {
    let check = if view.completed { "[x]" } else { "[ ]" };
    println!("{} {}", check, view.title.bold());
    println!("  ID: {}", view.id);
    match &view.due_label {
        Some(label) if view.overdue => {
            println!("  {} {} {}", OVERDUE_MARKER, label.red(), "(overdue)".red())
        }
        Some(label) => println!("  {}", label),
        None => println!("  No due date"),
    }
}
