use ciphers::alphabet::ALPHABET;
use ciphers::caesar::CaesarCandidate;
use ciphers::optimizer::runner::AttackResult;
use ciphers::substitution::SubstitutionKey;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Plain alphabet above its substitutes.
pub fn print_key_grid(name: &str, key: &SubstitutionKey) {
    println!("\nMapping: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let plain: Vec<Cell> = ALPHABET
        .iter()
        .map(|&b| Cell::new(b as char).set_alignment(CellAlignment::Center))
        .collect();
    let mapped: Vec<Cell> = key
        .letters()
        .iter()
        .map(|&b| {
            Cell::new(b as char)
                .set_alignment(CellAlignment::Center)
                .fg(Color::Cyan)
        })
        .collect();

    table.add_row(plain);
    table.add_row(mapped);
    println!("{}", table);
}

pub fn print_caesar_table(candidates: &[CaesarCandidate]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Shift").add_attribute(Attribute::Bold),
        Cell::new("Hits"),
        Cell::new("Plaintext").fg(Color::Green),
    ]);

    for c in candidates {
        table.add_row(vec![
            Cell::new(c.shift).add_attribute(Attribute::Bold),
            Cell::new(format!("{}/{}", c.matches, c.tokens)),
            Cell::new(&c.text).fg(Color::Green),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_attempt_table(result: &AttackResult) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Attempt").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Iterations"),
        Cell::new("Accepted"),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for a in &result.attempts {
        let mut label = Cell::new(a.attempt + 1);
        if a.attempt == result.best_attempt {
            label = label.add_attribute(Attribute::Bold).fg(Color::Green);
        }
        table.add_row(vec![
            label,
            Cell::new(format!("{:.2}", a.score)).fg(Color::Cyan),
            Cell::new(a.iterations),
            Cell::new(a.accepted),
        ]);
    }
    println!("\n{}", table);
}
