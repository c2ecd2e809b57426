//! Inspection command implementations (list, show, colors)

use std::process::ExitCode;

use crate::game_data::GameData;
use crate::models::Suit;
use crate::registry::Registry;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the list command
pub fn run_list(data: &GameData, include_reversed: bool, json: bool) -> ExitCode {
    let suits: Vec<&Suit> =
        data.suits.iter().map(|(_, s)| s).filter(|s| include_reversed || !s.reversed).collect();

    if json {
        return print_json(&suits);
    }

    for suit in suits {
        println!("{:<24} {}  {}", suit.key(), suit.abbreviation, describe_clue_colors(suit));
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the show command
pub fn run_show(data: &GameData, name: &str, json: bool) -> ExitCode {
    let Some(suit) = data.suits.get(name) else {
        eprintln!("Error: No suit with key '{}'", name);
        if let Some(similar) = data.suits.names().find(|k| k.eq_ignore_ascii_case(name)) {
            eprintln!("Did you mean '{}'?", similar);
        }
        return ExitCode::from(EXIT_ERROR);
    };

    if json {
        return print_json(suit);
    }

    println!("Name:            {}", suit.name);
    println!("Display name:    {}", suit.display_name);
    println!("Abbreviation:    {}", suit.abbreviation);
    println!("Clue colors:     {}", describe_clue_colors(suit));
    println!("Fill:            {}", suit.fill);
    println!("Colorblind fill: {}", suit.fill_colorblind);
    if !suit.fill_colors.is_empty() {
        println!("Fill colors:     {}", suit.fill_colors.join(", "));
    }
    println!("Pip:             {}", if suit.pip.is_empty() { "(none)" } else { suit.pip.as_str() });

    let flags: Vec<&str> = [
        (suit.reversed, "reversed"),
        (suit.one_of_each, "oneOfEach"),
        (suit.all_clue_colors, "allClueColors"),
        (suit.all_clue_ranks, "allClueRanks"),
        (suit.no_clue_colors, "noClueColors"),
        (suit.no_clue_ranks, "noClueRanks"),
        (suit.prism, "prism"),
    ]
    .into_iter()
    .filter_map(|(set, flag)| set.then_some(flag))
    .collect();
    if !flags.is_empty() {
        println!("Flags:           {}", flags.join(", "));
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the colors command
pub fn run_colors(data: &GameData, json: bool) -> ExitCode {
    if json {
        let colors: Vec<_> = data.colors.iter().collect();
        return print_json(&colors);
    }

    for color in data.colors.iter() {
        println!(
            "{:<12} {}  {}  (colorblind {})",
            color.name, color.abbreviation, color.fill, color.fill_colorblind
        );
    }
    ExitCode::from(EXIT_SUCCESS)
}

fn describe_clue_colors(suit: &Suit) -> String {
    if suit.all_clue_colors {
        "(all)".to_string()
    } else if suit.no_clue_colors {
        "(none)".to_string()
    } else if suit.prism {
        "(prism)".to_string()
    } else if suit.clue_colors.is_empty() {
        "-".to_string()
    } else {
        suit.clue_colors.iter().map(|c| c.name.as_str()).collect::<Vec<_>>().join(", ")
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: Failed to serialize output: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
