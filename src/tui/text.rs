use crate::pass::{CharacterClass, GenerationRequest, charset, estimate, strength};
use crate::settings::Settings;
use crate::terminal::{
    GREEN, GREY, RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top,
    flush, print_error, print_rule, strength_meter,
};

/// Menu key for a class toggle: 2..=5 in canonical order.
pub fn class_key(class: CharacterClass) -> char {
    match class {
        CharacterClass::Lowercase => '2',
        CharacterClass::Uppercase => '3',
        CharacterClass::Digit => '4',
        CharacterClass::Symbol => '5',
    }
}

pub fn class_for_key(key: char) -> Option<CharacterClass> {
    CharacterClass::ALL.into_iter().find(|c| class_key(*c) == key)
}

fn request_entropy(request: &GenerationRequest) -> String {
    let pool = charset::size(request.classes);
    if pool == 0 {
        return format!("{GREY}no classes selected{RESET}");
    }
    format!(
        "{:.1} bits per password ({} char pool)",
        strength::entropy_bits(request.effective_length(), pool),
        pool
    )
}

/// Strength is recomputed from `password` on every draw.
pub fn print_main_menu(settings: &Settings, password: &str, status: Option<&str>) {
    box_top("Password");
    if password.is_empty() {
        box_line(&format!("{GREY}(press Enter to generate){RESET}"));
    } else {
        box_line(password);
    }
    box_line("");
    box_line(&strength_meter(&estimate(password)));
    box_bottom();

    box_top("Options");
    box_line("");
    box_line(&format!("{UNDERLINE}General{RESET}:"));
    box_line(&format!("  1) Length: {}", settings.length));
    box_line("");
    box_line(&format!("{UNDERLINE}Character Classes{RESET}:"));
    for class in CharacterClass::ALL {
        let mark = if settings.classes.contains(class) { "x" } else { " " };
        box_line(&format!(
            "  {}) [{}] {:<10} {}",
            class_key(class),
            mark,
            class.name(),
            class.sample()
        ));
    }
    box_line("");
    box_line(&format!("  Entropy: {}", request_entropy(&settings.request())));
    box_line("");
    print_rule();
    box_line_center("Enter) generate  |  c) copy  |  e) edit  |  x) clear");
    box_line_center("s) save  |  r) defaults  |  h) help  |  q) quit");
    box_bottom();

    match status {
        Some(s) => println!("{GREEN}{s}{RESET}"),
        None => println!(),
    }
    flush();
}

pub fn print_notice(msg: &str) {
    print_error(msg);
    println!("Press any key to continue.");
    flush();
}

pub fn print_help() {
    box_top("passmint");
    box_line_center("Password generator with guaranteed character classes");
    box_line("");
    box_line("Every selected class contributes at least one character; the rest");
    box_line("is drawn from the combined pool and the result is shuffled.");
    box_line("");
    box_line("MENU KEYS:");
    box_opt("  Enter / g", "Generate a new password");
    box_opt("  1", "Set password length");
    box_opt("  2 3 4 5", "Toggle lowercase, uppercase, digits, symbols");
    box_opt("  c", "Copy the password (system clipboard, or terminal via OSC 52)");
    box_opt("  e", "Edit the password; strength updates as you type");
    box_opt("  x", "Clear the password");
    box_opt("  s / r", "Save settings / restore defaults");
    box_opt("  q / Esc", "Quit");
    box_line("");
    box_line("STRENGTH:");
    box_line("  +1 each for length >= 8, 12, 16; +1 for each extra kind of");
    box_line("  character (lowercase, uppercase, digit, other). 5 points = 100%.");
    box_line("");
    box_line("COMMAND LINE:");
    box_opt("  -l, --length <N>", "Characters per password");
    box_opt("  -n, --number <N>", "How many passwords");
    box_opt("  --no-lower ...", "Drop a class (--no-upper, --no-digits, --no-symbols)");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -S, --strength", "Report strength on stderr");
    box_opt("  --check [TEXT]", "Score TEXT or each stdin line");
    box_line("");
    box_line_center("Press any key to return");
    box_bottom();
    flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::ClassSet;

    #[test]
    fn class_keys_round_trip() {
        for class in CharacterClass::ALL {
            assert_eq!(class_for_key(class_key(class)), Some(class));
        }
        assert_eq!(class_for_key('1'), None);
        assert_eq!(class_for_key('6'), None);
    }

    #[test]
    fn entropy_line() {
        let empty = GenerationRequest::new(ClassSet::empty(), 10);
        assert!(request_entropy(&empty).contains("no classes"));

        let digits: ClassSet = [CharacterClass::Digit].into_iter().collect();
        let line = request_entropy(&GenerationRequest::new(digits, 3));
        assert_eq!(line, "10.0 bits per password (10 char pool)");
    }
}
