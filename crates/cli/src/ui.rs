use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;

pub fn print_menu() {
    println!();
    println!("[1] Legg til venn");
    println!("[2] Endre dato");
    println!("[3] Vis venner");
    println!("[4] Sjekk siste kontakt");
    println!("[5] Slett venn");
    println!("[6] Avslutt");
}

pub fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    if color_enabled() {
        print!("{}", prompt.cyan());
    } else {
        print!("{prompt}");
    }
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim_end().to_string())
}

/// Blank input means the user backed out; the caller treats it as a silent
/// no-op.
pub fn prompt_nonempty(prompt: &str) -> anyhow::Result<Option<String>> {
    let line = prompt_line(prompt)?;
    if line.is_empty() {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

/// Blocking error notice, distinct from the running log: printed to stderr
/// and held until the user acknowledges it.
pub fn alert(message: &str) -> anyhow::Result<()> {
    if color_enabled() {
        eprintln!("{}", format!("Feil: {message}").red().bold());
    } else {
        eprintln!("Feil: {message}");
    }
    prompt_line("Trykk Enter for å fortsette")?;
    Ok(())
}

pub fn color_enabled() -> bool {
    io::stdout().is_terminal()
        && io::stderr().is_terminal()
        && std::env::var_os("NO_COLOR").is_none()
}
