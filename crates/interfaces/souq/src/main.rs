#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = souq_ui::run() {
        eprintln!("Souq failed: {err}");
        std::process::exit(1);
    }
}
