use filesmith::app;

fn output_header() -> &'static str {
    "Filesmith\nFilesmith turns natural-language project requests into generated file trees.\nType `help` for commands."
}

fn print_header() {
    println!("{}\n", output_header());
}

fn run() -> Result<(), String> {
    print_header();
    app::run_repl()
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
