// Encode command line text and print the symbol to the terminal.
use qr_gen::utils::render::to_ascii;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let text = if args.is_empty() {
        "Hello, World!".to_string()
    } else {
        args.join(" ")
    };

    match qr_gen::encode_text(&text) {
        Ok(symbol) => {
            print!("{}", to_ascii(&symbol, 4));
            println!(
                "version={} mask={} size={}x{}",
                symbol.version().value(),
                symbol.mask_pattern().id(),
                symbol.size(),
                symbol.size()
            );
        }
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}
