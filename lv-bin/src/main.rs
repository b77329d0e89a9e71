use clap::Parser;

/// Print the Levenshtein distance between two strings.
#[derive(Parser)]
struct Cli {
    a: String,
    b: String,

    /// Bound on the distance; anything above reports as the bound plus one.
    #[clap(short, long)]
    k: Option<usize>,
}

fn main() {
    let Cli { a, b, k } = Cli::parse();
    let res = match k {
        Some(k) => bitlev::levenshtein_bounded(&a, &b, k),
        None => bitlev::levenshtein(&a, &b),
    };
    match res {
        Ok(d) => println!("{d}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
