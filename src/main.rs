use std::{env, fs::read_to_string, process, time::Instant};

use c89_parser::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    let (file_path, dump_tokens) = match args.as_slice() {
        [_, file] => (file.as_str(), false),
        [_, file, flag] if flag == "--tokens" => (file.as_str(), true),
        _ => {
            eprintln!("Usage: c89-parser <file> [--tokens]");
            process::exit(2);
        }
    };

    let file_name = file_path.rsplit('/').next().unwrap_or(file_path);

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            process::exit(2);
        }
    };

    let start = Instant::now();

    let tokens = tokenize(&source);

    println!("Tokenized in {:?}", start.elapsed());

    if dump_tokens {
        for token in &tokens {
            token.debug();
        }
    }

    let parse_start = Instant::now();
    let parsed = parse(tokens);

    println!("Parsed in {:?}", parse_start.elapsed());

    match parsed {
        Ok(unit) => {
            if !dump_tokens {
                println!("{:#?}", unit);
            }
            println!("Total time: {:?}", start.elapsed());
        }
        Err(error) => {
            display_error(&error, &source, file_name);
            process::exit(1);
        }
    }
}
