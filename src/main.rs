use passdict::{FileDictionary, ScanOptions, WidthPolicy};
use std::env;

fn usage(program: &str) -> ! {
    eprintln!(
        "Usage: {program} <word-list> [--trusted] [--name NAME] [--query TEXT] [--width-words-only]"
    );
    eprintln!();
    eprintln!("  --trusted           skip verification of the sorted/fixed-width invariant");
    eprintln!("  --name NAME         identifying name for diagnostics (default: the path)");
    eprintln!("  --query TEXT        walk TEXT's prefixes through the dictionary");
    eprintln!("  --width-words-only  comment lines never influence the measured width");
    std::process::exit(1);
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("passdict");

    let mut path: Option<&str> = None;
    let mut trusted = false;
    let mut name: Option<&str> = None;
    let mut query: Option<&str> = None;
    let mut options = ScanOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--trusted" => trusted = true,
            "--width-words-only" => options.width_policy = WidthPolicy::WordsOnly,
            "--name" => {
                i += 1;
                match args.get(i) {
                    Some(value) => name = Some(value),
                    None => {
                        eprintln!("ERROR: --name requires an argument.");
                        usage(program);
                    }
                }
            }
            "--query" => {
                i += 1;
                match args.get(i) {
                    Some(value) => query = Some(value),
                    None => {
                        eprintln!("ERROR: --query requires an argument.");
                        usage(program);
                    }
                }
            }
            other if other.starts_with("--") => {
                eprintln!("ERROR: Unknown option '{other}'.");
                usage(program);
            }
            other => {
                if path.is_some() {
                    eprintln!("ERROR: More than one word list given.");
                    usage(program);
                }
                path = Some(other);
            }
        }
        i += 1;
    }

    let Some(path) = path else {
        usage(program);
    };
    let name = name.unwrap_or(path);

    let result = if trusted {
        FileDictionary::open_trusted_with(path, name, options)
    } else {
        FileDictionary::open_with(path, name, options)
    };

    let dict = match result {
        Ok(dict) => dict,
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    };

    println!("Word list: {}", dict.name());
    println!("  Words:        {}", dict.word_count());
    println!("  Record width: {} bytes", dict.record_width());
    println!("  File size:    {} bytes", dict.len());

    if let Some(query) = query {
        println!();
        let mut window = dict.initial_window(0);
        let mut viable = 0;
        for (idx, c) in query.char_indices() {
            let end = idx + c.len_utf8();
            match dict.narrow(window, &query[..end]) {
                Some(narrowed) => {
                    window = narrowed;
                    viable = end;
                }
                None => break,
            }
        }
        if viable == 0 {
            println!("No stored word starts with '{query}'.");
        } else {
            println!(
                "Longest viable prefix: '{}' ({} of {} characters)",
                &query[..viable],
                viable,
                query.len()
            );
        }
        let exact = viable == query.len() && dict.is_match(window, query);
        println!("Exact match for '{query}': {exact}");
    }
}
