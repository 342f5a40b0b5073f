use std::env;
use std::fs;
use std::path::PathBuf;

use towns::TownIndex;

fn main() {
    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "inspect" => cmd_inspect(args),
        _ => Err(usage()),
    }
}

fn cmd_inspect(args: Vec<String>) -> Result<(), String> {
    // townlens inspect <file.geojson>
    let [path] = args.as_slice() else {
        return Err(usage());
    };

    let path = PathBuf::from(path);
    let text = fs::read_to_string(&path).map_err(|e| format!("read {path:?} failed: {e}"))?;
    let index = TownIndex::from_geojson(&text).map_err(|e| e.to_string())?;

    println!("{} towns", index.len());
    for town in index.iter() {
        let b = town.bounds;
        println!(
            "  {:>4}  {:<24} lon [{:.4}, {:.4}]  lat [{:.4}, {:.4}]",
            town.id.0, town.name, b.min.x, b.max.x, b.min.y, b.max.y
        );
    }

    if let Some(b) = index.union_bounds() {
        println!(
            "union bounds: lon [{:.4}, {:.4}]  lat [{:.4}, {:.4}]",
            b.min.x, b.max.x, b.min.y, b.max.y
        );
    }

    Ok(())
}

fn usage() -> String {
    "usage:\n  townlens inspect <file.geojson>".to_string()
}
