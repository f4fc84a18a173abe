//! Command-line interface for colorfmt
//!
//! Basic CLI tool for inspecting a color string: prints its classification
//! and every conversion the library supports.

use colorfmt::{classify, contrast, to_hex, to_hsl, to_hsla, to_rgb, to_rgba};
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut alpha = None;
    let mut color_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--alpha" | "-a" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --alpha requires a value");
                    process::exit(1);
                }
                match args[i + 1].parse::<f64>() {
                    Ok(value) => alpha = Some(value),
                    Err(_) => {
                        eprintln!("Error: invalid alpha value: {}", args[i + 1]);
                        process::exit(1);
                    }
                }
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg => {
                if color_arg.is_none() {
                    color_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: multiple color arguments provided");
                    process::exit(1);
                }
            }
        }
        i += 1;
    }

    let color = match color_arg {
        Some(color) => color,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let format = match classify(&color) {
        Ok(format) => format,
        Err(err) => {
            eprintln!("{}", err.user_message());
            process::exit(1);
        }
    };

    println!("format:   {:?}", format);

    match to_rgb(&color) {
        Ok(rgb) => println!("rgb:      {}", rgb),
        Err(_) => println!("rgb:      (not convertible)"),
    }
    if let Ok(rgba) = to_rgba(&color, alpha) {
        println!("rgba:     {}", rgba);
    }
    if let Ok(hex) = to_hex(&color) {
        println!("hex:      {}", hex);
    }
    if let Ok(hsl) = to_hsl(&color) {
        println!("hsl:      {}", hsl);
    }
    if let Ok(hsla) = to_hsla(&color, alpha) {
        println!("hsla:     {}", hsla);
    }
    if let Ok(side) = contrast(&color) {
        println!("contrast: {}", side);
    }
}

fn print_help(program: &str) {
    println!("Usage: {} [OPTIONS] <COLOR>", program);
    println!();
    println!("Classify a CSS color string and print every conversion.");
    println!();
    println!("Options:");
    println!("  -a, --alpha <VALUE>  Alpha channel for rgba/hsla output (default 1)");
    println!("  -h, --help           Show this help message");
    println!();
    println!("Examples:");
    println!("  {} \"#336699\"", program);
    println!("  {} --alpha 0.5 \"rgb(51,102,153)\"", program);
}
