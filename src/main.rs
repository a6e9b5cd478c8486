extern crate avl_collections;
#[macro_use]
extern crate log;
extern crate simplelog;

use avl_collections::avl_tree::AvlMap;
use simplelog::{Config, LevelFilter, SimpleLogger};
use std::env;
use std::io::{self, BufRead};

fn parse_level(arg: Option<String>) -> LevelFilter {
    match arg.as_ref().map(|level| level.to_lowercase()) {
        Some(ref level) if level == "off" => LevelFilter::Off,
        Some(ref level) if level == "error" => LevelFilter::Error,
        Some(ref level) if level == "warn" => LevelFilter::Warn,
        Some(ref level) if level == "debug" => LevelFilter::Debug,
        Some(ref level) if level == "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

fn main() {
    let level = parse_level(env::args().nth(1));
    if SimpleLogger::init(level, Config::default()).is_err() {
        eprintln!("Failed to initialize logger.");
    }

    let mut map: AvlMap<i64, String> = AvlMap::new();
    let input = io::stdin();

    for line in input.lock().lines() {
        let buffer = match line {
            Ok(buffer) => buffer,
            Err(_) => break,
        };
        let args: Vec<&str> = buffer.split_whitespace().collect();
        if args.is_empty() {
            continue;
        }
        let key = args.get(1).and_then(|arg| arg.parse::<i64>().ok());
        match (args[0], key) {
            ("insert", Some(key)) => {
                let value = args[2..].join(" ");
                match map.insert(key, value) {
                    Some(old) => println!("replaced {} (was {:?})", key, old),
                    None => println!("inserted {}", key),
                }
            },
            ("remove", Some(key)) => match map.remove(&key) {
                Some((key, value)) => println!("removed {} => {:?}", key, value),
                None => println!("{} not found", key),
            },
            ("find", Some(key)) => match map.get(&key) {
                Some(value) => println!("{} => {:?}", key, value),
                None => println!("{} not found", key),
            },
            ("print", _) => {
                print!("{}", map.pretty_print());
                info!("len = {}, height = {}", map.len(), map.height());
            },
            ("clear", _) => map.clear(),
            _ => warn!("Unrecognized command: {}", buffer.trim()),
        }
    }
}
