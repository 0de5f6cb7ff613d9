use crossterm::style::Stylize;
use drill_core::core::catalog::Catalog;
use drill_core::DrillEngine;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{stdin, stdout, BufReader, Write};
use std::path::PathBuf;

/// One catalog-file record: {"ni3hao3": {"cn": "你好", "en": "hello"}, ...}
#[derive(Deserialize)]
struct RawEntry {
    cn: String,
    #[serde(default)]
    en: String,
}

// A starter set for drilling without a catalog file.
const DEMO_PHRASES: &[(&str, &str, &str)] = &[
    ("ni3hao3", "你好", "hello"),
    ("xie4xie5", "谢谢", "thank you"),
    ("zao3shang4", "早上", "morning"),
    ("wan3shang4", "晚上", "evening"),
    ("jin1tian1", "今天", "today"),
    ("ming2tian1", "明天", "tomorrow"),
    ("xian4zai4", "现在", "now"),
    ("zhe4ge4", "这个", "this one"),
    ("na4ge4", "那个", "that one"),
    ("shen2me5", "什么", "what"),
    ("wei4shen2me5", "为什么", "why"),
    ("na3li3", "哪里", "where"),
    ("duo1shao3", "多少", "how much"),
    ("chi1fan4", "吃饭", "to eat"),
    ("shui4jiao4", "睡觉", "to sleep"),
    ("kan4dian4shi4", "看电视", "to watch TV"),
    ("du2shu1", "读书", "to read"),
    ("chang4ge1", "唱歌", "to sing"),
    ("you2yong3", "游泳", "to swim"),
    ("pao3bu4", "跑步", "to run"),
];

// This function reliably gets the correct path for any user.
fn score_file_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("pinyin-drill");
    path.push("scores.json");
    path
}

fn load_catalog(arg: Option<String>) -> Catalog {
    let Some(path) = arg else {
        return Catalog::from_entries(
            DEMO_PHRASES
                .iter()
                .map(|&(key, cn, en)| (key.to_string(), cn.to_string(), en.to_string())),
        );
    };
    let file = File::open(&path).unwrap_or_else(|e| {
        eprintln!("[ERROR] Could not open catalog '{}': {}", path, e);
        std::process::exit(1);
    });
    let entries: BTreeMap<String, RawEntry> = serde_json::from_reader(BufReader::new(file))
        .unwrap_or_else(|e| {
            eprintln!("[ERROR] Could not parse catalog '{}': {}", path, e);
            std::process::exit(1);
        });
    Catalog::from_entries(entries.into_iter().map(|(key, raw)| (key, raw.cn, raw.en)))
}

fn print_stats(engine: &DrillEngine) {
    let hardest = engine.scores.hardest(30);
    if hardest.is_empty() {
        println!("\nNo statistics yet. Keep practicing!");
        return;
    }
    println!("\nTracked phrases: {}", engine.scores.tracked());
    println!("{:<32} {:>5}", "Phrase", "Score");
    for (key, score) in hardest {
        let badge = format!("{:>5}", score);
        let badge = if score < 0 {
            badge.red()
        } else if score < 5 {
            badge.yellow()
        } else {
            badge.green()
        };
        println!("{:<32} {}", engine.display(&key), badge);
    }
}

fn main() {
    env_logger::init();

    let catalog = load_catalog(std::env::args().nth(1));
    if catalog.is_empty() {
        eprintln!("Please populate the catalog with phrases first.");
        std::process::exit(1);
    }

    let mut engine = DrillEngine::from_file_or_new(catalog, &score_file_path());

    println!("Pinyin Drill. Answer [y]es / [n]o, 'stats' for the hard list, 'exit' to quit.");
    println!("---------------------------------------------------------------");

    'drill: loop {
        let key = match engine.next() {
            Ok(key) => key,
            Err(e) => {
                eprintln!("[ERROR] {}", e);
                break;
            }
        };
        println!("\n{}", engine.display(&key).bold());

        loop {
            print!("Got it right? [y/n/stats/exit] > ");
            stdout().flush().unwrap();

            let mut input = String::new();
            if stdin().read_line(&mut input).is_err() {
                break 'drill;
            }
            match input.trim() {
                "exit" => break 'drill,
                "stats" => print_stats(&engine),
                "y" | "Y" => {
                    if let Ok(score) = engine.mark(true) {
                        println!("{} (score {})", "Nice!".green(), score);
                    }
                    break;
                }
                "n" | "N" => {
                    if let Ok(score) = engine.mark(false) {
                        println!("{} (score {})", "Keep practicing!".red(), score);
                    }
                    break;
                }
                _ => {}
            }
        }
    }

    // Every score change was written through, nothing left to flush.
    println!("\nScores saved to '{}'", score_file_path().display());
}
