extern crate clap;

use std::fs::File;
use std::io::{self, BufReader, BufRead, Read};
use std::time::SystemTime;
use clap::{Arg, App, SubCommand};

use spellcorrect::*;

#[derive(Clone,Copy,PartialEq)]
enum Mode {
    ///Only test whether words are in the dictionary
    Check,
    ///Find corrections for unknown words
    Correct,
}

fn fail(message: &str) -> ! {
    eprintln!("ERROR: {}", message);
    std::process::exit(1);
}

fn output(correction: &Correction, json: bool, seqnr: usize) {
    if json {
        if seqnr > 1 {
            println!(",");
        }
        match correction.to_json() {
            Ok(s) => print!("    {}", s),
            Err(e) => fail(&format!("Unable to serialize output: {}", e)),
        }
    } else {
        println!("{}", correction);
    }
}

fn show_progress(seqnr: usize, lasttime: SystemTime) -> SystemTime {
    let now = SystemTime::now();
    if lasttime >= now || seqnr <= 1 {
        eprintln!("@ {}", seqnr);
    } else {
        let elapsed = now.duration_since(lasttime).expect("clock can't go backwards").as_millis();
        let rate = 1000.0 / (elapsed as f64 / 1000.0);
        eprintln!("@ {} - processing speed was {:.0} words per second", seqnr, rate);
    }
    now
}

fn process(corrector: &mut Corrector, inputstream: impl Read, mode: Mode, json: bool, progress: bool, seqnr: &mut usize) {
    let mut progresstime = SystemTime::now();
    let f_buffer = BufReader::new(inputstream);
    for line in f_buffer.lines() {
        let line = line.unwrap_or_else(|e| fail(&format!("Unable to read input: {}", e)));
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        *seqnr += 1;
        if progress && *seqnr % 1000 == 1 {
            progresstime = show_progress(*seqnr, progresstime);
        }
        let correction = match mode {
            Mode::Check => Correction::new(word, if corrector.check(word) { Some(word) } else { None }),
            Mode::Correct => Correction::new(word, corrector.correct(word)),
        };
        output(&correction, json, *seqnr);
    }
}

///Reads all input first and corrects it in parallel, every thread has its own index
fn process_batch(dictionary: &[String], params: &CorrectionParameters, inputstream: impl Read, json: bool, seqnr: &mut usize) {
    let words = read_words(inputstream).unwrap_or_else(|e| fail(&format!("Unable to read input: {}", e)));
    if params.debug {
        eprintln!("(correcting {} words using multiple threads)", words.len());
    }
    let corrections = correct_batch(dictionary, &words, params);
    for (word, correction) in words.iter().zip(corrections) {
        *seqnr += 1;
        output(&Correction::new(word, correction), json, *seqnr);
    }
}

pub fn common_arguments<'a,'b>() -> Vec<clap::Arg<'a,'b>> {
    let mut args: Vec<Arg> = Vec::new();
    args.push(Arg::with_name("dictionary")
        .long("dictionary")
        .short("l")
        .help("Dictionary against which all words are checked. This is a plain text file with one word per line, consisting of lowercase letters (a-z) only. The order matters: amongst equally good corrections, the one that occurs first in the dictionary is chosen.")
        .takes_value(true)
        .required(true));
    args.push(Arg::with_name("json")
        .long("json")
        .short("j")
        .help("Output json instead of plain text")
        .required(false));
    args.push(Arg::with_name("progress")
        .long("progress")
        .help("Show progress")
        .required(false));
    args.push(Arg::with_name("strict")
        .long("strict")
        .help("Refuse dictionaries that contain characters outside of the alphabet (a-z)")
        .required(false));
    args.push(Arg::with_name("files")
        .help("Input files (documents), one word per line. Reads standard input if none are specified or for -")
        .takes_value(true)
        .multiple(true)
        .required(false));
    args
}

fn main() {
    let rootargs = App::new("spellcorrect")
                    .version(env!("CARGO_PKG_VERSION"))
                    .about("Spelling correction: finds the best dictionary word within a bounded edit distance")
                    .subcommand(
                        SubCommand::with_name("distance")
                            .about("Compute the edit distance (levenshtein) between two words")
                            .arg(Arg::with_name("a")
                                .help("First word")
                                .required(true)
                                .index(1))
                            .arg(Arg::with_name("b")
                                .help("Second word")
                                .required(true)
                                .index(2))
                    )
                    .subcommand(
                        SubCommand::with_name("edits")
                            .about("Output all strings exactly one edit away from a word")
                            .arg(Arg::with_name("word")
                                .help("Word (lowercase letters a-z only)")
                                .required(true)
                                .index(1))
                    )
                    .subcommand(
                        SubCommand::with_name("check")
                            .about("Check whether the words of the input are in the dictionary; unknown words are marked with a question mark")
                            .args(&common_arguments())
                    )
                    .subcommand(
                        SubCommand::with_name("correct")
                            .about("Correct the words of the input against the dictionary; words without a correction are marked with a question mark")
                            .args(&common_arguments())
                            .arg(Arg::with_name("max_distance")
                                .long("max-distance")
                                .short("d")
                                .help("Maximum edit distance (levenshtein) of corrections")
                                .takes_value(true)
                                .default_value("3"))
                            .arg(Arg::with_name("threads")
                                .long("threads")
                                .short("t")
                                .help("Use multiple threads; reads all input before producing output")
                                .required(false))
                    )
                    .arg(Arg::with_name("debug")
                        .long("debug")
                        .short("D")
                        .help("Debug")
                        .required(false))
                    .get_matches();

    let debug = rootargs.is_present("debug");

    if let Some(args) = rootargs.subcommand_matches("distance") {
        let a = args.value_of("a").expect("first word");
        let b = args.value_of("b").expect("second word");
        println!("{}", edit_distance(a, b));
        return;
    }

    if let Some(args) = rootargs.subcommand_matches("edits") {
        let word = args.value_of("word").expect("word");
        if !is_valid_word(word) {
            eprintln!("WARNING: {} contains characters outside of the alphabet (a-z)", word);
        }
        for edit in neighbors(word) {
            println!("{}", edit);
        }
        return;
    }

    let (args, mode) = if let Some(args) = rootargs.subcommand_matches("check") {
        (args, Mode::Check)
    } else if let Some(args) = rootargs.subcommand_matches("correct") {
        (args, Mode::Correct)
    } else {
        fail("No command specified, see --help");
    };

    let mut params = CorrectionParameters::default().with_debug(debug);
    if mode == Mode::Correct {
        let max_distance = parse_distance(args.value_of("max_distance").expect("max distance has a default"))
            .unwrap_or_else(|e| fail(&e.to_string()));
        params = params.with_max_distance(max_distance);
        if args.is_present("threads") {
            params = params.with_multithreading();
        }
    }

    let filename = args.value_of("dictionary").expect("dictionary is required");
    eprintln!("Loading dictionary...");
    let dictionary = read_wordlist(filename)
        .unwrap_or_else(|e| fail(&format!("Unable to read dictionary {}: {}", filename, e)));
    if args.is_present("strict") {
        if let Err(e) = validate_wordlist(&dictionary) {
            fail(&format!("Invalid dictionary {}: {}", filename, e));
        }
    }
    if debug {
        eprintln!(" - Read dictionary of size {}", dictionary.len());
    }

    let json = args.is_present("json");
    let progress = args.is_present("progress");
    let batch = mode == Mode::Correct && !params.single_thread;

    //in batch mode every thread builds its own index
    let mut corrector = if batch {
        None
    } else {
        eprintln!("Building index...");
        Some(Corrector::new(&dictionary, params.clone()))
    };

    if json {
        println!("[");
    }

    let files: Vec<_> = if args.is_present("files") {
        args.values_of("files").expect("files").collect()
    } else {
        vec!("-")
    };
    let mut seqnr = 0;
    for filename in files {
        match filename {
            "-" | "STDIN" | "stdin"  => {
                eprintln!("(accepting standard input; enter words to check, one per line)");
                let stdin = io::stdin();
                match corrector.as_mut() {
                    Some(corrector) => process(corrector, stdin, mode, json, progress, &mut seqnr),
                    None => process_batch(&dictionary, &params, stdin, json, &mut seqnr),
                }
            },
            _ =>  {
                let f = File::open(filename).unwrap_or_else(|e| fail(&format!("Unable to open file {}: {}", filename, e)));
                match corrector.as_mut() {
                    Some(corrector) => process(corrector, f, mode, json, progress, &mut seqnr),
                    None => process_batch(&dictionary, &params, f, json, &mut seqnr),
                }
            }
        }
    }

    if json {
        if seqnr > 0 {
            println!();
        }
        println!("]");
    }
}
