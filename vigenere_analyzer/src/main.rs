use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use vigenere_analysis::{
    decrypt, divide, exhaustive_search, find_possible_keys, indices_of_coincidence,
    AcceptanceBand, CandidateConfig, FrequencyTable, KeyMaterial, KeyMode, KeyStream,
    SearchOptions, DEFAULT_MODULUS,
};

/// Command-line arguments for the Vigenère cryptanalysis tool.
#[derive(Parser, Debug)]
struct Cli {
    /// Cipher variant the ciphertext was produced with
    #[arg(short, long, value_enum, default_value = "classic", help = "Cipher variant (classic/stream)")]
    mode: Mode,

    /// Path to the ciphertext file; prompts on stdin when omitted
    #[arg(short, long, help = "Path to the ciphertext file")]
    file: Option<String>,
}

/// Enum representing the cipher variant selectable on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Classic Vigenère cipher
    Classic,
    /// Stream variant (key ring-shifts by one per rollover)
    Stream,
}

impl From<Mode> for KeyMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Classic => KeyMode::Classic,
            Mode::Stream => KeyMode::Stream,
        }
    }
}

/// Main entry point for the interactive cryptanalysis session.
fn main() {
    let cli: Cli = Cli::parse();
    println!("Welcome to the Vigenere cipher cryptanalysis tool.\n");

    // Read the ciphertext from the file or from stdin
    let raw: String = match &cli.file {
        Some(path) => std::fs::read_to_string(path).expect("Failed to read the ciphertext file"),
        None => prompt("Ciphertext: "),
    };

    // Normalize: strip whitespace, uppercase
    let ciphertext: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if ciphertext.is_empty() {
        eprintln!("The ciphertext must not be empty.");
        std::process::exit(1);
    }

    let mut session = Session::new(ciphertext, cli.mode.into());
    session.run();
}

/// Interactive analysis state: the current key guess, the cipher variant,
/// and the cached ciphertext division. The analysis engine itself stays
/// stateless apart from the key stream's cursor and drift.
struct Session {
    ciphertext: String,
    mode: KeyMode,
    key: KeyStream,
    substrings: Vec<String>,
}

impl Session {
    fn new(ciphertext: String, mode: KeyMode) -> Self {
        let key = KeyStream::from_text("VIGENERE", mode, DEFAULT_MODULUS)
            .expect("the default key is valid");
        let substrings = divide(&ciphertext, 1, mode, DEFAULT_MODULUS)
            .expect("a non-empty ciphertext divides into one substring");
        Self {
            ciphertext,
            mode,
            key,
            substrings,
        }
    }

    /// Runs the menu loop until the user exits.
    fn run(&mut self) {
        loop {
            println!("Choose an option:");
            println!("\t0. EXIT");
            println!("\t1. Toggle classic or stream Vigenere cipher MODE.");
            println!("\t2. Print the current DECRYPTION of the ciphertext.");
            println!("\t3. Print the current guess of the cipher KEY.");
            println!("\t4. MODIFY the cipher key.");
            println!("\t5. DIVIDE the cipher into substrings.");
            println!("\t6. Find the INDICES of coincidence in the cipher substrings.");
            println!("\t7. Compute the POSSIBLE keys based on the cipher substrings.");
            println!("\t8. Attempt a BRUTEFORCE.");
            let selection = prompt(">> ");
            println!();
            match selection.trim() {
                "0" => return,
                "1" => self.toggle_mode(),
                "2" => self.print_decryption(),
                "3" => println!("(KEY): {}\n", self.key),
                "4" => self.modify_key(),
                "5" => self.divide_ciphertext(),
                "6" => self.print_indices(),
                "7" => self.print_possible_keys(),
                "8" => self.bruteforce(),
                _ => println!("That was an invalid selection; I am sorry.\n"),
            }
        }
    }

    fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            KeyMode::Classic => KeyMode::Stream,
            KeyMode::Stream => KeyMode::Classic,
        };
        println!("(MODE): {} Vigenere cipher.\n", self.mode);
        // Rebuild the key stream under the new mode and refresh the division
        let material = self.key.material().clone();
        self.key = KeyStream::new(material, self.mode);
        match divide(
            &self.ciphertext,
            self.substrings.len(),
            self.mode,
            DEFAULT_MODULUS,
        ) {
            Ok(substrings) => self.substrings = substrings,
            Err(e) => eprintln!("{e}\n"),
        }
    }

    fn print_decryption(&mut self) {
        match decrypt(&mut self.key, &self.ciphertext) {
            Ok(plaintext) => println!("(DECRYPTION): {plaintext}\n"),
            Err(e) => eprintln!("{e}\n"),
        }
        self.key.reset();
    }

    fn modify_key(&mut self) {
        let text: String = prompt("(MODIFY): Type new key: ")
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        match KeyMaterial::new(&text, DEFAULT_MODULUS) {
            Ok(material) => self.key = KeyStream::new(material, self.mode),
            Err(e) => eprintln!("{e}"),
        }
        println!();
    }

    fn divide_ciphertext(&mut self) {
        let n = match prompt("(DIVIDE): key length n: ").trim().parse::<usize>() {
            Ok(n) => n.max(1),
            Err(_) => {
                eprintln!("The key length must be a positive integer.\n");
                return;
            }
        };
        match divide(&self.ciphertext, n, self.mode, DEFAULT_MODULUS) {
            Ok(substrings) => {
                for (k, substring) in substrings.iter().enumerate() {
                    println!("\n{k}: {substring}");
                }
                println!();
                self.substrings = substrings;
            }
            Err(e) => eprintln!("{e}\n"),
        }
    }

    fn print_indices(&self) {
        match indices_of_coincidence(&self.substrings, DEFAULT_MODULUS) {
            Ok(indices) => {
                println!(
                    "\n(INDICES): For key length {} the indices are:",
                    self.substrings.len()
                );
                let band = AcceptanceBand::english();
                for index in indices {
                    if band.contains(index) {
                        println!("{index} (A good index!)");
                    } else {
                        println!("{index}");
                    }
                }
                println!();
            }
            Err(e) => eprintln!("{e}\n"),
        }
    }

    fn print_possible_keys(&self) {
        match find_possible_keys(
            &self.substrings,
            &FrequencyTable::english(),
            DEFAULT_MODULUS,
            &CandidateConfig::default(),
        ) {
            Ok(keys) => println!("(POSSIBLE): {keys:?}\n"),
            Err(e) => eprintln!("{e}\n"),
        }
    }

    fn bruteforce(&self) {
        let length = match prompt("(BRUTEFORCE): Key length: ").trim().parse::<usize>() {
            Ok(length) => length,
            Err(_) => {
                eprintln!("The key length must be a positive integer.\n");
                return;
            }
        };
        let keywords: Vec<String> = prompt("(BRUTEFORCE): Keywords separated by space: ")
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        match exhaustive_search(
            length,
            DEFAULT_MODULUS,
            &keywords,
            &self.ciphertext,
            self.mode,
            SearchOptions::default(),
        ) {
            Ok(matches) => {
                for (key, decryption) in matches {
                    println!("\n(BRUTEFORCE): key: ({}) [{}]\n{decryption}", self.mode, key);
                }
                println!();
            }
            Err(e) => eprintln!("{e}\n"),
        };
    }
}

/// Prints a prompt and reads one line from stdin.
fn prompt(message: &str) -> String {
    print!("{message}");
    io::stdout().flush().expect("Failed to flush stdout");
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .expect("Failed to read from stdin");
    line.trim_end_matches(['\r', '\n']).to_string()
}
