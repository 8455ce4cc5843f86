use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use secrecy::ExposeSecret;
use tracing::Level;

use pwd_diceware::{
    generate_passphrases, get_wordlist_path, read_and_validate, GeneratorConfig,
};

#[derive(Parser, Debug)]
#[command(
    name = "pwd-diceware",
    version,
    about = "Generate Diceware passphrases from a checked word list"
)]
struct Cli {
    /// Word list to use as input (defaults to PWD_WORDLIST_PATH)
    wordlist: Option<PathBuf>,
    #[arg(short = 'n', help = "Number of words per passphrase")]
    words: Option<usize>,
    #[arg(short = 'c', help = "Number of passphrases")]
    count: Option<usize>,
    #[arg(long, help = "Discard words longer than this")]
    maxlength: Option<usize>,
    #[arg(long, help = "Minimum number of well-used characters in the list")]
    min_chars: Option<usize>,
    #[arg(long, help = "Alphabet size for the brute-force entropy estimate")]
    alphabet: Option<usize>,
    #[arg(long, default_value_t = false, help = "Warn instead of failing on low character entropy")]
    lenient: bool,
    #[arg(long, default_value_t = false, help = "Only analyze the word list")]
    dry: bool,
    #[arg(short = 'v', action = clap::ArgAction::Count, help = "Increase verbosity")]
    verbose: u8,
    #[arg(short = 'q', action = clap::ArgAction::Count, help = "Decrease verbosity")]
    quiet: u8,
}

impl Cli {
    fn verbosity(&self) -> i16 {
        i16::from(self.verbose) - i16::from(self.quiet)
    }

    fn config(&self) -> Result<GeneratorConfig> {
        let mut config = GeneratorConfig::from_env()?;
        if let Some(n) = self.words {
            config.words_per_passphrase = n;
        }
        if let Some(c) = self.count {
            config.passphrase_count = c;
        }
        if let Some(l) = self.maxlength {
            config.validation.max_word_length = l;
        }
        if let Some(m) = self.min_chars {
            config.validation.min_char_entropy_count = m;
        }
        if let Some(a) = self.alphabet {
            config.target_alphabet_size = a;
        }
        if self.lenient {
            config.validation.strict_char_entropy = false;
        }
        Ok(config)
    }
}

fn init_logging(verbosity: i16) {
    let level = match verbosity {
        i16::MIN..=-1 => Level::ERROR,
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity());

    let config = cli.config()?;
    config.check()?;

    let path = cli.wordlist.clone().unwrap_or_else(get_wordlist_path);
    let (words, report) = read_and_validate(&path, &config.validation)
        .with_context(|| format!("Unusable word list {}", path.display()))?;

    if cli.dry || cli.verbosity() > 0 {
        println!("{report}");
    }
    if cli.dry {
        return Ok(());
    }

    for passphrase in generate_passphrases(&words, &config)? {
        println!("{}", passphrase.join(" ").expose_secret());
    }
    Ok(())
}
