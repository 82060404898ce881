use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use readertext_core::UnicodeForm;

/// Clean and reflow layout-extracted page text for linear reading.
#[derive(Debug, Parser)]
#[command(name = "readertext", about, version)]
pub struct Cli {
    /// Path to the input text file (pages separated by form feeds)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to the output .txt file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// First page to convert (1-based)
    #[arg(long, default_value_t = 1)]
    pub start: usize,

    /// Last page to convert (1-based, inclusive). Default: last page
    #[arg(long)]
    pub end: Option<usize>,

    /// Write explicit '=== PAGE n ===' markers between pages
    #[arg(long)]
    pub keep_page_breaks: bool,

    /// Apply an extra Unicode normalization form after the standard fixups
    #[arg(long, value_enum)]
    pub unicode_form: Option<UnicodeFormArg>,

    /// Print per-page diagnostics to stderr
    #[arg(long)]
    pub debug: bool,
}

/// CLI-facing Unicode normalization form selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnicodeFormArg {
    /// Canonical composition (NFC)
    Nfc,
    /// Compatibility composition (NFKC)
    Nfkc,
}

impl From<UnicodeFormArg> for UnicodeForm {
    fn from(arg: UnicodeFormArg) -> Self {
        match arg {
            UnicodeFormArg::Nfc => UnicodeForm::Nfc,
            UnicodeFormArg::Nfkc => UnicodeForm::Nfkc,
        }
    }
}
