mod cli;
mod convert_cmd;
mod page_range;
mod text_source;

use clap::Parser;
use readertext_core::UnicodeForm;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let unicode_form = cli
        .unicode_form
        .map(UnicodeForm::from)
        .unwrap_or_default();

    let result = convert_cmd::run(
        &cli.input,
        &cli.output,
        cli.start,
        cli.end,
        cli.keep_page_breaks,
        unicode_form,
        cli.debug,
    );

    if let Err(code) = result {
        std::process::exit(code);
    }
}
