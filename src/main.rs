use anyhow::Result;

fn main() -> Result<()> {
    hangterm::cli::run_cli()
}
