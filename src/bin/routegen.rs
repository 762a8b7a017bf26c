fn main() -> anyhow::Result<()> {
    routegen::cli::run_cli()
}
