use stockroom_cli::input::{CatalogInput, INPUT_ENV, OutputFormat};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(INPUT_ENV).ok());

    let input = match path {
        Some(path) => CatalogInput::load(&path)?,
        None => {
            tracing::warn!("no input file given and {INPUT_ENV} not set; using sample catalog");
            CatalogInput::sample()
        }
    };
    let format = OutputFormat::from_env()?;

    let stdout = std::io::stdout();
    stockroom_cli::run(&input, format, &mut stdout.lock())
}
