use anyhow::Result;
use tome::App;
use tome::cli::parse_cli;
use tome::{settings, style};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in style::theme_names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let mut app = App::new(&resolved)?;
	app.run()
}
