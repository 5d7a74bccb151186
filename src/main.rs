use clap::Parser;

mod snapshot;
mod table;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "opsnap")]
#[command(about = "Print in-progress server operations as a table", long_about = None)]
struct Cli {
    /// Path to a currentOp snapshot document (JSON); reads stdin if omitted.
    file: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) Acquire the full operation snapshot in one synchronous read.
    let records = snapshot::read_snapshot(cli.file.as_deref())?;

    // 2) Render and print: header, separator, one line per operation.
    for line in table::render_lines(&records) {
        println!("{}", line);
    }

    Ok(())
}
