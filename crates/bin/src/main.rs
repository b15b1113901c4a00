use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::Cli;
use commands::{Object, Output};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never mix with JSON on stdout
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("ordmap=info".parse()?))
        .init();

    let cli = Cli::parse();

    let object = read_object(&cli.input)?;
    tracing::debug!(input = %cli.input.display(), entries = object.len(), "loaded object");

    let output = commands::run(&cli.command, object)?;

    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    write_output(&mut writer, output, cli.pretty)?;
    writer.flush()?;

    Ok(())
}

fn read_object(path: &Path) -> ordmap::Result<Object> {
    if path == Path::new("-") {
        return ordmap::codec::decode_reader(io::stdin().lock());
    }
    let mut input = Vec::new();
    File::open(path)?.read_to_end(&mut input)?;
    Ok(ordmap::codec::decode(&input)?)
}

fn write_output(
    writer: &mut dyn Write,
    output: Output,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Output::Object(object) => {
            ordmap::codec::encode_writer(&object, &mut *writer, pretty)?;
            writeln!(writer)?;
        }
        Output::Lines(lines) => {
            for line in lines {
                writeln!(writer, "{line}")?;
            }
        }
        Output::Value(value) => {
            if pretty {
                serde_json::to_writer_pretty(&mut *writer, &value)?;
            } else {
                serde_json::to_writer(&mut *writer, &value)?;
            }
            writeln!(writer)?;
        }
    }
    Ok(())
}
