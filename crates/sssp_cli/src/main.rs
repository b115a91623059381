use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use flexi_logger::Logger;
use flexi_logger::LoggerHandle;
use log::info;
use sssp::ShortestPathEngine;
use sssp::loader::load_graph;
use sssp::report::UnreachableStyle;
use sssp::report::write_distances;
use sssp::report::write_graph;

const BEGIN_BANNER: &str = "------ Begin Dijkstra 's Shortest Path ------";
const END_BANNER: &str = "------- End Dijkstra 's Shortest Path -------";
const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

/// Shortest distances from one vertex of a weighted directed graph to all
/// others.
#[derive(Debug, Parser)]
#[command(name = "dijkstra", version)]
struct Cli {
    /// Graph file: vertex count, 1-based start vertex, then one
    /// `tail head,weight ...` line per tail vertex.
    input: PathBuf,

    /// Print the parsed graph before the distances.
    #[arg(long)]
    print_graph: bool,

    /// Print `unreachable` instead of the legacy 1000000 sentinel.
    #[arg(long)]
    mark_unreachable: bool,

    /// Report loading and solving times.
    #[arg(long)]
    timings: bool,

    /// Log filter, e.g. `info` or `sssp=debug`. `RUST_LOG` takes precedence.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _logger = match init_logging(&cli.log_level) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("failed to initialize logging: {err}");
            None
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let status = execute(&cli, &mut out);
    let _ = out.flush();
    ExitCode::from(status)
}

/// Runs `cli` between the begin and end banners, printing `Err. <message>`
/// in place of the distances when the input cannot be used. Returns the
/// process exit status.
fn execute<W: Write>(cli: &Cli, out: &mut W) -> u8 {
    let result = writeln!(out, "{BEGIN_BANNER}")
        .map_err(anyhow::Error::from)
        .and_then(|()| run(cli, &mut *out));

    let status = match result {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            let _ = writeln!(out, "Err. {err:#}");
            EXIT_FAILURE
        }
    };
    let _ = writeln!(out, "{END_BANNER}");
    status
}

fn init_logging(level: &str) -> Result<LoggerHandle, flexi_logger::FlexiLoggerError> {
    Logger::try_with_env_or_str(level)?.start()
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let started = Instant::now();
    let input = load_graph(&cli.input)?;
    let engine = ShortestPathEngine::new(&input.graph, input.start);
    let read_time = started.elapsed();

    if cli.print_graph {
        writeln!(out, "The read graph:")?;
        write_graph(out, &input.graph)?;
        writeln!(out)?;
    }

    let started = Instant::now();
    let paths = engine.run();
    let algo_time = started.elapsed();

    let stats = paths.stats();
    info!(
        "{} vertices settled, {} relaxations, {} decrease-keys in {:?}",
        stats.settled, stats.relaxations, stats.decrease_keys, algo_time
    );

    let style = if cli.mark_unreachable {
        UnreachableStyle::Marker
    } else {
        UnreachableStyle::Sentinel
    };
    write_distances(out, &paths, style)?;

    if cli.timings {
        writeln!(out)?;
        writeln!(
            out,
            "Elapsed: {:.6} seconds with initializations, reading graph.",
            read_time.as_secs_f64()
        )?;
        writeln!(
            out,
            "Elapsed: {:.6} seconds to calculate shortest paths.",
            algo_time.as_secs_f64()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_on(text: &str, extra: &[&str]) -> (anyhow::Result<()>, String) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let mut args = vec!["dijkstra", path.as_str()];
        args.extend_from_slice(extra);
        let cli = Cli::try_parse_from(args).unwrap();

        let mut out = Vec::new();
        let result = run(&cli, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_distances() {
        let (result, text) = run_on("3 1\n1 2,5 3,1\n3 2,1\n", &[]);
        assert!(result.is_ok());
        assert_eq!(
            text,
            "Shortest path from 1 to 1 is: 0\n\
             Shortest path from 1 to 2 is: 2\n\
             Shortest path from 1 to 3 is: 1\n"
        );
    }

    #[test]
    fn optional_sections() {
        let (result, text) = run_on(
            "2 1\n",
            &["--print-graph", "--mark-unreachable", "--timings"],
        );
        assert!(result.is_ok());
        assert!(text.starts_with("The read graph:\nGraph has 2 vertices and 0 arc(s).\n"));
        assert!(text.contains("Shortest path from 1 to 2 is: unreachable\n"));
        assert!(text.contains("seconds to calculate shortest paths."));
    }

    #[test]
    fn reports_header_errors() {
        let (result, text) = run_on("5\n", &[]);
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Could not read the start vertex.");
        assert!(text.is_empty());
    }

    #[test]
    fn missing_file_fails_between_banners() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let cli = Cli::try_parse_from(["dijkstra", path.to_str().unwrap()]).unwrap();

        let mut out = Vec::new();
        assert_eq!(execute(&cli, &mut out), EXIT_FAILURE);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], BEGIN_BANNER);
        assert!(lines[1].starts_with("Err. Could not open file "));
        assert!(lines[1].contains("absent.txt: "));
        assert_eq!(lines[2], END_BANNER);
    }

    #[test]
    fn success_is_wrapped_in_banners() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"1 1\n").unwrap();
        let cli = Cli::try_parse_from(["dijkstra", file.path().to_str().unwrap()]).unwrap();

        let mut out = Vec::new();
        assert_eq!(execute(&cli, &mut out), EXIT_SUCCESS);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{BEGIN_BANNER}\nShortest path from 1 to 1 is: 0\n{END_BANNER}\n")
        );
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["dijkstra"]).is_err());
    }
}
