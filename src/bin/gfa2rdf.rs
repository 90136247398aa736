use vg_rdf::{gfa, GraphStore, PathGraph, TripleEngine};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::{env, io, process};

use getopts::Options;

//-----------------------------------------------------------------------------

fn main() -> Result<(), String> {
    // Parse arguments.
    let config = Config::new()?;

    // Load the graph.
    if config.verbose {
        eprintln!("Loading GFA graph {}", config.filename);
    }
    let graph = gfa::load_gfa(&config.filename)?;
    if config.verbose {
        eprintln!(
            "Loaded {} nodes, {} edges, {} paths",
            graph.node_count(), graph.edge_count(), graph.path_count()
        );
    }

    // Build the store and stream all statements as N-Triples.
    let store = GraphStore::new(graph, &config.base)?;
    let engine = TripleEngine::new(&store);
    let mut count: usize = 0;
    let result = match &config.output {
        Some(filename) => {
            let file = File::create(filename).map_err(|x| x.to_string())?;
            let mut output = BufWriter::new(file);
            write_triples(&engine, &mut output, &mut count)
        }
        None => {
            let stdout = io::stdout();
            let mut output = stdout.lock();
            write_triples(&engine, &mut output, &mut count)
        }
    };
    result.map_err(|x| x.to_string())?;

    if config.verbose {
        eprintln!("Wrote {} triples", count);
    }
    Ok(())
}

fn write_triples<G: PathGraph, T: Write>(
    engine: &TripleEngine<'_, G>, output: &mut T, count: &mut usize
) -> io::Result<()> {
    for statement in engine.query(None, None, None) {
        writeln!(output, "{}", statement)?;
        *count += 1;
    }
    output.flush()
}

//-----------------------------------------------------------------------------

pub struct Config {
    pub filename: String,
    pub base: String,
    pub output: Option<String>,
    pub verbose: bool,
}

impl Config {
    const DEFAULT_BASE: &'static str = "http://example.org/vg/";

    pub fn new() -> Result<Config, String> {
        let args: Vec<String> = env::args().collect();
        let program = args[0].clone();

        let mut opts = Options::new();
        opts.optflag("h", "help", "print this help");
        opts.optopt("b", "base", "base IRI for the graph elements", "IRI");
        opts.optopt("o", "output", "write the triples to this file", "FILE");
        opts.optflag("v", "verbose", "print progress information");
        let matches = opts.parse(&args[1..]).map_err(|x| x.to_string())?;

        if matches.opt_present("h") {
            let header = format!("Usage: {} [options] graph.gfa", program);
            eprint!("{}", opts.usage(&header));
            process::exit(0);
        }
        let base = matches.opt_str("b").unwrap_or(String::from(Self::DEFAULT_BASE));
        let output = matches.opt_str("o");
        let verbose = matches.opt_present("v");

        let filename = if let Some(s) = matches.free.first() {
            s.clone()
        } else {
            let header = format!("Usage: {} [options] graph.gfa", program);
            eprint!("{}", opts.usage(&header));
            process::exit(1);
        };

        Ok(Config { filename, base, output, verbose })
    }
}

//-----------------------------------------------------------------------------
