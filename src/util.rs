use std::io::Read;

use clap::ArgMatches;
use tracing::Level;

use crate::batch::RunStats;
use crate::error::InputResult;
use crate::maze::Maze;
use crate::problem_set::{read_from_file, read_problem_set};
use crate::solvers::coloring::greedy::ColorChoice;

/** parameters of the solver executable */
#[derive(Debug, Clone)]
pub struct Params {
    /// instance file (None: standard input)
    pub inst_filename: Option<String>,
    /// which free color is given to each node
    pub choice: ColorChoice,
    /// check every coloring before printing it
    pub check_result: bool,
    /// file where the statistics are written
    pub perf_file: Option<String>,
    /// debug logs
    pub verbose: bool,
}

/** reads command line input and returns the parameters of the run

# Panics
 - if the color choice cannot be parsed
*/
pub fn read_params(main_args:&ArgMatches) -> Params {
    let inst_filename = main_args.value_of("input").map(|e| e.to_string());
    let choice = match main_args.value_of("choice") {
        None => ColorChoice::default(),
        Some(e) => e.parse::<ColorChoice>().unwrap_or_else(|why| panic!("{}", why)),
    };
    // read value of the performance logs filename
    let perf_file: Option<String> = main_args.value_of("perf").map(|e| e.to_string());
    Params {
        inst_filename,
        choice,
        check_result: main_args.is_present("check"),
        perf_file,
        verbose: main_args.is_present("verbose"),
    }
}

/** installs a logger writing on the standard error (the standard output holds the answers) */
pub fn init_logging(verbose:bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// reads the problem set from the given file, or from the standard input
pub fn read_mazes(inst_filename:Option<&str>) -> InputResult<Vec<Maze>> {
    match inst_filename {
        Some(filename) => {
            tracing::info!("reading instance: {}...", filename);
            read_from_file(filename)
        },
        None => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            read_problem_set(&content)
        },
    }
}

/// exports the run statistics in a JSON file
pub fn export_results(stats:&RunStats, perf_file:Option<&str>) -> InputResult<()> {
    if let Some(filename) = perf_file {
        tracing::info!("printing perfs in: {}", filename);
        let content = serde_json::to_string(stats)
            .unwrap_or_else(|why| panic!("couldn't serialize the statistics: {}", why));
        std::fs::write(filename, content)?;
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use clap::{App, Arg};

    fn app() -> App<'static, 'static> {
        App::new("test")
            .arg(Arg::with_name("input").index(1))
            .arg(Arg::with_name("choice").long("choice").takes_value(true))
            .arg(Arg::with_name("check").long("check"))
            .arg(Arg::with_name("perf").long("perf").takes_value(true))
            .arg(Arg::with_name("verbose").long("verbose"))
    }

    #[test]
    fn test_read_default_params() {
        let matches = app().get_matches_from(vec!["test"]);
        let params = read_params(&matches);
        assert_eq!(params.inst_filename, None);
        assert_eq!(params.choice, ColorChoice::Lowest);
        assert!(!params.check_result);
        assert!(!params.verbose);
    }

    #[test]
    fn test_read_params() {
        let matches = app().get_matches_from(vec![
            "test", "insts/sample.in", "--choice", "highest", "--check", "--perf", "perf.json"
        ]);
        let params = read_params(&matches);
        assert_eq!(params.inst_filename.as_deref(), Some("insts/sample.in"));
        assert_eq!(params.choice, ColorChoice::Highest);
        assert!(params.check_result);
        assert_eq!(params.perf_file.as_deref(), Some("perf.json"));
    }

    #[test]
    fn test_export_results() {
        let stats = RunStats { inst_name: "sample".to_string(), nb_cases: 4, ..RunStats::default() };
        let filename = std::env::temp_dir().join("mascot_color_perf.json");
        let filename = filename.to_str().unwrap();
        export_results(&stats, Some(filename)).unwrap();
        let value:serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(filename).unwrap()
        ).unwrap();
        assert_eq!(value["inst_name"], "sample");
        assert_eq!(value["nb_cases"], 4);
        assert!(export_results(&stats, None).is_ok());
    }
}
