use clap::{App, load_yaml};

use mascot_color::batch::{format_verdict, solve_problem_set};
use mascot_color::util::{export_results, init_logging, read_mazes, read_params};


/** solves every case of a problem set and prints one line per case */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("mascot_maze.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args);
    init_logging(params.verbose);

    // read instance
    let mazes = match read_mazes(params.inst_filename.as_deref()) {
        Ok(mazes) => mazes,
        Err(why) => {
            tracing::error!("{}", why);
            std::process::exit(1);
        }
    };

    // solve it
    let (verdicts, mut stats) = solve_problem_set(&mazes, params.choice, params.check_result);
    for (i,verdict) in verdicts.iter().enumerate() {
        println!("{}", format_verdict(i+1, verdict));
    }
    stats.inst_name = params.inst_filename.clone().unwrap_or_else(|| "stdin".to_string());
    tracing::info!(
        "solved {} cases ({} impossible) in {:.3} seconds",
        stats.nb_cases, stats.nb_impossible, stats.time_searched
    );

    // export results
    if let Err(why) = export_results(&stats, params.perf_file.as_deref()) {
        tracing::error!("{}", why);
        std::process::exit(1);
    }
}
