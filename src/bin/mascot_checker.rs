use clap::{App, load_yaml};

use mascot_color::batch::{check_answers, AnswerCheck};
use mascot_color::error::InputResult;
use mascot_color::maze::Maze;
use mascot_color::problem_set::{read_answers, read_from_file, Answer};

/// reads the problem set and the answer file
fn read_files(inst_filename:&str, sol_filename:&str) -> InputResult<(Vec<Maze>, Vec<(usize, Answer)>)> {
    let mazes = read_from_file(inst_filename)?;
    let answers = read_answers(&std::fs::read_to_string(sol_filename)?)?;
    Ok((mazes, answers))
}

/** checks an answer file against a problem set */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("mascot_checker.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let inst_filename = main_args.value_of("instance").unwrap();
    let sol_filename = main_args.value_of("solution").unwrap();
    // read files
    let (mazes, answers) = match read_files(inst_filename, sol_filename) {
        Ok(res) => res,
        Err(why) => {
            println!("ERROR: {}", why);
            std::process::exit(2);
        }
    };
    if answers.len() > mazes.len() {
        println!("ERROR: {} answers for {} cases", answers.len(), mazes.len());
        std::process::exit(1);
    }
    // call checker
    let mut nb_errors = 0;
    for (i,res_checker) in check_answers(&mazes, &answers).iter().enumerate() {
        let case = i+1;
        match res_checker {
            AnswerCheck::Ok => {},
            AnswerCheck::Missing => {
                println!("ERROR: case #{} has no answer", case);
            },
            AnswerCheck::WrongCaseNumber(k, _) => {
                println!("ERROR: answer #{} found instead of case #{}", k, case);
            },
            AnswerCheck::WronglyImpossible => {
                println!("ERROR: case #{} declared impossible but can be colored", case);
            },
            AnswerCheck::InvalidColoring(reason) => {
                println!("ERROR: case #{} invalid coloring (reason: {:?})", case, reason);
            },
        };
        if *res_checker != AnswerCheck::Ok { nb_errors += 1; }
    }
    if nb_errors > 0 {
        std::process::exit(1);
    }
    println!("OK {} cases", mazes.len());
}
