use clap::{App, load_yaml};
use fastrand::Rng;

use mascot_color::generate::{random_circulant_maze, random_maze};
use mascot_color::maze::Maze;
use mascot_color::problem_set::write_problem_set;

/** writes a random problem set on the standard output

# Panics
 - if a numeric argument cannot be parsed
*/
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("random_maze.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let nb_cases:usize = main_args.value_of("cases").unwrap().parse::<usize>()
        .expect("unable to parse the number of cases");
    let n:usize = main_args.value_of("nodes").unwrap().parse::<usize>()
        .expect("unable to parse the number of nodes");
    let rng = match main_args.value_of("seed") {
        None => Rng::new(),
        Some(e) => Rng::with_seed(e.parse::<u64>().expect("unable to parse the seed")),
    };
    assert!(n > 0, "a maze needs at least one node");
    let mazes:Vec<Maze> = (0..nb_cases).map(|_| {
        if main_args.is_present("circulant") {
            random_circulant_maze(n, &rng)
                .unwrap_or_else(|| panic!("no colorable maze with {} nodes", n))
        } else {
            random_maze(n, &rng)
        }
    }).collect();
    print!("{}", write_problem_set(&mazes));
}
