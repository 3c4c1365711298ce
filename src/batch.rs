use std::time::Instant;

use serde::Serialize;

use crate::maze::{checker, CheckerResult, Maze};
use crate::palette::coloring_to_string;
use crate::problem_set::{Answer, IMPOSSIBLE};
use crate::solvers::coloring::greedy::ColorChoice;
use crate::solvers::coloring::{two_hop_coloring, Verdict};

/** statistics of a run (exported as JSON) */
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    /// instance file name ("stdin" if read from the standard input)
    pub inst_name: String,
    /// number of cases
    pub nb_cases: usize,
    /// number of cases declared impossible
    pub nb_impossible: usize,
    /// total number of nodes over all cases
    pub nb_nodes: usize,
    /// time spent solving (seconds)
    pub time_searched: f32,
}

/// output line of a case (cases are numbered from 1)
pub fn format_verdict(case:usize, verdict:&Verdict) -> String {
    match verdict {
        Verdict::Impossible(_) => format!("Case #{}: {}", case, IMPOSSIBLE),
        Verdict::Colored(colors) => format!("Case #{}: {}", case, coloring_to_string(colors)),
    }
}

/** solves every case of a problem set.

parameters:
 - mazes: cases of the problem set
 - choice: which free color is given to each node
 - check_result: if true, every coloring is checked before being returned

# Panics
 - if check_result is set and a coloring is invalid
*/
pub fn solve_problem_set(
    mazes:&[Maze], choice:ColorChoice, check_result:bool
) -> (Vec<Verdict>, RunStats) {
    let t_start = Instant::now();
    let mut stats = RunStats { nb_cases: mazes.len(), ..RunStats::default() };
    let mut res = Vec::with_capacity(mazes.len());
    for (i,maze) in mazes.iter().enumerate() {
        let t_case = Instant::now();
        maze.display_statistics();
        let verdict = two_hop_coloring(maze, choice);
        match &verdict {
            Verdict::Impossible(witness) => {
                stats.nb_impossible += 1;
                tracing::debug!(case = i+1, witness, "node is its own 2-hop neighbor");
            },
            Verdict::Colored(colors) => {
                if check_result {
                    match checker(maze, colors) {
                        CheckerResult::Ok(nb_colors) => {
                            tracing::debug!(case = i+1, nb_colors, "coloring checked");
                        },
                        r => panic!("case #{}: invalid coloring (reason: {:?})", i+1, r),
                    }
                }
            },
        }
        tracing::debug!(
            case = i+1,
            nb_nodes = maze.n(),
            elapsed = t_case.elapsed().as_secs_f32(),
            "case solved"
        );
        stats.nb_nodes += maze.n();
        res.push(verdict);
    }
    stats.time_searched = t_start.elapsed().as_secs_f32();
    (res, stats)
}


/** result of checking an answer against a case */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerCheck {
    /// the answer is correct
    Ok,
    /// the answer has the number of another case (found, expected)
    WrongCaseNumber(usize, usize),
    /// the answer is missing
    Missing,
    /// IMPOSSIBLE was answered for a maze that can be colored
    WronglyImpossible,
    /// the coloring is rejected by the checker
    InvalidColoring(CheckerResult),
}

/** checks the answers given for a problem set (answers[i] is the answer of case i+1) */
pub fn check_answers(mazes:&[Maze], answers:&[(usize, Answer)]) -> Vec<AnswerCheck> {
    mazes.iter().enumerate().map(|(i,maze)| {
        match answers.get(i) {
            None => AnswerCheck::Missing,
            Some((k,_)) if *k != i+1 => AnswerCheck::WrongCaseNumber(*k, i+1),
            Some((_,Answer::Impossible)) => {
                match crate::maze::self_conflict(maze) {
                    Some(_) => AnswerCheck::Ok,
                    None => AnswerCheck::WronglyImpossible,
                }
            },
            Some((_,Answer::Coloring(colors))) => {
                match checker(maze, colors) {
                    CheckerResult::Ok(_) => AnswerCheck::Ok,
                    r => AnswerCheck::InvalidColoring(r),
                }
            },
        }
    }).collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use fastrand::Rng;

    use crate::generate::random_maze;
    use crate::problem_set::{read_answers, read_from_file};

    #[test]
    fn test_format_verdict() {
        assert_eq!(format_verdict(3, &Verdict::Impossible(0)), "Case #3: IMPOSSIBLE");
        assert_eq!(format_verdict(1, &Verdict::Colored(vec![2,1,0])), "Case #1: DCA");
    }

    #[test]
    fn test_sample() {
        let mazes = read_from_file("insts/sample.in").unwrap();
        let expected = std::fs::read_to_string("insts/sample.out").unwrap();
        let (verdicts, stats) = solve_problem_set(&mazes, ColorChoice::Lowest, true);
        let lines:Vec<String> = verdicts.iter().enumerate()
            .map(|(i,v)| format_verdict(i+1, v))
            .collect();
        assert_eq!(lines, expected.lines().collect::<Vec<&str>>());
        assert_eq!(stats.nb_cases, 4);
        assert_eq!(stats.nb_impossible, 2);
        assert_eq!(stats.nb_nodes, 19);
    }

    #[test]
    fn test_sample_highest() {
        let mazes = read_from_file("insts/sample.in").unwrap();
        let expected = std::fs::read_to_string("insts/sample_highest.out").unwrap();
        let (verdicts, _) = solve_problem_set(&mazes, ColorChoice::Highest, true);
        let lines:Vec<String> = verdicts.iter().enumerate()
            .map(|(i,v)| format_verdict(i+1, v))
            .collect();
        assert_eq!(lines, expected.lines().collect::<Vec<&str>>());
    }

    #[test]
    fn test_answers_are_accepted() {
        let mazes = read_from_file("insts/sample.in").unwrap();
        for filename in ["insts/sample.out", "insts/sample_highest.out"].iter() {
            let answers = read_answers(&std::fs::read_to_string(filename).unwrap()).unwrap();
            assert!(check_answers(&mazes, &answers).iter().all(|r| *r == AnswerCheck::Ok));
        }
    }

    #[test]
    fn test_wrong_answers() {
        let mazes = read_from_file("insts/sample.in").unwrap();
        let answers = read_answers(
            "Case #1: IMPOSSIBLE\nCase #3: IMPOSSIBLE\nCase #3: IMPOSSIBLE\nCase #4: AAAAAAAAAAAAA"
        ).unwrap();
        assert_eq!(check_answers(&mazes, &answers), vec![
            AnswerCheck::Ok,
            AnswerCheck::WrongCaseNumber(3, 2),
            AnswerCheck::WronglyImpossible,
            AnswerCheck::InvalidColoring(CheckerResult::ConflictingNodes(0, 1)),
        ]);
        assert_eq!(check_answers(&mazes, &answers[..1])[1], AnswerCheck::Missing);
    }

    #[test]
    fn test_random_problem_set() {
        let rng = Rng::with_seed(1);
        let mazes:Vec<Maze> = (0..200).map(|i| random_maze(10 + i, &rng)).collect();
        let (verdicts, stats) = solve_problem_set(&mazes, ColorChoice::Lowest, true);
        assert_eq!(verdicts.len(), 200);
        for (maze,verdict) in mazes.iter().zip(verdicts.iter()) {
            match verdict {
                Verdict::Impossible(w) => assert!(maze.proximity(*w).contains(w)),
                Verdict::Colored(colors) => {
                    assert!(matches!(checker(maze, colors), CheckerResult::Ok(_)));
                },
            }
        }
        assert!(stats.nb_impossible <= 200);
    }

    #[test]
    fn test_solving_is_deterministic() {
        let rng = Rng::with_seed(8);
        let mazes:Vec<Maze> = (0..20).map(|_| random_maze(300, &rng)).collect();
        let (a, _) = solve_problem_set(&mazes, ColorChoice::Lowest, false);
        let (b, _) = solve_problem_set(&mazes, ColorChoice::Lowest, false);
        assert_eq!(a, b);
    }
}
