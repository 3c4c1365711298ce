use nom::IResult;
use nom::bytes::complete::tag;
use nom::character::complete::{alpha1, digit1, multispace0, space0};
use nom::combinator::map_res;
use nom::multi::count;
use nom::sequence::preceded;

use crate::error::{InputError, InputResult};
use crate::maze::{ColorId, Maze, NodeId};
use crate::palette::string_to_coloring;

/// word printed instead of a coloring when none exists
pub const IMPOSSIBLE:&str = "IMPOSSIBLE";

/** answer given for a case in an answer file */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// the case was declared impossible
    Impossible,
    /// colors[i]: color of node i
    Coloring(Vec<ColorId>),
}


/// reads an unsigned integer, skipping the whitespace before it
fn read_integer(s:&str) -> IResult<&str, usize> {
    preceded(multispace0, map_res(digit1, |d:&str| d.parse::<usize>()))(s)
}

/// reads n successors (1-indexed in the input) and returns them 0-indexed
fn read_successors<'a>(
    s:&'a str, case:usize, n:usize, what:&'static str
) -> InputResult<(&'a str, Vec<NodeId>)> {
    let (remaining, targets) = count(read_integer, n)(s)
        .map_err(|_| InputError::Truncated { case, what })?;
    for (i,target) in targets.iter().enumerate() {
        if *target == 0 || *target > n {
            return Err(InputError::SuccessorOutOfRange { case, node: i+1, target: *target, n });
        }
    }
    Ok((remaining, targets.iter().map(|t| t-1).collect()))
}

/// reads a single case: n, then the n left successors, then the n right successors
fn read_case(s:&str, case:usize) -> InputResult<(&str, Maze)> {
    let (remaining, n) = read_integer(s)
        .map_err(|_| InputError::Truncated { case, what: "the number of nodes" })?;
    if n == 0 {
        return Err(InputError::EmptyMaze { case });
    }
    let (remaining, left) = read_successors(remaining, case, n, "left successors")?;
    let (remaining, right) = read_successors(remaining, case, n, "right successors")?;
    Ok((remaining, Maze::new(left, right)))
}

/** reads a problem set (number of cases, followed by the cases) */
pub fn read_problem_set(s:&str) -> InputResult<Vec<Maze>> {
    let (mut remaining, nb_cases) = read_integer(s)
        .map_err(|_| InputError::MissingCaseCount)?;
    let mut res = Vec::new();
    for case in 1..=nb_cases {
        let (tmp, maze) = read_case(remaining, case)?;
        remaining = tmp;
        res.push(maze);
    }
    match remaining.split_whitespace().next() {
        None => Ok(res),
        Some(token) => Err(InputError::TrailingData(token.to_string())),
    }
}

/// reads a problem set from a file
pub fn read_from_file(filename:&str) -> InputResult<Vec<Maze>> {
    let content = std::fs::read_to_string(filename)?;
    read_problem_set(&content)
}

/** writes a problem set in the input format (successors are 1-indexed) */
pub fn write_problem_set(mazes:&[Maze]) -> String {
    let mut res = format!("{}\n", mazes.len());
    for maze in mazes {
        let n = maze.n();
        let left:Vec<String> = (0..n).map(|u| (maze.left(u)+1).to_string()).collect();
        let right:Vec<String> = (0..n).map(|u| (maze.right(u)+1).to_string()).collect();
        res += format!("{}\n{}\n{}\n", n, left.join(" "), right.join(" ")).as_str();
    }
    res
}


/// reads "Case #k: WORD", returns (k, WORD)
fn read_answer_line(s:&str) -> IResult<&str, (usize, &str)> {
    let (s, _) = tag("Case #")(s)?;
    let (s, k) = map_res(digit1, |d:&str| d.parse::<usize>())(s)?;
    let (s, _) = tag(":")(s)?;
    let (s, _) = space0(s)?;
    let (s, word) = alpha1(s)?;
    let (s, _) = space0(s)?;
    Ok((s, (k, word)))
}

/** reads an answer file. Returns the (case number, answer) pairs in the order of the file */
pub fn read_answers(s:&str) -> InputResult<Vec<(usize, Answer)>> {
    let mut res = Vec::new();
    for (i,line) in s.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() { continue; }
        let malformed = || InputError::MalformedAnswer { line: i+1, content: line.to_string() };
        let (k, word) = match read_answer_line(line) {
            Ok(("", parsed)) => parsed,
            _ => return Err(malformed()),
        };
        let answer = if word == IMPOSSIBLE {
            Answer::Impossible
        } else {
            Answer::Coloring(string_to_coloring(word).ok_or_else(malformed)?)
        };
        res.push((k, answer));
    }
    Ok(res)
}
