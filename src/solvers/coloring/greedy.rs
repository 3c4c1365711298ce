use std::str::FromStr;

use bit_set::BitSet;

use crate::maze::{ColorId, NodeId};
use crate::palette::NB_COLORS;
use crate::solvers::coloring::proximity::ProximityTable;

/** which free color is given to a node */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    /// smallest free color
    Lowest,
    /// largest free color
    Highest,
}

impl Default for ColorChoice {
    fn default() -> Self { ColorChoice::Lowest }
}

impl FromStr for ColorChoice {
    type Err = String;

    fn from_str(s:&str) -> Result<Self, Self::Err> {
        match s {
            "lowest" => Ok(ColorChoice::Lowest),
            "highest" => Ok(ColorChoice::Highest),
            _ => Err(format!("unknown color choice {} (expected lowest or highest)", s)),
        }
    }
}

impl ColorChoice {
    /// picks a color that is not forbidden (None if every color is forbidden)
    pub fn pick(&self, forbidden:&BitSet) -> Option<ColorId> {
        match self {
            ColorChoice::Lowest => (0..NB_COLORS).find(|c| !forbidden.contains(*c)),
            ColorChoice::Highest => (0..NB_COLORS).rev().find(|c| !forbidden.contains(*c)),
        }
    }
}

/** greedy coloring of the nodes following the given order.
For each node x:
    1. forbid the colors of the already colored nodes in the proximity set of x
    2. give x a free color
    3. forbid the color of x for every node in its proximity set

At step 2, at most 6 colors come from the proximity set of x and, thanks to the degeneracy
order, at most 6 from the nodes colored before x that contain x in their proximity set.
12 colors at most are forbidden, so one of the 13 colors is always free.

# Panics
 - if no color is free for a node (the order is not a degeneracy order)
 - if the order does not contain every node
*/
pub fn greedy_coloring(table:&ProximityTable, order:&[NodeId], choice:ColorChoice) -> Vec<ColorId> {
    let n = table.n();
    let mut colors:Vec<Option<ColorId>> = vec![None ; n]; // colors[v] -> color assigned to v
    let mut bad_colors:Vec<BitSet> = vec![BitSet::with_capacity(NB_COLORS) ; n];
    for x in order {
        debug_assert!(colors[*x].is_none(), "node {} colored twice", x);
        for y in table.get(*x).iter() {
            if let Some(c) = colors[*y] {
                bad_colors[*x].insert(c);
            }
        }
        let color = choice.pick(&bad_colors[*x]).unwrap_or_else(|| panic!(
            "greedy_coloring: no free color for node {} (forbidden: {:?})", x, bad_colors[*x]
        ));
        colors[*x] = Some(color);
        for y in table.get(*x).iter() {
            bad_colors[*y].insert(color);
        }
    }
    colors.iter().enumerate()
        .map(|(v,c)| c.unwrap_or_else(|| panic!("greedy_coloring: node {} not in the order", v)))
        .collect()
}
