//! Binary that takes a series-parallel tree file and a weight file, computes
//! a maximum weight independent set and writes the solution to standart out.

use std::env;
use std::error;
use std::fs::File;
use std::io::{self, BufReader};

use sp_mwis::{
    sp_tree::SpTree,
    nice_tree::to_nice_tree,
    graph::UGraph,
    mwis_instance::MwisInstance,
    cust_error::ProcessingError,
};

pub fn main() -> Result<(), Box<dyn error::Error>> {
    let mut args = env::args().skip(1);
    let (tree_path, weight_path) = match (args.next(), args.next()) {
        (Some(tree), Some(weights)) => (tree, weights),
        _ => {
            return Err(Box::new(ProcessingError::InvalidParameter(
                "Usage: exact <sp-tree file> <weight file>".to_owned()
            )))
        },
    };
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let (root, next_vertex) = SpTree::read_sp(BufReader::new(File::open(tree_path)?))?;
    let root = to_nice_tree(root);
    let graph = UGraph::from_sp_tree(&root, next_vertex);
    let weights = MwisInstance::read_weights(BufReader::new(File::open(weight_path)?), next_vertex)?;
    let ins = MwisInstance::new(graph, weights)?;
    let solution = ins.solve();

    // Validate
    if !ins.validate_solution(&solution) {
        return Err(Box::new(ProcessingError::InvalidSolution(
            "Backtracked set does not match the reported optimum.".to_owned()
        )));
    }

    MwisInstance::write_solution(&solution, &mut stdout)?;
    Ok(())
}
