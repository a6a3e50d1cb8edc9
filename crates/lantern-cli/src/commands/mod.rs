mod activate;
mod plugins;
mod query;

pub use activate::execute as activate;
pub use plugins::execute as plugins;
pub use query::execute as query;

fn tree_prefix(index: usize, count: usize) -> &'static str {
    if index + 1 == count {
        "└──"
    } else {
        "├──"
    }
}
