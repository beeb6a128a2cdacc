mod arena;
mod handle;
mod node;
mod raw_osrb_tree;
mod size;

pub(crate) use raw_osrb_tree::{Iter, RawOSRBTree};
