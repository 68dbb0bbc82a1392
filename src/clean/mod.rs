pub mod filter;
pub mod merge;
pub mod sections;
pub mod stitch;
