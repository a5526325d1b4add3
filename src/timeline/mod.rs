pub(crate) mod opts;
pub(crate) mod segments;
pub(crate) mod units;
