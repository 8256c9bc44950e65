// Board dimensions, shared by the grid storage and the lookup tables.
pub(crate) const N_CELLS: usize = 81;
pub(crate) const N_HOUSES: usize = 27;
