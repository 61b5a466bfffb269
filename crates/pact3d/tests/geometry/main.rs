#[macro_use]
extern crate approx;
extern crate nalgebra as na;

mod ball_ball_query;
mod capsule_support;
mod cuboid_cuboid_epa;
mod manifold_persistence;
mod shape_pair_symmetry;
