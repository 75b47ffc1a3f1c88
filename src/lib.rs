#[macro_use]
pub mod macros;

pub mod chart;
pub mod client;
pub mod cricbuzz;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod profile;
pub mod report;
pub mod resolver;
pub mod schema;
pub mod site;
