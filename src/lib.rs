pub mod assist;
pub mod cli;
pub mod derive;
pub mod io;
pub mod model;
pub mod store;
pub mod util;
