pub mod corpus;
pub mod verses;
