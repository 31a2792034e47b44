//! Domain services - pure logic with no infrastructure dependencies

pub mod flow;
