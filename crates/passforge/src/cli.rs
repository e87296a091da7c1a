pub mod passforge;
