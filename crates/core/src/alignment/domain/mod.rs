pub mod aligner;
pub mod aligner_config;
pub mod boundary_classifier;
pub mod gap_reporter;
pub mod sentence_alignment;
