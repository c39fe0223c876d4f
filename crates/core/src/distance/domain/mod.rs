pub mod sentence_distance;
