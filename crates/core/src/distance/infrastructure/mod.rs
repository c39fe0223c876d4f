pub mod levenshtein_distance;
