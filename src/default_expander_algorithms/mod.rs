pub mod lifecycle_algorithm;
pub mod most_pods_algorithm;
pub mod random_algorithm;
