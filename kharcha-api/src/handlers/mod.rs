pub mod categorize;
