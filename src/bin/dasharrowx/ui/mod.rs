pub mod arrow_counter;
