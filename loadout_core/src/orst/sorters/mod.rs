pub mod insertion_sorter;
