pub mod fortune_data;
